//! Mood Cycle
//!
//! This demo drives a small mood machine through events, direct jumps and
//! history navigation.
//!
//! Key concepts:
//! - Declarative transition tables via `transition_table!`
//! - Event-driven transitions versus catalog-checked jumps
//! - Undo/redo over the recorded history
//!
//! Run with: RUST_LOG=debug cargo run --example mood_cycle

use rewind_fsm::{transition_table, Fsm, FsmError};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), FsmError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Mood Cycle Example ===\n");

    let config = transition_table! {
        initial: normal,
        normal { study => busy, get_hungry => hungry, get_tired => sleeping },
        busy { get_tired => sleeping, get_hungry => hungry },
        hungry { eat => normal },
        sleeping { get_up => normal, get_hungry => hungry },
    };

    let mut fsm = Fsm::new(Some(config))?;
    println!("Initial state: {}", fsm.state());
    println!("States reacting to 'get_hungry': {:?}", fsm.states(Some("get_hungry")));

    for event in ["study", "get_tired", "get_hungry", "eat"] {
        fsm.trigger(event)?;
        println!("{event:>12} -> {}", fsm.state());
    }

    match fsm.trigger("eat") {
        Ok(()) => println!("unexpected: ate twice"),
        Err(err) => println!("Rejected: {err}"),
    }

    println!("\nWalking back through history:");
    while fsm.undo() {
        println!("  undo -> {}", fsm.state());
    }

    println!("\nAnd forward again:");
    while fsm.redo() {
        println!("  redo -> {}", fsm.state());
    }

    fsm.change_state("sleeping")?;
    println!("\nJumped to: {}", fsm.state());
    if let Err(err) = fsm.change_state("dancing") {
        println!("Rejected: {err}");
    }

    println!("History: {:?}", fsm.history().path());
    fsm.clear_history();
    println!("After clear: {:?}", fsm.history().path());

    fsm.reset();
    println!("After reset: {} (can undo: {})", fsm.state(), fsm.can_undo());

    println!("\n=== Example Complete ===");
    Ok(())
}
