//! Macros for declaring state catalogs and transition tables.

/// Generate a fixed catalog enum whose variants map onto string state names.
///
/// The generated type gets `name()`, an `ALL` constant in declaration order,
/// `FromStr` (failing with [`FsmError::InvalidState`](crate::FsmError)) and `Display`.
macro_rules! state_catalog {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $label:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $label)]
                $variant
            ),*
        }

        impl $name {
            /// Every catalog member, in declaration order.
            pub const ALL: &'static [$name] = &[$(Self::$variant),*];

            /// The state name as it appears in transition tables.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),*
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::FsmError;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                match s {
                    $($label => Ok(Self::$variant),)*
                    _ => Err($crate::error::FsmError::invalid_state(s)),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

pub(crate) use state_catalog;

/// Build an [`FsmConfig`](crate::config::FsmConfig) from a declarative table.
///
/// States, events and targets are written as identifiers. A state listed with
/// an empty body is still part of the configuration.
///
/// # Example
///
/// ```
/// use rewind_fsm::transition_table;
///
/// let config = transition_table! {
///     initial: normal,
///     normal { eat => hungry, sleep => sleeping },
///     hungry { eat => busy },
///     sleeping {},
/// };
///
/// assert_eq!(config.initial, "normal");
/// assert_eq!(config.target("normal", "sleep"), Some("sleeping"));
/// assert_eq!(config.state_names().count(), 3);
/// ```
#[macro_export]
macro_rules! transition_table {
    (
        initial: $initial:ident
        $(, $state:ident { $($event:ident => $target:ident),* $(,)? })*
        $(,)?
    ) => {{
        #[allow(unused_mut)]
        let mut config = $crate::config::FsmConfig::new(stringify!($initial));
        $(
            config.add_state(stringify!($state));
            $(
                config.add_transition(stringify!($state), stringify!($event), stringify!($target));
            )*
        )*
        config
    }};
}
