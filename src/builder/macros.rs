//! Macros for declaring closed state enumerations.

/// Declare a closed, copyable enumeration and implement the
/// [`State`](crate::core::State) trait for it.
///
/// Variants listed under `final:` are reported as terminal by
/// [`State::is_final`](crate::core::State::is_final).
///
/// # Example
///
/// ```
/// use approach_signal::state_enum;
/// use approach_signal::core::State;
///
/// state_enum! {
///     pub enum Barrier {
///         Lowered,
///         Raising,
///         Raised,
///     }
///     final: [Lowered, Raised]
/// }
///
/// assert_eq!(Barrier::Raising.name(), "Raising");
/// assert!(!Barrier::Raising.is_final());
/// assert!(Barrier::Raised.is_final());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Debug,
            serde::Serialize,
            serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),*];
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            #[allow(unreachable_patterns)]
            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::State::name(self))
            }
        }
    };
}
