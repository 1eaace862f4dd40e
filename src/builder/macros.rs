//! Macros for declaring page enums.

/// Declare a unit-variant enum and implement `State` for it.
///
/// Variants are listed in flow order; the generated `ALL` constant keeps
/// that order so callers can walk the flow without repeating it.
///
/// # Example
///
/// ```
/// use talent_wizard::state_enum;
/// use talent_wizard::core::State;
///
/// state_enum! {
///     pub enum Checkout {
///         Cart,
///         Payment,
///         Receipt,
///     }
///     final: [Receipt]
/// }
///
/// assert_eq!(Checkout::ALL.len(), 3);
/// assert!(Checkout::Receipt.is_final());
/// assert_eq!(Checkout::Payment.name(), "Payment");
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
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            #[allow(dead_code)]
            $vis const ALL: &'static [$name] = &[$($name::$variant),*];
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }
        }
    };
}
