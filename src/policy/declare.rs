//! `error_policy!` — declares a policy, its code enum and the glue around them.

/// Declare an error domain.
///
/// Expands to a unit struct implementing [`ErrorPolicy`](crate::ErrorPolicy),
/// a `#[repr(i64)]` code enum with the given discriminants, `Display` for the
/// code (its name), `From<Code>` for the matching
/// [`CodedResult`](crate::CodedResult), and equality in both directions
/// between the code and the result.
///
/// ```
/// coded_result::error_policy! {
///     /// Modem control failures.
///     pub struct ModemPolicy: ModemCode {
///         domain: "modem",
///         success: Ready,
///         default_error: Unknown,
///         codes: {
///             Ready = 0 => "Ready",
///             Unknown = 1 => "Unknown",
///             /// The modem did not answer in time.
///             Timeout = 2 => "Timeout",
///         }
///     }
/// }
///
/// let result = coded_result::CodedResult::<ModemPolicy>::from(ModemCode::Timeout);
/// assert_eq!(result.format(), "Code 2: Timeout");
/// assert!(result == ModemCode::Timeout);
/// ```
#[macro_export]
macro_rules! error_policy {
    (
        $(#[$policy_meta:meta])*
        $vis:vis struct $policy:ident : $code:ident {
            domain: $domain:literal,
            success: $success:ident,
            default_error: $default_error:ident,
            codes: {
                $(
                    $(#[$variant_meta:meta])*
                    $variant:ident = $value:literal => $name:literal
                ),+ $(,)?
            } $(,)?
        }
    ) => {
        $(#[$policy_meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $policy;

        #[doc = concat!("Codes of the `", $domain, "` error domain.")]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(i64)]
        $vis enum $code {
            $(
                $(#[$variant_meta])*
                $variant = $value,
            )+
        }

        impl $crate::ErrorPolicy for $policy {
            type Code = $code;

            const DOMAIN: &'static str = $domain;
            const SUCCESS: $code = $code::$success;
            const DEFAULT_ERROR: $code = $code::$default_error;
            const CODES: &'static [$code] = &[$($code::$variant),+];

            fn code_to_string(code: $code) -> &'static str {
                match code {
                    $($code::$variant => $name,)+
                }
            }

            fn numeric_value(code: $code) -> i64 {
                code as i64
            }
        }

        impl ::core::fmt::Display for $code {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(<$policy as $crate::ErrorPolicy>::code_to_string(*self))
            }
        }

        impl ::core::convert::From<$code> for $crate::CodedResult<$policy> {
            fn from(code: $code) -> Self {
                Self::new(code)
            }
        }

        impl ::core::cmp::PartialEq<$code> for $crate::CodedResult<$policy> {
            fn eq(&self, other: &$code) -> bool {
                self.is_code(*other)
            }
        }

        impl ::core::cmp::PartialEq<$crate::CodedResult<$policy>> for $code {
            fn eq(&self, other: &$crate::CodedResult<$policy>) -> bool {
                other.is_code(*self)
            }
        }
    };
}
