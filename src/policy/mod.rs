//! Error policies — the code space a [`CodedResult`](crate::CodedResult) ranges over.
//!
//! Each error domain supplies one [`ErrorPolicy`] implementation, usually
//! through the [`error_policy!`](crate::error_policy) macro. The policy is a
//! type parameter, so every call site dispatches statically.

use std::fmt::Debug;
use std::hash::Hash;

mod declare;

/// Capability set describing one error domain.
///
/// `Code` is expected to be a closed enumeration so that
/// [`code_to_string`](Self::code_to_string) can be exhaustive.
pub trait ErrorPolicy {
    /// Domain error identifiers.
    type Code: Copy + Eq + Hash + Debug + Send + Sync + 'static;

    /// Short label for the domain, used in logs and manifests.
    const DOMAIN: &'static str = "unnamed";

    /// The code meaning "no error".
    const SUCCESS: Self::Code;

    /// The code carried by a default-constructed result.
    const DEFAULT_ERROR: Self::Code;

    /// Every code of the enumeration, in declaration order.
    const CODES: &'static [Self::Code];

    /// Stable display name of `code`.
    fn code_to_string(code: Self::Code) -> &'static str;

    /// Underlying integer of `code`, rendered in decimal by `format()`.
    fn numeric_value(code: Self::Code) -> i64;

    /// Look up the code whose numeric value is `value`.
    fn from_numeric(value: i64) -> Option<Self::Code> {
        Self::CODES
            .iter()
            .copied()
            .find(|code| Self::numeric_value(*code) == value)
    }
}
