//! Error types for the fallible helpers around [`CodedResult`](crate::CodedResult).

use std::fmt::{Display, Formatter};

/// Shared crate result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures raised outside the coded result itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A numeric value does not name any code of the policy.
    UnknownCode {
        /// Domain label of the policy that was searched.
        domain: &'static str,
        /// The rejected numeric value.
        value: i64,
    },
    /// Code manifest parsing failure or mismatch with a policy.
    Manifest(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCode { domain, value } => {
                write!(f, "unknown code: {value} is not declared in domain {domain}")
            }
            Self::Manifest(msg) => write!(f, "manifest: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::Manifest(format!("invalid manifest: {err}"))
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Self::Manifest(format!("failed to render manifest: {err}"))
    }
}
