//! `CodedResult` — an error code plus the diagnostic trail gathered on the way up.
//!
//! A result is built once with its code and then only its message can grow.
//! Messages are descriptive only: equality, hashing and the success check
//! look at the code alone.

use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use serde::de::{self, Deserializer};
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::errors::Error;
use crate::policy::ErrorPolicy;

/// Outcome of an operation in the error domain described by `P`.
///
/// Rendering through [`format`](Self::format) or `Display`:
///
/// - success: `Success`
/// - failure without message: `Code <N>: <Name>`
/// - failure with message: `Code <N>: <Name> (<message>)`
pub struct CodedResult<P: ErrorPolicy> {
    code: P::Code,
    message: String,
    policy: PhantomData<fn() -> P>,
}

impl<P: ErrorPolicy> CodedResult<P> {
    /// Result carrying `code` and an empty message.
    #[must_use]
    pub fn new(code: P::Code) -> Self {
        Self {
            code,
            message: String::new(),
            policy: PhantomData,
        }
    }

    /// A fresh successful result.
    #[must_use]
    pub fn success() -> Self {
        Self::new(P::SUCCESS)
    }

    /// Translate `source` into this domain, mapping any success to `P::SUCCESS`.
    ///
    /// See [`translate_with`](Self::translate_with).
    #[must_use]
    pub fn translate<Q: ErrorPolicy>(source: &CodedResult<Q>, on_failure: P::Code) -> Self {
        Self::translate_with(source, on_failure, P::SUCCESS)
    }

    /// Translate `source`, possibly from another domain, into this one.
    ///
    /// A failing source yields `on_failure` with the source's rendered form
    /// as the message. A succeeding source yields `on_success` with an empty
    /// message.
    #[must_use]
    pub fn translate_with<Q: ErrorPolicy>(
        source: &CodedResult<Q>,
        on_failure: P::Code,
        on_success: P::Code,
    ) -> Self {
        if source.is_success() {
            return Self::new(on_success);
        }

        let rendered = source.format();
        trace!(
            from = Q::DOMAIN,
            to = P::DOMAIN,
            source = %rendered,
            "translating failure across error domains"
        );
        Self {
            code: on_failure,
            message: rendered,
            policy: PhantomData,
        }
    }

    /// Collapse a std result: `Ok` becomes success, `Err` becomes `on_failure`
    /// with the error's display text as the message.
    #[must_use]
    pub fn from_outcome<T, E: Display>(
        outcome: std::result::Result<T, E>,
        on_failure: P::Code,
    ) -> Self {
        match outcome {
            Ok(_) => Self::success(),
            Err(err) => Self::new(on_failure).with(&err.to_string()),
        }
    }

    /// Result whose code has the numeric value `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownCode`] when `value` names no code of `P`.
    pub fn from_numeric(value: i64) -> crate::Result<Self> {
        P::from_numeric(value)
            .map(Self::new)
            .ok_or(Error::UnknownCode {
                domain: P::DOMAIN,
                value,
            })
    }

    /// `true` when the code is `P::SUCCESS`.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.code == P::SUCCESS
    }

    /// `true` when the code is anything but `P::SUCCESS`.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The error code.
    #[must_use]
    pub fn code(&self) -> P::Code {
        self.code
    }

    /// The accumulated message, verbatim.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Compare the code against a bare `code`, ignoring the message.
    #[must_use]
    pub fn is_code(&self, code: P::Code) -> bool {
        self.code == code
    }

    /// Append `text` to the message.
    pub fn append(&mut self, text: &str) -> &mut Self {
        self.message.push_str(text);
        self
    }

    /// Append `": "` followed by the rendered form of `other`.
    pub fn append_result<Q: ErrorPolicy>(&mut self, other: &CodedResult<Q>) -> &mut Self {
        self.message.push_str(": ");
        self.message.push_str(&other.format());
        self
    }

    /// By-value form of [`append`](Self::append).
    #[must_use]
    pub fn with(mut self, text: &str) -> Self {
        self.append(text);
        self
    }

    /// By-value form of [`append_result`](Self::append_result).
    #[must_use]
    pub fn with_result<Q: ErrorPolicy>(mut self, other: &CodedResult<Q>) -> Self {
        self.append_result(other);
        self
    }

    /// Canonical text rendering, identical to the `Display` output.
    #[must_use]
    pub fn format(&self) -> String {
        self.to_string()
    }

    /// `Ok(())` on success, `Err(self)` on failure, so `?` can propagate it.
    ///
    /// # Errors
    ///
    /// Returns the result itself when it carries a failure code.
    pub fn into_result(self) -> std::result::Result<(), Self> {
        if self.is_success() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Emit the outcome of `operation` through `tracing`.
    pub fn log_outcome(&self, operation: &str) {
        if self.is_success() {
            debug!(domain = P::DOMAIN, operation, "operation succeeded");
        } else {
            warn!(
                domain = P::DOMAIN,
                code = P::numeric_value(self.code),
                name = P::code_to_string(self.code),
                operation,
                result = %self,
                "operation failed"
            );
        }
    }
}

impl<P: ErrorPolicy> Default for CodedResult<P> {
    fn default() -> Self {
        Self::new(P::DEFAULT_ERROR)
    }
}

impl<P: ErrorPolicy> Clone for CodedResult<P> {
    fn clone(&self) -> Self {
        Self {
            code: self.code,
            message: self.message.clone(),
            policy: PhantomData,
        }
    }
}

impl<P: ErrorPolicy> PartialEq for CodedResult<P> {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl<P: ErrorPolicy> Eq for CodedResult<P> {}

impl<P: ErrorPolicy> Hash for CodedResult<P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl<P: ErrorPolicy> Display for CodedResult<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_success() {
            return f.write_str("Success");
        }
        write!(
            f,
            "Code {}: {}",
            P::numeric_value(self.code),
            P::code_to_string(self.code)
        )?;
        if !self.message.is_empty() {
            write!(f, " ({})", self.message)?;
        }
        Ok(())
    }
}

impl<P: ErrorPolicy> Debug for CodedResult<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodedResult")
            .field("domain", &P::DOMAIN)
            .field("code", &self.code)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl<P: ErrorPolicy> std::error::Error for CodedResult<P> {}

/// `write!` appends to the message, like [`append`](CodedResult::append).
impl<P: ErrorPolicy> fmt::Write for CodedResult<P> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.message.push_str(s);
        Ok(())
    }
}

impl<P: ErrorPolicy> Serialize for CodedResult<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("CodedResult", 3)?;
        state.serialize_field("code", &P::numeric_value(self.code))?;
        state.serialize_field("name", P::code_to_string(self.code))?;
        state.serialize_field("message", &self.message)?;
        state.end()
    }
}

/// Wire shape accepted on input; `name` is derived from the code and ignored.
#[derive(Deserialize)]
struct WireResult {
    code: i64,
    #[serde(default)]
    message: String,
}

impl<'de, P: ErrorPolicy> Deserialize<'de> for CodedResult<P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let wire = WireResult::deserialize(deserializer)?;
        let mut result = Self::from_numeric(wire.code).map_err(de::Error::custom)?;
        result.message = wire.message;
        Ok(result)
    }
}
