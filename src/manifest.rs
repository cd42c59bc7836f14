//! Code manifests — TOML snapshots pinning a policy's names and numbers.
//!
//! `format()` embeds the decimal value of a code, so renumbering a code
//! changes every rendered message. A manifest checked into the consuming
//! repository records the expected values; [`CodeManifest::verify`] fails
//! when the policy drifts from it.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::{Error, Result};
use crate::policy::ErrorPolicy;

/// Expected shape of one error domain, parsed from TOML.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct CodeManifest {
    /// Domain label, compared against [`ErrorPolicy::DOMAIN`].
    pub domain: String,
    /// Name of the success code.
    pub success: String,
    /// Name of the default error code.
    pub default_error: String,
    /// Code name to numeric value.
    #[serde(default)]
    pub codes: BTreeMap<String, i64>,
}

impl CodeManifest {
    /// Parse and validate a manifest from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns `Error::Manifest` if parsing fails, if `success` or
    /// `default_error` is not listed under `codes`, or if two codes share a
    /// numeric value.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let manifest: Self = toml::from_str(raw)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Snapshot the current state of policy `P`.
    #[must_use]
    pub fn of<P: ErrorPolicy>() -> Self {
        Self {
            domain: P::DOMAIN.to_owned(),
            success: P::code_to_string(P::SUCCESS).to_owned(),
            default_error: P::code_to_string(P::DEFAULT_ERROR).to_owned(),
            codes: P::CODES
                .iter()
                .map(|code| (P::code_to_string(*code).to_owned(), P::numeric_value(*code)))
                .collect(),
        }
    }

    /// Render the manifest as TOML.
    ///
    /// # Errors
    ///
    /// Returns `Error::Manifest` if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Check that policy `P` still matches this manifest.
    ///
    /// Every mismatch is logged; the returned error lists all of them.
    ///
    /// # Errors
    ///
    /// Returns `Error::Manifest` when the domain label, the success or
    /// default error name, or any code name or number differs.
    pub fn verify<P: ErrorPolicy>(&self) -> Result<()> {
        let current = Self::of::<P>();
        let mut mismatches = Vec::new();

        if current.domain != self.domain {
            mismatches.push(format!(
                "domain is {} but manifest expects {}",
                current.domain, self.domain
            ));
        }
        if current.success != self.success {
            mismatches.push(format!(
                "success code is {} but manifest expects {}",
                current.success, self.success
            ));
        }
        if current.default_error != self.default_error {
            mismatches.push(format!(
                "default error is {} but manifest expects {}",
                current.default_error, self.default_error
            ));
        }

        for (name, value) in &current.codes {
            match self.codes.get(name) {
                None => mismatches.push(format!("code {name} = {value} is not in the manifest")),
                Some(expected) if expected != value => mismatches.push(format!(
                    "code {name} is {value} but manifest expects {expected}"
                )),
                Some(_) => {}
            }
        }

        for (name, expected) in &self.codes {
            if !current.codes.contains_key(name) {
                mismatches.push(format!("code {name} = {expected} is no longer declared"));
            }
        }

        if mismatches.is_empty() {
            return Ok(());
        }

        for mismatch in &mismatches {
            warn!(domain = P::DOMAIN, %mismatch, "policy does not match code manifest");
        }
        Err(Error::Manifest(mismatches.join("; ")))
    }

    fn validate(&self) -> Result<()> {
        for (field, name) in [("success", &self.success), ("default_error", &self.default_error)] {
            if !self.codes.contains_key(name) {
                return Err(Error::Manifest(format!(
                    "{field} code {name} is not listed under codes"
                )));
            }
        }

        let mut seen = BTreeSet::new();
        for (name, value) in &self.codes {
            if !seen.insert(*value) {
                return Err(Error::Manifest(format!(
                    "code {name} reuses numeric value {value}"
                )));
            }
        }

        Ok(())
    }
}
