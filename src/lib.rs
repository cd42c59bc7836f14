#![forbid(unsafe_code)]

//! `coded-result` — policy-parameterised result codes with a diagnostic trail.
//!
//! A [`CodedResult`] carries one code from an [`ErrorPolicy`] and a message
//! that grows as the result travels up a call chain. Lower layers'
//! failures can be translated into higher-level codes while keeping their
//! rendering as embedded context.
//!
//! ```
//! use coded_result::{error_policy, CodedResult};
//!
//! error_policy! {
//!     /// Link layer failures.
//!     pub struct LinkPolicy: LinkCode {
//!         domain: "link",
//!         success: Up,
//!         default_error: Down,
//!         codes: {
//!             Up = 0 => "Up",
//!             Down = 1 => "Down",
//!         }
//!     }
//! }
//!
//! error_policy! {
//!     /// Call control failures.
//!     pub struct CallPolicy: CallCode {
//!         domain: "call",
//!         success: Connected,
//!         default_error: Failed,
//!         codes: {
//!             Connected = 100 => "Connected",
//!             Failed = 101 => "Failed",
//!         }
//!     }
//! }
//!
//! let link = CodedResult::<LinkPolicy>::new(LinkCode::Down).with("no carrier");
//! let call = CodedResult::<CallPolicy>::translate(&link, CallCode::Failed).with(", giving up");
//!
//! assert_eq!(call.format(), "Code 101: Failed (Code 1: Down (no carrier), giving up)");
//! assert!(call.is_failure());
//! ```

pub mod errors;
pub mod manifest;
pub mod outcome;
pub mod policy;

pub use errors::{Error, Result};
pub use manifest::CodeManifest;
pub use outcome::CodedResult;
pub use policy::ErrorPolicy;
