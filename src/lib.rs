//! fieldstrip: remove string-valued fields from object-literal-like text
//!
//! Documents are never parsed. A field occurrence is matched textually and
//! deleted; every byte outside a match is preserved in place. Stripping is
//! idempotent.
//!
//! # Example
//!
//! ```
//! use fieldstrip::FieldStripper;
//!
//! let stripper = FieldStripper::new();
//! let out = stripper.strip_str(r#"{"id": 1, "source": "web", "name": "x"}"#);
//! assert_eq!(out.text, r#"{"id": 1, "name": "x"}"#);
//! ```

pub mod document;
mod error;
pub mod pattern;
mod stripper;

pub use document::{Document, WriteMode};
pub use error::{StripError, StripResult};
pub use pattern::{FieldOccurrence, FieldPattern, Stripped, DEFAULT_FIELD};
pub use stripper::{strip, FieldStripper, StripReport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
