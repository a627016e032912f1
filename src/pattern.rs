//! Field occurrence matching
//!
//! A field occurrence is the text span `,?\s*"<field>":\s*"<value>"`: an
//! optional leading comma, any whitespace (newlines included), the quoted
//! key, a colon, more whitespace, and a double-quoted value containing no
//! `"`. Everything outside those spans is treated as opaque text.
//!
//! Only the leading comma is consumed. When the field opens its group,
//! the comma that separated it from the next field is left behind:
//!
//! ```
//! use fieldstrip::FieldPattern;
//!
//! let pattern = FieldPattern::source();
//! let out = pattern.strip(r#"{"source": "web", "id": 1}"#);
//! assert_eq!(out.text, r#"{, "id": 1}"#);
//! ```
//!
//! A value is any run of non-`"` characters, newlines included, so a value
//! whose closing quote is missing extends to the next `"` anywhere in the
//! document. That quote usually opens the neighbouring key, which loses its
//! opening quote along with the span. With no later quote at all, nothing
//! matches and the text is left untouched:
//!
//! ```
//! use fieldstrip::FieldPattern;
//!
//! let pattern = FieldPattern::source();
//! let out = pattern.strip(r#"{"id": 1, "source": "web, "name": "x"}"#);
//! assert_eq!(out.text, r#"{"id": 1name": "x"}"#);
//!
//! let open = r#"{"id": 2, "source": "never closed}"#;
//! assert_eq!(pattern.strip(open).text, open);
//! ```
//!
//! Whitespace is Unicode `White_Space` plus the information separators
//! U+001C..=U+001F.

use crate::error::StripResult;
use regex::Regex;
use std::borrow::Cow;
use std::ops::Range;
use std::sync::OnceLock;

/// Key stripped when no other field is configured
pub const DEFAULT_FIELD: &str = "source";

/// Whitespace class used around the key and colon
const SPACE: &str = r"[\s\x1C-\x1F]*";

static SOURCE: OnceLock<FieldPattern> = OnceLock::new();

/// Compiled matcher for one field name
#[derive(Debug, Clone)]
pub struct FieldPattern {
    field: String,
    regex: Regex,
}

/// One matched span in a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOccurrence {
    /// Byte range of the whole span, leading comma and whitespace included
    pub span: Range<usize>,
    /// The quoted value without its quotes
    pub value: String,
}

/// Output of stripping a text buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stripped<'t> {
    pub text: Cow<'t, str>,
    pub removed: usize,
}

impl Stripped<'_> {
    /// True when at least one occurrence was deleted
    pub fn changed(&self) -> bool {
        self.removed > 0
    }
}

impl FieldPattern {
    /// Build the matcher for `field`. The name is matched literally.
    pub fn new(field: &str) -> StripResult<Self> {
        let expr = format!(
            r#",?{space}"{key}":{space}"([^"]*)""#,
            space = SPACE,
            key = regex::escape(field)
        );
        let regex = Regex::new(&expr)?;
        Ok(Self {
            field: field.to_string(),
            regex,
        })
    }

    /// Matcher for the `source` field, compiled once per process
    pub fn source() -> Self {
        SOURCE
            .get_or_init(|| {
                // Infallible: the key is a fixed literal passed through regex::escape.
                Self::new(DEFAULT_FIELD).expect("escaped field pattern always compiles")
            })
            .clone()
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// All occurrences in `text`, leftmost first, non-overlapping
    pub fn occurrences(&self, text: &str) -> Vec<FieldOccurrence> {
        self.regex
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let value = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
                Some(FieldOccurrence {
                    span: whole.range(),
                    value: value.to_string(),
                })
            })
            .collect()
    }

    /// Delete every occurrence from `text`
    ///
    /// Borrows the input when nothing matched.
    pub fn strip<'t>(&self, text: &'t str) -> Stripped<'t> {
        let removed = self.regex.find_iter(text).count();
        if removed == 0 {
            return Stripped {
                text: Cow::Borrowed(text),
                removed,
            };
        }
        Stripped {
            text: self.regex.replace_all(text, ""),
            removed,
        }
    }
}

impl Default for FieldPattern {
    fn default() -> Self {
        Self::source()
    }
}
