// crates/shared-kernel/src/value_objects/release.rs
use std::fmt;

use serde::Serialize;

use crate::error::{DomainError, DomainResult};

/// Release identifier produced by version resolution.
///
/// Guaranteed non-empty and free of surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct ReleaseString(String);

impl ReleaseString {
    /// Trims surrounding whitespace and rejects text that ends up empty.
    pub fn new(text: impl Into<String>) -> DomainResult<Self> {
        let text = text.into();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyReleaseText);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for ReleaseString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReleaseString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
