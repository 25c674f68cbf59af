use error_stack::Report;
use serde::{Deserialize, Serialize};

use crate::KernelError;

const SUMMARY_MAX_CHARS: usize = 1000;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct BookSummary(String);

impl BookSummary {
    /// Wraps an already-stored value without re-checking it.
    pub fn new(summary: impl Into<String>) -> Self {
        Self(summary.into())
    }

    pub fn try_new(summary: impl Into<String>) -> error_stack::Result<Self, KernelError> {
        let summary = summary.into();
        if summary.chars().count() > SUMMARY_MAX_CHARS {
            return Err(Report::new(KernelError::Validation).attach_printable(format!(
                "summary must be at most {SUMMARY_MAX_CHARS} characters"
            )));
        }
        Ok(Self(summary))
    }
}

impl AsRef<str> for BookSummary {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<BookSummary> for String {
    fn from(value: BookSummary) -> Self {
        value.0
    }
}
