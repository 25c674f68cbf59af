use error_stack::Report;
use serde::{Deserialize, Serialize};

use crate::KernelError;

const TITLE_MAX_CHARS: usize = 200;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct BookTitle(String);

impl BookTitle {
    /// Wraps an already-stored value without re-checking it.
    pub fn new(title: impl Into<String>) -> Self {
        Self(title.into())
    }

    /// Validates inbound input. The accepted value is stored trimmed.
    pub fn try_new(title: impl Into<String>) -> error_stack::Result<Self, KernelError> {
        let title = title.into();
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(Report::new(KernelError::Validation)
                .attach_printable("title must not be empty or whitespace-only"));
        }
        if trimmed.chars().count() > TITLE_MAX_CHARS {
            return Err(Report::new(KernelError::Validation).attach_printable(format!(
                "title must be at most {TITLE_MAX_CHARS} characters"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl AsRef<str> for BookTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<BookTitle> for String {
    fn from(value: BookTitle) -> Self {
        value.0
    }
}
