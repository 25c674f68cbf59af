use error_stack::Report;
use serde::{Deserialize, Serialize};

use crate::KernelError;

const AUTHOR_MAX_CHARS: usize = 100;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct BookAuthor(String);

impl BookAuthor {
    /// Wraps an already-stored value without re-checking it.
    pub fn new(author: impl Into<String>) -> Self {
        Self(author.into())
    }

    /// Validates inbound input. The accepted value is stored trimmed.
    pub fn try_new(author: impl Into<String>) -> error_stack::Result<Self, KernelError> {
        let author = author.into();
        let trimmed = author.trim();
        if trimmed.is_empty() {
            return Err(Report::new(KernelError::Validation)
                .attach_printable("author must not be empty or whitespace-only"));
        }
        if trimmed.chars().count() > AUTHOR_MAX_CHARS {
            return Err(Report::new(KernelError::Validation).attach_printable(format!(
                "author must be at most {AUTHOR_MAX_CHARS} characters"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl AsRef<str> for BookAuthor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<BookAuthor> for String {
    fn from(value: BookAuthor) -> Self {
        value.0
    }
}

#[cfg(test)]
mod test {
    use super::BookAuthor;

    #[test]
    fn rejects_whitespace_only() {
        assert!(BookAuthor::try_new(" \n ").is_err());
    }

    #[test]
    fn rejects_over_100_chars() {
        assert!(BookAuthor::try_new("a".repeat(101)).is_err());
        assert!(BookAuthor::try_new("a".repeat(100)).is_ok());
    }
}
