use error_stack::Report;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::KernelError;

const YEAR_FLOOR: i32 = 1000;

#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct PublishedYear(i32);

impl PublishedYear {
    /// Wraps an already-stored value without re-checking it.
    pub fn new(year: impl Into<i32>) -> Self {
        Self(year.into())
    }

    /// The upper bound is the current calendar year, taken at call time
    /// rather than frozen at compile time.
    pub fn try_new(year: i32) -> error_stack::Result<Self, KernelError> {
        let current = current_year();
        if !(YEAR_FLOOR..=current).contains(&year) {
            return Err(Report::new(KernelError::Validation).attach_printable(format!(
                "published_year must be between {YEAR_FLOOR} and {current}, got {year}"
            )));
        }
        Ok(Self(year))
    }
}

impl AsRef<i32> for PublishedYear {
    fn as_ref(&self) -> &i32 {
        &self.0
    }
}

impl From<PublishedYear> for i32 {
    fn from(value: PublishedYear) -> Self {
        value.0
    }
}

fn current_year() -> i32 {
    OffsetDateTime::now_utc().year()
}
