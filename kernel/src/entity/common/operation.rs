use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectLimit(i64);

impl SelectLimit {
    pub fn new(value: impl Into<i64>) -> Self {
        SelectLimit(value.into())
    }
}

impl Default for SelectLimit {
    fn default() -> Self {
        Self::new(100)
    }
}

impl AsRef<i64> for SelectLimit {
    fn as_ref(&self) -> &i64 {
        &self.0
    }
}

impl From<SelectLimit> for i64 {
    fn from(value: SelectLimit) -> Self {
        value.0
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectOffset(i64);

impl SelectOffset {
    pub fn new(value: impl Into<i64>) -> Self {
        SelectOffset(value.into())
    }
}

impl AsRef<i64> for SelectOffset {
    fn as_ref(&self) -> &i64 {
        &self.0
    }
}

impl From<SelectOffset> for i64 {
    fn from(value: SelectOffset) -> Self {
        value.0
    }
}
