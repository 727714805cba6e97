use super::{FieldViolation, field_violation::ensure_min_length};

const MIN_LENGTH: usize = 2;

/// Sender's name, at least two UTF-16 code units long. Stored untrimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactName(String);

impl ContactName {
    pub fn parse(s: String) -> Result<Self, FieldViolation> {
        ensure_min_length("name", &s, MIN_LENGTH, "Name must be at least 2 characters")?;
        Ok(Self(s))
    }
}

impl AsRef<str> for ContactName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
