use super::{FieldViolation, field_violation::ensure_min_length};

const MIN_LENGTH: usize = 10;

/// Message body, at least ten UTF-16 code units long. No upper bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage(String);

impl ContactMessage {
    pub fn parse(s: String) -> Result<Self, FieldViolation> {
        ensure_min_length("message", &s, MIN_LENGTH, "Message must be at least 10 characters")?;
        Ok(Self(s))
    }
}

impl AsRef<str> for ContactMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
