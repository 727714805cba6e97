use super::{FieldViolation, field_violation::ensure_min_length};

const MIN_LENGTH: usize = 5;

/// Subject line, at least five UTF-16 code units long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubject(String);

impl ContactSubject {
    pub fn parse(s: String) -> Result<Self, FieldViolation> {
        ensure_min_length("subject", &s, MIN_LENGTH, "Subject must be at least 5 characters")?;
        Ok(Self(s))
    }
}

impl AsRef<str> for ContactSubject {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
