use validator::ValidateEmail;

use super::FieldViolation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEmail(String);

impl ContactEmail {
    pub fn parse(s: String) -> Result<Self, FieldViolation> {
        if !s.validate_email() || !has_public_domain(&s) {
            return Err(FieldViolation::invalid_string("email", "Invalid email address"));
        };
        Ok(Self(s))
    }
}

/// The domain must be a dotted name ending in an alphabetic TLD of at least
/// two letters. Single-label hosts and IP literals are rejected.
fn has_public_domain(email: &str) -> bool {
    let Some((_, domain)) = email.rsplit_once('@') else {
        return false;
    };
    let Some((_, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !domain.starts_with('[') && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}

impl AsRef<str> for ContactEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
