use serde_json::{Map, Value};

use super::{
    ContactEmail, ContactMessage, ContactName, ContactSubject, FieldViolation, ValidationErrors,
};

/// A contact form submission whose four fields all passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: ContactName,
    pub email: ContactEmail,
    pub subject: ContactSubject,
    pub message: ContactMessage,
}

impl ContactSubmission {
    /// Validate an arbitrary JSON payload.
    ///
    /// All fields are checked before returning, so the error lists every
    /// violation in schema order (`name`, `email`, `subject`, `message`).
    /// Unknown keys are ignored.
    pub fn parse(payload: Value) -> Result<Self, ValidationErrors> {
        let mut fields = match payload {
            Value::Object(fields) => fields,
            other => return Err(FieldViolation::not_an_object(&other).into()),
        };

        let name = take_string(&mut fields, "name").and_then(ContactName::parse);
        let email = take_string(&mut fields, "email").and_then(ContactEmail::parse);
        let subject = take_string(&mut fields, "subject").and_then(ContactSubject::parse);
        let message = take_string(&mut fields, "message").and_then(ContactMessage::parse);

        match (name, email, subject, message) {
            (Ok(name), Ok(email), Ok(subject), Ok(message)) => Ok(Self {
                name,
                email,
                subject,
                message,
            }),
            (name, email, subject, message) => {
                let violations = [name.err(), email.err(), subject.err(), message.err()]
                    .into_iter()
                    .flatten()
                    .collect();
                Err(ValidationErrors(violations))
            }
        }
    }
}

impl TryFrom<Value> for ContactSubmission {
    type Error = ValidationErrors;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        ContactSubmission::parse(value)
    }
}

fn take_string(fields: &mut Map<String, Value>, field: &str) -> Result<String, FieldViolation> {
    match fields.remove(field) {
        None => Err(FieldViolation::required(field)),
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(FieldViolation::not_a_string(field, &other)),
    }
}
