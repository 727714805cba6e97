use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationCode {
    InvalidType,
    TooSmall,
    InvalidString,
}

/// One failed constraint, addressed by the path of the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub path: Vec<String>,
    pub code: ViolationCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<usize>,
}

impl FieldViolation {
    pub fn required(field: &str) -> Self {
        Self {
            path: vec![field.to_string()],
            code: ViolationCode::InvalidType,
            message: "Required".into(),
            minimum: None,
        }
    }

    pub fn not_a_string(field: &str, received: &Value) -> Self {
        Self {
            path: vec![field.to_string()],
            code: ViolationCode::InvalidType,
            message: format!("Expected string, received {}", json_type_name(received)),
            minimum: None,
        }
    }

    pub fn not_an_object(received: &Value) -> Self {
        Self {
            path: Vec::new(),
            code: ViolationCode::InvalidType,
            message: format!("Expected object, received {}", json_type_name(received)),
            minimum: None,
        }
    }

    pub fn malformed_body() -> Self {
        Self {
            path: Vec::new(),
            code: ViolationCode::InvalidType,
            message: "Expected object, received malformed JSON".into(),
            minimum: None,
        }
    }

    pub fn too_small(field: &str, minimum: usize, message: &str) -> Self {
        Self {
            path: vec![field.to_string()],
            code: ViolationCode::TooSmall,
            message: message.into(),
            minimum: Some(minimum),
        }
    }

    pub fn invalid_string(field: &str, message: &str) -> Self {
        Self {
            path: vec![field.to_string()],
            code: ViolationCode::InvalidString,
            message: message.into(),
            minimum: None,
        }
    }

    /// Top level field this violation refers to, `None` for the body itself.
    pub fn field(&self) -> Option<&str> {
        self.path.first().map(String::as_str)
    }
}

impl std::fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.field() {
            Some(field) => write!(f, "{field}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Every violation found in a single submission. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(pub(super) Vec<FieldViolation>);

impl ValidationErrors {
    pub fn iter(&self) -> impl Iterator<Item = &FieldViolation> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> Vec<&str> {
        self.iter().filter_map(FieldViolation::field).collect()
    }
}

impl From<FieldViolation> for ValidationErrors {
    fn from(violation: FieldViolation) -> Self {
        Self(vec![violation])
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Validation failed")?;
        for (i, violation) in self.0.iter().enumerate() {
            let sep = if i == 0 { ": " } else { "; " };
            write!(f, "{sep}{violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Length is counted in UTF-16 code units, as JavaScript's `String.length` does.
pub(crate) fn ensure_min_length(
    field: &str,
    value: &str,
    minimum: usize,
    message: &str,
) -> Result<(), FieldViolation> {
    if value.encode_utf16().count() < minimum {
        return Err(FieldViolation::too_small(field, minimum, message));
    }
    Ok(())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
