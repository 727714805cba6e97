use serde::Serialize;

use crate::domain::ValidationErrors;

pub const ACKNOWLEDGEMENT: &str = "Your message has been received. I'll get back to you soon!";
pub const VALIDATION_FAILED: &str = "Validation failed";
pub const PROCESSING_FAILED: &str = "Something went wrong processing your request";
pub const PAYLOAD_TOO_LARGE: &str = "Request body is too large";

/// JSON body of every `/api/contact` response.
#[derive(Serialize)]
pub struct ContactResponse<'a> {
    pub success: bool,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<&'a ValidationErrors>,
}

impl<'a> ContactResponse<'a> {
    pub fn acknowledged() -> Self {
        Self {
            success: true,
            message: ACKNOWLEDGEMENT,
            errors: None,
        }
    }

    pub fn rejected(errors: &'a ValidationErrors) -> Self {
        Self {
            success: false,
            message: VALIDATION_FAILED,
            errors: Some(errors),
        }
    }

    pub fn failed(message: &'static str) -> Self {
        Self {
            success: false,
            message,
            errors: None,
        }
    }
}
