use actix_web::{
    HttpResponse, ResponseError,
    error::{JsonPayloadError, PayloadError},
    http::StatusCode,
};

use super::types::{ContactResponse, PAYLOAD_TOO_LARGE, PROCESSING_FAILED};
use crate::domain::{FieldViolation, ValidationErrors};

#[derive(thiserror::Error)]
pub enum ContactError {
    #[error("{0}")]
    ValidationError(ValidationErrors),
    #[error("The request body exceeds the configured limit.")]
    PayloadTooLarge,
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for ContactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// Render `e` followed by every error in its `source()` chain.
fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{e}\n")?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{cause}")?;
        current = cause.source();
    }
    Ok(())
}

impl ResponseError for ContactError {
    fn status_code(&self) -> StatusCode {
        match self {
            ContactError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ContactError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ContactError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        let body = match self {
            ContactError::ValidationError(errors) => ContactResponse::rejected(errors),
            ContactError::PayloadTooLarge => ContactResponse::failed(PAYLOAD_TOO_LARGE),
            ContactError::UnexpectedError(_) => ContactResponse::failed(PROCESSING_FAILED),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<JsonPayloadError> for ContactError {
    fn from(err: JsonPayloadError) -> Self {
        match err {
            JsonPayloadError::OverflowKnownLength { .. }
            | JsonPayloadError::Overflow { .. }
            | JsonPayloadError::Payload(PayloadError::Overflow) => ContactError::PayloadTooLarge,
            other => {
                tracing::debug!(error.message = %other, "Contact form body is not valid JSON.");
                ContactError::ValidationError(FieldViolation::malformed_body().into())
            }
        }
    }
}
