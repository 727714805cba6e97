use actix_web::{HttpResponse, web};
use anyhow::Context;

use super::{errors::ContactError, types::ContactResponse};
use crate::{
    configuration::ContactSettings, domain::ContactSubmission, notification::NotificationSink,
};

/// JSON extractor settings for `/api/contact`.
///
/// Any content type is accepted. Oversized bodies become a 413, anything
/// that is not JSON becomes a validation failure.
pub fn json_config(max_body_bytes: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(max_body_bytes)
        .content_type_required(false)
        .error_handler(|err, _req| ContactError::from(err).into())
}

#[tracing::instrument(
    name = "Handling a contact form submission",
    skip(body, sink, settings),
    fields(contact_email = tracing::field::Empty)
)]
pub async fn submit_contact<S: NotificationSink>(
    body: web::Json<serde_json::Value>,
    sink: web::Data<S>,
    settings: web::Data<ContactSettings>,
) -> Result<HttpResponse, ContactError> {
    let submission =
        ContactSubmission::parse(body.into_inner()).map_err(ContactError::ValidationError)?;
    tracing::Span::current().record(
        "contact_email",
        tracing::field::display(submission.email.as_ref()),
    );

    sink.notify(&submission)
        .await
        .context("Failed to hand the contact submission to the notification sink.")
        .inspect_err(|e| {
            tracing::error!(
                error.cause_chain = ?e,
                error.message = %e,
                "Contact form processing failed"
            )
        })?;

    tokio::time::sleep(settings.simulated_delay()).await;

    Ok(HttpResponse::Ok().json(ContactResponse::acknowledged()))
}
