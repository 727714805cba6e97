use crate::domain::ContactSubmission;

/// Where accepted contact submissions are handed off to.
///
/// The server is generic over the sink so a persistence layer or a mail
/// provider can be plugged in without touching the handler.
pub trait NotificationSink: Send + Sync + 'static {
    fn notify(
        &self,
        submission: &ContactSubmission,
    ) -> impl Future<Output = Result<(), anyhow::Error>> + Send;
}

/// Records each submission as a structured log event and nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotificationSink;

impl NotificationSink for LogNotificationSink {
    #[tracing::instrument(name = "Logging a contact form submission", skip_all)]
    async fn notify(&self, submission: &ContactSubmission) -> Result<(), anyhow::Error> {
        tracing::info!(
            contact.name = %submission.name.as_ref(),
            contact.email = %submission.email.as_ref(),
            contact.subject = %submission.subject.as_ref(),
            contact.message = %submission.message.as_ref(),
            "Contact form submission received."
        );
        Ok(())
    }
}
