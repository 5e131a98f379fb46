use chrono::Utc;
use lettre::message::{Mailbox, header::ContentType};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::Config;
use crate::error::BuzonError;
use crate::types::submission::Submission;

/// SMTP notifier. Built once at startup from config; the transport holds the
/// relay, STARTTLS settings and credentials. The owner address is both the
/// sender identity and the notification recipient.
#[derive(Clone)]
pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    owner: Mailbox,
}

impl Mailer {
    pub fn from_config(cfg: &Config) -> Result<Self, BuzonError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&cfg.smtp_server)?
            .port(cfg.smtp_port)
            .credentials(Credentials::new(
                cfg.smtp_user.clone(),
                cfg.smtp_password.clone(),
            ))
            .build();
        let owner: Mailbox = cfg.smtp_user.parse()?;
        Ok(Self { transport, owner })
    }

    /// Send one plain-text notification for a submission, with the
    /// submitter's address as reply-to. Sends within the request; the caller
    /// decides that failures are non-fatal.
    pub async fn notify(&self, submission: &Submission) -> Result<(), BuzonError> {
        let reply_to: Mailbox = submission.email.parse()?;
        let message = Message::builder()
            .from(self.owner.clone())
            .to(self.owner.clone())
            .reply_to(reply_to)
            .subject(format!("New contact message from {}", submission.name))
            .header(ContentType::TEXT_PLAIN)
            .body(notification_body(submission))?;
        self.transport.send(message).await?;
        Ok(())
    }

    /// Open an SMTP session with the configured relay and credentials.
    /// Backs the `/test-smtp` diagnostic endpoint.
    pub async fn test_connection(&self) -> Result<bool, BuzonError> {
        Ok(self.transport.test_connection().await?)
    }
}

fn notification_body(submission: &Submission) -> String {
    format!(
        "You have received a new message through your portfolio:\n\
         \n\
         Name: {}\n\
         Email: {}\n\
         Date: {}\n\
         \n\
         Message:\n\
         {}\n\
         \n\
         ---\n\
         This message was sent automatically.\n",
        submission.name,
        submission.email,
        Utc::now().format("%d/%m/%Y at %H:%M"),
        submission.message,
    )
}
