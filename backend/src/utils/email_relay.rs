use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::config::server_config::MailConfig;
use crate::error::ContactError;
use crate::models::contact_models::ContactRecord;

/// Tells the agency about a new contact submission.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactNotifier: Send + Sync {
    async fn notify(&self, record: &ContactRecord) -> Result<(), ContactError>;
}

pub struct SmtpNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

impl SmtpNotifier {
    pub fn from_config(config: &MailConfig) -> Result<Self, ContactError> {
        let from = format!("Omradix Contact Form <{}>", config.from)
            .parse::<Mailbox>()
            .map_err(|e| ContactError::Mail(format!("invalid EMAIL_FROM: {}", e)))?;
        let to = config
            .to
            .parse::<Mailbox>()
            .map_err(|e| ContactError::Mail(format!("invalid EMAIL_TO: {}", e)))?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
            .map_err(|e| ContactError::Mail(e.to_string()))?
            .credentials(Credentials::new(
                config.smtp_username.clone(),
                config.smtp_password.clone(),
            ))
            .build();

        Ok(Self { transport, from, to })
    }
}

#[async_trait]
impl ContactNotifier for SmtpNotifier {
    async fn notify(&self, record: &ContactRecord) -> Result<(), ContactError> {
        let email = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject("📩 New Contact Form Submission")
            .header(ContentType::TEXT_HTML)
            .body(render_email(record))
            .map_err(|e| ContactError::Mail(e.to_string()))?;

        self.transport
            .send(email)
            .await
            .map_err(|e| ContactError::Mail(e.to_string()))?;

        tracing::info!("Relayed contact {} to {}", record.id, self.to);
        Ok(())
    }
}

pub fn render_email(record: &ContactRecord) -> String {
    let received = Utc
        .timestamp_opt(i64::from(record.created_at), 0)
        .single()
        .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| record.created_at.to_string());

    format!(
        "<h2>New Message from Omradix Website</h2>\n\
         <p><b>Name:</b> {}</p>\n\
         <p><b>Email:</b> {}</p>\n\
         <p><b>Message:</b> {}</p>\n\
         <p>📅 {}</p>\n",
        escape_html(&record.name),
        escape_html(&record.email),
        escape_html(&record.message),
        received,
    )
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
