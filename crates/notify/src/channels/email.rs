//! Email transport using SMTP.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::debug;

use super::{Channel, MailTransport, OutgoingMail};
use crate::config::EmailConfig;
use crate::{Error, Result};

/// Port that expects TLS from the first byte instead of STARTTLS.
const IMPLICIT_TLS_PORT: u16 = 465;

/// SMTP relay client.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    /// Build the relay transport. No connection is opened until the first send.
    pub fn new(config: &EmailConfig) -> Result<Self> {
        crate::http_client::install_rustls_provider();

        let builder = if config.smtp_port == IMPLICIT_TLS_PORT {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
        };
        let mut builder = builder.port(config.smtp_port);

        if let (Some(username), Some(password)) = (&config.username, &config.password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        Ok(Self {
            transport: builder.build(),
        })
    }
}

/// Assemble the MIME message for `mail`.
fn build_message(mail: &OutgoingMail) -> Result<Message> {
    let to = mail
        .to
        .as_deref()
        .ok_or_else(|| Error::delivery(Channel::Email, "no recipient address"))?;

    let message = Message::builder()
        .from(mail.from.parse()?)
        .to(to.parse()?)
        .subject(mail.subject.clone())
        .header(ContentType::TEXT_HTML)
        .body(mail.html.clone())?;
    Ok(message)
}

#[async_trait]
impl MailTransport for SmtpMailer {
    async fn send_mail(&self, mail: &OutgoingMail) -> Result<()> {
        let message = build_message(mail)?;
        let response = self.transport.send(message).await?;
        debug!(code = %response.code(), "SMTP relay accepted message");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mail(to: Option<&str>) -> OutgoingMail {
        OutgoingMail {
            from: "deals@example.com".to_string(),
            to: to.map(str::to_string),
            subject: "Deal Alert".to_string(),
            html: "<p>hi</p>".to_string(),
        }
    }

    #[test]
    fn test_build_message_without_recipient_fails() {
        let err = build_message(&mail(None)).unwrap_err();
        assert!(matches!(
            err,
            Error::Delivery {
                channel: Channel::Email,
                ..
            }
        ));
    }

    #[test]
    fn test_build_message_rejects_bad_address() {
        let err = build_message(&mail(Some("not an address"))).unwrap_err();
        assert!(matches!(err, Error::Address(_)));
    }

    #[test]
    fn test_build_message_sets_headers() {
        let message = build_message(&mail(Some("me@example.com"))).unwrap();
        let raw = String::from_utf8(message.formatted()).unwrap();
        assert!(raw.contains("To: me@example.com"));
        assert!(raw.contains("From: deals@example.com"));
        assert!(raw.contains("Subject: Deal Alert"));
        assert!(raw.contains("Content-Type: text/html"));
    }

    #[test]
    fn test_mailer_builds_for_both_tls_modes() {
        let starttls = EmailConfig::default();
        assert!(SmtpMailer::new(&starttls).is_ok());

        let implicit = EmailConfig {
            smtp_port: IMPLICIT_TLS_PORT,
            username: Some("deals@example.com".to_string()),
            password: Some("secret".to_string()),
            ..Default::default()
        };
        assert!(SmtpMailer::new(&implicit).is_ok());
    }
}
