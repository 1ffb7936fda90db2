use std::time::Duration;

use anyhow::{anyhow, ensure, Context};
use lettre::{
    message::{header::ContentType, MultiPart},
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use portfolio_email_contracts::{Email, EmailBody, EmailService};
use tracing::debug;

pub use crate::{
    fallback::FallbackEmailService,
    profile::{TlsMode, TransportProfile, TransportTimeouts},
};

mod fallback;
mod profile;

/// Delivers mail through a single smtp server.
#[derive(Debug, Clone)]
pub struct SmtpEmailService {
    name: String,
    deadline: Duration,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpEmailService {
    /// Create the transport for `profile`. No connection is established until
    /// the first message is sent.
    ///
    /// Must be called from within a tokio runtime.
    pub async fn new(profile: &TransportProfile) -> anyhow::Result<Self> {
        let tls_parameters = || {
            TlsParameters::new(profile.host.clone())
                .with_context(|| format!("Invalid tls parameters for {}", profile.host))
        };

        let tls = match profile.tls {
            TlsMode::Wrapper => Tls::Wrapper(tls_parameters()?),
            TlsMode::Required => Tls::Required(tls_parameters()?),
            TlsMode::Opportunistic => Tls::Opportunistic(tls_parameters()?),
            TlsMode::None => Tls::None,
        };

        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&profile.host)
            .port(profile.port)
            .tls(tls)
            .timeout(Some(profile.timeouts.socket));

        if let Some((username, password)) = &profile.credentials {
            builder = builder.credentials(Credentials::new(username.clone(), password.0.clone()));
        }

        Ok(Self {
            name: profile.to_string(),
            deadline: profile.timeouts.deadline(),
            transport: builder.build(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl EmailService for SmtpEmailService {
    async fn send(&self, email: Email) -> anyhow::Result<()> {
        let message = build_message(email)?;

        debug!(transport = %self.name, "sending email");
        let response = tokio::time::timeout(self.deadline, self.transport.send(message))
            .await
            .map_err(|_| anyhow!("Smtp server did not respond within {:?}", self.deadline))??;

        ensure!(
            response.is_positive(),
            "Smtp server rejected the message with code {}",
            response.code()
        );

        Ok(())
    }

    async fn ping(&self) -> anyhow::Result<()> {
        tokio::time::timeout(self.deadline, self.transport.test_connection())
            .await
            .map_err(|_| anyhow!("Smtp server did not respond within {:?}", self.deadline))??
            .then_some(())
            .ok_or_else(|| anyhow!("Failed to ping smtp server"))
    }
}

fn build_message(email: Email) -> anyhow::Result<Message> {
    let mut builder = Message::builder()
        .from(email.sender.0)
        .to(email.recipient.0)
        .subject(email.subject);

    if let Some(reply_to) = email.reply_to {
        builder = builder.reply_to(reply_to.0);
    }

    let message = match email.body {
        EmailBody::Text(text) => builder.header(ContentType::TEXT_PLAIN).body(text)?,
        EmailBody::Html(html) => builder.header(ContentType::TEXT_HTML).body(html)?,
        EmailBody::Alternative { text, html } => {
            builder.multipart(MultiPart::alternative_plain_html(text, html))?
        }
    };

    Ok(message)
}
