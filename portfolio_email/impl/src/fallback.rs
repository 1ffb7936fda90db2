use std::sync::Arc;

use anyhow::anyhow;
use portfolio_email_contracts::{Email, EmailService};
use tracing::{info, warn};

/// Tries a list of email services in order until one of them succeeds.
///
/// Attempts are strictly sequential. If every attempt fails, the error of the
/// last one is returned.
#[derive(Debug)]
pub struct FallbackEmailService<E> {
    transports: Arc<[(String, E)]>,
}

impl<E> FallbackEmailService<E> {
    pub fn new(transports: impl IntoIterator<Item = (String, E)>) -> Self {
        Self {
            transports: transports.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.transports.is_empty()
    }

    pub fn transports(&self) -> impl Iterator<Item = (&str, &E)> {
        self.transports
            .iter()
            .map(|(name, transport)| (name.as_str(), transport))
    }
}

impl<E> Clone for FallbackEmailService<E> {
    fn clone(&self) -> Self {
        Self {
            transports: Arc::clone(&self.transports),
        }
    }
}

impl<E: EmailService> EmailService for FallbackEmailService<E> {
    async fn send(&self, email: Email) -> anyhow::Result<()> {
        let mut result = Err(anyhow!("No mail transport configured"));

        for (name, transport) in self.transports.iter() {
            match transport.send(email.clone()).await {
                Ok(()) => {
                    info!(transport = %name, "email delivered");
                    return Ok(());
                }
                Err(err) => {
                    warn!(transport = %name, "email delivery failed: {err:#}");
                    result = Err(err);
                }
            }
        }

        result
    }

    async fn ping(&self) -> anyhow::Result<()> {
        let mut result = Err(anyhow!("No mail transport configured"));

        for (name, transport) in self.transports.iter() {
            match transport.ping().await {
                Ok(()) => return Ok(()),
                Err(err) => {
                    warn!(transport = %name, "failed to ping smtp server: {err:#}");
                    result = Err(err);
                }
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use portfolio_email_contracts::{EmailBody, MockEmailService};

    use super::*;

    fn email() -> Email {
        Email {
            sender: "Ada <me@example.com>".parse().unwrap(),
            recipient: "me@example.com".parse().unwrap(),
            reply_to: Some("ada@example.com".parse().unwrap()),
            subject: "Portfolio contact: Client".into(),
            body: EmailBody::Text("Hello".into()),
        }
    }

    fn sut(
        primary: MockEmailService,
        fallback: MockEmailService,
    ) -> FallbackEmailService<MockEmailService> {
        FallbackEmailService::new([
            ("primary".into(), primary),
            ("fallback".into(), fallback),
        ])
    }

    #[tokio::test]
    async fn primary_ok() {
        // Arrange
        let primary = MockEmailService::new().with_send(email());
        let fallback = MockEmailService::new();

        let sut = sut(primary, fallback);

        // Act
        let result = sut.send(email()).await;

        // Assert
        result.unwrap();
    }

    #[tokio::test]
    async fn primary_fails_fallback_ok() {
        // Arrange
        let primary = MockEmailService::new().with_send_error(email(), "connection refused");
        let fallback = MockEmailService::new().with_send(email());

        let sut = sut(primary, fallback);

        // Act
        let result = sut.send(email()).await;

        // Assert
        result.unwrap();
    }

    #[tokio::test]
    async fn both_fail() {
        // Arrange
        let primary = MockEmailService::new().with_send_error(email(), "connection refused");
        let fallback = MockEmailService::new().with_send_error(email(), "authentication failed");

        let sut = sut(primary, fallback);

        // Act
        let result = sut.send(email()).await;

        // Assert
        assert_eq!(result.unwrap_err().to_string(), "authentication failed");
    }

    #[tokio::test]
    async fn no_transports() {
        // Arrange
        let sut = FallbackEmailService::<MockEmailService>::new([]);

        // Act
        let result = sut.send(email()).await;

        // Assert
        assert!(sut.is_empty());
        assert_eq!(
            result.unwrap_err().to_string(),
            "No mail transport configured"
        );
    }

    #[tokio::test]
    async fn ping_any() {
        // Arrange
        let primary = MockEmailService::new().with_ping(Err("timeout"));
        let fallback = MockEmailService::new().with_ping(Ok(()));

        let sut = sut(primary, fallback);

        // Act
        let result = sut.ping().await;

        // Assert
        result.unwrap();
    }

    #[tokio::test]
    async fn ping_none() {
        // Arrange
        let primary = MockEmailService::new().with_ping(Err("timeout"));
        let fallback = MockEmailService::new().with_ping(Err("connection refused"));

        let sut = sut(primary, fallback);

        // Act
        let result = sut.ping().await;

        // Assert
        assert_eq!(result.unwrap_err().to_string(), "connection refused");
    }

    #[test]
    fn transports() {
        let sut = sut(MockEmailService::new(), MockEmailService::new());

        let names = sut.transports().map(|(name, _)| name).collect::<Vec<_>>();

        assert_eq!(names, ["primary", "fallback"]);
    }
}
