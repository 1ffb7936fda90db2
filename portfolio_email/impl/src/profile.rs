use std::time::Duration;

use portfolio_models::{delivery::DeliverySettings, Sensitive};

/// Connection settings for a single delivery attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportProfile {
    pub name: String,
    pub host: String,
    pub port: u16,
    pub tls: TlsMode,
    pub credentials: Option<(String, Sensitive<String>)>,
    pub timeouts: TransportTimeouts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TlsMode {
    /// Implicit TLS from the first byte.
    Wrapper,
    /// Plain connection which must be upgraded using STARTTLS.
    Required,
    /// Plain connection which is upgraded if the server offers STARTTLS.
    /// Never derived by [`TransportProfile::from_settings`], only available
    /// to profiles built by hand.
    Opportunistic,
    /// No encryption at all. Only useful for local test servers.
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportTimeouts {
    pub connect: Duration,
    pub greeting: Duration,
    pub socket: Duration,
}

impl TransportTimeouts {
    /// Upper bound for a complete delivery attempt.
    pub fn deadline(&self) -> Duration {
        self.connect + self.greeting + self.socket
    }
}

impl TransportProfile {
    /// The ordered list of profiles used to deliver mail: the configured
    /// connection first, then a STARTTLS connection to `fallback_port` on the
    /// same host.
    pub fn from_settings(
        settings: &DeliverySettings,
        fallback_port: u16,
        timeouts: TransportTimeouts,
    ) -> Vec<Self> {
        let credentials = Some((settings.username.clone(), settings.password.clone()));

        let primary = Self {
            name: "primary".into(),
            host: settings.host.clone(),
            port: settings.port,
            tls: if settings.secure {
                TlsMode::Wrapper
            } else {
                TlsMode::Required
            },
            credentials: credentials.clone(),
            timeouts,
        };

        let fallback = Self {
            name: "fallback".into(),
            host: settings.host.clone(),
            port: fallback_port,
            tls: TlsMode::Required,
            credentials,
            timeouts,
        };

        vec![primary, fallback]
    }
}

impl std::fmt::Display for TransportProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tls = match self.tls {
            TlsMode::Wrapper => "tls",
            TlsMode::Required => "starttls",
            TlsMode::Opportunistic => "opportunistic starttls",
            TlsMode::None => "plain",
        };
        write!(f, "{} ({}:{}, {tls})", self.name, self.host, self.port)
    }
}
