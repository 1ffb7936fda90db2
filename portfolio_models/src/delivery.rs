//! Outbound mail delivery settings.

use thiserror::Error;

use crate::{email_address::EmailAddress, Sensitive};

/// Port on which SMTP servers conventionally expect implicit TLS.
pub const IMPLICIT_TLS_PORT: u16 = 465;

/// Raw delivery configuration. Any value may be absent, completeness is
/// checked by [`DeliveryConfig::resolve`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub secure: Option<bool>,
    pub username: Option<String>,
    pub password: Option<Sensitive<String>>,
    pub recipient: Option<String>,
}

/// Complete and validated delivery configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliverySettings {
    pub host: String,
    pub port: u16,
    pub secure: bool,
    pub username: String,
    pub password: Sensitive<String>,
    /// Address of the mail account, used as envelope sender.
    pub sender: EmailAddress,
    pub recipient: EmailAddress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryField {
    Host,
    Port,
    Username,
    Password,
    Recipient,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryConfigError {
    #[error("missing smtp settings: {}", display_fields(.0))]
    Missing(Vec<DeliveryField>),
    #[error("smtp {0} is not a valid email address")]
    InvalidAddress(DeliveryField),
}

impl DeliveryConfig {
    /// Returns the required fields which have not been set.
    pub fn missing(&self) -> Vec<DeliveryField> {
        [
            (DeliveryField::Host, self.host.is_some()),
            (DeliveryField::Port, self.port.is_some()),
            (DeliveryField::Username, self.username.is_some()),
            (DeliveryField::Password, self.password.is_some()),
        ]
        .into_iter()
        .filter(|&(_, present)| !present)
        .map(|(field, _)| field)
        .collect()
    }

    /// The address contact messages are delivered to, defaulting to the
    /// account username.
    pub fn effective_recipient(&self) -> Option<&str> {
        self.recipient.as_deref().or(self.username.as_deref())
    }

    pub fn resolve(&self) -> Result<DeliverySettings, DeliveryConfigError> {
        let missing = self.missing();
        let (Some(host), Some(port), Some(username), Some(password)) = (
            &self.host,
            self.port,
            &self.username,
            &self.password,
        ) else {
            return Err(DeliveryConfigError::Missing(missing));
        };

        let sender = username
            .parse::<EmailAddress>()
            .map_err(|_| DeliveryConfigError::InvalidAddress(DeliveryField::Username))?;

        let recipient = match &self.recipient {
            Some(recipient) => recipient
                .parse()
                .map_err(|_| DeliveryConfigError::InvalidAddress(DeliveryField::Recipient))?,
            None => sender.clone(),
        };

        Ok(DeliverySettings {
            host: host.clone(),
            port,
            secure: self.secure.unwrap_or(port == IMPLICIT_TLS_PORT),
            username: username.clone(),
            password: password.clone(),
            sender,
            recipient,
        })
    }
}

impl std::fmt::Display for DeliveryField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Host => "host",
            Self::Port => "port",
            Self::Username => "username",
            Self::Password => "password",
            Self::Recipient => "recipient",
        })
    }
}

fn display_fields(fields: &[DeliveryField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
