use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAddress(pub lettre::Address);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAddressWithName(pub lettre::message::Mailbox);

impl EmailAddress {
    /// Attach a display name. Whitespace and control characters in `name`
    /// are collapsed into single spaces; a blank name is dropped.
    pub fn with_name(self, name: String) -> EmailAddressWithName {
        let name = name
            .split(|c: char| c.is_whitespace() || c.is_control())
            .filter(|x| !x.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        EmailAddressWithName(lettre::message::Mailbox {
            name: (!name.is_empty()).then_some(name),
            email: self.0,
        })
    }
}

impl From<EmailAddress> for EmailAddressWithName {
    fn from(value: EmailAddress) -> Self {
        Self(lettre::message::Mailbox::new(None, value.0))
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

impl std::fmt::Display for EmailAddressWithName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for EmailAddress {
    type Err = <lettre::Address as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl FromStr for EmailAddressWithName {
    type Err = <lettre::message::Mailbox as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_name() {
        let address: EmailAddress = "ada@example.com".parse().unwrap();
        let mailbox = address.with_name("Ada".into());
        assert_eq!(mailbox.to_string(), "Ada <ada@example.com>");
    }

    #[test]
    fn with_name_collapses_line_breaks() {
        let address: EmailAddress = "ada@example.com".parse().unwrap();

        let mailbox = address.clone().with_name("Ada\r\nLovelace".into());
        assert_eq!(mailbox.0.name.as_deref(), Some("Ada Lovelace"));
        assert!(mailbox.to_string().ends_with("<ada@example.com>"));

        let mailbox = address.clone().with_name(" Zoë\t\u{0}Müller \n".into());
        assert_eq!(mailbox.0.name.as_deref(), Some("Zoë Müller"));

        let mailbox = address.with_name("\n\r\t".into());
        assert_eq!(mailbox.0.name, None);
        assert_eq!(mailbox.to_string(), "ada@example.com");
    }

    #[test]
    fn reject_invalid() {
        assert!("not an address".parse::<EmailAddress>().is_err());
    }
}
