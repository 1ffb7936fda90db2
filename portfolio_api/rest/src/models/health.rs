use portfolio_core_health_contracts::HealthStatus;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ApiHealthStatus {
    pub ok: bool,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub user: Presence,
    pub pass: Presence,
    pub to: Option<String>,
    pub note: String,
}

/// Reports whether a credential is configured without revealing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    Set,
    Missing,
}

impl From<bool> for Presence {
    fn from(value: bool) -> Self {
        if value {
            Self::Set
        } else {
            Self::Missing
        }
    }
}

impl From<HealthStatus> for ApiHealthStatus {
    fn from(value: HealthStatus) -> Self {
        Self {
            ok: value.ok,
            host: value.host,
            port: value.port,
            user: value.username_set.into(),
            pass: value.password_set.into(),
            to: value.recipient,
            note: value.note,
        }
    }
}
