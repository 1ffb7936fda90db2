use anyhow::Context;
use config::{Environment, Map};
use portfolio_models::delivery::DeliveryConfig;
use serde::Deserialize;

/// Read the smtp settings from the process environment.
pub fn load_delivery() -> anyhow::Result<DeliveryConfig> {
    load_delivery_from(None)
}

/// Read the smtp settings from `source`, or from the process environment if
/// `source` is `None`.
///
/// Recognized variables: `SMTP_HOST`, `SMTP_PORT`, `SMTP_SECURE`,
/// `SMTP_USER`, `SMTP_PASS` and `CONTACT_TO`. Empty values count as unset.
pub fn load_delivery_from(source: Option<Map<String, String>>) -> anyhow::Result<DeliveryConfig> {
    let env = config::Config::builder()
        .add_source(Environment::default().source(source))
        .build()?
        .try_deserialize::<DeliveryEnv>()
        .context("Failed to read smtp settings from environment")?;

    let port = env
        .smtp_port
        .filter(|x| !x.is_empty())
        .map(|port| {
            port.parse::<u16>()
                .with_context(|| format!("Invalid SMTP_PORT: {port:?}"))
        })
        .transpose()?;

    let secure = env
        .smtp_secure
        .filter(|x| !x.is_empty())
        .map(|secure| {
            parse_bool(&secure).with_context(|| format!("Invalid SMTP_SECURE: {secure:?}"))
        })
        .transpose()?;

    Ok(DeliveryConfig {
        host: non_empty(env.smtp_host),
        port,
        secure,
        username: non_empty(env.smtp_user),
        password: non_empty(env.smtp_pass).map(Into::into),
        recipient: non_empty(env.contact_to),
    })
}

#[derive(Deserialize)]
struct DeliveryEnv {
    smtp_host: Option<String>,
    smtp_port: Option<String>,
    smtp_secure: Option<String>,
    smtp_user: Option<String>,
    smtp_pass: Option<String>,
    contact_to: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|x| !x.is_empty())
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}
