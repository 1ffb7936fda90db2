use std::{net::IpAddr, path::Path};

use anyhow::Context;
use config::{File, FileFormat};
pub use duration::Duration;
pub use env::{load_delivery, load_delivery_from};
use portfolio_models::delivery::DeliveryConfig;
use serde::Deserialize;

mod duration;
mod env;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Environment variable holding a colon separated list of config files.
pub const CONFIG_PATH_ENV: &str = "PORTFOLIO_CONFIG";

/// Load the config files from [`CONFIG_PATH_ENV`] (or the default config)
/// together with the smtp settings from the process environment.
pub fn load() -> anyhow::Result<Config> {
    let paths = std::env::var(CONFIG_PATH_ENV).unwrap_or_default();
    let mut config = load_files(&config_paths(&paths))?;
    config.delivery = load_delivery()?;
    Ok(config)
}

/// Split a colon separated list of config files, skipping empty entries.
/// Falls back to [`DEFAULT_CONFIG_PATH`] if nothing is left.
fn config_paths(paths: &str) -> Vec<&str> {
    let paths = paths
        .split(':')
        .filter(|x| !x.is_empty())
        .collect::<Vec<_>>();

    if paths.is_empty() {
        vec![DEFAULT_CONFIG_PATH]
    } else {
        paths
    }
}

pub fn load_files(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub smtp: SmtpConfig,
    pub contact: ContactConfig,
    /// Sourced from the environment, see [`load_delivery`].
    #[serde(skip)]
    pub delivery: DeliveryConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct SmtpConfig {
    pub fallback_port: u16,
    pub connect_timeout: Duration,
    pub greeting_timeout: Duration,
    pub socket_timeout: Duration,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    pub subject_prefix: String,
    pub default_purpose: String,
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn load_default_config() {
        let config = load_files(&[Path::new(DEFAULT_CONFIG_PATH)]).unwrap();

        assert_eq!(config.smtp.fallback_port, 587);
        assert_eq!(*config.smtp.socket_timeout, Duration::from_secs(15));
        assert_eq!(config.contact.default_purpose, "General");
        assert_eq!(config.delivery, DeliveryConfig::default());
    }

    #[test]
    fn config_path_list() {
        assert_eq!(config_paths(""), [DEFAULT_CONFIG_PATH]);
        assert_eq!(config_paths(":"), [DEFAULT_CONFIG_PATH]);
        assert_eq!(
            config_paths("/etc/portfolio.toml::local.toml:"),
            ["/etc/portfolio.toml", "local.toml"]
        );
    }

    #[test]
    fn missing_file() {
        let err = load_files(&["/nonexistent/portfolio.toml"]).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/portfolio.toml"));
    }
}
