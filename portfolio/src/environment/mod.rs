use std::sync::Arc;

use portfolio_config::Config;
use portfolio_core_contact_impl::ContactFeatureConfig;
use portfolio_core_health_impl::HealthFeatureConfig;
use portfolio_email_impl::{TransportProfile, TransportTimeouts};
use types::{ContactFeature, Email, HealthFeature, RestServer, Template};

use crate::email;

pub mod types;

/// Builds the services from the configuration.
#[derive(Debug, Clone)]
pub struct Provider {
    pub contact_feature_config: ContactFeatureConfig,
    pub health_feature_config: HealthFeatureConfig,
    /// Empty if the delivery configuration is incomplete.
    pub transport_profiles: Arc<[TransportProfile]>,
}

impl Provider {
    pub fn new(config: &Config) -> Self {
        let delivery = config.delivery.resolve().map(Arc::new);

        let timeouts = TransportTimeouts {
            connect: config.smtp.connect_timeout.into(),
            greeting: config.smtp.greeting_timeout.into(),
            socket: config.smtp.socket_timeout.into(),
        };

        let transport_profiles = delivery
            .as_ref()
            .map(|settings| {
                TransportProfile::from_settings(settings, config.smtp.fallback_port, timeouts)
            })
            .unwrap_or_default()
            .into();

        let contact_feature_config = ContactFeatureConfig {
            delivery,
            subject_prefix: config.contact.subject_prefix.as_str().into(),
            default_purpose: config.contact.default_purpose.as_str().into(),
        };

        let health_feature_config = HealthFeatureConfig {
            delivery: config.delivery.clone().into(),
        };

        Self {
            contact_feature_config,
            health_feature_config,
            transport_profiles,
        }
    }

    pub async fn email(&self) -> anyhow::Result<Email> {
        email::connect(&self.transport_profiles).await
    }

    pub async fn rest_server(&self) -> anyhow::Result<RestServer> {
        let health = HealthFeature::new(self.health_feature_config.clone());
        let contact = ContactFeature::new(
            Template::new()?,
            self.email().await?,
            self.contact_feature_config.clone(),
        );

        Ok(RestServer::new(health, contact))
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use portfolio_email_impl::TlsMode;
    use portfolio_models::{delivery::DeliveryConfig, Sensitive};

    use super::*;

    fn config(delivery: DeliveryConfig) -> Config {
        let mut config =
            portfolio_config::load_files(&[Path::new(portfolio_config::DEFAULT_CONFIG_PATH)])
                .unwrap();
        config.delivery = delivery;
        config
    }

    #[tokio::test]
    async fn provide_rest_server() {
        let provider = Provider::new(&config(DeliveryConfig {
            host: Some("smtp.example.com".into()),
            port: Some(465),
            secure: None,
            username: Some("me@example.com".into()),
            password: Some(Sensitive("secret".into())),
            recipient: None,
        }));

        assert!(provider.contact_feature_config.delivery.is_ok());
        let tls = provider
            .transport_profiles
            .iter()
            .map(|p| (p.port, p.tls))
            .collect::<Vec<_>>();
        assert_eq!(tls, [(465, TlsMode::Wrapper), (587, TlsMode::Required)]);

        let _: RestServer = provider.rest_server().await.unwrap();
    }

    #[tokio::test]
    async fn provide_rest_server_unconfigured() {
        let provider = Provider::new(&config(DeliveryConfig::default()));

        assert!(provider.contact_feature_config.delivery.is_err());
        assert!(provider.transport_profiles.is_empty());

        let _: RestServer = provider.rest_server().await.unwrap();
    }
}
