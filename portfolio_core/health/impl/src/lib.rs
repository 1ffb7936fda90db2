use std::sync::Arc;

use portfolio_core_health_contracts::{HealthFeatureService, HealthStatus};
use portfolio_models::delivery::DeliveryConfig;

#[derive(Debug, Clone)]
pub struct HealthFeatureServiceImpl {
    config: HealthFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct HealthFeatureConfig {
    pub delivery: Arc<DeliveryConfig>,
}

impl HealthFeatureServiceImpl {
    pub fn new(config: HealthFeatureConfig) -> Self {
        Self { config }
    }
}

impl HealthFeatureService for HealthFeatureServiceImpl {
    fn get_status(&self) -> HealthStatus {
        let delivery = &*self.config.delivery;
        let resolved = delivery.resolve();

        let note = match &resolved {
            Ok(settings) => format!(
                "Contact messages are delivered to {} via {}:{}",
                settings.recipient, settings.host, settings.port
            ),
            Err(err) => err.to_string(),
        };

        HealthStatus {
            ok: resolved.is_ok(),
            host: delivery.host.clone(),
            port: delivery.port,
            username_set: delivery.username.is_some(),
            password_set: delivery.password.is_some(),
            recipient: delivery.effective_recipient().map(Into::into),
            note,
        }
    }
}
