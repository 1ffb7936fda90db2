use portfolio_config::Config;
use tracing::{info, warn};

use crate::environment::Provider;

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let provider = Provider::new(&config);

    match &provider.contact_feature_config.delivery {
        Ok(settings) => info!(
            "Delivering contact messages to {} via {}:{}",
            settings.recipient, settings.host, settings.port
        ),
        Err(err) => warn!("Contact form is not operational: {err}"),
    }

    for profile in provider.transport_profiles.iter() {
        info!("Using smtp transport {profile}");
    }

    let server = provider.rest_server().await?;
    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve(config.http.host, config.http.port).await
}
