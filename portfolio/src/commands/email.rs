use anyhow::{bail, Context};
use clap::Subcommand;
use portfolio_config::Config;
use portfolio_email_contracts::{Email, EmailBody, EmailService};
use portfolio_models::email_address::EmailAddressWithName;

use crate::environment::Provider;

#[derive(Debug, Subcommand)]
pub enum EmailCommand {
    /// Send a test email through the configured smtp transports
    Test { recipient: EmailAddressWithName },
    /// Check the connection to each smtp transport
    Ping,
}

impl EmailCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            EmailCommand::Test { recipient } => test(config, recipient).await,
            EmailCommand::Ping => ping(config).await,
        }
    }
}

async fn test(config: Config, recipient: EmailAddressWithName) -> anyhow::Result<()> {
    let settings = config
        .delivery
        .resolve()
        .context("Mail server is not configured")?;

    let email_service = Provider::new(&config).email().await?;

    email_service
        .send(Email {
            sender: settings.sender.into(),
            recipient,
            reply_to: None,
            subject: "Email Deliverability Test".into(),
            body: EmailBody::Text("Email deliverability seems to be working!".into()),
        })
        .await
}

async fn ping(config: Config) -> anyhow::Result<()> {
    let provider = Provider::new(&config);
    if let Err(err) = &provider.contact_feature_config.delivery {
        bail!("Mail server is not configured: {err}");
    }

    let email_service = provider.email().await?;

    let mut reachable = false;
    for (_, transport) in email_service.transports() {
        match transport.ping().await {
            Ok(()) => {
                println!("{}: ok", transport.name());
                reachable = true;
            }
            Err(err) => println!("{}: {err:#}", transport.name()),
        }
    }

    if !reachable {
        bail!("No smtp transport is reachable");
    }

    Ok(())
}
