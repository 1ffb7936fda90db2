use anyhow::Context;
use portfolio_email_impl::{FallbackEmailService, SmtpEmailService, TransportProfile};

/// Set up one smtp transport per profile, tried in the given order.
pub async fn connect(
    profiles: &[TransportProfile],
) -> anyhow::Result<FallbackEmailService<SmtpEmailService>> {
    let mut transports = Vec::with_capacity(profiles.len());
    for profile in profiles {
        let transport = SmtpEmailService::new(profile)
            .await
            .with_context(|| format!("Failed to set up smtp transport {profile}"))?;
        transports.push((profile.name.clone(), transport));
    }

    Ok(FallbackEmailService::new(transports))
}
