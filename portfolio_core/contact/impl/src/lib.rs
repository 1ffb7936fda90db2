use std::sync::Arc;

use portfolio_core_contact_contracts::{ContactFeatureService, ContactSubmitError};
use portfolio_email_contracts::{Email, EmailBody, EmailService};
use portfolio_models::{
    contact::{ContactMessage, ContactRequest},
    delivery::{DeliveryConfigError, DeliverySettings},
    email_address::EmailAddressWithName,
};
use portfolio_templates_contracts::{
    ContactHtmlTemplate, ContactTemplateData, ContactTextTemplate, TemplateService,
};
use tracing::warn;

#[derive(Debug, Clone)]
pub struct ContactFeatureServiceImpl<Template, Email> {
    template: Template,
    email: Email,
    config: ContactFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct ContactFeatureConfig {
    /// Resolved once at startup. Submissions fail while this is an error.
    pub delivery: Result<Arc<DeliverySettings>, DeliveryConfigError>,
    pub subject_prefix: Arc<str>,
    pub default_purpose: Arc<str>,
}

impl<Template, Email> ContactFeatureServiceImpl<Template, Email> {
    pub fn new(template: Template, email: Email, config: ContactFeatureConfig) -> Self {
        Self {
            template,
            email,
            config,
        }
    }
}

impl<TemplateS, EmailS> ContactFeatureService for ContactFeatureServiceImpl<TemplateS, EmailS>
where
    TemplateS: TemplateService,
    EmailS: EmailService,
{
    async fn submit(&self, request: ContactRequest) -> Result<(), ContactSubmitError> {
        let settings = self.config.delivery.as_ref().map_err(Clone::clone)?;

        let message = ContactMessage::try_from(request)
            .map_err(|_| ContactSubmitError::MissingFields)?;

        let email = self.make_email(settings, message)?;

        self.email
            .send(email)
            .await
            .map_err(ContactSubmitError::Delivery)
    }
}

impl<TemplateS, EmailS> ContactFeatureServiceImpl<TemplateS, EmailS>
where
    TemplateS: TemplateService,
{
    fn make_email(
        &self,
        settings: &DeliverySettings,
        message: ContactMessage,
    ) -> anyhow::Result<Email> {
        let name = message.author.name.into_inner();
        let author_email = message.author.email.into_inner();
        let purpose = message
            .purpose
            .map(|x| x.into_inner())
            .unwrap_or_else(|| self.config.default_purpose.to_string());

        let reply_to = author_email
            .parse::<EmailAddressWithName>()
            .inspect_err(|err| {
                warn!("Omitting reply-to header, {author_email:?} is not a valid mailbox: {err}")
            })
            .ok();

        let data = ContactTemplateData {
            name: name.clone(),
            email: author_email,
            purpose: purpose.clone(),
            message: message.content.into_inner(),
        };
        let text = self.template.render(&ContactTextTemplate(data.clone()))?;
        let html = self.template.render(&ContactHtmlTemplate(data))?;

        Ok(Email {
            sender: settings.sender.clone().with_name(name),
            recipient: settings.recipient.clone().into(),
            reply_to,
            subject: format!("{}: {purpose}", self.config.subject_prefix),
            body: EmailBody::Alternative { text, html },
        })
    }
}
