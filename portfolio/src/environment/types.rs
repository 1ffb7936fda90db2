use portfolio_core_contact_impl::ContactFeatureServiceImpl;
use portfolio_core_health_impl::HealthFeatureServiceImpl;
use portfolio_email_impl::{FallbackEmailService, SmtpEmailService};
use portfolio_templates_impl::TemplateServiceImpl;

// API
pub type RestServer = portfolio_api_rest::RestServer<HealthFeature, ContactFeature>;

// Email
pub type Smtp = SmtpEmailService;
pub type Email = FallbackEmailService<Smtp>;

// Template
pub type Template = TemplateServiceImpl;

// Core
pub type HealthFeature = HealthFeatureServiceImpl;
pub type ContactFeature = ContactFeatureServiceImpl<Template, Email>;
