use portfolio_models::contact::ContactRequest;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ApiContactRequest {
    /// Full name of the sender
    pub name: Option<String>,
    /// Email address replies should go to
    pub email: Option<String>,
    /// What the message is about, e.g. "Client" or "Job offer"
    pub purpose: Option<String>,
    pub message: Option<String>,
}

impl From<ApiContactRequest> for ContactRequest {
    fn from(value: ApiContactRequest) -> Self {
        Self {
            name: value.name,
            email: value.email,
            purpose: value.purpose,
            message: value.message,
        }
    }
}
