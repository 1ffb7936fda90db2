use serde::Serialize;

pub mod contact;
pub mod health;

/// Body of every error response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub ok: bool,
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct ApiOk {
    pub ok: bool,
}
