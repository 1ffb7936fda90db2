#[cfg_attr(feature = "mock", mockall::automock)]
pub trait HealthFeatureService: Send + Sync + 'static {
    /// Report whether the mail delivery configuration is complete.
    fn get_status(&self) -> HealthStatus;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthStatus {
    pub ok: bool,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub username_set: bool,
    pub password_set: bool,
    pub recipient: Option<String>,
    pub note: String,
}

#[cfg(feature = "mock")]
impl MockHealthFeatureService {
    pub fn with_get_status(mut self, status: HealthStatus) -> Self {
        self.expect_get_status().once().return_once(move || status);
        self
    }
}
