/// HTTP paths served by the facade.
pub mod endpoints {
    pub const HEALTH: &str = "/health";
    pub const INFO: &str = "/info";
    /// Prefix of the contract field routes.
    pub const DATATYPE2: &str = "/datatype2";
}

/// Health check response.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}
