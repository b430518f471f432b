use crate::error_handler::AppError;

const DEFAULT_API_ADDRESS: &str = "0.0.0.0:8000";

/// The two static client secrets.
#[derive(Clone)]
pub struct ApiKeys {
    pub standard: String,
    pub premium: String,
}

impl std::fmt::Debug for ApiKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeys").finish_non_exhaustive()
    }
}

/// Server settings read from the environment.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// `host:port` to bind.
    pub address: String,
    pub keys: ApiKeys,
}

impl ApiConfig {
    /// Reads `API_ADDRESS`, `API_KEY_REQUIRED` and `PREMIUM_API_KEY`.
    ///
    /// # Errors
    /// [`AppError::MissingEnv`] when a key secret is unset or blank.
    pub fn from_env() -> Result<Self, AppError> {
        let address = std::env::var("API_ADDRESS")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_ADDRESS.to_string());

        Ok(Self {
            address,
            keys: ApiKeys {
                standard: required("API_KEY_REQUIRED")?,
                premium: required("PREMIUM_API_KEY")?,
            },
        })
    }
}

fn required(name: &'static str) -> Result<String, AppError> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(AppError::MissingEnv(name)),
    }
}
