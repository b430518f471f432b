//! Static `x-api-key` checks.

use axum::http::HeaderMap;

use crate::{core::api_config::ApiKeys, error_handler::AppError};

pub const API_KEY_HEADER: &str = "x-api-key";

/// Which secret the caller presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyTier {
    Standard,
    Premium,
}

fn presented_key(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
}

/// Accepts either secret.
pub fn authorize(headers: &HeaderMap, keys: &ApiKeys) -> Result<KeyTier, AppError> {
    let key = presented_key(headers).ok_or(AppError::MissingApiKey)?;
    if key == keys.premium {
        Ok(KeyTier::Premium)
    } else if key == keys.standard {
        Ok(KeyTier::Standard)
    } else {
        Err(AppError::InvalidApiKey)
    }
}

/// Accepts only the premium secret.
pub fn authorize_premium(headers: &HeaderMap, keys: &ApiKeys) -> Result<(), AppError> {
    match presented_key(headers) {
        Some(key) if key == keys.premium => Ok(()),
        _ => Err(AppError::PremiumEndpoint),
    }
}
