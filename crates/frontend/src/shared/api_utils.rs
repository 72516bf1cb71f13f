//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and mapping
//! transport errors.

use contracts::shared::error::UseCaseError;
use wasm_bindgen::JsValue;

use super::config::app_config;

/// Get the base URL for API requests
///
/// Uses `api.base_url` from config.toml when set, otherwise the origin the
/// page was served from (the backend serves both the page and `/api/*`).
///
/// # Returns
/// - API base URL like "http://localhost:5000"
/// - Empty string if window is not available (relative URLs are used then)
pub fn api_base() -> String {
    let configured = app_config().api.base_url.trim();
    if !configured.is_empty() {
        return configured.trim_end_matches('/').to_string();
    }
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/empresas");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Base URL of the public CNPJ registry
pub fn registry_base() -> String {
    app_config().registry.base_url.clone()
}

/// Ошибка JS-вызова (fetch, FormData, Blob) -> сетевая ошибка
pub fn js_error(e: JsValue) -> UseCaseError {
    UseCaseError::network(format!("{e:?}"))
}
