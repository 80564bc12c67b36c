pub mod forecast;

use gloo_net::http::Request;
use serde::Deserialize;

use crate::settings;

fn api_base() -> String {
    settings::get_settings().api_base_url()
}

/// Full URL for an endpoint, for places that navigate instead of fetching
/// (CSV export).
pub fn endpoint_url(endpoint: &str) -> String {
    format!("{}{}", api_base(), endpoint)
}

/// Common GET request handler.
///
/// The server answers with the payload directly (no envelope); any non-OK
/// status or parse failure collapses into a generic message string.
pub async fn get<T>(endpoint: &str) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
{
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url).send().await.map_err(|e| {
        let error_msg = format!("Request failed: {}", e);
        log::error!("GET {} - {}", endpoint, error_msg);
        error_msg
    })?;

    if !response.ok() {
        let error_msg = format!("HTTP error: {}", response.status());
        log::error!("GET {} - {}", endpoint, error_msg);
        return Err(error_msg);
    }

    log::trace!("GET {} - Response received, parsing JSON", endpoint);
    let payload: T = response.json().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("GET {} - {}", endpoint, error_msg);
        error_msg
    })?;

    log::info!("GET {} - Success", endpoint);
    Ok(payload)
}

/// Common POST request handler for body-less action triggers.
pub async fn post<T>(endpoint: &str) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
{
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("POST request to: {}", url);

    let response = Request::post(&url).send().await.map_err(|e| {
        let error_msg = format!("Request failed: {}", e);
        log::error!("POST {} - {}", endpoint, error_msg);
        error_msg
    })?;

    if !response.ok() {
        let error_msg = format!("HTTP error: {}", response.status());
        log::error!("POST {} - {}", endpoint, error_msg);
        return Err(error_msg);
    }

    log::trace!("POST {} - Response received, parsing JSON", endpoint);
    let payload: T = response.json().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("POST {} - {}", endpoint, error_msg);
        error_msg
    })?;

    log::info!("POST {} - Success", endpoint);
    Ok(payload)
}
