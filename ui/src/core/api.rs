//! HTTP client for the two pricing endpoints.
//!
//! The real implementation is wasm-only: requests go through `gloo-net`
//! against the base URL from [`super::config`]. Native builds get stubs that
//! return [`ApiError::Unsupported`] so the crate still compiles and its pure
//! modules test off-wasm.

use thiserror::Error;

use super::model::{GpuRecord, PricePoint};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },
    #[error("invalid payload: {0}")]
    Decode(String),
    #[error("HTTP fetch is only available in the browser build")]
    Unsupported,
}

pub fn gpu_list_url(base: &str) -> String {
    format!("{base}/api/gpu-list")
}

#[cfg(target_arch = "wasm32")]
mod fetch {
    use gloo_net::http::Request;
    use serde::de::DeserializeOwned;

    use super::super::config;
    use super::{ApiError, GpuRecord, PricePoint};

    async fn get_json<T: DeserializeOwned>(url: String) -> Result<T, ApiError> {
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Status {
                status: response.status(),
                url,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    /// The full catalog, fetched once at startup.
    pub async fn fetch_gpu_list() -> Result<Vec<GpuRecord>, ApiError> {
        get_json(super::gpu_list_url(config::api_base())).await
    }

    /// Price history for one GPU, joined by name.
    pub async fn fetch_price_history(gpu_name: &str) -> Result<Vec<PricePoint>, ApiError> {
        let url = format!(
            "{}/api/gpu-prices?gpu={}",
            config::api_base(),
            String::from(js_sys::encode_uri_component(gpu_name)),
        );
        get_json(url).await
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod fetch {
    use super::{ApiError, GpuRecord, PricePoint};

    pub async fn fetch_gpu_list() -> Result<Vec<GpuRecord>, ApiError> {
        Err(ApiError::Unsupported)
    }

    pub async fn fetch_price_history(_gpu_name: &str) -> Result<Vec<PricePoint>, ApiError> {
        Err(ApiError::Unsupported)
    }
}

pub use fetch::{fetch_gpu_list, fetch_price_history};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_url_joins_base_and_path() {
        assert_eq!(gpu_list_url(""), "/api/gpu-list");
        assert_eq!(
            gpu_list_url("https://prices.example.com"),
            "https://prices.example.com/api/gpu-list"
        );
    }
}
