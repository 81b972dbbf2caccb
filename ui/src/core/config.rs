//! Build-time API endpoint configuration.

use once_cell::sync::OnceCell;

static BASE_URL: OnceCell<String> = OnceCell::new();

/// Base URL for the pricing API, without a trailing slash.
///
/// Resolved from the `GPU_API_BASE_URL` compile-time environment variable;
/// an empty value means same-origin relative URLs, which is what the web
/// build wants when the API is served next to the bundle.
pub fn api_base() -> &'static str {
    BASE_URL
        .get_or_init(|| {
            option_env!("GPU_API_BASE_URL")
                .unwrap_or_default()
                .trim_end_matches('/')
                .to_string()
        })
        .as_str()
}

/// One-shot runtime override, for deployment glue that knows the endpoint
/// before the first request goes out. Later calls (or a call after
/// [`api_base`] has resolved) are ignored.
pub fn override_api_base(url: impl Into<String>) {
    let _ = BASE_URL.set(url.into().trim_end_matches('/').to_string());
}
