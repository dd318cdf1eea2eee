//! HTTP access to the market data API.

pub mod coingecko_rest_client;
pub mod dto;

pub use coingecko_rest_client::CoinGeckoRestClient;

use crate::domain::{
    errors::{FetchError, FetchResult},
    logging::{logger, LogComponent, LogLevel, LogRecord},
};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

/// JSON-over-HTTP client on top of gloo for WASM
#[derive(Debug, Clone)]
pub struct GlooHttpClient {
    base_url: String,
}

impl GlooHttpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for `endpoint`; absolute endpoints are used as is.
    pub fn url_for(&self, endpoint: &str) -> String {
        if endpoint.starts_with("http") {
            endpoint.to_string()
        } else {
            format!("{}/{}", self.base_url.trim_end_matches('/'), endpoint.trim_start_matches('/'))
        }
    }

    /// GET `endpoint` and decode the JSON body.
    ///
    /// Transport failures, non-2xx statuses and undecodable bodies all come
    /// back as a [`FetchError`].
    pub async fn get_json<T>(&self, endpoint: &str) -> FetchResult<T>
    where
        T: DeserializeOwned,
    {
        let url = self.url_for(endpoint);
        crate::log_debug!(LogComponent::Infrastructure("HTTP"), "🌐 GET JSON: {}", url);

        let response = Request::get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Request(format!("{e:?}")))?;

        if !response.ok() {
            let error = FetchError::Status { status: response.status(), status_text: response.status_text() };
            logger().emit(
                LogRecord::new(LogLevel::Error, LogComponent::Infrastructure("HTTP"), "GET failed")
                    .field("status", response.status())
                    .field("url", &url),
            );
            return Err(error);
        }

        let data = response
            .json::<T>()
            .await
            .map_err(|e| FetchError::Decode(format!("{e:?}")))?;

        crate::log_debug!(LogComponent::Infrastructure("HTTP"), "✅ GET JSON response parsed: {}", url);
        Ok(data)
    }
}

/// Helpers for building request URLs
pub struct HttpUtils;

impl HttpUtils {
    /// Append query parameters in the given order
    pub fn build_url_with_params(base_url: &str, params: &[(&str, String)]) -> String {
        if params.is_empty() {
            return base_url.to_string();
        }

        let query_string: String = params
            .iter()
            .map(|(key, value)| format!("{}={}", key, Self::url_encode(value)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", base_url, query_string)
    }

    /// Percent-encode the characters that would break a query string
    pub fn url_encode(input: &str) -> String {
        input
            .replace('%', "%25")
            .replace(' ', "%20")
            .replace('&', "%26")
            .replace('=', "%3D")
            .replace('?', "%3F")
            .replace('#', "%23")
            .replace('+', "%2B")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_building() {
        let url = HttpUtils::build_url_with_params(
            "https://api.example.com/data",
            &[("vs_currency", "usd".to_string()), ("page", "2".to_string())],
        );
        assert_eq!(url, "https://api.example.com/data?vs_currency=usd&page=2");
    }

    #[test]
    fn test_url_encoding() {
        assert_eq!(HttpUtils::url_encode("hello world"), "hello%20world");
        assert_eq!(HttpUtils::url_encode("a&b=c"), "a%26b%3Dc");
        assert_eq!(HttpUtils::url_encode("1h,24h,7d"), "1h,24h,7d");
    }

    #[test]
    fn joins_relative_endpoints() {
        let client = GlooHttpClient::new("https://api.example.com/v3/");
        assert_eq!(client.url_for("/global"), "https://api.example.com/v3/global");
        assert_eq!(client.url_for("https://other.test/x"), "https://other.test/x");
    }
}
