use derive_more::Display;

/// Why a request to the market data API did not produce usable data.
///
/// The UI treats every variant the same way (one "fetch failed" toast); the
/// distinction only exists for logs.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum FetchError {
    #[display(fmt = "request failed: {}", _0)]
    Request(String),
    #[display(fmt = "HTTP error: {} - {}", status, status_text)]
    Status { status: u16, status_text: String },
    #[display(fmt = "failed to decode response: {}", _0)]
    Decode(String),
    #[display(fmt = "request aborted")]
    Aborted,
}

/// The sparkline URL is derived from the numeric id inside an image URL.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum SparklineError {
    #[display(fmt = "image URL does not match the asset image pattern: {}", _0)]
    UnrecognizedImageUrl(String),
    #[display(fmt = "image URL carries a non-numeric coin id: {}", _0)]
    InvalidCoinId(String),
}

/// Failures outside the fetch path: drawing the chart and validating settings
#[derive(Debug, Clone, PartialEq, Display)]
pub enum AppError {
    #[display(fmt = "Rendering Error: {}", _0)]
    Rendering(String),
    #[display(fmt = "Configuration Error: {}", _0)]
    Configuration(String),
}

impl std::error::Error for FetchError {}
impl std::error::Error for SparklineError {}
impl std::error::Error for AppError {}

pub type FetchResult<T> = Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_message() {
        let err = FetchError::Status { status: 429, status_text: "Too Many Requests".into() };
        assert_eq!(err.to_string(), "HTTP error: 429 - Too Many Requests");
    }

    #[test]
    fn app_error_names_its_origin() {
        let err = AppError::Rendering("2D context unavailable".into());
        assert_eq!(err.to_string(), "Rendering Error: 2D context unavailable");
        assert_eq!(FetchError::Aborted.to_string(), "request aborted");
    }
}
