use crate::domain::errors::AppError;
use crate::domain::logging::LogLevel;
use crate::domain::market_data::Currency;

pub const DEFAULT_API_BASE_URL: &str = "https://api.coingecko.com/api/v3";
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://assets.coingecko.com/coins/images";
pub const DEFAULT_SPARKLINE_BASE_URL: &str = "https://www.coingecko.com/coins";

/// Shown for every failed request, whatever the cause
pub const LOADING_ERROR: &str = "Error while loading data, please try again later.";

/// Runtime settings of the dashboard.
///
/// The API base URL can be overridden at build time with `COINGECKO_API_URL`.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub image_base_url: String,
    pub sparkline_base_url: String,
    pub currency: Currency,
    pub rows_per_page: u32,
    pub rows_per_page_options: Vec<u32>,
    pub toast_auto_close_ms: u32,
    pub search_result_limit: usize,
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("COINGECKO_API_URL")
                .unwrap_or(DEFAULT_API_BASE_URL)
                .to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            sparkline_base_url: DEFAULT_SPARKLINE_BASE_URL.to_string(),
            currency: Currency::Usd,
            rows_per_page: 15,
            rows_per_page_options: vec![5, 15, 25],
            toast_auto_close_ms: 5000,
            search_result_limit: 10,
            log_level: if cfg!(debug_assertions) { LogLevel::Debug } else { LogLevel::Info },
        }
    }
}

impl AppConfig {
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn with_rows_per_page(mut self, rows: u32) -> Self {
        self.rows_per_page = rows;
        self
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.api_base_url.trim().is_empty() {
            return Err(AppError::Configuration("API base URL is empty".to_string()));
        }
        if !self.rows_per_page_options.contains(&self.rows_per_page) {
            return Err(AppError::Configuration(format!(
                "rows per page {} is not one of {:?}",
                self.rows_per_page, self.rows_per_page_options
            )));
        }
        Ok(())
    }
}
