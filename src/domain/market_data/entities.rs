pub use super::value_objects::{AssetId, ChangeWindow};
use serde::{Deserialize, Serialize};

/// Domain entity - one row of the paginated market listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetSummary {
    pub id: AssetId,
    pub name: String,
    pub symbol: String,
    pub image: String,
    pub current_price: Option<f64>,
    pub market_cap: Option<f64>,
    pub market_cap_rank: Option<u32>,
    pub total_volume: Option<f64>,
    pub fully_diluted_valuation: Option<f64>,
    pub market_cap_change_24h: Option<f64>,
    pub circulating_supply: Option<f64>,
    pub total_supply: Option<f64>,
    pub max_supply: Option<f64>,
    pub price_change_percentage_1h: Option<f64>,
    pub price_change_percentage_24h: Option<f64>,
    pub price_change_percentage_7d: Option<f64>,
}

impl AssetSummary {
    pub fn change(&self, window: ChangeWindow) -> Option<f64> {
        match window {
            ChangeWindow::OneHour => self.price_change_percentage_1h,
            ChangeWindow::OneDay => self.price_change_percentage_24h,
            ChangeWindow::SevenDays => self.price_change_percentage_7d,
        }
    }

    pub fn display_symbol(&self) -> String {
        self.symbol.to_uppercase()
    }
}

/// Domain entity - lightweight record used by the search control
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetIdentity {
    pub id: AssetId,
    pub name: String,
    pub symbol: String,
}

/// Domain entity - global market aggregates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GlobalSnapshot {
    pub active_cryptocurrencies: u64,
    pub markets: u64,
    pub total_market_cap: Option<f64>,
    pub market_cap_change_percentage_24h: Option<f64>,
}

/// Domain entity - raw sample of a price history, timestamp in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: u64,
    pub price: f64,
}

impl PricePoint {
    pub fn new(timestamp: u64, price: f64) -> Self {
        Self { timestamp, price }
    }
}
