//! Wire format of the CoinGecko v3 endpoints and conversion into domain types.
//!
//! Numeric fields the API may send as `null` are optional here so a sparse
//! row never fails the whole page.

use crate::domain::market_data::{AssetId, AssetIdentity, AssetSummary, Currency, GlobalSnapshot, PricePoint};
use serde::Deserialize;
use std::collections::HashMap;

/// Element of `GET /coins/markets`
#[derive(Debug, Clone, Deserialize)]
pub struct MarketCoinDto {
    pub id: String,
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub image: String,
    pub current_price: Option<f64>,
    pub market_cap: Option<f64>,
    pub market_cap_rank: Option<u32>,
    pub fully_diluted_valuation: Option<f64>,
    pub total_volume: Option<f64>,
    pub market_cap_change_24h: Option<f64>,
    pub circulating_supply: Option<f64>,
    pub total_supply: Option<f64>,
    pub max_supply: Option<f64>,
    pub price_change_percentage_1h_in_currency: Option<f64>,
    pub price_change_percentage_24h_in_currency: Option<f64>,
    pub price_change_percentage_7d_in_currency: Option<f64>,
}

impl MarketCoinDto {
    /// Convert the DTO into a domain entity; rows without an id are rejected.
    pub fn to_domain(self) -> Result<AssetSummary, String> {
        let id = AssetId::new(self.id)?;
        Ok(AssetSummary {
            id,
            name: self.name,
            symbol: self.symbol,
            image: self.image,
            current_price: self.current_price,
            market_cap: self.market_cap,
            market_cap_rank: self.market_cap_rank,
            total_volume: self.total_volume,
            fully_diluted_valuation: self.fully_diluted_valuation,
            market_cap_change_24h: self.market_cap_change_24h,
            circulating_supply: self.circulating_supply,
            total_supply: self.total_supply,
            max_supply: self.max_supply,
            price_change_percentage_1h: self.price_change_percentage_1h_in_currency,
            price_change_percentage_24h: self.price_change_percentage_24h_in_currency,
            price_change_percentage_7d: self.price_change_percentage_7d_in_currency,
        })
    }
}

/// `GET /global`
#[derive(Debug, Clone, Deserialize)]
pub struct GlobalResponseDto {
    pub data: GlobalDataDto,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GlobalDataDto {
    pub active_cryptocurrencies: u64,
    #[serde(default)]
    pub markets: u64,
    #[serde(default)]
    pub total_market_cap: HashMap<String, f64>,
    pub market_cap_change_percentage_24h_usd: Option<f64>,
}

impl GlobalResponseDto {
    pub fn to_domain(self, currency: Currency) -> GlobalSnapshot {
        let data = self.data;
        GlobalSnapshot {
            active_cryptocurrencies: data.active_cryptocurrencies,
            markets: data.markets,
            total_market_cap: data.total_market_cap.get(&currency.api_code()).copied(),
            market_cap_change_percentage_24h: data.market_cap_change_percentage_24h_usd,
        }
    }
}

/// Element of `GET /coins/list`
#[derive(Debug, Clone, Deserialize)]
pub struct CoinListEntryDto {
    pub id: String,
    pub symbol: String,
    pub name: String,
}

impl CoinListEntryDto {
    pub fn to_domain(self) -> Option<AssetIdentity> {
        let id = AssetId::new(self.id).ok()?;
        Some(AssetIdentity { id, name: self.name, symbol: self.symbol })
    }
}

/// `GET /coins/{id}/market_chart`; each sample is `[timestamp_ms, price]`
#[derive(Debug, Clone, Deserialize)]
pub struct MarketChartDto {
    pub prices: Vec<(f64, Option<f64>)>,
}

impl MarketChartDto {
    /// Samples in API order; ones with a missing price or bad timestamp are skipped.
    pub fn to_domain(self) -> Vec<PricePoint> {
        self.prices
            .into_iter()
            .filter_map(|(timestamp, price)| {
                let price = price.filter(|p| p.is_finite())?;
                if !timestamp.is_finite() || timestamp < 0.0 {
                    return None;
                }
                Some(PricePoint::new(timestamp as u64, price))
            })
            .collect()
    }
}
