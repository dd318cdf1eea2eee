#![allow(dead_code)]

use coin_market_wasm::domain::errors::{FetchError, FetchResult};
use coin_market_wasm::domain::market_data::{
    AssetId, AssetIdentity, AssetSummary, Currency, GlobalSnapshot, HistoryWindow, ListingQuery,
    MarketDataRepository, PricePoint,
};
use coin_market_wasm::infrastructure::ui::NotificationProvider;
use gloo_timers::future::sleep;
use std::cell::{Cell, RefCell};
use std::time::Duration;

pub fn summary(id: &str) -> AssetSummary {
    AssetSummary {
        id: AssetId::from(id),
        name: id.to_string(),
        symbol: id.chars().take(3).collect(),
        image: format!("https://assets.coingecko.com/coins/images/1/large/{id}.png"),
        current_price: Some(100.0),
        market_cap: Some(1_000_000.0),
        market_cap_rank: Some(1),
        total_volume: Some(50_000.0),
        fully_diluted_valuation: None,
        market_cap_change_24h: None,
        circulating_supply: None,
        total_supply: None,
        max_supply: None,
        price_change_percentage_1h: Some(0.5),
        price_change_percentage_24h: Some(-1.0),
        price_change_percentage_7d: None,
    }
}

/// Repository with per-request delays and switchable failures
pub struct MockRepository {
    listing_delay: Box<dyn Fn(&ListingQuery) -> u64>,
    history_delay: Box<dyn Fn(HistoryWindow) -> u64>,
    pub fail_listing: Cell<bool>,
    pub fail_history: Cell<bool>,
    pub listing_requests: RefCell<Vec<ListingQuery>>,
    pub history_requests: RefCell<Vec<(AssetId, HistoryWindow)>>,
}

impl MockRepository {
    pub fn new() -> Self {
        Self {
            listing_delay: Box::new(|_| 0),
            history_delay: Box::new(|_| 0),
            fail_listing: Cell::new(false),
            fail_history: Cell::new(false),
            listing_requests: RefCell::new(Vec::new()),
            history_requests: RefCell::new(Vec::new()),
        }
    }

    pub fn with_listing_delay(mut self, delay: impl Fn(&ListingQuery) -> u64 + 'static) -> Self {
        self.listing_delay = Box::new(delay);
        self
    }

    pub fn with_history_delay(mut self, delay: impl Fn(HistoryWindow) -> u64 + 'static) -> Self {
        self.history_delay = Box::new(delay);
        self
    }

    /// Rows a page resolves to: ids `coin-{offset}` onwards, priced at `100 + per_page`
    /// so a refetch with another page size is visible in the table.
    pub fn rows_for(query: &ListingQuery) -> Vec<AssetSummary> {
        let priced = |id: &str| AssetSummary { current_price: Some(100.0 + query.per_page as f64), ..summary(id) };
        if let Some(id) = &query.filter {
            return vec![priced(id.value())];
        }
        (0..query.per_page as u64)
            .map(|i| priced(&format!("coin-{}", query.offset() + i)))
            .collect()
    }
}

fn server_error() -> FetchError {
    FetchError::Status { status: 500, status_text: "Internal Server Error".into() }
}

impl MarketDataRepository for MockRepository {
    async fn get_markets(&self, query: &ListingQuery) -> FetchResult<Vec<AssetSummary>> {
        self.listing_requests.borrow_mut().push(query.clone());
        sleep(Duration::from_millis((self.listing_delay)(query))).await;
        if self.fail_listing.get() {
            return Err(server_error());
        }
        Ok(Self::rows_for(query))
    }

    async fn get_global(&self) -> FetchResult<GlobalSnapshot> {
        Ok(GlobalSnapshot {
            active_cryptocurrencies: 40,
            markets: 900,
            total_market_cap: Some(2.5e12),
            market_cap_change_percentage_24h: Some(1.2),
        })
    }

    async fn get_identities(&self) -> FetchResult<Vec<AssetIdentity>> {
        Ok(vec![AssetIdentity {
            id: AssetId::from("bitcoin"),
            name: "Bitcoin".into(),
            symbol: "btc".into(),
        }])
    }

    async fn get_price_history(
        &self,
        id: &AssetId,
        _currency: Currency,
        window: HistoryWindow,
    ) -> FetchResult<Vec<PricePoint>> {
        self.history_requests.borrow_mut().push((id.clone(), window));
        sleep(Duration::from_millis((self.history_delay)(window))).await;
        if self.fail_history.get() {
            return Err(server_error());
        }
        // Two samples inside the same minute, then one a day later.
        let start = 1_700_000_000_000u64;
        Ok(vec![
            PricePoint::new(start, 10.0),
            PricePoint::new(start + 1_000, 11.0),
            PricePoint::new(start + 86_400_000, 12.0),
        ])
    }
}

/// Notifier that records messages instead of rendering toasts
#[derive(Default)]
pub struct RecordingNotifier {
    pub errors: RefCell<Vec<String>>,
}

impl NotificationProvider for RecordingNotifier {
    fn notify_error(&self, message: &str) -> u64 {
        let mut errors = self.errors.borrow_mut();
        errors.push(message.to_string());
        errors.len() as u64
    }

    fn dismiss(&self, _id: u64) {}
}
