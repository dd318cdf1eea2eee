use futures::future::{FutureExt, LocalBoxFuture};
use std::rc::Rc;

use crate::domain::errors::FetchResult;
use crate::domain::market_data::{
    AssetId, AssetIdentity, AssetSummary, Currency, GlobalSnapshot, HistoryWindow, ListingQuery,
    PricePoint,
};

/// Read-only source of market data.
///
/// Futures are not `Send`: everything runs on the browser's event loop.
#[allow(async_fn_in_trait)]
pub trait MarketDataRepository {
    /// One page of asset summaries for the query
    async fn get_markets(&self, query: &ListingQuery) -> FetchResult<Vec<AssetSummary>>;

    /// Aggregate counts of the whole market
    async fn get_global(&self) -> FetchResult<GlobalSnapshot>;

    /// Every known asset identity, for client-side search
    async fn get_identities(&self) -> FetchResult<Vec<AssetIdentity>>;

    /// Ordered price samples of one asset over a window
    async fn get_price_history(
        &self,
        id: &AssetId,
        currency: Currency,
        window: HistoryWindow,
    ) -> FetchResult<Vec<PricePoint>>;
}

/// Dyn-compatible mirror of [`MarketDataRepository`]; every repository gets it for free.
pub trait ErasedMarketDataRepository {
    fn markets<'a>(&'a self, query: &'a ListingQuery) -> LocalBoxFuture<'a, FetchResult<Vec<AssetSummary>>>;
    fn global(&self) -> LocalBoxFuture<'_, FetchResult<GlobalSnapshot>>;
    fn identities(&self) -> LocalBoxFuture<'_, FetchResult<Vec<AssetIdentity>>>;
    fn price_history<'a>(
        &'a self,
        id: &'a AssetId,
        currency: Currency,
        window: HistoryWindow,
    ) -> LocalBoxFuture<'a, FetchResult<Vec<PricePoint>>>;
}

impl<R: MarketDataRepository> ErasedMarketDataRepository for R {
    fn markets<'a>(&'a self, query: &'a ListingQuery) -> LocalBoxFuture<'a, FetchResult<Vec<AssetSummary>>> {
        self.get_markets(query).boxed_local()
    }

    fn global(&self) -> LocalBoxFuture<'_, FetchResult<GlobalSnapshot>> {
        self.get_global().boxed_local()
    }

    fn identities(&self) -> LocalBoxFuture<'_, FetchResult<Vec<AssetIdentity>>> {
        self.get_identities().boxed_local()
    }

    fn price_history<'a>(
        &'a self,
        id: &'a AssetId,
        currency: Currency,
        window: HistoryWindow,
    ) -> LocalBoxFuture<'a, FetchResult<Vec<PricePoint>>> {
        self.get_price_history(id, currency, window).boxed_local()
    }
}

/// Cheaply clonable handle to whichever repository the page was built with
#[derive(Clone)]
pub struct SharedRepository(Rc<dyn ErasedMarketDataRepository>);

impl SharedRepository {
    pub fn new<R: MarketDataRepository + 'static>(repository: R) -> Self {
        Self(Rc::new(repository))
    }

    /// Share an existing handle, so the caller can still inspect the repository.
    pub fn from_rc<R: MarketDataRepository + 'static>(repository: Rc<R>) -> Self {
        Self(repository)
    }
}

impl MarketDataRepository for SharedRepository {
    async fn get_markets(&self, query: &ListingQuery) -> FetchResult<Vec<AssetSummary>> {
        self.0.markets(query).await
    }

    async fn get_global(&self) -> FetchResult<GlobalSnapshot> {
        self.0.global().await
    }

    async fn get_identities(&self) -> FetchResult<Vec<AssetIdentity>> {
        self.0.identities().await
    }

    async fn get_price_history(
        &self,
        id: &AssetId,
        currency: Currency,
        window: HistoryWindow,
    ) -> FetchResult<Vec<PricePoint>> {
        self.0.price_history(id, currency, window).await
    }
}
