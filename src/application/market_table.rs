use super::{Completion, FetchCoordinator, FetchSlot, LoadStatus, RequestTicket};
use crate::config::{AppConfig, LOADING_ERROR};
use crate::domain::errors::FetchResult;
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{AssetId, AssetIdentity, AssetSummary, GlobalSnapshot, ListingQuery};
use crate::view_state::PagerState;
use futures::future::AbortRegistration;

/// State of the market table view.
///
/// Owns three independent fetch lifecycles: the listing page (re-run whenever
/// page, page size or filter change), the global snapshot and the identity
/// list (both fetched once on mount).
#[derive(Debug)]
pub struct MarketTableState {
    pub query: ListingQuery,
    pub listing_status: LoadStatus,
    pub rows: Vec<AssetSummary>,
    /// Request number of the fetch `rows` came from
    pub listing_seq: u64,
    pub global_status: LoadStatus,
    pub global: Option<GlobalSnapshot>,
    pub identities_status: LoadStatus,
    pub identities: Vec<AssetIdentity>,
    pub filter_identity: Option<AssetIdentity>,
    requests: FetchCoordinator,
}

impl MarketTableState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            query: ListingQuery::new(config.currency, config.rows_per_page),
            listing_status: LoadStatus::Idle,
            rows: Vec::new(),
            listing_seq: 0,
            global_status: LoadStatus::Idle,
            global: None,
            identities_status: LoadStatus::Idle,
            identities: Vec::new(),
            filter_identity: None,
            requests: FetchCoordinator::new(),
        }
    }

    /// Returns whether the query changed, i.e. whether a fetch is due.
    pub fn set_page(&mut self, page_index: u32) -> bool {
        self.replace_query(self.query.with_page(page_index))
    }

    pub fn set_rows_per_page(&mut self, per_page: u32) -> bool {
        self.replace_query(self.query.with_per_page(per_page))
    }

    /// Scope the listing to one asset, or clear the scoping with `None`.
    pub fn set_filter(&mut self, identity: Option<AssetIdentity>) -> bool {
        let filter = identity.as_ref().map(|i| i.id.clone());
        self.filter_identity = identity;
        self.replace_query(self.query.with_filter(filter))
    }

    fn replace_query(&mut self, query: ListingQuery) -> bool {
        if query == self.query {
            return false;
        }
        self.query = query;
        true
    }

    pub fn filter(&self) -> Option<&AssetId> {
        self.query.filter.as_ref()
    }

    pub fn pager(&self) -> PagerState {
        PagerState::from(&self.query)
    }

    /// Row count the pager pages over.
    ///
    /// This is the unfiltered active-asset count even while a filter is
    /// applied, so the pager overstates a filtered listing.
    pub fn pager_total(&self) -> u64 {
        self.global.map(|g| g.active_cryptocurrencies).unwrap_or(0)
    }

    pub fn is_listing_loading(&self) -> bool {
        self.listing_status == LoadStatus::Loading
    }

    /// Enter `loading` for the current query. Any listing request still in
    /// flight is aborted and its result will be ignored.
    pub fn begin_listing(&mut self) -> (RequestTicket, ListingQuery, AbortRegistration) {
        let (ticket, registration) = self.requests.begin(FetchSlot::Listing);
        self.listing_status = LoadStatus::Loading;
        (ticket, self.query.clone(), registration)
    }

    /// Rows are replaced only on success; a failure keeps what is displayed.
    pub fn complete_listing(&mut self, ticket: RequestTicket, result: FetchResult<Vec<AssetSummary>>) -> Completion {
        if !self.requests.finish(&ticket) {
            crate::log_debug!(
                LogComponent::Application("MarketTable"),
                "Dropping stale listing response #{}",
                ticket.seq
            );
            return Completion::Stale;
        }
        match result {
            Ok(rows) => {
                crate::log_debug!(LogComponent::Application("MarketTable"), "Listing #{} applied: {} rows", ticket.seq, rows.len());
                self.rows = rows;
                self.listing_seq = ticket.seq;
                self.listing_status = LoadStatus::Ready;
                Completion::Applied
            }
            Err(e) => {
                crate::log_error!(LogComponent::Application("MarketTable"), "Listing #{} failed: {}", ticket.seq, e);
                self.listing_status = LoadStatus::Failed;
                Completion::Failed(LOADING_ERROR.to_string())
            }
        }
    }

    pub fn begin_global(&mut self) -> (RequestTicket, AbortRegistration) {
        self.global_status = LoadStatus::Loading;
        self.requests.begin(FetchSlot::Global)
    }

    pub fn complete_global(&mut self, ticket: RequestTicket, result: FetchResult<GlobalSnapshot>) -> Completion {
        if !self.requests.finish(&ticket) {
            return Completion::Stale;
        }
        match result {
            Ok(snapshot) => {
                self.global = Some(snapshot);
                self.global_status = LoadStatus::Ready;
                Completion::Applied
            }
            Err(e) => {
                crate::log_error!(LogComponent::Application("MarketTable"), "Global snapshot failed: {}", e);
                self.global_status = LoadStatus::Failed;
                Completion::Failed(LOADING_ERROR.to_string())
            }
        }
    }

    pub fn begin_identities(&mut self) -> (RequestTicket, AbortRegistration) {
        self.identities_status = LoadStatus::Loading;
        self.requests.begin(FetchSlot::Identities)
    }

    pub fn complete_identities(&mut self, ticket: RequestTicket, result: FetchResult<Vec<AssetIdentity>>) -> Completion {
        if !self.requests.finish(&ticket) {
            return Completion::Stale;
        }
        match result {
            Ok(identities) => {
                self.identities = identities;
                self.identities_status = LoadStatus::Ready;
                Completion::Applied
            }
            Err(e) => {
                crate::log_error!(LogComponent::Application("MarketTable"), "Identity list failed: {}", e);
                self.identities_status = LoadStatus::Failed;
                Completion::Failed(LOADING_ERROR.to_string())
            }
        }
    }
}
