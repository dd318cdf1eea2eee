use super::{Completion, FetchCoordinator, FetchSlot, LoadStatus, RequestTicket};
use crate::config::LOADING_ERROR;
use crate::domain::chart::{PriceChart, dataset_label};
use crate::domain::errors::FetchResult;
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{AssetId, AssetSummary, Currency, HistoryWindow, PricePoint};
use futures::future::AbortRegistration;

/// Parameters of one history request
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRequest {
    pub ticket: RequestTicket,
    pub id: AssetId,
    pub currency: Currency,
    pub window: HistoryWindow,
}

/// State of the detail view, keyed on (selected asset, window).
///
/// Any change of either drops the current chart; a response for an older
/// pair is never applied.
#[derive(Debug)]
pub struct DetailState {
    pub currency: Currency,
    pub selected: Option<AssetSummary>,
    pub window: HistoryWindow,
    pub status: LoadStatus,
    pub chart: Option<PriceChart>,
    requests: FetchCoordinator,
}

impl DetailState {
    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            selected: None,
            window: HistoryWindow::default(),
            status: LoadStatus::Idle,
            chart: None,
            requests: FetchCoordinator::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Open the panel for `asset`, starting from the one-day window.
    pub fn select(&mut self, asset: AssetSummary) {
        self.selected = Some(asset);
        self.window = HistoryWindow::default();
        self.invalidate();
    }

    /// Returns whether the window changed.
    pub fn set_window(&mut self, window: HistoryWindow) -> bool {
        if window == self.window {
            return false;
        }
        self.window = window;
        self.invalidate();
        true
    }

    /// Clear the panel. A history request still in flight is discarded.
    pub fn close(&mut self) {
        self.selected = None;
        self.invalidate();
        self.status = LoadStatus::Idle;
    }

    fn invalidate(&mut self) {
        self.chart = None;
        self.requests.cancel(FetchSlot::History);
    }

    /// Start fetching history for the current pair; `None` with no selection.
    pub fn begin_history(&mut self) -> Option<(HistoryRequest, AbortRegistration)> {
        let id = self.selected.as_ref()?.id.clone();
        let (ticket, registration) = self.requests.begin(FetchSlot::History);
        self.chart = None;
        self.status = LoadStatus::Loading;
        Some((HistoryRequest { ticket, id, currency: self.currency, window: self.window }, registration))
    }

    /// Apply a history response, labelling samples with `label_for`.
    pub fn complete_history<F>(&mut self, ticket: RequestTicket, result: FetchResult<Vec<PricePoint>>, label_for: F) -> Completion
    where
        F: Fn(u64, HistoryWindow) -> String,
    {
        if !self.requests.finish(&ticket) {
            crate::log_debug!(LogComponent::Application("DetailView"), "Dropping stale history response #{}", ticket.seq);
            return Completion::Stale;
        }
        let Some(asset_id) = self.selected.as_ref().map(|a| a.id.clone()) else {
            return Completion::Stale;
        };
        match result {
            Ok(history) => {
                let title = dataset_label(asset_id.value(), self.currency.code());
                let chart = PriceChart::from_history(title, self.window, &history, label_for);
                crate::log_debug!(
                    LogComponent::Application("DetailView"),
                    "History for {} ({}): {} samples, {} points",
                    asset_id,
                    self.window.label(),
                    history.len(),
                    chart.len()
                );
                self.chart = Some(chart);
                self.status = LoadStatus::Ready;
                Completion::Applied
            }
            Err(e) => {
                crate::log_error!(LogComponent::Application("DetailView"), "History for {} failed: {}", asset_id, e);
                self.status = LoadStatus::Failed;
                Completion::Failed(LOADING_ERROR.to_string())
            }
        }
    }
}
