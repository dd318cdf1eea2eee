use futures::future::Abortable;
use leptos::*;

use crate::{
    application::{Completion, DetailState, MarketTableState, RequestTicket},
    config::AppConfig,
    domain::{
        errors::{FetchError, FetchResult},
        logging::{logger, LogComponent, LogRecord},
        market_data::{AssetSummary, MarketDataRepository, SharedRepository},
    },
    infrastructure::{
        http::coingecko_rest_client::CoinGeckoRestClient,
        ui::{NotificationProvider, ToastNotificationService},
    },
    presentation::{DetailView, MarketTable, ToastContainer},
    time_utils::format_history_label,
};

/// Shared services handed to every view through context
#[derive(Clone)]
pub struct AppServices {
    pub config: AppConfig,
    pub repository: SharedRepository,
    pub notifier: ToastNotificationService,
}

impl AppServices {
    /// Services backed by the REST API named in `config`
    pub fn new(config: AppConfig) -> Self {
        let repository = SharedRepository::new(CoinGeckoRestClient::from_config(&config));
        Self::with_repository(config, repository)
    }

    pub fn with_repository(config: AppConfig, repository: SharedRepository) -> Self {
        let notifier = ToastNotificationService::new(config.toast_auto_close_ms);
        Self { config, repository, notifier }
    }
}

pub fn use_services() -> AppServices {
    expect_context::<AppServices>()
}

fn report<N: NotificationProvider>(ticket: RequestTicket, completion: Completion, notifier: &N) -> Completion {
    logger().emit(
        LogRecord::new(completion.log_level(), LogComponent::Application("Fetch"), "request settled")
            .field("slot", ticket.slot)
            .field("seq", ticket.seq)
            .field("outcome", completion.outcome()),
    );
    if let Some(message) = completion.notification() {
        notifier.notify_error(message);
    }
    completion
}

fn flatten_aborted<T>(result: Result<FetchResult<T>, futures::future::Aborted>) -> FetchResult<T> {
    result.unwrap_or(Err(FetchError::Aborted))
}

/// Fetch the listing page for the current query.
///
/// A newer call aborts this one; its result is then dropped as stale.
pub async fn load_listing<R, N>(repo: &R, state: RwSignal<MarketTableState>, notifier: &N) -> Completion
where
    R: MarketDataRepository,
    N: NotificationProvider,
{
    let Some((ticket, query, registration)) = state.try_update(|s| s.begin_listing()) else {
        return Completion::Stale;
    };
    crate::log_debug!(
        LogComponent::Presentation("MarketTable"),
        "Listing #{} page={} per_page={} filter={:?}",
        ticket.seq,
        query.api_page(),
        query.per_page,
        query.filter
    );
    let result = flatten_aborted(Abortable::new(repo.get_markets(&query), registration).await);
    let completion = state
        .try_update(|s| s.complete_listing(ticket, result))
        .unwrap_or(Completion::Stale);
    report(ticket, completion, notifier)
}

pub async fn load_global<R, N>(repo: &R, state: RwSignal<MarketTableState>, notifier: &N) -> Completion
where
    R: MarketDataRepository,
    N: NotificationProvider,
{
    let Some((ticket, registration)) = state.try_update(|s| s.begin_global()) else {
        return Completion::Stale;
    };
    let result = flatten_aborted(Abortable::new(repo.get_global(), registration).await);
    let completion = state
        .try_update(|s| s.complete_global(ticket, result))
        .unwrap_or(Completion::Stale);
    report(ticket, completion, notifier)
}

pub async fn load_identities<R, N>(repo: &R, state: RwSignal<MarketTableState>, notifier: &N) -> Completion
where
    R: MarketDataRepository,
    N: NotificationProvider,
{
    let Some((ticket, registration)) = state.try_update(|s| s.begin_identities()) else {
        return Completion::Stale;
    };
    let result = flatten_aborted(Abortable::new(repo.get_identities(), registration).await);
    let completion = state
        .try_update(|s| s.complete_identities(ticket, result))
        .unwrap_or(Completion::Stale);
    report(ticket, completion, notifier)
}

/// Fetch price history for the selected (asset, window) pair.
pub async fn load_history<R, N>(repo: &R, state: RwSignal<DetailState>, notifier: &N) -> Completion
where
    R: MarketDataRepository,
    N: NotificationProvider,
{
    let Some((request, registration)) = state.try_update(|s| s.begin_history()).flatten() else {
        return Completion::Stale;
    };
    let history = repo.get_price_history(&request.id, request.currency, request.window);
    let result = flatten_aborted(Abortable::new(history, registration).await);
    let completion = state
        .try_update(|s| s.complete_history(request.ticket, result, format_history_label))
        .unwrap_or(Completion::Stale);
    report(request.ticket, completion, notifier)
}

/// Root component: market table, detail modal and toast stack
#[component]
pub fn App() -> impl IntoView {
    let services = AppServices::new(AppConfig::default());
    if let Err(e) = services.config.validate() {
        crate::log_error!(LogComponent::Presentation("App"), "Invalid configuration: {}", e);
    }
    let detail = create_rw_signal(DetailState::new(services.config.currency));
    provide_context(services);

    let on_select = Callback::new(move |asset: AssetSummary| {
        detail.update(|d| {
            if d.selected.as_ref().map(|a| &a.id) != Some(&asset.id) {
                d.select(asset);
            }
        })
    });

    view! {
        <style>
            {r#"
            .coin-market-app {
                font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
                background: #fafafa;
                min-height: 100vh;
                padding: 20px;
                color: #212121;
            }

            .coin-market-app h1 {
                margin: 0 0 16px 0;
                font-weight: 500;
            }

            .global-banner {
                display: flex;
                gap: 24px;
                margin-bottom: 12px;
                font-size: 14px;
            }

            .global-banner .value {
                font-weight: 600;
                color: #1976d2;
            }

            .search-box {
                position: relative;
                width: 320px;
                margin-bottom: 12px;
            }

            .search-box input {
                width: 100%;
                padding: 8px;
                border: 1px solid #bdbdbd;
                border-radius: 4px;
            }

            .search-suggestions {
                position: absolute;
                z-index: 10;
                width: 100%;
                margin: 0;
                padding: 0;
                list-style: none;
                background: white;
                border: 1px solid #e0e0e0;
                box-shadow: 0 2px 6px rgba(0, 0, 0, 0.15);
            }

            .search-suggestions li {
                padding: 6px 8px;
                cursor: pointer;
            }

            .search-suggestions li:hover {
                background: #f5f5f5;
            }

            .market-table {
                width: 100%;
                border-collapse: collapse;
                background: white;
            }

            .market-table th, .market-table td {
                padding: 8px;
                border-bottom: 1px solid #eeeeee;
                text-align: left;
            }

            .market-table .numeric {
                text-align: right;
            }

            .market-table tbody tr {
                cursor: pointer;
            }

            .market-table tbody tr:hover {
                background: #f5f5f5;
            }

            .coin-cell img {
                width: 24px;
                height: 24px;
                vertical-align: middle;
                margin-right: 8px;
            }

            .symbol {
                color: #757575;
                margin-left: 4px;
            }

            .pager {
                display: flex;
                justify-content: flex-end;
                align-items: center;
                gap: 12px;
                padding: 8px;
            }

            .loader {
                display: flex;
                justify-content: center;
                padding: 24px;
            }

            .loader .spinner {
                width: 32px;
                height: 32px;
                border: 4px solid #e0e0e0;
                border-top-color: #1976d2;
                border-radius: 50%;
                animation: spin 1s linear infinite;
            }

            @keyframes spin {
                to { transform: rotate(360deg); }
            }

            .modal-backdrop {
                position: fixed;
                inset: 0;
                background: rgba(0, 0, 0, 0.5);
                display: flex;
                align-items: center;
                justify-content: center;
                z-index: 50;
            }

            .modal {
                background: white;
                border-radius: 8px;
                padding: 20px;
                max-width: 1100px;
                width: 95%;
                max-height: 90vh;
                overflow: auto;
                display: flex;
                gap: 20px;
            }

            .summary-panel {
                min-width: 260px;
            }

            .summary-panel dt {
                color: #757575;
                font-size: 12px;
            }

            .summary-panel dd {
                margin: 0 0 8px 0;
            }

            .window-tabs button {
                margin-right: 4px;
                padding: 4px 10px;
                border: 1px solid #bdbdbd;
                background: white;
                cursor: pointer;
            }

            .window-tabs button.active {
                background: #1976d2;
                color: white;
            }

            .chart-wrapper {
                position: relative;
            }

            .chart-tooltip {
                position: absolute;
                pointer-events: none;
                background: rgba(0, 0, 0, 0.8);
                color: white;
                padding: 4px 8px;
                border-radius: 4px;
                font-size: 12px;
                white-space: nowrap;
            }

            .toast-container {
                position: fixed;
                top: 16px;
                right: 16px;
                display: flex;
                flex-direction: column;
                gap: 8px;
                z-index: 100;
            }

            .toast {
                padding: 12px 16px;
                border-radius: 4px;
                color: white;
                cursor: pointer;
                box-shadow: 0 2px 6px rgba(0, 0, 0, 0.2);
            }

            .toast.error {
                background: #e74c3c;
            }
            "#}
        </style>
        <div class="coin-market-app">
            <h1>"Trading View"</h1>
            <MarketTable on_select=on_select />
            <DetailView detail=detail />
            <ToastContainer />
        </div>
    }
}
