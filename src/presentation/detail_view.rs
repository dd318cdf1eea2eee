use leptos::*;

use crate::{
    app::{load_history, use_services},
    application::{DetailState, LoadStatus},
    domain::{
        logging::LogComponent,
        market_data::{AssetSummary, HistoryWindow},
    },
    event_utils::on_escape_key,
    number_utils::{format_optional_currency, format_raw},
    presentation::{Loader, PriceChartCanvas, market_table::ChangeCell},
};

/// Modal with the selected asset's summary and price history chart.
///
/// Closes via the close button, a backdrop click or Escape.
#[component]
pub fn DetailView(detail: RwSignal<DetailState>) -> impl IntoView {
    let services = use_services();

    // Re-fetch on every change of the (asset, window) pair.
    let key = create_memo(move |_| detail.with(|d| d.selected.as_ref().map(|a| (a.id.clone(), d.window))));
    create_effect(move |_| {
        if key.get().is_none() {
            return;
        }
        let services = services.clone();
        spawn_local(async move {
            load_history(&services.repository, detail, &services.notifier).await;
        });
    });

    let close = move || {
        crate::log_debug!(LogComponent::Presentation("DetailView"), "Closing detail view");
        detail.update(|d| d.close());
    };

    let escape = on_escape_key(move || {
        if detail.with_untracked(|d| d.is_open()) {
            close();
        }
    });
    on_cleanup(move || escape.remove());

    let selected = create_memo(move |_| detail.with(|d| d.selected.clone()));
    let window = move || detail.with(|d| d.window);
    let chart = Signal::derive(move || detail.with(|d| d.chart.clone()));
    let loading = move || detail.with(|d| d.status == LoadStatus::Loading);
    let failed = move || detail.with(|d| d.status == LoadStatus::Failed);

    move || {
        selected.get().map(|asset| {
            let heading = format!("Price Changes Graph for {}", asset.name);
            view! {
                <div class="modal-backdrop" on:click=move |_| close()>
                    <div class="modal" role="dialog" on:click=|ev| ev.stop_propagation()>
                        <SummaryPanel asset=asset />
                        <div class="chart-panel">
                            <button class="close-button" on:click=move |_| close()>"×"</button>
                            <h2>{heading}</h2>
                            <div class="window-tabs">
                                {HistoryWindow::all().into_iter().map(|w| view! {
                                    <button
                                        class:active=move || window() == w
                                        on:click=move |_| detail.update(|d| {
                                            d.set_window(w);
                                        })
                                    >
                                        {w.label()}
                                    </button>
                                }).collect_view()}
                            </div>
                            <Show when=loading fallback=|| ()>
                                <Loader />
                            </Show>
                            <Show when=failed fallback=|| ()>
                                <p class="chart-error">"No data"</p>
                            </Show>
                            <PriceChartCanvas chart=chart />
                        </div>
                    </div>
                </div>
            }
        })
    }
}

/// Static facts about the asset; not re-fetched when the window changes.
#[component]
fn SummaryPanel(asset: AssetSummary) -> impl IntoView {
    let code = use_services().config.currency.code().to_string();
    let symbol = asset.display_symbol();
    let price = format_optional_currency(&code, asset.current_price);
    let market_cap = format_optional_currency(&code, asset.market_cap);
    let fdv = format_optional_currency(&code, asset.fully_diluted_valuation);
    let volume = format_optional_currency(&code, asset.total_volume);
    let cap_change = format_optional_currency(&code, asset.market_cap_change_24h);

    view! {
        <aside class="summary-panel">
            <img src=asset.image.clone() alt="" width="48" height="48" />
            <h3>{asset.name.clone()} <span class="symbol">{symbol}</span></h3>
            <p>
                <strong>{price}</strong>
                " "
                <ChangeCell change=asset.price_change_percentage_24h />
            </p>
            <dl>
                <dt>"Market Cap"</dt>
                <dd>{market_cap}</dd>
                <dt>"Fully Diluted Valuation"</dt>
                <dd>{fdv}</dd>
                <dt>"24h Trading Volume"</dt>
                <dd>{volume}</dd>
                <dt>"Market Cap Change 24h"</dt>
                <dd>{cap_change}</dd>
                <dt>"Circulating Supply"</dt>
                <dd>{format_raw(asset.circulating_supply)}</dd>
                <dt>"Total Supply"</dt>
                <dd>{format_raw(asset.total_supply)}</dd>
                <dt>"Max Supply"</dt>
                <dd>{format_raw(asset.max_supply)}</dd>
            </dl>
        </aside>
    }
}
