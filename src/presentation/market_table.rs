use leptos::*;

use crate::{
    app::{load_global, load_identities, load_listing, use_services},
    application::MarketTableState,
    domain::{
        logging::LogComponent,
        market_data::{AssetIdentity, AssetSummary, ChangeWindow, Trend, search_identities, sparkline_url},
    },
    number_utils::{format_optional_currency, format_percent, format_raw},
    presentation::Loader,
};

/// Paginated, filterable market listing. Clicking a row calls `on_select`.
#[component]
pub fn MarketTable(#[prop(into)] on_select: Callback<AssetSummary>) -> impl IntoView {
    let services = use_services();
    let state = create_rw_signal(MarketTableState::new(&services.config));

    {
        let services = services.clone();
        spawn_local(async move {
            load_global(&services.repository, state, &services.notifier).await;
        });
    }
    {
        let services = services.clone();
        spawn_local(async move {
            load_identities(&services.repository, state, &services.notifier).await;
        });
    }

    // Only a change of (page, page size, filter) re-runs the listing fetch.
    let query = create_memo(move |_| state.with(|s| s.query.clone()));
    {
        let services = services.clone();
        create_effect(move |_| {
            query.track();
            let services = services.clone();
            spawn_local(async move {
                load_listing(&services.repository, state, &services.notifier).await;
            });
        });
    }

    on_cleanup(move || {
        crate::log_debug!(LogComponent::Presentation("MarketTable"), "Unmounted");
    });

    view! {
        <section class="market-view">
            <GlobalBanner state=state />
            <SearchBox state=state />
            <Show when=move || state.with(|s| s.is_listing_loading()) fallback=|| ()>
                <Loader />
            </Show>
            <table class="market-table">
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>"Coin"</th>
                        <th class="numeric">"Price"</th>
                        <th class="numeric">"1h"</th>
                        <th class="numeric">"24h"</th>
                        <th class="numeric">"7d"</th>
                        <th class="numeric">"Total Volume"</th>
                        <th class="numeric">"Mkt Cap"</th>
                        <th>"Last 7 Days"</th>
                    </tr>
                </thead>
                <tbody>
                    // Rows are static once built, so every applied fetch gets fresh keys.
                    <For
                        each=move || {
                            state.with(|s| s.rows.iter().map(|row| (s.listing_seq, row.clone())).collect::<Vec<_>>())
                        }
                        key=|entry: &(u64, AssetSummary)| (entry.0, entry.1.id.clone())
                        children=move |(_, row): (u64, AssetSummary)| view! { <MarketRow row=row on_select=on_select /> }
                    />
                </tbody>
            </table>
            <Pager state=state />
        </section>
    }
}

#[component]
fn GlobalBanner(state: RwSignal<MarketTableState>) -> impl IntoView {
    let code = use_services().config.currency.code().to_string();
    let global = move || state.with(|s| s.global);

    move || {
        global().map(|g| {
            let cap = format_optional_currency(&code, g.total_market_cap);
            view! {
                <div class="global-banner">
                    <span>"Coins: " <span class="value">{g.active_cryptocurrencies}</span></span>
                    <span>"Exchanges: " <span class="value">{g.markets}</span></span>
                    <span>
                        "Market Cap: " <span class="value">{cap}</span>
                        " " <ChangeCell change=g.market_cap_change_percentage_24h />
                    </span>
                </div>
            }
        })
    }
}

#[component]
fn SearchBox(state: RwSignal<MarketTableState>) -> impl IntoView {
    let limit = use_services().config.search_result_limit;
    let (text, set_text) = create_signal(String::new());

    let suggestions = create_memo(move |_| {
        let query = text.get();
        state.with(|s| search_identities(&s.identities, &query, limit))
    });

    let apply = move |identity: Option<AssetIdentity>| {
        crate::log_info!(
            LogComponent::Presentation("Search"),
            "Filter set to {:?}",
            identity.as_ref().map(|i| i.id.value().to_string())
        );
        state.update(|s| {
            s.set_filter(identity);
        });
        set_text.set(String::new());
    };

    view! {
        <div class="search-box">
            <input
                type="search"
                placeholder="Filter by coin"
                prop:value=move || text.get()
                on:input=move |ev| set_text.set(event_target_value(&ev))
            />
            <Show when=move || state.with(|s| s.filter_identity.is_some()) fallback=|| ()>
                <span class="active-filter">
                    {move || state.with(|s| s.filter_identity.as_ref().map(|i| i.name.clone()).unwrap_or_default())}
                    <button on:click=move |_| apply(None)>"Clear"</button>
                </span>
            </Show>
            <Show when=move || !suggestions.with(Vec::is_empty) fallback=|| ()>
                <ul class="search-suggestions">
                    <For
                        each=move || suggestions.get()
                        key=|identity| identity.id.clone()
                        children=move |identity: AssetIdentity| {
                            let label = format!("{} ({})", identity.name, identity.symbol.to_uppercase());
                            view! {
                                <li on:click=move |_| apply(Some(identity.clone()))>{label}</li>
                            }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}

#[component]
fn MarketRow(row: AssetSummary, on_select: Callback<AssetSummary>) -> impl IntoView {
    let config = use_services().config;
    let code = config.currency.code();

    let sparkline = match sparkline_url(&row.image, &config.image_base_url, &config.sparkline_base_url) {
        Ok(url) => Some(view! { <img src=url alt="" loading="lazy" /> }),
        Err(e) => {
            crate::log_warn!(LogComponent::Presentation("MarketTable"), "No sparkline for {}: {}", row.id, e);
            None
        }
    };
    let rank = format_raw(row.market_cap_rank.map(f64::from));
    let price = format_optional_currency(code, row.current_price);
    let volume = format_optional_currency(code, row.total_volume);
    let market_cap = format_optional_currency(code, row.market_cap);
    let changes = [ChangeWindow::OneHour, ChangeWindow::OneDay, ChangeWindow::SevenDays]
        .map(|window| row.change(window));
    let symbol = row.display_symbol();
    let (name, image) = (row.name.clone(), row.image.clone());

    view! {
        <tr on:click=move |_| on_select.call(row.clone())>
            <td>{rank}</td>
            <td class="coin-cell">
                <img src=image alt="" />
                {name}
                <span class="symbol">{symbol}</span>
            </td>
            <td class="numeric">{price}</td>
            {changes.into_iter().map(|change| view! {
                <td class="numeric"><ChangeCell change=change /></td>
            }).collect_view()}
            <td class="numeric">{volume}</td>
            <td class="numeric">{market_cap}</td>
            <td>{sparkline}</td>
        </tr>
    }
}

/// Percentage with a trend glyph, colored by sign
#[component]
pub fn ChangeCell(change: Option<f64>) -> impl IntoView {
    let trend = Trend::of(change);
    let text = match change {
        Some(_) => format!("{} {}", trend.glyph(), format_percent(change)),
        None => format_raw(None),
    };
    view! { <span style:color=trend.color()>{text}</span> }
}

#[component]
fn Pager(state: RwSignal<MarketTableState>) -> impl IntoView {
    let options = use_services().config.rows_per_page_options;
    let pager = move || state.with(|s| s.pager());
    let total = move || state.with(|s| s.pager_total());

    let go_to = move |page: u32| {
        state.update(|s| {
            s.set_page(page);
        });
    };

    view! {
        <div class="pager">
            <label>
                "Rows per page: "
                <select on:change=move |ev| {
                    if let Ok(rows) = event_target_value(&ev).parse::<u32>() {
                        state.update(|s| {
                            s.set_rows_per_page(rows);
                        });
                    }
                }>
                    {options.into_iter().map(|rows| view! {
                        <option value=rows.to_string() prop:selected=move || pager().rows_per_page == rows>
                            {rows}
                        </option>
                    }).collect_view()}
                </select>
            </label>
            <span>{move || pager().range_label(total())}</span>
            <button
                disabled=move || !pager().has_previous()
                on:click=move |_| go_to(pager().page_index.saturating_sub(1))
            >
                "‹"
            </button>
            <button
                disabled=move || !pager().has_next(total())
                on:click=move |_| go_to(pager().page_index + 1)
            >
                "›"
            </button>
        </div>
    }
}
