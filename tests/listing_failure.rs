mod common;

use coin_market_wasm::app::load_listing;
use coin_market_wasm::application::{Completion, LoadStatus, MarketTableState};
use coin_market_wasm::config::{AppConfig, LOADING_ERROR};
use coin_market_wasm::domain::market_data::AssetId;
use common::{MockRepository, RecordingNotifier};
use leptos::*;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test(async)]
async fn failed_refresh_keeps_rows_and_notifies_once() {
    let repo = MockRepository::new();
    let notifier = RecordingNotifier::default();
    let state = create_rw_signal(MarketTableState::new(&AppConfig::default()));

    assert_eq!(load_listing(&repo, state, &notifier).await, Completion::Applied);

    repo.fail_listing.set(true);
    state.update(|s| {
        s.set_page(1);
    });
    let outcome = load_listing(&repo, state, &notifier).await;

    assert_eq!(outcome, Completion::Failed(LOADING_ERROR.to_string()));
    assert_eq!(*notifier.errors.borrow(), vec![LOADING_ERROR.to_string()]);
    state.with_untracked(|s| {
        assert_eq!(s.listing_status, LoadStatus::Failed);
        assert!(!s.is_listing_loading());
        assert_eq!(s.rows.len(), 15);
        assert_eq!(s.rows[0].id, AssetId::from("coin-0"));
    });
}

#[wasm_bindgen_test(async)]
async fn first_load_failure_leaves_table_empty() {
    let repo = MockRepository::new();
    repo.fail_listing.set(true);
    let notifier = RecordingNotifier::default();
    let state = create_rw_signal(MarketTableState::new(&AppConfig::default()));

    load_listing(&repo, state, &notifier).await;

    assert_eq!(notifier.errors.borrow().len(), 1);
    state.with_untracked(|s| assert!(s.rows.is_empty()));
}
