mod common;

use coin_market_wasm::app::load_history;
use coin_market_wasm::application::{Completion, DetailState, LoadStatus};
use coin_market_wasm::config::LOADING_ERROR;
use coin_market_wasm::domain::market_data::{Currency, HistoryWindow};
use common::{MockRepository, RecordingNotifier, summary};
use leptos::*;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test(async)]
async fn window_change_discards_older_history() {
    let repo = MockRepository::new()
        .with_history_delay(|w| if w == HistoryWindow::OneDay { 80 } else { 10 });
    let notifier = RecordingNotifier::default();
    let detail = create_rw_signal(DetailState::new(Currency::Usd));
    detail.update(|d| d.select(summary("bitcoin")));

    let first = load_history(&repo, detail, &notifier);
    let second = async {
        detail.update(|d| {
            d.set_window(HistoryWindow::SevenDays);
        });
        load_history(&repo, detail, &notifier).await
    };
    let (first, second) = futures::join!(first, second);

    assert_eq!(first, Completion::Stale);
    assert_eq!(second, Completion::Applied);
    detail.with_untracked(|d| {
        let chart = d.chart.as_ref().expect("chart after success");
        assert_eq!(chart.window, HistoryWindow::SevenDays);
        assert_eq!(chart.title, "BITCOIN Price (USD)");
        // Samples within one day collapse onto one MM/DD label.
        assert_eq!(chart.len(), 2);
        assert!(chart.points.iter().all(|p| p.label.len() == 5 && p.label.contains('/')));
    });
}

#[wasm_bindgen_test(async)]
async fn one_day_window_uses_clock_labels() {
    let repo = MockRepository::new();
    let notifier = RecordingNotifier::default();
    let detail = create_rw_signal(DetailState::new(Currency::Usd));
    detail.update(|d| d.select(summary("ethereum")));

    assert_eq!(load_history(&repo, detail, &notifier).await, Completion::Applied);
    detail.with_untracked(|d| {
        let chart = d.chart.as_ref().expect("chart after success");
        assert_eq!(chart.len(), 2);
        assert!(chart.points.iter().all(|p| p.label.len() == 5 && p.label.contains(':')));
        assert_eq!(chart.points[0].price, 10.0);
    });
}

#[wasm_bindgen_test(async)]
async fn closing_while_loading_drops_response() {
    let repo = MockRepository::new().with_history_delay(|_| 30);
    let notifier = RecordingNotifier::default();
    let detail = create_rw_signal(DetailState::new(Currency::Usd));
    detail.update(|d| d.select(summary("bitcoin")));

    let load = load_history(&repo, detail, &notifier);
    let close = async {
        detail.update(|d| d.close());
    };
    let (outcome, _) = futures::join!(load, close);

    assert_eq!(outcome, Completion::Stale);
    detail.with_untracked(|d| {
        assert!(!d.is_open());
        assert!(d.chart.is_none());
        assert_eq!(d.status, LoadStatus::Idle);
    });
}

#[wasm_bindgen_test(async)]
async fn history_failure_keeps_panel_open() {
    let repo = MockRepository::new();
    repo.fail_history.set(true);
    let notifier = RecordingNotifier::default();
    let detail = create_rw_signal(DetailState::new(Currency::Usd));
    detail.update(|d| d.select(summary("bitcoin")));

    let outcome = load_history(&repo, detail, &notifier).await;

    assert_eq!(outcome.notification(), Some(LOADING_ERROR));
    assert_eq!(notifier.errors.borrow().len(), 1);
    detail.with_untracked(|d| {
        assert!(d.is_open());
        assert!(d.chart.is_none());
        assert_eq!(d.status, LoadStatus::Failed);
    });
}

#[wasm_bindgen_test(async)]
async fn no_selection_issues_no_request() {
    let repo = MockRepository::new();
    let notifier = RecordingNotifier::default();
    let detail = create_rw_signal(DetailState::new(Currency::Usd));

    assert_eq!(load_history(&repo, detail, &notifier).await, Completion::Stale);
    assert!(repo.history_requests.borrow().is_empty());
}
