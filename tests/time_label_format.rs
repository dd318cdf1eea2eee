use coin_market_wasm::domain::market_data::HistoryWindow;
use coin_market_wasm::time_utils::format_history_label;
use js_sys::Date;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const TS: u64 = 1_696_000_000_000; // late September 2023

#[wasm_bindgen_test]
fn one_day_window_formats_clock() {
    let date = Date::new(&JsValue::from_f64(TS as f64));
    assert_eq!(
        format_history_label(TS, HistoryWindow::OneDay),
        format!("{:02}:{:02}", date.get_hours(), date.get_minutes())
    );
}

#[wasm_bindgen_test]
fn longer_windows_format_month_and_day() {
    let date = Date::new(&JsValue::from_f64(TS as f64));
    let expected = format!("{:02}/{:02}", date.get_month() + 1, date.get_date());
    for window in [
        HistoryWindow::SevenDays,
        HistoryWindow::ThirtyDays,
        HistoryWindow::NinetyDays,
        HistoryWindow::OneYear,
        HistoryWindow::Max,
    ] {
        assert_eq!(format_history_label(TS, window), expected);
    }
}

#[wasm_bindgen_test]
fn october_month_is_two_digits() {
    // 2023-10-15T12:00:00Z is mid-October in every timezone.
    let label = format_history_label(1_697_371_200_000, HistoryWindow::ThirtyDays);
    assert!(label.starts_with("10/"), "{label}");
}
