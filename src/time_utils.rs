use crate::domain::market_data::HistoryWindow;
use js_sys::Date;
use wasm_bindgen::JsValue;

/// Axis label of a history sample, in the browser's local time.
///
/// - one-day window -> `HH:MM`
/// - any other window -> `MM/DD`
pub fn format_history_label(timestamp: u64, window: HistoryWindow) -> String {
    let date = Date::new(&JsValue::from_f64(timestamp as f64));
    if window.uses_time_of_day_labels() {
        format!("{:02}:{:02}", date.get_hours(), date.get_minutes())
    } else {
        format!("{:02}/{:02}", date.get_month() + 1, date.get_date())
    }
}

/// `HH:MM:SS.mmm` of a millisecond timestamp, local time
pub fn format_clock(timestamp: u64) -> String {
    let date = Date::new(&JsValue::from_f64(timestamp as f64));
    format!(
        "{:02}:{:02}:{:02}.{:03}",
        date.get_hours(),
        date.get_minutes(),
        date.get_seconds(),
        date.get_milliseconds()
    )
}
