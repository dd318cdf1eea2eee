//! Display formatting for prices, volumes and percentages (en-US conventions).

use crate::domain::market_data::Currency;
use js_sys::{Array, Intl, Object, Reflect};
use std::collections::HashSet;
use std::hash::Hash;
use std::str::FromStr;
use wasm_bindgen::JsValue;

/// Rendered in place of a value the API did not provide
pub const MISSING_VALUE: &str = "N/A";

/// Insert `,` every three digits of an unsigned integer string.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Add one unit in the last place of a plain decimal string: `0.12` -> `0.13`, `9.99` -> `10.00`.
fn carry_last_digit(fixed: &str) -> String {
    let mut digits: Vec<u8> = fixed.bytes().collect();
    for byte in digits.iter_mut().rev() {
        match *byte {
            b'.' => continue,
            b'9' => *byte = b'0',
            _ => {
                *byte += 1;
                return String::from_utf8_lossy(&digits).into_owned();
            }
        }
    }
    format!("1{}", String::from_utf8_lossy(&digits))
}

/// `|value|` to two decimals the way `Number.prototype.toFixed(2)` does it:
/// the exact binary value is rounded and exact ties go away from zero.
fn fixed_cents(value: f64) -> String {
    let magnitude = value.abs();
    // Only odd multiples of 1/8 sit exactly halfway between two cents.
    let eighths = magnitude * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
        let exact = format!("{magnitude:.3}");
        return carry_last_digit(&exact[..exact.len() - 1]);
    }
    format!("{magnitude:.2}")
}

/// Round to two decimals and group thousands: `1234.5` -> `1,234.50`.
///
/// Non-finite input is not meaningful here; it renders as `NaN`, `∞` or `-∞`.
/// A value that rounds to zero renders without a sign.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "∞".to_string() } else { "-∞".to_string() };
    }
    let fixed = fixed_cents(n);
    let visibly_negative = n < 0.0 && fixed.bytes().any(|b| matches!(b, b'1'..=b'9'));
    let sign = if visibly_negative { "-" } else { "" };
    match fixed.split_once('.') {
        Some((int_part, frac)) => format!("{}{}.{}", sign, group_thousands(int_part), frac),
        None => format!("{}{}", sign, group_thousands(&fixed)),
    }
}

/// en-US `Intl.NumberFormat` in currency style, e.g. `("USD", 1234.5)` -> `$1,234.50`.
fn intl_currency(currency: Currency, amount: f64) -> Option<String> {
    let options = Object::new();
    Reflect::set(&options, &JsValue::from_str("style"), &JsValue::from_str("currency")).ok()?;
    Reflect::set(&options, &JsValue::from_str("currency"), &JsValue::from_str(currency.code())).ok()?;
    let locales = Array::of1(&JsValue::from_str("en-US"));
    let formatter = Intl::NumberFormat::new(&locales, &options);
    formatter
        .format()
        .call1(&JsValue::UNDEFINED, &JsValue::from_f64(amount))
        .ok()?
        .as_string()
}

/// Currency formatting through the browser's `Intl`, so symbols, fraction
/// digits and rounding match what the page would show natively.
///
/// Non-finite amounts come out as Intl writes them: `$NaN`, `$∞`, `-$∞`.
/// Codes outside [`Currency`] are written in front of [`format_number`], like `ABC 1,234.50`.
pub fn format_currency(currency_code: &str, amount: f64) -> String {
    let known = Currency::from_str(currency_code).ok();
    match known.and_then(|currency| intl_currency(currency, amount)) {
        Some(formatted) => formatted,
        None => format!("{}\u{a0}{}", currency_code.to_uppercase(), format_number(amount)),
    }
}

pub fn format_optional_currency(currency_code: &str, amount: Option<f64>) -> String {
    amount.map_or_else(|| MISSING_VALUE.to_string(), |a| format_currency(currency_code, a))
}

/// [`format_number`] followed by `%`, or the missing marker
pub fn format_percent(change: Option<f64>) -> String {
    change.map_or_else(|| MISSING_VALUE.to_string(), |c| format!("{}%", format_number(c)))
}

/// Plain number without grouping or rounding, as supplies are shown
pub fn format_raw(value: Option<f64>) -> String {
    value.map_or_else(|| MISSING_VALUE.to_string(), |v| v.to_string())
}

/// Keep the first element of every distinct key, preserving order.
pub fn remove_duplicates<T, K, F>(items: impl IntoIterator<Item = T>, mut key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut seen = HashSet::new();
    items.into_iter().filter(|item| seen.insert(key(item))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_number(1234.5), "1,234.50");
        assert_eq!(format_number(1_234_567.891), "1,234,567.89");
        assert_eq!(format_number(999.999), "1,000.00");
        assert_eq!(format_number(0.0), "0.00");
        assert_eq!(format_number(-2.5), "-2.50");
        assert_eq!(format_number(-0.001), "0.00");
    }

    #[test]
    fn exact_ties_round_away_from_zero() {
        assert_eq!(format_number(0.125), "0.13");
        assert_eq!(format_number(-0.125), "-0.13");
        assert_eq!(format_number(1.875), "1.88");
        assert_eq!(format_number(9.995), "9.99");
        assert_eq!(format_number(99.875), "99.88");
        assert_eq!(format_number(1.5), "1.50");
    }

    #[test]
    fn carry_runs_through_nines() {
        assert_eq!(carry_last_digit("0.12"), "0.13");
        assert_eq!(carry_last_digit("9.99"), "10.00");
        assert_eq!(carry_last_digit("199.99"), "200.00");
    }

    #[test]
    fn missing_values() {
        assert_eq!(format_percent(None), MISSING_VALUE);
        assert_eq!(format_percent(Some(-1.234)), "-1.23%");
        assert_eq!(format_raw(Some(21_000_000.0)), "21000000");
        assert_eq!(format_optional_currency("USD", None), MISSING_VALUE);
    }
}
