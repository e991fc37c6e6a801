//! Small formatting and JSON extraction helpers.
//!
//! Intentionally lightweight and dependency-free to keep the UI and
//! networking paths simple.

use serde_json::Value;

use crate::i18n::CURRENCY;

/// What: Format an amount with the storefront currency label.
///
/// Inputs:
/// - `amount`: Price or total in RM.
///
/// Output:
/// - String like `"RM 24.00"`, always with two decimal places.
#[must_use]
pub fn format_price(amount: f64) -> String {
    format!("{CURRENCY} {amount:.2}")
}

/// What: Extract a string field from a JSON object.
///
/// Inputs:
/// - `v`: JSON value expected to be an object.
/// - `key`: Field name.
///
/// Output:
/// - The field's string value, or an empty string when absent or non-string.
#[must_use]
pub fn s(v: &Value, key: &str) -> String {
    v.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// What: Format a Unix timestamp as `YYYY-MM-DD HH:MM:SS` (UTC).
///
/// Inputs:
/// - `secs`: Seconds since the Unix epoch.
///
/// Output:
/// - Formatted date-time string; the epoch itself for out-of-range input.
///
/// Details:
/// - Civil-date arithmetic only; used by the log timestamp formatter so the
///   logging path has no extra dependencies.
#[must_use]
pub fn ts_to_date(secs: i64) -> String {
    let days = secs.div_euclid(86_400);
    let tod = secs.rem_euclid(86_400);
    let (h, m, sec) = (tod / 3600, (tod % 3600) / 60, tod % 60);

    // Civil-from-days algorithm (Howard Hinnant), valid for all i64 days in range.
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let mth = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = if mth <= 2 { y + 1 } else { y };
    format!("{y:04}-{mth:02}-{d:02} {h:02}:{m:02}:{sec:02}")
}
