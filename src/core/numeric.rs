use std::str::FromStr;

use serde::de::{Deserialize, DeserializeOwned, Deserializer};
use serde_json::Value;

/// Coerces an arbitrary input value into a finite number.
///
/// Numbers pass through, strings are stripped down to digits, `.` and `-`
/// before parsing, and everything else (null, booleans, containers, text
/// that still fails to parse) becomes `0.0`. Never returns NaN or infinity.
pub fn safe_number(value: &Value) -> f64 {
    let parsed = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(text) => parse_number_text(text),
        _ => 0.0,
    };
    if parsed.is_finite() { parsed } else { 0.0 }
}

fn parse_number_text(text: &str) -> f64 {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    cleaned.parse::<f64>().unwrap_or(0.0)
}

/// Whole-number percent to a fractional rate.
pub fn percent(value: f64) -> f64 {
    value / 100.0
}

/// Rounds half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Monetary output rounding (cents).
pub fn money(value: f64) -> f64 {
    round_to(value, 2)
}

/// Percentage/ratio output rounding (one decimal).
pub fn tenths(value: f64) -> f64 {
    round_to(value, 1)
}

/// Fixed-rate amortized monthly payment for `principal` over `months`.
///
/// `annual_rate` is fractional (0.06 for 6%). A zero rate spreads the
/// principal evenly; a non-positive term has no payment.
pub fn amortized_payment(principal: f64, annual_rate: f64, months: f64) -> f64 {
    if months <= 0.0 {
        return 0.0;
    }
    if annual_rate == 0.0 {
        return principal / months;
    }
    let monthly_rate = annual_rate / 12.0;
    let growth = (1.0 + monthly_rate).powf(months);
    principal * (monthly_rate * growth) / (growth - 1.0)
}

/// Monthly growth rate equivalent to compounding `annual_rate` over
/// `periods_per_year` periods.
pub fn effective_monthly_rate(annual_rate: f64, periods_per_year: f64) -> f64 {
    let base = 1.0 + annual_rate / periods_per_year;
    if base <= 0.0 {
        return -1.0;
    }
    base.powf(periods_per_year / 12.0) - 1.0
}

pub(crate) fn de_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(safe_number(&value))
}

pub(crate) fn de_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Bool(flag) => flag,
        Value::String(text) => text.trim().eq_ignore_ascii_case("true"),
        _ => false,
    })
}

pub(crate) fn de_choice<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(text) => text.parse().unwrap_or_default(),
        _ => T::default(),
    })
}

pub(crate) fn de_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).unwrap_or_default())
            .collect(),
        _ => Vec::new(),
    })
}

/// Lowercases and unifies separators so `one_time`, `One-Time` and
/// `one-time` compare equal.
pub(crate) fn normalize_choice(text: &str) -> String {
    text.trim().to_ascii_lowercase().replace(['_', ' '], "-")
}
