use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize an `order` field that editors may have written as a number,
/// a fractional number or a numeric string.
pub(super) fn order<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(order_from_value(&value))
}

/// Interpret a JSON value as a requested order.
///
/// Positive integers are taken as-is, fractional numbers are truncated
/// (values between 0 and 1 become `1`), numeric strings are parsed.
/// Anything else (`null`, negatives, zero, booleans, text) yields `0`, which
/// the ordering operations read as "no order requested".
#[must_use]
pub fn order_from_value(value: &Value) -> u32 {
    match value {
        Value::Number(number) => number.as_u64().map_or_else(
            || number.as_f64().map_or(0, order_from_float),
            saturate,
        ),
        Value::String(text) => {
            let text = text.trim();
            text.parse::<u64>().map_or_else(
                |_| text.parse::<f64>().map_or(0, order_from_float),
                saturate,
            )
        }
        _ => 0,
    }
}

fn saturate(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn order_from_float(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    if value < 1.0 {
        return 1;
    }
    if value >= f64::from(u32::MAX) {
        return u32::MAX;
    }
    value as u32
}
