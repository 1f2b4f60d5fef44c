//! "Fail open to zero" numeric parsing.
//!
//! Meter readings, allowances, rates, and prices arrive from the backend as
//! JSON numbers, numeric strings, or nulls depending on which client wrote
//! them. A corrupt or missing field must degrade the computed amount, never
//! abort the invoice, so every such field deserializes through these helpers:
//! anything that is not a non-negative number coerces to zero.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

/// Raw wire value for a numeric field before coercion.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumeric {
    Int(i64),
    Float(f64),
    Text(String),
}

fn coerce(raw: Option<RawNumeric>) -> Decimal {
    let value = match raw {
        Some(RawNumeric::Int(i)) => Decimal::from(i),
        Some(RawNumeric::Float(f)) => Decimal::from_f64_retain(f).unwrap_or(Decimal::ZERO),
        Some(RawNumeric::Text(s)) => s.trim().parse().unwrap_or(Decimal::ZERO),
        None => Decimal::ZERO,
    };
    if value < Decimal::ZERO {
        Decimal::ZERO
    } else {
        value
    }
}

/// Deserializes a non-negative decimal, coercing null/malformed/negative to zero.
pub fn decimal_or_zero<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawNumeric>::deserialize(deserializer).unwrap_or(None);
    Ok(coerce(raw))
}

/// Deserializes a non-negative integer count, coercing null/malformed/negative
/// to zero and truncating any fractional part.
pub fn count_or_zero<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawNumeric>::deserialize(deserializer).unwrap_or(None);
    Ok(coerce(raw).trunc().to_i64().unwrap_or(0))
}
