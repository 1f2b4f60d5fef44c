use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places used for every monetary output of this core.
pub const MONEY_SCALE: u32 = 2;

/// Rounds a monetary amount to 2 decimal places, half away from zero.
///
/// Matches fixed-point display formatting (`toFixed`-style) rather than the
/// banker's rounding `round_dp` defaults to.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats a monetary amount as a decimal string fixed to 2 places.
pub fn money_string(amount: Decimal) -> String {
    format!("{:.2}", round_money(amount))
}

/// Applies a percentage rate to an amount: `amount × percent / 100`.
pub fn apply_percent(amount: Decimal, percent: Decimal) -> Decimal {
    amount * percent / Decimal::ONE_HUNDRED
}
