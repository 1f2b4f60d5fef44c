use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::money;

/// Computed invoice amounts.
///
/// Monetary fields are decimal strings fixed to 2 places, ready for display
/// and for the downstream commission record; the rate stays numeric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceTotals {
    /// Billable subtotal including GST
    pub total_amount: String,

    /// Commission percentage applied to the taxed amount
    pub commission_rate: Decimal,

    /// Commission owed to the referring party
    pub commission_amount: String,

    /// Taxed amount plus commission
    pub total_with_commission: String,
}

impl InvoiceTotals {
    /// Builds the result object from exact decimal amounts
    pub fn from_amounts(
        total_amount: Decimal,
        commission_rate: Decimal,
        commission_amount: Decimal,
        total_with_commission: Decimal,
    ) -> Self {
        Self {
            total_amount: money::money_string(total_amount),
            commission_rate,
            commission_amount: money::money_string(commission_amount),
            total_with_commission: money::money_string(total_with_commission),
        }
    }

    /// The absorbed-failure value: nothing to bill
    pub fn zero() -> Self {
        Self {
            total_amount: "0.00".to_string(),
            commission_rate: Decimal::ZERO,
            commission_amount: "0.00".to_string(),
            total_with_commission: "0.00".to_string(),
        }
    }
}

impl Default for InvoiceTotals {
    fn default() -> Self {
        Self::zero()
    }
}
