// Rental machine (invoiced product) record.
//
// Pairs the three per-paper-size meter configs with the product-level billing
// terms: a fixed base price, the GST slabs summed into one effective rate,
// and the referral commission rate (with the assigned salesperson's rate as
// fallback when the product carries none).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::meter_config::{MeterConfig, PaperSize};
use crate::core::lenient;
use crate::modules::invoices::models::ProductUsage;

/// One GST component; a product may carry several (e.g. CGST + SGST)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GstSlab {
    #[serde(deserialize_with = "lenient::decimal_or_zero")]
    pub gst_percentage: Decimal,
}

/// A rental product: one machine with its meter baselines and billing terms
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RentalMachine {
    /// Machine identifier referenced by invoice entries
    pub id: String,

    pub a3: MeterConfig,
    pub a4: MeterConfig,
    pub a5: MeterConfig,

    /// Fixed per-product charge added regardless of usage
    #[serde(deserialize_with = "lenient::decimal_or_zero")]
    pub base_price: Decimal,

    /// GST slabs; summed to the product's effective rate
    pub gst_type: Vec<GstSlab>,

    /// Referral commission percentage on this product; zero means unset
    #[serde(deserialize_with = "lenient::decimal_or_zero")]
    pub commission: Decimal,

    /// Commission percentage of the assigned salesperson, used when the
    /// product itself carries no rate
    #[serde(deserialize_with = "lenient::decimal_or_zero")]
    pub salesperson_commission: Decimal,
}

impl RentalMachine {
    /// Meter config for the given paper size
    pub fn meter(&self, size: PaperSize) -> &MeterConfig {
        match size {
            PaperSize::A3 => &self.a3,
            PaperSize::A4 => &self.a4,
            PaperSize::A5 => &self.a5,
        }
    }

    fn meter_mut(&mut self, size: PaperSize) -> &mut MeterConfig {
        match size {
            PaperSize::A3 => &mut self.a3,
            PaperSize::A4 => &mut self.a4,
            PaperSize::A5 => &mut self.a5,
        }
    }

    /// Effective GST percentage: the sum of all slabs
    pub fn effective_gst_percent(&self) -> Decimal {
        self.gst_type.iter().map(|slab| slab.gst_percentage).sum()
    }

    /// Commission rate for this product: its own rate, else the assigned
    /// salesperson's rate
    pub fn commission_rate(&self) -> Decimal {
        if !self.commission.is_zero() {
            self.commission
        } else {
            self.salesperson_commission
        }
    }

    /// Advances every channel baseline to the invoice's reported new counts.
    /// Called only when an invoice (not a quotation) is finalized.
    pub fn advance_baseline(&mut self, usage: &ProductUsage) {
        use super::meter_config::Channel;

        for size in PaperSize::ALL {
            let counts = usage.counts(size);
            let meter = self.meter_mut(size);
            for channel in Channel::ALL {
                meter.set_old_count(channel, counts.new_count(channel));
            }
        }
    }
}
