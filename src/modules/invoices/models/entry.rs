// Invoice entry shapes.
//
// Two wire shapes exist: the legacy single-machine form (top-level machineId
// plus one set of A3/A4/A5 counts) and the multi-product form (a products
// list). When the products list is non-empty it takes precedence. Both
// normalize to a product list before aggregation so the per-product formula
// exists once.

use serde::{Deserialize, Serialize};

use crate::core::lenient;
use crate::modules::machines::models::{Channel, PaperSize};

/// New meter counts reported on the invoice for one paper size
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InvoiceEntryConfig {
    #[serde(deserialize_with = "lenient::count_or_zero")]
    pub bw_new_count: i64,

    #[serde(deserialize_with = "lenient::count_or_zero")]
    pub color_new_count: i64,

    #[serde(deserialize_with = "lenient::count_or_zero")]
    pub color_scanning_new_count: i64,
}

impl InvoiceEntryConfig {
    /// Reported new reading for the given channel
    pub fn new_count(&self, channel: Channel) -> i64 {
        match channel {
            Channel::Bw => self.bw_new_count,
            Channel::Color => self.color_new_count,
            Channel::ColorScanning => self.color_scanning_new_count,
        }
    }
}

/// One product's reported usage within a multi-product invoice
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductUsage {
    pub machine_id: String,
    pub a3: InvoiceEntryConfig,
    pub a4: InvoiceEntryConfig,
    pub a5: InvoiceEntryConfig,
}

impl ProductUsage {
    /// Reported counts for the given paper size
    pub fn counts(&self, size: PaperSize) -> &InvoiceEntryConfig {
        match size {
            PaperSize::A3 => &self.a3,
            PaperSize::A4 => &self.a4,
            PaperSize::A5 => &self.a5,
        }
    }
}

/// A saved/submitted rental invoice entry, in either wire shape
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RentalInvoiceEntry {
    /// Legacy single-product shape: the machine billed by the top-level counts
    pub machine_id: Option<String>,

    pub a3: InvoiceEntryConfig,
    pub a4: InvoiceEntryConfig,
    pub a5: InvoiceEntryConfig,

    /// Multi-product shape; takes precedence when non-empty
    pub products: Vec<ProductUsage>,
}

impl RentalInvoiceEntry {
    /// Decodes a saved entry from the backend's JSON payload.
    ///
    /// Numeric fields inside the payload are lenient (zero on corruption);
    /// only a structurally broken payload is an error.
    pub fn from_json(payload: &str) -> crate::core::Result<Self> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Normalizes either shape into a product list.
    ///
    /// The legacy shape becomes a one-element list carrying the entry's own
    /// counts. An entry with neither shape populated yields an empty list,
    /// which the calculator bills as zero.
    pub fn normalize(&self) -> Vec<ProductUsage> {
        if !self.products.is_empty() {
            return self.products.clone();
        }

        match &self.machine_id {
            Some(machine_id) => vec![ProductUsage {
                machine_id: machine_id.clone(),
                a3: self.a3.clone(),
                a4: self.a4.clone(),
                a5: self.a5.clone(),
            }],
            None => Vec::new(),
        }
    }
}
