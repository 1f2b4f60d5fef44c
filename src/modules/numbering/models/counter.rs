use serde::{Deserialize, Serialize};

/// Tenant-wide invoice numbering state.
///
/// `invoice_count` is the number of invoices issued so far; the next invoice
/// displays `invoice_count + 1` rendered through `global_invoice_format`.
/// The counter advances exactly once per created invoice and never for a
/// quotation. This core only reads and bumps the in-memory value; making the
/// read-modify-write atomic across concurrent invoice creations is the
/// persistence layer's job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TenantSettings {
    /// Invoices issued so far
    pub invoice_count: u64,

    /// Format template for display invoice numbers, e.g. "INV/25-26/00001"
    pub global_invoice_format: String,
}

impl TenantSettings {
    /// Sequence value for the next invoice
    pub fn next_sequence(&self) -> u64 {
        self.invoice_count + 1
    }

    /// Records that an invoice was issued
    pub fn advance(&mut self) {
        self.invoice_count += 1;
    }
}
