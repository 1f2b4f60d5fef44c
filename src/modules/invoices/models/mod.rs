pub mod entry;
pub mod totals;

pub use entry::{InvoiceEntryConfig, ProductUsage, RentalInvoiceEntry};
pub use totals::InvoiceTotals;
