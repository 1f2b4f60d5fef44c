pub mod invoice_service;
pub mod usage_calculator;

pub use invoice_service::{CommissionRecord, CreatedDocument, DocumentKind, InvoiceService};
pub use usage_calculator::UsageBillingCalculator;
