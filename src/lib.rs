//! Metered-Usage Rental Billing Core
//!
//! Pure, in-process billing engine for photocopier/printer rentals: converts
//! meter readings into billable amounts with GST and referral commission, and
//! renders sequential display invoice numbers from a tenant format template.

pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::invoices;
pub use modules::machines;
pub use modules::numbering;
