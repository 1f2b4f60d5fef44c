pub mod invoices;
pub mod machines;
pub mod numbering;
