pub mod number_generator;

pub use number_generator::InvoiceNumberGenerator;
