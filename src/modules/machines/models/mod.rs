pub mod machine;
pub mod meter_config;

pub use machine::{GstSlab, RentalMachine};
pub use meter_config::{Channel, MeterConfig, PaperSize};
