pub mod counter;

pub use counter::TenantSettings;
