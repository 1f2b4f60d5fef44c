pub mod machine_directory;

pub use machine_directory::{InMemoryMachineDirectory, MachineDirectory};
