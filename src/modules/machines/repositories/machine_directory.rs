use std::collections::HashMap;

use crate::core::{AppError, Result};
use crate::modules::invoices::models::ProductUsage;
use crate::modules::machines::models::RentalMachine;

/// Lookup and baseline write-back seam over machine persistence.
///
/// The calculator only reads through this trait; a missing machine on the
/// read path is absorbed into a zero bill. The write path is different:
/// advancing the baseline of a machine that does not exist is a real
/// persistence failure and surfaces as `NotFound`.
pub trait MachineDirectory: Send + Sync {
    /// Find a machine by its identifier
    fn find_by_id(&self, id: &str) -> Option<&RentalMachine>;

    /// Write the invoice's reported new counts back as the machine's
    /// baselines
    fn advance_baseline(&mut self, id: &str, usage: &ProductUsage) -> Result<()>;
}

/// HashMap-backed directory for tests and in-process embedding
#[derive(Debug, Default)]
pub struct InMemoryMachineDirectory {
    machines: HashMap<String, RentalMachine>,
}

impl InMemoryMachineDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a machine, keyed by its id
    pub fn insert(&mut self, machine: RentalMachine) {
        self.machines.insert(machine.id.clone(), machine);
    }
}

impl MachineDirectory for InMemoryMachineDirectory {
    fn find_by_id(&self, id: &str) -> Option<&RentalMachine> {
        self.machines.get(id)
    }

    fn advance_baseline(&mut self, id: &str, usage: &ProductUsage) -> Result<()> {
        let machine = self
            .machines
            .get_mut(id)
            .ok_or_else(|| AppError::not_found(format!("Machine {} not found", id)))?;

        machine.advance_baseline(usage);
        Ok(())
    }
}
