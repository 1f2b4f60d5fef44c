use rust_decimal::Decimal;
use tracing::warn;

use crate::core::money;
use crate::modules::invoices::models::{InvoiceTotals, ProductUsage, RentalInvoiceEntry};
use crate::modules::machines::models::{Channel, PaperSize, RentalMachine};
use crate::modules::machines::repositories::MachineDirectory;

/// Calculator for metered-usage rental billing.
///
/// Converts an invoice entry's reported meter readings into a billable
/// amount, applies the effective GST rate, and derives the referral
/// commission. Pure and deterministic; calculation failures (missing machine,
/// empty entry) are absorbed into the zero result, never propagated, since
/// the output feeds display and commission logic where a broken reference
/// must not abort an otherwise-valid invoice view.
pub struct UsageBillingCalculator;

impl UsageBillingCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Cost of one (paper size × color mode) channel.
    ///
    /// `copiesUsed = new - old`; a non-positive value (meter reset or data
    /// error) bills nothing. Past that, the free allowance is deducted and
    /// the remainder clamps at zero before the per-copy rate applies.
    pub fn channel_cost(
        new_count: i64,
        old_count: i64,
        free_copies: i64,
        extra_amount: Decimal,
    ) -> Decimal {
        let copies_used = new_count - old_count;
        if copies_used <= 0 {
            return Decimal::ZERO;
        }

        let billable = (copies_used - free_copies).max(0);
        Decimal::from(billable) * extra_amount
    }

    /// Total for one product: base price plus every channel's overage cost
    /// across A3/A4/A5.
    pub fn product_total(&self, machine: &RentalMachine, usage: &ProductUsage) -> Decimal {
        let mut total = machine.base_price;

        for size in PaperSize::ALL {
            let meter = machine.meter(size);
            let counts = usage.counts(size);
            for channel in Channel::ALL {
                total += Self::channel_cost(
                    counts.new_count(channel),
                    meter.old_count(channel),
                    meter.free_copies(channel),
                    meter.extra_amount(channel),
                );
            }
        }

        total
    }

    /// Computes the invoice-level totals for a saved entry.
    ///
    /// Products are summed into one billable amount. The GST and commission
    /// rates are not summed: the first product with a non-zero effective GST
    /// rate fixes the invoice-wide GST, and the first product with a non-zero
    /// resolved commission rate (own rate, else the assigned salesperson's)
    /// fixes the invoice-wide commission. An invoice is billed under a single
    /// GST/commission regime even when it spans multiple products.
    pub fn compute_invoice_total(
        &self,
        entry: &RentalInvoiceEntry,
        machines: &dyn MachineDirectory,
    ) -> InvoiceTotals {
        let products = entry.normalize();
        if products.is_empty() {
            warn!("invoice entry references no products, billing zero");
            return InvoiceTotals::zero();
        }

        let mut total_billable = Decimal::ZERO;
        let mut gst_percent = Decimal::ZERO;
        let mut commission_rate = Decimal::ZERO;

        for usage in &products {
            let Some(machine) = machines.find_by_id(&usage.machine_id) else {
                warn!(
                    machine_id = %usage.machine_id,
                    "invoice entry references an unknown machine, billing zero"
                );
                return InvoiceTotals::zero();
            };

            total_billable += self.product_total(machine, usage);

            if gst_percent.is_zero() {
                gst_percent = machine.effective_gst_percent();
            }
            if commission_rate.is_zero() {
                commission_rate = machine.commission_rate();
            }
        }

        let total_amount = total_billable + money::apply_percent(total_billable, gst_percent);
        let commission_amount = money::apply_percent(total_amount, commission_rate);
        let total_with_commission = total_amount + commission_amount;

        InvoiceTotals::from_amounts(
            total_amount,
            commission_rate,
            commission_amount,
            total_with_commission,
        )
    }
}

impl Default for UsageBillingCalculator {
    fn default() -> Self {
        Self::new()
    }
}
