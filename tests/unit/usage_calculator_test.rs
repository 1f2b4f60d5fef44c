// Per-channel and per-product billing math: overage formula, zero-clamping,
// and the GST/commission composition on a single-product invoice.

use meterbill::invoices::models::{InvoiceEntryConfig, RentalInvoiceEntry};
use meterbill::invoices::services::UsageBillingCalculator;
use meterbill::machines::models::{GstSlab, MeterConfig, RentalMachine};
use meterbill::machines::repositories::InMemoryMachineDirectory;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn test_channel_cost_overage() {
    // 50 copies used, 20 free, 2 per copy past the allowance
    assert_eq!(
        UsageBillingCalculator::channel_cost(150, 100, 20, dec!(2)),
        dec!(60)
    );
}

#[test]
fn test_channel_cost_within_free_allowance() {
    // 10 copies used, all inside the 20-copy allowance
    assert_eq!(
        UsageBillingCalculator::channel_cost(110, 100, 20, dec!(2)),
        Decimal::ZERO
    );
}

#[test]
fn test_channel_cost_meter_went_backward() {
    // new <= old bills nothing, regardless of allowance or rate
    assert_eq!(
        UsageBillingCalculator::channel_cost(90, 100, 0, dec!(2)),
        Decimal::ZERO
    );
    assert_eq!(
        UsageBillingCalculator::channel_cost(100, 100, 0, dec!(2)),
        Decimal::ZERO
    );
}

#[test]
fn test_product_total_sums_sizes_and_channels() {
    let calculator = UsageBillingCalculator::new();

    let machine = RentalMachine {
        id: "m-1".into(),
        base_price: dec!(500),
        a3: MeterConfig {
            color_old_count: 10,
            extra_amount_color: dec!(5),
            ..Default::default()
        },
        a4: MeterConfig {
            bw_old_count: 100,
            free_copies_bw: 20,
            extra_amount_bw: dec!(2),
            ..Default::default()
        },
        ..Default::default()
    };

    let entry = RentalInvoiceEntry {
        machine_id: Some("m-1".into()),
        a3: InvoiceEntryConfig {
            color_new_count: 14,
            ..Default::default()
        },
        a4: InvoiceEntryConfig {
            bw_new_count: 150,
            ..Default::default()
        },
        ..Default::default()
    };

    let products = entry.normalize();
    // 500 base + A3 color 4×5 + A4 bw 30×2
    assert_eq!(calculator.product_total(&machine, &products[0]), dec!(580));
}

fn single_machine_fixture(bw_new_count: i64) -> (RentalInvoiceEntry, InMemoryMachineDirectory) {
    let machine = RentalMachine {
        id: "m-1".into(),
        base_price: dec!(500),
        a4: MeterConfig {
            bw_old_count: 100,
            free_copies_bw: 20,
            extra_amount_bw: dec!(2),
            ..Default::default()
        },
        gst_type: vec![GstSlab {
            gst_percentage: dec!(18),
        }],
        commission: dec!(10),
        ..Default::default()
    };

    let mut directory = InMemoryMachineDirectory::new();
    directory.insert(machine);

    let entry = RentalInvoiceEntry {
        machine_id: Some("m-1".into()),
        a4: InvoiceEntryConfig {
            bw_new_count,
            ..Default::default()
        },
        ..Default::default()
    };

    (entry, directory)
}

#[test]
fn test_single_product_invoice_with_gst_and_commission() {
    let calculator = UsageBillingCalculator::new();
    let (entry, directory) = single_machine_fixture(150);

    // used=50, billable=30, channel cost=60, subtotal=560,
    // ×1.18 = 660.80, commission 10% = 66.08
    let totals = calculator.compute_invoice_total(&entry, &directory);
    assert_eq!(totals.total_amount, "660.80");
    assert_eq!(totals.commission_rate, dec!(10));
    assert_eq!(totals.commission_amount, "66.08");
    assert_eq!(totals.total_with_commission, "726.88");
}

#[test]
fn test_backward_meter_bills_base_price_only() {
    let calculator = UsageBillingCalculator::new();
    let (entry, directory) = single_machine_fixture(90);

    // channel cost 0, so 500 × 1.18
    let totals = calculator.compute_invoice_total(&entry, &directory);
    assert_eq!(totals.total_amount, "590.00");
    assert_eq!(totals.commission_amount, "59.00");
    assert_eq!(totals.total_with_commission, "649.00");
}

#[test]
fn test_compute_invoice_total_is_idempotent() {
    let calculator = UsageBillingCalculator::new();
    let (entry, directory) = single_machine_fixture(150);

    let first = calculator.compute_invoice_total(&entry, &directory);
    let second = calculator.compute_invoice_total(&entry, &directory);
    assert_eq!(first, second);
}

proptest! {
    /// new <= old yields exactly zero, whatever the allowance and rate.
    #[test]
    fn prop_non_positive_usage_is_never_billed(
        old_count in 0i64..1_000_000i64,
        shortfall in 0i64..1_000_000i64,
        free_copies in 0i64..10_000i64,
        rate_cents in 0u64..100_000u64,
    ) {
        let rate = Decimal::new(rate_cents as i64, 2);
        let cost = UsageBillingCalculator::channel_cost(
            old_count - shortfall,
            old_count,
            free_copies,
            rate,
        );
        prop_assert_eq!(cost, Decimal::ZERO);
    }

    /// The billable count clamps at zero: cost is max(0, used - free) × rate.
    #[test]
    fn prop_billable_clamps_at_zero(
        old_count in 0i64..1_000_000i64,
        used in 1i64..100_000i64,
        free_copies in 0i64..200_000i64,
        rate_cents in 0u64..100_000u64,
    ) {
        let rate = Decimal::new(rate_cents as i64, 2);
        let cost = UsageBillingCalculator::channel_cost(
            old_count + used,
            old_count,
            free_copies,
            rate,
        );

        let expected = Decimal::from((used - free_copies).max(0)) * rate;
        prop_assert_eq!(cost, expected);
        prop_assert!(cost >= Decimal::ZERO);
    }
}
