use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::core::{AppError, Result};
use crate::modules::invoices::models::{InvoiceTotals, RentalInvoiceEntry};
use crate::modules::invoices::services::UsageBillingCalculator;
use crate::modules::machines::repositories::MachineDirectory;
use crate::modules::numbering::models::TenantSettings;
use crate::modules::numbering::services::InvoiceNumberGenerator;

/// Whether the document being created bills the customer or only quotes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Invoice,
    Quotation,
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentKind::Invoice => write!(f, "invoice"),
            DocumentKind::Quotation => write!(f, "quotation"),
        }
    }
}

impl std::str::FromStr for DocumentKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "invoice" => Ok(DocumentKind::Invoice),
            "quotation" => Ok(DocumentKind::Quotation),
            _ => Err(AppError::validation(format!(
                "Invalid document kind: {}",
                s
            ))),
        }
    }
}

/// Payload for the downstream "create commission record" call
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionRecord {
    pub id: String,
    pub invoice_number: String,
    pub commission_amount: String,
    pub percentage_rate: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Result of running the invoicing workflow once
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedDocument {
    pub invoice_number: String,
    pub kind: DocumentKind,
    pub totals: InvoiceTotals,
    /// Present only when a non-zero commission rate applied
    pub commission: Option<CommissionRecord>,
    pub created_at: DateTime<Utc>,
}

/// In-process invoicing workflow.
///
/// Generates the display number from the tenant counter, computes the billing
/// totals, and emits the commission record. Creating an invoice additionally
/// advances the tenant counter by exactly one and writes each product's new
/// meter counts back as machine baselines; a quotation advances nothing.
pub struct InvoiceService {
    calculator: UsageBillingCalculator,
    generator: InvoiceNumberGenerator,
}

impl InvoiceService {
    pub fn new() -> Self {
        Self {
            calculator: UsageBillingCalculator::new(),
            generator: InvoiceNumberGenerator::new(),
        }
    }

    pub fn create_document(
        &self,
        kind: DocumentKind,
        entry: &RentalInvoiceEntry,
        settings: &mut TenantSettings,
        directory: &mut dyn MachineDirectory,
    ) -> Result<CreatedDocument> {
        let invoice_number = self
            .generator
            .generate(settings.next_sequence(), &settings.global_invoice_format);

        let totals = self.calculator.compute_invoice_total(entry, &*directory);
        let created_at = Utc::now();

        let commission = if totals.commission_rate.is_zero() {
            None
        } else {
            Some(CommissionRecord {
                id: Uuid::new_v4().to_string(),
                invoice_number: invoice_number.clone(),
                commission_amount: totals.commission_amount.clone(),
                percentage_rate: totals.commission_rate,
                created_at,
            })
        };

        if kind == DocumentKind::Invoice {
            // Finalizing: every billed machine's baseline advances to the
            // reported new counts and the counter moves once. Every machine
            // must resolve before any state moves, so a failed creation
            // leaves both the baselines and the counter untouched.
            let products = entry.normalize();
            for usage in &products {
                if directory.find_by_id(&usage.machine_id).is_none() {
                    return Err(AppError::not_found(format!(
                        "Machine {} not found",
                        usage.machine_id
                    )));
                }
            }
            for usage in &products {
                directory.advance_baseline(&usage.machine_id, usage)?;
            }
            settings.advance();
        }

        info!(
            kind = %kind,
            invoice_number = %invoice_number,
            total_amount = %totals.total_amount,
            "created rental billing document"
        );

        Ok(CreatedDocument {
            invoice_number,
            kind,
            totals,
            commission,
            created_at,
        })
    }
}

impl Default for InvoiceService {
    fn default() -> Self {
        Self::new()
    }
}
