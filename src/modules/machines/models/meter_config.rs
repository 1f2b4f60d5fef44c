// Per-paper-size billing rule and running meter baseline.
//
// A rental machine carries one MeterConfig per paper size. Each config holds
// the baseline meter reading per color channel (the machine's last known
// reading), the free-copy allowance for the period, and the per-copy rate
// charged past that allowance. Baselines advance only when an invoice for the
// machine is finalized.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::lenient;

/// Paper sizes billed on a rental machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaperSize {
    A3,
    A4,
    A5,
}

impl PaperSize {
    pub const ALL: [PaperSize; 3] = [PaperSize::A3, PaperSize::A4, PaperSize::A5];
}

impl fmt::Display for PaperSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaperSize::A3 => write!(f, "A3"),
            PaperSize::A4 => write!(f, "A4"),
            PaperSize::A5 => write!(f, "A5"),
        }
    }
}

impl std::str::FromStr for PaperSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "A3" => Ok(PaperSize::A3),
            "A4" => Ok(PaperSize::A4),
            "A5" => Ok(PaperSize::A5),
            _ => Err(format!("Invalid paper size: {}", s)),
        }
    }
}

/// Color channels metered on each paper size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Channel {
    Bw,
    Color,
    ColorScanning,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Bw, Channel::Color, Channel::ColorScanning];
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Bw => write!(f, "bw"),
            Channel::Color => write!(f, "color"),
            Channel::ColorScanning => write!(f, "colorScanning"),
        }
    }
}

/// Billing rule and baseline for one paper size of a rental machine
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MeterConfig {
    /// Meter reading at the start of the billing period, black-and-white
    #[serde(deserialize_with = "lenient::count_or_zero")]
    pub bw_old_count: i64,

    /// Meter reading at the start of the billing period, color
    #[serde(deserialize_with = "lenient::count_or_zero")]
    pub color_old_count: i64,

    /// Meter reading at the start of the billing period, color scanning
    #[serde(deserialize_with = "lenient::count_or_zero")]
    pub color_scanning_old_count: i64,

    /// Copies in this period not subject to the per-copy charge
    #[serde(deserialize_with = "lenient::count_or_zero")]
    pub free_copies_bw: i64,

    #[serde(deserialize_with = "lenient::count_or_zero")]
    pub free_copies_color: i64,

    #[serde(deserialize_with = "lenient::count_or_zero")]
    pub free_copies_color_scanning: i64,

    /// Price per copy beyond the free allowance
    #[serde(deserialize_with = "lenient::decimal_or_zero")]
    pub extra_amount_bw: Decimal,

    #[serde(deserialize_with = "lenient::decimal_or_zero")]
    pub extra_amount_color: Decimal,

    #[serde(deserialize_with = "lenient::decimal_or_zero")]
    pub extra_amount_color_scanning: Decimal,
}

impl MeterConfig {
    /// Baseline reading for the given channel
    pub fn old_count(&self, channel: Channel) -> i64 {
        match channel {
            Channel::Bw => self.bw_old_count,
            Channel::Color => self.color_old_count,
            Channel::ColorScanning => self.color_scanning_old_count,
        }
    }

    /// Free-copy allowance for the given channel
    pub fn free_copies(&self, channel: Channel) -> i64 {
        match channel {
            Channel::Bw => self.free_copies_bw,
            Channel::Color => self.free_copies_color,
            Channel::ColorScanning => self.free_copies_color_scanning,
        }
    }

    /// Per-copy overage rate for the given channel
    pub fn extra_amount(&self, channel: Channel) -> Decimal {
        match channel {
            Channel::Bw => self.extra_amount_bw,
            Channel::Color => self.extra_amount_color,
            Channel::ColorScanning => self.extra_amount_color_scanning,
        }
    }

    /// Writes a channel's new reading over the baseline
    pub fn set_old_count(&mut self, channel: Channel, count: i64) {
        match channel {
            Channel::Bw => self.bw_old_count = count,
            Channel::Color => self.color_old_count = count,
            Channel::ColorScanning => self.color_scanning_old_count = count,
        }
    }
}
