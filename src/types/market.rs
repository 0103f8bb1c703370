//! Market asset types
//!
//! Tradeable energy sources listed on the marketplace, with current pricing
//! and a short recent price trend.

use serde::{Deserialize, Serialize};

/// Category of an energy asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Solar,
    Wind,
    Grid,
    Hydro,
}

impl AssetKind {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            AssetKind::Solar => "Solar",
            AssetKind::Wind => "Wind",
            AssetKind::Grid => "Grid",
            AssetKind::Hydro => "Hydro",
        }
    }

    /// Icon for list rows
    pub fn icon(&self) -> &'static str {
        match self {
            AssetKind::Solar => "☀",
            AssetKind::Wind => "🌬",
            AssetKind::Grid => "⚡",
            AssetKind::Hydro => "💧",
        }
    }
}

/// A tradeable energy asset on the marketplace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyAsset {
    /// Stable asset id
    pub id: String,
    /// Full display name
    pub name: String,
    /// Short ticker-style symbol, e.g. `"SUN-RJ"`
    pub symbol: String,
    /// Current price in ₹ per unit
    pub price: f64,
    /// Absolute price change over the last period
    pub change: f64,
    /// Relative price change over the last period, in percent
    pub change_percent: f64,
    /// Asset category
    pub kind: AssetKind,
    /// Recent price samples, oldest first
    pub trend: Vec<f64>,
    /// Longer description shown on the detail view
    pub description: String,
    /// Where the asset generates
    pub location: String,
    /// Nameplate capacity, e.g. `"250 MW"`
    pub capacity: String,
}

impl EnergyAsset {
    /// Whether the price moved up (or held) over the last period
    pub fn is_positive(&self) -> bool {
        self.change >= 0.0
    }

    /// Min and max of the recent trend, with the spread floored to a
    /// non-zero value so flat trends still chart with a visible band.
    pub fn trend_bounds(&self) -> (f64, f64, f64) {
        let min = self.trend.iter().copied().fold(f64::INFINITY, f64::min);
        let max = self.trend.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let range = max - min;
        let range = if range > 0.0 { range } else { 1.0 };
        (min, max, range)
    }
}
