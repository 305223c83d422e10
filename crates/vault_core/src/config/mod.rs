//! Metrics configuration
//!
//! The main configuration type is `MetricsConfig`. Every field has a serde
//! default so a partial `config.yaml` only overrides what it names.

use serde::{Deserialize, Serialize};

fn default_consistency_weight() -> f64 {
    0.4
}

fn default_growth_weight() -> f64 {
    0.3
}

fn default_diversification_weight() -> f64 {
    0.3
}

fn default_diversification_per_source() -> f64 {
    25.0
}

fn default_diversify_below() -> f64 {
    50.0
}

fn default_well_diversified_above() -> f64 {
    80.0
}

fn default_variability_below() -> f64 {
    70.0
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_top_sources() -> usize {
    5
}

/// Weights of the performance ("achievement rate") blend
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    #[serde(default = "default_consistency_weight")]
    pub consistency: f64,
    #[serde(default = "default_growth_weight")]
    pub growth: f64,
    #[serde(default = "default_diversification_weight")]
    pub diversification: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            consistency: default_consistency_weight(),
            growth: default_growth_weight(),
            diversification: default_diversification_weight(),
        }
    }
}

/// Threshold rules of the insight generator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InsightThresholds {
    /// Growth rate strictly above this emits the growth insight
    #[serde(default)]
    pub growth_above: f64,
    #[serde(default = "default_diversify_below")]
    pub diversify_below: f64,
    #[serde(default = "default_well_diversified_above")]
    pub well_diversified_above: f64,
    #[serde(default = "default_variability_below")]
    pub variability_below: f64,
}

impl Default for InsightThresholds {
    fn default() -> Self {
        Self {
            growth_above: 0.0,
            diversify_below: default_diversify_below(),
            well_diversified_above: default_well_diversified_above(),
            variability_below: default_variability_below(),
        }
    }
}

/// Complete metrics configuration
///
/// Defaults reproduce the dashboard's fixed rules:
/// - performance = consistency * 0.4 + max(0, growth) * 0.3 + diversification * 0.3
/// - diversification = 25 points per distinct source, saturating at 100
/// - diversify below 50, well diversified above 80, variability below 70
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsConfig {
    #[serde(default)]
    pub weights: ScoreWeights,
    #[serde(default = "default_diversification_per_source")]
    pub diversification_per_source: f64,
    #[serde(default)]
    pub thresholds: InsightThresholds,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// Number of entries kept in the per-source breakdown
    #[serde(default = "default_top_sources")]
    pub top_sources: usize,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            diversification_per_source: default_diversification_per_source(),
            thresholds: InsightThresholds::default(),
            currency_symbol: default_currency_symbol(),
            top_sources: default_top_sources(),
        }
    }
}

impl MetricsConfig {
    #[must_use]
    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    #[must_use]
    pub fn with_thresholds(mut self, thresholds: InsightThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    #[must_use]
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }
}
