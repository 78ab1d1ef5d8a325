//! Scenario parameters — the two user-controlled forecast dials.

use serde::{Deserialize, Serialize};

/// The three named projection cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    Worst,
    Realistic,
    Best,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [Scenario::Worst, Scenario::Realistic, Scenario::Best];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Worst     => "worst",
            Self::Realistic => "realistic",
            Self::Best      => "best",
        }
    }
}

/// User-adjustable forecast inputs. Both are fractions in [0, 1]; the
/// surrounding UI exposes them as 0–100 integer percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioParams {
    pub price_increase:          f64,
    pub variable_churn_baseline: f64,
}

impl ScenarioParams {
    /// Build from fractional rates. Out-of-range inputs are clamped,
    /// not rejected.
    pub fn new(price_increase: f64, variable_churn_baseline: f64) -> Self {
        Self {
            price_increase:          price_increase.clamp(0.0, 1.0),
            variable_churn_baseline: variable_churn_baseline.clamp(0.0, 1.0),
        }
    }

    /// Build from whole percentages (the 0–100 dial values).
    pub fn from_percent(price_increase_pct: u32, variable_churn_pct: u32) -> Self {
        Self::new(
            price_increase_pct.min(100) as f64 / 100.0,
            variable_churn_pct.min(100) as f64 / 100.0,
        )
    }
}

impl Default for ScenarioParams {
    /// The dashboard's starting position: 20% price uplift, 10%
    /// baseline churn.
    fn default() -> Self {
        Self {
            price_increase:          0.20,
            variable_churn_baseline: 0.10,
        }
    }
}
