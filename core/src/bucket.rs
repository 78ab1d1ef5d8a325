//! The fixed customer segmentation taxonomy.
//!
//! Every account is pre-classified into one of 9 buckets formed by
//! crossing an engagement tier with a value tier. The order is fixed
//! and significant: summaries iterate it, tables render it, and the
//! churn multipliers grow monotonically along it.
//!
//! RULE: Never reorder or rename buckets — the multiplier table and
//! every published forecast figure are keyed to this exact order.

use serde::{Deserialize, Serialize};

use crate::scenario::Scenario;

/// One of the 9 fixed segmentation buckets, in canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bucket {
    #[serde(rename = "Engaged High-Value")]
    EngagedHighValue,
    #[serde(rename = "Engaged Mid-Value")]
    EngagedMidValue,
    #[serde(rename = "Engaged Low-Value")]
    EngagedLowValue,
    #[serde(rename = "Moderate High-Value")]
    ModerateHighValue,
    #[serde(rename = "Moderate Mid-Value")]
    ModerateMidValue,
    #[serde(rename = "Moderate Low-Value")]
    ModerateLowValue,
    #[serde(rename = "Disengaged High-Value")]
    DisengagedHighValue,
    #[serde(rename = "Disengaged Mid-Value")]
    DisengagedMidValue,
    #[serde(rename = "Disengaged Low-Value")]
    DisengagedLowValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Engagement {
    Engaged,
    Moderate,
    Disengaged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueTier {
    High,
    Mid,
    Low,
}

/// Per-bucket churn coefficients for the three scenarios.
/// Statically defined, never derived.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChurnMultipliers {
    pub worst:     f64,
    pub realistic: f64,
    pub best:      f64,
}

impl ChurnMultipliers {
    pub fn for_scenario(&self, scenario: Scenario) -> f64 {
        match scenario {
            Scenario::Worst     => self.worst,
            Scenario::Realistic => self.realistic,
            Scenario::Best      => self.best,
        }
    }
}

impl Bucket {
    /// All 9 buckets in canonical display order.
    pub const ALL: [Bucket; 9] = [
        Bucket::EngagedHighValue,
        Bucket::EngagedMidValue,
        Bucket::EngagedLowValue,
        Bucket::ModerateHighValue,
        Bucket::ModerateMidValue,
        Bucket::ModerateLowValue,
        Bucket::DisengagedHighValue,
        Bucket::DisengagedMidValue,
        Bucket::DisengagedLowValue,
    ];

    /// Canonical display label, as carried in roster data.
    pub fn label(&self) -> &'static str {
        match self {
            Self::EngagedHighValue    => "Engaged High-Value",
            Self::EngagedMidValue     => "Engaged Mid-Value",
            Self::EngagedLowValue     => "Engaged Low-Value",
            Self::ModerateHighValue   => "Moderate High-Value",
            Self::ModerateMidValue    => "Moderate Mid-Value",
            Self::ModerateLowValue    => "Moderate Low-Value",
            Self::DisengagedHighValue => "Disengaged High-Value",
            Self::DisengagedMidValue  => "Disengaged Mid-Value",
            Self::DisengagedLowValue  => "Disengaged Low-Value",
        }
    }

    /// Parse a roster bucket label. Anything outside the fixed set is
    /// None; unrecognized buckets are excluded from aggregates, never
    /// an error.
    pub fn from_label(label: &str) -> Option<Bucket> {
        Bucket::ALL.iter().copied().find(|b| b.label() == label)
    }

    pub fn engagement(&self) -> Engagement {
        match self {
            Self::EngagedHighValue | Self::EngagedMidValue | Self::EngagedLowValue => {
                Engagement::Engaged
            }
            Self::ModerateHighValue | Self::ModerateMidValue | Self::ModerateLowValue => {
                Engagement::Moderate
            }
            Self::DisengagedHighValue | Self::DisengagedMidValue | Self::DisengagedLowValue => {
                Engagement::Disengaged
            }
        }
    }

    pub fn value_tier(&self) -> ValueTier {
        match self {
            Self::EngagedHighValue | Self::ModerateHighValue | Self::DisengagedHighValue => {
                ValueTier::High
            }
            Self::EngagedMidValue | Self::ModerateMidValue | Self::DisengagedMidValue => {
                ValueTier::Mid
            }
            Self::EngagedLowValue | Self::ModerateLowValue | Self::DisengagedLowValue => {
                ValueTier::Low
            }
        }
    }

    /// The static churn-multiplier triple for this bucket.
    ///
    /// The constants carry the exact published precision, truncation
    /// quirks included. Do not round, extend, or regenerate them.
    pub const fn multipliers(&self) -> ChurnMultipliers {
        match self {
            Self::EngagedHighValue => ChurnMultipliers {
                worst:     0.8,
                realistic: 0.5,
                best:      0.2,
            },
            Self::EngagedMidValue => ChurnMultipliers {
                worst:     1.0,
                realistic: 0.625,
                best:      0.25,
            },
            Self::EngagedLowValue => ChurnMultipliers {
                worst:     1.25,
                realistic: 0.78125,
                best:      0.3125,
            },
            Self::ModerateHighValue => ChurnMultipliers {
                worst:     1.563,
                realistic: 0.9765625,
                best:      0.390625,
            },
            Self::ModerateMidValue => ChurnMultipliers {
                worst:     1.954,
                realistic: 1.220703125,
                best:      0.48828125,
            },
            Self::ModerateLowValue => ChurnMultipliers {
                worst:     2.442,
                realistic: 1.525878906,
                best:      0.6103515625,
            },
            Self::DisengagedHighValue => ChurnMultipliers {
                worst:     3.051,
                realistic: 1.907348633,
                best:      0.7629394531,
            },
            Self::DisengagedMidValue => ChurnMultipliers {
                worst:     3.814,
                realistic: 2.384185791,
                best:      0.9536743164,
            },
            Self::DisengagedLowValue => ChurnMultipliers {
                worst:     4.768,
                realistic: 2.980232239,
                best:      1.192092896,
            },
        }
    }
}

impl std::fmt::Display for Bucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
