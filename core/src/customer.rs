//! The roster record as the external API delivers it.
//!
//! The customer list arrives as a JSON array of flat records whose keys
//! are spreadsheet-style display names ("Account Name", "Monthly
//! Recurring Revenue", ...). Rosters are user-uploaded and uncontrolled:
//! every field may be missing, MRR may arrive as a string, renewal dates
//! come in whatever format the upload used. The policy is uniform:
//! coerce what can be coerced, exclude the rest from aggregates, never
//! fail.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

use crate::bucket::Bucket;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    #[serde(rename = "Account Name", default)]
    pub account_name: String,

    #[serde(
        rename = "Monthly Recurring Revenue",
        default,
        deserialize_with = "flexible_f64"
    )]
    pub monthly_recurring_revenue: Option<f64>,

    #[serde(rename = "Segment", default)]
    pub segment: String,

    #[serde(rename = "Renewal Manager", default)]
    pub renewal_manager: String,

    #[serde(rename = "Renewal Team", default)]
    pub renewal_team: String,

    #[serde(rename = "Managed Renewal Date", default)]
    pub managed_renewal_date: String,

    #[serde(rename = "Region", default)]
    pub region: String,

    #[serde(rename = "Adoption Score", default, deserialize_with = "flexible_f64")]
    pub adoption_score: Option<f64>,

    #[serde(rename = "MRR Score", default, deserialize_with = "flexible_f64")]
    pub mrr_score: Option<f64>,

    #[serde(rename = "Bucket Name", default)]
    pub bucket_name: String,

    #[serde(rename = "Initial Subscription", default)]
    pub initial_subscription: String,
}

impl CustomerRecord {
    /// MRR as the aggregator consumes it: missing or non-numeric is 0,
    /// negative values floor at 0.
    pub fn mrr(&self) -> f64 {
        self.monthly_recurring_revenue
            .map(|v| v.max(0.0))
            .unwrap_or(0.0)
    }

    /// The bucket, if the label matches one of the 9 known categories.
    pub fn bucket(&self) -> Option<Bucket> {
        Bucket::from_label(&self.bucket_name)
    }

    /// Parsed renewal date, or None when absent/unparsable.
    pub fn renewal_date(&self) -> Option<NaiveDate> {
        parse_date(&self.managed_renewal_date)
    }
}

/// Tolerant date parse covering the formats seen in uploaded rosters.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.date());
    }
    for fmt in ["%Y-%m-%d", "%m/%d/%Y", "%b %d, %Y", "%d %b %Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }
    None
}

/// Accept a JSON number, a numeric string, or anything else as None.
fn flexible_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}
