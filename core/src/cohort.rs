//! Notice-window cohort generation and list export.
//!
//! A renewal desk works cohorts: pick a notice-sent date and a notice
//! period, take every account whose renewal lands on or after the
//! notice deadline, group the selection by renewal month, and hand the
//! lists to downstream tooling as CSV.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::customer::CustomerRecord;
use crate::error::ForecastResult;

/// Notice periods offered by the dashboard, in days.
pub const NOTICE_DAY_OPTIONS: [u32; 4] = [15, 30, 60, 90];

/// Export column order. Fixed; downstream sheets key on it.
pub const EXPORT_FIELDS: [&str; 11] = [
    "Account Name",
    "Monthly Recurring Revenue",
    "Segment",
    "Renewal Manager",
    "Renewal Team",
    "Managed Renewal Date",
    "Region",
    "Adoption Score",
    "MRR Score",
    "Bucket Name",
    "Initial Subscription",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenewalCohort {
    pub cohort_id: String,
    /// Month label, e.g. "Jan 2025".
    pub name:      String,
    pub customers: Vec<CustomerRecord>,
}

/// Cohort month label for a renewal date, e.g. "Jan 2025".
pub fn cohort_label(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

/// Accounts whose renewal date is on or after `notice_sent` plus the
/// notice period. Accounts without a parsable renewal date are excluded.
pub fn select_by_notice(
    customers: &[CustomerRecord],
    notice_sent: NaiveDate,
    days_of_notice: u32,
) -> Vec<CustomerRecord> {
    let deadline = notice_sent
        .checked_add_days(Days::new(days_of_notice as u64))
        .unwrap_or(NaiveDate::MAX);
    customers
        .iter()
        .filter(|c| matches!(c.renewal_date(), Some(date) if date >= deadline))
        .cloned()
        .collect()
}

/// Group accounts into per-month cohorts, in calendar order. Accounts
/// without a parsable renewal date are dropped from every cohort.
pub fn group_by_renewal_month(customers: &[CustomerRecord]) -> Vec<RenewalCohort> {
    let mut groups: Vec<(NaiveDate, String, Vec<CustomerRecord>)> = Vec::new();

    for customer in customers {
        let Some(date) = customer.renewal_date() else {
            continue;
        };
        let month_start = date.with_day(1).unwrap_or(date);
        let label = cohort_label(date);
        match groups.iter_mut().find(|(_, l, _)| *l == label) {
            Some((_, _, members)) => members.push(customer.clone()),
            None => groups.push((month_start, label, vec![customer.clone()])),
        }
    }

    groups.sort_by_key(|(month, _, _)| *month);

    log::debug!(
        "cohorts: {} accounts grouped into {} renewal months",
        customers.len(),
        groups.len()
    );

    groups
        .into_iter()
        .map(|(_, name, customers)| RenewalCohort {
            cohort_id: uuid::Uuid::new_v4().to_string(),
            name,
            customers,
        })
        .collect()
}

/// Render a customer list as CSV in the fixed export column order.
/// String cells are quoted with embedded quotes doubled; numeric cells
/// are written bare; missing numerics become empty cells.
pub fn to_csv(customers: &[CustomerRecord]) -> String {
    let mut lines = Vec::with_capacity(customers.len() + 1);
    lines.push(EXPORT_FIELDS.join(","));

    for c in customers {
        let row = [
            quote(&c.account_name),
            number(c.monthly_recurring_revenue),
            quote(&c.segment),
            quote(&c.renewal_manager),
            quote(&c.renewal_team),
            quote(&c.managed_renewal_date),
            quote(&c.region),
            number(c.adoption_score),
            number(c.mrr_score),
            quote(&c.bucket_name),
            quote(&c.initial_subscription),
        ];
        lines.push(row.join(","));
    }

    lines.join("\n")
}

/// Write a customer list to a CSV file.
pub fn write_csv(path: &std::path::Path, customers: &[CustomerRecord]) -> ForecastResult<()> {
    std::fs::write(path, to_csv(customers))?;
    log::info!("cohorts: exported {} accounts to {}", customers.len(), path.display());
    Ok(())
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn number(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
