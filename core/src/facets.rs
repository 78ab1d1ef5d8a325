//! Facet catalogs — the distinct values offered for each filter facet.
//!
//! Ordering rules differ per facet and are part of the product's
//! behavior: buckets render in the fixed taxonomy order, regions and
//! segments by descending headcount, managers and teams in first-seen
//! order, renewal months chronologically.

use chrono::NaiveDate;

use crate::bucket::Bucket;
use crate::customer::CustomerRecord;

/// Long month label used for the renewal-month facet, e.g. "January 2025".
pub fn month_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Bucket labels present in the roster, in fixed taxonomy order.
pub fn bucket_options(customers: &[CustomerRecord]) -> Vec<String> {
    Bucket::ALL
        .iter()
        .filter(|b| customers.iter().any(|c| c.bucket_name == b.label()))
        .map(|b| b.label().to_string())
        .collect()
}

/// Distinct regions, most populous first. Ties keep first-seen order.
pub fn region_options(customers: &[CustomerRecord]) -> Vec<String> {
    by_descending_count(customers.iter().map(|c| c.region.as_str()))
}

/// Distinct segments, most populous first. Ties keep first-seen order.
pub fn segment_options(customers: &[CustomerRecord]) -> Vec<String> {
    by_descending_count(customers.iter().map(|c| c.segment.as_str()))
}

/// Distinct renewal managers in first-seen order.
pub fn manager_options(customers: &[CustomerRecord]) -> Vec<String> {
    distinct(customers.iter().map(|c| c.renewal_manager.as_str()))
}

/// Distinct renewal teams in first-seen order.
pub fn team_options(customers: &[CustomerRecord]) -> Vec<String> {
    distinct(customers.iter().map(|c| c.renewal_team.as_str()))
}

/// Distinct renewal month labels in calendar order. Records without a
/// parsable renewal date contribute nothing.
pub fn month_options(customers: &[CustomerRecord]) -> Vec<String> {
    let mut months: Vec<(NaiveDate, String)> = Vec::new();
    for customer in customers {
        let Some(date) = customer.renewal_date() else {
            continue;
        };
        let label = month_label(date);
        if !months.iter().any(|(_, l)| *l == label) {
            months.push((date, label));
        }
    }
    months.sort_by_key(|(date, _)| *date);
    months.into_iter().map(|(_, label)| label).collect()
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for value in values {
        if value.is_empty() {
            continue;
        }
        if !out.iter().any(|v| v == value) {
            out.push(value.to_string());
        }
    }
    out
}

fn by_descending_count<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for value in values {
        if value.is_empty() {
            continue;
        }
        match counts.iter_mut().find(|(v, _)| v == value) {
            Some((_, n)) => *n += 1,
            None => counts.push((value.to_string(), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.into_iter().map(|(v, _)| v).collect()
}
