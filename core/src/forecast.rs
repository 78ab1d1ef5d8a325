//! The forecast aggregator.
//!
//! Two views of the same reduction over a filtered roster:
//!   1. Per-bucket summary — count, MRR totals, and the three
//!      incremental-MRR cases per bucket.
//!   2. Monthly series — the same cases bucketed by renewal month over
//!      a 12-month window, totalled across buckets for charting.
//!
//! RULES:
//!   - Output is fully recomputed on every call; nothing is cached or
//!     mutated incrementally.
//!   - All 9 buckets and all 12 months are always present in output,
//!     zero-filled where empty. Skipping empty rows is a presentation
//!     policy, not the aggregator's.
//!   - Malformed input (unknown bucket, missing MRR, unparsable or
//!     out-of-window date) is excluded from aggregates, never an error.
//!   - The two paths round differently on purpose: the bucket summary
//!     recomposes churn risk from the rounded per-bucket average, the
//!     monthly path works on raw unrounded totals. Published figures
//!     depend on both.

use serde::{Deserialize, Serialize};

use crate::bucket::Bucket;
use crate::customer::CustomerRecord;
use crate::scenario::ScenarioParams;
use crate::window::{MonthWindow, WINDOW_MONTHS};

/// Round to 2 decimals, half away from zero.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

// ── Bucket summary ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketSummary {
    pub bucket:         Bucket,
    pub count:          usize,
    pub total_mrr:      f64,
    pub average_mrr:    f64,
    pub worst_case:     f64,
    pub realistic_case: f64,
    pub best_case:      f64,
}

/// Per-bucket incremental-MRR summary over an already-filtered roster.
/// Returns all 9 buckets in fixed order, zero-filled where empty.
pub fn compute_bucket_summary(
    customers: &[CustomerRecord],
    params: &ScenarioParams,
) -> Vec<BucketSummary> {
    let mut counts = [0usize; 9];
    let mut totals = [0.0f64; 9];

    for customer in customers {
        let Some(bucket) = customer.bucket() else {
            continue;
        };
        let i = bucket as usize;
        counts[i] += 1;
        totals[i] += customer.mrr();
    }

    Bucket::ALL
        .iter()
        .map(|&bucket| {
            let i = bucket as usize;
            let count = counts[i];
            let total_mrr = totals[i];
            let average_mrr = if count > 0 {
                round2(total_mrr / count as f64)
            } else {
                0.0
            };

            let m = bucket.multipliers();
            let price_increase_impact = round2(total_mrr * params.price_increase);
            // Recomposed from the rounded average, not the raw total.
            let base_churn_risk =
                round2(count as f64 * params.variable_churn_baseline * average_mrr);

            BucketSummary {
                bucket,
                count,
                total_mrr,
                average_mrr,
                worst_case:     round2(price_increase_impact - base_churn_risk * m.worst),
                realistic_case: round2(price_increase_impact - base_churn_risk * m.realistic),
                best_case:      round2(price_increase_impact - base_churn_risk * m.best),
            }
        })
        .collect()
}

// ── Monthly series ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthCell {
    pub month:          String,
    pub accounts:       usize,
    pub mrr:            f64,
    pub average_mrr:    f64,
    pub worst_case:     f64,
    pub realistic_case: f64,
    pub best_case:      f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketMonths {
    pub bucket: Bucket,
    pub months: Vec<MonthCell>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTotal {
    pub month:          String,
    pub accounts:       usize,
    pub mrr:            f64,
    pub average_mrr:    f64,
    pub worst_case:     f64,
    pub realistic_case: f64,
    pub best_case:      f64,
}

/// The 9 × 12 bucket-by-month detail behind the monthly series.
pub fn compute_monthly_breakdown(
    customers: &[CustomerRecord],
    params: &ScenarioParams,
    window: &MonthWindow,
) -> Vec<BucketMonths> {
    let mut accounts = [[0usize; WINDOW_MONTHS]; 9];
    let mut mrr = [[0.0f64; WINDOW_MONTHS]; 9];
    let mut excluded = 0usize;

    for customer in customers {
        let (Some(bucket), Some(date)) = (customer.bucket(), customer.renewal_date()) else {
            excluded += 1;
            continue;
        };
        let Some(month) = window.index_of(date) else {
            excluded += 1;
            continue;
        };
        let i = bucket as usize;
        accounts[i][month] += 1;
        mrr[i][month] += customer.mrr();
    }

    if excluded > 0 {
        log::debug!(
            "forecast: {excluded}/{} accounts outside the monthly window",
            customers.len()
        );
    }

    Bucket::ALL
        .iter()
        .map(|&bucket| {
            let i = bucket as usize;
            let m = bucket.multipliers();
            let months = (0..WINDOW_MONTHS)
                .map(|month| {
                    let accounts = accounts[i][month];
                    let mrr = mrr[i][month];
                    let average_mrr = if accounts > 0 {
                        round2(mrr / accounts as f64)
                    } else {
                        0.0
                    };
                    // Raw totals here; nothing rounds before the case values.
                    let price_uplift = mrr * params.price_increase;
                    let base_churn_risk = mrr * params.variable_churn_baseline;

                    MonthCell {
                        month: window.label(month).to_string(),
                        accounts,
                        mrr,
                        average_mrr,
                        worst_case:     round2(price_uplift - base_churn_risk * m.worst),
                        realistic_case: round2(price_uplift - base_churn_risk * m.realistic),
                        best_case:      round2(price_uplift - base_churn_risk * m.best),
                    }
                })
                .collect();
            BucketMonths { bucket, months }
        })
        .collect()
}

/// Month-level totals across all buckets — the three scenario lines.
pub fn compute_monthly_series(
    customers: &[CustomerRecord],
    params: &ScenarioParams,
    window: &MonthWindow,
) -> Vec<MonthlyTotal> {
    let breakdown = compute_monthly_breakdown(customers, params, window);

    (0..WINDOW_MONTHS)
        .map(|month| {
            let mut accounts = 0usize;
            let mut mrr = 0.0f64;
            let mut worst = 0.0f64;
            let mut realistic = 0.0f64;
            let mut best = 0.0f64;

            for bucket_months in &breakdown {
                let cell = &bucket_months.months[month];
                accounts += cell.accounts;
                mrr += cell.mrr;
                worst += cell.worst_case;
                realistic += cell.realistic_case;
                best += cell.best_case;
            }

            MonthlyTotal {
                month: window.label(month).to_string(),
                accounts,
                mrr,
                average_mrr: if accounts > 0 {
                    round2(mrr / accounts as f64)
                } else {
                    0.0
                },
                worst_case:     round2(worst),
                realistic_case: round2(realistic),
                best_case:      round2(best),
            }
        })
        .collect()
}
