//! Deterministic sample-roster generation.
//!
//! Produces realistic synthetic rosters for the runner and for tests.
//! All randomness flows through a single PCG64 stream seeded from one
//! u64, so the same seed reproduces the same roster. A few percent of the
//! generated records are deliberately imperfect (missing bucket, junk
//! renewal date, out-of-window renewal) so the tolerant paths stay
//! exercised.

use chrono::{Days, Months, NaiveDate};
use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

use crate::bucket::{Bucket, Engagement, ValueTier};
use crate::customer::CustomerRecord;
use crate::forecast::round2;

/// Deterministic RNG for roster synthesis.
struct SampleRng {
    inner: Pcg64Mcg,
}

impl SampleRng {
    fn new(seed: u64) -> Self {
        Self {
            inner: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    /// Roll a float in [0.0, 1.0).
    fn next_f64(&mut self) -> f64 {
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Roll a u64 in [0, n).
    fn next_u64_below(&mut self, n: u64) -> u64 {
        assert!(n > 0, "n must be > 0");
        self.inner.next_u64() % n
    }

    /// Bernoulli trial: returns true with probability p.
    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Sample from a simplified Pareto distribution.
    fn pareto(&mut self, x_min: f64, alpha: f64) -> f64 {
        let u = self.next_f64().max(1e-10);
        x_min * u.powf(-1.0 / alpha)
    }

    fn pick<'a>(&mut self, pool: &[&'a str]) -> &'a str {
        pool[self.next_u64_below(pool.len() as u64) as usize]
    }
}

const ACCOUNT_PREFIXES: &[&str] = &[
    "Northwind", "Apex", "Bluegrain", "Cobalt", "Driftwood", "Everline", "Fairmont",
    "Granite", "Harborview", "Ironleaf", "Juniper", "Keystone", "Lakeshore", "Meridian",
    "Nimbus", "Oakfield", "Pinnacle", "Quarry", "Redwood", "Summit",
];

const ACCOUNT_INDUSTRIES: &[&str] = &[
    "Analytics", "Logistics", "Media", "Robotics", "Health", "Retail", "Energy",
    "Freight", "Hospitality", "Insurance", "Biotech", "Payments",
];

const ACCOUNT_SUFFIXES: &[&str] = &[
    "Inc", "LLC", "Corp", "Group", "Labs", "Systems", "Holdings", "Partners",
];

const MANAGER_FIRST_NAMES: &[&str] = &[
    "Avery", "Jordan", "Priya", "Marcus", "Elena", "Tomas", "Naomi", "Derek",
];

const MANAGER_LAST_NAMES: &[&str] = &[
    "Okafor", "Lindqvist", "Ramos", "Chen", "Whitfield", "Kaur", "Moreau", "Ellison",
];

const REGIONS: &[&str] = &["AMER", "EMEA", "APAC", "LATAM"];

const SEGMENTS: &[&str] = &["Enterprise", "Mid-Market", "SMB"];

const TEAMS: &[&str] = &[
    "Renewals East",
    "Renewals West",
    "Renewals EMEA",
    "Renewals APAC",
];

/// Generate a synthetic roster of `accounts` records whose renewals
/// mostly land in the 12 months starting at (year, month).
pub fn generate_roster(seed: u64, accounts: usize, year: i32, month: u32) -> Vec<CustomerRecord> {
    let mut rng = SampleRng::new(seed);
    let window_start =
        NaiveDate::from_ymd_opt(year, month.clamp(1, 12), 1).unwrap_or(NaiveDate::MIN);

    (0..accounts).map(|_| generate_record(&mut rng, window_start)).collect()
}

fn generate_record(rng: &mut SampleRng, window_start: NaiveDate) -> CustomerRecord {
    let account_name = format!(
        "{} {} {}",
        rng.pick(ACCOUNT_PREFIXES),
        rng.pick(ACCOUNT_INDUSTRIES),
        rng.pick(ACCOUNT_SUFFIXES),
    );
    let renewal_manager = format!(
        "{} {}",
        rng.pick(MANAGER_FIRST_NAMES),
        rng.pick(MANAGER_LAST_NAMES),
    );

    // Heavy-tailed MRR, capped to keep High-Value plausible.
    let mrr = round2(rng.pareto(250.0, 1.3).min(60_000.0));
    let adoption_score = round2(rng.next_f64() * 100.0);
    let mrr_score = round2((mrr / 60_000.0 * 100.0).min(100.0));

    let bucket = classify(adoption_score, mrr);
    // A slice of every uploaded roster arrives unclassified.
    let bucket_name = if rng.chance(0.03) {
        String::new()
    } else {
        bucket.label().to_string()
    };

    let renewal_date = generate_renewal_date(rng, window_start);
    let initial_subscription = renewal_date_minus_years(&renewal_date, rng);

    CustomerRecord {
        account_name,
        monthly_recurring_revenue: Some(mrr),
        segment: rng.pick(SEGMENTS).to_string(),
        renewal_manager,
        renewal_team: rng.pick(TEAMS).to_string(),
        managed_renewal_date: renewal_date,
        region: rng.pick(REGIONS).to_string(),
        adoption_score: Some(adoption_score),
        mrr_score: Some(mrr_score),
        bucket_name,
        initial_subscription,
    }
}

fn classify(adoption_score: f64, mrr: f64) -> Bucket {
    let engagement = if adoption_score >= 66.0 {
        Engagement::Engaged
    } else if adoption_score >= 33.0 {
        Engagement::Moderate
    } else {
        Engagement::Disengaged
    };
    let value = if mrr >= 5_000.0 {
        ValueTier::High
    } else if mrr >= 1_000.0 {
        ValueTier::Mid
    } else {
        ValueTier::Low
    };

    Bucket::ALL
        .into_iter()
        .find(|b| b.engagement() == engagement && b.value_tier() == value)
        .expect("taxonomy covers every tier combination")
}

fn generate_renewal_date(rng: &mut SampleRng, window_start: NaiveDate) -> String {
    // A small slice of rosters carries junk dates.
    if rng.chance(0.02) {
        return "TBD".to_string();
    }
    // And a few renewals fall beyond the forecast window.
    let month_offset = if rng.chance(0.03) {
        12 + rng.next_u64_below(6) as u32
    } else {
        rng.next_u64_below(12) as u32
    };
    let day_offset = rng.next_u64_below(28);
    window_start
        .checked_add_months(Months::new(month_offset))
        .and_then(|d| d.checked_add_days(Days::new(day_offset)))
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

fn renewal_date_minus_years(renewal: &str, rng: &mut SampleRng) -> String {
    let years = 1 + rng.next_u64_below(3) as u32;
    NaiveDate::parse_from_str(renewal, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.checked_sub_months(Months::new(12 * years)))
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}
