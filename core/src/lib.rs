//! revops-core — client-side forecast aggregation for a renewal desk.
//!
//! Takes a customer roster (a JSON array of flat records from the
//! upstream API), a facet filter, and two scenario dials, and derives
//! per-bucket and per-month incremental-MRR forecasts under worst /
//! realistic / best churn scenarios. All computation is synchronous,
//! pure, and linear in roster size; derived structures are recomputed
//! from scratch on every input change and never persisted.

pub mod bucket;
pub mod cohort;
pub mod customer;
pub mod error;
pub mod facets;
pub mod filter;
pub mod forecast;
pub mod roster;
pub mod sample;
pub mod scenario;
pub mod window;
