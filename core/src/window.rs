//! The 12-month forecast window.
//!
//! Monthly bucketing is done by label, not by date range: a renewal
//! date is formatted as short-month + 2-digit year ("Jan-25") and
//! matched against the window's 12 labels. The window is caller
//! supplied: one forecast year, starting at any calendar month.

use chrono::{Months, NaiveDate};

use crate::error::{ForecastError, ForecastResult};

pub const WINDOW_MONTHS: usize = 12;

/// Format a date as a window key, e.g. "Jan-25".
pub fn month_key(date: NaiveDate) -> String {
    date.format("%b-%y").to_string()
}

/// An ordered 12-month label window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthWindow {
    labels: Vec<String>,
}

impl MonthWindow {
    /// Twelve consecutive months starting at the given calendar month.
    pub fn starting(year: i32, month: u32) -> ForecastResult<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(ForecastError::InvalidWindowStart { year, month })?;
        let mut labels = Vec::with_capacity(WINDOW_MONTHS);
        let mut cursor = first;
        for _ in 0..WINDOW_MONTHS {
            labels.push(month_key(cursor));
            cursor = cursor
                .checked_add_months(Months::new(1))
                .ok_or(ForecastError::InvalidWindowStart { year, month })?;
        }
        Ok(Self { labels })
    }

    /// Adopt caller-supplied labels. Must be exactly 12.
    pub fn from_labels(labels: Vec<String>) -> ForecastResult<Self> {
        if labels.len() != WINDOW_MONTHS {
            return Err(ForecastError::WindowSize {
                actual: labels.len(),
            });
        }
        Ok(Self { labels })
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn label(&self, index: usize) -> &str {
        &self.labels[index]
    }

    /// Index of the month a date falls in, or None when the date's
    /// label is outside the window.
    pub fn index_of(&self, date: NaiveDate) -> Option<usize> {
        let key = month_key(date);
        self.labels.iter().position(|label| *label == key)
    }
}
