//! Roster loading.
//!
//! The external API (and the upload path behind it) produces a JSON
//! array of flat customer records. A malformed document is an error; a
//! malformed *record* is not: it is skipped and counted, matching the
//! tolerance policy applied everywhere else to uploaded data.

use std::io::Read;
use std::path::Path;

use crate::customer::CustomerRecord;
use crate::error::ForecastResult;

/// Parse a roster from a JSON array string.
pub fn roster_from_json(json: &str) -> ForecastResult<Vec<CustomerRecord>> {
    let raw: Vec<serde_json::Value> = serde_json::from_str(json)?;
    Ok(collect_records(raw))
}

/// Parse a roster from a reader.
pub fn roster_from_reader<R: Read>(reader: R) -> ForecastResult<Vec<CustomerRecord>> {
    let raw: Vec<serde_json::Value> = serde_json::from_reader(reader)?;
    Ok(collect_records(raw))
}

/// Load a roster from a JSON file.
pub fn load_roster(path: &Path) -> ForecastResult<Vec<CustomerRecord>> {
    let file = std::fs::File::open(path)?;
    roster_from_reader(std::io::BufReader::new(file))
}

fn collect_records(raw: Vec<serde_json::Value>) -> Vec<CustomerRecord> {
    let total = raw.len();
    let mut customers = Vec::with_capacity(total);
    let mut skipped = 0usize;

    for value in raw {
        match serde_json::from_value::<CustomerRecord>(value) {
            Ok(record) => customers.push(record),
            Err(_) => skipped += 1,
        }
    }

    if skipped > 0 {
        log::warn!("roster: skipped {skipped}/{total} malformed records");
    }

    let unbucketed = customers.iter().filter(|c| c.bucket().is_none()).count();
    let undated = customers
        .iter()
        .filter(|c| c.renewal_date().is_none())
        .count();
    log::info!(
        "roster: loaded {} accounts ({unbucketed} unbucketed, {undated} undated)",
        customers.len()
    );

    customers
}
