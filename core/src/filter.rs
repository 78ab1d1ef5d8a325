//! Multi-facet roster filtering.
//!
//! Filter state is owned by the caller (the presentation layer) and
//! threaded through explicitly; the core never holds ambient filter
//! state. Semantics: an empty facet means "no constraint", a customer
//! must satisfy every non-empty facet (AND across facets), and within
//! a facet any allowed value matches (OR).

use crate::customer::CustomerRecord;
use crate::facets;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerFilter {
    pub buckets:          Vec<String>,
    pub regions:          Vec<String>,
    pub segments:         Vec<String>,
    pub renewal_managers: Vec<String>,
    pub renewal_teams:    Vec<String>,
    /// Long month labels, e.g. "January 2025".
    pub renewal_months:   Vec<String>,
}

impl CustomerFilter {
    /// True when every facet is empty; the filter is then the identity.
    pub fn is_unconstrained(&self) -> bool {
        self.buckets.is_empty()
            && self.regions.is_empty()
            && self.segments.is_empty()
            && self.renewal_managers.is_empty()
            && self.renewal_teams.is_empty()
            && self.renewal_months.is_empty()
    }

    pub fn matches(&self, customer: &CustomerRecord) -> bool {
        facet_allows(&self.buckets, &customer.bucket_name)
            && facet_allows(&self.regions, &customer.region)
            && facet_allows(&self.segments, &customer.segment)
            && facet_allows(&self.renewal_managers, &customer.renewal_manager)
            && facet_allows(&self.renewal_teams, &customer.renewal_team)
            && self.month_allows(customer)
    }

    /// Apply the filter, returning the passing records. With all facets
    /// empty the full list comes back unchanged.
    pub fn apply(&self, customers: &[CustomerRecord]) -> Vec<CustomerRecord> {
        if self.is_unconstrained() {
            return customers.to_vec();
        }
        customers
            .iter()
            .filter(|c| self.matches(c))
            .cloned()
            .collect()
    }

    fn month_allows(&self, customer: &CustomerRecord) -> bool {
        if self.renewal_months.is_empty() {
            return true;
        }
        // An unparsable date has no month label and fails any
        // constrained month facet.
        match customer.renewal_date() {
            Some(date) => {
                let label = facets::month_label(date);
                self.renewal_months.iter().any(|m| *m == label)
            }
            None => false,
        }
    }
}

fn facet_allows(allowed: &[String], value: &str) -> bool {
    allowed.is_empty() || allowed.iter().any(|v| v == value)
}
