use revops_core::customer::CustomerRecord;
use revops_core::facets;
use revops_core::filter::CustomerFilter;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn customer(
    name: &str,
    bucket: &str,
    region: &str,
    segment: &str,
    manager: &str,
    team: &str,
    renewal: &str,
) -> CustomerRecord {
    CustomerRecord {
        account_name: name.into(),
        monthly_recurring_revenue: Some(1000.0),
        segment: segment.into(),
        renewal_manager: manager.into(),
        renewal_team: team.into(),
        managed_renewal_date: renewal.into(),
        region: region.into(),
        adoption_score: Some(60.0),
        mrr_score: Some(30.0),
        bucket_name: bucket.into(),
        initial_subscription: "2023-01-01".into(),
    }
}

fn sample_roster() -> Vec<CustomerRecord> {
    vec![
        customer(
            "Northwind Payments Inc",
            "Engaged High-Value",
            "AMER",
            "Enterprise",
            "Avery Okafor",
            "Renewals East",
            "2025-03-10",
        ),
        customer(
            "Cobalt Media Group",
            "Moderate Mid-Value",
            "EMEA",
            "Mid-Market",
            "Elena Ramos",
            "Renewals EMEA",
            "2025-03-22",
        ),
        customer(
            "Summit Energy LLC",
            "Disengaged Low-Value",
            "AMER",
            "SMB",
            "Avery Okafor",
            "Renewals West",
            "2025-07-01",
        ),
        customer(
            "Juniper Biotech Labs",
            "Engaged High-Value",
            "APAC",
            "Enterprise",
            "Priya Chen",
            "Renewals APAC",
            "not a date",
        ),
    ]
}

// ── Tests ────────────────────────────────────────────────────────────────────

/// With every facet empty the filter is the identity.
#[test]
fn unconstrained_filter_returns_everything() {
    let roster = sample_roster();
    let filter = CustomerFilter::default();

    assert!(filter.is_unconstrained());
    assert_eq!(filter.apply(&roster), roster);
}

/// A single non-empty facet keeps only matching accounts.
#[test]
fn single_facet_selects_matches() {
    let roster = sample_roster();
    let filter = CustomerFilter {
        regions: vec!["AMER".into()],
        ..Default::default()
    };

    let passed = filter.apply(&roster);
    assert_eq!(passed.len(), 2);
    assert!(passed.iter().all(|c| c.region == "AMER"));
}

/// Values within one facet OR together.
#[test]
fn values_within_a_facet_union() {
    let roster = sample_roster();
    let filter = CustomerFilter {
        regions: vec!["EMEA".into(), "APAC".into()],
        ..Default::default()
    };

    let passed = filter.apply(&roster);
    assert_eq!(passed.len(), 2);
}

/// Non-empty facets AND together across dimensions.
#[test]
fn facets_intersect_across_dimensions() {
    let roster = sample_roster();
    let filter = CustomerFilter {
        regions: vec!["AMER".into()],
        buckets: vec!["Engaged High-Value".into()],
        renewal_managers: vec!["Avery Okafor".into()],
        ..Default::default()
    };

    let passed = filter.apply(&roster);
    assert_eq!(passed.len(), 1);
    assert_eq!(passed[0].account_name, "Northwind Payments Inc");
}

/// The month facet matches the long label of the parsed renewal date;
/// accounts with unparsable dates fail any constrained month facet.
#[test]
fn month_facet_matches_long_labels() {
    let roster = sample_roster();
    let filter = CustomerFilter {
        renewal_months: vec!["March 2025".into()],
        ..Default::default()
    };

    let passed = filter.apply(&roster);
    assert_eq!(passed.len(), 2);
    assert!(passed.iter().all(|c| c.managed_renewal_date.starts_with("2025-03")));

    // "not a date" fails even when its other facets would match.
    let with_bucket = CustomerFilter {
        renewal_months: vec!["March 2025".into()],
        buckets: vec!["Engaged High-Value".into()],
        ..Default::default()
    };
    let passed = with_bucket.apply(&roster);
    assert_eq!(passed.len(), 1);
}

/// Bucket options render in taxonomy order, restricted to labels
/// actually present.
#[test]
fn bucket_options_follow_taxonomy_order() {
    let roster = sample_roster();
    let options = facets::bucket_options(&roster);

    assert_eq!(
        options,
        vec![
            "Engaged High-Value".to_string(),
            "Moderate Mid-Value".to_string(),
            "Disengaged Low-Value".to_string(),
        ]
    );
}

/// Region options sort by headcount, most populous first, with ties in
/// first-seen order.
#[test]
fn region_options_sort_by_count() {
    let roster = sample_roster();
    let options = facets::region_options(&roster);

    assert_eq!(options[0], "AMER");
    assert_eq!(options.len(), 3);
    assert_eq!(options[1], "EMEA");
    assert_eq!(options[2], "APAC");
}

/// Month options are distinct long labels in calendar order; junk
/// dates contribute nothing.
#[test]
fn month_options_are_chronological_and_deduped() {
    let roster = sample_roster();
    let options = facets::month_options(&roster);

    assert_eq!(
        options,
        vec!["March 2025".to_string(), "July 2025".to_string()]
    );
}

/// Manager and team options keep first-seen order and drop empties.
#[test]
fn manager_options_keep_first_seen_order() {
    let mut roster = sample_roster();
    roster.push(customer(
        "Granite Retail Corp",
        "Engaged Mid-Value",
        "AMER",
        "SMB",
        "",
        "Renewals East",
        "2025-08-01",
    ));

    let managers = facets::manager_options(&roster);
    assert_eq!(
        managers,
        vec![
            "Avery Okafor".to_string(),
            "Elena Ramos".to_string(),
            "Priya Chen".to_string(),
        ]
    );
}
