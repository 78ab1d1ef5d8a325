use chrono::NaiveDate;
use revops_core::cohort::{group_by_renewal_month, select_by_notice, to_csv, EXPORT_FIELDS};
use revops_core::customer::CustomerRecord;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn customer(name: &str, renewal: &str) -> CustomerRecord {
    CustomerRecord {
        account_name: name.into(),
        monthly_recurring_revenue: Some(1500.0),
        segment: "Enterprise".into(),
        renewal_manager: "Tomas Moreau".into(),
        renewal_team: "Renewals East".into(),
        managed_renewal_date: renewal.into(),
        region: "AMER".into(),
        adoption_score: Some(72.5),
        mrr_score: Some(18.0),
        bucket_name: "Engaged Mid-Value".into(),
        initial_subscription: "2022-05-01".into(),
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

/// Notice selection keeps renewals on or after notice date + period;
/// the deadline day itself is included.
#[test]
fn notice_selection_is_inclusive_of_the_deadline() {
    let customers = vec![
        customer("Before", "2025-04-29"),
        customer("OnDeadline", "2025-04-30"),
        customer("After", "2025-06-01"),
        customer("Undated", "when we get to it"),
    ];
    let notice_sent = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();

    let selected = select_by_notice(&customers, notice_sent, 60);

    let names: Vec<_> = selected.iter().map(|c| c.account_name.as_str()).collect();
    assert_eq!(names, vec!["OnDeadline", "After"]);
}

/// Zero days of notice means everything renewing on or after the
/// notice date qualifies.
#[test]
fn zero_notice_days_selects_from_the_notice_date() {
    let customers = vec![
        customer("Past", "2025-02-28"),
        customer("Today", "2025-03-01"),
    ];
    let notice_sent = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();

    let selected = select_by_notice(&customers, notice_sent, 0);
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].account_name, "Today");
}

/// Cohorts group by renewal month with "Mon YYYY" names in calendar
/// order; undated accounts appear in no cohort.
#[test]
fn cohorts_group_by_month_in_calendar_order() {
    let customers = vec![
        customer("JulyOne", "2025-07-15"),
        customer("MarchOne", "2025-03-02"),
        customer("MarchTwo", "2025-03-28"),
        customer("Undated", ""),
        customer("NextJan", "2026-01-09"),
    ];

    let cohorts = group_by_renewal_month(&customers);

    let names: Vec<_> = cohorts.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Mar 2025", "Jul 2025", "Jan 2026"]);
    assert_eq!(cohorts[0].customers.len(), 2);
    assert_eq!(cohorts[1].customers.len(), 1);

    let total: usize = cohorts.iter().map(|c| c.customers.len()).sum();
    assert_eq!(total, 4);
}

/// Every generated cohort gets its own id.
#[test]
fn cohort_ids_are_unique() {
    let customers = vec![
        customer("A", "2025-01-10"),
        customer("B", "2025-02-10"),
        customer("C", "2025-03-10"),
    ];
    let cohorts = group_by_renewal_month(&customers);

    assert_eq!(cohorts.len(), 3);
    for cohort in &cohorts {
        assert!(!cohort.cohort_id.is_empty());
    }
    assert_ne!(cohorts[0].cohort_id, cohorts[1].cohort_id);
    assert_ne!(cohorts[1].cohort_id, cohorts[2].cohort_id);
}

/// CSV export carries the fixed header, quotes string cells, doubles
/// embedded quotes, and writes numerics bare.
#[test]
fn csv_export_quotes_and_orders_fields() {
    let mut tricky = customer("Acme \"Prime\" Holdings", "2025-09-30");
    tricky.monthly_recurring_revenue = Some(1234.5);

    let csv = to_csv(&[tricky]);
    let mut lines = csv.lines();

    assert_eq!(lines.next().unwrap(), EXPORT_FIELDS.join(","));

    let row = lines.next().unwrap();
    assert!(row.starts_with("\"Acme \"\"Prime\"\" Holdings\",1234.5,"));
    assert!(row.contains("\"2025-09-30\""));
    assert!(row.ends_with("\"Engaged Mid-Value\",\"2022-05-01\""));
    assert!(lines.next().is_none());
}

/// Missing numeric values export as empty cells, not zeros.
#[test]
fn csv_export_leaves_missing_numerics_empty() {
    let mut sparse = customer("Sparse Co", "2025-09-30");
    sparse.monthly_recurring_revenue = None;
    sparse.adoption_score = None;

    let csv = to_csv(&[sparse]);
    let row = csv.lines().nth(1).unwrap();

    assert!(row.contains("\"Sparse Co\",,\"Enterprise\""));
    assert!(row.contains("\"AMER\",,18,"));
}
