//! forecast-runner: headless forecast runner for the renewal desk.
//!
//! Usage:
//!   forecast-runner --roster roster.json --price-increase 20 --churn-baseline 10
//!   forecast-runner --seed 42 --accounts 150 --window 2025-01
//!   forecast-runner --seed 42 --regions AMER,EMEA --json
//!   forecast-runner --roster roster.json --notice-date 2025-03-01 --notice-days 60 \
//!       --export-cohort cohort.csv

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use revops_core::{
    cohort,
    customer::CustomerRecord,
    filter::CustomerFilter,
    forecast::{compute_bucket_summary, compute_monthly_series, round2, BucketSummary, MonthlyTotal},
    roster::load_roster,
    sample::generate_roster,
    scenario::ScenarioParams,
    window::MonthWindow,
};
use std::env;
use std::path::Path;

#[derive(serde::Serialize)]
struct ForecastReport {
    accounts:       usize,
    filtered:       usize,
    params:         ScenarioParams,
    window:         Vec<String>,
    bucket_summary: Vec<BucketSummary>,
    monthly_series: Vec<MonthlyTotal>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let accounts = parse_arg(&args, "--accounts", 150usize);
    let price_pct = parse_arg(&args, "--price-increase", 20u32);
    let churn_pct = parse_arg(&args, "--churn-baseline", 10u32);
    let json_mode = args.iter().any(|a| a == "--json");
    let roster_path = string_arg(&args, "--roster");
    let window_start = string_arg(&args, "--window").unwrap_or_else(|| "2025-01".to_string());

    let (year, month) = parse_window_start(&window_start)?;

    let roster = match &roster_path {
        Some(path) => load_roster(Path::new(path))
            .with_context(|| format!("loading roster from {path}"))?,
        None => generate_roster(seed, accounts, year, month),
    };

    let filter = filter_from_args(&args);
    let filtered = filter.apply(&roster);

    let params = ScenarioParams::from_percent(price_pct, churn_pct);
    let window = MonthWindow::starting(year, month)?;

    let bucket_summary = compute_bucket_summary(&filtered, &params);
    let monthly_series = compute_monthly_series(&filtered, &params, &window);

    if json_mode {
        let report = ForecastReport {
            accounts: roster.len(),
            filtered: filtered.len(),
            params,
            window: window.labels().to_vec(),
            bucket_summary,
            monthly_series,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_banner(&roster_path, seed, roster.len(), filtered.len(), &params, &window_start);
        print_bucket_summary(&bucket_summary);
        print_monthly_series(&monthly_series);
    }

    maybe_export_cohort(&args, &filtered)?;

    Ok(())
}

fn print_banner(
    roster_path: &Option<String>,
    seed: u64,
    total: usize,
    filtered: usize,
    params: &ScenarioParams,
    window_start: &str,
) {
    println!("Renewal Desk — forecast-runner");
    match roster_path {
        Some(path) => println!("  roster:          {path}"),
        None => println!("  roster:          generated (seed {seed})"),
    }
    println!("  accounts:        {total} ({filtered} after filters)");
    println!("  price increase:  {:.0}%", params.price_increase * 100.0);
    println!("  churn baseline:  {:.0}%", params.variable_churn_baseline * 100.0);
    println!("  window:          12 months from {window_start}");
    println!();
}

fn print_bucket_summary(summaries: &[BucketSummary]) {
    println!("=== FORECAST SUMMARY ===");
    println!(
        "  {:<22} {:>6} {:>12} {:>12} {:>12} {:>12} {:>12}",
        "Bucket", "Count", "Total MRR", "Avg MRR", "Worst", "Realistic", "Best"
    );

    // Empty buckets are skipped in the table, same as the dashboard.
    for s in summaries.iter().filter(|s| s.count > 0) {
        println!(
            "  {:<22} {:>6} {:>12.2} {:>12.2} {:>12.2} {:>12.2} {:>12.2}",
            s.bucket.label(),
            s.count,
            s.total_mrr,
            s.average_mrr,
            s.worst_case,
            s.realistic_case,
            s.best_case
        );
    }

    let count: usize = summaries.iter().map(|s| s.count).sum();
    let total_mrr: f64 = summaries.iter().map(|s| s.total_mrr).sum();
    let average = if count > 0 {
        round2(total_mrr / count as f64)
    } else {
        0.0
    };
    println!(
        "  {:<22} {:>6} {:>12.2} {:>12.2} {:>12.2} {:>12.2} {:>12.2}",
        "Total",
        count,
        total_mrr,
        average,
        summaries.iter().map(|s| s.worst_case).sum::<f64>(),
        summaries.iter().map(|s| s.realistic_case).sum::<f64>(),
        summaries.iter().map(|s| s.best_case).sum::<f64>(),
    );
    println!();
}

fn print_monthly_series(series: &[MonthlyTotal]) {
    println!("=== MONTHLY SERIES ===");
    println!(
        "  {:<8} {:>9} {:>12} {:>12} {:>12} {:>12}",
        "Month", "Accounts", "MRR", "Worst", "Realistic", "Best"
    );
    for total in series {
        println!(
            "  {:<8} {:>9} {:>12.2} {:>12.2} {:>12.2} {:>12.2}",
            total.month,
            total.accounts,
            total.mrr,
            total.worst_case,
            total.realistic_case,
            total.best_case
        );
    }
    println!();
}

fn maybe_export_cohort(args: &[String], filtered: &[CustomerRecord]) -> Result<()> {
    let Some(export_path) = string_arg(args, "--export-cohort") else {
        return Ok(());
    };
    let Some(notice_date) = string_arg(args, "--notice-date") else {
        bail!("--export-cohort requires --notice-date YYYY-MM-DD");
    };
    let notice_sent = NaiveDate::parse_from_str(&notice_date, "%Y-%m-%d")
        .with_context(|| format!("parsing --notice-date {notice_date}"))?;
    let days = parse_arg(args, "--notice-days", 60u32);
    if !cohort::NOTICE_DAY_OPTIONS.contains(&days) {
        log::warn!("non-standard notice period: {days} days");
    }

    let selected = cohort::select_by_notice(filtered, notice_sent, days);
    cohort::write_csv(Path::new(&export_path), &selected)?;
    println!(
        "Exported {} accounts renewing on or after {} + {days} days to {export_path}",
        selected.len(),
        notice_sent
    );

    Ok(())
}

fn filter_from_args(args: &[String]) -> CustomerFilter {
    CustomerFilter {
        buckets:          list_arg(args, "--buckets"),
        regions:          list_arg(args, "--regions"),
        segments:         list_arg(args, "--segments"),
        renewal_managers: list_arg(args, "--managers"),
        renewal_teams:    list_arg(args, "--teams"),
        renewal_months:   list_arg(args, "--months"),
    }
}

fn parse_window_start(raw: &str) -> Result<(i32, u32)> {
    let (year, month) = raw
        .split_once('-')
        .with_context(|| format!("--window must be YYYY-MM, got {raw}"))?;
    Ok((
        year.parse().with_context(|| format!("bad window year in {raw}"))?,
        month.parse().with_context(|| format!("bad window month in {raw}"))?,
    ))
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}

fn string_arg(args: &[String], flag: &str) -> Option<String> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].clone())
}

fn list_arg(args: &[String], flag: &str) -> Vec<String> {
    string_arg(args, flag)
        .map(|raw| {
            raw.split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        })
        .unwrap_or_default()
}
