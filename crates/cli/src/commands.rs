//! Handlers for the menu choices.

use chrono::{NaiveDate, Utc};

use envmon_core::error::CoreError;
use envmon_core::evaluate::evaluate;
use envmon_core::metric::{Metric, BASELINE_METRICS};
use envmon_core::threshold::{self, Limit};
use envmon_core::tips::tips;
use envmon_db::models::reading::{NewReading, ReadingRow};
use envmon_db::repositories::reading_repo::ReadingRepo;
use envmon_db::repositories::threshold_repo::ThresholdRepo;
use envmon_db::DbPool;
use envmon_providers::FetchConfig;

use crate::menu;

/// Fetch current data, log it, and report any threshold violations.
pub async fn fetch_and_log(pool: &DbPool, fetch_config: &FetchConfig) -> anyhow::Result<()> {
    println!("\nFetching latest environmental data...");

    let reading = envmon_providers::fetch_reading(fetch_config).await?;
    ReadingRepo::insert(pool, Utc::now(), &NewReading::from(&reading)).await?;
    println!("Data successfully logged to the database.");

    let overrides = ThresholdRepo::overrides(pool).await?;
    let alerts = evaluate(&reading, &threshold::resolve(&overrides));
    if alerts.is_empty() {
        println!("All readings are within safe limits.");
    } else {
        for alert in &alerts {
            println!("ALERT: {alert}");
        }
    }

    Ok(())
}

/// Display the most recent stored reading.
pub async fn show_latest(pool: &DbPool) -> anyhow::Result<()> {
    println!("\nFetching latest readings...");

    let Some(row) = ReadingRepo::latest(pool).await? else {
        println!("No data available. Fetch data first.");
        return Ok(());
    };

    println!("\nLatest Environmental Readings ({})", row.recorded_at);
    print_reading_row(&row);

    Ok(())
}

/// Query stored readings for a date range and display them.
pub async fn query_historical(pool: &DbPool) -> anyhow::Result<()> {
    println!("\nQuery historical data:");

    let start_str = menu::prompt("Enter start date (YYYY-MM-DD): ")?;
    let end_str = menu::prompt("Enter end date (YYYY-MM-DD): ")?;

    let (Some(start), Some(end)) = (parse_date(&start_str), parse_date(&end_str)) else {
        println!("Invalid date format. Please use YYYY-MM-DD.");
        return Ok(());
    };

    // Inclusive range: whole days from start 00:00 to end 23:59:59.
    let start = start.and_hms_opt(0, 0, 0).expect("valid time").and_utc();
    let end = end.and_hms_opt(23, 59, 59).expect("valid time").and_utc();

    let rows = ReadingRepo::range(pool, start, end).await?;
    if rows.is_empty() {
        println!("No data found for the specified range.");
        return Ok(());
    }

    println!("\nHistorical Environmental Data ({} rows)", rows.len());
    for row in &rows {
        println!("--- {} ---", row.recorded_at);
        print_reading_row(row);
    }

    Ok(())
}

/// Prompt for a metric and new bounds, then persist the override.
pub async fn set_thresholds(pool: &DbPool) -> anyhow::Result<()> {
    println!("\nSet a safety threshold (leave a bound blank to keep it unchanged).");
    println!(
        "Known metrics: {}",
        BASELINE_METRICS
            .iter()
            .map(Metric::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    );

    let name = menu::prompt("Metric: ")?;
    if name.is_empty() {
        println!("A metric name is required.");
        return Ok(());
    }
    let metric = Metric::parse(&name);

    let min = parse_optional_bound(&menu::prompt("Min (blank to skip): ")?)?;
    let max = parse_optional_bound(&menu::prompt("Max (blank to skip): ")?)?;
    let limit = Limit::validated(min, max)?;

    let row = ThresholdRepo::upsert(pool, &metric, &limit).await?;
    tracing::info!(metric = %metric, "threshold override saved");
    println!(
        "Saved threshold for {}: min = {}, max = {}",
        metric.label(),
        row.min_val.map_or("unset".to_string(), |v| v.to_string()),
        row.max_val.map_or("unset".to_string(), |v| v.to_string()),
    );

    Ok(())
}

/// Evaluate the latest reading and show the matching health tips.
pub async fn view_tips(pool: &DbPool) -> anyhow::Result<()> {
    let Some(row) = ReadingRepo::latest(pool).await? else {
        println!("\nNo data available. Fetch data first.");
        return Ok(());
    };

    let overrides = ThresholdRepo::overrides(pool).await?;
    let alerts = evaluate(&row.to_reading(), &threshold::resolve(&overrides));

    println!("\nHealth & Safety Tips (based on reading from {})", row.recorded_at);
    if !alerts.is_empty() {
        for alert in &alerts {
            println!("ALERT: {alert}");
        }
    }
    for tip in tips(&alerts) {
        println!("\n{tip}");
    }

    Ok(())
}

/// Format one stored reading, one line per metric, `N/A` for absent values.
fn print_reading_row(row: &ReadingRow) {
    println!("  Temperature: {}", format_value(&Metric::Temperature, row.temperature));
    println!("  Humidity:    {}", format_value(&Metric::Humidity, row.humidity));
    println!("  CO2:         {}", format_value(&Metric::Co2, row.co2));
    println!("  CO:          {}", format_value(&Metric::Co, row.co));
    println!("  PM2.5:       {}", format_value(&Metric::Pm25, row.pm25));
    println!("  PM10:        {}", format_value(&Metric::Pm10, row.pm10));
}

/// Render a metric value with its unit; CO gets three decimals because its
/// safe range is single-digit ppm.
fn format_value(metric: &Metric, value: Option<f64>) -> String {
    match value {
        None => "N/A".to_string(),
        Some(v) => {
            let decimals = if *metric == Metric::Co { 3 } else { 2 };
            format!("{v:.decimals$} {}", metric.unit())
        }
    }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Parse a user-supplied bound: blank means "not set", anything else must
/// be a number.
fn parse_optional_bound(input: &str) -> Result<Option<f64>, CoreError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|_| CoreError::Validation(format!("not a number: {trimmed:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn blank_bound_parses_to_none() {
        assert_eq!(parse_optional_bound("").unwrap(), None);
        assert_eq!(parse_optional_bound("   ").unwrap(), None);
    }

    #[test]
    fn numeric_bound_parses() {
        assert_eq!(parse_optional_bound("40").unwrap(), Some(40.0));
        assert_eq!(parse_optional_bound(" -3.5 ").unwrap(), Some(-3.5));
    }

    #[test]
    fn non_numeric_bound_is_a_validation_error() {
        assert_matches!(parse_optional_bound("warm"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn absent_values_render_as_na() {
        assert_eq!(format_value(&Metric::Humidity, None), "N/A");
    }

    #[test]
    fn co_renders_with_three_decimals() {
        assert_eq!(format_value(&Metric::Co, Some(0.4567)), "0.457 ppm");
        assert_eq!(format_value(&Metric::Temperature, Some(21.5)), "21.50 °C");
    }

    #[test]
    fn dates_parse_strictly() {
        assert!(parse_date("2026-08-30").is_some());
        assert!(parse_date("30/08/2026").is_none());
        assert!(parse_date("yesterday").is_none());
    }
}
