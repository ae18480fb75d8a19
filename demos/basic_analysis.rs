use chrono::{Duration, NaiveDate};
use forecast_advisor::recommendation::NO_FLAGS_NOTE;
use forecast_advisor::{analyze_dataset, ColumnSelection, Dataset, Horizon};
use polars::prelude::*;
use std::f64::consts::PI;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Forecast Advisor: Basic Analysis Example");
    println!("========================================\n");

    // Create sample retail data: 180 days of seasonal sales across stores
    println!("Creating sample data...");
    let data = create_sample_data(180)?;
    println!(
        "Sample data created: {} rows, {} columns\n",
        data.rows(),
        data.columns()
    );

    // Analyze for a 60-day forecast
    let selection = ColumnSelection::new(&data, "date", "sales")?;
    let horizon = Horizon::new(60)?;
    let report = analyze_dataset(&data, &selection, horizon);

    let recommendation = report.recommendation();
    println!("{}", recommendation.headline());
    println!("{}\n", recommendation.explanation(report.score));

    println!("Technical analysis:");
    if report.reasons.is_empty() {
        println!("  {}", NO_FLAGS_NOTE);
    } else {
        for reason in &report.reasons {
            println!("  {}", reason);
        }
    }

    Ok(())
}

fn create_sample_data(n: usize) -> Result<Dataset, Box<dyn std::error::Error>> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).ok_or("invalid start date")?;

    let dates: Vec<String> = (0..n)
        .map(|i| (start + Duration::days(i as i64)).format("%Y-%m-%d").to_string())
        .collect();

    // Weekly cycle on top of a slow trend
    let sales: Vec<f64> = (0..n)
        .map(|i| 100.0 + 0.1 * i as f64 + 25.0 * (2.0 * PI * i as f64 / 7.0).sin())
        .collect();

    let stores: Vec<String> = (0..n).map(|i| format!("store_{:02}", i % 12)).collect();
    let prices: Vec<f64> = (0..n).map(|i| 9.99 + 0.5 * ((i % 4) as f64)).collect();
    let promos: Vec<f64> = (0..n).map(|i| if i % 14 == 0 { 1.0 } else { 0.0 }).collect();
    let holidays: Vec<f64> = (0..n).map(|i| if i % 30 == 0 { 1.0 } else { 0.0 }).collect();

    let df = DataFrame::new(vec![
        Series::new("date", dates),
        Series::new("sales", sales),
        Series::new("store", stores),
        Series::new("price", prices),
        Series::new("promo", promos),
        Series::new("holiday", holidays),
    ])?;

    Ok(Dataset::from_dataframe(df))
}
