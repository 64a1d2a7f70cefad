//! Basic example demonstrating the registration analytics pipeline
//!
//! Run with: cargo run --example basic -p vahan-facade

use vahan_facade::prelude::*;

fn main() -> Result<()> {
    println!("=== vahan-metrics Basic Examples ===\n");

    // Two years of quarterly observations for two manufacturers
    let records = vec![
        RawRecord::parse("2021-02-10", "2W", "Hero MotoCorp", 300)?,
        RawRecord::parse("2021-05-10", "2W", "Hero MotoCorp", 320)?,
        RawRecord::parse("2021-08-10", "2W", "Hero MotoCorp", 310)?,
        RawRecord::parse("2021-11-10", "2W", "Hero MotoCorp", 350)?,
        RawRecord::parse("2022-02-10", "2W", "Hero MotoCorp", 380)?,
        RawRecord::parse("2021-02-15", "2W", "TVS Motor", 120)?,
        RawRecord::parse("2021-05-15", "2W", "TVS Motor", 150)?,
        RawRecord::parse("2021-08-15", "2W", "TVS Motor", 140)?,
        RawRecord::parse("2021-11-15", "2W", "TVS Motor", 170)?,
        RawRecord::parse("2022-02-15", "2W", "TVS Motor", 200)?,
    ];

    // 1. Summary digest
    println!("1. Summary");
    let derived = derive(&records);
    let stats = summarize(&derived);
    println!(
        "   {} records, {} registrations, {} manufacturers\n",
        stats.total_records,
        stats.total_registrations,
        stats.manufacturers.len()
    );

    // 2. Quarter-over-quarter growth
    println!("2. QoQ Growth (Hero MotoCorp)");
    let quarterly = qoq_growth(&records, &[Dimension::Manufacturer]);
    for record in quarterly
        .iter()
        .filter(|r| r.group == vec!["Hero MotoCorp".to_string()])
    {
        match record.growth_pct {
            Some(pct) => println!("   {}: {:>6.0} ({:+.1}%)", record.period, record.registrations, pct),
            None => println!("   {}: {:>6.0} (no prior period)", record.period, record.registrations),
        }
    }
    println!();

    // 3. Market share
    println!("3. Market Share (2021)");
    let shares = market_share(&derived, Granularity::Year);
    for share in shares.iter().filter(|s| s.period == PeriodKey::Year(2021)) {
        println!("   {:<14} {:>5.1}%", share.manufacturer, share.share_pct);
    }
    println!();

    // 4. Trend classification on the market-wide quarterly series
    println!("4. Trend");
    let market = qoq_growth(&records, &[]);
    let totals: Vec<f64> = market.iter().map(|r| r.registrations).collect();
    let direction = LeastSquaresTrend::new().classify(&totals, 3);
    println!("   Quarterly totals trend: {}", direction);

    let smoothed = moving_average(&totals, 3)?;
    println!(
        "   Smoothed: {:?}",
        smoothed
            .iter()
            .map(|v| if v.is_nan() { "-".to_string() } else { format!("{:.0}", v) })
            .collect::<Vec<_>>()
    );

    println!("\n=== Examples Complete ===");
    Ok(())
}
