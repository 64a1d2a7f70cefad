//! # vahan-cli
//!
//! Command-line interface for the vahan-metrics registration analytics stack.

use clap::{Args, Parser, Subcommand};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::str::FromStr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vahan_facade::prelude::*;

type CliResult<T> = std::result::Result<T, String>;

#[derive(Parser)]
#[command(name = "vahan")]
#[command(about = "Vehicle registration growth analytics CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct FilterArgs {
    /// Inclusive start date (YYYY-MM-DD)
    #[arg(long)]
    start_date: Option<String>,

    /// Inclusive end date (YYYY-MM-DD)
    #[arg(long)]
    end_date: Option<String>,

    /// Vehicle categories to keep (repeatable)
    #[arg(long = "category")]
    categories: Vec<String>,

    /// Manufacturers to keep (repeatable)
    #[arg(long = "manufacturer")]
    manufacturers: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a summary digest of the input data
    Summary {
        /// Input CSV file with date,vehicle_category,manufacturer,registrations
        #[arg(short, long)]
        input: PathBuf,

        #[command(flatten)]
        filter: FilterArgs,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Compute period-over-period growth metrics
    Growth {
        /// Input CSV file
        #[arg(short, long)]
        input: PathBuf,

        /// Period granularity (month, quarter, year)
        #[arg(short, long, default_value = "year")]
        period: String,

        /// Grouping dimensions, comma separated (category,manufacturer)
        #[arg(short, long, default_value = "category,manufacturer")]
        by: String,

        #[command(flatten)]
        filter: FilterArgs,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Compute market share per category and period
    Share {
        /// Input CSV file
        #[arg(short, long)]
        input: PathBuf,

        /// Period granularity (month, quarter, year)
        #[arg(short, long, default_value = "year")]
        period: String,

        #[command(flatten)]
        filter: FilterArgs,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Classify the market-wide growth trend
    Trend {
        /// Input CSV file
        #[arg(short, long)]
        input: PathBuf,

        /// Period granularity (month, quarter, year)
        #[arg(short, long, default_value = "month")]
        period: String,

        /// Minimum clean periods for classification
        #[arg(long, default_value = "3")]
        min_periods: usize,

        /// Rolling window for volatility
        #[arg(short, long, default_value = "12")]
        window: usize,

        #[command(flatten)]
        filter: FilterArgs,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// CSV-backed registration source.
struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn load(&self) -> CliResult<Vec<RawRecord>> {
        let file = File::open(&self.path)
            .map_err(|e| format!("Failed to open {:?}: {}", self.path, e))?;
        let mut reader = csv::Reader::from_reader(BufReader::new(file));

        let headers = reader
            .headers()
            .map_err(|e| format!("Failed to read headers: {}", e))?
            .clone();

        let column = |names: &[&str]| -> CliResult<usize> {
            names
                .iter()
                .find_map(|n| headers.iter().position(|h| h == *n))
                .ok_or_else(|| format!("Column '{}' not found", names[0]))
        };

        let date_idx = column(&["date"])?;
        let category_idx = column(&["vehicle_category", "category"])?;
        let manufacturer_idx = column(&["manufacturer"])?;
        let registrations_idx = column(&["registrations"])?;

        let mut records = Vec::new();
        for (line, result) in reader.records().enumerate() {
            let row = result.map_err(|e| format!("Failed to read record: {}", e))?;
            let field = |idx: usize| row.get(idx).unwrap_or("").trim();

            let registrations: u64 = field(registrations_idx)
                .parse()
                .map_err(|e| format!("Row {}: bad registration count: {}", line + 2, e))?;

            let record = RawRecord::parse(
                field(date_idx),
                field(category_idx),
                field(manufacturer_idx),
                registrations,
            )
            .map_err(|e| format!("Row {}: {}", line + 2, e))?;
            records.push(record);
        }

        if records.is_empty() {
            return Err("No records found in input file".to_string());
        }
        Ok(records)
    }
}

impl RegistrationSource for CsvSource {
    fn name(&self) -> &str {
        "csv"
    }

    fn fetch(&self, filter: &RecordFilter) -> Result<Vec<RawRecord>> {
        let records = self.load().map_err(VahanError::Collaborator)?;
        Ok(filter_records(&records, filter))
    }
}

/// JSON-writing metrics sink (stdout or file).
struct JsonSink {
    output: Option<PathBuf>,
}

impl JsonSink {
    fn new(output: Option<PathBuf>) -> Self {
        Self { output }
    }

    fn write(&self, json: &serde_json::Value) -> Result<()> {
        let text = serde_json::to_string_pretty(json)
            .map_err(|e| VahanError::Collaborator(e.to_string()))?;
        match &self.output {
            Some(path) => {
                std::fs::write(path, text)
                    .map_err(|e| VahanError::Collaborator(format!("write {:?}: {}", path, e)))?;
                println!("Results written to {:?}", path);
            }
            None => println!("{}", text),
        }
        Ok(())
    }
}

impl MetricsSink for JsonSink {
    fn store_growth(&mut self, granularity: Granularity, records: &[GrowthRecord]) -> Result<()> {
        self.write(&serde_json::json!({
            "period_type": granularity.as_str(),
            "records": records,
        }))
    }

    fn store_share(
        &mut self,
        granularity: Granularity,
        records: &[MarketShareRecord],
    ) -> Result<()> {
        self.write(&serde_json::json!({
            "period_type": granularity.as_str(),
            "records": records,
        }))
    }
}

fn parse_filter(args: &FilterArgs) -> CliResult<RecordFilter> {
    let mut filter = RecordFilter::new();
    if let Some(start) = &args.start_date {
        filter.start_date =
            Some(vahan_facade::parse_date(start).map_err(|e| e.to_string())?);
    }
    if let Some(end) = &args.end_date {
        filter.end_date = Some(vahan_facade::parse_date(end).map_err(|e| e.to_string())?);
    }
    if !args.categories.is_empty() {
        filter.categories = Some(args.categories.clone());
    }
    if !args.manufacturers.is_empty() {
        filter.manufacturers = Some(args.manufacturers.clone());
    }
    Ok(filter)
}

fn parse_dimensions(by: &str) -> CliResult<Vec<Dimension>> {
    by.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| Dimension::from_str(s).map_err(|e| e.to_string()))
        .collect()
}

fn fetch(input: PathBuf, filter: &FilterArgs) -> CliResult<Vec<RawRecord>> {
    let source = CsvSource::new(input);
    let filter = parse_filter(filter)?;
    source.fetch(&filter).map_err(|e| e.to_string())
}

fn run_summary(input: PathBuf, filter: FilterArgs, output: Option<PathBuf>) -> CliResult<()> {
    let records = fetch(input, &filter)?;
    let derived = derive(&records);
    let stats = summarize(&derived);

    let json = serde_json::to_value(&stats).map_err(|e| e.to_string())?;
    JsonSink::new(output).write(&json).map_err(|e| e.to_string())
}

fn run_growth(
    input: PathBuf,
    period: String,
    by: String,
    filter: FilterArgs,
    output: Option<PathBuf>,
) -> CliResult<()> {
    let granularity = Granularity::from_str(&period).map_err(|e| e.to_string())?;
    let dimensions = parse_dimensions(&by)?;
    let records = fetch(input, &filter)?;

    let derived = derive(&records);
    let aggregated = aggregate(&derived, granularity, &dimensions);
    let result = growth(&aggregated);

    let mut sink = JsonSink::new(output);
    sink.store_growth(granularity, &result).map_err(|e| e.to_string())
}

fn run_share(
    input: PathBuf,
    period: String,
    filter: FilterArgs,
    output: Option<PathBuf>,
) -> CliResult<()> {
    let granularity = Granularity::from_str(&period).map_err(|e| e.to_string())?;
    let records = fetch(input, &filter)?;

    let derived = derive(&records);
    let result = market_share(&derived, granularity);

    let mut sink = JsonSink::new(output);
    sink.store_share(granularity, &result).map_err(|e| e.to_string())
}

fn run_trend(
    input: PathBuf,
    period: String,
    min_periods: usize,
    window: usize,
    filter: FilterArgs,
    output: Option<PathBuf>,
) -> CliResult<()> {
    let granularity = Granularity::from_str(&period).map_err(|e| e.to_string())?;
    let records = fetch(input, &filter)?;

    let derived = derive(&records);
    let aggregated = aggregate(&derived, granularity, &[]);
    let growth_records = growth(&aggregated);

    let totals: Vec<f64> = growth_records.iter().map(|r| r.registrations).collect();
    let pct_series: Vec<f64> = growth_records
        .iter()
        .map(|r| r.growth_pct.unwrap_or(f64::NAN))
        .collect();

    let direction = LeastSquaresTrend::new().classify(&totals, min_periods);
    let stats = consistency(&pct_series);
    let benchmarks = growth_benchmarks(&pct_series);
    let vol = volatility(&totals, window);

    let json = serde_json::json!({
        "period_type": granularity.as_str(),
        "periods_observed": totals.len(),
        "direction": direction,
        "volatility_pct": vol,
        "consistency": stats,
        "benchmarks": benchmarks,
    });
    JsonSink::new(output).write(&json).map_err(|e| e.to_string())
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vahan=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Summary { input, filter, output } => run_summary(input, filter, output),
        Commands::Growth { input, period, by, filter, output } => {
            run_growth(input, period, by, filter, output)
        }
        Commands::Share { input, period, filter, output } => {
            run_share(input, period, filter, output)
        }
        Commands::Trend { input, period, min_periods, window, filter, output } => {
            run_trend(input, period, min_periods, window, filter, output)
        }
    };

    if let Err(message) = result {
        eprintln!("Error: {}", message);
        std::process::exit(1);
    }
}
