use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use chrono::Local;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use footprint_tracker::config::AppConfig;
use footprint_tracker::models::*;
use footprint_tracker::store::{self, LogStore};
use footprint_tracker::tracker::{Calculation, Tracker};
use footprint_tracker::{history, render};

#[derive(Parser)]
#[command(name = "fptrack")]
#[command(about = "Monthly carbon footprint tracker for students and classes")]
struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// History log file, overriding the config
    #[arg(long, global = true)]
    log: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate a monthly footprint and record it in the log
    Calculate {
        #[command(flatten)]
        usage: UsageArgs,

        /// Don't append the result to the log
        #[arg(long)]
        no_log: bool,

        /// Write the breakdown as CSV into this directory (config default if omitted)
        #[arg(long, value_name = "DIR", num_args = 0..=1)]
        export: Option<Option<PathBuf>>,
    },
    /// Show one student's or class's footprint over time
    History {
        /// Student or class name
        #[arg(short, long)]
        name: String,

        /// Goal line to compare against (kg CO2)
        #[arg(short, long, default_value = "900")]
        goal: f64,
    },
    /// Show the latest record of every student/class and the class average
    Class {
        /// Write the table as CSV into this directory (config default if omitted)
        #[arg(long, value_name = "DIR", num_args = 0..=1)]
        export: Option<Option<PathBuf>>,
    },
    /// Print the emission factor table in use
    Factors,
}

#[derive(Args)]
struct UsageArgs {
    /// Student or class name, e.g. "Class 7B" or "Maya"
    #[arg(short, long)]
    name: String,

    /// Monthly CO2 goal in kg (100-2000)
    #[arg(short, long, default_value = "900")]
    goal: f64,

    /// Electricity (kWh/month)
    #[arg(long, default_value = "400")]
    electricity: f64,

    /// Natural gas (therms/month)
    #[arg(long, default_value = "20")]
    natural_gas: f64,

    /// Car travel (miles/month)
    #[arg(long, default_value = "600")]
    car_miles: f64,

    /// Car type: gas, diesel, hybrid or electric
    #[arg(long, default_value = "gas")]
    car_type: String,

    /// Short flights per year (<300 miles)
    #[arg(long, default_value = "2")]
    flights_short: u32,

    /// Medium flights per year (300-1500 miles)
    #[arg(long, default_value = "2")]
    flights_medium: u32,

    /// Long flights per year (>1500 miles)
    #[arg(long, default_value = "1")]
    flights_long: u32,

    /// Video streaming (hours/month)
    #[arg(long, default_value = "20")]
    streaming: f64,

    /// Video calls (hours/month)
    #[arg(long, default_value = "10")]
    video_calls: f64,

    /// Emails sent per month
    #[arg(long, default_value = "500")]
    emails: u32,

    /// Cloud storage used (GB)
    #[arg(long, default_value = "50")]
    cloud_gb: f64,

    /// Laptop use (hours/month)
    #[arg(long, default_value = "90")]
    laptop: f64,

    /// Phone use (hours/month)
    #[arg(long, default_value = "120")]
    phone: f64,
}

impl UsageArgs {
    fn into_record(self) -> anyhow::Result<InputRecord> {
        Ok(InputRecord {
            name: self.name,
            goal: self.goal,
            home: HomeEnergy {
                electricity_kwh: self.electricity,
                natural_gas_therms: self.natural_gas,
            },
            transport: Transport {
                car_miles: self.car_miles,
                car_type: CarType::from_str(&self.car_type)?,
            },
            flights: Flights {
                short: self.flights_short,
                medium: self.flights_medium,
                long: self.flights_long,
            },
            digital: DigitalUsage {
                streaming_hours: self.streaming,
                video_call_hours: self.video_calls,
                emails: self.emails,
                cloud_gb: self.cloud_gb,
                laptop_hours: self.laptop,
                phone_hours: self.phone,
            },
        })
    }
}

/// Initialize tracing on stderr so stdout carries only the report
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "footprint_tracker=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = AppConfig::load(cli.config.as_deref());
    let log_path = cli.log.unwrap_or_else(|| config.log_path.clone());
    let tracker = Tracker::new(config.emission_factors(), LogStore::open(log_path));

    match cli.command {
        Some(Commands::Calculate {
            usage,
            no_log,
            export,
        }) => {
            let input = usage.into_record()?;
            let today = Local::now().date_naive();

            let report = if no_log {
                tracker.report(&input)?
            } else {
                match tracker.evaluate_on(Some(input.clone()), today)? {
                    Calculation::Ready(report) => *report,
                    Calculation::Pending => return Ok(()),
                }
            };
            print!("{}", render::render_report(&report));

            if let Some(requested) = export {
                let dir = config.export_dir_or(requested);
                let path = store::export_breakdown(
                    &dir,
                    &report.breakdown,
                    &input.name,
                    input.goal,
                    today,
                )
                .context("Failed to export breakdown")?;
                println!("\nSaved your data to {}", path.display());
            }
        }
        Some(Commands::History { name, goal }) => {
            if !tracker.store().path().exists() {
                println!("No history data available yet.");
                return Ok(());
            }
            let entries = tracker.store().load().context("Failed to read history log")?;
            print!("{}", render::render_progress(&name, &history::progress(&entries, &name, goal)));
        }
        Some(Commands::Class { export }) => {
            if !tracker.store().path().exists() {
                println!("No class data available yet.");
                return Ok(());
            }
            let entries = tracker.store().load().context("Failed to read history log")?;
            let summary = history::class_summary(&entries);
            print!("{}", render::render_class(&summary));

            if let Some(requested) = export {
                let dir = config.export_dir_or(requested);
                let path = store::export_class(&dir, &summary, Local::now().date_naive())
                    .context("Failed to export class log")?;
                println!("\nSaved class log to {}", path.display());
            }
        }
        Some(Commands::Factors) => {
            println!("{}", serde_json::to_string_pretty(tracker.factors())?);
        }
        None => {
            if let Calculation::Pending = tracker.evaluate(None)? {
                println!(
                    "Enter your data with `fptrack calculate --name <NAME> ...` to see results."
                );
            }
        }
    }

    Ok(())
}
