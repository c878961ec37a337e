use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::application::{AppError, CalorieReport, CashReport, LedgerSummary};
use crate::domain::{
    format_amount, format_date, parse_amount, parse_date, Amount, Clock, FixedClock, Record,
    SystemClock,
};
use crate::io::import_records_csv;

/// daylimit - daily spending and calorie limits
#[derive(Parser)]
#[command(name = "daylimit")]
#[command(about = "Track records against a daily limit and a trailing seven-day window")]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (debug logs on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Money left for today, in rubles or a converted currency
    Cash {
        #[command(flatten)]
        input: LedgerArgs,

        /// Currency for the message: rub, usd, eur, gbp
        #[arg(short, long, default_value = "rub")]
        currency: String,
    },

    /// Calories left for today
    Calories {
        #[command(flatten)]
        input: LedgerArgs,
    },

    /// Run the sample cash ledger and print its week total and record dates
    Demo {
        /// Pretend today is this date (DD.MM.YYYY)
        #[arg(long)]
        today: Option<String>,
    },
}

#[derive(Args)]
pub struct LedgerArgs {
    /// Daily limit (e.g., "1000" or "1850.5")
    #[arg(short, long)]
    pub limit: String,

    /// Record to add, repeatable. Date defaults to today.
    #[arg(short, long = "record", value_name = "AMOUNT;COMMENT[;DD.MM.YYYY]")]
    pub records: Vec<String>,

    /// CSV file with columns amount,comment,date
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Pretend today is this date (DD.MM.YYYY)
    #[arg(long)]
    pub today: Option<String>,

    /// Output format: table, json
    #[arg(long, default_value = "table")]
    pub format: String,
}

impl LedgerArgs {
    fn limit(&self) -> Result<Amount> {
        parse_amount(&self.limit).context("Invalid limit. Use '1000' or '1850.5'")
    }

    fn clock(&self) -> Result<FixedClock> {
        today_clock(self.today.as_deref())
    }

    /// Records from the CSV file first, then the ones given with --record.
    fn load_records(&self, clock: &impl Clock) -> Result<Vec<Record>> {
        let mut records = Vec::new();

        if let Some(path) = &self.file {
            let file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            let result = import_records_csv(file, clock)
                .with_context(|| format!("Failed to import {}", path.display()))?;
            records.extend(result.records);
        }

        for spec in &self.records {
            records.push(parse_record_spec(spec, clock)?);
        }

        Ok(records)
    }
}

/// Status line plus the numbers behind it, as printed with `--format json`.
#[derive(Debug, Serialize)]
pub struct StatusOutput {
    pub summary: LedgerSummary,
    pub message: String,
}

/// Install the stderr log subscriber. `--verbose` forces debug level,
/// otherwise `RUST_LOG` applies, falling back to warnings only.
pub fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();

        match self.command {
            Commands::Cash { input, currency } => run_cash(&input, &currency, &mut out)?,
            Commands::Calories { input } => run_calories(&input, &mut out)?,
            Commands::Demo { today } => {
                let clock = today_clock(today.as_deref())?;
                for line in run_demo(clock)? {
                    writeln!(out, "{}", line)?;
                }
            }
        }

        Ok(())
    }
}

/// `daylimit cash`: build the ledger from the arguments and write its status.
pub fn run_cash(input: &LedgerArgs, currency: &str, out: &mut impl Write) -> Result<()> {
    let clock = input.clock()?;
    let records = input.load_records(&clock)?;
    let mut report = CashReport::with_clock(input.limit()?, clock);
    for record in records {
        report.add_record(record);
    }

    let message = report
        .remaining_message(currency)
        .map_err(AppError::from)
        .context("Cannot render cash status")?;
    info!(currency, "cash status rendered");
    write_status(out, LedgerSummary::of(report.ledger()), message, &input.format)
}

/// `daylimit calories`: build the ledger from the arguments and write its status.
pub fn run_calories(input: &LedgerArgs, out: &mut impl Write) -> Result<()> {
    let clock = input.clock()?;
    let records = input.load_records(&clock)?;
    let mut report = CalorieReport::with_clock(input.limit()?, clock);
    for record in records {
        report.add_record(record);
    }

    let message = report.remaining_message();
    write_status(out, LedgerSummary::of(report.ledger()), message, &input.format)
}

/// Build the sample cash ledger and return the lines to print:
/// the week total followed by every stored record date.
pub fn run_demo<C: Clock>(clock: C) -> Result<Vec<String>> {
    let mut report = CashReport::with_clock(1000.0, clock);

    // No date given, so these two land on today
    let coffee = Record::parse(145.0, "кофе", None, report.ledger().clock())?;
    let lunch = Record::parse(1000.0, "Серёге за обед", None, report.ledger().clock())?;
    let party = Record::parse(3000.0, "бар в Танин др", Some("04.06.2021"), report.ledger().clock())?;
    let bar = Record::parse(3000.0, "бар", Some("30.05.2021"), report.ledger().clock())?;
    for record in [coffee, lunch, party, bar] {
        report.add_record(record);
    }

    let ledger = report.ledger();
    let mut lines = vec![ledger.week_total().to_string()];
    lines.extend(ledger.records().iter().map(|r| r.date.to_string()));
    Ok(lines)
}

/// Parse `AMOUNT;COMMENT[;DD.MM.YYYY]` into a record.
pub fn parse_record_spec(spec: &str, clock: &impl Clock) -> Result<Record, AppError> {
    let mut parts = spec.splitn(3, ';');
    let amount = parts
        .next()
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| AppError::InvalidRecordSpec(spec.to_string()))?;
    let comment = parts
        .next()
        .ok_or_else(|| AppError::InvalidRecordSpec(spec.to_string()))?;
    let date = parts.next().map(str::trim).filter(|s| !s.is_empty());

    let amount = parse_amount(amount)?;
    Ok(Record::parse(amount, comment.trim(), date, clock)?)
}

fn today_clock(today: Option<&str>) -> Result<FixedClock> {
    let today = match today {
        Some(date_str) => parse_date(date_str).context("--today must be in DD.MM.YYYY format")?,
        None => SystemClock.today(),
    };
    Ok(FixedClock::new(today))
}

fn write_status(
    out: &mut impl Write,
    summary: LedgerSummary,
    message: String,
    format: &str,
) -> Result<()> {
    match format {
        "json" => {
            let output = StatusOutput { summary, message };
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        }
        _ => {
            // The window's lower bound is exclusive; show the first day it covers
            let first_day = summary.week_start.succ_opt().unwrap_or(summary.week_start);

            writeln!(out, "{}", message)?;
            writeln!(out)?;
            writeln!(out, "  Today:          {}", format_date(summary.today))?;
            writeln!(out, "  Limit:          {}", format_amount(summary.limit))?;
            writeln!(out, "  Today total:    {}", format_amount(summary.today_total))?;
            writeln!(out, "  Remaining:      {}", format_amount(summary.remaining))?;
            writeln!(
                out,
                "  Week total:     {} ({} - {})",
                format_amount(summary.week_total),
                format_date(first_day),
                format_date(summary.week_end)
            )?;
            writeln!(out, "  Records:        {}", summary.record_count)?;
        }
    }
    Ok(())
}
