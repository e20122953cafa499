//! One-shot command line front end: load the CSV files, run the pipeline,
//! print a text report or the snapshot as JSON.

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use crate::errors::PipelineError;
use crate::model::{Category, SortKey, TimePoint};
use crate::pipeline::{self, Snapshot};
use crate::report;
use crate::source::{FileSource, TextSource};

#[derive(Debug, Parser)]
#[command(
    name = "inflation_core_cli",
    about = "Ingests price-index CSV data and prints the normalized result"
)]
pub struct Cli {
    /// Path to the details CSV (category rows).
    #[arg(long)]
    pub details: PathBuf,

    /// Path to the annual history CSV.
    #[arg(long)]
    pub annual: Option<PathBuf>,

    /// Path to the monthly history CSV.
    #[arg(long)]
    pub monthly: Option<PathBuf>,

    /// Re-sort each category's sub-items by this field before printing.
    #[arg(long, value_parser = parse_sort_key)]
    pub sort: Option<SortKey>,

    /// Number of trailing entries shown per history series.
    #[arg(long, default_value_t = 36)]
    pub window: usize,

    /// Emit the full snapshot as JSON instead of a report.
    #[arg(long)]
    pub json: bool,
}

fn parse_sort_key(raw: &str) -> Result<SortKey, String> {
    match raw.to_lowercase().as_str() {
        "annual" => Ok(SortKey::Annual),
        "monthly" => Ok(SortKey::Monthly),
        other => Err(format!("unknown sort key `{other}` (expected annual or monthly)")),
    }
}

pub fn run(cli: Cli) -> Result<(), PipelineError> {
    let mut source = FileSource::new(cli.details);
    if let Some(path) = cli.annual {
        source = source.with_annual_history(path);
    }
    if let Some(path) = cli.monthly {
        source = source.with_monthly_history(path);
    }

    let inputs = source.gather()?;
    let mut snapshot = pipeline::run(&inputs)?;

    if let Some(key) = cli.sort {
        for category in &mut snapshot.categories {
            category.sort_by(key);
        }
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    print_report(&snapshot, cli.window);
    Ok(())
}

fn print_report(snapshot: &Snapshot, window: usize) {
    print_series("Annual inflation", &snapshot.annual_history, window);
    print_series("Monthly inflation", &snapshot.monthly_history, window);

    println!(
        "{} annual {:.2}  monthly {:.2}",
        "All items:".bold(),
        snapshot.all_items.annual,
        snapshot.all_items.monthly
    );
    println!();

    for category in &snapshot.categories {
        print_category(category);
    }

    if !snapshot.unassigned.is_empty() {
        println!(
            "{} {} sub-row(s) preceded the first main category",
            "note:".yellow().bold(),
            snapshot.unassigned.len()
        );
    }
}

fn print_series(title: &str, series: &[TimePoint], window: usize) {
    let latest = report::latest(series);
    let previous = report::previous(series);
    let shown = report::trailing(series, window);

    println!(
        "{} latest {} ({})  previous {}",
        format!("{title}:").bold(),
        report::fmt_point(latest),
        latest.map_or("—", |p| p.date.as_str()),
        report::fmt_point(previous)
    );
    if !shown.is_empty() {
        let line: Vec<String> = shown
            .iter()
            .map(|p| format!("{} {}", p.date, report::fmt_percent(p.rate)))
            .collect();
        println!("  {}", line.join(" | "));
    }
    println!();
}

fn print_category(category: &Category) {
    println!(
        "{}  weight {:.1}%  annual {:.2}  monthly {:.2}",
        category.item.bold(),
        category.weight,
        category.annual,
        category.monthly
    );
    for sub in &category.sub_items {
        if sub.is_group_marker() {
            println!(
                "  {}  {:>7.1} {:>7.1}",
                sub.item.blue().bold(),
                sub.annual,
                sub.monthly
            );
        } else {
            println!("    {:<28} {:>7.1} {:>7.1}", sub.item, sub.annual, sub.monthly);
        }
    }
    println!();
}
