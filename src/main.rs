use anyhow::Result;
use clap::Parser;
use log::info;

use std::path::PathBuf;

use payout::{combine, read_csv, PayoutReport, ReportKind};

/// Prints a payroll report from one or more timesheet CSV files.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Timesheet CSV files, read in the order given
    #[arg(required = true)]
    files: Vec<PathBuf>,
    /// Kind of report to print
    #[arg(long, default_value = "payout")]
    report: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let kind = match args.report.parse::<ReportKind>() {
        Ok(kind) => kind,
        Err(err) => {
            println!("Error: {err}");
            return Ok(());
        }
    };
    info!("building {kind} report from {} files", args.files.len());
    let datasets = args
        .files
        .iter()
        .map(read_csv)
        .collect::<payout::Result<Vec<_>>>()?;
    let departments = combine(&datasets)?;
    match kind {
        ReportKind::Payout => println!("{}", PayoutReport::new(&departments)),
    }
    Ok(())
}
