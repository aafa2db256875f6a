use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use nullable::{Absent, Optional, Present, with_default};
use serde_json::json;

mod divide;
mod sum;

use divide::{DivisionReport, StepOutcome};
use sum::SumReport;

/// Runs optional-value pipelines from the command line
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text", global = true)]
    format: String,

    /// Only print the final result
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Divide a starting value by each divisor in turn; a zero divisor ends the chain
    Divide {
        #[arg(short, long, allow_negative_numbers = true)]
        start: f64,

        /// Divisor, repeatable
        #[arg(short, long = "by", allow_negative_numbers = true)]
        by: Vec<f64>,

        /// Value to report when the chain ends up absent
        #[arg(short, long, allow_negative_numbers = true)]
        default: Option<f64>,
    },
    /// Add three optional numbers; any missing operand makes the sum absent
    Sum {
        #[arg(short, long, allow_negative_numbers = true)]
        a: Option<i64>,

        #[arg(short, long, allow_negative_numbers = true)]
        b: Option<i64>,

        #[arg(short, long, allow_negative_numbers = true)]
        c: Option<i64>,

        /// Value to report when the sum is absent
        #[arg(short, long, allow_negative_numbers = true)]
        default: Option<i64>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Format {
    Text,
    Json,
}

fn parse_format(format: &str) -> Result<Format> {
    match format {
        "text" => Ok(Format::Text),
        "json" => Ok(Format::Json),
        other => anyhow::bail!("Unknown output format: {} (expected text or json)", other),
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    let format = parse_format(&args.format)?;

    match args.command {
        Command::Divide { start, by, default } => {
            let report = divide::run_chain(start, &by);
            let resolved = Optional::from(default).map(|d| with_default(d)(report.result));
            match format {
                Format::Text => print_division(&report, resolved, args.quiet),
                Format::Json => {
                    let output = json!({ "report": report, "resolved": resolved });
                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
            }
        }
        Command::Sum { a, b, c, default } => {
            let report = sum::lifted_sum(a.into(), b.into(), c.into());
            let resolved = Optional::from(default).map(|d| report.result.with_default(d));
            match format {
                Format::Text => print_sum(&report, resolved, args.quiet),
                Format::Json => {
                    let output = json!({ "report": report, "resolved": resolved });
                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
            }
        }
    }

    Ok(())
}

fn show<T: std::fmt::Display>(value: &Optional<T>) -> ColoredString {
    match value {
        Present(v) => v.to_string().green(),
        Absent => "absent".red(),
    }
}

fn print_division(report: &DivisionReport, resolved: Optional<f64>, quiet: bool) {
    if !quiet {
        println!("{} {}", "Start:".bold(), report.start);
        for (i, step) in report.steps.iter().enumerate() {
            let outcome = match step.outcome {
                StepOutcome::Value(v) => v.to_string().green(),
                StepOutcome::Absent => "absent".red(),
                StepOutcome::Skipped => "skipped".yellow(),
            };
            println!("  {}. / {} -> {}", i + 1, step.divisor, outcome);
        }
    }
    println!("{} {}", "Result:".bold(), show(&report.result));
    if let Present(value) = resolved {
        println!("{} {}", "Resolved:".bold(), value);
    }
}

fn print_sum(report: &SumReport, resolved: Optional<i64>, quiet: bool) {
    if !quiet {
        println!("  a = {}", show(&report.a));
        println!("  b = {}", show(&report.b));
        println!("  c = {}", show(&report.c));
    }
    println!("{} {}", "Result:".bold(), show(&report.result));
    if let Present(value) = resolved {
        println!("{} {}", "Resolved:".bold(), value);
    }
}
