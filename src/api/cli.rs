use std::fs;
use std::io;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde_json::Value;

use super::run_http_server;
use crate::core::{Calculator, calendar};
use crate::error::Result;

#[derive(Debug, Parser)]
#[command(
    name = "fincalc",
    about = "Personal-finance calculators: interest, debt payoff, savings goals and loan analysis"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the calculators over HTTP.
    Serve {
        #[arg(long, env = "FINCALC_HOST", default_value = "0.0.0.0")]
        host: String,
        #[arg(long, env = "FINCALC_PORT", default_value_t = 8080)]
        port: u16,
    },
    /// Run one calculator over a JSON record and print the result.
    Compute {
        /// Calculator id, e.g. `debt-payoff`.
        calculator: String,
        #[arg(long, conflicts_with = "file", help = "Inline JSON input record")]
        input: Option<String>,
        #[arg(long, help = "Read the JSON input record from a file")]
        file: Option<PathBuf>,
        #[arg(long, help = "Date projections start from (YYYY-MM-DD); defaults to today")]
        as_of: Option<NaiveDate>,
    },
    /// List calculator ids.
    List,
}

pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Serve { host, port } => run_http_server(&host, port).await,
        Command::Compute {
            calculator,
            input,
            file,
            as_of,
        } => {
            let calculator = calculator.parse::<Calculator>()?;
            let raw = match (input, file) {
                (Some(inline), _) => inline,
                (None, Some(path)) => fs::read_to_string(path)?,
                (None, None) => io::read_to_string(io::stdin())?,
            };
            let record = parse_record(&raw)?;
            let result = calculator.compute(&record, as_of.unwrap_or_else(calendar::today))?;
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(())
        }
        Command::List => {
            for calc in Calculator::ALL {
                println!("{calc}");
            }
            Ok(())
        }
    }
}

fn parse_record(raw: &str) -> Result<Value> {
    if raw.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(raw)?)
}
