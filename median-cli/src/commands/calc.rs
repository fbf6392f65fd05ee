use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use median::Strategy;
use serde::Serialize;

use crate::{config::InputFile, utils::parse_list};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

/// Compute the median of two integer sequences
#[derive(Parser)]
pub struct CalcArgs {
    /// First sequence, comma-separated (e.g. `1,3`)
    #[arg(short = 'a', long = "a", allow_hyphen_values = true)]
    pub a: Option<String>,
    /// Second sequence, comma-separated (e.g. `2`)
    #[arg(short = 'b', long = "b", allow_hyphen_values = true)]
    pub b: Option<String>,
    /// Read the sequences from a TOML file with `a` and `b` arrays.
    /// Sequences given on the command line take precedence.
    #[arg(short = 'f', long)]
    pub input: Option<PathBuf>,
    /// Median strategy: selection, standard or partition
    #[arg(short = 's', long)]
    pub strategy: Option<Strategy>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct Report<'a> {
    a: &'a [i64],
    b: &'a [i64],
    strategy: String,
    median: f64,
}

impl CalcArgs {
    fn load_inputs(&self) -> anyhow::Result<(Vec<i64>, Vec<i64>, Strategy)> {
        let file = match &self.input {
            Some(path) => InputFile::load(path)?,
            None => InputFile::default(),
        };
        let a = match &self.a {
            Some(s) => parse_list(s)?,
            None => file.a,
        };
        let b = match &self.b {
            Some(s) => parse_list(s)?,
            None => file.b,
        };
        let strategy = match (self.strategy, &file.strategy) {
            (Some(strategy), _) => strategy,
            (None, Some(name)) => name.parse::<Strategy>()?,
            (None, None) => Strategy::default(),
        };
        Ok((a, b, strategy))
    }

    pub fn run(&self) -> anyhow::Result<String> {
        let (a, b, strategy) = self.load_inputs()?;
        log::info!(
            "Computing median of {} + {} values ({})",
            a.len(),
            b.len(),
            strategy
        );
        let median = median::median_with(strategy, &a, &b)?;
        let output = match self.format {
            OutputFormat::Plain => format!("{}", median),
            OutputFormat::Json => serde_json::to_string(&Report {
                a: &a,
                b: &b,
                strategy: strategy.to_string(),
                median,
            })?,
        };
        Ok(output)
    }
}
