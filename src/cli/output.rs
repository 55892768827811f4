use crate::case::Convention;
use crate::error::ProcessError;
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonConversion<'a> {
    input: &'a str,
    output: &'a str,
}

/// Write one converted word as a single line
pub fn write_conversion<W: Write + ?Sized>(
    out: &mut W,
    input: &str,
    output: &str,
    format: OutputFormat,
) -> Result<(), ProcessError> {
    let written = match format {
        OutputFormat::Text => writeln!(out, "{}", output),
        OutputFormat::Json => {
            let line = serde_json::to_string(&JsonConversion { input, output })?;
            writeln!(out, "{}", line)
        }
    };
    written.map_err(ProcessError::from_write)
}

/// Write a word with its detected convention, tab separated
pub fn write_detection<W: Write + ?Sized>(
    out: &mut W,
    word: &str,
    convention: Convention,
    colored_output: bool,
) -> Result<(), ProcessError> {
    let name = convention.to_string();

    let written = if colored_output {
        writeln!(out, "{}\t{}", word.bold(), paint(&name, convention))
    } else {
        writeln!(out, "{}\t{}", word, name)
    };
    written.map_err(ProcessError::from_write)
}

fn paint(name: &str, convention: Convention) -> ColoredString {
    match convention {
        Convention::Snake => name.green(),
        Convention::Upper => name.red(),
        Convention::Camel => name.cyan(),
        Convention::Pascal => name.blue(),
        Convention::Lisp => name.yellow(),
    }
}
