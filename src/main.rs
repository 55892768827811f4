use anyhow::{Context, Result};
use chc::cli::output::OutputFormat;
use chc::{process, Config};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io::{self, IsTerminal, Write};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "chc")]
#[command(version, about = "Change words to the specified case style", long_about = None)]
struct Cli {
    /// Words to convert (ignored when input is piped)
    #[arg(value_name = "WORDS")]
    words: Vec<String>,

    /// Style to change to: s[nake], u[pper], c[amel], p[ascal], l[isp] [default: snake]
    #[arg(short, long, value_name = "CASE")]
    case: Option<String>,

    /// Output format (text, json)
    #[arg(short = 'o', long)]
    format: Option<OutputFormat>,

    /// Print the detected case style of each word instead of converting
    #[arg(long)]
    detect: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "chc", &mut io::stdout());
        return Ok(());
    }

    let config = Config::load(cli.case, cli.format)?;
    tracing::debug!(?config, "configuration loaded");

    let input = process::select_input(io::stdin().is_terminal(), &cli.words);
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if cli.detect {
        let colored = !cli.no_color && stdout.is_terminal();
        process::detect(input, &mut out, colored)?;
    } else {
        process::process(input, &mut out, config.target(), config.format)?;
    }

    out.flush().context("failed to flush output")?;
    Ok(())
}

/// Logs go to stderr so they never mix with converted words
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("CHC_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
