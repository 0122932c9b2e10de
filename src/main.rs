// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use the_fizzbuzz::config::consts::STREAM_CHUNK_LEN;
use the_fizzbuzz::config::{
    render, validate_buffered_len, validate_config, write_lines, Config, OutputFormat, Strategy,
};
use the_fizzbuzz::engine::sequence;
use the_fizzbuzz::observability::messages::{cli::*, sequence::*, StructuredLog};
use the_fizzbuzz::variants::EvaluatorFactory;

/// Generalized FizzBuzz over a range or as a lazy sequence
#[derive(Parser, Debug)]
#[command(name = "the-fizzbuzz")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Inclusive range to evaluate, as START..END
    #[arg(short, long, value_name = "START..END", allow_hyphen_values = true)]
    range: Option<String>,

    /// Trigger as LABEL=RULE; repeat to add more, in order (replaces the Fizz/Buzz defaults)
    #[arg(short, long = "trigger", value_name = "LABEL=RULE")]
    triggers: Vec<String>,

    /// Run with an empty trigger set
    #[arg(long, conflicts_with = "triggers")]
    no_triggers: bool,

    /// Paradigm variant used for bounded evaluation
    #[arg(short, long, value_enum, default_value_t = Strategy::Polished)]
    strategy: Strategy,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Lines)]
    format: OutputFormat,

    /// Pull from a lazy sequence starting here instead of evaluating a range
    #[arg(
        long,
        value_name = "START",
        requires = "take",
        conflicts_with_all = ["range", "strategy"],
        allow_hyphen_values = true
    )]
    lazy_from: Option<i64>,

    /// Number of values to pull from the lazy sequence
    #[arg(long, value_name = "N", requires = "lazy_from")]
    take: Option<usize>,

    /// Print the effective configuration as YAML and exit
    #[arg(long)]
    show_config: bool,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // RUST_LOG wins over -v when set.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr) // stdout carries results only
        .with_target(verbose >= 2)
        .with_line_number(verbose >= 3)
        .init();

    let args: Vec<String> = std::env::args().collect();
    CliStarted {
        verbosity: verbose,
        args: &args,
    }
    .log();
}

/// Fold command-line arguments over the default configuration
fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = Config {
        strategy: cli.strategy,
        format: cli.format,
        ..Config::default()
    };

    if let Some(text) = &cli.range {
        config.range = text.parse()?;
    }

    if cli.no_triggers {
        config.triggers.clear();
    } else if !cli.triggers.is_empty() {
        config.triggers = cli
            .triggers
            .iter()
            .map(|text| text.parse())
            .collect::<Result<Vec<_>, _>>()?;
    }

    if let Err(errors) = validate_config(&config) {
        let details: Vec<String> = errors.iter().map(ToString::to_string).collect();
        bail!("invalid configuration:\n  {}", details.join("\n  "));
    }

    Ok(config)
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = build_config(&cli)?;

    let mut stdout = io::stdout().lock();

    if cli.show_config {
        stdout.write_all(config.to_yaml()?.as_bytes())?;
        return Ok(());
    }

    let written = match (cli.lazy_from, cli.take) {
        (Some(start), Some(count)) => {
            validate_buffered_len(config.format, count as u64)?;

            let started = SequenceStarted {
                start,
                trigger_count: config.triggers.len(),
            };
            let span = started.span("cli_sequence");
            let _guard = span.enter();
            started.log();

            let mut values = sequence(start, config.trigger_set());
            let written = match config.format {
                OutputFormat::Lines => write_lines(&mut stdout, values.by_ref().take(count))
                    .context("failed to write results")?,
                format => {
                    let results: Vec<String> = values.by_ref().take(count).collect();
                    write_rendered(&mut stdout, &results, format)?
                }
            };

            SequenceStopped {
                produced: usize::try_from(written).unwrap_or(usize::MAX),
                next_cursor: values.peek_cursor(),
            }
            .log();
            written
        }
        _ => {
            let evaluator = EvaluatorFactory::from_config(&config)?;
            match config.format {
                // Evaluate a slice at a time so memory stays flat however long the range is.
                OutputFormat::Lines => {
                    let mut written = 0;
                    for chunk in config.range.chunks(STREAM_CHUNK_LEN) {
                        written += write_lines(&mut stdout, evaluator.evaluate(&chunk))
                            .context("failed to write results")?;
                    }
                    written
                }
                format => {
                    let results = evaluator.evaluate(&config.range);
                    write_rendered(&mut stdout, &results, format)?
                }
            }
        }
    };

    stdout.flush()?;

    OutputWritten {
        format: config.format.as_str(),
        result_count: written,
    }
    .log();

    Ok(())
}

/// Buffered formats: render everything, then write once
fn write_rendered(out: &mut impl Write, results: &[String], format: OutputFormat) -> anyhow::Result<u64> {
    let rendered = render(results, format)?;
    out.write_all(rendered.as_bytes())
        .context("failed to write results")?;
    Ok(results.len() as u64)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
