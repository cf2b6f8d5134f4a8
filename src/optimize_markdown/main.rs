use clap::Parser;
use colored::*;
use optimize_markdown::config::{OptimizeConfig, CONFIG_FILENAME};
use optimize_markdown::error::Result;
use optimize_markdown::filter::LineFilter;
use optimize_markdown::report::{CmdMessage, MessageLevel, Reporter};
use optimize_markdown::rewriter;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod args;
use args::Cli;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr so stdout carries only the progress lines.
/// `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Prints each message the moment the rewriter emits it.
struct StdoutReporter;

impl Reporter for StdoutReporter {
    fn report(&mut self, message: CmdMessage) {
        match message.level {
            MessageLevel::Info => println!("{}", message.content),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    rewriter::run(&config, &mut StdoutReporter)?;
    Ok(())
}

fn load_config(cli: &Cli) -> Result<OptimizeConfig> {
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));
    let mut config = OptimizeConfig::load(config_path)?;

    if let Some(dir) = &cli.dir {
        config = config.with_posts_dir(dir);
    }
    if let Some(pattern) = &cli.pattern {
        config = config.with_pattern(pattern);
    }
    match &cli.truncate_at_marker {
        Some(Some(marker)) => config = config.with_filter(LineFilter::truncate_at(marker)),
        Some(None) => config = config.with_filter(LineFilter::truncate_at_default_marker()),
        None => {}
    }

    Ok(config)
}
