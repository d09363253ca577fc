use std::io::Write;

use anyhow::Context;
use clap::Parser;
use rebuf_config::{NamingConfig, RebufConfig};

mod cli;
mod rewrite;

fn main() {
    if let Err(error) = run() {
        eprintln!("rebuf error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = RebufConfig::load().context("failed to load rebuf configuration")?;
    let settings = cli.settings(&config);
    NamingConfig {
        prefix: settings.options.prefix.clone(),
    }
    .validate()
    .context("invalid --prefix")?;

    let results = rewrite::rewrite_all(&cli.files, &settings.options);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut failed = 0usize;
    for result in results {
        match result.and_then(|file| rewrite::emit(&file, settings.in_place, &mut out)) {
            Ok(()) => {}
            Err(error) => {
                failed += 1;
                eprintln!("rebuf error: {error:#}");
            }
        }
    }
    out.flush().context("failed to flush stdout")?;

    if failed > 0 {
        anyhow::bail!("{failed} of {} files failed", cli.files.len());
    }
    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("REBUF_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
