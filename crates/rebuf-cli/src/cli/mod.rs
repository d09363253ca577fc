use std::path::PathBuf;

use clap::Parser;
use rebuf_config::RebufConfig;
use rebuf_rename::RenameOptions;

/// Top-level CLI parser for the `rebuf` binary.
#[derive(Debug, Parser)]
#[command(
    name = "rebuf",
    version,
    about = "Rename C pointer and array locals to buffer1, buffer2, ..."
)]
pub struct Cli {
    /// C source files to rewrite
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Overwrite each file instead of printing to stdout
    #[arg(short = 'i', long)]
    pub in_place: bool,

    /// Prefix for synthesized names (overrides naming.prefix)
    #[arg(long)]
    pub prefix: Option<String>,

    /// Quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,
}

/// Settings after command-line flags are laid over configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub options: RenameOptions,
    pub in_place: bool,
}

impl Cli {
    /// Flags win over configuration; `-i` can only turn in-place on.
    #[must_use]
    pub fn settings(&self, config: &RebufConfig) -> Settings {
        Settings {
            options: RenameOptions {
                prefix: self
                    .prefix
                    .clone()
                    .unwrap_or_else(|| config.naming.prefix.clone()),
            },
            in_place: self.in_place || config.output.in_place,
        }
    }
}
