//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use itemcheck_core::Group;

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
#[derive(Clone, Debug)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// Output format for CLI commands.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, optionally colored output (default).
    Human,
    /// NDJSON output.
    Json,
}

/// All top-level subcommands exposed by the `itemcheck` binary.
#[derive(Subcommand)]
pub enum Command {
    /// Validate item records against the rules of a scenario group.
    Validate {
        /// Path to a JSON file holding one item or an array of items, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// Scenario group whose rules apply: save or update.
        #[arg(long, short = 'g', value_name = "GROUP")]
        group: Group,
    },

    /// List the constraint rules, optionally only those active for a group.
    Rules {
        /// Only list rules active under this group (save or update).
        #[arg(long, short = 'g', value_name = "GROUP")]
        group: Option<Group>,
    },
}

/// Root CLI struct for the `itemcheck` binary.
///
/// Global flags are marked `global = true` so clap propagates them to every
/// subcommand.
#[derive(Parser)]
#[command(
    name = "itemcheck",
    version,
    about = "Validate catalogue items against save/update rule groups"
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Suppress the summary line (incompatible with `--verbose`).
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Emit timing and debug logs to stderr (incompatible with `--quiet`).
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Maximum input size in bytes.
    ///
    /// Can also be set via the `ITEMCHECK_MAX_FILE_SIZE` environment variable.
    /// Default: 16777216 (16 MiB).
    #[arg(
        long,
        global = true,
        env = "ITEMCHECK_MAX_FILE_SIZE",
        default_value = "16777216"
    )]
    pub max_file_size: u64,

    /// Disable ANSI color codes in human output.
    ///
    /// Colors are also off whenever `NO_COLOR` is present in the environment,
    /// whatever its value.
    #[arg(long, global = true)]
    pub no_color: bool,
}
