//! # CLI Argument Definitions
//!
//! One subcommand per text operation. Global flags select the configuration file, override
//! the encoding and raise log verbosity.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tkit_textops::{DEFAULT_END, DEFAULT_LIMIT, DEFAULT_SEPARATOR, DEFAULT_WORDS, Encoding};

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "tkit")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Multi-byte aware string toolkit")]
pub struct Cli {
    /// Configuration file (TOML, YAML or JSON); `TKIT__*` variables override it
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Text encoding, overriding the configuration (`utf-8`, `ascii`, ...)
    #[arg(long, global = true)]
    pub encoding: Option<Encoding>,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Enumeration of available text operations.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Count characters (bytes in single-byte mode)
    Length {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Convert to lower case
    Lower {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Convert to upper case
    Upper {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Capitalize every word
    Title {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Truncate to a number of characters, then append a suffix
    Limit {
        #[arg(allow_hyphen_values = true)]
        value: String,
        #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,
        /// Suffix appended when the value is cut
        #[arg(long, default_value = DEFAULT_END)]
        end: String,
    },
    /// Truncate so that text and suffix together fit the limit
    LimitExact {
        #[arg(allow_hyphen_values = true)]
        value: String,
        #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,
        /// Suffix appended when the value is cut
        #[arg(long, default_value = DEFAULT_END)]
        end: String,
    },
    /// Keep a number of leading words
    Words {
        #[arg(allow_hyphen_values = true)]
        value: String,
        #[arg(short, long, default_value_t = DEFAULT_WORDS)]
        words: usize,
        /// Suffix appended when words were dropped
        #[arg(long, default_value = DEFAULT_END)]
        end: String,
    },
    /// Derive an Underscored_Class_Name
    Classify {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Print the non-empty `/`-separated segments, one per line
    Segments {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Generate a random alpha or alphanumeric string (not for secrets)
    Random {
        #[arg(default_value_t = 16)]
        length: usize,
        /// Character pool: `alpha` or `alnum`
        #[arg(short = 't', long = "type", default_value = "alnum")]
        kind: String,
    },
    /// Check a value against a `*` wildcard pattern; exits with 1 on mismatch
    Is {
        #[arg(allow_hyphen_values = true)]
        pattern: String,
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Build a URL-friendly slug
    Slug {
        #[arg(allow_hyphen_values = true)]
        value: String,
        #[arg(short, long, default_value = DEFAULT_SEPARATOR)]
        separator: String,
    },
    /// Transliterate to printable 7-bit ASCII
    Ascii {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Print the character pool for `alpha` or `alnum`
    Pool { kind: String },
}
