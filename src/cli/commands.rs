// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `prepare` and `encode`
// and all their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → usize, f64, etc.)
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};

use crate::application::prepare_use_case::PrepareConfig;

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build vocabularies and encoded datasets from a tab-separated
    /// parallel corpus
    Prepare(PrepareArgs),

    /// Encode a sentence against a previously saved vocabulary
    Encode(EncodeArgs),
}

/// All arguments for the `prepare` command.
/// Each field becomes a --flag on the command line.
#[derive(Args, Debug)]
pub struct PrepareArgs {
    /// Parallel corpus file, one "source<TAB>target" pair per line
    #[arg(long, default_value = "data/pairs.tsv")]
    pub input: String,

    /// Directory to write vocabulary snapshots into
    #[arg(long, default_value = "artifacts")]
    pub artifacts_dir: String,

    /// Source language name (left field of each line)
    #[arg(long, default_value = "en")]
    pub source_lang: String,

    /// Target language name (right field of each line)
    #[arg(long, default_value = "fr")]
    pub target_lang: String,

    /// Fraction of lines kept for training; the rest become the
    /// validation set, encoded with the training vocabulary
    #[arg(long, default_value_t = 0.8)]
    pub train_fraction: f64,

    /// Shuffle seed for a reproducible train/validation split
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Convert CLI PrepareArgs into the application-layer config.
/// This is the boundary between Layer 1 and Layer 2 — the
/// application layer never sees clap types.
impl From<PrepareArgs> for PrepareConfig {
    fn from(a: PrepareArgs) -> Self {
        PrepareConfig {
            input_file:     a.input,
            artifacts_dir:  a.artifacts_dir,
            source_lang:    a.source_lang,
            target_lang:    a.target_lang,
            train_fraction: a.train_fraction,
            seed:           a.seed,
        }
    }
}

/// All arguments for the `encode` command
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// The sentence to encode
    #[arg(long)]
    pub sentence: String,

    /// Language name of a saved vocabulary snapshot
    #[arg(long, default_value = "en")]
    pub lang: String,

    /// Directory holding the vocabulary snapshots
    #[arg(long, default_value = "artifacts")]
    pub artifacts_dir: String,

    /// Right-pad the id sequence with <pad> up to this length
    /// (longer sentences come back unpadded)
    #[arg(long)]
    pub pad_len: Option<usize>,
}
