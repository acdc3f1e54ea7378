// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Two commands are supported:
//   1. `prepare` — builds vocabularies and encoded datasets
//                  from a tab-separated parallel corpus
//   2. `encode`  — encodes a sentence with a saved vocabulary
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the commands submodule
pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, EncodeArgs, PrepareArgs};

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "seq2seq-prep",
    version = "0.1.0",
    about = "Prepare tab-separated parallel text for seq2seq translation training."
)]
pub struct Cli {
    /// The subcommand to run (prepare or encode)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    /// This keeps the CLI layer thin — it only routes, never computes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Prepare(args) => Self::run_prepare(args),
            Commands::Encode(args)  => Self::run_encode(args),
        }
    }

    /// Handles the `prepare` subcommand.
    fn run_prepare(args: PrepareArgs) -> Result<()> {
        use crate::application::prepare_use_case::PrepareUseCase;

        tracing::info!("Preparing corpus from: {}", args.input);

        // Convert CLI args → application config
        let use_case = PrepareUseCase::new(args.into());
        let (_train, _val, report) = use_case.execute()?;

        println!(
            "Prepared {} training and {} validation pairs.",
            report.train_pairs, report.val_pairs
        );
        println!(
            "Vocabulary sizes: source {}, target {}.",
            report.source_vocab_size, report.target_vocab_size
        );
        Ok(())
    }

    /// Handles the `encode` subcommand.
    /// Loads a vocabulary snapshot and encodes one sentence the way
    /// inference-time text is encoded (encode_raw: tokenized fresh,
    /// punctuation NOT filtered).
    fn run_encode(args: EncodeArgs) -> Result<()> {
        use crate::infra::vocab_store::VocabStore;

        let store  = VocabStore::new(&args.artifacts_dir);
        let corpus = store.load(&args.lang)?;

        let ids = corpus.encode_raw(&args.sentence, args.pad_len)?;
        let toks = corpus.decode(&ids)?;

        println!("Ids:     {:?}", ids);
        println!("Decoded: {}", toks.join(" "));
        Ok(())
    }
}
