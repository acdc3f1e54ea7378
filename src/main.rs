// The batcher and several corpus accessors exist for the external
// training loop and scorer, not for the binary's own two commands.
#![allow(dead_code)]

mod application;
mod cli;
mod data;
mod domain;
mod infra;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("seq2seq_prep=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    cli.run()
}
