// src/bin/cli.rs
use acervo::cli::{self, Cli};
use clap::Parser;
use color_eyre::eyre::eyre;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Cli::parse();
    cli::run(args).map_err(|e| eyre!("{e}"))
}
