use clap::Parser;
use std::process::ExitCode;

use anyhow::Result;

use jsoncompact::cli::{self, Args};

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    cli::init_logging();

    if cli::run(&args)? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
