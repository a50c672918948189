// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! aimsvim CLI entry point.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use aimsvim::cli::Cli;
use aimsvim::error::ExitCode;

mod cmd_generate;

fn init_logging(verbose: bool) {
    let fallback = if verbose { "aimsvim=debug" } else { "off" };
    let filter =
        EnvFilter::try_from_env("AIMSVIM_LOG").unwrap_or_else(|_| EnvFilter::new(fallback));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("aimsvim: {}", e);
            match e.downcast_ref::<aimsvim::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    if let Some(shell) = cli.completions {
        let stdout = std::io::stdout();
        aimsvim::completions::write_completions(shell, &mut stdout.lock());
        return Ok(ExitCode::Success);
    }

    cmd_generate::run(cli)
}
