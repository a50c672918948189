// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Generation command implementation.

use anyhow::Context;

use aimsvim::cli::Cli;
use aimsvim::error::ExitCode;
use aimsvim::generate::{self, Options, Outcome};
use aimsvim::sources::Sources;

/// Validate arguments, resolve sources, then generate every artifact.
///
/// Argument and mandatory-source errors abort before any file is written.
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    generate::validate_filetype(&cli.filetype)?;

    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let sources = Sources::resolve(cli.syntax.as_deref(), &cli.extra_configs, &cwd)?;

    let opts = Options {
        directory: cli.directory.clone(),
        filetype: cli.filetype.clone(),
        force: cli.force,
        dry_run: cli.dry_run,
        sources,
    };

    let report = generate::generate(&opts);

    for entry in &report.entries {
        match &entry.outcome {
            Outcome::Written => println!("{}", entry.path.display()),
            Outcome::WouldWrite => println!("would write {}", entry.path.display()),
            Outcome::Skipped => eprintln!("aimsvim: {} exists. Skip", entry.path.display()),
            Outcome::Failed(e) => eprintln!("aimsvim: {}: {}", entry.artifact, e),
        }
    }

    Ok(report.exit_code())
}
