// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod cli;
pub mod completions;
pub mod config;
pub mod error;
pub mod expand;
pub mod generate;
pub mod render;
pub mod sources;

pub use cli::Cli;
pub use config::{Definitions, HighlightGroup};
pub use error::{Error, ExitCode, Result};
pub use expand::expand;
pub use generate::{Artifact, Options, Outcome, Report, generate};
pub use sources::{Sources, load_sources};

#[cfg(test)]
pub mod test_utils;
