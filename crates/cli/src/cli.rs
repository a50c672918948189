// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

use crate::generate::DEFAULT_FILETYPE;

/// Generate Vim filetype, ftplugin and syntax files for FHI-aims inputs
#[derive(Parser)]
#[command(name = "aimsvim")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Additional YAML files to configure Vim syntax
    #[arg(short = 'c', long = "extra-configs", num_args = 1.., value_name = "PATH")]
    pub extra_configs: Vec<PathBuf>,

    /// Base syntax YAML file (required to exist when given) [default: ./syntax.yml if present]
    #[arg(short = 's', long = "syntax", value_name = "PATH")]
    pub syntax: Option<PathBuf>,

    /// Filetype for aims inputs in Vim
    #[arg(long = "filetype", visible_alias = "ft", default_value = DEFAULT_FILETYPE, value_name = "NAME")]
    pub filetype: String,

    /// Vim configuration directory
    #[arg(short = 'd', long = "directory", default_value = ".", value_name = "DIR")]
    pub directory: PathBuf,

    /// Force overwrite
    #[arg(short = 'f', long)]
    pub force: bool,

    /// Show what would be written without writing it
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Enable debug logging (when AIMSVIM_LOG is unset)
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
