// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Definition source resolution and merging.
//!
//! A run reads at most one mandatory base source plus any number of optional
//! sources. Missing optional sources are skipped with a notice; a missing
//! mandatory source is an error raised before anything is written.

use std::path::{Path, PathBuf};

use crate::config::{self, Definitions};
use crate::error::{Error, Result};

/// Base definitions file read from the working directory when `--syntax`
/// is not given.
pub const DEFAULT_SOURCE: &str = "syntax.yml";

/// Resolved definition sources, in merge order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sources {
    /// Mandatory base source, merged first.
    pub required: Option<PathBuf>,
    /// Optional sources, merged after the base in order.
    pub optional: Vec<PathBuf>,
}

impl Sources {
    /// Resolve sources from CLI arguments.
    ///
    /// Priority for the base source:
    /// 1. `explicit` (`-s`/`--syntax`): must exist
    /// 2. `syntax.yml` in `cwd`: optional
    pub fn resolve(explicit: Option<&Path>, extras: &[PathBuf], cwd: &Path) -> Result<Self> {
        let mut sources = Sources::default();

        match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(Error::SourceNotFound {
                        path: path.to_path_buf(),
                    });
                }
                sources.required = Some(path.to_path_buf());
            }
            None => sources.optional.push(cwd.join(DEFAULT_SOURCE)),
        }

        sources.optional.extend(extras.iter().cloned());
        Ok(sources)
    }

    /// All source paths in merge order.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.required
            .iter()
            .chain(self.optional.iter())
            .map(PathBuf::as_path)
    }
}

/// Load and merge all sources. Later sources replace earlier definitions
/// with the same name.
pub fn load_sources(sources: &Sources) -> Result<Definitions> {
    let mut defs = Definitions::new();

    if let Some(path) = &sources.required {
        defs.merge(config::load(path)?);
    }

    for path in &sources.optional {
        match config::load(path) {
            Ok(loaded) => defs.merge(loaded),
            Err(Error::SourceNotFound { path }) => {
                eprintln!("aimsvim: {} not found, skip", path.display());
            }
            Err(e) => return Err(e),
        }
    }

    tracing::debug!("merged {} definitions", defs.len());
    Ok(defs)
}

#[cfg(test)]
#[path = "sources_tests.rs"]
mod tests;
