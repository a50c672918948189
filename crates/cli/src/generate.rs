// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Writing the generated Vim runtime files.
//!
//! Each artifact is produced independently: a failure in one is recorded in
//! the [`Report`] and the remaining artifacts are still attempted.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{Error, ExitCode, Result};
use crate::render;
use crate::sources::{Sources, load_sources};

/// Default filetype name.
pub const DEFAULT_FILETYPE: &str = "aimsin";

/// A generated Vim runtime file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    /// `ftdetect/<ft>.vim`
    Detect,
    /// `ftplugin/<ft>.vim`
    Plugin,
    /// `syntax/<ft>.vim`
    Syntax,
}

impl Artifact {
    /// Artifacts in generation order.
    pub const ALL: [Artifact; 3] = [Artifact::Detect, Artifact::Plugin, Artifact::Syntax];

    /// Runtime subdirectory holding this artifact.
    pub fn dir_name(self) -> &'static str {
        match self {
            Artifact::Detect => "ftdetect",
            Artifact::Plugin => "ftplugin",
            Artifact::Syntax => "syntax",
        }
    }

    /// Output path under the Vim configuration directory `root`.
    pub fn path(self, root: &Path, filetype: &str) -> PathBuf {
        root.join(self.dir_name()).join(format!("{}.vim", filetype))
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// What happened to one artifact.
#[derive(Debug)]
pub enum Outcome {
    Written,
    /// Dry run: the file would have been written.
    WouldWrite,
    /// The file exists and `force` was not set. Content is left untouched.
    Skipped,
    Failed(Error),
}

/// Generation settings.
#[derive(Debug, Clone)]
pub struct Options {
    /// Vim configuration directory.
    pub directory: PathBuf,
    pub filetype: String,
    /// Overwrite existing files.
    pub force: bool,
    /// Report what would be written without touching the disk.
    pub dry_run: bool,
    pub sources: Sources,
}

/// Outcome of one generation run.
#[derive(Debug, Default)]
pub struct Report {
    pub entries: Vec<ReportEntry>,
}

#[derive(Debug)]
pub struct ReportEntry {
    pub artifact: Artifact,
    pub path: PathBuf,
    pub outcome: Outcome,
}

impl Report {
    pub fn outcome(&self, artifact: Artifact) -> Option<&Outcome> {
        self.entries
            .iter()
            .find(|e| e.artifact == artifact)
            .map(|e| &e.outcome)
    }

    pub fn has_failures(&self) -> bool {
        self.entries
            .iter()
            .any(|e| matches!(e.outcome, Outcome::Failed(_)))
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.has_failures() {
            ExitCode::GenerateFailed
        } else {
            ExitCode::Success
        }
    }
}

/// Reject filetype names that cannot be used in an augroup or `set filetype=`.
pub fn validate_filetype(filetype: &str) -> Result<()> {
    if render::is_identifier(filetype) {
        Ok(())
    } else {
        Err(Error::Argument(format!(
            "invalid filetype `{}` (allowed: letters, digits, `_`)",
            filetype
        )))
    }
}

/// Generate every artifact.
pub fn generate(opts: &Options) -> Report {
    let mut report = Report::default();

    for artifact in Artifact::ALL {
        let path = artifact.path(&opts.directory, &opts.filetype);
        let outcome = generate_one(opts, artifact, &path).unwrap_or_else(Outcome::Failed);
        tracing::debug!("{}: {:?}", path.display(), outcome);
        report.entries.push(ReportEntry {
            artifact,
            path,
            outcome,
        });
    }

    report
}

fn generate_one(opts: &Options, artifact: Artifact, path: &Path) -> Result<Outcome> {
    if path.exists() && !opts.force {
        return Ok(Outcome::Skipped);
    }

    let content = render_artifact(opts, artifact)?;

    if opts.dry_run {
        return Ok(Outcome::WouldWrite);
    }

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| Error::Io {
            path: dir.to_path_buf(),
            source: e,
        })?;
    }

    std::fs::write(path, content).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(Outcome::Written)
}

fn render_artifact(opts: &Options, artifact: Artifact) -> Result<String> {
    match artifact {
        Artifact::Detect => Ok(render::ftdetect(&opts.filetype)),
        Artifact::Plugin => Ok(render::ftplugin(&opts.filetype)),
        Artifact::Syntax => {
            let sources: Vec<_> = opts.sources.paths().map(|p| p.display().to_string()).collect();
            tracing::debug!("loading definitions from [{}]", sources.join(", "));
            let defs = load_sources(&opts.sources)?;
            Ok(render::syntax(&defs))
        }
    }
}

#[cfg(test)]
#[path = "generate_tests.rs"]
mod tests;
