// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Highlight group definitions.
//!
//! Parses YAML definition files into typed records. Every shape error is
//! reported here, at load time, as [`Error::Definition`].

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::render::is_identifier;

/// One named highlight group definition.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HighlightGroup {
    /// Built-in Vim highlight group to link to (e.g. `Keyword`, `Type`).
    pub group: String,

    /// Literal keywords matched as whole words. May be empty.
    pub tags: Vec<String>,

    /// Raw text spliced in front of the tag pattern.
    #[serde(default)]
    pub prefix: Option<String>,

    /// Raw patterns matched in addition to the tags.
    #[serde(default)]
    pub extras: Option<Vec<String>>,

    #[serde(flatten)]
    unknown: BTreeMap<String, serde_yaml::Value>,
}

impl HighlightGroup {
    pub fn new<I, S>(group: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            group: group.into(),
            tags: tags.into_iter().map(Into::into).collect(),
            prefix: None,
            extras: None,
            unknown: BTreeMap::new(),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_extras<I, S>(mut self, extras: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extras = Some(extras.into_iter().map(Into::into).collect());
        self
    }

    /// Names of fields that were present in the source but not recognized.
    pub fn unknown_fields(&self) -> impl Iterator<Item = &str> {
        self.unknown.keys().map(String::as_str)
    }
}

/// Highlight group definitions keyed by rule name, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Definitions {
    entries: Vec<(String, HighlightGroup)>,
}

impl Definitions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a definition, replacing any existing one with the same name.
    ///
    /// A replaced entry keeps its original position. Returns the previous
    /// definition, if any.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        def: HighlightGroup,
    ) -> Option<HighlightGroup> {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => Some(std::mem::replace(existing, def)),
            None => {
                self.entries.push((name, def));
                None
            }
        }
    }

    /// Insert every entry of `other`, in order. Later entries win by name.
    pub fn merge(&mut self, other: Definitions) {
        for (name, def) in other.entries {
            if self.insert(name.as_str(), def).is_some() {
                tracing::debug!("definition {} overridden", name);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&HighlightGroup> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, d)| d)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &HighlightGroup)> {
        self.entries.iter().map(|(n, d)| (n.as_str(), d))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(N, HighlightGroup)> for Definitions {
    fn from_iter<T: IntoIterator<Item = (N, HighlightGroup)>>(iter: T) -> Self {
        let mut defs = Definitions::new();
        for (name, def) in iter {
            defs.insert(name, def);
        }
        defs
    }
}

/// Load definitions from a YAML file.
///
/// A missing file is reported as [`Error::SourceNotFound`] so callers can
/// decide whether the source was optional.
pub fn load(path: &Path) -> Result<Definitions> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Error::SourceNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    parse(&content, path)
}

/// Parse definitions from YAML content. `path` is used for error messages.
pub fn parse(content: &str, path: &Path) -> Result<Definitions> {
    if content.trim().is_empty() {
        return Ok(Definitions::new());
    }

    let mut value: serde_yaml::Value =
        serde_yaml::from_str(content).map_err(|e| definition_error(path, e.to_string()))?;
    // Resolve `<<: *anchor` merge keys
    value
        .apply_merge()
        .map_err(|e| definition_error(path, e.to_string()))?;

    let mapping = match value {
        serde_yaml::Value::Null => serde_yaml::Mapping::new(),
        serde_yaml::Value::Mapping(m) => m,
        other => {
            return Err(definition_error(
                path,
                format!("expected a mapping of rule names, got {:?}", other),
            ));
        }
    };

    let mut defs = Definitions::new();
    for (key, value) in mapping {
        let name = match key {
            serde_yaml::Value::String(s) => s,
            serde_yaml::Value::Number(n) => n.to_string(),
            other => {
                return Err(definition_error(
                    path,
                    format!("rule name must be a string, got {:?}", other),
                ));
            }
        };

        if !is_identifier(&name) {
            return Err(definition_error(
                path,
                format!("invalid rule name `{}` (allowed: letters, digits, `_`)", name),
            ));
        }

        let def: HighlightGroup = serde_yaml::from_value(value)
            .map_err(|e| definition_error(path, format!("{}: {}", name, e)))?;

        for field in def.unknown_fields() {
            tracing::warn!(
                "{}: {}: unrecognized field `{}` (ignored)",
                path.display(),
                name,
                field
            );
        }

        defs.insert(name, def);
    }

    tracing::debug!("loaded {} definitions from {}", defs.len(), path.display());
    Ok(defs)
}

fn definition_error(path: &Path, message: String) -> Error {
    Error::Definition {
        path: path.to_path_buf(),
        message,
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
