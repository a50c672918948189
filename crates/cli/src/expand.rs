// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Expansion of highlight group definitions into Vim syntax rules.

use crate::config::Definitions;
use crate::render::{comment_match_line, link_line, match_line, tag_pattern};

/// Syntax group for `#` line comments.
const COMMENT_NAME: &str = "Comment";

/// Expand definitions into `syn match` / `hi def link` lines.
///
/// Output starts with the comment rule and a blank line. Each definition
/// then contributes one match line per pattern, a link line and a blank
/// line. A definition with no tags and no extras contributes nothing.
pub fn expand(defs: &Definitions) -> Vec<String> {
    let mut lines = vec![
        comment_match_line(COMMENT_NAME),
        link_line(COMMENT_NAME, "Comment"),
        String::new(),
    ];

    for (name, def) in defs.iter() {
        let mut match_strs = Vec::new();
        if let Some(pattern) = tag_pattern(&def.tags, def.prefix.as_deref()) {
            match_strs.push(pattern);
        }
        if let Some(extras) = &def.extras {
            match_strs.extend(extras.iter().cloned());
        }

        if match_strs.is_empty() {
            tracing::debug!("{}: no tags or extras, skipped", name);
            continue;
        }

        lines.extend(match_strs.iter().map(|s| match_line(name, s)));
        lines.push(link_line(name, &def.group));
        lines.push(String::new());
    }

    lines
}

#[cfg(test)]
#[path = "expand_tests.rs"]
mod tests;
