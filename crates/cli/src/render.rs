// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line builders for the generated Vim files.
//!
//! One function per line type. Vim escape sequences live here and nowhere
//! else.

use crate::config::Definitions;
use crate::expand::expand;

/// First line of every generated file.
pub const GENERATED_NOTICE: &str =
    "\" This file is generated automatically. Manual edit might be lost";

/// Prefix for every syntax group name.
pub const GROUP_PREFIX: &str = "aims";

/// Filename globs that identify FHI-aims input files.
const DETECT_GLOBS: &str = "geometry*.in,geometry.in[_.]*,control*.in,control.in[_.]*";

/// Header marker on line 1 of FHI-aims generated inputs.
const HEADER_LINE_1: &str = "^#%FHI-aims";

/// Header marker on line 3 of FHI-aims species defaults.
const HEADER_LINE_3: &str = "^#  FHI-aims code project";

/// Returns true if `name` can be spliced into a Vim group or augroup name.
pub fn is_identifier(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Whole-word alternation over `tags`, e.g. `\v<(bar|baz)>`.
///
/// `prefix` is spliced in front verbatim. Returns `None` for empty tags.
pub fn tag_pattern(tags: &[String], prefix: Option<&str>) -> Option<String> {
    if tags.is_empty() {
        return None;
    }
    Some(format!(
        "{}\\v<({})>",
        prefix.unwrap_or_default(),
        tags.join("|")
    ))
}

/// `syn match` line for `#` comments. Not anchored: comments may trail code.
pub fn comment_match_line(name: &str) -> String {
    format!("syn match {}{}\t\"#.*$\"", GROUP_PREFIX, name)
}

/// `syn match` line anchored at line start after optional whitespace.
pub fn match_line(name: &str, pattern: &str) -> String {
    format!("syn match {}{}\t\"^\\s*{}\"", GROUP_PREFIX, name, pattern)
}

/// `hi def link` line.
pub fn link_line(name: &str, group: &str) -> String {
    format!("hi def link {}{}\t{}", GROUP_PREFIX, name, group)
}

/// Contents of `ftdetect/<filetype>.vim`.
pub fn ftdetect(filetype: &str) -> String {
    let lines = [
        GENERATED_NOTICE.to_string(),
        format!("augroup filetype_{}", filetype),
        "  autocmd!".to_string(),
        format!(
            "  autocmd BufNewFile,BufRead {} set filetype={}",
            DETECT_GLOBS, filetype
        ),
        "  autocmd BufNewFile,BufRead *".to_string(),
        format!(
            "      \\ if (getline(1) =~? \"{}\") || (getline(3) =~? \"{}\") |",
            HEADER_LINE_1, HEADER_LINE_3
        ),
        format!("      \\     set filetype={} |", filetype),
        "      \\ endif".to_string(),
        "augroup END".to_string(),
    ];
    join_lines(&lines)
}

/// Contents of `ftplugin/<filetype>.vim`.
pub fn ftplugin(filetype: &str) -> String {
    let lines = [
        GENERATED_NOTICE.to_string(),
        format!("set syntax={}", filetype),
        "setlocal comments=:#".to_string(),
        "setlocal commentstring=#%s".to_string(),
    ];
    join_lines(&lines)
}

/// Contents of `syntax/<filetype>.vim`.
pub fn syntax(defs: &Definitions) -> String {
    let mut lines = vec![GENERATED_NOTICE.to_string()];
    lines.extend(expand(defs));
    join_lines(&lines)
}

fn join_lines(lines: &[String]) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    out
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
