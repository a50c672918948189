//! Behavioral specs for writing the Vim runtime files.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

const NOTICE: &str = "\" This file is generated automatically. Manual edit might be lost\n";

/// > Writes ftdetect, ftplugin and syntax files and prints their paths
#[test]
fn writes_three_artifacts() {
    let temp = Project::from_fixture("control");
    temp.cmd()
        .assert()
        .success()
        .stdout(predicates::str::contains(FTDETECT))
        .stdout(predicates::str::contains(FTPLUGIN))
        .stdout(predicates::str::contains(SYNTAX));

    for path in [FTDETECT, FTPLUGIN, SYNTAX] {
        assert!(temp.read(path).starts_with(NOTICE), "{path} lacks notice");
    }
}

/// > Syntax output matches the expanded rules exactly
#[test]
fn syntax_matches_golden_file() {
    let temp = Project::from_fixture("control");
    temp.cmd().assert().success();

    similar_asserts::assert_eq!(
        temp.read(SYNTAX),
        fixture_file("control", "expected/syntax/aimsin.vim")
    );
}

/// > Detection file sniffs filenames and header lines
#[test]
fn ftdetect_matches_aims_inputs() {
    let temp = Project::empty();
    temp.cmd().assert().success();

    let detect = temp.read(FTDETECT);
    assert!(detect.contains("augroup filetype_aimsin"));
    assert!(detect.contains(
        "autocmd BufNewFile,BufRead geometry*.in,geometry.in[_.]*,control*.in,control.in[_.]* set filetype=aimsin"
    ));
    assert!(detect.contains(r#"getline(1) =~? "^#%FHI-aims""#));
    assert!(detect.contains(r#"getline(3) =~? "^#  FHI-aims code project""#));
}

/// > Settings file fixes the comment leader
#[test]
fn ftplugin_sets_comment_leader() {
    let temp = Project::empty();
    temp.cmd().assert().success();

    let plugin = temp.read(FTPLUGIN);
    assert!(plugin.contains("set syntax=aimsin\n"));
    assert!(plugin.contains("setlocal comments=:#\n"));
    assert!(plugin.contains("setlocal commentstring=#%s\n"));
}

/// > --ft renames every artifact and reference
#[test]
fn custom_filetype() {
    let temp = Project::empty();
    temp.cmd().args(["--ft", "fhiaims"]).assert().success();

    assert!(temp.exists("ftdetect/fhiaims.vim"));
    assert!(temp.exists("ftplugin/fhiaims.vim"));
    assert!(temp.exists("syntax/fhiaims.vim"));
    assert!(temp.read("ftplugin/fhiaims.vim").contains("set syntax=fhiaims"));
}

/// > -d writes into another directory, creating it if needed
#[test]
fn custom_directory() {
    let temp = Project::from_fixture("control");
    temp.cmd().args(["-d", "vimfiles/after"]).assert().success();

    assert!(temp.exists("vimfiles/after/syntax/aimsin.vim"));
    assert!(!temp.exists(SYNTAX));
}

/// > Existing files are skipped with a notice unless -f is given
#[test]
fn existing_files_are_skipped() {
    let temp = Project::from_fixture("control");
    temp.file(SYNTAX, "\" hand edited\n");

    temp.cmd()
        .assert()
        .success()
        .stderr(predicates::str::contains("exists. Skip"));

    assert_eq!(temp.read(SYNTAX), "\" hand edited\n");
    assert!(temp.exists(FTDETECT));
}

/// > -f overwrites existing files
#[test]
fn force_overwrites() {
    let temp = Project::from_fixture("control");
    temp.file(SYNTAX, "\" hand edited\n");

    temp.cmd().arg("-f").assert().success();

    assert!(temp.read(SYNTAX).contains("aimsGeometry"));
}

/// > Two forced runs produce byte-identical files
#[test]
fn forced_runs_are_idempotent() {
    let temp = Project::from_fixture("control");
    temp.cmd().arg("-f").assert().success();
    let first: Vec<String> = [FTDETECT, FTPLUGIN, SYNTAX].map(|p| temp.read(p)).into();

    temp.cmd().arg("-f").assert().success();
    let second: Vec<String> = [FTDETECT, FTPLUGIN, SYNTAX].map(|p| temp.read(p)).into();

    assert_eq!(first, second);
}

/// > --dry-run lists files without writing them
#[test]
fn dry_run_writes_nothing() {
    let temp = Project::from_fixture("control");
    temp.cmd()
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicates::str::contains("would write"));

    assert!(!temp.exists("ftdetect"));
    assert!(!temp.exists("syntax"));
}

/// > A malformed definition fails only the syntax file
#[test]
fn malformed_definition_fails_syntax_only() {
    let temp = Project::empty();
    temp.file("syntax.yml", "Foo:\n  tags: [bar]\n");

    temp.cmd()
        .assert()
        .code(1)
        .stderr(predicates::str::contains("missing field `group`"));

    assert!(temp.exists(FTDETECT));
    assert!(temp.exists(FTPLUGIN));
    assert!(!temp.exists(SYNTAX));
}
