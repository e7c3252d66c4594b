//! Behavioral specs for the optional TOML config file.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

#[test]
fn config_flag_sets_walk_options() {
    let tree = Tree::new()
        .file("greplite.toml", "[walk]\nhidden = true\n")
        .file("data/.env", "token\n");
    tree.cmd()
        .args(["-r", "--config", "greplite.toml", "-E", "token", "data"])
        .assert()
        .success()
        .stdout("data/.env:token\n");
}

#[test]
fn config_env_var_is_read() {
    let tree = Tree::new()
        .file("conf.toml", "[walk]\nmax_depth = 1\n")
        .file("data/top.txt", "hit\n")
        .file("data/deep/low.txt", "hit\n");
    tree.cmd()
        .args(["-r", "-E", "hit", "data"])
        .env("GREPLITE_CONFIG", tree.join("conf.toml"))
        .assert()
        .success()
        .stdout("data/top.txt:hit\n");
}

#[test]
fn flags_override_config() {
    let tree = Tree::new()
        .file("greplite.toml", "[walk]\nmax_depth = 1\n")
        .file("data/deep/low.txt", "hit\n");
    tree.cmd()
        .args(["-r", "-C", "greplite.toml", "--max-depth", "5", "-E", "hit", "data"])
        .assert()
        .success()
        .stdout("data/deep/low.txt:hit\n");
}

#[test]
fn unknown_keys_warn_but_run() {
    let tree = Tree::new().file("greplite.toml", "[engine]\nflavor = \"pcre\"\n");
    tree.cmd()
        .args(["-C", "greplite.toml", "-E", "a"])
        .write_stdin("a\n")
        .assert()
        .success()
        .stdout("a\n")
        .stderr(predicates::str::contains("unrecognized field `engine.flavor`"));
}

#[test]
fn invalid_config_exits_2() {
    let tree = Tree::new().file("greplite.toml", "[engine]\nmax_recursion = \"lots\"\n");
    tree.cmd()
        .args(["-C", "greplite.toml", "-E", "a"])
        .write_stdin("a\n")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("config error"));
}

#[test]
fn missing_config_file_exits_2() {
    let tree = Tree::new();
    tree.cmd()
        .args(["-C", "nope.toml", "-E", "a"])
        .write_stdin("a\n")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("nope.toml"));
}

#[test]
fn tiny_recursion_limit_is_a_match_error() {
    let tree = Tree::new().file("greplite.toml", "[engine]\nmax_recursion = 2\n");
    tree.cmd()
        .args(["-C", "greplite.toml", "-E", "(((a)))"])
        .write_stdin("a\n")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("recursion limit (2)"));
}

#[test]
fn lines_matched_before_a_match_error_are_still_printed() {
    let tree = Tree::new().file("greplite.toml", "[engine]\nmax_recursion = 3\n");
    tree.cmd()
        .args(["-C", "greplite.toml", "-E", "^(a|x(((a))))"])
        .write_stdin("a\nb\nxa\na\n")
        .assert()
        .code(2)
        .stdout("a\n")
        .stderr(predicates::str::contains("recursion limit (3)"));
}
