//! Behavioral specs for searching named files.
//!
//! One file prints bare lines; several files print `path:line`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

#[test]
fn single_file_prints_bare_lines() {
    let tree = Tree::new().file("fruits.txt", "apple\nbanana\npineapple\n");
    tree.cmd()
        .args(["-E", "apple", "fruits.txt"])
        .assert()
        .success()
        .stdout("apple\npineapple\n");
}

#[test]
fn single_file_without_match_exits_1() {
    let tree = Tree::new().file("fruits.txt", "banana\n");
    tree.cmd()
        .args(["-E", "apple", "fruits.txt"])
        .assert()
        .code(1)
        .stdout("");
}

#[test]
fn missing_single_file_exits_2() {
    let tree = Tree::new();
    tree.cmd()
        .args(["-E", "apple", "missing.txt"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("greplite: missing.txt"));
}

#[test]
fn several_files_label_each_line() {
    let tree = Tree::new()
        .file("a.txt", "cat\nbird\n")
        .file("b.txt", "dog\n")
        .file("c.txt", "fish\n");
    tree.cmd()
        .args(["-E", "(cat|dog)", "a.txt", "b.txt", "c.txt"])
        .assert()
        .success()
        .stdout("a.txt:cat\nb.txt:dog\n");
}

#[test]
fn output_follows_argument_order() {
    let tree = Tree::new().file("a.txt", "hit a\n").file("b.txt", "hit b\n");
    tree.cmd()
        .args(["-E", "hit", "b.txt", "a.txt"])
        .assert()
        .success()
        .stdout("b.txt:hit b\na.txt:hit a\n");
}

#[test]
fn sequential_search_prints_the_same() {
    let tree = Tree::new().file("a.txt", "hit a\n").file("b.txt", "hit b\n");
    tree.cmd()
        .args(["-E", "hit", "--sequential", "a.txt", "b.txt"])
        .assert()
        .success()
        .stdout("a.txt:hit a\nb.txt:hit b\n");
}

#[test]
fn several_files_without_match_exit_1() {
    let tree = Tree::new().file("a.txt", "x\n").file("b.txt", "y\n");
    tree.cmd()
        .args(["-E", "z", "a.txt", "b.txt"])
        .assert()
        .code(1)
        .stdout("");
}

#[test]
fn unreadable_file_is_skipped_among_many() {
    let tree = Tree::new().file("good.txt", "needle\n");
    tree.cmd()
        .args(["-E", "needle", "missing.txt", "good.txt"])
        .assert()
        .success()
        .stdout("good.txt:needle\n")
        .stderr(predicates::str::contains("missing.txt"));
}

#[test]
fn color_always_wraps_the_label() {
    let tree = Tree::new().file("a.txt", "hit\n").file("b.txt", "miss\n");
    tree.cmd()
        .args(["-E", "hit", "--color", "always", "a.txt", "b.txt"])
        .assert()
        .success()
        .stdout(predicates::str::contains("\x1b[35ma.txt"))
        .stdout(predicates::str::ends_with("hit\n"));
}

#[test]
fn no_color_env_disables_auto_color() {
    let tree = Tree::new().file("a.txt", "hit\n").file("b.txt", "hit\n");
    tree.cmd()
        .args(["-E", "hit", "a.txt", "b.txt"])
        .env("COLOR", "1")
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout("a.txt:hit\nb.txt:hit\n");
}

#[test]
fn color_env_forces_auto_color() {
    let tree = Tree::new().file("a.txt", "hit\n").file("b.txt", "hit\n");
    tree.cmd()
        .args(["-E", "hit", "a.txt", "b.txt"])
        .env("COLOR", "1")
        .assert()
        .success()
        .stdout(predicates::str::contains("\x1b["));
}
