//! Behavioral specs for `-r` directory search.
//!
//! Files are visited in file-name order within each directory and every
//! matched line is labelled with its path.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

fn sample() -> Tree {
    Tree::new()
        .file("dir/fruits.txt", "pear\nstrawberry\n")
        .file("dir/subdir/vegetables.txt", "celery\ncarrot\n")
        .file("dir/vegetables.txt", "cucumber\ncorn\n")
}

#[test]
fn walks_the_tree_in_name_order() {
    sample()
        .cmd()
        .args(["-r", "-E", ".+er", "dir"])
        .assert()
        .success()
        .stdout(
            "dir/fruits.txt:strawberry\n\
             dir/subdir/vegetables.txt:celery\n\
             dir/vegetables.txt:cucumber\n",
        );
}

#[test]
fn recursive_without_match_exits_1() {
    sample()
        .cmd()
        .args(["-r", "-E", "banana", "dir"])
        .assert()
        .code(1)
        .stdout("");
}

#[test]
fn default_root_is_current_directory() {
    let tree = Tree::new().file("notes.txt", "todo: walk\n");
    tree.cmd()
        .args(["-r", "-E", "^todo"])
        .assert()
        .success()
        .stdout("./notes.txt:todo: walk\n");
}

#[test]
fn hidden_files_need_a_flag() {
    let tree = Tree::new()
        .file("visible.txt", "secret\n")
        .file(".hidden/inner.txt", "secret\n");

    tree.cmd()
        .args(["-r", "-E", "secret", "."])
        .assert()
        .success()
        .stdout("./visible.txt:secret\n");

    tree.cmd()
        .args(["-r", "--hidden", "-E", "secret", "."])
        .assert()
        .success()
        .stdout("./.hidden/inner.txt:secret\n./visible.txt:secret\n");
}

#[test]
fn max_depth_limits_the_walk() {
    sample()
        .cmd()
        .args(["-r", "--max-depth", "1", "-E", "c", "dir"])
        .assert()
        .success()
        .stdout("dir/vegetables.txt:cucumber\ndir/vegetables.txt:corn\n");
}

#[test]
fn gitignore_is_opt_in() {
    let tree = Tree::new()
        .file("src/.gitignore", "*.log\n")
        .file("src/app.log", "error here\n")
        .file("src/app.txt", "error there\n");

    tree.cmd()
        .args(["-r", "-E", "error", "src"])
        .assert()
        .success()
        .stdout("src/app.log:error here\nsrc/app.txt:error there\n");

    tree.cmd()
        .args(["-r", "--git-ignore", "-E", "error", "src"])
        .assert()
        .success()
        .stdout("src/app.txt:error there\n");
}

#[test]
fn several_roots_are_searched_in_order() {
    let tree = Tree::new().file("a/x.txt", "hit\n").file("b/y.txt", "hit\n");
    tree.cmd()
        .args(["-r", "-E", "hit", "b", "a"])
        .assert()
        .success()
        .stdout("b/y.txt:hit\na/x.txt:hit\n");
}

#[test]
fn missing_root_is_reported_not_fatal() {
    let tree = Tree::new().file("a/x.txt", "hit\n");
    tree.cmd()
        .args(["-r", "-E", "hit", "nope", "a"])
        .assert()
        .success()
        .stdout("a/x.txt:hit\n")
        .stderr(predicates::str::contains("nope"));
}
