//! Behavioral specs for pattern matching over stdin.
//!
//! Each line of stdin is matched independently; matched lines are echoed.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;
use yare::parameterized;

#[parameterized(
    literal = { "apple", "pineapple" },
    digit = { r"\d", "abc123" },
    word = { r"\w", "$!?a" },
    positive_set = { "[abc]", "cab" },
    negated_set = { "[^xyz]", "xyzw" },
    start_anchor = { "^log", "log entry" },
    end_anchor = { "dog$", "hotdog" },
    one_or_more = { "ca+t", "caaats" },
    zero_or_one = { "dogs?", "dog" },
    wildcard = { "d.g", "dig" },
    wildcard_plus = { "g.+gol", "goøö0Ogol" },
    alternation = { "(cat|dog)", "a dog" },
    counted_animals = {
        r"^I see (\d (cat|dog|cow)s?(, | and )?)+$",
        "I see 1 cat, 2 dogs and 3 cows"
    },
)]
fn matching_line_is_printed(pattern: &str, line: &str) {
    grep_stdin(pattern, &format!("{line}\n"))
        .success()
        .stdout(format!("{line}\n"));
}

#[parameterized(
    literal = { "apple", "banana" },
    digit = { r"\d", "letters" },
    negated_set = { "[^abc]", "cab" },
    start_anchor = { "^log", "a log" },
    end_anchor = { "dog$", "dogs" },
    one_or_more = { "ca+t", "ct" },
    wildcard_plus = { "g.+gol", "gol" },
    alternation = { "^(cat|dog)$", "cow" },
    wrong_noun = { r"^I see (\d (cat|dog|cow)s?(, | and )?)+$", "I see 1 cat, 2 mice" },
)]
fn non_matching_line_exits_1(pattern: &str, line: &str) {
    grep_stdin(pattern, &format!("{line}\n")).code(1).stdout("");
}

#[test]
fn only_matching_lines_are_printed_in_order() {
    grep_stdin(r"\d+ apples?", "3 apples\nno fruit\n1 apple\npears\n")
        .success()
        .stdout("3 apples\n1 apple\n");
}

#[test]
fn anchors_apply_to_each_line() {
    grep_stdin("^b", "ab\nbc\nb\n").success().stdout("bc\nb\n");
}

#[test]
fn crlf_input_matches_end_anchor() {
    grep_stdin("end$", "the end\r\nmiddle\r\n")
        .success()
        .stdout("the end\n");
}

#[test]
fn invalid_utf8_is_decoded_lossily() {
    greplite_cmd()
        .args(["-E", "caf.$"])
        .write_stdin(b"caf\xe9\n".to_vec())
        .assert()
        .success()
        .stdout("caf\u{FFFD}\n");
}

#[test]
fn empty_line_matches_empty_anchors() {
    grep_stdin("^$", "x\n\ny\n").success().stdout("\n");
}

#[test]
fn stdin_output_has_no_label() {
    grep_stdin("a", "a\n")
        .success()
        .stdout(predicates::str::contains("standard input").not());
}
