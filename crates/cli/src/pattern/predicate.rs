// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Character predicates behind the `\d` and `\w` escapes.

/// `\d`: an ASCII digit.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// `\w`: an ASCII letter, digit, or underscore.
#[inline]
pub fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
#[path = "predicate_tests.rs"]
mod tests;
