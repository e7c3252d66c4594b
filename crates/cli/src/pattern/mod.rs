// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern compilation and matching.
//!
//! Supported syntax:
//! - literal runs, `.` and `.+`
//! - `\d`, `\w`, `[...]`, `[^...]`
//! - `(...)` groups with optional `+` / `?`, and `|` inside groups
//! - `+` / `?` on a single character atom
//! - `^` / `$` anchors
//!
//! The two entry points are [`Engine::compile`] and [`Engine::is_match`].

pub mod compiler;
pub mod engine;
pub mod predicate;
pub mod token;

pub use compiler::{CompileError, Compiler};
pub use engine::{DEFAULT_RECURSION_LIMIT, Engine, MatchError};
pub use token::{Atom, CharSet, Pattern, Quantifier, Token, TokenKind};

/// Match `text` against `pattern` with a throwaway engine.
///
/// Callers matching many lines should keep an [`Engine`] so group bodies
/// stay cached between calls.
pub fn is_match(text: &str, pattern: &str) -> Result<bool, MatchError> {
    Engine::new().is_match(text, pattern)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
