// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Backtracking match engine.
//!
//! Tokens run strictly left to right. Single-choice tokens either advance
//! the cursor or fail the attempt. An atom `?` and an alternation without
//! `+` commit to their first choice: one occurrence if present, the first
//! alternative that matches. Repeating tokens and groups produce an ordered
//! list of candidate end positions and keep the first one from which the
//! rest of the stream still matches (a continuation check). Preference
//! order:
//! - `+` constructs: longest first
//! - group `?`: one occurrence before zero
//! - group branches: left to right
//!
//! A continuation only ever covers the stream the token lives in. Inside a
//! group body that is the rest of the body, not the tokens after the group.

use super::compiler::{CompileError, Compiler};
use super::token::{Atom, Pattern, Quantifier, Token, TokenKind};

/// Default cap on nested continuation checks.
///
/// Each level costs a few stack frames; 256 stays well inside a 2 MiB
/// thread stack even in debug builds.
pub const DEFAULT_RECURSION_LIMIT: usize = 256;

/// Error while matching text against a pattern.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error("pattern nests deeper than the recursion limit ({limit})")]
    DepthExceeded { limit: usize },

    #[error("cursor {cursor} outside input of length {len}")]
    CursorOutOfRange { cursor: usize, len: usize },
}

/// Compiles and matches patterns, sharing one compilation cache.
#[derive(Debug)]
pub struct Engine {
    compiler: Compiler,
    recursion_limit: usize,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::with_recursion_limit(DEFAULT_RECURSION_LIMIT)
    }

    pub fn with_recursion_limit(recursion_limit: usize) -> Self {
        Self {
            compiler: Compiler::new(),
            recursion_limit,
        }
    }

    pub fn compiler(&self) -> &Compiler {
        &self.compiler
    }

    pub fn recursion_limit(&self) -> usize {
        self.recursion_limit
    }

    /// Compile a pattern through the engine's cache.
    pub fn compile(&self, pattern: &str) -> Result<std::sync::Arc<Pattern>, CompileError> {
        self.compiler.compile(pattern)
    }

    /// Does `pattern` match anywhere in `text`?
    pub fn is_match(&self, text: &str, pattern: &str) -> Result<bool, MatchError> {
        let compiled = self.compile(pattern)?;
        self.is_match_compiled(text, &compiled)
    }

    /// Does an already compiled pattern match anywhere in `text`?
    pub fn is_match_compiled(&self, text: &str, pattern: &Pattern) -> Result<bool, MatchError> {
        Search::new(&self.compiler, text, self.recursion_limit).find(pattern)
    }
}

/// Outcome of evaluating one token.
enum Step {
    /// Committed match; continue with the next token at this cursor.
    Advance(usize),
    /// The token already matched the rest of the stream, ending here.
    Finished(usize),
    Failed,
}

/// One match attempt over one input line.
struct Search<'a> {
    compiler: &'a Compiler,
    text: Vec<char>,
    limit: usize,
    depth: usize,
}

impl<'a> Search<'a> {
    fn new(compiler: &'a Compiler, text: &str, limit: usize) -> Self {
        Self {
            compiler,
            text: text.chars().collect(),
            limit,
            depth: 0,
        }
    }

    /// Try the pattern at position 0 only when start-anchored, otherwise at
    /// every position up to and including the end of input.
    fn find(&mut self, pattern: &Pattern) -> Result<bool, MatchError> {
        if pattern.is_start_anchored() {
            return Ok(self.run(pattern.tokens(), 0)?.is_some());
        }

        for start in 0..=self.text.len() {
            if self.run(pattern.tokens(), start)?.is_some() {
                tracing::trace!(pattern = pattern.source(), start, "matched");
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Match a whole token stream from `cursor`, returning where it ends.
    fn run(&mut self, tokens: &[Token], cursor: usize) -> Result<Option<usize>, MatchError> {
        if self.depth >= self.limit {
            return Err(MatchError::DepthExceeded { limit: self.limit });
        }
        self.depth += 1;
        let result = self.run_tokens(tokens, cursor);
        self.depth -= 1;
        result
    }

    fn run_tokens(
        &mut self,
        tokens: &[Token],
        mut cursor: usize,
    ) -> Result<Option<usize>, MatchError> {
        let len = self.text.len();
        if cursor > len {
            return Err(MatchError::CursorOutOfRange { cursor, len });
        }

        for (index, token) in tokens.iter().enumerate() {
            let rest = &tokens[index + 1..];
            match self.step(token, rest, cursor)? {
                Step::Advance(next) => {
                    if token.end_anchor && next != len {
                        return Ok(None);
                    }
                    cursor = next;
                }
                Step::Finished(end) => return Ok(Some(end)),
                Step::Failed => return Ok(None),
            }
        }

        Ok(Some(cursor))
    }

    fn step(
        &mut self,
        token: &Token,
        rest: &[Token],
        cursor: usize,
    ) -> Result<Step, MatchError> {
        let fixed = match &token.kind {
            TokenKind::EndAnchor => {
                return Ok(if cursor == self.text.len() {
                    Step::Finished(cursor)
                } else {
                    Step::Failed
                });
            }
            TokenKind::Literal(text) => self.literal_end(text, cursor),
            TokenKind::Wildcard => self.atom_end(&Atom::Any, cursor),
            TokenKind::Digit => self.atom_end(&Atom::Digit, cursor),
            TokenKind::Word => self.atom_end(&Atom::Word, cursor),
            TokenKind::Set(set) => self
                .text
                .get(cursor)
                .filter(|&&c| set.contains(c))
                .map(|_| cursor + 1),
            TokenKind::Quantified {
                atom,
                quantifier: Quantifier::ZeroOrOne,
            } => Some(self.atom_end(atom, cursor).unwrap_or(cursor)),
            TokenKind::Alternation {
                alternatives,
                quantifier: Quantifier::One,
            } => self.alternative_end(alternatives, cursor),
            TokenKind::Alternation {
                alternatives,
                quantifier: Quantifier::ZeroOrOne,
            } => Some(self.alternative_end(alternatives, cursor).unwrap_or(cursor)),
            _ => {
                let candidates = self.candidates(&token.kind, cursor)?;
                return self.first_viable(token, rest, candidates);
            }
        };

        Ok(fixed.map_or(Step::Failed, Step::Advance))
    }

    /// Keep the first candidate end from which the rest of the stream matches.
    fn first_viable(
        &mut self,
        token: &Token,
        rest: &[Token],
        candidates: Vec<usize>,
    ) -> Result<Step, MatchError> {
        let len = self.text.len();
        for end in candidates {
            if token.end_anchor && end != len {
                continue;
            }
            if let Some(finish) = self.run(rest, end)? {
                return Ok(Step::Finished(finish));
            }
        }
        Ok(Step::Failed)
    }

    /// Ordered end positions a repeating token or group could stop at.
    fn candidates(&mut self, kind: &TokenKind, cursor: usize) -> Result<Vec<usize>, MatchError> {
        let len = self.text.len();
        let candidates = match kind {
            TokenKind::WildcardPlus => {
                if cursor >= len {
                    Vec::new()
                } else {
                    (cursor + 1..=len).rev().collect()
                }
            }
            // Only `+` atoms get here; `?` atoms commit in `step`.
            TokenKind::Quantified { atom, .. } => {
                let run = self.text[cursor..]
                    .iter()
                    .take_while(|&&c| atom.matches(c))
                    .count();
                (cursor + 1..=cursor + run).rev().collect()
            }
            // Likewise only `(a|b)+`: each round takes the first alternative.
            TokenKind::Alternation { alternatives, .. } => {
                let mut ends = Vec::new();
                let mut pos = cursor;
                while let Some(next) = self.alternative_end(alternatives, pos) {
                    if !record_repetition(&mut ends, pos, next) {
                        break;
                    }
                    pos = next;
                }
                ends.reverse();
                ends
            }
            TokenKind::Group {
                body,
                branches,
                quantifier,
            } => {
                tracing::trace!(group = body.as_str(), cursor, ?quantifier, "evaluating group");
                self.group_ends(branches, *quantifier, cursor)?
            }
            _ => Vec::new(),
        };
        Ok(candidates)
    }

    fn group_ends(
        &mut self,
        branches: &[String],
        quantifier: Quantifier,
        cursor: usize,
    ) -> Result<Vec<usize>, MatchError> {
        let ends = match quantifier {
            Quantifier::One => self.branch_ends(branches, cursor, false)?,
            Quantifier::ZeroOrOne => {
                let mut ends = self.branch_ends(branches, cursor, true)?;
                ends.push(cursor);
                ends
            }
            Quantifier::OneOrMore => {
                let mut ends = Vec::new();
                let mut pos = cursor;
                while let Some(next) = self.branch_ends(branches, pos, false)?.first().copied() {
                    if !record_repetition(&mut ends, pos, next) {
                        break;
                    }
                    pos = next;
                }
                ends.reverse();
                ends
            }
        };
        Ok(ends)
    }

    /// End of the first alternative, in order given, that matches at `cursor`.
    fn alternative_end(&self, alternatives: &[String], cursor: usize) -> Option<usize> {
        alternatives
            .iter()
            .find_map(|alt| self.literal_end(alt, cursor))
    }

    /// End positions of each group branch that matches at `cursor`, in order.
    ///
    /// An optional group treats a branch that fails to compile as a branch
    /// that did not match.
    fn branch_ends(
        &mut self,
        branches: &[String],
        cursor: usize,
        optional: bool,
    ) -> Result<Vec<usize>, MatchError> {
        let mut ends = Vec::with_capacity(branches.len());
        for branch in branches {
            let body = match self.compiler.compile(branch) {
                Ok(body) => body,
                Err(err) if optional => {
                    tracing::debug!(%err, branch, "optional group branch did not compile");
                    continue;
                }
                Err(err) => return Err(err.into()),
            };
            if body.is_start_anchored() && cursor != 0 {
                continue;
            }
            if let Some(end) = self.run(body.tokens(), cursor)? {
                ends.push(end);
            }
        }
        Ok(ends)
    }

    fn literal_end(&self, literal: &str, cursor: usize) -> Option<usize> {
        let mut pos = cursor;
        for expected in literal.chars() {
            if self.text.get(pos) != Some(&expected) {
                return None;
            }
            pos += 1;
        }
        Some(pos)
    }

    fn atom_end(&self, atom: &Atom, cursor: usize) -> Option<usize> {
        self.text
            .get(cursor)
            .filter(|&&c| atom.matches(c))
            .map(|_| cursor + 1)
    }
}

/// Record one repetition ending at `next`. Returns false when the loop
/// should stop because the repetition consumed nothing.
fn record_repetition(ends: &mut Vec<usize>, pos: usize, next: usize) -> bool {
    if next == pos {
        if ends.is_empty() {
            ends.push(pos);
        }
        return false;
    }
    ends.push(next);
    true
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
