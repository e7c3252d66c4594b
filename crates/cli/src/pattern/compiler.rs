// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern compiler.
//!
//! Scans a pattern left to right and emits a flat token stream:
//! - `\d`, `\w` -> class tokens; `\` before anything else makes it literal
//! - `[...]` / `[^...]` -> character sets (an unclosed `[` is literal)
//! - `(...)` -> groups or plain-text alternations (an unbalanced `(` is literal)
//! - `.` / `.+` -> wildcards
//! - `+` / `?` -> split the preceding single-character atom into a quantified token
//! - leading `^` and trailing `$` -> anchor flags, never tokens

use std::sync::Arc;

use dashmap::DashMap;

use super::token::{Atom, CharSet, Pattern, Quantifier, Token, TokenKind};

/// Error during pattern compilation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    #[error("quantifier `{quantifier}` at position {position} has nothing to repeat")]
    DanglingQuantifier { quantifier: char, position: usize },

    #[error("quantifier `{quantifier}` at position {position} cannot follow a {target}")]
    UnsupportedQuantifier {
        quantifier: char,
        position: usize,
        target: &'static str,
    },
}

/// Compiles pattern strings, remembering every successful result.
///
/// The cache is append-only and keyed by the exact pattern text. It is
/// safe to share one compiler between threads; two threads compiling the
/// same text both insert the same value.
#[derive(Debug, Default)]
pub struct Compiler {
    cache: DashMap<String, Arc<Pattern>>,
}

impl Compiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile a pattern, reusing a cached result when one exists.
    pub fn compile(&self, pattern: &str) -> Result<Arc<Pattern>, CompileError> {
        if let Some(hit) = self.cache.get(pattern) {
            return Ok(Arc::clone(hit.value()));
        }

        let compiled = Arc::new(parse(pattern)?);
        tracing::debug!(
            pattern,
            tokens = compiled.tokens().len(),
            start_anchored = compiled.is_start_anchored(),
            "compiled pattern"
        );
        self.cache.insert(pattern.to_string(), Arc::clone(&compiled));
        Ok(compiled)
    }

    /// Number of distinct pattern strings compiled so far.
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_cached(&self, pattern: &str) -> bool {
        self.cache.contains_key(pattern)
    }
}

/// Compile a pattern without touching any cache.
pub fn parse(pattern: &str) -> Result<Pattern, CompileError> {
    let chars: Vec<char> = pattern.chars().collect();

    let start_anchored = chars.first() == Some(&'^');
    let body_start = usize::from(start_anchored);
    let mut body_end = chars.len();

    let end_anchored = body_end > body_start
        && chars[body_end - 1] == '$'
        && !is_escaped(&chars[body_start..], body_end - 1 - body_start);
    if end_anchored {
        body_end -= 1;
    }

    let mut tokens = Tokenizer::new(&chars[body_start..body_end], body_start).run()?;

    if end_anchored {
        match tokens.last_mut() {
            Some(last) => last.end_anchor = true,
            None => tokens.push(Token::end_anchor()),
        }
    }

    Ok(Pattern::new(pattern, tokens, start_anchored))
}

/// True when the character at `index` is preceded by an odd run of backslashes.
fn is_escaped(chars: &[char], index: usize) -> bool {
    chars[..index]
        .iter()
        .rev()
        .take_while(|&&c| c == '\\')
        .count()
        % 2
        == 1
}

struct Tokenizer<'a> {
    chars: &'a [char],
    /// Position of `chars[0]` within the original pattern, for error messages.
    offset: usize,
    pos: usize,
    tokens: Vec<Token>,
    /// Pending run of ordinary characters.
    literal: String,
}

impl<'a> Tokenizer<'a> {
    fn new(chars: &'a [char], offset: usize) -> Self {
        Self {
            chars,
            offset,
            pos: 0,
            tokens: Vec::new(),
            literal: String::new(),
        }
    }

    fn run(mut self) -> Result<Vec<Token>, CompileError> {
        while let Some(&c) = self.chars.get(self.pos) {
            match c {
                '\\' => self.escape(),
                '[' => self.class(),
                '(' => self.group(),
                '.' => self.wildcard(),
                _ => match Quantifier::from_char(c) {
                    Some(quantifier) => self.quantifier(c, quantifier)?,
                    None => {
                        self.literal.push(c);
                        self.pos += 1;
                    }
                },
            }
        }
        self.flush();
        Ok(self.tokens)
    }

    fn flush(&mut self) {
        if !self.literal.is_empty() {
            let text = std::mem::take(&mut self.literal);
            self.tokens.push(Token::literal(text));
        }
    }

    fn push(&mut self, kind: TokenKind) {
        self.flush();
        self.tokens.push(Token::new(kind));
    }

    fn escape(&mut self) {
        match self.chars.get(self.pos + 1) {
            Some('d') => {
                self.push(TokenKind::Digit);
                self.pos += 2;
            }
            Some('w') => {
                self.push(TokenKind::Word);
                self.pos += 2;
            }
            Some(&escaped) => {
                self.literal.push(escaped);
                self.pos += 2;
            }
            // A lone trailing backslash stands for itself.
            None => {
                self.literal.push('\\');
                self.pos += 1;
            }
        }
    }

    fn class(&mut self) {
        match find_class_end(self.chars, self.pos) {
            Some(close) => {
                let set = CharSet::from_body(&self.chars[self.pos + 1..close]);
                self.push(TokenKind::Set(set));
                self.pos = close + 1;
            }
            None => {
                self.literal.push('[');
                self.pos += 1;
            }
        }
    }

    fn group(&mut self) {
        let Some(close) = find_group_end(self.chars, self.pos) else {
            self.literal.push('(');
            self.pos += 1;
            return;
        };

        let body = &self.chars[self.pos + 1..close];
        let quantifier = self
            .chars
            .get(close + 1)
            .copied()
            .and_then(Quantifier::from_char);

        self.pos = close + 1 + usize::from(quantifier.is_some());
        self.push(group_kind(body, quantifier.unwrap_or_default()));
    }

    fn wildcard(&mut self) {
        if self.chars.get(self.pos + 1) == Some(&'+') {
            self.push(TokenKind::WildcardPlus);
            self.pos += 2;
        } else {
            self.push(TokenKind::Wildcard);
            self.pos += 1;
        }
    }

    /// Attach `+`/`?` to the atom immediately before it.
    fn quantifier(&mut self, symbol: char, quantifier: Quantifier) -> Result<(), CompileError> {
        let position = self.offset + self.pos;

        let atom = if let Some(last) = self.literal.pop() {
            self.flush();
            Atom::Char(last)
        } else {
            let Some(previous) = self.tokens.pop() else {
                return Err(CompileError::DanglingQuantifier {
                    quantifier: symbol,
                    position,
                });
            };
            match previous.kind.as_atom() {
                Some(atom) => atom,
                None => {
                    return Err(CompileError::UnsupportedQuantifier {
                        quantifier: symbol,
                        position,
                        target: previous.kind.describe(),
                    });
                }
            }
        };

        self.tokens.push(Token::new(TokenKind::Quantified { atom, quantifier }));
        self.pos += 1;
        Ok(())
    }
}

/// Classify a group body: plain-text alternatives become an alternation,
/// anything else stays a group compiled on demand.
fn group_kind(body: &[char], quantifier: Quantifier) -> TokenKind {
    let branches = split_branches(body);

    if branches.len() > 1 && branches.iter().all(|b| is_plain_alternative(b)) {
        TokenKind::Alternation {
            alternatives: branches,
            quantifier,
        }
    } else {
        TokenKind::Group {
            body: body.iter().collect(),
            branches,
            quantifier,
        }
    }
}

fn is_plain_alternative(text: &str) -> bool {
    !text.chars().any(|c| matches!(c, ' ' | '?' | '+' | '(' | ')'))
}

/// Split a group body on `|` outside nested groups, classes, and escapes.
fn split_branches(body: &[char]) -> Vec<String> {
    let mut branches = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    let mut i = 0;

    while i < body.len() {
        let c = body[i];
        match c {
            '\\' => {
                current.push(c);
                if let Some(&next) = body.get(i + 1) {
                    current.push(next);
                    i += 1;
                }
            }
            '[' => match find_class_end(body, i) {
                Some(close) => {
                    current.extend(&body[i..=close]);
                    i = close;
                }
                None => current.push(c),
            },
            '(' => {
                depth += 1;
                current.push(c);
            }
            ')' => {
                depth = depth.saturating_sub(1);
                current.push(c);
            }
            '|' if depth == 0 => branches.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
        i += 1;
    }

    branches.push(current);
    branches
}

/// Index of the first `]` after the `[` at `open`.
fn find_class_end(chars: &[char], open: usize) -> Option<usize> {
    chars[open + 1..]
        .iter()
        .position(|&c| c == ']')
        .map(|offset| open + 1 + offset)
}

/// Index of the `)` balancing the `(` at `open`.
fn find_group_end(chars: &[char], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut i = open;

    while i < chars.len() {
        match chars[i] {
            '\\' => i += 1,
            '[' => {
                if let Some(close) = find_class_end(chars, i) {
                    i = close;
                }
            }
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
        i += 1;
    }

    None
}

#[cfg(test)]
#[path = "compiler_tests.rs"]
mod tests;
