// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiled pattern units.
//!
//! A pattern string compiles into a flat [`Pattern`]: an ordered list of
//! [`Token`]s plus the start-anchor flag. Groups keep their body as raw
//! text; the engine compiles it through the shared cache when evaluated.

use super::predicate::{is_digit, is_word};

/// Repetition attached to a group, alternation, or single atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Quantifier {
    /// Exactly once (no suffix).
    #[default]
    One,
    /// `+`
    OneOrMore,
    /// `?`
    ZeroOrOne,
}

impl Quantifier {
    /// Parse a quantifier suffix character.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Quantifier::OneOrMore),
            '?' => Some(Quantifier::ZeroOrOne),
            _ => None,
        }
    }
}

/// An explicit `[...]` or `[^...]` set.
///
/// Members are taken literally: no ranges, no escapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharSet {
    members: Vec<char>,
    negated: bool,
}

impl CharSet {
    pub fn new(members: impl IntoIterator<Item = char>, negated: bool) -> Self {
        Self {
            members: members.into_iter().collect(),
            negated,
        }
    }

    /// Build a set from the text between the brackets.
    pub fn from_body(body: &[char]) -> Self {
        match body.split_first() {
            Some(('^', rest)) => Self::new(rest.iter().copied(), true),
            _ => Self::new(body.iter().copied(), false),
        }
    }

    pub fn contains(&self, c: char) -> bool {
        self.members.contains(&c) != self.negated
    }

    pub fn members(&self) -> &[char] {
        &self.members
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }
}

/// A single-character atom that can carry a `+` or `?` suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Atom {
    Char(char),
    Any,
    Digit,
    Word,
    Set(CharSet),
}

impl Atom {
    pub fn matches(&self, c: char) -> bool {
        match self {
            Atom::Char(expected) => *expected == c,
            Atom::Any => true,
            Atom::Digit => is_digit(c),
            Atom::Word => is_word(c),
            Atom::Set(set) => set.contains(c),
        }
    }
}

/// What a token matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// A run of ordinary characters matched consecutively.
    Literal(String),
    /// `.`
    Wildcard,
    /// `.+`
    WildcardPlus,
    /// `\d`
    Digit,
    /// `\w`
    Word,
    /// `[...]` / `[^...]`
    Set(CharSet),
    /// `(...)` whose body is a sub-pattern, split on top-level `|`.
    Group {
        body: String,
        branches: Vec<String>,
        quantifier: Quantifier,
    },
    /// `(a|b|c)` where every alternative is plain text.
    Alternation {
        alternatives: Vec<String>,
        quantifier: Quantifier,
    },
    /// A single atom followed by `+` or `?`.
    Quantified { atom: Atom, quantifier: Quantifier },
    /// A bare `$` with nothing before it to attach to.
    EndAnchor,
}

impl TokenKind {
    /// Short human description used in error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::Literal(_) => "literal",
            TokenKind::Wildcard => "wildcard",
            TokenKind::WildcardPlus => "`.+`",
            TokenKind::Digit => "`\\d`",
            TokenKind::Word => "`\\w`",
            TokenKind::Set(_) => "character class",
            TokenKind::Group { .. } => "group",
            TokenKind::Alternation { .. } => "alternation",
            TokenKind::Quantified { .. } => "quantified atom",
            TokenKind::EndAnchor => "end anchor",
        }
    }

    /// The atom this token matches when it is exactly one character wide.
    pub(crate) fn as_atom(&self) -> Option<Atom> {
        match self {
            TokenKind::Wildcard => Some(Atom::Any),
            TokenKind::Digit => Some(Atom::Digit),
            TokenKind::Word => Some(Atom::Word),
            TokenKind::Set(set) => Some(Atom::Set(set.clone())),
            _ => None,
        }
    }
}

/// One compiled unit, optionally carrying the folded `$` flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// After this token matches, the cursor must sit at the end of input.
    pub end_anchor: bool,
}

impl Token {
    pub fn new(kind: TokenKind) -> Self {
        Self {
            kind,
            end_anchor: false,
        }
    }

    pub fn end_anchor() -> Self {
        Self {
            kind: TokenKind::EndAnchor,
            end_anchor: true,
        }
    }

    pub fn literal(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Literal(text.into()))
    }

    pub fn anchored(mut self) -> Self {
        self.end_anchor = true;
        self
    }
}

/// A fully compiled pattern. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    tokens: Vec<Token>,
    start_anchored: bool,
}

impl Pattern {
    pub(crate) fn new(source: &str, tokens: Vec<Token>, start_anchored: bool) -> Self {
        Self {
            source: source.to_string(),
            tokens,
            start_anchored,
        }
    }

    /// The raw pattern text this was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// True when the pattern began with `^`.
    pub fn is_start_anchored(&self) -> bool {
        self.start_anchored
    }
}
