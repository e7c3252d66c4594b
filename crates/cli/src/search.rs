// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line search over readers, files, and directory trees.
//!
//! A [`Searcher`] owns one compiled pattern and the engine that compiled it,
//! so group bodies stay cached across every line and file it visits.
//! Many-file searches fan out on the rayon pool and are gathered back in
//! input order.

use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::pattern::{Engine, MatchError, Pattern};
use crate::reader::{self, Lines};
use crate::walker::{FileWalker, WalkStats};

/// Origin label used for standard input in errors.
pub const STDIN_LABEL: &str = "(standard input)";

/// Label for failures writing matches out.
pub const STDOUT_LABEL: &str = "(standard output)";

/// Result of searching one file of a multi-file search.
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,

    /// Matched lines in file order, or the I/O error that stopped the read.
    pub matches: Result<Vec<String>>,
}

impl FileOutcome {
    pub fn matched(&self) -> bool {
        self.matches.as_ref().is_ok_and(|lines| !lines.is_empty())
    }
}

/// Searches line sources for one compiled pattern.
#[derive(Debug)]
pub struct Searcher {
    engine: Engine,
    pattern: Arc<Pattern>,
    parallel: bool,
    walker: FileWalker,
}

impl Searcher {
    /// Compile `pattern` up front so syntax errors surface before any input
    /// is read.
    pub fn new(engine: Engine, pattern: &str) -> Result<Self> {
        let pattern = engine.compile(pattern)?;
        Ok(Self {
            engine,
            pattern,
            parallel: true,
            walker: FileWalker::default(),
        })
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_walker(mut self, walker: FileWalker) -> Self {
        self.walker = walker;
        self
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn is_match(&self, line: &str) -> std::result::Result<bool, MatchError> {
        self.engine.is_match_compiled(line, &self.pattern)
    }

    /// Hand each matched line of one stream to `sink` as soon as it matches
    /// and return how many did. `origin` names the stream in errors.
    ///
    /// Lines passed to `sink` before a failing line stay delivered.
    pub fn for_each_match<R, F>(&self, origin: &Path, reader: R, mut sink: F) -> Result<usize>
    where
        R: BufRead,
        F: FnMut(&str) -> Result<()>,
    {
        let mut count = 0;
        for line in Lines::new(reader) {
            let line = line.map_err(|e| Error::io(origin, e))?;
            if self.is_match(&line)? {
                sink(&line)?;
                count += 1;
            }
        }
        Ok(count)
    }

    /// Matched lines of one stream, in order.
    pub fn search_reader<R: BufRead>(&self, origin: &Path, reader: R) -> Result<Vec<String>> {
        let mut matched = Vec::new();
        self.for_each_match(origin, reader, |line| {
            matched.push(line.to_string());
            Ok(())
        })?;
        Ok(matched)
    }

    /// Matched lines of a single file.
    pub fn search_file(&self, path: &Path) -> Result<Vec<String>> {
        let matched = self.search_reader(path, reader::open(path)?)?;
        tracing::debug!(path = %path.display(), matches = matched.len(), "searched file");
        Ok(matched)
    }

    /// Search every path, returning one outcome per path in input order.
    ///
    /// I/O failures stay inside their outcome; any other error aborts the
    /// whole search.
    pub fn search_paths(&self, paths: &[PathBuf]) -> Result<Vec<FileOutcome>> {
        let searched: Vec<(PathBuf, Result<Vec<String>>)> = if self.parallel {
            paths
                .par_iter()
                .map(|path| (path.clone(), self.search_file(path)))
                .collect()
        } else {
            paths
                .iter()
                .map(|path| (path.clone(), self.search_file(path)))
                .collect()
        };

        searched
            .into_iter()
            .map(|(path, matches)| match matches {
                Err(err @ Error::Io { .. }) => Ok(FileOutcome {
                    path,
                    matches: Err(err),
                }),
                Err(err) => Err(err),
                Ok(lines) => Ok(FileOutcome {
                    path,
                    matches: Ok(lines),
                }),
            })
            .collect()
    }

    /// Walk `root` and search every regular file found, in walk order.
    pub fn search_tree(&self, root: &Path) -> Result<(Vec<FileOutcome>, WalkStats)> {
        let (files, stats) = self.walker.walk_collect(root);
        let paths: Vec<PathBuf> = files.into_iter().map(|f| f.path).collect();
        tracing::debug!(root = %root.display(), files = paths.len(), "searching tree");
        let outcomes = self.search_paths(&paths)?;
        Ok((outcomes, stats))
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
