// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Recursive file walking for `-r`.
//!
//! Uses the `ignore` crate for traversal. Files are streamed from a
//! background thread over a bounded channel, sorted by file name within each
//! directory so output order is stable.

use std::path::{Path, PathBuf};

use crossbeam_channel::{Receiver, Sender, bounded};
use ignore::WalkBuilder;

use crate::config::WalkConfig;

/// Helper to check if an ignore::Error is a symlink loop error.
fn is_loop_error(err: &ignore::Error) -> bool {
    match err {
        ignore::Error::Loop { .. } => true,
        ignore::Error::WithPath { err, .. } => is_loop_error(err),
        ignore::Error::WithDepth { err, .. } => is_loop_error(err),
        ignore::Error::WithLineNumber { err, .. } => is_loop_error(err),
        _ => false,
    }
}

/// Default maximum directory depth.
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Bound on files queued between the walker thread and the searcher.
const CHANNEL_CAPACITY: usize = 1000;

/// Walker configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkerConfig {
    /// Maximum directory depth (default: 100).
    pub max_depth: Option<usize>,

    /// Also yield hidden files and descend into hidden directories.
    pub hidden: bool,

    /// Whether to respect gitignore files.
    pub git_ignore: bool,

    pub follow_links: bool,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
            hidden: false,
            git_ignore: false,
            follow_links: false,
        }
    }
}

impl From<&WalkConfig> for WalkerConfig {
    fn from(config: &WalkConfig) -> Self {
        Self {
            max_depth: Some(config.max_depth),
            hidden: config.hidden,
            git_ignore: config.git_ignore,
            follow_links: config.follow_links,
        }
    }
}

/// File discovered by the walker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkedFile {
    /// Path to the file, as reached from the walk root.
    pub path: PathBuf,

    /// Directory depth from root.
    pub depth: usize,
}

/// Statistics from a walk operation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WalkStats {
    /// Total files discovered.
    pub files_found: usize,

    /// Symlink loops detected.
    pub symlink_loops: usize,

    /// Errors encountered.
    pub errors: usize,
}

/// Sequential file walker.
#[derive(Debug, Clone, Default)]
pub struct FileWalker {
    config: WalkerConfig,
}

impl FileWalker {
    /// Create a new walker with the given configuration.
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WalkerConfig {
        &self.config
    }

    /// Walk the given root, returning a receiver of discovered files.
    ///
    /// Files are streamed through the channel as they're discovered.
    /// Returns (receiver, handle) where the handle can be joined to get stats.
    /// A root that is itself a file yields just that file.
    pub fn walk(&self, root: &Path) -> (Receiver<WalkedFile>, WalkHandle) {
        let (tx, rx) = bounded(CHANNEL_CAPACITY);

        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .hidden(!self.config.hidden)
            .git_ignore(self.config.git_ignore)
            .git_exclude(self.config.git_ignore)
            .require_git(false)
            .follow_links(self.config.follow_links)
            .max_depth(self.config.max_depth)
            .sort_by_file_name(|a, b| a.cmp(b));

        let handle = Self::walk_sequential(builder, tx);
        (rx, handle)
    }

    /// Run the walker in a background thread.
    fn walk_sequential(builder: WalkBuilder, tx: Sender<WalkedFile>) -> WalkHandle {
        let walker = builder.build();

        let handle = std::thread::spawn(move || {
            let mut stats = WalkStats::default();

            for entry in walker {
                match entry {
                    Ok(entry) => {
                        let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
                        if !is_file {
                            continue;
                        }

                        stats.files_found += 1;
                        let walked = WalkedFile {
                            depth: entry.depth(),
                            path: entry.into_path(),
                        };
                        if tx.send(walked).is_err() {
                            break;
                        }
                    }
                    Err(err) => {
                        if is_loop_error(&err) {
                            tracing::warn!("Symlink loop detected: {}", err);
                            stats.symlink_loops += 1;
                        } else {
                            tracing::warn!("Walk error: {}", err);
                            eprintln!("greplite: {err}");
                            stats.errors += 1;
                        }
                    }
                }
            }

            tracing::debug!(?stats, "walk finished");
            stats
        });

        WalkHandle { handle }
    }

    /// Walk and collect all files in walk order.
    pub fn walk_collect(&self, root: &Path) -> (Vec<WalkedFile>, WalkStats) {
        let (rx, handle) = self.walk(root);
        let files: Vec<_> = rx.iter().collect();
        let stats = handle.join();
        (files, stats)
    }
}

/// Handle to a running walk operation.
pub struct WalkHandle {
    handle: std::thread::JoinHandle<WalkStats>,
}

impl WalkHandle {
    /// Wait for the walk to complete and return stats.
    pub fn join(self) -> WalkStats {
        self.handle.join().unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
