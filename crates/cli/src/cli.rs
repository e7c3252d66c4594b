// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;

use crate::color::ColorMode;
use crate::config::Config;

/// Print lines that match an extended regular expression
#[derive(Debug, Parser)]
#[command(name = "greplite")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Pattern to search for
    #[arg(
        short = 'E',
        long = "extended-regexp",
        value_name = "PATTERN",
        allow_hyphen_values = true
    )]
    pub pattern: String,

    /// Files to search; stdin when omitted (directories with -r, default .)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Search directories recursively
    #[arg(short, long)]
    pub recursive: bool,

    /// When to color file labels
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Maximum directory depth for -r
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Search hidden files and directories with -r
    #[arg(long)]
    pub hidden: bool,

    /// Honour .gitignore files with -r
    #[arg(long)]
    pub git_ignore: bool,

    /// Search files one at a time
    #[arg(long)]
    pub sequential: bool,

    /// Use specific config file
    #[arg(short = 'C', long = "config", env = "GREPLITE_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Where lines come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
    Files(Vec<PathBuf>),
    Trees(Vec<PathBuf>),
}

impl Source {
    /// Whether matched lines are printed with their path.
    pub fn is_labelled(&self) -> bool {
        matches!(self, Source::Files(_) | Source::Trees(_))
    }
}

impl Cli {
    /// Pick the input mode from the paths and `-r`.
    pub fn source(&self) -> Source {
        if self.recursive {
            let roots = if self.paths.is_empty() {
                vec![PathBuf::from(".")]
            } else {
                self.paths.clone()
            };
            return Source::Trees(roots);
        }
        match self.paths.as_slice() {
            [] => Source::Stdin,
            [single] => Source::File(single.clone()),
            many => Source::Files(many.to_vec()),
        }
    }

    /// Apply command-line overrides on top of the config file.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(depth) = self.max_depth {
            config.walk.max_depth = depth;
        }
        if self.hidden {
            config.walk.hidden = true;
        }
        if self.git_ignore {
            config.walk.git_ignore = true;
        }
        if self.sequential {
            config.search.parallel = false;
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
