pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod output;
pub mod pattern;
pub mod reader;
pub mod search;
pub mod walker;

pub use cli::{Cli, Source};
pub use color::ColorMode;
pub use config::Config;
pub use error::{Error, ExitCode, Result};
pub use output::Reporter;
pub use pattern::{CompileError, Engine, MatchError, Pattern};
pub use search::{FileOutcome, Searcher};
pub use walker::{FileWalker, WalkStats, WalkedFile, WalkerConfig};
