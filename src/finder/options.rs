//! Options for name searching
//!
//! This module provides the immutable configuration consumed by the walker.

use crate::cli::Cli;

/// Options for configuring a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    /// Maximum depth to search (None for unlimited)
    pub max_depth: Option<usize>,

    /// File names must equal the search term
    pub exact_match: bool,

    /// Emit matching directories
    pub show_dirs: bool,

    /// Emit matching files
    pub show_files: bool,

    /// Emit files whose name starts with '.'
    pub show_hidden: bool,
}

impl SearchOptions {
    /// Create a new SearchOptions with default values
    pub const fn new() -> Self {
        Self {
            max_depth: None,
            exact_match: false,
            show_dirs: true,
            show_files: true,
            show_hidden: false,
        }
    }

    /// Set the maximum depth to search
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set whether file names must match exactly
    pub fn with_exact_match(mut self, exact_match: bool) -> Self {
        self.exact_match = exact_match;
        self
    }

    /// Set whether directories are emitted
    pub fn with_show_dirs(mut self, show_dirs: bool) -> Self {
        self.show_dirs = show_dirs;
        self
    }

    /// Set whether files are emitted
    pub fn with_show_files(mut self, show_files: bool) -> Self {
        self.show_files = show_files;
        self
    }

    /// Set whether hidden files are emitted
    pub fn with_show_hidden(mut self, show_hidden: bool) -> Self {
        self.show_hidden = show_hidden;
        self
    }

    /// Create SearchOptions from CLI arguments
    pub fn from_cli(cli: &Cli) -> Self {
        Self::new()
            .with_max_depth(cli.depth_limit)
            .with_exact_match(cli.exact)
            .with_show_dirs(!cli.files_only)
            .with_show_files(!cli.dirs_only)
            .with_show_hidden(cli.hidden)
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self::new()
    }
}
