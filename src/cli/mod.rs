// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the songdex command-line interface.
//!
//! Four subcommands: `search` and `suggest` run queries against a catalog
//! file, `history` shows or clears what earlier runs recorded, and `inspect`
//! dumps the derived index so you can see why something did or did not match.
//! History only survives between runs when `--history-file` points somewhere.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "songdex",
    about = "Fuzzy song search with pinyin matching and suggestions",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// JSON config file (partial documents are merged over the defaults)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// JSON file that keeps search history between runs
    #[arg(long, global = true)]
    pub history_file: Option<PathBuf>,

    /// Log at info level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a catalog and show ranked results
    Search {
        /// Path to the catalog JSON document
        catalog: PathBuf,

        /// Search query, optionally `title:`, `creator:`, `alias:` or `info:` scoped
        query: String,

        /// Maximum number of results to show
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show autocomplete suggestions for a prefix
    Suggest {
        /// Path to the catalog JSON document
        catalog: PathBuf,

        /// Prefix typed so far
        prefix: String,

        /// Suggestion limit (defaults to the configured maxSuggestions)
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Print suggestions as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or clear the recorded search history
    History {
        /// Forget every recorded query
        #[arg(long)]
        clear: bool,

        /// Print history as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the derived index for a catalog
    Inspect {
        /// Path to the catalog JSON document
        catalog: PathBuf,

        /// Only show this song
        #[arg(long)]
        song: Option<String>,

        /// Print the index as JSON
        #[arg(long)]
        json: bool,
    },
}
