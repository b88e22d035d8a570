// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the scout command-line interface.
//!
//! Three subcommands: `search` to run a query over a JSON collection,
//! `platforms` to list the platform selector values, and `inspect` to
//! summarize a collection. Control values are taken as raw strings and parsed
//! by the engine, so unknown values degrade exactly the way the engine says.

pub mod display;
pub mod inspect;

use clap::{ArgAction, Parser, Subcommand};
use scout::{QueryState, Record};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "scout",
    about = "Filter and rank influencer collections by platform, text and followers",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Emit logs and errors as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a query over a JSON array of records
    Search {
        /// Path to the records file (`-` for stdin)
        file: PathBuf,

        /// Platform to keep: all, instagram, twitter, facebook, tiktok, youtube
        #[arg(short, long, default_value = "all")]
        platform: String,

        /// Free-text search over handle, primary tag and tags
        #[arg(short, long, default_value = "")]
        query: String,

        /// Result order: relevance, followersAsc, followersDsc
        #[arg(short, long, default_value = "relevance")]
        sort: String,

        /// Fields to search: all, handle, tag
        #[arg(long = "by", default_value = "all")]
        by: String,

        /// Print results as JSON instead of cards
        #[arg(long)]
        json: bool,

        /// Show which field placed each result
        #[arg(long)]
        explain: bool,
    },

    /// List the known platforms
    Platforms,

    /// Summarize a records file
    Inspect {
        /// Path to the records file (`-` for stdin)
        file: PathBuf,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

/// What the shell shows for a finished query.
#[derive(Debug)]
pub enum View<'a> {
    /// The query's own result.
    Results(Vec<&'a Record>),
    /// No text search and nothing survived the platform filter: show the
    /// whole collection.
    Everything(Vec<&'a Record>),
    /// A non-empty search that matched nothing.
    NoMatches,
}

impl<'a> View<'a> {
    /// Records to render, in order.
    pub fn records(&self) -> &[&'a Record] {
        match self {
            View::Results(records) | View::Everything(records) => records,
            View::NoMatches => &[],
        }
    }
}

/// Decide what to display for a query result.
///
/// The full collection replaces an empty result only when no search text is
/// active. An empty result for a real search stays empty.
pub fn present<'a>(all: &'a [Record], state: &QueryState, result: Vec<&'a Record>) -> View<'a> {
    if !result.is_empty() {
        View::Results(result)
    } else if state.has_search() {
        View::NoMatches
    } else {
        View::Everything(all.iter().collect())
    }
}
