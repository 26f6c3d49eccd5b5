// SPDX-FileCopyrightText: 2026 The Clew Authors
// SPDX-License-Identifier: MIT

//! Parsing of raw `git log --graph` output.
//!
//! The pipeline is one-way: raw text → chronology normalization → line
//! classification → graph building → ordered [`crate::model::GraphEvent`]s.
//! Nothing in here executes `git` or touches the filesystem.

pub mod builder;
pub mod chronology;
pub mod classify;
pub mod commit_line;

pub use builder::{build_graph, GraphBuild, GraphOptions, SkippedLine};
pub use chronology::to_chronological;
pub use classify::{classify, classify_lines, marker_column};
pub use commit_line::parse_commit_line;

/// Parse raw (newest-first) `git log --graph` output into graph events.
///
/// This is the whole pipeline in one call: reverse into chronological order
/// (swapping connector glyphs), classify, and build. Empty input yields an
/// empty build, not an error; lines the grammar cannot place are returned in
/// [`GraphBuild::skipped`] rather than aborting the run.
///
/// [`GraphBuild::skipped`]: builder::GraphBuild::skipped
pub fn parse_git_graph(input: &str, options: &GraphOptions) -> GraphBuild {
    let lines = to_chronological(input);
    build_graph(&lines, options)
}
