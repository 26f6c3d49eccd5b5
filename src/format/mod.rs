// SPDX-FileCopyrightText: 2026 The Clew Authors
// SPDX-License-Identifier: MIT

//! Textual format boundaries.
//!
//! `gitlog` parses raw `git log --graph` output into graph events; `gitgraph`
//! exports an event sequence as a Mermaid `gitGraph` script.

pub mod gitgraph;
pub mod gitlog;
