// SPDX-FileCopyrightText: 2026 The Clew Authors
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

/// One abstract instruction in the reconstructed topology.
///
/// A build pass emits these oldest-first; the sequence is the sole output
/// artifact of the core and maps one-to-one onto the statements of a Mermaid
/// `gitGraph` script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GraphEvent {
    /// A commit on the currently checked-out branch.
    Commit { id: String },
    /// A new branch column opened to the right of its parent.
    BranchOpen { name: String },
    /// Control moved to an already-open branch (or back to main).
    Checkout { name: String },
    /// A branch merged back into main; `id` is the merge commit.
    Merge { name: String, id: String },
}

impl GraphEvent {
    pub fn commit(id: impl Into<String>) -> Self {
        Self::Commit { id: id.into() }
    }

    pub fn branch_open(name: impl Into<String>) -> Self {
        Self::BranchOpen { name: name.into() }
    }

    pub fn checkout(name: impl Into<String>) -> Self {
        Self::Checkout { name: name.into() }
    }

    pub fn merge(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self::Merge {
            name: name.into(),
            id: id.into(),
        }
    }
}
