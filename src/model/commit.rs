// SPDX-FileCopyrightText: 2026 The Clew Authors
// SPDX-License-Identifier: MIT

/// Sentinel substituted for fields a malformed commit line fails to yield.
pub const UNKNOWN: &str = "unknown";

/// The metadata parsed out of one Commit-classified line.
///
/// `column` is the character offset of the line's `*` marker and stands in
/// for "which branch". Malformed lines still produce a record, with
/// [`UNKNOWN`] in place of the missing fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    id: String,
    message: String,
    author: String,
    decoration: Option<String>,
    column: usize,
}

impl CommitRecord {
    pub fn new(
        id: impl Into<String>,
        message: impl Into<String>,
        author: impl Into<String>,
        decoration: Option<String>,
        column: usize,
    ) -> Self {
        Self {
            id: id.into(),
            message: message.into(),
            author: author.into(),
            decoration,
            column,
        }
    }

    /// A record for a line that did not match the commit grammar.
    pub fn fallback(message: impl Into<String>, column: usize) -> Self {
        Self {
            id: UNKNOWN.to_owned(),
            message: message.into(),
            author: UNKNOWN.to_owned(),
            decoration: None,
            column,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn decoration(&self) -> Option<&str> {
        self.decoration.as_deref()
    }

    pub fn column(&self) -> usize {
        self.column
    }
}
