// SPDX-FileCopyrightText: 2026 The Clew Authors
// SPDX-License-Identifier: MIT

use std::fmt;

use crate::model::GraphEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitGraphExportError {
    /// Branch names are emitted bare, so they must be single-line tokens.
    InvalidBranchName { name: String },
    /// Commit ids are emitted inside double quotes and cannot contain them.
    InvalidCommitId { id: String },
}

impl fmt::Display for GitGraphExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBranchName { name } => {
                write!(f, "cannot export branch name {name:?}: must be a single non-empty token without quotes")
            }
            Self::InvalidCommitId { id } => {
                write!(f, "cannot export commit id {id:?}: must not contain quotes or newlines")
            }
        }
    }
}

impl std::error::Error for GitGraphExportError {}

fn validate_branch_name(name: &str) -> Result<&str, GitGraphExportError> {
    if name.is_empty() || name.chars().any(|ch| ch.is_whitespace() || ch == '"') {
        return Err(GitGraphExportError::InvalidBranchName {
            name: name.to_owned(),
        });
    }
    Ok(name)
}

fn validate_commit_id(id: &str) -> Result<&str, GitGraphExportError> {
    if id.is_empty() || id.contains('"') || id.contains('\n') || id.contains('\r') {
        return Err(GitGraphExportError::InvalidCommitId { id: id.to_owned() });
    }
    Ok(id)
}

/// Export an event sequence as a Mermaid `gitGraph` script.
///
/// The mapping is one statement per event, in order: `commit id: "…"`,
/// `branch <name>`, `checkout <name>`, `merge <name> id: "…"`. Export is
/// deterministic; identical input always yields the identical script.
pub fn export_git_graph(events: &[GraphEvent]) -> Result<String, GitGraphExportError> {
    let mut out = String::from("gitGraph\n");
    for event in events {
        match event {
            GraphEvent::Commit { id } => {
                out.push_str("    commit id: \"");
                out.push_str(validate_commit_id(id)?);
                out.push_str("\"\n");
            }
            GraphEvent::BranchOpen { name } => {
                out.push_str("    branch ");
                out.push_str(validate_branch_name(name)?);
                out.push('\n');
            }
            GraphEvent::Checkout { name } => {
                out.push_str("    checkout ");
                out.push_str(validate_branch_name(name)?);
                out.push('\n');
            }
            GraphEvent::Merge { name, id } => {
                out.push_str("    merge ");
                out.push_str(validate_branch_name(name)?);
                out.push_str(" id: \"");
                out.push_str(validate_commit_id(id)?);
                out.push_str("\"\n");
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::{export_git_graph, GitGraphExportError};
    use crate::model::GraphEvent;

    #[test]
    fn exports_the_full_event_vocabulary() {
        let events = vec![
            GraphEvent::commit("a1b2c3d"),
            GraphEvent::branch_open("feature"),
            GraphEvent::checkout("feature"),
            GraphEvent::commit("d4e5f6a"),
            GraphEvent::checkout("main"),
            GraphEvent::merge("feature", "f3a2b1c"),
        ];
        let script = export_git_graph(&events).expect("export");
        assert_eq!(
            script,
            "gitGraph\n\
             \x20   commit id: \"a1b2c3d\"\n\
             \x20   branch feature\n\
             \x20   checkout feature\n\
             \x20   commit id: \"d4e5f6a\"\n\
             \x20   checkout main\n\
             \x20   merge feature id: \"f3a2b1c\"\n"
        );
    }

    #[test]
    fn empty_events_export_a_bare_header() {
        assert_eq!(export_git_graph(&[]).expect("export"), "gitGraph\n");
    }

    #[test]
    fn rejects_branch_names_that_cannot_be_tokens() {
        let err = export_git_graph(&[GraphEvent::branch_open("two words")]).unwrap_err();
        assert_eq!(
            err,
            GitGraphExportError::InvalidBranchName {
                name: "two words".to_owned()
            }
        );
    }

    #[test]
    fn rejects_commit_ids_with_quotes() {
        let err = export_git_graph(&[GraphEvent::commit("a\"b")]).unwrap_err();
        assert_eq!(
            err,
            GitGraphExportError::InvalidCommitId {
                id: "a\"b".to_owned()
            }
        );
    }
}
