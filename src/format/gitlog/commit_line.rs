// SPDX-FileCopyrightText: 2026 The Clew Authors
// SPDX-License-Identifier: MIT

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::model::CommitRecord;

use super::classify::marker_column;

// Named groups, front to back: graph prefix up to and including the `*`
// marker, commit id, message, author, trailing `(…)` decoration. The message
// capture is lazy on purpose: it ends at the first ` - `, reproducing the
// split semantics this format has always had for messages that contain the
// separator themselves.
const COMMIT_LINE_PATTERN: &str = r"^(?P<graph>[|\\/ ]*\*[|\\/ ]*)\s*(?P<id>\S+) - (?P<message>.*?) - (?P<author>.*?)(?: \((?P<decoration>[^()]*)\))?\s*$";

fn commit_line_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(COMMIT_LINE_PATTERN).expect("commit line pattern compiles"))
}

/// Tokenize one Commit-classified line into a [`CommitRecord`].
///
/// Never fails: a line that does not match the grammar (missing ` - `
/// separators, unmatched parenthesis) degrades to sentinel values so one
/// malformed line cannot abort the rest of the graph.
pub fn parse_commit_line(line: &str) -> CommitRecord {
    let column = marker_column(line).unwrap_or(0);

    if let Some(captures) = commit_line_regex().captures(line) {
        let id = captures.name("id").map_or("", |m| m.as_str());
        let message = captures.name("message").map_or("", |m| m.as_str());
        let author = captures.name("author").map_or("", |m| m.as_str());
        let decoration = captures
            .name("decoration")
            .map(|m| m.as_str().trim().to_owned())
            .filter(|d| !d.is_empty());
        return CommitRecord::new(id, message.trim(), author.trim(), decoration, column);
    }

    debug!(line, "commit line did not match the grammar, using sentinels");
    let remainder = line
        .split_once('*')
        .map_or(line, |(_, rest)| rest)
        .trim()
        .to_owned();
    CommitRecord::fallback(remainder, column)
}

/// The feature-branch name a decoration designates, if any.
///
/// Decorations are comma-separated refs; `HEAD -> ` arrows, `origin/` remote
/// prefixes and `tag: ` markers are stripped before matching. A decoration
/// naming `main_branch` is the integration line itself and never a feature
/// branch, so it yields `None`.
pub fn feature_branch_from_decoration(decoration: &str, main_branch: &str) -> Option<String> {
    let mut candidate = None;
    for entry in decoration.split(',') {
        let entry = entry.trim();
        if entry.is_empty() || entry.starts_with("tag:") {
            continue;
        }
        let name = entry.strip_prefix("HEAD -> ").unwrap_or(entry);
        let name = name.strip_prefix("origin/").unwrap_or(name);
        if name == main_branch {
            return None;
        }
        if candidate.is_none() {
            candidate = Some(name.to_owned());
        }
    }
    candidate
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{feature_branch_from_decoration, parse_commit_line};
    use crate::model::commit::UNKNOWN;

    #[test]
    fn tokenizes_a_plain_commit_line() {
        let record = parse_commit_line("* a1b2c3d - initial commit - Alice");
        assert_eq!(record.id(), "a1b2c3d");
        assert_eq!(record.message(), "initial commit");
        assert_eq!(record.author(), "Alice");
        assert_eq!(record.decoration(), None);
        assert_eq!(record.column(), 0);
    }

    #[test]
    fn tokenizes_a_branch_commit_line_with_decoration() {
        let record = parse_commit_line("| * d4e5f6a - feature work - Bob (origin/feature)");
        assert_eq!(record.id(), "d4e5f6a");
        assert_eq!(record.message(), "feature work");
        assert_eq!(record.author(), "Bob");
        assert_eq!(record.decoration(), Some("origin/feature"));
        assert_eq!(record.column(), 2);
    }

    #[test]
    fn tokenizes_a_merge_commit_line_with_multi_ref_decoration() {
        let record = parse_commit_line(
            "*   f3a2b1c - Merge branch 'feature' - Alice (HEAD -> main, origin/main)",
        );
        assert_eq!(record.id(), "f3a2b1c");
        assert_eq!(record.message(), "Merge branch 'feature'");
        assert_eq!(record.decoration(), Some("HEAD -> main, origin/main"));
    }

    #[test]
    fn message_capture_stops_at_the_first_separator() {
        // Long-standing split ambiguity, deliberately preserved: the message
        // loses everything after its own ` - `.
        let record = parse_commit_line("* c9 - fix foo - the hard way - Carol");
        assert_eq!(record.id(), "c9");
        assert_eq!(record.message(), "fix foo");
        assert_eq!(record.author(), "the hard way - Carol");
    }

    #[test]
    fn missing_separator_degrades_to_sentinels() {
        let record = parse_commit_line("* deadbee no separators at all");
        assert_eq!(record.id(), UNKNOWN);
        assert_eq!(record.author(), UNKNOWN);
        assert_eq!(record.message(), "deadbee no separators at all");
        assert_eq!(record.column(), 0);
    }

    #[test]
    fn unmatched_parenthesis_keeps_the_author_segment_whole() {
        let record = parse_commit_line("* c3 - msg - Alice (broken");
        assert_eq!(record.id(), "c3");
        assert_eq!(record.author(), "Alice (broken");
        assert_eq!(record.decoration(), None);
    }

    #[rstest]
    #[case("HEAD -> main, origin/main", None)]
    #[case("main", None)]
    #[case("origin/main", None)]
    #[case("feature", Some("feature"))]
    #[case("origin/feature", Some("feature"))]
    #[case("HEAD -> topic/parser", Some("topic/parser"))]
    #[case("tag: v1.0, feature", Some("feature"))]
    #[case("tag: v1.0", None)]
    #[case("feature, main", None)]
    fn decoration_resolution_respects_the_main_sentinel(
        #[case] decoration: &str,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(
            feature_branch_from_decoration(decoration, "main"),
            expected.map(ToOwned::to_owned)
        );
    }
}
