// SPDX-FileCopyrightText: 2026 The Clew Authors
// SPDX-License-Identifier: MIT

use memchr::memchr3;
use rayon::prelude::*;

use crate::model::{LineKind, RawLine};

/// Classify one graph line by its structural role.
///
/// Total: every input maps to exactly one [`LineKind`], never an error.
/// Indicator tokens are tested in fixed priority (`*`, then `|\`, then `|/`);
/// a leading `"| "` continuation token — one per concurrently open, unrelated
/// branch column — is peeled off two characters at a time and the test
/// re-applied, because a line's true role only shows after all such columns
/// are crossed.
pub fn classify(line: &str) -> LineKind {
    let mut rest = line;
    loop {
        if rest.starts_with('*') {
            return LineKind::Commit;
        }
        if rest.starts_with("|\\") {
            return LineKind::BranchOpen;
        }
        if rest.starts_with("|/") {
            return LineKind::Merge;
        }
        match rest.strip_prefix("| ") {
            Some(stripped) => rest = stripped,
            None => return LineKind::Unclassifiable,
        }
    }
}

/// Classify a batch of lines.
///
/// The classifier is stateless, so this is the one stage of the pipeline that
/// may fan out; the builder itself consumes lines strictly in order.
pub fn classify_lines(lines: &[RawLine]) -> Vec<LineKind> {
    lines.par_iter().map(|line| classify(line.raw())).collect()
}

/// The character offset of a line's terminal marker (`*`, `/`, or `\`).
///
/// `None` for lines without a marker (continuation-only or unclassifiable).
pub fn marker_column(line: &str) -> Option<usize> {
    memchr3(b'*', b'/', b'\\', line.as_bytes())
}
