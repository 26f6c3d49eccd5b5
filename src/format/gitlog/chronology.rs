// SPDX-FileCopyrightText: 2026 The Clew Authors
// SPDX-License-Identifier: MIT

use memchr::memchr;

use crate::model::RawLine;

/// Reorder newest-first log output into chronological (oldest-first) order.
///
/// The graph's visual left/right sense inverts under reversal, so `/` and `\`
/// are swapped on continuation lines; commit lines carry metadata after the
/// `*` marker and are kept verbatim. Applying the function twice restores
/// both the order and the glyph orientation.
pub fn to_chronological(input: &str) -> Vec<RawLine> {
    input
        .lines()
        .rev()
        .map(reorient)
        .enumerate()
        .map(|(index, raw)| RawLine::new(raw, index))
        .collect()
}

fn reorient(line: &str) -> String {
    // Only connector lines (no `*`) flip; a message may legitimately contain
    // slashes.
    if memchr(b'*', line.as_bytes()).is_some() {
        return line.to_owned();
    }
    line.chars()
        .map(|ch| match ch {
            '/' => '\\',
            '\\' => '/',
            other => other,
        })
        .collect()
}
