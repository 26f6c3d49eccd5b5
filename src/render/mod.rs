// SPDX-FileCopyrightText: 2026 The Clew Authors
// SPDX-License-Identifier: MIT

//! Colorized textual rendering.
//!
//! The alternate output mode: instead of structured events, each raw log line
//! becomes an HTML fragment with the graph glyphs (`/`, `\`, `*`) styled from
//! a fixed column palette. Everything else is left unstyled.

pub mod html;

pub use html::{render_log_document, render_log_line, render_log_lines};

/// Color for decoration/branch-name spans.
pub const BRANCH_NAME_COLOR: &str = "purple";

/// The fixed column palette.
///
/// Only the columns a simple two-way-merge graph can occupy are mapped;
/// anything else renders unstyled rather than with an invalid color.
pub fn column_color(column: usize) -> Option<&'static str> {
    match column {
        0 => Some("black"),
        1 => Some("red"),
        3 => Some("blue"),
        5 => Some("green"),
        7 => Some("yellow"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::column_color;

    #[test]
    fn palette_covers_exactly_the_documented_columns() {
        assert_eq!(column_color(0), Some("black"));
        assert_eq!(column_color(1), Some("red"));
        assert_eq!(column_color(3), Some("blue"));
        assert_eq!(column_color(5), Some("green"));
        assert_eq!(column_color(7), Some("yellow"));
        for miss in [2, 4, 6, 8, 100] {
            assert_eq!(column_color(miss), None);
        }
    }
}
