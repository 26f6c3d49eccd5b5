// SPDX-FileCopyrightText: 2026 The Clew Authors
// SPDX-License-Identifier: MIT

use crate::format::gitlog::parse_commit_line;

use super::{column_color, BRANCH_NAME_COLOR};

/// Render one raw log line (newest-first orientation) as an HTML fragment.
///
/// Connector lines get their `/` and `\` glyphs styled by column; commit
/// lines get a styled `*` marker, the tokenized metadata segments, and a
/// branch-name span for any trailing decoration. Characters outside the
/// palette stay unstyled.
pub fn render_log_line(line: &str) -> String {
    let mut out = String::from("<div class=\"commit\">");
    if line.contains(" - ") {
        push_commit_line(&mut out, line);
    } else {
        push_connector_line(&mut out, line);
    }
    out.push_str("</div>");
    out
}

/// Render every line of raw log output, in input order.
pub fn render_log_lines(input: &str) -> Vec<String> {
    input.lines().map(render_log_line).collect()
}

/// Render raw log output as a complete standalone HTML page.
///
/// The page shell (heading, monospace styling) comes with the crate; writing
/// the result anywhere is the caller's concern.
pub fn render_log_document(input: &str) -> String {
    let mut body = String::new();
    for (position, line) in input.lines().enumerate() {
        if position > 0 {
            body.push('\n');
        }
        body.push_str(&render_log_line(line));
    }

    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <style>\n\
         h1 {{\n\
         \x20 color: blue;\n\
         \x20 font-family: verdana;\n\
         \x20 font-size: 300%;\n\
         }}\n\
         .git-graph {{\n\
         \x20 font-weight: bold;\n\
         \x20 font-family: courier;\n\
         \x20 font-size: 160%;\n\
         }}\n\
         .commit p {{\n\
         \x20   margin: 2px 0;\n\
         \x20   display: inline;\n\
         }}\n\
         </style>\n\
         </head>\n\
         <body>\n\
         <h1>Git Log Graph</h1>\n\
         \n\
         <div class=\"git-graph\">\n\
         {body}\n\
         </div>\n\
         \n\
         </body>\n\
         </html>\n"
    )
}

fn push_connector_line(out: &mut String, line: &str) {
    out.push_str("<p>");
    for (position, ch) in line.chars().enumerate() {
        if ch == '/' || ch == '\\' {
            match column_color(position) {
                Some(color) => {
                    out.push_str("<span style=\"color:");
                    out.push_str(color);
                    out.push_str("\">");
                    out.push(ch);
                    out.push_str("</span>");
                }
                None => out.push(ch),
            }
        } else {
            out.push(ch);
        }
    }
    out.push_str("</p>");
}

fn push_commit_line(out: &mut String, line: &str) {
    let record = parse_commit_line(line);

    out.push_str("<p>");
    match line.find('*') {
        Some(marker) if marker > 0 => {
            // The column owning the commit sits one left of the asterisk.
            out.push_str(&line[..marker]);
            match column_color(marker - 1) {
                Some(color) => {
                    out.push_str("<span style=\"color:");
                    out.push_str(color);
                    out.push_str("\">*</span>");
                }
                None => out.push('*'),
            }
        }
        Some(_) => out.push('*'),
        None => {}
    }
    out.push_str(" </p>");

    out.push_str("<p>");
    out.push_str(record.id());
    out.push_str("</p><p> - </p><p>");
    out.push_str(record.message());
    out.push_str("</p><p> - </p><p>");
    out.push_str(record.author());
    if let Some(decoration) = record.decoration() {
        out.push_str(" <span style=\"color:");
        out.push_str(BRANCH_NAME_COLOR);
        out.push_str("\">(");
        out.push_str(decoration);
        out.push_str(")</span>");
    }
    out.push_str("</p>");
}
