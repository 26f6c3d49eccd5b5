// SPDX-FileCopyrightText: 2026 The Clew Authors
// SPDX-License-Identifier: MIT

//! Synthetic newest-first histories for the parse benches.

/// A history of `branches` sequential merged topic branches plus a root
/// commit, in `git log --graph` newest-first orientation.
pub fn history(branches: usize) -> String {
    let mut lines = Vec::with_capacity(branches * 5 + 1);
    for i in (1..=branches).rev() {
        lines.push(format!(
            "*   m{i:04} - Merge branch 'topic{i}' - Alice (HEAD -> main)"
        ));
        lines.push("|\\".to_owned());
        lines.push(format!("| * c{i:04} - topic work {i} - Bob (topic{i})"));
        lines.push("|/".to_owned());
        lines.push(format!("* b{i:04} - main work {i} - Alice"));
    }
    lines.push("* a0000000 - initial - Alice".to_owned());
    lines.join("\n")
}
