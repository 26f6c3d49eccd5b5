// SPDX-FileCopyrightText: 2026 The Clew Authors
// SPDX-License-Identifier: MIT

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::model::{GraphEvent, LineKind, RawLine};

use super::classify::{classify_lines, marker_column};
use super::commit_line::{feature_branch_from_decoration, parse_commit_line};

/// Options for one graph-building pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphOptions {
    /// The default/integration branch; decorations naming it fold into the
    /// main line instead of opening a feature branch.
    pub main_branch: String,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            main_branch: "main".to_owned(),
        }
    }
}

/// A line the builder produced no event for, surfaced for caller-side
/// diagnostic logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedLine {
    pub index: usize,
    pub raw: String,
}

/// The outcome of one build pass: the ordered event sequence plus whatever
/// the grammar could not place.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GraphBuild {
    events: Vec<GraphEvent>,
    skipped: Vec<SkippedLine>,
}

impl GraphBuild {
    pub fn events(&self) -> &[GraphEvent] {
        &self.events
    }

    pub fn skipped(&self) -> &[SkippedLine] {
        &self.skipped
    }

    pub fn into_events(self) -> Vec<GraphEvent> {
        self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty() && self.skipped.is_empty()
    }
}

/// Transient per-pass state for one open branch column.
#[derive(Debug, Clone)]
struct BranchContext {
    name: String,
    column: usize,
    open: bool,
}

/// Build the ordered [`GraphEvent`] sequence from chronological graph lines.
///
/// Lines must already be oldest-first with connector glyphs reoriented (see
/// [`super::chronology::to_chronological`]). The pass is strictly sequential:
/// each line's interpretation depends on the running column/branch state and
/// on whether a merge is pending. All state — including the synthetic
/// branch-name counter — lives inside this one invocation, so repeated runs
/// over identical input produce identical sequences.
pub fn build_graph(lines: &[RawLine], options: &GraphOptions) -> GraphBuild {
    let kinds = classify_lines(lines);
    let mut state = BuildState::new(lines, kinds, &options.main_branch);

    for position in 0..lines.len() {
        match state.kinds[position] {
            LineKind::Commit => state.on_commit(position),
            LineKind::BranchOpen => state.on_branch_open(position),
            LineKind::Merge => state.on_merge(position),
            LineKind::Unclassifiable => state.on_unclassifiable(position),
        }
    }

    GraphBuild {
        events: state.events,
        skipped: state.skipped,
    }
}

struct BuildState<'a> {
    lines: &'a [RawLine],
    kinds: Vec<LineKind>,
    main_branch: &'a str,
    events: Vec<GraphEvent>,
    skipped: Vec<SkippedLine>,
    branches: SmallVec<[BranchContext; 4]>,
    /// Index into `branches`; `None` means the main line.
    active: Option<usize>,
    current_column: usize,
    /// Branch to close at the next Commit line, set by a Merge connector.
    pending_merge: Option<usize>,
    next_synthetic: usize,
    resolved_names: HashMap<usize, String>,
}

impl<'a> BuildState<'a> {
    fn new(lines: &'a [RawLine], kinds: Vec<LineKind>, main_branch: &'a str) -> Self {
        Self {
            lines,
            kinds,
            main_branch,
            events: Vec::new(),
            skipped: Vec::new(),
            branches: SmallVec::new(),
            active: None,
            current_column: 0,
            pending_merge: None,
            next_synthetic: 1,
            resolved_names: HashMap::new(),
        }
    }

    fn on_commit(&mut self, position: usize) {
        let record = parse_commit_line(self.lines[position].raw());

        if let Some(branch_index) = self.pending_merge.take() {
            let branch = &mut self.branches[branch_index];
            branch.open = false;
            let name = branch.name.clone();
            self.active = None;
            self.current_column = record.column();
            self.events.push(GraphEvent::merge(name, record.id()));
            return;
        }

        if record.column() < self.current_column {
            // Control returned to a shallower column without a merge: the
            // branch stays open, emission continues on main.
            self.events.push(GraphEvent::checkout(self.main_branch));
            self.active = None;
            self.current_column = record.column();
        }

        if let Some(name) = record
            .decoration()
            .and_then(|decoration| feature_branch_from_decoration(decoration, self.main_branch))
        {
            let already_active = self
                .active
                .is_some_and(|index| self.branches[index].name == name);
            if !already_active {
                self.open_branch(name, record.column());
            }
        }

        self.current_column = record.column();
        self.events.push(GraphEvent::commit(record.id()));
    }

    fn on_branch_open(&mut self, position: usize) {
        let line = &self.lines[position];
        let Some(backslash) = marker_column(line.raw()) else {
            self.on_unclassifiable(position);
            return;
        };

        // The new column opens one position to the right of the backslash.
        let column = backslash + 1;
        let name = self.resolve_branch_name(position, column);
        self.pending_merge = None;
        self.open_branch(name, column);
        self.current_column = column;
    }

    fn on_merge(&mut self, position: usize) {
        let line = &self.lines[position];
        let Some(slash) = marker_column(line.raw()) else {
            self.on_unclassifiable(position);
            return;
        };

        let closed_column = slash + 1;
        match self
            .branches
            .iter()
            .rposition(|branch| branch.open && branch.column == closed_column)
        {
            Some(index) => self.pending_merge = Some(index),
            None => warn!(
                index = line.index(),
                column = closed_column,
                "merge connector without an open branch at its column"
            ),
        }

        self.events.push(GraphEvent::checkout(self.main_branch));
        self.active = None;
        self.current_column = slash.saturating_sub(1);
    }

    fn on_unclassifiable(&mut self, position: usize) {
        let line = &self.lines[position];
        debug!(index = line.index(), raw = line.raw(), "skipping line");
        self.skipped.push(SkippedLine {
            index: line.index(),
            raw: line.raw().to_owned(),
        });
    }

    fn open_branch(&mut self, name: String, column: usize) {
        self.branches.push(BranchContext {
            name: name.clone(),
            column,
            open: true,
        });
        self.active = Some(self.branches.len() - 1);
        self.events.push(GraphEvent::branch_open(name.clone()));
        self.events.push(GraphEvent::checkout(name));
    }

    /// Resolve the name of the branch opening at `position` onto `column`.
    ///
    /// Pure lookahead over the line slice: the first decorated commit on the
    /// column names the branch; a merge connector closing the column first
    /// means the branch ref is gone, so a synthetic name is minted. Memoized
    /// per opening line.
    fn resolve_branch_name(&mut self, position: usize, column: usize) -> String {
        if let Some(name) = self.resolved_names.get(&position) {
            return name.clone();
        }

        let name = self
            .scan_for_branch_name(position, column)
            .unwrap_or_else(|| {
                let synthetic = format!("feature_branch_{}", self.next_synthetic);
                self.next_synthetic += 1;
                synthetic
            });
        self.resolved_names.insert(position, name.clone());
        name
    }

    fn scan_for_branch_name(&self, position: usize, column: usize) -> Option<String> {
        for (line, kind) in self.lines[position + 1..]
            .iter()
            .zip(&self.kinds[position + 1..])
        {
            match kind {
                LineKind::Commit => {
                    if marker_column(line.raw()) != Some(column) {
                        continue;
                    }
                    let record = parse_commit_line(line.raw());
                    if let Some(name) = record.decoration().and_then(|decoration| {
                        feature_branch_from_decoration(decoration, self.main_branch)
                    }) {
                        return Some(name);
                    }
                }
                LineKind::Merge => {
                    if marker_column(line.raw()).map(|slash| slash + 1) == Some(column) {
                        return None;
                    }
                }
                LineKind::BranchOpen | LineKind::Unclassifiable => {}
            }
        }
        None
    }
}
