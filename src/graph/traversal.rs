use ahash::{AHashMap, AHashSet};

use super::WorkflowGraph;
use crate::error::TraversalError;
use crate::workflow::{ItemKind, WorkflowItem};

/// Upper bound on the steps a single traversal may take before it is
/// declared stuck. A workflow that genuinely needs more steps than this is
/// an authoring error, not a layout input.
pub const MAX_TRAVERSAL_STEPS: usize = 4096;

/// A fixed boolean outcome per switch id, consumed once per switch during a
/// single replay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SwitchAssignment {
    values: AHashMap<String, bool>,
}

impl SwitchAssignment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, id: impl Into<String>, value: bool) {
        self.values.insert(id.into(), value);
    }

    pub fn with(mut self, id: impl Into<String>, value: bool) -> Self {
        self.set(id, value);
        self
    }

    pub fn get(&self, id: &str) -> Option<bool> {
        self.values.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.values.iter().map(|(id, &value)| (id.as_str(), value))
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for SwitchAssignment {
    fn from_iter<T: IntoIterator<Item = (S, bool)>>(iter: T) -> Self {
        let mut assignment = Self::new();
        for (id, value) in iter {
            assignment.set(id, value);
        }
        assignment
    }
}

/// The default resolution strategy: a switch answers with its own
/// `default_value`. Non-switch items never reach a resolver.
pub fn default_switch_resolver(item: &WorkflowItem) -> bool {
    match &item.kind {
        ItemKind::Switch { default_value, .. } => *default_value,
        _ => false,
    }
}

/// One visited node in a replayed execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitedItem {
    pub item: WorkflowItem,
    /// How many times this id had already been visited earlier in the same
    /// traversal. Zero on the first visit; greater inside a cycle.
    pub loop_turn: u32,
}

/// A single-use, pull-based replay of a workflow under a fixed switch
/// assignment.
///
/// Walks from the start boundary, yielding each visited item until the end
/// boundary (or a dead end) is reached. Each switch consumes its assignment
/// entry at most once; a repeat visit inside a cycle, or a switch absent
/// from the assignment, falls back to the supplied resolver. The iterator
/// is exhausted after one walk; create a fresh instance per assignment.
pub struct Traversal<'a> {
    graph: &'a WorkflowGraph,
    assignment: &'a SwitchAssignment,
    resolver: &'a dyn Fn(&WorkflowItem) -> bool,
    cursor: Option<&'a WorkflowItem>,
    visit_counts: AHashMap<&'a str, u32>,
    consumed: AHashSet<&'a str>,
    steps: usize,
    failed: bool,
}

impl<'a> Traversal<'a> {
    pub fn new(
        graph: &'a WorkflowGraph,
        assignment: &'a SwitchAssignment,
        resolver: &'a dyn Fn(&WorkflowItem) -> bool,
    ) -> Self {
        Self {
            graph,
            assignment,
            resolver,
            cursor: Some(graph.start()),
            visit_counts: AHashMap::new(),
            consumed: AHashSet::new(),
            steps: 0,
            failed: false,
        }
    }

    fn switch_outcome(&mut self, item: &'a WorkflowItem) -> bool {
        if !self.consumed.contains(item.id.as_str()) {
            if let Some(value) = self.assignment.get(&item.id) {
                self.consumed.insert(item.id.as_str());
                return value;
            }
        }
        (self.resolver)(item)
    }
}

impl<'a> Iterator for Traversal<'a> {
    type Item = Result<VisitedItem, TraversalError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let current = self.cursor?;

        self.steps += 1;
        if self.steps > MAX_TRAVERSAL_STEPS {
            self.failed = true;
            return Some(Err(TraversalError::InfiniteLoop {
                node_id: current.id.clone(),
                limit: MAX_TRAVERSAL_STEPS,
            }));
        }

        let counter = self.visit_counts.entry(current.id.as_str()).or_insert(0);
        let loop_turn = *counter;
        *counter += 1;

        let next_id = if current.kind.is_end_boundary() {
            None
        } else {
            match &current.kind {
                ItemKind::Switch { .. } => {
                    if self.switch_outcome(current) {
                        current.next_yes_id.as_deref()
                    } else {
                        current.next_no_id.as_deref()
                    }
                }
                _ => current.next_id.as_deref(),
            }
        };

        self.cursor = match next_id {
            Some(id) => {
                let target = self.graph.get(id);
                if target.is_none() {
                    tracing::warn!(
                        from = %current.id,
                        to = %id,
                        "successor reference points at a node absent from the workflow; ending walk"
                    );
                }
                target
            }
            None => None,
        };

        Some(Ok(VisitedItem {
            item: current.clone(),
            loop_turn,
        }))
    }
}
