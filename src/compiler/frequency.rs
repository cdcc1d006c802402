use ahash::AHashMap;
use itertools::Itertools;

use crate::error::TraversalError;
use crate::graph::{SwitchAssignment, Traversal, VisitedItem, WorkflowGraph};
use crate::workflow::WorkflowItem;

/// A node id's representative item and how many enumerated paths visit it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdFrequency {
    pub item: WorkflowItem,
    /// Number of unique workflow paths in which the id appears. Repeat
    /// visits inside a cycle (loop turn > 0) are excluded, so this never
    /// exceeds the number of paths.
    pub occurrences: usize,
}

/// The result of replaying a workflow once per enumerated assignment.
#[derive(Debug, Clone, Default)]
pub struct PathAnalysis {
    /// One ordered item sequence per assignment, in enumeration order.
    pub unique_paths: Vec<Vec<VisitedItem>>,
    /// All paths concatenated, in enumeration order.
    pub flat_paths: Vec<VisitedItem>,
    pub frequencies: AHashMap<String, IdFrequency>,
}

impl PathAnalysis {
    pub fn occurrences(&self, id: &str) -> usize {
        self.frequencies
            .get(id)
            .map(|frequency| frequency.occurrences)
            .unwrap_or(0)
    }

    pub fn item(&self, id: &str) -> Option<&WorkflowItem> {
        self.frequencies.get(id).map(|frequency| &frequency.item)
    }
}

/// Runs one fresh traversal per assignment and tabulates visit frequencies.
///
/// Occurrence counts later drive placement weight: nodes visited on more
/// branches are pulled toward the spine of the diagram. A traversal hitting
/// its safety bound aborts the whole analysis; that is an unrecoverable
/// workflow-definition error, not something to truncate around.
pub fn analyze_paths(
    graph: &WorkflowGraph,
    assignments: &[SwitchAssignment],
    resolver: &dyn Fn(&WorkflowItem) -> bool,
) -> Result<PathAnalysis, TraversalError> {
    let mut analysis = PathAnalysis::default();

    for assignment in assignments {
        let path: Vec<VisitedItem> =
            Traversal::new(graph, assignment, resolver).try_collect()?;

        for visited in &path {
            if visited.loop_turn > 0 {
                continue;
            }
            analysis
                .frequencies
                .entry(visited.item.id.clone())
                .and_modify(|frequency| frequency.occurrences += 1)
                .or_insert_with(|| IdFrequency {
                    item: visited.item.clone(),
                    occurrences: 1,
                });
        }

        analysis.unique_paths.push(path);
    }

    analysis.flat_paths = analysis.unique_paths.iter().flatten().cloned().collect();

    Ok(analysis)
}
