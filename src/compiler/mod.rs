use crate::error::CompileError;
use crate::graph::WorkflowGraph;
use crate::graph::traversal::{SwitchAssignment, default_switch_resolver};
use crate::map::MapPoint;
use crate::workflow::{RenderPreferences, WorkflowDefinition, WorkflowDiagram, WorkflowItem};
use ahash::AHashMap;

mod enumerate;
mod frequency;
mod placer;
mod router;

pub use enumerate::{MAX_ENUMERATED_SWITCHES, enumerate_assignments};
pub use frequency::{IdFrequency, PathAnalysis, analyze_paths};
pub use placer::{NODE_STEP, Placement, place_nodes};
pub use router::route_connectors;

/// Compiles a workflow definition into a placed and routed diagram.
///
/// The compiler is pure and synchronous: the same definition and settings
/// always produce the same diagram. Construction goes through
/// [`DiagramCompilerBuilder`] so resolver overrides and render preferences
/// are fixed before compilation starts.
pub struct DiagramCompiler {
    workflow: WorkflowDefinition,
    replay: AHashMap<String, bool>,
    resolver: Option<Box<dyn Fn(&WorkflowItem) -> bool>>,
    preferences: RenderPreferences,
}

pub struct DiagramCompilerBuilder {
    workflow: WorkflowDefinition,
    replay: AHashMap<String, bool>,
    resolver: Option<Box<dyn Fn(&WorkflowItem) -> bool>>,
    preferences: RenderPreferences,
}

impl DiagramCompilerBuilder {
    pub fn new(workflow: WorkflowDefinition) -> Self {
        Self {
            workflow,
            replay: AHashMap::new(),
            resolver: None,
            preferences: RenderPreferences::default(),
        }
    }

    /// Pins switch outcomes for traversals that revisit a switch after its
    /// enumerated value is consumed. Later calls override earlier pins for
    /// the same switch.
    pub fn with_assignment(mut self, assignment: SwitchAssignment) -> Self {
        for (id, value) in assignment.iter() {
            self.replay.insert(id.to_string(), value);
        }
        self
    }

    /// Installs a fallback resolver consulted for switch revisits not
    /// covered by a pinned assignment. Without one, the switch's authored
    /// default value decides.
    pub fn with_switch_resolver(
        mut self,
        resolver: impl Fn(&WorkflowItem) -> bool + 'static,
    ) -> Self {
        self.resolver = Some(Box::new(resolver));
        self
    }

    pub fn with_preferences(mut self, preferences: RenderPreferences) -> Self {
        self.preferences = preferences;
        self
    }

    pub fn build(self) -> DiagramCompiler {
        DiagramCompiler {
            workflow: self.workflow,
            replay: self.replay,
            resolver: self.resolver,
            preferences: self.preferences,
        }
    }
}

impl DiagramCompiler {
    pub fn builder(workflow: WorkflowDefinition) -> DiagramCompilerBuilder {
        DiagramCompilerBuilder::new(workflow)
    }

    /// Runs the full pipeline: graph validation, branch enumeration, path
    /// frequency analysis, node placement and connector routing.
    pub fn compile(self) -> Result<WorkflowDiagram, CompileError> {
        let graph = WorkflowGraph::new(&self.workflow)?;

        tracing::debug!(
            items = graph.items().len(),
            switches = graph.switch_ids().len(),
            "compiling workflow diagram"
        );

        let assignments = enumerate_assignments(graph.switch_ids())?;

        let replay = self.replay;
        let custom = self.resolver;
        let resolver = move |item: &WorkflowItem| -> bool {
            if let Some(&pinned) = replay.get(&item.id) {
                return pinned;
            }
            if let Some(custom) = custom.as_deref() {
                return custom(item);
            }
            default_switch_resolver(item)
        };

        let analysis = analyze_paths(&graph, &assignments, &resolver)?;

        tracing::debug!(
            unique_paths = analysis.unique_paths.len(),
            "path analysis complete"
        );

        let mut placement = place_nodes(&analysis);
        let connectors = route_connectors(&mut placement);

        let map_points = placement.into_points();
        let mut connected_map_points: Vec<MapPoint> = map_points.clone();
        connected_map_points.extend(connectors);

        Ok(WorkflowDiagram {
            map_points,
            connected_map_points,
            preferences: self.preferences,
        })
    }
}
