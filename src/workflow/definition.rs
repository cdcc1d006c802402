use std::fmt;

use serde::{Deserialize, Serialize};

/// The complete, canonical definition of a workflow, ready for compilation.
/// This is the target structure for any custom data model conversion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkflowDefinition {
    pub items: Vec<WorkflowItem>,
}

impl WorkflowDefinition {
    /// Convenience constructor for a definition built from an item list.
    pub fn new(items: Vec<WorkflowItem>) -> Self {
        Self { items }
    }

    /// Returns the ids of all switch items, in declaration order.
    pub fn switch_ids(&self) -> Vec<String> {
        self.items
            .iter()
            .filter(|item| item.kind.is_switch())
            .map(|item| item.id.clone())
            .collect()
    }
}

/// A single authored node in a workflow.
///
/// Successor wiring lives directly on the item: sequential items use
/// `next_id`, switches use `next_yes_id` / `next_no_id`. An absent id means
/// the walk ends there (the end boundary carries no successor at all).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowItem {
    pub id: String,
    pub title: String,
    pub kind: ItemKind,
    pub next_id: Option<String>,
    pub next_yes_id: Option<String>,
    pub next_no_id: Option<String>,
}

impl WorkflowItem {
    /// Creates a sequential item with a single optional successor.
    pub fn sequential(
        id: impl Into<String>,
        title: impl Into<String>,
        kind: ItemKind,
        next_id: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind,
            next_id,
            next_yes_id: None,
            next_no_id: None,
        }
    }

    /// Creates a switch item with its two branch successors.
    pub fn switch(
        id: impl Into<String>,
        title: impl Into<String>,
        option_id: impl Into<String>,
        next_yes_id: Option<String>,
        next_no_id: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind: ItemKind::Switch {
                option_id: option_id.into(),
                default_value: false,
            },
            next_id: None,
            next_yes_id,
            next_no_id,
        }
    }
}

impl fmt::Display for WorkflowItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.kind.type_tag(), self.id)
    }
}

/// The closed set of authored item kinds.
///
/// Dispatch over kinds is always an exhaustive match; there is no runtime
/// type inspection anywhere in the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    /// An executable step. The `option_id` selects its behavior and icon;
    /// form metadata is not part of the layout model.
    Action { option_id: String },
    /// A binary decision point. The boolean outcome is supplied externally
    /// per traversal; `default_value` answers when nothing else does.
    Switch {
        option_id: String,
        default_value: bool,
    },
    /// A passive marker node without branching.
    Status,
    /// A start or end marker of the workflow.
    Boundary {
        is_start: bool,
        trigger_type: Option<String>,
    },
    /// An editable "insert here" slot, laid out like a normal node.
    Placeholder,
}

impl ItemKind {
    pub fn is_switch(&self) -> bool {
        matches!(self, ItemKind::Switch { .. })
    }

    pub fn is_start_boundary(&self) -> bool {
        matches!(self, ItemKind::Boundary { is_start: true, .. })
    }

    pub fn is_end_boundary(&self) -> bool {
        matches!(self, ItemKind::Boundary { is_start: false, .. })
    }

    /// Stable tag naming the kind, used in display output and logs.
    pub fn type_tag(&self) -> &'static str {
        match self {
            ItemKind::Action { .. } => "action",
            ItemKind::Switch { .. } => "switch",
            ItemKind::Status => "status",
            ItemKind::Boundary { is_start: true, .. } => "boundary-start",
            ItemKind::Boundary { is_start: false, .. } => "boundary-end",
            ItemKind::Placeholder => "placeholder",
        }
    }
}
