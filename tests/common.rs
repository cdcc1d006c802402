//! Common test utilities for building workflow definitions.
use flowgrid::prelude::*;

/// Creates a start boundary item.
#[allow(dead_code)]
pub fn start_item(next: &str) -> WorkflowItem {
    WorkflowItem::sequential(
        "start",
        "Start",
        ItemKind::Boundary {
            is_start: true,
            trigger_type: Some("manual".to_string()),
        },
        Some(next.to_string()),
    )
}

/// Creates an end boundary item.
#[allow(dead_code)]
pub fn end_item() -> WorkflowItem {
    WorkflowItem::sequential(
        "end",
        "End",
        ItemKind::Boundary {
            is_start: false,
            trigger_type: None,
        },
        None,
    )
}

/// Creates an action item with a single successor.
#[allow(dead_code)]
pub fn action_item(id: &str, next: Option<&str>) -> WorkflowItem {
    WorkflowItem::sequential(
        id,
        format!("Action {id}"),
        ItemKind::Action {
            option_id: "generic".to_string(),
        },
        next.map(str::to_string),
    )
}

/// A straight workflow without any decisions.
///
/// Logic: `start -> a1 -> a2 -> end`
#[allow(dead_code)]
pub fn linear_workflow() -> WorkflowDefinition {
    WorkflowDefinition::new(vec![
        start_item("a1"),
        action_item("a1", Some("a2")),
        action_item("a2", Some("end")),
        end_item(),
    ])
}

/// A single switch whose branches rejoin at the end boundary.
///
/// Logic: `start -> s1`, yes -> `a_yes -> end`, no -> `a_no -> end`
#[allow(dead_code)]
pub fn diamond_workflow() -> WorkflowDefinition {
    WorkflowDefinition::new(vec![
        start_item("s1"),
        WorkflowItem::switch(
            "s1",
            "Condition met?",
            "condition",
            Some("a_yes".to_string()),
            Some("a_no".to_string()),
        ),
        action_item("a_yes", Some("end")),
        action_item("a_no", Some("end")),
        end_item(),
    ])
}

/// A switch whose no-branch loops back to an earlier node in its own
/// column. The switch item carries `default_value`, so re-asking the
/// consumed switch inside the cycle resolves to the given outcome.
///
/// Logic: `start -> a1 -> s1`, yes -> `end`, no -> `a1` (cycle)
#[allow(dead_code)]
pub fn retry_workflow(default_value: bool) -> WorkflowDefinition {
    let mut switch = WorkflowItem::switch(
        "s1",
        "Succeeded?",
        "condition",
        Some("end".to_string()),
        Some("a1".to_string()),
    );
    switch.kind = ItemKind::Switch {
        option_id: "condition".to_string(),
        default_value,
    };
    WorkflowDefinition::new(vec![
        start_item("a1"),
        action_item("a1", Some("s1")),
        switch,
        end_item(),
    ])
}

/// Two switches where the second one's no-branch reaches back into the
/// first switch's other branch, one column to the left.
///
/// Logic: `start -> s1`, s1 yes -> `a1 -> s2`, s1 no -> `b1 -> end`,
/// s2 yes -> `a2 -> end`, s2 no -> `b1`
#[allow(dead_code)]
pub fn cross_branch_workflow() -> WorkflowDefinition {
    WorkflowDefinition::new(vec![
        start_item("s1"),
        WorkflowItem::switch(
            "s1",
            "First check",
            "condition",
            Some("a1".to_string()),
            Some("b1".to_string()),
        ),
        action_item("a1", Some("s2")),
        WorkflowItem::switch(
            "s2",
            "Second check",
            "condition",
            Some("a2".to_string()),
            Some("b1".to_string()),
        ),
        action_item("a2", Some("end")),
        action_item("b1", Some("end")),
        end_item(),
    ])
}

/// A switch at the bottom of a branch whose yes-branch climbs back up its
/// own column and whose no-branch reaches into the previous column.
///
/// Logic: `start -> s1`, s1 yes -> `a1 -> a2 -> s2`, s1 no -> `b1 -> end`,
/// s2 yes -> `a1` (cycle), s2 no -> `b1`
#[allow(dead_code)]
pub fn climb_back_workflow() -> WorkflowDefinition {
    WorkflowDefinition::new(vec![
        start_item("s1"),
        WorkflowItem::switch(
            "s1",
            "First check",
            "condition",
            Some("a1".to_string()),
            Some("b1".to_string()),
        ),
        action_item("a1", Some("a2")),
        action_item("a2", Some("s2")),
        WorkflowItem::switch(
            "s2",
            "Retry loop?",
            "condition",
            Some("a1".to_string()),
            Some("b1".to_string()),
        ),
        action_item("b1", Some("end")),
        end_item(),
    ])
}

/// Two switches whose rejoining branches crowd the bottom rows: the first
/// switch's yes-branch has to route past the second switch's next-column
/// successor to reach the shared end.
///
/// Logic: `start -> s1`, s1 yes -> `a1 -> end`, s1 no -> `b1 -> s2`,
/// s2 yes -> `c1 -> end`, s2 no -> `end`
#[allow(dead_code)]
pub fn crowded_rejoin_workflow() -> WorkflowDefinition {
    WorkflowDefinition::new(vec![
        start_item("s1"),
        WorkflowItem::switch(
            "s1",
            "First check",
            "condition",
            Some("a1".to_string()),
            Some("b1".to_string()),
        ),
        action_item("a1", Some("end")),
        action_item("b1", Some("s2")),
        WorkflowItem::switch(
            "s2",
            "Second check",
            "condition",
            Some("c1".to_string()),
            Some("end".to_string()),
        ),
        action_item("c1", Some("end")),
        end_item(),
    ])
}

/// Three switches where the third one's primary slot is already taken by a
/// sibling branch, pushing both of its successors into the next column.
///
/// Logic: `start -> s1`, s1 yes -> `s2`, s1 no -> `s3`,
/// s3 yes -> `g1 -> end`, s3 no -> `h1 -> end`,
/// s2 yes -> `p1 -> end`, s2 no -> `q1 -> end`
#[allow(dead_code)]
pub fn double_split_workflow() -> WorkflowDefinition {
    WorkflowDefinition::new(vec![
        start_item("s1"),
        WorkflowItem::switch(
            "s1",
            "First check",
            "condition",
            Some("s2".to_string()),
            Some("s3".to_string()),
        ),
        WorkflowItem::switch(
            "s3",
            "Second check",
            "condition",
            Some("g1".to_string()),
            Some("h1".to_string()),
        ),
        WorkflowItem::switch(
            "s2",
            "Third check",
            "condition",
            Some("p1".to_string()),
            Some("q1".to_string()),
        ),
        action_item("g1", Some("end")),
        action_item("h1", Some("end")),
        action_item("p1", Some("end")),
        action_item("q1", Some("end")),
        end_item(),
    ])
}

/// Finds the single tile of `kind` at a cell, if any.
#[allow(dead_code)]
pub fn connector_at(diagram: &WorkflowDiagram, x: i32, y: i32) -> Option<ConnectorKind> {
    diagram.points_at(x, y).find_map(|point| match &point.tile {
        Tile::Connector(connector) => Some(connector.kind),
        _ => None,
    })
}

/// Finds a yes/no marker at a cell, if any.
#[allow(dead_code)]
pub fn marker_at(diagram: &WorkflowDiagram, x: i32, y: i32) -> Option<BranchMarker> {
    diagram.points_at(x, y).find_map(|point| match &point.tile {
        Tile::Marker { marker, .. } => Some(*marker),
        _ => None,
    })
}
