use serde::{Deserialize, Serialize};

use super::tile::{BranchMarker, BranchTag, Connector, ConnectorKind, Tile};
use crate::workflow::WorkflowItem;

/// The five switch branch geometries the router knows how to wire.
///
/// Classified once by the placer from the grid positions of the switch's two
/// successors relative to the switch itself; the router dispatches on the
/// stored value and never re-derives it. Nodes sit on even grid coordinates,
/// so "the very next column" is two grid units to the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwitchTopology {
    /// One successor below in the same column, the other in the next column.
    BelowAndNext = 1,
    /// Both successors in the next column.
    BothNext = 2,
    /// One successor below in the same column, the other above in the same
    /// column (the branch bypasses the switch's own column).
    BelowAndAbove = 3,
    /// One successor in the next column, the other in a previously visited
    /// column (long back-reference).
    NextAndBack = 4,
    /// One successor in a previous column, the other above in the same
    /// column.
    BackAndAbove = 5,
}

impl SwitchTopology {
    /// Stable numeric id of the pattern.
    pub fn id(self) -> u8 {
        self as u8
    }
}

/// One placed grid tile: a real node, or a synthetic connector or marker.
///
/// Coordinates are non-negative. Real nodes occupy even `(x, y)` pairs; odd
/// rows and columns are routing streets reserved for connector tiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapPoint {
    pub x: i32,
    pub y: i32,
    pub tile: Tile,
    pub next_id: Option<String>,
    pub next_yes_id: Option<String>,
    pub next_no_id: Option<String>,
    /// Set on switch tiles only, and only when both successors resolved.
    pub switch_topology: Option<SwitchTopology>,
    /// Entry-side flags, OR-accumulated as predecessors route into this
    /// tile; consumed by rendering for entry styling, never cleared.
    pub pointed_at_top: bool,
    pub pointed_at_left: bool,
    pub pointed_at_right: bool,
}

impl MapPoint {
    /// Creates the tile for a real authored node. Successor wiring is
    /// copied off the item so the renderer never consults the definition.
    pub fn item(x: i32, y: i32, item: WorkflowItem) -> Self {
        let next_id = item.next_id.clone();
        let next_yes_id = item.next_yes_id.clone();
        let next_no_id = item.next_no_id.clone();
        Self {
            x,
            y,
            tile: Tile::Item(item),
            next_id,
            next_yes_id,
            next_no_id,
            switch_topology: None,
            pointed_at_top: false,
            pointed_at_left: false,
            pointed_at_right: false,
        }
    }

    /// Creates a yes/no pseudo-marker tile for the given switch.
    pub fn marker(x: i32, y: i32, marker: BranchMarker, origin: &str) -> Self {
        Self {
            x,
            y,
            tile: Tile::Marker {
                marker,
                origin: origin.to_string(),
            },
            next_id: None,
            next_yes_id: None,
            next_no_id: None,
            switch_topology: None,
            pointed_at_top: false,
            pointed_at_left: false,
            pointed_at_right: false,
        }
    }

    /// Creates a connector segment tile.
    pub fn connector(
        x: i32,
        y: i32,
        kind: ConnectorKind,
        tag: BranchTag,
        origin: Option<&str>,
    ) -> Self {
        Self {
            x,
            y,
            tile: Tile::Connector(Connector {
                kind,
                branch: tag,
                origin: origin.map(str::to_string),
            }),
            next_id: None,
            next_yes_id: None,
            next_no_id: None,
            switch_topology: None,
            pointed_at_top: false,
            pointed_at_left: false,
            pointed_at_right: false,
        }
    }

    /// Id of the authored node on this tile, if it is a real node.
    pub fn item_id(&self) -> Option<&str> {
        self.tile.item().map(|item| item.id.as_str())
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}
