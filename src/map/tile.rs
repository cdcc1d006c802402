use std::fmt;

use serde::{Deserialize, Serialize};

use crate::workflow::WorkflowItem;

/// Which switch branch a connector segment belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BranchTag {
    Yes,
    No,
    /// Segments between single-successor nodes, shared by every branch
    /// passing through them.
    Both,
}

/// The "yes"/"no" pseudo-markers labeling a switch branch. Never part of the
/// authored graph; the router places exactly one per branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BranchMarker {
    Yes,
    No,
}

impl fmt::Display for BranchMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BranchMarker::Yes => write!(f, "yes"),
            BranchMarker::No => write!(f, "no"),
        }
    }
}

/// The eight synthetic connector segment kinds.
///
/// Corners are named after the two tile sides they join, so
/// `CornerUpRight` reads as "the top and right edges are connected" (the
/// `└` glyph), independent of which direction the chain flows through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectorKind {
    LineUp,
    LineDown,
    LineLeft,
    LineRight,
    /// `└` — joins the top and right sides.
    CornerUpRight,
    /// `┘` — joins the top and left sides.
    CornerUpLeft,
    /// `┐` — joins the bottom and left sides.
    CornerBottomLeft,
    /// `┌` — joins the bottom and right sides.
    CornerBottomRight,
}

impl ConnectorKind {
    pub fn is_corner(&self) -> bool {
        matches!(
            self,
            ConnectorKind::CornerUpRight
                | ConnectorKind::CornerUpLeft
                | ConnectorKind::CornerBottomLeft
                | ConnectorKind::CornerBottomRight
        )
    }
}

/// One routed connector segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connector {
    pub kind: ConnectorKind,
    /// Branch the segment belongs to; `Both` for single-successor routes.
    pub branch: BranchTag,
    /// Id of the switch whose branch produced this segment, if any.
    pub origin: Option<String>,
}

/// The content of one placed grid tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tile {
    /// A real authored node.
    Item(WorkflowItem),
    /// A yes/no pseudo-marker. `origin` is the switch it labels.
    Marker { marker: BranchMarker, origin: String },
    /// A routed connector segment.
    Connector(Connector),
}

impl Tile {
    /// Returns the contained authored item, if this tile is a real node.
    pub fn item(&self) -> Option<&WorkflowItem> {
        match self {
            Tile::Item(item) => Some(item),
            Tile::Marker { .. } | Tile::Connector(_) => None,
        }
    }

    pub fn is_item(&self) -> bool {
        matches!(self, Tile::Item(_))
    }

    pub fn is_marker(&self) -> bool {
        matches!(self, Tile::Marker { .. })
    }

    pub fn is_connector(&self) -> bool {
        matches!(self, Tile::Connector(_))
    }
}
