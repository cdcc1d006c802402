use serde::{Deserialize, Serialize};

use crate::map::MapPoint;

/// Grid-scale and visibility preferences for the rendering collaborator.
///
/// Carried through the pipeline untouched: placement and routing never read
/// these, they only travel on the artifact so the renderer receives them
/// alongside the tiles it has to translate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderPreferences {
    /// Whether the renderer should show the index row next to the diagram.
    pub show_indexes: bool,
    /// Pixel-per-grid-unit coefficient applied by the renderer.
    pub grid_scale: u32,
}

impl Default for RenderPreferences {
    fn default() -> Self {
        Self {
            show_indexes: false,
            grid_scale: 1,
        }
    }
}

/// The compiled diagram: the sole contract with the rendering layer.
///
/// Rendering translates `(x, y)` into pixel placement using its configured
/// scale coefficients; it must not re-derive topology or routing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowDiagram {
    /// Real authored nodes only.
    pub map_points: Vec<MapPoint>,
    /// Every placed tile: the real nodes plus the synthetic connector and
    /// marker tiles routed between them.
    pub connected_map_points: Vec<MapPoint>,
    pub preferences: RenderPreferences,
}

impl WorkflowDiagram {
    /// Looks up the real node tile for an item id.
    pub fn item_point(&self, id: &str) -> Option<&MapPoint> {
        self.map_points
            .iter()
            .find(|point| point.item_id() == Some(id))
    }

    /// All tiles occupying a grid cell, real or synthetic.
    pub fn points_at(&self, x: i32, y: i32) -> impl Iterator<Item = &MapPoint> {
        self.connected_map_points
            .iter()
            .filter(move |point| point.x == x && point.y == y)
    }
}
