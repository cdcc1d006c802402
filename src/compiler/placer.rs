use ahash::{AHashMap, AHashSet};

use super::frequency::PathAnalysis;
use crate::map::{MapPoint, SwitchTopology};
use crate::workflow::{ItemKind, WorkflowItem};

/// Horizontal/vertical distance between node slots. Nodes sit on even grid
/// coordinates; the odd rows and columns in between are routing streets
/// reserved for connector tiles.
pub const NODE_STEP: i32 = 2;

/// The placed grid: real node tiles only, with switch topologies resolved.
#[derive(Debug, Clone, Default)]
pub struct Placement {
    points: Vec<MapPoint>,
    index: AHashMap<String, usize>,
    occupied: AHashSet<(i32, i32)>,
}

impl Placement {
    pub fn points(&self) -> &[MapPoint] {
        &self.points
    }

    pub fn into_points(self) -> Vec<MapPoint> {
        self.points
    }

    pub fn point(&self, id: &str) -> Option<&MapPoint> {
        self.index.get(id).map(|&idx| &self.points[idx])
    }

    pub fn position(&self, id: &str) -> Option<(i32, i32)> {
        self.point(id).map(MapPoint::position)
    }

    /// Whether a real node occupies the cell. Synthetic tiles never count.
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        self.occupied.contains(&(x, y))
    }

    /// Right-most node column in a row span, used for routing detours.
    pub fn max_column_in_rows(&self, y_from: i32, y_to: i32) -> Option<i32> {
        let (lo, hi) = (y_from.min(y_to), y_from.max(y_to));
        self.occupied
            .iter()
            .filter(|(_, y)| (lo..=hi).contains(y))
            .map(|&(x, _)| x)
            .max()
    }

    pub(super) fn set_pointed_at_top(&mut self, id: &str) {
        if let Some(&idx) = self.index.get(id) {
            self.points[idx].pointed_at_top = true;
        }
    }

    pub(super) fn set_pointed_at_left(&mut self, id: &str) {
        if let Some(&idx) = self.index.get(id) {
            self.points[idx].pointed_at_left = true;
        }
    }

    pub(super) fn set_pointed_at_right(&mut self, id: &str) {
        if let Some(&idx) = self.index.get(id) {
            self.points[idx].pointed_at_right = true;
        }
    }

    fn insert(&mut self, x: i32, y: i32, item: WorkflowItem) {
        let id = item.id.clone();
        self.occupied.insert((x, y));
        self.index.insert(id, self.points.len());
        self.points.push(MapPoint::item(x, y, item));
    }
}

/// Assigns grid coordinates to every node reachable in the analysis and
/// classifies each switch's branch geometry.
///
/// Placement walks the graph from the start boundary. The row encodes
/// sequential depth: each node lands one slot below its predecessor. The
/// column encodes distance from the spine: a switch keeps its
/// higher-frequency branch (the one visited on more paths) in its own
/// column and shifts the other branch one slot to the right. Cells already
/// holding a node are never reused; the continuation shifts further right,
/// branches slide further down. First placement wins, so nodes shared
/// across branches keep a single position.
pub fn place_nodes(analysis: &PathAnalysis) -> Placement {
    let mut placement = Placement::default();

    let Some(start) = analysis
        .unique_paths
        .first()
        .and_then(|path| path.first())
    else {
        return placement;
    };

    placement.insert(0, 0, start.item.clone());

    let mut pending = vec![start.item.id.clone()];
    while let Some(id) = pending.pop() {
        let Some(item) = analysis.item(&id).cloned() else {
            continue;
        };
        let Some((x, y)) = placement.position(&id) else {
            continue;
        };

        match &item.kind {
            ItemKind::Switch { .. } => {
                place_switch_successors(analysis, &mut placement, &mut pending, &item, x, y);
            }
            _ => {
                if let Some(next_id) = item.next_id.as_deref() {
                    place_continuation(analysis, &mut placement, &mut pending, next_id, x, y);
                }
            }
        }
    }

    classify_switches(&mut placement);

    placement
}

/// Places a single-successor continuation directly below its predecessor,
/// shifting right past occupied cells.
fn place_continuation(
    analysis: &PathAnalysis,
    placement: &mut Placement,
    pending: &mut Vec<String>,
    next_id: &str,
    x: i32,
    y: i32,
) {
    if placement.position(next_id).is_some() {
        return;
    }
    let Some(item) = analysis.item(next_id).cloned() else {
        return;
    };

    let mut nx = x;
    let ny = y + NODE_STEP;
    while placement.is_occupied(nx, ny) {
        nx += NODE_STEP;
    }
    placement.insert(nx, ny, item);
    pending.push(next_id.to_string());
}

/// Places the yes/no successors of a switch.
///
/// With both successors unplaced, the branch visited on more paths is
/// primary and continues in the switch's own column; the other branch
/// starts one column to the right, sliding down past occupied cells. Ties
/// favor the "no" branch, the fall-through continuation in the authoring
/// tool. When one successor is already placed, the position of that node
/// decides where the fresh branch goes: a back-reference into an earlier
/// column pushes the fresh branch to the next column, anything else keeps
/// it below the switch.
fn place_switch_successors(
    analysis: &PathAnalysis,
    placement: &mut Placement,
    pending: &mut Vec<String>,
    item: &WorkflowItem,
    x: i32,
    y: i32,
) {
    let yes_id = item.next_yes_id.as_deref();
    let no_id = item.next_no_id.as_deref();

    let unplaced = |id: Option<&str>| -> Option<WorkflowItem> {
        let id = id?;
        if placement.position(id).is_some() {
            None
        } else {
            analysis.item(id).cloned()
        }
    };
    let placed_at = |id: Option<&str>| -> Option<(i32, i32)> {
        placement.position(id?)
    };

    match (unplaced(yes_id), unplaced(no_id)) {
        (Some(yes), Some(no)) => {
            let yes_weight = analysis.occurrences(&yes.id);
            let no_weight = analysis.occurrences(&no.id);
            let (primary, secondary) = if yes_weight > no_weight {
                (yes, no)
            } else {
                (no, yes)
            };

            let mut px = x;
            let py = y + NODE_STEP;
            while placement.is_occupied(px, py) {
                px += NODE_STEP;
            }
            let primary_id = primary.id.clone();
            placement.insert(px, py, primary);

            let sx = x + NODE_STEP;
            let mut sy = y + NODE_STEP;
            while placement.is_occupied(sx, sy) {
                sy += NODE_STEP;
            }
            let secondary_id = secondary.id.clone();
            placement.insert(sx, sy, secondary);

            pending.push(secondary_id);
            pending.push(primary_id);
        }
        (Some(fresh), None) | (None, Some(fresh)) => {
            let other = if Some(fresh.id.as_str()) == yes_id {
                placed_at(no_id)
            } else {
                placed_at(yes_id)
            };

            // A branch looping back into an earlier column forces the
            // fresh branch aside; otherwise it continues the spine.
            let back_reference = matches!(other, Some((ox, _)) if ox < x);
            let fresh_id = fresh.id.clone();
            if back_reference {
                let fx = x + NODE_STEP;
                let mut fy = y + NODE_STEP;
                while placement.is_occupied(fx, fy) {
                    fy += NODE_STEP;
                }
                placement.insert(fx, fy, fresh);
            } else {
                let mut fx = x;
                let fy = y + NODE_STEP;
                while placement.is_occupied(fx, fy) {
                    fx += NODE_STEP;
                }
                placement.insert(fx, fy, fresh);
            }
            pending.push(fresh_id);
        }
        (None, None) => {}
    }
}

/// Resolves every placed switch to one of the five topology patterns.
fn classify_switches(placement: &mut Placement) {
    let mut classified = Vec::with_capacity(placement.points.len());

    for (idx, point) in placement.points.iter().enumerate() {
        let Some(item) = point.tile.item() else {
            continue;
        };
        if !item.kind.is_switch() {
            continue;
        }

        let yes = item
            .next_yes_id
            .as_deref()
            .and_then(|id| placement.position(id));
        let no = item
            .next_no_id
            .as_deref()
            .and_then(|id| placement.position(id));

        let (Some(yes), Some(no)) = (yes, no) else {
            tracing::warn!(
                switch = %item.id,
                "switch is missing a resolvable successor; it will receive no connectors"
            );
            continue;
        };

        match classify(point.x, point.y, yes, no) {
            Some(topology) => classified.push((idx, topology)),
            None => {
                tracing::warn!(
                    switch = %item.id,
                    yes_at = ?yes,
                    no_at = ?no,
                    "switch successor geometry matches no known topology pattern; \
                     it will receive no connectors"
                );
            }
        }
    }

    for (idx, topology) in classified {
        placement.points[idx].switch_topology = Some(topology);
    }
}

fn classify(sx: i32, sy: i32, a: (i32, i32), b: (i32, i32)) -> Option<SwitchTopology> {
    let below = |p: (i32, i32)| p.0 == sx && p.1 > sy;
    let above = |p: (i32, i32)| p.0 == sx && p.1 < sy;
    // The router descends into next-column successors, so a successor in
    // the next column but at or above the switch's row matches nothing and
    // falls through to the unmatched-geometry warning.
    let next = |p: (i32, i32)| p.0 == sx + NODE_STEP && p.1 > sy;
    let back = |p: (i32, i32)| p.0 < sx;

    if (below(a) && next(b)) || (below(b) && next(a)) {
        Some(SwitchTopology::BelowAndNext)
    } else if next(a) && next(b) {
        Some(SwitchTopology::BothNext)
    } else if (below(a) && above(b)) || (below(b) && above(a)) {
        Some(SwitchTopology::BelowAndAbove)
    } else if (next(a) && back(b)) || (next(b) && back(a)) {
        Some(SwitchTopology::NextAndBack)
    } else if (back(a) && above(b)) || (back(b) && above(a)) {
        Some(SwitchTopology::BackAndAbove)
    } else {
        None
    }
}
