use super::placer::{NODE_STEP, Placement};
use crate::map::{BranchMarker, BranchTag, ConnectorKind, MapPoint, SwitchTopology};

/// Wires every placed node to its successors with connector tiles.
///
/// Returns the synthetic tiles (markers and connector segments) in emission
/// order; callers append them to the node tiles to form the connected map.
/// Entry-side flags on the node tiles are set as routes arrive, so the
/// placement is mutated even though no node moves.
///
/// Connector tiles live on the odd rows and columns between nodes and are
/// allowed to overlap each other; only real nodes are treated as obstacles.
pub fn route_connectors(placement: &mut Placement) -> Vec<MapPoint> {
    let nodes: Vec<NodeInfo> = placement
        .points()
        .iter()
        .filter_map(NodeInfo::from_point)
        .collect();

    let mut out = Vec::new();
    for node in &nodes {
        if node.is_switch {
            route_switch(placement, &mut out, node);
        } else if let Some(next_id) = node.next_id.as_deref() {
            if let Some((tx, ty)) = placement.position(next_id) {
                route_plain(placement, &mut out, node.x, node.y, next_id, tx, ty);
            }
        }
    }
    out
}

struct NodeInfo {
    id: String,
    x: i32,
    y: i32,
    is_switch: bool,
    topology: Option<SwitchTopology>,
    next_id: Option<String>,
    next_yes_id: Option<String>,
    next_no_id: Option<String>,
}

impl NodeInfo {
    fn from_point(point: &MapPoint) -> Option<Self> {
        let item = point.tile.item()?;
        Some(Self {
            id: item.id.clone(),
            x: point.x,
            y: point.y,
            is_switch: item.kind.is_switch(),
            topology: point.switch_topology,
            next_id: point.next_id.clone(),
            next_yes_id: point.next_yes_id.clone(),
            next_no_id: point.next_no_id.clone(),
        })
    }
}

/// One switch branch about to be routed: its tag, target id and position.
struct Branch<'a> {
    marker: BranchMarker,
    tag: BranchTag,
    target: &'a str,
    tx: i32,
    ty: i32,
}

fn route_switch(placement: &mut Placement, out: &mut Vec<MapPoint>, node: &NodeInfo) {
    let resolve = |id: &Option<String>| -> Option<(String, i32, i32)> {
        let id = id.as_deref()?;
        let (x, y) = placement.position(id)?;
        Some((id.to_string(), x, y))
    };
    let (Some(yes), Some(no)) = (resolve(&node.next_yes_id), resolve(&node.next_no_id)) else {
        return;
    };
    let Some(topology) = node.topology else {
        tracing::error!(
            switch = %node.id,
            "switch has resolvable successors but no topology; branches left unrouted"
        );
        return;
    };

    let yes = Branch {
        marker: BranchMarker::Yes,
        tag: BranchTag::Yes,
        target: &yes.0,
        tx: yes.1,
        ty: yes.2,
    };
    let no = Branch {
        marker: BranchMarker::No,
        tag: BranchTag::No,
        target: &no.0,
        tx: no.1,
        ty: no.2,
    };

    let (sx, sy) = (node.x, node.y);
    match topology {
        SwitchTopology::BelowAndNext => {
            let (below, next) = if yes.tx == sx { (yes, no) } else { (no, yes) };
            route_branch_below(placement, out, &node.id, sx, sy, &below);
            route_branch_next(placement, out, &node.id, sx, sy, &next);
        }
        SwitchTopology::BothNext => {
            let (upper, lower) = if yes.ty < no.ty { (yes, no) } else { (no, yes) };
            route_branch_next(placement, out, &node.id, sx, sy, &upper);
            route_branch_next_lower(placement, out, &node.id, sx, sy, &lower);
        }
        SwitchTopology::BelowAndAbove => {
            let (below, above) = if yes.ty > sy { (yes, no) } else { (no, yes) };
            route_branch_below(placement, out, &node.id, sx, sy, &below);
            route_branch_above(placement, out, &node.id, sx, sy, &above);
        }
        SwitchTopology::NextAndBack => {
            let (next, back) = if yes.tx > sx { (yes, no) } else { (no, yes) };
            route_branch_next(placement, out, &node.id, sx, sy, &next);
            route_branch_back(placement, out, &node.id, sx, sy, &back);
        }
        SwitchTopology::BackAndAbove => {
            let (back, above) = if yes.tx < sx { (yes, no) } else { (no, yes) };
            route_branch_back(placement, out, &node.id, sx, sy, &back);
            route_branch_above(placement, out, &node.id, sx, sy, &above);
        }
    }
}

/// Straight run down the switch's own column to a successor below it.
fn route_branch_below(
    placement: &mut Placement,
    out: &mut Vec<MapPoint>,
    origin: &str,
    sx: i32,
    sy: i32,
    branch: &Branch<'_>,
) {
    out.push(MapPoint::marker(sx, sy + 1, branch.marker, origin));
    emit_vertical(out, sx, sy + 2, branch.ty - 1, ConnectorKind::LineDown, branch.tag, Some(origin));
    placement.set_pointed_at_top(branch.target);
}

/// Out of the switch's right side, down the street column, into the left
/// side of a successor in the next column.
fn route_branch_next(
    placement: &mut Placement,
    out: &mut Vec<MapPoint>,
    origin: &str,
    sx: i32,
    sy: i32,
    branch: &Branch<'_>,
) {
    out.push(MapPoint::connector(
        sx + 1,
        sy,
        ConnectorKind::CornerBottomLeft,
        branch.tag,
        Some(origin),
    ));
    out.push(MapPoint::marker(sx + 1, sy + 1, branch.marker, origin));
    emit_vertical(out, sx + 1, sy + 2, branch.ty - 1, ConnectorKind::LineDown, branch.tag, Some(origin));
    out.push(MapPoint::connector(
        sx + 1,
        branch.ty,
        ConnectorKind::CornerUpRight,
        branch.tag,
        Some(origin),
    ));
    placement.set_pointed_at_left(branch.target);
}

/// The lower of two next-column branches: out of the switch's bottom,
/// around the corner under it, then down the street column like a regular
/// next-column branch.
fn route_branch_next_lower(
    placement: &mut Placement,
    out: &mut Vec<MapPoint>,
    origin: &str,
    sx: i32,
    sy: i32,
    branch: &Branch<'_>,
) {
    out.push(MapPoint::marker(sx, sy + 1, branch.marker, origin));
    out.push(MapPoint::connector(
        sx + 1,
        sy + 1,
        ConnectorKind::CornerBottomLeft,
        branch.tag,
        Some(origin),
    ));
    emit_vertical(out, sx + 1, sy + 2, branch.ty - 1, ConnectorKind::LineDown, branch.tag, Some(origin));
    out.push(MapPoint::connector(
        sx + 1,
        branch.ty,
        ConnectorKind::CornerUpRight,
        branch.tag,
        Some(origin),
    ));
    placement.set_pointed_at_left(branch.target);
}

/// Out of the switch's right side and up the street column, into the right
/// side of a successor above it in the same column.
fn route_branch_above(
    placement: &mut Placement,
    out: &mut Vec<MapPoint>,
    origin: &str,
    sx: i32,
    sy: i32,
    branch: &Branch<'_>,
) {
    out.push(MapPoint::marker(sx + 1, sy, branch.marker, origin));
    emit_vertical(out, sx + 1, branch.ty + 1, sy - 1, ConnectorKind::LineUp, branch.tag, Some(origin));
    out.push(MapPoint::connector(
        sx + 1,
        branch.ty,
        ConnectorKind::CornerBottomLeft,
        branch.tag,
        Some(origin),
    ));
    placement.set_pointed_at_right(branch.target);
}

/// Out of the switch's left side, along the street column to the target's
/// row, then left into the right side of a node in an earlier column.
fn route_branch_back(
    placement: &mut Placement,
    out: &mut Vec<MapPoint>,
    origin: &str,
    sx: i32,
    sy: i32,
    branch: &Branch<'_>,
) {
    out.push(MapPoint::marker(sx - 1, sy, branch.marker, origin));
    if branch.ty < sy {
        emit_vertical(out, sx - 1, branch.ty + 1, sy - 1, ConnectorKind::LineUp, branch.tag, Some(origin));
        out.push(MapPoint::connector(
            sx - 1,
            branch.ty,
            ConnectorKind::CornerBottomLeft,
            branch.tag,
            Some(origin),
        ));
        emit_horizontal(out, branch.tx + 1, sx - 2, branch.ty, ConnectorKind::LineLeft, branch.tag, Some(origin));
    } else if branch.ty > sy {
        emit_vertical(out, sx - 1, sy + 1, branch.ty - 1, ConnectorKind::LineDown, branch.tag, Some(origin));
        out.push(MapPoint::connector(
            sx - 1,
            branch.ty,
            ConnectorKind::CornerUpLeft,
            branch.tag,
            Some(origin),
        ));
        emit_horizontal(out, branch.tx + 1, sx - 2, branch.ty, ConnectorKind::LineLeft, branch.tag, Some(origin));
    } else {
        emit_horizontal(out, branch.tx + 1, sx - 2, branch.ty, ConnectorKind::LineLeft, branch.tag, Some(origin));
    }
    placement.set_pointed_at_right(branch.target);
}

/// Routes a single-successor node to its target.
fn route_plain(
    placement: &mut Placement,
    out: &mut Vec<MapPoint>,
    sx: i32,
    sy: i32,
    target: &str,
    tx: i32,
    ty: i32,
) {
    if ty > sy {
        route_plain_down(placement, out, sx, sy, target, tx, ty);
    } else if ty < sy {
        route_plain_up(placement, out, sx, sy, target, tx, ty);
    } else if tx > sx {
        emit_horizontal(out, sx + 1, tx - 1, ty, ConnectorKind::LineRight, BranchTag::Both, None);
        placement.set_pointed_at_left(target);
    } else {
        emit_horizontal(out, tx + 1, sx - 1, ty, ConnectorKind::LineLeft, BranchTag::Both, None);
        placement.set_pointed_at_right(target);
    }
}

fn route_plain_down(
    placement: &mut Placement,
    out: &mut Vec<MapPoint>,
    sx: i32,
    sy: i32,
    target: &str,
    tx: i32,
    ty: i32,
) {
    if straight_path_blocked(placement, sx, sy, tx, ty) {
        route_plain_detour(placement, out, sx, sy, target, tx, ty);
        return;
    }

    emit_vertical(out, sx, sy + 1, ty - 1, ConnectorKind::LineDown, BranchTag::Both, None);
    if tx == sx {
        placement.set_pointed_at_top(target);
    } else if tx > sx {
        out.push(MapPoint::connector(
            sx,
            ty,
            ConnectorKind::CornerUpRight,
            BranchTag::Both,
            None,
        ));
        emit_horizontal(out, sx + 1, tx - 1, ty, ConnectorKind::LineRight, BranchTag::Both, None);
        placement.set_pointed_at_left(target);
    } else {
        out.push(MapPoint::connector(
            sx,
            ty,
            ConnectorKind::CornerUpLeft,
            BranchTag::Both,
            None,
        ));
        emit_horizontal(out, tx + 1, sx - 1, ty, ConnectorKind::LineLeft, BranchTag::Both, None);
        placement.set_pointed_at_right(target);
    }
}

/// Whether any real node sits on the L-shaped down-then-across path. The
/// cell where the run turns into the target's row carries a corner tile, so
/// it counts as part of the path; only the target's own cell is exempt.
fn straight_path_blocked(placement: &Placement, sx: i32, sy: i32, tx: i32, ty: i32) -> bool {
    let mut y = sy + NODE_STEP;
    while y < ty {
        if placement.is_occupied(sx, y) {
            return true;
        }
        y += NODE_STEP;
    }
    let (lo, hi) = (sx.min(tx), sx.max(tx));
    let mut x = lo;
    while x <= hi {
        if x != tx && placement.is_occupied(x, ty) {
            return true;
        }
        x += NODE_STEP;
    }
    false
}

/// Detours around obstructing nodes without ever re-entering a node row:
/// right along the street row under the source, down the first free street
/// column past everything placed between the two rows, back along the
/// street row above the target and in through its top.
fn route_plain_detour(
    placement: &mut Placement,
    out: &mut Vec<MapPoint>,
    sx: i32,
    sy: i32,
    target: &str,
    tx: i32,
    ty: i32,
) {
    let street = ty - 1;
    if street == sy + 1 {
        // Adjacent node rows share a single street row, so the run just
        // slides across it to the target's column.
        if tx > sx {
            out.push(MapPoint::connector(
                sx,
                street,
                ConnectorKind::CornerUpRight,
                BranchTag::Both,
                None,
            ));
            emit_horizontal(out, sx + 1, tx - 1, street, ConnectorKind::LineRight, BranchTag::Both, None);
            out.push(MapPoint::connector(
                tx,
                street,
                ConnectorKind::CornerBottomLeft,
                BranchTag::Both,
                None,
            ));
        } else {
            out.push(MapPoint::connector(
                sx,
                street,
                ConnectorKind::CornerUpLeft,
                BranchTag::Both,
                None,
            ));
            emit_horizontal(out, tx + 1, sx - 1, street, ConnectorKind::LineLeft, BranchTag::Both, None);
            out.push(MapPoint::connector(
                tx,
                street,
                ConnectorKind::CornerBottomRight,
                BranchTag::Both,
                None,
            ));
        }
        placement.set_pointed_at_top(target);
        return;
    }

    let rightmost = placement.max_column_in_rows(sy, ty).unwrap_or(sx);
    let detour = rightmost.max(sx).max(tx) + 1;

    out.push(MapPoint::connector(
        sx,
        sy + 1,
        ConnectorKind::CornerUpRight,
        BranchTag::Both,
        None,
    ));
    emit_horizontal(out, sx + 1, detour - 1, sy + 1, ConnectorKind::LineRight, BranchTag::Both, None);
    out.push(MapPoint::connector(
        detour,
        sy + 1,
        ConnectorKind::CornerBottomLeft,
        BranchTag::Both,
        None,
    ));
    emit_vertical(out, detour, sy + 2, street - 1, ConnectorKind::LineDown, BranchTag::Both, None);
    out.push(MapPoint::connector(
        detour,
        street,
        ConnectorKind::CornerUpLeft,
        BranchTag::Both,
        None,
    ));
    emit_horizontal(out, tx + 1, detour - 1, street, ConnectorKind::LineLeft, BranchTag::Both, None);
    out.push(MapPoint::connector(
        tx,
        street,
        ConnectorKind::CornerBottomRight,
        BranchTag::Both,
        None,
    ));
    placement.set_pointed_at_top(target);
}

/// Routes upward through the street row above the source and a street
/// column beside the target.
fn route_plain_up(
    placement: &mut Placement,
    out: &mut Vec<MapPoint>,
    sx: i32,
    sy: i32,
    target: &str,
    tx: i32,
    ty: i32,
) {
    if tx < sx {
        let tc = tx + 1;
        out.push(MapPoint::connector(
            sx,
            sy - 1,
            ConnectorKind::CornerBottomLeft,
            BranchTag::Both,
            None,
        ));
        emit_horizontal(out, tc + 1, sx - 1, sy - 1, ConnectorKind::LineLeft, BranchTag::Both, None);
        out.push(MapPoint::connector(
            tc,
            sy - 1,
            ConnectorKind::CornerUpRight,
            BranchTag::Both,
            None,
        ));
        emit_vertical(out, tc, ty + 1, sy - 2, ConnectorKind::LineUp, BranchTag::Both, None);
        out.push(MapPoint::connector(
            tc,
            ty,
            ConnectorKind::CornerBottomLeft,
            BranchTag::Both,
            None,
        ));
        placement.set_pointed_at_right(target);
    } else if tx > sx {
        let tc = tx - 1;
        out.push(MapPoint::connector(
            sx,
            sy - 1,
            ConnectorKind::CornerBottomRight,
            BranchTag::Both,
            None,
        ));
        emit_horizontal(out, sx + 1, tc - 1, sy - 1, ConnectorKind::LineRight, BranchTag::Both, None);
        out.push(MapPoint::connector(
            tc,
            sy - 1,
            ConnectorKind::CornerUpLeft,
            BranchTag::Both,
            None,
        ));
        emit_vertical(out, tc, ty + 1, sy - 2, ConnectorKind::LineUp, BranchTag::Both, None);
        out.push(MapPoint::connector(
            tc,
            ty,
            ConnectorKind::CornerBottomRight,
            BranchTag::Both,
            None,
        ));
        placement.set_pointed_at_left(target);
    } else {
        // Same column: the run has to sidestep into the street column on
        // the right before climbing past the source.
        let tc = sx + 1;
        out.push(MapPoint::connector(
            sx,
            sy - 1,
            ConnectorKind::CornerBottomRight,
            BranchTag::Both,
            None,
        ));
        out.push(MapPoint::connector(
            tc,
            sy - 1,
            ConnectorKind::CornerUpLeft,
            BranchTag::Both,
            None,
        ));
        emit_vertical(out, tc, ty + 1, sy - 2, ConnectorKind::LineUp, BranchTag::Both, None);
        out.push(MapPoint::connector(
            tc,
            ty,
            ConnectorKind::CornerBottomLeft,
            BranchTag::Both,
            None,
        ));
        placement.set_pointed_at_right(target);
    }
}

/// Emits a run of vertical line tiles over `y_from..=y_to`. The glyph
/// follows the flow, so `kind` is `LineDown` or `LineUp`; tiles come out
/// in flow order, which for `LineUp` means descending y last-to-first.
fn emit_vertical(
    out: &mut Vec<MapPoint>,
    x: i32,
    y_from: i32,
    y_to: i32,
    kind: ConnectorKind,
    tag: BranchTag,
    origin: Option<&str>,
) {
    let run = y_from..=y_to;
    if kind == ConnectorKind::LineUp {
        for y in run.rev() {
            out.push(MapPoint::connector(x, y, kind, tag, origin));
        }
    } else {
        for y in run {
            out.push(MapPoint::connector(x, y, kind, tag, origin));
        }
    }
}

/// Emits a run of horizontal line tiles over `x_from..=x_to` with `kind`
/// either `LineLeft` or `LineRight`, in flow order like [`emit_vertical`].
fn emit_horizontal(
    out: &mut Vec<MapPoint>,
    x_from: i32,
    x_to: i32,
    y: i32,
    kind: ConnectorKind,
    tag: BranchTag,
    origin: Option<&str>,
) {
    let run = x_from..=x_to;
    if kind == ConnectorKind::LineLeft {
        for x in run.rev() {
            out.push(MapPoint::connector(x, y, kind, tag, origin));
        }
    } else {
        for x in run {
            out.push(MapPoint::connector(x, y, kind, tag, origin));
        }
    }
}
