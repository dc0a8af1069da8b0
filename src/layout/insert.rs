//! Insertion-point search
//!
//! Finds where a dragged panel should snap. Every visible record is tried on
//! each of its four sides; candidate positions along an edge are taken from
//! the edges of panels that share that edge. A candidate may not overlap any
//! panel before the target; later panels slide out past it on the next
//! arrange. The candidate closest to the drag rectangle wins, first one found
//! on ties.

use serde::Serialize;

use crate::geometry::Rect;
use crate::panel::{Axis, DockSide, SizePolicy};

use super::record::{DockRecord, RecordStore};

/// How close an edge must be to snap, in logical units
pub const SNAP_DISTANCE: i32 = 16;

/// Weight of the gap across the edge relative to the offset along it
const EDGE_GAP_WEIGHT: i32 = 8;

/// A snap target for a dragged panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InsertLocation {
    /// Corrected rectangle for the dragged panel
    pub rect: Rect,
    /// Record index the new panel should be inserted at
    pub index: usize,
    pub side: DockSide,
}

struct Best {
    distance: i32,
    location: InsertLocation,
}

impl RecordStore {
    /// Find the best snap location for `rect`, or `None` if nothing is close
    pub fn insert_location(&self, rect: &Rect, policy: SizePolicy) -> Option<InsertLocation> {
        let mut best: Option<Best> = None;

        for (i, d) in self.records.iter().enumerate() {
            if !d.is_visible() {
                continue;
            }
            for side in DockSide::ALL {
                if i > 0 && d.side == side.opposite() {
                    continue;
                }
                self.check_side(i, side, rect, policy, &mut best);
            }
        }

        best.map(|b| b.location)
    }

    /// Evaluate placements of `rect` against `side` of record `i`
    fn check_side(
        &self,
        i: usize,
        side: DockSide,
        rect: &Rect,
        policy: SizePolicy,
        best: &mut Option<Best>,
    ) {
        let d = &self.records[i];
        let (d_start, d_len) = along(&d.rect(), side);
        let (start, len) = along(rect, side);
        let end = start + len - 1;
        if start > d_start + d_len - SNAP_DISTANCE || end < d_start + SNAP_DISTANCE {
            return;
        }

        let gap = edge_gap(rect, &d.rect(), side);
        if gap.abs() >= SNAP_DISTANCE {
            return;
        }
        let dist = EDGE_GAP_WEIGHT * gap.abs();

        let points = self.side_points(i, side);
        let across = across_origin(rect, &d.rect(), side);
        let thickness = across_len(rect, side);

        let mut consider = |offset: i32, pos: i32, span: i32| {
            if offset >= SNAP_DISTANCE {
                return;
            }
            if best.as_ref().is_some_and(|b| dist + offset >= b.distance) {
                return;
            }
            let candidate = build_rect(side, pos, span, across, thickness);
            if overlaps_any(&candidate, &self.records[..i]) {
                return;
            }
            *best = Some(Best {
                distance: dist + offset,
                location: InsertLocation {
                    rect: candidate,
                    index: i + 1,
                    side,
                },
            });
        };

        for pair in points.windows(2) {
            // aligned with the start of the segment
            consider((pair[0] - start).abs(), pair[0], len);
            // aligned with the end of the segment
            consider((pair[1] - end).abs(), pair[1] - len, len);
        }

        if policy.can_resize(side.axis()) {
            let mid = start + len / 2;
            for a in 1..points.len() {
                for b in 0..a {
                    let center = (points[a] + points[b]) / 2;
                    consider((center - mid).abs(), points[b], points[a] - points[b]);
                }
            }
        }
    }

    /// Sorted, unique along-edge coordinates on `side` of record `i`
    ///
    /// Includes both ends of every earlier record sharing that edge and of
    /// every later record resting flush against one of those.
    fn side_points(&self, i: usize, side: DockSide) -> Vec<i32> {
        let edge = edge_coord(&self.records[i].rect(), side);
        let mut points = Vec::new();
        for d2 in self.records[..=i].iter().filter(|r| r.is_visible()) {
            let r2 = d2.rect();
            if edge_coord(&r2, side) != edge {
                continue;
            }
            push_span(&mut points, &r2, side);
            for d3 in self.records[i + 1..].iter().filter(|r| r.is_visible()) {
                let r3 = d3.rect();
                if edge_coord(&r3, side.opposite()) == edge_coord(&r2, side) {
                    push_span(&mut points, &r3, side);
                }
            }
        }
        points.sort_unstable();
        points.dedup();
        points
    }
}

/// Start and length of `rect` along the edge of `side`
fn along(rect: &Rect, side: DockSide) -> (i32, i32) {
    match side.axis() {
        Axis::Horizontal => (rect.x, rect.width),
        Axis::Vertical => (rect.y, rect.height),
    }
}

fn across_len(rect: &Rect, side: DockSide) -> i32 {
    match side.axis() {
        Axis::Horizontal => rect.height,
        Axis::Vertical => rect.width,
    }
}

/// Coordinate of the given edge of `rect`
fn edge_coord(rect: &Rect, side: DockSide) -> i32 {
    match side {
        DockSide::Top => rect.y,
        DockSide::Bottom => rect.bottom(),
        DockSide::Left => rect.x,
        DockSide::Right => rect.right(),
    }
}

/// Distance between the dragged rectangle's facing edge and the target edge
///
/// The dragged rectangle's far edges are measured on its last row/column.
fn edge_gap(rect: &Rect, target: &Rect, side: DockSide) -> i32 {
    match side {
        DockSide::Top => rect.bottom() - 1 - target.y,
        DockSide::Bottom => rect.y - target.bottom(),
        DockSide::Left => rect.right() - 1 - target.x,
        DockSide::Right => rect.x - target.right(),
    }
}

/// Where a panel docked on `side` of `target` starts across the edge
fn across_origin(rect: &Rect, target: &Rect, side: DockSide) -> i32 {
    match side {
        DockSide::Top => target.y - rect.height,
        DockSide::Bottom => target.bottom(),
        DockSide::Left => target.x - rect.width,
        DockSide::Right => target.right(),
    }
}

fn build_rect(side: DockSide, pos: i32, span: i32, across: i32, thickness: i32) -> Rect {
    match side.axis() {
        Axis::Horizontal => Rect::new(pos, across, span, thickness),
        Axis::Vertical => Rect::new(across, pos, thickness, span),
    }
}

fn push_span(points: &mut Vec<i32>, rect: &Rect, side: DockSide) {
    let (start, len) = along(rect, side);
    points.push(start);
    points.push(start + len);
}

fn overlaps_any(candidate: &Rect, records: &[DockRecord]) -> bool {
    records
        .iter()
        .filter(|r| r.is_visible())
        .any(|r| candidate.intersects(&r.rect()))
}
