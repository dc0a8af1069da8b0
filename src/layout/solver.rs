//! Geometry solver
//!
//! Positions are computed from scratch every pass: the base panel sits at the
//! origin, every other panel is placed against the base on its dock side and
//! then pushed outwards past earlier panels it would overlap. Coordinates may
//! go negative during the pass and are shifted back afterwards.

use crate::geometry::Size;
use crate::panel::DockSide;

use super::record::{DockRecord, RecordStore, HIDDEN_POS};

/// Base size used by the large-size probes when measuring limits
pub const PROBE_EXTENT: i32 = 2048;

/// What `arrange` does with the result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    /// Measure the bounding size only; positions stay in base coordinates
    Measure,
    /// Shift visible panels so the layout starts at (0, 0)
    Place,
}

/// Cached size limits of a layout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SizeLimits {
    /// Smallest container the panels fit in
    pub minimum: Size,
    /// Base panel size at which the minimum container size starts to bind
    pub base_threshold: Size,
}

impl RecordStore {
    /// Grow or shrink the base panel, carrying the change into the distances
    /// of panels docked along the affected edges
    pub fn size_move(&mut self, dx: i32, dy: i32) {
        let Some((base, rest)) = self.records.split_first_mut() else {
            return;
        };
        for record in rest {
            match record.side {
                DockSide::Top | DockSide::Bottom => record.shift_distance(dx),
                DockSide::Left | DockSide::Right => record.shift_distance(dy),
            }
        }
        base.width += dx;
        base.height += dy;
    }

    /// Compute positions for every record and return the bounding size
    pub fn arrange(&mut self, pass: Pass) -> Size {
        let Some(base) = self.records.first_mut() else {
            return Size::default();
        };
        base.left = 0;
        base.top = 0;
        let (w, h) = (base.width, base.height);

        let mut dx = 0;
        let mut dy = 0;
        for i in 1..self.records.len() {
            let (placed, rest) = self.records.split_at_mut(i);
            let record = &mut rest[0];

            if !record.is_visible() {
                record.left = HIDDEN_POS;
                record.top = HIDDEN_POS;
                continue;
            }

            let hint = record.content.size_hint();
            if record.use_hint_width {
                record.width = hint.width;
            }
            if record.use_hint_height {
                record.height = hint.height;
            }

            place_against_base(record, w, h);
            slide_past(record, &placed[1..]);

            dx = dx.min(record.left);
            dy = dy.min(record.top);
        }

        let mut size = Size::default();
        match pass {
            Pass::Measure => {
                for (i, record) in self.records.iter().enumerate() {
                    if i > 0 && !record.is_visible() {
                        continue;
                    }
                    size.width = size.width.max(record.left - dx + record.width);
                    size.height = size.height.max(record.top - dy + record.height);
                }
            }
            Pass::Place => {
                for record in self.records.iter_mut().filter(|r| r.is_visible()) {
                    record.left -= dx;
                    record.top -= dy;
                    size.width = size.width.max(record.left + record.width);
                    size.height = size.height.max(record.top + record.height);
                }
            }
        }
        size
    }

    /// Measure the minimum container size with three probes
    ///
    /// The base panel is shrunk to its minimum, then made very wide, then very
    /// tall. The base size is restored afterwards. Returns `None` when the
    /// store is empty.
    pub fn size_limits(&mut self) -> Option<SizeLimits> {
        let base = self.base()?;
        let stored = Size::new(base.width, base.height);
        let min = base.content.minimum_size();

        self.size_move(min.width - stored.width, min.height - stored.height);
        let small = self.arrange(Pass::Measure);

        let current = self.base_size();
        self.size_move(PROBE_EXTENT - current.width, 0);
        let wide = self.arrange(Pass::Measure);

        let current = self.base_size();
        self.size_move(min.width - current.width, PROBE_EXTENT - current.height);
        let tall = self.arrange(Pass::Measure);

        let limits = SizeLimits {
            minimum: Size::new(
                small.width.max(tall.width),
                small.height.max(wide.height),
            ),
            base_threshold: Size::new(
                PROBE_EXTENT - (wide.width - small.width),
                PROBE_EXTENT - (tall.height - small.height),
            ),
        };

        let current = self.base_size();
        self.size_move(stored.width - current.width, stored.height - current.height);

        tracing::debug!(
            "size limits: min {}x{}, base threshold {}x{} (probes {:?} {:?} {:?})",
            limits.minimum.width,
            limits.minimum.height,
            limits.base_threshold.width,
            limits.base_threshold.height,
            small,
            wide,
            tall
        );
        Some(limits)
    }

    pub(crate) fn base_size(&self) -> Size {
        self.base()
            .map(|b| Size::new(b.width, b.height))
            .unwrap_or_default()
    }
}

/// Initial position on the record's side of a `w` x `h` base panel
///
/// A distance that keeps the panel within the base edge puts it outside the
/// base; a distance past either end tucks it against the far edge instead.
fn place_against_base(record: &mut DockRecord, w: i32, h: i32) {
    let dist = record.distance;
    match record.side {
        DockSide::Top => {
            record.left = dist;
            record.top = if dist >= w || dist + record.width <= 0 {
                h - record.height
            } else {
                -record.height
            };
        }
        DockSide::Bottom => {
            record.left = dist;
            record.top = if dist >= w || dist + record.width <= 0 {
                0
            } else {
                h
            };
        }
        DockSide::Left => {
            record.left = if dist >= h || dist + record.height <= 0 {
                w - record.width
            } else {
                -record.width
            };
            record.top = dist;
        }
        DockSide::Right => {
            record.left = if dist >= h || dist + record.height <= 0 {
                0
            } else {
                w
            };
            record.top = dist;
        }
    }
}

/// Push the record outwards past every earlier panel it overlaps, in order
fn slide_past(record: &mut DockRecord, earlier: &[DockRecord]) {
    for other in earlier.iter().filter(|r| r.is_visible()) {
        if !record.rect().intersects(&other.rect()) {
            continue;
        }
        match record.side {
            DockSide::Top => record.top = other.top - record.height,
            DockSide::Bottom => record.top = other.top + other.height,
            DockSide::Left => record.left = other.left - record.width,
            DockSide::Right => record.left = other.left + other.width,
        }
    }
}
