//! Dock records and the ordered store that owns them

use crate::geometry::Rect;
use crate::panel::{Axis, DockContent, DockSide};

/// Position given to hidden panels, far outside any container
pub const HIDDEN_POS: i32 = -10000;

/// Largest distance or explicit size a record accepts, in either direction
///
/// Keeps every sum the solver forms well inside `i32`.
pub const MAX_EXTENT: i32 = 1 << 20;

/// Placement state for one managed panel
#[derive(Debug)]
pub struct DockRecord {
    pub(crate) content: Box<dyn DockContent>,
    pub(crate) side: DockSide,
    /// Offset along the docking edge from the base panel's origin
    pub(crate) distance: i32,
    /// Distance still owed after a shrink clamped `distance` at zero
    pub(crate) dist_extra: i32,
    pub(crate) left: i32,
    pub(crate) top: i32,
    pub(crate) width: i32,
    pub(crate) height: i32,
    pub(crate) use_hint_width: bool,
    pub(crate) use_hint_height: bool,
}

impl DockRecord {
    pub fn content(&self) -> &dyn DockContent {
        self.content.as_ref()
    }

    pub fn side(&self) -> DockSide {
        self.side
    }

    pub fn distance(&self) -> i32 {
        self.distance
    }

    pub fn dist_extra(&self) -> i32 {
        self.dist_extra
    }

    /// Explicit width, or `None` when the size hint is used
    pub fn explicit_width(&self) -> Option<i32> {
        (!self.use_hint_width).then_some(self.width)
    }

    /// Explicit height, or `None` when the size hint is used
    pub fn explicit_height(&self) -> Option<i32> {
        (!self.use_hint_height).then_some(self.height)
    }

    /// Rectangle from the last layout pass
    pub fn rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.width, self.height)
    }

    pub fn is_visible(&self) -> bool {
        self.content.is_visible()
    }

    /// Apply a base size change to this record's distance
    ///
    /// Distances never go negative. A shrink that would push the distance
    /// below zero is banked in `dist_extra` and paid back on later growth
    /// before the distance itself increases again.
    pub(crate) fn shift_distance(&mut self, delta: i32) {
        if self.distance <= 0 && self.dist_extra == 0 {
            return;
        }
        self.distance += delta;
        if self.distance < 0 {
            self.dist_extra += self.distance;
            self.distance = 0;
        } else if self.dist_extra < 0 {
            if -self.dist_extra <= self.distance {
                self.distance += self.dist_extra;
                self.dist_extra = 0;
            } else {
                self.dist_extra += self.distance;
                self.distance = 0;
            }
        }
    }
}

/// Ordered records; index 0 is the base panel
///
/// Order matters: records are resolved against the ones before them.
#[derive(Debug, Default)]
pub struct RecordStore {
    pub(crate) records: Vec<DockRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&DockRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DockRecord> {
        self.records.iter()
    }

    pub(crate) fn base(&self) -> Option<&DockRecord> {
        self.records.first()
    }

    /// Insert a record at `index`, or append when `index` is out of range
    ///
    /// Explicit sizes are only honoured for axes the panel can be resized
    /// along; the first record becomes the base and always gets an explicit
    /// size, taken from its hint when none was given. Distances and sizes are
    /// clamped to `MAX_EXTENT`. Returns the index the record ended up at.
    pub fn add(
        &mut self,
        content: Box<dyn DockContent>,
        index: Option<usize>,
        side: DockSide,
        distance: i32,
        width: i32,
        height: i32,
    ) -> usize {
        let policy = content.size_policy();
        let mut record = DockRecord {
            content,
            side,
            distance: distance.clamp(-MAX_EXTENT, MAX_EXTENT),
            dist_extra: 0,
            left: 0,
            top: 0,
            width: -1,
            height: -1,
            use_hint_width: true,
            use_hint_height: true,
        };

        if policy.can_resize(Axis::Horizontal) && width > 0 {
            record.width = width.min(MAX_EXTENT);
            record.use_hint_width = false;
        }
        if policy.can_resize(Axis::Vertical) && height > 0 {
            record.height = height.min(MAX_EXTENT);
            record.use_hint_height = false;
        }

        if self.records.is_empty() {
            let hint = record.content.size_hint();
            if record.width == -1 {
                record.width = hint.width;
            }
            if record.height == -1 {
                record.height = hint.height;
            }
            record.use_hint_width = false;
            record.use_hint_height = false;
        }

        match index {
            Some(i) if i < self.records.len() => {
                self.records.insert(i, record);
                i
            }
            _ => {
                self.records.push(record);
                self.records.len() - 1
            }
        }
    }

    /// Give the current first record the explicit size a base needs
    pub(crate) fn promote_base(&mut self) {
        let Some(base) = self.records.first_mut() else {
            return;
        };
        let hint = base.content.size_hint();
        if base.use_hint_width {
            base.width = hint.width;
            base.use_hint_width = false;
        }
        if base.use_hint_height {
            base.height = hint.height;
            base.use_hint_height = false;
        }
        base.distance = 0;
        base.dist_extra = 0;
    }

    /// Detach a record, handing its content back to the caller
    pub fn take_at(&mut self, index: usize) -> Option<Box<dyn DockContent>> {
        if index >= self.records.len() {
            return None;
        }
        Some(self.records.remove(index).content)
    }
}
