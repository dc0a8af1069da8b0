//! Dock layout engine
//!
//! `DockLayout` arranges panels inside a single container. The first panel
//! added is the base panel; every other panel is docked to a side of the
//! layout and kept flush against the panels placed before it.
//!
//! ## Architecture
//!
//! - `record`: `DockRecord` placement state and the ordered `RecordStore`
//! - `solver`: base resizing, position resolution and size limits
//! - `insert`: snap search for panels being dragged into the layout
//!
//! Container geometry flows in through `DockLayout::set_geometry`; resulting
//! rectangles flow out through `DockContent::set_geometry`.

mod insert;
mod record;
mod solver;

use std::collections::HashMap;

use serde::Serialize;

use crate::config::DockEntry;
use crate::geometry::{Rect, Size};
use crate::panel::{DockContent, DockSide, SizePolicy};

pub use insert::{InsertLocation, SNAP_DISTANCE};
pub use record::{DockRecord, RecordStore, HIDDEN_POS, MAX_EXTENT};
pub use solver::{Pass, SizeLimits, PROBE_EXTENT};

/// Container size reported before any geometry has been set
pub const PREFERRED_SIZE: Size = Size::new(700, 500);

/// Where one record ended up after the last layout pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub id: String,
    pub side: DockSide,
    pub distance: i32,
    /// Absolute rectangle, `None` for hidden panels
    pub rect: Option<Rect>,
}

/// Layout manager for dockable panels
#[derive(Debug, Default)]
pub struct DockLayout {
    store: RecordStore,
    /// Cached size limits, `None` when a structural change invalidated them
    limits: Option<SizeLimits>,
    /// Last container rectangle, reapplied on relayout
    geometry: Option<Rect>,
    layout_size: Size,
}

impl DockLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn record(&self, index: usize) -> Option<&DockRecord> {
        self.store.get(index)
    }

    pub fn records(&self) -> impl Iterator<Item = &DockRecord> {
        self.store.iter()
    }

    pub fn content(&self, index: usize) -> Option<&dyn DockContent> {
        self.store.get(index).map(|r| r.content())
    }

    /// Index of the panel with the given id
    pub fn position(&self, id: &str) -> Option<usize> {
        self.store.iter().position(|r| r.content().id() == id)
    }

    /// Container rectangle last passed to `set_geometry`
    pub fn geometry(&self) -> Option<Rect> {
        self.geometry
    }

    /// Size occupied by the visible panels after the last layout pass
    pub fn layout_size(&self) -> Size {
        self.layout_size
    }

    /// Preferred container size
    pub fn size_hint(&self) -> Size {
        PREFERRED_SIZE
    }

    /// Smallest container size the current panels fit in
    pub fn minimum_size(&mut self) -> Size {
        self.limits().map(|l| l.minimum).unwrap_or_default()
    }

    /// Absolute rectangle of a visible panel
    pub fn placement(&self, index: usize) -> Option<Rect> {
        let record = self.store.get(index)?;
        if !record.is_visible() {
            return None;
        }
        let origin = self.geometry.unwrap_or_default();
        Some(record.rect().translated(origin.x, origin.y))
    }

    /// Placement of every record, in record order
    pub fn placements(&self) -> Vec<Placement> {
        (0..self.store.len())
            .filter_map(|i| {
                let record = self.store.get(i)?;
                Some(Placement {
                    id: record.content().id().to_string(),
                    side: record.side(),
                    distance: record.distance(),
                    rect: self.placement(i),
                })
            })
            .collect()
    }

    /// Find where a panel dragged to `rect` would snap
    ///
    /// `rect` uses the same coordinates as the rectangles handed to the
    /// panels.
    pub fn insert_location(&self, rect: &Rect, policy: SizePolicy) -> Option<InsertLocation> {
        let origin = self.geometry.unwrap_or_default();
        let local = rect.translated(-origin.x, -origin.y);
        self.store
            .insert_location(&local, policy)
            .map(|location| InsertLocation {
                rect: location.rect.translated(origin.x, origin.y),
                ..location
            })
    }

    /// Dock a panel dropped at `rect`
    ///
    /// Returns the index the panel was inserted at, or hands the panel back
    /// if the drop location is not close enough to any edge.
    pub fn add_widget(
        &mut self,
        mut content: Box<dyn DockContent>,
        rect: &Rect,
    ) -> Result<usize, Box<dyn DockContent>> {
        let Some(location) = self.insert_location(rect, content.size_policy()) else {
            tracing::debug!("No snap location for {} at {}", content.id(), rect);
            return Err(content);
        };

        let origin = self.geometry.unwrap_or_default();
        let base = self.store.base().map(|b| b.rect()).unwrap_or_default();
        let local = location.rect.translated(-origin.x, -origin.y);
        let distance = match location.side {
            DockSide::Top | DockSide::Bottom => local.x - base.x,
            DockSide::Left | DockSide::Right => local.y - base.y,
        };

        tracing::debug!(
            "Docking {} at index {} on side {} (distance {}, rect {})",
            content.id(),
            location.index,
            location.side,
            distance,
            location.rect
        );

        content.set_visible(true);
        let index = self.add_item(
            content,
            Some(location.index),
            location.side,
            distance,
            location.rect.width,
            location.rect.height,
        );
        self.relayout();
        Ok(index)
    }

    /// Append a panel with known placement, without searching
    ///
    /// A width or height of -1 means the panel's size hint is used on every
    /// pass.
    pub fn add_widget_at(
        &mut self,
        content: Box<dyn DockContent>,
        side: DockSide,
        distance: i32,
        width: i32,
        height: i32,
    ) -> usize {
        self.add_item(content, None, side, distance, width, height)
    }

    fn add_item(
        &mut self,
        content: Box<dyn DockContent>,
        index: Option<usize>,
        side: DockSide,
        distance: i32,
        width: i32,
        height: i32,
    ) -> usize {
        let index = self
            .store
            .add(content, index, side, distance, width, height);
        self.invalidate();
        index
    }

    /// Remove a panel and hand it back to the caller
    pub fn take_at(&mut self, index: usize) -> Option<Box<dyn DockContent>> {
        let content = self.store.take_at(index)?;
        if index == 0 {
            self.store.promote_base();
        }
        tracing::debug!("Removed {} from index {}", content.id(), index);
        self.changed();
        Some(content)
    }

    /// Show or hide a panel; returns false if there is no such index
    pub fn set_visible(&mut self, index: usize, visible: bool) -> bool {
        let Some(record) = self.store.records.get_mut(index) else {
            return false;
        };
        record.content.set_visible(visible);
        self.changed();
        true
    }

    /// Drop the cached size limits
    pub fn invalidate(&mut self) {
        self.limits = None;
    }

    /// Notify the layout that a panel's size or visibility changed
    pub fn changed(&mut self) {
        self.invalidate();
        self.relayout();
    }

    /// Re-run layout with the last container geometry
    pub fn relayout(&mut self) {
        if let Some(rect) = self.geometry {
            self.set_geometry(rect);
        }
    }

    fn limits(&mut self) -> Option<SizeLimits> {
        if self.limits.is_none() {
            self.limits = self.store.size_limits();
        }
        self.limits
    }

    /// Lay out all panels inside `rect`
    ///
    /// The base panel is sized so the whole layout matches `rect`. Overlap
    /// resolution can make the layout size jump, so a second pass corrects
    /// whatever difference the first one left.
    pub fn set_geometry(&mut self, rect: Rect) {
        self.geometry = Some(rect);
        let Some(limits) = self.limits() else {
            return;
        };

        let before = tracing::enabled!(tracing::Level::TRACE)
            .then(|| crate::tracing::LayoutSnapshot::capture(self));

        let base = self.store.base_size();
        let dx = limits.base_threshold.width + rect.width - limits.minimum.width - base.width;
        let dy = limits.base_threshold.height + rect.height - limits.minimum.height - base.height;
        self.store.size_move(dx, dy);
        let mut size = self.store.arrange(Pass::Place);

        if size != rect.size() {
            tracing::debug!(
                "Layout {}x{} does not match container {}x{}, correcting",
                size.width,
                size.height,
                rect.width,
                rect.height
            );
            self.store
                .size_move(rect.width - size.width, rect.height - size.height);
            size = self.store.arrange(Pass::Place);
        }
        self.layout_size = size;

        for record in self.store.records.iter_mut() {
            if record.content.is_visible() {
                let placed = record.rect().translated(rect.x, rect.y);
                record.content.set_geometry(placed);
            }
        }

        if let Some(before) = before {
            let after = crate::tracing::LayoutSnapshot::capture(self);
            if let Some(diff) = before.diff(&after) {
                tracing::trace!("Layout changed: {}", diff);
            }
        }
    }

    /// Current configuration, one entry per record
    pub fn entries(&self) -> Vec<DockEntry> {
        self.store.iter().map(DockEntry::from_record).collect()
    }

    /// Current configuration as text lines
    pub fn config_lines(&self) -> Vec<String> {
        self.store
            .iter()
            .map(|r| DockEntry::from_record(r).to_string())
            .collect()
    }

    /// Reattach saved geometry to freshly constructed panels
    ///
    /// Each entry takes the panel with the matching id out of `contents` and
    /// appends it with the saved side, distance and size. Entries without a
    /// matching panel are skipped. Returns the number of panels restored.
    pub fn restore(
        &mut self,
        entries: &[DockEntry],
        contents: &mut HashMap<String, Box<dyn DockContent>>,
    ) -> usize {
        let mut restored = 0;
        for entry in entries {
            let Some(mut content) = contents.remove(&entry.id) else {
                tracing::warn!("No panel with id '{}' to restore, skipping", entry.id);
                continue;
            };
            content.set_visible(entry.visible);
            self.add_widget_at(
                content,
                entry.side,
                entry.distance,
                entry.width.unwrap_or(-1),
                entry.height.unwrap_or(-1),
            );
            restored += 1;
        }
        tracing::info!("Restored {} of {} dock entries", restored, entries.len());
        self.relayout();
        restored
    }
}
