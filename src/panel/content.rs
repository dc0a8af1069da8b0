//! Capability interface for dockable panels
//!
//! The layout never looks inside a panel. It only asks for sizes, sizing
//! policy, visibility and an identifier, and hands back a rectangle once per
//! layout pass.

use crate::geometry::{Rect, Size};

use super::dock::Axis;

/// Whether a panel may be stretched along one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Policy {
    /// Always use the size hint
    Fixed,
    /// Accepts any size at or above its minimum
    #[default]
    Resizable,
}

/// Per-axis sizing policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizePolicy {
    pub horizontal: Policy,
    pub vertical: Policy,
}

impl SizePolicy {
    pub const FIXED: SizePolicy = SizePolicy::new(Policy::Fixed, Policy::Fixed);
    pub const RESIZABLE: SizePolicy = SizePolicy::new(Policy::Resizable, Policy::Resizable);

    pub const fn new(horizontal: Policy, vertical: Policy) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    pub fn policy(&self, axis: Axis) -> Policy {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical,
        }
    }

    pub fn can_resize(&self, axis: Axis) -> bool {
        self.policy(axis) != Policy::Fixed
    }
}

/// A panel hosted by the dock layout
pub trait DockContent {
    /// Stable identifier used to reattach saved geometry after restart
    fn id(&self) -> &str;

    /// Preferred size
    fn size_hint(&self) -> Size;

    /// Smallest usable size
    fn minimum_size(&self) -> Size;

    fn size_policy(&self) -> SizePolicy;

    fn is_visible(&self) -> bool;

    fn set_visible(&mut self, visible: bool);

    /// Called once per layout pass for visible panels only
    fn set_geometry(&mut self, rect: Rect);
}

impl std::fmt::Debug for dyn DockContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DockContent")
            .field("id", &self.id())
            .field("visible", &self.is_visible())
            .finish()
    }
}
