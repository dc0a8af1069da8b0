//! Placeholder panel for headless layouts
//!
//! Carries the sizing behaviour of a panel kind and remembers the last
//! rectangle the layout assigned to it.

use crate::geometry::{Rect, Size};
use crate::panel::{DockContent, SizePolicy};

use super::PanelKind;

/// Placeholder panel state
#[derive(Debug, Clone)]
pub struct PlaceholderPanel {
    pub id: String,
    pub kind: PanelKind,
    pub hint: Size,
    pub minimum: Size,
    pub policy: SizePolicy,
    pub visible: bool,
    /// Last rectangle set by the layout
    pub geometry: Option<Rect>,
}

impl PlaceholderPanel {
    pub fn new(kind: PanelKind) -> Self {
        Self::with_id(kind, kind.default_id())
    }

    pub fn with_id(kind: PanelKind, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            hint: kind.size_hint(),
            minimum: kind.minimum_size(),
            policy: kind.size_policy(),
            visible: true,
            geometry: None,
        }
    }

    pub fn hint(mut self, hint: Size) -> Self {
        self.hint = hint;
        self
    }

    pub fn minimum(mut self, minimum: Size) -> Self {
        self.minimum = minimum;
        self
    }

    pub fn policy(mut self, policy: SizePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Get the title for this placeholder
    pub fn title(&self) -> &'static str {
        self.kind.title()
    }
}

impl DockContent for PlaceholderPanel {
    fn id(&self) -> &str {
        &self.id
    }

    fn size_hint(&self) -> Size {
        self.hint
    }

    fn minimum_size(&self) -> Size {
        self.minimum
    }

    fn size_policy(&self) -> SizePolicy {
        self.policy
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn set_geometry(&mut self, rect: Rect) {
        self.geometry = Some(rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_kind_defaults() {
        let panel = PlaceholderPanel::new(PanelKind::MainMemory);
        assert_eq!(panel.id(), "memory");
        assert_eq!(panel.title(), "Main memory");
        assert_eq!(panel.size_hint(), PanelKind::MainMemory.size_hint());
        assert!(panel.is_visible());
        assert_eq!(panel.geometry, None);
    }

    #[test]
    fn test_builder_overrides() {
        let mut panel = PlaceholderPanel::with_id(PanelKind::Flags, "flags2")
            .hint(Size::new(10, 20))
            .minimum(Size::new(5, 5))
            .policy(SizePolicy::RESIZABLE)
            .hidden();
        assert_eq!(panel.id(), "flags2");
        assert_eq!(panel.size_hint(), Size::new(10, 20));
        assert_eq!(panel.size_policy(), SizePolicy::RESIZABLE);
        assert!(!panel.is_visible());

        panel.set_geometry(Rect::new(1, 2, 3, 4));
        assert_eq!(panel.geometry, Some(Rect::new(1, 2, 3, 4)));
    }
}
