//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use snapdock::geometry::{Rect, Size};
use snapdock::layout::DockLayout;
use snapdock::panel::{DockContent, DockSide, SizePolicy};

/// State of a test panel that stays observable after the layout takes it
#[derive(Debug)]
pub struct PanelState {
    pub hint: Size,
    pub visible: bool,
    pub geometry: Option<Rect>,
    pub geometry_calls: usize,
}

pub type PanelHandle = Rc<RefCell<PanelState>>;

/// Panel whose state is shared with the test through a `PanelHandle`
pub struct TestPanel {
    id: String,
    minimum: Size,
    policy: SizePolicy,
    state: PanelHandle,
}

impl DockContent for TestPanel {
    fn id(&self) -> &str {
        &self.id
    }

    fn size_hint(&self) -> Size {
        self.state.borrow().hint
    }

    fn minimum_size(&self) -> Size {
        self.minimum
    }

    fn size_policy(&self) -> SizePolicy {
        self.policy
    }

    fn is_visible(&self) -> bool {
        self.state.borrow().visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.state.borrow_mut().visible = visible;
    }

    fn set_geometry(&mut self, rect: Rect) {
        let mut state = self.state.borrow_mut();
        state.geometry = Some(rect);
        state.geometry_calls += 1;
    }
}

/// Create a visible test panel and the handle to observe it
pub fn panel(
    id: &str,
    hint: Size,
    minimum: Size,
    policy: SizePolicy,
) -> (Box<dyn DockContent>, PanelHandle) {
    let state = Rc::new(RefCell::new(PanelState {
        hint,
        visible: true,
        geometry: None,
        geometry_calls: 0,
    }));
    let panel = TestPanel {
        id: id.to_string(),
        minimum,
        policy,
        state: Rc::clone(&state),
    };
    (Box::new(panel), state)
}

/// Fixed-size panel whose minimum equals its hint
pub fn fixed_panel(id: &str, width: i32, height: i32) -> (Box<dyn DockContent>, PanelHandle) {
    let size = Size::new(width, height);
    panel(id, size, size, SizePolicy::FIXED)
}

/// Resizable panel with the given hint and minimum
pub fn resizable_panel(
    id: &str,
    hint: Size,
    minimum: Size,
) -> (Box<dyn DockContent>, PanelHandle) {
    panel(id, hint, minimum, SizePolicy::RESIZABLE)
}

/// Layout with a resizable base panel of the given size (minimum 100x100)
pub fn base_layout(width: i32, height: i32) -> (DockLayout, PanelHandle) {
    let (base, handle) = resizable_panel("base", Size::new(width, height), Size::new(100, 100));
    let mut layout = DockLayout::new();
    layout.add_widget_at(base, DockSide::Top, 0, width, height);
    (layout, handle)
}

/// 400x300 base with a 100x100 panel on the right at 50 and a 150x80 panel
/// below at 20; fits exactly in 500x380
pub fn three_panel_layout() -> (DockLayout, Vec<PanelHandle>) {
    let (mut layout, base) = base_layout(400, 300);
    let (right, right_handle) = fixed_panel("right", 100, 100);
    let (bottom, bottom_handle) = fixed_panel("bottom", 150, 80);
    layout.add_widget_at(right, DockSide::Right, 50, -1, -1);
    layout.add_widget_at(bottom, DockSide::Bottom, 20, -1, -1);
    (layout, vec![base, right_handle, bottom_handle])
}

/// Assert no two visible placements overlap
pub fn assert_no_overlaps(layout: &DockLayout) {
    let rects: Vec<(usize, Rect)> = (0..layout.len())
        .filter_map(|i| layout.placement(i).map(|r| (i, r)))
        .collect();
    for (n, (i, a)) in rects.iter().enumerate() {
        for (j, b) in &rects[n + 1..] {
            assert!(
                !a.intersects(b),
                "panels {} {} and {} {} overlap",
                i,
                a,
                j,
                b
            );
        }
    }
}
