//! Panel system - the contract between the dock layout and hosted panels
//!
//! Panels are docked against one of four sides of an already placed panel,
//! except for the first one, which is the base panel every other panel is
//! arranged around.
//!
//! ## Architecture
//!
//! - `DockSide`: Top, Left, Right or Bottom edge
//! - `SizePolicy`: per-axis fixed/resizable flag
//! - `DockContent` trait: what a panel must expose to be docked
//!
//! ## Integration
//!
//! The layout engine in `layout` owns every `DockContent` handed to it and
//! pushes the computed rectangles back through `DockContent::set_geometry`.

mod content;
mod dock;

pub use content::{DockContent, Policy, SizePolicy};
pub use dock::{Axis, DockSide};
