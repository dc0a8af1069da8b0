//! snapdock - docking layout engine for debugger panels
//!
//! This crate arranges dockable panels around a base panel inside a single
//! container, snapping dragged panels to the edges of the ones already placed
//! and persisting the arrangement as plain text lines.

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod geometry;
pub mod inspect;
pub mod layout;
pub mod panel;
pub mod panels;
pub mod scenario;
pub mod tracing;

// Re-export commonly used types
pub use config::{DockEntry, LayoutFile};
pub use geometry::{Rect, Size};
pub use layout::{DockLayout, InsertLocation};
pub use panel::{DockContent, DockSide, SizePolicy};
