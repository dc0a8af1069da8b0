//! Command-line argument parsing for the layout inspector
//!
//! Supports:
//! - Loading a scenario (or the built-in debugger workspace)
//! - Overriding the container size
//! - Restoring a saved layout file instead of the scenario's layout
//! - Simulating a drag-and-drop of a new panel
//! - Saving the resulting layout

use clap::Parser;
use std::path::PathBuf;

use crate::geometry::Rect;
use crate::panels::PanelKind;

/// Lay out debugger panels headlessly and report where they end up
#[derive(Parser, Debug)]
#[command(name = "snapdock", version, about = "Inspect dock layouts")]
pub struct CliArgs {
    /// Scenario YAML file (defaults to the built-in debugger workspace)
    #[arg(long, value_name = "FILE")]
    pub scenario: Option<PathBuf>,

    /// Restore a saved layout instead of the scenario's layout (the default
    /// layout file if no path given)
    #[arg(long, value_name = "FILE", num_args = 0..=1)]
    pub layout: Option<Option<PathBuf>>,

    /// Container width
    #[arg(long, value_name = "N")]
    pub width: Option<i32>,

    /// Container height
    #[arg(long, value_name = "N")]
    pub height: Option<i32>,

    /// Kind of panel to drop into the layout (used with --drop-rect)
    #[arg(long, value_enum, value_name = "KIND")]
    pub drop_kind: Option<PanelKind>,

    /// Rectangle the panel is dropped at
    #[arg(long, num_args = 4, value_names = ["X", "Y", "W", "H"], allow_negative_numbers = true)]
    pub drop_rect: Option<Vec<i32>>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Save the resulting layout (to the default layout file if no path given)
    #[arg(long, value_name = "FILE", num_args = 0..=1)]
    pub save: Option<Option<PathBuf>>,
}

/// A simulated drag-and-drop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropRequest {
    pub kind: PanelKind,
    pub rect: Rect,
}

/// Saved layout to restore
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutSource {
    /// The user's layout file, falling back to the scenario when absent
    DefaultFile,
    Path(PathBuf),
}

/// Where to write the resulting layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveTarget {
    DefaultFile,
    Path(PathBuf),
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct InspectConfig {
    pub scenario: Option<PathBuf>,
    pub layout: Option<LayoutSource>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub drop: Option<DropRequest>,
    pub json: bool,
    pub save: Option<SaveTarget>,
}

impl CliArgs {
    /// Validate parsed CLI args into an inspection configuration
    pub fn into_config(self) -> Result<InspectConfig, String> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if let Some(v) = value {
                if v <= 0 {
                    return Err(format!("--{} must be positive, got {}", name, v));
                }
            }
        }

        let drop = match (self.drop_kind, self.drop_rect) {
            (None, None) => None,
            (Some(kind), Some(values)) => {
                let &[x, y, w, h] = values.as_slice() else {
                    return Err("--drop-rect takes exactly four values".to_string());
                };
                if w <= 0 || h <= 0 {
                    return Err(format!("Drop rectangle must have a positive size, got {}x{}", w, h));
                }
                Some(DropRequest {
                    kind,
                    rect: Rect::new(x, y, w, h),
                })
            }
            (Some(_), None) => return Err("--drop-kind requires --drop-rect".to_string()),
            (None, Some(_)) => return Err("--drop-rect requires --drop-kind".to_string()),
        };

        let layout = self.layout.map(|path| match path {
            Some(path) => LayoutSource::Path(path),
            None => LayoutSource::DefaultFile,
        });

        let save = self.save.map(|path| match path {
            Some(path) => SaveTarget::Path(path),
            None => SaveTarget::DefaultFile,
        });

        Ok(InspectConfig {
            scenario: self.scenario,
            layout,
            width: self.width,
            height: self.height,
            drop,
            json: self.json,
            save,
        })
    }
}
