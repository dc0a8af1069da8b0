//! Headless layout inspection
//!
//! Builds a layout from a scenario, applies the container size, optionally
//! simulates dropping a new panel, and reports where everything ended up.

use std::fmt;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::{InspectConfig, LayoutSource, SaveTarget};
use crate::config::LayoutFile;
use crate::geometry::{Rect, Size};
use crate::layout::{DockLayout, InsertLocation, Placement};
use crate::panel::DockContent;
use crate::panels::PlaceholderPanel;
use crate::scenario::Scenario;

/// Outcome of a simulated drop
#[derive(Debug, Clone, Serialize)]
pub struct DropReport {
    pub id: String,
    pub requested: Rect,
    /// Snap target, `None` if the panel did not dock
    pub location: Option<InsertLocation>,
}

/// Everything the inspector prints
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub container: Rect,
    pub minimum: Size,
    pub layout_size: Size,
    pub panels: Vec<Placement>,
    pub dropped: Option<DropReport>,
    pub config: Vec<String>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "container  {}", self.container)?;
        writeln!(f, "minimum    {}x{}", self.minimum.width, self.minimum.height)?;
        writeln!(f, "layout     {}x{}", self.layout_size.width, self.layout_size.height)?;
        writeln!(f)?;
        for panel in &self.panels {
            let rect = panel
                .rect
                .map(|r| r.to_string())
                .unwrap_or_else(|| "hidden".to_string());
            writeln!(f, "{:<12} {} {:>5}  {}", panel.id, panel.side, panel.distance, rect)?;
        }
        if let Some(dropped) = &self.dropped {
            writeln!(f)?;
            match &dropped.location {
                Some(loc) => writeln!(
                    f,
                    "dropped {} at {} -> index {} side {} {}",
                    dropped.id, dropped.requested, loc.index, loc.side, loc.rect
                )?,
                None => writeln!(f, "dropped {} at {} -> no snap", dropped.id, dropped.requested)?,
            }
        }
        writeln!(f)?;
        for line in &self.config {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Run an inspection
pub fn run(config: &InspectConfig) -> Result<Report> {
    let scenario = match &config.scenario {
        Some(path) => Scenario::load(path)?,
        None => Scenario::default_debugger()?,
    };

    let entries = match &config.layout {
        Some(LayoutSource::Path(path)) => {
            LayoutFile::load(path)
                .with_context(|| format!("Failed to load layout {}", path.display()))?
                .entries
        }
        Some(LayoutSource::DefaultFile) => {
            let saved = LayoutFile::load_default().entries;
            if saved.is_empty() {
                tracing::info!("No saved layout, using the scenario layout");
                scenario.entries()?
            } else {
                saved
            }
        }
        None => scenario.entries()?,
    };

    let mut layout = scenario.build_layout(&entries)?;
    let container = Rect::new(
        0,
        0,
        config.width.unwrap_or(scenario.container.width),
        config.height.unwrap_or(scenario.container.height),
    );
    layout.set_geometry(container);

    let dropped = config.drop.map(|request| {
        let id = unique_id(&layout, request.kind.default_id());
        let panel = PlaceholderPanel::with_id(request.kind, id.clone());
        let location = layout.insert_location(&request.rect, panel.size_policy());
        if layout.add_widget(Box::new(panel), &request.rect).is_err() {
            tracing::info!("Dropped panel {} did not snap", id);
        }
        DropReport {
            id,
            requested: request.rect,
            location,
        }
    });

    let report = Report {
        container,
        minimum: layout.minimum_size(),
        layout_size: layout.layout_size(),
        panels: layout.placements(),
        dropped,
        config: layout.config_lines(),
    };

    if let Some(target) = &config.save {
        save(&layout, target)?;
    }

    Ok(report)
}

fn save(layout: &DockLayout, target: &SaveTarget) -> Result<()> {
    let path = match target {
        SaveTarget::Path(path) => path.clone(),
        SaveTarget::DefaultFile => {
            crate::config_paths::layout_file().context("No config directory available")?
        }
    };
    LayoutFile::new(layout.entries())
        .save(&path)
        .with_context(|| format!("Failed to save layout to {}", path.display()))
}

/// `base`, or `base-2`, `base-3`, ... if already taken
fn unique_id(layout: &DockLayout, base: &str) -> String {
    if layout.position(base).is_none() {
        return base.to_string();
    }
    (2..)
        .map(|n| format!("{}-{}", base, n))
        .find(|id| layout.position(id).is_none())
        .unwrap_or_else(|| base.to_string())
}
