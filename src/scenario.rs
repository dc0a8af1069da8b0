//! Headless layout scenarios
//!
//! A scenario describes a container size, the panels to create and the saved
//! layout lines to restore them with:
//!
//! ```yaml
//! container: { width: 900, height: 720 }
//! panels:
//!   - kind: disassembly
//!   - kind: main-memory
//!     id: memory2
//!     hint: { width: 300, height: 150 }
//! layout:
//!   - code D V T 0 400 400
//!   - memory2 D V B 0 -1 -1
//! ```

use std::collections::HashMap;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::config::{DockEntry, LayoutFile};
use crate::geometry::{Rect, Size};
use crate::layout::{DockLayout, PREFERRED_SIZE};
use crate::panel::DockContent;
use crate::panels::{PanelKind, PlaceholderPanel};

const DEFAULT_SCENARIO_YAML: &str = include_str!("../scenarios/debugger.yaml");

/// One panel to create
#[derive(Debug, Clone, Deserialize)]
pub struct PanelSpec {
    pub kind: PanelKind,
    /// Defaults to the kind's id
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub hint: Option<Size>,
    #[serde(default)]
    pub minimum: Option<Size>,
}

impl PanelSpec {
    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or_else(|| self.kind.default_id())
    }

    pub fn build(&self) -> PlaceholderPanel {
        let mut panel = PlaceholderPanel::with_id(self.kind, self.id());
        if let Some(hint) = self.hint {
            panel = panel.hint(hint);
        }
        if let Some(minimum) = self.minimum {
            panel = panel.minimum(minimum);
        }
        panel
    }
}

/// A container, its panels and their saved layout
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    #[serde(default = "default_container")]
    pub container: Size,
    pub panels: Vec<PanelSpec>,
    #[serde(default)]
    pub layout: Vec<String>,
}

fn default_container() -> Size {
    PREFERRED_SIZE
}

impl Scenario {
    pub fn parse(yaml: &str) -> Result<Self> {
        let scenario: Scenario =
            serde_yaml::from_str(yaml).context("Failed to parse scenario YAML")?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario {}", path.display()))?;
        Self::parse(&yaml).with_context(|| format!("Invalid scenario {}", path.display()))
    }

    /// The built-in debugger workspace
    pub fn default_debugger() -> Result<Self> {
        Self::parse(DEFAULT_SCENARIO_YAML)
    }

    fn validate(&self) -> Result<()> {
        if self.container.is_empty() {
            bail!(
                "Container size must be positive, got {}x{}",
                self.container.width,
                self.container.height
            );
        }
        let mut seen = std::collections::HashSet::new();
        for spec in &self.panels {
            if !seen.insert(spec.id()) {
                bail!("Duplicate panel id '{}'", spec.id());
            }
        }
        Ok(())
    }

    pub fn container_rect(&self) -> Rect {
        Rect::from_size(self.container)
    }

    /// Parsed layout lines
    pub fn entries(&self) -> Result<Vec<DockEntry>> {
        let file = LayoutFile::parse(&self.layout.join("\n")).context("Invalid layout line")?;
        Ok(file.entries)
    }

    /// Freshly built panels keyed by id
    pub fn contents(&self) -> HashMap<String, Box<dyn DockContent>> {
        self.panels
            .iter()
            .map(|spec| {
                let panel: Box<dyn DockContent> = Box::new(spec.build());
                (spec.id().to_string(), panel)
            })
            .collect()
    }

    /// Restore `entries` onto this scenario's panels
    pub fn build_layout(&self, entries: &[DockEntry]) -> Result<DockLayout> {
        if entries.is_empty() {
            bail!("Scenario has no layout entries");
        }
        let mut contents = self.contents();
        let mut layout = DockLayout::new();
        let restored = layout.restore(entries, &mut contents);
        if restored == 0 {
            bail!("None of the layout entries match a scenario panel");
        }
        for id in contents.keys() {
            tracing::warn!("Panel '{}' has no layout entry and was not docked", id);
        }
        Ok(layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scenario_parses() {
        let scenario = Scenario::default_debugger().unwrap();
        assert_eq!(scenario.container, Size::new(900, 720));
        assert_eq!(scenario.panels.len(), 7);
        assert_eq!(scenario.entries().unwrap().len(), 7);
    }

    #[test]
    fn test_missing_container_uses_preferred_size() {
        let scenario = Scenario::parse("panels:\n  - kind: flags\n").unwrap();
        assert_eq!(scenario.container, PREFERRED_SIZE);
        assert!(scenario.layout.is_empty());
    }

    #[test]
    fn test_panel_overrides() {
        let yaml = "panels:\n  - kind: main-memory\n    id: mem2\n    hint: { width: 300, height: 150 }\n";
        let scenario = Scenario::parse(yaml).unwrap();
        let panel = scenario.panels[0].build();
        assert_eq!(panel.id, "mem2");
        assert_eq!(panel.hint, Size::new(300, 150));
        assert_eq!(panel.minimum, PanelKind::MainMemory.minimum_size());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let yaml = "panels:\n  - kind: flags\n  - kind: flags\n";
        assert!(Scenario::parse(yaml).is_err());
    }

    #[test]
    fn test_empty_container_rejected() {
        let yaml = "container: { width: 0, height: 100 }\npanels: []\n";
        assert!(Scenario::parse(yaml).is_err());
    }

    #[test]
    fn test_build_layout_requires_entries() {
        let scenario = Scenario::parse("panels:\n  - kind: flags\n").unwrap();
        assert!(scenario.build_layout(&[]).is_err());
    }
}
