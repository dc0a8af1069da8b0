//! Saved dock layouts
//!
//! A layout is stored as plain text, one docked panel per line:
//!
//! ```text
//! <id> D <H|V> <T|L|R|B> <distance> <width|-1> <height|-1>
//! ```
//!
//! `H`/`V` records whether the panel was hidden or visible when saved, and a
//! size of -1 means the panel's own size hint is used. The default file lives
//! at `~/.config/snapdock/layout.cfg`.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::layout::{DockRecord, MAX_EXTENT};
use crate::panel::DockSide;

/// Placement marker for docked panels
const DOCKED: &str = "D";

/// One saved panel placement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DockEntry {
    pub id: String,
    pub visible: bool,
    pub side: DockSide,
    pub distance: i32,
    /// Explicit width, `None` to follow the size hint
    pub width: Option<i32>,
    /// Explicit height, `None` to follow the size hint
    pub height: Option<i32>,
}

impl DockEntry {
    pub fn from_record(record: &DockRecord) -> Self {
        Self {
            id: record.content().id().to_string(),
            visible: record.is_visible(),
            side: record.side(),
            distance: record.distance(),
            width: record.explicit_width(),
            height: record.explicit_height(),
        }
    }
}

impl fmt::Display for DockEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {}",
            self.id,
            DOCKED,
            if self.visible { "V" } else { "H" },
            self.side,
            self.distance,
            self.width.unwrap_or(-1),
            self.height.unwrap_or(-1)
        )
    }
}

impl FromStr for DockEntry {
    type Err = ConfigError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut fields = line.split_whitespace();
        let mut next = |name: &'static str| fields.next().ok_or(ConfigError::MissingField(name));

        let id = next("id")?.to_string();
        let placement = next("placement")?;
        if placement != DOCKED {
            return Err(ConfigError::UnsupportedPlacement(placement.to_string()));
        }
        let visible = match next("visibility")? {
            "V" => true,
            "H" => false,
            other => return Err(ConfigError::InvalidVisibility(other.to_string())),
        };
        let side_str = next("side")?;
        let side = side_str
            .parse::<DockSide>()
            .map_err(|_| ConfigError::InvalidSide(side_str.to_string()))?;
        let distance = parse_int(next("distance")?)?;
        let width = parse_size(next("width")?)?;
        let height = parse_size(next("height")?)?;

        Ok(DockEntry {
            id,
            visible,
            side,
            distance,
            width,
            height,
        })
    }
}

/// Integers beyond `MAX_EXTENT` either way are rejected
fn parse_int(s: &str) -> Result<i32, ConfigError> {
    s.parse::<i32>()
        .ok()
        .filter(|v| (-MAX_EXTENT..=MAX_EXTENT).contains(v))
        .ok_or_else(|| ConfigError::InvalidNumber(s.to_string()))
}

/// Sizes of zero or less mean "use the size hint"
fn parse_size(s: &str) -> Result<Option<i32>, ConfigError> {
    let value = parse_int(s)?;
    Ok((value > 0).then_some(value))
}

/// Errors from reading a saved layout
#[derive(Debug)]
pub enum ConfigError {
    Io(String),
    MissingField(&'static str),
    UnsupportedPlacement(String),
    InvalidVisibility(String),
    InvalidSide(String),
    InvalidNumber(String),
    /// Wraps another error with the 1-based line it occurred on
    Line(usize, Box<ConfigError>),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::MissingField(name) => write!(f, "Missing field: {}", name),
            ConfigError::UnsupportedPlacement(p) => write!(f, "Unsupported placement: {}", p),
            ConfigError::InvalidVisibility(v) => write!(f, "Invalid visibility: {}", v),
            ConfigError::InvalidSide(s) => write!(f, "Invalid dock side: {}", s),
            ConfigError::InvalidNumber(n) => write!(f, "Invalid number: {}", n),
            ConfigError::Line(line, e) => write!(f, "line {}: {}", line, e),
        }
    }
}

impl std::error::Error for ConfigError {}

/// A saved layout file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutFile {
    pub entries: Vec<DockEntry>,
}

impl LayoutFile {
    pub fn new(entries: Vec<DockEntry>) -> Self {
        Self { entries }
    }

    /// Parse layout text; blank lines and `#` comments are ignored
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let mut entries = Vec::new();
        for (i, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let entry = line
                .parse::<DockEntry>()
                .map_err(|e| ConfigError::Line(i + 1, Box::new(e)))?;
            entries.push(entry);
        }
        Ok(Self { entries })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        let file = Self::parse(&content)?;
        tracing::info!(
            "Loaded {} dock entries from {}",
            file.entries.len(),
            path.display()
        );
        Ok(file)
    }

    /// Load the default layout file, or an empty layout if unavailable
    pub fn load_default() -> Self {
        let Some(path) = crate::config_paths::layout_file() else {
            tracing::debug!("No config directory available, using empty layout");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!("Layout file not found at {}, using empty layout", path.display());
            return Self::default();
        }

        match Self::load(&path) {
            Ok(file) => file,
            Err(e) => {
                tracing::warn!("Failed to load layout at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Write the layout, creating the parent directory if needed
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Io(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }

        std::fs::write(path, self.to_string())
            .map_err(|e| ConfigError::Io(format!("Failed to write {}: {}", path.display(), e)))?;

        tracing::info!("Saved {} dock entries to {}", self.entries.len(), path.display());
        Ok(())
    }
}

impl fmt::Display for LayoutFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{}", entry)?;
        }
        Ok(())
    }
}
