//! Logging setup and layout diagnostics
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=snapdock::layout=trace` - per-pass layout diffs
//!
//! Logs are also written to `~/.config/snapdock/logs/snapdock.log` with daily
//! rotation, at debug level.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::geometry::Rect;
use crate::layout::DockLayout;

/// Initialize tracing subscriber with console and file logging
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "snapdock.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Placement of every panel at one point in time, for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutSnapshot {
    pub panels: Vec<(String, Option<Rect>)>,
}

impl LayoutSnapshot {
    pub fn capture(layout: &DockLayout) -> Self {
        Self {
            panels: layout
                .placements()
                .into_iter()
                .map(|p| (p.id, p.rect))
                .collect(),
        }
    }

    /// Describe what moved between two snapshots
    pub fn diff(&self, other: &LayoutSnapshot) -> Option<String> {
        if self.panels.len() != other.panels.len() {
            return Some(format!(
                "panel count: {} → {}",
                self.panels.len(),
                other.panels.len()
            ));
        }

        let mut changes = Vec::new();
        for ((id, before), (_, after)) in self.panels.iter().zip(&other.panels) {
            if before != after {
                changes.push(format!("{}: {} → {}", id, describe(before), describe(after)));
            }
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

fn describe(rect: &Option<Rect>) -> String {
    match rect {
        Some(r) => r.to_string(),
        None => "hidden".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(panels: &[(&str, Option<Rect>)]) -> LayoutSnapshot {
        LayoutSnapshot {
            panels: panels.iter().map(|(id, r)| (id.to_string(), *r)).collect(),
        }
    }

    #[test]
    fn test_identical_snapshots_have_no_diff() {
        let a = snapshot(&[("code", Some(Rect::new(0, 0, 10, 10)))]);
        assert_eq!(a.diff(&a.clone()), None);
    }

    #[test]
    fn test_diff_lists_moved_and_hidden_panels() {
        let a = snapshot(&[
            ("code", Some(Rect::new(0, 0, 10, 10))),
            ("regs", Some(Rect::new(10, 0, 5, 10))),
        ]);
        let b = snapshot(&[
            ("code", Some(Rect::new(0, 0, 12, 10))),
            ("regs", None),
        ]);
        assert_eq!(
            a.diff(&b).unwrap(),
            "code: (0,0 10x10) → (0,0 12x10); regs: (10,0 5x10) → hidden"
        );
    }

    #[test]
    fn test_diff_reports_count_change() {
        let a = snapshot(&[("code", None)]);
        let b = snapshot(&[]);
        assert_eq!(a.diff(&b).unwrap(), "panel count: 1 → 0");
    }
}
