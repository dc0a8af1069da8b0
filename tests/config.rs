//! Tests for saving, restoring and inspecting layouts

mod common;

use std::collections::HashMap;

use common::{fixed_panel, resizable_panel, three_panel_layout};
use snapdock::cli::{InspectConfig, LayoutSource, SaveTarget};
use snapdock::config::{ConfigError, DockEntry, LayoutFile};
use snapdock::geometry::{Rect, Size};
use snapdock::inspect;
use snapdock::layout::DockLayout;
use snapdock::panel::{DockContent, DockSide};

fn inspect_config() -> InspectConfig {
    InspectConfig {
        scenario: None,
        layout: None,
        width: None,
        height: None,
        drop: None,
        json: false,
        save: None,
    }
}

// ============================================================================
// Layout lines
// ============================================================================

#[test]
fn test_config_lines() {
    let (mut layout, _) = three_panel_layout();
    layout.set_geometry(Rect::new(0, 0, 500, 380));

    assert_eq!(
        layout.config_lines(),
        vec![
            "base D V T 0 400 300",
            "right D V R 50 -1 -1",
            "bottom D V B 20 -1 -1",
        ]
    );
}

#[test]
fn test_hidden_panel_saved_as_hidden() {
    let (mut layout, _) = three_panel_layout();
    layout.set_geometry(Rect::new(0, 0, 500, 380));
    layout.set_visible(1, false);

    assert!(layout.config_lines()[1].starts_with("right D H R "));
}

#[test]
fn test_save_parse_restore_round_trip() {
    let (mut layout, _) = three_panel_layout();
    layout.set_geometry(Rect::new(0, 0, 500, 380));
    let text = LayoutFile::new(layout.entries()).to_string();

    let parsed = LayoutFile::parse(&text).unwrap();
    assert_eq!(parsed.entries, layout.entries());

    let mut contents: HashMap<String, Box<dyn DockContent>> = HashMap::new();
    for (id, panel) in [
        resizable_panel("base", Size::new(10, 10), Size::new(100, 100)),
        fixed_panel("right", 100, 100),
        fixed_panel("bottom", 150, 80),
    ]
    .into_iter()
    .map(|(panel, _)| (panel.id().to_string(), panel))
    {
        contents.insert(id, panel);
    }

    let mut restored = DockLayout::new();
    assert_eq!(restored.restore(&parsed.entries, &mut contents), 3);
    assert!(contents.is_empty());
    restored.set_geometry(Rect::new(0, 0, 500, 380));

    assert_eq!(restored.placements(), layout.placements());
    assert_eq!(restored.config_lines(), layout.config_lines());
}

#[test]
fn test_restore_skips_unknown_ids() {
    let entries = LayoutFile::parse("base D V T 0 300 200\nghost D V R 0 -1 -1\n")
        .unwrap()
        .entries;
    let (base, _) = resizable_panel("base", Size::new(300, 200), Size::new(100, 100));
    let mut contents: HashMap<String, Box<dyn DockContent>> = HashMap::new();
    contents.insert("base".to_string(), base);

    let mut layout = DockLayout::new();
    assert_eq!(layout.restore(&entries, &mut contents), 1);
    assert_eq!(layout.len(), 1);
    assert_eq!(layout.record(0).unwrap().explicit_width(), Some(300));
}

#[test]
fn test_restore_applies_saved_visibility() {
    let entries = LayoutFile::parse("base D V T 0 300 200\nside D H L 0 -1 -1\n")
        .unwrap()
        .entries;
    let (base, _) = resizable_panel("base", Size::new(300, 200), Size::new(100, 100));
    let (side, side_handle) = fixed_panel("side", 50, 50);
    let mut contents: HashMap<String, Box<dyn DockContent>> = HashMap::new();
    contents.insert("base".to_string(), base);
    contents.insert("side".to_string(), side);

    let mut layout = DockLayout::new();
    layout.restore(&entries, &mut contents);
    layout.set_geometry(Rect::new(0, 0, 300, 200));

    assert!(!side_handle.borrow().visible);
    assert_eq!(layout.placement(1), None);
    assert_eq!(layout.layout_size(), Size::new(300, 200));
}

#[test]
fn test_parse_errors_report_line() {
    let text = "# saved layout\nbase D V T 0 300 200\n\nside D V X 0 -1 -1\n";
    match LayoutFile::parse(text) {
        Err(ConfigError::Line(4, inner)) => {
            assert!(matches!(*inner, ConfigError::InvalidSide(ref s) if s == "X"));
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_parse_entry_fields() {
    let entry: DockEntry = "memory D H B 35 0 120".parse().unwrap();
    assert_eq!(entry.id, "memory");
    assert!(!entry.visible);
    assert_eq!(entry.side, DockSide::Bottom);
    assert_eq!(entry.distance, 35);
    assert_eq!(entry.width, None);
    assert_eq!(entry.height, Some(120));
}

#[test]
fn test_parse_rejects_out_of_range_distance() {
    let text = "base D V T 0 400 300\nx D V T 2147483000 -1 -1\n";
    match LayoutFile::parse(text) {
        Err(ConfigError::Line(2, inner)) => {
            assert!(matches!(*inner, ConfigError::InvalidNumber(_)));
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_inspect_rejects_corrupt_layout_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("layout.cfg");
    std::fs::write(&path, "code D V T 0 400 400\nregs D V T 2147483000 -1 -1\n").unwrap();

    let mut config = inspect_config();
    config.layout = Some(LayoutSource::Path(path));
    assert!(inspect::run(&config).is_err());
}

#[test]
fn test_save_and_load_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("layout.cfg");
    let (mut layout, _) = three_panel_layout();
    layout.set_geometry(Rect::new(0, 0, 500, 380));

    LayoutFile::new(layout.entries()).save(&path).unwrap();
    let loaded = LayoutFile::load(&path).unwrap();
    assert_eq!(loaded.entries, layout.entries());
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = LayoutFile::load(&dir.path().join("missing.cfg"));
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

// ============================================================================
// Inspection
// ============================================================================

#[test]
fn test_inspect_default_scenario() {
    let report = inspect::run(&inspect_config()).unwrap();

    assert_eq!(report.container, Rect::new(0, 0, 900, 720));
    assert_eq!(report.layout_size, Size::new(900, 720));
    assert_eq!(report.minimum, Size::new(660, 500));
    assert_eq!(report.panels.len(), 7);
    assert_eq!(report.config.len(), 7);
    assert!(report.dropped.is_none());

    let code = &report.panels[0];
    assert_eq!(code.id, "code");
    assert_eq!(code.rect, Some(Rect::new(0, 120, 560, 400)));
    let vdp = report.panels.iter().find(|p| p.id == "vdpregs").unwrap();
    assert_eq!(vdp.rect, None);
}

#[test]
fn test_inspect_drop_without_snap() {
    let mut config = inspect_config();
    config.drop = Some(snapdock::cli::DropRequest {
        kind: snapdock::panels::PanelKind::Flags,
        rect: Rect::new(5000, 5000, 120, 180),
    });

    let report = inspect::run(&config).unwrap();
    let dropped = report.dropped.unwrap();
    assert_eq!(dropped.id, "flags-2");
    assert!(dropped.location.is_none());
    assert_eq!(report.panels.len(), 7);
}

#[test]
fn test_inspect_saves_layout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("layout.cfg");
    let mut config = inspect_config();
    config.save = Some(SaveTarget::Path(path.clone()));

    let report = inspect::run(&config).unwrap();
    let saved = std::fs::read_to_string(&path).unwrap();
    assert_eq!(saved.lines().collect::<Vec<_>>(), report.config);

    let mut reload = inspect_config();
    reload.layout = Some(LayoutSource::Path(path));
    let reloaded = inspect::run(&reload).unwrap();
    let ids: Vec<_> = reloaded.panels.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["code", "regs", "flags", "stack", "memory", "slots", "vdpregs"]
    );
}

#[test]
fn test_inspect_report_serializes_to_json() {
    let report = inspect::run(&inspect_config()).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["layout_size"]["width"], 900);
    assert_eq!(json["panels"][0]["id"], "code");
    assert!(json["panels"][6]["rect"].is_null());
}
