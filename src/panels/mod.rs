//! Panel implementations for the dock layout
//!
//! The real viewers (disassembly, register and memory views) render live
//! machine state; the layout only needs their sizing behaviour. This module
//! describes each viewer kind and provides a placeholder panel that behaves
//! like one for the CLI, tests and benchmarks.
//!
//! ## Available Panels
//!
//! - **PlaceholderPanel**: sizing-only stand-in for any `PanelKind`

mod placeholder;

pub use placeholder::PlaceholderPanel;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::geometry::Size;
use crate::panel::{Policy, SizePolicy};

/// Kinds of debugger panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PanelKind {
    Disassembly,
    CpuRegisters,
    Flags,
    Stack,
    Slots,
    MainMemory,
    VdpRegisters,
    VdpStatusRegisters,
}

impl PanelKind {
    pub const ALL: [PanelKind; 8] = [
        PanelKind::Disassembly,
        PanelKind::CpuRegisters,
        PanelKind::Flags,
        PanelKind::Stack,
        PanelKind::Slots,
        PanelKind::MainMemory,
        PanelKind::VdpRegisters,
        PanelKind::VdpStatusRegisters,
    ];

    /// Get the display title for this panel
    pub fn title(&self) -> &'static str {
        match self {
            PanelKind::Disassembly => "Code view",
            PanelKind::CpuRegisters => "CPU registers",
            PanelKind::Flags => "Flags",
            PanelKind::Stack => "Stack",
            PanelKind::Slots => "Slots",
            PanelKind::MainMemory => "Main memory",
            PanelKind::VdpRegisters => "VDP registers",
            PanelKind::VdpStatusRegisters => "VDP status registers",
        }
    }

    /// Identifier used in saved layouts
    pub fn default_id(&self) -> &'static str {
        match self {
            PanelKind::Disassembly => "code",
            PanelKind::CpuRegisters => "regs",
            PanelKind::Flags => "flags",
            PanelKind::Stack => "stack",
            PanelKind::Slots => "slots",
            PanelKind::MainMemory => "memory",
            PanelKind::VdpRegisters => "vdpregs",
            PanelKind::VdpStatusRegisters => "vdpstatus",
        }
    }

    pub fn size_hint(&self) -> Size {
        match self {
            PanelKind::Disassembly => Size::new(400, 400),
            PanelKind::CpuRegisters => Size::new(220, 180),
            PanelKind::Flags => Size::new(120, 180),
            PanelKind::Stack => Size::new(120, 200),
            PanelKind::Slots => Size::new(180, 120),
            PanelKind::MainMemory => Size::new(500, 200),
            PanelKind::VdpRegisters => Size::new(420, 320),
            PanelKind::VdpStatusRegisters => Size::new(300, 180),
        }
    }

    pub fn minimum_size(&self) -> Size {
        match self {
            PanelKind::Disassembly => Size::new(200, 150),
            PanelKind::Stack => Size::new(120, 100),
            PanelKind::MainMemory => Size::new(250, 100),
            PanelKind::VdpRegisters => Size::new(300, 200),
            // fixed-size viewers can't shrink
            other => other.size_hint(),
        }
    }

    pub fn size_policy(&self) -> SizePolicy {
        match self {
            PanelKind::Disassembly | PanelKind::MainMemory | PanelKind::VdpRegisters => {
                SizePolicy::RESIZABLE
            }
            PanelKind::Stack => SizePolicy::new(Policy::Fixed, Policy::Resizable),
            PanelKind::CpuRegisters
            | PanelKind::Flags
            | PanelKind::Slots
            | PanelKind::VdpStatusRegisters => SizePolicy::FIXED,
        }
    }
}
