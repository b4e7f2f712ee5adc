// src/quantum/palette.rs
//! Presentation lookup for the gate catalog
//!
//! Kept apart from [`Gate`] so the numeric definitions carry no display data.

use serde::{Deserialize, Serialize};

use super::gate::Gate;

/// An sRGB colour
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// `#rrggbb` form
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// How a gate tile is drawn
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GateStyle {
    pub gate: Gate,
    pub symbol: &'static str,
    pub label: &'static str,
    pub color: Rgb,
}

/// One entry per catalog gate, in catalog order
pub static PALETTE: [GateStyle; 6] = [
    GateStyle { gate: Gate::X, symbol: "X", label: "Bit flip", color: Rgb(0xe5, 0x39, 0x35) },
    GateStyle { gate: Gate::Y, symbol: "Y", label: "Bit and phase flip", color: Rgb(0x43, 0xa0, 0x47) },
    GateStyle { gate: Gate::Z, symbol: "Z", label: "Phase flip", color: Rgb(0x1e, 0x88, 0xe5) },
    GateStyle { gate: Gate::H, symbol: "H", label: "Superposition", color: Rgb(0x8e, 0x24, 0xaa) },
    GateStyle { gate: Gate::S, symbol: "S", label: "Quarter turn", color: Rgb(0xfb, 0x8c, 0x00) },
    GateStyle { gate: Gate::T, symbol: "T", label: "Eighth turn", color: Rgb(0x00, 0x89, 0x7b) },
];

/// Look up the style of a gate
pub fn style(gate: Gate) -> &'static GateStyle {
    PALETTE
        .iter()
        .find(|style| style.gate == gate)
        .unwrap_or(&PALETTE[0])
}
