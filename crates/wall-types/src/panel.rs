use serde::{Deserialize, Serialize};

use crate::config::FoldDirection;

/// Structural role of a panel within the fold sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanelRole {
    /// Half-width first panel (leg/track variant).
    Leader,
    /// Full-width panel of the flush variant.
    Standard,
    /// Interior panel with no hardware, mirrored orientation.
    Mirrored,
    /// Interior panel carrying a wheel that rides in the top track.
    WheelBearing,
    /// The distinguished last panel that closes the fold.
    EndCap,
}

impl PanelRole {
    pub fn has_wheel(&self) -> bool {
        matches!(self, PanelRole::WheelBearing)
    }
}

/// Which side of the fold plane the panel's thickness extends toward.
/// Alternates down the chain to make a valid zig-zag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FaceSide {
    Front,
    Back,
}

impl FaceSide {
    /// Z sign of the hinge-side face: Front = +1, Back = -1.
    pub fn sign(&self) -> f64 {
        match self {
            FaceSide::Front => 1.0,
            FaceSide::Back => -1.0,
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            FaceSide::Front => FaceSide::Back,
            FaceSide::Back => FaceSide::Front,
        }
    }

    /// The side the leader panel faces for a given fold direction.
    pub fn leading(direction: FoldDirection) -> Self {
        match direction {
            FoldDirection::Forward => FaceSide::Front,
            FoldDirection::Backward => FaceSide::Back,
        }
    }
}

/// Fully resolved description of one panel, ready for geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelSpec {
    /// Position in the chain, 0 = leader.
    pub index: usize,
    pub width: f64,
    pub height: f64,
    pub thickness: f64,
    pub role: PanelRole,
    /// Side the panel's hinge edge faces. Alternates by chain parity.
    pub face: FaceSide,
}

/// Solved per-panel widths for a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width shared by all non-leader panels (mm).
    pub standard_width: f64,
    /// Width of the first panel (mm). Equals `standard_width` for the
    /// flush variant, half of it for the leg/track variant.
    pub leader_width: f64,
    /// Hinge gap carried through from the config (mm).
    pub gap: f64,
    /// Panel thickness carried through from the config (mm).
    pub thickness: f64,
    /// Height of the folding band (mm). Full wall height for the flush
    /// variant; excludes track and clearances for the leg/track variant.
    pub panel_height: f64,
}

impl Dimensions {
    /// Width of the panel at `index` in the chain.
    pub fn width_at(&self, index: usize) -> f64 {
        if index == 0 {
            self.leader_width
        } else {
            self.standard_width
        }
    }
}

/// Rounded millimeter values consumed by the display surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionReadout {
    pub standard_width_mm: f64,
    pub leader_width_mm: f64,
}

impl From<&Dimensions> for DimensionReadout {
    fn from(dims: &Dimensions) -> Self {
        Self {
            standard_width_mm: dims.standard_width.round(),
            leader_width_mm: dims.leader_width.round(),
        }
    }
}

/// Where the fold gesture currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoldState {
    Open,
    Folding,
    Folded,
}
