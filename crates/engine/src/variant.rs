//! Variant policy: the knobs that differ between the flush wall and the
//! leg/track wall, gathered in one place so a single builder serves both.

use wall_scene::Vec3;
use wall_types::{Config, Dimensions, FoldDirection, PanelRole, Variant};

use crate::sequence;

/// Policy lens over a [`Variant`].
#[derive(Debug, Clone, Copy)]
pub struct VariantPolicy {
    variant: Variant,
}

impl VariantPolicy {
    pub fn new(variant: Variant) -> Self {
        Self { variant }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn has_wheels(&self) -> bool {
        self.variant.has_legs()
    }

    /// Direction the wall folds if no gesture has selected one yet.
    pub fn initial_direction(&self) -> FoldDirection {
        match self.variant {
            Variant::Flush => FoldDirection::Backward,
            Variant::LegTrack { .. } => FoldDirection::Forward,
        }
    }

    /// Role sequence for the chain.
    pub fn roles(&self, sections: u32, direction: FoldDirection) -> Vec<PanelRole> {
        match self.variant {
            Variant::Flush => sequence::flush_roles(sections),
            Variant::LegTrack { .. } => sequence::classify(sections, direction),
        }
    }

    /// Z offset of the root pivot: which side of the wall plane the first
    /// panel's material sits on, so the fold curls the correct way.
    pub fn root_pivot_z(&self, direction: FoldDirection, thickness: f64) -> f64 {
        direction.sign() * thickness / 2.0
    }

    /// X gap between a pivot and the near edge of its panel. The leader
    /// of the leg/track variant butts straight against its pivot; every
    /// other panel is inset half a hinge gap.
    pub fn panel_edge_offset(&self, index: usize, gap: f64) -> f64 {
        match self.variant {
            Variant::Flush => gap / 2.0,
            Variant::LegTrack { .. } => {
                if index == 0 {
                    0.0
                } else {
                    gap / 2.0
                }
            }
        }
    }

    /// Thickness of the panel frame members. The flush frame protrudes
    /// 2 mm past the panel faces.
    pub fn frame_thickness(&self, panel_thickness: f64) -> f64 {
        match self.variant {
            Variant::Flush => panel_thickness + 2.0 * 2.0,
            Variant::LegTrack { .. } => panel_thickness,
        }
    }

    /// Thickness of the infill slab. The leg/track infill is recessed
    /// 4 mm inside its frame.
    pub fn infill_thickness(&self, panel_thickness: f64) -> f64 {
        match self.variant {
            Variant::Flush => panel_thickness,
            Variant::LegTrack { .. } => panel_thickness - 4.0,
        }
    }

    /// Placement of the wall group in the scene: centered on x, raised to
    /// mid-height for the flush wall, at floor level for the leg/track
    /// wall.
    pub fn wall_group_translation(&self, config: &Config) -> Vec3 {
        let x = -config.total_length / 2.0;
        match self.variant {
            Variant::Flush => Vec3::new(x, config.height / 2.0, 0.0),
            Variant::LegTrack { .. } => Vec3::new(x, 0.0, 0.0),
        }
    }

    /// Placement of the root pivot within the wall group.
    pub fn root_pivot_translation(
        &self,
        config: &Config,
        dims: &Dimensions,
        direction: FoldDirection,
    ) -> Vec3 {
        let z = self.root_pivot_z(direction, config.thickness);
        match self.variant {
            Variant::Flush => Vec3::new(0.0, 0.0, z),
            Variant::LegTrack {
                leg_width,
                floor_gap,
                ..
            } => {
                // Chain starts after the left leg and its hinge gap, at
                // panel-band center height.
                let x = leg_width + dims.gap;
                let y = floor_gap + dims.panel_height / 2.0;
                Vec3::new(x, y, z)
            }
        }
    }

    /// Y of the wheel center: riding inside the top track.
    pub fn wheel_center_y(&self, config: &Config) -> Option<f64> {
        match self.variant {
            Variant::Flush => None,
            Variant::LegTrack { track_height, .. } => Some(config.height - track_height / 2.0),
        }
    }
}
