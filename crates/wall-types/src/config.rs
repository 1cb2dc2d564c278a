use serde::{Deserialize, Serialize};

/// Which way the wall folds. Latched at the start of a fold gesture;
/// changing it forces a chain rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoldDirection {
    Forward,
    Backward,
}

impl FoldDirection {
    /// Rotation sign: Forward = +1, Backward = -1.
    pub fn sign(&self) -> f64 {
        match self {
            FoldDirection::Forward => 1.0,
            FoldDirection::Backward => -1.0,
        }
    }
}

/// Hardware variant of the wall.
///
/// `Flush` is the plain wall: every panel shares the standard width and
/// the wall hangs in a jamb-and-seal subframe. `LegTrack` adds support
/// legs at both ends, a top track, a half-width leader panel and wheels
/// on every other interior panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Variant {
    Flush,
    LegTrack {
        /// Support leg profile width (mm).
        leg_width: f64,
        /// Top track height (mm).
        track_height: f64,
        /// Clearance between floor and panel underside (mm).
        floor_gap: f64,
        /// Clearance between panel top and track underside (mm).
        track_gap: f64,
    },
}

impl Variant {
    /// The leg/track variant with the stock hardware dimensions.
    pub fn leg_track() -> Self {
        Variant::LegTrack {
            leg_width: 50.0,
            track_height: 50.0,
            floor_gap: 10.0,
            track_gap: 10.0,
        }
    }

    pub fn has_legs(&self) -> bool {
        matches!(self, Variant::LegTrack { .. })
    }
}

/// Immutable per-rebuild wall configuration. All lengths in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Overall opening length the wall must fill (mm).
    pub total_length: f64,
    /// Overall wall height (mm).
    pub height: f64,
    /// Number of folding panel sections.
    pub sections: u32,
    /// Gap left open at each hinge (mm).
    pub hinge_gap: f64,
    /// Panel material thickness (mm).
    pub thickness: f64,
    /// Hardware variant.
    pub variant: Variant,
}

impl Config {
    /// The stock flush wall the configurator starts from.
    pub fn flush_default() -> Self {
        Self {
            total_length: 2000.0,
            height: 2500.0,
            sections: 3,
            hinge_gap: 6.4,
            thickness: 80.0,
            variant: Variant::Flush,
        }
    }

    /// The stock leg/track wall.
    pub fn leg_track_default() -> Self {
        Self {
            total_length: 2000.0,
            height: 2500.0,
            sections: 3,
            hinge_gap: 5.0,
            thickness: 80.0,
            variant: Variant::leg_track(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_signs() {
        assert_eq!(FoldDirection::Forward.sign(), 1.0);
        assert_eq!(FoldDirection::Backward.sign(), -1.0);
    }

    #[test]
    fn test_config_serde_round_trip() {
        let config = Config::leg_track_default();
        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
