//! Aggregate length/gap constraints → per-panel widths.

use tracing::debug;
use wall_types::{Config, Dimensions, Variant, WallError};

fn invalid(reason: impl Into<String>) -> WallError {
    WallError::InvalidConfiguration {
        reason: reason.into(),
    }
}

/// Solve per-panel widths for a configuration.
///
/// Pure and idempotent. Fails with [`WallError::InvalidConfiguration`]
/// before any geometry is touched if the constraints cannot produce
/// positive panel dimensions.
pub fn solve(config: &Config) -> Result<Dimensions, WallError> {
    if config.sections < 1 {
        return Err(invalid(format!(
            "section count must be at least 1, got {}",
            config.sections
        )));
    }
    if config.height <= 0.0 {
        return Err(invalid(format!(
            "wall height {} mm is not positive",
            config.height
        )));
    }
    if config.thickness <= 0.0 {
        return Err(invalid(format!(
            "panel thickness {} mm is not positive",
            config.thickness
        )));
    }
    if config.hinge_gap < 0.0 {
        return Err(invalid(format!(
            "hinge gap {} mm is negative",
            config.hinge_gap
        )));
    }

    let length = config.total_length;
    let n = f64::from(config.sections);
    let gap = config.hinge_gap;

    let dims = match config.variant {
        Variant::Flush => {
            // Every panel shares the standard width.
            let width = (length - (n - 1.0) * gap) / n;
            Dimensions {
                standard_width: width,
                leader_width: width,
                gap,
                thickness: config.thickness,
                panel_height: config.height,
            }
        }
        Variant::LegTrack {
            leg_width,
            track_height,
            floor_gap,
            track_gap,
        } => {
            // The wall run excludes both legs and the gap between the
            // left leg and the leader panel. The leader is half width,
            // hence the N - 0.5 divisor.
            let effective = length - 2.0 * leg_width - gap;
            let width = (effective - (n - 1.0) * gap) / (n - 0.5);

            let panel_height = config.height - track_height - track_gap - floor_gap;
            if panel_height <= 0.0 {
                return Err(invalid(format!(
                    "track hardware leaves no panel band: height {} mm minus track {} mm \
                     and clearances {} + {} mm",
                    config.height, track_height, floor_gap, track_gap
                )));
            }

            Dimensions {
                standard_width: width,
                leader_width: width / 2.0,
                gap,
                thickness: config.thickness,
                panel_height,
            }
        }
    };

    if dims.standard_width <= 0.0 {
        return Err(invalid(format!(
            "solved panel width {:.1} mm is not positive for length {} mm, \
             {} sections, gap {} mm",
            dims.standard_width, length, config.sections, gap
        )));
    }

    debug!(
        standard = dims.standard_width,
        leader = dims.leader_width,
        panel_height = dims.panel_height,
        "solved wall dimensions"
    );
    Ok(dims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use wall_types::WallError;

    #[test]
    fn test_flush_standard_width() {
        // 2000 mm over 3 sections with 6.4 mm hinge gaps.
        let config = Config {
            total_length: 2000.0,
            height: 2500.0,
            sections: 3,
            hinge_gap: 6.4,
            thickness: 80.0,
            variant: Variant::Flush,
        };
        let dims = solve(&config).unwrap();
        assert_relative_eq!(dims.standard_width, (2000.0 - 2.0 * 6.4) / 3.0, epsilon = 1e-9);
        assert_relative_eq!(dims.standard_width, 662.4, epsilon = 1e-9);
        assert_relative_eq!(dims.leader_width, 662.4, epsilon = 1e-9);
    }

    #[test]
    fn test_leg_track_half_leader() {
        // effective = 2000 - 100 - 5 = 1895; w = (1895 - 10) / 2.5 = 754.
        let config = Config::leg_track_default();
        let dims = solve(&config).unwrap();
        assert_relative_eq!(dims.standard_width, 754.0, epsilon = 1e-9);
        assert_relative_eq!(dims.leader_width, 377.0, epsilon = 1e-9);
        assert_relative_eq!(dims.panel_height, 2500.0 - 50.0 - 10.0 - 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_widths_sum_to_total_length_flush() {
        let config = Config {
            total_length: 3175.5,
            height: 2100.0,
            sections: 5,
            hinge_gap: 6.4,
            thickness: 60.0,
            variant: Variant::Flush,
        };
        let dims = solve(&config).unwrap();
        let total = 5.0 * dims.standard_width + 4.0 * dims.gap;
        assert_relative_eq!(total, config.total_length, epsilon = 1e-9);
    }

    #[test]
    fn test_widths_sum_to_total_length_leg_track() {
        let config = Config {
            total_length: 4200.0,
            height: 2600.0,
            sections: 4,
            hinge_gap: 5.0,
            thickness: 80.0,
            variant: Variant::leg_track(),
        };
        let dims = solve(&config).unwrap();
        // leader + 3 standard + 4 gaps (one between leg and leader) + 2 legs
        let total =
            dims.leader_width + 3.0 * dims.standard_width + 4.0 * dims.gap + 2.0 * 50.0;
        assert_relative_eq!(total, config.total_length, epsilon = 1e-9);
    }

    #[test]
    fn test_degenerate_width_is_rejected() {
        let config = Config {
            total_length: 100.0,
            height: 2500.0,
            sections: 5,
            hinge_gap: 50.0,
            thickness: 80.0,
            variant: Variant::Flush,
        };
        let err = solve(&config).unwrap_err();
        assert!(matches!(err, WallError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_zero_sections_is_rejected() {
        let mut config = Config::flush_default();
        config.sections = 0;
        assert!(matches!(
            solve(&config),
            Err(WallError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_track_taller_than_wall_is_rejected() {
        let mut config = Config::leg_track_default();
        config.height = 60.0;
        assert!(matches!(
            solve(&config),
            Err(WallError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_solver_is_idempotent() {
        let config = Config::leg_track_default();
        assert_eq!(solve(&config).unwrap(), solve(&config).unwrap());
    }
}
