//! Per-panel role sequence for the leg/track variant.

use wall_types::{Dimensions, FaceSide, FoldDirection, PanelRole, PanelSpec};

/// Derive the symbolic role sequence for a leg/track wall.
///
/// The leader is always first and half width. Interior panels strictly
/// alternate by index parity: wheel-bearing at odd indices, mirrored at
/// even. The last panel is always the end cap, overriding the
/// alternation. `direction` selects panel orientation but not which
/// panels carry wheels; orientation is resolved by [`panel_specs`].
pub fn classify(sections: u32, _direction: FoldDirection) -> Vec<PanelRole> {
    let n = sections as usize;
    let mut roles = Vec::with_capacity(n);
    roles.push(PanelRole::Leader);
    for i in 1..n {
        if i == n - 1 {
            roles.push(PanelRole::EndCap);
        } else if i % 2 == 1 {
            roles.push(PanelRole::WheelBearing);
        } else {
            roles.push(PanelRole::Mirrored);
        }
    }
    roles
}

/// Role sequence for the flush variant: every panel is standard.
pub fn flush_roles(sections: u32) -> Vec<PanelRole> {
    vec![PanelRole::Standard; sections as usize]
}

/// Resolve roles into full panel specs: widths from the solved
/// dimensions, faces alternating from the direction's leading side.
pub fn panel_specs(
    dims: &Dimensions,
    roles: &[PanelRole],
    direction: FoldDirection,
) -> Vec<PanelSpec> {
    let mut face = FaceSide::leading(direction);
    roles
        .iter()
        .enumerate()
        .map(|(index, &role)| {
            let spec = PanelSpec {
                index,
                width: dims.width_at(index),
                height: dims.panel_height,
                thickness: dims.thickness,
                role,
                face,
            };
            face = face.opposite();
            spec
        })
        .collect()
}
