use serde::{Deserialize, Serialize};

use super::point::Point3d;
use super::vector::Vec3;

/// A 4x4 affine transformation matrix stored in column-major order.
///
/// The scene graph only ever composes translations and yaw rotations, so
/// every `Transform` it produces is rigid (orthonormal rotation block
/// plus translation).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Column-major 4x4 matrix entries.
    pub m: [f64; 16],
}

impl Transform {
    pub fn identity() -> Self {
        #[rustfmt::skip]
        let m = [
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ];
        Self { m }
    }

    pub fn translation(dx: f64, dy: f64, dz: f64) -> Self {
        #[rustfmt::skip]
        let m = [
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            dx,  dy,  dz,  1.0,
        ];
        Self { m }
    }

    pub fn from_translation_vec(v: Vec3) -> Self {
        Self::translation(v.x, v.y, v.z)
    }

    /// Rotation around the Y axis by `angle` radians. This is the hinge
    /// axis; panels only ever yaw.
    pub fn rotation_y(angle: f64) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        #[rustfmt::skip]
        let m = [
            c,   0.0, -s,  0.0,
            0.0, 1.0, 0.0, 0.0,
            s,   0.0, c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        ];
        Self { m }
    }

    /// Matrix element access (row, col), 0-indexed.
    fn at(&self, row: usize, col: usize) -> f64 {
        self.m[col * 4 + row]
    }

    /// Transform a point (applies translation).
    pub fn transform_point(&self, p: &Point3d) -> Point3d {
        let x = self.at(0, 0) * p.x + self.at(0, 1) * p.y + self.at(0, 2) * p.z + self.at(0, 3);
        let y = self.at(1, 0) * p.x + self.at(1, 1) * p.y + self.at(1, 2) * p.z + self.at(1, 3);
        let z = self.at(2, 0) * p.x + self.at(2, 1) * p.y + self.at(2, 2) * p.z + self.at(2, 3);
        Point3d::new(x, y, z)
    }

    /// Transform a vector (no translation).
    pub fn transform_vector(&self, v: &Vec3) -> Vec3 {
        let x = self.at(0, 0) * v.x + self.at(0, 1) * v.y + self.at(0, 2) * v.z;
        let y = self.at(1, 0) * v.x + self.at(1, 1) * v.y + self.at(1, 2) * v.z;
        let z = self.at(2, 0) * v.x + self.at(2, 1) * v.y + self.at(2, 2) * v.z;
        Vec3::new(x, y, z)
    }

    /// Compose two transforms: self * other.
    pub fn then(&self, other: &Transform) -> Transform {
        let mut result = [0.0f64; 16];
        for col in 0..4 {
            for row in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.at(row, k) * other.at(k, col);
                }
                result[col * 4 + row] = sum;
            }
        }
        Transform { m: result }
    }

    /// Invert a rigid transform (orthonormal rotation + translation):
    /// transpose the rotation block and counter-rotate the translation.
    pub fn rigid_inverse(&self) -> Self {
        let mut inv = Self::identity();
        // Transposed rotation block.
        for row in 0..3 {
            for col in 0..3 {
                inv.m[col * 4 + row] = self.at(col, row);
            }
        }
        let t = Vec3::new(self.at(0, 3), self.at(1, 3), self.at(2, 3));
        let rt = inv.transform_vector(&t);
        inv.m[12] = -rt.x;
        inv.m[13] = -rt.y;
        inv.m[14] = -rt.z;
        inv
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_identity_transform() {
        let t = Transform::identity();
        let p = Point3d::new(1.0, 2.0, 3.0);
        let result = t.transform_point(&p);
        assert!((result.x - 1.0).abs() < 1e-12);
        assert!((result.y - 2.0).abs() < 1e-12);
        assert!((result.z - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_rotation_y_90() {
        // Yaw by +90 degrees takes +X to -Z.
        let t = Transform::rotation_y(FRAC_PI_2);
        let p = Point3d::new(1.0, 0.0, 0.0);
        let result = t.transform_point(&p);
        assert!(result.x.abs() < 1e-12);
        assert!((result.z - (-1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_compose_translation_then_rotation() {
        let t = Transform::rotation_y(FRAC_PI_2).then(&Transform::translation(1.0, 0.0, 0.0));
        let result = t.transform_point(&Point3d::ORIGIN);
        assert!(result.x.abs() < 1e-12);
        assert!((result.z - (-1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_rigid_inverse_round_trip() {
        let t = Transform::translation(5.0, -3.0, 7.0).then(&Transform::rotation_y(0.7));
        let inv = t.rigid_inverse();
        let p = Point3d::new(1.0, 2.0, 3.0);
        let round_trip = inv.transform_point(&t.transform_point(&p));
        assert_relative_eq!(round_trip.x, p.x, epsilon = 1e-12);
        assert_relative_eq!(round_trip.y, p.y, epsilon = 1e-12);
        assert_relative_eq!(round_trip.z, p.z, epsilon = 1e-12);
    }
}
