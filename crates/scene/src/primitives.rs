use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    /// Key into the scene's material store.
    pub struct MaterialId;
}

/// Linear RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Parse a 0xRRGGBB accent color as supplied by the UI.
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
        }
    }
}

/// Surface description handed to the renderer. The configurator only
/// tweaks color; the shading parameters are fixed per material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub name: String,
    pub color: Color,
    pub metalness: f32,
    pub roughness: f32,
}

impl Material {
    pub fn new(name: &str, color: Color, metalness: f32, roughness: f32) -> Self {
        Self {
            name: name.to_string(),
            color,
            metalness,
            roughness,
        }
    }
}

/// Parametric mesh shapes the renderer can construct. Dimensions in mm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape")]
pub enum MeshPrimitive {
    Box {
        width: f64,
        height: f64,
        depth: f64,
    },
    Cylinder {
        radius: f64,
        height: f64,
        segments: u32,
    },
}

impl MeshPrimitive {
    pub fn cuboid(width: f64, height: f64, depth: f64) -> Self {
        MeshPrimitive::Box {
            width,
            height,
            depth,
        }
    }

    pub fn cylinder(radius: f64, height: f64, segments: u32) -> Self {
        MeshPrimitive::Cylinder {
            radius,
            height,
            segments,
        }
    }
}

/// A primitive bound to a material, carried by a scene node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshInstance {
    pub primitive: MeshPrimitive,
    pub material: MaterialId,
}
