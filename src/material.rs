//! Physical material table.
//!
//! Each [`MaterialKind`] maps to a small fixed set of physically based
//! parameters; only the base color varies per element.

use crate::core::{rgb_from_hex, TRUNK_COLOR};
use crate::layout::MaterialKind;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicalMaterial {
    pub kind: MaterialKind,
    pub color: [f32; 3],
    pub roughness: f32,
    pub metalness: f32,
    pub transmission: f32,
    pub thickness: f32,
    pub opacity: f32,
    pub ior: f32,
    pub env_map_intensity: f32,
    pub clearcoat: f32,
    pub clearcoat_roughness: f32,
    pub emissive: [f32; 3],
    pub emissive_intensity: f32,
    pub wireframe: bool,
    pub transparent: bool,
}

impl PhysicalMaterial {
    fn base(kind: MaterialKind, color: [f32; 3]) -> Self {
        Self {
            kind,
            color,
            roughness: 1.0,
            metalness: 0.0,
            transmission: 0.0,
            thickness: 0.0,
            opacity: 1.0,
            ior: 1.5,
            env_map_intensity: 1.0,
            clearcoat: 0.0,
            clearcoat_roughness: 0.0,
            emissive: [0.0; 3],
            emissive_intensity: 1.0,
            wireframe: false,
            transparent: false,
        }
    }

    pub fn for_kind(kind: MaterialKind, color: [f32; 3]) -> Self {
        let base = Self::base(kind, color);
        match kind {
            MaterialKind::Glass => Self {
                transmission: 0.95,
                thickness: 2.0,
                roughness: 0.65,
                metalness: 0.02,
                transparent: true,
                opacity: 0.9,
                ior: 1.5,
                env_map_intensity: 0.3,
                clearcoat: 0.1,
                clearcoat_roughness: 0.1,
                ..base
            },
            MaterialKind::Metal => Self {
                roughness: 0.75,
                metalness: 0.4,
                env_map_intensity: 0.4,
                ..base
            },
            MaterialKind::Wireframe => Self {
                wireframe: true,
                emissive: color,
                emissive_intensity: 0.6,
                ..base
            },
            MaterialKind::Emissive => Self {
                emissive: color,
                emissive_intensity: 1.0,
                roughness: 0.5,
                ..base
            },
            MaterialKind::Diffuse => Self {
                roughness: 0.9,
                metalness: 0.0,
                env_map_intensity: 0.1,
                ..base
            },
        }
    }

    /// Matte dark finish of the trunk.
    pub fn trunk() -> Self {
        Self {
            roughness: 0.85,
            metalness: 0.2,
            ..Self::base(MaterialKind::Diffuse, rgb_from_hex(TRUNK_COLOR))
        }
    }
}
