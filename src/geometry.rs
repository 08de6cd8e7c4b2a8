use crate::core::{TRUNK_HEIGHT, TRUNK_RADIUS, TRUNK_SEGMENTS};
use crate::layout::ShapeKind;
use glam::Vec3;

/// Primitive arguments a renderer needs to build an element's mesh.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Primitive {
    Torus {
        radius: f32,
        tube: f32,
        radial_segments: u32,
        tubular_segments: u32,
    },
    Cylinder {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        radial_segments: u32,
    },
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
    Cone {
        radius: f32,
        height: f32,
        radial_segments: u32,
    },
    Cuboid {
        width: f32,
        height: f32,
        depth: f32,
    },
}

impl Primitive {
    /// Map a shape and its `(width, height, depth)` size onto mesh arguments.
    pub fn for_shape(shape: ShapeKind, size: Vec3) -> Self {
        let (w, h, d) = (size.x, size.y, size.z);
        match shape {
            ShapeKind::Ring => Primitive::Torus {
                radius: w * 0.5,
                tube: h * 0.15,
                radial_segments: 12,
                tubular_segments: 24,
            },
            ShapeKind::Disk => Primitive::Cylinder {
                radius_top: w * 0.6,
                radius_bottom: w * 0.6,
                height: h,
                radial_segments: 24,
            },
            ShapeKind::Sphere => Primitive::Sphere {
                radius: w * 0.45,
                width_segments: 24,
                height_segments: 24,
            },
            // Three radial segments turn a cone into a triangular pyramid.
            ShapeKind::Triangle => Primitive::Cone {
                radius: w * 0.5,
                height: h,
                radial_segments: 3,
            },
            ShapeKind::Box => Primitive::Cuboid {
                width: w,
                height: h,
                depth: d,
            },
            ShapeKind::Cylinder => Primitive::Cylinder {
                radius_top: w * 0.4,
                radius_bottom: w * 0.4,
                height: h,
                radial_segments: 24,
            },
            ShapeKind::Cone => Primitive::Cone {
                radius: w * 0.5,
                height: h,
                radial_segments: 24,
            },
        }
    }

    /// The fixed low-poly trunk under the tree.
    pub fn trunk() -> Self {
        Primitive::Cylinder {
            radius_top: TRUNK_RADIUS,
            radius_bottom: TRUNK_RADIUS,
            height: TRUNK_HEIGHT,
            radial_segments: TRUNK_SEGMENTS,
        }
    }

    /// Stable index used by packed render records.
    pub fn kind_index(&self) -> u32 {
        match self {
            Primitive::Torus { .. } => 0,
            Primitive::Cylinder { .. } => 1,
            Primitive::Sphere { .. } => 2,
            Primitive::Cone { .. } => 3,
            Primitive::Cuboid { .. } => 4,
        }
    }
}
