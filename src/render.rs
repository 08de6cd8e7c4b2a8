//! What the rendering collaborator receives each frame.
//!
//! [`RenderFrame`] is the structured view; [`InstanceRaw`] and
//! [`ParticleVertex`] are the packed records ready for a GPU buffer.

use crate::animator::LivePose;
use crate::constants::{PARTICLE_OPACITY, PARTICLE_SIZE};
use crate::core::TRUNK_POSITION;
use crate::ensemble::EnsembleState;
use crate::geometry::Primitive;
use crate::layout::{Element, ElementId};
use crate::material::PhysicalMaterial;
use crate::particles::ParticleSample;
use crate::perception::FaceList;
use glam::{EulerRot, Mat4, Quat, Vec3};

/// Local transform of one drawable inside the ensemble group.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LiveTransform {
    pub position: Vec3,
    /// XYZ Euler angles, radians.
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl LiveTransform {
    pub fn matrix(&self) -> Mat4 {
        let r = self.rotation;
        Mat4::from_scale_rotation_translation(
            self.scale,
            Quat::from_euler(EulerRot::XYZ, r.x, r.y, r.z),
            self.position,
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DrawItem {
    /// `None` for static scenery such as the trunk.
    pub id: Option<ElementId>,
    pub transform: LiveTransform,
    pub primitive: Primitive,
    pub material: PhysicalMaterial,
}

impl DrawItem {
    pub fn for_element(element: &Element, pose: &LivePose) -> Self {
        Self {
            id: Some(element.id),
            transform: LiveTransform {
                position: pose.position,
                rotation: element.rotation + pose.drift,
                scale: Vec3::ONE,
            },
            primitive: Primitive::for_shape(element.shape, element.size),
            material: PhysicalMaterial::for_kind(element.material, element.color),
        }
    }

    pub fn trunk() -> Self {
        Self {
            id: None,
            transform: LiveTransform {
                position: Vec3::from_array(TRUNK_POSITION),
                rotation: Vec3::ZERO,
                scale: Vec3::ONE,
            },
            primitive: Primitive::trunk(),
            material: PhysicalMaterial::trunk(),
        }
    }
}

/// Packed per-instance record.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
    /// rgb + intensity
    pub emissive: [f32; 4],
    /// roughness, metalness, transmission, thickness
    pub surface: [f32; 4],
    /// primitive kind, material kind, wireframe flag, unused
    pub kinds: [u32; 4],
}

impl InstanceRaw {
    pub fn new(group: Mat4, item: &DrawItem) -> Self {
        let m = &item.material;
        let [r, g, b] = m.color;
        let [er, eg, eb] = m.emissive;
        Self {
            model: (group * item.transform.matrix()).to_cols_array_2d(),
            color: [r, g, b, m.opacity],
            emissive: [er, eg, eb, m.emissive_intensity],
            surface: [m.roughness, m.metalness, m.transmission, m.thickness],
            kinds: [
                item.primitive.kind_index(),
                m.kind.index(),
                m.wireframe as u32,
                0,
            ],
        }
    }
}

/// Packed glitter point.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleVertex {
    pub position: [f32; 3],
    pub size: f32,
    pub color: [f32; 4],
}

impl From<ParticleSample> for ParticleVertex {
    fn from(p: ParticleSample) -> Self {
        let [r, g, b] = p.color;
        Self {
            position: p.position.to_array(),
            size: PARTICLE_SIZE,
            color: [r, g, b, PARTICLE_OPACITY],
        }
    }
}

/// Everything needed to draw one frame.
#[derive(Clone, Debug)]
pub struct RenderFrame {
    pub ensemble: EnsembleState,
    /// Elements in layout order, followed by static scenery.
    pub items: Vec<DrawItem>,
    pub particles: Vec<ParticleVertex>,
    pub faces: FaceList,
}

impl RenderFrame {
    /// Group transform: uniform pulse scale around the yawed tree.
    pub fn group_matrix(&self) -> Mat4 {
        Mat4::from_scale(Vec3::splat(self.ensemble.scale))
            * Mat4::from_rotation_y(self.ensemble.rotation_y)
    }

    pub fn elements(&self) -> impl Iterator<Item = &DrawItem> {
        self.items.iter().filter(|i| i.id.is_some())
    }

    pub fn instances(&self) -> Vec<InstanceRaw> {
        let group = self.group_matrix();
        self.items
            .iter()
            .map(|item| InstanceRaw::new(group, item))
            .collect()
    }

    pub fn particle_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.particles)
    }
}
