//! Procedural layout of the sculpture.
//!
//! A layout is produced in one pass and never mutated afterwards: each element
//! receives a shape, a material, a palette color, a size, a fixed rotation and
//! two anchor positions (assembled and scattered). The animator blends between
//! the anchors; regeneration replaces the whole [`ElementSet`].

use crate::core::*;
use crate::error::{TreeError, TreeResult};
use crate::palette::Palette;
use crate::rng::Span;
use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::{PI, TAU};
use std::fmt;

/// Geometric primitive family of an element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Ring,
    Disk,
    Sphere,
    Triangle,
    Box,
    Cylinder,
    Cone,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::Ring,
        ShapeKind::Disk,
        ShapeKind::Sphere,
        ShapeKind::Triangle,
        ShapeKind::Box,
        ShapeKind::Cylinder,
        ShapeKind::Cone,
    ];

    /// Stable index used by packed render records.
    pub fn index(self) -> u32 {
        self as u32
    }

    /// Boxes and cylinders are stretched into rods or slats.
    pub fn is_elongated(self) -> bool {
        matches!(self, ShapeKind::Box | ShapeKind::Cylinder)
    }
}

/// Surface family; mapped to physical parameters in [`crate::material`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MaterialKind {
    Diffuse,
    Glass,
    Metal,
    Wireframe,
    Emissive,
}

impl MaterialKind {
    pub const ALL: [MaterialKind; 5] = [
        MaterialKind::Diffuse,
        MaterialKind::Glass,
        MaterialKind::Metal,
        MaterialKind::Wireframe,
        MaterialKind::Emissive,
    ];

    pub fn index(self) -> u32 {
        self as u32
    }

    /// Map a uniform roll in `[0, 1)` through the cumulative layout distribution.
    ///
    /// `Emissive` is part of the closed set but is never produced here.
    pub fn from_roll(roll: f32) -> Self {
        let [diffuse, glass, metal] = MATERIAL_THRESHOLDS;
        if roll < diffuse {
            MaterialKind::Diffuse
        } else if roll < glass {
            MaterialKind::Glass
        } else if roll < metal {
            MaterialKind::Metal
        } else {
            MaterialKind::Wireframe
        }
    }
}

/// Height band an element was generated in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tier {
    Bottom,
    Middle,
    Top,
}

/// Element counts per tier for one generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TierCounts {
    pub bottom: usize,
    pub middle: usize,
    pub top: usize,
}

impl TierCounts {
    /// Split `count` 60/25/15; the top tier takes whatever rounding leaves over.
    pub fn partition(count: usize) -> Self {
        let bottom = count * BOTTOM_TIER_PERCENT / 100;
        let middle = count * MIDDLE_TIER_PERCENT / 100;
        let top = count - bottom - middle;
        Self {
            bottom,
            middle,
            top,
        }
    }

    pub fn total(&self) -> usize {
        self.bottom + self.middle + self.top
    }

    fn tiers(&self) -> impl Iterator<Item = Tier> {
        let (b, m, t) = (self.bottom, self.middle, self.top);
        std::iter::repeat(Tier::Bottom)
            .take(b)
            .chain(std::iter::repeat(Tier::Middle).take(m))
            .chain(std::iter::repeat(Tier::Top).take(t))
    }
}

/// Opaque element identity, unique across regenerations of one generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ElementId {
    generation: u32,
    index: u32,
    salt: u32,
}

impl ElementId {
    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn index(&self) -> u32 {
        self.index
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "el-{}-{:08x}", self.index, self.salt)
    }
}

/// One immutable sculpture piece.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub id: ElementId,
    pub tier: Tier,
    pub shape: ShapeKind,
    pub material: MaterialKind,
    pub color: [f32; 3],
    /// Width, height, depth; interpreted per shape by [`crate::geometry`].
    pub size: Vec3,
    /// Fixed XYZ Euler angles assigned at creation.
    pub rotation: Vec3,
    pub assembled: Vec3,
    pub scattered: Vec3,
}

/// The complete, atomically created layout.
#[derive(Clone, Debug)]
pub struct ElementSet {
    generation: u32,
    palette: Palette,
    tiers: TierCounts,
    elements: Vec<Element>,
}

impl ElementSet {
    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn tier_counts(&self) -> TierCounts {
        self.tiers
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.elements.iter()
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        if id.generation != self.generation {
            return None;
        }
        self.elements
            .get(id.index as usize)
            .filter(|e| e.id == id)
    }
}

impl<'a> IntoIterator for &'a ElementSet {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

/// Sampling bands for one tier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TierSpec {
    /// Normalized height measured from the apex (0) to the base (1).
    pub height: Span,
    pub scale: Span,
}

/// Tunable silhouette of the generated tree.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutParams {
    pub tree_height: f32,
    pub base_width: f32,
    pub profile_exponent: f32,
    pub bottom: TierSpec,
    pub middle: TierSpec,
    pub top: TierSpec,
    pub scatter_distance: Span,
    pub scatter_vertical_spread: f32,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            tree_height: TREE_HEIGHT,
            base_width: BASE_WIDTH,
            profile_exponent: PROFILE_EXPONENT,
            bottom: TierSpec {
                height: Span::from_band(BOTTOM_HEIGHT_BAND),
                scale: Span::from_band(BOTTOM_SCALE_BAND),
            },
            middle: TierSpec {
                height: Span::from_band(MIDDLE_HEIGHT_BAND),
                scale: Span::from_band(MIDDLE_SCALE_BAND),
            },
            top: TierSpec {
                height: Span::from_band(TOP_HEIGHT_BAND),
                scale: Span::from_band(TOP_SCALE_BAND),
            },
            scatter_distance: Span::from_band(SCATTER_DISTANCE_BAND),
            scatter_vertical_spread: SCATTER_VERTICAL_SPREAD,
        }
    }
}

impl LayoutParams {
    pub fn tier(&self, tier: Tier) -> &TierSpec {
        match tier {
            Tier::Bottom => &self.bottom,
            Tier::Middle => &self.middle,
            Tier::Top => &self.top,
        }
    }

    /// Largest radius an element may sit at for normalized height `h`.
    #[inline]
    pub fn max_radius(&self, h: f32) -> f32 {
        h.powf(self.profile_exponent) * self.base_width
    }

    /// World-space vertical coordinate for normalized height `h`, centered on 0.
    #[inline]
    pub fn vertical(&self, h: f32) -> f32 {
        (1.0 - h) * self.tree_height - self.tree_height * 0.5
    }
}

/// Produces element sets from a seedable random source.
///
/// Every call to [`LayoutGenerator::generate`] bumps the generation counter so
/// ids from earlier sets can never collide with ids of the new one.
pub struct LayoutGenerator {
    pub params: LayoutParams,
    rng: StdRng,
    generation: u32,
}

impl LayoutGenerator {
    pub fn new(params: LayoutParams, rng: StdRng) -> Self {
        Self {
            params,
            rng,
            generation: 0,
        }
    }

    /// Generation number the next call to `generate` will use.
    pub fn next_generation(&self) -> u32 {
        self.generation
    }

    pub fn generate(&mut self, count: usize) -> TreeResult<ElementSet> {
        if count == 0 {
            return Err(TreeError::InvalidArgument {
                what: "element count",
                value: count,
            });
        }
        let generation = self.generation;
        let set = generate_layout(count, generation, &self.params, &mut self.rng);
        self.generation = self.generation.wrapping_add(1);
        log::debug!(
            "[layout] generation {} -> {} elements (bottom {} / middle {} / top {}), {} palette colors",
            generation,
            set.len(),
            set.tiers.bottom,
            set.tiers.middle,
            set.tiers.top,
            set.palette.len()
        );
        Ok(set)
    }
}

fn generate_layout<R: Rng + ?Sized>(
    count: usize,
    generation: u32,
    params: &LayoutParams,
    rng: &mut R,
) -> ElementSet {
    let tiers = TierCounts::partition(count);
    let palette = Palette::sample(rng);

    let mut elements: Vec<Element> = tiers
        .tiers()
        .enumerate()
        .map(|(index, tier)| create_element(tier, index as u32, generation, params, &palette, rng))
        .collect();

    // Materials are rolled after placement, one fresh draw per element.
    for el in &mut elements {
        el.material = MaterialKind::from_roll(rng.gen::<f32>());
    }

    ElementSet {
        generation,
        palette,
        tiers,
        elements,
    }
}

fn create_element<R: Rng + ?Sized>(
    tier: Tier,
    index: u32,
    generation: u32,
    params: &LayoutParams,
    palette: &Palette,
    rng: &mut R,
) -> Element {
    let band = params.tier(tier);
    let h = band.height.sample(rng);
    let base_scale = band.scale.sample(rng);

    let r = rng.gen::<f32>() * params.max_radius(h);
    let angle = rng.gen::<f32>() * TAU;
    let assembled = Vec3::new(angle.cos() * r, params.vertical(h), angle.sin() * r);

    let scatter_angle = rng.gen::<f32>() * TAU;
    let scatter_dist = params.scatter_distance.sample(rng);
    let scattered = Vec3::new(
        scatter_angle.cos() * scatter_dist,
        (rng.gen::<f32>() - 0.5) * params.scatter_vertical_spread,
        scatter_angle.sin() * scatter_dist,
    );

    let shape = ShapeKind::ALL[rng.gen_range(0..ShapeKind::ALL.len())];
    let size = shape_size(shape, base_scale, rng);
    let color = palette.pick(rng);
    let turn = Span::new(0.0, PI);
    let rotation = Vec3::new(turn.sample(rng), turn.sample(rng), turn.sample(rng));

    Element {
        id: ElementId {
            generation,
            index,
            salt: rng.gen(),
        },
        tier,
        shape,
        material: MaterialKind::Diffuse,
        color,
        size,
        rotation,
        assembled,
        scattered,
    }
}

/// Isotropic jittered scale, then per-shape stretching or flattening.
fn shape_size<R: Rng + ?Sized>(shape: ShapeKind, base_scale: f32, rng: &mut R) -> Vec3 {
    let jitter = Span::new(1.0 - SIZE_JITTER, 1.0 + SIZE_JITTER).sample(rng);
    let mut size = [base_scale * jitter; 3];
    if shape.is_elongated() {
        let long_axis = rng.gen_range(0..3);
        size[long_axis] *= Span::from_band(STRETCH_BAND).sample(rng);
        let thickness = Span::from_band(THICKNESS_BAND).sample(rng);
        size[(long_axis + 1) % 3] *= thickness;
        size[(long_axis + 2) % 3] *= thickness;
    } else {
        match shape {
            ShapeKind::Disk => size[1] *= DISK_FLATTEN,
            ShapeKind::Ring => size[1] *= RING_FLATTEN,
            _ => {}
        }
    }
    Vec3::from_array(size)
}
