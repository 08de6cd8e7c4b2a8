// Shared sculpture layout constants used by the generator and the renderer boundary.

// Tree silhouette
pub const TREE_HEIGHT: f32 = 16.0; // total vertical extent of the assembled tree
pub const BASE_WIDTH: f32 = 6.0; // max radius at the widest (lowest) band
pub const PROFILE_EXPONENT: f32 = 0.85; // h^k radius profile; < 1 bulges the cone outward

// Tier proportions (top absorbs the rounding remainder)
pub const BOTTOM_TIER_PERCENT: usize = 60;
pub const MIDDLE_TIER_PERCENT: usize = 25;

// Tier sampling bands: normalized height measured from the apex, and base scale
pub const BOTTOM_HEIGHT_BAND: [f32; 2] = [0.60, 1.00];
pub const BOTTOM_SCALE_BAND: [f32; 2] = [3.0, 4.5];
pub const MIDDLE_HEIGHT_BAND: [f32; 2] = [0.25, 0.60];
pub const MIDDLE_SCALE_BAND: [f32; 2] = [1.6, 2.6];
pub const TOP_HEIGHT_BAND: [f32; 2] = [0.02, 0.25];
pub const TOP_SCALE_BAND: [f32; 2] = [0.6, 1.2];

// Scattered shell
pub const SCATTER_DISTANCE_BAND: [f32; 2] = [30.0, 45.0]; // horizontal distance from the axis
pub const SCATTER_VERTICAL_SPREAD: f32 = 40.0; // full vertical range, centered on 0

// Size shaping
pub const SIZE_JITTER: f32 = 0.2; // isotropic ±20% on the base scale
pub const STRETCH_BAND: [f32; 2] = [1.8, 3.0]; // long axis of boxes and cylinders
pub const THICKNESS_BAND: [f32; 2] = [0.04, 0.10]; // cross-section of boxes and cylinders
pub const DISK_FLATTEN: f32 = 0.05;
pub const RING_FLATTEN: f32 = 0.04;

// Palette subset drawn per generation (inclusive)
pub const PALETTE_SUBSET_MIN: usize = 4;
pub const PALETTE_SUBSET_MAX: usize = 6;

// Cumulative material thresholds: diffuse / glass / metal / wireframe
pub const MATERIAL_THRESHOLDS: [f32; 3] = [0.35, 0.80, 0.95];

// Element counts
pub const INITIAL_ELEMENT_COUNT: usize = 85; // first layout of a session
pub const REGENERATE_ELEMENT_COUNT: usize = 100; // layout size requested by "regenerate"

// Abstract trunk under the lowest tier
pub const TRUNK_POSITION: [f32; 3] = [0.0, -6.2, 0.0];
pub const TRUNK_RADIUS: f32 = 0.12;
pub const TRUNK_HEIGHT: f32 = 1.2;
pub const TRUNK_SEGMENTS: u32 = 4;
pub const TRUNK_COLOR: u32 = 0x1A1A1A;
