use std::f32::consts::PI;

/// Frame smoothing, beat and motion tuning constants.
///
/// Smoothing factors are applied once per update (gesture result or rendered
/// frame), not per second.
// Control signal smoothing
pub const INTENSITY_ATTACK_ALPHA: f32 = 0.15; // hand visible: follow the pinch quickly
pub const ROTATION_ATTACK_ALPHA: f32 = 0.10;
pub const RELEASE_ALPHA: f32 = 0.05; // no hand: settle back into the tree

// Pinch and palm mapping (normalized image units)
pub const PINCH_DEAD_ZONE: f32 = 0.05; // thumb-index distance below this reads as closed
pub const PINCH_SPAN: f32 = 0.35; // distance range mapped onto [0, 1]
pub const PALM_ROTATION_GAIN: f32 = PI * 2.5; // radians per unit of palm offset from center

// Beat
pub const DEFAULT_BPM: f32 = 120.0;
pub const RIPPLE_GAMMA: f32 = 1.8; // < 2 keeps the pulse round and slow-feeling
pub const CLOCK_RECONCILE_FRACTION: f64 = 0.5; // max offset correction per frame, in frame steps

// Element motion
pub const RIPPLE_DISPLACEMENT: f32 = 0.25; // world units at a full beat
pub const POSE_FOLLOW_ALPHA: f32 = 0.05; // per frame; slower than the signal smoother
pub const DRIFT_RATE_X: f32 = 0.08; // rad/s
pub const DRIFT_RATE_Y: f32 = 0.12; // rad/s
pub const AXIS_EPSILON: f32 = 0.01; // radial length under which the ripple goes vertical

// Ensemble
pub const COMPACT_VIEWPORT_MAX_WIDTH: u32 = 768; // px, exclusive
pub const COMPACT_SCALE: f32 = 0.65;
pub const REGULAR_SCALE: f32 = 1.0;
pub const SCALE_PULSE: f32 = 0.012; // fraction added at a full beat
pub const AMBIENT_BASE: f32 = 0.4;
pub const AMBIENT_PULSE: f32 = 0.15;
pub const SPOT_INTENSITY: f32 = 2.0;
pub const FILL_INTENSITY: f32 = 0.3;
pub const SHADOW_Y: f32 = -6.5; // scaled with the ensemble
pub const SHADOW_EXTENT: f32 = 60.0;
pub const SHADOW_OPACITY: f32 = 0.12;

// Ambient particles
pub const PARTICLE_COUNT: usize = 160;
pub const PARTICLE_HALF_HEIGHT: f32 = 8.0;
pub const PARTICLE_RADIUS_SPAN: f32 = 7.0; // extra radius at the base
pub const PARTICLE_RADIUS_MIN: f32 = 1.2; // radius at the top
pub const PARTICLE_SPEED_BAND: [f32; 2] = [0.5, 2.0];
pub const PARTICLE_PLAY_SPEEDUP: f32 = 4.0; // color cycling while music plays
pub const PARTICLE_SHAKE_RATE: f32 = 25.0; // rad/s
pub const PARTICLE_SHAKE_AMPLITUDE: f32 = 0.08;
pub const PARTICLE_SIZE: f32 = 0.16;
pub const PARTICLE_OPACITY: f32 = 0.7;
