//! Per-element, per-frame motion.
//!
//! Each frame an element's target is computed in a fixed order:
//! 1. blend assembled -> scattered by the global intensity,
//! 2. push the target outward along the element's own radial direction by
//!    the beat ripple,
//! 3. let the live position follow the target exponentially.
//!
//! Idle drift is accumulated independently of intensity and beat. Live state
//! lives in a side table keyed by [`ElementId`], never on the element itself.

use crate::constants::{
    AXIS_EPSILON, DRIFT_RATE_X, DRIFT_RATE_Y, POSE_FOLLOW_ALPHA, RIPPLE_DISPLACEMENT,
};
use crate::layout::{Element, ElementId, ElementSet};
use fnv::FnvHashMap;
use glam::{Vec2, Vec3};
use std::f32::consts::TAU;

/// Control scalars handed to the animator every frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ControlState {
    /// 0 = assembled, 1 = scattered.
    pub intensity: f32,
    pub rotation_y: f32,
    /// Non-negative ripple factor for this frame.
    pub beat_factor: f32,
    pub beat_active: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimatorParams {
    pub ripple_displacement: f32,
    /// Per-frame follow factor of the live position.
    pub follow_alpha: f32,
    /// Idle angular velocity about X and Y, rad/s.
    pub drift_rate: Vec2,
    pub axis_epsilon: f32,
}

impl Default for AnimatorParams {
    fn default() -> Self {
        Self {
            ripple_displacement: RIPPLE_DISPLACEMENT,
            follow_alpha: POSE_FOLLOW_ALPHA,
            drift_rate: Vec2::new(DRIFT_RATE_X, DRIFT_RATE_Y),
            axis_epsilon: AXIS_EPSILON,
        }
    }
}

/// Ephemeral pose carried across frames.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LivePose {
    pub position: Vec3,
    /// Accumulated drift on top of the element's fixed rotation, XYZ radians.
    pub drift: Vec3,
}

/// Componentwise blend that returns `a` at `t = 0` and `b` at `t = 1` exactly.
#[inline]
pub fn lerp_position(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a * (1.0 - t) + b * t
}

/// Unit direction the ripple pushes an element along.
///
/// Horizontal projection of the assembled position; straight up when the
/// element sits on the vertical axis.
#[inline]
pub fn ripple_direction(assembled: Vec3, axis_epsilon: f32) -> Vec3 {
    let radial = Vec3::new(assembled.x, 0.0, assembled.z);
    let len = radial.length();
    if len > axis_epsilon {
        radial / len
    } else {
        Vec3::Y
    }
}

/// Target position of one element for this frame.
pub fn target_position(element: &Element, control: &ControlState, params: &AnimatorParams) -> Vec3 {
    let base = lerp_position(element.assembled, element.scattered, control.intensity);
    if control.beat_active && control.beat_factor > 0.0 {
        base + ripple_direction(element.assembled, params.axis_epsilon)
            * (params.ripple_displacement * control.beat_factor)
    } else {
        base
    }
}

/// Owns live poses for every element of the current set.
#[derive(Clone, Debug, Default)]
pub struct ElementAnimator {
    pub params: AnimatorParams,
    poses: FnvHashMap<ElementId, LivePose>,
    generation: Option<u32>,
}

impl ElementAnimator {
    pub fn new(params: AnimatorParams) -> Self {
        Self {
            params,
            poses: FnvHashMap::default(),
            generation: None,
        }
    }

    /// Discard all live state and create one fresh slot per element.
    ///
    /// New elements spawn at the ensemble origin and grow out to their target.
    pub fn reset(&mut self, set: &ElementSet) {
        self.poses.clear();
        self.poses.reserve(set.len());
        for el in set {
            self.poses.insert(el.id, LivePose::default());
        }
        self.generation = Some(set.generation());
    }

    pub fn len(&self) -> usize {
        self.poses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }

    pub fn pose(&self, id: ElementId) -> Option<&LivePose> {
        self.poses.get(&id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &ElementId> {
        self.poses.keys()
    }

    /// Advance every element by one frame.
    pub fn step(&mut self, set: &ElementSet, control: &ControlState, dt_sec: f32) {
        if self.generation != Some(set.generation()) {
            self.reset(set);
        }
        let alpha = self.params.follow_alpha.clamp(0.0, 1.0);
        let drift_step = Vec3::new(
            self.params.drift_rate.x * dt_sec,
            self.params.drift_rate.y * dt_sec,
            0.0,
        );
        for el in set {
            let target = target_position(el, control, &self.params);
            let pose = self.poses.entry(el.id).or_default();
            pose.position += (target - pose.position) * alpha;
            pose.drift = wrap_angles(pose.drift + drift_step);
        }
    }
}

#[inline]
fn wrap_angles(v: Vec3) -> Vec3 {
    Vec3::new(v.x.rem_euclid(TAU), v.y.rem_euclid(TAU), v.z.rem_euclid(TAU))
}
