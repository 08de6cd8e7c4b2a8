//! Boundary types for the external perception service.
//!
//! The service reports zero or more hands (21 normalized image-space
//! landmarks each) and zero or more face boxes per update. Only the first
//! hand drives the sculpture; faces are passed through untouched for the
//! overlay collaborator.

use crate::constants::{PALM_ROTATION_GAIN, PINCH_DEAD_ZONE, PINCH_SPAN};
use glam::Vec2;
use smallvec::SmallVec;

pub const HAND_LANDMARK_COUNT: usize = 21;
pub const THUMB_TIP: usize = 4;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;

/// One detected hand in normalized image coordinates (`[0, 1]` on both axes).
#[derive(Clone, Debug, PartialEq)]
pub struct HandLandmarks {
    points: [Vec2; HAND_LANDMARK_COUNT],
}

impl HandLandmarks {
    pub fn new(points: [Vec2; HAND_LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    /// Accept a landmark list only when it has exactly 21 points.
    pub fn from_slice(points: &[Vec2]) -> Option<Self> {
        let points: [Vec2; HAND_LANDMARK_COUNT] = points.try_into().ok()?;
        Some(Self { points })
    }

    pub fn point(&self, index: usize) -> Option<Vec2> {
        self.points.get(index).copied()
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Thumb tip to index tip distance.
    pub fn pinch_distance(&self) -> f32 {
        self.points[THUMB_TIP].distance(self.points[INDEX_TIP])
    }

    /// Map the hand pose onto raw control targets.
    pub fn gesture(&self) -> GestureSample {
        let openness = ((self.pinch_distance() - PINCH_DEAD_ZONE) / PINCH_SPAN).clamp(0.0, 1.0);
        let rotation = -(self.points[MIDDLE_MCP].x - 0.5) * PALM_ROTATION_GAIN;
        GestureSample { openness, rotation }
    }
}

/// Face bounding box, center and extent in normalized image coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceBox {
    pub center: Vec2,
    pub size: Vec2,
}

pub type HandList = SmallVec<[HandLandmarks; 2]>;
pub type FaceList = SmallVec<[FaceBox; 4]>;

/// One result delivered by the perception service.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerceptionUpdate {
    pub hands: HandList,
    pub faces: FaceList,
}

impl PerceptionUpdate {
    pub fn with_hand(hand: HandLandmarks) -> Self {
        let mut hands = HandList::new();
        hands.push(hand);
        Self {
            hands,
            faces: FaceList::new(),
        }
    }

    /// Raw targets from the first hand, or `None` when no hand is visible.
    pub fn gesture(&self) -> Option<GestureSample> {
        self.hands.first().map(HandLandmarks::gesture)
    }
}

/// Raw, unsmoothed control targets derived from a hand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSample {
    /// Pinch openness in `[0, 1]`; 1 scatters the sculpture.
    pub openness: f32,
    /// Ensemble yaw target in radians.
    pub rotation: f32,
}
