use crate::constants::{INTENSITY_ATTACK_ALPHA, RELEASE_ALPHA, ROTATION_ATTACK_ALPHA};
use crate::perception::GestureSample;

/// One exponential smoothing step: `current + (target - current) * alpha`.
///
/// `alpha` is clamped to `[0, 1]`, so the result never overshoots `target`.
#[inline]
pub fn smooth_toward(current: f32, target: f32, alpha: f32) -> f32 {
    current + (target - current) * alpha.clamp(0.0, 1.0)
}

/// Number of release steps until a value starting at `from` is within
/// `tolerance` of zero, or `None` when that can never happen (a non-positive
/// or non-finite tolerance, or a non-finite start).
pub fn release_steps(from: f32, tolerance: f32, alpha: f32) -> Option<u32> {
    if !(tolerance.is_finite() && tolerance > 0.0) || !from.is_finite() {
        return None;
    }
    let from = from.abs();
    if from <= tolerance {
        return Some(0);
    }
    let keep = 1.0 - alpha.clamp(f32::EPSILON, 1.0);
    if keep <= 0.0 {
        return Some(1);
    }
    Some(((tolerance / from).ln() / keep.ln()).ceil() as u32)
}

/// Per-update smoothing factors.
///
/// Attack factors apply while a hand is visible, release while it is not.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothingParams {
    pub intensity_attack: f32,
    pub rotation_attack: f32,
    pub release: f32,
}

impl Default for SmoothingParams {
    fn default() -> Self {
        Self {
            intensity_attack: INTENSITY_ATTACK_ALPHA,
            rotation_attack: ROTATION_ATTACK_ALPHA,
            release: RELEASE_ALPHA,
        }
    }
}

/// Turns intermittent gesture samples into the smoothed intensity and rotation.
#[derive(Clone, Debug)]
pub struct SignalSmoother {
    pub params: SmoothingParams,
    intensity: f32,
    rotation: f32,
}

impl SignalSmoother {
    pub fn new(params: SmoothingParams) -> Self {
        Self {
            params,
            intensity: 0.0,
            rotation: 0.0,
        }
    }

    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Feed one perception result. `None` means no hand in this result:
    /// intensity relaxes toward the assembled tree and rotation holds.
    ///
    /// A non-finite openness counts as no hand; a non-finite rotation leaves
    /// the rotation untouched.
    pub fn ingest(&mut self, sample: Option<GestureSample>) {
        match sample.filter(|s| s.openness.is_finite()) {
            Some(s) => {
                self.intensity = smooth_toward(
                    self.intensity,
                    s.openness.clamp(0.0, 1.0),
                    self.params.intensity_attack,
                )
                .clamp(0.0, 1.0);
                if s.rotation.is_finite() {
                    self.rotation =
                        smooth_toward(self.rotation, s.rotation, self.params.rotation_attack);
                }
            }
            None => {
                self.intensity =
                    smooth_toward(self.intensity, 0.0, self.params.release).clamp(0.0, 1.0);
            }
        }
    }

    /// Detection is off or not ready: both signals settle back to rest.
    pub fn relax(&mut self) {
        self.intensity = smooth_toward(self.intensity, 0.0, self.params.release).clamp(0.0, 1.0);
        self.rotation = smooth_toward(self.rotation, 0.0, self.params.release);
    }

    /// Direct override from a slider-style collaborator.
    pub fn set_intensity(&mut self, value: f32) {
        self.intensity = if value.is_finite() {
            value.clamp(0.0, 1.0)
        } else {
            0.0
        };
    }
}

impl Default for SignalSmoother {
    fn default() -> Self {
        Self::new(SmoothingParams::default())
    }
}
