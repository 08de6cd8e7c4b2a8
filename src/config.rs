use crate::animator::AnimatorParams;
use crate::beat::BeatParams;
use crate::core::{INITIAL_ELEMENT_COUNT, REGENERATE_ELEMENT_COUNT};
use crate::ensemble::EnsembleParams;
use crate::layout::LayoutParams;
use crate::particles::ParticleParams;
use crate::smoothing::SmoothingParams;

/// Everything a [`crate::scene::Scene`] is built from.
///
/// - `initial_count` is the first layout's size, `regenerate_count` the size
///   used by [`crate::scene::Scene::regenerate_default`]
/// - `seed` makes layouts and particles reproducible; `None` draws from entropy
/// - `viewport_width` selects the responsive baseline scale
#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub initial_count: usize,
    pub regenerate_count: usize,
    pub seed: Option<u64>,
    pub viewport_width: u32,
    pub layout: LayoutParams,
    pub smoothing: SmoothingParams,
    pub beat: BeatParams,
    pub animator: AnimatorParams,
    pub ensemble: EnsembleParams,
    pub particles: ParticleParams,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            initial_count: INITIAL_ELEMENT_COUNT,
            regenerate_count: REGENERATE_ELEMENT_COUNT,
            seed: None,
            viewport_width: 1280,
            layout: LayoutParams::default(),
            smoothing: SmoothingParams::default(),
            beat: BeatParams::default(),
            animator: AnimatorParams::default(),
            ensemble: EnsembleParams::default(),
            particles: ParticleParams::default(),
        }
    }
}

impl SceneConfig {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }
}
