//! Single-threaded frame orchestration.
//!
//! External producers (perception, audio, UI) write into the scene between
//! frames; `frame` then reads the smoothed scalars once, runs every component
//! in order and hands back a [`RenderFrame`]. Nothing here blocks.

use crate::animator::{ControlState, ElementAnimator};
use crate::beat::{BeatOracle, BeatSample};
use crate::config::SceneConfig;
use crate::ensemble::{EnsembleModulator, ViewportClass};
use crate::error::TreeResult;
use crate::layout::{ElementSet, LayoutGenerator};
use crate::particles::ParticleField;
use crate::perception::{FaceList, PerceptionUpdate};
use crate::render::{DrawItem, ParticleVertex, RenderFrame};
use crate::rng::{derive_stream, session_rng};
use crate::smoothing::SignalSmoother;
use rand::Rng;

const LAYOUT_STREAM: u64 = 0;
const PARTICLE_STREAM: u64 = 1;

/// Perception lifecycle as seen by the scene.
///
/// Updates only count once detection is both switched on and ready;
/// otherwise the smoother takes the decay branch every frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DetectionState {
    pub active: bool,
    pub ready: bool,
}

impl DetectionState {
    pub fn is_live(&self) -> bool {
        self.active && self.ready
    }
}

pub struct Scene {
    pub config: SceneConfig,
    generator: LayoutGenerator,
    elements: ElementSet,
    animator: ElementAnimator,
    smoother: SignalSmoother,
    oracle: BeatOracle,
    ensemble: EnsembleModulator,
    particles: ParticleField,
    detection: DetectionState,
    music_playing: bool,
    faces: FaceList,
    last_beat: BeatSample,
}

impl Scene {
    pub fn new(config: SceneConfig) -> TreeResult<Self> {
        let base_seed: u64 = session_rng(config.seed).gen();
        let mut generator =
            LayoutGenerator::new(config.layout.clone(), derive_stream(base_seed, LAYOUT_STREAM));
        let elements = generator.generate(config.initial_count)?;

        let mut animator = ElementAnimator::new(config.animator);
        animator.reset(&elements);

        let particles = ParticleField::new(
            config.particles,
            &mut derive_stream(base_seed, PARTICLE_STREAM),
        );

        log::info!(
            "[scene] ready: {} elements, {} particles, bpm {}",
            elements.len(),
            particles.len(),
            config.beat.bpm
        );

        Ok(Self {
            generator,
            elements,
            animator,
            smoother: SignalSmoother::new(config.smoothing),
            oracle: BeatOracle::new(config.beat),
            ensemble: EnsembleModulator::new(
                config.ensemble,
                ViewportClass::from_width(config.viewport_width),
            ),
            particles,
            detection: DetectionState::default(),
            music_playing: false,
            faces: FaceList::new(),
            last_beat: BeatSample::default(),
            config,
        })
    }

    /// Replace the element set wholesale. On error the current set is kept.
    pub fn regenerate(&mut self, count: usize) -> TreeResult<()> {
        let set = self.generator.generate(count)?;
        self.animator.reset(&set);
        log::info!(
            "[scene] regenerated: generation {} with {} elements",
            set.generation(),
            set.len()
        );
        self.elements = set;
        Ok(())
    }

    pub fn regenerate_default(&mut self) -> TreeResult<()> {
        self.regenerate(self.config.regenerate_count)
    }

    pub fn elements(&self) -> &ElementSet {
        &self.elements
    }

    pub fn animator(&self) -> &ElementAnimator {
        &self.animator
    }

    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    pub fn oracle(&self) -> &BeatOracle {
        &self.oracle
    }

    pub fn detection(&self) -> DetectionState {
        self.detection
    }

    pub fn intensity(&self) -> f32 {
        self.smoother.intensity()
    }

    pub fn rotation_y(&self) -> f32 {
        self.smoother.rotation()
    }

    pub fn music_playing(&self) -> bool {
        self.music_playing
    }

    pub fn last_beat(&self) -> BeatSample {
        self.last_beat
    }

    /// Switch gesture detection on or off. Turning it off drops readiness,
    /// so the signals relax to rest instead of snapping.
    pub fn set_detection_active(&mut self, active: bool) {
        if self.detection.active == active {
            return;
        }
        self.detection.active = active;
        if !active {
            self.detection.ready = false;
            self.faces.clear();
        }
        log::info!("[scene] detection active={}", active);
    }

    /// The perception service finished loading and will start producing results.
    pub fn mark_perception_ready(&mut self) {
        if self.detection.active && !self.detection.ready {
            self.detection.ready = true;
            log::info!("[scene] perception ready");
        }
    }

    /// Feed one perception result. Returns false when it was ignored because
    /// detection is not live.
    pub fn ingest_perception(&mut self, update: &PerceptionUpdate) -> bool {
        if !self.detection.is_live() {
            return false;
        }
        self.smoother.ingest(update.gesture());
        self.faces = update.faces.clone();
        true
    }

    pub fn set_intensity(&mut self, value: f32) {
        self.smoother.set_intensity(value);
    }

    pub fn set_music_playing(&mut self, playing: bool) {
        if self.music_playing != playing {
            self.music_playing = playing;
            log::info!("[scene] music playing={}", playing);
        }
    }

    pub fn set_viewport_width(&mut self, width_px: u32) {
        self.ensemble.set_viewport(ViewportClass::from_width(width_px));
    }

    /// Run one animation frame. `audio_time` is the transport position while
    /// audio is playing.
    pub fn frame(&mut self, dt_sec: f32, audio_time: Option<f64>) -> RenderFrame {
        let dt_sec = if dt_sec.is_finite() { dt_sec.max(0.0) } else { 0.0 };
        if !self.detection.is_live() {
            self.smoother.relax();
        }

        let beat = self
            .oracle
            .advance(dt_sec as f64, audio_time, self.music_playing);
        self.last_beat = beat;

        let control = ControlState {
            intensity: self.smoother.intensity(),
            rotation_y: self.smoother.rotation(),
            beat_factor: beat.ripple,
            beat_active: self.music_playing,
        };
        self.animator.step(&self.elements, &control, dt_sec);

        let ensemble = self
            .ensemble
            .modulate(beat.ensemble, self.music_playing, control.rotation_y);

        let mut items = Vec::with_capacity(self.elements.len() + 1);
        for el in &self.elements {
            let pose = self.animator.pose(el.id).copied().unwrap_or_default();
            items.push(DrawItem::for_element(el, &pose));
        }
        items.push(DrawItem::trunk());

        let particle_time = self.oracle.clock().free_time();
        let particles: Vec<ParticleVertex> = self
            .particles
            .sample(particle_time, self.music_playing)
            .map(ParticleVertex::from)
            .collect();

        RenderFrame {
            ensemble,
            items,
            particles,
            faces: self.faces.clone(),
        }
    }
}
