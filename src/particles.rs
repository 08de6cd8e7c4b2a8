//! Decorative glitter around the tree.
//!
//! Independent of the element set: fixed count, placed once, then only the
//! color (and, while music plays, a small shared-frequency jitter) changes.

use crate::constants::*;
use crate::core::{rgb_from_hex, GLITTER_GOLD, GLITTER_PINK};
use crate::rng::Span;
use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleParams {
    pub count: usize,
    pub half_height: f32,
    pub radius_span: f32,
    pub radius_min: f32,
    pub speed: Span,
    pub play_speedup: f32,
    pub shake_rate: f32,
    pub shake_amplitude: f32,
    pub color_a: [f32; 3],
    pub color_b: [f32; 3],
}

impl Default for ParticleParams {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            half_height: PARTICLE_HALF_HEIGHT,
            radius_span: PARTICLE_RADIUS_SPAN,
            radius_min: PARTICLE_RADIUS_MIN,
            speed: Span::from_band(PARTICLE_SPEED_BAND),
            play_speedup: PARTICLE_PLAY_SPEEDUP,
            shake_rate: PARTICLE_SHAKE_RATE,
            shake_amplitude: PARTICLE_SHAKE_AMPLITUDE,
            color_a: rgb_from_hex(GLITTER_PINK),
            color_b: rgb_from_hex(GLITTER_GOLD),
        }
    }
}

impl ParticleParams {
    /// Allowed radius at height `y`; widest at the bottom of the field.
    #[inline]
    pub fn max_radius(&self, y: f32) -> f32 {
        let normalized = (y + self.half_height) / (2.0 * self.half_height);
        (1.0 - normalized) * self.radius_span + self.radius_min
    }
}

#[derive(Clone, Copy, Debug)]
struct Particle {
    base: Vec3,
    phase: f32,
    speed: f32,
    jitter: Vec3,
}

/// Evaluated particle for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleSample {
    pub position: Vec3,
    pub color: [f32; 3],
}

#[derive(Clone, Debug)]
pub struct ParticleField {
    pub params: ParticleParams,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(params: ParticleParams, rng: &mut R) -> Self {
        let height = Span::new(-params.half_height, params.half_height);
        let jitter = Span::new(-0.5, 0.5);
        let particles = (0..params.count)
            .map(|_| {
                let y = height.sample(rng);
                let angle = rng.gen::<f32>() * TAU;
                let r = rng.gen::<f32>() * params.max_radius(y);
                Particle {
                    base: Vec3::new(angle.cos() * r, y, angle.sin() * r),
                    phase: rng.gen::<f32>() * TAU,
                    speed: params.speed.sample(rng),
                    jitter: Vec3::new(jitter.sample(rng), jitter.sample(rng), jitter.sample(rng)),
                }
            })
            .collect();
        Self { params, particles }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Rest positions, independent of time and music.
    pub fn base_positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.particles.iter().map(|p| p.base)
    }

    /// Evaluate every particle at `time_sec`.
    ///
    /// Phases are computed in f64 and only the bounded sine is narrowed, so
    /// long sessions keep full resolution.
    pub fn sample(
        &self,
        time_sec: f64,
        music_playing: bool,
    ) -> impl Iterator<Item = ParticleSample> + '_ {
        let shake = if music_playing {
            (time_sec * self.params.shake_rate as f64).sin() as f32 * self.params.shake_amplitude
        } else {
            0.0
        };
        let speedup = if music_playing {
            self.params.play_speedup
        } else {
            1.0
        };
        let a = Vec3::from_array(self.params.color_a);
        let b = Vec3::from_array(self.params.color_b);
        self.particles.iter().map(move |p| {
            let angle = time_sec * (p.speed * speedup) as f64 + p.phase as f64;
            let breathing = (angle.sin() as f32 + 1.0) * 0.5;
            ParticleSample {
                position: p.base + p.jitter * shake,
                color: a.lerp(b, breathing).to_array(),
            }
        })
    }
}
