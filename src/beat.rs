//! Beat phase derived from the audio transport or a free-running clock.
//!
//! [`BeatClock`] owns the two-state source selection. Switching sources never
//! makes the effective time jump: the clock is re-anchored to advance by one
//! frame step, then the leftover offset is bled off by at most
//! [`CLOCK_RECONCILE_FRACTION`] of a frame step per frame until it is locked
//! to the new source again.

use crate::constants::{CLOCK_RECONCILE_FRACTION, DEFAULT_BPM, RIPPLE_GAMMA};
use std::f64::consts::PI;

/// Raw periodic phase in `[-1, 1]`: `sin(time * pi * bpm / 60)`.
#[inline]
pub fn beat_phase(time_sec: f64, bpm: f32) -> f32 {
    (time_sec * PI * bpm as f64 / 60.0).sin() as f32
}

/// How a raw phase is turned into a non-negative beat factor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BeatShape {
    /// `max(0, phase)`: one pulse per half period, silent on the other half.
    HalfWave,
    /// `|phase|^gamma`: a pulse every half period; gamma < 2 keeps it round.
    Rectified { gamma: f32 },
}

impl BeatShape {
    #[inline]
    pub fn apply(self, phase: f32) -> f32 {
        match self {
            BeatShape::HalfWave => phase.max(0.0),
            BeatShape::Rectified { gamma } => phase.abs().powf(gamma),
        }
        .clamp(0.0, 1.0)
    }
}

#[inline]
pub fn beat_factor(time_sec: f64, bpm: f32, shape: BeatShape) -> f32 {
    shape.apply(beat_phase(time_sec, bpm))
}

/// Which time source currently drives the beat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockSource {
    AudioLocked,
    FreeRunning,
}

/// Continuous beat timeline across audio start/stop, loops and seeks.
#[derive(Clone, Debug)]
pub struct BeatClock {
    source: ClockSource,
    free_time: f64,
    last_raw: f64,
    offset: f64,
    effective: f64,
    started: bool,
}

impl Default for BeatClock {
    fn default() -> Self {
        Self::new()
    }
}

impl BeatClock {
    pub fn new() -> Self {
        Self {
            source: ClockSource::FreeRunning,
            free_time: 0.0,
            last_raw: 0.0,
            offset: 0.0,
            effective: 0.0,
            started: false,
        }
    }

    pub fn source(&self) -> ClockSource {
        self.source
    }

    /// Effective beat time after the last `advance`.
    pub fn time(&self) -> f64 {
        self.effective
    }

    /// Seconds of frame time since the clock was created.
    pub fn free_time(&self) -> f64 {
        self.free_time
    }

    /// Remaining difference between effective time and the selected source.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Advance by one frame. `audio_time` is the transport position when audio
    /// is playing, `None` otherwise.
    pub fn advance(&mut self, dt_sec: f64, audio_time: Option<f64>) -> f64 {
        let dt = dt_sec.max(0.0);
        self.free_time += dt;
        let (source, raw) = match audio_time {
            Some(t) if t.is_finite() => (ClockSource::AudioLocked, t),
            _ => (ClockSource::FreeRunning, self.free_time),
        };

        if !self.started {
            self.started = true;
            self.source = source;
            self.offset = 0.0;
        } else if source != self.source || raw < self.last_raw {
            // Source change, loop or seek: keep effective time continuous.
            if source != self.source {
                log::info!("[beat] clock source {:?} -> {:?}", self.source, source);
            }
            self.source = source;
            self.offset = (self.effective + dt) - raw;
        } else if self.offset != 0.0 {
            let max_step = dt * CLOCK_RECONCILE_FRACTION;
            self.offset -= self.offset.clamp(-max_step, max_step);
        }

        self.last_raw = raw;
        self.effective = raw + self.offset;
        self.effective
    }
}

/// Tempo and waveform selection for the two beat consumers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BeatParams {
    pub bpm: f32,
    /// Shape used by the ensemble pulse (scale and light).
    pub ensemble_shape: BeatShape,
    /// Shape used by the per-element ripple.
    pub ripple_shape: BeatShape,
}

impl Default for BeatParams {
    fn default() -> Self {
        Self {
            bpm: DEFAULT_BPM,
            ensemble_shape: BeatShape::HalfWave,
            ripple_shape: BeatShape::Rectified {
                gamma: RIPPLE_GAMMA,
            },
        }
    }
}

/// Beat values for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BeatSample {
    pub time: f64,
    pub phase: f32,
    pub ensemble: f32,
    pub ripple: f32,
}

/// Supplies the beat phase every frame.
#[derive(Clone, Debug, Default)]
pub struct BeatOracle {
    pub params: BeatParams,
    clock: BeatClock,
}

impl BeatOracle {
    pub fn new(params: BeatParams) -> Self {
        Self {
            params,
            clock: BeatClock::new(),
        }
    }

    pub fn clock(&self) -> &BeatClock {
        &self.clock
    }

    pub fn set_bpm(&mut self, bpm: f32) {
        self.params.bpm = bpm;
    }

    /// Advance the clock and evaluate the beat. When `active` is false the
    /// clock still runs but both factors are zero.
    pub fn advance(&mut self, dt_sec: f64, audio_time: Option<f64>, active: bool) -> BeatSample {
        let time = self.clock.advance(dt_sec, audio_time);
        let phase = beat_phase(time, self.params.bpm);
        if !active {
            return BeatSample {
                time,
                phase,
                ensemble: 0.0,
                ripple: 0.0,
            };
        }
        BeatSample {
            time,
            phase,
            ensemble: self.params.ensemble_shape.apply(phase),
            ripple: self.params.ripple_shape.apply(phase),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_advance_adopts_source_without_offset() {
        let mut c = BeatClock::new();
        let t = c.advance(0.016, Some(12.0));
        assert_eq!(t, 12.0);
        assert_eq!(c.source(), ClockSource::AudioLocked);
        assert_eq!(c.offset(), 0.0);
    }

    #[test]
    fn offset_bleeds_off_and_locks() {
        let dt = 1.0 / 60.0;
        let mut c = BeatClock::new();
        for _ in 0..60 {
            c.advance(dt, None);
        }
        // Audio starts far from the free clock.
        let mut audio = 30.0;
        c.advance(dt, Some(audio));
        assert!(c.offset().abs() > 1.0);
        for _ in 0..20_000 {
            audio += dt;
            c.advance(dt, Some(audio));
        }
        assert_eq!(c.offset(), 0.0);
        assert!((c.time() - audio).abs() < 1e-9);
    }
}
