// Host-side integration tests for the beat oracle and its clock.

use constructivist_tree::beat::{beat_factor, beat_phase, BeatParams, BeatShape};
use constructivist_tree::{BeatClock, BeatOracle, ClockSource};

const DT: f64 = 1.0 / 60.0;

#[test]
fn phase_and_factors_stay_in_range() {
    let shapes = [BeatShape::HalfWave, BeatShape::Rectified { gamma: 1.8 }];
    for i in 0..5000 {
        let t = i as f64 * 0.0137;
        for bpm in [60.0f32, 120.0, 174.0] {
            let p = beat_phase(t, bpm);
            assert!((-1.0..=1.0).contains(&p));
            for shape in shapes {
                let f = beat_factor(t, bpm, shape);
                assert!((0.0..=1.0).contains(&f), "{shape:?} gave {f}");
            }
        }
    }
}

#[test]
fn phase_matches_tempo() {
    // At 120 bpm the sine completes one period every second.
    assert!(beat_phase(0.0, 120.0).abs() < 1e-6);
    assert!((beat_phase(0.25, 120.0) - 1.0).abs() < 1e-6);
    assert!(beat_phase(0.5, 120.0).abs() < 1e-6);
    assert!((beat_phase(0.75, 120.0) + 1.0).abs() < 1e-6);
}

#[test]
fn half_wave_is_silent_on_negative_half() {
    assert_eq!(BeatShape::HalfWave.apply(-0.7), 0.0);
    assert_eq!(BeatShape::HalfWave.apply(0.7), 0.7);
    let rect = BeatShape::Rectified { gamma: 1.8 };
    assert!((rect.apply(-0.5) - 0.5f32.powf(1.8)).abs() < 1e-6);
    assert_eq!(rect.apply(-0.5), rect.apply(0.5));
}

#[test]
fn inactive_oracle_reports_zero_factors() {
    let mut oracle = BeatOracle::new(BeatParams::default());
    for i in 0..200 {
        let s = oracle.advance(DT, Some(i as f64 * DT), false);
        assert_eq!(s.ensemble, 0.0);
        assert_eq!(s.ripple, 0.0);
    }
    assert!(oracle.clock().time() > 3.0);
}

#[test]
fn active_oracle_pulses() {
    let mut oracle = BeatOracle::new(BeatParams::default());
    let peak = (0..120)
        .map(|_| oracle.advance(DT, None, true))
        .map(|s| s.ensemble.max(s.ripple))
        .fold(0.0f32, f32::max);
    assert!(peak > 0.95);
}

/// Drive a clock through a sequence of audio states and check every frame
/// advances by one step give or take the reconciliation bound.
fn assert_continuous(clock: &mut BeatClock, audio: impl IntoIterator<Item = Option<f64>>) {
    let mut prev = clock.time();
    let mut prev_source = clock.source();
    for a in audio {
        let t = clock.advance(DT, a);
        let delta = t - prev;
        if clock.source() != prev_source {
            assert!((delta - DT).abs() < 1e-9, "switch jumped by {delta}");
        } else {
            assert!(
                (delta - DT).abs() <= DT * 0.5 + 1e-9,
                "frame advanced {delta}, expected about {DT}"
            );
        }
        prev = t;
        prev_source = clock.source();
    }
}

#[test]
fn clock_is_continuous_across_start_and_stop() {
    let mut clock = BeatClock::new();
    clock.advance(DT, None);
    let mut frames: Vec<Option<f64>> = vec![None; 90];
    // Audio starts at an unrelated transport position.
    frames.extend((0..600).map(|i| Some(42.0 + i as f64 * DT)));
    frames.extend(std::iter::repeat(None).take(300));
    frames.extend((0..300).map(|i| Some(3.0 + i as f64 * DT)));
    assert_continuous(&mut clock, frames);
}

#[test]
fn clock_is_continuous_across_loop_and_seek() {
    let mut clock = BeatClock::new();
    clock.advance(DT, Some(170.0 - DT));
    let mut frames: Vec<Option<f64>> = (0..300).map(|i| Some(170.0 + i as f64 * DT)).collect();
    // Track loops back to zero.
    frames.extend((0..300).map(|i| Some(i as f64 * DT)));
    // Backward seek.
    frames.extend((0..300).map(|i| Some(1.0 + i as f64 * DT)));
    assert_continuous(&mut clock, frames);
    assert_eq!(clock.source(), ClockSource::AudioLocked);
}

#[test]
fn clock_locks_back_onto_audio() {
    let mut clock = BeatClock::new();
    for _ in 0..30 {
        clock.advance(DT, None);
    }
    let mut audio = 10.0;
    clock.advance(DT, Some(audio));
    assert!(clock.offset() != 0.0);
    for _ in 0..5000 {
        audio += DT;
        clock.advance(DT, Some(audio));
    }
    assert_eq!(clock.offset(), 0.0);
    assert!((clock.time() - audio).abs() < 1e-9);
}

#[test]
fn free_time_ignores_audio() {
    let mut clock = BeatClock::new();
    for i in 0..120 {
        clock.advance(DT, if i % 2 == 0 { Some(100.0) } else { None });
    }
    assert!((clock.free_time() - 120.0 * DT).abs() < 1e-9);
}
