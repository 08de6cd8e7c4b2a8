// Host-side integration tests for group modulation and ambient particles.

use constructivist_tree::ensemble::{EnsembleModulator, EnsembleParams, ViewportClass};
use constructivist_tree::particles::{ParticleField, ParticleParams};
use constructivist_tree::rng::derive_stream;

#[test]
fn viewport_class_threshold() {
    assert_eq!(ViewportClass::from_width(320), ViewportClass::Compact);
    assert_eq!(ViewportClass::from_width(767), ViewportClass::Compact);
    assert_eq!(ViewportClass::from_width(768), ViewportClass::Regular);
    assert_eq!(ViewportClass::from_width(2560), ViewportClass::Regular);
}

#[test]
fn pulse_only_adds_to_baseline() {
    for viewport in [ViewportClass::Compact, ViewportClass::Regular] {
        let m = EnsembleModulator::new(EnsembleParams::default(), viewport);
        let base = m.baseline_scale();
        for i in -20..=20 {
            let beat = i as f32 / 20.0;
            let s = m.modulate(beat, true, 0.3);
            assert!(s.scale >= base);
            assert!(s.scale <= base + 0.012 + 1e-6);
            assert!(s.ambient_intensity >= 0.4 && s.ambient_intensity <= 0.55 + 1e-6);
            assert_eq!(s.rotation_y, 0.3);
        }
    }
}

#[test]
fn silent_ensemble_sits_at_baseline() {
    let m = EnsembleModulator::new(EnsembleParams::default(), ViewportClass::Compact);
    let s = m.modulate(1.0, false, 0.0);
    assert_eq!(s.scale, 0.65);
    assert_eq!(s.ambient_intensity, 0.4);
    assert_eq!(s.spot_intensity, 2.0);
    assert_eq!(s.fill_intensity, 0.3);
}

#[test]
fn full_beat_reaches_peak() {
    let m = EnsembleModulator::new(EnsembleParams::default(), ViewportClass::Regular);
    let s = m.modulate(1.0, true, 0.0);
    assert!((s.scale - 1.012).abs() < 1e-6);
    assert!((s.ambient_intensity - 0.55).abs() < 1e-6);
}

#[test]
fn shadow_follows_baseline_scale() {
    let mut m = EnsembleModulator::new(EnsembleParams::default(), ViewportClass::Regular);
    let regular = m.modulate(0.0, false, 0.0).shadow;
    m.set_viewport(ViewportClass::Compact);
    let compact = m.modulate(0.0, false, 0.0).shadow;
    assert!((regular.y - -6.5).abs() < 1e-6);
    assert!((compact.y - -6.5 * 0.65).abs() < 1e-5);
    assert!(compact.extent < regular.extent);
    assert_eq!(compact.opacity, regular.opacity);
}

#[test]
fn particles_fill_the_cone_around_the_tree() {
    let params = ParticleParams::default();
    let field = ParticleField::new(params, &mut derive_stream(9, 1));
    assert_eq!(field.len(), 160);
    for p in field.base_positions() {
        assert!(p.y >= -8.0 && p.y <= 8.0);
        let r = (p.x * p.x + p.z * p.z).sqrt();
        assert!(r <= params.max_radius(p.y) + 1e-4);
    }
    assert!((params.max_radius(-8.0) - 8.2).abs() < 1e-5);
    assert!((params.max_radius(8.0) - 1.2).abs() < 1e-5);
}

#[test]
fn particles_hold_still_without_music() {
    let field = ParticleField::new(ParticleParams::default(), &mut derive_stream(10, 1));
    let base: Vec<_> = field.base_positions().collect();
    for t in [0.0f64, 0.37, 5.2, 90.0] {
        let sampled: Vec<_> = field.sample(t, false).map(|s| s.position).collect();
        assert_eq!(sampled, base);
    }
}

#[test]
fn particles_shake_while_music_plays() {
    let field = ParticleField::new(ParticleParams::default(), &mut derive_stream(11, 1));
    let base: Vec<_> = field.base_positions().collect();
    let t = 0.05f64;
    let shake = (t * 25.0).sin() as f32 * 0.08;
    let mut moved = 0;
    for (s, b) in field.sample(t, true).zip(&base) {
        let d = s.position - *b;
        // Jitter is in [-0.5, 0.5] per axis.
        assert!(d.abs().max_element() <= shake.abs() * 0.5 + 1e-6);
        if d.length() > 0.0 {
            moved += 1;
        }
    }
    assert!(moved > 150);
}

#[test]
fn particle_colors_stay_between_the_two_glitter_tones() {
    let params = ParticleParams::default();
    let field = ParticleField::new(params, &mut derive_stream(12, 1));
    for t in [0.0f64, 1.0, 2.5] {
        for playing in [false, true] {
            for s in field.sample(t, playing) {
                for c in 0..3 {
                    let lo = params.color_a[c].min(params.color_b[c]);
                    let hi = params.color_a[c].max(params.color_b[c]);
                    assert!(s.color[c] >= lo - 1e-6 && s.color[c] <= hi + 1e-6);
                }
            }
        }
    }
}

#[test]
fn particle_shake_keeps_resolution_in_long_sessions() {
    let field = ParticleField::new(ParticleParams::default(), &mut derive_stream(13, 1));
    let base: Vec<_> = field.base_positions().collect();
    // Ten hours in; one 60 Hz frame apart.
    let t0 = 36_000.0f64;
    let t1 = t0 + 1.0 / 60.0;
    let expected = |t: f64| (t * 25.0).sin() as f32 * 0.08;
    assert!((expected(t0) - expected(t1)).abs() > 1e-3);
    for t in [t0, t1] {
        let shake = expected(t);
        for (s, b) in field.sample(t, true).zip(&base) {
            let d = s.position - *b;
            assert!(d.abs().max_element() <= shake.abs() * 0.5 + 1e-5);
        }
    }
    let c0: Vec<_> = field.sample(t0, false).map(|s| s.color).collect();
    let c1: Vec<_> = field.sample(t1, false).map(|s| s.color).collect();
    assert_ne!(c0, c1, "color cycling must keep moving frame to frame");
}
