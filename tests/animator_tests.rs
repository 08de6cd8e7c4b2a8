// Host-side integration tests for per-element motion.

use constructivist_tree::animator::{lerp_position, target_position, AnimatorParams};
use constructivist_tree::layout::{LayoutGenerator, LayoutParams};
use constructivist_tree::rng::derive_stream;
use constructivist_tree::{ControlState, ElementAnimator, ElementSet};
use glam::Vec3;

fn layout(seed: u64, count: usize) -> (LayoutGenerator, ElementSet) {
    let mut g = LayoutGenerator::new(LayoutParams::default(), derive_stream(seed, 0));
    let set = g.generate(count).unwrap();
    (g, set)
}

fn control(intensity: f32, beat_factor: f32, beat_active: bool) -> ControlState {
    ControlState {
        intensity,
        rotation_y: 0.0,
        beat_factor,
        beat_active,
    }
}

fn run(animator: &mut ElementAnimator, set: &ElementSet, c: &ControlState, frames: usize) {
    for _ in 0..frames {
        animator.step(set, c, 1.0 / 60.0);
    }
}

#[test]
fn lerp_is_exact_at_endpoints() {
    let a = Vec3::new(1.3, -7.77, 0.001);
    let b = Vec3::new(-41.0, 12.5, 33.3);
    assert_eq!(lerp_position(a, b, 0.0), a);
    assert_eq!(lerp_position(a, b, 1.0), b);
    let mid = lerp_position(a, b, 0.5);
    assert!((mid - (a + b) * 0.5).length() < 1e-5);
}

#[test]
fn zero_intensity_targets_assembled_even_with_beat() {
    let (_, set) = layout(1, 50);
    let params = AnimatorParams::default();
    for el in &set {
        assert_eq!(target_position(el, &control(0.0, 0.0, false), &params), el.assembled);
        let t = target_position(el, &control(0.0, 1.0, true), &params);
        assert!((t - el.assembled).length() <= params.ripple_displacement + 1e-5);
    }
}

#[test]
fn ripple_only_applies_while_beat_is_active() {
    let (_, set) = layout(2, 20);
    let params = AnimatorParams::default();
    for el in &set {
        let quiet = target_position(el, &control(0.3, 1.0, false), &params);
        let loud = target_position(el, &control(0.3, 1.0, true), &params);
        assert_eq!(quiet, lerp_position(el.assembled, el.scattered, 0.3));
        let push = loud - quiet;
        assert!((push.length() - params.ripple_displacement).abs() < 1e-4);
    }
}

#[test]
fn converges_to_assembled_at_rest() {
    let (_, set) = layout(3, 85);
    let mut animator = ElementAnimator::new(AnimatorParams::default());
    animator.reset(&set);
    run(&mut animator, &set, &control(0.0, 0.0, false), 600);
    for el in &set {
        let p = animator.pose(el.id).unwrap().position;
        assert!((p - el.assembled).length() < 1e-3, "{} at {p}", el.id);
    }
}

#[test]
fn converges_to_scattered_at_full_intensity() {
    let (_, set) = layout(4, 85);
    for beat_active in [false, true] {
        let mut animator = ElementAnimator::new(AnimatorParams::default());
        animator.reset(&set);
        run(&mut animator, &set, &control(1.0, 0.0, beat_active), 900);
        for el in &set {
            let p = animator.pose(el.id).unwrap().position;
            assert!((p - el.scattered).length() < 1e-2, "{} at {p}", el.id);
        }
    }
}

#[test]
fn pose_follows_without_overshoot() {
    let (_, set) = layout(5, 10);
    let mut animator = ElementAnimator::new(AnimatorParams::default());
    animator.reset(&set);
    let c = control(1.0, 0.0, false);
    let mut prev: Vec<f32> = set
        .iter()
        .map(|el| (animator.pose(el.id).unwrap().position - el.scattered).length())
        .collect();
    for _ in 0..300 {
        animator.step(&set, &c, 1.0 / 60.0);
        for (i, el) in set.iter().enumerate() {
            let d = (animator.pose(el.id).unwrap().position - el.scattered).length();
            assert!(d <= prev[i] + 1e-5);
            prev[i] = d;
        }
    }
}

#[test]
fn drift_accumulates_and_stays_wrapped() {
    let (_, set) = layout(6, 5);
    let mut animator = ElementAnimator::new(AnimatorParams::default());
    animator.reset(&set);
    let c = control(0.0, 0.0, false);
    animator.step(&set, &c, 1.0);
    let d = animator.pose(set.elements()[0].id).unwrap().drift;
    assert!((d.x - 0.08).abs() < 1e-6 && (d.y - 0.12).abs() < 1e-6 && d.z == 0.0);
    for _ in 0..200 {
        animator.step(&set, &c, 1.0);
    }
    for el in &set {
        let d = animator.pose(el.id).unwrap().drift;
        assert!((0.0..std::f32::consts::TAU).contains(&d.x));
        assert!((0.0..std::f32::consts::TAU).contains(&d.y));
    }
}

#[test]
fn regenerated_set_replaces_every_slot() {
    let (mut g, first) = layout(7, 30);
    let mut animator = ElementAnimator::new(AnimatorParams::default());
    animator.reset(&first);
    run(&mut animator, &first, &control(0.5, 0.0, false), 10);

    let second = g.generate(45).unwrap();
    animator.step(&second, &control(0.5, 0.0, false), 1.0 / 60.0);
    assert_eq!(animator.len(), 45);
    assert!(first.iter().all(|el| animator.pose(el.id).is_none()));
    assert!(second.iter().all(|el| animator.pose(el.id).is_some()));
}
