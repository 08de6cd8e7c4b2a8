use constructivist_tree::{Scene, SceneConfig};
use instant::Instant;

mod script;

use script::{ScriptedHand, SimulatedTransport};

const FRAME_DT: f32 = 1.0 / 60.0;
const DETECTOR_RATE_HZ: f64 = 30.0;
const TRACK_LEN_SEC: f64 = 95.0;
const REPORT_EVERY: usize = 120;

struct Options {
    frames: usize,
    seed: Option<u64>,
    count: Option<usize>,
    bpm: Option<f32>,
    music: bool,
    compact: bool,
}

impl Options {
    fn from_args() -> anyhow::Result<Self> {
        let mut opts = Options {
            frames: 1800,
            seed: None,
            count: None,
            bpm: None,
            music: false,
            compact: false,
        };
        let mut args = std::env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--frames" => opts.frames = next_value(&mut args, &arg)?,
                "--seed" => opts.seed = Some(next_value(&mut args, &arg)?),
                "--count" => opts.count = Some(next_value(&mut args, &arg)?),
                "--bpm" => opts.bpm = Some(next_value(&mut args, &arg)?),
                "--music" => opts.music = true,
                "--compact" => opts.compact = true,
                other => anyhow::bail!("unknown argument: {other}"),
            }
        }
        Ok(opts)
    }
}

fn next_value<T>(args: &mut impl Iterator<Item = String>, flag: &str) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw = args
        .next()
        .ok_or_else(|| anyhow::anyhow!("{flag} needs a value"))?;
    raw.parse::<T>()
        .map_err(|e| anyhow::anyhow!("{flag} {raw}: {e}"))
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let opts = Options::from_args()?;

    let mut config = match opts.seed {
        Some(s) => SceneConfig::seeded(s),
        None => SceneConfig::default(),
    };
    if let Some(c) = opts.count {
        config.initial_count = c;
    }
    if let Some(bpm) = opts.bpm {
        config.beat.bpm = bpm;
    }
    if opts.compact {
        config.viewport_width = 390;
    }

    let mut scene = Scene::new(config)?;
    let mut hand = ScriptedHand::new(DETECTOR_RATE_HZ);
    let mut transport = SimulatedTransport::new(opts.music, TRACK_LEN_SEC);
    scene.set_music_playing(opts.music);
    scene.set_detection_active(true);

    let started = Instant::now();
    let mut sim_time = 0.0f64;
    let mut instance_bytes = 0usize;
    for frame_idx in 0..opts.frames {
        // Detector scripts take a moment to load.
        if frame_idx == 30 {
            scene.mark_perception_ready();
        }
        if frame_idx == opts.frames / 2 {
            scene.regenerate_default()?;
        }
        if let Some(update) = hand.poll(sim_time) {
            scene.ingest_perception(&update);
        }
        let audio_time = transport.advance(FRAME_DT as f64);
        let frame = scene.frame(FRAME_DT, audio_time);
        let instances = frame.instances();
        instance_bytes = bytemuck::cast_slice::<_, u8>(&instances).len();

        if frame_idx % REPORT_EVERY == 0 {
            let spread = mean_spread(&scene);
            log::info!(
                "[frame {:5}] intensity={:.3} rot={:+.3} scale={:.4} ambient={:.3} spread={:.2} clock={:?} faces={}",
                frame_idx,
                scene.intensity(),
                scene.rotation_y(),
                frame.ensemble.scale,
                frame.ensemble.ambient_intensity,
                spread,
                scene.oracle().clock().source(),
                frame.faces.len()
            );
        }
        sim_time += FRAME_DT as f64;
    }

    // Let the tree settle back once detection is switched off.
    scene.set_detection_active(false);
    for _ in 0..240 {
        scene.frame(FRAME_DT, transport.advance(FRAME_DT as f64));
    }

    let elapsed = started.elapsed();
    log::info!(
        "[done] {} frames in {:.1} ms ({:.3} ms/frame), {} instance bytes, final intensity {:.4}",
        opts.frames,
        elapsed.as_secs_f64() * 1000.0,
        elapsed.as_secs_f64() * 1000.0 / opts.frames.max(1) as f64,
        instance_bytes,
        scene.intensity()
    );
    Ok(())
}

/// Mean distance of live positions from the tree axis.
fn mean_spread(scene: &Scene) -> f32 {
    let set = scene.elements();
    let total: f32 = set
        .iter()
        .filter_map(|el| scene.animator().pose(el.id))
        .map(|p| glam::Vec2::new(p.position.x, p.position.z).length())
        .sum();
    total / set.len().max(1) as f32
}
