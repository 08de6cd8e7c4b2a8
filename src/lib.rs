//! Procedural constructivist tree sculpture.
//!
//! A layout generator places a few dozen geometric elements in a conical
//! tree, each with a far-away scattered anchor. Per frame, a gesture-driven
//! intensity blends every element between its two anchors while a beat
//! oracle adds rhythmic ripples and group pulses. Rendering, perception and
//! audio playback are collaborators; this crate only computes what they
//! consume and produce.

pub mod animator;
pub mod beat;
pub mod config;
pub mod constants;
pub mod core;
pub mod ensemble;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod material;
pub mod palette;
pub mod particles;
pub mod perception;
pub mod render;
pub mod rng;
pub mod scene;
pub mod smoothing;

pub use animator::{ControlState, ElementAnimator, LivePose};
pub use beat::{BeatClock, BeatOracle, BeatShape, ClockSource};
pub use config::SceneConfig;
pub use error::{TreeError, TreeResult};
pub use layout::{Element, ElementId, ElementSet, LayoutGenerator, MaterialKind, ShapeKind, Tier};
pub use perception::{FaceBox, GestureSample, HandLandmarks, PerceptionUpdate};
pub use render::{InstanceRaw, ParticleVertex, RenderFrame};
pub use scene::Scene;
pub use smoothing::SignalSmoother;
