//! Scripted stand-ins for the perception and audio collaborators.

use constructivist_tree::perception::{
    FaceBox, HandLandmarks, PerceptionUpdate, HAND_LANDMARK_COUNT, INDEX_TIP, MIDDLE_MCP,
    THUMB_TIP,
};
use glam::Vec2;
use smallvec::smallvec;

/// Phases of the scripted gesture, each `PHASE_SEC` long, looping.
const PHASE_SEC: f64 = 4.0;

/// Emits perception results at the detector's own rate: hand absent, hand
/// opening and swinging, hand pinched closed.
pub struct ScriptedHand {
    interval: f64,
    next_due: f64,
}

impl ScriptedHand {
    pub fn new(rate_hz: f64) -> Self {
        Self {
            interval: 1.0 / rate_hz.max(1.0),
            next_due: 0.0,
        }
    }

    /// Result due at time `t`, if the detector would have produced one.
    pub fn poll(&mut self, t: f64) -> Option<PerceptionUpdate> {
        if t < self.next_due {
            return None;
        }
        self.next_due = t + self.interval;
        let phase = ((t / PHASE_SEC) as u64) % 3;
        let local = (t % PHASE_SEC) / PHASE_SEC;
        let update = match phase {
            0 => PerceptionUpdate::default(),
            1 => {
                let mut u = PerceptionUpdate::with_hand(hand(0.45, 0.5 + 0.3 * local as f32));
                u.faces = smallvec![FaceBox {
                    center: Vec2::new(0.5, 0.3),
                    size: Vec2::new(0.2, 0.25),
                }];
                u
            }
            _ => PerceptionUpdate::with_hand(hand(0.02, 0.5)),
        };
        Some(update)
    }
}

fn hand(pinch: f32, palm_x: f32) -> HandLandmarks {
    let mut pts = [Vec2::new(palm_x, 0.6); HAND_LANDMARK_COUNT];
    pts[THUMB_TIP] = Vec2::new(palm_x - pinch * 0.5, 0.5);
    pts[INDEX_TIP] = Vec2::new(palm_x + pinch * 0.5, 0.5);
    pts[MIDDLE_MCP] = Vec2::new(palm_x, 0.55);
    HandLandmarks::new(pts)
}

/// Looping track position with a pause in the middle of each loop.
pub struct SimulatedTransport {
    pub enabled: bool,
    track_len: f64,
    position: f64,
    wall: f64,
}

impl SimulatedTransport {
    pub fn new(enabled: bool, track_len: f64) -> Self {
        Self {
            enabled,
            track_len,
            position: 0.0,
            wall: 0.0,
        }
    }

    /// Advance wall time; returns the playback position while playing.
    pub fn advance(&mut self, dt: f64) -> Option<f64> {
        if !self.enabled {
            return None;
        }
        self.wall += dt;
        // Every 20 s of wall time, the transport drops out for 2 s.
        if self.wall % 20.0 > 18.0 {
            return None;
        }
        self.position = (self.position + dt) % self.track_len;
        Some(self.position)
    }
}
