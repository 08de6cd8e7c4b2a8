use crate::constants::*;

/// Coarse viewport size class; the only input to the baseline scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportClass {
    Compact,
    Regular,
}

impl ViewportClass {
    pub fn from_width(width_px: u32) -> Self {
        if width_px < COMPACT_VIEWPORT_MAX_WIDTH {
            ViewportClass::Compact
        } else {
            ViewportClass::Regular
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnsembleParams {
    pub compact_scale: f32,
    pub regular_scale: f32,
    pub scale_pulse: f32,
    pub ambient_base: f32,
    pub ambient_pulse: f32,
    pub shadow_y: f32,
    pub shadow_extent: f32,
    pub shadow_opacity: f32,
}

impl Default for EnsembleParams {
    fn default() -> Self {
        Self {
            compact_scale: COMPACT_SCALE,
            regular_scale: REGULAR_SCALE,
            scale_pulse: SCALE_PULSE,
            ambient_base: AMBIENT_BASE,
            ambient_pulse: AMBIENT_PULSE,
            shadow_y: SHADOW_Y,
            shadow_extent: SHADOW_EXTENT,
            shadow_opacity: SHADOW_OPACITY,
        }
    }
}

/// Contact shadow under the tree, following the baseline scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowPlacement {
    pub y: f32,
    pub extent: f32,
    pub opacity: f32,
}

/// Group-level transform and lighting for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnsembleState {
    pub scale: f32,
    pub rotation_y: f32,
    pub ambient_intensity: f32,
    pub spot_intensity: f32,
    pub fill_intensity: f32,
    pub shadow: ShadowPlacement,
}

/// Applies the beat-synchronized pulse to the whole group.
///
/// Both pulses are `max(0, beat)` scaled, so they only ever add to the baseline.
#[derive(Clone, Debug)]
pub struct EnsembleModulator {
    pub params: EnsembleParams,
    viewport: ViewportClass,
}

impl EnsembleModulator {
    pub fn new(params: EnsembleParams, viewport: ViewportClass) -> Self {
        Self { params, viewport }
    }

    pub fn viewport(&self) -> ViewportClass {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: ViewportClass) {
        self.viewport = viewport;
    }

    pub fn baseline_scale(&self) -> f32 {
        match self.viewport {
            ViewportClass::Compact => self.params.compact_scale,
            ViewportClass::Regular => self.params.regular_scale,
        }
    }

    pub fn modulate(&self, beat: f32, beat_active: bool, rotation_y: f32) -> EnsembleState {
        let energy = if beat_active { beat.max(0.0) } else { 0.0 };
        let baseline = self.baseline_scale();
        EnsembleState {
            scale: baseline + energy * self.params.scale_pulse,
            rotation_y,
            ambient_intensity: self.params.ambient_base + energy * self.params.ambient_pulse,
            spot_intensity: SPOT_INTENSITY,
            fill_intensity: FILL_INTENSITY,
            shadow: ShadowPlacement {
                y: self.params.shadow_y * baseline,
                extent: self.params.shadow_extent * baseline,
                opacity: self.params.shadow_opacity,
            },
        }
    }
}
