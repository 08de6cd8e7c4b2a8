use rand::prelude::*;

/// Build the session's base generator: seeded when reproducibility is wanted.
pub fn session_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

/// Derive an independent sub-stream so layout and particles can be reseeded separately.
pub fn derive_stream(seed: u64, stream: u64) -> StdRng {
    let mix = seed ^ stream.wrapping_mul(0x9E37_79B9_7F4A_7C15);
    StdRng::seed_from_u64(mix)
}

/// Half-open sampling band `[min, max)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub const fn from_band(band: [f32; 2]) -> Self {
        Self::new(band[0], band[1])
    }

    /// Uniform draw that never returns `max`. A band with `min >= max`
    /// collapses to `min`.
    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        if self.min < self.max {
            rng.gen_range(self.min..self.max)
        } else {
            self.min
        }
    }

    #[inline]
    pub fn contains(&self, v: f32) -> bool {
        v >= self.min && v < self.max
    }
}
