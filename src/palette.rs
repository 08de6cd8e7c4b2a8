use crate::core::{rgb_from_hex, MASTER_PALETTE, PALETTE_SUBSET_MAX, PALETTE_SUBSET_MIN};
use rand::prelude::*;
use smallvec::SmallVec;

/// The colors one generated sculpture is allowed to use.
///
/// Drawn once per generation without replacement from [`MASTER_PALETTE`], so
/// a single tree stays color-coherent while successive trees differ.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    hexes: SmallVec<[u32; PALETTE_SUBSET_MAX]>,
}

impl Palette {
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let n = rng.gen_range(PALETTE_SUBSET_MIN..=PALETTE_SUBSET_MAX);
        let hexes = MASTER_PALETTE.choose_multiple(rng, n).copied().collect();
        Self { hexes }
    }

    pub fn len(&self) -> usize {
        self.hexes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hexes.is_empty()
    }

    pub fn hexes(&self) -> &[u32] {
        &self.hexes
    }

    pub fn contains_rgb(&self, rgb: [f32; 3]) -> bool {
        self.hexes.iter().any(|h| rgb_from_hex(*h) == rgb)
    }

    /// Pick one palette color for an element.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> [f32; 3] {
        let hex = self.hexes.choose(rng).copied().unwrap_or(MASTER_PALETTE[0]);
        rgb_from_hex(hex)
    }
}
