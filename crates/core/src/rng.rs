//! RNG module - uniform random piece selection
//!
//! Each spawn picks one of the seven kinds with equal probability; there is no
//! bag or history. The generator is a small LCG so a given seed always produces
//! the same sequence of pieces, which keeps tests and replays deterministic.

use crate::types::TetrominoKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Seed 0 maps to the default seed.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits, which have a much longer period than the low bits of an LCG.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Current generator state (feeding it back into `new` resumes the sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Uniform piece randomizer
#[derive(Debug, Clone)]
pub struct PieceRandomizer {
    rng: SimpleRng,
}

impl PieceRandomizer {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw the next kind, uniformly over all seven
    pub fn next_kind(&mut self) -> TetrominoKind {
        let idx = self.rng.next_range(TetrominoKind::ALL.len() as u32) as usize;
        TetrominoKind::ALL[idx]
    }

    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for PieceRandomizer {
    fn default() -> Self {
        Self::new(1)
    }
}
