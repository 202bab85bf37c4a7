//! Test utilities for Warren development.
//!
//! Provides deterministic [`RngCore`] doubles ([`ZeroRng`],
//! [`ScriptedRng`]) for driving carving algorithms down known paths, and
//! maze assertions in [`assertions`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod assertions;

pub use assertions::{
    assert_carved_from, assert_forest, assert_spanning_tree, component_count, isolated_vertices,
    UnionFind,
};

use rand::RngCore;

/// An RNG that only ever produces zero bits.
///
/// Every `random_range(a..b)` yields `a`, every `choose` picks the first
/// element, and every `random::<f64>()` is `0.0`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroRng;

impl RngCore for ZeroRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        dst.fill(0);
    }
}

/// An RNG that replays a fixed cycle of 64-bit words.
///
/// [`from_fractions`](ScriptedRng::from_fractions) makes scripting easy:
/// a word built from fraction `f` makes `random::<f64>()` return `f`
/// (to 53 bits), and makes `random_range(0..n)` over a `u32`-sized range
/// return `floor(f * n)` when `f * n` is not close to an integer.
#[derive(Clone, Debug)]
pub struct ScriptedRng {
    words: Vec<u64>,
    pos: usize,
}

impl ScriptedRng {
    /// Replay `words` in order, cycling. An empty script behaves like
    /// [`ZeroRng`].
    pub fn new(words: Vec<u64>) -> Self {
        Self { words, pos: 0 }
    }

    /// Replay words encoding each fraction in `[0, 1)`.
    pub fn from_fractions(fractions: &[f64]) -> Self {
        let words = fractions
            .iter()
            .map(|f| (f.clamp(0.0, 1.0 - f64::EPSILON) * 18_446_744_073_709_551_616.0) as u64)
            .collect();
        Self::new(words)
    }

    /// Number of words consumed so far.
    pub fn draws(&self) -> usize {
        self.pos
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        if self.words.is_empty() {
            return 0;
        }
        let word = self.words[self.pos % self.words.len()];
        self.pos += 1;
        word
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}
