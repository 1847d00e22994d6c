// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use rand::prelude::*;
use tracing::trace;

use crate::{
    config::DEFAULT_PROBABILITY,
    errs::SkipListError,
};

/// Upon the insertion of a new node in the list, the node is replicated to high
/// levels with a certain probability as determined by a `LevelGenerator`.
pub trait LevelGenerator {
    /// Generate a random level for a new node in the range `[0, max_level]`.
    ///
    /// The cap is owned by the list and changes when it rebuilds, so it is
    /// passed on every call. This must never return a level that is
    /// `> max_level`.
    fn level(&mut self, max_level: usize) -> usize;
}

/// A level generator which will produce geometrically distributed numbers.
///
/// The probability of generating level `n` is `p` times the probability of
/// generating level `n-1`, with the probability truncated at the maximum level
/// passed in by the list. With `p = 0.5` this is a fair coin flipped until it
/// comes up tails.
#[derive(Debug, Clone)]
pub struct GeometricalLevelGenerator<R = SmallRng> {
    p: f64,
    rng: R,
}

impl GeometricalLevelGenerator<SmallRng> {
    /// Create a new GeometricalLevelGenerator with `p` as the probability that
    /// a given node is present in the next level, seeded from the OS.
    pub fn new(p: f64) -> Result<Self, SkipListError> {
        Self::from_rng(SmallRng::from_entropy(), p)
    }

    /// Same as [`GeometricalLevelGenerator::new`], but every level sequence
    /// is reproducible from `seed`.
    pub fn seeded(p: f64, seed: u64) -> Result<Self, SkipListError> {
        Self::from_rng(SmallRng::seed_from_u64(seed), p)
    }
}

impl<R: Rng> GeometricalLevelGenerator<R> {
    /// Use an arbitrary random source.
    pub fn from_rng(rng: R, p: f64) -> Result<Self, SkipListError> {
        if !(p > 0.0 && p < 1.0) {
            return Err(SkipListError::InvalidProbability(p));
        }
        Ok(GeometricalLevelGenerator { p, rng })
    }

    pub fn probability(&self) -> f64 {
        self.p
    }
}

impl Default for GeometricalLevelGenerator<SmallRng> {
    fn default() -> Self {
        GeometricalLevelGenerator {
            p: DEFAULT_PROBABILITY,
            rng: SmallRng::from_entropy(),
        }
    }
}

impl<R: Rng> LevelGenerator for GeometricalLevelGenerator<R> {
    fn level(&mut self, max_level: usize) -> usize {
        let mut h = 0;
        let mut x = self.p;
        let f = 1.0 - self.rng.gen::<f64>();
        while x > f && h < max_level {
            h += 1;
            x *= self.p
        }
        trace!(level = h, max_level, "chose node level");
        h
    }
}
