// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use getset::CopyGetters;

use crate::errs::SkipListError;

/// The default number of elements a list is sized for before its first
/// rebuild.
pub const DEFAULT_EXPECTED_SIZE: usize = 16;

/// The default probability that a node present at level `n` is also present
/// at level `n + 1`. `0.5` is a fair coin.
pub const DEFAULT_PROBABILITY: f64 = 0.5;

/// Construction-time settings for a [`SkipList`](crate::SkipList).
#[derive(Debug, Clone, Copy, PartialEq, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct SkipListConfig {
    /// Element count the list is sized for. The initial max level is
    /// `ceil(log2(expected_size))` and the first rebuild happens when the
    /// list reaches this many elements.
    expected_size: usize,
    /// Geometric level probability.
    probability: f64,
    /// Seed for level selection. `None` seeds from the OS.
    seed: Option<u64>,
}

impl Default for SkipListConfig {
    fn default() -> Self {
        SkipListConfig {
            expected_size: DEFAULT_EXPECTED_SIZE,
            probability: DEFAULT_PROBABILITY,
            seed: None,
        }
    }
}

impl SkipListConfig {
    pub fn new(expected_size: usize) -> Self {
        SkipListConfig {
            expected_size,
            ..Default::default()
        }
    }

    pub fn with_expected_size(mut self, expected_size: usize) -> Self {
        self.expected_size = expected_size;
        self
    }

    pub fn with_probability(mut self, probability: f64) -> Self {
        self.probability = probability;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks every field without building anything.
    pub fn validate(&self) -> Result<(), SkipListError> {
        max_level_for(self.expected_size)?;
        if !(self.probability > 0.0 && self.probability < 1.0) {
            return Err(SkipListError::InvalidProbability(self.probability));
        }
        Ok(())
    }
}

/// `ceil(log2(expected_size))`, with `expected_size == 1` giving level 0.
pub(crate) fn max_level_for(expected_size: usize) -> Result<usize, SkipListError> {
    if expected_size == 0 {
        return Err(SkipListError::InvalidExpectedSize(expected_size));
    }
    expected_size
        .checked_next_power_of_two()
        .map(|p| p.trailing_zeros() as usize)
        .ok_or(SkipListError::InvalidExpectedSize(expected_size))
}
