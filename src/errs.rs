// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SkipListError {
    #[error("expected size must be non-zero and small enough to size the levels, got {0}")]
    InvalidExpectedSize(usize),
    #[error("level probability must be in (0, 1), got {0}")]
    InvalidProbability(f64),
    #[error("head sentinel must compare strictly less than the tail sentinel")]
    InvalidSentinels,
    #[error("element does not compare strictly between the sentinels")]
    OutOfRange,
}
