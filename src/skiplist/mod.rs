// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

//! A skiplist implementation which allows faster search than a standard
//! linked list while keeping its elements in order.
//!
//! SkipLists use a probabilistic distribution of nodes over the internal
//! levels, whereby the lowest level (level 0) contains all the nodes, and each
//! level `n > 0` will contain a random subset of the nodes on level `n - 1`.
//!
//! Most commonly, a geometric distribution is used whereby the chance that a
//! node occupies level `n` is `p` times the chance of occupying level `n-1`
//! (with `0 < p < 1`).
//!
//! Random levels drift away from the ideal layout as the list grows, so once
//! the list reaches its threshold it is rebuilt with evenly spaced levels and
//! twice the level capacity.
//!
//! It is very unlikely that the level generator will need to be changed as the
//! default should suffice, but custom level generators can be implemented,
//! e.g. to make level selection deterministic in tests.

pub mod iter;
pub mod level_generator;
#[allow(clippy::module_inception)]
pub mod skiplist;
mod skipnode;
