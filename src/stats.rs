// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use getset::CopyGetters;

/// Lifetime operation counters for a single list.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct SkipListStats {
    /// Elements linked in as new nodes.
    inserts: u64,
    /// Inserts that overwrote an existing element in place.
    replacements: u64,
    /// Elements unlinked and dropped or returned, including those dropped
    /// by `clear`.
    removals: u64,
    /// Full rebuilds into evenly leveled form.
    rebuilds: u64,
}

impl SkipListStats {
    pub(crate) fn record_insert(&mut self) {
        self.inserts += 1;
    }

    pub(crate) fn record_replacement(&mut self) {
        self.replacements += 1;
    }

    pub(crate) fn record_removal(&mut self) {
        self.removals += 1;
    }

    pub(crate) fn record_removals(&mut self, count: u64) {
        self.removals += count;
    }

    pub(crate) fn record_rebuild(&mut self) {
        self.rebuilds += 1;
    }
}
