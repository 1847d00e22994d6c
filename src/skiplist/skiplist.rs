// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use std::{
    cmp::Ordering,
    fmt,
    mem,
};

use tracing::{
    debug,
    instrument,
    trace,
    warn,
};

use crate::{
    config::{
        max_level_for,
        SkipListConfig,
    },
    errs::SkipListError,
    skiplist::{
        iter::{
            IntoIter,
            Iter,
        },
        level_generator::{
            GeometricalLevelGenerator,
            LevelGenerator,
        },
        skipnode::{
            SkipNode,
            HEAD,
            TAIL,
        },
    },
    stats::SkipListStats,
};

/// An ordered set kept as a skip list bounded by two sentinel elements.
///
/// Every element must compare strictly between the head and tail sentinels
/// given at construction. Each distinct element (by [`Ord`]) is stored once;
/// inserting an element that compares equal to a stored one overwrites the
/// stored value in place.
///
/// Node levels are chosen by a [`LevelGenerator`] when elements are inserted.
/// When the list grows to its threshold it is rebuilt: the max level doubles,
/// the threshold becomes `2^max_level` and every node is relinked with levels
/// assigned cyclically (`0, 1, .., max_level - 1, 0, ..`) in ascending order.
/// The cyclic pattern evenly spreads the levels but it is an approximation of
/// a perfect skip list, not one with exact `2^level` spacing.
///
/// The list is single threaded. Wrap it in a lock if it must be shared.
#[derive(Clone)]
pub struct SkipList<T, G = GeometricalLevelGenerator> {
    /// Node arena. Slot 0 is the head sentinel, slot 1 the tail sentinel and
    /// every other slot holds exactly one live element.
    nodes: Vec<SkipNode<T>>,
    len: usize,
    max_level: usize,
    threshold: usize,
    generator: G,
    stats: SkipListStats,
}

impl<T: Ord> SkipList<T, GeometricalLevelGenerator> {
    /// Create a list sized for `expected_size` elements, bounded by `head`
    /// and `tail`. Levels are drawn from a fair coin seeded by the OS.
    pub fn new(expected_size: usize, head: T, tail: T) -> Result<Self, SkipListError> {
        Self::with_config(SkipListConfig::new(expected_size), head, tail)
    }

    pub fn with_config(config: SkipListConfig, head: T, tail: T) -> Result<Self, SkipListError> {
        config.validate()?;
        let generator = match config.seed() {
            | Some(seed) => GeometricalLevelGenerator::seeded(config.probability(), seed)?,
            | None => GeometricalLevelGenerator::new(config.probability())?,
        };
        Self::with_level_generator(config.expected_size(), head, tail, generator)
    }
}

impl<T: Ord, G: LevelGenerator> SkipList<T, G> {
    /// Create a list that draws node levels from `generator`.
    #[instrument(level = "debug", skip(head, tail, generator))]
    pub fn with_level_generator(
        expected_size: usize,
        head: T,
        tail: T,
        generator: G,
    ) -> Result<Self, SkipListError> {
        let max_level = max_level_for(expected_size)?;
        if head >= tail {
            return Err(SkipListError::InvalidSentinels);
        }

        let head = SkipNode::new(head, max_level);
        let mut tail = SkipNode::new(tail, max_level);
        tail.prev = Some(HEAD);

        debug!(max_level, threshold = expected_size, "created skip list");
        Ok(SkipList {
            nodes: vec![head, tail],
            len: 0,
            max_level,
            threshold: expected_size,
            generator,
            stats: SkipListStats::default(),
        })
    }

    /// Add `x` to the list. Returns `true` if `x` was not already present.
    ///
    /// When an equal element is present its stored value is overwritten with
    /// `x` and `false` is returned; the node itself is kept.
    pub fn insert(&mut self, x: T) -> Result<bool, SkipListError> {
        self.replace(x).map(|old| old.is_none())
    }

    /// Add `x` to the list, returning the element it displaced, if any.
    pub fn replace(&mut self, x: T) -> Result<Option<T>, SkipListError> {
        self.check_bounds(&x)?;

        let preds = self.locate(&x);
        let candidate = self.nodes[preds[0]].next[0];
        if self.matches(candidate, &x) {
            self.stats.record_replacement();
            return Ok(Some(mem::replace(&mut self.nodes[candidate].value, x)));
        }

        let level = self.generator.level(self.max_level).min(self.max_level);
        let slot = self.nodes.len();
        let mut node = SkipNode::new(x, level);
        for (i, &pred) in preds.iter().enumerate().take(level + 1) {
            node.next[i] = self.nodes[pred].next[i];
            self.nodes[pred].next[i] = slot;
        }
        let successor = node.next[0];
        node.prev = Some(preds[0]);
        self.nodes.push(node);
        self.nodes[successor].prev = Some(slot);

        self.len += 1;
        self.stats.record_insert();
        trace!(slot, level, len = self.len, "linked new node");

        if self.len >= self.threshold {
            self.rebuild();
        }
        Ok(None)
    }

    /// Remove `x`. Returns `false` if it was not in the list.
    pub fn remove(&mut self, x: &T) -> bool {
        self.take(x).is_some()
    }

    /// Remove `x`, returning the stored element.
    pub fn take(&mut self, x: &T) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let preds = self.locate(x);
        let target = self.nodes[preds[0]].next[0];
        if !self.matches(target, x) {
            return None;
        }
        self.unlink(&preds, target);
        Some(self.release(target))
    }

    /// Remove and return the smallest element.
    pub fn pop_first(&mut self) -> Option<T> {
        let slot = self.nodes[HEAD].next[0];
        self.remove_slot(slot)
    }

    /// Remove and return the largest element.
    pub fn pop_last(&mut self) -> Option<T> {
        let slot = self.nodes[TAIL].prev?;
        self.remove_slot(slot)
    }

    pub fn contains(&self, x: &T) -> bool {
        self.get(x).is_some()
    }

    /// The stored element that compares equal to `x`.
    pub fn get(&self, x: &T) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        let candidate = self.nodes[self.predecessor(x)].next[0];
        self.matches(candidate, x)
            .then(|| &self.nodes[candidate].value)
    }

    /// The least element `>= x`.
    pub fn ceiling(&self, x: &T) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        match self.nodes[self.predecessor(x)].next[0] {
            | TAIL => None,
            | slot => Some(&self.nodes[slot].value),
        }
    }

    /// The greatest element `<= x`.
    pub fn floor(&self, x: &T) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        let pred = self.predecessor(x);
        let candidate = self.nodes[pred].next[0];
        if self.matches(candidate, x) {
            return Some(&self.nodes[candidate].value);
        }
        match pred {
            | HEAD => None,
            | slot => Some(&self.nodes[slot].value),
        }
    }

    /// The last node at each level whose element is less than `x`, indexed
    /// by level. `preds[i].next[i]` is the first node at level `i` that is
    /// `>= x`, or the tail.
    fn locate(&self, x: &T) -> Vec<usize> {
        let mut preds = vec![HEAD; self.max_level + 1];
        let mut cursor = HEAD;
        for level in (0..=self.max_level).rev() {
            cursor = self.advance(cursor, level, x);
            preds[level] = cursor;
        }
        preds
    }

    /// The level-0 entry of [`Self::locate`], without recording the rest.
    fn predecessor(&self, x: &T) -> usize {
        (0..=self.max_level)
            .rev()
            .fold(HEAD, |cursor, level| self.advance(cursor, level, x))
    }

    /// Walk right along `level` while the next element is less than `x`.
    #[inline]
    fn advance(&self, mut cursor: usize, level: usize, x: &T) -> usize {
        loop {
            let next = self.nodes[cursor].next[level];
            if next == TAIL || self.nodes[next].value >= *x {
                return cursor;
            }
            cursor = next;
        }
    }

    #[inline]
    fn matches(&self, slot: usize, x: &T) -> bool {
        slot != TAIL && self.nodes[slot].value.cmp(x) == Ordering::Equal
    }

    fn check_bounds(&self, x: &T) -> Result<(), SkipListError> {
        if *x <= self.nodes[HEAD].value || *x >= self.nodes[TAIL].value {
            return Err(SkipListError::OutOfRange);
        }
        Ok(())
    }

    fn remove_slot(&mut self, slot: usize) -> Option<T> {
        if slot == HEAD || slot == TAIL {
            return None;
        }
        let preds = self.locate(&self.nodes[slot].value);
        self.unlink(&preds, slot);
        Some(self.release(slot))
    }

    /// Splice `target` out of every level it occupies. Membership is
    /// contiguous from level 0, so the first level that does not link to
    /// `target` ends the walk.
    fn unlink(&mut self, preds: &[usize], target: usize) {
        for (i, &pred) in preds.iter().enumerate() {
            if self.nodes[pred].next[i] != target {
                break;
            }
            self.nodes[pred].next[i] = self.nodes[target].next[i];
        }
        let successor = self.nodes[target].next[0];
        self.nodes[successor].prev = Some(preds[0]);

        self.len -= 1;
        self.stats.record_removal();
    }

    /// Drop an unlinked node from the arena and hand back its element. The
    /// last slot is moved into the hole, so its neighbours are re-pointed
    /// first while the list is still consistent.
    ///
    /// Finding those neighbours takes a second `locate`, so every delete
    /// walks the list twice unless the removed node already sits in the
    /// last slot.
    fn release(&mut self, slot: usize) -> T {
        let last = self.nodes.len() - 1;
        if slot != last {
            let preds = self.locate(&self.nodes[last].value);
            let height = self.nodes[last].next.len();
            for (i, &pred) in preds.iter().enumerate().take(height) {
                self.nodes[pred].next[i] = slot;
            }
            let successor = self.nodes[last].next[0];
            self.nodes[successor].prev = Some(slot);
        }
        self.nodes.swap_remove(slot).value
    }

    /// Rebuild into an evenly leveled list with double the max level.
    ///
    /// The arena is first permuted into ascending order (head, tail, then
    /// every element), then each level is relinked by appending nodes in
    /// order.
    #[instrument(level = "debug", skip(self), fields(len = self.len))]
    fn rebuild(&mut self) {
        let old_max_level = self.max_level;
        self.max_level = old_max_level.saturating_mul(2).max(1);
        self.threshold = u32::try_from(self.max_level)
            .ok()
            .and_then(|shift| 1usize.checked_shl(shift))
            .unwrap_or(usize::MAX);

        // rank[slot] is the slot's position in ascending order
        let mut rank = vec![0; self.nodes.len()];
        rank[TAIL] = TAIL;
        let mut position = 2;
        let mut cursor = self.nodes[HEAD].next[0];
        while cursor != TAIL {
            rank[cursor] = position;
            position += 1;
            cursor = self.nodes[cursor].next[0];
        }
        for i in 0..self.nodes.len() {
            while rank[i] != i {
                let target = rank[i];
                self.nodes.swap(i, target);
                rank.swap(i, target);
            }
        }

        let max_level = self.max_level;
        let mut preds = vec![HEAD; max_level + 1];
        for sentinel in [HEAD, TAIL] {
            self.nodes[sentinel].next.clear();
            self.nodes[sentinel].next.resize(max_level + 1, TAIL);
        }
        self.nodes[HEAD].prev = None;

        let mut previous = HEAD;
        for slot in 2..self.nodes.len() {
            let level = (slot - 2) % max_level;
            let node = &mut self.nodes[slot];
            node.next.clear();
            node.next.resize(level + 1, TAIL);
            node.prev = Some(previous);
            for (i, pred) in preds.iter_mut().enumerate().take(level + 1) {
                self.nodes[*pred].next[i] = slot;
                *pred = slot;
            }
            previous = slot;
        }
        self.nodes[TAIL].prev = Some(previous);

        self.stats.record_rebuild();
        debug!(
            old_max_level,
            new_max_level = self.max_level,
            threshold = self.threshold,
            "rebuilt skip list"
        );
    }
}

impl<T, G> SkipList<T, G> {
    /// Drop every element. The current max level and threshold are kept.
    pub fn clear(&mut self) {
        self.nodes.truncate(2);
        self.nodes[HEAD].next.fill(TAIL);
        self.nodes[TAIL].prev = Some(HEAD);
        self.stats.record_removals(self.len as u64);
        self.len = 0;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The highest level any node may occupy.
    pub fn max_level(&self) -> usize {
        self.max_level
    }

    /// The length at which the next rebuild happens.
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn stats(&self) -> SkipListStats {
        self.stats
    }

    pub fn head_sentinel(&self) -> &T {
        &self.nodes[HEAD].value
    }

    pub fn tail_sentinel(&self) -> &T {
        &self.nodes[TAIL].value
    }

    pub fn first(&self) -> Option<&T> {
        match self.nodes[HEAD].next[0] {
            | TAIL => None,
            | slot => Some(&self.nodes[slot].value),
        }
    }

    pub fn last(&self) -> Option<&T> {
        match self.nodes[TAIL].prev {
            | Some(HEAD) | None => None,
            | Some(slot) => Some(&self.nodes[slot].value),
        }
    }

    /// The element at position `index` in ascending order. This walks level 0
    /// from the first element, so it is linear in `index`.
    pub fn find_by_index(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.iter().nth(index)
    }

    /// Iterate in ascending order. The iterator borrows the list, so the list
    /// cannot be mutated while it is alive.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.nodes, self.len)
    }
}

impl<T: Ord, G: LevelGenerator> Extend<T> for SkipList<T, G> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for x in iter {
            if let Err(err) = self.insert(x) {
                warn!(%err, "skipped element");
            }
        }
    }
}

impl<'a, T, G> IntoIterator for &'a SkipList<T, G> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Ord, G: LevelGenerator> IntoIterator for SkipList<T, G> {
    type Item = T;
    type IntoIter = IntoIter<T, G>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<T: fmt::Debug, G> fmt::Debug for SkipList<T, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Elements in ascending order, separated by single spaces.
impl<T: fmt::Display, G> fmt::Display for SkipList<T, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, x) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{x}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
impl<T: Ord, G> SkipList<T, G> {
    /// Assert every structural invariant of the list.
    pub(crate) fn check_invariants(&self) {
        assert_eq!(self.nodes.len(), self.len + 2, "arena holds exactly the live nodes");
        assert!(self.nodes[HEAD].prev.is_none());
        assert_eq!(self.nodes[HEAD].next.len(), self.max_level + 1);
        assert!(self.nodes[TAIL].next.len() == self.max_level + 1);

        let mut below: Option<Vec<usize>> = None;
        for level in 0..=self.max_level {
            let mut members: Vec<usize> = Vec::new();
            let mut cursor = self.nodes[HEAD].next[level];
            while cursor != TAIL {
                assert!(self.nodes[cursor].level() >= level);
                if let Some(&prior) = members.last() {
                    assert!(
                        self.nodes[prior].value < self.nodes[cursor].value,
                        "level {level} is not strictly increasing"
                    );
                }
                members.push(cursor);
                cursor = self.nodes[cursor].next[level];
            }
            match &below {
                | None => assert_eq!(members.len(), self.len),
                | Some(lower) => {
                    for slot in &members {
                        assert!(lower.contains(slot), "level {level} skips level {}", level - 1);
                    }
                },
            }
            below = Some(members);
        }

        let mut previous = HEAD;
        let mut cursor = self.nodes[HEAD].next[0];
        while cursor != TAIL {
            assert_eq!(self.nodes[cursor].prev, Some(previous));
            previous = cursor;
            cursor = self.nodes[cursor].next[0];
        }
        assert_eq!(self.nodes[TAIL].prev, Some(previous));
    }

    /// Levels of the elements in ascending order.
    pub(crate) fn levels(&self) -> Vec<usize> {
        let mut levels = Vec::with_capacity(self.len);
        let mut cursor = self.nodes[HEAD].next[0];
        while cursor != TAIL {
            levels.push(self.nodes[cursor].level());
            cursor = self.nodes[cursor].next[0];
        }
        levels
    }
}
