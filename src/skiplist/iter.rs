// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use std::iter::FusedIterator;

use crate::skiplist::{
    level_generator::LevelGenerator,
    skipnode::{
        SkipNode,
        HEAD,
        TAIL,
    },
    skiplist::SkipList,
};

/// Borrowing iterator over a [`SkipList`] in ascending order.
///
/// The front follows level-0 `next` links from the head sentinel, the back
/// follows `prev` links from the tail sentinel. Each iterator keeps its own
/// cursors, so any number of them can run over the same list.
#[derive(Debug)]
pub struct Iter<'a, T> {
    nodes: &'a [SkipNode<T>],
    front: usize,
    back: usize,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(nodes: &'a [SkipNode<T>], len: usize) -> Self {
        Iter {
            nodes,
            front: HEAD,
            back: TAIL,
            remaining: len,
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { ..*self }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.front = self.nodes[self.front].next[0];
        self.remaining -= 1;
        Some(&self.nodes[self.front].value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.back = self.nodes[self.back].prev?;
        self.remaining -= 1;
        Some(&self.nodes[self.back].value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over a [`SkipList`] in ascending order.
#[derive(Debug)]
pub struct IntoIter<T, G> {
    list: SkipList<T, G>,
}

impl<T, G> IntoIter<T, G> {
    pub(crate) fn new(list: SkipList<T, G>) -> Self {
        IntoIter { list }
    }
}

impl<T: Ord, G: LevelGenerator> Iterator for IntoIter<T, G> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T: Ord, G: LevelGenerator> DoubleEndedIterator for IntoIter<T, G> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_last()
    }
}

impl<T: Ord, G: LevelGenerator> ExactSizeIterator for IntoIter<T, G> {}
