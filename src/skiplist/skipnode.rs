// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

/// Arena slot of the head sentinel.
pub(crate) const HEAD: usize = 0;
/// Arena slot of the tail sentinel.
pub(crate) const TAIL: usize = 1;

/// A node in the skip list. Links are arena slots owned by the list.
///
/// `next` holds one forward link per level the node participates in, so a
/// node at level `L` has `L + 1` links. `prev` is only maintained at level 0;
/// it is `None` for the head sentinel. The tail sentinel's `next` links are
/// never followed, they point back at the tail itself.
#[derive(Debug, Clone)]
pub(crate) struct SkipNode<T> {
    pub(crate) value: T,
    pub(crate) next: Vec<usize>,
    pub(crate) prev: Option<usize>,
}

impl<T> SkipNode<T> {
    /// Create a node at `level`, with every link pointing at the tail.
    pub(crate) fn new(value: T, level: usize) -> Self {
        SkipNode {
            value,
            next: vec![TAIL; level + 1],
            prev: None,
        }
    }

    /// The highest level this node is linked into.
    #[inline]
    pub(crate) fn level(&self) -> usize {
        self.next.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node() {
        let node = SkipNode::new(5, 3);
        assert_eq!(node.value, 5);
        assert_eq!(node.level(), 3);
        assert!(node.next.iter().all(|&n| n == TAIL));
        assert!(node.prev.is_none());
    }
}
