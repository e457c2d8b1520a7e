//! Tree traversal iterators
//!
//! Both iterators compute the full visiting order when constructed and then
//! hand it out one node at a time. The order reflects the tree as it was at
//! construction; the shared borrow keeps it from changing underneath.
//!
//! ```text
//!          root
//!         /    \
//!        A      B
//!               |
//!               C
//!
//! depth-first:   root, B, C, A   (stack, children pushed in document order)
//! breadth-first: root, A, B, C   (queue, level by level)
//! ```

use crate::node::Node;
use std::collections::VecDeque;
use std::iter::FusedIterator;

/// Common surface of the traversal iterators
///
/// `next()` keeps returning `None` once the sequence is used up.
pub trait NodeIterator<'a>: Iterator<Item = &'a Node> + FusedIterator {
    /// True while unvisited nodes remain
    fn has_next(&self) -> bool;

    /// Number of nodes not yet returned
    fn remaining(&self) -> usize;
}

/// Depth-first order from a LIFO stack
///
/// Children are pushed in document order without reversal, so the last
/// child's subtree is visited before its earlier siblings.
#[derive(Debug, Clone)]
pub struct DepthFirstIterator<'a> {
    /// Pending nodes; the next one to hand out is at the end
    pending: Vec<&'a Node>,
}

impl<'a> DepthFirstIterator<'a> {
    pub fn new(root: &'a Node) -> Self {
        let mut order = Vec::new();
        let mut stack = vec![root];

        while let Some(node) = stack.pop() {
            order.push(node);
            for child in node.children() {
                stack.push(child);
            }
        }

        order.reverse();
        Self { pending: order }
    }
}

impl<'a> Iterator for DepthFirstIterator<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        self.pending.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.pending.len(), Some(self.pending.len()))
    }
}

impl FusedIterator for DepthFirstIterator<'_> {}

impl ExactSizeIterator for DepthFirstIterator<'_> {}

impl<'a> NodeIterator<'a> for DepthFirstIterator<'a> {
    fn has_next(&self) -> bool {
        !self.pending.is_empty()
    }

    fn remaining(&self) -> usize {
        self.pending.len()
    }
}

/// Breadth-first (level) order from a FIFO queue
#[derive(Debug, Clone)]
pub struct BreadthFirstIterator<'a> {
    pending: VecDeque<&'a Node>,
}

impl<'a> BreadthFirstIterator<'a> {
    pub fn new(root: &'a Node) -> Self {
        let mut order = VecDeque::new();
        let mut queue = VecDeque::new();
        queue.push_back(root);

        while let Some(node) = queue.pop_front() {
            order.push_back(node);
            for child in node.children() {
                queue.push_back(child);
            }
        }

        Self { pending: order }
    }
}

impl<'a> Iterator for BreadthFirstIterator<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        self.pending.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.pending.len(), Some(self.pending.len()))
    }
}

impl FusedIterator for BreadthFirstIterator<'_> {}

impl ExactSizeIterator for BreadthFirstIterator<'_> {}

impl<'a> NodeIterator<'a> for BreadthFirstIterator<'a> {
    fn has_next(&self) -> bool {
        !self.pending.is_empty()
    }

    fn remaining(&self) -> usize {
        self.pending.len()
    }
}

impl Node {
    pub fn depth_first(&self) -> DepthFirstIterator<'_> {
        DepthFirstIterator::new(self)
    }

    pub fn breadth_first(&self) -> BreadthFirstIterator<'_> {
        BreadthFirstIterator::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Container, ElementNode, ListItemNode, TextNode};
    use crate::types::NodeId;

    /// root -> [A, B], B -> [C]
    fn sample() -> (Node, [NodeId; 4]) {
        let a = TextNode::new("A");
        let c = TextNode::new("C");
        let b = ListItemNode::new();
        let (a_id, b_id, c_id) = (a.id(), b.id(), c.id());
        let b = b.with_child(c);

        let root = ElementNode::new("div", "block", "closing", Vec::<String>::new())
            .with_child(a)
            .with_child(b);
        let root_id = root.id();

        (root.into(), [root_id, a_id, b_id, c_id])
    }

    fn drain<'a>(mut iter: impl NodeIterator<'a>) -> Vec<NodeId> {
        let mut ids = Vec::new();
        while iter.has_next() {
            ids.push(iter.next().unwrap().id());
        }
        ids
    }

    #[test]
    fn test_depth_first_descends_last_child_first() {
        let (root, [r, a, b, c]) = sample();
        assert_eq!(drain(DepthFirstIterator::new(&root)), vec![r, b, c, a]);
    }

    #[test]
    fn test_breadth_first_keeps_sibling_order() {
        let (root, [r, a, b, c]) = sample();
        assert_eq!(drain(BreadthFirstIterator::new(&root)), vec![r, a, b, c]);
    }

    #[test]
    fn test_single_leaf() {
        let leaf: Node = TextNode::new("only").into();
        assert_eq!(drain(leaf.depth_first()), vec![leaf.id()]);
        assert_eq!(drain(leaf.breadth_first()), vec![leaf.id()]);
    }

    #[test]
    fn test_exhaustion_is_idempotent() {
        let (root, _) = sample();
        let mut iter = root.depth_first();
        assert_eq!(iter.remaining(), 4);
        assert_eq!(iter.by_ref().count(), 4);

        for _ in 0..3 {
            assert!(!iter.has_next());
            assert!(iter.next().is_none());
        }

        let mut iter = root.breadth_first();
        iter.by_ref().for_each(drop);
        assert!(!iter.has_next());
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_new_iterator_sees_added_child() {
        let (mut root, _) = sample();
        let before = root.breadth_first().len();

        if let Node::Element(el) = &mut root {
            el.add_child(TextNode::new("D"));
        }

        assert_eq!(before, 4);
        assert_eq!(root.breadth_first().len(), 5);
    }
}
