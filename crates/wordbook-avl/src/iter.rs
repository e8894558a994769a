// In-order traversal with an explicit stack
//
// The stack holds the chain of nodes whose left subtrees are being visited.
// Its depth never exceeds the tree height, which the balance property keeps
// logarithmic in the number of keys.

use std::iter::FusedIterator;

use crate::node::{Link, Node};

/// Ascending iterator over the keys of an [`AvlSet`](crate::AvlSet).
///
/// Created by [`AvlSet::iter`](crate::AvlSet::iter). Traversal is lazy;
/// calling `iter` again restarts from the smallest key.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: &'a Link<T>, len: usize, height: usize) -> Self {
        let mut iter = Self {
            stack: Vec::with_capacity(height),
            remaining: len,
        };
        iter.push_left_spine(root.as_deref());
        iter
    }

    /// Push `node` and all of its left descendants.
    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}
