// Tree node, height bookkeeping and rotations
//
// Heights use the "leaf is 1, empty is 0" convention. Every child is a
// uniquely owned `Box`, so rotations are plain moves of boxes between fields.

/// An owned, possibly empty subtree.
pub type Link<T> = Option<Box<Node<T>>>;

/// A single tree node holding one key.
#[derive(Debug, Clone)]
pub struct Node<T> {
    pub(crate) key: T,
    pub(crate) height: usize,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

/// Height of a subtree; 0 for an empty one.
#[inline]
pub fn height<T>(link: &Link<T>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

impl<T> Node<T> {
    /// Create a detached leaf.
    pub fn leaf(key: T) -> Box<Self> {
        Box::new(Self {
            key,
            height: 1,
            left: None,
            right: None,
        })
    }

    pub fn key(&self) -> &T {
        &self.key
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// Recompute this node's height from its children.
    #[inline]
    pub(crate) fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    /// `height(left) - height(right)`.
    #[inline]
    pub fn balance_factor(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }
}

/// Rotate right around `node`, lifting its left child.
///
/// ```text
///       node            pivot
///      /    \          /     \
///   pivot    C  -->   A      node
///   /   \                   /    \
///  A     B                 B      C
/// ```
///
/// A node without a left child is returned unchanged.
pub(crate) fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let Some(mut pivot) = node.left.take() else {
        return node;
    };
    node.left = pivot.right.take();
    node.update_height();
    pivot.right = Some(node);
    pivot.update_height();
    pivot
}

/// Rotate left around `node`, lifting its right child. Mirror of
/// [`rotate_right`].
pub(crate) fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let Some(mut pivot) = node.right.take() else {
        return node;
    };
    node.right = pivot.left.take();
    node.update_height();
    pivot.left = Some(node);
    pivot.update_height();
    pivot
}

/// Restore the balance property at `node`, assuming both children are
/// already valid AVL trees whose heights differ by at most two.
///
/// Returns the new subtree root and whether a rotation was applied:
///
/// - left-left (or left-balanced, after a deletion): right rotation
/// - left-right: left rotation of the left child, then right rotation
/// - right-right (or right-balanced): left rotation
/// - right-left: right rotation of the right child, then left rotation
pub(crate) fn rebalance<T>(mut node: Box<Node<T>>) -> (Box<Node<T>>, bool) {
    node.update_height();
    let factor = node.balance_factor();

    if factor > 1 {
        if node.left.as_ref().is_some_and(|left| left.balance_factor() < 0) {
            node.left = node.left.take().map(rotate_left);
        }
        (rotate_right(node), true)
    } else if factor < -1 {
        if node.right.as_ref().is_some_and(|right| right.balance_factor() > 0) {
            node.right = node.right.take().map(rotate_right);
        }
        (rotate_left(node), true)
    } else {
        (node, false)
    }
}

/// Rebalance the subtree stored in `link` in place, counting rotations.
pub(crate) fn rebalance_link<T>(link: &mut Link<T>, rotations: &mut usize) {
    if let Some(node) = link.take() {
        let (node, rotated) = rebalance(node);
        if rotated {
            *rotations += 1;
        }
        *link = Some(node);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a node from already-built children, fixing up its height.
    fn join(key: i32, left: Link<i32>, right: Link<i32>) -> Box<Node<i32>> {
        let mut node = Node::leaf(key);
        node.left = left;
        node.right = right;
        node.update_height();
        node
    }

    fn keys_in_order(node: &Node<i32>, out: &mut Vec<i32>) {
        if let Some(left) = node.left() {
            keys_in_order(left, out);
        }
        out.push(node.key);
        if let Some(right) = node.right() {
            keys_in_order(right, out);
        }
    }

    #[test]
    fn leaf_has_height_one() {
        let leaf = Node::leaf(7);
        assert_eq!(leaf.height(), 1);
        assert_eq!(leaf.balance_factor(), 0);
        assert_eq!(height::<i32>(&None), 0);
    }

    #[test]
    fn rotate_right_lifts_left_child() {
        // 3 <- 2 <- 1 (left chain)
        let node = join(3, Some(join(2, Some(Node::leaf(1)), None)), None);
        assert_eq!(node.balance_factor(), 2);

        let root = rotate_right(node);
        assert_eq!(root.key, 2);
        assert_eq!(root.left().map(|n| n.key), Some(1));
        assert_eq!(root.right().map(|n| n.key), Some(3));
        assert_eq!(root.height(), 2);
        assert_eq!(root.balance_factor(), 0);
    }

    #[test]
    fn rotate_left_lifts_right_child() {
        let node = join(1, None, Some(join(2, None, Some(Node::leaf(3)))));
        let root = rotate_left(node);
        assert_eq!(root.key, 2);
        assert_eq!(root.left().map(|n| n.key), Some(1));
        assert_eq!(root.right().map(|n| n.key), Some(3));
        assert_eq!(root.height(), 2);
    }

    #[test]
    fn rotation_moves_inner_subtree() {
        //       4              2
        //      / \            / \
        //     2   5   -->    1   4
        //    / \                / \
        //   1   3              3   5
        let node = join(
            4,
            Some(join(2, Some(Node::leaf(1)), Some(Node::leaf(3)))),
            Some(Node::leaf(5)),
        );
        let root = rotate_right(node);
        assert_eq!(root.key, 2);
        let right = root.right().unwrap();
        assert_eq!(right.key, 4);
        assert_eq!(right.left().map(|n| n.key), Some(3));

        let mut keys = Vec::new();
        keys_in_order(&root, &mut keys);
        assert_eq!(keys, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn rotation_without_pivot_is_noop() {
        let leaf = Node::leaf(1);
        assert_eq!(rotate_right(leaf).key, 1);
        let leaf = Node::leaf(1);
        assert_eq!(rotate_left(leaf).key, 1);
    }

    #[test]
    fn rebalance_left_right_case() {
        // 3 with left child 1 whose right child is 2
        let node = join(3, Some(join(1, None, Some(Node::leaf(2)))), None);
        let (root, rotated) = rebalance(node);
        assert!(rotated);
        assert_eq!(root.key, 2);
        assert_eq!(root.left().map(|n| n.key), Some(1));
        assert_eq!(root.right().map(|n| n.key), Some(3));
    }

    #[test]
    fn rebalance_right_left_case() {
        let node = join(1, None, Some(join(3, Some(Node::leaf(2)), None)));
        let (root, rotated) = rebalance(node);
        assert!(rotated);
        assert_eq!(root.key, 2);
        assert_eq!(root.height(), 2);
    }

    #[test]
    fn rebalance_balanced_node_is_untouched() {
        let node = join(2, Some(Node::leaf(1)), None);
        let (root, rotated) = rebalance(node);
        assert!(!rotated);
        assert_eq!(root.key, 2);
        assert_eq!(root.height(), 2);
    }

    #[test]
    fn rebalance_link_counts_rotations() {
        let mut link = Some(join(3, Some(join(2, Some(Node::leaf(1)), None)), None));
        let mut rotations = 0;
        rebalance_link(&mut link, &mut rotations);
        assert_eq!(rotations, 1);
        assert_eq!(link.as_ref().map(|n| n.key), Some(2));

        rebalance_link(&mut link, &mut rotations);
        assert_eq!(rotations, 1);

        let mut empty: Link<i32> = None;
        rebalance_link(&mut empty, &mut rotations);
        assert!(empty.is_none());
    }
}
