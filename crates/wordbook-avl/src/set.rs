// AVL ordered set: search, insert, remove

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

use crate::iter::Iter;
use crate::node::{Link, Node, height, rebalance_link};

/// An ordered set of unique keys stored in an AVL tree.
///
/// Point operations (`contains`, `insert`, `remove`) run in `O(log n)`;
/// traversal via [`iter`](AvlSet::iter) yields keys in ascending order.
///
/// ```
/// use wordbook_avl::AvlSet;
///
/// let mut set = AvlSet::new();
/// set.insert("cat".to_string());
/// set.insert("bat".to_string());
/// assert!(set.contains("cat"));
/// assert_eq!(set.iter().collect::<Vec<_>>(), ["bat", "cat"]);
/// ```
#[derive(Clone)]
pub struct AvlSet<T> {
    root: Link<T>,
    len: usize,
}

impl<T> AvlSet<T> {
    /// Create an empty set.
    pub const fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Returns `true` if the set holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of keys in the set.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Height of the tree (0 when empty, 1 for a single key).
    pub fn height(&self) -> usize {
        height(&self.root)
    }

    /// The root node, if any. Exposed for structural inspection.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Remove every key.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Ascending in-order iterator over the keys.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.root, self.len, self.height())
    }
}

impl<T: Ord> AvlSet<T> {
    /// Returns `true` if `key` is in the set.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut link = &self.root;
        while let Some(node) = link {
            link = match key.cmp(node.key.borrow()) {
                Ordering::Less => &node.left,
                Ordering::Greater => &node.right,
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Insert `key`.
    ///
    /// Callers are expected to check [`contains`](AvlSet::contains) first.
    /// Inserting a key that is already present leaves the set unchanged and
    /// returns `false`.
    pub fn insert(&mut self, key: T) -> bool {
        let mut rotations = 0;
        self.insert_counted(key, &mut rotations)
    }

    /// Remove `key`.
    ///
    /// Callers are expected to check [`contains`](AvlSet::contains) first.
    /// Removing a key that is not present leaves the set unchanged and
    /// returns `false`.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut rotations = 0;
        self.remove_counted(key, &mut rotations)
    }

    fn insert_counted(&mut self, key: T, rotations: &mut usize) -> bool {
        let inserted = insert_node(&mut self.root, key, rotations);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    fn remove_counted<Q>(&mut self, key: &Q, rotations: &mut usize) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let removed = remove_node(&mut self.root, key, rotations);
        if removed {
            self.len -= 1;
        }
        removed
    }
}

/// Descend to the insertion point, attach a leaf and rebalance on the way
/// back up. Once a rotation has fixed the lowest unbalanced ancestor, that
/// subtree is back to its previous height, so the remaining ancestors only
/// get their heights refreshed.
fn insert_node<T: Ord>(link: &mut Link<T>, key: T, rotations: &mut usize) -> bool {
    let inserted = match link {
        None => {
            *link = Some(Node::leaf(key));
            return true;
        }
        Some(node) => match key.cmp(&node.key) {
            Ordering::Less => insert_node(&mut node.left, key, rotations),
            Ordering::Greater => insert_node(&mut node.right, key, rotations),
            Ordering::Equal => false,
        },
    };
    if inserted {
        rebalance_link(link, rotations);
    }
    inserted
}

/// Locate and unlink `key`, then rebalance every ancestor on the way back
/// to the root. Unlike insertion, a deletion can rotate at several levels.
fn remove_node<T, Q>(link: &mut Link<T>, key: &Q, rotations: &mut usize) -> bool
where
    T: Ord + Borrow<Q>,
    Q: Ord + ?Sized,
{
    let Some(node) = link.as_mut() else {
        return false;
    };
    let removed = match key.cmp(node.key.borrow()) {
        Ordering::Less => remove_node(&mut node.left, key, rotations),
        Ordering::Greater => remove_node(&mut node.right, key, rotations),
        Ordering::Equal => {
            unlink(link, rotations);
            true
        }
    };
    if removed {
        rebalance_link(link, rotations);
    }
    removed
}

/// Remove the node stored in `link` from the tree.
///
/// A node with at most one child is replaced by that child. A node with two
/// children takes over the key of its in-order predecessor, which is then
/// removed from the left subtree.
fn unlink<T>(link: &mut Link<T>, rotations: &mut usize) {
    let Some(mut node) = link.take() else {
        return;
    };
    *link = match (node.left.take(), node.right.take()) {
        (None, None) => None,
        (Some(child), None) | (None, Some(child)) => Some(child),
        (Some(left), Some(right)) => {
            node.left = Some(left);
            node.right = Some(right);
            if let Some(predecessor) = take_max(&mut node.left, rotations) {
                node.key = predecessor;
            }
            Some(node)
        }
    };
}

/// Detach the largest key of a subtree, rebalancing along the right spine.
fn take_max<T>(link: &mut Link<T>, rotations: &mut usize) -> Option<T> {
    let node = link.as_mut()?;
    if node.right.is_some() {
        let max = take_max(&mut node.right, rotations);
        rebalance_link(link, rotations);
        return max;
    }
    let mut node = link.take()?;
    *link = node.left.take();
    let Node { key, .. } = *node;
    Some(key)
}

impl<T> Default for AvlSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for AvlSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Ord> FromIterator<T> for AvlSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = AvlSet::new();
        set.extend(iter);
        set
    }
}

impl<T: Ord> Extend<T> for AvlSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, T> IntoIterator for &'a AvlSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
