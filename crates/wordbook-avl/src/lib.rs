//! Height-balanced ordered set.
//!
//! This crate provides [`AvlSet`], an AVL tree of owned keys used as the
//! backing store of the wordbook dictionary. Every node satisfies the binary
//! search tree ordering and the AVL balance property
//! (`|height(left) - height(right)| <= 1`) after each public operation.
//!
//! # Architecture
//!
//! - [`node`] -- node layout, height bookkeeping, rotations and rebalancing
//! - [`set`] -- the `AvlSet` type: search, insert, remove
//! - [`iter`] -- in-order traversal with an explicit stack
//!
//! `insert` and `remove` do not report duplicates or missing keys as errors.
//! Callers that need those conditions check `contains` first.

pub mod iter;
pub mod node;
pub mod set;

pub use iter::Iter;
pub use set::AvlSet;
