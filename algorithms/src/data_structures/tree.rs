//! Binary search tree with exclusively owned children.
//!
//! Variables:
//!   root  : Option<Box<TreeNode<T>>>
//!   N     : usize   number of stored values
//!   h     : usize   height, 0 for the empty tree
//!
//! Equations:
//!   ordering: left(v) < v < right(v)  for every node v
//!   insert(x):   descend by comparison, attach leaf        O(h), duplicates ignored
//!   remove(x):   0/1 child => splice,  2 children => replace with
//!                min(right subtree) and remove that node  O(h)
//!   inorder      yields values in ascending order

use std::cmp::Ordering;
use std::collections::VecDeque;

#[derive(Debug, Clone)]
struct TreeNode<T> {
    value: T,
    left: Option<Box<TreeNode<T>>>,
    right: Option<Box<TreeNode<T>>>,
}

impl<T> TreeNode<T> {
    fn leaf(value: T) -> Box<Self> {
        Box::new(TreeNode { value, left: None, right: None })
    }
}

#[derive(Debug, Clone)]
pub struct BinarySearchTree<T: Ord> {
    root: Option<Box<TreeNode<T>>>,
    len: usize,
}

impl<T: Ord> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> BinarySearchTree<T> {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns false when the value was already present.
    pub fn insert(&mut self, value: T) -> bool {
        let mut cur = &mut self.root;
        while let Some(node) = cur {
            cur = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return false,
            };
        }
        *cur = Some(TreeNode::leaf(value));
        self.len += 1;
        true
    }

    pub fn contains(&self, value: &T) -> bool {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            cur = match value.cmp(&node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Values compared while searching for `value`, root first.
    /// The last element equals `value` iff it is present.
    pub fn search_path(&self, value: &T) -> Vec<&T> {
        let mut path = Vec::new();
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            path.push(&node.value);
            cur = match value.cmp(&node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => None,
            };
        }
        path
    }

    pub fn remove(&mut self, value: &T) -> bool {
        let removed = Self::remove_from(&mut self.root, value);
        if removed {
            self.len -= 1;
        }
        removed
    }

    fn remove_from(slot: &mut Option<Box<TreeNode<T>>>, value: &T) -> bool {
        let Some(node) = slot else {
            return false;
        };
        match value.cmp(&node.value) {
            Ordering::Less => Self::remove_from(&mut node.left, value),
            Ordering::Greater => Self::remove_from(&mut node.right, value),
            Ordering::Equal => {
                let replacement = match (node.left.take(), node.right.take()) {
                    (None, None) => None,
                    (Some(child), None) | (None, Some(child)) => Some(child),
                    (Some(left), Some(right)) => {
                        let (successor, rest) = Self::take_min(right);
                        let mut successor = successor;
                        successor.left = Some(left);
                        successor.right = rest;
                        Some(successor)
                    }
                };
                *slot = replacement;
                true
            }
        }
    }

    /// Detach the minimum node of `subtree`; returns it and what remains.
    fn take_min(mut subtree: Box<TreeNode<T>>) -> (Box<TreeNode<T>>, Option<Box<TreeNode<T>>>) {
        match subtree.left.take() {
            None => {
                let rest = subtree.right.take();
                (subtree, rest)
            }
            Some(left) => {
                let (min, rest) = Self::take_min(left);
                subtree.left = rest;
                (min, Some(subtree))
            }
        }
    }

    pub fn min(&self) -> Option<&T> {
        let mut cur = self.root.as_deref()?;
        while let Some(left) = cur.left.as_deref() {
            cur = left;
        }
        Some(&cur.value)
    }

    pub fn max(&self) -> Option<&T> {
        let mut cur = self.root.as_deref()?;
        while let Some(right) = cur.right.as_deref() {
            cur = right;
        }
        Some(&cur.value)
    }

    pub fn height(&self) -> usize {
        fn depth<T>(node: Option<&TreeNode<T>>) -> usize {
            node.map_or(0, |n| 1 + depth(n.left.as_deref()).max(depth(n.right.as_deref())))
        }
        depth(self.root.as_deref())
    }

    pub fn inorder(&self) -> Vec<&T> {
        fn walk<'a, T>(node: Option<&'a TreeNode<T>>, out: &mut Vec<&'a T>) {
            if let Some(n) = node {
                walk(n.left.as_deref(), out);
                out.push(&n.value);
                walk(n.right.as_deref(), out);
            }
        }
        let mut out = Vec::with_capacity(self.len);
        walk(self.root.as_deref(), &mut out);
        out
    }

    pub fn preorder(&self) -> Vec<&T> {
        fn walk<'a, T>(node: Option<&'a TreeNode<T>>, out: &mut Vec<&'a T>) {
            if let Some(n) = node {
                out.push(&n.value);
                walk(n.left.as_deref(), out);
                walk(n.right.as_deref(), out);
            }
        }
        let mut out = Vec::with_capacity(self.len);
        walk(self.root.as_deref(), &mut out);
        out
    }

    pub fn postorder(&self) -> Vec<&T> {
        fn walk<'a, T>(node: Option<&'a TreeNode<T>>, out: &mut Vec<&'a T>) {
            if let Some(n) = node {
                walk(n.left.as_deref(), out);
                walk(n.right.as_deref(), out);
                out.push(&n.value);
            }
        }
        let mut out = Vec::with_capacity(self.len);
        walk(self.root.as_deref(), &mut out);
        out
    }

    pub fn level_order(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len);
        let mut queue: VecDeque<&TreeNode<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = queue.pop_front() {
            out.push(&node.value);
            queue.extend(node.left.as_deref());
            queue.extend(node.right.as_deref());
        }
        out
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = BinarySearchTree::new();
        for v in iter {
            tree.insert(v);
        }
        tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BinarySearchTree<i32> {
        [50, 30, 70, 20, 40, 60, 80].into_iter().collect()
    }

    fn owned(v: Vec<&i32>) -> Vec<i32> {
        v.into_iter().copied().collect()
    }

    #[test]
    fn traversals() {
        let tree = sample();
        assert_eq!(owned(tree.inorder()), vec![20, 30, 40, 50, 60, 70, 80]);
        assert_eq!(owned(tree.preorder()), vec![50, 30, 20, 40, 70, 60, 80]);
        assert_eq!(owned(tree.postorder()), vec![20, 40, 30, 60, 80, 70, 50]);
        assert_eq!(owned(tree.level_order()), vec![50, 30, 70, 20, 40, 60, 80]);
        assert_eq!(tree.height(), 3);
        assert_eq!(tree.min(), Some(&20));
        assert_eq!(tree.max(), Some(&80));
    }

    #[test]
    fn duplicates_are_ignored() {
        let mut tree = sample();
        assert!(!tree.insert(40));
        assert_eq!(tree.len(), 7);
    }

    #[test]
    fn search_path_ends_at_match_or_leaf() {
        let tree = sample();
        assert_eq!(owned(tree.search_path(&60)), vec![50, 70, 60]);
        assert_eq!(owned(tree.search_path(&65)), vec![50, 70, 60]);
        assert!(tree.contains(&60));
        assert!(!tree.contains(&65));
    }

    #[test]
    fn remove_each_shape() {
        let mut tree = sample();
        assert!(tree.remove(&20)); // leaf
        assert!(tree.remove(&30)); // one child
        assert!(tree.remove(&50)); // two children, root
        assert!(!tree.remove(&50));
        assert_eq!(owned(tree.inorder()), vec![40, 60, 70, 80]);
        assert_eq!(tree.len(), 4);
        assert_eq!(owned(tree.preorder())[0], 60);
    }

    #[test]
    fn remove_successor_with_right_child() {
        let mut tree: BinarySearchTree<i32> = [10, 5, 20, 15, 30, 17].into_iter().collect();
        assert!(tree.remove(&10));
        assert_eq!(owned(tree.inorder()), vec![5, 15, 17, 20, 30]);
        assert_eq!(owned(tree.preorder()), vec![15, 5, 20, 17, 30]);
    }
}
