use super::error::Error;
use super::node::NodeId;
use super::tree::Tree;
use std::iter::FusedIterator;

/// An external, resumable in-order iterator.
///
/// The only state kept between two steps is the node that was yielded
/// last; successors are found through the right subtree or, failing that,
/// by climbing the parent links. No stack is allocated and no step
/// recurses, so a step costs at most `O(height)`.
pub struct InOrderIterator<'a, T: Tree> {
    /// The tree being walked.
    tree: &'a T,
    /// Before the first step, the left-most node; afterwards, the node
    /// whose value was produced last.
    current: Option<NodeId>,
    /// Whether the value at `current` has been produced already.
    started: bool,
    /// Number of values still to be produced.
    remaining: usize,
}

impl<'a, T: Tree> InOrderIterator<'a, T> {
    pub fn new(tree: &'a T) -> Self {
        InOrderIterator {
            tree,
            current: tree.root().map(|root| tree.leftmost(root)),
            started: false,
            remaining: tree.len(),
        }
    }

    /// Returns `true` if another call to `next_value` will succeed. This
    /// never moves the cursor.
    pub fn has_next(&self) -> bool {
        let current = match self.current {
            Some(current) => current,
            None => return false,
        };

        if !self.started || self.tree.right(current).is_some() {
            return true;
        }

        self.unvisited_ancestor(current).is_some()
    }

    /// Advances by one position and returns the value found there.
    pub fn next_value(&mut self) -> Result<&'a T::Value, Error> {
        let tree = self.tree;
        let current = self.current.ok_or(Error::ExhaustedSequence)?;

        let next = if !self.started {
            self.started = true;
            current
        } else if let Some(right) = tree.right(current) {
            tree.leftmost(right)
        } else {
            match self.unvisited_ancestor(current) {
                Some(ancestor) => ancestor,
                None => {
                    log::trace!("in-order traversal exhausted at node #{}", current.index());
                    return Err(Error::ExhaustedSequence);
                }
            }
        };

        self.current = Some(next);
        self.remaining = self.remaining.saturating_sub(1);
        Ok(tree.value(next))
    }

    /// Climbs from `id` past every ancestor that was entered from its
    /// right side, and returns the first one entered from its left side.
    fn unvisited_ancestor(&self, mut id: NodeId) -> Option<NodeId> {
        while let Some(parent) = self.tree.parent(id) {
            if self.tree.right(parent) != Some(id) {
                return Some(parent);
            }
            id = parent;
        }
        None
    }
}

impl<'a, T: Tree> Iterator for InOrderIterator<'a, T> {
    type Item = &'a T::Value;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_value().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T: Tree> ExactSizeIterator for InOrderIterator<'a, T> {}

impl<'a, T: Tree> FusedIterator for InOrderIterator<'a, T> {}
