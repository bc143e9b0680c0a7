use super::inorder::InOrderIterator;
use super::node::NodeId;

/// A read-only view over a binary tree whose nodes know their parent.
///
/// Every `NodeId` handed to these methods must have been produced by the
/// same tree; foreign ids are a logic error and may panic.
pub trait Tree: Sized {
    /// The type of the values stored in the nodes.
    type Value;

    /// Returns the root node, or `None` if the tree is empty.
    fn root(&self) -> Option<NodeId>;
    /// Returns the left child of `id`, if any.
    fn left(&self, id: NodeId) -> Option<NodeId>;
    /// Returns the right child of `id`, if any.
    fn right(&self, id: NodeId) -> Option<NodeId>;
    /// Returns the parent of `id`, or `None` for the root.
    fn parent(&self, id: NodeId) -> Option<NodeId>;
    /// Returns the value held by `id`.
    fn value(&self, id: NodeId) -> &Self::Value;
    /// Number of nodes reachable from the root.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.root().is_none()
    }

    /// Returns the left-most descendant of `id`, `id` itself if it has no
    /// left child.
    fn leftmost(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.left(id) {
            id = left;
        }
        id
    }

    /// Starts a fresh in-order traversal from the root. Each call returns
    /// an independent iterator, so the sequence can be replayed at will.
    fn traverse(&self) -> InOrderIterator<'_, Self> {
        InOrderIterator::new(self)
    }
}
