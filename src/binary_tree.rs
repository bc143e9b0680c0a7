use super::hashable::Hashable;
use super::node::{Node, NodeId};
use super::tree::Tree;
use super::unchecked::Unchecked;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;
use std::iter::FromIterator;

/// A binary tree stored as an arena of nodes.
///
/// The root, when present, is node #0, and every node is stored after its
/// parent. Children link down by index and every child links back up to its
/// parent, so the tree can be walked in both directions without any
/// reference cycle. The shape is fixed once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Unchecked<T>")]
pub struct BinaryTree<T> {
    pub(crate) nodes: Vec<Node<T>>,
}

impl<T> BinaryTree<T> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        BinaryTree { nodes: Vec::new() }
    }

    /// Creates a tree made of a single node.
    pub fn leaf(value: T) -> Self {
        BinaryTree {
            nodes: vec![Node::new(value)],
        }
    }

    /// Creates a tree rooted at a new node holding `value`, whose left and
    /// right children are the roots of `left` and `right`. An empty subtree
    /// leaves the corresponding child absent.
    pub fn branch(value: T, left: BinaryTree<T>, right: BinaryTree<T>) -> Self {
        let mut nodes = Vec::with_capacity(1 + left.nodes.len() + right.nodes.len());
        nodes.push(Node::new(value));
        let root = NodeId(0);

        if !left.nodes.is_empty() {
            nodes[0].left = Some(NodeId(nodes.len()));
            Self::adopt(&mut nodes, left, root);
        }
        if !right.nodes.is_empty() {
            nodes[0].right = Some(NodeId(nodes.len()));
            Self::adopt(&mut nodes, right, root);
        }

        BinaryTree { nodes }
    }

    /// Appends the arena of `subtree` to `nodes`, renumbering its links and
    /// hooking its root under `parent`.
    fn adopt(nodes: &mut Vec<Node<T>>, subtree: BinaryTree<T>, parent: NodeId) {
        let offset = nodes.len();
        nodes.extend(
            subtree
                .nodes
                .into_iter()
                .map(|node| node.shifted(offset)),
        );
        nodes[offset].parent = Some(parent);
    }

    /// Builds a height-balanced tree whose in-order sequence is `values`,
    /// in the order they are given.
    pub fn balanced<I: IntoIterator<Item = T>>(values: I) -> Self {
        Self::balanced_from(values.into_iter().collect())
    }

    fn balanced_from(mut values: Vec<T>) -> Self {
        if values.is_empty() {
            return Self::new();
        }

        let right = values.split_off(values.len() / 2 + 1);
        match values.pop() {
            Some(value) => Self::branch(
                value,
                Self::balanced_from(values),
                Self::balanced_from(right),
            ),
            None => Self::new(),
        }
    }

    /// Returns the node with id `id`, or `None` if it is not part of
    /// this tree.
    pub fn get(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(id.0)
    }

    /// Number of nodes on the longest root-to-leaf path, `0` for an empty
    /// tree.
    pub fn height(&self) -> usize {
        // Children always come after their parent, so depths can be filled
        // in a single forward pass.
        let mut depths: Vec<usize> = Vec::with_capacity(self.nodes.len());
        for node in self.nodes.iter() {
            let depth = node.parent.map_or(1, |parent| depths[parent.0] + 1);
            depths.push(depth);
        }
        depths.into_iter().max().unwrap_or(0)
    }

    #[inline]
    fn node(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id.0]
    }
}

impl<T> Tree for BinaryTree<T> {
    type Value = T;

    fn root(&self) -> Option<NodeId> {
        (!self.nodes.is_empty()).then(|| NodeId(0))
    }

    fn left(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).left
    }

    fn right(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).right
    }

    fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    fn value(&self, id: NodeId) -> &T {
        &self.node(id).value
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        BinaryTree::new()
    }
}

impl<T> FromIterator<T> for BinaryTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        BinaryTree::balanced(iter)
    }
}

impl<'a, T> IntoIterator for &'a BinaryTree<T> {
    type Item = &'a T;
    type IntoIter = super::inorder::InOrderIterator<'a, BinaryTree<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.traverse()
    }
}

impl<T: rlp::Encodable> rlp::Encodable for BinaryTree<T> {
    fn rlp_append(&self, s: &mut rlp::RlpStream) {
        s.append_list::<Node<T>, Node<T>>(&self.nodes);
    }
}

impl<T: rlp::Decodable> rlp::Decodable for BinaryTree<T> {
    fn decode(rlp: &rlp::Rlp) -> Result<Self, rlp::DecoderError> {
        let nodes: Vec<Node<T>> = rlp.as_list()?;
        BinaryTree::try_from(Unchecked { nodes })
            .map_err(|_| rlp::DecoderError::Custom("malformed binary tree"))
    }
}

#[cfg(feature = "arbitrary")]
impl<T: arbitrary::Arbitrary> arbitrary::Arbitrary for BinaryTree<T> {
    /// Draws the values first, then a random shape whose in-order sequence
    /// is exactly those values.
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Self> {
        let values = <Vec<T> as arbitrary::Arbitrary>::arbitrary(u)?;
        Self::arbitrary_shape(u, values)
    }
}

#[cfg(feature = "arbitrary")]
impl<T> BinaryTree<T> {
    fn arbitrary_shape(
        u: &mut arbitrary::Unstructured<'_>,
        mut values: Vec<T>,
    ) -> arbitrary::Result<Self> {
        if values.is_empty() {
            return Ok(Self::new());
        }

        let at = u.int_in_range(0..=values.len() - 1)?;
        let right = values.split_off(at + 1);
        match values.pop() {
            Some(value) => {
                let left = Self::arbitrary_shape(u, values)?;
                let right = Self::arbitrary_shape(u, right)?;
                Ok(Self::branch(value, left, right))
            }
            None => Ok(Self::new()),
        }
    }
}

fn fmt_link(link: Option<NodeId>) -> String {
    link.map_or_else(|| "-".to_string(), |id| format!("#{}", id.0))
}

impl<T: fmt::Display + rlp::Encodable> fmt::Display for BinaryTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "nodes:")?;
        for (i, node) in self.nodes.iter().enumerate() {
            writeln!(
                f,
                "\t#{} {} (left: {}, right: {}, parent: {})",
                i,
                node.value,
                fmt_link(node.left),
                fmt_link(node.right),
                fmt_link(node.parent)
            )?;
        }
        writeln!(f, "hash:")?;
        writeln!(f, "\t{}", hex::encode(self.hash()))
    }
}
