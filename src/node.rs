use serde::{Deserialize, Serialize};

/// Position of a node inside the arena of the tree that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }

    /// Shifts an id by `offset`, used when a subtree arena is appended
    /// behind a new root.
    #[inline]
    pub(crate) fn shifted(self, offset: usize) -> Self {
        NodeId(self.0 + offset)
    }
}

impl From<NodeId> for usize {
    fn from(id: NodeId) -> usize {
        id.0
    }
}

/// One vertex of a binary tree. Links are arena indices, `parent` is a
/// back-reference and does not own anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    pub(crate) parent: Option<NodeId>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Node {
            value,
            left: None,
            right: None,
            parent: None,
        }
    }

    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    #[inline]
    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    #[inline]
    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub(crate) fn shifted(mut self, offset: usize) -> Self {
        self.left = self.left.map(|id| id.shifted(offset));
        self.right = self.right.map(|id| id.shifted(offset));
        self.parent = self.parent.map(|id| id.shifted(offset));
        self
    }
}

// Links travel as `index + 1`, with `0` standing for an absent link.
fn encode_link(link: Option<NodeId>) -> usize {
    link.map_or(0, |id| id.0 + 1)
}

fn decode_link(raw: usize) -> Option<NodeId> {
    raw.checked_sub(1).map(NodeId)
}

impl<T: rlp::Encodable> rlp::Encodable for Node<T> {
    fn rlp_append(&self, s: &mut rlp::RlpStream) {
        s.begin_list(4)
            .append(&self.value)
            .append(&encode_link(self.left))
            .append(&encode_link(self.right))
            .append(&encode_link(self.parent));
    }
}

impl<T: rlp::Decodable> rlp::Decodable for Node<T> {
    fn decode(rlp: &rlp::Rlp) -> Result<Self, rlp::DecoderError> {
        if rlp.item_count()? != 4 {
            return Err(rlp::DecoderError::RlpIncorrectListLen);
        }

        Ok(Node {
            value: rlp.val_at(0)?,
            left: decode_link(rlp.val_at(1)?),
            right: decode_link(rlp.val_at(2)?),
            parent: decode_link(rlp.val_at(3)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_node_is_a_detached_leaf() {
        let node = Node::new(7u32);
        assert!(node.is_leaf());
        assert_eq!(node.parent(), None);
        assert_eq!(node.value(), &7);
    }

    #[test]
    fn shifting_moves_every_link() {
        let node = Node {
            value: 1u8,
            left: Some(NodeId(1)),
            right: None,
            parent: Some(NodeId(0)),
        }
        .shifted(3);

        assert_eq!(node.left(), Some(NodeId(4)));
        assert_eq!(node.right(), None);
        assert_eq!(node.parent(), Some(NodeId(3)));
    }

    #[test]
    fn rlp_encode_decode_node() {
        let node = Node {
            value: 42u64,
            left: None,
            right: Some(NodeId(2)),
            parent: Some(NodeId(0)),
        };

        let encoded = rlp::encode(&node);
        assert_eq!(encoded, vec![0xc4, 42, 0x80, 3, 1]);

        let decoded: Node<u64> = rlp::decode(&encoded).unwrap();
        assert_eq!(decoded, node);
    }

    #[test]
    fn rlp_rejects_short_node() {
        let mut s = rlp::RlpStream::new_list(2);
        s.append(&1u8).append(&0u8);
        assert!(rlp::decode::<Node<u8>>(&s.out()).is_err());
    }
}
