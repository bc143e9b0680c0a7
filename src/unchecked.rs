use super::binary_tree::BinaryTree;
use super::error::Error;
use super::node::{Node, NodeId};
use serde::Deserialize;
use std::convert::TryFrom;

/// Mirror of `BinaryTree` as found on the wire, before its links have
/// been checked.
#[derive(Deserialize)]
pub(crate) struct Unchecked<T> {
    pub(crate) nodes: Vec<Node<T>>,
}

impl<T> TryFrom<Unchecked<T>> for BinaryTree<T> {
    type Error = Error;

    fn try_from(value: Unchecked<T>) -> Result<Self, Self::Error> {
        check_links(&value.nodes).map_err(|err| {
            log::debug!("rejecting decoded tree of {} nodes: {}", value.nodes.len(), err);
            err
        })?;

        Ok(BinaryTree { nodes: value.nodes })
    }
}

/// Enforces the arena invariants that the constructors guarantee by
/// construction: the root is node #0 and has no parent, every other node
/// has a parent stored before it that claims it as a child, and every
/// child claims its parent back. Together these rule out cycles, orphans
/// and shared subtrees.
fn check_links<T>(nodes: &[Node<T>]) -> Result<(), Error> {
    let root = match nodes.first() {
        Some(root) => root,
        None => return Ok(()),
    };
    if root.parent.is_some() {
        return Err(Error::InvalidRoot);
    }

    for (index, node) in nodes.iter().enumerate() {
        for link in node.left.iter().chain(node.right.iter()) {
            if link.0 >= nodes.len() {
                return Err(Error::DanglingLink {
                    node: index,
                    link: link.0,
                });
            }
        }
        if let Some(parent) = node.parent {
            if parent.0 >= nodes.len() {
                return Err(Error::DanglingLink {
                    node: index,
                    link: parent.0,
                });
            }
        }

        if node.left.is_some() && node.left == node.right {
            return Err(Error::SharedChild {
                child: node.left.map_or(0, NodeId::index),
            });
        }

        for child in node.left.iter().chain(node.right.iter()) {
            if nodes[child.0].parent != Some(NodeId(index)) {
                return Err(Error::InconsistentParent {
                    parent: index,
                    child: child.0,
                });
            }
        }

        if index == 0 {
            continue;
        }

        let parent = node.parent.ok_or(Error::InvalidRoot)?;
        if parent.0 >= index {
            return Err(Error::ForwardParent { node: index });
        }
        let claimed = &nodes[parent.0];
        if claimed.left != Some(NodeId(index)) && claimed.right != Some(NodeId(index)) {
            return Err(Error::InconsistentParent {
                parent: parent.0,
                child: index,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::tree::Tree;
    use super::*;

    fn node(
        value: u8,
        left: Option<usize>,
        right: Option<usize>,
        parent: Option<usize>,
    ) -> Node<u8> {
        Node {
            value,
            left: left.map(NodeId),
            right: right.map(NodeId),
            parent: parent.map(NodeId),
        }
    }

    fn check(nodes: Vec<Node<u8>>) -> Result<BinaryTree<u8>, Error> {
        let _ = env_logger::builder().is_test(true).try_init();
        BinaryTree::try_from(Unchecked { nodes })
    }

    #[test]
    fn accepts_well_formed_trees() {
        assert!(check(vec![]).is_ok());
        assert!(check(vec![node(1, None, None, None)]).is_ok());
        assert!(check(vec![
            node(1, Some(1), Some(2), None),
            node(2, None, None, Some(0)),
            node(3, None, None, Some(0)),
        ])
        .is_ok());
    }

    #[test]
    fn accepts_any_parent_first_layout() {
        // Right subtree stored before the left one.
        let tree = check(vec![
            node(2, Some(2), Some(1), None),
            node(3, None, None, Some(0)),
            node(1, None, None, Some(0)),
        ])
        .unwrap();
        assert_eq!(tree.traverse().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn rejects_root_with_parent() {
        assert_eq!(
            check(vec![node(1, None, None, Some(0))]).unwrap_err(),
            Error::InvalidRoot
        );
    }

    #[test]
    fn rejects_orphan() {
        assert_eq!(
            check(vec![node(1, None, None, None), node(2, None, None, None)]).unwrap_err(),
            Error::InvalidRoot
        );
    }

    #[test]
    fn rejects_dangling_link() {
        assert_eq!(
            check(vec![node(1, None, Some(3), None)]).unwrap_err(),
            Error::DanglingLink { node: 0, link: 3 }
        );
    }

    #[test]
    fn rejects_child_used_twice() {
        assert_eq!(
            check(vec![
                node(1, Some(1), Some(1), None),
                node(2, None, None, Some(0)),
            ])
            .unwrap_err(),
            Error::SharedChild { child: 1 }
        );
    }

    #[test]
    fn rejects_parent_not_claiming_child() {
        assert_eq!(
            check(vec![node(1, None, None, None), node(2, None, None, Some(0))]).unwrap_err(),
            Error::InconsistentParent {
                parent: 0,
                child: 1
            }
        );
    }

    #[test]
    fn rejects_child_pointing_elsewhere() {
        assert_eq!(
            check(vec![
                node(1, Some(1), Some(2), None),
                node(2, None, None, Some(0)),
                node(3, None, None, Some(1)),
            ])
            .unwrap_err(),
            Error::InconsistentParent {
                parent: 0,
                child: 2
            }
        );
    }

    #[test]
    fn rejects_backward_child() {
        // Node #2 claims node #1 as a child, so #1 would sit before its parent.
        assert_eq!(
            check(vec![
                node(1, Some(2), None, None),
                node(2, None, None, Some(2)),
                node(3, Some(1), None, Some(0)),
            ])
            .unwrap_err(),
            Error::ForwardParent { node: 1 }
        );
    }
}
