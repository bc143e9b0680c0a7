//! Binary trees whose nodes link back to their parent, and an in-order
//! iterator that uses those links to resume a traversal without keeping a
//! stack.
//!
//! ```
//! use inorder_rs::{BinaryTree, Tree};
//!
//! let tree = BinaryTree::branch(1, BinaryTree::leaf(2), BinaryTree::leaf(3));
//! let values: Vec<_> = tree.traverse().copied().collect();
//! assert_eq!(values, vec![2, 1, 3]);
//! ```

extern crate rlp;
extern crate sha3;

pub mod binary_tree;
pub mod error;
pub mod hashable;
pub mod inorder;
pub mod node;
pub mod tree;
mod unchecked;

pub use binary_tree::BinaryTree;
pub use error::Error;
pub use hashable::Hashable;
pub use inorder::InOrderIterator;
pub use node::{Node, NodeId};
pub use tree::Tree;
