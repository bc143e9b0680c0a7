extern crate sha3;

use super::binary_tree::BinaryTree;
use sha3::{Digest, Keccak256};

pub trait Hashable {
    fn hash(&self) -> Vec<u8>;
}

impl<T: rlp::Encodable> Hashable for BinaryTree<T> {
    /// Digest of the tree's shape and values. A node hashes to
    /// `keccak256(rlp([value, left hash, right hash]))`, an absent child
    /// being represented by an empty string.
    fn hash(&self) -> Vec<u8> {
        if self.nodes.is_empty() {
            return Keccak256::new().result().to_vec();
        }

        // Children are stored after their parent: walking the arena
        // backwards sees every child before the node that owns it.
        let absent = Vec::new();
        let mut hashes: Vec<Vec<u8>> = vec![Vec::new(); self.nodes.len()];
        for index in (0..self.nodes.len()).rev() {
            let node = &self.nodes[index];
            let left = node.left.map_or(&absent, |id| &hashes[id.0]);
            let right = node.right.map_or(&absent, |id| &hashes[id.0]);

            let mut s = rlp::RlpStream::new_list(3);
            s.append(&node.value).append(left).append(right);

            let mut keccak256 = Keccak256::new();
            keccak256.input(s.out());
            hashes[index] = keccak256.result().to_vec();
        }

        hashes.swap_remove(0)
    }
}
