#![no_main]
use libfuzzer_sys::fuzz_target;
use inorder_rs::{BinaryTree, Tree};

fuzz_target!(|data: &[u8]| {
    // Whatever decodes must be a tree the iterator can walk to the end.
    if let Ok(tree) = rlp::decode::<BinaryTree<u8>>(data) {
        assert_eq!(tree.traverse().count(), tree.len());
    }
});
