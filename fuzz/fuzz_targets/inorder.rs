#![no_main]
use libfuzzer_sys::fuzz_target;
use inorder_rs::{BinaryTree, Error, Tree};

fuzz_target!(|tree: BinaryTree<u8>| {
    let mut iter = tree.traverse();
    let mut count = 0;
    while iter.has_next() {
        iter.next_value().unwrap();
        count += 1;
    }
    assert_eq!(count, tree.len());
    assert_eq!(iter.next_value(), Err(Error::ExhaustedSequence));
});
