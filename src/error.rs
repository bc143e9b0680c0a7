use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// `next_value` was called after the last value had been produced.
    #[error("in-order sequence is exhausted")]
    ExhaustedSequence,

    // The variants below are only produced when a tree is decoded from
    // an external representation.
    #[error("tree root must be node #0 and have no parent")]
    InvalidRoot,
    #[error("node #{node} links to missing node #{link}")]
    DanglingLink { node: usize, link: usize },
    #[error("node #{child} does not point back to its parent #{parent}")]
    InconsistentParent { parent: usize, child: usize },
    #[error("node #{child} is referenced by more than one child slot")]
    SharedChild { child: usize },
    #[error("node #{node} has a parent that does not precede it")]
    ForwardParent { node: usize },
}
