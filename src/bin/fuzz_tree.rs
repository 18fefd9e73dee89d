//! AFL fuzz harness for the red-black tree
//!
//! Decodes the input into a sequence of tree operations, replays them against
//! both the tree and a `BTreeSet` model, and checks after every step that:
//! 1. the tree still satisfies every red-black invariant
//! 2. the tree and the model agree on results and contents

use std::collections::BTreeSet;

use afl::fuzz;
use redblack::{RedBlackTree, TreeError};

/// Operation types the fuzzer can generate
#[derive(Debug, Clone, Copy)]
enum FuzzOp {
    Add(u8),
    Remove(u8),
    Contains(u8),
    /// Rare, so that trees get a chance to grow
    Clear,
}

impl FuzzOp {
    fn from_bytes(bytes: &[u8]) -> Option<(FuzzOp, &[u8])> {
        if bytes.is_empty() {
            return None;
        }

        let op_type = bytes[0] % 16;
        let rest = &bytes[1..];

        match op_type {
            15 => Some((FuzzOp::Clear, rest)),
            _ if rest.is_empty() => None,
            0..=7 => Some((FuzzOp::Add(rest[0]), &rest[1..])),
            8..=12 => Some((FuzzOp::Remove(rest[0]), &rest[1..])),
            _ => Some((FuzzOp::Contains(rest[0]), &rest[1..])),
        }
    }
}

fn main() {
    fuzz!(|data: &[u8]| {
        let mut tree = RedBlackTree::new();
        let mut model = BTreeSet::new();
        let mut remaining = data;

        while let Some((op, rest)) = FuzzOp::from_bytes(remaining) {
            remaining = rest;

            match op {
                FuzzOp::Add(v) => {
                    let expected = if model.insert(v) { Ok(()) } else { Err(TreeError::DuplicateKey) };
                    assert_eq!(tree.add(v), expected, "add {}", v);
                }
                FuzzOp::Remove(v) => {
                    let expected = if model.remove(&v) { Ok(v) } else { Err(TreeError::KeyNotFound) };
                    assert_eq!(tree.remove(&v), expected, "remove {}", v);
                }
                FuzzOp::Contains(v) => {
                    assert_eq!(tree.contains(&v), model.contains(&v), "contains {}", v);
                }
                FuzzOp::Clear => {
                    tree.clear();
                    model.clear();
                }
            }

            // CRITICAL INVARIANT: the tree must stay a valid red-black tree
            if let Err(violation) = tree.validate() {
                panic!("{} after {:?}", violation, op);
            }
            assert_eq!(tree.len(), model.len(), "length mismatch after {:?}", op);
        }

        let contents: Vec<u8> = tree.iter().copied().collect();
        let expected: Vec<u8> = model.iter().copied().collect();
        assert_eq!(contents, expected, "final contents differ");
        assert_eq!(tree.current_least().ok(), model.first());
        assert_eq!(tree.current_greatest().ok(), model.last());
    });
}
