// Quick benchmark for getting summary results without criterion

use std::collections::BTreeSet;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use redblack::RedBlackTree;

fn time_ops<F: FnMut() -> usize>(mut f: F, iterations: usize) -> f64 {
    // Warmup
    for _ in 0..3 {
        let _ = f();
    }

    let start = Instant::now();
    for _ in 0..iterations {
        let _ = f();
    }
    let elapsed = start.elapsed();
    return elapsed.as_nanos() as f64 / iterations as f64;
}

/// Random adds and removes over a key space twice the target size.
fn churn_tree(ops: usize, seed: u64) -> usize {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut tree = RedBlackTree::new();
    for _ in 0..ops {
        let key: u32 = rng.gen_range(0..(ops as u32 * 2));
        if rng.gen_bool(0.6) {
            let _ = tree.add(key);
        } else {
            let _ = tree.remove(&key);
        }
    }
    return tree.len();
}

fn churn_btree(ops: usize, seed: u64) -> usize {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut set = BTreeSet::new();
    for _ in 0..ops {
        let key: u32 = rng.gen_range(0..(ops as u32 * 2));
        if rng.gen_bool(0.6) {
            set.insert(key);
        } else {
            set.remove(&key);
        }
    }
    return set.len();
}

fn main() {
    println!("{:<12} {:>10} {:>14} {:>14} {:>8}", "workload", "ops", "RedBlackTree", "BTreeSet", "ratio");

    for ops in [1_000usize, 10_000, 100_000] {
        let iterations = (1_000_000 / ops).max(3);

        let sequential_tree = time_ops(|| {
            let mut tree = RedBlackTree::new();
            for k in 0..ops {
                let _ = tree.add(k);
            }
            tree.len()
        }, iterations);
        let sequential_btree = time_ops(|| (0..ops).collect::<BTreeSet<_>>().len(), iterations);
        println!(
            "{:<12} {:>10} {:>12.0}ns {:>12.0}ns {:>8.2}",
            "sequential", ops, sequential_tree, sequential_btree, sequential_tree / sequential_btree
        );

        let churn_t = time_ops(|| churn_tree(ops, 42), iterations);
        let churn_b = time_ops(|| churn_btree(ops, 42), iterations);
        println!(
            "{:<12} {:>10} {:>12.0}ns {:>12.0}ns {:>8.2}",
            "churn", ops, churn_t, churn_b, churn_t / churn_b
        );

        // both structures must end up with the same contents
        assert_eq!(churn_tree(ops, 7), churn_btree(ops, 7));
    }
}
