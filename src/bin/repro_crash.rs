//! Reproduce AFL crashes without AFL instrumentation
//!
//! Usage: cargo run --bin repro_crash -- [-v] <crash_file>
//!
//! `-v` turns on debug logging, `-vv` also traces every rotation and fixup case.

use std::collections::BTreeSet;
use std::fs;
use std::process::ExitCode;

use log::{error, info, warn};
use redblack::{RedBlackTree, TreeError};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

#[derive(Debug, Clone, Copy)]
enum FuzzOp {
    Add(u8),
    Remove(u8),
    Contains(u8),
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

fn initialize_logging(verbosity: usize) {
    let level = match verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let init = TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto);
    if init.is_err() {
        eprintln!("logger already initialized");
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    let verbosity: usize = args
        .iter()
        .skip(1)
        .filter(|a| a.starts_with("-v"))
        .map(|a| a.len() - 1)
        .sum();
    let path = match args.iter().skip(1).find(|a| !a.starts_with('-')) {
        Some(path) => path,
        None => {
            eprintln!("Usage: {} [-v] <crash_file>", args[0]);
            return ExitCode::FAILURE;
        }
    };

    initialize_logging(verbosity);

    let data = match fs::read(path) {
        Ok(data) => data,
        Err(err) => {
            error!("cannot read {}: {}", path, err);
            return ExitCode::FAILURE;
        }
    };
    info!("Input: {} bytes", data.len());
    info!("Hex: {}", data.iter().map(|b| format!("{:02x}", b)).collect::<Vec<_>>().join(" "));

    let mut tree = RedBlackTree::new();
    let mut model = BTreeSet::new();
    let mut remaining = data.as_slice();
    let mut op_num = 0;
    let mut failures = 0;

    while let Some((op, rest)) = FuzzOp::from_bytes(remaining) {
        remaining = rest;
        op_num += 1;
        info!("Op {}: {:?}", op_num, op);

        let agreed = match op {
            FuzzOp::Add(v) => {
                let expected = if model.insert(v) { Ok(()) } else { Err(TreeError::DuplicateKey) };
                tree.add(v) == expected
            }
            FuzzOp::Remove(v) => {
                let expected = if model.remove(&v) { Ok(v) } else { Err(TreeError::KeyNotFound) };
                tree.remove(&v) == expected
            }
            FuzzOp::Contains(v) => tree.contains(&v) == model.contains(&v),
            FuzzOp::Clear => {
                tree.clear();
                model.clear();
                true
            }
        };

        if !agreed {
            warn!("  tree and model disagree");
            failures += 1;
        }
        if let Err(violation) = tree.validate() {
            error!("  invariant broken: {}", violation);
            error!("  tree: {:?}", tree);
            return ExitCode::FAILURE;
        }
        info!("  len={} height={} {:?}", tree.len(), tree.height(), tree);
    }

    let contents: Vec<u8> = tree.iter().copied().collect();
    let expected: Vec<u8> = model.iter().copied().collect();
    if contents != expected {
        error!("final contents differ: tree {:?}, model {:?}", contents, expected);
        return ExitCode::FAILURE;
    }
    if failures > 0 {
        error!("{} operations disagreed with the model", failures);
        return ExitCode::FAILURE;
    }

    info!("All checks passed!");
    return ExitCode::SUCCESS;
}
