//! Builds a sample tree, prints its three traversals, and reports whether a key is present.
//!
//! ```text
//! $ bst
//! $ bst --search 100 5 3 8
//! $ RUST_LOG=trace bst 1 1 2
//! ```

use std::fmt::Display;

use anyhow::Context;
use clap::Parser;

use bst::Tree;

const SAMPLE: [i64; 13] = [56, 30, 70, 60, 40, 95, 22, 11, 65, 16, 63, 67, 3];

/// Insert keys into a binary search tree and print its traversals.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Keys to insert, in order. Defaults to a fixed sample of 13 keys.
    keys: Vec<i64>,

    /// Key to look up once every key has been inserted.
    #[arg(short, long, default_value_t = 63)]
    search: i64,
}

fn join<'a, T: Display + 'a>(keys: impl Iterator<Item = &'a T>) -> String {
    keys.map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

fn main() -> anyhow::Result<()> {
    env_logger::try_init().context("failed to install logger")?;
    let args = Args::parse();

    let keys = if args.keys.is_empty() {
        SAMPLE.to_vec()
    } else {
        args.keys
    };
    log::debug!("inserting {} keys", keys.len());

    let mut tree = Tree::new();
    for key in keys {
        tree.insert(key);
    }

    println!("Welcome to binary search tree program.");
    println!("Pre Order - {}", join(tree.pre_order()));
    println!("In Order - {}", join(tree.in_order()));
    println!("Post Order - {}", join(tree.post_order()));
    println!("Size - {}", tree.size());

    if tree.search(&args.search) {
        println!("{} found in binary search tree", args.search);
    } else {
        println!("{} not found in binary search tree", args.search);
    }

    Ok(())
}
