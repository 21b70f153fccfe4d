//! txmerkle CLI - build a merkle tree over transaction data and look values up.

use std::io::{self, BufRead};

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use txmerkle::{BuildConfig, MerkleTree};

/// Always-included leaves enabled by `--with-source-defaults`.
const SOURCE_DEFAULT_LEAVES: [&str; 2] = ["Transaction1", "Transaction2"];

#[derive(Parser)]
#[command(name = "txmerkle")]
#[command(about = "Build a merkle tree over transaction data and search it")]
#[command(version)]
struct Cli {
    /// Transaction data, one leaf per argument
    data: Vec<String>,

    /// Also read one leaf per line from standard input
    #[arg(long)]
    stdin: bool,

    /// Leaf placed ahead of the transaction data (repeatable)
    #[arg(long = "default-leaf", value_name = "DATA")]
    default_leaves: Vec<String>,

    /// Prepend "Transaction1" and "Transaction2" as default leaves
    #[arg(long)]
    with_source_defaults: bool,

    /// Look up a value given as text
    #[arg(long, value_name = "DATA", conflicts_with = "find_hex")]
    find: Option<String>,

    /// Look up a value given as hex (e.g. an interior digest)
    #[arg(long, value_name = "HEX")]
    find_hex: Option<String>,

    /// Minimum pairs in a level before hashing it in parallel
    #[arg(long, default_value_t = txmerkle::SMALL_TREE_BUILD)]
    parallel_threshold: usize,

    /// Print only root and depth instead of the whole tree
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut data: Vec<Vec<u8>> = cli.data.iter().map(|d| d.as_bytes().to_vec()).collect();
    if cli.stdin {
        for line in io::stdin().lock().lines() {
            let line = line.context("failed to read leaf from stdin")?;
            data.push(line.into_bytes());
        }
    }

    let mut default_leaves: Vec<Vec<u8>> = Vec::new();
    if cli.with_source_defaults {
        default_leaves.extend(SOURCE_DEFAULT_LEAVES.iter().map(|d| d.as_bytes().to_vec()));
    }
    default_leaves.extend(cli.default_leaves.iter().map(|d| d.as_bytes().to_vec()));

    let config = BuildConfig::default()
        .with_default_leaves(default_leaves)
        .with_parallel_threshold(cli.parallel_threshold);
    debug!("{} leaves supplied, config {:?}", data.len(), config);

    let tree: MerkleTree = match MerkleTree::new_with_config(data, &config) {
        Ok(tree) => tree,
        Err(e) => {
            println!("Nothing to build: {}", e);
            return Ok(());
        }
    };

    if cli.quiet {
        println!("root: {}", hex::encode(tree.root_value()));
        println!("depth: {}", tree.depth());
    } else {
        println!("Merkle Tree ({} leaves, depth {}):", tree.leafs(), tree.depth());
        print!("{}", tree);
    }

    let target = match (&cli.find, &cli.find_hex) {
        (Some(text), _) => Some((text.clone(), text.as_bytes().to_vec())),
        (None, Some(h)) => {
            let bytes = hex::decode(h).with_context(|| format!("invalid hex value {:?}", h))?;
            Some((h.clone(), bytes))
        }
        (None, None) => None,
    };

    if let Some((label, bytes)) = target {
        match tree.find(&bytes) {
            Some(value) => {
                println!("Transaction {} found in the merkle tree.", label);
                println!("Data: {}", String::from_utf8_lossy(value));
            }
            None => println!("Transaction {} does not exist in the merkle tree.", label),
        }
    }

    Ok(())
}
