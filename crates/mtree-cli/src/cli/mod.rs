//! Command-line interface for the `mtree` CLI application.

pub mod constants;

use std::path::PathBuf;

use clap::Parser;
use eyre::{Result, eyre};
use mtree_core::{HashAlgorithm, MerkleOptions, Node};

use crate::commands::LeafSelector;

use self::constants::{
    DEFAULT_ALGORITHM, MTREE_ALGORITHM, MTREE_LEAVES_FILE, MTREE_PROOF_FILE, MTREE_PROOF_OUT,
    MTREE_ROOT, MTREE_SORT_LEAVES, MTREE_SORT_PAIRS,
};

/// Command-line interface definition.
#[derive(Debug, Parser)]
#[command(name = "mtree")]
#[command(about = "Build Merkle roots and inclusion proofs")]
pub struct Cli {
    /// CLI top-level command.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands.
#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Print the root of a leaf set.
    Root {
        #[command(flatten)]
        tree: TreeArgs,
    },
    /// Write an inclusion proof document for one leaf.
    Prove {
        #[command(flatten)]
        tree: TreeArgs,
        #[command(flatten)]
        target: LeafTarget,
        /// Output file for the proof document. Defaults to stdout.
        #[arg(long, env = MTREE_PROOF_OUT)]
        out: Option<PathBuf>,
    },
    /// Check an inclusion proof document.
    Verify {
        /// Proof document to check.
        #[arg(long, env = MTREE_PROOF_FILE)]
        proof: PathBuf,
        /// Published root the proof must match, in hex.
        #[arg(long, env = MTREE_ROOT, value_parser = parse_node)]
        root: Option<Node>,
    },
    /// Print the JSON schema of proof documents.
    Schema,
}

/// Leaf source and tree parameters.
#[derive(Debug, clap::Args)]
pub struct TreeArgs {
    /// Leaf file: a JSON array of hex strings or one hex string per line.
    #[arg(long, env = MTREE_LEAVES_FILE)]
    pub leaves: PathBuf,
    /// Hash primitive (keccak256 or sha256).
    #[arg(
        long,
        env = MTREE_ALGORITHM,
        default_value = DEFAULT_ALGORITHM,
        value_parser = parse_algorithm
    )]
    pub algorithm: HashAlgorithm,
    /// Sort leaves by their bytes before building.
    #[arg(long, env = MTREE_SORT_LEAVES, default_value_t = false)]
    pub sort_leaves: bool,
    /// Hash each pair in sorted order.
    #[arg(long, env = MTREE_SORT_PAIRS, default_value_t = false)]
    pub sort_pairs: bool,
}

impl TreeArgs {
    /// Options the tree is built with.
    pub const fn options(&self) -> MerkleOptions {
        MerkleOptions::new(self.sort_leaves, self.sort_pairs)
    }
}

/// Which leaf to prove.
#[derive(Debug, clap::Args)]
#[group(required = true, multiple = false)]
pub struct LeafTarget {
    /// Leaf value in hex; the first matching leaf is proven.
    #[arg(long, value_parser = parse_node)]
    pub leaf: Option<Node>,
    /// Leaf position in tree order.
    #[arg(long)]
    pub index: Option<usize>,
}

impl LeafTarget {
    /// Resolve the requested leaf.
    pub fn selector(self) -> Result<LeafSelector> {
        match (self.leaf, self.index) {
            (Some(leaf), _) => Ok(LeafSelector::Value(leaf)),
            (None, Some(index)) => Ok(LeafSelector::Index(index)),
            (None, None) => Err(eyre!("Either --leaf or --index is required")),
        }
    }
}

pub fn parse_algorithm(s: &str) -> Result<HashAlgorithm> {
    s.parse().map_err(|e: String| eyre!(e))
}

pub fn parse_node(s: &str) -> Result<Node> {
    Node::from_hex(s).map_err(|e| eyre!("Invalid hex value {s}: {e}"))
}
