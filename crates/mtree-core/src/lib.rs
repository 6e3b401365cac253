//! Verifiable binary Merkle trees.
//!
//! A [`MerkleTree`] is built once from a finite leaf set and is read-only
//! afterwards. It produces a [`Proof`] for any leaf; anyone holding the leaf,
//! the proof and the published root can check membership with
//! [`proof::verify`] without the tree.
//!
//! Leaves are normalized to level-0 [`Node`]s either by taking their raw bytes
//! ([`RawBytes`]) or through a caller function ([`LeafHashFn`]). Adjacent
//! nodes are hashed pairwise level by level; an unpaired last node is promoted
//! unchanged.

mod error;
mod hasher;
mod leaf;
mod node;
mod options;
pub mod proof;
mod schema;
mod tree;

pub use error::{LeafEncodingError, MerkleError};
pub use hasher::{DIGEST_SIZE, HashAlgorithm, Keccak256, MerkleHasher, Sha256};
pub use leaf::{LeafHashFn, LeafNormalizer, RawBytes};
pub use node::Node;
pub use options::MerkleOptions;
pub use proof::{Proof, ProofStep};
pub use schema::{InclusionProof, inclusion_proof_schema};
pub use tree::MerkleTree;
