//! Serialized inclusion proof documents.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::hasher::{HashAlgorithm, Keccak256, Sha256};
use crate::node::Node;
use crate::options::MerkleOptions;
use crate::proof::Proof;

/// A proof together with everything needed to check it: the normalized
/// leaf, the published root and the pairing parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct InclusionProof {
    /// Hash primitive used to combine nodes.
    #[serde(default)]
    pub algorithm: HashAlgorithm,
    /// Whether pairs were hashed in sorted order.
    #[serde(default)]
    pub sort_pairs: bool,
    /// Position of the leaf in tree order, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leaf_index: Option<usize>,
    /// The normalized leaf node.
    pub leaf: Node,
    /// The published root.
    pub root: Node,
    /// Sibling path from the leaf to the root.
    pub proof: Proof,
}

impl InclusionProof {
    /// Options implied by the document. Leaf sorting does not affect
    /// verification.
    #[must_use]
    pub const fn options(&self) -> MerkleOptions {
        MerkleOptions::new(false, self.sort_pairs)
    }

    /// Recompute the root from the leaf and proof.
    #[must_use]
    pub fn computed_root(&self) -> Node {
        match self.algorithm {
            HashAlgorithm::Keccak256 => {
                self.proof
                    .compute_root::<Keccak256>(&self.leaf, self.options())
            }
            HashAlgorithm::Sha256 => self.proof.compute_root::<Sha256>(&self.leaf, self.options()),
        }
    }

    /// Whether the proof reproduces the recorded root.
    #[must_use]
    pub fn verify(&self) -> bool {
        self.computed_root() == self.root
    }
}

/// JSON schema of [`InclusionProof`].
#[must_use]
pub fn inclusion_proof_schema() -> schemars::Schema {
    schemars::schema_for!(InclusionProof)
}
