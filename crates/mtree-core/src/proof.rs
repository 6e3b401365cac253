//! Inclusion proofs and root recomputation.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::MerkleError;
use crate::hasher::MerkleHasher;
use crate::leaf::LeafNormalizer;
use crate::node::Node;
use crate::options::MerkleOptions;

/// One sibling on the path from a leaf to the root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ProofStep {
    /// The sibling node at this level.
    pub sibling: Node,
    /// `true` when the sibling is hashed before the running node.
    pub is_left: bool,
}

impl ProofStep {
    /// Create a proof step.
    #[must_use]
    pub const fn new(sibling: Node, is_left: bool) -> Self {
        Self { sibling, is_left }
    }
}

/// Sibling path from a leaf up to, but not including, the root.
///
/// Levels where the leaf's ancestor was promoted unpaired contribute no step,
/// so the length can be shorter than the tree depth.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Proof {
    steps: Vec<ProofStep>,
}

impl Proof {
    /// Create a proof from its steps, leaf level first.
    #[must_use]
    pub const fn new(steps: Vec<ProofStep>) -> Self {
        Self { steps }
    }

    /// The steps, leaf level first.
    #[must_use]
    pub fn steps(&self) -> &[ProofStep] {
        &self.steps
    }

    /// Iterate over the steps.
    pub fn iter(&self) -> std::slice::Iter<'_, ProofStep> {
        self.steps.iter()
    }

    /// Number of steps.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the proof has no steps (single-leaf tree).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Consume the proof, returning its steps.
    #[must_use]
    pub fn into_steps(self) -> Vec<ProofStep> {
        self.steps
    }

    /// Replay the proof from `leaf` and return the implied root.
    #[must_use]
    pub fn compute_root<H: MerkleHasher>(&self, leaf: &Node, options: MerkleOptions) -> Node {
        self.steps.iter().fold(leaf.clone(), |running, step| {
            if step.is_left {
                options.combine::<H>(&step.sibling, &running)
            } else {
                options.combine::<H>(&running, &step.sibling)
            }
        })
    }

    /// Whether replaying the proof from `leaf` yields exactly `root`.
    #[must_use]
    pub fn verify<H: MerkleHasher>(
        &self,
        leaf: &Node,
        root: &Node,
        options: MerkleOptions,
    ) -> bool {
        self.compute_root::<H>(leaf, options) == *root
    }
}

impl<'a> IntoIterator for &'a Proof {
    type Item = &'a ProofStep;
    type IntoIter = std::slice::Iter<'a, ProofStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl From<Vec<ProofStep>> for Proof {
    fn from(steps: Vec<ProofStep>) -> Self {
        Self { steps }
    }
}

/// Verify `proof` for a caller value without access to the tree.
///
/// A proof that does not reproduce `root` is `Ok(false)`; only a failing
/// normalizer is an error.
///
/// # Errors
/// Returns [`MerkleError::Encoding`] if `leaf` cannot be normalized.
pub fn verify<T, N, H>(
    proof: &Proof,
    normalizer: &N,
    leaf: &T,
    root: &Node,
    options: MerkleOptions,
) -> Result<bool, MerkleError>
where
    T: ?Sized,
    N: LeafNormalizer<T>,
    H: MerkleHasher,
{
    let node = normalizer.normalize(leaf)?;
    Ok(proof.verify::<H>(&node, root, options))
}
