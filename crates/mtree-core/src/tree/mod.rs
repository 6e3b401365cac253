//! The Merkle tree: construction and inclusion proof generation.

mod levels;

use std::marker::PhantomData;

use tracing::debug;

use crate::error::MerkleError;
use crate::hasher::{Keccak256, MerkleHasher};
use crate::leaf::{LeafHashFn, LeafNormalizer, RawBytes};
use crate::node::Node;
use crate::options::MerkleOptions;
use crate::proof::{Proof, ProofStep};
use crate::schema::InclusionProof;

/// An immutable binary Merkle tree stored as an arena of levels.
///
/// Level 0 holds the normalized leaves; every level above holds
/// `ceil(width / 2)` nodes. The last level holds only the root.
pub struct MerkleTree<N = RawBytes, H = Keccak256> {
    levels: Vec<Vec<Node>>,
    root: Node,
    normalizer: N,
    options: MerkleOptions,
    _hasher: PhantomData<fn() -> H>,
}

impl<N, H> std::fmt::Debug for MerkleTree<N, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MerkleTree")
            .field("leaf_count", &self.leaf_count())
            .field("depth", &self.depth())
            .field("root", &self.root().to_string())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl<N, H> MerkleTree<N, H> {
    /// The root node. For a single leaf this is the leaf's own node.
    #[must_use]
    pub const fn root(&self) -> &Node {
        &self.root
    }

    /// All levels, leaves first and root last.
    #[must_use]
    pub const fn levels(&self) -> &[Vec<Node>] {
        self.levels.as_slice()
    }

    /// The normalized leaves in tree order.
    #[must_use]
    pub fn leaves(&self) -> &[Node] {
        self.levels.first().map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of leaves.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.leaves().len()
    }

    /// Number of levels above the leaves.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.levels.len().saturating_sub(1)
    }

    /// The options the tree was built with.
    #[must_use]
    pub const fn options(&self) -> MerkleOptions {
        self.options
    }

    /// The leaf normalizer.
    #[must_use]
    pub const fn normalizer(&self) -> &N {
        &self.normalizer
    }
}

impl MerkleTree {
    /// Build a Keccak-256 tree whose leaves are their own raw bytes.
    ///
    /// # Errors
    /// Returns [`MerkleError::EmptyInput`] if `leaves` is empty.
    pub fn new<T: AsRef<[u8]>>(leaves: &[T]) -> Result<Self, MerkleError> {
        Self::with_options(leaves, RawBytes, MerkleOptions::default())
    }
}

impl<F> MerkleTree<LeafHashFn<F>> {
    /// Build a Keccak-256 tree, normalizing each leaf with `hash_fn`.
    ///
    /// # Errors
    /// Returns [`MerkleError::EmptyInput`] if `leaves` is empty, or
    /// [`MerkleError::Encoding`] if `hash_fn` fails for any leaf.
    pub fn with_hash_fn<T>(leaves: &[T], hash_fn: F) -> Result<Self, MerkleError>
    where
        LeafHashFn<F>: LeafNormalizer<T>,
    {
        Self::with_options(leaves, LeafHashFn(hash_fn), MerkleOptions::default())
    }
}

impl<N, H: MerkleHasher> MerkleTree<N, H> {
    /// Build a tree with an explicit normalizer, hasher and options.
    ///
    /// # Errors
    /// Returns [`MerkleError::EmptyInput`] if `leaves` is empty, or
    /// [`MerkleError::Encoding`] if the normalizer fails for any leaf.
    pub fn with_options<T>(
        leaves: &[T],
        normalizer: N,
        options: MerkleOptions,
    ) -> Result<Self, MerkleError>
    where
        N: LeafNormalizer<T>,
    {
        if leaves.is_empty() {
            return Err(MerkleError::EmptyInput);
        }

        let mut nodes = leaves
            .iter()
            .map(|leaf| normalizer.normalize(leaf))
            .collect::<Result<Vec<_>, _>>()?;
        if options.sort_leaves {
            nodes.sort_unstable();
        }

        let levels = levels::build_levels::<H>(nodes, options);
        let root = levels
            .last()
            .and_then(|top| top.first())
            .cloned()
            .ok_or(MerkleError::EmptyInput)?;
        let tree = Self {
            levels,
            root,
            normalizer,
            options,
            _hasher: PhantomData,
        };
        debug!(
            leaves = tree.leaf_count(),
            depth = tree.depth(),
            algorithm = %H::ALGORITHM,
            root = %tree.root(),
            "Built Merkle tree"
        );
        Ok(tree)
    }

    /// Position of the first leaf equal to `leaf` once normalized.
    ///
    /// # Errors
    /// Returns [`MerkleError::Encoding`] if `leaf` cannot be normalized.
    pub fn leaf_index<T: ?Sized>(&self, leaf: &T) -> Result<Option<usize>, MerkleError>
    where
        N: LeafNormalizer<T>,
    {
        let node = self.normalizer.normalize(leaf)?;
        Ok(self.leaves().iter().position(|candidate| *candidate == node))
    }

    /// Every position holding `leaf`; duplicates yield several indices.
    ///
    /// # Errors
    /// Returns [`MerkleError::Encoding`] if `leaf` cannot be normalized.
    pub fn leaf_indices<T: ?Sized>(&self, leaf: &T) -> Result<Vec<usize>, MerkleError>
    where
        N: LeafNormalizer<T>,
    {
        let node = self.normalizer.normalize(leaf)?;
        Ok(self
            .leaves()
            .iter()
            .enumerate()
            .filter(|(_, candidate)| **candidate == node)
            .map(|(index, _)| index)
            .collect())
    }

    /// Inclusion proof for the first occurrence of `leaf`.
    ///
    /// # Errors
    /// Returns [`MerkleError::LeafNotFound`] if no leaf matches, or
    /// [`MerkleError::Encoding`] if `leaf` cannot be normalized.
    pub fn prove<T: ?Sized>(&self, leaf: &T) -> Result<Proof, MerkleError>
    where
        N: LeafNormalizer<T>,
    {
        let node = self.normalizer.normalize(leaf)?;
        let index = self
            .leaves()
            .iter()
            .position(|candidate| *candidate == node)
            .ok_or_else(|| MerkleError::LeafNotFound(node.to_string()))?;
        self.prove_index(index)
    }

    /// Inclusion proof for the leaf at `index` (in tree order, which is
    /// sorted order when `sort_leaves` is set).
    ///
    /// # Errors
    /// Returns [`MerkleError::IndexOutOfRange`] if `index` is past the last leaf.
    pub fn prove_index(&self, index: usize) -> Result<Proof, MerkleError> {
        let leaf_count = self.leaf_count();
        if index >= leaf_count {
            return Err(MerkleError::IndexOutOfRange { index, leaf_count });
        }

        let mut position = index;
        let mut steps = Vec::with_capacity(self.depth());
        for level in self.levels.iter().take(self.depth()) {
            let sibling = position ^ 1;
            // A missing right sibling means the node was promoted.
            if let Some(node) = level.get(sibling) {
                steps.push(ProofStep::new(node.clone(), sibling < position));
            }
            position /= 2;
        }
        Ok(Proof::new(steps))
    }

    /// Self-contained proof document for the leaf at `index`.
    ///
    /// # Errors
    /// Returns [`MerkleError::IndexOutOfRange`] if `index` is past the last leaf.
    pub fn inclusion_proof(&self, index: usize) -> Result<InclusionProof, MerkleError> {
        let proof = self.prove_index(index)?;
        let leaf = self
            .leaves()
            .get(index)
            .cloned()
            .ok_or(MerkleError::IndexOutOfRange {
                index,
                leaf_count: self.leaf_count(),
            })?;
        Ok(InclusionProof {
            algorithm: H::ALGORITHM,
            sort_pairs: self.options.sort_pairs,
            leaf_index: Some(index),
            leaf,
            root: self.root.clone(),
            proof,
        })
    }

    /// Verify `proof` for `leaf` against `root` with this tree's normalizer
    /// and options. The tree's own contents are not consulted.
    ///
    /// # Errors
    /// Returns [`MerkleError::Encoding`] if `leaf` cannot be normalized.
    pub fn verify<T: ?Sized>(
        &self,
        proof: &Proof,
        leaf: &T,
        root: &Node,
    ) -> Result<bool, MerkleError>
    where
        N: LeafNormalizer<T>,
    {
        crate::proof::verify::<T, N, H>(proof, &self.normalizer, leaf, root, self.options)
    }
}
