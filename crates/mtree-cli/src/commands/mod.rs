//! Command implementations.

mod leaves;

use std::io::Write as _;
use std::path::{Path, PathBuf};

use eyre::{Context as _, Result, ensure};
use mtree_core::{
    HashAlgorithm, InclusionProof, Keccak256, MerkleError, MerkleHasher, MerkleOptions,
    MerkleTree, Node, RawBytes, Sha256, inclusion_proof_schema,
};
use tracing::{info, warn};

use self::leaves::load_leaves;

/// Which leaf a proof is requested for.
#[derive(Debug, Clone)]
pub enum LeafSelector {
    /// The first leaf equal to this value.
    Value(Node),
    /// The leaf at this position in tree order.
    Index(usize),
}

fn build<H: MerkleHasher>(
    leaves: &[Vec<u8>],
    options: MerkleOptions,
) -> Result<MerkleTree<RawBytes, H>> {
    MerkleTree::with_options(leaves, RawBytes, options).context("Failed to build Merkle tree")
}

fn write_stdout(text: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{text}").context("Failed to write to stdout")
}

fn root_of<H: MerkleHasher>(leaves: &[Vec<u8>], options: MerkleOptions) -> Result<Node> {
    let tree = build::<H>(leaves, options)?;
    info!(
        leaves = tree.leaf_count(),
        depth = tree.depth(),
        "Tree built"
    );
    Ok(tree.root().clone())
}

/// Print the root of the leaves in `leaves_file`.
pub fn root(leaves_file: &Path, algorithm: HashAlgorithm, options: MerkleOptions) -> Result<()> {
    info!(file = ?leaves_file, %algorithm, "Loading leaves...");
    let leaves = load_leaves(leaves_file)?;
    let root = match algorithm {
        HashAlgorithm::Keccak256 => root_of::<Keccak256>(&leaves, options)?,
        HashAlgorithm::Sha256 => root_of::<Sha256>(&leaves, options)?,
    };
    write_stdout(&root.to_string())
}

fn proof_of<H: MerkleHasher>(
    leaves: &[Vec<u8>],
    options: MerkleOptions,
    selector: &LeafSelector,
) -> Result<InclusionProof> {
    let tree = build::<H>(leaves, options)?;
    let index = match selector {
        LeafSelector::Index(index) => *index,
        LeafSelector::Value(leaf) => {
            let occurrences = tree.leaf_indices(leaf.as_bytes())?;
            if occurrences.len() > 1 {
                warn!(
                    leaf = %leaf,
                    occurrences = occurrences.len(),
                    "Leaf appears more than once, proving the first occurrence"
                );
            }
            *occurrences
                .first()
                .ok_or_else(|| MerkleError::LeafNotFound(leaf.to_string()))?
        }
    };
    Ok(tree.inclusion_proof(index)?)
}

/// Write an inclusion proof document for one leaf.
pub fn prove(
    leaves_file: &Path,
    algorithm: HashAlgorithm,
    options: MerkleOptions,
    selector: &LeafSelector,
    out: Option<PathBuf>,
) -> Result<()> {
    info!(file = ?leaves_file, %algorithm, "Loading leaves...");
    let leaves = load_leaves(leaves_file)?;
    let document = match algorithm {
        HashAlgorithm::Keccak256 => proof_of::<Keccak256>(&leaves, options, selector)?,
        HashAlgorithm::Sha256 => proof_of::<Sha256>(&leaves, options, selector)?,
    };
    let json = serde_json::to_string_pretty(&document).context("Failed to serialize proof")?;

    match out {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("Failed to write proof to {}", path.display()))?;
            info!(file = ?path, steps = document.proof.len(), "Proof written");
            Ok(())
        }
        None => write_stdout(&json),
    }
}

/// Check an inclusion proof document, optionally against a published root.
pub fn verify(proof_file: &Path, expected_root: Option<&Node>) -> Result<()> {
    info!(file = ?proof_file, "Loading proof...");
    let text = std::fs::read_to_string(proof_file)
        .with_context(|| format!("Failed to read proof file {}", proof_file.display()))?;
    let document: InclusionProof =
        serde_json::from_str(&text).context("Failed to parse proof JSON")?;

    if let Some(expected) = expected_root {
        ensure!(
            *expected == document.root,
            "Proof root {} does not match published root {expected}",
            document.root
        );
    }

    let computed = document.computed_root();
    ensure!(
        computed == document.root,
        "Proof does not reproduce root {} (computed {computed})",
        document.root
    );
    info!(root = %document.root, "Proof is valid");
    write_stdout("valid")
}

/// Print the JSON schema of proof documents.
pub fn schema() -> Result<()> {
    let json = serde_json::to_string_pretty(&inclusion_proof_schema())
        .context("Failed to serialize schema")?;
    write_stdout(&json)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_leaves() -> Vec<Vec<u8>> {
        vec![vec![0x01; 20], vec![0x02; 20], vec![0x03; 20]]
    }

    #[test]
    fn missing_leaf_reports_library_error() {
        let absent = Node::from([0x09_u8; 20]);
        let selector = LeafSelector::Value(absent.clone());
        let err = proof_of::<Keccak256>(&sample_leaves(), MerkleOptions::default(), &selector)
            .expect_err("leaf is absent");

        assert!(matches!(
            err.downcast_ref::<MerkleError>(),
            Some(MerkleError::LeafNotFound(leaf)) if *leaf == absent.to_string()
        ));
    }

    #[test]
    fn value_selector_proves_first_occurrence() {
        let mut leaves = sample_leaves();
        leaves.push(vec![0x02; 20]);
        let selector = LeafSelector::Value(Node::from([0x02_u8; 20]));
        let proof = proof_of::<Keccak256>(&leaves, MerkleOptions::default(), &selector)
            .expect("leaf is present");

        assert_eq!(proof.leaf_index, Some(1));
        assert!(proof.verify());
    }
}
