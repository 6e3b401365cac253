//! Shared constants for CLI.

// -------------------------
// Environment variables
// -------------------------

// Tree
pub const MTREE_LEAVES_FILE: &str = "MTREE_LEAVES_FILE";
pub const MTREE_ALGORITHM: &str = "MTREE_ALGORITHM";
pub const MTREE_SORT_LEAVES: &str = "MTREE_SORT_LEAVES";
pub const MTREE_SORT_PAIRS: &str = "MTREE_SORT_PAIRS";

// Proofs
pub const MTREE_PROOF_FILE: &str = "MTREE_PROOF_FILE";
pub const MTREE_PROOF_OUT: &str = "MTREE_PROOF_OUT";
pub const MTREE_ROOT: &str = "MTREE_ROOT";

// -------------------------
// Defaults
// -------------------------

pub const DEFAULT_ALGORITHM: &str = "keccak256";
