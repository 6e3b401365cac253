//! Solidity-style tightly packed encoding.
//!
//! Produces the same bytes as Solidity's `abi.encodePacked` (and ethers'
//! `solidityPack`). Typical use is building the byte representation of a
//! Merkle leaf before hashing it.

mod error;
mod pack;
mod types;
mod value;

pub use error::PackError;
pub use pack::{pack, pack_hex, pack_keccak256, pack_types};
pub use types::{MAX_FIXED_BYTES, MAX_INT_BITS, SolType};
pub use value::SolValue;
