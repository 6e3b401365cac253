//! Solidity type descriptors.

use std::fmt;
use std::str::FromStr;

use crate::error::PackError;

/// Largest `bytesN` width.
pub const MAX_FIXED_BYTES: usize = 32;
/// Largest integer width in bits.
pub const MAX_INT_BITS: usize = 256;

/// A Solidity type understood by the packer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolType {
    /// `address`, 20 bytes.
    Address,
    /// `bool`.
    Bool,
    /// `string`, UTF-8.
    String,
    /// `bytes`, dynamic.
    Bytes,
    /// `bytesN` with N in `1..=32`.
    FixedBytes(usize),
    /// `uintN` with N a multiple of 8 in `8..=256`.
    Uint(usize),
    /// `intN` with N a multiple of 8 in `8..=256`.
    Int(usize),
    /// `T[]`.
    Array(Box<SolType>),
    /// `T[K]`.
    FixedArray(Box<SolType>, usize),
}

impl SolType {
    /// Byte width of an integer type, `None` for other types.
    #[must_use]
    pub const fn int_width(&self) -> Option<usize> {
        match self {
            Self::Uint(bits) | Self::Int(bits) => Some(bits.div_ceil(8)),
            Self::Address
            | Self::Bool
            | Self::String
            | Self::Bytes
            | Self::FixedBytes(_)
            | Self::Array(_)
            | Self::FixedArray(..) => None,
        }
    }
}

fn parse_bits(digits: &str, original: &str) -> Result<usize, PackError> {
    if digits.is_empty() {
        return Ok(MAX_INT_BITS);
    }
    let bits: usize = digits
        .parse()
        .map_err(|_| PackError::UnsupportedType(original.to_owned()))?;
    if bits == 0 || bits > MAX_INT_BITS || !bits.is_multiple_of(8) {
        return Err(PackError::UnsupportedType(original.to_owned()));
    }
    Ok(bits)
}

impl FromStr for SolType {
    type Err = PackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let unsupported = || PackError::UnsupportedType(s.to_owned());

        if let Some((element, dims)) = s.strip_suffix(']').and_then(|rest| rest.rsplit_once('[')) {
            let element = Box::new(element.parse::<Self>()?);
            if dims.is_empty() {
                return Ok(Self::Array(element));
            }
            let len = dims.parse().map_err(|_| unsupported())?;
            return Ok(Self::FixedArray(element, len));
        }

        match s {
            "address" => return Ok(Self::Address),
            "bool" => return Ok(Self::Bool),
            "string" => return Ok(Self::String),
            "bytes" => return Ok(Self::Bytes),
            _ => {}
        }

        if let Some(digits) = s.strip_prefix("bytes") {
            let len: usize = digits.parse().map_err(|_| unsupported())?;
            if len == 0 || len > MAX_FIXED_BYTES {
                return Err(unsupported());
            }
            return Ok(Self::FixedBytes(len));
        }
        if let Some(digits) = s.strip_prefix("uint") {
            return parse_bits(digits, s).map(Self::Uint);
        }
        if let Some(digits) = s.strip_prefix("int") {
            return parse_bits(digits, s).map(Self::Int);
        }
        Err(unsupported())
    }
}

impl fmt::Display for SolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Address => f.write_str("address"),
            Self::Bool => f.write_str("bool"),
            Self::String => f.write_str("string"),
            Self::Bytes => f.write_str("bytes"),
            Self::FixedBytes(len) => write!(f, "bytes{len}"),
            Self::Uint(bits) => write!(f, "uint{bits}"),
            Self::Int(bits) => write!(f, "int{bits}"),
            Self::Array(element) => write!(f, "{element}[]"),
            Self::FixedArray(element, len) => write!(f, "{element}[{len}]"),
        }
    }
}
