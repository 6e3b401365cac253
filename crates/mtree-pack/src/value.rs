//! Values supplied to the packer.

use alloy_primitives::{Address, I256, U256};

/// A value to be packed against a [`SolType`](crate::SolType).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolValue {
    /// An address.
    Address(Address),
    /// A boolean.
    Bool(bool),
    /// A UTF-8 string.
    String(String),
    /// Dynamic bytes.
    Bytes(Vec<u8>),
    /// Fixed-size bytes; the length must match the `bytesN` type.
    FixedBytes(Vec<u8>),
    /// An unsigned integer.
    Uint(U256),
    /// A signed integer.
    Int(I256),
    /// Elements of a dynamic or fixed array.
    Array(Vec<SolValue>),
}

impl SolValue {
    /// Short name of the value kind, for error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Address(_) => "address",
            Self::Bool(_) => "bool",
            Self::String(_) => "string",
            Self::Bytes(_) => "bytes",
            Self::FixedBytes(_) => "fixed bytes",
            Self::Uint(_) => "uint",
            Self::Int(_) => "int",
            Self::Array(_) => "array",
        }
    }

    /// A signed integer from a primitive.
    #[must_use]
    pub fn int(value: i128) -> Self {
        let mut bytes = if value.is_negative() {
            [0xff_u8; 32]
        } else {
            [0_u8; 32]
        };
        if let Some(tail) = bytes.last_chunk_mut::<16>() {
            *tail = value.to_be_bytes();
        }
        Self::Int(I256::from_raw(U256::from_be_bytes(bytes)))
    }

    /// An unsigned integer from a primitive.
    #[must_use]
    pub fn uint(value: u128) -> Self {
        Self::Uint(U256::from(value))
    }

    /// An array from anything convertible into values.
    pub fn array<T: Into<Self>>(items: impl IntoIterator<Item = T>) -> Self {
        Self::Array(items.into_iter().map(Into::into).collect())
    }
}

impl From<Address> for SolValue {
    fn from(value: Address) -> Self {
        Self::Address(value)
    }
}

impl From<bool> for SolValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<String> for SolValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for SolValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<Vec<u8>> for SolValue {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl<const N: usize> From<[u8; N]> for SolValue {
    fn from(value: [u8; N]) -> Self {
        Self::FixedBytes(value.to_vec())
    }
}

impl From<U256> for SolValue {
    fn from(value: U256) -> Self {
        Self::Uint(value)
    }
}

impl From<I256> for SolValue {
    fn from(value: I256) -> Self {
        Self::Int(value)
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),+) => {
        $(impl From<$t> for SolValue {
            fn from(value: $t) -> Self {
                Self::uint(u128::from(value))
            }
        })+
    };
}

macro_rules! impl_from_signed {
    ($($t:ty),+) => {
        $(impl From<$t> for SolValue {
            fn from(value: $t) -> Self {
                Self::int(i128::from(value))
            }
        })+
    };
}

impl_from_unsigned!(u8, u16, u32, u64, u128);
impl_from_signed!(i8, i16, i32, i64, i128);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_int_is_sign_extended() {
        let SolValue::Int(value) = SolValue::from(-1_i32) else {
            panic!("expected an int");
        };
        assert_eq!(value.into_raw(), U256::MAX);
        assert!(value.is_negative());
    }

    #[test]
    fn positive_int_matches_uint_bits() {
        let SolValue::Int(value) = SolValue::from(4242_i64) else {
            panic!("expected an int");
        };
        assert_eq!(value.into_raw(), U256::from(4242_u64));
    }

    #[test]
    fn fixed_arrays_become_fixed_bytes() {
        assert_eq!(
            SolValue::from([1_u8, 2, 3]),
            SolValue::FixedBytes(vec![1, 2, 3])
        );
        assert_eq!(SolValue::from(vec![1_u8]), SolValue::Bytes(vec![1]));
    }
}
