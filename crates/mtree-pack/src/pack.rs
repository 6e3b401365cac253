//! Tightly packed encoding, matching Solidity's `abi.encodePacked`.

use alloy_primitives::{I256, U256, keccak256};

use crate::error::PackError;
use crate::types::SolType;
use crate::value::SolValue;

/// Size of an ABI word; array elements are widened to it.
const WORD: usize = 32;

/// Pack typed values back to back.
///
/// # Errors
/// Returns an error if a value does not match its type or does not fit.
pub fn pack(args: &[(SolType, SolValue)]) -> Result<Vec<u8>, PackError> {
    let mut out = Vec::new();
    for (ty, value) in args {
        encode(ty, value, false, &mut out)?;
    }
    Ok(out)
}

/// Pack values against type strings such as `"uint256"` or `"address[]"`.
///
/// # Errors
/// Returns an error if a type string is unsupported, the counts differ, or a
/// value does not match its type.
pub fn pack_types(types: &[&str], values: &[SolValue]) -> Result<Vec<u8>, PackError> {
    if types.len() != values.len() {
        return Err(PackError::ArgumentCount {
            types: types.len(),
            values: values.len(),
        });
    }
    let mut out = Vec::new();
    for (ty, value) in types.iter().zip(values) {
        encode(&ty.parse()?, value, false, &mut out)?;
    }
    Ok(out)
}

/// [`pack_types`] as `0x`-prefixed lower-case hex.
///
/// # Errors
/// See [`pack_types`].
pub fn pack_hex(types: &[&str], values: &[SolValue]) -> Result<String, PackError> {
    pack_types(types, values).map(|bytes| format!("0x{}", hex::encode(bytes)))
}

/// Keccak-256 of [`pack_types`], Solidity's `keccak256(abi.encodePacked(..))`.
///
/// # Errors
/// See [`pack_types`].
pub fn pack_keccak256(types: &[&str], values: &[SolValue]) -> Result<[u8; 32], PackError> {
    pack_types(types, values).map(|bytes| keccak256(bytes).0)
}

fn mismatch(ty: &SolType, value: &SolValue) -> PackError {
    PackError::TypeMismatch {
        ty: ty.to_string(),
        value: value.kind(),
    }
}

fn left_pad(bytes: &[u8], width: usize, fill: u8, out: &mut Vec<u8>) {
    out.extend(std::iter::repeat_n(fill, width.saturating_sub(bytes.len())));
    out.extend_from_slice(bytes);
}

/// Split a word into the bytes above and within the low `width` bytes.
fn split_word<'a>(
    word: &'a [u8; WORD],
    width: usize,
    ty: &SolType,
) -> Result<(&'a [u8], &'a [u8]), PackError> {
    WORD.checked_sub(width)
        .and_then(|at| word.split_at_checked(at))
        .ok_or_else(|| PackError::UnsupportedType(ty.to_string()))
}

fn encode_uint(
    ty: &SolType,
    bits: usize,
    value: U256,
    in_array: bool,
    out: &mut Vec<u8>,
) -> Result<(), PackError> {
    if value.bit_len() > bits {
        return Err(PackError::Overflow {
            ty: ty.to_string(),
            value: value.to_string(),
        });
    }
    let width = if in_array { WORD } else { bits / 8 };
    let word = value.to_be_bytes::<WORD>();
    let (_, tail) = split_word(&word, width, ty)?;
    out.extend_from_slice(tail);
    Ok(())
}

fn encode_int(
    ty: &SolType,
    bits: usize,
    value: I256,
    in_array: bool,
    out: &mut Vec<u8>,
) -> Result<(), PackError> {
    let negative = value.is_negative();
    let sign = if negative { 0xff } else { 0x00 };
    let word = value.into_raw().to_be_bytes::<WORD>();
    let (head, tail) = split_word(&word, bits / 8, ty)?;
    let fits = head.iter().all(|byte| *byte == sign)
        && tail.first().is_some_and(|top| (top & 0x80 != 0) == negative);
    if !fits {
        return Err(PackError::Overflow {
            ty: ty.to_string(),
            value: value.to_string(),
        });
    }
    // Array elements keep the full sign-extended word.
    out.extend_from_slice(if in_array { &word } else { tail });
    Ok(())
}

fn encode_elements(
    ty: &SolType,
    element: &SolType,
    items: &[SolValue],
    expected: Option<usize>,
    out: &mut Vec<u8>,
) -> Result<(), PackError> {
    if let Some(expected) = expected
        && items.len() != expected
    {
        return Err(PackError::LengthMismatch {
            ty: ty.to_string(),
            expected,
            actual: items.len(),
        });
    }
    for item in items {
        encode(element, item, true, out)?;
    }
    Ok(())
}

fn encode(
    ty: &SolType,
    value: &SolValue,
    in_array: bool,
    out: &mut Vec<u8>,
) -> Result<(), PackError> {
    match (ty, value) {
        (SolType::Address, SolValue::Address(address)) => {
            let width = if in_array { WORD } else { address.len() };
            left_pad(address.as_slice(), width, 0, out);
        }
        (SolType::Bool, SolValue::Bool(flag)) => {
            let width = if in_array { WORD } else { 1 };
            left_pad(&[u8::from(*flag)], width, 0, out);
        }
        (SolType::String, SolValue::String(text)) => out.extend_from_slice(text.as_bytes()),
        (SolType::Bytes, SolValue::Bytes(bytes) | SolValue::FixedBytes(bytes)) => {
            out.extend_from_slice(bytes);
        }
        (SolType::FixedBytes(len), SolValue::FixedBytes(bytes) | SolValue::Bytes(bytes)) => {
            if bytes.len() != *len {
                return Err(PackError::LengthMismatch {
                    ty: ty.to_string(),
                    expected: *len,
                    actual: bytes.len(),
                });
            }
            out.extend_from_slice(bytes);
            if in_array {
                out.extend(std::iter::repeat_n(0, WORD.saturating_sub(*len)));
            }
        }
        (SolType::Uint(bits), SolValue::Uint(number)) => {
            encode_uint(ty, *bits, *number, in_array, out)?;
        }
        (SolType::Int(bits), SolValue::Int(number)) => {
            encode_int(ty, *bits, *number, in_array, out)?;
        }
        (SolType::Array(element), SolValue::Array(items)) => {
            encode_elements(ty, element, items, None, out)?;
        }
        (SolType::FixedArray(element, len), SolValue::Array(items)) => {
            encode_elements(ty, element, items, Some(*len), out)?;
        }
        (
            SolType::Address
            | SolType::Bool
            | SolType::String
            | SolType::Bytes
            | SolType::FixedBytes(_)
            | SolType::Uint(_)
            | SolType::Int(_)
            | SolType::Array(_)
            | SolType::FixedArray(..),
            _,
        ) => return Err(mismatch(ty, value)),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use alloy_primitives::Address;

    use super::*;

    #[test]
    fn count_mismatch_is_rejected() {
        assert_eq!(
            pack_types(&["uint8", "bool"], &[SolValue::from(1_u8)]),
            Err(PackError::ArgumentCount {
                types: 2,
                values: 1
            })
        );
    }

    #[test]
    fn type_mismatch_is_rejected() {
        assert_eq!(
            pack_types(&["address"], &[SolValue::from(true)]),
            Err(PackError::TypeMismatch {
                ty: "address".to_owned(),
                value: "bool"
            })
        );
    }

    #[test]
    fn uint_overflow_is_rejected() {
        assert!(matches!(
            pack_types(&["uint8"], &[SolValue::from(256_u16)]),
            Err(PackError::Overflow { .. })
        ));
        assert_eq!(pack_types(&["uint8"], &[SolValue::from(255_u16)]), Ok(vec![0xff]));
    }

    #[test]
    fn int_range_is_checked() {
        assert_eq!(pack_types(&["int8"], &[SolValue::from(-128_i16)]), Ok(vec![0x80]));
        assert_eq!(pack_types(&["int8"], &[SolValue::from(127_i16)]), Ok(vec![0x7f]));
        assert!(matches!(
            pack_types(&["int8"], &[SolValue::from(128_i16)]),
            Err(PackError::Overflow { .. })
        ));
        assert!(matches!(
            pack_types(&["int8"], &[SolValue::from(-129_i16)]),
            Err(PackError::Overflow { .. })
        ));
    }

    #[test]
    fn negative_int_in_array_is_sign_extended() {
        let packed = pack_types(&["int16[]"], &[SolValue::array([-2_i16])]).expect("should pack");
        let mut expected = vec![0xff_u8; 31];
        expected.push(0xfe);
        assert_eq!(packed, expected);
    }

    #[test]
    fn fixed_bytes_length_is_checked() {
        assert_eq!(
            pack_types(&["bytes4"], &[SolValue::from([1_u8, 2, 3])]),
            Err(PackError::LengthMismatch {
                ty: "bytes4".to_owned(),
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn fixed_array_length_is_checked() {
        assert!(matches!(
            pack_types(&["bool[2]"], &[SolValue::array([true])]),
            Err(PackError::LengthMismatch {
                expected: 2,
                actual: 1,
                ..
            })
        ));
    }

    #[test]
    fn address_and_uint_pair() {
        let address = Address::repeat_byte(0x11);
        let packed = pack(&[
            (SolType::Address, SolValue::from(address)),
            (SolType::Uint(256), SolValue::from(1_u8)),
        ])
        .expect("should pack");
        assert_eq!(packed.len(), 52);
        assert_eq!(packed.first_chunk::<20>(), Some(&[0x11_u8; 20]));
        assert_eq!(packed.last(), Some(&1));
    }
}
