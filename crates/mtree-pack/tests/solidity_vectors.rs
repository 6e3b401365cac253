//! Packing vectors cross-checked against ethers' `solidityPack`.

#![allow(missing_docs)]

use alloy_primitives::{Address, U256, address};
use mtree_pack::{SolValue, pack_hex, pack_keccak256, pack_types};

fn packed(ty: &str, value: impl Into<SolValue>) -> String {
    pack_hex(&[ty], &[value.into()]).expect("value should pack")
}

#[test]
fn string_is_raw_utf8() {
    assert_eq!(packed("string", "peϣer"), "0x7065cfa36572");
}

#[test]
fn address_is_twenty_bytes() {
    assert_eq!(
        packed("address", address!("0x39d28D4c4191a584acabe021F5B905887a6B5247")),
        "0x39d28d4c4191a584acabe021f5b905887a6b5247"
    );
}

#[test]
fn bytes_are_raw() {
    assert_eq!(packed("bytes", vec![0_u8, 1, 2, 3]), "0x00010203");
}

#[test]
fn bool_is_one_byte() {
    assert_eq!(packed("bool", true), "0x01");
    assert_eq!(packed("bool", false), "0x00");
}

#[test]
fn integers_use_their_own_width() {
    assert_eq!(
        packed("uint256", U256::from(55_u64)),
        "0x0000000000000000000000000000000000000000000000000000000000000037"
    );
    assert_eq!(packed("int64", 4242_i64), "0x0000000000001092");
    assert_eq!(packed("int32", 4242_i32), "0x00001092");
    assert_eq!(packed("uint32", 4242_u32), "0x00001092");
    assert_eq!(packed("int32", -1_i32), "0xffffffff");
}

#[test]
fn fixed_bytes_are_raw() {
    assert_eq!(
        packed("bytes8", [0_u8, 1, 2, 3, 4, 5, 6, 7]),
        "0x0001020304050607"
    );
}

#[test]
fn address_array_elements_are_word_padded() {
    assert_eq!(
        packed(
            "address[]",
            SolValue::array([address!("0x39d28D4c4191a584acabe021F5B905887a6B5247")])
        ),
        "0x00000000000000000000000039d28d4c4191a584acabe021f5b905887a6b5247"
    );
}

#[test]
fn string_array_elements_are_concatenated() {
    assert_eq!(packed("string[]", SolValue::array(["sup", "eth"])), "0x737570657468");
}

#[test]
fn bool_array_elements_are_word_padded() {
    assert_eq!(
        packed("bool[]", SolValue::array([true, true])),
        "0x00000000000000000000000000000000000000000000000000000000000000010000000000000000000000000000000000000000000000000000000000000001"
    );
}

#[test]
fn fixed_bytes_array_elements_are_right_padded() {
    assert_eq!(
        packed("bytes2[2]", SolValue::array([[0xab_u8, 0xcd], [0x01, 0x02]])),
        "0xabcd000000000000000000000000000000000000000000000000000000000000\
         0102000000000000000000000000000000000000000000000000000000000000"
    );
}

#[test]
fn multiple_arguments_are_concatenated() {
    let bytes = pack_types(
        &["address", "uint8", "bool"],
        &[
            SolValue::from(Address::repeat_byte(0xaa)),
            SolValue::from(7_u8),
            SolValue::from(true),
        ],
    )
    .expect("values should pack");
    let mut expected = vec![0xaa_u8; 20];
    expected.extend([7, 1]);
    assert_eq!(bytes, expected);
}

#[test]
fn keccak_of_packing() {
    // keccak256(abi.encodePacked("")) is the hash of empty input.
    assert_eq!(
        pack_keccak256(&["string"], &[SolValue::from("")]).expect("value should pack"),
        hex_literal::hex!("c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470")
    );
}
