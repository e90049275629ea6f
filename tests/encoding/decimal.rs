//! DECN and NUMN

use crate::common::*;
use asewire::{encode, DataType, Decimal, Endian, Error};

#[test]
fn positive_decimal_is_right_aligned() {
    // precision 10 -> 1 sign byte + 5 magnitude bytes
    let bytes = encode(DataType::DecN, Endian::Little, &decimal(0x01_0203, 10, 2)).unwrap();
    assert_eq!(bytes, vec![0x00, 0x00, 0x00, 0x01, 0x02, 0x03]);
}

#[test]
fn negative_decimal_sets_sign_byte() {
    let bytes = encode(DataType::NumN, Endian::Little, &decimal(-0x01_0203, 10, 2)).unwrap();
    assert_eq!(bytes, vec![0x01, 0x00, 0x00, 0x01, 0x02, 0x03]);
}

#[test]
fn decimal_ignores_session_order() {
    let value = decimal(-987_654_321, 18, 6);
    let little = encode(DataType::DecN, Endian::Little, &value).unwrap();
    let big = encode(DataType::DecN, Endian::Big, &value).unwrap();
    assert_eq!(little, big);
}

#[test]
fn width_follows_precision_not_value() {
    let small = encode(DataType::NumN, Endian::Little, &decimal(1, 38, 0)).unwrap();
    assert_eq!(small.len(), 17);
    assert_eq!(small[16], 1);
    assert!(small[..16].iter().all(|&b| b == 0));

    let tiny = encode(DataType::NumN, Endian::Little, &decimal(9, 1, 0)).unwrap();
    assert_eq!(tiny, vec![0x00, 0x09]);
}

#[test]
fn full_precision_magnitude() {
    let max = Decimal::parse("99999999999999999999999999999999999999", 38, 0).unwrap();
    let bytes = encode(DataType::NumN, Endian::Little, &max.into()).unwrap();
    assert_eq!(bytes.len(), 17);
    assert_eq!(bytes[0], 0x00);
    assert_eq!(&bytes[1..], &max.magnitude_bytes()[..]);
}

#[test]
fn decimal_requires_decimal_value() {
    let err = encode(DataType::DecN, Endian::Little, &"1.5".into()).unwrap_err();
    assert!(matches!(
        err,
        Error::TypeMismatch {
            data_type: DataType::DecN,
            ..
        }
    ));
}
