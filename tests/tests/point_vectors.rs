//! Point encoding vectors and cross-crate behavior

use ed25519_core_algorithms::ec::ed25519::{
    CompressedPoint, ExtendedPoint, FieldElement, BASEPOINT_COMPRESSED,
};
use ed25519_core_algorithms::error::to_core_result;
use ed25519_core_api::{Error as CoreError, Serialize};
use ed25519_core_tests::reference;
use ed25519_core_tests::vectors::{hex32, BASEPOINT_HEX, RFC8032_PUBLIC_KEYS};
use proptest::prelude::*;
use rand::{rngs::OsRng, RngCore};

#[test]
fn test_basepoint_constant_matches_hex() {
    assert_eq!(hex32(BASEPOINT_HEX), BASEPOINT_COMPRESSED);
}

#[test]
fn test_public_keys_round_trip() {
    for key in RFC8032_PUBLIC_KEYS {
        let bytes = hex32(key);
        let point = CompressedPoint::from_bytes(&bytes).decompress().unwrap();
        assert!(bool::from(point.is_on_curve()));
        assert_eq!(hex::encode(point.to_bytes()), key);
    }
}

#[test]
fn test_decode_failure_maps_to_invalid_point() {
    // scan for a y with no matching x and push it through the public error
    let mut rejected = None;
    for y in 2u8..=255 {
        let mut s = [0u8; 32];
        s[0] = y;
        if let Err(e) = ExtendedPoint::from_bytes(&s) {
            rejected = Some(e);
            break;
        }
    }
    let err = rejected.expect("some small y must be off the curve");
    let core: CoreError = to_core_result::<()>(Err(err), "public key").unwrap_err();
    assert!(core.is_invalid_point());
    assert!(core.to_string().contains("public key"));
}

#[test]
fn test_serialize_trait() {
    let c = <CompressedPoint as Serialize>::from_bytes(&BASEPOINT_COMPRESSED).unwrap();
    assert_eq!(Serialize::to_bytes(&c), BASEPOINT_COMPRESSED);

    let err = <CompressedPoint as Serialize>::from_bytes(&[0u8; 16]).unwrap_err();
    assert!(matches!(err, CoreError::InvalidLength { expected: 32, actual: 16, .. }));

    let fe = <FieldElement as Serialize>::from_bytes(&[9u8; 32]).unwrap();
    assert_eq!(Serialize::to_bytes(&fe), fe.to_bytes());
    assert!(<FieldElement as Serialize>::from_bytes(&[0u8; 33]).is_err());
}

#[test]
fn test_random_points_survive_mixed_arithmetic() {
    let mut bytes = [0u8; 32];
    let mut points = Vec::new();
    while points.len() < 8 {
        OsRng.fill_bytes(&mut bytes);
        if let Ok(p) = ExtendedPoint::from_bytes(&bytes) {
            points.push(p);
        }
    }

    for pair in points.windows(2) {
        let (p, q) = (pair[0], pair[1]);
        let cached = p.add_cached(&q.to_cached()).to_extended();
        let affine = p.add_precomputed(&q.to_precomputed()).to_extended();
        assert_eq!(cached, affine);
        assert!(bool::from(cached.is_on_curve()));
        assert_eq!(cached.sub_cached(&q.to_cached()).to_extended(), p);
    }
}

proptest! {
    #[test]
    fn decompress_accepts_only_curve_points(bytes in any::<[u8; 32]>()) {
        if let Ok(p) = ExtendedPoint::from_bytes(&bytes) {
            prop_assert!(bool::from(p.is_on_curve()));

            let y = reference::from_le(&bytes);
            let p_mod = reference::modulus();
            let one = num_bigint::BigUint::from(1u32);
            let x_is_zero = y == one || y == &p_mod - &one;
            // canonical encodings of points with x != 0 re-encode exactly
            if y < p_mod && !x_is_zero {
                prop_assert_eq!(p.to_bytes(), bytes);
            }
        }
    }
}
