//! Differential tests of the limb arithmetic against num-bigint

use ed25519_core_algorithms::ec::ed25519::FieldElement;
use ed25519_core_tests::reference::{self, modulus};
use num_bigint::BigUint;
use proptest::prelude::*;

const REDUCED_EVEN: i64 = 36_909_875; // 1.1 * 2^25, rounded up
const REDUCED_ODD: i64 = 18_454_938; // 1.1 * 2^24, rounded up

fn assert_reduced(fe: &FieldElement) -> Result<(), TestCaseError> {
    for (i, &limb) in fe.limbs().iter().enumerate() {
        let bound = if i % 2 == 0 { REDUCED_EVEN } else { REDUCED_ODD };
        prop_assert!(
            i64::from(limb).abs() <= bound,
            "limb {} = {} exceeds {}",
            i,
            limb,
            bound
        );
    }
    Ok(())
}

fn element() -> impl Strategy<Value = ([u8; 32], FieldElement)> {
    any::<[u8; 32]>().prop_map(|b| (b, FieldElement::from_bytes(&b)))
}

proptest! {
    #[test]
    fn from_bytes_matches_reference((bytes, fe) in element()) {
        assert_reduced(&fe)?;
        prop_assert_eq!(reference::value(&fe), reference::from_le(&bytes) % modulus());
        prop_assert_eq!(fe.to_bytes(), reference::to_le(&reference::from_le(&bytes)));
    }

    #[test]
    fn add_sub_match_reference((_, a) in element(), (_, b) in element()) {
        let (va, vb) = (reference::value(&a), reference::value(&b));
        let p = modulus();

        prop_assert_eq!(reference::value(&a.add(&b)), (&va + &vb) % &p);
        prop_assert_eq!(reference::value(&a.sub(&b)), (&va + &p - &vb) % &p);
        prop_assert_eq!(reference::value(&a.neg()), (&p - &va) % &p);
    }

    #[test]
    fn mul_matches_reference((_, a) in element(), (_, b) in element()) {
        let r = a.mul(&b);
        assert_reduced(&r)?;
        let expected = (reference::value(&a) * reference::value(&b)) % modulus();
        prop_assert_eq!(r.to_bytes(), reference::to_le(&expected));
    }

    #[test]
    fn mul_accepts_unreduced_inputs(
        (_, a) in element(),
        (_, b) in element(),
        (_, c) in element(),
        (_, d) in element(),
    ) {
        // sums of two reduced elements sit at the 1.1*2^26 input bound
        let x = a.add(&b);
        let y = c.sub(&d);
        let r = x.mul(&y);
        assert_reduced(&r)?;
        let expected = (reference::value(&x) * reference::value(&y)) % modulus();
        prop_assert_eq!(reference::value(&r), expected);
    }

    #[test]
    fn square_matches_reference((_, a) in element(), (_, b) in element()) {
        let x = a.add(&b);
        let vx = reference::value(&x);
        let p = modulus();

        let sq = x.square();
        assert_reduced(&sq)?;
        prop_assert_eq!(reference::value(&sq), (&vx * &vx) % &p);

        let sq2 = x.square2();
        assert_reduced(&sq2)?;
        prop_assert_eq!(reference::value(&sq2), (BigUint::from(2u32) * &vx * &vx) % &p);
    }

    #[test]
    fn invert_matches_reference((_, a) in element()) {
        let r = a.invert();
        prop_assert_eq!(reference::value(&r), reference::invert(&reference::value(&a)));
    }

    #[test]
    fn pow22523_matches_reference((_, a) in element()) {
        let r = a.pow22523();
        prop_assert_eq!(reference::value(&r), reference::pow22523(&reference::value(&a)));
    }

    #[test]
    fn to_bytes_is_canonical((_, a) in element(), (_, b) in element()) {
        let x = a.sub(&b);
        let bytes = x.to_bytes();
        prop_assert!(BigUint::from_bytes_le(&bytes) < modulus());
        prop_assert_eq!(FieldElement::from_bytes(&bytes).to_bytes(), bytes);
    }

    #[test]
    fn is_negative_and_nonzero_follow_encoding((_, a) in element()) {
        let bytes = a.to_bytes();
        prop_assert_eq!(a.is_negative().unwrap_u8(), bytes[0] & 1);
        prop_assert_eq!(a.is_nonzero().unwrap_u8(), u8::from(bytes != [0u8; 32]));
    }

    #[test]
    fn conditional_move_selects((_, a) in element(), (_, b) in element(), bit in 0u32..2) {
        let mut r = a;
        r.conditional_move(&b, bit);
        let expected = if bit == 1 { b } else { a };
        prop_assert_eq!(r.limbs(), expected.limbs());
    }
}

#[test]
fn values_above_modulus_encode_canonically() {
    // 2^255 - 1 is accepted on decode and comes out as 18
    let bytes = {
        let mut b = [0xffu8; 32];
        b[31] = 0x7f;
        b
    };
    let fe = FieldElement::from_bytes(&bytes);
    assert_eq!(reference::value(&fe), BigUint::from(18u32));

    let mut eighteen = [0u8; 32];
    eighteen[0] = 18;
    assert_eq!(fe.to_bytes(), eighteen);
}

#[test]
fn square_n_matches_repeated_squaring() {
    let x = FieldElement::from_bytes(&[7u8; 32]);
    let mut expected = x;
    for _ in 0..25 {
        expected = expected.square();
    }
    assert_eq!(x.square_n(25), expected);
}
