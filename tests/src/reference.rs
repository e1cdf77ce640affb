//! Arbitrary-precision model of GF(2^255 - 19)

use ed25519_core_algorithms::ec::ed25519::FieldElement;
use num_bigint::{BigInt, BigUint, Sign};

/// p = 2^255 - 19
pub fn modulus() -> BigUint {
    (BigUint::from(1u32) << 255u32) - BigUint::from(19u32)
}

/// Integer value of 32 little-endian bytes with the top bit cleared
pub fn from_le(bytes: &[u8; 32]) -> BigUint {
    let mut b = *bytes;
    b[31] &= 0x7f;
    BigUint::from_bytes_le(&b)
}

/// Canonical 32-byte little-endian encoding of `n mod p`
pub fn to_le(n: &BigUint) -> [u8; 32] {
    let r = n % modulus();
    let mut out = [0u8; 32];
    let bytes = r.to_bytes_le();
    out[..bytes.len()].copy_from_slice(&bytes);
    out
}

/// Exact integer value of a limb vector, without reduction
///
/// Limbs carry the weights 2^0, 2^26, 2^51, ..., 2^230 and may be negative.
pub fn limbs_value(fe: &FieldElement) -> BigInt {
    const SHIFTS: [u32; 10] = [0, 26, 51, 77, 102, 128, 153, 179, 204, 230];
    fe.limbs()
        .iter()
        .zip(SHIFTS.iter())
        .fold(BigInt::from(0), |acc, (&limb, &shift)| acc + (BigInt::from(limb) << shift))
}

/// Value of a field element reduced into [0, p)
pub fn value(fe: &FieldElement) -> BigUint {
    let p = BigInt::from_biguint(Sign::Plus, modulus());
    let v = ((limbs_value(fe) % &p) + &p) % &p;
    v.to_biguint().unwrap_or_default()
}

/// a^e mod p
pub fn pow(a: &BigUint, e: &BigUint) -> BigUint {
    a.modpow(e, &modulus())
}

/// a^(p-2) mod p
pub fn invert(a: &BigUint) -> BigUint {
    let p = modulus();
    a.modpow(&(&p - BigUint::from(2u32)), &p)
}

/// a^((p-5)/8) mod p
pub fn pow22523(a: &BigUint) -> BigUint {
    let p = modulus();
    let e = (&p - BigUint::from(5u32)) >> 3u32;
    a.modpow(&e, &p)
}
