//! Constant-time operations to prevent timing attacks

use subtle::{Choice, ConstantTimeEq};

/// Constant-time equality check that returns a Choice (0 or 1)
pub fn ct_eq_choice<A, B>(a: A, b: B) -> Choice
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return Choice::from(0);
    }

    a.ct_eq(b)
}

/// All-ones `i32` mask when `bit == 1`, zero when `bit == 0`.
///
/// # Panics
///
/// Panics if `bit` is not 0 or 1. A selector outside that range is a
/// caller bug, not untrusted input.
#[inline]
pub fn ct_mask_i32(bit: u32) -> i32 {
    assert!(bit <= 1, "constant-time selector must be 0 or 1, got {}", bit);
    (bit as i32).wrapping_neg()
}

/// Fold every byte of `bytes` into a single "any bit set" flag.
///
/// The accumulator is OR-reduced and then folded down to bit 0, so the
/// instruction sequence does not depend on the contents.
pub fn ct_is_nonzero(bytes: &[u8]) -> Choice {
    let mut x = 0u8;
    for &b in bytes {
        x |= b;
    }
    x |= x >> 4;
    x |= x >> 2;
    x |= x >> 1;
    Choice::from(x & 1)
}

/// Constant-time byte equality, 1 if `a == b` else 0
#[inline]
pub fn ct_eq_u8(a: u8, b: u8) -> u32 {
    let x = (a ^ b) as u32;
    // x - 1 underflows into the top bit only when x == 0
    x.wrapping_sub(1) >> 31
}
