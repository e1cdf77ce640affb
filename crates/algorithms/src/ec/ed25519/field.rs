//! Field arithmetic modulo p = 2^255 - 19
//!
//! Elements are held in a redundant mixed-radix form: ten signed 32-bit
//! limbs with alternating 26/25-bit weights
//!
//! ```text
//! 2^0, 2^26, 2^51, 2^77, 2^102, 2^128, 2^153, 2^179, 2^204, 2^230
//! ```
//!
//! Limbs may be negative or wider than their nominal width. Every producing
//! operation documents the bound it guarantees, written as
//! "bounded by 1.1*2^26,1.1*2^25,..." meaning limb i is bounded by 1.1*2^26
//! when i is even and 1.1*2^25 when i is odd. The *reduced* bound is
//! 1.1*2^25,1.1*2^24,...
//!
//! Only [`FieldElement::to_bytes`] produces the canonical representative in
//! `[0, p)`. Everything else is a fixed sequence of machine operations that
//! never branches on limb values.

use core::ops::{Add, Mul, Neg, Sub};

use ed25519_core_internal::constant_time::{ct_eq_choice, ct_is_nonzero, ct_mask_i32};
use ed25519_core_internal::endian::{load3, load4};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

use super::constants::FIELD_ELEMENT_SIZE;
use crate::error::{validate, Result};

/// Field element representing a value modulo p = 2^255 - 19
#[derive(Clone, Copy, Debug, Zeroize)]
pub struct FieldElement {
    // 26/25-bit alternating limbs, see module docs for bounds
    pub(crate) v: [i32; 10],
}

impl FieldElement {
    /// The additive identity
    pub const ZERO: FieldElement = FieldElement { v: [0; 10] };

    /// The multiplicative identity
    pub const ONE: FieldElement = FieldElement { v: [1, 0, 0, 0, 0, 0, 0, 0, 0, 0] };

    /// Build an element directly from its limbs
    pub const fn from_limbs(v: [i32; 10]) -> Self {
        FieldElement { v }
    }

    /// Build an element from a limb slice
    ///
    /// # Panics
    ///
    /// Panics if `limbs.len() != 10`. A malformed limb array is a caller bug.
    pub fn from_limb_slice(limbs: &[i32]) -> Self {
        assert_eq!(limbs.len(), 10, "field element must have exactly 10 limbs");
        let mut v = [0i32; 10];
        v.copy_from_slice(limbs);
        FieldElement { v }
    }

    /// The raw limbs
    pub const fn limbs(&self) -> [i32; 10] {
        self.v
    }

    /// Zero element
    pub fn zero() -> Self {
        Self::ZERO
    }

    /// One element
    pub fn one() -> Self {
        Self::ONE
    }

    /// Overwrite `self` with the limbs of `src`
    pub fn copy_from(&mut self, src: &FieldElement) {
        self.v.copy_from_slice(&src.v);
    }

    /// Replace `self` with `g` when `b == 1`, leave it unchanged when `b == 0`
    ///
    /// Branch-free: the selector is expanded into an all-ones/all-zeros mask
    /// and applied with XOR.
    ///
    /// # Panics
    ///
    /// Panics if `b` is not 0 or 1.
    pub fn conditional_move(&mut self, g: &FieldElement, b: u32) {
        let mask = ct_mask_i32(b);
        for (f, g) in self.v.iter_mut().zip(g.v.iter()) {
            *f ^= mask & (*f ^ *g);
        }
    }

    /// Decode 32 little-endian bytes
    ///
    /// The top bit of byte 31 is ignored. The result is bounded by the
    /// reduced bound but is *not* fully reduced: encodings of values in
    /// `[p, 2^255)` are accepted as-is.
    pub fn from_bytes(s: &[u8; FIELD_ELEMENT_SIZE]) -> Self {
        let mut h0 = load4(&s[0..]);
        let mut h1 = load3(&s[4..]) << 6;
        let mut h2 = load3(&s[7..]) << 5;
        let mut h3 = load3(&s[10..]) << 3;
        let mut h4 = load3(&s[13..]) << 2;
        let mut h5 = load4(&s[16..]);
        let mut h6 = load3(&s[20..]) << 7;
        let mut h7 = load3(&s[23..]) << 5;
        let mut h8 = load3(&s[26..]) << 4;
        let mut h9 = (load3(&s[29..]) & 0x7fffff) << 2;

        let mut c: i64;

        // ---- odd limbs, wraparound first --------------------------------
        c = (h9 + (1 << 24)) >> 25;
        h0 += c * 19;
        h9 -= c << 25;
        c = (h1 + (1 << 24)) >> 25;
        h2 += c;
        h1 -= c << 25;
        c = (h3 + (1 << 24)) >> 25;
        h4 += c;
        h3 -= c << 25;
        c = (h5 + (1 << 24)) >> 25;
        h6 += c;
        h5 -= c << 25;
        c = (h7 + (1 << 24)) >> 25;
        h8 += c;
        h7 -= c << 25;

        // ---- even limbs -------------------------------------------------
        c = (h0 + (1 << 25)) >> 26;
        h1 += c;
        h0 -= c << 26;
        c = (h2 + (1 << 25)) >> 26;
        h3 += c;
        h2 -= c << 26;
        c = (h4 + (1 << 25)) >> 26;
        h5 += c;
        h4 -= c << 26;
        c = (h6 + (1 << 25)) >> 26;
        h7 += c;
        h6 -= c << 26;
        c = (h8 + (1 << 25)) >> 26;
        h9 += c;
        h8 -= c << 26;

        FieldElement {
            v: [
                h0 as i32, h1 as i32, h2 as i32, h3 as i32, h4 as i32,
                h5 as i32, h6 as i32, h7 as i32, h8 as i32, h9 as i32,
            ],
        }
    }

    /// Decode from a byte slice, rejecting anything that is not 32 bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        validate::length("field element", bytes.len(), FIELD_ELEMENT_SIZE)?;
        let mut s = [0u8; FIELD_ELEMENT_SIZE];
        s.copy_from_slice(bytes);
        Ok(Self::from_bytes(&s))
    }

    /// Encode to the canonical 32-byte little-endian form
    ///
    /// Precondition: `self` bounded by 1.1*2^25,1.1*2^24,...
    ///
    /// With q = floor(h / p), the quotient is recovered exactly as
    /// q = floor(2^-255 * (h + 19 * 2^-25 * h9 + 2^-1)), computed by rippling
    /// the rounded 19*h9 term through all ten limbs. Subtracting q*p then
    /// leaves h - p*q in `[0, p)`.
    pub fn to_bytes(&self) -> [u8; FIELD_ELEMENT_SIZE] {
        let [mut h0, mut h1, mut h2, mut h3, mut h4, mut h5, mut h6, mut h7, mut h8, mut h9] =
            self.v;

        let mut q = (19 * h9 + (1 << 24)) >> 25;
        q = (h0 + q) >> 26;
        q = (h1 + q) >> 25;
        q = (h2 + q) >> 26;
        q = (h3 + q) >> 25;
        q = (h4 + q) >> 26;
        q = (h5 + q) >> 25;
        q = (h6 + q) >> 26;
        q = (h7 + q) >> 25;
        q = (h8 + q) >> 26;
        q = (h9 + q) >> 25;

        // h - (2^255 - 19) q, the 2^255 q part cancels with the final carry
        h0 += 19 * q;

        let mut c: i32;
        c = h0 >> 26;
        h1 += c;
        h0 -= c << 26;
        c = h1 >> 25;
        h2 += c;
        h1 -= c << 25;
        c = h2 >> 26;
        h3 += c;
        h2 -= c << 26;
        c = h3 >> 25;
        h4 += c;
        h3 -= c << 25;
        c = h4 >> 26;
        h5 += c;
        h4 -= c << 26;
        c = h5 >> 25;
        h6 += c;
        h5 -= c << 25;
        c = h6 >> 26;
        h7 += c;
        h6 -= c << 26;
        c = h7 >> 25;
        h8 += c;
        h7 -= c << 25;
        c = h8 >> 26;
        h9 += c;
        h8 -= c << 26;
        c = h9 >> 25;
        h9 -= c << 25;

        // ---- pack, limb boundaries are not byte aligned ------------------
        let mut s = [0u8; FIELD_ELEMENT_SIZE];
        s[0] = h0 as u8;
        s[1] = (h0 >> 8) as u8;
        s[2] = (h0 >> 16) as u8;
        s[3] = ((h0 >> 24) | (h1 << 2)) as u8;
        s[4] = (h1 >> 6) as u8;
        s[5] = (h1 >> 14) as u8;
        s[6] = ((h1 >> 22) | (h2 << 3)) as u8;
        s[7] = (h2 >> 5) as u8;
        s[8] = (h2 >> 13) as u8;
        s[9] = ((h2 >> 21) | (h3 << 5)) as u8;
        s[10] = (h3 >> 3) as u8;
        s[11] = (h3 >> 11) as u8;
        s[12] = ((h3 >> 19) | (h4 << 6)) as u8;
        s[13] = (h4 >> 2) as u8;
        s[14] = (h4 >> 10) as u8;
        s[15] = (h4 >> 18) as u8;
        s[16] = h5 as u8;
        s[17] = (h5 >> 8) as u8;
        s[18] = (h5 >> 16) as u8;
        s[19] = ((h5 >> 24) | (h6 << 1)) as u8;
        s[20] = (h6 >> 7) as u8;
        s[21] = (h6 >> 15) as u8;
        s[22] = ((h6 >> 23) | (h7 << 3)) as u8;
        s[23] = (h7 >> 5) as u8;
        s[24] = (h7 >> 13) as u8;
        s[25] = ((h7 >> 21) | (h8 << 4)) as u8;
        s[26] = (h8 >> 4) as u8;
        s[27] = (h8 >> 12) as u8;
        s[28] = ((h8 >> 20) | (h9 << 6)) as u8;
        s[29] = (h9 >> 2) as u8;
        s[30] = (h9 >> 10) as u8;
        s[31] = (h9 >> 18) as u8;
        s
    }

    /// Bit 0 of the canonical encoding ("x is negative")
    pub fn is_negative(&self) -> Choice {
        Choice::from(self.to_bytes()[0] & 1)
    }

    /// 1 unless the canonical encoding is all zeros
    pub fn is_nonzero(&self) -> Choice {
        ct_is_nonzero(&self.to_bytes())
    }

    /// Check if zero
    pub fn is_zero(&self) -> Choice {
        !self.is_nonzero()
    }

    /// Add two field elements
    ///
    /// No carries: if both inputs are bounded by 1.1*2^25,1.1*2^24,... the
    /// result is bounded by 1.1*2^26,1.1*2^25,...
    pub fn add(&self, other: &FieldElement) -> FieldElement {
        let mut v = [0i32; 10];
        for (i, limb) in v.iter_mut().enumerate() {
            *limb = self.v[i] + other.v[i];
        }
        FieldElement { v }
    }

    /// Subtract two field elements
    ///
    /// Same bound behavior as [`add`](Self::add).
    pub fn sub(&self, other: &FieldElement) -> FieldElement {
        let mut v = [0i32; 10];
        for (i, limb) in v.iter_mut().enumerate() {
            *limb = self.v[i] - other.v[i];
        }
        FieldElement { v }
    }

    /// Negate, output bound mirrors the input bound
    pub fn neg(&self) -> FieldElement {
        let mut v = [0i32; 10];
        for (limb, f) in v.iter_mut().zip(self.v.iter()) {
            *limb = -f;
        }
        FieldElement { v }
    }

    /// Double a field element (no carries)
    pub fn double(&self) -> FieldElement {
        self.add(self)
    }

    /// Multiply two field elements
    ///
    /// Preconditions: both inputs bounded by 1.1*2^26,1.1*2^25,...
    /// Postcondition: result bounded by 1.1*2^25,1.1*2^24,...
    ///
    /// Schoolbook multiplication. Terms that land at or above 2^255 are
    /// folded back with 2^255 = 19 (mod p), so high g limbs are prescaled by
    /// 19. When two odd limbs meet, their weights sum to one bit more than
    /// the target limb weight, hence the doubled odd f limbs.
    pub fn mul(&self, other: &FieldElement) -> FieldElement {
        let [f0, f1, f2, f3, f4, f5, f6, f7, f8, f9] = self.v.map(i64::from);
        let [g0, g1, g2, g3, g4, g5, g6, g7, g8, g9] = other.v.map(i64::from);

        // ---- pre-scaled operands ------------------------------------------
        let (g1_19, g2_19, g3_19, g4_19, g5_19, g6_19, g7_19, g8_19, g9_19) =
            (19 * g1, 19 * g2, 19 * g3, 19 * g4, 19 * g5, 19 * g6, 19 * g7, 19 * g8, 19 * g9);
        let (f1_2, f3_2, f5_2, f7_2, f9_2) = (2 * f1, 2 * f3, 2 * f5, 2 * f7, 2 * f9);

        // ---- ten dot products -----------------------------------------------
        let h = [
            f0 * g0 + f1_2 * g9_19 + f2 * g8_19 + f3_2 * g7_19 + f4 * g6_19
                + f5_2 * g5_19 + f6 * g4_19 + f7_2 * g3_19 + f8 * g2_19 + f9_2 * g1_19,
            f0 * g1 + f1 * g0 + f2 * g9_19 + f3 * g8_19 + f4 * g7_19
                + f5 * g6_19 + f6 * g5_19 + f7 * g4_19 + f8 * g3_19 + f9 * g2_19,
            f0 * g2 + f1_2 * g1 + f2 * g0 + f3_2 * g9_19 + f4 * g8_19
                + f5_2 * g7_19 + f6 * g6_19 + f7_2 * g5_19 + f8 * g4_19 + f9_2 * g3_19,
            f0 * g3 + f1 * g2 + f2 * g1 + f3 * g0 + f4 * g9_19
                + f5 * g8_19 + f6 * g7_19 + f7 * g6_19 + f8 * g5_19 + f9 * g4_19,
            f0 * g4 + f1_2 * g3 + f2 * g2 + f3_2 * g1 + f4 * g0
                + f5_2 * g9_19 + f6 * g8_19 + f7_2 * g7_19 + f8 * g6_19 + f9_2 * g5_19,
            f0 * g5 + f1 * g4 + f2 * g3 + f3 * g2 + f4 * g1
                + f5 * g0 + f6 * g9_19 + f7 * g8_19 + f8 * g7_19 + f9 * g6_19,
            f0 * g6 + f1_2 * g5 + f2 * g4 + f3_2 * g3 + f4 * g2
                + f5_2 * g1 + f6 * g0 + f7_2 * g9_19 + f8 * g8_19 + f9_2 * g7_19,
            f0 * g7 + f1 * g6 + f2 * g5 + f3 * g4 + f4 * g3
                + f5 * g2 + f6 * g1 + f7 * g0 + f8 * g9_19 + f9 * g8_19,
            f0 * g8 + f1_2 * g7 + f2 * g6 + f3_2 * g5 + f4 * g4
                + f5_2 * g3 + f6 * g2 + f7_2 * g1 + f8 * g0 + f9_2 * g9_19,
            f0 * g9 + f1 * g8 + f2 * g7 + f3 * g6 + f4 * g5
                + f5 * g4 + f6 * g3 + f7 * g2 + f8 * g1 + f9 * g0,
        ];

        // |h0| <= 1.2*2^59, |h1| <= 1.5*2^58; narrower for the rest
        carry_wide(h)
    }

    /// Square a field element
    ///
    /// Preconditions: bounded by 1.1*2^26,1.1*2^25,...
    /// Postcondition: bounded by 1.1*2^25,1.1*2^24,...
    pub fn square(&self) -> FieldElement {
        carry_wide(self.square_terms())
    }

    /// Compute 2 * self^2
    ///
    /// Preconditions: bounded by 1.65*2^26,1.65*2^25,...
    /// Postcondition: bounded by 1.01*2^25,1.01*2^24,...
    pub fn square2(&self) -> FieldElement {
        let mut h = self.square_terms();
        for limb in h.iter_mut() {
            *limb += *limb;
        }
        carry_wide(h)
    }

    /// Square `n` times in a row, `n >= 1`
    pub fn square_n(&self, n: usize) -> FieldElement {
        debug_assert!(n >= 1);
        let mut t = self.square();
        for _ in 1..n {
            t = t.square();
        }
        t
    }

    /// Dot products for f*f, cross terms already doubled
    fn square_terms(&self) -> [i64; 10] {
        let [f0, f1, f2, f3, f4, f5, f6, f7, f8, f9] = self.v.map(i64::from);

        let (f0_2, f1_2, f2_2, f3_2) = (2 * f0, 2 * f1, 2 * f2, 2 * f3);
        let (f4_2, f5_2, f6_2, f7_2) = (2 * f4, 2 * f5, 2 * f6, 2 * f7);
        let f5_38 = 38 * f5;
        let f6_19 = 19 * f6;
        let f7_38 = 38 * f7;
        let f8_19 = 19 * f8;
        let f9_38 = 38 * f9;

        let f0f0 = f0 * f0;
        let f0f1_2 = f0_2 * f1;
        let f0f2_2 = f0_2 * f2;
        let f0f3_2 = f0_2 * f3;
        let f0f4_2 = f0_2 * f4;
        let f0f5_2 = f0_2 * f5;
        let f0f6_2 = f0_2 * f6;
        let f0f7_2 = f0_2 * f7;
        let f0f8_2 = f0_2 * f8;
        let f0f9_2 = f0_2 * f9;
        let f1f1_2 = f1_2 * f1;
        let f1f2_2 = f1_2 * f2;
        let f1f3_4 = f1_2 * f3_2;
        let f1f4_2 = f1_2 * f4;
        let f1f5_4 = f1_2 * f5_2;
        let f1f6_2 = f1_2 * f6;
        let f1f7_4 = f1_2 * f7_2;
        let f1f8_2 = f1_2 * f8;
        let f1f9_76 = f1_2 * f9_38;
        let f2f2 = f2 * f2;
        let f2f3_2 = f2_2 * f3;
        let f2f4_2 = f2_2 * f4;
        let f2f5_2 = f2_2 * f5;
        let f2f6_2 = f2_2 * f6;
        let f2f7_2 = f2_2 * f7;
        let f2f8_38 = f2_2 * f8_19;
        let f2f9_38 = f2 * f9_38;
        let f3f3_2 = f3_2 * f3;
        let f3f4_2 = f3_2 * f4;
        let f3f5_4 = f3_2 * f5_2;
        let f3f6_2 = f3_2 * f6;
        let f3f7_76 = f3_2 * f7_38;
        let f3f8_38 = f3_2 * f8_19;
        let f3f9_76 = f3_2 * f9_38;
        let f4f4 = f4 * f4;
        let f4f5_2 = f4_2 * f5;
        let f4f6_38 = f4_2 * f6_19;
        let f4f7_38 = f4 * f7_38;
        let f4f8_38 = f4_2 * f8_19;
        let f4f9_38 = f4 * f9_38;
        let f5f5_38 = f5 * f5_38;
        let f5f6_38 = f5_2 * f6_19;
        let f5f7_76 = f5_2 * f7_38;
        let f5f8_38 = f5_2 * f8_19;
        let f5f9_76 = f5_2 * f9_38;
        let f6f6_19 = f6 * f6_19;
        let f6f7_38 = f6 * f7_38;
        let f6f8_38 = f6_2 * f8_19;
        let f6f9_38 = f6 * f9_38;
        let f7f7_38 = f7 * f7_38;
        let f7f8_38 = f7_2 * f8_19;
        let f7f9_76 = f7_2 * f9_38;
        let f8f8_19 = f8 * f8_19;
        let f8f9_38 = f8 * f9_38;
        let f9f9_38 = f9 * f9_38;

        [
            f0f0 + f1f9_76 + f2f8_38 + f3f7_76 + f4f6_38 + f5f5_38,
            f0f1_2 + f2f9_38 + f3f8_38 + f4f7_38 + f5f6_38,
            f0f2_2 + f1f1_2 + f3f9_76 + f4f8_38 + f5f7_76 + f6f6_19,
            f0f3_2 + f1f2_2 + f4f9_38 + f5f8_38 + f6f7_38,
            f0f4_2 + f1f3_4 + f2f2 + f5f9_76 + f6f8_38 + f7f7_38,
            f0f5_2 + f1f4_2 + f2f3_2 + f6f9_38 + f7f8_38,
            f0f6_2 + f1f5_4 + f2f4_2 + f3f3_2 + f7f9_76 + f8f8_19,
            f0f7_2 + f1f6_2 + f2f5_2 + f3f4_2 + f8f9_38,
            f0f8_2 + f1f7_4 + f2f6_2 + f3f5_4 + f4f4 + f9f9_38,
            f0f9_2 + f1f8_2 + f2f7_2 + f3f6_2 + f4f5_2,
        ]
    }

    /// Multiplicative inverse z^(p-2) by a fixed addition chain
    ///
    /// Zero maps to zero (Fermat inversion at 0); no branch on the input.
    pub fn invert(&self) -> FieldElement {
        let z = self;

        let mut t0 = z.square(); // 2^1
        let mut t1 = t0.square_n(2); // 2^3
        t1 = z.mul(&t1); // 2^3 + 2^0
        t0 = t0.mul(&t1); // 2^3 + 2^1 + 2^0
        let mut t2 = t0.square(); // 2^4 + 2^2 + 2^1
        t1 = t1.mul(&t2); // 2^5 - 1
        t2 = t1.square_n(5); // 2^10 - 2^5
        t1 = t2.mul(&t1); // 2^10 - 1
        t2 = t1.square_n(10); // 2^20 - 2^10
        t2 = t2.mul(&t1); // 2^20 - 1
        let mut t3 = t2.square_n(20); // 2^40 - 2^20
        t2 = t3.mul(&t2); // 2^40 - 1
        t2 = t2.square_n(10); // 2^50 - 2^10
        t1 = t2.mul(&t1); // 2^50 - 1
        t2 = t1.square_n(50); // 2^100 - 2^50
        t2 = t2.mul(&t1); // 2^100 - 1
        t3 = t2.square_n(100); // 2^200 - 2^100
        t2 = t3.mul(&t2); // 2^200 - 1
        t2 = t2.square_n(50); // 2^250 - 2^50
        t1 = t2.mul(&t1); // 2^250 - 1
        t1 = t1.square_n(5); // 2^255 - 2^5
        t1.mul(&t0) // 2^255 - 21
    }

    /// Compute z^((p-5)/8) = z^(2^252 - 3) by a fixed addition chain
    ///
    /// Used as the candidate square root step of point decompression.
    pub fn pow22523(&self) -> FieldElement {
        let z = self;

        // The two single squarings below are complete segments; their
        // follow-up loops would run zero times.
        let mut t0 = z.square(); // 2^1
        let mut t1 = t0.square_n(2); // 2^3
        t1 = z.mul(&t1); // 2^3 + 2^0
        t0 = t0.mul(&t1); // 2^3 + 2^1 + 2^0
        t0 = t0.square(); // 2^4 + 2^2 + 2^1
        t0 = t1.mul(&t0); // 2^5 - 1
        t1 = t0.square_n(5); // 2^10 - 2^5
        t0 = t1.mul(&t0); // 2^10 - 1
        t1 = t0.square_n(10); // 2^20 - 2^10
        t1 = t1.mul(&t0); // 2^20 - 1
        let mut t2 = t1.square_n(20); // 2^40 - 2^20
        t1 = t2.mul(&t1); // 2^40 - 1
        t1 = t1.square_n(10); // 2^50 - 2^10
        t0 = t1.mul(&t0); // 2^50 - 1
        t1 = t0.square_n(50); // 2^100 - 2^50
        t1 = t1.mul(&t0); // 2^100 - 1
        t2 = t1.square_n(100); // 2^200 - 2^100
        t1 = t2.mul(&t1); // 2^200 - 1
        t1 = t1.square_n(50); // 2^250 - 2^50
        t0 = t1.mul(&t0); // 2^250 - 1
        t0 = t0.square_n(2); // 2^252 - 4
        t0.mul(z) // 2^252 - 3
    }
}

/// 12-step carry chain shared by `mul`, `square` and `square2`
///
/// Carries are rounded (add half, then shift) and run as two interleaved
/// chains starting at limbs 0 and 4, with the limb 9 overflow reinjected
/// into limb 0 times 19. Output bounded by 1.1*2^25,1.1*2^24,...
#[inline(always)]
fn carry_wide(h: [i64; 10]) -> FieldElement {
    let [mut h0, mut h1, mut h2, mut h3, mut h4, mut h5, mut h6, mut h7, mut h8, mut h9] = h;
    let mut c: i64;

    c = (h0 + (1 << 25)) >> 26;
    h1 += c;
    h0 -= c << 26;
    c = (h4 + (1 << 25)) >> 26;
    h5 += c;
    h4 -= c << 26;
    // |h0| <= 2^25, |h4| <= 2^25

    c = (h1 + (1 << 24)) >> 25;
    h2 += c;
    h1 -= c << 25;
    c = (h5 + (1 << 24)) >> 25;
    h6 += c;
    h5 -= c << 25;
    // |h1| <= 2^24, |h5| <= 2^24

    c = (h2 + (1 << 25)) >> 26;
    h3 += c;
    h2 -= c << 26;
    c = (h6 + (1 << 25)) >> 26;
    h7 += c;
    h6 -= c << 26;

    c = (h3 + (1 << 24)) >> 25;
    h4 += c;
    h3 -= c << 25;
    c = (h7 + (1 << 24)) >> 25;
    h8 += c;
    h7 -= c << 25;

    c = (h4 + (1 << 25)) >> 26;
    h5 += c;
    h4 -= c << 26;
    c = (h8 + (1 << 25)) >> 26;
    h9 += c;
    h8 -= c << 26;

    c = (h9 + (1 << 24)) >> 25;
    h0 += c * 19;
    h9 -= c << 25;
    // |h0| <= 1.8*2^37

    c = (h0 + (1 << 25)) >> 26;
    h1 += c;
    h0 -= c << 26;

    FieldElement {
        v: [
            h0 as i32, h1 as i32, h2 as i32, h3 as i32, h4 as i32,
            h5 as i32, h6 as i32, h7 as i32, h8 as i32, h9 as i32,
        ],
    }
}

impl Default for FieldElement {
    fn default() -> Self {
        Self::ZERO
    }
}

impl ConstantTimeEq for FieldElement {
    /// Compares canonical encodings
    fn ct_eq(&self, other: &Self) -> Choice {
        ct_eq_choice(self.to_bytes(), other.to_bytes())
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for FieldElement {}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut r = *a;
        r.conditional_move(b, choice.unwrap_u8() as u32);
        r
    }

    fn conditional_assign(&mut self, other: &Self, choice: Choice) {
        self.conditional_move(other, choice.unwrap_u8() as u32);
    }
}

impl<'a> Add<&'a FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn add(self, rhs: &'a FieldElement) -> FieldElement {
        FieldElement::add(self, rhs)
    }
}

impl<'a> Sub<&'a FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn sub(self, rhs: &'a FieldElement) -> FieldElement {
        FieldElement::sub(self, rhs)
    }
}

impl<'a> Mul<&'a FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn mul(self, rhs: &'a FieldElement) -> FieldElement {
        FieldElement::mul(self, rhs)
    }
}

impl Neg for &FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        FieldElement::neg(self)
    }
}

impl ed25519_core_api::Serialize for FieldElement {
    type Bytes = [u8; FIELD_ELEMENT_SIZE];

    fn from_bytes(bytes: &[u8]) -> ed25519_core_api::Result<Self> {
        Ok(Self::from_slice(bytes)?)
    }

    fn to_bytes(&self) -> Self::Bytes {
        FieldElement::to_bytes(self)
    }
}
