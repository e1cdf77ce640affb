//! Little-endian byte loaders
//!
//! The 10-limb field decoding reads overlapping 3- and 4-byte windows that
//! are not aligned to limb boundaries, so these return `i64` ready for
//! shifting and carrying.

/// Load 3 little-endian bytes from the start of `bytes`
///
/// # Panics
///
/// Panics if `bytes` is shorter than 3 bytes.
#[inline(always)]
pub fn load3(bytes: &[u8]) -> i64 {
    (bytes[0] as i64) | ((bytes[1] as i64) << 8) | ((bytes[2] as i64) << 16)
}

/// Load 4 little-endian bytes from the start of `bytes`
///
/// # Panics
///
/// Panics if `bytes` is shorter than 4 bytes.
#[inline(always)]
pub fn load4(bytes: &[u8]) -> i64 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loads_are_little_endian() {
        let bytes = [0x01, 0x02, 0x03, 0xff];
        assert_eq!(load3(&bytes), 0x030201);
        assert_eq!(load4(&bytes), 0xff030201);
    }
}
