//! Known-answer vectors for point encodings

/// RFC 8032 section 7.1 public keys
pub const RFC8032_PUBLIC_KEYS: [&str; 4] = [
    "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a",
    "3d4017c3e843895a92b70aa74d1b7ebc9c982ccf2ec4968cc0cd55f12af4660c",
    "fc51cd8e6218a1a38da47ed00230f0580816ed13ba3303ac5deb911548908025",
    "278117fc144c72340f67d0f2316e8386ceffbf2b2428c9c51fef7c597f1d426e",
];

/// Compressed base point
pub const BASEPOINT_HEX: &str = "5866666666666666666666666666666666666666666666666666666666666666";

/// Decode a 64-character hex string into 32 bytes
pub fn hex32(s: &str) -> [u8; 32] {
    let mut out = [0u8; 32];
    if let Ok(bytes) = hex::decode(s) {
        if bytes.len() == 32 {
            out.copy_from_slice(&bytes);
        }
    }
    out
}
