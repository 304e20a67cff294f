//! Half-ASCII NetBIOS name encoding.
//!
//! Each raw name byte becomes two printable characters, one per nibble, offset
//! from `'A'`. A NUL byte is written as the `"CA"` pair.

pub const NAME_LEN: usize = 16;
pub const ENCODED_NAME_LEN: usize = 32;

const NUL_PAIR: [u8; 2] = *b"CA";

/// The `*` wildcard used by node status queries, in strict nibble form.
pub(crate) const WILDCARD_NAME: [u8; ENCODED_NAME_LEN] = {
    let mut encoded = [b'A'; ENCODED_NAME_LEN];
    encoded[0] = b'C';
    encoded[1] = b'K';
    encoded
};

pub fn encode_name(name: &[u8; NAME_LEN]) -> [u8; ENCODED_NAME_LEN] {
    let mut encoded = [0u8; ENCODED_NAME_LEN];
    for (pair, &byte) in encoded.chunks_exact_mut(2).zip(name) {
        if byte == 0 {
            pair.copy_from_slice(&NUL_PAIR);
        } else {
            pair[0] = (byte >> 4) + b'A';
            pair[1] = (byte & 0x0F) + b'A';
        }
    }
    encoded
}

/// Inverse of [`encode_name`].
///
/// A `"CA"` pair always decodes to NUL, so a raw space (`0x20`) does not
/// survive a round trip. Callers trim both away anyway.
pub fn decode_name(encoded: &[u8; ENCODED_NAME_LEN]) -> [u8; NAME_LEN] {
    let mut decoded = [0u8; NAME_LEN];
    for (byte, pair) in decoded.iter_mut().zip(encoded.chunks_exact(2)) {
        if pair == NUL_PAIR {
            continue;
        }
        let high: u8 = pair[0].wrapping_sub(b'A') << 4;
        let low: u8 = pair[1].wrapping_sub(b'A') & 0x0F;
        *byte = high | low;
    }
    decoded
}

/// Prepares a host name for a name query: uppercased, at most 15 bytes, NUL padded.
pub fn pad_name(name: &str) -> [u8; NAME_LEN] {
    let mut padded = [0u8; NAME_LEN];
    let upper: String = name.to_uppercase();
    let len: usize = upper.len().min(NAME_LEN - 1);
    padded[..len].copy_from_slice(&upper.as_bytes()[..len]);
    padded
}

/// Turns a raw fixed-width name field into text.
pub fn trim_name(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw)
        .replace('\0', "")
        .trim()
        .to_string()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
