//! Big-endian bit addressing over byte buffers.
//!
//! Word indices are 11 bits wide, so neither entropy nor checksum boundaries
//! line up with bytes. Everything here works on an explicit bit cursor,
//! most-significant bit first, so payloads of any length (up to several
//! thousand bits) are handled without fixed-width integer arithmetic.

/// Bits per word index
pub const BITS_PER_WORD: usize = 11;

/// Read `len` bits (at most 16) starting at bit `start`, MSB first.
///
/// Bits past the end of `data` read as zero.
#[must_use]
pub fn extract_bits(data: &[u8], start: usize, len: usize) -> u16 {
    debug_assert!(len <= 16, "at most 16 bits fit in the result");
    (start..start + len).fold(0u16, |acc, pos| (acc << 1) | u16::from(bit_at(data, pos)))
}

/// Split a buffer into consecutive 11-bit word indices.
///
/// Exactly `word_count` indices are produced; any remainder bits after the
/// last full word are left unused.
#[must_use]
pub fn to_indices(data: &[u8], word_count: usize) -> Vec<u16> {
    (0..word_count)
        .map(|i| extract_bits(data, i * BITS_PER_WORD, BITS_PER_WORD))
        .collect()
}

/// Concatenate 11-bit indices into one bit-string and cut it to `byte_len`.
///
/// The result is exactly `byte_len` bytes. Bits beyond the concatenated
/// indices are zero, and bits of the indices past `byte_len` bytes are
/// dropped. Leading zero bytes are always kept.
#[must_use]
pub fn from_indices(indices: &[u16], byte_len: usize) -> Vec<u8> {
    let mut out = vec![0u8; byte_len];
    let capacity = byte_len * 8;
    for (i, &index) in indices.iter().enumerate() {
        for offset in 0..BITS_PER_WORD {
            let pos = i * BITS_PER_WORD + offset;
            if pos >= capacity {
                return out;
            }
            if (index >> (BITS_PER_WORD - 1 - offset)) & 1 == 1 {
                out[pos / 8] |= 0x80 >> (pos % 8);
            }
        }
    }
    out
}

/// Compare `len` bits of `a` starting at `a_start` with the leading `len` bits of `b`.
#[must_use]
pub fn leading_bits_match(a: &[u8], a_start: usize, b: &[u8], len: usize) -> bool {
    (0..len).all(|i| bit_at(a, a_start + i) == bit_at(b, i))
}

fn bit_at(data: &[u8], pos: usize) -> bool {
    data.get(pos / 8)
        .is_some_and(|&byte| (byte >> (7 - pos % 8)) & 1 == 1)
}
