//! Big-endian conversions between byte strings and the 64-bit words of the state.
//!
//! All arithmetic is modulo 2^64.

/// Number of 64-bit words in the state.
pub const STATE_WORDS: usize = 5;

/// The state size in bytes.
pub const STATE_BYTES: usize = STATE_WORDS * 8;

/// Interprets up to eight bytes as a big-endian word.
///
/// Fewer than eight bytes fill the high-order end of the word; the missing low-order bytes are zero.
/// Bytes past the eighth are ignored.
pub fn bytes_to_word(bytes: &[u8]) -> u64 {
    let n = core::cmp::min(bytes.len(), 8);
    let mut buf = [0_u8; 8];
    buf[..n].copy_from_slice(&bytes[..n]);
    u64::from_be_bytes(buf)
}

/// Writes the `out.len()` lowest-order bytes of `word`, big-endian.
///
/// High-order bytes are truncated when `out` is shorter than eight bytes.
pub fn word_to_bytes(word: u64, out: &mut [u8]) {
    let n = core::cmp::min(out.len(), 8);
    out[..n].copy_from_slice(&word.to_be_bytes()[8 - n..]);
}

/// Writes the `out.len()` highest-order bytes of `word`, big-endian.
///
/// This is how a truncated final block leaves the rate.
pub fn word_prefix(word: u64, out: &mut [u8]) {
    let n = core::cmp::min(out.len(), 8);
    out[..n].copy_from_slice(&word.to_be_bytes()[..n]);
}

/// Five consecutive big-endian words.
pub fn bytes_to_state(bytes: &[u8; STATE_BYTES]) -> [u64; STATE_WORDS] {
    let mut x = [0_u64; STATE_WORDS];
    for (xi, chunk) in x.iter_mut().zip(bytes.chunks_exact(8)) {
        *xi = bytes_to_word(chunk);
    }
    x
}

pub fn state_to_bytes(x: &[u64; STATE_WORDS]) -> [u8; STATE_BYTES] {
    let mut bytes = [0_u8; STATE_BYTES];
    for (chunk, xi) in bytes.chunks_exact_mut(8).zip(x.iter()) {
        chunk.copy_from_slice(&xi.to_be_bytes());
    }
    bytes
}

/// 64-bit right rotation.
#[inline(always)]
pub fn rotr(word: u64, r: u32) -> u64 {
    word.rotate_right(r)
}

/// The `0x80` padding byte placed at byte offset `n` (`n < 8`) of a word.
#[inline]
pub(crate) fn pad(n: usize) -> u64 {
    0x80 << (56 - 8 * n)
}

/// Selects the bytes of a word from byte offset `n` (`n < 8`) onwards.
#[inline]
pub(crate) fn mask_from(n: usize) -> u64 {
    u64::MAX >> (8 * n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_slices_fill_the_high_order_end() {
        assert_eq!(bytes_to_word(&[0x01]), 0x0100_0000_0000_0000);
        assert_eq!(bytes_to_word(&[0x10, 0x11, 0x12, 0x13]), 0x1011_1213_0000_0000);
        assert_eq!(bytes_to_word(&[]), 0);
        assert_eq!(bytes_to_word(&[1, 2, 3, 4, 5, 6, 7, 8]), 0x0102_0304_0506_0708);
    }

    #[test]
    fn word_to_bytes_keeps_low_order_bytes() {
        let mut out = [0_u8; 3];
        word_to_bytes(0x0102_0304_0506_0708, &mut out);
        assert_eq!(out, [0x06, 0x07, 0x08]);

        let mut full = [0_u8; 8];
        word_to_bytes(0x0102_0304_0506_0708, &mut full);
        assert_eq!(full, [1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn word_prefix_keeps_high_order_bytes() {
        let mut out = [0_u8; 3];
        word_prefix(0x0102_0304_0506_0708, &mut out);
        assert_eq!(out, [0x01, 0x02, 0x03]);
    }

    #[test]
    fn state_bytes_are_five_big_endian_words() {
        let bytes: [u8; STATE_BYTES] = {
            let mut b = [0_u8; STATE_BYTES];
            for (i, bi) in b.iter_mut().enumerate() {
                *bi = i as u8;
            }
            b
        };
        let x = bytes_to_state(&bytes);
        assert_eq!(x[0], 0x0001_0203_0405_0607);
        assert_eq!(x[4], 0x2021_2223_2425_2627);
        assert_eq!(state_to_bytes(&x), bytes);
    }

    #[test]
    fn rotation_wraps_around() {
        assert_eq!(rotr(1, 1), 0x8000_0000_0000_0000);
        assert_eq!(rotr(0xdead_beef, 0), 0xdead_beef);
        assert_eq!(rotr(0x8000_0000_0000_0000, 63), 1);
    }

    #[test]
    fn padding_and_masks() {
        assert_eq!(pad(0), 0x8000_0000_0000_0000);
        assert_eq!(pad(7), 0x80);
        assert_eq!(mask_from(0), u64::MAX);
        assert_eq!(mask_from(3), 0x0000_00ff_ffff_ffff);
    }
}
