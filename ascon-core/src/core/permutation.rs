//! The Ascon permutation over five 64-bit words.

use super::codec::{rotr, STATE_WORDS};

/// Total number of rounds; `p^r` runs the last `r` of them.
pub const MAX_ROUNDS: usize = 12;

/// Round constant added to word 2 in round `index` (`0..12`).
pub const fn round_constant(index: usize) -> u64 {
    (0xf0 - index * 0x10 + index * 0x01) as u64
}

/// Rotation pairs of the linear diffusion layer, one per word.
const ROTATIONS: [(u32, u32); STATE_WORDS] = [(19, 28), (61, 39), (1, 6), (10, 17), (7, 41)];

/// One round: constant addition, substitution layer, linear diffusion layer.
#[inline]
pub fn round(x: &mut [u64; STATE_WORDS], index: usize) {
    x[2] ^= round_constant(index);

    // substitution layer
    x[0] ^= x[4];
    x[4] ^= x[3];
    x[2] ^= x[1];
    let t = [
        !x[0] & x[1],
        !x[1] & x[2],
        !x[2] & x[3],
        !x[3] & x[4],
        !x[4] & x[0],
    ];
    for i in 0..STATE_WORDS {
        x[i] ^= t[(i + 1) % STATE_WORDS];
    }
    x[1] ^= x[0];
    x[0] ^= x[4];
    x[3] ^= x[2];
    x[2] = !x[2];

    // linear diffusion layer
    for (xi, &(a, b)) in x.iter_mut().zip(ROTATIONS.iter()) {
        *xi ^= rotr(*xi, a) ^ rotr(*xi, b);
    }
}

/// Round indices of `p^rounds`: the last `rounds` of the twelve.
pub(crate) fn round_indices(rounds: usize) -> core::ops::Range<usize> {
    debug_assert!(rounds <= MAX_ROUNDS, "at most {} rounds", MAX_ROUNDS);
    MAX_ROUNDS.saturating_sub(rounds)..MAX_ROUNDS
}

/// `p^rounds`, `rounds <= 12`.
pub fn permute(x: &mut [u64; STATE_WORDS], rounds: usize) {
    for index in round_indices(rounds) {
        round(x, index);
    }
}
