use core::fmt;

use zeroize::Zeroize;

use super::{
    codec::{bytes_to_state, state_to_bytes, STATE_BYTES, STATE_WORDS},
    permutation::{round, round_indices},
    trace::{Event, Trace},
};

/// The 320-bit Ascon state.
///
/// Created by an initialization, mutated in place by every permutation, absorb and emit step, read
/// once at finalization and wiped when dropped.
#[derive(Clone, Default)]
pub struct State {
    /// Five 64-bit words, big-endian when serialized.
    pub(crate) x: [u64; STATE_WORDS],
}

impl State {
    /// Load a state from its 40-byte big-endian serialization.
    pub fn from_bytes(bytes: &[u8; STATE_BYTES]) -> Self {
        Self {
            x: bytes_to_state(bytes),
        }
    }

    /// Big-endian serialization of the five words.
    pub fn to_bytes(&self) -> [u8; STATE_BYTES] {
        state_to_bytes(&self.x)
    }

    /// Word `i` of the state.
    pub fn word(&self, i: usize) -> u64 {
        self.x[i]
    }

    /// XOR a 40-byte block into the whole state.
    pub(crate) fn xor_bytes(&mut self, bytes: &[u8; STATE_BYTES]) {
        let mut y = bytes_to_state(bytes);
        for (xi, yi) in self.x.iter_mut().zip(y.iter()) {
            *xi ^= *yi;
        }
        y.zeroize();
    }

    /// Apply `p^rounds`, reporting every round to `trace`.
    pub(crate) fn permute<T: Trace>(&mut self, rounds: usize, trace: &mut T) {
        for index in round_indices(rounds) {
            round(&mut self.x, index);
            trace.trace(Event::Round(index), self);
        }
    }
}

impl Drop for State {
    fn drop(&mut self) {
        self.x.zeroize();
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}|{}|{}|{}|{}]",
            hex::encode(self.x[0].to_be_bytes()),
            hex::encode(self.x[1].to_be_bytes()),
            hex::encode(self.x[2].to_be_bytes()),
            hex::encode(self.x[3].to_be_bytes()),
            hex::encode(self.x[4].to_be_bytes())
        )
    }
}
