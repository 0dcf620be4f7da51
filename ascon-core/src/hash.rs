//! Ascon-Hash, Ascon-Hasha, Ascon-Xof and Ascon-Xofa.
//!
//! The one-shot [`hash`] covers every variant. [`Hasher`] absorbs incrementally and plugs into the
//! `digest` traits: the fixed variants implement [`Digest`](digest::Digest), the extendable ones
//! [`ExtendableOutput`] with an [`XofReader`].

use alloc::vec::Vec;
use core::{cmp::min, fmt, marker::PhantomData};

use digest::{
    consts::{U32, U8},
    BlockInput, ExtendableOutput, FixedOutput, Reset, Update,
};
use generic_array::GenericArray;

use crate::{
    core::{
        codec::{bytes_to_word, pad, STATE_BYTES},
        state::State,
        trace::{Event, NoTrace, Trace},
    },
    variant::{AsconHashing, ExtendableOutputHashing, FixedOutputHashing, HashVariant, VariantParams, HASH_SIZE},
    Error, Result,
};

/// Rate of every hash variant in bytes.
const RATE: usize = 8;

/// Sponge of a single hash computation.
///
/// `pos` is the byte offset into the rate word: the next byte to absorb while absorbing, the next byte
/// to emit once finished.
#[derive(Clone)]
struct Sponge {
    state: State,
    params: VariantParams,
    pos: usize,
}

impl Sponge {
    fn new<T: Trace>(variant: HashVariant, trace: &mut T) -> Self {
        let params = variant.params();

        // IV || tag length || 0*
        let mut iv = [0_u8; STATE_BYTES];
        iv[1] = (params.rate_bytes * 8) as u8;
        iv[2] = params.rounds_a as u8;
        iv[3] = (params.rounds_a - params.rounds_b) as u8;
        iv[4..8].copy_from_slice(&variant.tag_spec().to_be_bytes());
        let mut state = State::from_bytes(&iv);
        trace.trace(Event::InitialValue, &state);

        state.permute(params.rounds_a, &mut *trace);
        trace.trace(Event::Initialized, &state);

        Self { state, params, pos: 0 }
    }

    fn absorb<T: Trace>(&mut self, message: &[u8], trace: &mut T) {
        let mut message = message;
        while !message.is_empty() {
            let n = min(RATE - self.pos, message.len());
            self.state.x[0] ^= bytes_to_word(&message[..n]) >> (8 * self.pos);
            self.pos += n;
            message = &message[n..];
            if self.pos == RATE {
                self.state.permute(self.params.rounds_b, &mut *trace);
                self.pos = 0;
            }
        }
    }

    /// Pad the last block and switch to squeezing.
    fn finish<T: Trace>(&mut self, trace: &mut T) {
        self.state.x[0] ^= pad(self.pos);
        self.state.permute(self.params.rounds_a, &mut *trace);
        self.pos = 0;
        trace.trace(Event::Absorbed, &self.state);
    }

    fn squeeze<T: Trace>(&mut self, out: &mut [u8], trace: &mut T) {
        let mut done = 0;
        while done < out.len() {
            if self.pos == RATE {
                self.state.permute(self.params.rounds_b, &mut *trace);
                self.pos = 0;
            }
            if self.pos == 0 {
                trace.trace(Event::Squeezed, &self.state);
            }
            let n = min(RATE - self.pos, out.len() - done);
            let word = self.state.x[0].to_be_bytes();
            out[done..done + n].copy_from_slice(&word[self.pos..self.pos + n]);
            self.pos += n;
            done += n;
        }
    }
}

/// Hash `message` to `output_len` bytes.
///
/// Ascon-Hash and Ascon-Hasha only produce 32 bytes; any other length is rejected. The extendable
/// variants produce any length, and shorter outputs are prefixes of longer ones.
pub fn hash(variant: HashVariant, message: &[u8], output_len: usize) -> Result<Vec<u8>> {
    hash_with_trace(variant, message, output_len, &mut NoTrace)
}

pub fn hash_with_trace<T: Trace>(
    variant: HashVariant,
    message: &[u8],
    output_len: usize,
    trace: &mut T,
) -> Result<Vec<u8>> {
    if let Some(fixed) = variant.output_len() {
        ensure!(
            output_len == fixed,
            Error::OutputLength(variant.name(), fixed, output_len)
        );
    }

    let mut sponge = Sponge::new(variant, &mut *trace);
    sponge.absorb(message, &mut *trace);
    sponge.finish(&mut *trace);
    let mut output = vec![0_u8; output_len];
    sponge.squeeze(&mut output, trace);
    Ok(output)
}

/// Incremental hashing with the variant fixed at compile time.
pub struct Hasher<V> {
    sponge: Sponge,
    _variant: PhantomData<V>,
}

impl<V: AsconHashing> Hasher<V> {
    pub fn new() -> Self {
        Self {
            sponge: Sponge::new(V::VARIANT, &mut NoTrace),
            _variant: PhantomData,
        }
    }

    pub fn variant(&self) -> HashVariant {
        V::VARIANT
    }

    /// Absorb more of the message; splitting the message differently yields the same digest.
    pub fn update(&mut self, data: impl AsRef<[u8]>) {
        self.sponge.absorb(data.as_ref(), &mut NoTrace);
    }

    fn finish(mut sponge: Sponge) -> XofReader {
        sponge.finish(&mut NoTrace);
        XofReader { sponge }
    }
}

impl<V: FixedOutputHashing> Hasher<V> {
    /// Consume the hasher and return the 32-byte digest.
    pub fn finish_fixed(self) -> [u8; HASH_SIZE] {
        let mut out = [0_u8; HASH_SIZE];
        Self::finish(self.sponge).read_into(&mut out);
        out
    }
}

impl<V: AsconHashing> Default for Hasher<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Clone for Hasher<V> {
    fn clone(&self) -> Self {
        Self {
            sponge: self.sponge.clone(),
            _variant: PhantomData,
        }
    }
}

impl<V: AsconHashing> fmt::Debug for Hasher<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:?} @{}", V::VARIANT, self.sponge.state, self.sponge.pos)
    }
}

impl<V: AsconHashing> Update for Hasher<V> {
    fn update(&mut self, data: impl AsRef<[u8]>) {
        Hasher::update(self, data);
    }
}

impl<V: AsconHashing> Reset for Hasher<V> {
    fn reset(&mut self) {
        *self = Self::new();
    }
}

impl<V: AsconHashing> BlockInput for Hasher<V> {
    type BlockSize = U8;
}

impl<V: FixedOutputHashing> FixedOutput for Hasher<V> {
    type OutputSize = U32;

    fn finalize_into(self, out: &mut GenericArray<u8, Self::OutputSize>) {
        Self::finish(self.sponge).read_into(out);
    }

    fn finalize_into_reset(&mut self, out: &mut GenericArray<u8, Self::OutputSize>) {
        let sponge = core::mem::replace(&mut self.sponge, Sponge::new(V::VARIANT, &mut NoTrace));
        Self::finish(sponge).read_into(out);
    }
}

impl<V: ExtendableOutputHashing> ExtendableOutput for Hasher<V> {
    type Reader = XofReader;

    fn finalize_xof(self) -> XofReader {
        Self::finish(self.sponge)
    }

    fn finalize_xof_reset(&mut self) -> XofReader {
        let sponge = core::mem::replace(&mut self.sponge, Sponge::new(V::VARIANT, &mut NoTrace));
        Self::finish(sponge)
    }
}

/// Squeezing half of a finished hash; successive reads continue the output stream.
#[derive(Clone)]
pub struct XofReader {
    sponge: Sponge,
}

impl XofReader {
    fn read_into(&mut self, out: &mut [u8]) {
        self.sponge.squeeze(out, &mut NoTrace);
    }
}

impl digest::XofReader for XofReader {
    fn read(&mut self, buffer: &mut [u8]) {
        self.read_into(buffer);
    }
}

impl fmt::Debug for XofReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "XofReader @{}", self.sponge.pos)
    }
}
