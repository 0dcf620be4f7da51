//! Ascon-128, Ascon-128a and Ascon-80pq authenticated encryption.
//!
//! A call runs the duplex through `initialize -> associated data -> plaintext/ciphertext -> finalize`.
//! The ciphertext is the encrypted body followed by the 16-byte tag.

use alloc::vec::Vec;
use core::{fmt, marker::PhantomData};

use zeroize::Zeroize;

use crate::{
    core::{
        codec::{bytes_to_word, mask_from, pad, word_prefix, word_to_bytes, STATE_BYTES},
        state::State,
        trace::{Event, NoTrace, Trace},
    },
    variant::{AeadVariant, AsconAead, VariantParams, MAX_KEY_SIZE, MAX_RATE, NONCE_SIZE, TAG_SIZE},
    Error, Result,
};

pub type Tag = [u8; TAG_SIZE];

/// Compare without stopping at the first difference.
fn equals(s: &[u8], x: &[u8]) -> bool {
    let mut eq = s.len() == x.len();
    for (si, xi) in s.iter().zip(x.iter()) {
        eq = (*si == *xi) && eq;
    }
    eq
}

/// Last rate block: remaining bytes, then `0x80`, then zeros.
fn padded(rest: &[u8]) -> [u8; MAX_RATE] {
    let mut last = [0_u8; MAX_RATE];
    last[..rest.len()].copy_from_slice(rest);
    last[rest.len()] = 0x80;
    last
}

/// Duplex object of a single AEAD call.
struct Duplex<'a, T> {
    state: State,
    params: VariantParams,
    key: &'a [u8],
    trace: &'a mut T,
}

impl<'a, T: Trace> Duplex<'a, T> {
    fn initialize(variant: AeadVariant, key: &'a [u8], nonce: &[u8], trace: &'a mut T) -> Result<Self> {
        let params = variant.params();
        ensure!(
            key.len() == params.key_size_bytes,
            Error::KeyLength(variant.name(), params.key_size_bytes, key.len())
        );
        ensure!(nonce.len() == NONCE_SIZE, Error::NonceLength(NONCE_SIZE, nonce.len()));

        // IV || 0* || K || N
        let key_end = STATE_BYTES - NONCE_SIZE;
        let mut iv = [0_u8; STATE_BYTES];
        iv[0] = params.key_size_bits as u8;
        iv[1] = (params.rate_bytes * 8) as u8;
        iv[2] = params.rounds_a as u8;
        iv[3] = params.rounds_b as u8;
        iv[key_end - key.len()..key_end].copy_from_slice(key);
        iv[key_end..].copy_from_slice(nonce);
        let mut state = State::from_bytes(&iv);
        iv.zeroize();
        trace.trace(Event::InitialValue, &state);

        state.permute(params.rounds_a, &mut *trace);

        // 0* || K
        let mut zero_key = [0_u8; STATE_BYTES];
        zero_key[STATE_BYTES - key.len()..].copy_from_slice(key);
        state.xor_bytes(&zero_key);
        zero_key.zeroize();
        trace.trace(Event::Initialized, &state);

        Ok(Self {
            state,
            params,
            key,
            trace,
        })
    }

    fn absorb_block(&mut self, block: &[u8]) {
        for (xi, word) in self.state.x.iter_mut().zip(block.chunks(8)) {
            *xi ^= bytes_to_word(word);
        }
    }

    /// Emit the rate, truncated to `out.len()`.
    fn emit_block(&self, out: &mut [u8]) {
        for (xi, chunk) in self.state.x.iter().zip(out.chunks_mut(8)) {
            word_prefix(*xi, chunk);
        }
    }

    fn absorb_associated_data(&mut self, associated_data: &[u8]) {
        let rate = self.params.rate_bytes;
        if !associated_data.is_empty() {
            let mut blocks = associated_data.chunks_exact(rate);
            for block in &mut blocks {
                self.absorb_block(block);
                self.state.permute(self.params.rounds_b, &mut *self.trace);
            }
            let last = padded(blocks.remainder());
            self.absorb_block(&last[..rate]);
            self.state.permute(self.params.rounds_b, &mut *self.trace);
        }

        // domain separation
        self.state.x[4] ^= 1;
        self.trace.trace(Event::AssociatedData, &self.state);
    }

    fn encrypt_inplace(&mut self, buffer: &mut [u8]) {
        let rate = self.params.rate_bytes;
        let mut blocks = buffer.chunks_exact_mut(rate);
        for block in &mut blocks {
            self.absorb_block(block);
            self.emit_block(block);
            self.state.permute(self.params.rounds_b, &mut *self.trace);
        }

        // the padded last block is never followed by a permutation
        let rest = blocks.into_remainder();
        let mut last = padded(rest);
        self.absorb_block(&last[..rate]);
        self.emit_block(rest);
        last.zeroize();
        self.trace.trace(Event::Plaintext, &self.state);
    }

    fn decrypt_inplace(&mut self, buffer: &mut [u8]) {
        let rate = self.params.rate_bytes;
        let mut blocks = buffer.chunks_exact_mut(rate);
        for block in &mut blocks {
            for (xi, chunk) in self.state.x.iter_mut().zip(block.chunks_mut(8)) {
                let c = bytes_to_word(chunk);
                word_to_bytes(*xi ^ c, chunk);
                *xi = c;
            }
            self.state.permute(self.params.rounds_b, &mut *self.trace);
        }

        let rest = blocks.into_remainder();
        let n = rest.len();
        let mut last = [0_u8; MAX_RATE];
        last[..n].copy_from_slice(rest);
        for (xi, chunk) in self.state.x.iter().zip(rest.chunks_mut(8)) {
            let c = bytes_to_word(chunk);
            word_prefix(*xi ^ c, chunk);
        }

        // Put the state where the encryptor left it: ciphertext bytes replace the rate up to `n`,
        // then the padding byte, then the untouched remainder of the word.
        let (w, r) = (n / 8, n % 8);
        for (i, xi) in self.state.x.iter_mut().enumerate().take(w) {
            *xi = bytes_to_word(&last[8 * i..8 * i + 8]);
        }
        let c = bytes_to_word(&last[8 * w..8 * w + 8]);
        self.state.x[w] = c ^ (self.state.x[w] & mask_from(r)) ^ pad(r);
        self.trace.trace(Event::Ciphertext, &self.state);
    }

    fn finalize(self) -> Tag {
        let Self {
            mut state,
            params,
            key,
            trace,
        } = self;

        // K || 0*, right after the rate
        let mut padded_key = [0_u8; 24];
        padded_key[..key.len()].copy_from_slice(key);
        let r = params.rate_words();
        for (i, chunk) in padded_key.chunks_exact(8).enumerate() {
            state.x[r + i] ^= bytes_to_word(chunk);
        }
        padded_key.zeroize();

        state.permute(params.rounds_a, &mut *trace);

        let k = key.len();
        state.x[3] ^= bytes_to_word(&key[k - 16..k - 8]);
        state.x[4] ^= bytes_to_word(&key[k - 8..]);
        let mut tag = [0_u8; TAG_SIZE];
        word_to_bytes(state.x[3], &mut tag[..8]);
        word_to_bytes(state.x[4], &mut tag[8..]);
        trace.trace(Event::Finalized, &state);
        tag
    }
}

/// Encrypt `plaintext`, returning the ciphertext body followed by the tag.
pub fn encrypt(
    variant: AeadVariant,
    key: &[u8],
    nonce: &[u8],
    associated_data: &[u8],
    plaintext: &[u8],
) -> Result<Vec<u8>> {
    encrypt_with_trace(variant, key, nonce, associated_data, plaintext, &mut NoTrace)
}

pub fn encrypt_with_trace<T: Trace>(
    variant: AeadVariant,
    key: &[u8],
    nonce: &[u8],
    associated_data: &[u8],
    plaintext: &[u8],
    trace: &mut T,
) -> Result<Vec<u8>> {
    let mut duplex = Duplex::initialize(variant, key, nonce, trace)?;
    duplex.absorb_associated_data(associated_data);
    let mut ciphertext = Vec::with_capacity(plaintext.len() + TAG_SIZE);
    ciphertext.extend_from_slice(plaintext);
    duplex.encrypt_inplace(&mut ciphertext);
    let tag = duplex.finalize();
    ciphertext.extend_from_slice(&tag);
    Ok(ciphertext)
}

/// Decrypt and verify `ciphertext` (body followed by the tag).
///
/// Returns [`Error::BadTag`] and no plaintext at all when the tag does not verify.
pub fn decrypt(
    variant: AeadVariant,
    key: &[u8],
    nonce: &[u8],
    associated_data: &[u8],
    ciphertext: &[u8],
) -> Result<Vec<u8>> {
    decrypt_with_trace(variant, key, nonce, associated_data, ciphertext, &mut NoTrace)
}

pub fn decrypt_with_trace<T: Trace>(
    variant: AeadVariant,
    key: &[u8],
    nonce: &[u8],
    associated_data: &[u8],
    ciphertext: &[u8],
    trace: &mut T,
) -> Result<Vec<u8>> {
    ensure!(
        ciphertext.len() >= TAG_SIZE,
        Error::CiphertextTooShort(TAG_SIZE, ciphertext.len())
    );
    let (body, tag) = ciphertext.split_at(ciphertext.len() - TAG_SIZE);

    let mut duplex = Duplex::initialize(variant, key, nonce, trace)?;
    duplex.absorb_associated_data(associated_data);
    let mut plaintext = body.to_vec();
    duplex.decrypt_inplace(&mut plaintext);
    let expected = duplex.finalize();

    if equals(&expected, tag) {
        Ok(plaintext)
    } else {
        plaintext.zeroize();
        err!(Error::BadTag)
    }
}

/// Encrypt `buffer` in place and return the tag separately.
pub fn encrypt_in_place_detached(
    variant: AeadVariant,
    key: &[u8],
    nonce: &[u8],
    associated_data: &[u8],
    buffer: &mut [u8],
) -> Result<Tag> {
    let mut trace = NoTrace;
    let mut duplex = Duplex::initialize(variant, key, nonce, &mut trace)?;
    duplex.absorb_associated_data(associated_data);
    duplex.encrypt_inplace(buffer);
    Ok(duplex.finalize())
}

/// Decrypt `buffer` in place and verify it against `tag`.
///
/// On [`Error::BadTag`] the buffer is zeroed rather than left holding unauthenticated plaintext.
pub fn decrypt_in_place_detached(
    variant: AeadVariant,
    key: &[u8],
    nonce: &[u8],
    associated_data: &[u8],
    buffer: &mut [u8],
    tag: &[u8],
) -> Result<()> {
    ensure!(tag.len() == TAG_SIZE, Error::LengthMismatch(TAG_SIZE, tag.len()));
    let mut trace = NoTrace;
    let mut duplex = Duplex::initialize(variant, key, nonce, &mut trace)?;
    duplex.absorb_associated_data(associated_data);
    duplex.decrypt_inplace(buffer);
    let expected = duplex.finalize();

    if equals(&expected, tag) {
        Ok(())
    } else {
        buffer.zeroize();
        err!(Error::BadTag)
    }
}

/// An AEAD variant bound to a validated key.
///
/// The key copy is wiped when the cipher is dropped.
pub struct Cipher<V: AsconAead> {
    key: [u8; MAX_KEY_SIZE],
    _variant: PhantomData<V>,
}

impl<V: AsconAead> Cipher<V> {
    pub fn new(key: &[u8]) -> Result<Self> {
        let params = V::VARIANT.params();
        ensure!(
            key.len() == params.key_size_bytes,
            Error::KeyLength(V::VARIANT.name(), params.key_size_bytes, key.len())
        );
        let mut k = [0_u8; MAX_KEY_SIZE];
        k[..key.len()].copy_from_slice(key);
        Ok(Self {
            key: k,
            _variant: PhantomData,
        })
    }

    pub fn variant(&self) -> AeadVariant {
        V::VARIANT
    }

    fn key(&self) -> &[u8] {
        &self.key[..V::VARIANT.params().key_size_bytes]
    }

    pub fn encrypt(&self, nonce: &[u8], associated_data: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
        encrypt(V::VARIANT, self.key(), nonce, associated_data, plaintext)
    }

    pub fn decrypt(&self, nonce: &[u8], associated_data: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
        decrypt(V::VARIANT, self.key(), nonce, associated_data, ciphertext)
    }

    pub fn encrypt_in_place_detached(&self, nonce: &[u8], associated_data: &[u8], buffer: &mut [u8]) -> Result<Tag> {
        encrypt_in_place_detached(V::VARIANT, self.key(), nonce, associated_data, buffer)
    }

    pub fn decrypt_in_place_detached(
        &self,
        nonce: &[u8],
        associated_data: &[u8],
        buffer: &mut [u8],
        tag: &[u8],
    ) -> Result<()> {
        decrypt_in_place_detached(V::VARIANT, self.key(), nonce, associated_data, buffer, tag)
    }
}

impl<V: AsconAead> Clone for Cipher<V> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            _variant: PhantomData,
        }
    }
}

impl<V: AsconAead> Drop for Cipher<V> {
    fn drop(&mut self) {
        self.key.zeroize();
    }
}

impl<V: AsconAead> fmt::Debug for Cipher<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cipher")
            .field("variant", &V::VARIANT)
            .field("key", &"<redacted>")
            .finish()
    }
}
