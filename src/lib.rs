//! Ascon v1.2 lightweight cryptography.
//!
//! Runtime-selected variants go through [`encrypt`], [`decrypt`] and [`hash`]; compile-time ones
//! through the [`Cipher`] and [`Hasher`] aliases below.
#![no_std]

/// Permutation, AEAD and hash pipelines.
pub use ascon_core;

pub use ascon_core::{
    aead::{decrypt_in_place_detached, encrypt_in_place_detached},
    decrypt,
    digest,
    encrypt,
    hash,
    AeadVariant,
    Ascon128Cipher,
    Ascon128aCipher,
    Ascon80pqCipher,
    AsconHashaHasher,
    AsconHasher,
    AsconXofHasher,
    AsconXofaHasher,
    Cipher,
    Error,
    HashVariant,
    Hasher,
    Result,
    Tag,
};
