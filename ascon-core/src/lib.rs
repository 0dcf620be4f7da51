//! Ascon v1.2: the 320-bit permutation, the Ascon-128/128a/80pq authenticated ciphers and the
//! Ascon-Hash/Hasha/Xof/Xofa hash functions.
//!
//! Every operation is a pure function of its inputs. Each call owns its own [`State`]; nothing is
//! shared between calls, so independent calls may run in parallel.
#![no_std]

// Ascon requires heap allocation for ciphertext/plaintext/digest vectors
#[macro_use]
extern crate alloc;

// The printing trace hook and the error location log need std
#[cfg(feature = "std")]
#[macro_use]
extern crate std;

// Stub used when std is not available.
// Macros are exported at crate root level, that's why it's defined here.
#[cfg(not(feature = "std"))]
#[macro_export]
macro_rules! println {
    () => {{}};
    ($($arg:tt)*) => {{}};
}

#[cfg(feature = "std")]
pub use std::println;

#[cfg(not(feature = "err-location-log"))]
pub const LOCATION_LOG: bool = false;

#[cfg(feature = "err-location-log")]
pub const LOCATION_LOG: bool = true;

#[macro_use]
pub mod error;
pub use error::{Error, Result};

mod core;
pub use crate::core::{
    codec,
    permutation,
    state::State,
    trace::{Event, NoTrace, Trace},
};
#[cfg(feature = "std")]
pub use crate::core::trace::PrintTrace;

pub mod variant;
pub use variant::{
    AeadVariant, Ascon128, Ascon128a, Ascon80pq, AsconAead, AsconHash, AsconHasha, AsconHashing, AsconXof,
    AsconXofa, HashVariant, VariantParams,
};

pub mod aead;
pub use aead::{decrypt, encrypt, Cipher, Tag};

pub mod hash;
pub use hash::{hash, Hasher, XofReader};

pub use digest;

// -- AEAD Aliases --
pub type Ascon128Cipher = aead::Cipher<Ascon128>;
pub type Ascon128aCipher = aead::Cipher<Ascon128a>;
pub type Ascon80pqCipher = aead::Cipher<Ascon80pq>;

// -- Hash Aliases --
pub type AsconHasher = hash::Hasher<AsconHash>;
pub type AsconHashaHasher = hash::Hasher<AsconHasha>;
pub type AsconXofHasher = hash::Hasher<AsconXof>;
pub type AsconXofaHasher = hash::Hasher<AsconXofa>;
