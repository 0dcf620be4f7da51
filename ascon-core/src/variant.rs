//! Parameter sets of the Ascon family.
//!
//! Variants can be chosen at runtime ([`AeadVariant`], [`HashVariant`], parsed from their published
//! names) or at compile time through the marker types used by [`crate::Cipher`] and [`crate::Hasher`].

use alloc::string::ToString;
use core::{fmt, str::FromStr};

use crate::{Error, Result};

/// Nonce size of every AEAD variant in bytes.
pub const NONCE_SIZE: usize = 16;

/// Tag size of every AEAD variant in bytes.
pub const TAG_SIZE: usize = 16;

/// Largest rate of the family in bytes.
pub const MAX_RATE: usize = 16;

/// Largest key of the family in bytes.
pub const MAX_KEY_SIZE: usize = 20;

/// Rounds of the initialization and finalization permutation.
pub const ROUNDS_A: usize = 12;

/// Output size of the fixed-length hash variants in bytes.
pub const HASH_SIZE: usize = 32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VariantParams {
    pub key_size_bits: usize,
    pub key_size_bytes: usize,
    /// Bytes absorbed or emitted per block; the rest of the state is the capacity.
    pub rate_bytes: usize,
    pub rounds_a: usize,
    pub rounds_b: usize,
}

impl VariantParams {
    const fn new(key_size_bytes: usize, rate_bytes: usize, rounds_b: usize) -> Self {
        Self {
            key_size_bits: key_size_bytes * 8,
            key_size_bytes,
            rate_bytes,
            rounds_a: ROUNDS_A,
            rounds_b,
        }
    }

    /// Number of state words covered by the rate.
    pub const fn rate_words(&self) -> usize {
        self.rate_bytes / 8
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AeadVariant {
    Ascon128,
    Ascon128a,
    Ascon80pq,
}

impl AeadVariant {
    pub const ALL: [AeadVariant; 3] = [AeadVariant::Ascon128, AeadVariant::Ascon128a, AeadVariant::Ascon80pq];

    pub const fn name(self) -> &'static str {
        match self {
            AeadVariant::Ascon128 => "Ascon-128",
            AeadVariant::Ascon128a => "Ascon-128a",
            AeadVariant::Ascon80pq => "Ascon-80pq",
        }
    }

    pub const fn params(self) -> VariantParams {
        match self {
            AeadVariant::Ascon128 => VariantParams::new(16, 8, 6),
            AeadVariant::Ascon128a => VariantParams::new(16, 16, 8),
            AeadVariant::Ascon80pq => VariantParams::new(20, 8, 6),
        }
    }
}

impl FromStr for AeadVariant {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        match Self::ALL.iter().find(|v| v.name() == name) {
            Some(v) => Ok(*v),
            None => err!(Error::UnknownVariant("AEAD", name.to_string())),
        }
    }
}

impl fmt::Display for AeadVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HashVariant {
    AsconHash,
    AsconHasha,
    AsconXof,
    AsconXofa,
}

impl HashVariant {
    pub const ALL: [HashVariant; 4] = [
        HashVariant::AsconHash,
        HashVariant::AsconHasha,
        HashVariant::AsconXof,
        HashVariant::AsconXofa,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            HashVariant::AsconHash => "Ascon-Hash",
            HashVariant::AsconHasha => "Ascon-Hasha",
            HashVariant::AsconXof => "Ascon-Xof",
            HashVariant::AsconXofa => "Ascon-Xofa",
        }
    }

    /// Hashing is keyless and always absorbs 8 bytes per block.
    pub const fn params(self) -> VariantParams {
        match self {
            HashVariant::AsconHash | HashVariant::AsconXof => VariantParams::new(0, 8, 12),
            HashVariant::AsconHasha | HashVariant::AsconXofa => VariantParams::new(0, 8, 8),
        }
    }

    /// Output length the variant is restricted to, `None` for the extendable variants.
    pub const fn output_len(self) -> Option<usize> {
        match self {
            HashVariant::AsconHash | HashVariant::AsconHasha => Some(HASH_SIZE),
            HashVariant::AsconXof | HashVariant::AsconXofa => None,
        }
    }

    /// Output length in bits encoded into the initial value, 0 for arbitrary length.
    pub(crate) const fn tag_spec(self) -> u32 {
        match self.output_len() {
            Some(n) => (n * 8) as u32,
            None => 0,
        }
    }
}

impl FromStr for HashVariant {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        match Self::ALL.iter().find(|v| v.name() == name) {
            Some(v) => Ok(*v),
            None => err!(Error::UnknownVariant("hash", name.to_string())),
        }
    }
}

impl fmt::Display for HashVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Compile-time selection of an AEAD variant.
pub trait AsconAead {
    const VARIANT: AeadVariant;
}

/// Compile-time selection of a hash variant.
pub trait AsconHashing {
    const VARIANT: HashVariant;
}

/// Hash variants with a fixed 32-byte output.
pub trait FixedOutputHashing: AsconHashing {}

/// Hash variants with an arbitrary-length output.
pub trait ExtendableOutputHashing: AsconHashing {}

/// Ascon-128: 16-byte key, 8-byte rate, `p^6` between blocks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ascon128;
impl AsconAead for Ascon128 {
    const VARIANT: AeadVariant = AeadVariant::Ascon128;
}

/// Ascon-128a: 16-byte key, 16-byte rate, `p^8` between blocks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ascon128a;
impl AsconAead for Ascon128a {
    const VARIANT: AeadVariant = AeadVariant::Ascon128a;
}

/// Ascon-80pq: 20-byte key, 8-byte rate, `p^6` between blocks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ascon80pq;
impl AsconAead for Ascon80pq {
    const VARIANT: AeadVariant = AeadVariant::Ascon80pq;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AsconHash;
impl AsconHashing for AsconHash {
    const VARIANT: HashVariant = HashVariant::AsconHash;
}
impl FixedOutputHashing for AsconHash {}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AsconHasha;
impl AsconHashing for AsconHasha {
    const VARIANT: HashVariant = HashVariant::AsconHasha;
}
impl FixedOutputHashing for AsconHasha {}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AsconXof;
impl AsconHashing for AsconXof {
    const VARIANT: HashVariant = HashVariant::AsconXof;
}
impl ExtendableOutputHashing for AsconXof {}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AsconXofa;
impl AsconHashing for AsconXofa {
    const VARIANT: HashVariant = HashVariant::AsconXofa;
}
impl ExtendableOutputHashing for AsconXofa {}
