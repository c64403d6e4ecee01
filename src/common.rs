//! Structures common to all layers of the scheme
use crate::errors::Error;
use rand_core::{CryptoRng, RngCore};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

#[cfg(feature = "serde_enabled")]
use serde::{Deserialize, Serialize};

/// Output size of the hash, and therefore of every chain value and tree node.
pub const DIGEST_SIZE: usize = 32;

/// Size of the master seed every one-time key is derived from.
pub const SEED_SIZE: usize = 32;

/// Public root size (which equals the size of the output of the hash).
pub const PUBLIC_KEY_SIZE: usize = DIGEST_SIZE;

/// A 256-bit hash output.
pub type Digest = [u8; DIGEST_SIZE];

/// The all-zero digest, used to pad trees whose leaf count is not a power of two.
pub const ZERO_DIGEST: Digest = [0u8; DIGEST_SIZE];

/// Master secret of a key pair. Wiped when dropped.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Seed(pub(crate) [u8; SEED_SIZE]);

impl Seed {
    /// Byte representation size of a `Seed`.
    pub const SIZE: usize = SEED_SIZE;

    /// Draw a fresh seed from a cryptographically secure source.
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Seed {
        let mut out = [0u8; Self::SIZE];
        rng.fill_bytes(&mut out);
        Seed(out)
    }

    /// Creates a `Seed` from a byte array of length `Self::SIZE`.
    pub fn from_bytes(b: [u8; Self::SIZE]) -> Seed {
        Seed(b)
    }

    /// Creates a `Seed` from a slice.
    ///
    /// # Errors
    /// The function fails when `b.len() != Self::SIZE`.
    pub fn from_slice(b: &[u8]) -> Result<Seed, Error> {
        if b.len() != Self::SIZE {
            return Err(Error::InvalidSeedSize(b.len()));
        }
        let mut out = [0u8; Self::SIZE];
        out.copy_from_slice(b);
        Ok(Seed(out))
    }

    /// Return `Self` as its byte representation.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seed(..)")
    }
}

/// Public key of a key pair: the root of its Merkle tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde_enabled", derive(Serialize, Deserialize))]
pub struct PublicRoot(pub(crate) Digest);

impl PublicRoot {
    /// Return `Self` as its byte representation.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Tries to convert a slice of `bytes` as `Self`.
    ///
    /// # Errors
    /// This function returns an error if the length of `bytes` is not equal to
    /// `PUBLIC_KEY_SIZE`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() == PUBLIC_KEY_SIZE {
            let mut v = [0u8; PUBLIC_KEY_SIZE];
            v.copy_from_slice(bytes);
            Ok(PublicRoot(v))
        } else {
            Err(Error::InvalidPublicKeySize(bytes.len()))
        }
    }

    /// Return the root as a digest.
    pub fn to_digest(&self) -> Digest {
        self.0
    }
}

impl From<Digest> for PublicRoot {
    fn from(digest: Digest) -> Self {
        PublicRoot(digest)
    }
}

impl AsRef<[u8]> for PublicRoot {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for Seed {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
