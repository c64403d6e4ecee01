//! Traits that define the hash used by every layer of the scheme
use crate::common::Digest;

/// A 256-bit cryptographic hash. Every component (chains, key derivation, the Merkle
/// tree) is generic over this trait, so a signer and verifier agree on the hash at the
/// type level.
///
/// # Example
/// ```
/// use merkle_ots::hash::Blake2b256;
/// use merkle_ots::traits::HashFunction;
///
/// let one_shot = Blake2b256::hash(&[&b"hello, world"[..]]);
/// let split = Blake2b256::hash(&[&b"hello"[..], &b", world"[..]]);
///
/// // Parts are absorbed as one concatenated input.
/// assert_eq!(one_shot, split);
/// ```
pub trait HashFunction: Send + Sync + 'static {
    /// Human readable name, used in logs.
    const NAME: &'static str;

    /// Hash the concatenation of `parts`.
    fn hash(parts: &[&[u8]]) -> Digest;

    /// Hash two digests together, left first.
    fn hash_pair(left: &Digest, right: &Digest) -> Digest {
        Self::hash(&[&left[..], &right[..]])
    }
}
