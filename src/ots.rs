//! Winternitz one-time keys.
//!
//! A one-time key for leaf `i` is a list of secret chain bases derived from the master
//! seed. Its public digest is the hash of all chain tops. A signature reveals, for
//! every digit of the message (plus checksum), the chain value at that digit's height.
use crate::chain::{chain, ChainPosition};
use crate::common::{Digest, Seed};
use crate::errors::Error;
use crate::hash::{message_digest, TAG_SECRET_BASE};
use crate::params::Params;
use crate::traits::HashFunction;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Secret base of chain `chain` of leaf `leaf`.
fn secret_base<H: HashFunction>(seed: &Seed, leaf: u32, chain: u32) -> Digest {
    H::hash(&[
        &[TAG_SECRET_BASE][..],
        seed.as_bytes(),
        &leaf.to_be_bytes(),
        &chain.to_be_bytes(),
    ])
}

/// Decompose a message digest into `params.chain_count()` base-`w` digits: the first
/// `message_digits` bits of the digest, most significant first, followed by the
/// checksum `sum(w - 1 - d)` written big-endian in base `w`.
pub fn digits(params: &Params, digest: &Digest) -> Vec<u32> {
    let w = params.winternitz();
    let log_w = w.log_w() as usize;
    let mask = w.max_digit();

    let mut out = Vec::with_capacity(params.chain_count());
    for i in 0..params.message_digits() {
        let offset = i * log_w;
        let shift = 8 - log_w - offset % 8;
        out.push((u32::from(digest[offset / 8]) >> shift) & mask);
    }

    let mut checksum: u32 = out.iter().map(|d| mask - d).sum();
    let mut checksum_digits = vec![0u32; params.checksum_digits()];
    for slot in checksum_digits.iter_mut().rev() {
        *slot = checksum % w.value();
        checksum /= w.value();
    }
    out.extend(checksum_digits);

    out
}

/// Compress the chain tops into the one-time public digest.
fn compress<H: HashFunction>(tops: &[Digest]) -> Digest {
    let parts: Vec<&[u8]> = tops.iter().map(|t| &t[..]).collect();
    H::hash(&parts)
}

#[derive(Zeroize, ZeroizeOnDrop)]
/// Secret half of a one-time key: the base of every chain. Wiped when dropped.
pub struct OneTimeKey {
    leaf: u32,
    bases: Vec<Digest>,
}

impl OneTimeKey {
    /// Derive the one-time key of `leaf` from the master seed.
    pub fn derive<H: HashFunction>(seed: &Seed, leaf: u32, params: &Params) -> Self {
        let bases = (0..params.chain_count() as u32)
            .map(|c| secret_base::<H>(seed, leaf, c))
            .collect();
        OneTimeKey { leaf, bases }
    }

    /// Leaf this key belongs to.
    pub fn leaf(&self) -> u32 {
        self.leaf
    }

    /// Walk every chain to its top and compress the tops.
    pub fn public_digest<H: HashFunction>(&self, params: &Params) -> Digest {
        let max = params.winternitz().max_digit();
        let tops: Vec<Digest> = self
            .bases
            .iter()
            .enumerate()
            .map(|(c, base)| {
                chain::<H>(ChainPosition::new(self.leaf, c as u32), base, 0, max)
            })
            .collect();
        compress::<H>(&tops)
    }

    /// Reveal, for each digit, the chain value at the digit's height.
    pub(crate) fn sign_digest<H: HashFunction>(&self, digits: &[u32]) -> Vec<Digest> {
        self.bases
            .iter()
            .zip(digits)
            .enumerate()
            .map(|(c, (base, &d))| {
                chain::<H>(ChainPosition::new(self.leaf, c as u32), base, 0, d)
            })
            .collect()
    }
}

/// Sign `message` with a single one-time key.
///
/// # Errors
/// The function fails if `message` is empty.
pub fn sign<H: HashFunction>(
    key: &OneTimeKey,
    params: &Params,
    message: &[u8],
) -> Result<Vec<Digest>, Error> {
    if message.is_empty() {
        return Err(Error::EmptyMessage);
    }
    let digest = message_digest::<H>(message);
    Ok(key.sign_digest::<H>(&digits(params, &digest)))
}

/// Recompute the one-time public digest of `leaf` from a signature on `message`, by
/// finishing every chain. Returns `None` if the shape does not match `params`.
///
/// The result is only meaningful once compared against a trusted digest; a forged
/// signature still yields *a* digest, just not the right one.
pub fn public_key_from_signature<H: HashFunction>(
    leaf: u32,
    params: &Params,
    message: &[u8],
    chain_outputs: &[Digest],
) -> Option<Digest> {
    if message.is_empty() || chain_outputs.len() != params.chain_count() {
        return None;
    }
    let max = params.winternitz().max_digit();
    let digest = message_digest::<H>(message);
    let tops: Vec<Digest> = chain_outputs
        .iter()
        .zip(digits(params, &digest))
        .enumerate()
        .map(|(c, (value, d))| {
            chain::<H>(ChainPosition::new(leaf, c as u32), value, d, max - d)
        })
        .collect();
    Some(compress::<H>(&tops))
}
