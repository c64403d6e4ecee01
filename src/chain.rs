//! Winternitz hash chains.
//!
//! Every step hashes `(TAG_CHAIN || leaf || chain || step || value)`, so the same value
//! sitting at two different positions, in two chains, or in two leaves is never fed
//! through the same function twice.
use crate::common::Digest;
use crate::hash::TAG_CHAIN;
use crate::traits::HashFunction;

/// Location of a chain within a key pair: which leaf and which chain of that leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChainPosition {
    /// 0-based leaf index.
    pub leaf: u32,
    /// 0-based chain index within the one-time key.
    pub chain: u32,
}

impl ChainPosition {
    /// Position of chain `chain` of leaf `leaf`.
    pub fn new(leaf: u32, chain: u32) -> Self {
        ChainPosition { leaf, chain }
    }
}

/// One step of the chain: the value at `step` becomes the value at `step + 1`.
fn step<H: HashFunction>(position: ChainPosition, step: u32, value: &Digest) -> Digest {
    H::hash(&[
        &[TAG_CHAIN][..],
        &position.leaf.to_be_bytes(),
        &position.chain.to_be_bytes(),
        &step.to_be_bytes(),
        value,
    ])
}

/// Walk `steps` steps forward from `value`, which sits at height `start` of the chain.
///
/// Signer and verifier both go through here: the signer walks from the secret base
/// (`start = 0`), the verifier from a revealed midpoint (`start = digit`). The
/// result only depends on the absolute heights visited, so both land on the same top.
/// Heights stop at `u32::MAX`.
pub(crate) fn chain<H: HashFunction>(
    position: ChainPosition,
    value: &Digest,
    start: u32,
    steps: u32,
) -> Digest {
    let mut out = *value;
    for s in start..start.saturating_add(steps) {
        out = step::<H>(position, s, &out);
    }
    out
}
