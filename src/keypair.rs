//! Key pair: the master seed, the Merkle tree of all one-time public digests, and the
//! leaf cursor.
//!
//! Signing takes `&self`. The cursor is advanced by a single atomic compare-and-swap
//! and all hashing afterwards only reads immutable data, so a `KeyPair` can be shared
//! across threads (e.g. behind an `Arc`) and signed with concurrently.
use crate::allocator::{AllocatorState, LeafAllocator};
use crate::common::{Digest, PublicRoot, Seed, SEED_SIZE};
use crate::errors::Error;
use crate::hash::{message_digest, Blake2b256};
use crate::merkle::MerkleTree;
use crate::ots::{self, OneTimeKey};
use crate::params::Params;
use crate::signature::Signature;
use crate::traits::HashFunction;
use rayon::prelude::*;
use std::fmt;
use std::marker::PhantomData;
use zeroize::Zeroizing;

/// A stateful signing key, and the public root that verifies its signatures.
pub struct KeyPair<H: HashFunction = Blake2b256> {
    seed: Seed,
    params: Params,
    tree: MerkleTree,
    allocator: LeafAllocator,
    _hash: PhantomData<fn() -> H>,
}

impl<H: HashFunction> KeyPair<H> {
    /// Size of the serialised secret state: ( seed || leaf cursor (u32 BE) ).
    pub const SECRET_SIZE: usize = SEED_SIZE + 4;

    /// Derive every one-time public digest, build the tree, and resume at `cursor`.
    pub(crate) fn build(seed: Seed, params: Params, cursor: u32) -> Result<Self, Error> {
        let allocator = LeafAllocator::resume(cursor, params.capacity())?;

        let _span = tracing::debug_span!(
            "keygen",
            hash = H::NAME,
            height = params.height(),
            w = params.winternitz().value()
        )
        .entered();

        let leaves: Vec<Digest> = (0..params.leaf_count())
            .into_par_iter()
            .map(|leaf| {
                OneTimeKey::derive::<H>(&seed, leaf, &params).public_digest::<H>(&params)
            })
            .collect();
        let tree = MerkleTree::from_leaves::<H>(&leaves);

        tracing::debug!(
            capacity = params.capacity(),
            cursor,
            chains = params.chain_count(),
            "key pair ready"
        );

        Ok(KeyPair {
            seed,
            params,
            tree,
            allocator,
            _hash: PhantomData,
        })
    }

    /// Sign `message` with the next unused one-time key.
    ///
    /// # Errors
    /// The function fails if
    /// * `message` is empty (no leaf is consumed);
    /// * every leaf has already been used.
    pub fn sign(&self, message: &[u8]) -> Result<Signature, Error> {
        if message.is_empty() {
            return Err(Error::EmptyMessage);
        }
        let leaf = self.allocator.allocate()?;

        let digest = message_digest::<H>(message);
        let digits = ots::digits(&self.params, &digest);
        let key = OneTimeKey::derive::<H>(&self.seed, leaf, &self.params);
        let chain_outputs = key.sign_digest::<H>(&digits);
        let auth_path = self
            .tree
            .auth_path(leaf)
            .expect("allocated leaves lie inside the tree");

        Signature::new(leaf, chain_outputs, auth_path)
    }

    /// Sign several messages in parallel. Results are positional; each message gets
    /// its own leaf, in no particular order.
    pub fn sign_batch(&self, messages: &[&[u8]]) -> Vec<Result<Signature, Error>> {
        messages.par_iter().map(|m| self.sign(m)).collect()
    }

    /// Root of the Merkle tree, which is the public key.
    pub fn public_root(&self) -> PublicRoot {
        PublicRoot(self.tree.root())
    }

    /// Parameters this key pair was generated with.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// The tree over all one-time public digests.
    pub fn tree(&self) -> &MerkleTree {
        &self.tree
    }

    /// Index of the next leaf to be used.
    pub fn leaf_cursor(&self) -> u32 {
        self.allocator.cursor()
    }

    /// Total number of signatures this key pair may produce.
    pub fn capacity(&self) -> u32 {
        self.allocator.capacity()
    }

    /// Signatures left before the key pair is exhausted.
    pub fn remaining_signatures(&self) -> u32 {
        self.allocator.remaining()
    }

    /// Whether every leaf has been used.
    pub fn is_exhausted(&self) -> bool {
        self.allocator_state() == AllocatorState::Exhausted
    }

    /// State of the leaf allocator.
    pub fn allocator_state(&self) -> AllocatorState {
        self.allocator.state()
    }

    /// Convert the secret state into bytes: ( seed || leaf cursor (u32 BE) ).
    ///
    /// The cursor is read at the time of the call; a signature issued concurrently may
    /// not be reflected. Persist only from a quiescent key, and persist before releasing
    /// any signature, or a restored copy will reuse leaves.
    pub fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        let mut data = Zeroizing::new(Vec::with_capacity(Self::SECRET_SIZE));
        data.extend_from_slice(self.seed.as_bytes());
        data.extend_from_slice(&self.leaf_cursor().to_be_bytes());
        data
    }
}

impl<H: HashFunction> fmt::Debug for KeyPair<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("hash", &H::NAME)
            .field("public_root", &self.public_root())
            .field("params", &self.params)
            .field("leaf_cursor", &self.leaf_cursor())
            .finish()
    }
}
