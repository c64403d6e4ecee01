//! Entry point: key generation and verification under one set of parameters.
use crate::common::{PublicRoot, Seed, SEED_SIZE};
use crate::errors::Error;
use crate::hash::Blake2b256;
use crate::keypair::KeyPair;
use crate::merkle::fold_root;
use crate::ots;
use crate::params::{Config, Params};
use crate::signature::Signature;
use crate::traits::HashFunction;
use rand_core::OsRng;
use rayon::prelude::*;
use std::marker::PhantomData;

/// A parameterised instance of the scheme. Signer and verifier must use the same
/// parameters and hash.
///
/// # Example
/// ```
/// use merkle_ots::{Config, HashSigScheme};
///
/// let scheme = HashSigScheme::new(Config::new(4, 16));
/// let keypair = scheme.generate_keypair();
/// let root = keypair.public_root();
///
/// let message = b"hello, post-quantum world";
/// let signature = keypair.sign(message).unwrap();
///
/// assert_eq!(signature.leaf_index(), 0);
/// assert!(scheme.verify(&root, message, &signature));
/// assert_eq!(keypair.remaining_signatures(), 15);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HashSigScheme<H: HashFunction = Blake2b256> {
    params: Params,
    _hash: PhantomData<fn() -> H>,
}

impl HashSigScheme<Blake2b256> {
    /// Scheme over BLAKE2b-256 with normalised `config`.
    pub fn new(config: Config) -> Self {
        Self::with_hash(config)
    }
}

impl Default for HashSigScheme<Blake2b256> {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl<H: HashFunction> HashSigScheme<H> {
    /// Scheme over the hash `H` with normalised `config`.
    pub fn with_hash(config: Config) -> Self {
        Self::from_params(config.params())
    }

    /// Scheme over already normalised parameters.
    pub fn from_params(params: Params) -> Self {
        HashSigScheme {
            params,
            _hash: PhantomData,
        }
    }

    /// Parameters in use.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Generate a key pair from a fresh random seed.
    pub fn generate_keypair(&self) -> KeyPair<H> {
        self.keypair_from_seed(Seed::generate(&mut OsRng))
    }

    /// Deterministically generate the key pair of `seed`.
    pub fn keypair_from_seed(&self, seed: Seed) -> KeyPair<H> {
        KeyPair::build(seed, self.params, 0).expect("a fresh cursor is within capacity")
    }

    /// Restore a key pair from the output of [`KeyPair::to_bytes`]. The tree is
    /// recomputed and signing resumes at the persisted cursor.
    ///
    /// # Errors
    /// The function fails if
    /// * `bytes.len()` is not of the expected size
    /// * the persisted cursor is beyond this scheme's capacity
    pub fn keypair_from_bytes(&self, bytes: &[u8]) -> Result<KeyPair<H>, Error> {
        if bytes.len() != KeyPair::<H>::SECRET_SIZE {
            return Err(Error::InvalidSecretKeySize(bytes.len()));
        }
        let seed = Seed::from_slice(&bytes[..SEED_SIZE])?;
        let mut u32_bytes = [0u8; 4];
        u32_bytes.copy_from_slice(&bytes[SEED_SIZE..]);
        KeyPair::build(seed, self.params, u32::from_be_bytes(u32_bytes))
    }

    /// Check `signature` on `message` against `root`.
    ///
    /// Malformed input (empty message, leaf outside capacity, wrong number of chain
    /// values or path entries) is rejected before any hashing. Well-formed but invalid
    /// signatures fold to a different root. Both answer `false`.
    pub fn verify(&self, root: &PublicRoot, message: &[u8], signature: &Signature) -> bool {
        let params = &self.params;
        if message.is_empty()
            || signature.leaf_index >= params.capacity()
            || signature.auth_path.len() != params.height() as usize
            || signature.chain_outputs.len() != params.chain_count()
        {
            return false;
        }

        let leaf = match ots::public_key_from_signature::<H>(
            signature.leaf_index,
            params,
            message,
            &signature.chain_outputs,
        ) {
            Some(leaf) => leaf,
            None => return false,
        };

        fold_root::<H>(&leaf, signature.leaf_index, &signature.auth_path) == root.0
    }

    /// Verify many independent signatures in parallel. `results[i]` answers for
    /// `items[i]`.
    pub fn verify_batch(&self, root: &PublicRoot, items: &[(&[u8], &Signature)]) -> Vec<bool> {
        items
            .par_iter()
            .map(|(message, signature)| self.verify(root, message, signature))
            .collect()
    }
}
