//! A stateful hash-based signature scheme.
//!
//! Winternitz one-time keys are derived from a single seed and placed as leaves of a
//! Merkle tree whose root is the public key. Each signature spends one leaf and
//! carries the authentication path from that leaf to the root. Security rests only on
//! the hash function; the price is state: a key pair can sign at most `2^height`
//! times, and a leaf must never be used twice.
//!
//! "Hash-based Digital Signature Schemes", Buchmann, Dahmen, Szydlo
//! <https://doi.org/10.1007/978-3-540-88702-7_3>
//!
#![warn(missing_docs, rust_2018_idioms)]

mod common;
mod errors;
pub mod allocator;
pub mod chain;
pub mod hash;
pub mod keypair;
pub mod merkle;
pub mod ots;
pub mod params;
pub mod scheme;
pub mod signature;
pub mod traits;

pub use common::{Digest, PublicRoot, Seed, DIGEST_SIZE, PUBLIC_KEY_SIZE, SEED_SIZE};
pub use errors::Error;
pub use keypair::KeyPair;
pub use params::{Config, Params, WinternitzParam};
pub use scheme::HashSigScheme;
pub use signature::Signature;
