//! Errors raised while generating keys, signing, or decoding
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Enum of errors associated with stateful hash-based signatures.
///
/// A cryptographically invalid signature is never an `Error`: verification only
/// ever answers `true` or `false`.
pub enum Error {
    /// The message to sign was empty.
    #[error("message must not be empty")]
    EmptyMessage,
    /// Every leaf of the key has been consumed. This is fatal to the key pair, and
    /// no leaf was spent by the failing call.
    #[error("key exhausted: all {capacity} one-time keys have been used")]
    KeyExhausted {
        /// Number of signatures the key pair was allowed to produce.
        capacity: u32,
    },
    /// Error occurs when the size of the seed is not the expected.
    #[error("invalid seed size: {0}")]
    InvalidSeedSize(usize),
    /// Error occurs when the size of the public root is not the expected.
    #[error("invalid public key size: {0}")]
    InvalidPublicKeySize(usize),
    /// Error occurs when the size of the serialised secret state is not the expected.
    #[error("invalid secret key size: {0}")]
    InvalidSecretKeySize(usize),
    /// Error occurs when the size of the signature encoding does not match its header.
    #[error("invalid signature size: {0}")]
    InvalidSignatureSize(usize),
    /// A signature has more chain values or path entries than its encoding can hold.
    #[error("signature with {chains} chain values and {path} path entries cannot be encoded")]
    InvalidSignatureShape {
        /// Number of chain values given.
        chains: usize,
        /// Number of authentication path entries given.
        path: usize,
    },
    /// A restored leaf cursor lies beyond the capacity of the key.
    #[error("leaf cursor {cursor} exceeds capacity {capacity}")]
    InvalidLeafCursor {
        /// Cursor found in the restored state.
        cursor: u32,
        /// Capacity of the key it was restored into.
        capacity: u32,
    },
}
