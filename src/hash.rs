//! The in-core hash, and the domain tags that keep its different uses apart.
use crate::common::{Digest, DIGEST_SIZE};
use crate::traits::HashFunction;
use blake2::digest::{Update, VariableOutput};
use blake2::VarBlake2b;

/// Tag prefixed to every step of a Winternitz chain.
pub(crate) const TAG_CHAIN: u8 = 0x00;
/// Tag prefixed when deriving a secret chain base from the master seed.
pub(crate) const TAG_SECRET_BASE: u8 = 0x01;
/// Tag prefixed when compressing a message into the digest that gets signed.
pub(crate) const TAG_MESSAGE: u8 = 0x02;

/// BLAKE2b with a 32-byte output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Blake2b256;

impl HashFunction for Blake2b256 {
    const NAME: &'static str = "blake2b-256";

    fn hash(parts: &[&[u8]]) -> Digest {
        let mut h = VarBlake2b::new(DIGEST_SIZE).expect("valid size");
        for part in parts {
            h.update(part);
        }

        let mut out = [0u8; DIGEST_SIZE];
        h.finalize_variable(|res| out.copy_from_slice(res));
        out
    }
}

/// Digest of a message, as consumed by the digit decomposition.
pub(crate) fn message_digest<H: HashFunction>(message: &[u8]) -> Digest {
    H::hash(&[&[TAG_MESSAGE][..], message])
}
