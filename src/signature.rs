//! Signature produced by a key pair
use crate::common::{Digest, DIGEST_SIZE};
use crate::errors::Error;

#[cfg(feature = "serde_enabled")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde_enabled", derive(Serialize, Deserialize))]
/// Structure that represents a signature: the leaf that was spent, the revealed chain
/// values of its one-time key, and the authentication path of that leaf.
pub struct Signature {
    pub(crate) leaf_index: u32,
    #[cfg_attr(
        feature = "serde_enabled",
        serde(with = "serde_with::As::<Vec<serde_with::Bytes>>")
    )]
    pub(crate) chain_outputs: Vec<Digest>,
    #[cfg_attr(
        feature = "serde_enabled",
        serde(with = "serde_with::As::<Vec<serde_with::Bytes>>")
    )]
    pub(crate) auth_path: Vec<Digest>,
}

impl Signature {
    /// Size of the fixed header: leaf index, chain count and path length.
    pub const HEADER_SIZE: usize = 4 + 2 + 1;
    /// Largest number of chain values the header can describe.
    pub const MAX_CHAINS: usize = u16::MAX as usize;
    /// Largest authentication path the header can describe.
    pub const MAX_PATH: usize = u8::MAX as usize;

    /// Assemble a signature from its parts.
    ///
    /// # Errors
    /// The function fails if there are more than `MAX_CHAINS` chain values or more
    /// than `MAX_PATH` path entries.
    pub fn new(
        leaf_index: u32,
        chain_outputs: Vec<Digest>,
        auth_path: Vec<Digest>,
    ) -> Result<Self, Error> {
        if chain_outputs.len() > Self::MAX_CHAINS || auth_path.len() > Self::MAX_PATH {
            return Err(Error::InvalidSignatureShape {
                chains: chain_outputs.len(),
                path: auth_path.len(),
            });
        }
        Ok(Signature {
            leaf_index,
            chain_outputs,
            auth_path,
        })
    }

    /// 0-based index of the leaf whose one-time key produced this signature.
    pub fn leaf_index(&self) -> u32 {
        self.leaf_index
    }

    /// One revealed chain value per message or checksum digit.
    pub fn chain_outputs(&self) -> &[Digest] {
        &self.chain_outputs
    }

    /// Sibling digests from the leaf to the root.
    pub fn auth_path(&self) -> &[Digest] {
        &self.auth_path
    }

    /// Byte size of the encoding of `self`.
    pub fn size(&self) -> usize {
        Self::HEADER_SIZE + (self.chain_outputs.len() + self.auth_path.len()) * DIGEST_SIZE
    }

    /// Convert `Self` into its byte representation:
    /// ( leaf_index (u32 BE) || chain count (u16 BE) || path length (u8) ||
    ///   chain_outputs || auth_path )
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(self.size());
        data.extend_from_slice(&self.leaf_index.to_be_bytes());
        data.extend_from_slice(&(self.chain_outputs.len() as u16).to_be_bytes());
        data.push(self.auth_path.len() as u8);
        for value in self.chain_outputs.iter().chain(self.auth_path.iter()) {
            data.extend_from_slice(value);
        }
        data
    }

    /// Convert the slice of bytes into `Self`.
    ///
    /// Only the layout is checked here; whether the lengths suit a given key is decided
    /// by verification.
    ///
    /// # Errors
    /// The function fails if `bytes.len()` does not match the lengths in the header.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() < Self::HEADER_SIZE {
            return Err(Error::InvalidSignatureSize(bytes.len()));
        }

        let mut u32_bytes = [0u8; 4];
        u32_bytes.copy_from_slice(&bytes[..4]);
        let leaf_index = u32::from_be_bytes(u32_bytes);
        let chains = u16::from_be_bytes([bytes[4], bytes[5]]) as usize;
        let path = bytes[6] as usize;

        let body = &bytes[Self::HEADER_SIZE..];
        if body.len() != (chains + path) * DIGEST_SIZE {
            return Err(Error::InvalidSignatureSize(bytes.len()));
        }

        let mut digests = body.chunks_exact(DIGEST_SIZE).map(|chunk| {
            let mut d = [0u8; DIGEST_SIZE];
            d.copy_from_slice(chunk);
            d
        });
        let chain_outputs = digests.by_ref().take(chains).collect();
        let auth_path = digests.collect();

        Ok(Signature {
            leaf_index,
            chain_outputs,
            auth_path,
        })
    }
}
