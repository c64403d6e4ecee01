//! Scheme parameters.
//!
//! A [`Config`] is what callers hand in; it is normalised once into [`Params`], which
//! carries every derived quantity (capacity, digit counts, chain count) so that signer
//! and verifier read the same numbers from the same place.

#[cfg(feature = "serde_enabled")]
use serde::{Deserialize, Serialize};

/// Largest supported tree height (2^20 one-time keys).
pub const MAX_HEIGHT: u32 = 20;

/// Height used by `Config::default()`.
pub const DEFAULT_HEIGHT: u32 = 10;

/// Digit base of the Winternitz chains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde_enabled", derive(Serialize, Deserialize))]
pub enum WinternitzParam {
    /// Base 4: twice the chains of `W16`, each only three steps long.
    W4,
    /// Base 16: fewer chains, fifteen steps each.
    W16,
}

impl WinternitzParam {
    /// Map a raw configuration value to a supported base.
    pub fn from_value(w: u32) -> Option<Self> {
        match w {
            4 => Some(WinternitzParam::W4),
            16 => Some(WinternitzParam::W16),
            _ => None,
        }
    }

    /// The base `w` itself.
    pub fn value(self) -> u32 {
        match self {
            WinternitzParam::W4 => 4,
            WinternitzParam::W16 => 16,
        }
    }

    /// Bits carried by one digit, `log2(w)`.
    pub fn log_w(self) -> u32 {
        match self {
            WinternitzParam::W4 => 2,
            WinternitzParam::W16 => 4,
        }
    }

    /// Largest digit value, which is also the full length of a chain.
    pub fn max_digit(self) -> u32 {
        self.value() - 1
    }

    /// Number of digits taken from the message digest.
    ///
    /// For `W16` only the first 244 bits of the digest are encoded, which keeps the
    /// one-time signature at 64 chains once the three checksum digits are added.
    pub fn message_digits(self) -> usize {
        match self {
            WinternitzParam::W4 => 128,
            WinternitzParam::W16 => 61,
        }
    }

    /// Number of base-`w` digits needed to hold the largest possible checksum,
    /// `message_digits * (w - 1)`.
    pub fn checksum_digits(self) -> usize {
        let w = u64::from(self.value());
        let mut remaining = self.message_digits() as u64 * (w - 1);
        let mut digits = 0;
        while remaining > 0 {
            remaining /= w;
            digits += 1;
        }
        digits
    }
}

impl Default for WinternitzParam {
    fn default() -> Self {
        WinternitzParam::W16
    }
}

/// User facing configuration. Out of range values are normalised rather than rejected,
/// see [`Config::params`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde_enabled", derive(Serialize, Deserialize))]
pub struct Config {
    /// Tree height; the tree holds `2^height` one-time keys. Height 0 is a single-leaf
    /// tree, not a request for `DEFAULT_HEIGHT`.
    pub height: u32,
    /// Winternitz base, 4 or 16.
    pub winternitz: u32,
    /// Optional cap on signatures, reserving the remaining leaves.
    pub max_signatures: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            height: DEFAULT_HEIGHT,
            winternitz: 16,
            max_signatures: None,
        }
    }
}

impl Config {
    /// Configuration with the given height and Winternitz base, and no signature cap.
    pub fn new(height: u32, winternitz: u32) -> Self {
        Config {
            height,
            winternitz,
            max_signatures: None,
        }
    }

    /// Cap the number of signatures below the tree capacity.
    pub fn with_max_signatures(mut self, max_signatures: u32) -> Self {
        self.max_signatures = Some(max_signatures);
        self
    }

    /// Normalise into [`Params`]:
    /// * a height above `MAX_HEIGHT` is clamped to `MAX_HEIGHT` (height 0 is the
    ///   single-leaf tree);
    /// * a Winternitz base other than 4 or 16 becomes 16;
    /// * a signature cap of 0, or above `2^height`, becomes `2^height`.
    pub fn params(&self) -> Params {
        let height = if self.height > MAX_HEIGHT {
            tracing::warn!(
                requested = self.height,
                clamped = MAX_HEIGHT,
                "tree height out of range, clamping"
            );
            MAX_HEIGHT
        } else {
            self.height
        };

        let winternitz = WinternitzParam::from_value(self.winternitz).unwrap_or_else(|| {
            tracing::warn!(
                requested = self.winternitz,
                "unsupported winternitz parameter, using w=16"
            );
            WinternitzParam::W16
        });

        let leaf_count = 1u32 << height;
        let capacity = match self.max_signatures {
            Some(max) if max > 0 && max <= leaf_count => max,
            Some(max) => {
                tracing::warn!(
                    requested = max,
                    capacity = leaf_count,
                    "signature cap out of range, using full tree capacity"
                );
                leaf_count
            }
            None => leaf_count,
        };

        Params::derive(height, winternitz, capacity)
    }
}

/// Normalised parameters, with all chain arithmetic computed once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    height: u32,
    winternitz: WinternitzParam,
    capacity: u32,
    message_digits: usize,
    checksum_digits: usize,
}

impl Params {
    fn derive(height: u32, winternitz: WinternitzParam, capacity: u32) -> Self {
        Params {
            height,
            winternitz,
            capacity,
            message_digits: winternitz.message_digits(),
            checksum_digits: winternitz.checksum_digits(),
        }
    }

    /// Tree height, which is also the length of every authentication path.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Digit base of the chains.
    pub fn winternitz(&self) -> WinternitzParam {
        self.winternitz
    }

    /// Number of leaves in the tree, `2^height`.
    pub fn leaf_count(&self) -> u32 {
        1 << self.height
    }

    /// Number of signatures a key pair may produce; never above `leaf_count`.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Digits taken from the message digest.
    pub fn message_digits(&self) -> usize {
        self.message_digits
    }

    /// Digits encoding the checksum.
    pub fn checksum_digits(&self) -> usize {
        self.checksum_digits
    }

    /// Total number of chains, i.e. of values in a one-time signature.
    pub fn chain_count(&self) -> usize {
        self.message_digits + self.checksum_digits
    }
}

impl Default for Params {
    fn default() -> Self {
        Config::default().params()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn chain_counts() {
        let p16 = Config::new(4, 16).params();
        assert_eq!(p16.checksum_digits(), 3);
        assert_eq!(p16.chain_count(), 64);

        let p4 = Config::new(3, 4).params();
        assert_eq!(p4.message_digits(), 128);
        assert_eq!(p4.checksum_digits(), 5);
        assert_eq!(p4.chain_count(), 133);
    }

    #[test]
    fn checksum_fits_its_digits() {
        for w in [WinternitzParam::W4, WinternitzParam::W16].iter() {
            let max_checksum = w.message_digits() as u64 * u64::from(w.max_digit());
            let room = u64::from(w.value()).pow(w.checksum_digits() as u32);
            assert!(max_checksum < room);
            assert!(max_checksum >= room / u64::from(w.value()));
        }
    }

    #[test]
    fn normalisation() {
        let p = Config::new(25, 4).params();
        assert_eq!(p.height(), MAX_HEIGHT);
        assert_eq!(p.winternitz(), WinternitzParam::W4);

        let p = Config::new(3, 99).params();
        assert_eq!(p.winternitz(), WinternitzParam::W16);
        assert_eq!(p.capacity(), 8);

        let p = Config::new(0, 16).params();
        assert_eq!(p.height(), 0);
        assert_eq!(p.leaf_count(), 1);
        assert_eq!(p.capacity(), 1);
    }

    #[test]
    fn signature_cap() {
        let p = Config::new(4, 16).with_max_signatures(5).params();
        assert_eq!(p.capacity(), 5);
        assert_eq!(p.leaf_count(), 16);

        assert_eq!(Config::new(4, 16).with_max_signatures(0).params().capacity(), 16);
        assert_eq!(Config::new(4, 16).with_max_signatures(17).params().capacity(), 16);
    }

    #[test]
    fn default_config() {
        let p = Params::default();
        assert_eq!(p.height(), DEFAULT_HEIGHT);
        assert_eq!(p.winternitz(), WinternitzParam::W16);
        assert_eq!(p.capacity(), 1 << DEFAULT_HEIGHT);
    }
}
