//! Hash infrastructure for nodes in the Merkle tree.

use std::fmt;
use std::hash::Hasher;

use sha2::Digest as _;

/// Output of every supported algorithm: a 32-byte digest.
pub type Digest = [u8; 32];

/// Hashing algorithm type.
///
/// Algorithm conforms standard [`Hasher`] trait and provides methods to return
/// full length hash and reset current state. A fresh instance is obtained with
/// [`Default`] wherever one is needed, so implementations must start out in
/// the reset state.
pub trait Algorithm: Hasher + Default + Clone {
    /// Returns the hash value for the data stream written so far.
    fn hash(&mut self) -> Digest;

    /// Reset Hasher state.
    fn reset(&mut self);

    /// Returns the digest of `data` alone.
    fn digest(&mut self, data: &[u8]) -> Digest {
        self.reset();
        self.write(data);
        self.hash()
    }

    /// Returns the value of an interior node: `HASH(left || right)`.
    ///
    /// The concatenation always goes into a newly allocated buffer; neither
    /// child's storage is written through or extended.
    fn node(&mut self, left: &[u8], right: &[u8]) -> Digest {
        let mut combined = Vec::with_capacity(left.len() + right.len());
        combined.extend_from_slice(left);
        combined.extend_from_slice(right);
        self.digest(&combined)
    }
}

/// SHA-256, the default node algorithm.
#[derive(Clone, Default)]
pub struct Sha256Algorithm(sha2::Sha256);

impl Sha256Algorithm {
    /// Creates a new algorithm instance in the reset state.
    pub fn new() -> Sha256Algorithm {
        Sha256Algorithm::default()
    }
}

impl fmt::Debug for Sha256Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Sha256Algorithm")
    }
}

impl Hasher for Sha256Algorithm {
    #[inline]
    fn write(&mut self, msg: &[u8]) {
        self.0.update(msg)
    }

    /// First eight bytes of the current digest, little endian.
    fn finish(&self) -> u64 {
        let h = self.0.clone().finalize();
        let mut prefix = [0u8; 8];
        prefix.copy_from_slice(&h[..8]);
        u64::from_le_bytes(prefix)
    }
}

impl Algorithm for Sha256Algorithm {
    /// `sha2` consumes its state on finalization, so the context is cloned
    /// and the running state is left untouched.
    #[inline]
    fn hash(&mut self) -> Digest {
        self.0.clone().finalize().into()
    }

    #[inline]
    fn reset(&mut self) {
        self.0 = sha2::Sha256::new();
    }
}

/// BLAKE3, an alternative node algorithm.
#[cfg(feature = "blake3")]
#[derive(Clone, Default)]
pub struct Blake3Algorithm(blake3::Hasher);

#[cfg(feature = "blake3")]
impl Blake3Algorithm {
    /// Creates a new algorithm instance in the reset state.
    pub fn new() -> Blake3Algorithm {
        Blake3Algorithm::default()
    }
}

#[cfg(feature = "blake3")]
impl fmt::Debug for Blake3Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Blake3Algorithm")
    }
}

#[cfg(feature = "blake3")]
impl Hasher for Blake3Algorithm {
    #[inline]
    fn write(&mut self, msg: &[u8]) {
        self.0.update(msg);
    }

    fn finish(&self) -> u64 {
        let h = self.0.finalize();
        let mut prefix = [0u8; 8];
        prefix.copy_from_slice(&h.as_bytes()[..8]);
        u64::from_le_bytes(prefix)
    }
}

#[cfg(feature = "blake3")]
impl Algorithm for Blake3Algorithm {
    #[inline]
    fn hash(&mut self) -> Digest {
        *self.0.finalize().as_bytes()
    }

    #[inline]
    fn reset(&mut self) {
        self.0.reset();
    }
}
