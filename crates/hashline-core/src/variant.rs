use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts;
use crate::error::{HashError, UnknownAlgorithm};
use crate::progress::Progress;
use crate::word::{Rotations, Word};

/// Parameter table for one member of the SHA-2 family.
///
/// Both variants run the same generic engine; everything that differs between
/// them lives here as data.
pub trait Variant: Copy + Default + fmt::Debug + Send + Sync + 'static {
    /// Word type of the chaining value and message schedule.
    type Word: Word;

    /// Fixed-size digest, `[u8; 32]` or `[u8; 64]`.
    type Output: AsRef<[u8]> + AsMut<[u8]> + Copy + fmt::Debug + Eq;

    const ALGORITHM: Algorithm;

    /// Block size in bytes.
    const BLOCK_LEN: usize;

    /// Width in bytes of the big-endian bit-length field closing the last block.
    const LENGTH_FIELD_LEN: usize;

    /// Number of compression rounds, equal to the message schedule length.
    const ROUNDS: usize;

    const INITIAL_STATE: [Self::Word; 8];

    /// `K[0..ROUNDS]`.
    const ROUND_CONSTANTS: &'static [Self::Word];

    const ROTATIONS: Rotations;

    /// All-zero digest the extractor writes into.
    const ZERO_OUTPUT: Self::Output;
}

/// SHA-256: 32-bit words, 64-byte blocks, 64 rounds, 32-byte digest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Sha256;

impl Variant for Sha256 {
    type Word = u32;
    type Output = [u8; 32];

    const ALGORITHM: Algorithm = Algorithm::Sha256;
    const BLOCK_LEN: usize = 64;
    const LENGTH_FIELD_LEN: usize = 8;
    const ROUNDS: usize = 64;
    const INITIAL_STATE: [u32; 8] = consts::SHA256_INITIAL_STATE;
    const ROUND_CONSTANTS: &'static [u32] = &consts::SHA256_ROUND_CONSTANTS;
    const ROTATIONS: Rotations = consts::SHA256_ROTATIONS;
    const ZERO_OUTPUT: [u8; 32] = [0; 32];
}

/// SHA-512: 64-bit words, 128-byte blocks, 80 rounds, 64-byte digest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Sha512;

impl Variant for Sha512 {
    type Word = u64;
    type Output = [u8; 64];

    const ALGORITHM: Algorithm = Algorithm::Sha512;
    const BLOCK_LEN: usize = 128;
    const LENGTH_FIELD_LEN: usize = 16;
    const ROUNDS: usize = 80;
    const INITIAL_STATE: [u64; 8] = consts::SHA512_INITIAL_STATE;
    const ROUND_CONSTANTS: &'static [u64] = &consts::SHA512_ROUND_CONSTANTS;
    const ROTATIONS: Rotations = consts::SHA512_ROTATIONS;
    const ZERO_OUTPUT: [u8; 64] = [0; 64];
}

/// Runtime tag selecting a [`Variant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Sha256,
    Sha512,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Sha256, Algorithm::Sha512];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
        }
    }

    pub fn block_len(&self) -> usize {
        match self {
            Self::Sha256 => Sha256::BLOCK_LEN,
            Self::Sha512 => Sha512::BLOCK_LEN,
        }
    }

    pub fn length_field_len(&self) -> usize {
        match self {
            Self::Sha256 => Sha256::LENGTH_FIELD_LEN,
            Self::Sha512 => Sha512::LENGTH_FIELD_LEN,
        }
    }

    pub fn digest_len(&self) -> usize {
        match self {
            Self::Sha256 => 32,
            Self::Sha512 => 64,
        }
    }

    /// Padded block count for a `len`-byte message.
    pub fn block_count(&self, len: u64) -> u64 {
        match self {
            Self::Sha256 => crate::block_count::<Sha256>(len),
            Self::Sha512 => crate::block_count::<Sha512>(len),
        }
    }

    /// Hash `message` with the selected variant.
    pub fn digest(&self, message: &[u8]) -> Result<Vec<u8>, HashError> {
        self.digest_with_progress(message, &mut crate::NoProgress)
    }

    /// Hash `message`, reporting each compressed block to `progress`.
    pub fn digest_with_progress<P: Progress + ?Sized>(
        &self,
        message: &[u8],
        progress: &mut P,
    ) -> Result<Vec<u8>, HashError> {
        Ok(match self {
            Self::Sha256 => crate::digest_with_progress::<Sha256, P>(message, progress)?.to_vec(),
            Self::Sha512 => crate::digest_with_progress::<Sha512, P>(message, progress)?.to_vec(),
        })
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "").as_str() {
            "sha256" => Ok(Self::Sha256),
            "sha512" => Ok(Self::Sha512),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}
