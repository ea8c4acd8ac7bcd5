//! Hashline core: the SHA-256 and SHA-512 engine.
//!
//! Both variants share one generic pipeline: the padding stage frames the
//! message into blocks, each block is expanded into a message schedule and
//! compressed into the chaining value, and the final chaining value is
//! serialized big-endian. Per-variant differences live in [`Variant`] tables.

mod compress;
mod consts;
mod engine;
mod error;
mod extract;
mod padding;
mod progress;
mod schedule;
mod variant;
mod word;

pub use compress::{ChainingValue, WorkingVars, compress, round};
pub use engine::{digest, digest_with_progress, sha256, sha512};
pub use error::{HashError, UnknownAlgorithm};
pub use extract::extract;
pub use padding::{
    Block, Blocks, MAX_BLOCK_LEN, MAX_MESSAGE_LEN, Padding, bit_length, block_count,
};
pub use progress::{NoProgress, Progress};
pub use schedule::{MAX_ROUNDS, Schedule};
pub use variant::{Algorithm, Sha256, Sha512, Variant};
pub use word::{Rotations, Word, choice, majority};
