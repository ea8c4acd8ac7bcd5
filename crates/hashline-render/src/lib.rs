//! Digest output rendering: `sha256sum`-style text lines and JSON Lines.

mod jsonl;
mod text;

pub use jsonl::JsonlWriter;
pub use text::TextWriter;

use hashline_core::Algorithm;

/// A computed digest together with what it was computed over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestRecord {
    pub algorithm: Algorithm,
    pub path: String,
    pub bytes: u64,
    pub blocks: u64,
    pub digest: Vec<u8>,
}

impl DigestRecord {
    /// Lowercase hex encoding of the digest.
    pub fn hex(&self) -> String {
        hex::encode(&self.digest)
    }
}
