use std::collections::TryReserveError;

/// Errors that can occur while computing a digest.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HashError {
    /// The message bit length does not fit the algorithm's length field.
    #[error("message is {len} bytes, the length field holds at most {max} bytes")]
    MessageTooLong { len: u64, max: u64 },

    /// The padded block array could not be allocated.
    #[error("out of memory while framing message blocks: {0}")]
    OutOfMemory(#[from] TryReserveError),
}

/// Returned when parsing an [`Algorithm`](crate::Algorithm) name fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm `{0}` (expected sha256 or sha512)")]
pub struct UnknownAlgorithm(pub String);
