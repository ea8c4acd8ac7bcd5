use tracing::{debug, trace};

use crate::compress::compress;
use crate::error::HashError;
use crate::extract::extract;
use crate::padding::Padding;
use crate::progress::{NoProgress, Progress};
use crate::schedule::Schedule;
use crate::variant::{Sha256, Sha512, Variant};

/// Computes the `V` digest of `message`.
///
/// Fails only if the message is too long for the length field.
pub fn digest<V: Variant>(message: &[u8]) -> Result<V::Output, HashError> {
    digest_with_progress::<V, _>(message, &mut NoProgress)
}

/// Computes the `V` digest of `message`, notifying `progress` after each
/// block.
///
/// Blocks are padded lazily and compressed strictly in order; one schedule
/// buffer serves every block.
pub fn digest_with_progress<V: Variant, P: Progress + ?Sized>(
    message: &[u8],
    progress: &mut P,
) -> Result<V::Output, HashError> {
    let padding = Padding::<V>::new(message)?;
    let total = padding.block_count() as u64;
    debug!(
        algorithm = %V::ALGORITHM,
        bytes = message.len(),
        blocks = total,
        "hashing message"
    );

    let mut state = V::INITIAL_STATE;
    let mut schedule = Schedule::<V>::new();
    for (index, block) in padding.blocks().enumerate() {
        schedule.expand(&block);
        compress(&mut state, &schedule);
        trace!(block = index, "compressed block");
        progress.block_done(index as u64, total);
    }

    Ok(extract::<V>(&state))
}

/// SHA-256 digest of `message`.
pub fn sha256(message: &[u8]) -> Result<[u8; 32], HashError> {
    digest::<Sha256>(message)
}

/// SHA-512 digest of `message`.
pub fn sha512(message: &[u8]) -> Result<[u8; 64], HashError> {
    digest::<Sha512>(message)
}
