/// Observer notified after each block is compressed.
///
/// Implementations are for user feedback only and cannot influence the digest.
pub trait Progress {
    /// Called after block `index` (zero-based) of `total` has been folded into
    /// the chaining value.
    fn block_done(&mut self, index: u64, total: u64);
}

/// Progress observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl Progress for NoProgress {
    #[inline]
    fn block_done(&mut self, _index: u64, _total: u64) {}
}

impl<F: FnMut(u64, u64)> Progress for F {
    #[inline]
    fn block_done(&mut self, index: u64, total: u64) {
        self(index, total)
    }
}
