use crate::padding::Block;
use crate::variant::Variant;
use crate::word::Word;

/// Longest message schedule of any variant.
pub const MAX_ROUNDS: usize = 80;

/// Message schedule buffer, reused from one block to the next.
#[derive(Debug, Clone)]
pub struct Schedule<V: Variant> {
    words: [V::Word; MAX_ROUNDS],
}

impl<V: Variant> Schedule<V> {
    pub fn new() -> Self {
        Self {
            words: [V::Word::default(); MAX_ROUNDS],
        }
    }

    /// Expands `block` into `ROUNDS` words.
    ///
    /// `w[0..16]` is the block read big-endian; every later entry is
    /// `σ1(w[i-2]) + w[i-7] + σ0(w[i-15]) + w[i-16]`.
    pub fn expand(&mut self, block: &Block) {
        debug_assert_eq!(block.len(), V::BLOCK_LEN);
        let w = &mut self.words[..V::ROUNDS];

        for (word, chunk) in w
            .iter_mut()
            .zip(block.as_bytes().chunks_exact(V::Word::BYTES))
        {
            *word = V::Word::from_be_slice(chunk);
        }

        let sigma = V::ROTATIONS;
        for i in 16..V::ROUNDS {
            w[i] = sigma
                .small_sigma1(w[i - 2])
                .wrapping_add(w[i - 7])
                .wrapping_add(sigma.small_sigma0(w[i - 15]))
                .wrapping_add(w[i - 16]);
        }
    }

    pub fn words(&self) -> &[V::Word] {
        &self.words[..V::ROUNDS]
    }
}

impl<V: Variant> Default for Schedule<V> {
    fn default() -> Self {
        Self::new()
    }
}
