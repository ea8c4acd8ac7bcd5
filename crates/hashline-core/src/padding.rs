//! Merkle–Damgård framing: message ‖ `0x80` ‖ zeros ‖ big-endian bit length.

use std::iter::FusedIterator;
use std::marker::PhantomData;

use crate::error::HashError;
use crate::variant::Variant;

/// Largest message, in bytes, whose bit length fits a 64-bit length field.
///
/// SHA-512 carries a 128-bit field but only its low 64 bits are ever used, so
/// the same limit applies to both variants.
pub const MAX_MESSAGE_LEN: u64 = (1 << 61) - 1;

/// Largest block size of any variant.
pub const MAX_BLOCK_LEN: usize = 128;

/// Bit length of a `len`-byte message, rejecting lengths the field cannot hold.
pub fn bit_length(len: u64) -> Result<u64, HashError> {
    if len > MAX_MESSAGE_LEN {
        return Err(HashError::MessageTooLong {
            len,
            max: MAX_MESSAGE_LEN,
        });
    }
    Ok(len * 8)
}

/// Number of padded blocks for a `len`-byte message:
/// `ceil((len + 1 + LENGTH_FIELD_LEN) / BLOCK_LEN)`.
pub fn block_count<V: Variant>(len: u64) -> u64 {
    (len + 1 + V::LENGTH_FIELD_LEN as u64).div_ceil(V::BLOCK_LEN as u64)
}

/// One fixed-size block of the padded message.
#[derive(Clone, PartialEq, Eq)]
pub struct Block {
    bytes: [u8; MAX_BLOCK_LEN],
    len: usize,
}

impl Block {
    fn zeroed(len: usize) -> Self {
        debug_assert!(len <= MAX_BLOCK_LEN);
        Self {
            bytes: [0; MAX_BLOCK_LEN],
            len,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl AsRef<[u8]> for Block {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl std::fmt::Debug for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Block(")?;
        for byte in self.as_bytes() {
            write!(f, "{byte:02x}")?;
        }
        write!(f, ")")
    }
}

/// Framing of one message for variant `V`.
#[derive(Debug, Clone, Copy)]
pub struct Padding<'a, V> {
    message: &'a [u8],
    bit_len: u64,
    block_count: usize,
    _variant: PhantomData<V>,
}

impl<'a, V: Variant> Padding<'a, V> {
    pub fn new(message: &'a [u8]) -> Result<Self, HashError> {
        let len = message.len() as u64;
        let bit_len = bit_length(len)?;
        // A message held in memory has fewer than usize::MAX / BLOCK_LEN blocks.
        let block_count = block_count::<V>(len) as usize;
        Ok(Self {
            message,
            bit_len,
            block_count,
            _variant: PhantomData,
        })
    }

    pub fn message_len(&self) -> usize {
        self.message.len()
    }

    pub fn bit_len(&self) -> u64 {
        self.bit_len
    }

    pub fn block_count(&self) -> usize {
        self.block_count
    }

    pub fn padded_len(&self) -> usize {
        self.block_count * V::BLOCK_LEN
    }

    /// Zero bytes between the `0x80` marker and the length field.
    pub fn zero_len(&self) -> usize {
        self.padded_len() - self.message.len() - 1 - V::LENGTH_FIELD_LEN
    }

    /// Whether the length field had to move into an extra block because it
    /// did not fit after the `0x80` marker.
    pub fn spills(&self) -> bool {
        self.block_count > (self.message.len() + 1).div_ceil(V::BLOCK_LEN)
    }

    /// Index of the first block that carries padding bytes.
    pub fn first_padding_block(&self) -> usize {
        self.message.len() / V::BLOCK_LEN
    }

    /// Lazily produced blocks, in message order.
    pub fn blocks(&self) -> Blocks<'a, V> {
        self.blocks_from(0)
    }

    /// Blocks from index `start` onward; earlier blocks are never built.
    pub fn blocks_from(&self, start: usize) -> Blocks<'a, V> {
        Blocks {
            message: self.message,
            bit_len: self.bit_len,
            next: start.min(self.block_count),
            end: self.block_count,
            _variant: PhantomData,
        }
    }

    /// Materializes every block up front.
    ///
    /// Fails with [`HashError::OutOfMemory`] when the block array cannot be
    /// allocated.
    pub fn try_collect_blocks(&self) -> Result<Vec<Block>, HashError> {
        self.try_collect_blocks_from(0)
    }

    /// Materializes the blocks from index `start` onward.
    pub fn try_collect_blocks_from(&self, start: usize) -> Result<Vec<Block>, HashError> {
        let blocks_iter = self.blocks_from(start);
        let mut blocks = Vec::new();
        blocks.try_reserve_exact(blocks_iter.len())?;
        blocks.extend(blocks_iter);
        Ok(blocks)
    }
}

/// Restartable iterator over the padded blocks of a message.
///
/// Cloning yields an independent iterator positioned at the same block.
#[derive(Debug, Clone)]
pub struct Blocks<'a, V> {
    message: &'a [u8],
    bit_len: u64,
    next: usize,
    end: usize,
    _variant: PhantomData<V>,
}

impl<V: Variant> Blocks<'_, V> {
    fn block_at(&self, index: usize) -> Block {
        let mut block = Block::zeroed(V::BLOCK_LEN);
        let bytes = &mut block.bytes[..V::BLOCK_LEN];
        let start = index * V::BLOCK_LEN;
        let len = self.message.len();

        if start < len {
            let end = (start + V::BLOCK_LEN).min(len);
            bytes[..end - start].copy_from_slice(&self.message[start..end]);
        }
        if (start..start + V::BLOCK_LEN).contains(&len) {
            bytes[len - start] = 0x80;
        }
        if index + 1 == self.end {
            // Big-endian length; for a 128-bit field the high 8 bytes stay zero.
            bytes[V::BLOCK_LEN - 8..].copy_from_slice(&self.bit_len.to_be_bytes());
        }
        block
    }
}

impl<V: Variant> Iterator for Blocks<'_, V> {
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        if self.next >= self.end {
            return None;
        }
        let block = self.block_at(self.next);
        self.next += 1;
        Some(block)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }
}

impl<V: Variant> ExactSizeIterator for Blocks<'_, V> {}

impl<V: Variant> FusedIterator for Blocks<'_, V> {}
