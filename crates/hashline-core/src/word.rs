//! Word-level algebra shared by both SHA-2 variants.

use std::fmt::Debug;
use std::ops::{BitAnd, BitXor, Not, Shr};

/// A machine word the SHA-2 round function operates on (`u32` or `u64`).
///
/// All additions are modulo `2^BITS`.
pub trait Word:
    Copy
    + Debug
    + Default
    + Eq
    + Send
    + Sync
    + BitAnd<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Shr<u32, Output = Self>
    + 'static
{
    /// Width of the word in bytes.
    const BYTES: usize;

    fn wrapping_add(self, rhs: Self) -> Self;

    fn rotate_right(self, n: u32) -> Self;

    /// Reads a word from exactly [`Self::BYTES`] big-endian bytes.
    fn from_be_slice(bytes: &[u8]) -> Self;

    /// Writes the word big-endian into exactly [`Self::BYTES`] bytes.
    fn write_be(self, out: &mut [u8]);
}

macro_rules! impl_word {
    ($ty:ty) => {
        impl Word for $ty {
            const BYTES: usize = std::mem::size_of::<$ty>();

            #[inline]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$ty>::wrapping_add(self, rhs)
            }

            #[inline]
            fn rotate_right(self, n: u32) -> Self {
                <$ty>::rotate_right(self, n)
            }

            #[inline]
            fn from_be_slice(bytes: &[u8]) -> Self {
                let mut buf = [0u8; std::mem::size_of::<$ty>()];
                buf.copy_from_slice(bytes);
                <$ty>::from_be_bytes(buf)
            }

            #[inline]
            fn write_be(self, out: &mut [u8]) {
                out.copy_from_slice(&self.to_be_bytes());
            }
        }
    };
}

impl_word!(u32);
impl_word!(u64);

/// `Ch(x, y, z)`: each bit of `x` chooses between the bits of `y` and `z`.
#[inline]
pub fn choice<W: Word>(x: W, y: W, z: W) -> W {
    (x & y) ^ (!x & z)
}

/// `Maj(x, y, z)`: bitwise majority vote.
#[inline]
pub fn majority<W: Word>(x: W, y: W, z: W) -> W {
    (x & y) ^ (x & z) ^ (y & z)
}

/// Per-variant rotation and shift amounts for the four sigma functions.
///
/// The big sigmas XOR three right-rotations. The small sigmas XOR two
/// right-rotations and a right-shift; the shift amount is the last entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotations {
    pub big_sigma0: [u32; 3],
    pub big_sigma1: [u32; 3],
    pub small_sigma0: [u32; 3],
    pub small_sigma1: [u32; 3],
}

impl Rotations {
    #[inline]
    pub fn big_sigma0<W: Word>(&self, x: W) -> W {
        rotate3(x, self.big_sigma0)
    }

    #[inline]
    pub fn big_sigma1<W: Word>(&self, x: W) -> W {
        rotate3(x, self.big_sigma1)
    }

    #[inline]
    pub fn small_sigma0<W: Word>(&self, x: W) -> W {
        rotate2_shift(x, self.small_sigma0)
    }

    #[inline]
    pub fn small_sigma1<W: Word>(&self, x: W) -> W {
        rotate2_shift(x, self.small_sigma1)
    }
}

#[inline]
fn rotate3<W: Word>(x: W, [r0, r1, r2]: [u32; 3]) -> W {
    x.rotate_right(r0) ^ x.rotate_right(r1) ^ x.rotate_right(r2)
}

#[inline]
fn rotate2_shift<W: Word>(x: W, [r0, r1, s]: [u32; 3]) -> W {
    x.rotate_right(r0) ^ x.rotate_right(r1) ^ (x >> s)
}
