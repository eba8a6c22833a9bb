use core::marker::PhantomData;
use core::mem::size_of;

use zerocopy::{FromBytes, Immutable, KnownLayout, Unaligned};

use crate::order::ByteOrder;
use crate::width::{Width, U32, U64};

/// Reads fixed-width values sequentially from a borrowed byte buffer.
///
/// The byte order is fixed by the `E` type parameter and applied to every
/// typed read. A cursor tracks the next offset; reads advance it and
/// [`seek`](Self::seek) repositions it, forward or backward, for re-parsing
/// a region.
///
/// The reader is built for callers that already know the wire layout:
/// running past the end of the buffer is a programming error and panics
/// immediately, and no value is ever returned on that path. Use
/// [`CheckedReader`](crate::CheckedReader) when lengths come from untrusted
/// input.
///
/// The buffer is borrowed, never copied or owned; the borrow checker keeps
/// it alive for the reader's entire lifetime.
pub struct EndianReader<'a, E> {
    data: &'a [u8],
    position: usize,
    order: PhantomData<E>,
}

impl<'a, E: ByteOrder> EndianReader<'a, E> {
    /// Creates a reader over `data` with the cursor at offset zero.
    ///
    /// # Panics
    ///
    /// Panics if `data` is empty.
    pub fn new(data: &'a [u8]) -> Self {
        assert!(!data.is_empty(), "reader buffer must not be empty");
        Self {
            data,
            position: 0,
            order: PhantomData,
        }
    }

    /// Reads a `T` at the cursor and advances by `T::BYTES`.
    ///
    /// # Panics
    ///
    /// Panics if fewer than `T::BYTES` bytes remain.
    #[inline(always)]
    pub fn read<T: Width>(&mut self) -> T::Value {
        E::get::<T>(self.read_bytes(T::BYTES))
    }

    /// Reads `len` raw bytes at the cursor and advances past them.
    ///
    /// No byte-order conversion is applied; the bytes are returned as they
    /// sit in the buffer, without copying.
    ///
    /// # Panics
    ///
    /// Panics if fewer than `len` bytes remain.
    #[inline(always)]
    pub fn read_bytes(&mut self, len: usize) -> &'a [u8] {
        assert!(
            len <= self.remaining(),
            "read of {len} bytes at position {} overruns buffer of {} bytes",
            self.position,
            self.data.len()
        );
        let start = self.position;
        self.position += len;
        &self.data[start..self.position]
    }

    /// Copies `dst.len()` raw bytes from the cursor into `dst` and advances.
    ///
    /// The destination's layout is the caller's concern; no byte-order
    /// conversion is applied.
    ///
    /// # Panics
    ///
    /// Panics if fewer than `dst.len()` bytes remain.
    pub fn read_into(&mut self, dst: &mut [u8]) {
        dst.copy_from_slice(self.read_bytes(dst.len()));
    }

    /// Reads a fixed-size array of raw bytes.
    ///
    /// # Panics
    ///
    /// Panics if fewer than `N` bytes remain.
    #[inline(always)]
    pub fn read_array<const N: usize>(&mut self) -> [u8; N] {
        match <[u8; N]>::try_from(self.read_bytes(N)) {
            Ok(bytes) => bytes,
            // read_bytes returned exactly N bytes.
            Err(_) => unreachable!(),
        }
    }

    /// Reads `count` wire values as a typed view without copying.
    ///
    /// `T` is typically one of the `zerocopy::byteorder` types, which carry
    /// their own byte order; this read does not apply `E`.
    ///
    /// # Panics
    ///
    /// Panics if fewer than `count * size_of::<T>()` bytes remain.
    pub fn read_slice<T>(&mut self, count: usize) -> &'a [T]
    where
        T: FromBytes + KnownLayout + Immutable + Unaligned,
    {
        let bytes = self.read_bytes(count * size_of::<T>());
        match <[T]>::ref_from_bytes(bytes) {
            Ok(values) => values,
            // The length is exact and `T` is unaligned.
            Err(_) => unreachable!(),
        }
    }

    /// Reads an `f32` from its IEEE-754 bit pattern in the configured order.
    ///
    /// # Panics
    ///
    /// Panics if fewer than 4 bytes remain.
    #[inline(always)]
    pub fn read_f32(&mut self) -> f32 {
        f32::from_bits(self.read::<U32>())
    }

    /// Reads an `f64` from its IEEE-754 bit pattern in the configured order.
    ///
    /// # Panics
    ///
    /// Panics if fewer than 8 bytes remain.
    #[inline(always)]
    pub fn read_f64(&mut self) -> f64 {
        f64::from_bits(self.read::<U64>())
    }

    /// Total capacity of the underlying buffer in bytes.
    #[inline]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Current cursor offset in bytes.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Bytes left between the cursor and the end of the buffer.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    /// Moves the cursor to `position`, forward or backward.
    ///
    /// # Panics
    ///
    /// Panics if `position` is past the end of the buffer.
    pub fn seek(&mut self, position: usize) {
        assert!(
            position <= self.data.len(),
            "seek to {position} past end of {} byte buffer",
            self.data.len()
        );
        self.position = position;
    }

    /// Advances the cursor by `len` bytes without reading them.
    ///
    /// # Panics
    ///
    /// Panics if fewer than `len` bytes remain.
    pub fn skip(&mut self, len: usize) {
        assert!(
            len <= self.remaining(),
            "skip of {len} bytes at position {} overruns buffer of {} bytes",
            self.position,
            self.data.len()
        );
        self.position += len;
    }
}
