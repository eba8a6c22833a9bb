use core::marker::PhantomData;

use zerocopy::{Immutable, IntoBytes};

use crate::order::ByteOrder;
use crate::width::{Width, U32, U64};

/// Writes fixed-width values sequentially into a borrowed byte buffer.
///
/// The write-side mirror of [`EndianReader`](crate::EndianReader): the byte
/// order is fixed by the `E` type parameter, a cursor tracks the next
/// offset, and [`seek`](Self::seek) repositions it, for example to go back
/// and patch a previously reserved length field.
///
/// Running past the end of the buffer is a programming error and panics
/// immediately. Use [`CheckedWriter`](crate::CheckedWriter) when lengths
/// come from untrusted input.
///
/// Bytes outside the written spans keep whatever contents they had; nothing
/// is zero-filled.
pub struct EndianWriter<'a, E> {
    data: &'a mut [u8],
    position: usize,
    order: PhantomData<E>,
}

impl<'a, E: ByteOrder> EndianWriter<'a, E> {
    /// Creates a writer over `data` with the cursor at offset zero.
    ///
    /// # Panics
    ///
    /// Panics if `data` is empty.
    pub fn new(data: &'a mut [u8]) -> Self {
        assert!(!data.is_empty(), "writer buffer must not be empty");
        Self {
            data,
            position: 0,
            order: PhantomData,
        }
    }

    #[inline(always)]
    fn advance(&mut self, len: usize) -> &mut [u8] {
        assert!(
            len <= self.remaining(),
            "write of {len} bytes at position {} overruns buffer of {} bytes",
            self.position,
            self.data.len()
        );
        let start = self.position;
        self.position += len;
        &mut self.data[start..self.position]
    }

    /// Writes a `T` at the cursor and advances by `T::BYTES`.
    ///
    /// Odd-width tags write exactly their own bytes; the bytes after them
    /// are left untouched.
    ///
    /// # Panics
    ///
    /// Panics if fewer than `T::BYTES` bytes remain. Debug builds also
    /// panic if `value` does not fit in `T::BYTES` bytes.
    #[inline(always)]
    pub fn write<T: Width>(&mut self, value: T::Value) {
        E::put::<T>(value, self.advance(T::BYTES));
    }

    /// Writes `src` verbatim at the cursor and advances past it.
    ///
    /// No byte-order conversion is applied.
    ///
    /// # Panics
    ///
    /// Panics if fewer than `src.len()` bytes remain.
    #[inline(always)]
    pub fn write_bytes(&mut self, src: &[u8]) {
        self.advance(src.len()).copy_from_slice(src);
    }

    /// Writes a fixed-size array of raw bytes.
    ///
    /// # Panics
    ///
    /// Panics if fewer than `N` bytes remain.
    #[inline(always)]
    pub fn write_array<const N: usize>(&mut self, value: [u8; N]) {
        self.write_bytes(&value);
    }

    /// Writes a slice of wire values verbatim.
    ///
    /// `T` is typically one of the `zerocopy::byteorder` types, which carry
    /// their own byte order; this write does not apply `E`.
    ///
    /// # Panics
    ///
    /// Panics if fewer than `values.len() * size_of::<T>()` bytes remain.
    pub fn write_slice<T>(&mut self, values: &[T])
    where
        T: IntoBytes + Immutable,
    {
        self.write_bytes(values.as_bytes());
    }

    /// Writes an `f32` as its IEEE-754 bit pattern in the configured order.
    ///
    /// # Panics
    ///
    /// Panics if fewer than 4 bytes remain.
    #[inline(always)]
    pub fn write_f32(&mut self, value: f32) {
        self.write::<U32>(value.to_bits());
    }

    /// Writes an `f64` as its IEEE-754 bit pattern in the configured order.
    ///
    /// # Panics
    ///
    /// Panics if fewer than 8 bytes remain.
    #[inline(always)]
    pub fn write_f64(&mut self, value: f64) {
        self.write::<U64>(value.to_bits());
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

    /// Advances the cursor by `len` bytes without writing them.
    ///
    /// The skipped bytes keep their prior contents.
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
