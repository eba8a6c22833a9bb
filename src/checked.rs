//! Always-checked reader and writer for untrusted input.
//!
//! [`EndianReader`](crate::EndianReader) and
//! [`EndianWriter`](crate::EndianWriter) treat bounds violations as
//! programming errors and panic. When lengths come from the outside, such
//! as a network peer or a file header, wrap the buffer in [`CheckedReader`] or
//! [`CheckedWriter`] instead: the same operations, but every violation is
//! reported as a [`CheckedError`] and the cursor is left where it was.

use core::fmt;
use core::marker::PhantomData;
use core::mem::size_of;

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

use crate::order::ByteOrder;
use crate::width::{Width, U32, U64};

pub type Result<T> = core::result::Result<T, CheckedError>;

/// Error type for [`CheckedReader`] and [`CheckedWriter`].
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum CheckedError {
    /// A read or write needed more bytes than remain before the end of the
    /// buffer.
    Overrun {
        /// Bytes the operation needed.
        requested: usize,
        /// Bytes that were left.
        remaining: usize,
    },

    /// A seek target lies past the end of the buffer.
    SeekPastEnd {
        /// The requested cursor offset.
        target: usize,
        /// Total buffer capacity.
        size: usize,
    },
}

impl core::error::Error for CheckedError {}

impl fmt::Display for CheckedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overrun {
                requested,
                remaining,
            } => {
                write!(f, "needed {requested} bytes but only {remaining} remain")
            }
            Self::SeekPastEnd { target, size } => {
                write!(f, "seek to {target} past end of {size} byte buffer")
            }
        }
    }
}

/// Reads fixed-width values from a borrowed buffer, reporting bounds
/// violations as errors instead of panicking.
///
/// Unlike the panicking reader, a failed operation never moves the cursor,
/// so a caller can recover and continue at the same offset.
pub struct CheckedReader<'a, E> {
    data: &'a [u8],
    position: usize,
    order: PhantomData<E>,
}

impl<'a, E: ByteOrder> CheckedReader<'a, E> {
    /// Creates a reader over `data` with the cursor at offset zero.
    ///
    /// Empty buffers are accepted here; every subsequent operation is
    /// range-checked anyway.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            position: 0,
            order: PhantomData,
        }
    }

    fn advance(&mut self, len: usize) -> Result<&'a [u8]> {
        if len > self.remaining() {
            return Err(CheckedError::Overrun {
                requested: len,
                remaining: self.remaining(),
            });
        }
        let start = self.position;
        self.position += len;
        Ok(&self.data[start..self.position])
    }

    /// Reads a `T` at the cursor and advances by `T::BYTES`.
    #[inline]
    pub fn read<T: Width>(&mut self) -> Result<T::Value> {
        Ok(E::get::<T>(self.advance(T::BYTES)?))
    }

    /// Reads `len` raw bytes at the cursor without copying or converting.
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        self.advance(len)
    }

    /// Copies `dst.len()` raw bytes from the cursor into `dst`.
    pub fn read_into(&mut self, dst: &mut [u8]) -> Result<()> {
        dst.copy_from_slice(self.advance(dst.len())?);
        Ok(())
    }

    /// Reads a fixed-size array of raw bytes.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        match <[u8; N]>::try_from(self.advance(N)?) {
            Ok(bytes) => Ok(bytes),
            // advance returned exactly N bytes.
            Err(_) => unreachable!(),
        }
    }

    /// Reads `count` wire values as a typed view without copying.
    pub fn read_slice<T>(&mut self, count: usize) -> Result<&'a [T]>
    where
        T: FromBytes + KnownLayout + Immutable + Unaligned,
    {
        let bytes = self.advance(count * size_of::<T>())?;
        match <[T]>::ref_from_bytes(bytes) {
            Ok(values) => Ok(values),
            // The length is exact and `T` is unaligned.
            Err(_) => unreachable!(),
        }
    }

    /// Reads an `f32` from its IEEE-754 bit pattern in the configured order.
    pub fn read_f32(&mut self) -> Result<f32> {
        Ok(f32::from_bits(self.read::<U32>()?))
    }

    /// Reads an `f64` from its IEEE-754 bit pattern in the configured order.
    pub fn read_f64(&mut self) -> Result<f64> {
        Ok(f64::from_bits(self.read::<U64>()?))
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
    pub fn seek(&mut self, position: usize) -> Result<()> {
        if position > self.data.len() {
            return Err(CheckedError::SeekPastEnd {
                target: position,
                size: self.data.len(),
            });
        }
        self.position = position;
        Ok(())
    }

    /// Advances the cursor by `len` bytes without reading them.
    pub fn skip(&mut self, len: usize) -> Result<()> {
        self.advance(len)?;
        Ok(())
    }
}

/// Writes fixed-width values into a borrowed buffer, reporting bounds
/// violations as errors instead of panicking.
///
/// The write-side mirror of [`CheckedReader`]; a failed operation never
/// moves the cursor and never touches the buffer.
pub struct CheckedWriter<'a, E> {
    data: &'a mut [u8],
    position: usize,
    order: PhantomData<E>,
}

impl<'a, E: ByteOrder> CheckedWriter<'a, E> {
    /// Creates a writer over `data` with the cursor at offset zero.
    ///
    /// Empty buffers are accepted here; every subsequent operation is
    /// range-checked anyway.
    pub fn new(data: &'a mut [u8]) -> Self {
        Self {
            data,
            position: 0,
            order: PhantomData,
        }
    }

    fn advance(&mut self, len: usize) -> Result<&mut [u8]> {
        if len > self.remaining() {
            return Err(CheckedError::Overrun {
                requested: len,
                remaining: self.remaining(),
            });
        }
        let start = self.position;
        self.position += len;
        Ok(&mut self.data[start..self.position])
    }

    /// Writes a `T` at the cursor and advances by `T::BYTES`.
    ///
    /// Odd-width tags write exactly their own bytes; the bytes after them
    /// are left untouched.
    #[inline]
    pub fn write<T: Width>(&mut self, value: T::Value) -> Result<()> {
        E::put::<T>(value, self.advance(T::BYTES)?);
        Ok(())
    }

    /// Writes `src` verbatim at the cursor without byte-order conversion.
    pub fn write_bytes(&mut self, src: &[u8]) -> Result<()> {
        self.advance(src.len())?.copy_from_slice(src);
        Ok(())
    }

    /// Writes a fixed-size array of raw bytes.
    pub fn write_array<const N: usize>(&mut self, value: [u8; N]) -> Result<()> {
        self.write_bytes(&value)
    }

    /// Writes a slice of wire values verbatim.
    pub fn write_slice<T>(&mut self, values: &[T]) -> Result<()>
    where
        T: IntoBytes + Immutable,
    {
        self.write_bytes(values.as_bytes())
    }

    /// Writes an `f32` as its IEEE-754 bit pattern in the configured order.
    pub fn write_f32(&mut self, value: f32) -> Result<()> {
        self.write::<U32>(value.to_bits())
    }

    /// Writes an `f64` as its IEEE-754 bit pattern in the configured order.
    pub fn write_f64(&mut self, value: f64) -> Result<()> {
        self.write::<U64>(value.to_bits())
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
    pub fn seek(&mut self, position: usize) -> Result<()> {
        if position > self.data.len() {
            return Err(CheckedError::SeekPastEnd {
                target: position,
                size: self.data.len(),
            });
        }
        self.position = position;
        Ok(())
    }

    /// Advances the cursor by `len` bytes, leaving their contents alone.
    pub fn skip(&mut self, len: usize) -> Result<()> {
        self.advance(len)?;
        Ok(())
    }
}
