//! Byte-order specific encoding and decoding of fixed-width integers.

use crate::width::Width;

mod sealed {
    pub trait Sealed {}
}

/// A byte order for the wire form of multi-byte integers.
///
/// The width-generic [`get`](Self::get)/[`put`](Self::put) surface is
/// provided once for both orders; implementors only supply the primitives
/// that stage bytes in their order through a 64-bit accumulator.
///
/// This codec performs no bounds checking against any declared layout
/// beyond the length of the slice it is handed. Sequencing reads and
/// writes against a bounded buffer is the job of
/// [`EndianReader`](crate::EndianReader) and
/// [`EndianWriter`](crate::EndianWriter).
///
/// This trait is sealed and cannot be implemented outside this crate.
pub trait ByteOrder: sealed::Sealed {
    /// Decodes the first `n` bytes of `src` as an unsigned integer.
    ///
    /// # Panics
    ///
    /// Panics if `src` is shorter than `n` bytes.
    fn uint_from_bytes(src: &[u8], n: usize) -> u64;

    /// Encodes the low `n` bytes of `value` into the start of `dst`.
    ///
    /// # Panics
    ///
    /// Panics if `dst` is shorter than `n` bytes.
    fn uint_to_bytes(value: u64, dst: &mut [u8], n: usize);

    /// Decodes a `T` from the start of `src`.
    ///
    /// Exactly `T::BYTES` bytes are read; the rest of `src` is not examined.
    ///
    /// # Panics
    ///
    /// Panics if `src` is shorter than `T::BYTES` bytes.
    #[inline(always)]
    fn get<T: Width>(src: &[u8]) -> T::Value {
        T::from_bits(Self::uint_from_bytes(src, T::BYTES))
    }

    /// Encodes `value` into the start of `dst`.
    ///
    /// Exactly `T::BYTES` bytes are written; `dst[T::BYTES..]` is left
    /// untouched, so odd-width writes never disturb adjacent bytes and
    /// callers may rely on pre-initialized regions.
    ///
    /// # Panics
    ///
    /// Panics if `dst` is shorter than `T::BYTES` bytes. Debug builds also
    /// panic if `value` does not fit in `T::BYTES` bytes; release builds
    /// truncate.
    #[inline(always)]
    fn put<T: Width>(value: T::Value, dst: &mut [u8]) {
        let bits = T::to_bits(value);
        debug_assert!(
            T::BYTES == 8 || bits >> (8 * T::BYTES) == 0,
            "value 0x{bits:x} does not fit in {} bytes",
            T::BYTES
        );
        Self::uint_to_bytes(bits, dst, T::BYTES);
    }
}

/// Least-significant byte first.
pub enum LittleEndian {}

impl sealed::Sealed for LittleEndian {}

impl ByteOrder for LittleEndian {
    #[inline(always)]
    fn uint_from_bytes(src: &[u8], n: usize) -> u64 {
        let mut raw = [0u8; 8];
        raw[..n].copy_from_slice(&src[..n]);
        u64::from_le_bytes(raw)
    }

    #[inline(always)]
    fn uint_to_bytes(value: u64, dst: &mut [u8], n: usize) {
        dst[..n].copy_from_slice(&value.to_le_bytes()[..n]);
    }
}

/// Most-significant byte first (network byte order).
pub enum BigEndian {}

impl sealed::Sealed for BigEndian {}

impl ByteOrder for BigEndian {
    #[inline(always)]
    fn uint_from_bytes(src: &[u8], n: usize) -> u64 {
        let mut raw = [0u8; 8];
        raw[8 - n..].copy_from_slice(&src[..n]);
        u64::from_be_bytes(raw)
    }

    #[inline(always)]
    fn uint_to_bytes(value: u64, dst: &mut [u8], n: usize) {
        dst[..n].copy_from_slice(&value.to_be_bytes()[8 - n..]);
    }
}
