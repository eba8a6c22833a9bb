//! Byte-order aware encoding and decoding of fixed-width integers over
//! borrowed byte buffers.
//!
//! The crate is organized in three layers:
//!
//! * [`Width`] tags (`U8` through `U64`, plus the signed native widths)
//!   select an encoded byte length at compile time, including the odd
//!   widths 3, 5, 6 and 7 that have no native integer type.
//! * [`ByteOrder`] implementors [`LittleEndian`] and [`BigEndian`] provide
//!   the `get`/`put` codec for any tag at the start of a slice.
//! * [`EndianReader`] and [`EndianWriter`] sequence typed reads and writes
//!   over a bounded buffer through a cursor that supports random seeks.
//!
//! The reader and writer are built for trusted callers that already know
//! the wire layout: a read, write, or seek past the end of the buffer is a
//! programming error and panics immediately rather than returning an error.
//! Feeding this layer untrusted lengths is not safe without an external
//! validating wrapper; [`CheckedReader`] and [`CheckedWriter`] are that
//! wrapper, reporting the same violations as [`CheckedError`] values.
//!
//! No I/O and no allocation happen anywhere in the crate. Buffers are
//! always borrowed for the lifetime of the reader or writer and are never
//! copied, retained, or freed by it.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![forbid(unsafe_code)]
#![forbid(unused_must_use)]
#![warn(missing_docs)]

mod checked;
mod order;
mod reader;
mod width;
mod writer;


pub use checked::{CheckedError, CheckedReader, CheckedWriter};
pub use order::{BigEndian, ByteOrder, LittleEndian};
pub use reader::EndianReader;
pub use width::{Width, I16, I32, I64, I8, U16, U24, U32, U40, U48, U56, U64, U8};
pub use writer::EndianWriter;
