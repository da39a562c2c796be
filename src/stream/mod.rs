//! Byte- and bit-level stream plumbing: the fixed-size header codec and the
//! MSB-first bit writer/reader the payload flows through.

pub mod bits;
pub mod header;

pub use bits::{BitReader, BitWriter};
pub use header::{Header, HEADER_LEN};
