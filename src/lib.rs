//! A Rust library for lossless static Huffman compression of byte streams.
//!
//! This crate builds an optimal prefix code for the 256-value byte alphabet
//! from observed frequencies and uses it to pack an arbitrary byte stream
//! into an MSB-first bitstream, exactly reversible. The scheme is static and
//! two-pass: frequencies are counted over the whole input before any code is
//! assigned, and the full frequency table travels in a fixed-size header so
//! the decoder rebuilds the identical tree.
//!
//! # Quick Start
//!
//! ```
//! use huffpack::{compress, decompress};
//! use std::io::Cursor;
//!
//! let data = b"an example of a message with repeated letters".to_vec();
//!
//! let mut packed = Vec::new();
//! let outcome = compress(&mut Cursor::new(data.clone()), &mut packed)?;
//! println!("{} -> {} bytes", outcome.bytes_read, outcome.bytes_written);
//! println!("{}", outcome.codes); // one `byte -> bits` line per symbol
//!
//! let mut restored = Vec::new();
//! decompress(&mut Cursor::new(packed), &mut restored)?;
//! assert_eq!(restored, data);
//! # Ok::<(), huffpack::HuffError>(())
//! ```
//!
//! # Stream format
//!
//! A fixed 2056-byte header (little-endian symbol count, then all 256
//! little-endian frequency counts in byte-value order) followed by the
//! packed bitstream, zero-padded in its final byte. See [`stream::header`].
//!
//! Compression refuses empty input, and decompression reports a truncated
//! payload with the partial symbol count instead of pretending success; see
//! [`HuffError`].

// Core modules
pub mod codec;
pub mod huffman;
pub mod stream;
pub mod utils;

// Pipeline entry points
pub use codec::{compress, decompress, CompressOutcome, DecompressOutcome};

// Building blocks (for custom workflows and diagnostics)
pub use huffman::{CodeBook, FreqTable, HuffTree};
pub use stream::{BitReader, BitWriter, Header, HEADER_LEN};

// Error types
pub use utils::error::{HuffError, Result};

// Constants
pub const HUFFPACK_VERSION: &str = "0.3.0";

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_version() {
        assert_eq!(HUFFPACK_VERSION, "0.3.0");
    }

    #[test]
    fn test_public_api_roundtrip() {
        let data = b"public surface smoke test".to_vec();
        let mut packed = Vec::new();
        let outcome = compress(&mut Cursor::new(data.clone()), &mut packed).unwrap();
        assert_eq!(outcome.bytes_read, data.len() as u64);
        assert!(!outcome.codes.is_empty());

        let mut restored = Vec::new();
        let d = decompress(&mut Cursor::new(packed), &mut restored).unwrap();
        assert_eq!(restored, data);
        assert_eq!(d.symbols_written, data.len() as u64);
    }

    #[test]
    fn test_codebook_from_header_matches_outcome() {
        let data = b"mississippi".to_vec();
        let mut packed = Vec::new();
        let outcome = compress(&mut Cursor::new(data), &mut packed).unwrap();
        let header = Header::read_from(&mut Cursor::new(&packed[..HEADER_LEN])).unwrap();
        let rebuilt = CodeBook::from_frequencies(&header.freqs).unwrap();
        assert_eq!(rebuilt, outcome.codes);
    }
}
