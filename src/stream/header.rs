// src/stream/header.rs

//! The fixed-size header of a compressed stream.
//!
//! Layout, all fields little-endian:
//!
//! | offset | size | field |
//! |--------|------|-------|
//! | 0      | 8    | total symbol count (u64) |
//! | 8      | 2048 | frequency table, 256 x u64, byte-value order |
//!
//! The packed bitstream follows at offset 2056. All 256 table entries are
//! written whether or not they are nonzero, keeping the header fixed-size.
//! The frequency table alone lets the decoder rebuild the exact tree used
//! at encode time; codes themselves are never persisted.

use crate::huffman::freq::FreqTable;
use crate::utils::error::{HuffError, Result};
use bytemuck::{cast_slice, Pod, Zeroable};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{self, Read, Write};

/// Total header size in bytes; the payload starts at this offset.
pub const HEADER_LEN: usize = 8 + 256 * 8;

/// Little-endian u64 that can be safely cast to/from bytes
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
struct LeU64([u8; 8]);

impl From<u64> for LeU64 {
    fn from(value: u64) -> Self {
        LeU64(value.to_le_bytes())
    }
}

impl From<LeU64> for u64 {
    fn from(value: LeU64) -> Self {
        u64::from_le_bytes(value.0)
    }
}

/// The decoded (or to-be-encoded) header fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Number of symbols the payload decodes to.
    pub total: u64,
    /// Per-byte-value occurrence counts.
    pub freqs: FreqTable,
}

impl Header {
    pub fn new(total: u64, freqs: FreqTable) -> Self {
        Self { total, freqs }
    }

    /// Writes the fixed-size header to the sink.
    pub fn write_to<W: Write>(&self, sink: &mut W) -> Result<()> {
        WriteBytesExt::write_u64::<LittleEndian>(sink, self.total)?;
        let table: Vec<LeU64> = self.freqs.counts().iter().map(|&c| c.into()).collect();
        sink.write_all(cast_slice(&table))?;
        Ok(())
    }

    /// Reads the fixed-size header from the source. A source too short to
    /// hold the full header reports `BadHeader` rather than a bare I/O error.
    pub fn read_from<R: Read>(source: &mut R) -> Result<Self> {
        let total = ReadBytesExt::read_u64::<LittleEndian>(source)
            .map_err(|e| header_read_error(e, "total symbol count"))?;

        let mut buf = vec![0u8; 256 * 8];
        source
            .read_exact(&mut buf)
            .map_err(|e| header_read_error(e, "frequency table"))?;
        let table: &[LeU64] = cast_slice(&buf);
        let mut counts = [0u64; 256];
        for (dst, &src) in counts.iter_mut().zip(table) {
            *dst = src.into();
        }

        Ok(Self {
            total,
            freqs: FreqTable::from_counts(counts),
        })
    }
}

fn header_read_error(err: io::Error, field: &str) -> HuffError {
    if err.kind() == io::ErrorKind::UnexpectedEof {
        HuffError::BadHeader(format!("stream ended while reading {field}"))
    } else {
        HuffError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn sample_header() -> Header {
        let mut counts = [0u64; 256];
        counts[b'a' as usize] = 3;
        counts[b'b' as usize] = 1;
        counts[0xff] = 700;
        Header::new(704, FreqTable::from_counts(counts))
    }

    #[test]
    fn header_is_fixed_size() {
        let mut out = Vec::new();
        sample_header().write_to(&mut out).unwrap();
        assert_eq!(out.len(), HEADER_LEN);
    }

    #[test]
    fn layout_is_little_endian_in_value_order() {
        let mut out = Vec::new();
        sample_header().write_to(&mut out).unwrap();
        assert_eq!(&out[0..8], &704u64.to_le_bytes()[..]);
        let a_off = 8 + (b'a' as usize) * 8;
        assert_eq!(&out[a_off..a_off + 8], &3u64.to_le_bytes()[..]);
        let last_off = 8 + 0xff * 8;
        assert_eq!(&out[last_off..last_off + 8], &700u64.to_le_bytes()[..]);
    }

    #[test]
    fn roundtrip_preserves_all_fields() {
        let header = sample_header();
        let mut out = Vec::new();
        header.write_to(&mut out).unwrap();
        let decoded = Header::read_from(&mut Cursor::new(out)).unwrap();
        assert_eq!(decoded, header);
    }

    #[test]
    fn short_source_reports_bad_header() {
        let mut out = Vec::new();
        sample_header().write_to(&mut out).unwrap();
        out.truncate(100);
        let err = Header::read_from(&mut Cursor::new(out)).unwrap_err();
        assert!(matches!(err, HuffError::BadHeader(_)));
    }

    #[test]
    fn empty_source_reports_bad_header() {
        let err = Header::read_from(&mut Cursor::new(Vec::<u8>::new())).unwrap_err();
        assert!(matches!(err, HuffError::BadHeader(_)));
    }
}
