// src/stream/bits.rs

//! Bit-level reading and writing over byte streams.
//!
//! Both directions pack MSB-first within each byte: the first bit written
//! lands in bit position 7 of the first output byte. The writer zero-pads
//! the final partial byte on `finish`, and the reader reports a clean
//! end-of-data (`Ok(None)`) when the underlying source is exhausted at a
//! byte boundary.

use bitvec::prelude::*;
use std::io::{self, Read, Write};

/// A bit-level writer for packing codes into a byte sink.
pub struct BitWriter<W: Write> {
    sink: W,
    current: u8,
    filled: u8,
    bytes_out: u64,
}

impl<W: Write> BitWriter<W> {
    /// Creates a new BitWriter over the given sink.
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            current: 0,
            filled: 0,
            bytes_out: 0,
        }
    }

    /// Writes a single bit. Complete bytes are emitted to the sink as they
    /// fill; at most 7 bits are ever held back.
    pub fn write_bit(&mut self, bit: bool) -> io::Result<()> {
        if bit {
            self.current |= 1 << (7 - self.filled);
        }
        self.filled += 1;

        if self.filled == 8 {
            self.sink.write_all(&[self.current])?;
            self.bytes_out += 1;
            self.current = 0;
            self.filled = 0;
        }
        Ok(())
    }

    /// Writes every bit of a code in order.
    pub fn write_code(&mut self, code: &BitSlice<u8, Msb0>) -> io::Result<()> {
        for bit in code.iter().by_vals() {
            self.write_bit(bit)?;
        }
        Ok(())
    }

    /// Number of complete bytes emitted so far (excludes any partial byte
    /// still held in the accumulator).
    pub fn bytes_written(&self) -> u64 {
        self.bytes_out
    }

    /// Consumes the writer, zero-padding and emitting any partial byte, and
    /// flushes the sink. Taking `self` by value guarantees the flush runs
    /// exactly once. Returns the total payload bytes emitted.
    pub fn finish(mut self) -> io::Result<u64> {
        if self.filled > 0 {
            self.sink.write_all(&[self.current])?;
            self.bytes_out += 1;
        }
        self.sink.flush()?;
        Ok(self.bytes_out)
    }
}

/// A bit-level reader for unpacking codes from a byte source.
pub struct BitReader<R: Read> {
    source: R,
    current: u8,
    remaining: u8,
}

impl<R: Read> BitReader<R> {
    /// Creates a new BitReader over the given source.
    pub fn new(source: R) -> Self {
        Self {
            source,
            current: 0,
            remaining: 0,
        }
    }

    /// Reads the next bit, MSB-first. Pulls exactly one byte from the source
    /// when the accumulator empties. Returns `Ok(None)` once the source has
    /// no more bytes; end-of-data is a condition, not an error.
    pub fn read_bit(&mut self) -> io::Result<Option<bool>> {
        if self.remaining == 0 {
            let mut byte = [0u8; 1];
            loop {
                match self.source.read(&mut byte) {
                    Ok(0) => return Ok(None),
                    Ok(_) => break,
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e),
                }
            }
            self.current = byte[0];
            self.remaining = 8;
        }

        self.remaining -= 1;
        Ok(Some((self.current >> self.remaining) & 1 == 1))
    }
}
