// src/codec.rs

//! The compress/decompress pipeline.
//!
//! Compression is a static two-pass scheme: one full scan of the source to
//! collect frequencies, then a second scan that emits each byte's code
//! through the bit writer, behind a fixed-size header carrying the symbol
//! count and the complete frequency table. Decompression reads the header,
//! rebuilds the identical tree from the table, and walks it bit by bit
//! until the declared symbol count has been produced.
//!
//! Each call owns its frequency table, tree, code table, and bit cursors
//! exclusively; there is no process-wide state and calls are independently
//! reentrant.

use crate::huffman::codebook::CodeBook;
use crate::huffman::freq::FreqTable;
use crate::huffman::tree::{HuffTree, NodeKind};
use crate::stream::bits::{BitReader, BitWriter};
use crate::stream::header::{Header, HEADER_LEN};
use crate::utils::error::{HuffError, Result};
use log::{debug, trace, warn};
use std::io::{self, Read, Seek, SeekFrom, Write};

const CHUNK_LEN: usize = 8 * 1024;

/// What a successful compression produced.
#[derive(Debug)]
pub struct CompressOutcome {
    /// Bytes consumed from the source.
    pub bytes_read: u64,
    /// Bytes emitted to the sink, header included.
    pub bytes_written: u64,
    /// The code table used, returned for diagnostic display so callers
    /// need not re-run compression to inspect it.
    pub codes: CodeBook,
}

/// What a successful decompression produced.
#[derive(Debug)]
pub struct DecompressOutcome {
    /// Symbols written to the sink; equals the header's declared count.
    pub symbols_written: u64,
}

/// Compresses the source into the sink.
///
/// The source is scanned twice, so it must support seeking back to the
/// start. Refuses an empty source with [`HuffError::EmptyInput`] before
/// anything is written to the sink.
pub fn compress<R, W>(source: &mut R, sink: &mut W) -> Result<CompressOutcome>
where
    R: Read + Seek,
    W: Write,
{
    let freqs = FreqTable::scan(source)?;
    let total = freqs.total();
    if total == 0 {
        return Err(HuffError::EmptyInput);
    }
    debug!(
        "frequency scan complete: {} bytes, {} distinct values",
        total,
        freqs.distinct()
    );

    let tree = HuffTree::build(&freqs).ok_or(HuffError::EmptyInput)?;
    let codes = CodeBook::from_tree(&tree);
    trace!(
        "tree built: {} leaves, weighted path length {}",
        tree.leaf_count(),
        tree.weighted_path_length()
    );

    Header::new(total, freqs).write_to(sink)?;

    source.seek(SeekFrom::Start(0))?;
    let mut writer = BitWriter::new(&mut *sink);
    let mut buf = [0u8; CHUNK_LEN];
    loop {
        let n = match source.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        for &byte in &buf[..n] {
            // every scanned byte has a leaf, so a miss here is an
            // invariant violation in tree or code-table construction
            let code = codes.code(byte).ok_or(HuffError::MissingCode(byte))?;
            writer.write_code(code)?;
        }
    }

    let payload = writer.finish()?;
    debug!("payload packed: {payload} bytes for {total} symbols");

    Ok(CompressOutcome {
        bytes_read: total,
        bytes_written: HEADER_LEN as u64 + payload,
        codes,
    })
}

/// Decompresses the source into the sink.
///
/// Reproduces the original bytes exactly. If the payload runs out before
/// the header's declared symbol count is reached, the symbols decoded so
/// far remain in the sink and [`HuffError::TruncatedPayload`] reports the
/// partial count; truncation is never a silent success.
pub fn decompress<R, W>(source: &mut R, sink: &mut W) -> Result<DecompressOutcome>
where
    R: Read,
    W: Write,
{
    let header = Header::read_from(source)?;
    let total = header.total;
    if total == 0 {
        sink.flush()?;
        return Ok(DecompressOutcome { symbols_written: 0 });
    }
    if header.freqs.total() != total {
        warn!(
            "header total {} disagrees with frequency sum {}",
            total,
            header.freqs.total()
        );
    }

    let tree = HuffTree::build(&header.freqs).ok_or_else(|| {
        HuffError::BadHeader("nonzero symbol count with an all-zero frequency table".into())
    })?;
    debug!(
        "tree rebuilt from header: {} leaves, {} symbols expected",
        tree.leaf_count(),
        total
    );

    // A single distinct value has no branches to walk; emit it literally.
    if header.freqs.distinct() == 1 {
        let symbol = match tree.node(tree.root()).kind {
            NodeKind::Leaf(symbol) => symbol,
            NodeKind::Internal { .. } => {
                return Err(HuffError::BadHeader(
                    "single-symbol frequency table built a branching tree".into(),
                ));
            }
        };
        let run = [symbol; CHUNK_LEN];
        let mut remaining = total;
        while remaining > 0 {
            let n = remaining.min(CHUNK_LEN as u64) as usize;
            sink.write_all(&run[..n])?;
            remaining -= n as u64;
        }
        sink.flush()?;
        return Ok(DecompressOutcome {
            symbols_written: total,
        });
    }

    let mut reader = BitReader::new(&mut *source);
    let root = tree.root();
    let mut at = root;
    let mut decoded = 0u64;
    let mut out = Vec::with_capacity(CHUNK_LEN);

    while decoded < total {
        let bit = match reader.read_bit()? {
            Some(bit) => bit,
            None => {
                // flush the partial result before reporting the truncation
                sink.write_all(&out)?;
                sink.flush()?;
                return Err(HuffError::TruncatedPayload {
                    decoded,
                    expected: total,
                });
            }
        };
        at = tree.step(at, bit);
        if let NodeKind::Leaf(symbol) = tree.node(at).kind {
            out.push(symbol);
            decoded += 1;
            at = root;
            if out.len() == CHUNK_LEN {
                sink.write_all(&out)?;
                out.clear();
            }
        }
    }

    sink.write_all(&out)?;
    sink.flush()?;
    Ok(DecompressOutcome {
        symbols_written: decoded,
    })
}
