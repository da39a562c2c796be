// src/utils/error.rs

//! Error types for the huffpack library.

use thiserror::Error;

/// The primary error type for all operations in the huffpack library.
#[derive(Error, Debug)]
pub enum HuffError {
    /// An error occurred during I/O operations (e.g., file not found, permission denied).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The frequency scan saw zero bytes. Compressing an empty source is
    /// refused outright rather than producing a header-only artifact.
    #[error("input is empty, nothing to compress")]
    EmptyInput,

    /// The fixed-size header of a compressed stream could not be read.
    #[error("bad header: {0}")]
    BadHeader(String),

    /// The packed bitstream ran out before the declared symbol count was
    /// reached. Symbols decoded up to that point have already been written
    /// to the sink.
    #[error("compressed payload ended early: decoded {decoded} of {expected} symbols")]
    TruncatedPayload { decoded: u64, expected: u64 },

    /// A byte with a nonzero frequency had no entry in the code table.
    /// This is an invariant violation in tree or code-table construction,
    /// kept as a runtime safety net.
    #[error("no code assigned for byte value {0:#04x}")]
    MissingCode(u8),
}

/// A specialized `Result` type for huffpack operations.
pub type Result<T> = std::result::Result<T, HuffError>;
