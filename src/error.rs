//! Error types for mem-zip

use std::io;

/// Result type for mem-zip operations
pub type Result<T> = std::result::Result<T, MemZipError>;

/// Error types that can occur while building or parsing archives
#[derive(Debug)]
pub enum MemZipError {
    /// I/O error from the compressor
    Io(io::Error),
    /// Empty or malformed entry name
    InvalidEntryName(String),
    /// A size, count, or offset would overflow its fixed-width header field
    TooLarge(String),
    /// No end-of-central-directory signature at the expected position
    NotAnArchive,
    /// A declared offset or length runs past the end of the buffer
    TruncatedArchive(String),
    /// In-bounds structural corruption (unexpected record signature)
    InvalidFormat(String),
    /// Unsupported compression method
    UnsupportedCompression(u16),
    /// Malformed deflate stream or inflated length mismatch
    Decompression(String),
    /// Stored CRC-32 does not match the decoded content
    ChecksumMismatch(String),
}

impl std::fmt::Display for MemZipError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MemZipError::Io(e) => write!(f, "I/O error: {}", e),
            MemZipError::InvalidEntryName(name) => write!(f, "Invalid entry name: {:?}", name),
            MemZipError::TooLarge(msg) => write!(f, "Archive limit exceeded: {}", msg),
            MemZipError::NotAnArchive => write!(f, "Not a ZIP archive"),
            MemZipError::TruncatedArchive(msg) => write!(f, "Truncated archive: {}", msg),
            MemZipError::InvalidFormat(msg) => write!(f, "Invalid ZIP format: {}", msg),
            MemZipError::UnsupportedCompression(method) => {
                write!(f, "Unsupported compression method: {}", method)
            }
            MemZipError::Decompression(msg) => write!(f, "Decompression failed: {}", msg),
            MemZipError::ChecksumMismatch(msg) => write!(f, "CRC-32 mismatch: {}", msg),
        }
    }
}

impl std::error::Error for MemZipError {}

impl From<io::Error> for MemZipError {
    fn from(err: io::Error) -> Self {
        MemZipError::Io(err)
    }
}
