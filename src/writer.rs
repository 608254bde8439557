//! In-memory ZIP writer that assembles a complete archive in one buffer
//!
//! Entries are appended as local records (header + data) in insertion
//! order; `finish` emits the central directory and the 22-byte
//! end-of-central-directory record and returns the finished buffer.
//!
//! Sizes and CRC-32 are written directly in each local header, so the
//! output uses no data descriptors and every offset is final the moment
//! it is written.

use crate::checksum::crc32;
use crate::error::{MemZipError, Result};
use flate2::write::DeflateEncoder;
use flate2::Compression;
use std::io::Write;

/// Compression method to use for archive entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMethod {
    /// No compression (stored)
    Stored,
    /// DEFLATE compression (raw, header-less stream)
    Deflate,
}

impl CompressionMethod {
    pub(crate) fn to_zip_method(self) -> u16 {
        match self {
            CompressionMethod::Stored => 0,
            CompressionMethod::Deflate => 8,
        }
    }
}

/// Metadata kept per written entry until the central directory is emitted
struct FinishedEntry {
    name: String,
    local_header_offset: u32,
    crc32: u32,
    compressed_size: u32,
    uncompressed_size: u32,
    compression_method: u16,
}

/// Builder that assembles a complete ZIP archive in memory
pub struct ZipBuilder {
    output: Vec<u8>,
    entries: Vec<FinishedEntry>,
    compression_method: CompressionMethod,
    compression_level: u32,
}

impl Default for ZipBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ZipBuilder {
    /// Create a builder that stores entries uncompressed
    pub fn new() -> Self {
        Self::with_method(CompressionMethod::Stored, 6)
    }

    /// Create a builder with the given compression method and level (0-9,
    /// ignored for stored entries)
    pub fn with_method(method: CompressionMethod, compression_level: u32) -> Self {
        Self {
            output: Vec::new(),
            entries: Vec::new(),
            compression_method: method,
            compression_level,
        }
    }

    /// Append one entry using the builder's compression method
    pub fn add_entry(&mut self, name: &str, content: &[u8]) -> Result<()> {
        self.add_entry_with_method(name, content, self.compression_method)
    }

    /// Append one entry with an explicit compression method
    ///
    /// A single archive may freely mix stored and deflated entries.
    pub fn add_entry_with_method(
        &mut self,
        name: &str,
        content: &[u8],
        method: CompressionMethod,
    ) -> Result<()> {
        validate_entry_name(name)?;
        if name.len() > u16::MAX as usize {
            return Err(MemZipError::TooLarge(format!(
                "entry name is {} bytes, the name length field holds at most {}",
                name.len(),
                u16::MAX
            )));
        }
        if content.len() > u32::MAX as usize {
            return Err(MemZipError::TooLarge(format!(
                "entry {:?} is {} bytes uncompressed, the size field holds at most {}",
                name,
                content.len(),
                u32::MAX
            )));
        }

        let crc = crc32(content);
        let compressed = match method {
            CompressionMethod::Stored => content.to_vec(),
            CompressionMethod::Deflate => {
                let mut encoder =
                    DeflateEncoder::new(Vec::new(), Compression::new(self.compression_level));
                encoder.write_all(content)?;
                encoder.finish()?
            }
        };
        if compressed.len() > u32::MAX as usize {
            return Err(MemZipError::TooLarge(format!(
                "entry {:?} is {} bytes compressed, the size field holds at most {}",
                name,
                compressed.len(),
                u32::MAX
            )));
        }

        let local_header_offset = self.current_offset("local header")?;
        let compression_method = method.to_zip_method();

        // Local file header
        self.output.extend_from_slice(&[0x50, 0x4b, 0x03, 0x04]); // signature
        self.output.extend_from_slice(&20u16.to_le_bytes()); // version needed
        self.output.extend_from_slice(&0u16.to_le_bytes()); // general purpose bit flag
        self.output.extend_from_slice(&compression_method.to_le_bytes());
        self.output.extend_from_slice(&0u16.to_le_bytes()); // mod time
        self.output.extend_from_slice(&0u16.to_le_bytes()); // mod date
        self.output.extend_from_slice(&crc.to_le_bytes());
        self.output
            .extend_from_slice(&(compressed.len() as u32).to_le_bytes());
        self.output
            .extend_from_slice(&(content.len() as u32).to_le_bytes());
        self.output
            .extend_from_slice(&(name.len() as u16).to_le_bytes());
        self.output.extend_from_slice(&0u16.to_le_bytes()); // extra len
        self.output.extend_from_slice(name.as_bytes());
        self.output.extend_from_slice(&compressed);

        self.entries.push(FinishedEntry {
            name: name.to_string(),
            local_header_offset,
            crc32: crc,
            compressed_size: compressed.len() as u32,
            uncompressed_size: content.len() as u32,
            compression_method,
        });

        Ok(())
    }

    /// Finish the archive (write central directory and trailer) and return
    /// the complete buffer
    pub fn finish(mut self) -> Result<Vec<u8>> {
        if self.entries.len() > u16::MAX as usize {
            return Err(MemZipError::TooLarge(format!(
                "{} entries, the entry count field holds at most {}",
                self.entries.len(),
                u16::MAX
            )));
        }

        let central_dir_offset = self.current_offset("central directory")?;

        for entry in &self.entries {
            self.output.extend_from_slice(&[0x50, 0x4b, 0x01, 0x02]); // central dir signature
            self.output.extend_from_slice(&20u16.to_le_bytes()); // version made by
            self.output.extend_from_slice(&20u16.to_le_bytes()); // version needed
            self.output.extend_from_slice(&0u16.to_le_bytes()); // general purpose bit flag
            self.output
                .extend_from_slice(&entry.compression_method.to_le_bytes());
            self.output.extend_from_slice(&0u16.to_le_bytes()); // mod time
            self.output.extend_from_slice(&0u16.to_le_bytes()); // mod date
            self.output.extend_from_slice(&entry.crc32.to_le_bytes());
            self.output
                .extend_from_slice(&entry.compressed_size.to_le_bytes());
            self.output
                .extend_from_slice(&entry.uncompressed_size.to_le_bytes());
            self.output
                .extend_from_slice(&(entry.name.len() as u16).to_le_bytes());
            self.output.extend_from_slice(&0u16.to_le_bytes()); // extra len
            self.output.extend_from_slice(&0u16.to_le_bytes()); // comment len
            self.output.extend_from_slice(&0u16.to_le_bytes()); // disk number start
            self.output.extend_from_slice(&0u16.to_le_bytes()); // internal attrs
            self.output.extend_from_slice(&0u32.to_le_bytes()); // external attrs
            self.output
                .extend_from_slice(&entry.local_header_offset.to_le_bytes());
            self.output.extend_from_slice(entry.name.as_bytes());
        }

        let central_dir_end = self.current_offset("end of central directory")?;
        let central_dir_size = central_dir_end - central_dir_offset;

        // End of central directory record
        self.output.extend_from_slice(&[0x50, 0x4b, 0x05, 0x06]);
        self.output.extend_from_slice(&0u16.to_le_bytes()); // disk number
        self.output.extend_from_slice(&0u16.to_le_bytes()); // disk with central dir
        self.output
            .extend_from_slice(&(self.entries.len() as u16).to_le_bytes());
        self.output
            .extend_from_slice(&(self.entries.len() as u16).to_le_bytes());
        self.output.extend_from_slice(&central_dir_size.to_le_bytes());
        self.output
            .extend_from_slice(&central_dir_offset.to_le_bytes());
        self.output.extend_from_slice(&0u16.to_le_bytes()); // comment len

        Ok(self.output)
    }

    fn current_offset(&self, what: &str) -> Result<u32> {
        u32::try_from(self.output.len()).map_err(|_| {
            MemZipError::TooLarge(format!(
                "{} would start at byte {}, the offset field holds at most {}",
                what,
                self.output.len(),
                u32::MAX
            ))
        })
    }
}

/// Build a complete archive from `(name, content)` pairs in one call
///
/// Entries are stored uncompressed, matching [`ZipBuilder::new`]. Use the
/// builder directly to deflate entries or mix methods.
pub fn build<'a, I>(entries: I) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = (&'a str, &'a [u8])>,
{
    let mut builder = ZipBuilder::new();
    for (name, content) in entries {
        builder.add_entry(name, content)?;
    }
    builder.finish()
}

fn validate_entry_name(name: &str) -> Result<()> {
    // Names are relative paths with forward slashes; a trailing slash marks
    // a directory entry and is allowed.
    if name.is_empty() || name.starts_with('/') || name.contains('\\') {
        return Err(MemZipError::InvalidEntryName(name.to_string()));
    }
    Ok(())
}
