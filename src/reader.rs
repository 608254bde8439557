//! ZIP reader that decodes a fully buffered archive
//!
//! Parsing starts from the end of the buffer: the end-of-central-directory
//! record anchors the central directory, the central directory supplies
//! every entry's metadata and local header offset, and each entry's data is
//! sliced out of the corresponding local record and decompressed. The
//! central directory is the only source of truth; the reader never scans
//! the buffer for signatures.

use crate::checksum::crc32;
use crate::error::{MemZipError, Result};
use flate2::read::DeflateDecoder;
use std::io::Read;

/// ZIP local file header signature
const LOCAL_FILE_HEADER_SIGNATURE: u32 = 0x04034b50;

/// ZIP central directory signature
const CENTRAL_DIRECTORY_SIGNATURE: u32 = 0x02014b50;

/// ZIP end of central directory signature
const END_OF_CENTRAL_DIRECTORY_SIGNATURE: u32 = 0x06054b50;

/// Fixed size of the end-of-central-directory record without a comment
const END_OF_CENTRAL_DIRECTORY_SIZE: usize = 22;

/// Fixed portion of a local file header, before name and extra field
const LOCAL_FILE_HEADER_SIZE: usize = 30;

/// Fixed portion of a central directory record, before the name
const CENTRAL_DIRECTORY_HEADER_SIZE: usize = 46;

/// One decoded archive entry
#[derive(Debug, Clone)]
pub struct ZipEntry {
    pub name: String,
    pub compressed_size: u32,
    pub uncompressed_size: u32,
    pub compression_method: u16,
    /// Decompressed content
    pub content: Vec<u8>,
}

/// Decoded view of an archive buffer
///
/// Entries appear in central-directory order, which for archives produced
/// by [`ZipBuilder`](crate::ZipBuilder) equals insertion order.
pub struct ZipReader {
    entries: Vec<ZipEntry>,
}

impl ZipReader {
    /// Parse a complete archive buffer, decompressing every entry
    pub fn parse(data: &[u8]) -> Result<Self> {
        Ok(Self {
            entries: parse_entries(data, false)?,
        })
    }

    /// Parse a complete archive buffer and verify each entry's CRC-32
    /// against the value stored in the central directory
    pub fn parse_verified(data: &[u8]) -> Result<Self> {
        Ok(Self {
            entries: parse_entries(data, true)?,
        })
    }

    /// Get list of all decoded entries
    pub fn entries(&self) -> &[ZipEntry] {
        &self.entries
    }

    /// Find an entry by name
    pub fn find_entry(&self, name: &str) -> Option<&ZipEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Consume the reader, returning the decoded entries
    pub fn into_entries(self) -> Vec<ZipEntry> {
        self.entries
    }
}

/// Decode every entry of `data` in central-directory order
pub fn parse(data: &[u8]) -> Result<Vec<ZipEntry>> {
    Ok(ZipReader::parse(data)?.into_entries())
}

fn parse_entries(data: &[u8], verify_checksums: bool) -> Result<Vec<ZipEntry>> {
    // No archive comment is supported, so the trailer must start exactly
    // 22 bytes before the end of the input.
    if data.len() < END_OF_CENTRAL_DIRECTORY_SIZE {
        return Err(MemZipError::NotAnArchive);
    }
    let eocd_offset = data.len() - END_OF_CENTRAL_DIRECTORY_SIZE;
    if read_u32_le(data, eocd_offset)? != END_OF_CENTRAL_DIRECTORY_SIGNATURE {
        return Err(MemZipError::NotAnArchive);
    }

    let total_entries = read_u16_le(data, eocd_offset + 10)? as usize;
    let central_dir_size = read_u32_le(data, eocd_offset + 12)? as usize;
    let central_dir_offset = read_u32_le(data, eocd_offset + 16)? as usize;

    match central_dir_offset.checked_add(central_dir_size) {
        Some(end) if end <= eocd_offset => {}
        _ => {
            return Err(MemZipError::TruncatedArchive(format!(
                "central directory at offset {} with size {} runs past the trailer at offset {}",
                central_dir_offset, central_dir_size, eocd_offset
            )));
        }
    }

    let mut entries = Vec::with_capacity(total_entries);
    let mut offset = central_dir_offset;

    for _ in 0..total_entries {
        let signature = read_u32_le(data, offset)?;
        if signature != CENTRAL_DIRECTORY_SIGNATURE {
            return Err(MemZipError::InvalidFormat(format!(
                "expected central directory signature at offset {}, found 0x{:08x}",
                offset, signature
            )));
        }

        let compression_method = read_u16_le(data, offset + 10)?;
        let stored_crc = read_u32_le(data, offset + 16)?;
        let compressed_size = read_u32_le(data, offset + 20)?;
        let uncompressed_size = read_u32_le(data, offset + 24)?;
        let name_len = read_u16_le(data, offset + 28)? as usize;
        let extra_len = read_u16_le(data, offset + 30)? as usize;
        let comment_len = read_u16_le(data, offset + 32)? as usize;
        let local_header_offset = read_u32_le(data, offset + 42)? as usize;

        let name_start = offset + CENTRAL_DIRECTORY_HEADER_SIZE;
        let name_bytes = data.get(name_start..name_start + name_len).ok_or_else(|| {
            MemZipError::TruncatedArchive(format!(
                "{}-byte entry name at offset {} runs past the end of the archive",
                name_len, name_start
            ))
        })?;
        let name = String::from_utf8_lossy(name_bytes).to_string();

        let content = read_entry_data(
            data,
            local_header_offset,
            compressed_size,
            uncompressed_size,
            compression_method,
            &name,
        )?;

        if verify_checksums {
            let actual = crc32(&content);
            if actual != stored_crc {
                return Err(MemZipError::ChecksumMismatch(format!(
                    "entry {:?}: stored 0x{:08x}, computed 0x{:08x}",
                    name, stored_crc, actual
                )));
            }
        }

        entries.push(ZipEntry {
            name,
            compressed_size,
            uncompressed_size,
            compression_method,
            content,
        });

        offset = name_start + name_len + extra_len + comment_len;
    }

    Ok(entries)
}

/// Locate and decode one entry's data via its local record
fn read_entry_data(
    data: &[u8],
    local_header_offset: usize,
    compressed_size: u32,
    uncompressed_size: u32,
    compression_method: u16,
    name: &str,
) -> Result<Vec<u8>> {
    let signature = read_u32_le(data, local_header_offset)?;
    if signature != LOCAL_FILE_HEADER_SIGNATURE {
        return Err(MemZipError::InvalidFormat(format!(
            "entry {:?}: expected local file header signature at offset {}, found 0x{:08x}",
            name, local_header_offset, signature
        )));
    }

    // Local name/extra lengths may legitimately differ from the central
    // record's, so re-read them to find where the data starts.
    let name_len = read_u16_le(data, local_header_offset + 26)? as usize;
    let extra_len = read_u16_le(data, local_header_offset + 28)? as usize;
    let data_start = local_header_offset + LOCAL_FILE_HEADER_SIZE + name_len + extra_len;

    let compressed = data_start
        .checked_add(compressed_size as usize)
        .and_then(|data_end| data.get(data_start..data_end))
        .ok_or_else(|| {
            MemZipError::TruncatedArchive(format!(
                "entry {:?}: {} data bytes at offset {} run past the end of the archive",
                name, compressed_size, data_start
            ))
        })?;

    match compression_method {
        0 => Ok(compressed.to_vec()),
        8 => {
            let mut decoder = DeflateDecoder::new(compressed);
            let mut decompressed = Vec::new();
            decoder
                .read_to_end(&mut decompressed)
                .map_err(|e| MemZipError::Decompression(format!("entry {:?}: {}", name, e)))?;
            if decompressed.len() != uncompressed_size as usize {
                return Err(MemZipError::Decompression(format!(
                    "entry {:?}: inflated to {} bytes, expected {}",
                    name,
                    decompressed.len(),
                    uncompressed_size
                )));
            }
            Ok(decompressed)
        }
        other => Err(MemZipError::UnsupportedCompression(other)),
    }
}

fn read_u16_le(data: &[u8], offset: usize) -> Result<u16> {
    match data.get(offset..offset + 2) {
        Some(bytes) => Ok(u16::from_le_bytes([bytes[0], bytes[1]])),
        None => Err(MemZipError::TruncatedArchive(format!(
            "2-byte field at offset {} runs past the end of the archive",
            offset
        ))),
    }
}

fn read_u32_le(data: &[u8], offset: usize) -> Result<u32> {
    match data.get(offset..offset + 4) {
        Some(bytes) => Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])),
        None => Err(MemZipError::TruncatedArchive(format!(
            "4-byte field at offset {} runs past the end of the archive",
            offset
        ))),
    }
}
