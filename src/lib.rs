//! # mem-zip: In-Memory ZIP Archive Codec
//!
//! `mem-zip` builds and parses complete ZIP archives as byte buffers. It
//! has no file, network, or console surface of its own: callers hand it an
//! ordered list of `(name, bytes)` entries and get back one contiguous
//! archive buffer, or hand it a fully buffered archive and get back the
//! decoded entries.
//!
//! ## Features
//!
//! - **Whole-archive write**: local records, central directory, and
//!   trailer assembled in one pass with exact offset bookkeeping
//! - **Whole-archive read**: trailer-anchored central directory walk, no
//!   signature scanning
//! - **Store and deflate**: entries are stored raw by default; raw DEFLATE
//!   is available per builder or per entry, and the reader always
//!   understands both
//! - **Typed failures**: every malformed input maps to a specific error,
//!   nothing is silently swallowed
//!
//! ## Quick Start
//!
//! ### Building an archive
//!
//! ```
//! use mem_zip::ZipBuilder;
//!
//! let mut builder = ZipBuilder::new();
//! builder.add_entry("hello.txt", b"Hello, World!")?;
//! builder.add_entry("docs/readme.md", b"# Hello\n")?;
//! let archive = builder.finish()?;
//!
//! assert_eq!(&archive[..4], &[0x50, 0x4b, 0x03, 0x04]);
//! # Ok::<(), mem_zip::MemZipError>(())
//! ```
//!
//! ### Reading an archive
//!
//! ```
//! use mem_zip::{build, ZipReader};
//!
//! let archive = build([("hello.txt", b"Hello, World!".as_slice())])?;
//!
//! let reader = ZipReader::parse(&archive)?;
//! for entry in reader.entries() {
//!     println!("{}: {} bytes", entry.name, entry.uncompressed_size);
//! }
//!
//! let entry = reader.find_entry("hello.txt").unwrap();
//! assert_eq!(entry.content, b"Hello, World!");
//! # Ok::<(), mem_zip::MemZipError>(())
//! ```

pub mod checksum;
pub mod error;
pub mod inspect;
pub mod reader;
pub mod writer;

pub use checksum::crc32;
pub use error::{MemZipError, Result};
pub use inspect::{inspect, render_report, EntryReport};
pub use reader::{parse, ZipEntry, ZipReader};
pub use writer::{build, CompressionMethod, ZipBuilder};
