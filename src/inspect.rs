//! Archive inspection built on the reader
//!
//! Produces a name/size listing and decoded text for UTF-8 entries. All
//! parsing goes through [`ZipReader`]; this module only formats what the
//! reader decodes.

use crate::error::Result;
use crate::reader::{ZipEntry, ZipReader};

/// Summary of one archive entry
#[derive(Debug, Clone)]
pub struct EntryReport {
    pub name: String,
    /// Uncompressed size in bytes
    pub size: u32,
    /// Decoded content for UTF-8 entries, `None` for binary or directory
    /// entries
    pub text: Option<String>,
}

/// Summarize every entry of an archive buffer
pub fn inspect(data: &[u8]) -> Result<Vec<EntryReport>> {
    let reader = ZipReader::parse(data)?;
    Ok(reader
        .into_entries()
        .into_iter()
        .map(|entry| {
            let ZipEntry {
                name,
                uncompressed_size,
                content,
                ..
            } = entry;
            let text = if name.ends_with('/') {
                None
            } else {
                String::from_utf8(content).ok()
            };
            EntryReport {
                name,
                size: uncompressed_size,
                text,
            }
        })
        .collect())
}

/// Render a listing of the reports followed by the content of each
/// text-bearing entry
pub fn render_report(reports: &[EntryReport]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} entries:\n", reports.len()));
    for report in reports {
        out.push_str(&format!("  {} ({} bytes)\n", report.name, report.size));
    }
    for report in reports {
        if let Some(text) = &report.text {
            out.push_str(&format!("\n==== {} ====\n", report.name));
            out.push_str(text);
            if !text.ends_with('\n') {
                out.push('\n');
            }
        }
    }
    out
}
