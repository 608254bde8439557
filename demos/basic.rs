//! Basic usage example for mem-zip

use mem_zip::{CompressionMethod, ZipBuilder, ZipReader};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== mem-zip Basic Example ===\n");

    // Build an archive in memory
    println!("Building archive...");
    let mut builder = ZipBuilder::new();

    builder.add_entry("hello.txt", b"Hello, mem-zip!")?;
    builder.add_entry("folder/nested.txt", b"This is a nested file.")?;
    builder.add_entry_with_method(
        "data.txt",
        b"Line 1\nLine 2\nLine 3\n",
        CompressionMethod::Deflate,
    )?;

    let archive = builder.finish()?;
    println!("Built {} bytes\n", archive.len());

    // Read the archive back
    println!("Parsing archive...");
    let reader = ZipReader::parse(&archive)?;

    println!("Entries:");
    for entry in reader.entries() {
        println!(
            "  - {} ({} bytes, method {})",
            entry.name, entry.uncompressed_size, entry.compression_method
        );
    }
    println!();

    let entry = reader
        .find_entry("hello.txt")
        .ok_or("hello.txt missing from archive")?;
    println!("hello.txt: {}", String::from_utf8_lossy(&entry.content));

    println!("All done!");

    Ok(())
}
