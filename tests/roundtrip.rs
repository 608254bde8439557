//! Round-trip tests: everything the writer produces, the reader decodes
//! back unchanged.

use mem_zip::{build, parse, CompressionMethod, MemZipError, ZipBuilder, ZipReader};

#[test]
fn test_roundtrip_preserves_entries() {
    let inputs: Vec<(&str, &[u8])> = vec![
        ("template.json", b"{\"templateKey\":\"recruitment\"}"),
        ("SKILL.md", b"# Skill\n\nInstructions go here.\n"),
        ("docs/README.md", b"nested path entry"),
    ];

    let archive = build(inputs.clone()).unwrap();
    let entries = parse(&archive).unwrap();

    assert_eq!(entries.len(), inputs.len());
    for (entry, (name, content)) in entries.iter().zip(&inputs) {
        assert_eq!(entry.name, *name);
        assert_eq!(entry.content, *content);
    }
}

#[test]
fn test_roundtrip_preserves_order() {
    // Names deliberately out of lexicographic order.
    let names = ["zzz.txt", "aaa.txt", "mmm.txt"];

    let mut builder = ZipBuilder::new();
    for name in names {
        builder.add_entry(name, name.as_bytes()).unwrap();
    }
    let archive = builder.finish().unwrap();

    let entries = parse(&archive).unwrap();
    let parsed_names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(parsed_names, names);
}

#[test]
fn test_empty_archive() {
    let archive = build([]).unwrap();

    // Just the 22-byte trailer.
    assert_eq!(archive.len(), 22);

    let entries = parse(&archive).unwrap();
    assert!(entries.is_empty());
}

#[test]
fn test_stored_by_default() {
    let content = b"stored content, no transformation";
    let archive = build([("raw.bin", content.as_slice())]).unwrap();

    let entries = parse(&archive).unwrap();
    assert_eq!(entries[0].compression_method, 0);
    assert_eq!(entries[0].compressed_size, entries[0].uncompressed_size);
    assert_eq!(entries[0].content, content);
}

#[test]
fn test_mixed_methods() {
    let compressible = "The quick brown fox jumps over the lazy dog. ".repeat(200);

    let mut builder = ZipBuilder::new();
    builder.add_entry("stored.txt", compressible.as_bytes()).unwrap();
    builder
        .add_entry_with_method(
            "deflated.txt",
            compressible.as_bytes(),
            CompressionMethod::Deflate,
        )
        .unwrap();
    let archive = builder.finish().unwrap();

    let reader = ZipReader::parse(&archive).unwrap();
    let stored = reader.find_entry("stored.txt").unwrap();
    let deflated = reader.find_entry("deflated.txt").unwrap();

    assert_eq!(stored.compression_method, 0);
    assert_eq!(stored.compressed_size, stored.uncompressed_size);
    assert_eq!(stored.content, compressible.as_bytes());

    assert_eq!(deflated.compression_method, 8);
    assert!(deflated.compressed_size < deflated.uncompressed_size);
    assert_eq!(deflated.content, compressible.as_bytes());
}

#[test]
fn test_deflate_builder() {
    let content = vec![b'A'; 64 * 1024];

    let mut builder = ZipBuilder::with_method(CompressionMethod::Deflate, 6);
    builder.add_entry("aaaa.bin", &content).unwrap();
    let archive = builder.finish().unwrap();

    let entries = parse(&archive).unwrap();
    assert_eq!(entries[0].compression_method, 8);
    assert!((entries[0].compressed_size as usize) < content.len());
    assert_eq!(entries[0].content, content);
}

#[test]
fn test_binary_content() {
    let content: Vec<u8> = (0..=255).cycle().take(1000).collect();
    let archive = build([("blob.bin", content.as_slice())]).unwrap();

    let entries = parse(&archive).unwrap();
    assert_eq!(entries[0].content, content);
}

#[test]
fn test_empty_entry_content() {
    let archive = build([("empty.txt", b"".as_slice())]).unwrap();

    let entries = parse(&archive).unwrap();
    assert_eq!(entries[0].uncompressed_size, 0);
    assert!(entries[0].content.is_empty());
}

#[test]
fn test_directory_entry() {
    let mut builder = ZipBuilder::new();
    builder.add_entry("docs/", b"").unwrap();
    builder.add_entry("docs/guide.md", b"guide").unwrap();
    let archive = builder.finish().unwrap();

    let entries = parse(&archive).unwrap();
    assert_eq!(entries[0].name, "docs/");
    assert_eq!(entries[1].name, "docs/guide.md");
}

#[test]
fn test_find_entry() {
    let archive = build([
        ("a.txt", b"first".as_slice()),
        ("b.txt", b"second".as_slice()),
    ])
    .unwrap();

    let reader = ZipReader::parse(&archive).unwrap();
    assert_eq!(reader.find_entry("b.txt").unwrap().content, b"second");
    assert!(reader.find_entry("missing.txt").is_none());
}

#[test]
fn test_parse_verified_accepts_valid_archive() {
    let mut builder = ZipBuilder::new();
    builder.add_entry("stored.txt", b"stored").unwrap();
    builder
        .add_entry_with_method("deflated.txt", b"deflated deflated deflated", CompressionMethod::Deflate)
        .unwrap();
    let archive = builder.finish().unwrap();

    let reader = ZipReader::parse_verified(&archive).unwrap();
    assert_eq!(reader.entries().len(), 2);
}

#[test]
fn test_invalid_entry_names() {
    let cases = ["", "/absolute.txt", "windows\\style.txt"];

    for name in cases {
        let mut builder = ZipBuilder::new();
        let err = builder.add_entry(name, b"content").unwrap_err();
        assert!(
            matches!(err, MemZipError::InvalidEntryName(_)),
            "expected InvalidEntryName for {:?}, got {:?}",
            name,
            err
        );
    }
}

#[test]
fn test_oversized_name_rejected() {
    let name = "a".repeat(u16::MAX as usize + 1);
    let mut builder = ZipBuilder::new();
    let err = builder.add_entry(&name, b"content").unwrap_err();
    assert!(matches!(err, MemZipError::TooLarge(_)));
}
