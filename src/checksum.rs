//! CRC-32 checksum for entry integrity
//!
//! Table-driven implementation of the reflected CRC-32 used by the ZIP
//! format (polynomial 0xEDB88320). The 256-entry table is built once on
//! first use and shared read-only by every call.

use std::sync::OnceLock;

/// Reflected CRC-32 polynomial
const POLYNOMIAL: u32 = 0xEDB8_8320;

static TABLE: OnceLock<[u32; 256]> = OnceLock::new();

fn table() -> &'static [u32; 256] {
    TABLE.get_or_init(|| {
        let mut table = [0u32; 256];
        for (i, slot) in table.iter_mut().enumerate() {
            let mut c = i as u32;
            for _ in 0..8 {
                c = if c & 1 != 0 {
                    POLYNOMIAL ^ (c >> 1)
                } else {
                    c >> 1
                };
            }
            *slot = c;
        }
        table
    })
}

/// Compute the CRC-32 of `data`.
///
/// Total function over any byte sequence; the CRC of empty input is 0.
pub fn crc32(data: &[u8]) -> u32 {
    let table = table();
    let mut crc = 0xFFFF_FFFFu32;
    for &byte in data {
        crc = table[((crc ^ byte as u32) & 0xFF) as usize] ^ (crc >> 8);
    }
    crc ^ 0xFFFF_FFFF
}

#[cfg(test)]
mod tests {
    use super::crc32;

    #[test]
    fn empty_input_is_zero() {
        assert_eq!(crc32(&[]), 0);
    }

    #[test]
    fn standard_check_vector() {
        // The check value published for CRC-32/ISO-HDLC.
        assert_eq!(crc32(b"123456789"), 0xCBF4_3926);
    }

    #[test]
    fn deterministic() {
        let data = b"The quick brown fox jumps over the lazy dog";
        assert_eq!(crc32(data), crc32(data));
    }

    #[test]
    fn matches_crc32fast() {
        let samples: &[&[u8]] = &[
            b"",
            b"a",
            b"hello world",
            b"\x00\x01\x02\x03\xff\xfe\xfd",
            &[0u8; 4096],
        ];
        for sample in samples {
            assert_eq!(crc32(sample), crc32fast::hash(sample));
        }
    }

    #[test]
    fn single_byte_change_changes_crc() {
        let input = b"template.json".to_vec();
        let baseline = crc32(&input);
        for i in 0..input.len() {
            let mut mutated = input.clone();
            mutated[i] ^= 0x01;
            assert_ne!(crc32(&mutated), baseline, "flip at byte {}", i);
        }
    }
}
