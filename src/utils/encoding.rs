//! Byte-preserving file reading with BOM handling.
//!
//! INI values are opaque, so file contents are never decoded and re-encoded
//! as a whole. The only normalization is at the byte-order mark:
//! - UTF-8 BOM: stripped, the rest is passed through untouched
//! - UTF-16 LE/BE BOM: transcoded to UTF-8 so `[`, `]` and `=` are single bytes
//! - no BOM: bytes passed through untouched (UTF-8, Latin-1, stray bytes alike)

use encoding_rs::{Encoding, UTF_8};
use std::io;
use std::path::Path;

/// Read a whole file as raw bytes with any BOM normalized away.
///
/// Only I/O failures (missing file, permission denied, ...) are errors.
pub fn read_source(path: &Path) -> io::Result<Vec<u8>> {
    let bytes = std::fs::read(path)?;
    Ok(normalize_bom(bytes))
}

/// Strip a UTF-8 BOM or transcode BOM-marked UTF-16 to UTF-8.
pub fn normalize_bom(bytes: Vec<u8>) -> Vec<u8> {
    match Encoding::for_bom(&bytes) {
        None => bytes,
        Some((encoding, bom_len)) if encoding == UTF_8 => bytes[bom_len..].to_vec(),
        Some((encoding, bom_len)) => {
            let (decoded, had_errors) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
            if had_errors {
                tracing::debug!("Replaced invalid {} sequences while transcoding", encoding.name());
            }
            decoded.into_owned().into_bytes()
        }
    }
}
