//! Gzip framing of the container.
//!
//! A Live set file is a single gzip member wrapping UTF-8 document text.
//! Both directions work on explicit streams in fixed-size chunks.

use std::io::{Read, Write};

use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;

use crate::error::{AlsError, Result};

/// Chunk size used when inflating and deflating.
pub const CHUNK_SIZE: usize = 16 * 1024;

/// Compression level used when none is configured.
pub const DEFAULT_LEVEL: u32 = 9;

/// Decompress a container stream into document text.
///
/// Fails with [`AlsError::Decompression`] when the stream is empty,
/// unreadable, not a gzip frame, or does not hold UTF-8 text.
pub fn decompress<R: Read>(mut input: R) -> Result<String> {
    let mut compressed = Vec::new();
    input
        .read_to_end(&mut compressed)
        .map_err(|e| AlsError::decompression(format!("unreadable input: {e}")))?;
    if compressed.is_empty() {
        return Err(AlsError::decompression("input stream is empty"));
    }

    let mut decoder = GzDecoder::new(compressed.as_slice());
    let mut buffer = vec![0u8; CHUNK_SIZE];
    let mut inflated = Vec::new();
    loop {
        let read = decoder
            .read(&mut buffer)
            .map_err(|e| AlsError::decompression(format!("inflate failed: {e}")))?;
        if read == 0 {
            break;
        }
        inflated.extend_from_slice(&buffer[..read]);
    }
    tracing::debug!(
        compressed = compressed.len(),
        inflated = inflated.len(),
        "decompressed container"
    );

    String::from_utf8(inflated)
        .map_err(|e| AlsError::decompression(format!("content is not UTF-8: {e}")))
}

/// Compress document text into a container stream.
///
/// Returns the output stream once the gzip trailer has been written.
/// `level` is clamped to `0..=9`.
pub fn compress<W: Write>(output: W, text: &str, level: u32) -> Result<W> {
    let mut encoder = GzEncoder::new(output, Compression::new(level.min(9)));
    for chunk in text.as_bytes().chunks(CHUNK_SIZE) {
        encoder.write_all(chunk)?;
    }
    let mut output = encoder.finish()?;
    output.flush()?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compress_then_decompress() {
        let text = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<Ableton />\n".repeat(2000);
        let bytes = compress(Vec::new(), &text, DEFAULT_LEVEL).unwrap();
        assert_eq!(&bytes[..2], &[0x1f, 0x8b]);
        let back = decompress(bytes.as_slice()).unwrap();
        assert_eq!(back, text);
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let err = decompress(&[][..]).unwrap_err();
        assert!(matches!(err, AlsError::Decompression { .. }));
    }

    #[test]
    fn test_plain_text_is_rejected() {
        let err = decompress(&b"<Ableton />"[..]).unwrap_err();
        assert!(matches!(err, AlsError::Decompression { .. }));
    }

    #[test]
    fn test_truncated_frame_is_rejected() {
        let bytes = compress(Vec::new(), &"LiveSet ".repeat(500), DEFAULT_LEVEL).unwrap();
        let err = decompress(&bytes[..bytes.len() / 2]).unwrap_err();
        assert!(matches!(err, AlsError::Decompression { .. }));
    }

    #[test]
    fn test_non_utf8_payload_is_rejected() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&[0xff, 0xfe, 0x00]).unwrap();
        let bytes = encoder.finish().unwrap();
        let err = decompress(bytes.as_slice()).unwrap_err();
        assert!(matches!(err, AlsError::Decompression { .. }));
    }
}
