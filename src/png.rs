//! Minimal PNG writer for 8-bit truecolor images.
//!
//! Emits exactly four parts: the signature, `IHDR`, a single `IDAT` holding
//! the zlib stream of unfiltered scanlines, and `IEND`. No ancillary chunks
//! are written, so identical pixels always produce identical files.

use std::io::Write;
use std::path::Path;

use flate2::write::ZlibEncoder;
use flate2::Compression;

use crate::Error;

/// The eight bytes every PNG file starts with.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

const BIT_DEPTH: u8 = 8;
const COLOR_TYPE_RGB: u8 = 2;
const FILTER_NONE: u8 = 0;

/// Frame one chunk: big-endian length, type, data, CRC32 over type + data.
pub fn png_chunk(chunk_type: &[u8; 4], data: &[u8]) -> Vec<u8> {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(chunk_type);
    hasher.update(data);
    let crc = hasher.finalize();

    let mut out = Vec::with_capacity(data.len() + 12);
    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    out.extend_from_slice(chunk_type);
    out.extend_from_slice(data);
    out.extend_from_slice(&crc.to_be_bytes());
    out
}

/// Encode a row-major RGB buffer as PNG.
///
/// # Errors
///
/// [`Error::BufferSize`] if `rgb` is not exactly `width * height * 3` bytes.
///
/// # Example
///
/// ```
/// use gc9307_preview::png::{encode_png_rgb, PNG_SIGNATURE};
///
/// let png = encode_png_rgb(&[255, 0, 0, 0, 0, 255], 2, 1).unwrap();
/// assert_eq!(&png[..8], &PNG_SIGNATURE);
/// assert_eq!(&png[12..16], b"IHDR");
/// ```
pub fn encode_png_rgb(rgb: &[u8], width: u32, height: u32) -> Result<Vec<u8>, Error> {
    let stride = width as usize * 3;
    let expected = stride * height as usize;
    if rgb.len() != expected {
        return Err(Error::BufferSize {
            expected,
            got: rgb.len(),
        });
    }

    let mut raw = Vec::with_capacity(expected + height as usize);
    if stride > 0 {
        for row in rgb.chunks_exact(stride) {
            raw.push(FILTER_NONE);
            raw.extend_from_slice(row);
        }
    }
    let compressed = zlib_compress(&raw).map_err(Error::Compress)?;

    let mut ihdr = Vec::with_capacity(13);
    ihdr.extend_from_slice(&width.to_be_bytes());
    ihdr.extend_from_slice(&height.to_be_bytes());
    // bit depth, color type, compression, filter, interlace
    ihdr.extend_from_slice(&[BIT_DEPTH, COLOR_TYPE_RGB, 0, 0, 0]);

    let mut out = Vec::with_capacity(compressed.len() + 64);
    out.extend_from_slice(&PNG_SIGNATURE);
    out.extend(png_chunk(b"IHDR", &ihdr));
    out.extend(png_chunk(b"IDAT", &compressed));
    out.extend(png_chunk(b"IEND", &[]));
    Ok(out)
}

/// Encode and write `rgb` to `path`.
pub fn write_png_rgb(path: &Path, rgb: &[u8], width: u32, height: u32) -> Result<usize, Error> {
    let png = encode_png_rgb(rgb, width, height)?;
    crate::render::write_asset(path, &png)?;
    Ok(png.len())
}

fn zlib_compress(raw: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::with_capacity(raw.len() / 4), Compression::best());
    encoder.write_all(raw)?;
    encoder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::ZlibDecoder;
    use std::io::Read;

    /// Split a PNG into (type, data, stored crc) triples.
    fn chunks(png: &[u8]) -> Vec<([u8; 4], Vec<u8>, u32)> {
        let mut out = Vec::new();
        let mut pos = 8;
        while pos < png.len() {
            let len = u32::from_be_bytes(png[pos..pos + 4].try_into().unwrap()) as usize;
            let ty: [u8; 4] = png[pos + 4..pos + 8].try_into().unwrap();
            let data = png[pos + 8..pos + 8 + len].to_vec();
            let crc = u32::from_be_bytes(png[pos + 8 + len..pos + 12 + len].try_into().unwrap());
            out.push((ty, data, crc));
            pos += 12 + len;
        }
        out
    }

    #[test]
    fn test_chunk_layout() {
        let chunk = png_chunk(b"IEND", &[]);
        // Well-known CRC of an empty IEND chunk.
        assert_eq!(chunk, [0, 0, 0, 0, b'I', b'E', b'N', b'D', 0xAE, 0x42, 0x60, 0x82]);
    }

    #[test]
    fn test_structure_and_crcs() {
        let rgb: Vec<u8> = (0..4 * 3 * 3).map(|i| i as u8).collect();
        let png = encode_png_rgb(&rgb, 4, 3).unwrap();
        assert_eq!(&png[..8], &PNG_SIGNATURE);

        let chunks = chunks(&png);
        let types: Vec<&[u8; 4]> = chunks.iter().map(|(t, _, _)| t).collect();
        assert_eq!(types, [b"IHDR", b"IDAT", b"IEND"]);

        for (ty, data, crc) in &chunks {
            let mut hasher = crc32fast::Hasher::new();
            hasher.update(ty);
            hasher.update(data);
            assert_eq!(hasher.finalize(), *crc);
        }

        let ihdr = &chunks[0].1;
        assert_eq!(ihdr.len(), 13);
        assert_eq!(&ihdr[0..4], &4u32.to_be_bytes());
        assert_eq!(&ihdr[4..8], &3u32.to_be_bytes());
        assert_eq!(&ihdr[8..], &[8, 2, 0, 0, 0]);
    }

    #[test]
    fn test_idat_holds_unfiltered_scanlines() {
        let rgb: Vec<u8> = (0..2 * 2 * 3).map(|i| i as u8 * 10).collect();
        let png = encode_png_rgb(&rgb, 2, 2).unwrap();
        let idat = &chunks(&png)[1].1;

        let mut raw = Vec::new();
        ZlibDecoder::new(&idat[..]).read_to_end(&mut raw).unwrap();
        assert_eq!(raw.len(), 2 * (1 + 6));
        assert_eq!(raw[0], 0);
        assert_eq!(&raw[1..7], &rgb[0..6]);
        assert_eq!(raw[7], 0);
        assert_eq!(&raw[8..14], &rgb[6..12]);
    }

    #[test]
    fn test_buffer_size_mismatch() {
        let err = encode_png_rgb(&[0; 5], 1, 2).unwrap_err();
        assert!(matches!(err, Error::BufferSize { expected: 6, got: 5 }));
    }

    #[test]
    fn test_deterministic_output() {
        let rgb = vec![7u8; 320 * 4 * 3];
        assert_eq!(
            encode_png_rgb(&rgb, 320, 4).unwrap(),
            encode_png_rgb(&rgb, 320, 4).unwrap()
        );
    }
}
