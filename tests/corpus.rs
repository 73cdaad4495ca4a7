//! Test corpus: roundtrip tests with various patterns, sizes, and formats.

use enough::Unstoppable;
use zenstex::*;

fn checkerboard(w: usize, h: usize) -> Vec<u8> {
    let mut pixels = vec![0u8; w * h * 4];
    for y in 0..h {
        for x in 0..w {
            let off = (y * w + x) * 4;
            let texel = if (x + y) % 2 == 0 {
                [0xEE, 0xCC, 0xAA, 0xFF]
            } else {
                [0x11, 0x33, 0x55, 0x00]
            };
            pixels[off..off + 4].copy_from_slice(&texel);
        }
    }
    pixels
}

fn noise_pattern(w: usize, h: usize) -> Vec<u8> {
    let mut pixels = vec![0u8; w * h * 4];
    let mut state: u32 = 0xDEAD_BEEF;
    for p in pixels.iter_mut() {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        *p = state as u8;
    }
    pixels
}

/// Decoded texel at `(x, y)` of a BGRA8 buffer.
fn at(pixels: &[u8], w: usize, x: usize, y: usize) -> [u8; 4] {
    let off = (y * w + x) * 4;
    [pixels[off], pixels[off + 1], pixels[off + 2], pixels[off + 3]]
}

const SIZES: [(u32, u32); 7] = [(1, 1), (7, 3), (8, 8), (9, 9), (16, 8), (33, 17), (64, 64)];

// ── Stream geometry ──────────────────────────────────────────────────

#[test]
fn every_codec_consumes_exact_stream() {
    for codec in Codec::all() {
        for (w, h) in SIZES {
            let len = codec.encoded_len(w, h).unwrap();
            let tiles = tile::tile_count(w as usize, h as usize);
            assert_eq!(len, tiles * codec.bytes_per_tile(), "{}", codec.name());

            let raw = noise_pattern(len.div_ceil(4).max(1), 1);
            let decoded =
                decode_texture(&raw[..len], w, h, codec.format(), Unstoppable).unwrap();
            assert_eq!(decoded.pixels().len(), (w * h * 4) as usize);

            if len > 0 {
                assert!(
                    matches!(
                        decode_texture(&raw[..len - 1], w, h, codec.format(), Unstoppable),
                        Err(StexError::UnexpectedEof)
                    ),
                    "{} {w}x{h}",
                    codec.name()
                );
            }
        }
    }
}

#[test]
fn trailing_bytes_ignored() {
    let raw = noise_pattern(40, 1);
    let exact = decode_texture(&raw[..128], 8, 8, TextureFormat::RGB565, Unstoppable).unwrap();
    let long = decode_texture(&raw, 8, 8, TextureFormat::RGB565, Unstoppable).unwrap();
    assert_eq!(exact.pixels(), long.pixels());
}

// ── Encodable formats ────────────────────────────────────────────────

#[test]
fn checkerboard_rgba8888_all_sizes() {
    for (w, h) in SIZES {
        let pixels = checkerboard(w as usize, h as usize);
        let raw = encode_texture(&pixels, w, h, TextureFormat::RGBA8888, Unstoppable).unwrap();
        let decoded = decode_texture(&raw, w, h, TextureFormat::RGBA8888, Unstoppable).unwrap();
        assert_eq!(decoded.pixels(), &pixels[..], "{w}x{h}");
    }
}

#[test]
fn noise_rgb888_keeps_color_drops_alpha() {
    for (w, h) in SIZES {
        let pixels = noise_pattern(w as usize, h as usize);
        let raw = encode_texture(&pixels, w, h, TextureFormat::RGB888, Unstoppable).unwrap();
        let decoded = decode_texture(&raw, w, h, TextureFormat::RGB888, Unstoppable).unwrap();
        for (src, out) in pixels.chunks_exact(4).zip(decoded.pixels().chunks_exact(4)) {
            assert_eq!(&src[..3], &out[..3]);
            assert_eq!(out[3], 0xFF);
        }
    }
}

#[test]
fn checkerboard_rgba4444_is_exact() {
    // Every channel value is a duplicated nibble, so 4-bit storage is exact.
    let (w, h) = (33u32, 17u32);
    let pixels = checkerboard(w as usize, h as usize);
    let raw = encode_texture(&pixels, w, h, TextureFormat::RGBA4444, Unstoppable).unwrap();
    let decoded = decode_texture(&raw, w, h, TextureFormat::RGBA4444, Unstoppable).unwrap();
    assert_eq!(decoded.pixels(), &pixels[..]);
}

#[test]
fn checkerboard_rgba5551_alpha_is_binary() {
    let (w, h) = (16u32, 16u32);
    let pixels = checkerboard(w as usize, h as usize);
    let raw = encode_texture(&pixels, w, h, TextureFormat::RGBA5551, Unstoppable).unwrap();
    let decoded = decode_texture(&raw, w, h, TextureFormat::RGBA5551, Unstoppable).unwrap();
    for y in 0..h as usize {
        for x in 0..w as usize {
            let alpha = at(decoded.pixels(), w as usize, x, y)[3];
            let expected = if (x + y) % 2 == 0 { 0xFF } else { 0x00 };
            assert_eq!(alpha, expected, "({x}, {y})");
        }
    }
}

#[test]
fn luminance_formats_average_color() {
    let (w, h) = (9u32, 9u32);
    let pixels = checkerboard(w as usize, h as usize);
    // Light texels average to 0xCC, dark ones to 0x33.
    let raw = encode_texture(&pixels, w, h, TextureFormat::L8, Unstoppable).unwrap();
    let decoded = decode_texture(&raw, w, h, TextureFormat::L8, Unstoppable).unwrap();
    assert_eq!(at(decoded.pixels(), 9, 0, 0), [0xCC, 0xCC, 0xCC, 0xFF]);
    assert_eq!(at(decoded.pixels(), 9, 1, 0), [0x33, 0x33, 0x33, 0xFF]);
    assert_eq!(at(decoded.pixels(), 9, 8, 8), [0xCC, 0xCC, 0xCC, 0xFF]);

    let raw = encode_texture(&pixels, w, h, TextureFormat::LA44, Unstoppable).unwrap();
    let decoded = decode_texture(&raw, w, h, TextureFormat::LA44, Unstoppable).unwrap();
    assert_eq!(at(decoded.pixels(), 9, 0, 0), [0xCC, 0xCC, 0xCC, 0xFF]);
    assert_eq!(at(decoded.pixels(), 9, 1, 0), [0x33, 0x33, 0x33, 0x00]);

    let raw = encode_texture(&pixels, w, h, TextureFormat::LA88, Unstoppable).unwrap();
    let decoded = decode_texture(&raw, w, h, TextureFormat::LA88, Unstoppable).unwrap();
    assert_eq!(at(decoded.pixels(), 9, 2, 1), [0x33, 0x33, 0x33, 0x00]);
}

#[test]
fn noise_a8_keeps_alpha_only() {
    let (w, h) = (16u32, 24u32);
    let pixels = noise_pattern(w as usize, h as usize);
    let raw = encode_texture(&pixels, w, h, TextureFormat::A8, Unstoppable).unwrap();
    assert_eq!(raw.len(), 6 * 64);
    let decoded = decode_texture(&raw, w, h, TextureFormat::A8, Unstoppable).unwrap();
    for (src, out) in pixels.chunks_exact(4).zip(decoded.pixels().chunks_exact(4)) {
        assert_eq!(out, &[0xFF, 0xFF, 0xFF, src[3]]);
    }
}

// ── Decode-only formats ──────────────────────────────────────────────

#[test]
fn four_bit_formats_low_nibble_first() {
    // Byte 0x5A: texel 0 gets 0xA, texel 1 gets 0x5.
    let raw = [0x5Au8; 32];
    let decoded = decode_texture(&raw, 8, 8, TextureFormat::L4, Unstoppable).unwrap();
    assert_eq!(at(decoded.pixels(), 8, 0, 0), [0xAA, 0xAA, 0xAA, 0xFF]);
    assert_eq!(at(decoded.pixels(), 8, 1, 0), [0x55, 0x55, 0x55, 0xFF]);

    let decoded = decode_texture(&raw, 8, 8, TextureFormat::A4, Unstoppable).unwrap();
    assert_eq!(at(decoded.pixels(), 8, 0, 0), [0xFF, 0xFF, 0xFF, 0xAA]);
    assert_eq!(at(decoded.pixels(), 8, 1, 0), [0xFF, 0xFF, 0xFF, 0x55]);

    assert!(matches!(
        encode_texture(&checkerboard(8, 8), 8, 8, TextureFormat::A4, Unstoppable),
        Err(StexError::UnsupportedOperation { .. })
    ));
}

#[test]
fn etc1_noise_never_fails() {
    for (w, h) in SIZES {
        let len = Codec::lookup(TextureFormat::ETC1A4)
            .unwrap()
            .encoded_len(w, h)
            .unwrap();
        let raw = noise_pattern(len.div_ceil(4).max(1), 1);
        for format in [TextureFormat::ETC1, TextureFormat::ETC1A4] {
            let decoded = decode_texture(&raw, w, h, format, Unstoppable).unwrap();
            assert_eq!(decoded.pixels().len(), (w * h * 4) as usize);
            if format == TextureFormat::ETC1 {
                assert!(decoded.pixels().chunks_exact(4).all(|p| p[3] == 0xFF));
            }
        }
    }
}

#[test]
fn etc1_reencodes_through_fallback() {
    let raw = noise_pattern(16, 1);
    let file_pixels = decode_texture(&raw, 8, 8, TextureFormat::ETC1, Unstoppable).unwrap();
    let target = file_pixels.format.encodable_fallback();
    let stex = encode_stex(file_pixels.pixels(), 8, 8, target, Unstoppable).unwrap();
    let back = decode_stex(&stex, Unstoppable).unwrap();
    assert_eq!(back.format, TextureFormat::RGBA8888);
    assert_eq!(back.pixels(), file_pixels.pixels());
}

// ── Container ────────────────────────────────────────────────────────

#[test]
fn stex_roundtrip_every_encodable_format() {
    let (w, h) = (20u32, 12u32);
    let pixels = checkerboard(w as usize, h as usize);
    for codec in Codec::all().iter().filter(|c| c.can_encode()) {
        let stex = encode_stex(&pixels, w, h, codec.format(), Unstoppable).unwrap();
        let header = read_stex_header(&stex).unwrap();
        assert_eq!(header.format, codec.format());
        assert_eq!((header.width, header.height), (w, h));
        assert_eq!(stex.len(), STEX_HEADER_LEN + codec.encoded_len(w, h).unwrap());

        let raw = encode_texture(&pixels, w, h, codec.format(), Unstoppable).unwrap();
        let from_file = decode_stex(&stex, Unstoppable).unwrap();
        let from_raw = decode_texture(&raw, w, h, codec.format(), Unstoppable).unwrap();
        assert_eq!(from_file.pixels(), from_raw.pixels(), "{}", codec.name());
    }
}

#[cfg(feature = "serde")]
#[test]
fn metadata_sidecar_matches_header() {
    let pixels = checkerboard(8, 4);
    let stex = encode_stex(&pixels, 8, 4, TextureFormat::LA44, Unstoppable).unwrap();
    let header = read_stex_header(&stex).unwrap();
    let meta = StexMetadata::from_header("font/glyphs.stex", &header);
    let json = serde_json::to_string(&meta).unwrap();
    assert!(json.contains(r#""DataType":"UnsignedByte44DMP""#), "{json}");
    assert!(json.contains(r#""PixelFormat":"LuminanceAlphaNativeDMP""#), "{json}");
    let back: StexMetadata = serde_json::from_str(&json).unwrap();
    assert_eq!(back.format(), TextureFormat::LA44);
}
