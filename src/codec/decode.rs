//! Per-tile decoders. Each reads one tile's worth of raw bytes and writes the
//! in-bounds texels into the BGRA8 image.

use crate::etc1::{self, BLOCK_DIM};
use crate::pixel::{TEXEL_BYTES, expand_nibble, resample_channel};
use crate::tile::Tile;

#[inline]
fn bgra(r: u8, g: u8, b: u8, a: u8) -> [u8; 4] {
    [b, g, r, a]
}

#[inline]
fn put(dst: &mut [u8], offset: Option<usize>, texel: [u8; 4]) {
    if let Some(off) = offset {
        dst[off..off + TEXEL_BYTES].copy_from_slice(&texel);
    }
}

/// Formats with `N` whole bytes per texel, stored in tile order.
#[inline]
fn texels<const N: usize>(src: &[u8], dst: &mut [u8], tile: &Tile, f: impl Fn([u8; N]) -> [u8; 4]) {
    let (raw, _) = src.as_chunks::<N>();
    for (t, &bytes) in raw.iter().enumerate() {
        put(dst, tile.texel_offset(t), f(bytes));
    }
}

/// Formats with two 4-bit texels per byte, low nibble first.
#[inline]
fn nibbles(src: &[u8], dst: &mut [u8], tile: &Tile, f: impl Fn(u8) -> [u8; 4]) {
    for (i, &byte) in src.iter().enumerate() {
        put(dst, tile.texel_offset(i * 2), f(expand_nibble(byte)));
        put(dst, tile.texel_offset(i * 2 + 1), f(expand_nibble(byte >> 4)));
    }
}

#[inline]
fn channel(v: u16, shift: u32, bits: u32) -> u8 {
    resample_channel(u32::from(v >> shift), bits, 8)
}

pub(super) fn rgba4444(src: &[u8], dst: &mut [u8], tile: &Tile) {
    texels::<2>(src, dst, tile, |b| {
        let v = u16::from_le_bytes(b);
        bgra(channel(v, 12, 4), channel(v, 8, 4), channel(v, 4, 4), channel(v, 0, 4))
    });
}

pub(super) fn rgba5551(src: &[u8], dst: &mut [u8], tile: &Tile) {
    texels::<2>(src, dst, tile, |b| {
        let v = u16::from_le_bytes(b);
        bgra(channel(v, 11, 5), channel(v, 6, 5), channel(v, 1, 5), channel(v, 0, 1))
    });
}

pub(super) fn rgba8888(src: &[u8], dst: &mut [u8], tile: &Tile) {
    // Stream order is A, B, G, R.
    texels::<4>(src, dst, tile, |[a, b, g, r]| bgra(r, g, b, a));
}

pub(super) fn rgb565(src: &[u8], dst: &mut [u8], tile: &Tile) {
    texels::<2>(src, dst, tile, |b| {
        let v = u16::from_le_bytes(b);
        bgra(channel(v, 11, 5), channel(v, 5, 6), channel(v, 0, 5), 0xFF)
    });
}

pub(super) fn rgb888(src: &[u8], dst: &mut [u8], tile: &Tile) {
    texels::<3>(src, dst, tile, |[b, g, r]| bgra(r, g, b, 0xFF));
}

pub(super) fn a8(src: &[u8], dst: &mut [u8], tile: &Tile) {
    texels::<1>(src, dst, tile, |[a]| bgra(0xFF, 0xFF, 0xFF, a));
}

pub(super) fn a4(src: &[u8], dst: &mut [u8], tile: &Tile) {
    nibbles(src, dst, tile, |a| bgra(0xFF, 0xFF, 0xFF, a));
}

pub(super) fn l8(src: &[u8], dst: &mut [u8], tile: &Tile) {
    texels::<1>(src, dst, tile, |[l]| bgra(l, l, l, 0xFF));
}

pub(super) fn l4(src: &[u8], dst: &mut [u8], tile: &Tile) {
    nibbles(src, dst, tile, |l| bgra(l, l, l, 0xFF));
}

pub(super) fn la88(src: &[u8], dst: &mut [u8], tile: &Tile) {
    texels::<2>(src, dst, tile, |[a, l]| bgra(l, l, l, a));
}

pub(super) fn la44(src: &[u8], dst: &mut [u8], tile: &Tile) {
    texels::<1>(src, dst, tile, |[la]| {
        let l = expand_nibble(la >> 4);
        bgra(l, l, l, expand_nibble(la))
    });
}

pub(super) fn etc1(src: &[u8], dst: &mut [u8], tile: &Tile) {
    let (blocks, _) = src.as_chunks::<8>();
    for (i, &color) in blocks.iter().enumerate() {
        etc1_block(dst, tile, i, u64::from_le_bytes(color), None);
    }
}

pub(super) fn etc1_a4(src: &[u8], dst: &mut [u8], tile: &Tile) {
    // Each block is the alpha word followed by the color word.
    let (blocks, _) = src.as_chunks::<16>();
    for (i, block) in blocks.iter().enumerate() {
        let (alpha, color) = block.split_at(8);
        etc1_block(dst, tile, i, le_u64(color), Some(le_u64(alpha)));
    }
}

#[inline]
fn le_u64(bytes: &[u8]) -> u64 {
    u64::from_le_bytes(core::array::from_fn(|i| bytes[i]))
}

/// Place block `index` (0..4, row-major 2×2 within the tile) in raster order.
fn etc1_block(dst: &mut [u8], tile: &Tile, index: usize, color: u64, alpha: Option<u64>) {
    let decoded = etc1::decode_block(color, alpha);
    let bx = (index % 2) * BLOCK_DIM;
    let by = (index / 2) * BLOCK_DIM;
    for py in 0..BLOCK_DIM {
        for px in 0..BLOCK_DIM {
            put(dst, tile.offset_at(bx + px, by + py), decoded[py * BLOCK_DIM + px]);
        }
    }
}
