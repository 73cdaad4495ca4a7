//! Per-tile encoders for the uncompressed formats. Texels outside the image
//! are packed from transparent black so every tile has its full size.

use alloc::vec::Vec;

use crate::pixel::{ALPHA, BLUE, GREEN, RED, TEXEL_BYTES, luminance, resample_channel};
use crate::tile::{TILE_TEXELS, Tile};

/// Visit every texel of the tile in tile order.
#[inline]
fn each_texel(src: &[u8], tile: &Tile, mut f: impl FnMut(&[u8; 4])) {
    for t in 0..TILE_TEXELS {
        let texel = match tile.texel_offset(t) {
            Some(off) => core::array::from_fn(|i| src[off + i]),
            None => [0u8; TEXEL_BYTES],
        };
        f(&texel);
    }
}

#[inline]
fn narrow(v: u8, bits: u32) -> u16 {
    u16::from(resample_channel(u32::from(v), 8, bits))
}

pub(super) fn rgba4444(src: &[u8], tile: &Tile, out: &mut Vec<u8>) {
    each_texel(src, tile, |p| {
        let v = narrow(p[RED], 4) << 12
            | narrow(p[GREEN], 4) << 8
            | narrow(p[BLUE], 4) << 4
            | narrow(p[ALPHA], 4);
        out.extend_from_slice(&v.to_le_bytes());
    });
}

pub(super) fn rgba5551(src: &[u8], tile: &Tile, out: &mut Vec<u8>) {
    each_texel(src, tile, |p| {
        let v = narrow(p[RED], 5) << 11
            | narrow(p[GREEN], 5) << 6
            | narrow(p[BLUE], 5) << 1
            | narrow(p[ALPHA], 1);
        out.extend_from_slice(&v.to_le_bytes());
    });
}

pub(super) fn rgba8888(src: &[u8], tile: &Tile, out: &mut Vec<u8>) {
    each_texel(src, tile, |p| {
        out.extend_from_slice(&[p[ALPHA], p[BLUE], p[GREEN], p[RED]]);
    });
}

pub(super) fn rgb565(src: &[u8], tile: &Tile, out: &mut Vec<u8>) {
    each_texel(src, tile, |p| {
        let v = narrow(p[RED], 5) << 11 | narrow(p[GREEN], 6) << 5 | narrow(p[BLUE], 5);
        out.extend_from_slice(&v.to_le_bytes());
    });
}

pub(super) fn rgb888(src: &[u8], tile: &Tile, out: &mut Vec<u8>) {
    each_texel(src, tile, |p| {
        out.extend_from_slice(&[p[BLUE], p[GREEN], p[RED]]);
    });
}

pub(super) fn a8(src: &[u8], tile: &Tile, out: &mut Vec<u8>) {
    each_texel(src, tile, |p| out.push(p[ALPHA]));
}

pub(super) fn l8(src: &[u8], tile: &Tile, out: &mut Vec<u8>) {
    each_texel(src, tile, |p| out.push(luminance(p)));
}

pub(super) fn la88(src: &[u8], tile: &Tile, out: &mut Vec<u8>) {
    each_texel(src, tile, |p| {
        out.push(p[ALPHA]);
        out.push(luminance(p));
    });
}

pub(super) fn la44(src: &[u8], tile: &Tile, out: &mut Vec<u8>) {
    each_texel(src, tile, |p| {
        let a = resample_channel(u32::from(p[ALPHA]), 8, 4);
        let l = resample_channel(u32::from(luminance(p)), 8, 4);
        out.push(l << 4 | a);
    });
}
