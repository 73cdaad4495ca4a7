//! ETC1 block decompression.
//!
//! A block covers 4×4 texels and is one little-endian 64-bit word:
//!
//! | bits  | meaning |
//! |-------|---------|
//! | 0–15  | low bit of each texel's modifier column |
//! | 16–31 | high bit of each texel's modifier column |
//! | 32    | flip: top/bottom sub-blocks when set, left/right when clear |
//! | 33    | differential mode |
//! | 34–36 | modifier table for sub-block 2 |
//! | 37–39 | modifier table for sub-block 1 |
//! | 40–63 | base colors |
//!
//! Texel bits are column-major: texel `(px, py)` uses bit `px * 4 + py`. The
//! alpha variant stores a second 64-bit word of 4-bit alpha values in the
//! same column-major order.

use crate::pixel::{ALPHA, BLUE, GREEN, RED, expand_nibble};

/// Texels per block edge.
pub const BLOCK_DIM: usize = 4;

/// Signed intensity offsets, indexed by table and then by modifier column.
pub const MODIFIER_TABLES: [[i32; 4]; 8] = [
    [2, 8, -2, -8],
    [5, 17, -5, -17],
    [9, 29, -9, -29],
    [13, 42, -13, -42],
    [18, 60, -18, -60],
    [24, 80, -24, -80],
    [33, 106, -33, -106],
    [47, 183, -47, -183],
];

/// Decoded block, BGRA8 texels in raster order (`py * 4 + px`).
pub type DecodedBlock = [[u8; 4]; BLOCK_DIM * BLOCK_DIM];

/// Base colors of one sub-block, `[r, g, b]`.
type BaseColor = [u8; 3];

#[inline]
fn bits(block: u64, shift: u32, mask: u64) -> u8 {
    ((block >> shift) & mask) as u8
}

/// Replicate the top bits of a 5-bit value into the low 3 bits.
///
/// Takes `i32` because differential colors may leave the 5-bit range; the
/// result is truncated to a byte without clamping.
#[inline]
fn expand_5bit(v: i32) -> u8 {
    ((v << 3) | (v >> 2)) as u8
}

/// Sign-extend a 3-bit two's-complement delta.
#[inline]
fn delta_3bit(v: u8) -> i32 {
    let v = i32::from(v & 0x07);
    if v >= 4 { v - 8 } else { v }
}

fn base_colors(block: u64) -> (BaseColor, BaseColor) {
    if (block >> 33) & 1 == 0 {
        // Individual mode: two independent 4-bit colors.
        let c1 = [
            expand_nibble(bits(block, 60, 0x0F)),
            expand_nibble(bits(block, 52, 0x0F)),
            expand_nibble(bits(block, 44, 0x0F)),
        ];
        let c2 = [
            expand_nibble(bits(block, 56, 0x0F)),
            expand_nibble(bits(block, 48, 0x0F)),
            expand_nibble(bits(block, 40, 0x0F)),
        ];
        (c1, c2)
    } else {
        // Differential mode: 5-bit base plus 3-bit signed deltas.
        let r = i32::from(bits(block, 59, 0x1F));
        let g = i32::from(bits(block, 51, 0x1F));
        let b = i32::from(bits(block, 43, 0x1F));
        let dr = delta_3bit(bits(block, 56, 0x07));
        let dg = delta_3bit(bits(block, 48, 0x07));
        let db = delta_3bit(bits(block, 40, 0x07));
        let c1 = [expand_5bit(r), expand_5bit(g), expand_5bit(b)];
        let c2 = [expand_5bit(r + dr), expand_5bit(g + dg), expand_5bit(b + db)];
        (c1, c2)
    }
}

/// Decode one ETC1 block.
///
/// With `alpha` the texel alpha comes from the 4-bit plane; without it every
/// texel is opaque. Any input is a valid block.
pub fn decode_block(block: u64, alpha: Option<u64>) -> DecodedBlock {
    let table1 = &MODIFIER_TABLES[bits(block, 37, 0x07) as usize];
    let table2 = &MODIFIER_TABLES[bits(block, 34, 0x07) as usize];
    let flip = (block >> 32) & 1 == 1;
    let (c1, c2) = base_colors(block);

    let mut out = [[0u8; 4]; BLOCK_DIM * BLOCK_DIM];
    for py in 0..BLOCK_DIM {
        for px in 0..BLOCK_DIM {
            let bit = (px * 4 + py) as u32;
            let column = (((block >> bit) & 1) | (((block >> (bit + 16)) & 1) << 1)) as usize;

            let first = if flip { py < 2 } else { px < 2 };
            let (base, modifier) = if first {
                (&c1, table1[column])
            } else {
                (&c2, table2[column])
            };

            let texel = &mut out[py * BLOCK_DIM + px];
            texel[RED] = (i32::from(base[0]) + modifier).clamp(0, 255) as u8;
            texel[GREEN] = (i32::from(base[1]) + modifier).clamp(0, 255) as u8;
            texel[BLUE] = (i32::from(base[2]) + modifier).clamp(0, 255) as u8;
            texel[ALPHA] = match alpha {
                Some(mask) => expand_nibble(((mask >> (bit * 4)) & 0x0F) as u8),
                None => 0xFF,
            };
        }
    }
    out
}
