//! 8×8 tile addressing.
//!
//! Every format is stored tile by tile, tiles in row-major order. Within a
//! tile the 64 texels follow [`TILE_ORDER`]: four 4×4 quadrants, each walked
//! as a recursive 2×2 Z pattern.

use crate::pixel::TEXEL_BYTES;

/// Tile edge length in texels.
pub const TILE_DIM: usize = 8;

/// Texels per tile.
pub const TILE_TEXELS: usize = TILE_DIM * TILE_DIM;

/// Raster position (`row * 8 + column`) of each tile-order index.
#[rustfmt::skip]
pub const TILE_ORDER: [u8; TILE_TEXELS] = [
     0,  1,  8,  9,  2,  3, 10, 11,
    16, 17, 24, 25, 18, 19, 26, 27,
     4,  5, 12, 13,  6,  7, 14, 15,
    20, 21, 28, 29, 22, 23, 30, 31,
    32, 33, 40, 41, 34, 35, 42, 43,
    48, 49, 56, 57, 50, 51, 58, 59,
    36, 37, 44, 45, 38, 39, 46, 47,
    52, 53, 60, 61, 54, 55, 62, 63,
];

/// Absolute pixel index of tile-order texel `t` for the tile at `(x, y)` in a
/// row-major image `width` pixels wide.
///
/// No bounds are applied; positions past the right or bottom edge of images
/// whose size is not a multiple of 8 come out as-is.
#[inline]
pub fn tile_pixel_index(t: usize, x: usize, y: usize, width: usize) -> usize {
    let pos = TILE_ORDER[t] as usize;
    (pos / TILE_DIM + y) * width + (pos % TILE_DIM + x)
}

/// One tile of an image: its origin and the image bounds it is clipped to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    pub x: usize,
    pub y: usize,
    width: usize,
    height: usize,
}

impl Tile {
    pub(crate) fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Byte offset into a BGRA8 image buffer of tile-order texel `t`, or
    /// `None` when that texel lies outside the image.
    #[inline]
    pub fn texel_offset(&self, t: usize) -> Option<usize> {
        let pos = TILE_ORDER[t] as usize;
        self.offset_at(pos % TILE_DIM, pos / TILE_DIM)
    }

    /// Byte offset of the texel at raster position `(px, py)` inside the
    /// tile, or `None` when it lies outside the image.
    #[inline]
    pub fn offset_at(&self, px: usize, py: usize) -> Option<usize> {
        let ix = self.x + px;
        let iy = self.y + py;
        if ix >= self.width || iy >= self.height {
            return None;
        }
        Some((iy * self.width + ix) * TEXEL_BYTES)
    }
}

/// Number of tiles covering a `width × height` image.
pub fn tile_count(width: usize, height: usize) -> usize {
    width.div_ceil(TILE_DIM) * height.div_ceil(TILE_DIM)
}

/// Tiles of one tile row, left to right.
pub(crate) fn tile_row(y: usize, width: usize, height: usize) -> impl Iterator<Item = Tile> {
    (0..width)
        .step_by(TILE_DIM)
        .map(move |x| Tile::new(x, y, width, height))
}

/// Origins of every tile row, top to bottom.
pub(crate) fn tile_rows(height: usize) -> impl Iterator<Item = usize> {
    (0..height).step_by(TILE_DIM)
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn order_is_permutation() {
        let mut seen = [false; TILE_TEXELS];
        for &p in TILE_ORDER.iter() {
            assert!(!seen[p as usize], "duplicate entry {p}");
            seen[p as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn first_quadrant_is_z_order() {
        // (x, y) of the first eight texels.
        let coords: Vec<(usize, usize)> = (0..8)
            .map(|t| {
                let i = tile_pixel_index(t, 0, 0, 8);
                (i % 8, i / 8)
            })
            .collect();
        assert_eq!(
            coords,
            vec![(0, 0), (1, 0), (0, 1), (1, 1), (2, 0), (3, 0), (2, 1), (3, 1)]
        );
    }

    #[test]
    fn tile_indices_cover_block() {
        let width = 24;
        let (x, y) = (8, 16);
        let mut indices: Vec<usize> = (0..TILE_TEXELS)
            .map(|t| tile_pixel_index(t, x, y, width))
            .collect();
        indices.sort_unstable();
        indices.dedup();
        assert_eq!(indices.len(), TILE_TEXELS);
        for row in 0..8 {
            for col in 0..8 {
                let expected = (y + row) * width + x + col;
                assert!(indices.binary_search(&expected).is_ok());
            }
        }
    }

    #[test]
    fn clipped_tile_skips_outside_texels() {
        let tile = Tile::new(8, 8, 10, 10);
        let inside: Vec<usize> = (0..TILE_TEXELS).filter_map(|t| tile.texel_offset(t)).collect();
        assert_eq!(inside.len(), 4);
        let max = inside.iter().copied().max().unwrap();
        assert_eq!(max, (9 * 10 + 9) * 4);
        assert_eq!(tile.offset_at(2, 0), None);
        assert_eq!(tile.offset_at(1, 1), Some((9 * 10 + 9) * 4));
    }

    #[test]
    fn counts_partial_tiles() {
        assert_eq!(tile_count(8, 8), 1);
        assert_eq!(tile_count(10, 10), 4);
        assert_eq!(tile_count(0, 16), 0);
        assert_eq!(tile_row(0, 17, 8).count(), 3);
        assert_eq!(tile_rows(9).collect::<Vec<_>>(), vec![0, 8]);
    }
}
