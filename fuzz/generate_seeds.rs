#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn stex(width: i32, height: i32, data_type: u32, pixel_format: u32, header: usize, texels: &[u8]) -> Vec<u8> {
    let mut out = vec![0u8; header];
    out[0..4].copy_from_slice(b"STEX");
    out[0x08..0x0C].copy_from_slice(&3553u32.to_le_bytes());
    out[0x0C..0x10].copy_from_slice(&width.to_le_bytes());
    out[0x10..0x14].copy_from_slice(&height.to_le_bytes());
    out[0x14..0x18].copy_from_slice(&data_type.to_le_bytes());
    out[0x18..0x1C].copy_from_slice(&pixel_format.to_le_bytes());
    out[0x1C..0x20].copy_from_slice(&(texels.len() as u32).to_le_bytes());
    out[0x20..0x24].copy_from_slice(&(header as u32).to_le_bytes());
    out.extend_from_slice(texels);
    out
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    let ramp: Vec<u8> = (0..=255u8).collect();

    // One 8x8 tile per format: (name, data type, pixel format, tile bytes)
    let formats: [(&str, u32, u32, usize); 13] = [
        ("rgba4444", 0x8033, 0x6752, 128),
        ("rgba5551", 0x8034, 0x6752, 128),
        ("rgba8888", 0x1401, 0x6752, 256),
        ("rgb565", 0x8363, 0x6754, 128),
        ("rgb888", 0x1401, 0x6754, 192),
        ("etc1", 0x1401, 0x675A, 32),
        ("etc1a4", 0x1401, 0x675B, 64),
        ("a8", 0x1401, 0x6756, 64),
        ("a4", 0x6761, 0x6756, 32),
        ("l8", 0x1401, 0x6757, 64),
        ("l4", 0x6761, 0x6757, 32),
        ("la88", 0x1401, 0x6758, 128),
        ("la44", 0x6760, 0x6758, 64),
    ];
    for (name, data_type, pixel_format, len) in formats {
        let file = stex(8, 8, data_type, pixel_format, 0x80, &ramp[..len]);
        fs::write(format!("{dir}/{name}_8x8.stex"), file).unwrap();
    }

    // Header padded to 0x100, partial tiles
    let rgb = stex(10, 6, 0x1401, 0x6754, 0x100, &[0x7F; 4 * 192]);
    fs::write(format!("{dir}/rgb888_10x6_padded.stex"), rgb).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/just_magic.bin"), b"STEX").unwrap();
    let mut short = stex(8, 8, 0x1401, 0x6752, 0x80, &ramp);
    short.truncate(0x80 + 100);
    fs::write(format!("{dir}/rgba8888_truncated.stex"), short).unwrap();
    let bad_pair = stex(8, 8, 0x8363, 0x6752, 0x80, &ramp[..128]);
    fs::write(format!("{dir}/unregistered_pair.stex"), bad_pair).unwrap();
    let negative = stex(-8, 8, 0x1401, 0x6757, 0x80, &ramp[..64]);
    fs::write(format!("{dir}/negative_width.stex"), negative).unwrap();

    println!("Generated seed corpus in {dir}/");
}
