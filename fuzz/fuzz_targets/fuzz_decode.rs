#![no_main]
use libfuzzer_sys::fuzz_target;
use zenstex::*;

// 64 MiB of texels is far beyond any 3DS texture.
const LIMITS: Limits = Limits {
    max_width: Some(1024),
    max_height: Some(1024),
    max_pixels: None,
    max_memory_bytes: None,
    max_texel_bytes: Some(64 << 20),
};

fuzz_target!(|data: &[u8]| {
    // Whole-file decode must never panic
    let _ = decode_stex(data, enough::Unstoppable);

    if let Ok(request) = DecodeRequest::from_stex(data) {
        if let Ok(out) = request
            .with_limits(&LIMITS)
            .with_layout(PixelLayout::Rgba8)
            .decode(enough::Unstoppable)
        {
            assert_eq!(out.pixels().len(), out.stride() * out.height as usize);
            assert_eq!(out.to_rgba8().len(), (out.width * out.height) as usize);
        }
    }

    // Raw streams: first byte picks the codec, next two the size
    let [sel, w, h, rest @ ..] = data else { return };
    let codecs = Codec::all();
    let codec = &codecs[*sel as usize % codecs.len()];
    let _ = decode_texture(rest, u32::from(*w), u32::from(*h), codec.format(), enough::Unstoppable);
});
