#![no_main]
use libfuzzer_sys::fuzz_target;
use zenstex::*;

fuzz_target!(|data: &[u8]| {
    // If we can decode it, writing it back in an encodable format and decoding
    // again must produce identical pixels
    let Ok(decoded) = decode_stex(data, enough::Unstoppable) else {
        return;
    };
    let format = decoded.format.encodable_fallback();
    let Ok(codec) = Codec::lookup(format) else {
        return;
    };
    if !codec.can_encode() {
        return; // A4 and L4 are decode-only
    }

    let first = encode_stex(
        decoded.pixels(), decoded.width, decoded.height, format, enough::Unstoppable,
    )
    .expect("decoded texture failed to encode");
    let Ok(decoded2) = decode_stex(&first, enough::Unstoppable) else {
        panic!("re-encoded data failed to decode");
    };
    assert_eq!(decoded.width, decoded2.width);
    assert_eq!(decoded.height, decoded2.height);

    // Quantized formats settle after one pass
    let second = encode_stex(
        decoded2.pixels(), decoded2.width, decoded2.height, format, enough::Unstoppable,
    )
    .expect("second encode failed");
    assert_eq!(first, second, "roundtrip stream mismatch");
});
