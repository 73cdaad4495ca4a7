use criterion::{Criterion, Throughput};
use enough::Unstoppable;
use zenstex::{Codec, TextureFormat};

const W: u32 = 512;
const H: u32 = 512;

fn pixels() -> Vec<u8> {
    (0..W as usize * H as usize * 4)
        .map(|i| (i % 251) as u8)
        .collect()
}

// === Benchmark groups ===

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    group.throughput(Throughput::Elements(u64::from(W * H)));
    let src = pixels();
    for codec in Codec::all() {
        // Any bytes form a valid stream, so reuse the pixel buffer for the
        // decode-only formats.
        let raw = match codec.encode(&src, W, H, &Unstoppable) {
            Ok(raw) => raw,
            Err(_) => src[..codec.encoded_len(W, H).unwrap()].to_vec(),
        };
        let mut dst = vec![0u8; src.len()];
        group.bench_function(codec.name(), |b| {
            b.iter(|| {
                codec
                    .decode_into(&raw, W, H, &mut dst, &Unstoppable)
                    .unwrap()
            });
        });
    }
    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    group.throughput(Throughput::Elements(u64::from(W * H)));
    let src = pixels();
    for codec in Codec::all().iter().filter(|c| c.can_encode()) {
        group.bench_function(codec.name(), |b| {
            b.iter(|| codec.encode(&src, W, H, &Unstoppable).unwrap());
        });
    }
    group.finish();
}

fn bench_stex_rgba(c: &mut Criterion) {
    let mut group = c.benchmark_group("stex_rgba_layout");
    group.throughput(Throughput::Elements(u64::from(W * H)));
    let file = zenstex::encode_stex(&pixels(), W, H, TextureFormat::RGBA8888, Unstoppable).unwrap();
    group.bench_function("decode_stex_rgba8", |b| {
        b.iter(|| {
            zenstex::DecodeRequest::from_stex(&file)
                .unwrap()
                .with_layout(zenstex::PixelLayout::Rgba8)
                .decode(Unstoppable)
                .unwrap()
        });
    });
    group.finish();
}

fn main() {
    let mut criterion = Criterion::default().configure_from_args();
    bench_decode(&mut criterion);
    bench_encode(&mut criterion);
    bench_stex_rgba(&mut criterion);
    criterion.final_summary();
}
