use core::{alloc::Layout, hint::black_box};
use criterion::{criterion_group, criterion_main, Criterion};
use dxt_codec_bc1::PaletteVariant;
use dxt_codec_bc3::util::{decode_bc3_block, decode_bc4_block, decode_dxn_block, DxnOrder};
use safe_allocator_api::RawAlloc;

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
use pprof::criterion::{Output, PProfProfiler};

pub(crate) fn allocate_align_64(num_bytes: usize) -> RawAlloc {
    let layout = Layout::from_size_align(num_bytes, 64).unwrap();
    RawAlloc::new(layout).unwrap()
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("BC3 Decode Blocks");

    // 8MB of blocks
    let input_size = 8388608;

    let input = allocate_align_64(input_size);
    unsafe {
        let input_ptr = input.as_ptr() as *mut u8;
        for i in 0..input_size {
            // Mixes 8-value and 6-value alpha ramps.
            *input_ptr.add(i) = (i % 251) as u8;
        }
    }

    group.throughput(criterion::Throughput::Bytes(input_size as u64));

    group.bench_function("decode_bc3_block", |b| {
        b.iter(|| unsafe {
            let input_ptr = input.as_ptr();
            for i in 0..input_size / 16 {
                black_box(decode_bc3_block(input_ptr.add(i * 16), PaletteVariant::Ideal));
            }
        })
    });

    group.bench_function("decode_bc4_block", |b| {
        b.iter(|| unsafe {
            let input_ptr = input.as_ptr();
            for i in 0..input_size / 8 {
                black_box(decode_bc4_block(input_ptr.add(i * 8)));
            }
        })
    });

    group.bench_function("decode_dxn_block", |b| {
        b.iter(|| unsafe {
            let input_ptr = input.as_ptr();
            for i in 0..input_size / 16 {
                black_box(decode_dxn_block(input_ptr.add(i * 16), DxnOrder::Xy));
            }
        })
    });

    group.finish();
}

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_benchmark
}

#[cfg(not(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
)))]
criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
