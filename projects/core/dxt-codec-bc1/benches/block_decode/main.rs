use core::{alloc::Layout, hint::black_box};
use criterion::{criterion_group, criterion_main, Criterion};
use dxt_codec_bc1::util::decode_bc1_block;
use dxt_codec_bc1::PaletteVariant;
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
    let mut group = c.benchmark_group("BC1 Decode Blocks");

    // 8MB of BC1 blocks
    let bc1_size = 8388608;
    let blocks_count = bc1_size / 8;

    let input = allocate_align_64(bc1_size);
    unsafe {
        let input_ptr = input.as_ptr() as *mut u8;
        for i in 0..bc1_size {
            // Mixes 4-colour and 3-colour blocks.
            *input_ptr.add(i) = (i % 255) as u8;
        }
    }

    group.throughput(criterion::Throughput::Bytes(bc1_size as u64));

    for variant in PaletteVariant::all_values().iter().copied() {
        group.bench_function(format!("decode_bc1_block {variant:?}"), |b| {
            b.iter(|| unsafe {
                let input_ptr = input.as_ptr();
                for i in 0..blocks_count {
                    black_box(decode_bc1_block(input_ptr.add(i * 8), variant));
                }
            })
        });
    }

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
