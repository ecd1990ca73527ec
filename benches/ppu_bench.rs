// PPU benchmarks
// Measures dot ticking and the PPUDATA port.

use criterion::{criterion_group, criterion_main, Criterion};
use famicore::Ppu;
use std::hint::black_box;

fn bench_ppu_tick(c: &mut Criterion) {
    c.bench_function("ppu_tick", |b| {
        let mut ppu = Ppu::new();
        b.iter(|| {
            black_box(&mut ppu).tick();
        });
    });

    c.bench_function("ppu_full_frame", |b| {
        let mut ppu = Ppu::new();
        b.iter(|| {
            for _ in 0..(341 * 262) {
                ppu.tick();
            }
            ppu.clear_frame_complete();
        });
    });
}

fn bench_ppudata_port(c: &mut Criterion) {
    c.bench_function("ppudata_write_stream", |b| {
        let mut ppu = Ppu::new();
        b.iter(|| {
            ppu.cpu_write(6, 0x20);
            ppu.cpu_write(6, 0x00);
            for i in 0..64u8 {
                ppu.cpu_write(7, black_box(i));
            }
        });
    });
}

criterion_group!(benches, bench_ppu_tick, bench_ppudata_port);
criterion_main!(benches);
