use criterion::{Criterion, criterion_group, criterion_main};
use rgb24::Color;
use std::hint::black_box;

fn construct(c: &mut Criterion) {
    let mut group = c.benchmark_group("construct");
    group.bench_function("new", |b| {
        b.iter(|| Color::new(black_box(0x12), black_box(0x34), black_box(0x56)))
    });
    group.bench_function("from_packed", |b| {
        b.iter(|| Color::from_packed(black_box(0x123456)))
    });
    group.bench_function("from_normalized", |b| {
        b.iter(|| Color::from_normalized(black_box(0.25), black_box(0.5), black_box(0.75)))
    });
    group.finish();
}

fn algebra(c: &mut Criterion) {
    let colors: Vec<Color> = (0..=0xFFFFFFu32)
        .step_by(0x1001)
        .map(|n| Color::from_packed(n).unwrap())
        .collect();
    c.bench_function("combine_remove_invert", |b| {
        b.iter(|| {
            colors
                .iter()
                .fold(Color::BLACK, |acc, &color| acc.combine(color).remove(color.invert()))
        })
    });
}

fn format(c: &mut Criterion) {
    c.bench_function("to_string", |b| b.iter(|| black_box(Color::GRAY).to_string()));
}

criterion_group!(benches, construct, algebra, format);
criterion_main!(benches);
