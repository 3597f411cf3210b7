//! Performance measurement for complete picture generation

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use mondrigen::algorithm::generator::PictureGenerator;
use std::hint::black_box;

/// Measures time to generate and color a full-size picture with 7 lines
fn bench_generate_picture(c: &mut Criterion) {
    c.bench_function("generate_picture_1080x1920_7_lines", |b| {
        b.iter(|| {
            let mut generator = PictureGenerator::new(12345);

            let Ok(picture) = generator.generate_picture(1080, 1920, 7) else {
                return;
            };
            black_box(picture.rectangles.len());
        });
    });
}

criterion_group!(benches, bench_generate_picture);
criterion_main!(benches);
