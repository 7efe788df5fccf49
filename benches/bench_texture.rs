use criterion::{Criterion, criterion_group, criterion_main};

use lithos_tools::texture;

fn bench_generate_block(c: &mut Criterion) {
    c.bench_function("generate_block_16x16", |b| {
        b.iter(texture::generate_block_texture)
    });
}

fn bench_encode_block(c: &mut Criterion) {
    let img = texture::generate_block_texture();
    c.bench_function("encode_block_16x16", |b| b.iter(|| img.encode()));
}

criterion_group!(benches, bench_generate_block, bench_encode_block);
criterion_main!(benches);
