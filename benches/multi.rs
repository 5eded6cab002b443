use std::hint::black_box;

use bigbase::{base16, base58, base64_rfc4648, BigUint};
use criterion::{criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, SeedableRng};

fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xbe9c);

    // below the Karatsuba cutoff on one side, far above it on the other
    let small_a = BigUint::random_bits(&mut rng, 512);
    let small_b = BigUint::random_bits(&mut rng, 512);
    let big_a = BigUint::random_bits(&mut rng, 16 * 1024);
    let big_b = BigUint::random_bits(&mut rng, 16 * 1024);
    let lopsided = BigUint::random_bits(&mut rng, 2 * 1024);

    c.bench_function("BigUint Mul 512", |b| {
        b.iter(|| black_box(&small_a) * black_box(&small_b))
    });
    c.bench_function("BigUint Mul 16384", |b| {
        b.iter(|| black_box(&big_a) * black_box(&big_b))
    });
    c.bench_function("BigUint Mul 16384x2048", |b| {
        b.iter(|| black_box(&big_a) * black_box(&lopsided))
    });

    let divisor = BigUint::random_bits(&mut rng, 2 * 1024) | BigUint::one() << 2047;
    c.bench_function("BigUint Divmod 16384/2048", |b| {
        b.iter(|| black_box(&big_a).divmod(black_box(&divisor)).unwrap())
    });

    let payload = BigUint::random_bits(&mut rng, 2048);
    let base58_encoded = base58().encode(&payload, false);
    let base16_encoded = base16().encode(&payload, false);
    let base64_encoded = base64_rfc4648().encode(&payload, false);

    c.bench_function("BaseX base58 encode 2048", |b| {
        b.iter(|| base58().encode(black_box(&payload), false))
    });
    c.bench_function("BaseX base58 decode 2048", |b| {
        b.iter(|| base58().decode(black_box(&base58_encoded), false).unwrap())
    });
    c.bench_function("BaseX base16 encode 2048", |b| {
        b.iter(|| base16().encode(black_box(&payload), false))
    });
    c.bench_function("BaseX base16 decode 2048", |b| {
        b.iter(|| base16().decode(black_box(&base16_encoded), false).unwrap())
    });
    c.bench_function("BaseX base64 rfc4648 decode 2048", |b| {
        b.iter(|| {
            base64_rfc4648()
                .decode(black_box(&base64_encoded), false)
                .unwrap()
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
