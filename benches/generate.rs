use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use num_bigint::BigInt;
use rand::RngCore;
use std::hint::black_box;
use toy_bbs::{BlumBlumShub, BlumBlumShubBuilder};

const OAKLEY_1024: &str = "FFFFFFFFFFFFFFFFC90FDAA22168C234C4C6628B80DC1CD1\
    29024E088A67CC74020BBEA63B139B22514A08798E3404DDEF9519B3CD3A431B\
    302B0A6DF25F14374FE1356D6D51C245E485B576625E7EC6F44C42E9A637ED6B\
    0BFF5CB6F406B7EDEE386BFB5A899FA5AE9F24117C4B1FE649286651ECE65381\
    FFFFFFFFFFFFFFFF";

fn params() -> (BigInt, BigInt, BigInt) {
    let p = BigInt::parse_bytes(OAKLEY_1024.as_bytes(), 16).expect("valid hex");
    let q = BigInt::from(2_305_843_009_213_691_579u64);
    (p, q, BigInt::from(65_537))
}

fn bench_take_bits(c: &mut Criterion) {
    let (p, q, seed) = params();
    let generator = BlumBlumShub::new(&p, &q, &seed).expect("valid parameters");
    let mut group = c.benchmark_group("take_bits");

    for &count in &[64usize, 1024] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter_batched(
                || generator.clone(),
                |mut g| black_box(g.take_bits(count).expect("allocatable")),
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_fill_bytes(c: &mut Criterion) {
    let (p, q, seed) = params();
    let mut generator = BlumBlumShub::new(&p, &q, &seed).expect("valid parameters");
    let mut buf = [0u8; 32];
    c.bench_function("fill_bytes_32", |b| {
        b.iter(|| {
            generator.fill_bytes(black_box(&mut buf));
        });
    });
}

fn bench_validated_generate(c: &mut Criterion) {
    let (p, q, seed) = params();
    let builder = BlumBlumShubBuilder::new();
    c.bench_function("generate_with_validation_256", |b| {
        b.iter(|| black_box(builder.generate(&p, &q, &seed, 256).expect("valid parameters")));
    });
}

criterion_group!(
    generate,
    bench_take_bits,
    bench_fill_bytes,
    bench_validated_generate
);
criterion_main!(generate);
