use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use num_bigint::BigUint;
use std::hint::black_box;
use toy_bbs::math::{PrimalityTest, ProbablePrime};

const OAKLEY_768: &str = "FFFFFFFFFFFFFFFFC90FDAA22168C234C4C6628B80DC1CD1\
    29024E088A67CC74020BBEA63B139B22514A08798E3404DDEF9519B3CD3A431B\
    302B0A6DF25F14374FE1356D6D51C245E485B576625E7EC6F44C42E9A63A3620\
    FFFFFFFFFFFFFFFF";

fn bench_prime_checks(c: &mut Criterion) {
    let inputs = [
        ("61b", BigUint::from(2_305_843_009_213_691_579u64)),
        (
            "768b",
            BigUint::parse_bytes(OAKLEY_768.as_bytes(), 16).expect("valid hex"),
        ),
    ];
    let mut group = c.benchmark_group("is_prime");

    for (label, n) in &inputs {
        for trials in [0usize, 16] {
            let test = ProbablePrime::new(trials);
            group.bench_with_input(
                BenchmarkId::new(format!("probable_prime_{trials}"), label),
                n,
                |b, n| {
                    b.iter(|| black_box(test.is_prime(black_box(n))));
                },
            );
        }
    }

    group.finish();
}

criterion_group!(primes, bench_prime_checks);
criterion_main!(primes);
