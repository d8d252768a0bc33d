//! Blum Blum Shub demonstration.
//!
//! Generates bits from a toy parameter set and from a 1024-bit modulus,
//! then folds each sequence into an integer (last bit least significant).
//!
//!   n = p · q        with p, q ≡ 3 (mod 4) and (p-1)/2, (q-1)/2 prime
//!   x_{i+1} = x_i² mod n,   bit_i = x_{i+1} mod 2

use num_bigint::BigInt;
use toy_bbs::{BlumBlumShub, BlumBlumShubBuilder, fold_to_integer, generate};

/// RFC 2409 Oakley group 2 modulus (a 1024-bit safe prime).
const OAKLEY_1024: &str = "FFFFFFFFFFFFFFFFC90FDAA22168C234C4C6628B80DC1CD1\
    29024E088A67CC74020BBEA63B139B22514A08798E3404DDEF9519B3CD3A431B\
    302B0A6DF25F14374FE1356D6D51C245E485B576625E7EC6F44C42E9A637ED6B\
    0BFF5CB6F406B7EDEE386BFB5A899FA5AE9F24117C4B1FE649286651ECE65381\
    FFFFFFFFFFFFFFFF";

fn render(bits: &[bool]) -> String {
    bits.iter().map(|&b| if b { '1' } else { '0' }).collect()
}

fn main() {
    println!("╔═══════════════════════════════════════╗");
    println!("║   Blum Blum Shub  —  Demo             ║");
    println!("╚═══════════════════════════════════════╝\n");

    // ── Toy parameters ────────────────────────────────────────────────────────
    let (p, q, seed) = (BigInt::from(11), BigInt::from(23), BigInt::from(5));
    println!("p = {p}, q = {q}, n = {}, seed = {seed}", &p * &q);

    let mut generator = match BlumBlumShub::new(&p, &q, &seed) {
        Ok(generator) => generator,
        Err(err) => {
            eprintln!("invalid parameters: {err}");
            return;
        }
    };
    for step in 1..=5 {
        let bit = generator.next_bit();
        println!("  x_{step} = {:>3}  →  bit {}", generator.state(), u8::from(bit));
    }

    // ── Rejected parameters ───────────────────────────────────────────────────
    println!("\nRejections:");
    let cases = [(11, 19, 4, 8), (7, 11, 7, 8), (7, 11, -1, 8), (7, 11, 4, 0)];
    for (p, q, seed, num_bits) in cases {
        let result = generate(
            &BigInt::from(p),
            &BigInt::from(q),
            &BigInt::from(seed),
            num_bits,
        );
        if let Err(err) = result {
            println!("  ({p}, {q}, seed={seed}, bits={num_bits}) → {err}");
        }
    }

    // ── 1024-bit modulus ──────────────────────────────────────────────────────
    let Some(p) = BigInt::parse_bytes(OAKLEY_1024.as_bytes(), 16) else {
        eprintln!("malformed prime literal");
        return;
    };
    let q = BigInt::from(2_305_843_009_213_691_579u64);
    let seed = BigInt::from(65_537);
    let builder = BlumBlumShubBuilder::new().require_distinct_primes(true);
    match builder.generate(&p, &q, &seed, 128) {
        Ok(bits) => {
            println!("\n128 bits from a {}-bit modulus:", (&p * &q).bits());
            println!("  {}", render(&bits));
            println!("  folded = {}", fold_to_integer(&bits));
        }
        Err(err) => eprintln!("invalid parameters: {err}"),
    }
}
