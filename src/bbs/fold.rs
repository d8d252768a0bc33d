//! Folding a bit sequence into a single integer.
//!
//! The sequence is read as a binary number whose least-significant bit is the
//! *last* generated bit, so bit `i` of `k` carries weight `2^(k - 1 - i)`.
use num_bigint::BigUint;

/// Folds `bits` into an integer, last bit least significant. Empty input is 0.
pub fn fold_to_integer(bits: &[bool]) -> BigUint {
    BigUint::from_bytes_be(&pack_be(bits))
}

/// Packs bits into big-endian bytes, left-padding the first byte with zeros.
fn pack_be(bits: &[bool]) -> Vec<u8> {
    let pad = (8 - bits.len() % 8) % 8;
    let mut bytes = vec![0u8; (bits.len() + pad) / 8];
    for (index, &bit) in bits.iter().enumerate() {
        if bit {
            let pos = index + pad;
            bytes[pos / 8] |= 0x80 >> (pos % 8);
        }
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;

    #[test]
    fn empty_sequence_folds_to_zero() {
        assert!(fold_to_integer(&[]).is_zero());
    }

    #[test]
    fn single_bit() {
        assert_eq!(fold_to_integer(&[true]), BigUint::from(1u32));
        assert!(fold_to_integer(&[false]).is_zero());
    }

    #[test]
    fn last_bit_is_least_significant() {
        assert_eq!(
            fold_to_integer(&[true, true, false, true, false]),
            BigUint::from(26u32)
        );
        assert_eq!(fold_to_integer(&[false, false, true]), BigUint::from(1u32));
        assert_eq!(fold_to_integer(&[true, false, false]), BigUint::from(4u32));
    }

    #[test]
    fn first_bit_weight_crosses_byte_boundary() {
        let mut bits = vec![false; 9];
        bits[0] = true;
        assert_eq!(fold_to_integer(&bits), BigUint::from(256u32));
    }

    #[test]
    fn matches_weighted_sum() {
        let bits: Vec<bool> = (0..70).map(|i| i % 3 == 0 || i % 7 == 1).collect();
        let mut expected = BigUint::zero();
        let mut weight = BigUint::from(1u32);
        for &bit in bits.iter().rev() {
            if bit {
                expected += &weight;
            }
            weight <<= 1u32;
        }
        assert_eq!(fold_to_integer(&bits), expected);
    }

    #[test]
    fn leading_zero_bits_do_not_change_the_value() {
        let bits = [false, false, false, false, false, false, false, false, true, true];
        assert_eq!(fold_to_integer(&bits), BigUint::from(3u32));
    }
}
