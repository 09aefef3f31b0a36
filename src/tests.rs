//! Property-based tests using quickcheck.
//!
//! Laws are checked against `i128` directly (every operation `BigInt`
//! implements has an exact `i128` counterpart whenever the inputs and the
//! result fit), and against `ethnum::I256` for values and products that
//! spill past 128 bits, where `i128` itself would overflow.

use quickcheck_macros::quickcheck;

use crate::BigInt;

fn bi(v: i128) -> BigInt {
    BigInt::from_i128(v)
}

#[quickcheck]
fn roundtrip(v: i128) -> bool {
    bi(v).to_string().parse::<BigInt>().unwrap() == bi(v)
}

#[quickcheck]
fn add_matches_i128(a: i128, b: i128) -> bool {
    match a.checked_add(b) {
        Some(expected) => (bi(a) + bi(b)) == bi(expected),
        None => true, // BigInt can't overflow; nothing to compare against
    }
}

#[quickcheck]
fn sub_matches_i128(a: i128, b: i128) -> bool {
    match a.checked_sub(b) {
        Some(expected) => (bi(a) - bi(b)) == bi(expected),
        None => true,
    }
}

#[quickcheck]
fn mul_matches_i128(a: i64, b: i64) -> bool {
    // Keep operands 64-bit so the i128 product can't itself overflow.
    let (a, b) = (a as i128, b as i128);
    (bi(a) * bi(b)) == bi(a * b)
}

#[quickcheck]
fn div_rem_match_i128(a: i128, b: i128) -> bool {
    if b == 0 {
        return true;
    }
    (bi(a) / bi(b)) == bi(a / b) && (bi(a) % bi(b)) == bi(a % b)
}

#[quickcheck]
fn division_identity(a: i128, b: i128) -> bool {
    if b == 0 {
        return true;
    }
    let q = bi(a) / bi(b);
    let r = bi(a) % bi(b);
    &q * &bi(b) + &r == bi(a) && r.abs() < bi(b).abs()
}

#[quickcheck]
fn neg_matches_i128(a: i128) -> bool {
    match a.checked_neg() {
        Some(expected) => (-bi(a)) == bi(expected),
        None => true,
    }
}

#[quickcheck]
fn cmp_matches_i128(a: i128, b: i128) -> bool {
    bi(a).cmp(&bi(b)) == a.cmp(&b)
}

#[quickcheck]
fn bitwise_matches_i128(a: i128, b: i128) -> bool {
    (&bi(a) & &bi(b)) == bi(a & b) && (&bi(a) | &bi(b)) == bi(a | b) && (&bi(a) ^ &bi(b)) == bi(a ^ b)
}

#[quickcheck]
fn shift_matches_i128(a: i64, amount: u8) -> bool {
    let a = a as i128;
    let amount = (amount % 64) as i64;
    (bi(a) << amount) == bi(a << amount) && (bi(a) >> amount) == bi(a >> amount)
}

#[quickcheck]
fn double_negation_is_identity(a: i128) -> bool {
    -(-bi(a)) == bi(a)
}

#[quickcheck]
fn addition_is_commutative(a: i128, b: i128) -> bool {
    match a.checked_add(b) {
        Some(_) => bi(a) + bi(b) == bi(b) + bi(a),
        None => true,
    }
}

fn i256_to_bigint(v: ethnum::I256) -> BigInt {
    v.to_string().parse().unwrap()
}

#[test]
fn wide_multiplication_beyond_i128_matches_ethnum() {
    let a = ethnum::I256::from(u64::MAX); // 2^64 - 1
    let got = &i256_to_bigint(a) * &i256_to_bigint(a);
    let want = i256_to_bigint(a * a);
    assert_eq!(got, want);
}

#[test]
fn wide_division_beyond_i128_matches_ethnum() {
    let a: ethnum::I256 = "123456789012345678901234567890123456789012345678901234567890".parse().unwrap();
    let b: ethnum::I256 = "987654321098765432109876543210987654321".parse().unwrap();
    assert_eq!(&i256_to_bigint(a) / &i256_to_bigint(b), i256_to_bigint(a / b));
    assert_eq!(&i256_to_bigint(a) % &i256_to_bigint(b), i256_to_bigint(a % b));
}

#[test]
fn wide_addition_chain_matches_ethnum() {
    let mut acc_big = BigInt::zero();
    let mut acc_wide = ethnum::I256::from(0u64);
    for k in 1..=40u64 {
        let term = ethnum::I256::from(u64::MAX) * ethnum::I256::from(k);
        acc_wide += term;
        acc_big += i256_to_bigint(term);
    }
    assert_eq!(acc_big, i256_to_bigint(acc_wide));
}

#[test]
fn minimality_invariant_holds_across_many_operations() {
    let mut v = BigInt::from_i128(1);
    for _ in 0..200 {
        v = &v * &BigInt::from_i128(3) + &BigInt::from_i128(1);
        // Re-parsing the canonical decimal form must reproduce the exact
        // same value; only possible if shrink() left no redundant leading
        // digit anywhere along the chain.
        assert_eq!(v, v.to_string().parse().unwrap());
    }
}

#[test]
fn cloned_values_do_not_alias_on_mutation() {
    let a: BigInt = "123456789012345678901234567890".parse().unwrap();
    let mut b = a.clone();
    b += BigInt::one();
    assert_ne!(a, b, "mutating a clone must not affect the original");
}

#[test]
fn chained_add_then_mul_matches_manual_computation() {
    let a: BigInt = "1000000000000000000000".parse().unwrap();
    let b: BigInt = "-3".parse().unwrap();
    let c = &(&a + &b) * &b;
    let want: BigInt = "-2999999999999999999991".parse().unwrap();
    assert_eq!(c, want);
}
