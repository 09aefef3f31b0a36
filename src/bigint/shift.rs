//! Shift left/right by a signed bit count.
//!
//! The shift amount is a signed integer: positive shifts left, negative
//! shifts right. Both operators route through one internal function built
//! on a single decomposition `s = p*W + b` that covers both directions.

use super::{BigInt, Store, W};
use std::ops::{Shl, Shr};

impl BigInt {
    /// Reads the digit at signed index `i`, treating out-of-range reads
    /// (in either direction) as sign extension.
    fn get_signed(&self, i: i64) -> u32 {
        if i < 0 {
            self.fill()
        } else {
            self.get(i as usize)
        }
    }

    fn shift(&self, s: i64) -> BigInt {
        if self.is_zero() {
            return BigInt::zero();
        }
        let sign = self.is_negative();

        // s = p*W + b, with 0 <= b < W; div_euclid/rem_euclid round p
        // toward negative infinity for a positive modulus, which is the
        // rounding rule an arithmetic right shift needs.
        let w = W as i64;
        let p = s.div_euclid(w);
        let b = s.rem_euclid(w) as u32;

        let new_len = self.len() as i64 + p + 1;
        if new_len <= 0 {
            // Every original bit has shifted out.
            return if sign { BigInt::neg_one() } else { BigInt::zero() };
        }

        let new_len = new_len as usize;
        let mut digits = Vec::with_capacity(new_len);
        for i in 0..new_len {
            let lsrc = self.get_signed(i as i64 - p);
            let value = if b == 0 {
                lsrc
            } else {
                let rsrc = self.get_signed(i as i64 - p - 1);
                (lsrc << b) | (rsrc >> (W - b))
            };
            digits.push(value);
        }

        let mut r = BigInt { digits: Store::from_slice(&digits) };
        r.correct_sign_bit(sign, None);
        r
    }
}

impl Shl<i64> for &BigInt {
    type Output = BigInt;
    fn shl(self, amount: i64) -> BigInt {
        self.shift(amount)
    }
}
impl Shl<i64> for BigInt {
    type Output = BigInt;
    fn shl(self, amount: i64) -> BigInt {
        (&self).shift(amount)
    }
}

impl Shr<i64> for &BigInt {
    type Output = BigInt;
    fn shr(self, amount: i64) -> BigInt {
        self.shift(-amount)
    }
}
impl Shr<i64> for BigInt {
    type Output = BigInt;
    fn shr(self, amount: i64) -> BigInt {
        (&self).shift(-amount)
    }
}
