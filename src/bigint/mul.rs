//! Short and long multiplication. Quadratic in digit count; no
//! Karatsuba/FFT.

use super::{forward_binop, BigInt, Store};
use crate::digit;
use std::ops::{Mul, MulAssign, Shl};

impl BigInt {
    /// `self * scalar`, where `scalar` is an unsigned digit and `self` is
    /// taken as a magnitude (its sign is ignored). Used both directly by
    /// long multiplication and by decimal parsing/formatting.
    pub(crate) fn mul_by_u32(&self, scalar: u32) -> BigInt {
        let n = self.len();
        let mut digits = Vec::with_capacity(n + 1);
        let mut carry = 0u32;
        for i in 0..n {
            let (lo, hi) = digit::mul32(self.digits.get(i), scalar);
            let (sum, c) = digit::add_carry32(lo, carry, 0);
            digits.push(sum);
            carry = hi.wrapping_add(c);
        }
        if carry != 0 {
            digits.push(carry);
        }
        let mut r = BigInt { digits: Store::from_slice(&digits) };
        r.shrink();
        r
    }
}

impl MulAssign<&BigInt> for BigInt {
    fn mul_assign(&mut self, rhs: &BigInt) {
        let result_neg = self.is_negative() ^ rhs.is_negative();
        let a = self.abs();
        let b = rhs.abs();

        let mut acc = BigInt::zero();
        for i in 0..b.len() {
            let ri = b.digits.get(i);
            if ri == 0 {
                continue;
            }
            let term = a.mul_by_u32(ri).shl(i as i64 * 32);
            acc += &term;
        }
        if result_neg && !acc.is_zero() {
            acc = -acc;
        }
        *self = acc;
    }
}

forward_binop!(Mul, mul, MulAssign, mul_assign);
