//! Addition, subtraction, negation, and bitwise NOT.

use super::{forward_binop, BigInt};
use crate::digit;
use std::ops::{AddAssign, Neg, Not, SubAssign};

impl AddAssign<&BigInt> for BigInt {
    /// Sign-extends both operands to equal length, adds with carry through
    /// every digit, then restores the minimality invariant.
    fn add_assign(&mut self, rhs: &BigInt) {
        let a_sign = self.is_negative();
        let b_sign = rhs.is_negative();
        let n = self.len().max(rhs.len());

        let mut result = Vec::with_capacity(n);
        let mut carry = 0u32;
        for i in 0..n {
            let (sum, c) = digit::add_carry32(self.get(i), rhs.get(i), carry);
            result.push(sum);
            carry = c;
        }

        self.resize_digits(n);
        for (i, d) in result.into_iter().enumerate() {
            self.digits.set(i, d);
        }

        // Overflow-into-new-digit only possible when both operands share a
        // sign; otherwise the magnitudes offset and no new digit is needed.
        let expected_sign = if a_sign == b_sign { a_sign } else { self.is_negative() };
        self.correct_sign_bit(expected_sign, None);
    }
}

impl SubAssign<&BigInt> for BigInt {
    /// `a - b = a + (-b)`.
    fn sub_assign(&mut self, rhs: &BigInt) {
        let neg_rhs = -rhs.clone();
        *self += &neg_rhs;
    }
}

forward_binop!(Add, add, AddAssign, add_assign);
forward_binop!(Sub, sub, SubAssign, sub_assign);

impl Not for &BigInt {
    type Output = BigInt;

    /// `~x` inverts every digit place-wise.
    fn not(self) -> BigInt {
        let digits: Vec<u32> = (0..self.len()).map(|i| !self.digits.get(i)).collect();
        let mut r = BigInt { digits: super::Store::from_slice(&digits) };
        r.shrink();
        r
    }
}

impl Not for BigInt {
    type Output = BigInt;
    fn not(self) -> BigInt {
        !&self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    /// `-x = (~x) + 1`, the two's-complement identity.
    fn neg(self) -> BigInt {
        let mut r = !self;
        r.increment();
        r
    }
}

impl Neg for BigInt {
    type Output = BigInt;
    fn neg(self) -> BigInt {
        -&self
    }
}
