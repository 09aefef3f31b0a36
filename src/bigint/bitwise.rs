//! AND / OR / XOR: place-wise over the sign-extended pair, then truncate
//! via `shrink`.

use super::{forward_binop, BigInt, Store};
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign};

fn bitwise_assign(lhs: &mut BigInt, rhs: &BigInt, f: fn(u32, u32) -> u32) {
    let n = lhs.len().max(rhs.len());
    let digits: Vec<u32> = (0..n).map(|i| f(lhs.get(i), rhs.get(i))).collect();
    lhs.digits = Store::from_slice(&digits);
    lhs.shrink();
}

impl BitAndAssign<&BigInt> for BigInt {
    fn bitand_assign(&mut self, rhs: &BigInt) {
        bitwise_assign(self, rhs, |a, b| a & b);
    }
}
impl BitOrAssign<&BigInt> for BigInt {
    fn bitor_assign(&mut self, rhs: &BigInt) {
        bitwise_assign(self, rhs, |a, b| a | b);
    }
}
impl BitXorAssign<&BigInt> for BigInt {
    fn bitxor_assign(&mut self, rhs: &BigInt) {
        bitwise_assign(self, rhs, |a, b| a ^ b);
    }
}

forward_binop!(BitAnd, bitand, BitAndAssign, bitand_assign);
forward_binop!(BitOr, bitor, BitOrAssign, bitor_assign);
forward_binop!(BitXor, bitxor, BitXorAssign, bitxor_assign);
