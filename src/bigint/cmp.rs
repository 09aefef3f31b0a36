//! Ordering and equality.
//!
//! Two's-complement digit sequences do not compare like unsigned integers:
//! sign disagreements decide immediately, and among same-sign values a
//! longer minimal digit count means a larger positive or a smaller
//! negative (minimality makes digit count monotonic in magnitude within a
//! fixed sign). Within equal length, comparison falls back to a
//! digit-by-digit walk from the most significant digit down.

use super::BigInt;
use std::cmp::Ordering;

impl BigInt {
    fn cmp_magnitude_aware(&self, other: &BigInt) -> Ordering {
        let a_neg = self.is_negative();
        let b_neg = other.is_negative();
        if a_neg != b_neg {
            return if a_neg { Ordering::Less } else { Ordering::Greater };
        }

        let a_size = self.len();
        let b_size = other.len();
        if a_size != b_size {
            let longer_is_greater = !a_neg;
            return match (a_size > b_size, longer_is_greater) {
                (true, true) | (false, false) => Ordering::Greater,
                _ => Ordering::Less,
            };
        }

        for i in (0..a_size).rev() {
            let ord = self.get(i).cmp(&other.get(i));
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && (0..self.len()).all(|i| self.digits.get(i) == other.digits.get(i))
    }
}
impl Eq for BigInt {}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_magnitude_aware(other)
    }
}
