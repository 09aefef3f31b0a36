//! Parsing from and formatting to decimal strings.
//!
//! Both directions go through the digit value one magnitude digit at a
//! time: parsing folds `x = x*10 + d` over the input characters, and
//! formatting repeatedly divides by 10 and reads off remainders.

use super::BigInt;
use crate::error::ParseBigIntError;
use std::fmt;
use std::str::FromStr;

impl FromStr for BigInt {
    type Err = ParseBigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (neg, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        if digits.is_empty() {
            return Err(ParseBigIntError::empty());
        }

        let mut acc = BigInt::zero();
        for c in digits.chars() {
            let d = c.to_digit(10).ok_or_else(ParseBigIntError::invalid_digit)?;
            acc = acc.mul_by_u32(10);
            acc += BigInt::from_i128(d as i128);
        }
        if neg {
            acc = -acc;
        }
        Ok(acc)
    }
}

impl BigInt {
    /// Writes the decimal representation of `self` to `sink`.
    pub fn write_decimal<W: fmt::Write>(&self, sink: &mut W) -> fmt::Result {
        if self.is_zero() {
            return sink.write_str("0");
        }

        let neg = self.is_negative();
        let mut mag = self.abs();
        let mut rev_digits = Vec::new();
        while !mag.is_zero() {
            let (q, r) = mag.div_rem_u32(10);
            rev_digits.push(char::from_digit(r, 10).expect("remainder of division by 10 is a single decimal digit"));
            mag = q;
        }

        if neg {
            sink.write_char('-')?;
        }
        for c in rev_digits.into_iter().rev() {
            sink.write_char(c)?;
        }
        Ok(())
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = String::new();
        self.write_decimal(&mut s).map_err(|_| fmt::Error)?;
        f.write_str(&s)
    }
}
