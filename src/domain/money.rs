use crate::error::KidVestError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// A display amount of money.
///
/// Wraps `rust_decimal::Decimal` so savings arithmetic stays exact; there is no
/// currency attached, the value is only ever shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Money(pub Decimal);

/// A strictly positive amount a child adds to their savings.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "Decimal")]
pub struct ContributionAmount(Decimal);

impl ContributionAmount {
    pub fn new(value: Decimal) -> Result<Self, KidVestError> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(KidVestError::ValidationError(
                "Contribution must be positive".to_string(),
            ))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for ContributionAmount {
    type Error = KidVestError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ContributionAmount> for Money {
    fn from(amount: ContributionAmount) -> Self {
        Self(amount.0)
    }
}

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);
    pub const ONE: Self = Self(Decimal::ONE);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Adds `rhs`, saturating at `cap` instead of overflowing.
    pub fn add_capped(self, rhs: Money, cap: Money) -> Money {
        match self.0.checked_add(rhs.0) {
            Some(sum) => Money(sum).min(cap),
            None => cap,
        }
    }
}

impl Add for Money {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

/// Exponents past this magnitude always overflow or round to zero.
const MAX_EXPONENT: i64 = 64;

/// Most significant digits a `Decimal` mantissa always holds.
const MAX_DIGITS: usize = 28;

/// Reads a number out of user-typed text the way a browser number field does.
///
/// Leading whitespace is skipped and the longest `[+-]digits[.digits][e[+-]digits]`
/// prefix is taken; anything after it is ignored. Returns `None` when there is no
/// numeric prefix at all, and for `Infinity`.
///
/// Values too large for a `Decimal` saturate at `Decimal::MAX` (or `Decimal::MIN`
/// when negative); values below the smallest representable scale read as zero.
pub fn parse_lenient(input: &str) -> Option<Decimal> {
    let bytes = input.trim_start().as_bytes();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            pos = 1;
            true
        }
        Some(b'+') => {
            pos = 1;
            false
        }
        _ => false,
    };

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let int_digits = &bytes[int_start..pos];

    let mut frac_digits: &[u8] = &[];
    if pos < bytes.len() && bytes[pos] == b'.' {
        let frac_start = pos + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        frac_digits = &bytes[frac_start..frac_end];
        pos = frac_end;
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    // An `e` without digits after it is not part of the number ("1e" reads as 1).
    let mut exponent: i64 = 0;
    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp_pos = pos + 1;
        let exp_negative = match bytes.get(exp_pos) {
            Some(b'-') => {
                exp_pos += 1;
                true
            }
            Some(b'+') => {
                exp_pos += 1;
                false
            }
            _ => false,
        };
        let exp_start = exp_pos;
        let mut magnitude: i64 = 0;
        while exp_pos < bytes.len() && bytes[exp_pos].is_ascii_digit() {
            magnitude = magnitude
                .saturating_mul(10)
                .saturating_add(i64::from(bytes[exp_pos] - b'0'));
            exp_pos += 1;
        }
        if exp_pos > exp_start {
            exponent = if exp_negative { -magnitude } else { magnitude };
        }
    }

    let magnitude = scale_digits(int_digits, frac_digits, exponent);
    Some(if negative { -magnitude } else { magnitude })
}

/// Builds `int_digits.frac_digits × 10^exponent` as a non-negative `Decimal`.
fn scale_digits(int_digits: &[u8], frac_digits: &[u8], exponent: i64) -> Decimal {
    let digits: Vec<u8> = int_digits
        .iter()
        .chain(frac_digits)
        .copied()
        .skip_while(|d| *d == b'0')
        .collect();
    if digits.is_empty() {
        return Decimal::ZERO;
    }

    // Digits past the mantissa's reach only shift the exponent.
    let kept = digits.len().min(MAX_DIGITS);
    let exponent = exponent
        .saturating_sub(frac_digits.len() as i64)
        .saturating_add((digits.len() - kept) as i64);
    let mantissa = digits[..kept]
        .iter()
        .fold(0i128, |acc, d| acc * 10 + i128::from(d - b'0'));

    if exponent >= 0 {
        if exponent > MAX_EXPONENT {
            return Decimal::MAX;
        }
        let mut value = Decimal::from_i128_with_scale(mantissa, 0);
        for _ in 0..exponent {
            match value.checked_mul(Decimal::TEN) {
                Some(next) => value = next,
                None => return Decimal::MAX,
            }
        }
        value
    } else {
        let shift = exponent.unsigned_abs();
        if shift <= MAX_DIGITS as u64 {
            return Decimal::from_i128_with_scale(mantissa, shift as u32);
        }
        if shift > MAX_EXPONENT as u64 {
            return Decimal::ZERO;
        }
        let mut value = Decimal::from_i128_with_scale(mantissa, MAX_DIGITS as u32);
        for _ in MAX_DIGITS as u64..shift {
            value /= Decimal::TEN;
            if value.is_zero() {
                break;
            }
        }
        value
    }
}
