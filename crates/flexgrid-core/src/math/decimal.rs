// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Exact fixed-point decimal arithmetic.
//!
//! Frequencies (THz) and granularities (GHz) in a flexgrid are decimal
//! quantities such as `191.325` or `6.25`. Binary floating point cannot
//! represent them exactly, and the grid math relies on exact divisibility
//! checks ("does this frequency sit on the slot lattice?"), so this module
//! provides a small fixed-point type: an integer mantissa scaled by a
//! power-of-ten exponent. All operations are exact; there is no rounding
//! anywhere in this type.

use crate::num::integer;
use std::cmp::Ordering;

/// Returns `10^exp` as an `i128`.
#[inline]
fn pow10(exp: u32) -> i128 {
    10i128
        .checked_pow(exp)
        .expect("decimal exponent exceeds the i128 range")
}

/// An exact decimal number: `mantissa / 10^exponent`.
///
/// Values are kept in a canonical form (no trailing zeros in the mantissa
/// while the exponent is positive; zero is `0 / 10^0`), which makes the
/// derived `PartialEq`/`Hash` agree with numeric equality.
///
/// # Examples
///
/// ```rust
/// # use flexgrid_core::math::decimal::Decimal;
///
/// let granularity = Decimal::new(625, 2); // 6.25
/// let width = Decimal::new(50, 0); // 50
/// assert_eq!(width.div_exact(granularity), Some(8));
/// assert_eq!(format!("{}", granularity), "6.25");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Decimal {
    mantissa: i128,
    exponent: u32,
}

impl Decimal {
    /// The decimal zero.
    pub const ZERO: Decimal = Decimal {
        mantissa: 0,
        exponent: 0,
    };

    /// Creates a decimal representing `mantissa / 10^exponent`.
    ///
    /// The value is normalized on construction, so `Decimal::new(50, 1)` and
    /// `Decimal::new(5, 0)` are the same number and compare equal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use flexgrid_core::math::decimal::Decimal;
    ///
    /// assert_eq!(Decimal::new(50, 1), Decimal::new(5, 0));
    /// assert_eq!(Decimal::new(125, 1), Decimal::new(1250, 2));
    /// ```
    #[inline]
    pub fn new(mantissa: i128, exponent: u32) -> Self {
        let mut mantissa = mantissa;
        let mut exponent = exponent;

        if mantissa == 0 {
            exponent = 0;
        } else {
            while exponent > 0 && mantissa % 10 == 0 {
                mantissa /= 10;
                exponent -= 1;
            }
        }

        Self { mantissa, exponent }
    }

    /// Creates a decimal from an integer value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use flexgrid_core::math::decimal::Decimal;
    ///
    /// assert_eq!(Decimal::from_int(50), Decimal::new(50, 0));
    /// ```
    #[inline]
    pub const fn from_int(value: i128) -> Self {
        Self {
            mantissa: value,
            exponent: 0,
        }
    }

    /// Returns the canonical mantissa.
    #[inline]
    pub const fn mantissa(&self) -> i128 {
        self.mantissa
    }

    /// Returns the canonical power-of-ten exponent.
    #[inline]
    pub const fn exponent(&self) -> u32 {
        self.exponent
    }

    /// Returns `true` if the value is exactly zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.mantissa == 0
    }

    /// Returns `true` if the value is strictly positive.
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.mantissa > 0
    }

    /// Returns `true` if the value is strictly negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.mantissa < 0
    }

    /// Scales both operands to a common exponent and returns the pair of
    /// integer mantissas together with that exponent.
    #[inline]
    fn aligned(self, other: Self) -> (i128, i128, u32) {
        let exponent = self.exponent.max(other.exponent);
        let lhs = self.mantissa * pow10(exponent - self.exponent);
        let rhs = other.mantissa * pow10(exponent - other.exponent);
        (lhs, rhs, exponent)
    }

    /// Multiplies the value by an integer factor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use flexgrid_core::math::decimal::Decimal;
    ///
    /// let step = Decimal::new(625, 2); // 6.25
    /// assert_eq!(step.scale_by(8), Decimal::from_int(50));
    /// ```
    #[inline]
    pub fn scale_by(self, factor: i128) -> Self {
        Self::new(self.mantissa * factor, self.exponent)
    }

    /// Divides the value by `10^digits` exactly (shifts the decimal point
    /// left). Used for unit conversions such as GHz to THz.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use flexgrid_core::math::decimal::Decimal;
    ///
    /// let ghz = Decimal::new(625, 2); // 6.25 GHz
    /// assert_eq!(ghz.div_pow10(3), Decimal::new(625, 5)); // 0.00625 THz
    /// ```
    #[inline]
    pub fn div_pow10(self, digits: u32) -> Self {
        Self::new(self.mantissa, self.exponent + digits)
    }

    /// Divides `self` by `divisor` and returns the quotient only if the
    /// division is exact.
    ///
    /// Returns `None` if `divisor` is zero or `self` is not an integer
    /// multiple of `divisor`. This is the primitive behind every
    /// "does this frequency sit on the lattice?" check.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use flexgrid_core::math::decimal::Decimal;
    ///
    /// let step = Decimal::new(625, 5); // 0.00625
    /// let offset = Decimal::new(5, 2); // 0.05
    /// assert_eq!(offset.div_exact(step), Some(8));
    /// assert_eq!(Decimal::new(51, 3).div_exact(step), None);
    /// assert_eq!(offset.div_exact(Decimal::ZERO), None);
    /// ```
    #[inline]
    pub fn div_exact(self, divisor: Self) -> Option<i128> {
        if divisor.is_zero() {
            return None;
        }

        let (lhs, rhs, _) = self.aligned(divisor);
        if lhs % rhs == 0 { Some(lhs / rhs) } else { None }
    }

    /// Returns `true` if `self` is an exact integer multiple of `other`.
    #[inline]
    pub fn is_multiple_of(self, other: Self) -> bool {
        self.div_exact(other).is_some()
    }

    /// Computes the least common multiple of two positive decimals.
    ///
    /// Both values are scaled to a common integral representation, the
    /// integer LCM is taken, and the result is scaled back; no rounding is
    /// involved.
    ///
    /// # Panics
    ///
    /// Panics if either operand is not strictly positive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use flexgrid_core::math::decimal::Decimal;
    ///
    /// let a = Decimal::new(625, 2); // 6.25
    /// let b = Decimal::new(50, 0); // 50
    /// assert_eq!(a.lcm(b), Decimal::from_int(50));
    ///
    /// let c = Decimal::new(125, 1); // 12.5
    /// let d = Decimal::new(75, 1); // 7.5
    /// assert_eq!(c.lcm(d), Decimal::new(375, 1)); // 37.5
    /// ```
    pub fn lcm(self, other: Self) -> Self {
        assert!(
            self.is_positive() && other.is_positive(),
            "called `Decimal::lcm` with a non-positive operand: {} and {}",
            self,
            other
        );

        let (lhs, rhs, exponent) = self.aligned(other);
        Self::new(integer::lcm(lhs, rhs), exponent)
    }
}

impl std::ops::Add for Decimal {
    type Output = Decimal;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        let (lhs, rhs, exponent) = self.aligned(rhs);
        Self::new(lhs + rhs, exponent)
    }
}

impl std::ops::Sub for Decimal {
    type Output = Decimal;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        let (lhs, rhs, exponent) = self.aligned(rhs);
        Self::new(lhs - rhs, exponent)
    }
}

impl Ord for Decimal {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        let (lhs, rhs, _) = self.aligned(*other);
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Decimal {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Default for Decimal {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<i128> for Decimal {
    #[inline]
    fn from(value: i128) -> Self {
        Self::from_int(value)
    }
}

impl std::fmt::Display for Decimal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.exponent == 0 {
            return write!(f, "{}", self.mantissa);
        }

        let sign = if self.mantissa < 0 { "-" } else { "" };
        let magnitude = self.mantissa.unsigned_abs();
        let scale = pow10(self.exponent) as u128;
        let integral = magnitude / scale;
        let fraction = magnitude % scale;

        write!(
            f,
            "{}{}.{:0width$}",
            sign,
            integral,
            fraction,
            width = self.exponent as usize
        )
    }
}

impl std::fmt::Debug for Decimal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Decimal({})", self)
    }
}
