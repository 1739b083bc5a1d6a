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

use flexgrid_core::math::decimal::Decimal;

/// A physical optical frequency in THz, backed by an exact decimal.
///
/// All frequency arithmetic in the grid mapping goes through this type so
/// that offsets and lattice checks stay exact.
///
/// # Examples
///
/// ```rust
/// # use flexgrid_model::frequency::Frequency;
/// # use flexgrid_core::math::decimal::Decimal;
///
/// let edge = Frequency::thz(Decimal::new(191_325, 3)); // 191.325 THz
/// let step = Decimal::new(625, 5); // 0.00625 THz (6.25 GHz)
/// let next = edge.advanced_by(step);
/// assert_eq!(next.offset_from(edge), step);
/// assert_eq!(format!("{}", edge), "191.325 THz");
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Frequency(Decimal);

impl Frequency {
    /// Creates a frequency from a THz value.
    #[inline]
    pub const fn thz(value: Decimal) -> Self {
        Self(value)
    }

    /// Returns the THz value.
    #[inline]
    pub const fn value_thz(&self) -> Decimal {
        self.0
    }

    /// Returns the signed offset `self - other` in THz.
    #[inline]
    pub fn offset_from(self, other: Self) -> Decimal {
        self.0 - other.0
    }

    /// Returns the frequency shifted by `delta_thz`.
    #[inline]
    pub fn advanced_by(self, delta_thz: Decimal) -> Self {
        Self(self.0 + delta_thz)
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} THz", self.0)
    }
}

impl std::fmt::Debug for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Frequency({} THz)", self.0)
    }
}
