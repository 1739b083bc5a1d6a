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

//! Generic integer `gcd`/`lcm` over `num_traits::PrimInt`.
//!
//! The allocator reduces heterogeneous node granularities to a common
//! alignment lattice via least-common-multiple arithmetic. The decimal LCM
//! in `crate::math::decimal` bottoms out here after scaling to integers.

use num_traits::PrimInt;

/// Computes the greatest common divisor of two integers (Euclid).
///
/// The result is always non-negative; `gcd(x, 0) == |x|`.
///
/// # Examples
///
/// ```rust
/// # use flexgrid_core::num::integer::gcd;
///
/// assert_eq!(gcd(12u32, 18), 6);
/// assert_eq!(gcd(-12i64, 18), 6);
/// assert_eq!(gcd(7u8, 0), 7);
/// ```
pub fn gcd<T>(a: T, b: T) -> T
where
    T: PrimInt,
{
    let abs = |v: T| if v < T::zero() { T::zero() - v } else { v };

    let mut a = abs(a);
    let mut b = abs(b);
    while b != T::zero() {
        let remainder = a % b;
        a = b;
        b = remainder;
    }
    a
}

/// Computes the least common multiple of two integers.
///
/// The result is always non-negative; `lcm(x, 0) == 0`.
///
/// # Examples
///
/// ```rust
/// # use flexgrid_core::num::integer::lcm;
///
/// assert_eq!(lcm(4u32, 6), 12);
/// assert_eq!(lcm(625i128, 5000), 5000);
/// assert_eq!(lcm(5u16, 0), 0);
/// ```
pub fn lcm<T>(a: T, b: T) -> T
where
    T: PrimInt,
{
    if a == T::zero() || b == T::zero() {
        return T::zero();
    }

    let abs = |v: T| if v < T::zero() { T::zero() - v } else { v };
    let a = abs(a);
    let b = abs(b);
    (a / gcd(a, b)) * b
}
