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

//! # Flexgrid Core
//!
//! Foundational numerics and index primitives for the flexgrid
//! spectrum-assignment crates. This crate consolidates the small, reusable
//! building blocks shared by the domain model and the allocator.
//!
//! ## Modules
//!
//! - `math`: an exact fixed-point [`math::decimal::Decimal`] (integer mantissa
//!   over a power-of-ten exponent) so that frequency-to-slot divisions and
//!   granularity multiple-of checks are exact rather than floating-point
//!   approximate.
//! - `num`: generic integer `gcd`/`lcm` helpers over `num_traits::PrimInt`.
//! - `utils`: phantom-tagged, strongly typed indices (`TypedIndex<T>`) to
//!   keep slot indices from mixing with other integer domains.
//!
//! ## Purpose
//!
//! Spectrum assignment configures live optical hardware; an off-by-one or a
//! rounding error in the grid arithmetic silently produces a misconfigured
//! channel. These primitives keep that arithmetic exact and strongly typed.

pub mod math;
pub mod num;
pub mod utils;
