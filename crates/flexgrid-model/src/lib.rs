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

//! # Flexgrid Model
//!
//! **The domain model for flexgrid spectrum assignment.**
//!
//! This crate defines the data structures a path-computation element needs to
//! describe a DWDM frequency grid and a spectrum-assignment request. It is the
//! data interchange layer between the surrounding controller (topology,
//! capability and API adapters) and the allocator crate (`flexgrid-assign`).
//!
//! ## Architecture
//!
//! * **`index`**: the strongly typed `SlotIndex` (a position on the grid).
//! * **`frequency`**: exact physical frequencies in THz.
//! * **`grid`**: the immutable `Grid` (edge frequency, GHz granularity, slot
//!   count), the frequency ↔ slot-index mapping, and the aligned-center math
//!   used by the directional allocation strategies.
//! * **`range`**: an inclusive slot range, the allocator's positive result.
//! * **`capability`**: per-node hardware defaults and bounds.
//! * **`client`**: client-facing wish-list intervals and slot-width hints.
//! * **`error`**: the input-validation error taxonomy. Spectrum exhaustion is
//!   deliberately *not* in it; "no free range" is a normal outcome modeled by
//!   the allocator's result enum, never an error.
//!
//! ## Design Philosophy
//!
//! 1.  **Exactness**: every frequency quantity is a fixed-point decimal;
//!     frequencies that do not sit exactly on the grid are rejected, never
//!     silently rounded.
//! 2.  **Type safety**: slot indices are a distinct type and cannot be mixed
//!     with widths or granularities.
//! 3.  **Fail-fast**: constructors and conversions validate eagerly so the
//!     allocator never sees an inconsistent request.

pub mod capability;
pub mod client;
pub mod error;
pub mod frequency;
pub mod grid;
pub mod index;
pub mod range;
