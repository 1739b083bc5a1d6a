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

//! Spectrum assignment for flexgrid optical paths.
//!
//! Given the free/occupied spectrum of every link along a candidate path,
//! the capabilities of the nodes it traverses, and the client's width and
//! wish-list constraints, this crate finds a contiguous, center-aligned
//! block of frequency slots for the new service:
//!
//! - [`spectrum`] holds the bitset representation of spectrum occupancy and
//!   the client wish-list restrictions over it.
//! - [`granularity`] reduces the center-frequency granularities reported
//!   along the path to a single working lattice spacing.
//! - [`selector`] layers the client's restrictions onto the path
//!   availability.
//! - [`strategy`] scans the alignment lattice for a free window, from the
//!   top of the band down or from the bottom up.
//! - [`assigner`] wires the above into a single entry point.
//!
//! # Examples
//!
//! ```rust
//! # use flexgrid_assign::assigner::SpectrumAssigner;
//! # use flexgrid_assign::spectrum;
//! # use flexgrid_assign::strategy::Allocation;
//! # use flexgrid_model::capability::Capability;
//! # use flexgrid_model::client::ClientInput;
//! # use flexgrid_model::grid::Grid;
//!
//! let grid = Grid::c_band();
//! let available = spectrum::all_free(grid.total_slots());
//! let client = ClientInput::new().with_a_end_slot_width(4);
//!
//! let assigner = SpectrumAssigner::from_config(grid, Some("high-to-low"));
//! let allocation = assigner
//!     .assign(&[Capability::default()], &client, None, &available)
//!     .unwrap();
//! assert!(matches!(allocation, Allocation::Found(_)));
//! ```

pub mod assigner;
pub mod granularity;
pub mod selector;
pub mod spectrum;
pub mod strategy;
