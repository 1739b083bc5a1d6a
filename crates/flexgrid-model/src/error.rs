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

//! Input-validation errors for spectrum assignment.
//!
//! Every type here is a local, synchronous validation failure raised to the
//! immediate caller: a frequency off the grid, a channel width that cannot be
//! centered, or contradictory client hints. The layer above decides whether
//! to abort the request or retry with relaxed constraints.
//!
//! Spectrum exhaustion (no free aligned range on the path) is *not* an
//! error and has no type here; the allocator reports it as a normal variant
//! of its result enum.

use crate::frequency::Frequency;
use flexgrid_core::math::decimal::Decimal;

/// The error type for the frequency ↔ slot-index mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// The frequency lies outside the configured grid.
    OutOfRange {
        /// The offending frequency.
        frequency: Frequency,
        /// The lower edge of the grid.
        lower_edge: Frequency,
        /// The upper edge of the grid.
        upper_edge: Frequency,
    },
    /// The frequency does not sit on the grid's granularity lattice.
    Misaligned {
        /// The offending frequency.
        frequency: Frequency,
        /// The grid granularity in GHz.
        granularity_ghz: Decimal,
    },
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange {
                frequency,
                lower_edge,
                upper_edge,
            } => write!(
                f,
                "frequency {} is outside the grid [{}, {}]",
                frequency, lower_edge, upper_edge
            ),
            Self::Misaligned {
                frequency,
                granularity_ghz,
            } => write!(
                f,
                "frequency {} does not sit on the {} GHz grid lattice",
                frequency, granularity_ghz
            ),
        }
    }
}

impl std::error::Error for GridError {}

/// A requested service slot width is odd and cannot straddle a center
/// frequency symmetrically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OddWidthError {
    /// The offending width in slots.
    pub width: usize,
}

impl std::fmt::Display for OddWidthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "service slot width {} is odd and cannot be centered on the grid",
            self.width
        )
    }
}

impl std::error::Error for OddWidthError {}

/// No node-independent alignment reference index could be derived, because
/// the architecture's reference frequency does not map onto the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoAlignedIndexError {
    /// The reference frequency that failed to map.
    pub frequency: Frequency,
    /// Why the mapping failed.
    pub cause: GridError,
}

impl std::fmt::Display for NoAlignedIndexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "no alignment reference index for {}: {}",
            self.frequency, self.cause
        )
    }
}

impl std::error::Error for NoAlignedIndexError {}

/// The error type for client slot-width resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientInputError {
    /// The slot-width hints for the two ends of the service disagree.
    ConflictingConstraints {
        /// Hint reported for the A end, in logical slot units.
        a_end: u32,
        /// Hint reported for the Z end, in logical slot units.
        z_end: u32,
    },
    /// No slot-width information was supplied where it was required.
    MissingSlotWidth,
    /// The requested width is not an exact, non-empty multiple of the
    /// working grid granularity.
    InvalidSlotWidth {
        /// The requested width in GHz.
        requested_ghz: Decimal,
        /// The working grid granularity in GHz.
        granularity_ghz: Decimal,
    },
}

impl std::fmt::Display for ClientInputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ConflictingConstraints { a_end, z_end } => write!(
                f,
                "client slot-width hints disagree between service ends: A={}, Z={}",
                a_end, z_end
            ),
            Self::MissingSlotWidth => {
                write!(f, "client supplied no slot-width information")
            }
            Self::InvalidSlotWidth {
                requested_ghz,
                granularity_ghz,
            } => write!(
                f,
                "requested width {} GHz is not a non-empty multiple of the {} GHz working granularity",
                requested_ghz, granularity_ghz
            ),
        }
    }
}

impl std::error::Error for ClientInputError {}
