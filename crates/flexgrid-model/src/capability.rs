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

/// Default slot-width granularity when a node reports none, in GHz.
#[inline]
pub fn default_slot_width_granularity_ghz() -> Decimal {
    Decimal::from_int(50)
}

/// Default center-frequency granularity when a node reports none, in GHz.
#[inline]
pub fn default_center_frequency_granularity_ghz() -> Decimal {
    Decimal::from_int(50)
}

/// Default minimum number of joinable slots.
pub const DEFAULT_MIN_SLOTS: u32 = 1;

/// Default maximum number of joinable slots.
pub const DEFAULT_MAX_SLOTS: u32 = 1;

/// Per-node spectrum capability: granularities and joinable-slot bounds.
///
/// Nodes along a candidate path report these through the capability
/// provider; fields a node does not report fall back to the documented
/// defaults (50 GHz / 50 GHz / 1 / 1). The center-frequency granularities of
/// all traversed nodes are later reduced to a common alignment lattice by
/// the allocator's granularity collection.
///
/// # Examples
///
/// ```rust
/// # use flexgrid_model::capability::Capability;
/// # use flexgrid_core::math::decimal::Decimal;
///
/// let reported = Capability::from_reported(None, Some(Decimal::new(125, 1)), None, Some(8));
/// assert_eq!(reported.slot_width_granularity_ghz(), Decimal::from_int(50));
/// assert_eq!(reported.center_frequency_granularity_ghz(), Decimal::new(125, 1));
/// assert_eq!(reported.min_slots(), 1);
/// assert_eq!(reported.max_slots(), 8);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Capability {
    slot_width_granularity_ghz: Decimal,
    center_frequency_granularity_ghz: Decimal,
    min_slots: u32,
    max_slots: u32,
}

impl Capability {
    /// Creates a capability from fully specified values.
    #[inline]
    pub fn new(
        slot_width_granularity_ghz: Decimal,
        center_frequency_granularity_ghz: Decimal,
        min_slots: u32,
        max_slots: u32,
    ) -> Self {
        Self {
            slot_width_granularity_ghz,
            center_frequency_granularity_ghz,
            min_slots,
            max_slots,
        }
    }

    /// Creates a capability from optionally device-reported values,
    /// substituting the documented default for every absent field.
    #[inline]
    pub fn from_reported(
        slot_width_granularity_ghz: Option<Decimal>,
        center_frequency_granularity_ghz: Option<Decimal>,
        min_slots: Option<u32>,
        max_slots: Option<u32>,
    ) -> Self {
        Self {
            slot_width_granularity_ghz: slot_width_granularity_ghz
                .unwrap_or_else(default_slot_width_granularity_ghz),
            center_frequency_granularity_ghz: center_frequency_granularity_ghz
                .unwrap_or_else(default_center_frequency_granularity_ghz),
            min_slots: min_slots.unwrap_or(DEFAULT_MIN_SLOTS),
            max_slots: max_slots.unwrap_or(DEFAULT_MAX_SLOTS),
        }
    }

    /// Returns the slot-width granularity in GHz.
    #[inline]
    pub const fn slot_width_granularity_ghz(&self) -> Decimal {
        self.slot_width_granularity_ghz
    }

    /// Returns the center-frequency granularity in GHz.
    #[inline]
    pub const fn center_frequency_granularity_ghz(&self) -> Decimal {
        self.center_frequency_granularity_ghz
    }

    /// Returns the minimum number of joinable slots.
    #[inline]
    pub const fn min_slots(&self) -> u32 {
        self.min_slots
    }

    /// Returns the maximum number of joinable slots.
    #[inline]
    pub const fn max_slots(&self) -> u32 {
        self.max_slots
    }
}

impl Default for Capability {
    #[inline]
    fn default() -> Self {
        Self::from_reported(None, None, None, None)
    }
}
