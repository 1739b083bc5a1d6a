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

//! Layering of client restrictions onto path availability.

use crate::spectrum::Wishlist;
use fixedbitset::FixedBitSet;

/// Reduces the path availability to the candidate set a strategy may
/// allocate from.
///
/// The layers, in order:
///
/// 1. the availability mask of the path itself,
/// 2. a customer-reserved range, if the service is pinned to one (hard),
/// 3. the client's intersection wish-list (soft, keeps any overlap),
/// 4. the client's subset wish-list (hard, each interval must be entirely
///    free or it contributes nothing).
///
/// Every layer can only clear bits, never set them, so the result is
/// always a sub-mask of the input availability. An empty result is a
/// legitimate outcome the strategies then report as exhaustion.
#[derive(Clone, Copy, Default, Debug)]
pub struct RangeSelector;

impl RangeSelector {
    /// Applies all restriction layers and returns the candidate mask.
    pub fn select(
        &self,
        available: &FixedBitSet,
        customer_range: Option<&FixedBitSet>,
        wishlist: &Wishlist,
    ) -> FixedBitSet {
        let mut candidates = available.clone();
        if let Some(reserved) = customer_range {
            candidates.intersect_with(reserved);
        }
        wishlist.apply(&candidates)
    }
}
