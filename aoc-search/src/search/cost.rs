//! Edge cost abstraction.

use std::fmt::Debug;
use std::ops::Add;

/// A totally ordered, additive edge cost.
///
/// Implemented for every primitive integer type. Floats are not `Ord` and are
/// not supported; scale them to integers instead. Costs must be non-negative
/// for Dijkstra and A* to return minimal distances.
///
/// The engine accumulates with [`Cost::checked_add`]. A route whose cost does
/// not fit in the type is treated as absent rather than wrapping.
pub trait Cost: Copy + Ord + Add<Output = Self> + Debug {
    const ZERO: Self;
    const ONE: Self;

    /// `self + other`, or `None` on overflow.
    fn checked_add(self, other: Self) -> Option<Self>;
}

macro_rules! impl_cost {
    ($($t:ty),* $(,)?) => {
        $(
            impl Cost for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                fn checked_add(self, other: Self) -> Option<Self> {
                    <$t>::checked_add(self, other)
                }
            }
        )*
    };
}

impl_cost!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
