//! Edge weight types accepted by the engine.

use std::fmt;

/// Integer edge weight with a reserved "no edge" sentinel.
///
/// The sentinel is the type's maximum value. It is the identity of the
/// row-minimum reduction and marks absent entries, so it must never appear as
/// a real weight; the engine rejects graphs that store it.
///
/// # Examples
/// ```
/// use boruvka_core::Weight;
///
/// assert_eq!(<u32 as Weight>::SENTINEL, u32::MAX);
/// assert_eq!(7_i64.widen(), 7_i128);
/// ```
pub trait Weight: Copy + Ord + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Reserved value meaning "no edge present".
    const SENTINEL: Self;
    /// Weight assigned to edges whose source format omits one.
    const ONE: Self;

    /// Widens the weight for lossless accumulation of tree totals.
    fn widen(self) -> i128;
}

macro_rules! impl_weight {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Weight for $ty {
                const SENTINEL: Self = <$ty>::MAX;
                const ONE: Self = 1;

                fn widen(self) -> i128 {
                    i128::from(self)
                }
            }
        )+
    };
}

impl_weight!(u32, u64, i32, i64);
