use std::{cmp::Ordering, ops::Add};

mod ordered_float;

use ordered_float::OrderedFloat;

/// Edge weight usable by the algorithms.
///
/// The associated `Ord` type embeds the weight into a total order so that it
/// can drive a [`BinaryHeap`](std::collections::BinaryHeap). For integers
/// this is the type itself, for floats it is a total-order wrapper.
pub trait Weight: PartialOrd + Add<Self, Output = Self> + Clone + Sized {
    type Ord: Ord + From<Self> + Into<Self>;

    fn zero() -> Self;
    fn is_unsigned() -> bool;
}

/// Pairs a value with a weight and compares by the weight only.
///
/// This is the single comparator used by both priority queues in the crate:
/// partial paths in the shortest-path frontier and candidate edges in the
/// spanning-tree queue. Wrap in [`Reverse`](std::cmp::Reverse) for min-heap
/// behavior.
#[derive(Debug, Clone, Copy)]
pub struct Weighted<T, W>(pub T, pub W);

impl<T, W: PartialEq> PartialEq for Weighted<T, W> {
    fn eq(&self, other: &Self) -> bool {
        self.1.eq(&other.1)
    }
}

impl<T, W: Eq> Eq for Weighted<T, W> {}

impl<T, W: PartialOrd> PartialOrd for Weighted<T, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.1.partial_cmp(&other.1)
    }
}

impl<T, W: Ord> Ord for Weighted<T, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.1.cmp(&other.1)
    }
}

macro_rules! impl_int_weight {
    ($ty:ty, $is_unsigned:expr) => {
        impl Weight for $ty {
            type Ord = Self;

            fn zero() -> Self {
                0
            }

            fn is_unsigned() -> bool {
                $is_unsigned
            }
        }
    };
}

impl_int_weight!(i8, false);
impl_int_weight!(i16, false);
impl_int_weight!(i32, false);
impl_int_weight!(i64, false);
impl_int_weight!(u8, true);
impl_int_weight!(u16, true);
impl_int_weight!(u32, true);
impl_int_weight!(u64, true);
impl_int_weight!(isize, false);
impl_int_weight!(usize, true);

macro_rules! impl_float_weight {
    ($ty:ty) => {
        impl Weight for $ty {
            type Ord = OrderedFloat<Self>;

            fn zero() -> Self {
                <$ty>::default()
            }

            fn is_unsigned() -> bool {
                false
            }
        }
    };
}

impl_float_weight!(f32);
impl_float_weight!(f64);
