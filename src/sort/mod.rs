//! Sort module: Quicksort in-place untuk array typed maupun untyped
//!
//! Prinsip desain:
//! - Untyped: Array dilihat sebagai byte buffer + ukuran elemen (`RawSlice`)
//! - Comparator callback: Urutan sepenuhnya ditentukan caller
//! - No-Allocation: Hanya swap byte-per-byte di buffer caller

mod quick_sort;
mod raw;

pub use quick_sort::{quick_sort, quick_sort_range, quick_sort_raw, sort_raw};
pub use raw::{swap_bytes, RawSlice};

use std::cmp::Ordering;

/// Akses elemen + swap, cukup untuk partisi quicksort.
///
/// Diimplementasi oleh slice typed dan `RawSlice`, sehingga algoritma
/// partisi hanya ditulis sekali.
pub(crate) trait SortBuffer {
    type Elem: ?Sized;

    fn count(&self) -> usize;

    fn elem(&self, index: usize) -> &Self::Elem;

    fn swap_elems(&mut self, i: usize, j: usize);
}

impl<T> SortBuffer for [T] {
    type Elem = T;

    #[inline(always)]
    fn count(&self) -> usize {
        self.len()
    }

    #[inline(always)]
    fn elem(&self, index: usize) -> &T {
        &self[index]
    }

    #[inline(always)]
    fn swap_elems(&mut self, i: usize, j: usize) {
        self.swap(i, j);
    }
}

/// Comparator `<=`: elemen yang tidak lebih besar dari pivot masuk partisi kiri
#[inline(always)]
pub(crate) fn not_greater(ord: Ordering) -> bool {
    ord != Ordering::Greater
}
