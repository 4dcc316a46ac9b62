//! Quicksort in-place dengan comparator callback
//!
//! Skema partisi:
//! 1. Pivot = elemen tengah `(left + right) / 2`, ditukar ke posisi `left`
//! 2. Setiap elemen `<= pivot` dipindah ke prefix yang terus bertambah
//! 3. Pivot ditukar ke batas prefix (`cut`), lalu kedua sisi di-sort
//!
//! Sisi yang lebih kecil diproses rekursif, sisi yang lebih besar lewat loop,
//! jadi kedalaman stack tetap logaritmik.

use std::cmp::Ordering;
use tracing::trace;

use super::{not_greater, RawSlice, SortBuffer};
use crate::error::{Error, Result};

fn sort_range<B, F>(buf: &mut B, mut left: usize, mut right: usize, cmp: &mut F)
where
    B: SortBuffer + ?Sized,
    F: FnMut(&B::Elem, &B::Elem) -> Ordering,
{
    while left < right {
        // Sama dengan (left + right) / 2 tanpa overflow
        let mid = left + (right - left) / 2;
        buf.swap_elems(left, mid);

        let mut cut = left;
        for i in left + 1..=right {
            if not_greater(cmp(buf.elem(i), buf.elem(left))) {
                cut += 1;
                buf.swap_elems(cut, i);
            }
        }

        buf.swap_elems(cut, left);
        trace!(left, right, cut, "partition");

        // Kiri: left..cut, kanan: cut+1..=right
        if cut - left < right - cut {
            if cut > left {
                sort_range(buf, left, cut - 1, cmp);
            }
            left = cut + 1;
        } else {
            sort_range(buf, cut + 1, right, cmp);
            right = cut - 1;
        }
    }
}

/// Validasi range inklusif `left..=right`.
///
/// Returns `false` jika range kosong atau hanya satu elemen (tidak ada yang
/// perlu di-sort).
#[inline]
fn check_range<B: SortBuffer + ?Sized>(buf: &B, left: usize, right: usize) -> Result<bool> {
    if left >= right {
        return Ok(false);
    }

    let len = buf.count();
    if right >= len {
        return Err(Error::IndexOutOfRange { index: right, len });
    }

    Ok(true)
}

/// Sort seluruh slice sesuai `cmp`.
///
/// Tidak stable: urutan relatif elemen yang sama tidak dijamin.
pub fn quick_sort<T, F>(data: &mut [T], mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if data.len() < 2 {
        return;
    }

    let right = data.len() - 1;
    sort_range(data, 0, right, &mut cmp);
}

/// Sort elemen `left..=right` saja. Elemen di luar range tidak disentuh.
///
/// `left >= right` adalah no-op. Returns `Error::IndexOutOfRange` jika
/// `right` melewati akhir slice.
pub fn quick_sort_range<T, F>(data: &mut [T], left: usize, right: usize, mut cmp: F) -> Result<()>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if check_range(&*data, left, right)? {
        sort_range(data, left, right, &mut cmp);
    }
    Ok(())
}

/// Versi untyped dari `quick_sort_range`: elemen dibandingkan sebagai byte
/// slice dan ditukar byte-per-byte.
pub fn quick_sort_raw<F>(
    slice: &mut RawSlice<'_>,
    left: usize,
    right: usize,
    mut cmp: F,
) -> Result<()>
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    if check_range(&*slice, left, right)? {
        trace!(left, right, elem_size = slice.elem_size(), "raw quick sort");
        sort_range(slice, left, right, &mut cmp);
    }
    Ok(())
}

/// Sort seluruh buffer untyped dengan elemen `elem_size` byte.
pub fn sort_raw<F>(bytes: &mut [u8], elem_size: usize, cmp: F) -> Result<()>
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    let mut slice = RawSlice::new(bytes, elem_size)?;
    let len = slice.len();
    if len < 2 {
        return Ok(());
    }

    quick_sort_raw(&mut slice, 0, len - 1, cmp)
}
