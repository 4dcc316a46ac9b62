//! Untyped array: byte buffer yang dibagi rata menjadi elemen berukuran tetap

use super::SortBuffer;
use crate::error::{Error, Result};

/// Tukar isi dua region byte yang terpisah.
///
/// # Panics
/// Panic jika panjang kedua region berbeda
#[inline]
pub fn swap_bytes(a: &mut [u8], b: &mut [u8]) {
    assert_eq!(a.len(), b.len(), "swap_bytes: regions must have equal length");
    a.swap_with_slice(b);
}

/// View mutable ke array untyped milik caller
#[derive(Debug)]
pub struct RawSlice<'a> {
    bytes: &'a mut [u8],
    elem_size: usize,
}

impl<'a> RawSlice<'a> {
    /// Membungkus buffer sebagai array dengan elemen `elem_size` byte.
    ///
    /// Gagal jika `elem_size` nol atau tidak membagi habis panjang buffer.
    pub fn new(bytes: &'a mut [u8], elem_size: usize) -> Result<Self> {
        if elem_size == 0 || bytes.len() % elem_size != 0 {
            return Err(Error::ElementSize {
                size: elem_size,
                len: bytes.len(),
            });
        }

        Ok(Self { bytes, elem_size })
    }

    /// Jumlah elemen
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.bytes.len() / self.elem_size
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[inline(always)]
    pub fn elem_size(&self) -> usize {
        self.elem_size
    }

    /// Offset byte dari elemen ke-`index`
    #[inline(always)]
    fn offset(&self, index: usize) -> usize {
        assert!(
            index < self.len(),
            "index {index} out of range for {} elements",
            self.len()
        );
        index * self.elem_size
    }

    /// Elemen ke-`index` sebagai byte slice
    ///
    /// # Panics
    /// Panic jika `index >= len()`
    #[inline(always)]
    pub fn get(&self, index: usize) -> &[u8] {
        let start = self.offset(index);
        &self.bytes[start..start + self.elem_size]
    }

    /// # Panics
    /// Panic jika `index >= len()`
    #[inline(always)]
    pub fn get_mut(&mut self, index: usize) -> &mut [u8] {
        let start = self.offset(index);
        &mut self.bytes[start..start + self.elem_size]
    }

    /// Tukar elemen `i` dan `j`. No-op jika `i == j`.
    ///
    /// # Panics
    /// Panic jika salah satu index di luar range
    #[inline]
    pub fn swap(&mut self, i: usize, j: usize) {
        let (lo, hi) = if i < j { (i, j) } else { (j, i) };
        let lo_start = self.offset(lo);
        let hi_start = self.offset(hi);

        if lo == hi {
            return;
        }

        let size = self.elem_size;
        let (head, tail) = self.bytes.split_at_mut(hi_start);
        swap_bytes(&mut head[lo_start..lo_start + size], &mut tail[..size]);
    }

    /// Seluruh buffer
    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..]
    }
}

impl SortBuffer for RawSlice<'_> {
    type Elem = [u8];

    #[inline(always)]
    fn count(&self) -> usize {
        self.len()
    }

    #[inline(always)]
    fn elem(&self, index: usize) -> &[u8] {
        self.get(index)
    }

    #[inline(always)]
    fn swap_elems(&mut self, i: usize, j: usize) {
        self.swap(i, j);
    }
}
