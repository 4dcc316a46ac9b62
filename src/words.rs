//! Word comparison predicates
//!
//! `Word` adalah view ke potongan byte (biasanya satu baris teks).
//! Comparator di sini dipakai sebagai callback untuk `sort::quick_sort`.

use std::cmp::Ordering;

use crate::bytes::has_visible_byte;

/// Potongan byte yang dipinjam dari buffer caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Word<'a> {
    text: &'a [u8],
}

impl<'a> Word<'a> {
    #[inline(always)]
    pub const fn new(text: &'a [u8]) -> Self {
        Self { text }
    }

    #[inline(always)]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.text
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Huruf ASCII dalam word, urutan depan ke belakang
    #[inline]
    fn letters(&self) -> impl DoubleEndedIterator<Item = u8> + 'a {
        let text: &'a [u8] = self.text;
        text.iter().copied().filter(|b| b.is_ascii_alphabetic())
    }
}

impl<'a> From<&'a str> for Word<'a> {
    fn from(s: &'a str) -> Self {
        Self::new(s.as_bytes())
    }
}

impl<'a> From<&'a [u8]> for Word<'a> {
    fn from(text: &'a [u8]) -> Self {
        Self::new(text)
    }
}

/// Bandingkan dua word secara leksikografis, hanya menghitung huruf.
///
/// Byte selain huruf ASCII dilewati. Case sensitive (`'B' < 'a'`).
/// Word yang hurufnya prefix dari word lain dianggap lebih kecil.
pub fn letter_cmp(a: &Word<'_>, b: &Word<'_>) -> Ordering {
    a.letters().cmp(b.letters())
}

/// Seperti `letter_cmp`, tapi huruf dibaca dari belakang (urutan rima).
pub fn reverse_letter_cmp(a: &Word<'_>, b: &Word<'_>) -> Ordering {
    a.letters().rev().cmp(b.letters().rev())
}

/// Comparator integer tanpa overflow dari idiom `a - b`
#[inline(always)]
pub fn int_cmp(a: &i32, b: &i32) -> Ordering {
    a.cmp(b)
}

/// `int_cmp` untuk elemen untyped: 4 byte native-endian.
///
/// # Panics
/// Panic jika salah satu elemen bukan 4 byte
#[inline]
pub fn int_cmp_raw(a: &[u8], b: &[u8]) -> Ordering {
    int_cmp(&decode_i32(a), &decode_i32(b))
}

#[inline(always)]
fn decode_i32(bytes: &[u8]) -> i32 {
    let raw: [u8; 4] = match bytes.try_into() {
        Ok(raw) => raw,
        Err(_) => panic!("int element must be 4 bytes, got {}", bytes.len()),
    };
    i32::from_ne_bytes(raw)
}

/// Pecah teks menjadi baris yang punya minimal satu karakter terlihat.
///
/// `'\r'` di akhir baris ikut dibuang.
pub fn split_lines(text: &[u8]) -> Vec<Word<'_>> {
    text.split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
        .filter(|line| has_visible_byte(line))
        .map(Word::new)
        .collect()
}
