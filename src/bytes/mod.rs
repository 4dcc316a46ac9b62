//! Bytes module: Find/replace dan inspeksi byte string
//!
//! Prinsip desain:
//! - In-Place: Replace langsung menulis ke buffer caller
//! - Zero-Copy File: `MappedFile` menjalankan replace yang sama di region mmap

mod mapped;

pub use mapped::{replace_in_file, MappedFile};

/// Mengganti semua byte `was` dengan `will` di dalam `buf`.
///
/// Returns jumlah byte yang diganti. Kalau `was == will`, byte yang cocok
/// tetap dihitung walaupun isinya tidak berubah.
#[inline]
pub fn replace(was: u8, will: u8, buf: &mut [u8]) -> usize {
    let mut replaced = 0;

    for byte in buf.iter_mut().filter(|b| **b == was) {
        *byte = will;
        replaced += 1;
    }

    replaced
}

/// Whitespace versi C locale (`isspace`), termasuk `\v` yang tidak
/// dianggap whitespace oleh `u8::is_ascii_whitespace`.
#[inline(always)]
pub fn is_c_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

/// Cek apakah string berisi minimal satu byte yang bukan whitespace.
///
/// Byte NUL dianggap akhir string; sisa buffer setelahnya diabaikan.
pub fn has_visible_byte(s: &[u8]) -> bool {
    s.iter()
        .take_while(|&&b| b != 0)
        .any(|&b| !is_c_space(b))
}
