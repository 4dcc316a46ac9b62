//! Bytekit - Utilitas kecil untuk byte, angka, stream, dan sorting
//!
//! Arsitektur:
//! - Stateless: Setiap fungsi bekerja langsung pada memory milik caller
//! - In-Place: Replace dan sort tidak mengalokasi buffer baru
//! - Untyped Sort: Quicksort di atas byte buffer + ukuran elemen + comparator
//! - Zero-Copy File: Replace langsung di halaman mmap

pub mod bytes;
pub mod error;
pub mod numeric;
pub mod sort;
pub mod stream;
pub mod words;

#[cfg(feature = "cli")]
pub mod logger;

pub use error::{Error, Result};
