//! Memory-Mapped File untuk replace in-place
//!
//! File di-mmap read/write, lalu `replace` berjalan langsung di page cache:
//! - Zero-copy: Tidak ada read ke buffer terpisah
//! - Persistence: Perubahan ditulis balik oleh kernel, `flush` memaksa sync

use memmap2::{MmapMut, MmapOptions};
use std::fs::OpenOptions;
use std::path::Path;
use tracing::debug;

use crate::error::{Error, Result};

/// Panjang file sebagai `usize`; gagal jika tidak muat di address space
#[inline]
fn mapping_len(file_len: u64) -> Result<usize> {
    usize::try_from(file_len).map_err(|_| Error::FileTooLarge { len: file_len })
}

/// File yang di-mmap untuk operasi byte in-place
pub struct MappedFile {
    // None untuk file kosong - mmap dengan panjang 0 ditolak di beberapa OS
    mmap: Option<MmapMut>,
}

impl MappedFile {
    /// Membuka file yang sudah ada dan memetakannya ke memory
    ///
    /// File tidak dibuat dan ukurannya tidak diubah.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new().read(true).write(true).open(path)?;
        let len = mapping_len(file.metadata()?.len())?;

        if len == 0 {
            debug!(path = %path.display(), "empty file, nothing to map");
            return Ok(Self { mmap: None });
        }

        // SAFETY: File dibuka read/write; caller bertanggung jawab agar file
        // tidak di-truncate proses lain selama mapping hidup
        let mmap = unsafe { MmapOptions::new().len(len).map_mut(&file)? };
        debug!(path = %path.display(), len, "file mapped");

        Ok(Self { mmap: Some(mmap) })
    }

    /// Replace semua byte `was` dengan `will` langsung di region mmap
    #[inline]
    pub fn replace(&mut self, was: u8, will: u8) -> usize {
        match self.mmap.as_mut() {
            Some(mmap) => super::replace(was, will, &mut mmap[..]),
            None => 0,
        }
    }

    /// Isi file sebagai slice (zero-copy)
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.mmap.as_deref().unwrap_or(&[])
    }

    /// Isi file sebagai slice mutable; perubahan langsung masuk ke page cache
    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        match self.mmap.as_mut() {
            Some(mmap) => &mut mmap[..],
            None => &mut [],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sinkronisasi perubahan ke disk
    pub fn flush(&self) -> Result<()> {
        if let Some(mmap) = &self.mmap {
            mmap.flush()?;
        }
        Ok(())
    }
}

/// Open + replace + flush dalam satu panggilan.
///
/// Returns jumlah byte yang diganti.
pub fn replace_in_file<P: AsRef<Path>>(path: P, was: u8, will: u8) -> Result<usize> {
    let mut file = MappedFile::open(path)?;
    let replaced = file.replace(was, will);
    file.flush()?;

    debug!(replaced, "in-place replace finished");
    Ok(replaced)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_mapped_replace_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("text.txt");
        fs::write(&path, b"one two three").unwrap();

        {
            let mut file = MappedFile::open(&path).unwrap();
            assert_eq!(file.len(), 13);
            assert_eq!(file.replace(b' ', b'_'), 2);
            assert_eq!(file.as_bytes(), b"one_two_three");
            file.flush().unwrap();
        }

        assert_eq!(fs::read(&path).unwrap(), b"one_two_three");
    }

    #[test]
    fn test_mapped_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        fs::write(&path, b"").unwrap();

        let mut file = MappedFile::open(&path).unwrap();
        assert!(file.is_empty());
        assert_eq!(file.replace(b'a', b'b'), 0);
        file.flush().unwrap();
    }

    #[test]
    fn test_mapping_len() {
        assert_eq!(mapping_len(0).unwrap(), 0);
        assert_eq!(mapping_len(4096).unwrap(), 4096);
    }

    #[cfg(target_pointer_width = "32")]
    #[test]
    fn test_mapping_len_too_large() {
        let len = u64::from(u32::MAX) + 1;
        assert!(matches!(mapping_len(len), Err(Error::FileTooLarge { len: l }) if l == len));
    }

    #[test]
    fn test_as_bytes_mut_writes_through() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bytes.bin");
        fs::write(&path, b"abcd").unwrap();

        {
            let mut file = MappedFile::open(&path).unwrap();
            file.as_bytes_mut().reverse();
            file.flush().unwrap();
        }

        assert_eq!(fs::read(&path).unwrap(), b"dcba");
    }

    #[test]
    fn test_as_bytes_mut_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.bin");
        fs::write(&path, b"").unwrap();

        let mut file = MappedFile::open(&path).unwrap();
        assert!(file.as_bytes_mut().is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = MappedFile::open(dir.path().join("missing.txt"))
            .err()
            .unwrap();
        assert!(matches!(err, crate::Error::Io(_)));
    }
}
