//! Error type untuk operasi yang bisa gagal karena input caller.
//!
//! Pelanggaran precondition (index di luar range, operand non-finite)
//! tetap panic lewat `assert!`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("element size {size} does not evenly divide a buffer of {len} bytes")]
    ElementSize { size: usize, len: usize },

    #[error("index {index} out of range for {len} elements")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("file of {len} bytes does not fit in the address space")]
    FileTooLarge { len: u64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
