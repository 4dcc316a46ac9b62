//! Stream helpers untuk input berbasis baris.
//!
//! Semua fungsi generik atas `BufRead`: byte yang perlu "dikembalikan" ke
//! stream cukup tidak di-`consume`, sehingga tetap terbaca oleh pemanggil
//! berikutnya.

use std::io::{self, BufRead};

/// Intip byte berikutnya tanpa mengkonsumsinya. `None` berarti EOF.
fn peek_byte<R: BufRead + ?Sized>(reader: &mut R) -> io::Result<Option<u8>> {
    loop {
        match reader.fill_buf() {
            Ok(buf) => return Ok(buf.first().copied()),
            Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}

/// Buang semua input sampai `'\n'` berikutnya.
///
/// Newline itu sendiri tidak dikonsumsi. Berhenti tanpa error di EOF.
pub fn skip_line<R: BufRead + ?Sized>(reader: &mut R) -> io::Result<()> {
    loop {
        let (found, used) = {
            let buf = match reader.fill_buf() {
                Ok(buf) => buf,
                Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };

            if buf.is_empty() {
                return Ok(());
            }

            match buf.iter().position(|&b| b == b'\n') {
                Some(pos) => (true, pos),
                None => (false, buf.len()),
            }
        };

        reader.consume(used);
        if found {
            return Ok(());
        }
    }
}

/// Cek apakah sisa baris kosong.
///
/// Spasi dan tab dikonsumsi. Byte pertama selain itu tetap di stream.
/// Returns `true` jika byte tersebut `'\n'` atau stream sudah EOF.
pub fn is_blank_line<R: BufRead + ?Sized>(reader: &mut R) -> io::Result<bool> {
    loop {
        match peek_byte(reader)? {
            Some(b' ' | b'\t') => reader.consume(1),
            Some(b'\n') | None => return Ok(true),
            Some(_) => return Ok(false),
        }
    }
}
