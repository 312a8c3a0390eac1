//! # File I/O Module
//!
//! Reading and rewriting of borrowed file handles. Nothing here opens or
//! closes files; the caller owns the handle.

use std::io::{self, Read, Seek, SeekFrom, Write};

/// File I/O operations for the validator.
pub struct FileIO;

impl FileIO {
  /// Reads at most `limit` bytes from the current position.
  ///
  /// When the limit falls inside a multi-byte UTF-8 character, the partial
  /// character is dropped. Bytes that are not UTF-8 at all are an error.
  pub fn read_prefix<R: Read>(reader: &mut R, limit: usize) -> io::Result<String> {
    let mut buf = Vec::with_capacity(limit);
    reader.by_ref().take(limit as u64).read_to_end(&mut buf)?;

    match String::from_utf8(buf) {
      Ok(prefix) => Ok(prefix),
      Err(e) => {
        let utf8_error = e.utf8_error();
        if utf8_error.error_len().is_some() {
          return Err(io::Error::new(io::ErrorKind::InvalidData, utf8_error));
        }
        let bytes = e.into_bytes();
        Ok(String::from_utf8_lossy(&bytes[..utf8_error.valid_up_to()]).into_owned())
      }
    }
  }

  /// Reads everything from the current position to the end.
  pub fn read_full<R: Read>(reader: &mut R) -> io::Result<String> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    Ok(content)
  }

  /// Writes `content` over the start of the file.
  ///
  /// Bytes past the end of `content` are left in place, so `content` must be
  /// at least as long as what it replaces.
  pub fn write_from_start<W: Write + Seek>(writer: &mut W, content: &str) -> io::Result<()> {
    writer.seek(SeekFrom::Start(0))?;
    writer.write_all(content.as_bytes())?;
    writer.flush()
  }
}
