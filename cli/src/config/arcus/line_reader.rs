//! Delimiter-bounded line reading over a raw byte stream.
//!
//! The reader pulls one byte at a time so that nothing past the delimiter is
//! consumed; the caller can stop at any line and the stream is positioned
//! exactly after it.
use std::io::{self, ErrorKind, Read};

use super::store::Allocator;

/// Capacity of a fresh line buffer, in bytes. Doubled whenever it fills.
pub const INITIAL_CAPACITY: usize = 8;

/// One line read from a stream.
///
/// The logical length is the number of content bytes; growth slack is
/// released before the line is handed out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    bytes: Vec<u8>,
}

impl Line {
    /// Number of content bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    /// `true` for a line with no content (e.g. a bare delimiter).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The content bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Take ownership of the content bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Decode as UTF-8, replacing invalid sequences with `U+FFFD`.
    #[must_use]
    pub fn into_string(self) -> String {
        String::from_utf8(self.bytes)
            .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
    }
}

/// Read one line from `stream`, up to and including `delimiter`.
///
/// Returns `Ok(None)` if the stream ends before a single byte is read; that
/// is the normal end-of-input signal. A last line without a trailing
/// delimiter is returned as-is. With `remove_delimiter` the delimiter byte
/// is left out of the returned content.
///
/// If `alloc` refuses to grow the buffer, reading stops and whatever was
/// accumulated is returned as a shorter line. The byte that triggered the
/// growth is lost and the rest of the line stays in the stream.
///
/// # Errors
///
/// Returns any I/O error from the stream other than
/// [`ErrorKind::Interrupted`], which is retried.
///
/// # Examples
///
/// ```
/// use arcus_cli::config::arcus::{SystemAllocator, read_line};
///
/// let mut input = &b"first\nsecond"[..];
/// let line = read_line(&mut input, b'\n', true, &SystemAllocator).unwrap().unwrap();
/// assert_eq!(line.as_bytes(), b"first");
/// let line = read_line(&mut input, b'\n', true, &SystemAllocator).unwrap().unwrap();
/// assert_eq!(line.as_bytes(), b"second");
/// assert!(read_line(&mut input, b'\n', true, &SystemAllocator).unwrap().is_none());
/// ```
pub fn read_line<R: Read + ?Sized>(
    stream: &mut R,
    delimiter: u8,
    remove_delimiter: bool,
    alloc: &dyn Allocator,
) -> io::Result<Option<Line>> {
    let mut buf = Vec::new();
    if alloc.grow_line(&mut buf, INITIAL_CAPACITY).is_err() {
        return Ok(None);
    }

    let mut byte = [0u8; 1];
    loop {
        match stream.read(&mut byte) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        }

        if buf.len() == buf.capacity() {
            let additional = buf.capacity().max(INITIAL_CAPACITY);
            if alloc.grow_line(&mut buf, additional).is_err() {
                break;
            }
        }

        buf.push(byte[0]);
        if byte[0] == delimiter {
            break;
        }
    }

    if buf.is_empty() {
        return Ok(None);
    }
    if remove_delimiter && buf.last() == Some(&delimiter) {
        buf.pop();
    }
    buf.shrink_to_fit();
    Ok(Some(Line { bytes: buf }))
}
