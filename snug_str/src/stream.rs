//! Line-oriented and whole-stream reading into a [`SnugString`].
//!
//! [`read_line`] works through a caller-owned [`ReadCursor`] so that reading
//! a file line by line performs no per-line allocation beyond the value's own
//! growth, and it seeks the stream back over anything it over-read, so the
//! stream position always lands exactly after the consumed line.
//!
//! [`read_line`]: SnugString::read_line

use std::io::{self, Read, Seek, SeekFrom};

use crate::SnugString;

/// Size of the scratch buffer a [`ReadCursor`] refills from the stream
pub const SCRATCH_SIZE: usize = 1024;

/// Bookkeeping for [`SnugString::read_line`]: a fixed scratch buffer plus
/// end-of-stream and error flags.
///
/// A cursor owns no heap memory and is intended to be scoped to a single
/// read loop; call [`ReadCursor::reset`] to reuse it for another stream.
///
/// # Examples
/// ```
/// use std::io::Cursor;
/// use snug_str::{ReadCursor, SnugString};
///
/// let mut stream = Cursor::new("grocery list\nMilk, Apples\n");
/// let mut cursor = ReadCursor::new();
/// let mut line = SnugString::default();
///
/// assert!(line.read_line(&mut stream, &mut cursor).unwrap());
/// assert_eq!(line, "grocery list");
///
/// assert!(line.read_line(&mut stream, &mut cursor).unwrap());
/// assert_eq!(line, "Milk, Apples");
///
/// assert!(!line.read_line(&mut stream, &mut cursor).unwrap());
/// assert!(cursor.is_eof());
/// ```
pub struct ReadCursor {
    buf: [u8; SCRATCH_SIZE],
    eof: bool,
    errored: bool,
}

impl ReadCursor {
    #[inline]
    pub fn new() -> Self {
        ReadCursor {
            buf: [0; SCRATCH_SIZE],
            eof: false,
            errored: false,
        }
    }

    /// Whether the stream ran out of data on a previous read
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.eof
    }

    /// Whether a previous read failed with a stream or encoding error
    #[inline]
    pub fn had_error(&self) -> bool {
        self.errored
    }

    /// Clears the end-of-stream and error flags so the cursor can drive
    /// another read loop
    #[inline]
    pub fn reset(&mut self) {
        self.eof = false;
        self.errored = false;
    }
}

impl Default for ReadCursor {
    #[inline]
    fn default() -> Self {
        ReadCursor::new()
    }
}

impl core::fmt::Debug for ReadCursor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ReadCursor")
            .field("eof", &self.eof)
            .field("errored", &self.errored)
            .finish_non_exhaustive()
    }
}

impl SnugString {
    /// Replaces the content with the next line from `reader`, excluding the
    /// `\n` terminator, which is consumed from the stream.
    ///
    /// Returns `Ok(true)` when a line (possibly empty) was read, and
    /// `Ok(false)` at end of stream with no more data. Lines longer than the
    /// cursor's scratch buffer are reassembled across refills. After the
    /// call, the stream position is exactly past the consumed bytes, which is
    /// what the `Seek` bound is for: over-read bytes are seeked back.
    ///
    /// The stream is treated as binary UTF-8: no newline translation is
    /// performed, so a `\r` before the `\n` is kept. On a stream error or
    /// invalid UTF-8 the value is left empty, the cursor's error flag is set,
    /// and the error is returned.
    ///
    /// # Examples
    /// ```
    /// use std::io::Cursor;
    /// use snug_str::{ReadCursor, SnugString};
    ///
    /// let mut stream = Cursor::new("one\ntwo\nlast line, no newline");
    /// let mut cursor = ReadCursor::new();
    /// let mut line = SnugString::default();
    /// let mut lines = Vec::new();
    ///
    /// while line.read_line(&mut stream, &mut cursor).unwrap() {
    ///     lines.push(line.clone());
    /// }
    ///
    /// assert_eq!(lines, ["one", "two", "last line, no newline"]);
    /// ```
    pub fn read_line<R>(&mut self, reader: &mut R, cursor: &mut ReadCursor) -> io::Result<bool>
    where
        R: Read + Seek,
    {
        self.clear();
        if cursor.eof {
            return Ok(false);
        }

        let result = self.read_line_inner(reader, cursor);
        if result.is_err() {
            // don't leak a half-assembled line
            self.clear();
            cursor.errored = true;
        }
        result
    }

    fn read_line_inner<R>(&mut self, reader: &mut R, cursor: &mut ReadCursor) -> io::Result<bool>
    where
        R: Read + Seek,
    {
        loop {
            let n = match reader.read(&mut cursor.buf) {
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };

            if n == 0 {
                cursor.eof = true;
                if self.is_empty() {
                    return Ok(false);
                }
                // final line without a terminator
                self.validate_line()?;
                return Ok(true);
            }

            match cursor.buf[..n].iter().position(|&b| b == b'\n') {
                Some(newline) => {
                    self.append_raw(&cursor.buf[..newline]);
                    // give back everything we read past the terminator
                    let unread = (n - newline - 1) as i64;
                    if unread > 0 {
                        reader.seek(SeekFrom::Current(-unread))?;
                    }
                    self.validate_line()?;
                    return Ok(true);
                }
                None => self.append_raw(&cursor.buf[..n]),
            }
        }
    }

    /// Replaces the content with everything from `reader`'s current position
    /// to the end of the stream, returning the number of bytes read.
    ///
    /// The stream length is determined up front by seeking to the end and
    /// back, so exactly one reservation and one read pass happen. On a stream
    /// error or invalid UTF-8 the value is left empty.
    ///
    /// # Examples
    /// ```
    /// use std::io::{Cursor, Seek, SeekFrom};
    /// use snug_str::SnugString;
    ///
    /// let mut stream = Cursor::new("skip-this rest of the file");
    /// stream.seek(SeekFrom::Start(10)).unwrap();
    ///
    /// let mut contents = SnugString::default();
    /// assert_eq!(contents.read_all(&mut stream).unwrap(), 16);
    /// assert_eq!(contents, "rest of the file");
    /// ```
    pub fn read_all<R>(&mut self, reader: &mut R) -> io::Result<usize>
    where
        R: Read + Seek,
    {
        self.clear();

        let pos = reader.stream_position()?;
        let end = reader.seek(SeekFrom::End(0))?;
        reader.seek(SeekFrom::Start(pos))?;

        let remaining = usize::try_from(end.saturating_sub(pos))
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "stream is too large"))?;
        self.reserve(remaining);

        let mut filled = 0;
        while filled < remaining {
            // SAFETY: we reserved `remaining` bytes; only `..filled` of them
            // are ever treated as content, and only after validation below
            let buf = unsafe { &mut self.as_mut_bytes()[filled..remaining] };
            match reader.read(buf) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }

        // SAFETY: the first `filled` bytes were initialized by `read`
        let content = unsafe { &self.as_mut_bytes()[..filled] };
        if core::str::from_utf8(content).is_err() {
            return Err(invalid_utf8());
        }

        // SAFETY: bounds and UTF-8 validity established above
        unsafe { self.set_len(filled) };
        Ok(filled)
    }

    /// Appends raw bytes without UTF-8 validation; the caller validates once
    /// the full line is assembled
    fn append_raw(&mut self, bytes: &[u8]) {
        let len = self.len();
        self.reserve(bytes.len());

        // SAFETY: space was just reserved, and every caller validates the
        // content before it can be observed
        unsafe {
            self.as_mut_bytes()[len..len + bytes.len()].copy_from_slice(bytes);
            self.set_len(len + bytes.len());
        }
    }

    fn validate_line(&mut self) -> io::Result<()> {
        if core::str::from_utf8(self.as_bytes()).is_err() {
            return Err(invalid_utf8());
        }
        Ok(())
    }
}

fn invalid_utf8() -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidData,
        "stream did not contain valid UTF-8",
    )
}

#[cfg(test)]
mod tests {
    use std::io::{self, Cursor, Read, Seek, SeekFrom};

    use crate::{ReadCursor, SnugString};

    #[test]
    fn test_lines_with_and_without_terminator() {
        let mut stream = Cursor::new("first\nsecond\nthird");
        let mut cursor = ReadCursor::new();
        let mut line = SnugString::default();

        assert!(line.read_line(&mut stream, &mut cursor).unwrap());
        assert_eq!(line, "first");
        assert!(line.read_line(&mut stream, &mut cursor).unwrap());
        assert_eq!(line, "second");
        assert!(line.read_line(&mut stream, &mut cursor).unwrap());
        assert_eq!(line, "third");

        assert!(!line.read_line(&mut stream, &mut cursor).unwrap());
        assert!(line.is_empty());
        assert!(cursor.is_eof());
        assert!(!cursor.had_error());
    }

    #[test]
    fn test_empty_lines_are_lines() {
        let mut stream = Cursor::new("\n\nx\n");
        let mut cursor = ReadCursor::new();
        let mut line = SnugString::default();

        assert!(line.read_line(&mut stream, &mut cursor).unwrap());
        assert_eq!(line, "");
        assert!(line.read_line(&mut stream, &mut cursor).unwrap());
        assert_eq!(line, "");
        assert!(line.read_line(&mut stream, &mut cursor).unwrap());
        assert_eq!(line, "x");
        assert!(!line.read_line(&mut stream, &mut cursor).unwrap());
    }

    #[test]
    fn test_carriage_returns_are_content() {
        let mut stream = Cursor::new("dos line\r\nnext");
        let mut cursor = ReadCursor::new();
        let mut line = SnugString::default();

        assert!(line.read_line(&mut stream, &mut cursor).unwrap());
        assert_eq!(line, "dos line\r");
    }

    #[test]
    fn test_stream_position_lands_after_line() {
        let text = "abc\ndefgh\n";
        let mut stream = Cursor::new(text);
        let mut cursor = ReadCursor::new();
        let mut line = SnugString::default();

        assert!(line.read_line(&mut stream, &mut cursor).unwrap());
        assert_eq!(stream.stream_position().unwrap(), 4);

        // the rest of the stream is untouched and readable directly
        let mut rest = String::new();
        stream.read_to_string(&mut rest).unwrap();
        assert_eq!(rest, "defgh\n");
    }

    #[test]
    fn test_line_spanning_multiple_refills() {
        let long = "x".repeat(super::SCRATCH_SIZE * 3 + 17);
        let text = format!("{}\nshort\n", long);
        let mut stream = Cursor::new(text);
        let mut cursor = ReadCursor::new();
        let mut line = SnugString::default();

        assert!(line.read_line(&mut stream, &mut cursor).unwrap());
        assert_eq!(line.len(), long.len());
        assert_eq!(line, long.as_str());

        assert!(line.read_line(&mut stream, &mut cursor).unwrap());
        assert_eq!(line, "short");
    }

    #[test]
    fn test_multibyte_char_split_across_refills() {
        // place a multi-byte char across the scratch boundary: the 'é' starts
        // at byte SCRATCH_SIZE - 1, so its encoding straddles two refills
        let mut text = "a".repeat(super::SCRATCH_SIZE - 1);
        text.push_str("éllo wörld");
        text.push('\n');

        let mut stream = Cursor::new(text.clone());
        let mut cursor = ReadCursor::new();
        let mut line = SnugString::default();

        assert!(line.read_line(&mut stream, &mut cursor).unwrap());
        assert_eq!(line.as_str(), &text[..text.len() - 1]);
    }

    #[test]
    fn test_invalid_utf8_line_reports_and_clears() {
        let mut stream = Cursor::new(vec![b'o', b'k', 0xff, 0xfe, b'\n']);
        let mut cursor = ReadCursor::new();
        let mut line = SnugString::default();

        let err = line.read_line(&mut stream, &mut cursor).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(line.is_empty());
        assert!(cursor.had_error());
    }

    #[test]
    fn test_read_all_from_offset() {
        let mut stream = Cursor::new("0123456789abcdef");
        stream.seek(SeekFrom::Start(10)).unwrap();

        let mut contents = SnugString::default();
        assert_eq!(contents.read_all(&mut stream).unwrap(), 6);
        assert_eq!(contents, "abcdef");
        // capacity was reserved exactly once, up front
        assert_eq!(contents.capacity(), SnugString::inline_capacity());
    }

    #[test]
    fn test_read_all_reserves_exactly() {
        let body = "z".repeat(4000);
        let mut stream = Cursor::new(body.clone());

        let mut contents = SnugString::default();
        assert_eq!(contents.read_all(&mut stream).unwrap(), 4000);
        assert_eq!(contents.capacity(), 4000);
        assert_eq!(contents, body.as_str());
    }

    #[test]
    fn test_read_all_replaces_existing_content() {
        let mut stream = Cursor::new("fresh");
        let mut contents = SnugString::new("stale stale stale stale stale");

        contents.read_all(&mut stream).unwrap();
        assert_eq!(contents, "fresh");
    }

    /// A reader that yields data in tiny chunks and then an error, to exercise
    /// the error path
    struct FailingReader {
        data: Vec<u8>,
        pos: usize,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.pos >= self.data.len() {
                return Err(io::Error::new(io::ErrorKind::Other, "boom"));
            }
            let n = (self.data.len() - self.pos).min(buf.len()).min(2);
            buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
            self.pos += n;
            Ok(n)
        }
    }

    impl Seek for FailingReader {
        fn seek(&mut self, _pos: SeekFrom) -> io::Result<u64> {
            Ok(self.pos as u64)
        }
    }

    #[test]
    fn test_stream_error_sets_cursor_flag() {
        let mut reader = FailingReader {
            data: b"partial line without newline".to_vec(),
            pos: 0,
        };
        let mut cursor = ReadCursor::new();
        let mut line = SnugString::default();

        let err = line.read_line(&mut reader, &mut cursor).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Other);
        assert!(cursor.had_error());
        assert!(line.is_empty());
        assert!(!cursor.is_eof());
    }
}
