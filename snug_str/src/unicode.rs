//! The codepoint layer: operations that treat the content as a sequence of
//! UTF-8 encoded codepoints, built strictly on top of the byte mutators.

use crate::SnugString;

/// Continuation bytes match the pattern `10xxxxxx`
#[inline(always)]
pub(crate) fn is_continuation(byte: u8) -> bool {
    byte & 0b1100_0000 == 0b1000_0000
}

/// The fixed whitespace set: ASCII whitespace (space, tab, CR/LF/FF/VT), NEL,
/// NBSP, the Unicode space-separator block, and the zero-width/format
/// codepoints
#[inline]
pub(crate) fn is_unicode_space(ch: char) -> bool {
    matches!(
        ch,
        ' ' | '\t' | '\n' | '\r'
            | '\u{b}'
            | '\u{c}'
            | '\u{85}'
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200d}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{2060}'
            | '\u{3000}'
            | '\u{180e}'
            | '\u{feff}'
    )
}

impl SnugString {
    /// Returns the number of codepoints in the [`SnugString`], counting lead
    /// bytes in a linear scan.
    ///
    /// # Examples
    /// ```
    /// # use snug_str::SnugString;
    /// let s = SnugString::new("héllo");
    /// assert_eq!(s.len(), 6);
    /// assert_eq!(s.char_count(), 5);
    /// ```
    #[inline]
    pub fn char_count(&self) -> usize {
        self.as_str().chars().count()
    }

    /// Decodes the codepoint whose encoding starts at `byte_idx`.
    ///
    /// Returns `None` if `byte_idx` is out of bounds or doesn't point at a
    /// lead byte. The encoded width of the returned [`char`] is
    /// `ch.len_utf8()`, which is how far to advance for forward iteration.
    ///
    /// # Examples
    /// ```
    /// # use snug_str::SnugString;
    /// let s = SnugString::new("héllo");
    ///
    /// assert_eq!(s.char_at(0), Some('h'));
    /// assert_eq!(s.char_at(1), Some('é'));
    /// // offset 2 is inside the encoding of 'é'
    /// assert_eq!(s.char_at(2), None);
    /// assert_eq!(s.char_at(s.len()), None);
    /// ```
    #[inline]
    pub fn char_at(&self, byte_idx: usize) -> Option<char> {
        let s = self.as_str();
        if byte_idx >= s.len() || !s.is_char_boundary(byte_idx) {
            return None;
        }
        s[byte_idx..].chars().next()
    }

    /// Replaces the codepoint at `byte_idx` with `ch`, shifting the tail by
    /// the difference in encoded width, and returns the replaced codepoint.
    ///
    /// # Panics
    /// Panics if `byte_idx` is out of bounds or doesn't point at a lead byte.
    ///
    /// # Examples
    /// ```
    /// # use snug_str::SnugString;
    /// let mut s = SnugString::new("héllo");
    ///
    /// assert_eq!(s.set_char(1, 'e'), 'é');
    /// assert_eq!(s, "hello");
    ///
    /// assert_eq!(s.set_char(1, 'é'), 'e');
    /// assert_eq!(s, "héllo");
    /// ```
    pub fn set_char(&mut self, byte_idx: usize, ch: char) -> char {
        let old = match self.char_at(byte_idx) {
            Some(old) => old,
            None => panic!("byte_idx must point at the lead byte of a codepoint"),
        };

        let mut buf = [0; 4];
        self.replace_range(byte_idx..byte_idx + old.len_utf8(), ch.encode_utf8(&mut buf));
        old
    }

    /// Returns `true` if the [`SnugString`] is empty or consists entirely of
    /// whitespace codepoints.
    ///
    /// The whitespace set is fixed: ASCII whitespace, NEL, NBSP, the Unicode
    /// space separators, and the zero-width/format codepoints. Any other
    /// codepoint short-circuits to `false`.
    ///
    /// # Examples
    /// ```
    /// # use snug_str::SnugString;
    /// assert!(SnugString::new("").is_blank());
    /// assert!(SnugString::new(" \t\r\n").is_blank());
    /// assert!(SnugString::new("\u{a0}\u{3000}").is_blank());
    /// assert!(!SnugString::new("  a  ").is_blank());
    /// ```
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.as_str().chars().all(is_unicode_space)
    }

    /// Reverses the [`SnugString`] codepoint by codepoint, in place.
    ///
    /// A naive byte reversal would scramble multi-byte encodings, so this
    /// runs two passes: reverse all bytes, then re-reverse each run of
    /// continuation bytes together with its lead byte.
    ///
    /// # Examples
    /// ```
    /// # use snug_str::SnugString;
    /// let mut s = SnugString::new("madam I'm adam");
    /// s.reverse_chars();
    /// assert_eq!(s, "mada m'I madam");
    ///
    /// let mut s = SnugString::new("こんいちは");
    /// s.reverse_chars();
    /// assert_eq!(s, "はちいんこ");
    ///
    /// // applying it twice is the identity
    /// s.reverse_chars();
    /// assert_eq!(s, "こんいちは");
    /// ```
    pub fn reverse_chars(&mut self) {
        let len = self.len();

        // SAFETY: the content is valid UTF-8 going in, and after the second
        // pass every encoding is back in lead-byte-first order, so it is valid
        // UTF-8 coming out; the length never changes
        unsafe {
            let buf = &mut self.as_mut_bytes()[..len];
            buf.reverse();

            let mut i = 0;
            while i < len {
                if buf[i].is_ascii() {
                    i += 1;
                    continue;
                }

                // a reversed multi-byte encoding shows up as its continuation
                // bytes followed by its lead byte
                let start = i;
                while is_continuation(buf[i]) {
                    i += 1;
                }
                buf[start..=i].reverse();
                i += 1;
            }
        }
    }

    /// Removes leading and trailing whitespace-set codepoints in place,
    /// shifting the retained range to the front.
    ///
    /// # Examples
    /// ```
    /// # use snug_str::SnugString;
    /// let mut s = SnugString::new("\u{a0}\t hello world \r\n");
    /// s.trim_in_place();
    /// assert_eq!(s, "hello world");
    ///
    /// let mut blank = SnugString::new("   ");
    /// blank.trim_in_place();
    /// assert_eq!(blank, "");
    /// ```
    pub fn trim_in_place(&mut self) {
        let s = self.as_str();
        let start = s
            .char_indices()
            .find(|(_, ch)| !is_unicode_space(*ch))
            .map(|(idx, _)| idx)
            .unwrap_or_else(|| s.len());
        let end = s
            .char_indices()
            .rev()
            .find(|(_, ch)| !is_unicode_space(*ch))
            .map(|(idx, ch)| idx + ch.len_utf8())
            .unwrap_or(start);
        let new_len = end - start;

        // SAFETY: `start..end` lies on codepoint boundaries within the
        // content, and `ptr::copy` tolerates the overlap
        unsafe {
            if start > 0 {
                let data = self.as_mut_ptr();
                core::ptr::copy(data.add(start) as *const u8, data, new_len);
            }
            self.set_len(new_len);
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use crate::SnugString;

    #[test]
    fn test_char_count_mixed() {
        let s = SnugString::new("aé🦀");
        assert_eq!(s.len(), 7);
        assert_eq!(s.char_count(), 3);
    }

    #[test]
    fn test_char_at_walks_forward() {
        let s = SnugString::new("aé🦀z");
        let mut idx = 0;
        let mut seen = Vec::new();
        while let Some(ch) = s.char_at(idx) {
            seen.push(ch);
            idx += ch.len_utf8();
        }

        assert_eq!(seen, ['a', 'é', '🦀', 'z']);
        assert_eq!(idx, s.len());
    }

    #[test]
    fn test_set_char_grows_and_shrinks() {
        let mut s = SnugString::new("hello");

        assert_eq!(s.set_char(4, '🦀'), 'o');
        assert_eq!(s, "hell🦀");
        assert_eq!(s.set_char(4, 'o'), '🦀');
        assert_eq!(s, "hello");
    }

    #[test]
    #[should_panic(expected = "lead byte")]
    fn test_set_char_mid_encoding_panics() {
        let mut s = SnugString::new("é");
        s.set_char(1, 'a');
    }

    #[test_case("", true ; "empty")]
    #[test_case("  \t\r\n\u{b}\u{c}", true ; "ascii whitespace")]
    #[test_case("\u{a0}\u{1680}\u{2003}\u{3000}", true ; "unicode spaces")]
    #[test_case("\u{200b}\u{feff}", true ; "format codepoints")]
    #[test_case(" x ", false ; "interior letter")]
    #[test_case("_", false ; "underscore")]
    fn test_is_blank(input: &str, expected: bool) {
        assert_eq!(SnugString::new(input).is_blank(), expected);
    }

    #[test]
    fn test_reverse_ascii() {
        let mut s = SnugString::new("abc");
        s.reverse_chars();
        assert_eq!(s, "cba");
    }

    #[test]
    fn test_reverse_multibyte_heap() {
        let mut s = SnugString::new("🦀 one two three four five 🦀");
        assert!(s.is_heap_allocated());

        s.reverse_chars();
        assert_eq!(s, "🦀 evif ruof eerht owt eno 🦀");

        s.reverse_chars();
        assert_eq!(s, "🦀 one two three four five 🦀");
    }

    #[test]
    fn test_reverse_keeps_terminator() {
        let mut s = SnugString::new("ab🦀");
        s.reverse_chars();

        assert_eq!(s, "🦀ba");
        assert_eq!(s.as_bytes_with_nul().last(), Some(&0));
    }

    #[test]
    fn test_trim_noop() {
        let mut s = SnugString::new("already trimmed");
        s.trim_in_place();
        assert_eq!(s, "already trimmed");
    }

    #[test]
    fn test_trim_only_end() {
        let mut s = SnugString::new("tail   ");
        s.trim_in_place();
        assert_eq!(s, "tail");
        assert_eq!(s.as_bytes_with_nul(), b"tail\0");
    }
}
