//! The search layer: literal substring scans over the content, the
//! length-first ordering policy, and search-driven splitting.
//!
//! `starts_with`/`ends_with` come for free through `Deref<Target = str>`.

use core::cmp::Ordering;

use crate::SnugString;

impl SnugString {
    /// Returns the byte offset of the first occurrence of `needle` starting
    /// at or after `from`, or `None` if there is none.
    ///
    /// An empty needle matches immediately.
    ///
    /// # Examples
    /// ```
    /// # use snug_str::SnugString;
    /// let s = SnugString::new("one two one two");
    ///
    /// assert_eq!(s.find_from(0, "two"), Some(4));
    /// assert_eq!(s.find_from(5, "two"), Some(12));
    /// assert_eq!(s.find_from(13, "two"), None);
    /// assert_eq!(s.find_from(0, "three"), None);
    /// ```
    pub fn find_from(&self, from: usize, needle: &str) -> Option<usize> {
        if needle.is_empty() {
            return Some(from.min(self.len()));
        }
        self.as_str()
            .match_indices(needle)
            .map(|(idx, _)| idx)
            .find(|&idx| idx >= from)
    }

    /// Returns the byte offset of the last occurrence of `needle` starting at
    /// or before `from`, or `None` if there is none.
    ///
    /// # Examples
    /// ```
    /// # use snug_str::SnugString;
    /// let s = SnugString::new("one two one two");
    ///
    /// assert_eq!(s.rfind_from(s.len(), "two"), Some(12));
    /// assert_eq!(s.rfind_from(11, "two"), Some(4));
    /// assert_eq!(s.rfind_from(3, "two"), None);
    /// ```
    pub fn rfind_from(&self, from: usize, needle: &str) -> Option<usize> {
        if needle.is_empty() {
            return Some(from.min(self.len()));
        }
        self.as_str()
            .match_indices(needle)
            .map(|(idx, _)| idx)
            .take_while(|&idx| idx <= from)
            .last()
    }

    /// Orders two strings by length first, and only compares bytes when the
    /// lengths are equal.
    ///
    /// This is deliberately **not** lexicographic: `"b"` sorts before `"aa"`
    /// because it is shorter. It's the cheap ordering used when the relative
    /// order of unequal-length strings doesn't matter, only consistency does.
    /// [`Ord`] on [`SnugString`] stays byte-lexicographic, matching `str`.
    ///
    /// # Examples
    /// ```
    /// # use snug_str::SnugString;
    /// use std::cmp::Ordering;
    ///
    /// let short = SnugString::new("b");
    /// let long = SnugString::new("aa");
    ///
    /// assert_eq!(short.len_first_cmp(&long), Ordering::Less);
    /// assert_eq!(short.cmp(&long), Ordering::Greater);
    ///
    /// assert_eq!(SnugString::new("abc").len_first_cmp("abd"), Ordering::Less);
    /// assert_eq!(SnugString::new("abc").len_first_cmp("abc"), Ordering::Equal);
    /// ```
    pub fn len_first_cmp(&self, other: impl AsRef<str>) -> Ordering {
        let other = other.as_ref();
        self.len()
            .cmp(&other.len())
            .then_with(|| self.as_bytes().cmp(other.as_bytes()))
    }

    /// Splits the [`SnugString`] on `separator`, materializing each segment
    /// as an independent value.
    ///
    /// With `skip_empty` set, zero-length segments (from leading, trailing,
    /// or adjacent separators) are dropped. An empty separator yields the
    /// whole string as a single segment.
    ///
    /// # Examples
    /// ```
    /// # use snug_str::SnugString;
    /// let list = SnugString::new("Milk, Apples, Bananas, Sandwich Meat, Bread");
    /// let items = list.split_segments(", ", false);
    ///
    /// assert_eq!(items, ["Milk", "Apples", "Bananas", "Sandwich Meat", "Bread"]);
    ///
    /// let sparse = SnugString::new("a,,b,");
    /// assert_eq!(sparse.split_segments(",", false), ["a", "", "b", ""]);
    /// assert_eq!(sparse.split_segments(",", true), ["a", "b"]);
    /// ```
    pub fn split_segments(&self, separator: &str, skip_empty: bool) -> Vec<SnugString> {
        if separator.is_empty() {
            if skip_empty && self.is_empty() {
                return Vec::new();
            }
            return vec![self.clone()];
        }

        self.as_str()
            .split(separator)
            .filter(|segment| !(skip_empty && segment.is_empty()))
            .map(SnugString::new)
            .collect()
    }
}
