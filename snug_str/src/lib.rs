//! A `SnugString` is a growable UTF-8 text value with a small-string
//! optimization: short values live directly in the value's own
//! `size_of::<String>()` bytes, longer values spill to an exclusively owned,
//! NUL-terminated heap buffer, and every operation behaves identically in
//! both shapes.
//!
//! On top of the value itself the crate carries the toolkit such a type earns
//! its keep with: byte-exact insert/erase/replace mutation that migrates
//! between representations mid-operation, a codepoint layer (counting,
//! decoding at an offset, in-place codepoint replacement and reversal,
//! whitespace classification), substring search, splitting and joining, a
//! buffered line reader with an explicit cursor, and `format!`-style
//! construction with fast paths for numbers.
//!
//! ```
//! use snug_str::SnugString;
//!
//! let mut s = SnugString::new("hello");
//! assert!(!s.is_heap_allocated());
//!
//! s.push_str(" world, this spills to the heap");
//! assert!(s.is_heap_allocated());
//! assert_eq!(s.find_from(0, "world"), Some(6));
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

use core::borrow::{Borrow, BorrowMut};
use core::cmp::Ordering;
use core::fmt;
use core::iter::FromIterator;
use core::ops::{Add, AddAssign, Bound, Deref, DerefMut, RangeBounds};
use core::str::{FromStr, Utf8Error};
use std::borrow::Cow;

mod features;
mod macros;
mod repr;
mod search;
mod stream;
mod traits;
mod unicode;
mod utility;

use repr::Repr;

pub use stream::ReadCursor;
pub use traits::{SnugStringExt, ToSnugString};


/// A [`SnugString`] is a string type that stores short values inline in the
/// space a `String`'s pointer/length/capacity words would occupy, and only
/// heap allocates once the content outgrows that space.
///
/// It can be used almost anywhere a [`String`] or [`str`] can:
///
/// ```
/// use snug_str::SnugString;
/// # use std::collections::HashMap;
///
/// // SnugString derefs to str, so all of str's methods are available
/// if SnugString::new("hello world!").is_ascii() {
///     println!("we're all ASCII")
/// }
///
/// // and it works as a drop-in key type
/// let mut map: HashMap<SnugString, SnugString> = HashMap::new();
/// map.insert("sf".into(), "transamerica pyramid".into());
///
/// assert_eq!(SnugString::new("chicago"), "chicago");
/// assert_eq!(SnugString::new("houston"), String::from("houston"));
/// ```
///
/// The content is additionally kept NUL-terminated at exactly `len()` in both
/// representations, so [`SnugString::as_ptr`] always points at a
/// C-compatible string.
#[derive(Clone)]
pub struct SnugString {
    repr: Repr,
}

impl SnugString {
    /// Creates a new [`SnugString`] from any type that implements
    /// `AsRef<str>`. Short strings are stored inline, longer ones spill to
    /// the heap.
    ///
    /// # Examples
    /// ```
    /// # use snug_str::SnugString;
    /// let short = SnugString::new("hello");
    /// assert_eq!(short.len(), 5);
    /// assert!(!short.is_heap_allocated());
    ///
    /// let long = SnugString::new("abcdefghijklmnopqrstuvwxyz");
    /// assert_eq!(long.len(), 26);
    /// assert!(long.is_heap_allocated());
    /// ```
    #[inline]
    pub fn new<T: AsRef<str>>(text: T) -> Self {
        SnugString {
            repr: Repr::new(text.as_ref()),
        }
    }

    /// Creates a new inline [`SnugString`] at compile time.
    ///
    /// Trying to create a string that doesn't fit inline fails the build.
    ///
    /// # Examples
    /// ```
    /// use snug_str::SnugString;
    ///
    /// const DEFAULT_NAME: SnugString = SnugString::new_inline("untitled");
    /// ```
    #[inline]
    pub const fn new_inline(text: &str) -> Self {
        SnugString {
            repr: Repr::new_inline(text),
        }
    }

    /// The number of bytes that can be stored without a heap allocation,
    /// `size_of::<String>() - 2`
    #[inline]
    pub const fn inline_capacity() -> usize {
        repr::MAX_INLINE_SIZE
    }

    /// Creates an empty [`SnugString`] with capacity for at least `capacity`
    /// bytes.
    ///
    /// Capacities up to [`SnugString::inline_capacity`] don't allocate.
    ///
    /// # Examples
    /// ```
    /// # use snug_str::SnugString;
    /// let empty = SnugString::with_capacity(0);
    /// assert_eq!(empty.capacity(), SnugString::inline_capacity());
    /// assert!(!empty.is_heap_allocated());
    ///
    /// let heap = SnugString::with_capacity(128);
    /// assert_eq!(heap.capacity(), 128);
    /// assert!(heap.is_heap_allocated());
    /// ```
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        SnugString {
            repr: Repr::with_capacity(capacity),
        }
    }

    /// Fallible [`SnugString::with_capacity`]: reports allocation failure
    /// instead of panicking
    #[inline]
    pub fn try_with_capacity(capacity: usize) -> Result<Self, ReserveError> {
        Ok(SnugString {
            repr: Repr::try_with_capacity(capacity)?,
        })
    }

    /// Converts a slice of bytes into a [`SnugString`], failing if the bytes
    /// aren't valid UTF-8.
    ///
    /// # Examples
    /// ```
    /// # use snug_str::SnugString;
    /// let bytes = vec![240, 159, 166, 128, 240, 159, 146, 175];
    /// let snug = SnugString::from_utf8(bytes).expect("valid UTF-8");
    /// assert_eq!(snug, "🦀💯");
    ///
    /// let result = SnugString::from_utf8(vec![255, 255, 255]);
    /// assert!(result.is_err());
    /// ```
    #[inline]
    pub fn from_utf8<B: AsRef<[u8]>>(buf: B) -> Result<Self, Utf8Error> {
        let repr = Repr::from_utf8(buf.as_ref())?;
        Ok(SnugString { repr })
    }

    /// Converts a slice of bytes into a [`SnugString`] without checking that
    /// it contains valid UTF-8.
    ///
    /// # Safety
    /// * `buf` must hold valid UTF-8. Violating this invariant breaks the
    ///   soundness of every other operation on the value.
    #[inline]
    #[must_use]
    pub unsafe fn from_utf8_unchecked<B: AsRef<[u8]>>(buf: B) -> Self {
        let repr = Repr::from_utf8_unchecked(buf.as_ref());
        SnugString { repr }
    }

    /// Returns the length in `bytes`, not [`char`]s or graphemes.
    ///
    /// # Examples
    /// ```
    /// # use snug_str::SnugString;
    /// let ascii = SnugString::new("hello world");
    /// assert_eq!(ascii.len(), 11);
    ///
    /// let emoji = SnugString::new("👱");
    /// assert_eq!(emoji.len(), 4);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.repr.len()
    }

    /// Returns `true` if the [`SnugString`] has a length of 0
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the capacity in bytes, excluding the implicit NUL terminator.
    ///
    /// A `SnugString` always has a capacity of at least
    /// [`SnugString::inline_capacity`].
    ///
    /// # Examples
    /// ```
    /// # use snug_str::SnugString;
    /// let mut s = SnugString::new("Rust is the most loved language on Stackoverflow!");
    /// assert_eq!(s.capacity(), 49);
    ///
    /// s.clear();
    /// // clearing doesn't release the buffer
    /// assert_eq!(s.capacity(), 49);
    /// ```
    #[inline]
    pub fn capacity(&self) -> usize {
        self.repr.capacity()
    }

    /// Ensures this [`SnugString`]'s capacity is at least `additional` bytes
    /// longer than its length, growing by at least a doubling so that
    /// repeated appends stay amortized O(1).
    ///
    /// Reserving past [`SnugString::inline_capacity`] migrates the value to
    /// the heap.
    ///
    /// # Panics
    /// Panics if the new capacity overflows `usize` or the allocation fails;
    /// see [`SnugString::try_reserve`] for the fallible version.
    ///
    /// # Examples
    /// ```
    /// # use snug_str::SnugString;
    /// let mut s = SnugString::default();
    /// assert_eq!(s.capacity(), SnugString::inline_capacity());
    ///
    /// s.reserve(200);
    /// assert!(s.is_heap_allocated());
    /// assert!(s.capacity() >= 200);
    /// ```
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.repr.reserve(additional)
    }

    /// Fallible [`SnugString::reserve`].
    ///
    /// On `Err` the value is left exactly as it was: growth and migration are
    /// all-or-nothing.
    ///
    /// # Examples
    /// ```
    /// # use snug_str::SnugString;
    /// let mut s = SnugString::new("hello");
    /// s.try_reserve(100).expect("allocation failed");
    /// assert!(s.capacity() >= 105);
    /// assert_eq!(s, "hello");
    /// ```
    #[inline]
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), ReserveError> {
        self.repr.try_reserve(additional)
    }

    /// Shrinks the capacity with a lower bound.
    ///
    /// The resulting capacity is never less than
    /// [`SnugString::inline_capacity`]: content that fits inline moves back
    /// inline and the heap buffer is released.
    ///
    /// # Examples
    /// ```
    /// # use snug_str::SnugString;
    /// let mut s = SnugString::with_capacity(100);
    /// assert_eq!(s.capacity(), 100);
    ///
    /// // a no-op if the capacity is already smaller than the argument
    /// s.shrink_to(100);
    /// assert_eq!(s.capacity(), 100);
    ///
    /// s.shrink_to(50);
    /// assert_eq!(s.capacity(), 50);
    ///
    /// // once the content fits inline, it's inlined
    /// s.shrink_to(10);
    /// assert_eq!(s.capacity(), SnugString::inline_capacity());
    /// ```
    #[inline]
    pub fn shrink_to(&mut self, min_capacity: usize) {
        self.repr.shrink_to(min_capacity);
    }

    /// Shrinks the capacity to match the length.
    ///
    /// # Examples
    /// ```
    /// # use snug_str::SnugString;
    /// let mut s = SnugString::from("This is a string with more than 24 characters.");
    /// s.reserve(100);
    /// assert!(s.capacity() >= 100);
    ///
    /// s.shrink_to_fit();
    /// assert_eq!(s.len(), s.capacity());
    /// ```
    ///
    /// ```
    /// # use snug_str::SnugString;
    /// let mut s = SnugString::from("short string");
    /// s.reserve(100);
    /// assert!(s.capacity() >= 100);
    ///
    /// s.shrink_to_fit();
    /// assert_eq!(s.capacity(), SnugString::inline_capacity());
    /// ```
    #[inline]
    pub fn shrink_to_fit(&mut self) {
        self.repr.shrink_to(0);
    }

    /// Returns a string slice containing the entire [`SnugString`]
    #[inline]
    pub fn as_str(&self) -> &str {
        self.repr.as_str()
    }

    /// Returns a mutable string slice containing the entire [`SnugString`].
    ///
    /// # Examples
    /// ```
    /// # use snug_str::SnugString;
    /// let mut s = SnugString::new("hello");
    /// s.as_mut_str().make_ascii_uppercase();
    ///
    /// assert_eq!(s.as_str(), "HELLO");
    /// ```
    #[inline]
    pub fn as_mut_str(&mut self) -> &mut str {
        let len = self.len();
        // SAFETY: the first `len` bytes are always valid UTF-8
        unsafe { core::str::from_utf8_unchecked_mut(&mut self.repr.as_mut_slice()[..len]) }
    }

    /// Returns a byte slice of the content.
    ///
    /// # Examples
    /// ```
    /// # use snug_str::SnugString;
    /// let s = SnugString::new("hello");
    /// assert_eq!(&[104, 101, 108, 108, 111], s.as_bytes());
    /// ```
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.repr.as_slice()[..self.len()]
    }

    /// Returns the content plus its NUL terminator, like
    /// [`std::ffi::CString::as_bytes_with_nul`].
    ///
    /// The terminator is maintained by every operation, in both
    /// representations; it is not part of [`SnugString::len`].
    ///
    /// # Examples
    /// ```
    /// # use snug_str::SnugString;
    /// let mut s = SnugString::new("hi");
    /// assert_eq!(s.as_bytes_with_nul(), b"hi\0");
    ///
    /// s.push_str(" there");
    /// assert_eq!(s.as_bytes_with_nul(), b"hi there\0");
    /// ```
    #[inline]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        self.repr.as_slice_with_nul()
    }

    /// Provides a mutable reference to the underlying buffer of bytes.
    ///
    /// # Safety
    /// * The caller must guarantee any modification leaves the content valid
    ///   UTF-8, and must restore the length with [`SnugString::set_len`].
    ///
    /// # Examples
    /// ```
    /// # use snug_str::SnugString;
    /// let mut s = SnugString::new("hello");
    ///
    /// let slice = unsafe { s.as_mut_bytes() };
    /// slice[5..11].copy_from_slice(" world".as_bytes());
    /// unsafe { s.set_len(11) };
    ///
    /// assert_eq!(s, "hello world");
    /// ```
    #[inline]
    pub unsafe fn as_mut_bytes(&mut self) -> &mut [u8] {
        self.repr.as_mut_slice()
    }

    /// Converts the [`SnugString`] to a raw, NUL-terminated pointer
    #[inline]
    pub fn as_ptr(&self) -> *const u8 {
        self.repr.as_slice().as_ptr()
    }

    /// Converts the [`SnugString`] to a mutable raw pointer
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut u8 {
        // SAFETY: taking the pointer doesn't mutate anything on its own
        unsafe { self.repr.as_mut_slice().as_mut_ptr() }
    }

    /// Forces the length to `new_len`, rewriting the NUL terminator.
    ///
    /// # Safety
    /// * `new_len` must be less than or equal to `capacity()`
    /// * The bytes at `..new_len` must be initialized, valid UTF-8
    #[inline]
    pub unsafe fn set_len(&mut self, new_len: usize) {
        self.repr.set_len(new_len)
    }

    /// Returns whether the content is currently spilled to a heap buffer.
    ///
    /// # Examples
    /// ```
    /// # use snug_str::SnugString;
    /// assert!(!SnugString::new("hello world").is_heap_allocated());
    /// assert!(SnugString::new("this message will self destruct in 5, 4, 3, 2, 1 💥").is_heap_allocated());
    /// ```
    #[inline]
    pub fn is_heap_allocated(&self) -> bool {
        self.repr.is_heap_allocated()
    }

    /// Appends the given [`char`] to the end of this [`SnugString`].
    ///
    /// # Examples
    /// ```
    /// # use snug_str::SnugString;
    /// let mut s = SnugString::new("foo");
    /// s.push('b');
    /// s.push('a');
    /// s.push('r');
    ///
    /// assert_eq!("foobar", s);
    /// ```
    #[inline]
    pub fn push(&mut self, ch: char) {
        self.repr.push(ch)
    }

    /// Removes the last [`char`] and returns it, or `None` if the
    /// [`SnugString`] is empty.
    ///
    /// The decoder walks backward over continuation bytes to find the lead
    /// byte of the final codepoint.
    ///
    /// # Examples
    /// ```
    /// # use snug_str::SnugString;
    /// let mut s = SnugString::new("abc");
    ///
    /// assert_eq!(s.pop(), Some('c'));
    /// assert_eq!(s.pop(), Some('b'));
    /// assert_eq!(s.pop(), Some('a'));
    /// assert_eq!(s.pop(), None);
    /// ```
    #[inline]
    pub fn pop(&mut self) -> Option<char> {
        self.repr.pop()
    }

    /// Appends a string slice onto the end of this [`SnugString`].
    ///
    /// # Examples
    /// ```
    /// # use snug_str::SnugString;
    /// let mut s = SnugString::new("abc");
    /// s.push_str("123");
    ///
    /// assert_eq!("abc123", s);
    /// ```
    #[inline]
    pub fn push_str(&mut self, s: &str) {
        self.repr.push_str(s)
    }

    /// Removes a [`char`] at a byte position and returns it.
    ///
    /// This is an *O*(*n*) operation: the tail is shifted left over the
    /// removed encoding.
    ///
    /// # Panics
    /// Panics if `idx` is larger than or equal to the length, or if it does
    /// not lie on a [`char`] boundary.
    ///
    /// # Examples
    /// ```
    /// # use snug_str::SnugString;
    /// let mut c = SnugString::from("hello world");
    ///
    /// assert_eq!(c.remove(0), 'h');
    /// assert_eq!(c, "ello world");
    ///
    /// assert_eq!(c.remove(5), 'w');
    /// assert_eq!(c, "ello orld");
    /// ```
    #[inline]
    pub fn remove(&mut self, idx: usize) -> char {
        let len = self.len();
        let substr = &mut self.as_mut_str()[idx..];

        // get the char we want to remove
        let ch = substr
            .chars()
            .next()
            .expect("cannot remove a char from the end of a string");
        let ch_len = ch.len_utf8();

        // shift everything back over the removed encoding
        let num_bytes = substr.len() - ch_len;
        let ptr = substr.as_mut_ptr();

        // SAFETY: both ranges are in bounds for `num_bytes`, and `ptr::copy`
        // tolerates the overlap
        unsafe {
            core::ptr::copy(ptr.add(ch_len) as *const u8, ptr, num_bytes);
            self.set_len(len - ch_len);
        }

        ch
    }

    /// Ensure that the given range is inside the content, and that no
    /// codepoints are split.
    ///
    /// Returns the range `start..end` as a tuple.
    #[inline]
    pub(crate) fn ensure_range(&self, range: impl RangeBounds<usize>) -> (usize, usize) {
        #[cold]
        #[inline(never)]
        fn illegal_range() -> ! {
            panic!("illegal range");
        }

        let start = match range.start_bound() {
            Bound::Included(&n) => n,
            Bound::Excluded(&n) => match n.checked_add(1) {
                Some(n) => n,
                None => illegal_range(),
            },
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&n) => match n.checked_add(1) {
                Some(n) => n,
                None => illegal_range(),
            },
            Bound::Excluded(&n) => n,
            Bound::Unbounded => self.len(),
        };
        if end < start {
            illegal_range();
        }

        let s = self.as_str();
        if !s.is_char_boundary(start) || !s.is_char_boundary(end) {
            illegal_range();
        }

        (start, end)
    }

    /// Removes the specified range and replaces it with the given string.
    /// The replacement doesn't need to be the same length as the range.
    ///
    /// Erasing a range is `replace_range(range, "")`.
    ///
    /// # Panics
    /// Panics if the start or end point don't lie on [`char`] boundaries, or
    /// are out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use snug_str::SnugString;
    /// let mut s = SnugString::new("Hello, world!");
    ///
    /// s.replace_range(7..12, "WORLD");
    /// assert_eq!(s, "Hello, WORLD!");
    ///
    /// s.replace_range(7..=11, "you");
    /// assert_eq!(s, "Hello, you!");
    ///
    /// s.replace_range(5.., "! Is it me you're looking for?");
    /// assert_eq!(s, "Hello! Is it me you're looking for?");
    /// ```
    #[inline]
    pub fn replace_range(&mut self, range: impl RangeBounds<usize>, replace_with: &str) {
        let (start, end) = self.ensure_range(range);
        let dest_len = end - start;
        match dest_len.cmp(&replace_with.len()) {
            Ordering::Equal => unsafe { self.replace_range_same_size(start, end, replace_with) },
            Ordering::Greater => unsafe { self.replace_range_shrink(start, end, replace_with) },
            Ordering::Less => unsafe { self.replace_range_grow(start, end, replace_with) },
        }
    }

    /// Replace into the same size.
    unsafe fn replace_range_same_size(&mut self, start: usize, end: usize, replace_with: &str) {
        core::ptr::copy_nonoverlapping(
            replace_with.as_ptr(),
            self.as_mut_ptr().add(start),
            end - start,
        );
    }

    /// Replace, so self.len() gets smaller.
    unsafe fn replace_range_shrink(&mut self, start: usize, end: usize, replace_with: &str) {
        let total_len = self.len();
        let dest_len = end - start;
        let new_len = total_len - (dest_len - replace_with.len());
        let amount = total_len - end;
        let data = self.as_mut_ptr();
        // first insert the replacement string, overwriting the current content
        core::ptr::copy_nonoverlapping(replace_with.as_ptr(), data.add(start), replace_with.len());
        // then move the tail forward to its new place, filling the gap
        core::ptr::copy(
            data.add(total_len - amount),
            data.add(new_len - amount),
            amount,
        );
        // and lastly set the new length
        self.set_len(new_len);
    }

    /// Replace, so self.len() gets bigger.
    unsafe fn replace_range_grow(&mut self, start: usize, end: usize, replace_with: &str) {
        let dest_len = end - start;
        self.reserve(replace_with.len() - dest_len);
        let total_len = self.len();
        let new_len = total_len + (replace_with.len() - dest_len);
        let amount = total_len - end;
        // first grow the string, so the full range is known to be usable
        self.set_len(new_len);
        let data = self.as_mut_ptr();
        // then move the tail back to its new place, starting from the far end
        core::ptr::copy(
            data.add(total_len - amount),
            data.add(new_len - amount),
            amount,
        );
        // and lastly insert the replacement string
        core::ptr::copy_nonoverlapping(replace_with.as_ptr(), data.add(start), replace_with.len());
    }

    /// Truncates the [`SnugString`] to a shorter length.
    ///
    /// If the current length is less than or equal to `new_len`, the call is
    /// a no-op. The capacity is unchanged.
    ///
    /// # Panics
    /// Panics if the new end of the string does not lie on a [`char`]
    /// boundary.
    ///
    /// # Examples
    /// ```
    /// # use snug_str::SnugString;
    /// let mut s = SnugString::new("Hello, world!");
    /// s.truncate(5);
    /// assert_eq!(s, "Hello");
    /// ```
    pub fn truncate(&mut self, new_len: usize) {
        let s = self.as_str();
        if new_len >= s.len() {
            return;
        }

        assert!(
            s.is_char_boundary(new_len),
            "new_len must lie on char boundary",
        );
        // SAFETY: we just checked the boundary
        unsafe { self.set_len(new_len) };
    }

    /// Inserts a string slice at a byte index, shifting the tail right.
    ///
    /// # Panics
    /// Panics if `idx` doesn't lie on a [`char`] boundary.
    ///
    /// # Examples
    /// ```
    /// # use snug_str::SnugString;
    /// let mut s = SnugString::new("Hello!");
    /// s.insert_str(5, ", world");
    /// assert_eq!(s, "Hello, world!");
    /// ```
    pub fn insert_str(&mut self, idx: usize, string: &str) {
        assert!(self.is_char_boundary(idx), "idx must lie on char boundary");

        let new_len = self.len() + string.len();
        self.reserve(string.len());

        // SAFETY: we just checked that we may split self at idx, the space is
        // reserved, and the gap is filled with valid UTF-8 before `set_len`
        unsafe {
            // first move the tail to its new back
            let data = self.as_mut_ptr();
            core::ptr::copy(
                data.add(idx),
                data.add(idx + string.len()),
                new_len - idx - string.len(),
            );

            // then insert the new bytes
            core::ptr::copy_nonoverlapping(string.as_ptr(), data.add(idx), string.len());

            // and lastly resize the string
            self.set_len(new_len);
        }
    }

    /// Inserts a [`char`] at a byte index.
    ///
    /// # Examples
    /// ```
    /// # use snug_str::SnugString;
    /// let mut s = SnugString::new("Hello world!");
    /// s.insert(5, ',');
    /// assert_eq!(s, "Hello, world!");
    /// ```
    #[inline]
    pub fn insert(&mut self, idx: usize, ch: char) {
        self.insert_str(idx, ch.encode_utf8(&mut [0; 4]));
    }

    /// Reduces the length to zero. The capacity is unchanged.
    ///
    /// # Examples
    /// ```
    /// # use snug_str::SnugString;
    /// let mut s = SnugString::new("organize the garage");
    /// s.clear();
    ///
    /// assert_eq!(s, "");
    /// assert_eq!(s.capacity(), SnugString::inline_capacity());
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        // SAFETY: zero is always a valid length
        unsafe { self.set_len(0) };
    }

    /// Grows or truncates the [`SnugString`] to exactly `new_len` bytes,
    /// appending repeats of `fill` when growing.
    ///
    /// # Panics
    /// Panics if a boundary is violated: when truncating, `new_len` must lie
    /// on a [`char`] boundary; when growing, the added byte count must be a
    /// whole number of `fill` encodings.
    ///
    /// # Examples
    /// ```
    /// # use snug_str::SnugString;
    /// let mut s = SnugString::new("abc");
    ///
    /// s.resize(5, 'x');
    /// assert_eq!(s, "abcxx");
    ///
    /// s.resize(2, 'x');
    /// assert_eq!(s, "ab");
    /// ```
    pub fn resize(&mut self, new_len: usize, fill: char) {
        let len = self.len();
        if new_len <= len {
            self.truncate(new_len);
            return;
        }

        let additional = new_len - len;
        let fill_len = fill.len_utf8();
        assert!(
            additional % fill_len == 0,
            "new_len must be reachable with whole encodings of the fill char",
        );

        self.reserve(additional);
        let mut buf = [0; 4];
        let encoded = fill.encode_utf8(&mut buf);
        for _ in 0..additional / fill_len {
            self.push_str(encoded);
        }
    }

    /// Splits the [`SnugString`] at the given byte index, returning the tail.
    ///
    /// # Panics
    /// Panics if `at` does not lie on a [`char`] boundary.
    ///
    /// # Examples
    /// ```
    /// # use snug_str::SnugString;
    /// let mut s = SnugString::new("Hello, world!");
    /// assert_eq!(s.split_off(5), ", world!");
    /// assert_eq!(s, "Hello");
    /// ```
    pub fn split_off(&mut self, at: usize) -> Self {
        let result = self[at..].into();
        // SAFETY: the previous line `self[at..]` panics if `at` is invalid
        unsafe { self.set_len(at) };
        result
    }

    /// Returns an independent copy of the given byte range.
    ///
    /// # Panics
    /// Panics if the range is out of bounds or splits a codepoint.
    ///
    /// # Examples
    /// ```
    /// # use snug_str::SnugString;
    /// let s = SnugString::new("Hello, world!");
    /// assert_eq!(s.substring(7..12), "world");
    /// assert_eq!(s.substring(..5), "Hello");
    /// ```
    pub fn substring(&self, range: impl RangeBounds<usize>) -> Self {
        let (start, end) = self.ensure_range(range);
        Self::new(&self.as_str()[start..end])
    }

    /// A 64-bit [FNV-1a] hash of the content bytes.
    ///
    /// Useful as a cheap, deterministic map key; it is **not**
    /// cryptographically secure.
    ///
    /// [FNV-1a]: https://en.wikipedia.org/wiki/Fowler%E2%80%93Noll%E2%80%93Vo_hash_function
    ///
    /// # Examples
    /// ```
    /// # use snug_str::SnugString;
    /// let a = SnugString::new("hello");
    /// let b = SnugString::new("hello");
    /// assert_eq!(a.fnv1a_hash(), b.fnv1a_hash());
    /// ```
    pub fn fnv1a_hash(&self) -> u64 {
        const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
        const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

        self.as_bytes()
            .iter()
            .fold(FNV_OFFSET_BASIS, |hash, &byte| {
                (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
            })
    }
}

/// The error returned by the `try_` family of methods when an allocation
/// fails or a capacity computation overflows `usize`.
///
/// The operation that reported it did not modify the value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ReserveError(pub(crate) ());

impl fmt::Display for ReserveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt("allocation failed or required capacity overflowed `usize`", f)
    }
}

impl std::error::Error for ReserveError {}

impl Default for SnugString {
    #[inline]
    fn default() -> Self {
        SnugString::new_inline("")
    }
}

impl Deref for SnugString {
    type Target = str;

    #[inline]
    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl DerefMut for SnugString {
    #[inline]
    fn deref_mut(&mut self) -> &mut str {
        self.as_mut_str()
    }
}

impl AsRef<str> for SnugString {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<[u8]> for SnugString {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Borrow<str> for SnugString {
    #[inline]
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl BorrowMut<str> for SnugString {
    #[inline]
    fn borrow_mut(&mut self) -> &mut str {
        self.as_mut_str()
    }
}

impl Eq for SnugString {}

impl<T: AsRef<str>> PartialEq<T> for SnugString {
    fn eq(&self, other: &T) -> bool {
        self.as_str() == other.as_ref()
    }
}

impl PartialEq<SnugString> for String {
    fn eq(&self, other: &SnugString) -> bool {
        self.as_str() == other.as_str()
    }
}

impl PartialEq<SnugString> for &str {
    fn eq(&self, other: &SnugString) -> bool {
        *self == other.as_str()
    }
}

impl<'a> PartialEq<SnugString> for Cow<'a, str> {
    fn eq(&self, other: &SnugString) -> bool {
        *self == other.as_str()
    }
}

impl Ord for SnugString {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl PartialOrd for SnugString {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl core::hash::Hash for SnugString {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.as_str().hash(state)
    }
}

impl<'a> From<&'a str> for SnugString {
    fn from(s: &'a str) -> Self {
        SnugString::new(s)
    }
}

impl From<String> for SnugString {
    fn from(s: String) -> Self {
        SnugString::new(&s)
    }
}

impl<'a> From<&'a String> for SnugString {
    fn from(s: &'a String) -> Self {
        SnugString::new(s)
    }
}

impl<'a> From<Cow<'a, str>> for SnugString {
    fn from(cow: Cow<'a, str>) -> Self {
        SnugString::new(&cow)
    }
}

impl From<Box<str>> for SnugString {
    fn from(b: Box<str>) -> Self {
        SnugString::new(&b)
    }
}

impl From<SnugString> for String {
    fn from(s: SnugString) -> Self {
        String::from(s.as_str())
    }
}

impl FromStr for SnugString {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> Result<SnugString, Self::Err> {
        Ok(SnugString::from(s))
    }
}

impl fmt::Debug for SnugString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl fmt::Display for SnugString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_str(), f)
    }
}

impl FromIterator<char> for SnugString {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        let mut s = SnugString::default();
        s.extend(iter);
        s
    }
}

impl<'a> FromIterator<&'a char> for SnugString {
    fn from_iter<T: IntoIterator<Item = &'a char>>(iter: T) -> Self {
        iter.into_iter().copied().collect()
    }
}

impl<'a> FromIterator<&'a str> for SnugString {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        let mut s = SnugString::default();
        s.extend(iter);
        s
    }
}

impl FromIterator<String> for SnugString {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        let mut s = SnugString::default();
        s.extend(iter);
        s
    }
}

impl FromIterator<SnugString> for SnugString {
    fn from_iter<T: IntoIterator<Item = SnugString>>(iter: T) -> Self {
        let mut s = SnugString::default();
        for piece in iter {
            s.push_str(&piece);
        }
        s
    }
}

impl Extend<char> for SnugString {
    fn extend<T: IntoIterator<Item = char>>(&mut self, iter: T) {
        let iter = iter.into_iter();
        let (lower_bound, _) = iter.size_hint();
        self.reserve(lower_bound);
        iter.for_each(|c| self.push(c));
    }
}

impl<'a> Extend<&'a char> for SnugString {
    fn extend<T: IntoIterator<Item = &'a char>>(&mut self, iter: T) {
        self.extend(iter.into_iter().copied());
    }
}

impl<'a> Extend<&'a str> for SnugString {
    fn extend<T: IntoIterator<Item = &'a str>>(&mut self, iter: T) {
        iter.into_iter().for_each(|s| self.push_str(s));
    }
}

impl Extend<String> for SnugString {
    fn extend<T: IntoIterator<Item = String>>(&mut self, iter: T) {
        iter.into_iter().for_each(|s| self.push_str(&s));
    }
}

impl<'a> Extend<Cow<'a, str>> for SnugString {
    fn extend<T: IntoIterator<Item = Cow<'a, str>>>(&mut self, iter: T) {
        iter.into_iter().for_each(|s| self.push_str(&s));
    }
}

impl fmt::Write for SnugString {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s);
        Ok(())
    }

    fn write_fmt(mut self: &mut Self, args: fmt::Arguments<'_>) -> fmt::Result {
        match args.as_str() {
            Some(s) => {
                self.push_str(s);
                Ok(())
            }
            None => fmt::write(&mut self, args),
        }
    }
}

impl Add<&str> for SnugString {
    type Output = Self;

    fn add(mut self, rhs: &str) -> Self::Output {
        self.push_str(rhs);
        self
    }
}

impl AddAssign<&str> for SnugString {
    fn add_assign(&mut self, rhs: &str) {
        self.push_str(rhs);
    }
}

static_assertions::assert_eq_size!(SnugString, String);
