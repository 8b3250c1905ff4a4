use core::fmt::{self, Write};

use castaway::{match_type, LifetimeFree};

use crate::repr::{IntoRepr, Repr};
use crate::utility::count;
use crate::SnugString;

/// A trait for converting a value to a [`SnugString`].
///
/// This trait is automatically implemented for any type which implements the
/// [`Display`] trait. As such, `ToSnugString` shouldn't be implemented
/// directly: [`Display`] should be implemented instead, and you get the
/// `ToSnugString` implementation for free.
///
/// Common types (integers, floats, `bool`, `char`, strings) take a
/// specialized path that skips the formatting machinery entirely; everything
/// else is measured with a counting sink first, so the value's storage is
/// reserved exactly once before rendering into it.
///
/// [`Display`]: fmt::Display
pub trait ToSnugString {
    /// Converts the given value to a [`SnugString`].
    ///
    /// # Examples
    ///
    /// ```
    /// use snug_str::ToSnugString;
    ///
    /// let i = 5;
    /// let five = i.to_snug_string();
    ///
    /// assert_eq!(five, "5");
    /// ```
    fn to_snug_string(&self) -> SnugString;
}

// SAFETY: `SnugString` (and its `Repr`) own their data, contain no lifetimes,
// and are 'static
unsafe impl LifetimeFree for SnugString {}
unsafe impl LifetimeFree for Repr {}

/// # Panics
///
/// In this implementation, the `to_snug_string` method panics if the
/// `Display` implementation returns an error. This indicates an incorrect
/// `Display` implementation, since `std::fmt::Write for String` never returns
/// an error itself.
impl<T: fmt::Display> ToSnugString for T {
    fn to_snug_string(&self) -> SnugString {
        let repr = match_type!(self, {
            &u8 as s => s.into_repr(),
            &u16 as s => s.into_repr(),
            &u32 as s => s.into_repr(),
            &u64 as s => s.into_repr(),
            &u128 as s => s.into_repr(),
            &usize as s => s.into_repr(),
            &i8 as s => s.into_repr(),
            &i16 as s => s.into_repr(),
            &i32 as s => s.into_repr(),
            &i64 as s => s.into_repr(),
            &i128 as s => s.into_repr(),
            &isize as s => s.into_repr(),
            &f32 as s => s.into_repr(),
            &f64 as s => s.into_repr(),
            &bool as s => s.into_repr(),
            &char as s => s.into_repr(),
            &String as s => Repr::new(s),
            &SnugString as s => Repr::new(s.as_str()),
            s => {
                // measure first, then render straight into reserved storage
                let num_bytes = count(s);
                let mut repr = Repr::with_capacity(num_bytes);

                write!(&mut repr, "{}", s).expect("fmt::Display incorrectly implemented!");

                repr
            }
        });

        SnugString { repr }
    }
}

/// Joining and concatenating collections of strings into a [`SnugString`].
///
/// The total length is computed up front, so the output reserves exactly once
/// and then runs a plain append loop.
pub trait SnugStringExt {
    /// Concatenates all items into a single [`SnugString`]
    fn concat_snug(&self) -> SnugString;

    /// Joins all items with `separator` between consecutive elements.
    ///
    /// # Examples
    /// ```
    /// use snug_str::SnugStringExt;
    ///
    /// let words = ["Hello", "my name is ..."];
    /// assert_eq!(words.join_snug(", "), "Hello, my name is ...");
    /// ```
    fn join_snug(&self, separator: &str) -> SnugString;
}

impl<S: AsRef<str>> SnugStringExt for [S] {
    fn concat_snug(&self) -> SnugString {
        self.join_snug("")
    }

    fn join_snug(&self, separator: &str) -> SnugString {
        let content: usize = self.iter().map(|s| s.as_ref().len()).sum();
        let separators = separator.len() * self.len().saturating_sub(1);

        let mut joined = SnugString::with_capacity(content + separators);
        let mut iter = self.iter();
        if let Some(first) = iter.next() {
            joined.push_str(first.as_ref());
        }
        for item in iter {
            joined.push_str(separator);
            joined.push_str(item.as_ref());
        }
        joined
    }
}

#[cfg(test)]
mod tests {
    use crate::{SnugString, SnugStringExt, ToSnugString};

    #[test]
    fn test_to_snug_string_specializations() {
        assert_eq!(42u8.to_snug_string(), "42");
        assert_eq!((-7i64).to_snug_string(), "-7");
        assert_eq!(2.5f64.to_snug_string(), "2.5");
        assert_eq!(true.to_snug_string(), "true");
        assert_eq!('é'.to_snug_string(), "é");
        assert_eq!(String::from("owned").to_snug_string(), "owned");
        assert_eq!(SnugString::new("snug").to_snug_string(), "snug");
    }

    #[test]
    fn test_to_snug_string_display_fallback() {
        struct Custom;
        impl core::fmt::Display for Custom {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "custom display, long enough to need a heap buffer")
            }
        }

        let rendered = Custom.to_snug_string();
        assert_eq!(rendered, "custom display, long enough to need a heap buffer");
        // the measuring pass sized the buffer exactly
        assert_eq!(rendered.capacity(), rendered.len());
    }

    #[test]
    fn test_join_empty_and_single() {
        let none: [&str; 0] = [];
        assert_eq!(none.join_snug(", "), "");

        let one = ["alone"];
        assert_eq!(one.join_snug(", "), "alone");
    }

    #[test]
    fn test_join_reserves_exactly() {
        let items = ["a longer piece", "another longer piece", "and one more"];
        let joined = items.join_snug(" | ");

        assert_eq!(joined, "a longer piece | another longer piece | and one more");
        assert_eq!(joined.capacity(), joined.len());
    }

    #[test]
    fn test_concat() {
        let items = [
            SnugString::new("one"),
            SnugString::new("two"),
            SnugString::new("three"),
        ];
        assert_eq!(items.concat_snug(), "onetwothree");
    }
}
