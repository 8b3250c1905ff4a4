/// Formats arguments into a new [`SnugString`](crate::SnugString).
///
/// Short results stay inline; longer ones are measured first so the heap
/// buffer is reserved exactly once.
///
/// # Examples
/// ```
/// use snug_str::format_snug;
///
/// assert_eq!(format_snug!("{}", 152), "152");
/// assert_eq!(format_snug!("My age is {}", 23), "My age is 23");
/// ```
#[macro_export]
macro_rules! format_snug {
    ($fmt:expr) => {{ $crate::ToSnugString::to_snug_string(&$fmt) }};
    ($fmt:expr, $($args:tt)*) => {{
        $crate::ToSnugString::to_snug_string(&format_args!($fmt, $($args)*))
    }};
}
