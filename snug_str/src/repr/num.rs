//! Conversions from numbers into a [`Repr`], rendered without any
//! intermediate allocation via `itoa` and `ryu`

use super::Repr;

/// Types that can be turned into a [`Repr`] more cheaply than going through
/// `fmt::Display`
pub trait IntoRepr {
    fn into_repr(self) -> Repr;
}

macro_rules! impl_into_repr_int {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl IntoRepr for $ty {
                #[inline]
                fn into_repr(self) -> Repr {
                    let mut buffer = itoa::Buffer::new();
                    Repr::new(buffer.format(self))
                }
            }
        )+
    };
}

impl_into_repr_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! impl_into_repr_float {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl IntoRepr for $ty {
                #[inline]
                fn into_repr(self) -> Repr {
                    let mut buffer = ryu::Buffer::new();
                    Repr::new(buffer.format(self))
                }
            }
        )+
    };
}

impl_into_repr_float!(f32, f64);

impl IntoRepr for bool {
    #[inline]
    fn into_repr(self) -> Repr {
        if self {
            Repr::new_inline("true")
        } else {
            Repr::new_inline("false")
        }
    }
}

impl IntoRepr for char {
    #[inline]
    fn into_repr(self) -> Repr {
        let mut buffer = [0u8; 4];
        Repr::new(self.encode_utf8(&mut buffer))
    }
}
