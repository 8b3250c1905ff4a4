use super::HEAP_MASK;

// how many bytes a `usize` occupies
const USIZE_SIZE: usize = core::mem::size_of::<usize>();

// state that describes the capacity as being spilled into the heap allocation
const CAPACITY_IS_ON_THE_HEAP: [u8; USIZE_SIZE] = [HEAP_MASK; USIZE_SIZE];

// how many bytes we can use for capacity
const SPACE_FOR_CAPACITY: usize = USIZE_SIZE - 1;

/// The largest capacity we can record without spilling it into the allocation,
/// e.g. on a 64-bit arch this is 2^56 - 2
pub const MAX_VALUE: usize = (1 << (SPACE_FOR_CAPACITY * 8)) - 2;

/// An integer type that uses `core::mem::size_of::<usize>() - 1` bytes to store
/// the capacity of a heap buffer.
///
/// A [`super::HeapString`] uses one machine word for a pointer, one for a
/// length, and needs one byte for a discriminant, which leaves
/// `size_of::<usize>() - 1` bytes to record the capacity. [`Capacity`] stores a
/// value in those bytes, returning an `Err` when the value doesn't fit, at
/// which point the capacity gets written into the first word of the heap
/// allocation itself.
///
/// # Max Values
/// * __64-bit:__ `(2 ^ (7 * 8)) - 2 = 72_057_594_037_927_934 ~= 64 petabytes`
/// * __32-bit:__ `(2 ^ (3 * 8)) - 2 = 16_777_214             ~= 16 megabytes`
///
/// On 64-bit architectures the spill case is unreachable in practice; on
/// 32-bit architectures strings larger than 16 megabytes are entirely
/// possible, so the fallback carries its weight there.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Capacity {
    _buf: [u8; USIZE_SIZE],
}

impl Capacity {
    pub const fn new(capacity: usize) -> Result<Self, Self> {
        if capacity > MAX_VALUE {
            // the last byte is needed to encode this capacity, so it has to
            // live in the allocation. return an Err so `HeapString` can do the
            // right thing
            Err(Capacity {
                _buf: CAPACITY_IS_ON_THE_HEAP,
            })
        } else {
            let mut bytes = capacity.to_le_bytes();
            // the leading bytes store the value, the last byte stores our
            // discriminant
            bytes[USIZE_SIZE - 1] = HEAP_MASK;
            Ok(Capacity { _buf: bytes })
        }
    }

    pub fn as_usize(&self) -> Result<usize, ()> {
        if self._buf == CAPACITY_IS_ON_THE_HEAP {
            Err(())
        } else {
            let mut usize_buf = [0u8; USIZE_SIZE];
            // SAFETY: both pointers are valid for `SPACE_FOR_CAPACITY` bytes,
            // which is less than `USIZE_SIZE`, and they don't overlap because
            // we just created `usize_buf`
            unsafe {
                core::ptr::copy_nonoverlapping(
                    self._buf.as_ptr(),
                    usize_buf.as_mut_ptr(),
                    SPACE_FOR_CAPACITY,
                );
            }
            Ok(usize::from_le_bytes(usize_buf))
        }
    }

    /// Returns whether the numeric capacity lives in the heap allocation
    /// instead of this field
    #[inline(always)]
    pub fn is_on_heap(&self) -> bool {
        self._buf == CAPACITY_IS_ON_THE_HEAP
    }
}

static_assertions::assert_eq_size!(Capacity, usize);
