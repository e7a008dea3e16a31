//! Storage with a guaranteed minimum address alignment.

use std::ops::Deref;

/// Minimum byte alignment of arrays handed to DMA-capable graphics hardware.
pub const ALIGNMENT: usize = 32;

/// A value whose address is always a multiple of [ALIGNMENT].
///
/// Wrap array literals in this to get the equivalent of an alignment attribute on a C array:
///
/// ```
/// use meshlit_common::Align32;
/// static DATA: Align32<[f32; 3]> = Align32([0.0, 1.0, 2.0]);
/// assert_eq!(DATA.as_ptr() as usize % meshlit_common::ALIGNMENT, 0);
/// ```
#[repr(C, align(32))]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Align32<T>(pub T);

static_assertions::const_assert_eq!(std::mem::align_of::<Align32<u8>>(), ALIGNMENT);
static_assertions::const_assert_eq!(std::mem::align_of::<Align32<[f32; 42]>>(), ALIGNMENT);

impl<T> Align32<T> {
    #[inline]
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Align32<T> {
    type Target = T;

    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Whether `ptr` lies on an [ALIGNMENT] boundary.
#[inline]
pub fn is_aligned<T>(ptr: *const T) -> bool {
    (ptr as usize) % ALIGNMENT == 0
}
