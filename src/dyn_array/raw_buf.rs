use std::{alloc::{self, Layout}, marker::PhantomData, mem, ptr::NonNull};

use crate::errors::{AllocErr, infallible};


/// An owned, uninitialized block of `cap` slots of `T`.
///
/// `RawBuf` knows nothing about which slots hold live values; dropping it only
/// returns the memory to the allocator.
pub(super) struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
    _owns: PhantomData<T>,
}

unsafe impl<T: Send> Send for RawBuf<T> {}
unsafe impl<T: Sync> Sync for RawBuf<T> {}

impl<T> RawBuf<T> {

    const IS_ZST: bool = mem::size_of::<T>() == 0;

    #[inline]
    pub(super) const fn new() -> Self {
        Self { ptr: NonNull::dangling(), cap: 0, _owns: PhantomData }
    }

    pub(super) fn with_capacity(cap: usize) -> Self {
        let mut buf = Self::new();
        infallible(buf.try_resize(cap, 0));
        buf
    }

    #[inline(always)]
    pub(super) const fn ptr(&self) -> NonNull<T> { self.ptr }

    #[inline(always)]
    pub(super) const fn cap(&self) -> usize { self.cap }

    /// `true` once a real allocation backs the buffer.
    #[inline(always)]
    pub(super) const fn is_allocated(&self) -> bool { self.cap != 0 }

    /// Moves the buffer to exactly `new_cap` slots, keeping the first `len`
    /// slots in place bitwise.
    ///
    /// A `new_cap` of zero releases the allocation altogether.
    pub(super) fn try_resize(&mut self, new_cap: usize, len: usize) -> Result<(), AllocErr> {
        assert!(new_cap >= len, "cannot shrink below the live length");
        if new_cap == self.cap { return Ok(()) }

        if Self::IS_ZST {
            self.cap = new_cap;
            return Ok(())
        }

        if new_cap == 0 {
            unsafe { deallocate(self.ptr, self.cap) };
            log::trace!("released buffer of {} slots", self.cap);
            self.ptr = NonNull::dangling();
            self.cap = 0;
            return Ok(())
        }

        let layout = layout_array::<T>(new_cap)?;

        let ptr = if self.cap == 0 {
            unsafe { alloc::alloc(layout) }
        } else {
            let prev_layout = layout_array::<T>(self.cap)?;
            unsafe { alloc::realloc(self.ptr.as_ptr().cast(), prev_layout, layout.size()) }
        };

        log::trace!("resized buffer from {} to {} slots", self.cap, new_cap);
        self.ptr = NonNull::new(ptr).ok_or(AllocErr::alloc(layout))?.cast();
        self.cap = new_cap;
        Ok(())
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        if !Self::IS_ZST && self.cap > 0 {
            unsafe { deallocate(self.ptr, self.cap) };
        }
    }
}

#[inline]
fn layout_array<T>(n: usize) -> Result<Layout, AllocErr> {

    let size = mem::size_of::<T>()
        .checked_mul(n)
        .ok_or(AllocErr::Overflow)?;

    if size > isize::MAX as usize { return Err(AllocErr::Overflow) }

    Layout::from_size_align(size, mem::align_of::<T>()).map_err(AllocErr::layout)
}

/// # Safety
///
/// `ptr` must come from this module's allocation with exactly `cap` slots.
#[inline]
unsafe fn deallocate<T>(ptr: NonNull<T>, cap: usize) {
    // The layout was valid when the block was allocated.
    let layout = unsafe {
        Layout::from_size_align_unchecked(mem::size_of::<T>() * cap, mem::align_of::<T>())
    };
    unsafe { alloc::dealloc(ptr.as_ptr().cast(), layout) };
}
