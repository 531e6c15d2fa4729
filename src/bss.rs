//! Zeroing of the uninitialized static data region.

use core::ptr;

/// Zero out `[start, end)` in 8 byte strides.
///
/// Performs no write at all if `start >= end`.
///
/// # Safety
///
/// The whole range must be writable and nothing may depend on its
/// previous contents.
pub unsafe fn zero_region(mut start: *mut u64, end: *mut u64) {
    while (start as usize) < (end as usize) {
        ptr::write_volatile(start, 0);
        start = start.add(1);
    }
}

/// Set the `bss` section to zero.
///
/// # Safety
///
/// Must run exactly once, on the primary hart only, before any global
/// state is touched. The secondary harts are released only after this
/// completed.
#[cfg(all(target_arch = "riscv64", target_os = "none"))]
pub unsafe fn zero_bss() {
    let (start, end) = crate::symbols::bss_range();
    zero_region(start.cast(), end.cast());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroes_every_byte_in_the_range() {
        let mut buf = [0xdead_beef_dead_beefu64; 32];
        let range = buf.as_mut_ptr_range();

        unsafe { zero_region(range.start, range.end) };

        assert!(buf.iter().all(|&word| word == 0));
    }

    #[test]
    fn equal_bounds_perform_no_write() {
        let mut buf = [0xaaaa_aaaa_aaaa_aaaau64; 8];
        let mid = unsafe { buf.as_mut_ptr().add(4) };

        unsafe { zero_region(mid, mid) };

        assert!(buf.iter().all(|&word| word == 0xaaaa_aaaa_aaaa_aaaa));
    }

    #[test]
    fn reversed_bounds_perform_no_write() {
        let mut buf = [0x5555_5555_5555_5555u64; 8];
        let range = buf.as_mut_ptr_range();

        unsafe { zero_region(range.end, range.start) };

        assert!(buf.iter().all(|&word| word == 0x5555_5555_5555_5555));
    }

    #[test]
    fn stops_exactly_at_the_end_bound() {
        let mut buf = [0xffff_ffff_ffff_ffffu64; 8];
        let start = buf.as_mut_ptr();
        let end = unsafe { start.add(4) };

        unsafe { zero_region(start, end) };

        assert!(buf[..4].iter().all(|&word| word == 0));
        assert!(buf[4..].iter().all(|&word| word == 0xffff_ffff_ffff_ffff));
    }
}
