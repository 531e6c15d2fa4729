//! Safe wrappers around some assembly instructions.

/// Synchronize this hart's address translation caches.
///
/// Purely hart local, this does not order anything across harts.
#[inline]
pub fn sfence_vma() {
    unsafe { core::arch::asm!("sfence.vma") };
}
