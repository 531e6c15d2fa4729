//! Location of the kernel image and the offset every statically linked
//! address must be corrected by at runtime.

use spin::Once;

/// The virtual address the kernel image is linked at, inside the high
/// half alias of RAM.
pub const LINK_BASE: usize = 0xffff_ffff_8020_0000;

/// Where the kernel image actually ended up in memory.
pub struct KernelLayout {
    /// Physical address the image was loaded at.
    pub paddr_base: usize,
    /// Virtual address the image was linked at.
    pub vaddr_base: usize,
    /// Size of the linked image.
    pub size: usize,
}

impl KernelLayout {
    /// The relocation offset, `load address - link address`.
    ///
    /// There is a single image and a single load, so this value is the
    /// same on every hart.
    #[inline]
    pub fn offset(&self) -> usize {
        self.paddr_base.wrapping_sub(self.vaddr_base)
    }
}

static LAYOUT: Once<KernelLayout> = Once::new();

/// Probe where firmware loaded the image.
///
/// # Safety
///
/// Must be called while the pc is still inside the physical address
/// space, before paging is switched on.
#[cfg(all(target_arch = "riscv64", target_os = "none"))]
pub unsafe fn probe() -> &'static KernelLayout {
    LAYOUT.call_once(|| {
        let (start, end) = crate::symbols::kernel_range();
        KernelLayout {
            paddr_base: start as usize,
            vaddr_base: LINK_BASE,
            size: end as usize - start as usize,
        }
    })
}

/// The layout probed by the primary hart.
///
/// Spins until the probe completed. A secondary hart can rely on this
/// because it is only released after the primary finished its setup.
pub fn get() -> &'static KernelLayout {
    LAYOUT.wait()
}

/// Move a statically linked address to where it lives at runtime.
#[inline]
pub fn relocate(linked: usize, offset: usize) -> usize {
    linked.wrapping_add(offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_load_minus_link() {
        let layout = KernelLayout {
            paddr_base: 0x8020_0000,
            vaddr_base: 0x8020_0000,
            size: 0x20_0000,
        };
        assert_eq!(layout.offset(), 0);

        let layout = KernelLayout {
            paddr_base: 0x8040_0000,
            vaddr_base: 0x8020_0000,
            size: 0x20_0000,
        };
        assert_eq!(layout.offset(), 0x20_0000);
    }

    #[test]
    fn offset_wraps_for_high_half_links() {
        let layout = KernelLayout {
            paddr_base: 0x8020_0000,
            vaddr_base: LINK_BASE,
            size: 0x20_0000,
        };

        // the wrapped offset still moves linked addresses onto their
        // physical counterparts
        let offset = layout.offset();
        assert_eq!(relocate(LINK_BASE, offset), 0x8020_0000);
        assert_eq!(relocate(LINK_BASE + 0x1000, offset), 0x8020_1000);
    }

    #[test]
    fn relocation_applies_exactly_once() {
        use crate::page::table::BOOT_PAGE_TABLE;
        use crate::page::{PhysAddr, VirtAddr};

        let layout = KernelLayout {
            paddr_base: 0x8020_0000,
            vaddr_base: LINK_BASE,
            size: 0x20_0000,
        };
        let offset = layout.offset();

        // a linked address relocates onto the identity mapping
        let runtime = relocate(LINK_BASE + 0x4000, offset);
        assert_eq!(
            BOOT_PAGE_TABLE.lookup(VirtAddr::from(runtime)),
            Some(PhysAddr::from(0x8020_4000usize))
        );

        // a runtime address is already final, correcting it again
        // would leave the mapped address space entirely
        let twice = relocate(runtime, offset);
        assert_eq!(BOOT_PAGE_TABLE.lookup(VirtAddr::from(twice)), None);
    }

    #[test]
    fn relocated_target_is_linked_plus_offset() {
        // for any load address, offset = load - linked image base
        let linked_base = 0x8020_0000usize;
        let entry = linked_base + 0x4242;

        for load in [0x8020_0000usize, 0x8800_0000, 0xa000_0000] {
            let offset = load.wrapping_sub(linked_base);
            assert_eq!(relocate(entry, offset), load + 0x4242);
        }
    }
}
