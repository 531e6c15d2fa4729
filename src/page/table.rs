//! The static page table every hart boots with.
//!
//! Two physical GiB regions are mapped twice each, once at their
//! identity address and once inside the high half alias, using a single
//! level of giant pages. All other entries stay invalid. The table only
//! exists to give the early kernel a uniform view of physical memory; it
//! is replaced by the real paging setup later during kernel init.

use super::{PhysAddr, VirtAddr, PAGE_BITS};
use crate::csr::satp::{Mode, Satp};
use crate::unit;
use bitflags::bitflags;

/// Lowest virtual address of the high half alias.
pub const HIGH_BASE: usize = 0xffff_ffff_0000_0000;

/// The physical GiB regions the boot table maps: the firmware/MMIO
/// space and the start of RAM on qemu's `virt` machine.
#[cfg(feature = "virt")]
const MAPPED_GIBS: [usize; 2] = [0x0000_0000, 0x8000_0000];

bitflags! {
    /// The flag bits of a page table entry.
    pub struct EntryFlags: u64 {
        const VALID = 1 << 0;
        const READ = 1 << 1;
        const WRITE = 1 << 2;
        const EXEC = 1 << 3;
        const USER = 1 << 4;
        const GLOBAL = 1 << 5;
        const ACCESS = 1 << 6;
        const DIRTY = 1 << 7;

        /// The mapping every populated boot entry uses.
        const BOOT = Self::VALID.bits
            | Self::READ.bits
            | Self::WRITE.bits
            | Self::EXEC.bits
            | Self::GLOBAL.bits
            | Self::ACCESS.bits
            | Self::DIRTY.bits;
    }
}

/// A page-table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct Entry(u64);

impl Entry {
    /// The invalid entry, all bits zero.
    pub const INVALID: Entry = Entry(0);

    /// Build a giant page entry mapping the `ppn2`th physical GiB.
    const fn giant(ppn2: u64) -> Entry {
        Entry((ppn2 << 28) | EntryFlags::BOOT.bits())
    }

    /// Check the `V` bit of this PTE.
    #[inline]
    pub fn valid(self) -> bool {
        self.0 & EntryFlags::VALID.bits() != 0
    }

    /// Check if this PTE maps a page instead of pointing to the next
    /// table level.
    #[inline]
    pub fn leaf(self) -> bool {
        let rwx = EntryFlags::READ.bits() | EntryFlags::WRITE.bits() | EntryFlags::EXEC.bits();
        self.0 & rwx != 0
    }

    /// Return the flag bits of this PTE.
    #[inline]
    pub fn flags(self) -> EntryFlags {
        EntryFlags::from_bits_truncate(self.0)
    }

    /// Return the physical page number this PTE maps.
    #[inline]
    pub fn ppn(self) -> u64 {
        (self.0 >> 10) & 0xFFF_FFFF_FFFF
    }
}

/// The page table every hart switches onto during boot.
pub static BOOT_PAGE_TABLE: BootPageTable = BootPageTable::new();

/// A single table level of 512 giant page entries.
#[repr(C, align(4096))]
pub struct BootPageTable([Entry; 512]);

impl BootPageTable {
    /// Build the table with its four populated entries.
    pub const fn new() -> Self {
        let mut entries = [Entry::INVALID; 512];

        let mut i = 0;
        while i < MAPPED_GIBS.len() {
            let region = MAPPED_GIBS[i];
            let ppn2 = (region >> 30) as u64;

            entries[vpn2_of(region)] = Entry::giant(ppn2);
            entries[vpn2_of(HIGH_BASE + region)] = Entry::giant(ppn2);

            i += 1;
        }

        Self(entries)
    }

    /// The physical address of the table root.
    pub fn root(&self) -> PhysAddr {
        PhysAddr::from(self.0.as_ptr())
    }

    /// Compose the root register value selecting this table.
    pub fn satp(&self) -> Satp {
        Satp {
            mode: Mode::Sv39,
            asid: 0,
            root_table: usize::from(self.root()),
        }
    }

    /// Resolve a virtual address through the giant page entries.
    pub fn lookup(&self, vaddr: VirtAddr) -> Option<PhysAddr> {
        let vaddr = usize::from(vaddr);
        if !is_canonical(vaddr) {
            return None;
        }

        let entry = self.0[vpn2_of(vaddr)];
        if !entry.valid() {
            return None;
        }

        let base = (entry.ppn() as usize) << PAGE_BITS;
        Some(PhysAddr::from(base | (vaddr & (unit::GIB - 1))))
    }

    /// Switch this hart over to paged addressing.
    ///
    /// # Safety
    ///
    /// After the write to `satp` every address is translated through
    /// this table. The caller must already execute from, and point its
    /// stack into, memory that stays mapped.
    #[cfg(all(target_arch = "riscv64", target_os = "none"))]
    pub unsafe fn launch(&self) {
        // synchronize the translation caches before the new root is
        // committed, matching the established bring-up sequence
        crate::asm::sfence_vma();
        crate::csr::satp::write(self.satp());
    }
}

/// Index of the top level entry translating `vaddr`.
const fn vpn2_of(vaddr: usize) -> usize {
    (vaddr >> 30) & 0x1FF
}

/// Check that the upper bits of `vaddr` are a sign extension of bit 38.
fn is_canonical(vaddr: usize) -> bool {
    matches!(vaddr >> 38, 0 | 0x3FF_FFFF)
}
