//! A simulated rendition of the privileged state the boot paths mutate,
//! so the hart sequences can be exercised without hardware.
//!
//! The real entry paths in `boot` are the `riscv64` rendition of
//! [`run`]: same transitions, same order, ending in the same terminal
//! [`Handoff`].

use crate::layout::{self, KernelLayout};
use crate::page::table::BootPageTable;
use crate::stack;

/// The privileged registers the boot sequence writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineState {
    pub sie: usize,
    pub sip: usize,
    pub satp: usize,
    pub sp: usize,
}

impl MachineState {
    /// A hart fresh out of reset, with junk in every register this
    /// stage is expected to overwrite.
    pub const fn reset() -> Self {
        Self {
            sie: 0x222,
            sip: 0x202,
            satp: 0,
            sp: 0,
        }
    }

    /// Mask and clear all supervisor interrupts.
    pub fn disable_interrupts(&mut self) {
        self.sie = 0;
        self.sip = 0;
    }

    /// Point the root register at `table`, switching on paging.
    pub fn install_page_table(&mut self, table: &BootPageTable) {
        self.satp = table.satp().bits();
    }

    /// Give this hart its private stack slot.
    pub fn select_stack(&mut self, region_top: usize, hart_id: usize) {
        self.sp = stack::stack_top(region_top, hart_id);
    }
}

/// The two boot roles a hart can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HartRole {
    Primary,
    Secondary,
}

/// The statically linked addresses of the two kernel entry points.
#[derive(Debug, Clone, Copy)]
pub struct EntryPoints {
    pub primary: usize,
    pub secondary: usize,
}

/// The terminal transition of the boot sequence.
///
/// Once this value exists the hart is gone; there is no path back into
/// any earlier state.
#[derive(Debug, PartialEq, Eq)]
pub struct Handoff {
    /// The hart id, preserved unmodified for the entry point.
    pub hart_id: usize,
    /// The relocated address control was transferred to.
    pub target: usize,
}

/// Run one hart's complete boot sequence against a simulated machine,
/// in the same order as the real entry paths.
///
/// `bss` stands in for the uninitialized data region and is only
/// touched on the primary path. `stack_region_top` and the entry points
/// are linked addresses; the relocation the hardware performs through
/// pc relative addressing is spelled out here as `linked + offset`.
pub fn run(
    role: HartRole,
    hart_id: usize,
    state: &mut MachineState,
    table: &BootPageTable,
    layout: &KernelLayout,
    bss: &mut [u64],
    stack_region_top: usize,
    entries: EntryPoints,
) -> Handoff {
    state.disable_interrupts();

    if let HartRole::Primary = role {
        let range = bss.as_mut_ptr_range();
        unsafe { crate::bss::zero_region(range.start, range.end) };
    }

    state.install_page_table(table);
    state.select_stack(layout::relocate(stack_region_top, layout.offset()), hart_id);

    let linked = match role {
        HartRole::Primary => entries.primary,
        HartRole::Secondary => entries.secondary,
    };

    Handoff {
        hart_id,
        target: layout::relocate(linked, layout.offset()),
    }
}
