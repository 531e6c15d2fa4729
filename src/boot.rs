//! The firmware facing entry points of the kernel image.
//!
//! Every hart runs one of two symmetric sequences, depending on its
//! boot role:
//!
//! - primary: disable interrupts, zero `bss`, enable paging, jump to
//!   [`kernel_main`] at its runtime address
//! - secondary: disable interrupts, enable paging, jump to
//!   [`kernel_main_secondary`] at its runtime address
//!
//! The image is linked high but loaded wherever firmware put it. All
//! symbol references below are pc relative (medany code model), so each
//! one already evaluates to `linked address + load offset`: the
//! hardware applies the relocation the pure [`layout::relocate`] model
//! describes, freshly on every reference. The offset itself is probed
//! once by the primary into the [`layout`] cell for the kernel proper
//! to consume.
//!
//! The harts proceed concurrently and independently, straight through
//! to a handoff that never returns. Whatever mechanism releases the
//! secondary harts must do so only after the primary finished zeroing
//! `bss`; that ordering is owed by firmware, it is not enforced here.

use crate::layout;
use crate::page::table::BOOT_PAGE_TABLE;
use crate::stack::{self, STACK_MAX};
use core::arch::naked_asm;

extern "C" {
    /// The primary kernel entry, never defined in this crate.
    fn kernel_main(hart_id: usize) -> !;
    /// The secondary kernel entry, never defined in this crate.
    fn kernel_main_secondary(hart_id: usize) -> !;
}

/// The entrypoint for the primary hart.
///
/// `a0` = hart id
#[unsafe(naked)]
#[no_mangle]
#[link_section = ".text.init"]
pub unsafe extern "C" fn _boot() -> ! {
    naked_asm!(
        // ---------------------------------
        // Mask and clear all supervisor
        // interrupts
        // ---------------------------------
        "csrw sie, zero",
        "csrw sip, zero",
        // ---------------------------------
        // Give this hart its boot stack
        // slot, hart 0 gets the highest
        // ---------------------------------
        "    la sp, __stack_end",
        "    li t0, {stack_max}",
        "    mul t0, t0, a0",
        "    sub sp, sp, t0",
        // ---------------------------------
        // Jump into rust code
        // ---------------------------------
        "j {main}",
        stack_max = const STACK_MAX,
        main = sym primary_main,
    )
}

/// The entrypoint for every secondary hart, released by firmware after
/// the primary finished its setup.
///
/// `a0` = hart id
#[unsafe(naked)]
#[no_mangle]
pub unsafe extern "C" fn _boot_secondary() -> ! {
    naked_asm!(
        // ---------------------------------
        // Mask and clear all supervisor
        // interrupts
        // ---------------------------------
        "csrw sie, zero",
        "csrw sip, zero",
        // ---------------------------------
        // Give this hart its boot stack
        // slot
        // ---------------------------------
        "    la sp, __stack_end",
        "    li t0, {stack_max}",
        "    mul t0, t0, a0",
        "    sub sp, sp, t0",
        // ---------------------------------
        // Jump into rust code
        // ---------------------------------
        "j {main}",
        stack_max = const STACK_MAX,
        main = sym secondary_main,
    )
}

/// The boot sequence of the primary hart.
extern "C" fn primary_main(hart_id: usize) -> ! {
    unsafe {
        // the pc is still inside the physical address space here, so
        // the image location can be probed
        crate::bss::zero_bss();
        layout::probe();

        let stack_top = init_vm(hart_id);
        // pc relative, already the entry's runtime address
        handoff(hart_id, kernel_main as usize, stack_top)
    }
}

/// The boot sequence of the secondary harts.
extern "C" fn secondary_main(hart_id: usize) -> ! {
    unsafe {
        let stack_top = init_vm(hart_id);
        handoff(hart_id, kernel_main_secondary as usize, stack_top)
    }
}

/// Switch this hart over to paged addressing and compute the stack top
/// it must hand off with.
///
/// Shared by both roles. Returns with paging active; the stack slots of
/// distinct harts never overlap.
unsafe fn init_vm(hart_id: usize) -> usize {
    BOOT_PAGE_TABLE.launch();

    // the stack symbol is pc relative too, its runtime address stays
    // valid under the identity mapping
    let (_, stack_end) = crate::symbols::stack_range();
    stack::stack_top(stack_end as usize, hart_id)
}

/// Install the final stack pointer and transfer control to the
/// relocated entry point. The hart id stays untouched in `a0`.
#[unsafe(naked)]
unsafe extern "C" fn handoff(hart_id: usize, target: usize, stack_top: usize) -> ! {
    naked_asm!("mv sp, a2", "jr a1")
}
