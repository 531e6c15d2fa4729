//! The statically sized boot stack region and its per hart slots.
//!
//! The region holds one [`STACK_MAX`] sized slot per hart. Slot `i`
//! belongs exclusively to hart `i` from the moment the hart computed its
//! stack pointer; the slots never overlap, so no locking is needed.

use crate::unit;
use core::ops::Range;

/// Number of harts the boot stack region has room for.
pub const MAX_HARTS: usize = 8;

/// Size of a single hart's boot stack.
pub const STACK_MAX: usize = 64 * unit::KIB;

/// Size of the whole boot stack region.
pub const STACK_TOTAL: usize = MAX_HARTS * STACK_MAX;

/// The stack top of a hart, measured from the top of the stack region.
///
/// Hart 0 gets the highest slot and every following hart the next one
/// below it. A hart id outside `[0, MAX_HARTS)` is a firmware bug that
/// this stage does not defend against.
#[inline]
pub fn stack_top(region_top: usize, hart_id: usize) -> usize {
    debug_assert!(hart_id < MAX_HARTS);
    region_top - hart_id * STACK_MAX
}

/// The address range of a hart's private stack slot.
pub fn stack_slot(region_top: usize, hart_id: usize) -> Range<usize> {
    let top = stack_top(region_top, hart_id);
    top - STACK_MAX..top
}
