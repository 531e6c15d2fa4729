//! The minimal paging setup the kernel boots with.

mod types;
pub use types::{PhysAddr, VirtAddr};

pub mod table;

use crate::unit;

/// Size of the smallest translation granule.
pub const PAGE_SIZE: usize = 4 * unit::KIB;

/// Number of offset bits inside a [`PAGE_SIZE`] page.
pub const PAGE_BITS: usize = 12;
