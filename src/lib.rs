//! The earliest boot stage of the Gale kernel.
//!
//! This crate owns the instant control arrives from firmware. Every hart
//! runs straight through the same short sequence: mask all supervisor
//! interrupts, zero `bss` exactly once (primary hart only), switch onto a
//! static giant page table, carve out a private boot stack slot, and jump
//! to the kernel proper at its relocated runtime address. The jump never
//! returns and nothing here recovers from anything; a violated
//! precondition at this stage is fatal to the whole machine.
//!
//! All address arithmetic (page table indices, stack slots, `satp`
//! composition, relocation) lives in target independent functions that
//! are unit tested on the host. The entry paths themselves only exist on
//! bare metal `riscv64` builds.
#![cfg_attr(not(test), no_std)]
#![deny(rust_2018_idioms, rustdoc::broken_intra_doc_links)]

#[cfg(not(target_pointer_width = "64"))]
compile_error!("Gale can only run on 64 bit systems");

#[cfg(not(target_has_atomic = "ptr"))]
compile_error!("Gale can only run on systems that have atomic support");

pub mod bss;
pub mod csr;
pub mod layout;
pub mod machine;
pub mod page;
pub mod stack;
pub mod unit;

#[cfg(all(target_arch = "riscv64", target_os = "none"))]
pub mod asm;
#[cfg(all(target_arch = "riscv64", target_os = "none"))]
pub mod symbols;

#[cfg(all(target_arch = "riscv64", target_os = "none"))]
mod boot;
