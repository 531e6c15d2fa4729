//! RISC-V CSR registers.
//!
//! The `sie` and `sip` registers are cleared directly by the naked entry
//! sequences, before any Rust code runs.

#[cfg(target_arch = "riscv64")]
#[macro_use]
mod macros;

pub mod satp;
