//! The `satp` CSR.

use crate::page::PAGE_SIZE;

#[cfg(target_arch = "riscv64")]
write_csr!(0x180);

/// The paging mode to set inside the satp register.
///
/// This stage only ever programs three-level translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Sv39,
}

impl Mode {
    fn bits(self) -> usize {
        match self {
            Mode::Sv39 => 8,
        }
    }
}

/// An abstraction around the bitfield of the `satp` register.
#[derive(Debug, Clone)]
pub struct Satp {
    pub mode: Mode,
    pub asid: u16,
    pub root_table: usize,
}

impl Satp {
    /// Compose the raw register value.
    ///
    /// The root table address must be page aligned, only its page number
    /// goes into the register.
    pub fn bits(&self) -> usize {
        assert_eq!(
            self.root_table % PAGE_SIZE,
            0,
            "page table root must be page aligned"
        );

        (self.root_table >> 12) | ((self.asid as usize) << 44) | (self.mode.bits() << 60)
    }
}

/// Write to the `satp` CSR.
#[cfg(target_arch = "riscv64")]
pub fn write(satp: Satp) {
    unsafe { _write(satp.bits()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_field_is_fixed_to_sv39() {
        let satp = Satp {
            mode: Mode::Sv39,
            asid: 0,
            root_table: 0x8020_0000,
        };
        assert_eq!(satp.bits() >> 60, 8);
    }

    #[test]
    fn page_number_is_the_shifted_root() {
        for root in [0x8000_0000usize, 0x8020_0000, 0xffff_f000] {
            let satp = Satp {
                mode: Mode::Sv39,
                asid: 0,
                root_table: root,
            };
            assert_eq!(satp.bits() & 0xFFF_FFFF_FFFF, root >> 12);
        }
    }

    #[test]
    #[should_panic(expected = "page aligned")]
    fn unaligned_root_is_rejected() {
        let satp = Satp {
            mode: Mode::Sv39,
            asid: 0,
            root_table: 0x8020_0800,
        };
        let _ = satp.bits();
    }
}
