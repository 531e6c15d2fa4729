macro_rules! write_csr {
    ($number:expr) => {
        /// Write the raw bits into the CSR.
        #[inline]
        unsafe fn _write(bits: usize) {
            core::arch::asm!("csrrw x0, {}, {}", const $number, in(reg) bits, options(nostack));
        }
    };
}
