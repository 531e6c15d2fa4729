//! Linker symbols

macro_rules! linker_section {
    ($fn:ident, $start:ident, $end:ident) => {
        pub fn $fn() -> (*mut u8, *mut u8) {
            extern "C" {
                static $start: Symbol;
                static $end: Symbol;
            }

            unsafe { ($start.ptr(), $end.ptr()) }
        }
    };
}

/// Helper struct to make handling with Linker Symbols easier.
#[repr(transparent)]
pub struct Symbol(u8);

impl Symbol {
    /// Treats this symbol as a pointer to a byte.
    pub fn ptr(&self) -> *mut u8 {
        self as *const _ as *mut _
    }
}

linker_section!(kernel_range, __kernel_start, __kernel_end);
linker_section!(bss_range, __bss_start, __bss_end);
linker_section!(stack_range, __stack_start, __stack_end);
