//! FFI binding for the C kernel compiled by `build.rs`.

#[cfg(c_implementation_active)]
mod ffi {
    use libc::size_t;
    use std::os::raw::c_double;

    extern "C" {
        pub fn llama_dot_c_original(x: *const c_double, y: *const c_double, n: size_t) -> c_double;
    }
}

/// C reference implementation wrapper
#[cfg(c_implementation_active)]
pub fn dot_product_c_original(x: &[f64], w: &[f64]) -> f64 {
    debug_assert_eq!(x.len(), w.len(), "Vectors must have the same length");
    let len = x.len().min(w.len());
    // SAFETY: both pointers are valid for `len` reads and the C side only reads.
    unsafe { ffi::llama_dot_c_original(x.as_ptr(), w.as_ptr(), len) }
}

/// Whether the C kernel was compiled into this build
#[cfg(c_implementation_active)]
pub const C_IMPL_AVAILABLE: bool = true;

#[cfg(not(c_implementation_active))]
pub const C_IMPL_AVAILABLE: bool = false;
