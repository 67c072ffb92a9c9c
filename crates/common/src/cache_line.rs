//! Cache-line geometry used to size the inert padding between hot fields.
//!
//! The line size is a per-target assumption, not something queried at runtime:
//! - `aarch64` and `powerpc64` are treated as 128 bytes (Apple Silicon fetches
//!   line pairs, POWER uses 128-byte lines);
//! - everything else is treated as 64 bytes (x86, x86_64, most ARMv7/RISC-V cores).

use std::mem::size_of;

#[cfg(any(target_arch = "aarch64", target_arch = "powerpc64"))]
pub const CACHE_LINE_SIZE: usize = 128;

#[cfg(not(any(target_arch = "aarch64", target_arch = "powerpc64")))]
pub const CACHE_LINE_SIZE: usize = 64;

/// Bytes inserted after an `i64` field so the next field starts at least one
/// full cache line later.
pub const FIELD_PAD_BYTES: usize = CACHE_LINE_SIZE - size_of::<i64>();

const _: () = assert!(FIELD_PAD_BYTES >= 56);
