//! Userspace access to per-CPU model-specific registers.
//!
//! Reads go through the Linux msr driver's per-CPU device nodes
//! (`/dev/cpu/<n>/msr`), where each register is exposed as an 8-byte
//! value at its own address. Values are decoded as little-endian, a
//! deliberate restriction to the x86 processor family the driver
//! serves. Reading usually requires root or `CAP_SYS_RAWIO`, and the
//! msr kernel module must be loaded.
//!
//! Repeated reads should go through [`MsrDev`], which keeps the device
//! open; [`read_msr`] and [`read_msr_at`] cover one-off reads.

pub mod constants;
pub mod device;
pub mod error;
pub mod util;

pub use crate::device::{MsrDev, resolve_device_path};
pub use crate::error::{Error, Result};

/// Reads an MSR on the given CPU as a one-time operation
pub fn read_msr(msr: u32, cpu: usize) -> Result<u64> {
	read_msr_at(msr, cpu, constants::DEFAULT_DEVICE_TEMPLATE)
}

/// Like `read_msr()`, but takes a custom device path template, for use
/// with test fixtures or third-party drivers like msr-safe
pub fn read_msr_at(msr: u32, cpu: usize, template: &str) -> Result<u64> {
	let dev = MsrDev::open_at(cpu, template)?;

	// On a failed read the handle is released by drop before the error
	// propagates
	let value = dev.read(msr)?;

	// Read errors take priority; a close failure after a successful read
	// is only logged, never returned in place of the value
	if let Err(e) = dev.close() {
		tracing::warn!(error = %e, "MSR device close failed after successful read");
	}

	Ok(value)
}
