use std::fs::File;
use std::io;
use std::os::fd::IntoRawFd;
use std::os::unix::fs::FileExt;

use crate::constants::{DEFAULT_DEVICE_TEMPLATE, REGISTER_SIZE};
use crate::error::{Error, Result};
use crate::util::hex_dump;

/// Substitutes a CPU index into a device path template
///
/// The template carries a single `{}` placeholder for the CPU index
/// (e.g. `/dev/cpu/{}/msr`). Neither the index nor the placeholder
/// count is validated; a malformed template yields a malformed path
/// that fails at open time.
pub fn resolve_device_path(cpu: usize, template: &str) -> String {
	template.replacen("{}", &cpu.to_string(), 1)
}

/// Handle for repeated register reads against one CPU's MSR device
///
/// For one-off reads the crate provides `read_msr()`/`read_msr_at()`,
/// which manage the handle internally.
#[derive(Debug)]
pub struct MsrDev {
	file: File,
	cpu: usize,
}

impl MsrDev {
	/// Opens the MSR device for the given CPU at the default device path
	pub fn open(cpu: usize) -> Result<Self> {
		Self::open_at(cpu, DEFAULT_DEVICE_TEMPLATE)
	}

	/// Same as `open()`, but takes a custom device path template, for use
	/// with test fixtures or third-party drivers like msr-safe that expose
	/// the same read semantics (e.g. `/dev/cpu/{}/msr_safe`)
	pub fn open_at(cpu: usize, template: &str) -> Result<Self> {
		let path = resolve_device_path(cpu, template);
		let file = File::open(&path).map_err(|e| Error::Open { cpu, path, source: e })?;

		Ok(Self { file, cpu })
	}

	/// Reads the given MSR and returns its value
	///
	/// The read is positioned at the register address and does not touch
	/// the file cursor, so concurrent reads on a shared handle never
	/// interfere with each other.
	pub fn read(&self, msr: u32) -> Result<u64> {
		let mut buf = [0u8; REGISTER_SIZE];

		let count = self.file.read_at(&mut buf, u64::from(msr)).map_err(|e| Error::Read {
			cpu: self.cpu,
			msr,
			source: e,
		})?;

		// Anything but a full 8-byte register must never decode
		if count != REGISTER_SIZE {
			return Err(Error::ShortRead { msr, count });
		}

		tracing::trace!(cpu = self.cpu, msr, bytes = %hex_dump(&buf), "raw register read");

		// The msr driver only exists on x86, where register bytes are
		// little-endian
		Ok(u64::from_le_bytes(buf))
	}

	/// Returns the CPU index this device was opened for
	pub fn cpu(&self) -> usize {
		self.cpu
	}

	/// Closes the device, surfacing the OS error if the descriptor cannot
	/// be released
	///
	/// Consumes the handle, so no read can follow a close. Dropping the
	/// handle also releases the descriptor, but silently.
	pub fn close(self) -> Result<()> {
		let cpu = self.cpu;
		let fd = self.file.into_raw_fd();

		// SAFETY: into_raw_fd() transferred ownership of the descriptor,
		// so nothing else will close it
		if unsafe { libc::close(fd) } == -1 {
			return Err(Error::Close {
				cpu,
				source: io::Error::last_os_error(),
			});
		}

		Ok(())
	}
}
