use std::io;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during MSR operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("failed to open MSR device {path} for CPU {cpu}: {source}")]
	Open {
		cpu: usize,
		path: String,
		source: io::Error,
	},

	#[error("failed to read MSR 0x{msr:X} on CPU {cpu}: {source}")]
	Read {
		cpu: usize,
		msr: u32,
		source: io::Error,
	},

	#[error("read wrong count of bytes for MSR 0x{msr:X}: got {count}, want 8")]
	ShortRead { msr: u32, count: usize },

	#[error("failed to close MSR device for CPU {cpu}: {source}")]
	Close { cpu: usize, source: io::Error },
}
