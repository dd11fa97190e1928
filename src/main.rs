use std::env;
use std::process::ExitCode;

use cpu_msr::constants::IA32_TIME_STAMP_COUNTER;
use cpu_msr::read_msr;

fn print_usage() {
	eprintln!("Usage: cpu-msr <msr> [cpu]");
	eprintln!(
		"  msr  register address, hex or decimal (e.g. 0x{:X} for the TSC)",
		IA32_TIME_STAMP_COUNTER
	);
	eprintln!("  cpu  logical CPU index; every CPU is read when omitted");
}

// Accepts both 0x-prefixed hex and plain decimal register addresses
fn parse_msr(arg: &str) -> Option<u32> {
	if let Some(hex) = arg.strip_prefix("0x").or_else(|| arg.strip_prefix("0X")) {
		u32::from_str_radix(hex, 16).ok()
	} else {
		arg.parse().ok()
	}
}

fn main() -> ExitCode {
	tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.init();

	let args: Vec<String> = env::args().collect();

	if args.len() < 2 || args.len() > 3 {
		print_usage();
		return ExitCode::from(2);
	}

	let Some(msr) = parse_msr(&args[1]) else {
		eprintln!("Invalid register address: {}", args[1]);
		print_usage();
		return ExitCode::from(2);
	};

	let cpus: Vec<usize> = match args.get(2) {
		Some(arg) => match arg.parse() {
			Ok(cpu) => vec![cpu],
			Err(_) => {
				eprintln!("Invalid CPU index: {}", arg);
				print_usage();
				return ExitCode::from(2);
			},
		},
		None => (0..num_cpus::get()).collect(),
	};

	let mut failures = 0;

	for cpu in cpus {
		match read_msr(msr, cpu) {
			Ok(value) => println!("cpu{}: 0x{:016x}", cpu, value),
			Err(e) => {
				eprintln!("cpu{}: {}", cpu, e);
				failures += 1;
			},
		}
	}

	if failures > 0 {
		return ExitCode::FAILURE;
	}

	ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
	use super::parse_msr;

	#[test]
	fn parses_hex_and_decimal_addresses() {
		assert_eq!(parse_msr("0x19A"), Some(0x19A));
		assert_eq!(parse_msr("0XE8"), Some(0xE8));
		assert_eq!(parse_msr("1552"), Some(1552));
		assert_eq!(parse_msr("msr"), None);
	}
}
