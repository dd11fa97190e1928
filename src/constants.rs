// Device node exposed by the Linux msr driver, one per logical CPU
pub const DEFAULT_DEVICE_TEMPLATE: &str = "/dev/cpu/{}/msr";

// Every model-specific register is a single 64-bit value
pub const REGISTER_SIZE: usize = 8;

// Well-known architectural MSR addresses, handy as read targets
pub const IA32_TIME_STAMP_COUNTER: u32 = 0x10;
pub const IA32_MPERF: u32 = 0xE7;
pub const IA32_APERF: u32 = 0xE8;
