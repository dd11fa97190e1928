/// Formats raw register bytes as a space-separated hex dump
///
/// # Arguments
///
/// * `bytes` - Raw bytes as returned by the device read
///
/// # Returns
///
/// A lowercase hex string, one two-digit group per byte
pub fn hex_dump(bytes: &[u8]) -> String {
	bytes
		.iter()
		.map(|b| format!("{b:02x}"))
		.collect::<Vec<_>>()
		.join(" ")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn dumps_bytes_in_order() {
		assert_eq!(hex_dump(&[0x01, 0x00, 0xFF, 0x0A]), "01 00 ff 0a");
	}

	#[test]
	fn empty_input_dumps_empty() {
		assert_eq!(hex_dump(&[]), "");
	}
}
