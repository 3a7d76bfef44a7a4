// ══════════════════════════════════════════════════════════════════════════════
// PRINT MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Ready-made element printers for Logger::log_array. Each writes one value and
// a newline.

use std::fmt;
use std::io::{self, Write};

pub fn print_char(out: &mut dyn Write, value: &char) -> io::Result<()> {
	writeln!(out, "{}", value)
}

pub fn print_int<T: Into<i64> + Copy>(out: &mut dyn Write, value: &T) -> io::Result<()> {
	writeln!(out, "{}", (*value).into())
}

/// Six decimal places.
pub fn print_float<T: Into<f64> + Copy>(out: &mut dyn Write, value: &T) -> io::Result<()> {
	writeln!(out, "{:.6}", (*value).into())
}

pub fn print_str<S: AsRef<str>>(out: &mut dyn Write, value: &S) -> io::Result<()> {
	writeln!(out, "{}", value.as_ref())
}

/// Hex address of a reference or pointer element.
pub fn print_ptr<P: fmt::Pointer>(out: &mut dyn Write, value: &P) -> io::Result<()> {
	writeln!(out, "{:p}", value)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn capture(f: impl FnOnce(&mut dyn Write) -> io::Result<()>) -> String {
		let mut buf: Vec<u8> = Vec::new();
		f(&mut buf as &mut dyn Write).unwrap();
		String::from_utf8(buf).unwrap()
	}

	#[test]
	fn scalar_printers() {
		assert_eq!(capture(|w| print_char(w, &'z')), "z\n");
		assert_eq!(capture(|w| print_int(w, &-42i32)), "-42\n");
		assert_eq!(capture(|w| print_int(w, &7u8)), "7\n");
		assert_eq!(capture(|w| print_float(w, &1.5f32)), "1.500000\n");
		assert_eq!(capture(|w| print_str(w, &"hi")), "hi\n");
		assert_eq!(capture(|w| print_str(w, &String::from("owned"))), "owned\n");
	}

	#[test]
	fn pointer_printer_is_hex() {
		let value = 5u32;
		let out = capture(|w| print_ptr(w, &&value));
		assert!(out.starts_with("0x"));
		assert!(out.ends_with('\n'));
	}
}
