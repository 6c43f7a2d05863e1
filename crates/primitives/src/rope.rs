//! Rope utilities and extensions.

use ropey::RopeSlice;

/// Returns whether ropey treats `c` as a line break.
#[inline]
pub fn is_line_break(c: char) -> bool {
	matches!(
		c,
		'\n' | '\r' | '\u{000B}' | '\u{000C}' | '\u{0085}' | '\u{2028}' | '\u{2029}'
	)
}

/// Returns whether `text` contains a line break.
#[inline]
pub fn has_line_break(text: &str) -> bool {
	text.chars().any(is_line_break)
}

/// Returns the first line of `text` with its line ending stripped.
pub fn first_line(text: RopeSlice) -> String {
	let line = text.line(0);
	let mut out: String = line.into();
	while out.ends_with(['\n', '\r']) {
		out.pop();
	}
	out
}

#[cfg(test)]
mod tests {
	use ropey::Rope;

	use super::*;

	#[test]
	fn test_plain_text_has_no_break() {
		assert!(!has_line_break("hello world"));
		assert!(!has_line_break(""));
	}

	#[test]
	fn test_detects_breaks() {
		assert!(has_line_break("a\nb"));
		assert!(has_line_break("a\r"));
		assert!(has_line_break("a\u{2028}b"));
	}

	#[test]
	fn test_first_line_single() {
		let text = Rope::from("hello");
		assert_eq!(first_line(text.slice(..)), "hello");
	}

	#[test]
	fn test_first_line_strips_crlf() {
		let text = Rope::from("hello\r\nworld");
		assert_eq!(first_line(text.slice(..)), "hello");
	}

	#[test]
	fn test_first_line_empty() {
		let text = Rope::from("");
		assert_eq!(first_line(text.slice(..)), "");
	}
}
