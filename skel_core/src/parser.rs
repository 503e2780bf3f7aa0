use crate::DELIMITER;
use crate::NEWLINE;

/// Split raw skeleton text into its sections.
///
/// A line starting with [`DELIMITER`] closes the current section. Anything
/// after the marker on that line is ignored. Every other line is appended to
/// the current section followed by [`NEWLINE`], whatever terminator it had in
/// the source.
///
/// The trailing section is always kept, even when empty, so a text with `k`
/// delimiter lines yields `k + 1` sections.
pub fn parse_sections(content: &str) -> Vec<String> {
	let mut sections = Vec::new();
	let mut current = String::new();

	for line in split_lines(content) {
		if line.starts_with(DELIMITER) {
			sections.push(std::mem::take(&mut current));
		} else {
			current.push_str(line);
			current.push_str(NEWLINE);
		}
	}

	sections.push(current);
	sections
}

/// Iterate over the lines of `content`, accepting `\n`, `\r\n` and a lone
/// `\r` as terminators. A final line without a terminator is still yielded;
/// a trailing terminator does not produce an extra empty line.
pub(crate) fn split_lines(content: &str) -> impl Iterator<Item = &str> {
	let mut rest = content;

	std::iter::from_fn(move || {
		if rest.is_empty() {
			return None;
		}

		let Some(end) = rest.find(['\n', '\r']) else {
			let line = rest;
			rest = "";
			return Some(line);
		};

		let line = &rest[..end];
		let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
		rest = &rest[end + terminator..];

		Some(line)
	})
}
