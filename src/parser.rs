//! Syscall list parsing
//!
//! A syscall list is line oriented. After trimming, each line is one of:
//!
//! - blank, and ignored;
//! - a nonzero integer, which resets the running syscall number;
//! - `name<TAB>description[<TAB>ignored]`, which defines the next syscall.

use crate::error::ParseError;
use crate::table::{SyscallEntry, SyscallTable};
use tracing::{debug, warn};

/// Classification of one line of a syscall list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive<'a> {
	/// Empty after trimming
	Blank,
	/// Set the running index to this value
	SetIndex(u32),
	/// Define a syscall at the running index
	Define { name: &'a str, description: &'a str },
}

impl<'a> Directive<'a> {
	/// Classify a single line
	///
	/// `line_no` is 1-based and only used for error reporting.
	pub fn parse(line: &'a str, line_no: usize) -> Result<Self, ParseError> {
		let line = line.trim();
		if line.is_empty() {
			return Ok(Self::Blank);
		}

		if let Ok(value) = line.parse::<i64>() {
			if value != 0 {
				let index = u32::try_from(value).map_err(|_| ParseError::InvalidIndex {
					line: line_no,
					value: line.to_string(),
				})?;
				return Ok(Self::SetIndex(index));
			}
		} else if is_integer_literal(line) {
			// Too large for i64 but still clearly meant as a number
			return Err(ParseError::InvalidIndex {
				line: line_no,
				value: line.to_string(),
			});
		}

		let mut fields = line.splitn(3, '\t');
		let name = fields.next().unwrap_or_default();
		let description = fields.next().unwrap_or_default();

		Ok(Self::Define { name, description })
	}
}

fn is_integer_literal(s: &str) -> bool {
	let digits = s.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(s);
	!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Forward resets larger than this are reported, since every skipped number
/// still costs a slot in the generated name table
pub const LARGE_JUMP: u32 = 0x1000;

fn is_large_jump(from: u32, to: u32) -> bool {
	to.saturating_sub(from) > LARGE_JUMP
}

/// Build a [`SyscallTable`] from an ordered sequence of lines
pub fn parse_lines<'a, I>(lines: I) -> Result<SyscallTable, ParseError>
where
	I: IntoIterator<Item = &'a str>,
{
	let mut table = SyscallTable::new();
	let mut index: u32 = 0;

	for (i, line) in lines.into_iter().enumerate() {
		let line_no = i + 1;
		match Directive::parse(line, line_no)? {
			Directive::Blank => {},
			Directive::SetIndex(value) => {
				debug!(line = line_no, "Syscall numbering reset to {}", value);
				if is_large_jump(index, value) {
					warn!(
						line = line_no,
						"Syscall numbering jumps from {} to {}; the name table grows to match", index, value
					);
				}
				index = value;
			},
			Directive::Define { name, description } => {
				debug!(line = line_no, "Syscall {} = {}", index, name);
				if let Some(old) = table.insert(index, SyscallEntry::new(name, description)) {
					warn!(
						line = line_no,
						"Syscall number {} redefined: {} replaces {}", index, name, old.name
					);
				}
				index = index
					.checked_add(1)
					.ok_or(ParseError::IndexOverflow { line: line_no })?;
			},
		}
	}

	table.set_next_index(index);
	Ok(table)
}

/// Build a [`SyscallTable`] from the full text of a syscall list
pub fn parse_str(input: &str) -> Result<SyscallTable, ParseError> {
	parse_lines(input.lines())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn classifies_lines() {
		assert_eq!(Directive::parse("   ", 1), Ok(Directive::Blank));
		assert_eq!(Directive::parse(" 32 ", 1), Ok(Directive::SetIndex(32)));
		assert_eq!(Directive::parse("007", 1), Ok(Directive::SetIndex(7)));
		assert_eq!(
			Directive::parse("SYS_OPEN\tOpen a file\tignored", 1),
			Ok(Directive::Define {
				name: "SYS_OPEN",
				description: "Open a file",
			})
		);
	}

	#[test]
	fn zero_is_a_name_not_a_reset() {
		assert_eq!(
			Directive::parse("0", 1),
			Ok(Directive::Define {
				name: "0",
				description: "",
			})
		);
	}

	#[test]
	fn missing_description_is_empty() {
		assert_eq!(
			Directive::parse("SYS_YIELD", 1),
			Ok(Directive::Define {
				name: "SYS_YIELD",
				description: "",
			})
		);
	}

	#[test]
	fn rejects_negative_and_oversized_numbers() {
		assert_eq!(
			Directive::parse("-4", 3),
			Err(ParseError::InvalidIndex {
				line: 3,
				value: "-4".into(),
			})
		);
		assert!(matches!(
			Directive::parse("4294967296", 1),
			Err(ParseError::InvalidIndex { .. })
		));
		assert!(matches!(
			Directive::parse("99999999999999999999999", 1),
			Err(ParseError::InvalidIndex { .. })
		));
	}

	#[test]
	fn reset_applies_to_following_entry() {
		let table = parse_lines(["5", "Open\tOpen a file", "Close\tClose a file"]).unwrap();

		assert_eq!(table.name_of(5), Some("Open"));
		assert_eq!(table.name_of(6), Some("Close"));
		assert_eq!(table.len(), 2);
		assert_eq!(table.max_index(), 7);
		assert_eq!(table.next_index(), 7);
	}

	#[test]
	fn entries_auto_increment_across_blank_lines() {
		let table = parse_str("A\ta\n\n   \nB\tb\n\t\nC\tc\n").unwrap();

		assert_eq!(table.index_of("A"), Some(0));
		assert_eq!(table.index_of("B"), Some(1));
		assert_eq!(table.index_of("C"), Some(2));
	}

	#[test]
	fn later_definition_replaces_earlier() {
		let table = parse_lines(["First\t", "Second\t", "1", "Replacement\t"]).unwrap();

		assert_eq!(table.name_of(1), Some("Replacement"));
		assert_eq!(table.len(), 2);
	}

	#[test]
	fn trailing_reset_moves_only_running_index() {
		let table = parse_lines(["A\ta", "100"]).unwrap();

		assert_eq!(table.max_index(), 1);
		assert_eq!(table.next_index(), 100);
	}

	#[test]
	fn overflow_is_reported() {
		let err = parse_lines(["4294967295", "Last\t"]).unwrap_err();
		assert_eq!(err, ParseError::IndexOverflow { line: 2 });
	}

	#[test]
	fn large_forward_jumps_are_flagged() {
		assert!(!is_large_jump(0, 0x100));
		assert!(!is_large_jump(3, 3 + LARGE_JUMP));
		assert!(is_large_jump(1, 10_000_000));
		assert!(!is_large_jump(10_000_000, 1));

		let table = parse_str("10000000\nSYS_X\tx\n").unwrap();
		assert_eq!(table.max_index(), 10_000_001);
	}

	#[test]
	fn crlf_input_is_trimmed() {
		let table = parse_str("3\r\nOpen\tOpen a file\r\n").unwrap();
		assert_eq!(table.get(3), Some(&SyscallEntry::new("Open", "Open a file")));
	}
}
