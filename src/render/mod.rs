//! Output rendering
//!
//! Both generated artifacts are pure functions of a [`SyscallTable`]. Each
//! format is a small `Display` wrapper so it can be written straight into a
//! file or collected into a `String`.

mod asm;
mod header;

pub use asm::AsmInclude;
pub use header::{NAMES_PER_LINE, SYS_DEBUG, SyscallHeader};

use crate::table::{SyscallEntry, SyscallTable};

/// Render the C header for `table`
#[must_use]
pub fn render_header(table: &SyscallTable) -> String {
	SyscallHeader::new(table).to_string()
}

/// Render the assembler include for `table`
#[must_use]
pub fn render_asm_include(table: &SyscallTable) -> String {
	AsmInclude::new(table).to_string()
}

/// A syscall definition as it appears in a rendered listing
#[derive(Debug, Clone, Copy)]
pub(crate) struct Definition<'a> {
	/// Whether the numbering jumped before this entry
	pub gap: bool,
	pub index: u32,
	pub entry: &'a SyscallEntry,
}

/// Walk the table in ascending order, flagging each break in numbering
///
/// The expected number starts at 0, so a table that does not begin at 0
/// reports a gap before its first entry.
pub(crate) fn definitions(table: &SyscallTable) -> impl Iterator<Item = Definition<'_>> {
	let mut expected = 0u32;
	table.iter().map(move |(index, entry)| {
		let gap = index != expected;
		expected = index.wrapping_add(1);
		Definition { gap, index, entry }
	})
}
