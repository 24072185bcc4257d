//! C header rendering
//!
//! The header carries one `#define` per syscall, the total count, the
//! reserved debug call and a name table indexed by syscall number.

use super::definitions;
use crate::table::SyscallTable;
use std::fmt;

/// Reserved syscall number for printing a kernel debug string
pub const SYS_DEBUG: u32 = 0x100;

/// Number of string literals per line in the name table
pub const NAMES_PER_LINE: usize = 6;

const PREAMBLE: &str = "/*
 * AcessOS Microkernel Version
 * syscalls.h
 */
#ifndef _SYSCALLS_H
#define _SYSCALLS_H

";

/// `Display` adapter producing `syscalls.h`
#[derive(Debug, Clone, Copy)]
pub struct SyscallHeader<'a> {
	table: &'a SyscallTable,
}

impl<'a> SyscallHeader<'a> {
	#[must_use]
	pub const fn new(table: &'a SyscallTable) -> Self {
		Self { table }
	}

	fn fmt_names(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "#ifdef __GNUC__")?;
		writeln!(f, "static const char *cSYSCALL_NAMES[] = {{")?;
		for (i, name) in self.table.slots().enumerate() {
			if i == 0 {
				f.write_str("\t")?;
			} else if i % NAMES_PER_LINE == 0 {
				f.write_str("\n\t")?;
			}
			write!(f, "\"{}\",", name.unwrap_or_default())?;
		}
		if self.table.max_index() > 0 {
			writeln!(f)?;
		}
		writeln!(f, "}};")?;
		writeln!(f, "#endif")
	}
}

impl fmt::Display for SyscallHeader<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(PREAMBLE)?;

		for def in definitions(self.table) {
			if def.gap {
				writeln!(f)?;
			}
			writeln!(
				f,
				"#define {}\t{}\t// {} - {}",
				def.entry.name, def.index, def.index, def.entry.description
			)?;
		}

		writeln!(f, "#define NUM_SYSCALLS\t{}", self.table.max_index())?;
		writeln!(f, "#define SYS_DEBUG\t{SYS_DEBUG:#x}\t// {SYS_DEBUG:#x} - Print a debug string")?;
		writeln!(f)?;
		self.fmt_names(f)?;
		writeln!(f, "#endif")
	}
}
