//! Assembler include rendering

use super::definitions;
use crate::table::SyscallTable;
use std::fmt;

const BANNER: &str = "; Acess2\n; System Calls List\n; \n\n";

/// `Display` adapter producing `syscalls.inc.asm`
#[derive(Debug, Clone, Copy)]
pub struct AsmInclude<'a> {
	table: &'a SyscallTable,
}

impl<'a> AsmInclude<'a> {
	#[must_use]
	pub const fn new(table: &'a SyscallTable) -> Self {
		Self { table }
	}
}

impl fmt::Display for AsmInclude<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(BANNER)?;
		for def in definitions(self.table) {
			if def.gap {
				writeln!(f)?;
			}
			writeln!(f, "%define {}\t{}\t; {}", def.entry.name, def.index, def.entry.description)?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::parser::parse_lines;

	#[test]
	fn renders_definitions_with_gap() {
		let table = parse_lines(["Open\tOpen a file", "2", "Close\tClose a file"]).unwrap();
		let expected = "; Acess2\n; System Calls List\n; \n
%define Open\t0\t; Open a file

%define Close\t2\t; Close a file
";
		assert_eq!(AsmInclude::new(&table).to_string(), expected);
	}
}
