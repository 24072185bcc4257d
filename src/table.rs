//! Syscall table
//!
//! This module contains the in-memory table built from a syscall list:
//! an ordered mapping from syscall number to its name and description.

use std::collections::BTreeMap;

/// A single syscall definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyscallEntry {
	/// Identifier used for the generated constant
	pub name: String,
	/// Free-text description, emitted in the generated comments
	pub description: String,
}

impl SyscallEntry {
	/// Create a new `SyscallEntry`
	pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			description: description.into(),
		}
	}
}

/// Ordered mapping of syscall number to [`SyscallEntry`]
///
/// Keys need not be contiguous. Iteration is always in ascending key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyscallTable {
	entries: BTreeMap<u32, SyscallEntry>,
	next_index: u32,
}

impl SyscallTable {
	/// Create an empty table
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Insert an entry at `index`, returning the entry it replaced, if any
	pub fn insert(&mut self, index: u32, entry: SyscallEntry) -> Option<SyscallEntry> {
		self.entries.insert(index, entry)
	}

	/// Look up the entry defined at `index`
	#[must_use]
	pub fn get(&self, index: u32) -> Option<&SyscallEntry> {
		self.entries.get(&index)
	}

	/// Look up the syscall name defined at `index`
	#[must_use]
	pub fn name_of(&self, index: u32) -> Option<&str> {
		self.get(index).map(|entry| entry.name.as_str())
	}

	/// Find the number bound to a syscall name
	#[must_use]
	pub fn index_of(&self, name: &str) -> Option<u32> {
		self.entries
			.iter()
			.find(|(_, entry)| entry.name == name)
			.map(|(index, _)| *index)
	}

	/// Iterate over `(index, entry)` pairs in ascending index order
	pub fn iter(&self) -> impl Iterator<Item = (u32, &SyscallEntry)> {
		self.entries.iter().map(|(index, entry)| (*index, entry))
	}

	/// Number of defined syscalls
	#[must_use]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether no syscall is defined
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// One past the highest defined index, or 0 for an empty table
	#[must_use]
	pub fn max_index(&self) -> u32 {
		self.entries.last_key_value().map_or(0, |(index, _)| index.saturating_add(1))
	}

	/// The parser's running index at the end of input
	///
	/// This differs from [`max_index`](Self::max_index) only when the input
	/// resets the counter backwards or ends with a reset directive.
	#[must_use]
	pub const fn next_index(&self) -> u32 {
		self.next_index
	}

	pub(crate) const fn set_next_index(&mut self, index: u32) {
		self.next_index = index;
	}

	/// Names for every slot `0..max_index`, with `None` for unused numbers
	pub fn slots(&self) -> impl Iterator<Item = Option<&str>> {
		(0..self.max_index()).map(|index| self.name_of(index))
	}
}
