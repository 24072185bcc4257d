//! Builder for creating generators
//!
//! This module contains the `GeneratorBuilder` struct and the
//! configuration it produces.

use crate::generator::Generator;
use std::path::{Path, PathBuf};

/// Default location of the syscall list
pub const DEFAULT_INPUT: &str = "syscalls.lst";
/// Default location of the generated C header
pub const DEFAULT_HEADER: &str = "include/syscalls.h";
/// Default location of the generated assembler include
pub const DEFAULT_ASM_INCLUDE: &str = "include/syscalls.inc.asm";

/// Configuration for a generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
	/// Path of the syscall list to read
	pub input: PathBuf,
	/// Path of the C header to write
	pub header: PathBuf,
	/// Path of the assembler include to write
	pub asm_include: PathBuf,
}

impl Default for GeneratorConfig {
	fn default() -> Self {
		Self {
			input: PathBuf::from(DEFAULT_INPUT),
			header: PathBuf::from(DEFAULT_HEADER),
			asm_include: PathBuf::from(DEFAULT_ASM_INCLUDE),
		}
	}
}

/// Builder for creating generators
///
/// Relative paths are resolved against the root directory when one is set,
/// and against the working directory otherwise.
#[derive(Debug, Clone, Default)]
pub struct GeneratorBuilder {
	/// Directory relative paths are resolved against
	root: Option<PathBuf>,
	/// The configuration for the generator
	config: GeneratorConfig,
}

impl GeneratorBuilder {
	/// Create a new generator builder with default settings
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Resolve relative paths against `root`
	#[must_use]
	pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
		self.root = Some(root.into());
		self
	}

	/// Set the syscall list to read
	#[must_use]
	pub fn input(mut self, path: impl Into<PathBuf>) -> Self {
		self.config.input = path.into();
		self
	}

	/// Set the C header to write
	#[must_use]
	pub fn header(mut self, path: impl Into<PathBuf>) -> Self {
		self.config.header = path.into();
		self
	}

	/// Set the assembler include to write
	#[must_use]
	pub fn asm_include(mut self, path: impl Into<PathBuf>) -> Self {
		self.config.asm_include = path.into();
		self
	}

	/// Build the generator
	#[must_use]
	pub fn build(self) -> Generator {
		let config = match self.root {
			Some(root) => GeneratorConfig {
				input: resolve(&root, self.config.input),
				header: resolve(&root, self.config.header),
				asm_include: resolve(&root, self.config.asm_include),
			},
			None => self.config,
		};

		Generator::new(config)
	}
}

fn resolve(root: &Path, path: PathBuf) -> PathBuf {
	if path.is_absolute() { path } else { root.join(path) }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_match_kernel_layout() {
		let generator = GeneratorBuilder::new().build();
		assert_eq!(generator.config(), &GeneratorConfig::default());
		assert_eq!(generator.config().input, Path::new("syscalls.lst"));
		assert_eq!(generator.config().header, Path::new("include/syscalls.h"));
		assert_eq!(generator.config().asm_include, Path::new("include/syscalls.inc.asm"));
	}

	#[test]
	fn root_applies_to_relative_paths_only() {
		let absolute = std::env::temp_dir().join("syscalls.h");
		let generator = GeneratorBuilder::new()
			.root("kernel")
			.header(&absolute)
			.build();

		assert_eq!(generator.config().input, Path::new("kernel/syscalls.lst"));
		assert_eq!(generator.config().header, absolute);
		assert_eq!(
			generator.config().asm_include,
			Path::new("kernel/include/syscalls.inc.asm")
		);
	}
}
