//! Generator functionality
//!
//! This module ties the parser and the renderers to the filesystem: it reads
//! the syscall list and writes both generated artifacts.

mod builder;

pub use builder::{DEFAULT_ASM_INCLUDE, DEFAULT_HEADER, DEFAULT_INPUT, GeneratorBuilder, GeneratorConfig};

use crate::error::{GenError, Result};
use crate::parser::parse_str;
use crate::render::{render_asm_include, render_header};
use crate::table::SyscallTable;
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

/// Both generated artifacts, held in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedOutputs {
	/// The parsed table the outputs were rendered from
	pub table: SyscallTable,
	/// Contents of the C header
	pub header: String,
	/// Contents of the assembler include
	pub asm_include: String,
}

/// Summary of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
	/// Number of syscalls defined
	pub syscalls: usize,
	/// One past the highest syscall number
	pub max_index: u32,
	/// Path the C header was written to
	pub header: PathBuf,
	/// Path the assembler include was written to
	pub asm_include: PathBuf,
}

/// Syscall artifact generator
///
/// Created with [`GeneratorBuilder`].
#[derive(Debug, Clone)]
pub struct Generator {
	config: GeneratorConfig,
}

impl Generator {
	pub(crate) const fn new(config: GeneratorConfig) -> Self {
		Self { config }
	}

	/// Get the generator configuration
	#[must_use]
	pub const fn config(&self) -> &GeneratorConfig {
		&self.config
	}

	/// Read and parse the syscall list
	pub fn load(&self) -> Result<SyscallTable> {
		let path = &self.config.input;
		tracing::info!("Reading syscall list from {}", path.display());

		let bytes = fs::read(path).map_err(|source| GenError::ReadInput {
			path: path.clone(),
			source,
		})?;
		let input = String::from_utf8_lossy(&bytes);
		if matches!(input, Cow::Owned(_)) {
			tracing::warn!("{} is not valid UTF-8; invalid bytes replaced", path.display());
		}
		let table = parse_str(&input)?;

		if table.next_index() != table.max_index() {
			tracing::debug!(
				"Running index ends at {} but highest syscall is {}",
				table.next_index(),
				table.max_index()
			);
		}

		Ok(table)
	}

	/// Parse the syscall list and render both outputs without writing them
	pub fn render(&self) -> Result<RenderedOutputs> {
		let table = self.load()?;
		let header = render_header(&table);
		let asm_include = render_asm_include(&table);

		Ok(RenderedOutputs {
			table,
			header,
			asm_include,
		})
	}

	/// Parse the syscall list and write both outputs
	pub fn run(&self) -> Result<GenerateReport> {
		let outputs = self.render()?;

		write_output(&self.config.header, &outputs.header)?;
		write_output(&self.config.asm_include, &outputs.asm_include)?;

		let report = GenerateReport {
			syscalls: outputs.table.len(),
			max_index: outputs.table.max_index(),
			header: self.config.header.clone(),
			asm_include: self.config.asm_include.clone(),
		};
		tracing::info!(
			"Generated {} syscalls (NUM_SYSCALLS = {})",
			report.syscalls,
			report.max_index
		);

		Ok(report)
	}
}

fn write_output(path: &Path, contents: &str) -> Result<()> {
	fs::write(path, contents).map_err(|source| GenError::WriteOutput {
		path: path.to_path_buf(),
		source,
	})?;
	tracing::info!("Wrote {}", path.display());
	Ok(())
}
