//! Error types for syscall generation
//!
//! This module contains the parser and generator error types and a result
//! type for generator operations.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, GenError>;

/// Error raised while reading a syscall list
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
	/// A numeric directive that is not a usable syscall number
	#[error("line {line}: `{value}` is not a valid syscall number")]
	InvalidIndex { line: usize, value: String },

	/// The running index ran past the largest syscall number
	#[error("line {line}: syscall number overflows after this entry")]
	IndexOverflow { line: usize },
}

/// Error raised while generating the syscall artifacts
#[derive(Debug, Error)]
pub enum GenError {
	/// The syscall list could not be read
	#[error("failed to read syscall list {}: {source}", path.display())]
	ReadInput {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// An output file could not be written
	#[error("failed to write {}: {source}", path.display())]
	WriteOutput {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// The syscall list is malformed
	#[error("invalid syscall list: {0}")]
	Parse(#[from] ParseError),
}
