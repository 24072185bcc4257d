//! syscallgen - Syscall header and assembler include generator
//!
//! Reads a kernel's syscall list and emits the two derived artifacts that
//! keep syscall numbering consistent between C code and assembly trap stubs:
//! a C header (`syscalls.h`) and a NASM include (`syscalls.inc.asm`).
//!
//! # Getting Started
//!
//! ```no_run
//! fn main() -> Result<(), syscallgen::GenError> {
//!     let report = syscallgen::new().root("kernel").build().run()?;
//!     println!("{} syscalls generated", report.syscalls);
//!     Ok(())
//! }
//! ```
//!
//! The parser and renderers can also be used on their own:
//!
//! ```
//! let table = syscallgen::parse_str("5\nOpen\tOpen a file\n").unwrap();
//! assert!(syscallgen::render_header(&table).contains("#define Open\t5"));
//! ```

pub mod error;
pub mod generator;
pub mod logging;
pub mod parser;
pub mod render;
pub mod table;

pub use error::{GenError, ParseError, Result};
pub use generator::{GenerateReport, Generator, GeneratorBuilder, GeneratorConfig, RenderedOutputs};
pub use parser::{Directive, parse_lines, parse_str};
pub use render::{render_asm_include, render_header};
pub use table::{SyscallEntry, SyscallTable};

/// Create a new generator builder
#[must_use]
pub fn new() -> GeneratorBuilder {
	GeneratorBuilder::new()
}
