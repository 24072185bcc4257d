use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use syscallgen::generator::{DEFAULT_ASM_INCLUDE, DEFAULT_HEADER, DEFAULT_INPUT};

/// Generate the syscall header and assembler include from a syscall list
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
	/// Directory that relative paths are resolved against
	#[clap(short = 'C', long)]
	root: Option<PathBuf>,
	/// Syscall list to read
	#[clap(short, long, default_value = DEFAULT_INPUT)]
	input: PathBuf,
	/// C header to write
	#[clap(short = 'H', long, default_value = DEFAULT_HEADER)]
	header: PathBuf,
	/// Assembler include to write
	#[clap(short, long, default_value = DEFAULT_ASM_INCLUDE)]
	asm: PathBuf,
}

fn main() -> ExitCode {
	syscallgen::logging::init();
	let args = Args::parse();

	let mut builder = syscallgen::new()
		.input(args.input)
		.header(args.header)
		.asm_include(args.asm);
	if let Some(root) = args.root {
		builder = builder.root(root);
	}

	match builder.build().run() {
		Ok(_) => ExitCode::SUCCESS,
		Err(e) => {
			tracing::error!("{}", e);
			ExitCode::FAILURE
		},
	}
}
