//! Inspector for the compiled 65816 instruction table.
#![deny(missing_docs, unused, clippy::all, clippy::pedantic, clippy::nursery)]

use clap::{Parser, Subcommand};
use log::{LevelFilter, info};
use time::macros::format_description;
use w65816::{InstructionTable, Width, instruction_table};

#[derive(Parser)]
#[command(about = "Inspect the compiled WDC 65816 micro-op table", long_about = None, version, name = "w65816-table")]
struct Arguments {
	#[command(subcommand)]
	command: Command,
	/// Verbosity level to use.
	#[arg(long, short, action = clap::ArgAction::Count)]
	verbose: u8,
}

#[derive(Subcommand)]
enum Command {
	#[command(about = "Print size and sharing statistics of the table")]
	Stats,

	#[command(
		about = "Print the programs of one opcode",
		long_about = "Print the operation, program offset and micro-op listing of one opcode. Without --width, both \
		              the 8-bit and the 16-bit program are printed."
	)]
	Show {
		#[arg(value_parser = from_lenient_u8, help = "The opcode, in decimal or as 0x- or $-prefixed hexadecimal")]
		opcode: u8,
		#[arg(short, long, value_parser = width_from_bits, help = "Only print the program for this width (8 or 16)")]
		width:  Option<Width>,
	},

	#[command(about = "Print one line per implemented opcode")]
	Dump,
}

fn from_lenient_u8(string: &str) -> Result<u8, String> {
	string
		.parse::<u8>()
		.or_else(|err| {
			string
				.strip_prefix("0x")
				.or_else(|| string.strip_prefix('$'))
				.map_or_else(|| Err(err), |hex_string| u8::from_str_radix(hex_string, 16))
		})
		.map_err(|err| err.to_string())
}

fn width_from_bits(string: &str) -> Result<Width, String> {
	match string {
		"8" => Ok(Width::EightBit),
		"16" => Ok(Width::SixteenBit),
		_ => Err(format!("width must be 8 or 16, not {string}")),
	}
}

fn bus_cycles(table: &InstructionTable, opcode: u8, width: Width) -> miette::Result<usize> {
	Ok(table.program(opcode, width)?.iter().filter(|micro_op| micro_op.is_bus_cycle()).count())
}

fn show(table: &InstructionTable, opcode: u8, width: Width) -> miette::Result<()> {
	let program = table.program(opcode, width)?;
	let instruction = table.instruction(opcode, width).ok_or(w65816::DispatchError::IllegalOpcode { opcode, width })?;
	println!(
		"${opcode:02X} {} ({width}): program at {}, {} bus cycles at most",
		instruction.operation,
		instruction.program_offset,
		bus_cycles(table, opcode, width)?
	);
	for (index, micro_op) in program.iter().enumerate() {
		println!("{index:>4}  {micro_op}");
	}
	Ok(())
}

fn main() -> miette::Result<()> {
	human_panic::setup_panic!(human_panic::metadata!());

	let arguments = Arguments::parse();
	let log_level = match arguments.verbose {
		0 => LevelFilter::Warn,
		1 => LevelFilter::Info,
		2 => LevelFilter::Debug,
		3 .. => LevelFilter::Trace,
	};
	simple_logger::SimpleLogger::new()
		.with_level(log_level)
		.with_local_timestamps()
		.with_timestamp_format(format_description!(version = 2, "[hour]:[minute]:[second]"))
		.init()
		.map_err(|error| miette::miette!("{error}"))?;

	info!("w65816-table version {}", env!("CARGO_PKG_VERSION"));
	let table: &InstructionTable = &instruction_table;

	match arguments.command {
		Command::Stats => println!("{}", table.statistics()),
		Command::Show { opcode, width: Some(width) } => show(table, opcode, width)?,
		Command::Show { opcode, width: None } =>
			for width in Width::ALL {
				show(table, opcode, width)?;
			},
		Command::Dump =>
			for (opcode, eight_bit, sixteen_bit) in table.implemented() {
				println!(
					"${opcode:02X} {:<4} {:>5} {:>5} {:>2} {:>2}",
					eight_bit.operation,
					eight_bit.program_offset,
					sixteen_bit.program_offset,
					bus_cycles(table, opcode, Width::EightBit)?,
					bus_cycles(table, opcode, Width::SixteenBit)?,
				);
			},
	}
	Ok(())
}
