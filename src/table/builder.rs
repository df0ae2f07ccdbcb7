//! Table construction with program deduplication.

use std::collections::HashMap;

use log::debug;

use super::{Instruction, InstructionTable};
use crate::error::ConstructionError;
use crate::generator::AddressingMode;
use crate::micro_op::MicroOp;
use crate::operation::{AccessType, Operation, Width};

/// One line of an opcode map.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Assignment {
	/// The opcode to install.
	pub opcode:    u8,
	/// The generator that produces its programs.
	pub mode:      AddressingMode,
	/// The operation its perform steps execute.
	pub operation: Operation,
}

impl Assignment {
	/// Creates an assignment.
	#[must_use]
	pub const fn new(opcode: u8, mode: AddressingMode, operation: Operation) -> Self {
		Self { opcode, mode, operation }
	}
}

/// Accumulates programs and table entries, one opcode at a time in ascending order.
///
/// Programs depend only on the generator and the access type, so every such pair is generated once and all opcodes
/// that share it point at the same programs. Where the 8-bit and 16-bit programs come out identical, only one copy is
/// kept.
#[derive(Debug)]
pub struct ProgramBuilder {
	micro_ops: Vec<MicroOp>,
	entries:   [[Option<Instruction>; 256]; 2],
	installed: HashMap<(AccessType, AddressingMode), (usize, usize)>,
	previous:  Option<u8>,
}

impl Default for ProgramBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl ProgramBuilder {
	/// Creates an empty builder.
	#[must_use]
	pub fn new() -> Self {
		Self { micro_ops: Vec::new(), entries: [[None; 256]; 2], installed: HashMap::new(), previous: None }
	}

	/// Installs `operation` with the programs of `mode` at `opcode`.
	///
	/// # Errors
	/// If `opcode` is not greater than the previously installed opcode.
	pub fn install(&mut self, opcode: u8, mode: AddressingMode, operation: Operation) -> Result<(), ConstructionError> {
		if let Some(previous) = self.previous
			&& opcode <= previous
		{
			return Err(if opcode == previous {
				ConstructionError::DuplicateOpcode { opcode }
			} else {
				ConstructionError::OutOfOrderOpcode { opcode, previous }
			});
		}
		self.previous = Some(opcode);

		let access = operation.access_type();
		let (eight_bit, sixteen_bit) = match self.installed.get(&(access, mode)) {
			Some(offsets) => *offsets,
			None => {
				let offsets = self.generate(mode, access);
				self.installed.insert((access, mode), offsets);
				offsets
			},
		};
		trace!("${opcode:02X} {operation} {mode} ({access:?}): programs at {eight_bit} and {sixteen_bit}");

		self.entries[Width::EightBit.table_index()][usize::from(opcode)] =
			Some(Instruction { program_offset: eight_bit, operation });
		self.entries[Width::SixteenBit.table_index()][usize::from(opcode)] =
			Some(Instruction { program_offset: sixteen_bit, operation });
		Ok(())
	}

	/// Appends both width variants of a program and drops the 16-bit one again if it is identical.
	fn generate(&mut self, mode: AddressingMode, access: AccessType) -> (usize, usize) {
		let eight_bit = self.append(mode.generate(access, Width::EightBit));
		let sixteen_bit = self.append(mode.generate(access, Width::SixteenBit));

		if self.micro_ops[eight_bit .. sixteen_bit] == self.micro_ops[sixteen_bit ..] {
			self.micro_ops.truncate(sixteen_bit);
			(eight_bit, eight_bit)
		} else {
			(eight_bit, sixteen_bit)
		}
	}

	fn append(&mut self, program: Vec<MicroOp>) -> usize {
		let offset = self.micro_ops.len();
		self.micro_ops.extend(program);
		self.micro_ops.push(MicroOp::MoveToNextProgram);
		offset
	}

	/// Finishes construction.
	#[must_use]
	pub fn finish(self) -> InstructionTable {
		let table = InstructionTable { micro_ops: self.micro_ops, entries: self.entries };
		let statistics = table.statistics();
		debug!(
			"generated {} micro-ops in {} programs ({} shared between widths); covered {} opcodes",
			statistics.micro_ops, statistics.programs, statistics.shared_programs, statistics.opcodes
		);
		table
	}
}

/// Builds a table from an opcode map in ascending opcode order.
///
/// # Errors
/// If the map is not in strictly ascending opcode order.
pub fn build_table(assignments: &[Assignment]) -> Result<InstructionTable, ConstructionError> {
	let mut builder = ProgramBuilder::new();
	for &Assignment { opcode, mode, operation } in assignments {
		builder.install(opcode, mode, operation)?;
	}
	Ok(builder.finish())
}
