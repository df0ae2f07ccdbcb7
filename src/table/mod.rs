//! The instruction table: every opcode's program in one shared micro-op store.

use std::collections::HashSet;
use std::fmt::{Display, Formatter};

use crate::dispatch::{Bus, Executor, State};
use crate::error::DispatchError;
use crate::micro_op::MicroOp;
use crate::operation::{Operation, Width};

mod builder;
mod opcodes;
#[cfg(test)] mod test;

pub use builder::{Assignment, ProgramBuilder, build_table};
pub use opcodes::{OPCODE_MAP, instruction_table};

/// A table entry: where the opcode's program starts and which operation its perform steps execute.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Instruction {
	/// Index of the first micro-op in the shared store.
	pub program_offset: usize,
	/// The semantic operation.
	pub operation:      Operation,
}

/// The built table. It is immutable and can be shared between any number of processors.
#[derive(Clone, Debug)]
pub struct InstructionTable {
	pub(crate) micro_ops: Vec<MicroOp>,
	/// One half per width, indexed by opcode. `None` marks an illegal opcode.
	pub(crate) entries:   [[Option<Instruction>; 256]; 2],
}

impl InstructionTable {
	/// The shared micro-op store.
	#[must_use]
	pub fn micro_ops(&self) -> &[MicroOp] {
		&self.micro_ops
	}

	/// Looks up the entry for an opcode at a width.
	#[must_use]
	pub fn instruction(&self, opcode: u8, width: Width) -> Option<Instruction> {
		self.entries[width.table_index()][usize::from(opcode)]
	}

	/// The program of an opcode at a width, without the sentinel.
	///
	/// # Errors
	/// If the opcode is illegal at this width.
	pub fn program(&self, opcode: u8, width: Width) -> Result<&[MicroOp], DispatchError> {
		let instruction = self.instruction(opcode, width).ok_or(DispatchError::IllegalOpcode { opcode, width })?;
		let program = &self.micro_ops[instruction.program_offset ..];
		let length = program.iter().position(|micro_op| *micro_op == MicroOp::MoveToNextProgram).unwrap_or(program.len());
		Ok(&program[.. length])
	}

	/// Iterates over all implemented opcodes with their 8-bit and 16-bit entries.
	pub fn implemented(&self) -> impl Iterator<Item = (u8, Instruction, Instruction)> + '_ {
		(0 ..= u8::MAX).filter_map(|opcode| {
			Some((opcode, self.instruction(opcode, Width::EightBit)?, self.instruction(opcode, Width::SixteenBit)?))
		})
	}

	/// Runs the program for `opcode`; see [`crate::dispatch::dispatch`].
	///
	/// # Errors
	/// If the opcode is illegal at this width.
	pub fn dispatch(
		&self,
		opcode: u8,
		width: Width,
		state: &mut State,
		bus: &mut impl Bus,
		executor: &mut impl Executor,
	) -> Result<usize, DispatchError> {
		crate::dispatch::dispatch(self, opcode, width, state, bus, executor)
	}

	/// Summarizes the table's size and sharing.
	#[must_use]
	pub fn statistics(&self) -> Statistics {
		let mut programs = HashSet::new();
		let mut shared = HashSet::new();
		let mut opcodes = 0;
		for (_, eight_bit, sixteen_bit) in self.implemented() {
			opcodes += 1;
			programs.insert(eight_bit.program_offset);
			programs.insert(sixteen_bit.program_offset);
			if eight_bit.program_offset == sixteen_bit.program_offset {
				shared.insert(eight_bit.program_offset);
			}
		}
		Statistics {
			micro_ops: self.micro_ops.len(),
			opcodes,
			programs: programs.len(),
			shared_programs: shared.len(),
		}
	}
}

/// Size and sharing figures of an [`InstructionTable`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Statistics {
	/// Length of the micro-op store, sentinels included.
	pub micro_ops:       usize,
	/// Number of opcodes with a program.
	pub opcodes:         usize,
	/// Number of distinct programs.
	pub programs:        usize,
	/// Number of programs that serve both widths.
	pub shared_programs: usize,
}

impl Display for Statistics {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		writeln!(f, "micro-ops:       {}", self.micro_ops)?;
		writeln!(f, "opcodes:         {}", self.opcodes)?;
		writeln!(f, "programs:        {}", self.programs)?;
		write!(f, "shared programs: {}", self.shared_programs)
	}
}
