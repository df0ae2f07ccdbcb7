//! Runtime dispatch of instruction programs.
//!
//! Dispatch walks one program from its table offset to the sentinel, one micro-op at a time. Bus cycles go through
//! the [`Bus`], perform steps through the [`Executor`]; internal steps only touch the [`State`]. An internal step
//! may ask for the next bus cycle to be skipped; the skip marker is consumed by exactly that bus cycle.

#![allow(clippy::cast_lossless)]

use crate::error::DispatchError;
use crate::micro_op::{AddressSpace, BusCycle, Index, Internal, MicroOp};
use crate::operation::{Operation, Width};
use crate::table::InstructionTable;

mod state;

pub use state::{ADDRESS_MASK, BANK_MASK, Buffer, Registers, State};

/// Memory access on behalf of the processor, one byte per call. Every call is one bus cycle.
pub trait Bus {
	/// Reads a byte.
	fn fetch(&mut self, space: AddressSpace, address: u32) -> u8;
	/// Writes a byte.
	fn store(&mut self, space: AddressSpace, address: u32, value: u8);
}

/// What a perform step wants the dispatcher to do next.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Completion {
	/// Continue with the rest of the program.
	#[default]
	Done,
	/// Run the same program again from its start. Only block moves repeat; they rewind PC to the first operand
	/// byte themselves. Any other operation that returns this is treated as [`Completion::Done`].
	Repeat,
}

/// Executes the semantics of operations.
pub trait Executor {
	/// Executes `operation` at the given width. Reads take their operand from the data buffer, writes leave their
	/// result there; jumps update PC and PBR directly.
	fn perform(&mut self, operation: Operation, width: Width, state: &mut State) -> Completion;
}

/// Runs the program for `opcode` at `width`. The opcode byte must already have been fetched, with PC pointing past
/// it.
///
/// Returns the number of bus cycles performed, which excludes the opcode fetch.
///
/// # Errors
/// If the table has no program for the opcode at this width. Neither the state nor the bus are touched in that case.
pub fn dispatch(
	table: &InstructionTable,
	opcode: u8,
	width: Width,
	state: &mut State,
	bus: &mut impl Bus,
	executor: &mut impl Executor,
) -> Result<usize, DispatchError> {
	let instruction = table.instruction(opcode, width).ok_or(DispatchError::IllegalOpcode { opcode, width })?;
	let micro_ops = table.micro_ops();
	trace!("dispatching ${opcode:02X} {} ({width}) at {:06X}", instruction.operation, state.registers.program_address());

	state.begin_instruction();
	let mut cycles = 0;
	let mut cursor = instruction.program_offset;
	loop {
		match micro_ops[cursor] {
			MicroOp::Cycle(cycle) =>
				if state.skip_next_bus_cycle {
					trace!("skipped {cycle:?}");
					state.skip_next_bus_cycle = false;
				} else {
					state.bus_cycle(cycle, bus);
					cycles += 1;
				},
			MicroOp::Internal(internal) => state.internal(internal, width),
			MicroOp::Perform =>
				if executor.perform(instruction.operation, width, state) == Completion::Repeat
					&& matches!(instruction.operation, Operation::Mvn | Operation::Mvp)
				{
					trace!("repeating {}", instruction.operation);
					state.instruction_buffer.clear();
					state.data_buffer.clear();
					cursor = instruction.program_offset;
					continue;
				},
			MicroOp::MoveToNextProgram => return Ok(cycles),
		}
		cursor += 1;
	}
}

impl State {
	fn fetch(&self, bus: &mut impl Bus, space: AddressSpace, address: u32) -> u8 {
		let value = bus.fetch(space, address);
		trace!("{space:?} fetch {address:06X} -> {value:02X}");
		value
	}

	fn store(&self, bus: &mut impl Bus, space: AddressSpace, address: u32, value: u8) {
		trace!("{space:?} store {address:06X} <- {value:02X}");
		bus.store(space, address, value);
	}

	/// Performs one bus cycle.
	fn bus_cycle(&mut self, cycle: BusCycle, bus: &mut impl Bus) {
		let space = cycle.address_space();
		match cycle {
			BusCycle::FetchIncrementPc => {
				let value = self.fetch(bus, space, self.registers.program_address());
				self.instruction_buffer.push_input(value);
				self.registers.pc = self.registers.pc.wrapping_add(1);
			},
			BusCycle::FetchPc => {
				let value = self.fetch(bus, space, self.registers.program_address());
				self.instruction_buffer.push_input(value);
			},
			BusCycle::FetchPcThrowaway => {
				self.fetch(bus, space, self.registers.program_address());
			},

			BusCycle::FetchData => {
				let value = self.fetch(bus, space, self.data_address);
				self.data_buffer.push_input(value);
			},
			BusCycle::FetchIncrementData => {
				let value = self.fetch(bus, space, self.data_address);
				self.data_buffer.push_input(value);
				self.increment_data_address();
			},
			BusCycle::FetchDataThrowaway => {
				self.fetch(bus, space, self.data_address);
			},
			BusCycle::FetchIncorrectDataAddress => {
				self.fetch(bus, space, self.incorrect_data_address);
			},

			BusCycle::StoreData => {
				let value = self.data_buffer.next_output();
				self.store(bus, space, self.data_address, value);
			},
			BusCycle::StoreIncrementData => {
				let value = self.data_buffer.next_output();
				self.store(bus, space, self.data_address, value);
				self.increment_data_address();
			},
			BusCycle::StoreDecrementData => {
				let value = self.data_buffer.next_output_descending();
				self.store(bus, space, self.data_address, value);
				self.decrement_data_address();
			},
			BusCycle::StoreDataThrowaway => {
				self.store(bus, space, self.data_address, self.data_buffer.lowest());
			},

			BusCycle::Push => {
				let value = self.data_buffer.next_output_descending();
				self.store(bus, space, u32::from(self.registers.s), value);
				self.registers.s = self.registers.s.wrapping_sub(1);
			},
			BusCycle::AccessStack => {
				self.fetch(bus, space, u32::from(self.registers.s));
			},

			BusCycle::FetchBlockX => {
				let address = self.source_bank() | u32::from(self.registers.x);
				self.data_address = address;
				let value = self.fetch(bus, space, address);
				self.data_buffer.push_input(value);
			},
			BusCycle::StoreBlockY => {
				let address = self.destination_bank() | u32::from(self.registers.y);
				self.data_address = address;
				let value = self.data_buffer.next_output();
				self.store(bus, space, address, value);
			},
			BusCycle::FetchBlockY => {
				self.fetch(bus, space, self.destination_bank() | u32::from(self.registers.y));
			},
		}
	}

	/// Block move operands are the destination bank followed by the source bank.
	const fn destination_bank(&self) -> u32 {
		(self.instruction_buffer.value & 0xff) << 16
	}

	const fn source_bank(&self) -> u32 {
		(self.instruction_buffer.value & 0xff00) << 8
	}

	const fn index(&self, index: Index) -> u32 {
		match index {
			Index::X => self.registers.x as u32,
			Index::Y => self.registers.y as u32,
		}
	}

	const fn data_bank(&self) -> u32 {
		(self.registers.data_bank as u32) << 16
	}

	/// `D + operand`, which always lies in bank 0. Asks to skip the next cycle if DL is zero.
	fn direct_address(&mut self, offset: u32) -> u32 {
		self.skip_next_bus_cycle = self.registers.direct & 0xff == 0;
		(u32::from(self.registers.direct) + (self.instruction_buffer.value & 0xff) + offset) & BANK_MASK
	}

	/// Sets the data address to `base + index` and the dummy read address to the same page as `base`.
	///
	/// The dummy read may only be elided with 8-bit index registers and no page crossing.
	fn set_indexed_address(&mut self, base: u32, index: Index, elide_dummy_read: bool) {
		let address = base.wrapping_add(self.index(index)) & ADDRESS_MASK;
		self.incorrect_data_address = (base & !0xff & ADDRESS_MASK) | (address & 0xff);
		self.set_data_address(address, ADDRESS_MASK);
		self.skip_next_bus_cycle = elide_dummy_read
			&& self.registers.index_width == Width::EightBit
			&& address == self.incorrect_data_address;
	}

	/// Takes a pointer out of the data buffer.
	fn take_pointer(&mut self) -> u32 {
		let pointer = self.data_buffer.value;
		self.data_buffer.clear();
		pointer
	}

	/// Performs one internal step.
	fn internal(&mut self, internal: Internal, width: Width) {
		let operand = self.instruction_buffer.value;
		match internal {
			Internal::ConstructAbsolute => self.set_data_address(self.data_bank() + (operand & 0xffff), ADDRESS_MASK),
			Internal::ConstructAbsoluteBankZero => self.set_data_address(operand & 0xffff, BANK_MASK),
			Internal::ConstructAbsoluteLong => self.set_data_address(operand, ADDRESS_MASK),
			Internal::ConstructAbsoluteLongX =>
				self.set_data_address(operand.wrapping_add(self.index(Index::X)), ADDRESS_MASK),
			Internal::ConstructAbsoluteIndexed { index, elide_dummy_read } =>
				self.set_indexed_address(self.data_bank() + (operand & 0xffff), index, elide_dummy_read),
			Internal::ConstructAbsoluteIndexedIndirect => {
				let address = (operand + self.index(Index::X)) & BANK_MASK;
				self.set_data_address(((self.registers.program_bank as u32) << 16) | address, BANK_MASK);
			},
			Internal::ConstructDirect => {
				let address = self.direct_address(0);
				self.set_data_address(address, BANK_MASK);
			},
			Internal::ConstructDirectIndexed(index) => {
				let address = self.direct_address(self.index(index));
				self.set_data_address(address, BANK_MASK);
			},
			Internal::ConstructDirectIndexedIndirect => {
				let address = self.direct_address(self.index(Index::X));
				self.set_data_address(address, BANK_MASK);
			},
			Internal::ConstructDirectIndirect => {
				let pointer = self.take_pointer();
				self.set_data_address(self.data_bank() + (pointer & 0xffff), ADDRESS_MASK);
			},
			Internal::ConstructDirectIndirectIndexed { elide_dummy_read } => {
				let pointer = self.take_pointer();
				self.set_indexed_address(self.data_bank() + (pointer & 0xffff), Index::Y, elide_dummy_read);
			},
			Internal::ConstructDirectIndirectLong => {
				let pointer = self.take_pointer();
				self.set_data_address(pointer, ADDRESS_MASK);
			},
			Internal::ConstructDirectIndirectLongIndexed => {
				let pointer = self.take_pointer();
				self.set_data_address(pointer.wrapping_add(self.index(Index::Y)), ADDRESS_MASK);
			},
			Internal::ConstructStackRelative => self.set_data_address(
				(u32::from(self.registers.s) + (operand & 0xff)) & BANK_MASK,
				BANK_MASK,
			),
			Internal::ConstructStackRelativeIndirectIndexed => {
				let pointer = self.take_pointer();
				let address = self.data_bank() + (pointer & 0xffff) + self.index(Index::Y);
				self.set_data_address(address, ADDRESS_MASK);
			},

			Internal::CopyPcToData => self.data_buffer = Buffer::new(u32::from(self.registers.pc), 2),
			Internal::CopyPbrToData => self.data_buffer = Buffer::new(u32::from(self.registers.program_bank), 1),
			Internal::CopyInstructionToData => self.data_buffer = self.instruction_buffer,
			Internal::CopyAToData =>
				self.data_buffer = Buffer::new(u32::from(self.registers.a & width.mask()), width.bytes()),
			Internal::CopyDataToA => {
				let mask = width.mask();
				self.registers.a = (self.registers.a & !mask) | (self.data_buffer.word() & mask);
			},
		}
		trace!("{internal:?}: data address {:06X}, data {}", self.data_address, self.data_buffer);
	}
}
