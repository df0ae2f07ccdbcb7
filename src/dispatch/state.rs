//! Processor-visible state that programs operate on.

use std::fmt::{Display, Formatter};

use crate::operation::Width;

/// Address mask for addresses that wrap within bank 0 or the current bank.
pub const BANK_MASK: u32 = 0x00_ffff;
/// Address mask for addresses that carry across banks.
pub const ADDRESS_MASK: u32 = 0xff_ffff;

/// Native-mode register file, as far as address construction and the bus cycles need it.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Registers {
	/// Accumulator (C). In 8-bit mode only the low byte takes part in operations.
	pub a:            u16,
	/// X index register.
	pub x:            u16,
	/// Y index register.
	pub y:            u16,
	/// Stack pointer.
	pub s:            u16,
	/// Direct page register (D).
	pub direct:       u16,
	/// Data bank register (DBR).
	pub data_bank:    u8,
	/// Program bank register (PBR/K).
	pub program_bank: u8,
	/// Program counter.
	pub pc:           u16,
	/// Width of X and Y, as selected by the `x` flag. 16-bit index registers never elide the indexed dummy read.
	pub index_width:  Width,
}

impl Registers {
	/// The full 24-bit address PC points at.
	#[must_use]
	#[allow(clippy::cast_lossless)]
	pub const fn program_address(&self) -> u32 {
		((self.program_bank as u32) << 16) | self.pc as u32
	}
}

/// A little-endian byte accumulator of up to four bytes.
///
/// Inputs are appended above the bytes already held. Outputs are taken from the low end by default, or from the
/// high end for pushes and descending stores.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Buffer {
	/// Held bytes, lowest byte first.
	pub value: u32,
	/// Number of valid bytes in `value`.
	pub size:  u8,
}

impl Buffer {
	/// Creates a buffer that holds the lowest `size` bytes of `value`.
	#[must_use]
	pub const fn new(value: u32, size: u8) -> Self {
		let mask = if size >= 4 { u32::MAX } else { (1_u32 << (size * 8)) - 1 };
		Self { value: value & mask, size }
	}

	/// Appends a byte above the bytes already held. An empty buffer discards whatever it held before.
	pub fn push_input(&mut self, byte: u8) {
		debug_assert!(self.size < 4, "buffer overflow");
		if self.size == 0 {
			self.value = 0;
		}
		self.value |= u32::from(byte) << (8 * u32::from(self.size));
		self.size += 1;
	}

	/// Removes and returns the lowest byte.
	pub fn next_output(&mut self) -> u8 {
		let byte = self.lowest();
		self.value >>= 8;
		self.size = self.size.saturating_sub(1);
		byte
	}

	/// Removes and returns the highest valid byte.
	pub fn next_output_descending(&mut self) -> u8 {
		self.size = self.size.saturating_sub(1);
		#[allow(clippy::cast_possible_truncation)]
		let byte = (self.value >> (8 * u32::from(self.size))) as u8;
		*self = Self::new(self.value, self.size);
		byte
	}

	/// The lowest byte, without consuming it.
	#[must_use]
	#[allow(clippy::cast_possible_truncation)]
	pub const fn lowest(&self) -> u8 {
		self.value as u8
	}

	/// The low 16 bits of the held value.
	#[must_use]
	#[allow(clippy::cast_possible_truncation)]
	pub const fn word(&self) -> u16 {
		self.value as u16
	}

	/// Discards all held bytes.
	pub fn clear(&mut self) {
		*self = Self::default();
	}

	/// Whether no bytes are held.
	#[must_use]
	pub const fn is_empty(&self) -> bool {
		self.size == 0
	}
}

impl Display for Buffer {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:0width$X}", self.value, width = usize::from(self.size) * 2)
	}
}

/// Everything a program reads and writes while it runs.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct State {
	/// Register file.
	pub registers:                   Registers,
	/// Operand bytes fetched from the program stream.
	pub instruction_buffer:          Buffer,
	/// Bytes fetched from or destined for data memory and the stack.
	pub data_buffer:                 Buffer,
	/// The effective 24-bit data address.
	pub data_address:                u32,
	/// Bits of the data address that take part in increments and decrements. The remaining bits stay fixed.
	pub data_address_increment_mask: u32,
	/// The uncorrected address that indexed modes read from in their dummy cycle.
	pub incorrect_data_address:      u32,
	/// Set by address construction to elide the next bus cycle; consumed by that bus cycle.
	pub(crate) skip_next_bus_cycle:  bool,
}

impl State {
	/// Creates a state with the given registers and empty buffers.
	#[must_use]
	pub fn new(registers: Registers) -> Self {
		Self { registers, ..Default::default() }
	}

	/// Resets everything that only lives for the duration of one instruction.
	pub fn begin_instruction(&mut self) {
		self.instruction_buffer.clear();
		self.data_buffer.clear();
		self.skip_next_bus_cycle = false;
	}

	/// Sets the data address together with the bits that its increments may change.
	pub const fn set_data_address(&mut self, address: u32, increment_mask: u32) {
		self.data_address = address & ADDRESS_MASK;
		self.data_address_increment_mask = increment_mask;
	}

	/// Increments the data address, wrapping within the increment mask.
	pub const fn increment_data_address(&mut self) {
		let mask = self.data_address_increment_mask;
		self.data_address = (self.data_address & !mask) | (self.data_address.wrapping_add(1) & mask);
	}

	/// Decrements the data address, wrapping within the increment mask.
	pub const fn decrement_data_address(&mut self) {
		let mask = self.data_address_increment_mask;
		self.data_address = (self.data_address & !mask) | (self.data_address.wrapping_sub(1) & mask);
	}

	/// Whether the next bus cycle will be skipped.
	#[must_use]
	pub const fn skips_next_bus_cycle(&self) -> bool {
		self.skip_next_bus_cycle
	}
}
