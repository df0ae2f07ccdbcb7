//! Semantic operations and the properties the program compiler derives from them.
//!
//! The compiler never needs to know what an operation computes. It only needs to know whether the operation's
//! defining memory access is a read or a write, which selects the shape of the shared transfer tail that the
//! addressing mode generators emit.

use std::fmt::{Display, Formatter};

/// A semantic operation, executed by an [`crate::Executor`] whenever a program reaches its perform step.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[allow(missing_docs)]
pub enum Operation {
	// Arithmetic, logic and comparison.
	Adc,
	And,
	Bit,
	Cmp,
	Cpx,
	Cpy,
	Eor,
	Ora,
	Sbc,
	// Loads.
	Lda,
	Ldx,
	Ldy,
	// Control transfer.
	/// Jump to the address in the instruction buffer.
	Jmp,
	/// Jump to the address that the program fetched into the data buffer.
	JmpIndirect,
	Jsr,
	/// Long jump; the target (including bank) is always in the data buffer.
	Jml,
	Jsl,
	// Read-modify-write.
	Asl,
	Dec,
	Inc,
	Lsr,
	Rol,
	Ror,
	Trb,
	Tsb,
	// Block moves.
	Mvn,
	Mvp,
	// Stores.
	Sta,
	Stx,
	Sty,
	Stz,
}

impl Operation {
	/// All operations, in declaration order.
	pub const ALL: [Self; 31] = [
		Self::Adc,
		Self::And,
		Self::Bit,
		Self::Cmp,
		Self::Cpx,
		Self::Cpy,
		Self::Eor,
		Self::Ora,
		Self::Sbc,
		Self::Lda,
		Self::Ldx,
		Self::Ldy,
		Self::Jmp,
		Self::JmpIndirect,
		Self::Jsr,
		Self::Jml,
		Self::Jsl,
		Self::Asl,
		Self::Dec,
		Self::Inc,
		Self::Lsr,
		Self::Rol,
		Self::Ror,
		Self::Trb,
		Self::Tsb,
		Self::Mvn,
		Self::Mvp,
		Self::Sta,
		Self::Stx,
		Self::Sty,
		Self::Stz,
	];

	/// Classifies the operation's defining memory access.
	///
	/// Control transfers, read-modify-write operations and block moves are classified as reads, but the generators
	/// that serve them ignore the access type entirely; the classification only matters for the shared transfer
	/// tail.
	#[must_use]
	pub const fn access_type(self) -> AccessType {
		match self {
			Self::Adc
			| Self::And
			| Self::Bit
			| Self::Cmp
			| Self::Cpx
			| Self::Cpy
			| Self::Eor
			| Self::Ora
			| Self::Sbc
			| Self::Lda
			| Self::Ldx
			| Self::Ldy
			| Self::Jmp
			| Self::JmpIndirect
			| Self::Jsr
			| Self::Jml
			| Self::Jsl
			| Self::Asl
			| Self::Dec
			| Self::Inc
			| Self::Lsr
			| Self::Rol
			| Self::Ror
			| Self::Trb
			| Self::Tsb
			| Self::Mvn
			| Self::Mvp => AccessType::Read,

			Self::Sta | Self::Stx | Self::Sty | Self::Stz => AccessType::Write,
		}
	}

	/// Whether the index width flag (`x`) rather than the memory width flag (`m`) selects this operation's width.
	///
	/// The fetch loop uses this to pick the [`Width`] it passes to dispatch.
	#[must_use]
	pub const fn uses_index_width(self) -> bool {
		matches!(self, Self::Cpx | Self::Cpy | Self::Ldx | Self::Ldy | Self::Stx | Self::Sty)
	}

	/// The assembler mnemonic of this operation.
	#[must_use]
	pub const fn mnemonic(self) -> &'static str {
		match self {
			Self::Adc => "ADC",
			Self::And => "AND",
			Self::Bit => "BIT",
			Self::Cmp => "CMP",
			Self::Cpx => "CPX",
			Self::Cpy => "CPY",
			Self::Eor => "EOR",
			Self::Ora => "ORA",
			Self::Sbc => "SBC",
			Self::Lda => "LDA",
			Self::Ldx => "LDX",
			Self::Ldy => "LDY",
			Self::Jmp | Self::JmpIndirect => "JMP",
			Self::Jsr => "JSR",
			Self::Jml => "JML",
			Self::Jsl => "JSL",
			Self::Asl => "ASL",
			Self::Dec => "DEC",
			Self::Inc => "INC",
			Self::Lsr => "LSR",
			Self::Rol => "ROL",
			Self::Ror => "ROR",
			Self::Trb => "TRB",
			Self::Tsb => "TSB",
			Self::Mvn => "MVN",
			Self::Mvp => "MVP",
			Self::Sta => "STA",
			Self::Stx => "STX",
			Self::Sty => "STY",
			Self::Stz => "STZ",
		}
	}
}

impl Display for Operation {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.pad(self.mnemonic())
	}
}

/// Whether an operation's defining behavior is a memory read or a memory write.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum AccessType {
	/// The operation consumes data fetched from memory.
	Read,
	/// The operation produces data that is stored to memory.
	Write,
}

/// Operand width of the data path.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Width {
	/// One data byte. Both width flags are set after reset.
	#[default]
	EightBit,
	/// Two data bytes, low byte first.
	SixteenBit,
}

impl Width {
	/// Both widths, in table order.
	pub const ALL: [Self; 2] = [Self::EightBit, Self::SixteenBit];

	/// Maps a processor width flag (`m` or `x`) to a width; a set flag selects 8-bit operation.
	#[must_use]
	pub const fn from_flag(flag: bool) -> Self {
		if flag { Self::EightBit } else { Self::SixteenBit }
	}

	/// Number of data bytes transferred at this width.
	#[must_use]
	pub const fn bytes(self) -> u8 {
		match self {
			Self::EightBit => 1,
			Self::SixteenBit => 2,
		}
	}

	/// Mask selecting the bits of a register that participate in an operation at this width.
	#[must_use]
	pub const fn mask(self) -> u16 {
		match self {
			Self::EightBit => 0x00ff,
			Self::SixteenBit => 0xffff,
		}
	}

	/// Index of this width's table half.
	#[must_use]
	pub(crate) const fn table_index(self) -> usize {
		match self {
			Self::EightBit => 0,
			Self::SixteenBit => 1,
		}
	}
}

impl Display for Width {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.pad(match self {
			Self::EightBit => "8-bit",
			Self::SixteenBit => "16-bit",
		})
	}
}
