//! Micro-ops: the atomic steps that every instruction program is made of.

use std::fmt::{Display, Formatter};

/// One step of an instruction program.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum MicroOp {
	/// Exactly one bus access.
	Cycle(BusCycle),
	/// Register and address computation without bus activity.
	Internal(Internal),
	/// Invoke the semantic operation of the instruction.
	Perform,
	/// Sentinel that terminates every program; the instruction is complete.
	MoveToNextProgram,
}

impl MicroOp {
	/// Whether this step occupies a bus cycle (unless skipped at run time).
	#[must_use]
	pub const fn is_bus_cycle(self) -> bool {
		matches!(self, Self::Cycle(_))
	}

	/// Whether this step computes the effective data address of the instruction.
	#[must_use]
	pub const fn is_address_construction(self) -> bool {
		match self {
			Self::Internal(internal) => internal.is_address_construction(),
			_ => false,
		}
	}
}

impl From<BusCycle> for MicroOp {
	fn from(cycle: BusCycle) -> Self {
		Self::Cycle(cycle)
	}
}

impl From<Internal> for MicroOp {
	fn from(internal: Internal) -> Self {
		Self::Internal(internal)
	}
}

impl Display for MicroOp {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Cycle(cycle) => write!(f, "{cycle:?}"),
			Self::Internal(internal) => write!(f, "[{internal:?}]"),
			Self::Perform => write!(f, "[Perform]"),
			Self::MoveToNextProgram => write!(f, "[MoveToNextProgram]"),
		}
	}
}

/// Which kind of memory a bus cycle addresses.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum AddressSpace {
	/// Program memory, addressed by the program bank and program counter.
	Program,
	/// Data memory, addressed by the data address register.
	Data,
	/// The stack in bank 0, addressed by the stack pointer.
	Stack,
}

/// A micro-op that performs exactly one fetch or store.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum BusCycle {
	/// Fetch an operand byte at PC into the instruction buffer and increment PC.
	FetchIncrementPc,
	/// Fetch an operand byte at PC into the instruction buffer without touching PC.
	FetchPc,
	/// Idle cycle that reads from PC and discards the value.
	FetchPcThrowaway,

	/// Fetch a byte at the data address into the data buffer.
	FetchData,
	/// Fetch a byte at the data address into the data buffer, then increment the data address.
	FetchIncrementData,
	/// Idle cycle that reads from the data address and discards the value.
	FetchDataThrowaway,
	/// Dummy read from the uncorrected indexed address. This is the cycle a preceding address construction may ask
	/// to skip when indexing did not cross a page.
	FetchIncorrectDataAddress,

	/// Store the next (lowest) data buffer byte to the data address.
	StoreData,
	/// Store the next (lowest) data buffer byte to the data address, then increment the data address.
	StoreIncrementData,
	/// Store the highest data buffer byte to the data address, then decrement the data address.
	StoreDecrementData,
	/// Rewrite the unmodified lowest data buffer byte to the data address without consuming it.
	StoreDataThrowaway,

	/// Push the highest data buffer byte to the stack.
	Push,
	/// Idle cycle that reads from the stack and discards the value.
	AccessStack,

	/// Block move: fetch the source byte at the source bank, indexed by X. The source address becomes the data
	/// address.
	FetchBlockX,
	/// Block move: store the fetched byte at the destination bank, indexed by Y. The destination address becomes the
	/// data address, so the executor sees it when the move is performed.
	StoreBlockY,
	/// Block move: idle cycle that reads at the destination bank, indexed by Y.
	FetchBlockY,
}

impl BusCycle {
	/// The address space this cycle accesses.
	#[must_use]
	pub const fn address_space(self) -> AddressSpace {
		match self {
			Self::FetchIncrementPc | Self::FetchPc | Self::FetchPcThrowaway => AddressSpace::Program,
			Self::Push | Self::AccessStack => AddressSpace::Stack,
			_ => AddressSpace::Data,
		}
	}

	/// Whether the cycle writes to the bus.
	#[must_use]
	pub const fn is_store(self) -> bool {
		matches!(
			self,
			Self::StoreData
				| Self::StoreIncrementData
				| Self::StoreDecrementData
				| Self::StoreDataThrowaway
				| Self::Push
				| Self::StoreBlockY
		)
	}
}

/// Index register selection for indexed address construction.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Index {
	/// The X register.
	X,
	/// The Y register.
	Y,
}

/// A micro-op that performs no bus access.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Internal {
	/// `DBR:operand16`, incrementing across banks.
	ConstructAbsolute,
	/// `0:operand16`, wrapping within bank 0. Used for jump pointers.
	ConstructAbsoluteBankZero,
	/// `operand24`.
	ConstructAbsoluteLong,
	/// `operand24 + X`.
	ConstructAbsoluteLongX,
	/// `DBR:operand16 + index`. With `elide_dummy_read`, the following dummy read is skipped unless indexing
	/// crossed a page or the index registers are 16 bits wide.
	ConstructAbsoluteIndexed {
		/// Index register to add.
		index:            Index,
		/// Whether to skip the dummy read when no page was crossed with 8-bit index registers.
		elide_dummy_read: bool,
	},
	/// `PBR:(operand16 + X)`, wrapping within the program bank.
	ConstructAbsoluteIndexedIndirect,
	/// `0:(D + operand8)`; skips the next cycle if the low byte of D is zero.
	ConstructDirect,
	/// `0:(D + operand8 + index)`; skips the next cycle if the low byte of D is zero.
	ConstructDirectIndexed(Index),
	/// `0:(D + operand8 + X)` as a pointer address; skips the next cycle if the low byte of D is zero.
	ConstructDirectIndexedIndirect,
	/// `DBR:pointer16`, where the pointer is consumed from the data buffer.
	ConstructDirectIndirect,
	/// `DBR:pointer16 + Y`, where the pointer is consumed from the data buffer. With `elide_dummy_read`, the
	/// following dummy read is skipped unless indexing crossed a page or the index registers are 16 bits wide.
	ConstructDirectIndirectIndexed {
		/// Whether to skip the dummy read when no page was crossed with 8-bit index registers.
		elide_dummy_read: bool,
	},
	/// `pointer24`, consumed from the data buffer.
	ConstructDirectIndirectLong,
	/// `pointer24 + Y`, consumed from the data buffer.
	ConstructDirectIndirectLongIndexed,
	/// `0:(S + operand8)`.
	ConstructStackRelative,
	/// `DBR:pointer16 + Y`, where the pointer is consumed from the data buffer.
	ConstructStackRelativeIndirectIndexed,

	/// Load the program counter into the data buffer (two bytes).
	CopyPcToData,
	/// Load the program bank into the data buffer (one byte).
	CopyPbrToData,
	/// Replace the data buffer with the instruction buffer.
	CopyInstructionToData,
	/// Load the accumulator into the data buffer at the current width.
	CopyAToData,
	/// Write the data buffer back into the accumulator at the current width.
	CopyDataToA,
}

impl Internal {
	/// Whether this step computes the effective data address of the instruction.
	#[must_use]
	pub const fn is_address_construction(self) -> bool {
		!matches!(
			self,
			Self::CopyPcToData
				| Self::CopyPbrToData
				| Self::CopyInstructionToData
				| Self::CopyAToData
				| Self::CopyDataToA
		)
	}
}
