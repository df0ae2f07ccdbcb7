//! Addressing mode generators.
//!
//! Every generator is a pure function of the operation's [`AccessType`] and the current [`Width`] that returns the
//! micro-op program for one addressing mode, without the terminating sentinel. Each program assumes that the opcode
//! byte was already fetched and PC points at the first operand byte, that both buffers are empty and that the data
//! address is undefined until a construction step computes it.
//!
//! The generators share two tails: the [`transfer`] tail for plain reads and writes, and the [`read_modify_write`]
//! tail. Control transfers, the accumulator mode and block moves use bespoke sequences and ignore the access type.
#![allow(clippy::enum_glob_use)]

use std::fmt::{Display, Formatter};

use crate::micro_op::BusCycle::*;
use crate::micro_op::Internal::*;
use crate::micro_op::MicroOp::Perform;
use crate::micro_op::{Index, MicroOp};
use crate::operation::{AccessType, Width};

/// Builds a program from a list of bus cycles, internal steps and [`MicroOp`]s.
macro_rules! program {
	($($step:expr),* $(,)?) => {
		vec![$(MicroOp::from($step)),*]
	};
}


/// The closed set of generators. The variant is the generator's identity during deduplication: two modes may
/// generate identical programs and still be distinct generators.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum AddressingMode {
	/// `a`
	Absolute,
	/// `a`, read-modify-write
	AbsoluteRmw,
	/// `JMP a`
	AbsoluteJmp,
	/// `JSR a`
	AbsoluteJsr,
	/// `JMP (a,x)`
	AbsoluteIndexedIndirectJmp,
	/// `JSR (a,x)`
	AbsoluteIndexedIndirectJsr,
	/// `JML [a]`
	AbsoluteIndirectJml,
	/// `JMP (a)`
	AbsoluteIndirectJmp,
	/// `al`
	AbsoluteLong,
	/// `JML al`
	AbsoluteLongJmp,
	/// `JSL al`
	AbsoluteLongJsl,
	/// `al,x`
	AbsoluteLongX,
	/// `a,x`
	AbsoluteX,
	/// `a,x`, read-modify-write
	AbsoluteXRmw,
	/// `a,y`
	AbsoluteY,
	/// `A`
	Accumulator,
	/// `xyc` (MVN, MVP)
	BlockMove,
	/// `d`
	Direct,
	/// `d`, read-modify-write
	DirectRmw,
	/// `d,x`
	DirectX,
	/// `d,x`, read-modify-write
	DirectXRmw,
	/// `d,y`
	DirectY,
	/// `(d,x)`
	DirectIndexedIndirect,
	/// `(d)`
	DirectIndirect,
	/// `(d),y`
	DirectIndirectIndexed,
	/// `[d]`
	DirectIndirectLong,
	/// `[d],y`
	DirectIndirectLongIndexed,
	/// `d,s`
	StackRelative,
	/// `(d,s),y`
	StackRelativeIndirectIndexed,
}

impl AddressingMode {
	/// All generators.
	pub const ALL: [Self; 29] = [
		Self::Absolute,
		Self::AbsoluteRmw,
		Self::AbsoluteJmp,
		Self::AbsoluteJsr,
		Self::AbsoluteIndexedIndirectJmp,
		Self::AbsoluteIndexedIndirectJsr,
		Self::AbsoluteIndirectJml,
		Self::AbsoluteIndirectJmp,
		Self::AbsoluteLong,
		Self::AbsoluteLongJmp,
		Self::AbsoluteLongJsl,
		Self::AbsoluteLongX,
		Self::AbsoluteX,
		Self::AbsoluteXRmw,
		Self::AbsoluteY,
		Self::Accumulator,
		Self::BlockMove,
		Self::Direct,
		Self::DirectRmw,
		Self::DirectX,
		Self::DirectXRmw,
		Self::DirectY,
		Self::DirectIndexedIndirect,
		Self::DirectIndirect,
		Self::DirectIndirectIndexed,
		Self::DirectIndirectLong,
		Self::DirectIndirectLongIndexed,
		Self::StackRelative,
		Self::StackRelativeIndirectIndexed,
	];

	/// Generates this mode's program, excluding the sentinel.
	#[must_use]
	pub fn generate(self, access: AccessType, width: Width) -> Vec<MicroOp> {
		let generator: fn(AccessType, Width) -> Vec<MicroOp> = match self {
			Self::Absolute => absolute,
			Self::AbsoluteRmw => absolute_rmw,
			Self::AbsoluteJmp => absolute_jmp,
			Self::AbsoluteJsr => absolute_jsr,
			Self::AbsoluteIndexedIndirectJmp => absolute_indexed_indirect_jmp,
			Self::AbsoluteIndexedIndirectJsr => absolute_indexed_indirect_jsr,
			Self::AbsoluteIndirectJml => absolute_indirect_jml,
			Self::AbsoluteIndirectJmp => absolute_indirect_jmp,
			Self::AbsoluteLong => absolute_long,
			Self::AbsoluteLongJmp => absolute_long_jmp,
			Self::AbsoluteLongJsl => absolute_long_jsl,
			Self::AbsoluteLongX => absolute_long_x,
			Self::AbsoluteX => absolute_x,
			Self::AbsoluteXRmw => absolute_x_rmw,
			Self::AbsoluteY => absolute_y,
			Self::Accumulator => accumulator,
			Self::BlockMove => block_move,
			Self::Direct => direct,
			Self::DirectRmw => direct_rmw,
			Self::DirectX => direct_x,
			Self::DirectXRmw => direct_x_rmw,
			Self::DirectY => direct_y,
			Self::DirectIndexedIndirect => direct_indexed_indirect,
			Self::DirectIndirect => direct_indirect,
			Self::DirectIndirectIndexed => direct_indirect_indexed,
			Self::DirectIndirectLong => direct_indirect_long,
			Self::DirectIndirectLongIndexed => direct_indirect_long_indexed,
			Self::StackRelative => stack_relative,
			Self::StackRelativeIndirectIndexed => stack_relative_indirect_indexed,
		};
		generator(access, width)
	}

	/// Whether the generated program depends on the access type at all.
	#[must_use]
	pub const fn ignores_access_type(self) -> bool {
		matches!(
			self,
			Self::AbsoluteRmw
				| Self::AbsoluteJmp
				| Self::AbsoluteJsr
				| Self::AbsoluteIndexedIndirectJmp
				| Self::AbsoluteIndexedIndirectJsr
				| Self::AbsoluteIndirectJml
				| Self::AbsoluteIndirectJmp
				| Self::AbsoluteLongJmp
				| Self::AbsoluteLongJsl
				| Self::AbsoluteXRmw
				| Self::Accumulator
				| Self::BlockMove
				| Self::DirectRmw
				| Self::DirectXRmw
		)
	}

	/// Assembler operand notation of this mode.
	#[must_use]
	pub const fn notation(self) -> &'static str {
		match self {
			Self::Absolute | Self::AbsoluteRmw | Self::AbsoluteJmp | Self::AbsoluteJsr => "a",
			Self::AbsoluteIndexedIndirectJmp | Self::AbsoluteIndexedIndirectJsr => "(a,x)",
			Self::AbsoluteIndirectJml => "[a]",
			Self::AbsoluteIndirectJmp => "(a)",
			Self::AbsoluteLong | Self::AbsoluteLongJmp | Self::AbsoluteLongJsl => "al",
			Self::AbsoluteLongX => "al,x",
			Self::AbsoluteX | Self::AbsoluteXRmw => "a,x",
			Self::AbsoluteY => "a,y",
			Self::Accumulator => "A",
			Self::BlockMove => "xyc",
			Self::Direct | Self::DirectRmw => "d",
			Self::DirectX | Self::DirectXRmw => "d,x",
			Self::DirectY => "d,y",
			Self::DirectIndexedIndirect => "(d,x)",
			Self::DirectIndirect => "(d)",
			Self::DirectIndirectIndexed => "(d),y",
			Self::DirectIndirectLong => "[d]",
			Self::DirectIndirectLongIndexed => "[d],y",
			Self::StackRelative => "d,s",
			Self::StackRelativeIndirectIndexed => "(d,s),y",
		}
	}
}

impl Display for AddressingMode {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.pad(self.notation())
	}
}

//#region Shared tails

/// Plain transfer tail. Reads fetch the operand low byte first and then perform; writes perform first to fill the
/// data buffer and then store it low byte first.
#[must_use]
pub fn transfer(access: AccessType, width: Width) -> Vec<MicroOp> {
	match (access, width) {
		(AccessType::Read, Width::EightBit) => program![FetchData, Perform],
		(AccessType::Read, Width::SixteenBit) => program![FetchIncrementData, FetchData, Perform],
		(AccessType::Write, Width::EightBit) => program![Perform, StoreData],
		(AccessType::Write, Width::SixteenBit) => program![Perform, StoreIncrementData, StoreData],
	}
}

/// Read-modify-write tail.
///
/// 8-bit: read, rewrite the unmodified byte, modify, write.
/// 16-bit: read low, read high, re-read high, modify, write high, write low.
#[must_use]
pub fn read_modify_write(width: Width) -> Vec<MicroOp> {
	match width {
		Width::EightBit => program![FetchData, StoreDataThrowaway, Perform, StoreData],
		Width::SixteenBit => program![
			FetchIncrementData,
			FetchData,
			FetchDataThrowaway,
			Perform,
			StoreDecrementData,
			StoreData,
		],
	}
}

//#endregion

//#region Absolute

/// `a`: 4 cycles (+1 for 16-bit).
#[must_use]
pub fn absolute(access: AccessType, width: Width) -> Vec<MicroOp> {
	[program![FetchIncrementPc, FetchIncrementPc, ConstructAbsolute], transfer(access, width)].concat()
}

/// `a`, read-modify-write: 6 cycles (+2 for 16-bit).
#[must_use]
pub fn absolute_rmw(_: AccessType, width: Width) -> Vec<MicroOp> {
	[program![FetchIncrementPc, FetchIncrementPc, ConstructAbsolute], read_modify_write(width)].concat()
}

/// `JMP a`: 3 cycles.
#[must_use]
pub fn absolute_jmp(_: AccessType, _: Width) -> Vec<MicroOp> {
	program![FetchIncrementPc, FetchPc, ConstructAbsolute, Perform]
}

/// `JSR a`: 6 cycles. PC is left on the last operand byte, which is the return address pushed after the jump.
#[must_use]
pub fn absolute_jsr(_: AccessType, _: Width) -> Vec<MicroOp> {
	program![FetchIncrementPc, FetchPc, FetchPcThrowaway, ConstructAbsolute, Perform, Push, Push]
}

/// `JMP (a,x)`: 6 cycles.
#[must_use]
pub fn absolute_indexed_indirect_jmp(_: AccessType, _: Width) -> Vec<MicroOp> {
	program![
		FetchIncrementPc,
		FetchPc,
		FetchPcThrowaway,
		ConstructAbsoluteIndexedIndirect,
		FetchIncrementData,
		FetchData,
		Perform,
	]
}

/// `JSR (a,x)`: 8 cycles. The return address is pushed between the two operand fetches.
#[must_use]
pub fn absolute_indexed_indirect_jsr(_: AccessType, _: Width) -> Vec<MicroOp> {
	program![
		FetchIncrementPc,
		CopyPcToData,
		Push,
		Push,
		FetchPc,
		FetchPcThrowaway,
		ConstructAbsoluteIndexedIndirect,
		FetchIncrementData,
		FetchData,
		Perform,
	]
}

/// `JML [a]`: 6 cycles.
#[must_use]
pub fn absolute_indirect_jml(_: AccessType, _: Width) -> Vec<MicroOp> {
	program![
		FetchIncrementPc,
		FetchPc,
		ConstructAbsoluteBankZero,
		FetchIncrementData,
		FetchIncrementData,
		FetchData,
		Perform,
	]
}

/// `JMP (a)`: 5 cycles.
#[must_use]
pub fn absolute_indirect_jmp(_: AccessType, _: Width) -> Vec<MicroOp> {
	program![FetchIncrementPc, FetchPc, ConstructAbsoluteBankZero, FetchIncrementData, FetchData, Perform]
}

/// `al`: 5 cycles (+1 for 16-bit).
#[must_use]
pub fn absolute_long(access: AccessType, width: Width) -> Vec<MicroOp> {
	[
		program![FetchIncrementPc, FetchIncrementPc, FetchIncrementPc, ConstructAbsoluteLong],
		transfer(access, width),
	]
	.concat()
}

/// `JML al`: 4 cycles. The target is handed to the jump through the data buffer.
#[must_use]
pub fn absolute_long_jmp(_: AccessType, _: Width) -> Vec<MicroOp> {
	program![FetchIncrementPc, FetchIncrementPc, FetchPc, ConstructAbsoluteLong, CopyInstructionToData, Perform]
}

/// `JSL al`: 8 cycles. The program bank is pushed before the bank byte is fetched; PC is left on the bank byte.
#[must_use]
pub fn absolute_long_jsl(_: AccessType, _: Width) -> Vec<MicroOp> {
	program![
		FetchIncrementPc,
		FetchIncrementPc,
		CopyPbrToData,
		Push,
		AccessStack,
		FetchPc,
		ConstructAbsoluteLong,
		Perform,
		Push,
		Push,
	]
}

/// `al,x`: 5 cycles (+1 for 16-bit).
#[must_use]
pub fn absolute_long_x(access: AccessType, width: Width) -> Vec<MicroOp> {
	[
		program![FetchIncrementPc, FetchIncrementPc, FetchIncrementPc, ConstructAbsoluteLongX],
		transfer(access, width),
	]
	.concat()
}

fn absolute_indexed(index: Index, access: AccessType, width: Width) -> Vec<MicroOp> {
	[
		program![
			FetchIncrementPc,
			FetchIncrementPc,
			ConstructAbsoluteIndexed { index, elide_dummy_read: access == AccessType::Read },
			FetchIncorrectDataAddress,
		],
		transfer(access, width),
	]
	.concat()
}

/// `a,x`: 4 cycles for reads with 8-bit index registers that stay within the page, 5 otherwise (+1 for 16-bit).
#[must_use]
pub fn absolute_x(access: AccessType, width: Width) -> Vec<MicroOp> {
	absolute_indexed(Index::X, access, width)
}

/// `a,y`: 4 cycles for reads with 8-bit index registers that stay within the page, 5 otherwise (+1 for 16-bit).
#[must_use]
pub fn absolute_y(access: AccessType, width: Width) -> Vec<MicroOp> {
	absolute_indexed(Index::Y, access, width)
}

/// `a,x`, read-modify-write: 7 cycles (+2 for 16-bit). The dummy read always happens.
#[must_use]
pub fn absolute_x_rmw(_: AccessType, width: Width) -> Vec<MicroOp> {
	[
		program![
			FetchIncrementPc,
			FetchIncrementPc,
			ConstructAbsoluteIndexed { index: Index::X, elide_dummy_read: false },
			FetchIncorrectDataAddress,
		],
		read_modify_write(width),
	]
	.concat()
}

//#endregion

/// `A`: 2 cycles regardless of width.
#[must_use]
pub fn accumulator(_: AccessType, _: Width) -> Vec<MicroOp> {
	program![FetchPcThrowaway, CopyAToData, Perform, CopyDataToA]
}

/// `MVN`/`MVP`: 7 cycles per byte moved, including the opcode fetch. The operation decides whether to repeat.
#[must_use]
pub fn block_move(_: AccessType, _: Width) -> Vec<MicroOp> {
	program![FetchIncrementPc, FetchIncrementPc, FetchBlockX, StoreBlockY, FetchBlockY, FetchBlockY, Perform]
}

//#region Direct page

/// `d`: 3 cycles (+1 for 16-bit, +1 if DL ≠ 0).
#[must_use]
pub fn direct(access: AccessType, width: Width) -> Vec<MicroOp> {
	[program![FetchIncrementPc, ConstructDirect, FetchPcThrowaway], transfer(access, width)].concat()
}

/// `d`, read-modify-write: 5 cycles (+2 for 16-bit, +1 if DL ≠ 0).
#[must_use]
pub fn direct_rmw(_: AccessType, width: Width) -> Vec<MicroOp> {
	[program![FetchIncrementPc, ConstructDirect, FetchPcThrowaway], read_modify_write(width)].concat()
}

fn direct_indexed(index: Index) -> Vec<MicroOp> {
	program![FetchIncrementPc, ConstructDirectIndexed(index), FetchPcThrowaway, FetchPcThrowaway]
}

/// `d,x`: 4 cycles (+1 for 16-bit, +1 if DL ≠ 0).
#[must_use]
pub fn direct_x(access: AccessType, width: Width) -> Vec<MicroOp> {
	[direct_indexed(Index::X), transfer(access, width)].concat()
}

/// `d,x`, read-modify-write: 6 cycles (+2 for 16-bit, +1 if DL ≠ 0).
#[must_use]
pub fn direct_x_rmw(_: AccessType, width: Width) -> Vec<MicroOp> {
	[direct_indexed(Index::X), read_modify_write(width)].concat()
}

/// `d,y`: 4 cycles (+1 for 16-bit, +1 if DL ≠ 0).
#[must_use]
pub fn direct_y(access: AccessType, width: Width) -> Vec<MicroOp> {
	[direct_indexed(Index::Y), transfer(access, width)].concat()
}

/// `(d,x)`: 6 cycles (+1 for 16-bit, +1 if DL ≠ 0).
#[must_use]
pub fn direct_indexed_indirect(access: AccessType, width: Width) -> Vec<MicroOp> {
	[
		program![
			FetchIncrementPc,
			ConstructDirectIndexedIndirect,
			FetchPcThrowaway,
			FetchPcThrowaway,
			FetchIncrementData,
			FetchData,
			ConstructDirectIndirect,
		],
		transfer(access, width),
	]
	.concat()
}

/// Fetches the direct page pointer and leaves it in the data buffer.
fn direct_pointer(pointer_bytes: usize) -> Vec<MicroOp> {
	let mut program = program![FetchIncrementPc, ConstructDirect, FetchPcThrowaway];
	program.extend(std::iter::repeat_n(MicroOp::from(FetchIncrementData), pointer_bytes - 1));
	program.push(FetchData.into());
	program
}

/// `(d)`: 5 cycles (+1 for 16-bit, +1 if DL ≠ 0).
#[must_use]
pub fn direct_indirect(access: AccessType, width: Width) -> Vec<MicroOp> {
	[direct_pointer(2), program![ConstructDirectIndirect], transfer(access, width)].concat()
}

/// `(d),y`: 5 cycles for reads with 8-bit index registers that stay within the page, 6 otherwise (+1 for 16-bit,
/// +1 if DL ≠ 0).
#[must_use]
pub fn direct_indirect_indexed(access: AccessType, width: Width) -> Vec<MicroOp> {
	[
		direct_pointer(2),
		program![
			ConstructDirectIndirectIndexed { elide_dummy_read: access == AccessType::Read },
			FetchIncorrectDataAddress,
		],
		transfer(access, width),
	]
	.concat()
}

/// `[d]`: 6 cycles (+1 for 16-bit, +1 if DL ≠ 0).
#[must_use]
pub fn direct_indirect_long(access: AccessType, width: Width) -> Vec<MicroOp> {
	[direct_pointer(3), program![ConstructDirectIndirectLong], transfer(access, width)].concat()
}

/// `[d],y`: 6 cycles (+1 for 16-bit, +1 if DL ≠ 0).
#[must_use]
pub fn direct_indirect_long_indexed(access: AccessType, width: Width) -> Vec<MicroOp> {
	[direct_pointer(3), program![ConstructDirectIndirectLongIndexed], transfer(access, width)].concat()
}

//#endregion

//#region Stack relative

/// `d,s`: 4 cycles (+1 for 16-bit).
#[must_use]
pub fn stack_relative(access: AccessType, width: Width) -> Vec<MicroOp> {
	[program![FetchIncrementPc, ConstructStackRelative, FetchPcThrowaway], transfer(access, width)].concat()
}

/// `(d,s),y`: 7 cycles (+1 for 16-bit).
#[must_use]
pub fn stack_relative_indirect_indexed(access: AccessType, width: Width) -> Vec<MicroOp> {
	[
		program![
			FetchIncrementPc,
			ConstructStackRelative,
			FetchPcThrowaway,
			FetchIncrementData,
			FetchData,
			FetchDataThrowaway,
			ConstructStackRelativeIndirectIndexed,
		],
		transfer(access, width),
	]
	.concat()
}

//#endregion
