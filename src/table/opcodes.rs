//! The WDC 65816 opcode map.
//!
//! Covers every opcode whose addressing mode has a generator. Immediate, implied, branch and stack opcodes as well
//! as BRK and COP are not part of the map and stay illegal.
#![allow(clippy::enum_glob_use)]

use lazy_static::lazy_static;

use super::{Assignment, InstructionTable, build_table};
use crate::generator::AddressingMode::*;
use crate::operation::Operation::*;

/// All implemented opcodes, in ascending order.
pub const OPCODE_MAP: &[Assignment] = &[
	Assignment::new(0x01, DirectIndexedIndirect, Ora),
	Assignment::new(0x03, StackRelative, Ora),
	Assignment::new(0x04, DirectRmw, Tsb),
	Assignment::new(0x05, Direct, Ora),
	Assignment::new(0x06, DirectRmw, Asl),
	Assignment::new(0x07, DirectIndirectLong, Ora),
	Assignment::new(0x0A, Accumulator, Asl),
	Assignment::new(0x0C, AbsoluteRmw, Tsb),
	Assignment::new(0x0D, Absolute, Ora),
	Assignment::new(0x0E, AbsoluteRmw, Asl),
	Assignment::new(0x0F, AbsoluteLong, Ora),
	Assignment::new(0x11, DirectIndirectIndexed, Ora),
	Assignment::new(0x12, DirectIndirect, Ora),
	Assignment::new(0x13, StackRelativeIndirectIndexed, Ora),
	Assignment::new(0x14, DirectRmw, Trb),
	Assignment::new(0x15, DirectX, Ora),
	Assignment::new(0x16, DirectXRmw, Asl),
	Assignment::new(0x17, DirectIndirectLongIndexed, Ora),
	Assignment::new(0x19, AbsoluteY, Ora),
	Assignment::new(0x1A, Accumulator, Inc),
	Assignment::new(0x1C, AbsoluteRmw, Trb),
	Assignment::new(0x1D, AbsoluteX, Ora),
	Assignment::new(0x1E, AbsoluteXRmw, Asl),
	Assignment::new(0x1F, AbsoluteLongX, Ora),

	Assignment::new(0x20, AbsoluteJsr, Jsr),
	Assignment::new(0x21, DirectIndexedIndirect, And),
	Assignment::new(0x22, AbsoluteLongJsl, Jsl),
	Assignment::new(0x23, StackRelative, And),
	Assignment::new(0x24, Direct, Bit),
	Assignment::new(0x25, Direct, And),
	Assignment::new(0x26, DirectRmw, Rol),
	Assignment::new(0x27, DirectIndirectLong, And),
	Assignment::new(0x2A, Accumulator, Rol),
	Assignment::new(0x2C, Absolute, Bit),
	Assignment::new(0x2D, Absolute, And),
	Assignment::new(0x2E, AbsoluteRmw, Rol),
	Assignment::new(0x2F, AbsoluteLong, And),
	Assignment::new(0x31, DirectIndirectIndexed, And),
	Assignment::new(0x32, DirectIndirect, And),
	Assignment::new(0x33, StackRelativeIndirectIndexed, And),
	Assignment::new(0x34, DirectX, Bit),
	Assignment::new(0x35, DirectX, And),
	Assignment::new(0x36, DirectXRmw, Rol),
	Assignment::new(0x37, DirectIndirectLongIndexed, And),
	Assignment::new(0x39, AbsoluteY, And),
	Assignment::new(0x3A, Accumulator, Dec),
	Assignment::new(0x3C, AbsoluteX, Bit),
	Assignment::new(0x3D, AbsoluteX, And),
	Assignment::new(0x3E, AbsoluteXRmw, Rol),
	Assignment::new(0x3F, AbsoluteLongX, And),

	Assignment::new(0x41, DirectIndexedIndirect, Eor),
	Assignment::new(0x43, StackRelative, Eor),
	Assignment::new(0x44, BlockMove, Mvp),
	Assignment::new(0x45, Direct, Eor),
	Assignment::new(0x46, DirectRmw, Lsr),
	Assignment::new(0x47, DirectIndirectLong, Eor),
	Assignment::new(0x4A, Accumulator, Lsr),
	Assignment::new(0x4C, AbsoluteJmp, Jmp),
	Assignment::new(0x4D, Absolute, Eor),
	Assignment::new(0x4E, AbsoluteRmw, Lsr),
	Assignment::new(0x4F, AbsoluteLong, Eor),
	Assignment::new(0x51, DirectIndirectIndexed, Eor),
	Assignment::new(0x52, DirectIndirect, Eor),
	Assignment::new(0x53, StackRelativeIndirectIndexed, Eor),
	Assignment::new(0x54, BlockMove, Mvn),
	Assignment::new(0x55, DirectX, Eor),
	Assignment::new(0x56, DirectXRmw, Lsr),
	Assignment::new(0x57, DirectIndirectLongIndexed, Eor),
	Assignment::new(0x59, AbsoluteY, Eor),
	Assignment::new(0x5C, AbsoluteLongJmp, Jml),
	Assignment::new(0x5D, AbsoluteX, Eor),
	Assignment::new(0x5E, AbsoluteXRmw, Lsr),
	Assignment::new(0x5F, AbsoluteLongX, Eor),

	Assignment::new(0x61, DirectIndexedIndirect, Adc),
	Assignment::new(0x63, StackRelative, Adc),
	Assignment::new(0x64, Direct, Stz),
	Assignment::new(0x65, Direct, Adc),
	Assignment::new(0x66, DirectRmw, Ror),
	Assignment::new(0x67, DirectIndirectLong, Adc),
	Assignment::new(0x6A, Accumulator, Ror),
	Assignment::new(0x6C, AbsoluteIndirectJmp, JmpIndirect),
	Assignment::new(0x6D, Absolute, Adc),
	Assignment::new(0x6E, AbsoluteRmw, Ror),
	Assignment::new(0x6F, AbsoluteLong, Adc),
	Assignment::new(0x71, DirectIndirectIndexed, Adc),
	Assignment::new(0x72, DirectIndirect, Adc),
	Assignment::new(0x73, StackRelativeIndirectIndexed, Adc),
	Assignment::new(0x74, DirectX, Stz),
	Assignment::new(0x75, DirectX, Adc),
	Assignment::new(0x76, DirectXRmw, Ror),
	Assignment::new(0x77, DirectIndirectLongIndexed, Adc),
	Assignment::new(0x79, AbsoluteY, Adc),
	Assignment::new(0x7C, AbsoluteIndexedIndirectJmp, JmpIndirect),
	Assignment::new(0x7D, AbsoluteX, Adc),
	Assignment::new(0x7E, AbsoluteXRmw, Ror),
	Assignment::new(0x7F, AbsoluteLongX, Adc),

	Assignment::new(0x81, DirectIndexedIndirect, Sta),
	Assignment::new(0x83, StackRelative, Sta),
	Assignment::new(0x84, Direct, Sty),
	Assignment::new(0x85, Direct, Sta),
	Assignment::new(0x86, Direct, Stx),
	Assignment::new(0x87, DirectIndirectLong, Sta),
	Assignment::new(0x8C, Absolute, Sty),
	Assignment::new(0x8D, Absolute, Sta),
	Assignment::new(0x8E, Absolute, Stx),
	Assignment::new(0x8F, AbsoluteLong, Sta),
	Assignment::new(0x91, DirectIndirectIndexed, Sta),
	Assignment::new(0x92, DirectIndirect, Sta),
	Assignment::new(0x93, StackRelativeIndirectIndexed, Sta),
	Assignment::new(0x94, DirectX, Sty),
	Assignment::new(0x95, DirectX, Sta),
	Assignment::new(0x96, DirectY, Stx),
	Assignment::new(0x97, DirectIndirectLongIndexed, Sta),
	Assignment::new(0x99, AbsoluteY, Sta),
	Assignment::new(0x9C, Absolute, Stz),
	Assignment::new(0x9D, AbsoluteX, Sta),
	Assignment::new(0x9E, AbsoluteX, Stz),
	Assignment::new(0x9F, AbsoluteLongX, Sta),

	Assignment::new(0xA1, DirectIndexedIndirect, Lda),
	Assignment::new(0xA3, StackRelative, Lda),
	Assignment::new(0xA4, Direct, Ldy),
	Assignment::new(0xA5, Direct, Lda),
	Assignment::new(0xA6, Direct, Ldx),
	Assignment::new(0xA7, DirectIndirectLong, Lda),
	Assignment::new(0xAC, Absolute, Ldy),
	Assignment::new(0xAD, Absolute, Lda),
	Assignment::new(0xAE, Absolute, Ldx),
	Assignment::new(0xAF, AbsoluteLong, Lda),
	Assignment::new(0xB1, DirectIndirectIndexed, Lda),
	Assignment::new(0xB2, DirectIndirect, Lda),
	Assignment::new(0xB3, StackRelativeIndirectIndexed, Lda),
	Assignment::new(0xB4, DirectX, Ldy),
	Assignment::new(0xB5, DirectX, Lda),
	Assignment::new(0xB6, DirectY, Ldx),
	Assignment::new(0xB7, DirectIndirectLongIndexed, Lda),
	Assignment::new(0xB9, AbsoluteY, Lda),
	Assignment::new(0xBC, AbsoluteX, Ldy),
	Assignment::new(0xBD, AbsoluteX, Lda),
	Assignment::new(0xBE, AbsoluteY, Ldx),
	Assignment::new(0xBF, AbsoluteLongX, Lda),

	Assignment::new(0xC1, DirectIndexedIndirect, Cmp),
	Assignment::new(0xC3, StackRelative, Cmp),
	Assignment::new(0xC4, Direct, Cpy),
	Assignment::new(0xC5, Direct, Cmp),
	Assignment::new(0xC6, DirectRmw, Dec),
	Assignment::new(0xC7, DirectIndirectLong, Cmp),
	Assignment::new(0xCC, Absolute, Cpy),
	Assignment::new(0xCD, Absolute, Cmp),
	Assignment::new(0xCE, AbsoluteRmw, Dec),
	Assignment::new(0xCF, AbsoluteLong, Cmp),
	Assignment::new(0xD1, DirectIndirectIndexed, Cmp),
	Assignment::new(0xD2, DirectIndirect, Cmp),
	Assignment::new(0xD3, StackRelativeIndirectIndexed, Cmp),
	Assignment::new(0xD5, DirectX, Cmp),
	Assignment::new(0xD6, DirectXRmw, Dec),
	Assignment::new(0xD7, DirectIndirectLongIndexed, Cmp),
	Assignment::new(0xD9, AbsoluteY, Cmp),
	Assignment::new(0xDC, AbsoluteIndirectJml, Jml),
	Assignment::new(0xDD, AbsoluteX, Cmp),
	Assignment::new(0xDE, AbsoluteXRmw, Dec),
	Assignment::new(0xDF, AbsoluteLongX, Cmp),

	Assignment::new(0xE1, DirectIndexedIndirect, Sbc),
	Assignment::new(0xE3, StackRelative, Sbc),
	Assignment::new(0xE4, Direct, Cpx),
	Assignment::new(0xE5, Direct, Sbc),
	Assignment::new(0xE6, DirectRmw, Inc),
	Assignment::new(0xE7, DirectIndirectLong, Sbc),
	Assignment::new(0xEC, Absolute, Cpx),
	Assignment::new(0xED, Absolute, Sbc),
	Assignment::new(0xEE, AbsoluteRmw, Inc),
	Assignment::new(0xEF, AbsoluteLong, Sbc),
	Assignment::new(0xF1, DirectIndirectIndexed, Sbc),
	Assignment::new(0xF2, DirectIndirect, Sbc),
	Assignment::new(0xF3, StackRelativeIndirectIndexed, Sbc),
	Assignment::new(0xF5, DirectX, Sbc),
	Assignment::new(0xF6, DirectXRmw, Inc),
	Assignment::new(0xF7, DirectIndirectLongIndexed, Sbc),
	Assignment::new(0xF9, AbsoluteY, Sbc),
	Assignment::new(0xFC, AbsoluteIndexedIndirectJsr, JmpIndirect),
	Assignment::new(0xFD, AbsoluteX, Sbc),
	Assignment::new(0xFE, AbsoluteXRmw, Inc),
	Assignment::new(0xFF, AbsoluteLongX, Sbc),
];

lazy_static! {
	/// The instruction table for the opcode map, built on first use.
	pub static ref instruction_table: InstructionTable =
		build_table(OPCODE_MAP).unwrap_or_else(|error| panic!("invalid 65816 opcode map: {error}"));
}
