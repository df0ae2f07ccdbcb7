use std::collections::{HashMap, HashSet};

use rstest::rstest;

use super::*;
use crate::error::ConstructionError;
use crate::generator::AddressingMode;
use crate::operation::AccessType;

#[test]
fn same_generator_shares_programs() {
	let table = build_table(&[
		Assignment::new(0x01, AddressingMode::DirectIndexedIndirect, Operation::Ora),
		Assignment::new(0x22, AddressingMode::DirectIndexedIndirect, Operation::And),
	])
	.unwrap();

	for width in Width::ALL {
		let ora = table.instruction(0x01, width).unwrap();
		let and = table.instruction(0x22, width).unwrap();
		assert_eq!(ora.program_offset, and.program_offset);
		assert_eq!(ora.operation, Operation::Ora);
		assert_eq!(and.operation, Operation::And);
	}
	assert!(table.instruction(0x00, Width::EightBit).is_none());
	assert!(table.instruction(0x21, Width::SixteenBit).is_none());
}

#[test]
fn access_type_separates_programs() {
	let table = build_table(&[
		Assignment::new(0x85, AddressingMode::Direct, Operation::Sta),
		Assignment::new(0xA5, AddressingMode::Direct, Operation::Lda),
		Assignment::new(0xC5, AddressingMode::Direct, Operation::Cmp),
	])
	.unwrap();

	for width in Width::ALL {
		let store = table.instruction(0x85, width).unwrap().program_offset;
		let load = table.instruction(0xA5, width).unwrap().program_offset;
		let compare = table.instruction(0xC5, width).unwrap().program_offset;
		assert_ne!(store, load);
		assert_eq!(load, compare);
	}
}

#[test]
fn identical_widths_are_stored_once() {
	let table = build_table(&[Assignment::new(0x4C, AddressingMode::AbsoluteJmp, Operation::Jmp)]).unwrap();
	let eight_bit = table.instruction(0x4C, Width::EightBit).unwrap();
	let sixteen_bit = table.instruction(0x4C, Width::SixteenBit).unwrap();
	assert_eq!(eight_bit.program_offset, sixteen_bit.program_offset);
	let program = AddressingMode::AbsoluteJmp.generate(AccessType::Read, Width::EightBit);
	assert_eq!(table.micro_ops().len(), program.len() + 1);
	assert_eq!(table.micro_ops().last(), Some(&MicroOp::MoveToNextProgram));
}

#[test]
fn differing_widths_are_stored_twice() {
	let table = build_table(&[Assignment::new(0xAD, AddressingMode::Absolute, Operation::Lda)]).unwrap();
	let eight_bit = table.instruction(0xAD, Width::EightBit).unwrap();
	let sixteen_bit = table.instruction(0xAD, Width::SixteenBit).unwrap();
	assert_eq!(eight_bit.program_offset, 0);
	assert_eq!(sixteen_bit.program_offset, 6);
	assert_eq!(
		table.program(0xAD, Width::EightBit).unwrap(),
		AddressingMode::Absolute.generate(AccessType::Read, Width::EightBit)
	);
	assert_eq!(
		table.program(0xAD, Width::SixteenBit).unwrap(),
		AddressingMode::Absolute.generate(AccessType::Read, Width::SixteenBit)
	);
}

#[rstest]
#[case(&[0x10, 0x10], ConstructionError::DuplicateOpcode { opcode: 0x10 })]
#[case(&[0x10, 0x0F], ConstructionError::OutOfOrderOpcode { opcode: 0x0F, previous: 0x10 })]
#[case(&[0x00, 0x01, 0xFF, 0x02], ConstructionError::OutOfOrderOpcode { opcode: 0x02, previous: 0xFF })]
fn misordered_opcodes(#[case] opcodes: &[u8], #[case] expected: ConstructionError) {
	let assignments = opcodes
		.iter()
		.map(|&opcode| Assignment::new(opcode, AddressingMode::Direct, Operation::Ora))
		.collect::<Vec<_>>();
	assert_eq!(build_table(&assignments).unwrap_err(), expected);
}

#[test]
fn gaps_stay_illegal() {
	let mut builder = ProgramBuilder::new();
	builder.install(0x00, AddressingMode::Direct, Operation::Ora).unwrap();
	builder.install(0xFF, AddressingMode::Direct, Operation::Ora).unwrap();
	let table = builder.finish();
	assert_eq!(table.implemented().count(), 2);
	assert_eq!(
		table.program(0x80, Width::SixteenBit),
		Err(DispatchError::IllegalOpcode { opcode: 0x80, width: Width::SixteenBit })
	);
}

#[test]
fn opcode_map_builds() {
	let statistics = instruction_table.statistics();
	assert_eq!(statistics.opcodes, OPCODE_MAP.len());
	assert_eq!(statistics.opcodes, 182);
	assert_eq!(statistics.micro_ops, instruction_table.micro_ops().len());
	assert!(statistics.shared_programs > 0);
	assert!(statistics.programs < statistics.opcodes);
}

#[rstest]
#[case::brk(0x00)]
#[case::cop(0x02)]
#[case::ora_immediate(0x09)]
#[case::php(0x08)]
#[case::bpl(0x10)]
#[case::pei(0xD4)]
#[case::pea(0xF4)]
#[case::xce(0xFB)]
fn unassigned_opcodes_are_illegal(#[case] opcode: u8) {
	for width in Width::ALL {
		assert!(instruction_table.instruction(opcode, width).is_none());
	}
}

#[test]
fn opcode_map_shares_programs_per_generator_and_access_type() {
	let mut offsets = HashMap::new();
	for assignment in OPCODE_MAP {
		let key = (assignment.operation.access_type(), assignment.mode);
		let entry = (
			instruction_table.instruction(assignment.opcode, Width::EightBit).unwrap(),
			instruction_table.instruction(assignment.opcode, Width::SixteenBit).unwrap(),
		);
		assert_eq!(entry.0.operation, assignment.operation);
		assert_eq!(entry.1.operation, assignment.operation);
		let offset_pair = (entry.0.program_offset, entry.1.program_offset);
		assert_eq!(*offsets.entry(key).or_insert(offset_pair), offset_pair, "${:02X}", assignment.opcode);
	}

	// No two keys share a program, and the store holds nothing but these programs.
	let mut seen = HashSet::new();
	let mut expected_length = 0;
	for (&(access, mode), &(eight_bit, sixteen_bit)) in &offsets {
		assert!(seen.insert(eight_bit));
		expected_length += mode.generate(access, Width::EightBit).len() + 1;
		if sixteen_bit != eight_bit {
			assert!(seen.insert(sixteen_bit));
			expected_length += mode.generate(access, Width::SixteenBit).len() + 1;
		}
	}
	assert_eq!(instruction_table.micro_ops().len(), expected_length);
}

#[rstest]
#[case(0x05, Operation::Ora, 0x25, Operation::And)]
#[case(0x0E, Operation::Asl, 0xEE, Operation::Inc)]
#[case(0x14, Operation::Trb, 0x26, Operation::Rol)]
#[case(0x16, Operation::Asl, 0x36, Operation::Rol)]
#[case(0x21, Operation::And, 0x01, Operation::Ora)]
#[case(0x7C, Operation::JmpIndirect, 0x7C, Operation::JmpIndirect)]
#[case(0x85, Operation::Sta, 0x64, Operation::Stz)]
fn opcode_map_pairs(
	#[case] first: u8,
	#[case] first_operation: Operation,
	#[case] second: u8,
	#[case] second_operation: Operation,
) {
	for width in Width::ALL {
		let first = instruction_table.instruction(first, width).unwrap();
		let second = instruction_table.instruction(second, width).unwrap();
		assert_eq!(first.operation, first_operation);
		assert_eq!(second.operation, second_operation);
		assert_eq!(first.program_offset, second.program_offset);
	}
}

#[test]
fn corrected_assignments() {
	assert_eq!(instruction_table.instruction(0x22, Width::EightBit).unwrap().operation, Operation::Jsl);
	assert_eq!(instruction_table.instruction(0x23, Width::EightBit).unwrap().operation, Operation::And);
	assert_eq!(
		instruction_table.program(0x4C, Width::EightBit).unwrap(),
		AddressingMode::AbsoluteJmp.generate(AccessType::Read, Width::EightBit)
	);
}

#[test]
fn programs_exclude_the_sentinel() {
	for (opcode, ..) in instruction_table.implemented() {
		for width in Width::ALL {
			let program = instruction_table.program(opcode, width).unwrap();
			assert!(!program.contains(&MicroOp::MoveToNextProgram));
			let end = instruction_table.instruction(opcode, width).unwrap().program_offset + program.len();
			assert_eq!(instruction_table.micro_ops()[end], MicroOp::MoveToNextProgram);
		}
	}
}

#[test]
fn statistics_display() {
	let table = build_table(&[Assignment::new(0x0A, AddressingMode::Accumulator, Operation::Asl)]).unwrap();
	assert_eq!(table.statistics(), Statistics { micro_ops: 5, opcodes: 1, programs: 1, shared_programs: 1 });
	assert_eq!(
		table.statistics().to_string(),
		"micro-ops:       5\nopcodes:         1\nprograms:        1\nshared programs: 1"
	);
}
