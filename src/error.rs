//! Errors reported by table construction and dispatch.

use miette::Diagnostic;
use thiserror::Error;

use crate::operation::Width;

/// Errors detected while building an instruction table.
///
/// Both are programming errors in the opcode map: opcodes must be installed in strictly ascending order.
#[derive(Error, Debug, Clone, Copy, Eq, PartialEq, Diagnostic)]
#[allow(clippy::module_name_repetitions)]
pub enum ConstructionError {
	/// An opcode was installed a second time.
	#[error("Opcode ${opcode:02X} was installed twice")]
	#[diagnostic(
		code(w65816::duplicate_opcode),
		severity(Error),
		help("Every opcode can only be assigned to one addressing mode and operation.")
	)]
	DuplicateOpcode {
		/// The opcode that was installed again.
		opcode: u8,
	},

	/// An opcode was installed after a higher one.
	#[error("Opcode ${opcode:02X} was installed after opcode ${previous:02X}")]
	#[diagnostic(
		code(w65816::out_of_order_opcode),
		severity(Error),
		help("Install opcodes in strictly ascending order.")
	)]
	OutOfOrderOpcode {
		/// The opcode that was installed too late.
		opcode:   u8,
		/// The most recently installed opcode.
		previous: u8,
	},
}

/// Errors detected while dispatching an instruction.
#[derive(Error, Debug, Clone, Copy, Eq, PartialEq, Diagnostic)]
#[allow(clippy::module_name_repetitions)]
pub enum DispatchError {
	/// The opcode has no program at the requested width.
	#[error("Opcode ${opcode:02X} has no {width} program")]
	#[diagnostic(
		code(w65816::illegal_opcode),
		severity(Error),
		help("This opcode was never installed into the instruction table; the processor state was left untouched.")
	)]
	IllegalOpcode {
		/// The opcode that was fetched.
		opcode: u8,
		/// The width that was requested.
		width:  Width,
	},
}
