//! Cycle-accurate WDC 65816 micro-op programs.
//!
//! Every opcode of the 65816 is compiled ahead of time into a program of micro-ops, each of which is one bus cycle or
//! an internal step. All programs live in one shared store; an [`InstructionTable`] maps each opcode and width to the
//! start of its program and the operation it performs. Programs are generated per addressing mode by the
//! [`generator`] library and deduplicated by the [`ProgramBuilder`]. At run time, [`dispatch`] walks a program
//! against a [`Bus`] and an [`Executor`] supplied by the emulator.

#![deny(missing_docs)]
#![allow(non_upper_case_globals)]

#[macro_use]
mod log;

pub mod dispatch;
mod error;
pub mod generator;
pub mod micro_op;
pub mod operation;
pub mod table;

pub use dispatch::{Buffer, Bus, Completion, Executor, Registers, State, dispatch};
pub use error::{ConstructionError, DispatchError};
pub use generator::AddressingMode;
pub use micro_op::{AddressSpace, BusCycle, Index, Internal, MicroOp};
pub use operation::{AccessType, Operation, Width};
pub use table::{Assignment, Instruction, InstructionTable, ProgramBuilder, Statistics, build_table, instruction_table};
