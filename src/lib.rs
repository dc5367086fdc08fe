// `Instruction.rw` is carried on every record per the data model but this
// control loop derives the same information from `phases`; keep the field
// for state-introspection fidelity without a dead-code warning.
#![allow(dead_code)]
// Clippy rules to disable.
#![allow(clippy::new_without_default)]

pub mod bus;
pub mod cpu;
pub(crate) mod fatal;
pub mod opcodes;

pub use bus::{MmioHandler, RegionInfo};
pub use cpu::{Cpu, StatusFlag};
pub use opcodes::{Mode, OpDescriptor, Uop};
