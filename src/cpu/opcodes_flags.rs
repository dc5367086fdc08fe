//! Flag-register ops, NOP, and HLT (§4.4, §6).

use super::{Cpu, StatusFlag};
use crate::fatal::fatal;

impl<'a> Cpu<'a> {
  /// Function: `C := 0`. Flags: C.
  pub(super) fn exec_clc(&mut self) {
    self.set_flag(StatusFlag::Carry, false);
  }

  /// Function: `C := 1`. Flags: C.
  pub(super) fn exec_sec(&mut self) {
    self.set_flag(StatusFlag::Carry, true);
  }

  /// Function: `I := 0`. Flags: I.
  pub(super) fn exec_cli(&mut self) {
    self.set_flag(StatusFlag::InterruptDisable, false);
  }

  /// Function: `I := 1`. Flags: I.
  pub(super) fn exec_sei(&mut self) {
    self.set_flag(StatusFlag::InterruptDisable, true);
  }

  /// Function: `V := 0`. Flags: V.
  pub(super) fn exec_clv(&mut self) {
    self.set_flag(StatusFlag::Overflow, false);
  }

  /// Decimal mode is out of scope; encountering CLD or SED is a contract
  /// violation in a ROM written for this core rather than a recoverable
  /// runtime condition.
  pub(super) fn exec_cld(&mut self) {
    fatal!("CLD: decimal mode is not supported");
  }

  pub(super) fn exec_sed(&mut self) {
    fatal!("SED: decimal mode is not supported");
  }

  pub(super) fn exec_hlt(&mut self) {
    self.halted = true;
  }
}
