//! Loads, stores, register transfers, and stack ops (§4.4).

use super::{Cpu, StatusFlag};

impl<'a> Cpu<'a> {
  pub(super) fn exec_lda(&mut self) {
    self.a = self.load(self.ab);
    self.set_value_flags(self.a);
  }

  pub(super) fn exec_ldx(&mut self) {
    self.x = self.load(self.ab);
    self.set_value_flags(self.x);
  }

  pub(super) fn exec_ldy(&mut self) {
    self.y = self.load(self.ab);
    self.set_value_flags(self.y);
  }

  pub(super) fn exec_sta(&mut self) {
    self.store(self.ab, self.a);
  }

  pub(super) fn exec_stx(&mut self) {
    self.store(self.ab, self.x);
  }

  pub(super) fn exec_sty(&mut self) {
    self.store(self.ab, self.y);
  }

  pub(super) fn exec_tax(&mut self) {
    self.x = self.a;
    self.set_value_flags(self.x);
  }

  pub(super) fn exec_tay(&mut self) {
    self.y = self.a;
    self.set_value_flags(self.y);
  }

  pub(super) fn exec_tsx(&mut self) {
    self.x = self.sp;
    self.set_value_flags(self.x);
  }

  pub(super) fn exec_txa(&mut self) {
    self.a = self.x;
    self.set_value_flags(self.a);
  }

  /// `SP ← X`. Unlike the other five transfers this does not touch Z/N
  /// (the stack pointer feeding straight into the flags would make every
  /// push/pull sequence flag-dirty).
  pub(super) fn exec_txs(&mut self) {
    self.sp = self.x;
  }

  pub(super) fn exec_tya(&mut self) {
    self.a = self.y;
    self.set_value_flags(self.a);
  }

  fn stack_address(&self) -> u16 {
    0x0100 | self.sp as u16
  }

  /// PHA: phase 0 latches the stack address, phase 1 writes A and
  /// decrements SP.
  pub(super) fn exec_pha(&mut self, phase: u8) {
    match phase {
      0 => self.ab = self.stack_address(),
      1 => {
        self.store(self.ab, self.a);
        self.sp = self.sp.wrapping_sub(1);
      }
      _ => unreachable!("PHA has 2 phases"),
    }
  }

  /// PHP: same shape as PHA, but the byte written always has B and U set
  /// regardless of their live value in P.
  pub(super) fn exec_php(&mut self, phase: u8) {
    match phase {
      0 => self.ab = self.stack_address(),
      1 => {
        let pushed = self.p | StatusFlag::Break as u8 | StatusFlag::Unused as u8;
        self.store(self.ab, pushed);
        self.sp = self.sp.wrapping_sub(1);
      }
      _ => unreachable!("PHP has 2 phases"),
    }
  }

  /// PLA: increment SP, latch its new address, then load into A.
  pub(super) fn exec_pla(&mut self, phase: u8) {
    match phase {
      0 => self.sp = self.sp.wrapping_add(1),
      1 => self.ab = self.stack_address(),
      2 => {
        self.a = self.load(self.ab);
        self.set_value_flags(self.a);
      }
      _ => unreachable!("PLA has 3 phases"),
    }
  }

  /// PLP: `P ← (P ∧ (B|U)) ∨ (read ∧ ¬(B|U))` — the pulled byte's B and U
  /// bits are discarded in favour of whatever was already live in P.
  pub(super) fn exec_plp(&mut self, phase: u8) {
    match phase {
      0 => self.sp = self.sp.wrapping_add(1),
      1 => self.ab = self.stack_address(),
      2 => {
        let keep_mask = StatusFlag::Break as u8 | StatusFlag::Unused as u8;
        let read = self.load(self.ab);
        self.p = (self.p & keep_mask) | (read & !keep_mask);
      }
      _ => unreachable!("PLP has 3 phases"),
    }
  }
}
