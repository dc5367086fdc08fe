//! ALU ops, shifts/rotates, and increment/decrement (§4.4).

use super::{Cpu, StatusFlag};

#[derive(Clone, Copy)]
enum ShiftKind {
  Asl,
  Lsr,
  Rol,
  Ror,
}

/// Apply one shift/rotate step to `v`, returning the new value and the
/// bit that falls into carry.
fn shift_value(v: u8, kind: ShiftKind, carry_in: bool) -> (u8, bool) {
  match kind {
    ShiftKind::Asl => (v << 1, v & 0x80 != 0),
    ShiftKind::Lsr => (v >> 1, v & 0x01 != 0),
    ShiftKind::Rol => {
      let carry_out = v & 0x80 != 0;
      let mut result = v << 1;
      if carry_in {
        result |= 0x01;
      }
      (result, carry_out)
    }
    ShiftKind::Ror => {
      let carry_out = v & 0x01 != 0;
      let mut result = v >> 1;
      if carry_in {
        result |= 0x80;
      }
      (result, carry_out)
    }
  }
}

impl<'a> Cpu<'a> {
  /// ADC: `A ← A + M + C`. `V` is set from the sign-bit carry between the
  /// two operands and the result (6502.org/tutorials/vflag.html); `C` is
  /// the unsigned carry out of bit 7.
  pub(super) fn exec_adc(&mut self) {
    let m = self.load(self.ab);
    self.add_with_carry(m);
  }

  /// SBC: identical to ADC with `M` replaced by `¬M`.
  pub(super) fn exec_sbc(&mut self) {
    let m = !self.load(self.ab);
    self.add_with_carry(m);
  }

  fn add_with_carry(&mut self, m: u8) {
    let carry_in: u16 = if self.flag(StatusFlag::Carry) { 1 } else { 0 };
    let sum = self.a as u16 + m as u16 + carry_in;
    let result = sum as u8;
    let overflow = (self.a ^ result) & (m ^ result) & 0x80 != 0;
    self.set_flag(StatusFlag::Overflow, overflow);
    self.set_flag(StatusFlag::Carry, sum > 0xFF);
    self.a = result;
    self.set_value_flags(self.a);
  }

  pub(super) fn exec_and(&mut self) {
    self.a &= self.load(self.ab);
    self.set_value_flags(self.a);
  }

  pub(super) fn exec_eor(&mut self) {
    self.a ^= self.load(self.ab);
    self.set_value_flags(self.a);
  }

  pub(super) fn exec_ora(&mut self) {
    self.a |= self.load(self.ab);
    self.set_value_flags(self.a);
  }

  fn shift_accumulator(&mut self, kind: ShiftKind) {
    let (result, carry_out) = shift_value(self.a, kind, self.flag(StatusFlag::Carry));
    self.a = result;
    self.set_flag(StatusFlag::Carry, carry_out);
    self.set_value_flags(self.a);
  }

  /// Memory-mode shift/rotate: a 3-phase read-modify-write spanning
  /// `self.db` as scratch (read, shift, write-back).
  fn shift_memory(&mut self, phase: u8, kind: ShiftKind) {
    match phase {
      0 => self.db = self.load(self.ab),
      1 => {
        let (result, carry_out) = shift_value(self.db, kind, self.flag(StatusFlag::Carry));
        self.db = result;
        self.set_flag(StatusFlag::Carry, carry_out);
      }
      2 => {
        self.store(self.ab, self.db);
        self.set_value_flags(self.db);
      }
      _ => unreachable!("memory shift/rotate has 3 phases"),
    }
  }

  fn shift_or_rotate(&mut self, phase: u8, kind: ShiftKind) {
    if self.instr.mode == crate::opcodes::Mode::Imp {
      self.shift_accumulator(kind);
    } else {
      self.shift_memory(phase, kind);
    }
  }

  pub(super) fn exec_asl(&mut self, phase: u8) {
    self.shift_or_rotate(phase, ShiftKind::Asl);
  }

  pub(super) fn exec_lsr(&mut self, phase: u8) {
    self.shift_or_rotate(phase, ShiftKind::Lsr);
  }

  pub(super) fn exec_rol(&mut self, phase: u8) {
    self.shift_or_rotate(phase, ShiftKind::Rol);
  }

  pub(super) fn exec_ror(&mut self, phase: u8) {
    self.shift_or_rotate(phase, ShiftKind::Ror);
  }

  /// INC/DEC on memory: 3-phase read-modify-write, same shape as the
  /// memory shifts above.
  pub(super) fn exec_inc_mem(&mut self, phase: u8) {
    match phase {
      0 => self.db = self.load(self.ab),
      1 => self.db = self.db.wrapping_add(1),
      2 => {
        self.store(self.ab, self.db);
        self.set_value_flags(self.db);
      }
      _ => unreachable!("INC has 3 phases"),
    }
  }

  pub(super) fn exec_dec_mem(&mut self, phase: u8) {
    match phase {
      0 => self.db = self.load(self.ab),
      1 => self.db = self.db.wrapping_sub(1),
      2 => {
        self.store(self.ab, self.db);
        self.set_value_flags(self.db);
      }
      _ => unreachable!("DEC has 3 phases"),
    }
  }

  pub(super) fn exec_inx(&mut self) {
    self.x = self.x.wrapping_add(1);
    self.set_value_flags(self.x);
  }

  pub(super) fn exec_dex(&mut self) {
    self.x = self.x.wrapping_sub(1);
    self.set_value_flags(self.x);
  }

  pub(super) fn exec_iny(&mut self) {
    self.y = self.y.wrapping_add(1);
    self.set_value_flags(self.y);
  }

  pub(super) fn exec_dey(&mut self) {
    self.y = self.y.wrapping_sub(1);
    self.set_value_flags(self.y);
  }
}
