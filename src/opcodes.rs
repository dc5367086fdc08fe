//! The opcode decode table: a sparse mapping from opcode byte to the
//! descriptor the addressing engine and micro-op executor need to run it.
//!
//! The uop and mode tags are closed sums (see DESIGN NOTES: "Tagged
//! variants") so the compiler enforces exhaustive handling everywhere they
//! are matched.

use std::sync::OnceLock;

/// One of the micro-operations the executor knows how to run. Branch,
/// jump, compare, interrupt, and BCD operations are not members of this
/// sum; they are out of scope for this revision.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Uop {
  Nop,
  Hlt,
  Lda,
  Ldx,
  Ldy,
  Sta,
  Stx,
  Sty,
  Tax,
  Tay,
  Tsx,
  Txa,
  Txs,
  Tya,
  Pha,
  Pla,
  Php,
  Plp,
  Dec,
  Dex,
  Dey,
  Inc,
  Inx,
  Iny,
  Adc,
  Sbc,
  And,
  Eor,
  Ora,
  Asl,
  Lsr,
  Rol,
  Ror,
  Clc,
  Cld,
  Cli,
  Clv,
  Sec,
  Sed,
  Sei,
}

/// Addressing mode tag. See `crate::cpu::addressing` for the state machine
/// each of these drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
  /// Implied: no operand bytes, uop runs on the register file directly.
  Imp,
  /// Immediate: the operand byte itself is the value.
  Imm,
  /// Zero page.
  Z,
  /// Zero page, X-indexed.
  Zx,
  /// Zero page, Y-indexed.
  Zy,
  /// Absolute.
  Abs,
  /// Absolute, X-indexed.
  AbsX,
  /// Absolute, Y-indexed.
  AbsY,
  /// (Indirect, X) — indexed before the indirection.
  IndX,
  /// (Indirect), Y — indexed after the indirection.
  IndY,
}

/// A single decode-table entry. Copy because it is read out of a static
/// table and stashed into the per-instruction record by value every fetch.
#[derive(Debug, Clone, Copy)]
pub struct OpDescriptor {
  pub uop: Uop,
  pub mode: Mode,
  /// Base cycle count; the addressing engine may add one at runtime for
  /// `xpage_stall` instructions that actually cross a page.
  pub ncycles: u8,
  /// Pays an extra cycle only when indexing crosses a page boundary.
  pub xpage_stall: bool,
  /// Unconditionally pays the extra indexing cycle (indexed stores,
  /// indexed RMW); `ncycles` already includes it.
  pub always_stall: bool,
  /// Read-modify-write: the executor spans three terminal sub-cycles
  /// instead of completing in one.
  pub rw: bool,
}

const fn op(
  uop: Uop,
  mode: Mode,
  ncycles: u8,
  xpage_stall: bool,
  always_stall: bool,
  rw: bool,
) -> OpDescriptor {
  OpDescriptor {
    uop,
    mode,
    ncycles,
    xpage_stall,
    always_stall,
    rw,
  }
}

macro_rules! decode_table {
  ([$({ $byte:expr, $uop:ident, $mode:expr, $ncycles:expr, $xpage:expr, $always:expr, $rw:expr }),* $(,)?]) => {{
    let mut table: [Option<OpDescriptor>; 256] = [None; 256];
    $(
      table[$byte as usize] = Some(op(Uop::$uop, $mode, $ncycles, $xpage, $always, $rw));
    )*
    table
  }};
}

fn build_decode_table() -> [Option<OpDescriptor>; 256] {
  use Mode::*;
  decode_table!([
    // ADC
    { 0x61, Adc, IndX, 6, false, false, false },
    { 0x65, Adc, Z,    3, false, false, false },
    { 0x69, Adc, Imm,  2, false, false, false },
    { 0x6D, Adc, Abs,  4, false, false, false },
    { 0x71, Adc, IndY, 5, true,  false, false },
    { 0x75, Adc, Zx,   4, false, false, false },
    { 0x79, Adc, AbsY, 4, true,  false, false },
    { 0x7D, Adc, AbsX, 4, true,  false, false },
    // SBC
    { 0xE1, Sbc, IndX, 6, false, false, false },
    { 0xE5, Sbc, Z,    3, false, false, false },
    { 0xE9, Sbc, Imm,  2, false, false, false },
    { 0xED, Sbc, Abs,  4, false, false, false },
    { 0xF1, Sbc, IndY, 5, true,  false, false },
    { 0xF5, Sbc, Zx,   4, false, false, false },
    { 0xF9, Sbc, AbsY, 4, true,  false, false },
    { 0xFD, Sbc, AbsX, 4, true,  false, false },
    // AND
    { 0x21, And, IndX, 6, false, false, false },
    { 0x25, And, Z,    3, false, false, false },
    { 0x29, And, Imm,  2, false, false, false },
    { 0x2D, And, Abs,  4, false, false, false },
    { 0x31, And, IndY, 5, true,  false, false },
    { 0x35, And, Zx,   4, false, false, false },
    { 0x39, And, AbsY, 4, true,  false, false },
    { 0x3D, And, AbsX, 4, true,  false, false },
    // EOR
    { 0x41, Eor, IndX, 6, false, false, false },
    { 0x45, Eor, Z,    3, false, false, false },
    { 0x49, Eor, Imm,  2, false, false, false },
    { 0x4D, Eor, Abs,  4, false, false, false },
    { 0x51, Eor, IndY, 5, true,  false, false },
    { 0x55, Eor, Zx,   4, false, false, false },
    { 0x59, Eor, AbsY, 4, true,  false, false },
    { 0x5D, Eor, AbsX, 4, true,  false, false },
    // ORA
    { 0x01, Ora, IndX, 6, false, false, false },
    { 0x05, Ora, Z,    3, false, false, false },
    { 0x09, Ora, Imm,  2, false, false, false },
    { 0x0D, Ora, Abs,  4, false, false, false },
    { 0x11, Ora, IndY, 5, true,  false, false },
    { 0x15, Ora, Zx,   4, false, false, false },
    { 0x19, Ora, AbsY, 4, true,  false, false },
    { 0x1D, Ora, AbsX, 4, true,  false, false },
    // LDA
    { 0xA1, Lda, IndX, 6, false, false, false },
    { 0xA5, Lda, Z,    3, false, false, false },
    { 0xA9, Lda, Imm,  2, false, false, false },
    { 0xAD, Lda, Abs,  4, false, false, false },
    { 0xB1, Lda, IndY, 5, true,  false, false },
    { 0xB5, Lda, Zx,   4, false, false, false },
    { 0xB9, Lda, AbsY, 4, true,  false, false },
    { 0xBD, Lda, AbsX, 4, true,  false, false },
    // LDX
    { 0xA2, Ldx, Imm,  2, false, false, false },
    { 0xA6, Ldx, Z,    3, false, false, false },
    { 0xAE, Ldx, Abs,  4, false, false, false },
    { 0xB6, Ldx, Zy,   4, false, false, false },
    { 0xBE, Ldx, AbsY, 4, true,  false, false },
    // LDY
    { 0xA0, Ldy, Imm,  2, false, false, false },
    { 0xA4, Ldy, Z,    3, false, false, false },
    { 0xAC, Ldy, Abs,  4, false, false, false },
    { 0xB4, Ldy, Zx,   4, false, false, false },
    { 0xBC, Ldy, AbsX, 4, true,  false, false },
    // STA
    { 0x81, Sta, IndX, 6, false, false, false },
    { 0x85, Sta, Z,    3, false, false, false },
    { 0x8D, Sta, Abs,  4, false, false, false },
    { 0x91, Sta, IndY, 6, false, true,  false },
    { 0x95, Sta, Zx,   4, false, false, false },
    { 0x99, Sta, AbsY, 5, false, true,  false },
    { 0x9D, Sta, AbsX, 5, false, true,  false },
    // STX / STY
    { 0x86, Stx, Z,    3, false, false, false },
    { 0x8E, Stx, Abs,  4, false, false, false },
    { 0x96, Stx, Zy,   4, false, false, false },
    { 0x84, Sty, Z,    3, false, false, false },
    { 0x8C, Sty, Abs,  4, false, false, false },
    { 0x94, Sty, Zx,   4, false, false, false },
    // Transfers
    { 0xAA, Tax, Imp, 2, false, false, false },
    { 0xA8, Tay, Imp, 2, false, false, false },
    { 0xBA, Tsx, Imp, 2, false, false, false },
    { 0x8A, Txa, Imp, 2, false, false, false },
    { 0x9A, Txs, Imp, 2, false, false, false },
    { 0x98, Tya, Imp, 2, false, false, false },
    // Stack ops
    { 0x48, Pha, Imp, 3, false, false, false },
    { 0x68, Pla, Imp, 4, false, false, false },
    { 0x08, Php, Imp, 3, false, false, false },
    { 0x28, Plp, Imp, 4, false, false, false },
    // INC/DEC memory
    { 0xE6, Inc, Z,    5, false, false, true },
    { 0xF6, Inc, Zx,   6, false, false, true },
    { 0xEE, Inc, Abs,  6, false, false, true },
    { 0xFE, Inc, AbsX, 7, false, true,  true },
    { 0xC6, Dec, Z,    5, false, false, true },
    { 0xD6, Dec, Zx,   6, false, false, true },
    { 0xCE, Dec, Abs,  6, false, false, true },
    { 0xDE, Dec, AbsX, 7, false, true,  true },
    // INX/DEX/INY/DEY
    { 0xE8, Inx, Imp, 2, false, false, false },
    { 0xCA, Dex, Imp, 2, false, false, false },
    { 0xC8, Iny, Imp, 2, false, false, false },
    { 0x88, Dey, Imp, 2, false, false, false },
    // ASL/LSR/ROL/ROR
    { 0x0A, Asl, Imp,  2, false, false, false },
    { 0x06, Asl, Z,    5, false, false, true },
    { 0x16, Asl, Zx,   6, false, false, true },
    { 0x0E, Asl, Abs,  6, false, false, true },
    { 0x1E, Asl, AbsX, 7, false, true,  true },
    { 0x4A, Lsr, Imp,  2, false, false, false },
    { 0x46, Lsr, Z,    5, false, false, true },
    { 0x56, Lsr, Zx,   6, false, false, true },
    { 0x4E, Lsr, Abs,  6, false, false, true },
    { 0x5E, Lsr, AbsX, 7, false, true,  true },
    { 0x2A, Rol, Imp,  2, false, false, false },
    { 0x26, Rol, Z,    5, false, false, true },
    { 0x36, Rol, Zx,   6, false, false, true },
    { 0x2E, Rol, Abs,  6, false, false, true },
    { 0x3E, Rol, AbsX, 7, false, true,  true },
    { 0x6A, Ror, Imp,  2, false, false, false },
    { 0x66, Ror, Z,    5, false, false, true },
    { 0x76, Ror, Zx,   6, false, false, true },
    { 0x6E, Ror, Abs,  6, false, false, true },
    { 0x7E, Ror, AbsX, 7, false, true,  true },
    // Flag ops
    { 0x18, Clc, Imp, 2, false, false, false },
    { 0x38, Sec, Imp, 2, false, false, false },
    { 0x58, Cli, Imp, 2, false, false, false },
    { 0x78, Sei, Imp, 2, false, false, false },
    { 0xB8, Clv, Imp, 2, false, false, false },
    { 0xD8, Cld, Imp, 2, false, false, false },
    { 0xF8, Sed, Imp, 2, false, false, false },
    // NOP
    { 0xEA, Nop, Imp, 2, false, false, false },
    // KIL/JAM — twelve undocumented halt encodings, one cycle each.
    { 0x02, Hlt, Imp, 1, false, false, false },
    { 0x12, Hlt, Imp, 1, false, false, false },
    { 0x22, Hlt, Imp, 1, false, false, false },
    { 0x32, Hlt, Imp, 1, false, false, false },
    { 0x42, Hlt, Imp, 1, false, false, false },
    { 0x52, Hlt, Imp, 1, false, false, false },
    { 0x62, Hlt, Imp, 1, false, false, false },
    { 0x72, Hlt, Imp, 1, false, false, false },
    { 0x92, Hlt, Imp, 1, false, false, false },
    { 0xB2, Hlt, Imp, 1, false, false, false },
    { 0xD2, Hlt, Imp, 1, false, false, false },
    { 0xF2, Hlt, Imp, 1, false, false, false },
  ])
}

static DECODE_TABLE: OnceLock<[Option<OpDescriptor>; 256]> = OnceLock::new();

/// The 256-entry sparse decode table. Unpopulated entries mean "fatal
/// unimplemented instruction" if ever fetched; see `crate::fatal`.
pub fn decode_table() -> &'static [Option<OpDescriptor>; 256] {
  DECODE_TABLE.get_or_init(build_decode_table)
}
