//! Micro-op phase dispatch (§4.4). `phase_count` tells the control loop
//! how many terminal sub-cycles a uop needs; `run_uop_phase` runs one of
//! them.

use super::Cpu;
use crate::opcodes::{Mode, Uop};

/// Number of distinct action phases a uop needs, gating the `remaining <
/// phases` test in `Cpu::tick`.
pub(crate) fn phase_count(uop: Uop, mode: Mode) -> u8 {
  match uop {
    Uop::Asl | Uop::Lsr | Uop::Rol | Uop::Ror if mode == Mode::Imp => 1,
    Uop::Asl | Uop::Lsr | Uop::Rol | Uop::Ror | Uop::Inc | Uop::Dec => 3,
    Uop::Pha | Uop::Php => 2,
    Uop::Pla | Uop::Plp => 3,
    _ => 1,
  }
}

impl<'a> Cpu<'a> {
  pub(crate) fn run_uop_phase(&mut self, phase: u8) {
    match self.instr.uop {
      Uop::Nop => {}
      Uop::Hlt => self.exec_hlt(),
      Uop::Lda => self.exec_lda(),
      Uop::Ldx => self.exec_ldx(),
      Uop::Ldy => self.exec_ldy(),
      Uop::Sta => self.exec_sta(),
      Uop::Stx => self.exec_stx(),
      Uop::Sty => self.exec_sty(),
      Uop::Tax => self.exec_tax(),
      Uop::Tay => self.exec_tay(),
      Uop::Tsx => self.exec_tsx(),
      Uop::Txa => self.exec_txa(),
      Uop::Txs => self.exec_txs(),
      Uop::Tya => self.exec_tya(),
      Uop::Pha => self.exec_pha(phase),
      Uop::Pla => self.exec_pla(phase),
      Uop::Php => self.exec_php(phase),
      Uop::Plp => self.exec_plp(phase),
      Uop::Dec => self.exec_dec_mem(phase),
      Uop::Dex => self.exec_dex(),
      Uop::Dey => self.exec_dey(),
      Uop::Inc => self.exec_inc_mem(phase),
      Uop::Inx => self.exec_inx(),
      Uop::Iny => self.exec_iny(),
      Uop::Adc => self.exec_adc(),
      Uop::Sbc => self.exec_sbc(),
      Uop::And => self.exec_and(),
      Uop::Eor => self.exec_eor(),
      Uop::Ora => self.exec_ora(),
      Uop::Asl => self.exec_asl(phase),
      Uop::Lsr => self.exec_lsr(phase),
      Uop::Rol => self.exec_rol(phase),
      Uop::Ror => self.exec_ror(phase),
      Uop::Clc => self.exec_clc(),
      Uop::Cld => self.exec_cld(),
      Uop::Cli => self.exec_cli(),
      Uop::Clv => self.exec_clv(),
      Uop::Sec => self.exec_sec(),
      Uop::Sed => self.exec_sed(),
      Uop::Sei => self.exec_sei(),
    }
  }
}
