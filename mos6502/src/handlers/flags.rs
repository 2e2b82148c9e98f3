use crate::cpu::Cpu;
use crate::mode::Mode;
use crate::status::StatusFlag;

/// Clear Carry
/// Function: C:=0
pub fn clc(cpu: &mut Cpu, _mode: Mode) -> u8 {
    cpu.set_flag(StatusFlag::Carry, false);
    0
}

/// Set Carry
/// Function: C:=1
pub fn sec(cpu: &mut Cpu, _mode: Mode) -> u8 {
    cpu.set_flag(StatusFlag::Carry, true);
    0
}

/// Clear Decimal
/// Function: D:=0
pub fn cld(cpu: &mut Cpu, _mode: Mode) -> u8 {
    cpu.set_flag(StatusFlag::Decimal, false);
    0
}

/// Set Decimal
/// Function: D:=1
pub fn sed(cpu: &mut Cpu, _mode: Mode) -> u8 {
    cpu.set_flag(StatusFlag::Decimal, true);
    0
}

/// Clear Interrupt Disable
/// Function: I:=0
pub fn cli(cpu: &mut Cpu, _mode: Mode) -> u8 {
    cpu.set_flag(StatusFlag::InterruptDisable, false);
    0
}

/// Set Interrupt Disable
/// Function: I:=1
pub fn sei(cpu: &mut Cpu, _mode: Mode) -> u8 {
    cpu.set_flag(StatusFlag::InterruptDisable, true);
    0
}

/// Clear Overflow
/// Function: V:=0
pub fn clv(cpu: &mut Cpu, _mode: Mode) -> u8 {
    cpu.set_flag(StatusFlag::Overflow, false);
    0
}
