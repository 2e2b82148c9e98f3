use crate::cpu::Cpu;
use crate::mode::Mode;

/// Apply the logical "or" operator on the accumulator.
/// Function: A:=A or {adr}
/// Flags: N Z
pub fn ora(cpu: &mut Cpu, mode: Mode) -> u8 {
    cpu.a |= cpu.operand_value(mode);
    cpu.update_zero_and_negative(cpu.a);
    0
}

/// Apply the logical "and" operator on the accumulator.
/// Function: A:=A&{adr}
/// Flags: N Z
pub fn and(cpu: &mut Cpu, mode: Mode) -> u8 {
    cpu.a &= cpu.operand_value(mode);
    cpu.update_zero_and_negative(cpu.a);
    0
}

/// Logical Exclusive OR
/// Function: A:=A exor {adr}
/// Flags: N Z
pub fn eor(cpu: &mut Cpu, mode: Mode) -> u8 {
    cpu.a ^= cpu.operand_value(mode);
    cpu.update_zero_and_negative(cpu.a);
    0
}

/// Bit test: AND the operand into a scratch value without storing it, to
/// inspect its top two bits ahead of a branch.
/// Function: N:=b7 V:=b6 Z:=A&{adr}
/// Flags: N V Z
pub fn bit(cpu: &mut Cpu, mode: Mode) -> u8 {
    let operand = cpu.operand_value(mode);
    cpu.set_flag(crate::StatusFlag::Negative, operand & 0b1000_0000 != 0);
    cpu.set_flag(crate::StatusFlag::Overflow, operand & 0b0100_0000 != 0);
    cpu.set_flag(crate::StatusFlag::Zero, cpu.a & operand == 0);
    0
}
