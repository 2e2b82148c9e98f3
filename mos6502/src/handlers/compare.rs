use crate::cpu::Cpu;
use crate::mode::Mode;
use crate::status::StatusFlag;

fn compare(cpu: &mut Cpu, register: u8, operand: u8) {
    let diff = register.wrapping_sub(operand);
    cpu.set_flag(StatusFlag::Carry, register >= operand);
    cpu.set_flag(StatusFlag::Zero, diff == 0);
    cpu.set_flag(StatusFlag::Negative, diff & 0x80 != 0);
}

/// Compare A with source
/// http://6502.org/tutorials/compare_instructions.html
/// Function: A-{adr}
/// Flags: N Z C
pub fn cmp(cpu: &mut Cpu, mode: Mode) -> u8 {
    let operand = cpu.operand_value(mode);
    compare(cpu, cpu.a, operand);
    0
}

/// Compare X with source
/// Function: X-{adr}
/// Flags: N Z C
pub fn cpx(cpu: &mut Cpu, mode: Mode) -> u8 {
    let operand = cpu.operand_value(mode);
    compare(cpu, cpu.x, operand);
    0
}

/// Compare Y with source
/// Function: Y-{adr}
/// Flags: N Z C
pub fn cpy(cpu: &mut Cpu, mode: Mode) -> u8 {
    let operand = cpu.operand_value(mode);
    compare(cpu, cpu.y, operand);
    0
}
