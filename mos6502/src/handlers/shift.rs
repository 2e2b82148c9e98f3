use crate::cpu::Cpu;
use crate::mode::Mode;
use crate::status::StatusFlag;

/// Arithmetic shift left. Operates on A for Accumulator mode, else on
/// memory (read-modify-write).
/// Function: {adr}:={adr}*2
/// Flags: N Z C
pub fn asl(cpu: &mut Cpu, mode: Mode) -> u8 {
    let value = cpu.operand_value(mode);
    let result = value << 1;
    cpu.set_flag(StatusFlag::Carry, value & 0b1000_0000 != 0);
    cpu.update_zero_and_negative(result);
    cpu.store_result(mode, result);
    0
}

/// Logical shift right
/// Function: {adr}:={adr}/2
/// Flags: N Z C
pub fn lsr(cpu: &mut Cpu, mode: Mode) -> u8 {
    let value = cpu.operand_value(mode);
    let result = value >> 1;
    cpu.set_flag(StatusFlag::Carry, value & 0b0000_0001 != 0);
    cpu.update_zero_and_negative(result);
    cpu.store_result(mode, result);
    0
}

/// Rotate left: the old carry becomes bit 0, bit 7 becomes the new carry.
/// Function: {adr}:={adr}*2+C
/// Flags: N Z C
pub fn rol(cpu: &mut Cpu, mode: Mode) -> u8 {
    let value = cpu.operand_value(mode);
    let carry_in = cpu.get_flag(StatusFlag::Carry) as u8;
    let result = (value << 1) | carry_in;
    cpu.set_flag(StatusFlag::Carry, value & 0b1000_0000 != 0);
    cpu.update_zero_and_negative(result);
    cpu.store_result(mode, result);
    0
}

/// Rotate right: the old carry becomes bit 7, bit 0 becomes the new carry.
/// Function: {adr}:={adr}/2+C*128
/// Flags: N Z C
pub fn ror(cpu: &mut Cpu, mode: Mode) -> u8 {
    let value = cpu.operand_value(mode);
    let carry_in = cpu.get_flag(StatusFlag::Carry) as u8;
    let result = (value >> 1) | (carry_in << 7);
    cpu.set_flag(StatusFlag::Carry, value & 0b0000_0001 != 0);
    cpu.update_zero_and_negative(result);
    cpu.store_result(mode, result);
    0
}
