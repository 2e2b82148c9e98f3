use crate::cpu::Cpu;
use crate::mode::Mode;

/// Increment memory
/// Function: {adr}:={adr}+1
/// Flags: N Z
pub fn inc(cpu: &mut Cpu, mode: Mode) -> u8 {
    let result = cpu.operand_value(mode).wrapping_add(1);
    cpu.update_zero_and_negative(result);
    cpu.store_result(mode, result);
    0
}

/// Decrement memory
/// Function: {adr}:={adr}-1
/// Flags: N Z
pub fn dec(cpu: &mut Cpu, mode: Mode) -> u8 {
    let result = cpu.operand_value(mode).wrapping_sub(1);
    cpu.update_zero_and_negative(result);
    cpu.store_result(mode, result);
    0
}

/// Increment X
/// Function: X:=X+1
/// Flags: N Z
pub fn inx(cpu: &mut Cpu, _mode: Mode) -> u8 {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.update_zero_and_negative(cpu.x);
    0
}

/// Decrement X
/// Function: X:=X-1
/// Flags: N Z
pub fn dex(cpu: &mut Cpu, _mode: Mode) -> u8 {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.update_zero_and_negative(cpu.x);
    0
}

/// Increment Y
/// Function: Y:=Y+1
/// Flags: N Z
pub fn iny(cpu: &mut Cpu, _mode: Mode) -> u8 {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.update_zero_and_negative(cpu.y);
    0
}

/// Decrement Y
/// Function: Y:=Y-1
/// Flags: N Z
pub fn dey(cpu: &mut Cpu, _mode: Mode) -> u8 {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.update_zero_and_negative(cpu.y);
    0
}
