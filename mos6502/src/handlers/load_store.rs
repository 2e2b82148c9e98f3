use crate::cpu::Cpu;
use crate::mode::Mode;

/// Load the value into register A
/// Function: A:={adr}
/// Flags: N Z
pub fn lda(cpu: &mut Cpu, mode: Mode) -> u8 {
    cpu.a = cpu.operand_value(mode);
    cpu.update_zero_and_negative(cpu.a);
    0
}

/// Store register A at address
/// Function: {adr}:=A
/// Flags:
pub fn sta(cpu: &mut Cpu, _mode: Mode) -> u8 {
    cpu.write_bus(cpu.addr_absolute, cpu.a);
    0
}

/// Load register X with the value
/// Function: X:={adr}
/// Flags: N Z
pub fn ldx(cpu: &mut Cpu, mode: Mode) -> u8 {
    cpu.x = cpu.operand_value(mode);
    cpu.update_zero_and_negative(cpu.x);
    0
}

/// Store register X at address
/// Function: {adr}:=X
/// Flags:
pub fn stx(cpu: &mut Cpu, _mode: Mode) -> u8 {
    cpu.write_bus(cpu.addr_absolute, cpu.x);
    0
}

/// Load register Y with the value
/// Function: Y:={adr}
/// Flags: N Z
pub fn ldy(cpu: &mut Cpu, mode: Mode) -> u8 {
    cpu.y = cpu.operand_value(mode);
    cpu.update_zero_and_negative(cpu.y);
    0
}

/// Store register Y at address
/// Function: {adr}:=Y
/// Flags:
pub fn sty(cpu: &mut Cpu, _mode: Mode) -> u8 {
    cpu.write_bus(cpu.addr_absolute, cpu.y);
    0
}
