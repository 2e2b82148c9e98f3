use crate::cpu::Cpu;
use crate::mode::Mode;

/// Transfer A to X
/// Function: X:=A
/// Flags: N Z
pub fn tax(cpu: &mut Cpu, _mode: Mode) -> u8 {
    cpu.x = cpu.a;
    cpu.update_zero_and_negative(cpu.x);
    0
}

/// Transfer X to A
/// Function: A:=X
/// Flags: N Z
pub fn txa(cpu: &mut Cpu, _mode: Mode) -> u8 {
    cpu.a = cpu.x;
    cpu.update_zero_and_negative(cpu.a);
    0
}

/// Transfer A to Y
/// Function: Y:=A
/// Flags: N Z
pub fn tay(cpu: &mut Cpu, _mode: Mode) -> u8 {
    cpu.y = cpu.a;
    cpu.update_zero_and_negative(cpu.y);
    0
}

/// Transfer Y to A
/// Function: A:=Y
/// Flags: N Z
pub fn tya(cpu: &mut Cpu, _mode: Mode) -> u8 {
    cpu.a = cpu.y;
    cpu.update_zero_and_negative(cpu.a);
    0
}

/// Transfer SP to X
/// Function: X:=SP
/// Flags: N Z
pub fn tsx(cpu: &mut Cpu, _mode: Mode) -> u8 {
    cpu.x = cpu.sp;
    cpu.update_zero_and_negative(cpu.x);
    0
}

/// Transfer X to SP
/// Function: SP:=X
/// Flags:
pub fn txs(cpu: &mut Cpu, _mode: Mode) -> u8 {
    cpu.sp = cpu.x;
    0
}
