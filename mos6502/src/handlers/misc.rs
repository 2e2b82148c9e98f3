use crate::cpu::Cpu;
use crate::mode::Mode;

/// No operation. Implied addressing only; no operand is fetched.
/// Function:
/// Flags:
pub fn nop(_cpu: &mut Cpu, _mode: Mode) -> u8 {
    0
}
