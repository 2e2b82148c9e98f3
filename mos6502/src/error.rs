/// Raised by [`crate::Cpu::tick`] when the fetched opcode byte has no entry
/// in the legal-opcode table. The core halts rather than fabricating
/// behavior for an unknown byte; it is up to the host to decide what a
/// decode fault means for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("illegal opcode ${opcode:02X} at ${pc:04X}")]
pub struct DecodeError {
    pub opcode: u8,
    pub pc: u16,
}
