//! The decode table: a direct match over the documented legal 6502 opcode
//! bytes. Anything not listed here is a decode fault (see [`crate::error`]).

use crate::handlers::{arithmetic, branch, compare, flags, incdec, jump, load_store, logical,
                       misc, shift, stack, transfer};
use crate::mode::{Instruction, Mode};

/// A handler consumes the operand addressing already computed for this
/// instruction, mutates CPU/bus state, and returns the extra cycle count it
/// contributes (0 for most instructions).
pub type Handler = fn(&mut crate::cpu::Cpu, Mode) -> u8;

/// What the decode table hands back for one opcode byte: enough to drive
/// addressing, dispatch, and cycle accounting, plus enough to name the
/// instruction for tracing and page-cross-sensitivity lookups.
#[derive(Clone, Copy)]
pub struct InstructionInfo {
    pub instruction: Instruction,
    pub mode: Mode,
    pub cycles: u8,
    pub handler: Handler,
}

/// Builds the match arm for one opcode byte, naming the mnemonic/mode as
/// bare identifiers so the table below reads like the reference opcode
/// matrix it's transcribing.
macro_rules! opcode_table {
    ($opcode:expr, [ $({ $byte:literal, $instr:ident, $handler:path, $mode:ident, $cycles:literal }),* $(,)? ]) => {
        match $opcode {
            $(
                $byte => Some(InstructionInfo {
                    instruction: Instruction::$instr,
                    mode: Mode::$mode,
                    cycles: $cycles,
                    handler: $handler,
                }),
            )*
            _ => None,
        }
    };
}

/// Look up the decode entry for an opcode byte. `None` means the byte isn't
/// one of the ~151 documented legal opcodes; the caller surfaces that as a
/// [`crate::error::DecodeError`] rather than guessing at illegal-opcode
/// behavior.
#[rustfmt::skip]
pub fn decode(opcode: u8) -> Option<InstructionInfo> {
    opcode_table!(opcode, [
        { 0x00, Brk, jump::brk,            Implied,         7 },
        { 0x01, Ora, logical::ora,         IndexedIndirect, 6 },
        { 0x05, Ora, logical::ora,         ZeroPage,        3 },
        { 0x06, Asl, shift::asl,           ZeroPage,        5 },
        { 0x08, Php, stack::php,           Implied,         3 },
        { 0x09, Ora, logical::ora,         Immediate,       2 },
        { 0x0A, Asl, shift::asl,           Accumulator,     2 },
        { 0x0D, Ora, logical::ora,         Absolute,        4 },
        { 0x0E, Asl, shift::asl,           Absolute,        6 },
        { 0x10, Bpl, branch::bpl,          Relative,        2 },
        { 0x11, Ora, logical::ora,         IndirectIndexed, 5 },
        { 0x15, Ora, logical::ora,         ZeroPageX,       4 },
        { 0x16, Asl, shift::asl,           ZeroPageX,       6 },
        { 0x18, Clc, flags::clc,           Implied,         2 },
        { 0x19, Ora, logical::ora,         AbsoluteY,       4 },
        { 0x1D, Ora, logical::ora,         AbsoluteX,       4 },
        { 0x1E, Asl, shift::asl,           AbsoluteX,       7 },
        { 0x20, Jsr, jump::jsr,            Absolute,        6 },
        { 0x21, And, logical::and,         IndexedIndirect, 6 },
        { 0x24, Bit, logical::bit,         ZeroPage,        3 },
        { 0x25, And, logical::and,         ZeroPage,        3 },
        { 0x26, Rol, shift::rol,           ZeroPage,        5 },
        { 0x28, Plp, stack::plp,           Implied,         4 },
        { 0x29, And, logical::and,         Immediate,       2 },
        { 0x2A, Rol, shift::rol,           Accumulator,     2 },
        { 0x2C, Bit, logical::bit,         Absolute,        4 },
        { 0x2D, And, logical::and,         Absolute,        4 },
        { 0x2E, Rol, shift::rol,           Absolute,        6 },
        { 0x30, Bmi, branch::bmi,          Relative,        2 },
        { 0x31, And, logical::and,         IndirectIndexed, 5 },
        { 0x35, And, logical::and,         ZeroPageX,       4 },
        { 0x36, Rol, shift::rol,           ZeroPageX,       6 },
        { 0x38, Sec, flags::sec,           Implied,         2 },
        { 0x39, And, logical::and,         AbsoluteY,       4 },
        { 0x3D, And, logical::and,         AbsoluteX,       4 },
        { 0x3E, Rol, shift::rol,           AbsoluteX,       7 },
        { 0x40, Rti, jump::rti,            Implied,         6 },
        { 0x41, Eor, logical::eor,         IndexedIndirect, 6 },
        { 0x45, Eor, logical::eor,         ZeroPage,        3 },
        { 0x46, Lsr, shift::lsr,           ZeroPage,        5 },
        { 0x48, Pha, stack::pha,           Implied,         3 },
        { 0x49, Eor, logical::eor,         Immediate,       2 },
        { 0x4A, Lsr, shift::lsr,           Accumulator,     2 },
        { 0x4C, Jmp, jump::jmp,            Absolute,        3 },
        { 0x4D, Eor, logical::eor,         Absolute,        4 },
        { 0x4E, Lsr, shift::lsr,           Absolute,        6 },
        { 0x50, Bvc, branch::bvc,          Relative,        2 },
        { 0x51, Eor, logical::eor,         IndirectIndexed, 5 },
        { 0x55, Eor, logical::eor,         ZeroPageX,       4 },
        { 0x56, Lsr, shift::lsr,           ZeroPageX,       6 },
        { 0x58, Cli, flags::cli,           Implied,         2 },
        { 0x59, Eor, logical::eor,         AbsoluteY,       4 },
        { 0x5D, Eor, logical::eor,         AbsoluteX,       4 },
        { 0x5E, Lsr, shift::lsr,           AbsoluteX,       7 },
        { 0x60, Rts, jump::rts,            Implied,         6 },
        { 0x61, Adc, arithmetic::adc,      IndexedIndirect, 6 },
        { 0x65, Adc, arithmetic::adc,      ZeroPage,        3 },
        { 0x66, Ror, shift::ror,           ZeroPage,        5 },
        { 0x68, Pla, stack::pla,           Implied,         4 },
        { 0x69, Adc, arithmetic::adc,      Immediate,       2 },
        { 0x6A, Ror, shift::ror,           Accumulator,     2 },
        { 0x6C, Jmp, jump::jmp,            Indirect,        5 },
        { 0x6D, Adc, arithmetic::adc,      Absolute,        4 },
        { 0x6E, Ror, shift::ror,           Absolute,        6 },
        { 0x70, Bvs, branch::bvs,          Relative,        2 },
        { 0x71, Adc, arithmetic::adc,      IndirectIndexed, 5 },
        { 0x75, Adc, arithmetic::adc,      ZeroPageX,       4 },
        { 0x76, Ror, shift::ror,           ZeroPageX,       6 },
        { 0x78, Sei, flags::sei,           Implied,         2 },
        { 0x79, Adc, arithmetic::adc,      AbsoluteY,       4 },
        { 0x7D, Adc, arithmetic::adc,      AbsoluteX,       4 },
        { 0x7E, Ror, shift::ror,           AbsoluteX,       7 },
        { 0x81, Sta, load_store::sta,      IndexedIndirect, 6 },
        { 0x84, Sty, load_store::sty,      ZeroPage,        3 },
        { 0x85, Sta, load_store::sta,      ZeroPage,        3 },
        { 0x86, Stx, load_store::stx,      ZeroPage,        3 },
        { 0x88, Dey, incdec::dey,          Implied,         2 },
        { 0x8A, Txa, transfer::txa,        Implied,         2 },
        { 0x8C, Sty, load_store::sty,      Absolute,        4 },
        { 0x8D, Sta, load_store::sta,      Absolute,        4 },
        { 0x8E, Stx, load_store::stx,      Absolute,        4 },
        { 0x90, Bcc, branch::bcc,          Relative,        2 },
        { 0x91, Sta, load_store::sta,      IndirectIndexed, 6 },
        { 0x94, Sty, load_store::sty,      ZeroPageX,       4 },
        { 0x95, Sta, load_store::sta,      ZeroPageX,       4 },
        { 0x96, Stx, load_store::stx,      ZeroPageY,       4 },
        { 0x98, Tya, transfer::tya,        Implied,         2 },
        { 0x99, Sta, load_store::sta,      AbsoluteY,       5 },
        { 0x9A, Txs, transfer::txs,        Implied,         2 },
        { 0x9D, Sta, load_store::sta,      AbsoluteX,       5 },
        { 0xA0, Ldy, load_store::ldy,      Immediate,       2 },
        { 0xA1, Lda, load_store::lda,      IndexedIndirect, 6 },
        { 0xA2, Ldx, load_store::ldx,      Immediate,       2 },
        { 0xA4, Ldy, load_store::ldy,      ZeroPage,        3 },
        { 0xA5, Lda, load_store::lda,      ZeroPage,        3 },
        { 0xA6, Ldx, load_store::ldx,      ZeroPage,        3 },
        { 0xA8, Tay, transfer::tay,        Implied,         2 },
        { 0xA9, Lda, load_store::lda,      Immediate,       2 },
        { 0xAA, Tax, transfer::tax,        Implied,         2 },
        { 0xAC, Ldy, load_store::ldy,      Absolute,        4 },
        { 0xAD, Lda, load_store::lda,      Absolute,        4 },
        { 0xAE, Ldx, load_store::ldx,      Absolute,        4 },
        { 0xB0, Bcs, branch::bcs,          Relative,        2 },
        { 0xB1, Lda, load_store::lda,      IndirectIndexed, 5 },
        { 0xB4, Ldy, load_store::ldy,      ZeroPageX,       4 },
        { 0xB5, Lda, load_store::lda,      ZeroPageX,       4 },
        { 0xB6, Ldx, load_store::ldx,      ZeroPageY,       4 },
        { 0xB8, Clv, flags::clv,           Implied,         2 },
        { 0xB9, Lda, load_store::lda,      AbsoluteY,       4 },
        { 0xBA, Tsx, transfer::tsx,        Implied,         2 },
        { 0xBC, Ldy, load_store::ldy,      AbsoluteX,       4 },
        { 0xBD, Lda, load_store::lda,      AbsoluteX,       4 },
        { 0xBE, Ldx, load_store::ldx,      AbsoluteY,       4 },
        { 0xC0, Cpy, compare::cpy,         Immediate,       2 },
        { 0xC1, Cmp, compare::cmp,         IndexedIndirect, 6 },
        { 0xC4, Cpy, compare::cpy,         ZeroPage,        3 },
        { 0xC5, Cmp, compare::cmp,         ZeroPage,        3 },
        { 0xC6, Dec, incdec::dec,          ZeroPage,        5 },
        { 0xC8, Iny, incdec::iny,          Implied,         2 },
        { 0xC9, Cmp, compare::cmp,         Immediate,       2 },
        { 0xCA, Dex, incdec::dex,          Implied,         2 },
        { 0xCC, Cpy, compare::cpy,         Absolute,        4 },
        { 0xCD, Cmp, compare::cmp,         Absolute,        4 },
        { 0xCE, Dec, incdec::dec,          Absolute,        6 },
        { 0xD0, Bne, branch::bne,          Relative,        2 },
        { 0xD1, Cmp, compare::cmp,         IndirectIndexed, 5 },
        { 0xD5, Cmp, compare::cmp,         ZeroPageX,       4 },
        { 0xD6, Dec, incdec::dec,          ZeroPageX,       6 },
        { 0xD8, Cld, flags::cld,           Implied,         2 },
        { 0xD9, Cmp, compare::cmp,         AbsoluteY,       4 },
        { 0xDD, Cmp, compare::cmp,         AbsoluteX,       4 },
        { 0xDE, Dec, incdec::dec,          AbsoluteX,       7 },
        { 0xE0, Cpx, compare::cpx,         Immediate,       2 },
        { 0xE1, Sbc, arithmetic::sbc,      IndexedIndirect, 6 },
        { 0xE4, Cpx, compare::cpx,         ZeroPage,        3 },
        { 0xE5, Sbc, arithmetic::sbc,      ZeroPage,        3 },
        { 0xE6, Inc, incdec::inc,          ZeroPage,        5 },
        { 0xE8, Inx, incdec::inx,          Implied,         2 },
        { 0xE9, Sbc, arithmetic::sbc,      Immediate,       2 },
        { 0xEA, Nop, misc::nop,            Implied,         2 },
        { 0xEC, Cpx, compare::cpx,         Absolute,        4 },
        { 0xED, Sbc, arithmetic::sbc,      Absolute,        4 },
        { 0xEE, Inc, incdec::inc,          Absolute,        6 },
        { 0xF0, Beq, branch::beq,          Relative,        2 },
        { 0xF1, Sbc, arithmetic::sbc,      IndirectIndexed, 5 },
        { 0xF5, Sbc, arithmetic::sbc,      ZeroPageX,       4 },
        { 0xF6, Inc, incdec::inc,          ZeroPageX,       6 },
        { 0xF8, Sed, flags::sed,           Implied,         2 },
        { 0xF9, Sbc, arithmetic::sbc,      AbsoluteY,       4 },
        { 0xFD, Sbc, arithmetic::sbc,      AbsoluteX,       4 },
        { 0xFE, Inc, incdec::inc,          AbsoluteX,       7 },
    ])
}
