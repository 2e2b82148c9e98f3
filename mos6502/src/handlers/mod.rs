//! Instruction handlers, one module per family, mirroring the addressing
//! mode/mnemonic split used throughout the decode table.

pub mod arithmetic;
pub mod branch;
pub mod compare;
pub mod flags;
pub mod incdec;
pub mod jump;
pub mod load_store;
pub mod logical;
pub mod misc;
pub mod shift;
pub mod stack;
pub mod transfer;

use crate::mode::Instruction;

/// Whether a page crossing during addressing costs this instruction an
/// extra cycle. Stores and read-modify-write instructions always run the
/// same fixed number of cycles regardless of the address computed, so they
/// are excluded here even though their addressing modes can still cross a
/// page boundary.
pub(crate) fn is_page_cross_sensitive(instruction: Instruction) -> bool {
    use Instruction::*;
    matches!(
        instruction,
        Lda | Ldx | Ldy | And | Ora | Eor | Adc | Sbc | Cmp
    )
}
