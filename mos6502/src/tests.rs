use crate::status::StatusFlag;
use crate::test_helpers::{cpu_with_program, run_instructions, run_one_instruction, RamBus};
use crate::Cpu;

fn flag(cpu: &Cpu, f: StatusFlag) -> bool {
    cpu.p & f as u8 != 0
}

// --- End-to-end scenarios from the spec -----------------------------------

#[test]
fn lda_immediate_then_adc_immediate() {
    let mut cpu = cpu_with_program(0x8000, &[0xA9, 0x01, 0x69, 0x02, 0x00]);
    run_instructions(&mut cpu, 2);
    assert_eq!(cpu.a, 0x03);
    assert!(!flag(&cpu, StatusFlag::Carry));
    assert!(!flag(&cpu, StatusFlag::Zero));
    assert!(!flag(&cpu, StatusFlag::Negative));
    assert!(!flag(&cpu, StatusFlag::Overflow));
}

#[test]
fn adc_binary_overflow() {
    let mut cpu = cpu_with_program(0x8000, &[0x69, 0x01]);
    cpu.a = 0x7F;
    run_one_instruction(&mut cpu);
    assert_eq!(cpu.a, 0x80);
    assert!(flag(&cpu, StatusFlag::Negative));
    assert!(flag(&cpu, StatusFlag::Overflow));
    assert!(!flag(&cpu, StatusFlag::Carry));
    assert!(!flag(&cpu, StatusFlag::Zero));
}

// A=+80 (0x50), M=-16 (0xF0 as signed) with a borrow-free start (C=1): a
// signed 80 - (-16) = 96 fits in a signed byte, so V is correctly clear
// here. (The worked example this is drawn from states V=1; that value
// doesn't hold up against either the handler's own formula or a signed
// reading of the inputs, so it's not reproduced here.)
#[test]
fn sbc_binary_borrow() {
    let mut cpu = cpu_with_program(0x8000, &[0xE9, 0xF0]);
    cpu.a = 0x50;
    cpu.set_flag(StatusFlag::Carry, true);
    run_one_instruction(&mut cpu);
    assert_eq!(cpu.a, 0x60);
    assert!(!flag(&cpu, StatusFlag::Carry));
    assert!(!flag(&cpu, StatusFlag::Overflow));
    assert!(!flag(&cpu, StatusFlag::Negative));
    assert!(!flag(&cpu, StatusFlag::Zero));
}

#[test]
fn jmp_indirect_page_wrap_bug() {
    let mut cpu = cpu_with_program(0x8000, &[0x6C, 0xFF, 0x10]);
    cpu.write_bus(0x10FF, 0x34);
    cpu.write_bus(0x1000, 0x12);
    cpu.write_bus(0x1100, 0xFF);
    run_one_instruction(&mut cpu);
    assert_eq!(cpu.pc, 0x1234);
}

#[test]
fn branch_taken_across_page() {
    let mut cpu = cpu_with_program(0x80FD, &[0x90, 0x05]);
    cpu.set_flag(StatusFlag::Carry, false);
    let ticks = run_one_instruction(&mut cpu);
    assert_eq!(cpu.pc, 0x8104);
    assert_eq!(ticks, 4);
}

#[test]
fn jsr_rts_round_trip() {
    let mut cpu = cpu_with_program(0x8000, &[0x20, 0x00, 0x90]);
    cpu.write_bus(0x9000, 0x60);
    assert_eq!(cpu.sp, 0xFD);

    run_one_instruction(&mut cpu); // JSR $9000
    assert_eq!(cpu.pc, 0x9000);
    assert_eq!(cpu.read_bus(0x01FC), 0x02);
    assert_eq!(cpu.read_bus(0x01FD), 0x80);

    run_one_instruction(&mut cpu); // RTS
    assert_eq!(cpu.pc, 0x8003);
    assert_eq!(cpu.sp, 0xFD);
}

// --- Universal invariants / boundary behaviors -----------------------------

#[test]
fn branch_cycle_counts() {
    // Not taken: 2 cycles.
    let mut cpu = cpu_with_program(0x8000, &[0x90, 0x05]); // BCC, C set => not taken
    cpu.set_flag(StatusFlag::Carry, true);
    assert_eq!(run_one_instruction(&mut cpu), 2);

    // Taken, same page: 3 cycles.
    let mut cpu = cpu_with_program(0x8000, &[0x90, 0x05]);
    cpu.set_flag(StatusFlag::Carry, false);
    assert_eq!(run_one_instruction(&mut cpu), 3);

    // Taken, crossing a page: 4 cycles (see branch_taken_across_page too).
    let mut cpu = cpu_with_program(0x80FD, &[0x90, 0x05]);
    cpu.set_flag(StatusFlag::Carry, false);
    assert_eq!(run_one_instruction(&mut cpu), 4);
}

#[test]
fn absolute_x_load_charges_page_cross_but_store_does_not() {
    // LDA $10FF,X with X=1 crosses into page 0x11 => +1 cycle (base 4 => 5).
    let mut cpu = cpu_with_program(0x8000, &[0xBD, 0xFF, 0x10]);
    cpu.x = 1;
    assert_eq!(run_one_instruction(&mut cpu), 5);

    // STA $10FF,X with the same crossing: base cost is already 5, no extra.
    let mut cpu = cpu_with_program(0x8000, &[0x9D, 0xFF, 0x10]);
    cpu.x = 1;
    assert_eq!(run_one_instruction(&mut cpu), 5);
}

#[test]
fn zero_page_wrap_in_indexed_indirect() {
    // LDA ($FF,X) with X=2 must read the pointer from 0x01/0x02, wrapping
    // within the zero page rather than spilling into page 1.
    let mut cpu = cpu_with_program(0x8000, &[0xA1, 0xFF]);
    cpu.x = 2;
    cpu.write_bus(0x0001, 0x34);
    cpu.write_bus(0x0002, 0x12);
    cpu.write_bus(0x1234, 0x42);
    run_one_instruction(&mut cpu);
    assert_eq!(cpu.a, 0x42);
}

#[test]
fn zero_page_wrap_in_indirect_indexed() {
    // LDA ($FF),Y: the base pointer's high byte wraps to 0x0000, not 0x0100.
    let mut cpu = cpu_with_program(0x8000, &[0xB1, 0xFF]);
    cpu.y = 0x10;
    cpu.write_bus(0x00FF, 0x00);
    cpu.write_bus(0x0000, 0x20);
    cpu.write_bus(0x2010, 0x99);
    run_one_instruction(&mut cpu);
    assert_eq!(cpu.a, 0x99);
}

#[test]
fn stack_pointer_wraps_on_overflow() {
    let mut cpu = cpu_with_program(0x8000, &[0x48]); // PHA
    cpu.sp = 0x00;
    run_one_instruction(&mut cpu);
    assert_eq!(cpu.sp, 0xFF);
    assert_eq!(cpu.read_bus(0x0100), 0x00);
}

#[test]
fn pha_pla_round_trip_restores_a() {
    let mut cpu = cpu_with_program(0x8000, &[0x48, 0xA9, 0x00, 0x68]); // PHA; LDA #0; PLA
    cpu.a = 0x77;
    run_instructions(&mut cpu, 3);
    assert_eq!(cpu.a, 0x77);
}

#[test]
fn php_plp_round_trip_restores_visible_flags() {
    let mut cpu = cpu_with_program(0x8000, &[0x08, 0xA9, 0x00, 0x28]); // PHP; LDA #0; PLP
    cpu.p = StatusFlag::Carry as u8 | StatusFlag::Negative as u8 | StatusFlag::Decimal as u8;
    let before = cpu.p;
    run_instructions(&mut cpu, 3);
    // Visible bits (N V D I Z C) round-trip; U/B are fixed by PLP regardless.
    let visible_mask = !(StatusFlag::Unused as u8 | StatusFlag::Break as u8);
    assert_eq!(cpu.p & visible_mask, before & visible_mask);
    assert!(flag(&cpu, StatusFlag::Unused));
    assert!(!flag(&cpu, StatusFlag::Break));
}

#[test]
fn php_pushes_with_break_and_unused_set() {
    let mut cpu = cpu_with_program(0x8000, &[0x08]); // PHP
    cpu.p = 0;
    run_one_instruction(&mut cpu);
    let pushed = cpu.read_bus(0x01FD);
    assert_eq!(pushed & 0x30, 0x30);
}

#[test]
fn brk_vectors_through_irq_brk_and_sets_interrupt_disable() {
    let mut cpu = cpu_with_program(0x8000, &[0x00, 0xEA]); // BRK; NOP (skipped byte)
    cpu.write_bus(0xFFFE, 0x00);
    cpu.write_bus(0xFFFF, 0x90);
    run_one_instruction(&mut cpu);
    assert_eq!(cpu.pc, 0x9000);
    assert!(flag(&cpu, StatusFlag::InterruptDisable));
    let pushed_p = cpu.read_bus(0x01FC);
    assert_eq!(pushed_p & 0x30, 0x30);
}

#[test]
fn hardware_irq_pushes_p_with_break_clear() {
    let mut cpu = cpu_with_program(0x8000, &[0xEA]);
    cpu.write_bus(0xFFFE, 0x00);
    cpu.write_bus(0xFFFF, 0x90);
    cpu.p = 0;
    cpu.irq();
    let pushed_p = cpu.read_bus(0x01FC);
    assert_eq!(pushed_p & StatusFlag::Unused as u8, StatusFlag::Unused as u8);
    assert_eq!(pushed_p & StatusFlag::Break as u8, 0);
    assert_eq!(cpu.pc, 0x9000);
    assert!(flag(&cpu, StatusFlag::InterruptDisable));
}

#[test]
fn irq_is_ignored_when_interrupt_disable_is_set() {
    let mut cpu = cpu_with_program(0x8000, &[0xEA]);
    let pc_before = cpu.pc;
    cpu.set_flag(StatusFlag::InterruptDisable, true);
    cpu.irq();
    assert_eq!(cpu.pc, pc_before);
}

#[test]
fn nmi_always_fires_regardless_of_interrupt_disable() {
    let mut cpu = cpu_with_program(0x8000, &[0xEA]);
    cpu.write_bus(0xFFFA, 0x00);
    cpu.write_bus(0xFFFB, 0x70);
    cpu.set_flag(StatusFlag::InterruptDisable, true);
    cpu.nmi();
    assert_eq!(cpu.pc, 0x7000);
}

#[test]
fn reset_loads_post_reset_state() {
    let mut cpu = cpu_with_program(0xC000, &[0xEA]);
    cpu.a = 1;
    cpu.x = 2;
    cpu.y = 3;
    cpu.sp = 0x10;
    cpu.reset();
    assert_eq!(cpu.a, 0);
    assert_eq!(cpu.x, 0);
    assert_eq!(cpu.y, 0);
    assert_eq!(cpu.sp, 0xFD);
    assert_eq!(cpu.pc, 0xC000);
    assert!(flag(&cpu, StatusFlag::InterruptDisable));
    assert!(flag(&cpu, StatusFlag::Unused));
}

#[test]
fn decode_fault_on_illegal_opcode() {
    let mut bus = RamBus::new();
    bus.memory[0x8000] = 0x02; // not a legal opcode
    bus.memory[0xFFFC] = 0x00;
    bus.memory[0xFFFD] = 0x80;
    let mut cpu = Cpu::new(Box::new(bus));
    cpu.reset();
    let err = cpu.tick().unwrap_err();
    assert_eq!(err.opcode, 0x02);
    assert_eq!(err.pc, 0x8000);
}

#[test]
fn adc_sbc_binary_round_trip_property() {
    // ADC(A,M,C) + C'*256 == A + M + C, for a representative sample of the
    // input space (exhaustive would be 256*256*2, which is unnecessary for
    // confidence here).
    for a in (0u16..256).step_by(7) {
        for m in (0u16..256).step_by(11) {
            for c in [0u8, 1] {
                let mut cpu = cpu_with_program(0x8000, &[0x69, m as u8]);
                cpu.a = a as u8;
                cpu.set_flag(StatusFlag::Carry, c == 1);
                run_one_instruction(&mut cpu);
                let carry_out = flag(&cpu, StatusFlag::Carry) as u16;
                assert_eq!(
                    cpu.a as u16 + carry_out * 256,
                    (a + m + c as u16) & 0x1FF,
                    "a={a:#x} m={m:#x} c={c}"
                );
            }
        }
    }
}

#[test]
fn decimal_mode_adc_adjusts_per_nibble() {
    // 0x58 + 0x46 in BCD is 58 + 46 = 104, which wraps to 04 with carry.
    let mut cpu = cpu_with_program(0x8000, &[0x69, 0x46]);
    cpu.a = 0x58;
    cpu.set_flag(StatusFlag::Decimal, true);
    run_one_instruction(&mut cpu);
    assert_eq!(cpu.a, 0x04);
    assert!(flag(&cpu, StatusFlag::Carry));
}

#[test]
fn cycles_remaining_never_underflows_across_a_run() {
    // cycles_remaining is unsigned; a bug that decrements past zero would
    // panic in a debug build rather than silently wrap, so the absence of a
    // panic here is the assertion.
    let mut cpu = cpu_with_program(
        0x8000,
        &[0xA9, 0x10, 0x69, 0x05, 0x85, 0x00, 0xE6, 0x00, 0xA5, 0x00],
    );
    for _ in 0..200 {
        cpu.tick().unwrap();
    }
}

#[test]
fn disassemble_formats_operands_per_addressing_mode() {
    let mut cpu = cpu_with_program(0x8000, &[0xA9, 0x42]);
    assert_eq!(cpu.disassemble_at(0x8000), "LDA #$42");

    let mut cpu = cpu_with_program(0x8000, &[0xAD, 0x34, 0x12]);
    assert_eq!(cpu.disassemble_at(0x8000), "LDA $1234");

    let mut cpu = cpu_with_program(0x8000, &[0x90, 0x05]);
    assert_eq!(cpu.disassemble_at(0x8000), "BCC $8007");

    let mut cpu = cpu_with_program(0x8000, &[0x6C, 0x00, 0x10]);
    assert_eq!(cpu.disassemble_at(0x8000), "JMP ($1000)");
}

#[test]
fn format_state_reports_registers_and_last_instruction() {
    let mut cpu = cpu_with_program(0x8000, &[0xA9, 0x05]);
    run_one_instruction(&mut cpu);
    let state = cpu.format_state();
    assert!(state.starts_with("A: 05"));
    assert!(state.contains("LDA #$05"));
}
