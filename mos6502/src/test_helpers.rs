//! A flat 64 KiB RAM bus and small setup helpers shared by the integration
//! tests in `tests.rs`. Kept separate from the core crate: the bus contract
//! is external by design, and this is just one trivial implementation of it.

use crate::bus::Bus;
use crate::cpu::Cpu;

pub struct RamBus {
    pub memory: Vec<u8>,
}

impl RamBus {
    pub fn new() -> Self {
        RamBus {
            memory: vec![0; 0x10000],
        }
    }
}

impl Bus for RamBus {
    fn read(&mut self, address: u16) -> u8 {
        self.memory[address as usize]
    }

    fn write(&mut self, address: u16, value: u8) {
        self.memory[address as usize] = value;
    }
}

/// Builds a CPU over a RAM bus with `program` loaded at `load_at` and the
/// reset vector pointed at it, then runs `Reset`.
pub fn cpu_with_program(load_at: u16, program: &[u8]) -> Cpu {
    let mut bus = RamBus::new();
    for (offset, byte) in program.iter().enumerate() {
        bus.memory[load_at as usize + offset] = *byte;
    }
    bus.memory[0xFFFC] = load_at as u8;
    bus.memory[0xFFFD] = (load_at >> 8) as u8;
    let mut cpu = Cpu::new(Box::new(bus));
    cpu.reset();
    cpu
}

/// Ticks until the in-flight instruction completes, and returns how many
/// ticks that took — the number the testable properties in the spec call
/// out (base cycles plus whatever extras the instruction earned).
pub fn run_one_instruction(cpu: &mut Cpu) -> u32 {
    let mut ticks = 0;
    loop {
        cpu.tick().expect("decode fault in test program");
        ticks += 1;
        if cpu.complete() {
            return ticks;
        }
    }
}

pub fn run_instructions(cpu: &mut Cpu, count: usize) {
    for _ in 0..count {
        run_one_instruction(cpu);
    }
}
