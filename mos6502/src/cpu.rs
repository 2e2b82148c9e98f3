//! The register file and execution driver.
//!
//! [`Cpu::tick`] is the whole story: when idle it fetches, decodes, and
//! executes one instruction, charging its full cycle budget up front; every
//! following tick just burns down that budget until it hits zero. Nothing
//! about bus timing is modeled more finely than that — see the module docs
//! for the rationale.

use crate::bus::Bus;
use crate::constants::{InterruptVector, STACK_PAGE};
use crate::decode::decode;
use crate::error::DecodeError;
use crate::handlers::is_page_cross_sensitive;
use crate::mode::Mode;
use crate::status::{StatusFlag, RESET_STATUS_FLAG};

/// The MOS 6502. Owns the architectural registers and the per-instruction
/// scratch state; everything else about a system (memory map, peripherals)
/// lives behind the [`Bus`] it's constructed with.
pub struct Cpu {
    bus: Box<dyn Bus>,

    pub(crate) a: u8,
    pub(crate) x: u8,
    pub(crate) y: u8,
    pub(crate) sp: u8,
    pub(crate) p: u8,
    pub(crate) pc: u16,

    /// Effective address computed by the current instruction's addressing
    /// mode, or the value fetched directly for Accumulator mode.
    pub(crate) addr_absolute: u16,
    pub(crate) fetched: u8,
    /// Sign-extended branch displacement, valid only for Relative mode.
    pub(crate) addr_relative: i16,

    /// Remaining cycle budget for the instruction in flight. Zero means the
    /// driver is idle and the next `tick` will fetch a new instruction.
    cycles_remaining: u8,

    /// Address the most recently fetched opcode byte came from, used only
    /// by `format_state` to re-render the last instruction on demand.
    last_instruction_addr: u16,
}

impl Cpu {
    /// Construct a CPU bound to `bus`, with zeroed registers. Call
    /// [`Cpu::reset`] before running anything — this alone does not load the
    /// reset vector.
    pub fn new(bus: Box<dyn Bus>) -> Cpu {
        Cpu {
            bus,
            a: 0,
            x: 0,
            y: 0,
            sp: 0,
            p: 0,
            pc: 0,
            addr_absolute: 0,
            fetched: 0,
            addr_relative: 0,
            cycles_remaining: 0,
            last_instruction_addr: 0,
        }
    }

    /// Initializes registers to their documented post-reset values and
    /// loads `PC` from the reset vector at `0xFFFC/0xFFFD`.
    pub fn reset(&mut self) {
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.sp = 0xFD;
        self.p = RESET_STATUS_FLAG;
        self.pc = self.read_u16(InterruptVector::Reset as u16);
        self.cycles_remaining = 0;
        tracing::debug!(pc = format!("{:04X}", self.pc), "reset");
    }

    /// Advance execution by one clock cycle. If idle, this fetches, decodes,
    /// and executes the next instruction and charges its full cycle cost;
    /// otherwise it just burns down the remaining budget. Returns
    /// [`DecodeError`] if the fetched opcode isn't one of the documented
    /// legal opcodes — the core halts rather than fabricating behavior.
    pub fn tick(&mut self) -> Result<(), DecodeError> {
        if self.cycles_remaining == 0 {
            self.step()?;
        } else {
            self.cycles_remaining -= 1;
        }
        Ok(())
    }

    /// True when the driver is idle, i.e. the last-fetched instruction has
    /// fully paid out its cycle budget and it is safe to inspect CPU state.
    pub fn complete(&self) -> bool {
        self.cycles_remaining == 0
    }

    /// Maskable interrupt. No-op if `I` is set.
    pub fn irq(&mut self) {
        if !self.get_flag(StatusFlag::InterruptDisable) {
            self.interrupt(InterruptVector::IrqBrk);
        }
    }

    /// Non-maskable interrupt. Always runs, regardless of `I`.
    pub fn nmi(&mut self) {
        self.interrupt(InterruptVector::Nmi);
    }

    /// Shared by `Irq`/`Nmi`: push `PC` then `P` (with `B` cleared, `U`
    /// forced set — distinct from the BRK/PHP push), mask further IRQs, and
    /// vector through to the handler. Always costs 7 cycles.
    fn interrupt(&mut self, vector: InterruptVector) {
        self.push_u16(self.pc);
        self.push_u8((self.p | StatusFlag::Unused as u8) & !(StatusFlag::Break as u8));
        self.set_flag(StatusFlag::InterruptDisable, true);
        self.pc = self.read_u16(vector as u16);
        self.cycles_remaining = 7;
        tracing::debug!(vector = ?vector, pc = format!("{:04X}", self.pc), "interrupt");
    }

    fn step(&mut self) -> Result<(), DecodeError> {
        let fetch_pc = self.pc;
        let opcode = self.read_bus(self.pc);
        self.pc = self.pc.wrapping_add(1);

        let info = decode(opcode).ok_or(DecodeError {
            opcode,
            pc: fetch_pc,
        })?;
        self.last_instruction_addr = fetch_pc;

        self.cycles_remaining = info.cycles;
        let page_cross = self.run_addressing_mode(info.mode);
        let extra = (info.handler)(self, info.mode);
        if page_cross && is_page_cross_sensitive(info.instruction) {
            self.cycles_remaining += 1;
        }
        self.cycles_remaining += extra;
        self.cycles_remaining -= 1;
        tracing::trace!(
            opcode = format!("{:02X}", opcode),
            pc = format!("{:04X}", fetch_pc),
            mnemonic = info.instruction.mnemonic(),
            "fetched instruction"
        );
        Ok(())
    }

    /// Resolves the effective operand location for `mode`, advancing `PC`
    /// past its operand bytes and setting `addr_absolute`/`fetched`/
    /// `addr_relative` as appropriate. Returns whether the computation
    /// crossed a page boundary; whether that costs a cycle depends on the
    /// instruction (see [`is_page_cross_sensitive`]).
    fn run_addressing_mode(&mut self, mode: Mode) -> bool {
        match mode {
            Mode::Accumulator => {
                self.fetched = self.a;
                false
            }
            Mode::Implied => false,
            Mode::Immediate => {
                self.addr_absolute = self.pc;
                self.pc = self.pc.wrapping_add(1);
                false
            }
            Mode::ZeroPage => {
                self.addr_absolute = self.read_bus(self.pc) as u16;
                self.pc = self.pc.wrapping_add(1);
                false
            }
            Mode::ZeroPageX => {
                let base = self.read_bus(self.pc);
                self.pc = self.pc.wrapping_add(1);
                self.addr_absolute = base.wrapping_add(self.x) as u16;
                false
            }
            Mode::ZeroPageY => {
                let base = self.read_bus(self.pc);
                self.pc = self.pc.wrapping_add(1);
                self.addr_absolute = base.wrapping_add(self.y) as u16;
                false
            }
            Mode::Absolute => {
                self.addr_absolute = self.read_u16(self.pc);
                self.pc = self.pc.wrapping_add(2);
                false
            }
            Mode::AbsoluteX => {
                let base = self.read_u16(self.pc);
                self.pc = self.pc.wrapping_add(2);
                let addr = base.wrapping_add(self.x as u16);
                self.addr_absolute = addr;
                (base & 0xFF00) != (addr & 0xFF00)
            }
            Mode::AbsoluteY => {
                let base = self.read_u16(self.pc);
                self.pc = self.pc.wrapping_add(2);
                let addr = base.wrapping_add(self.y as u16);
                self.addr_absolute = addr;
                (base & 0xFF00) != (addr & 0xFF00)
            }
            Mode::Indirect => {
                let ptr = self.read_u16(self.pc);
                self.pc = self.pc.wrapping_add(2);
                // Page-wrap bug: when the pointer's low byte is 0xFF, the
                // high byte of the target is fetched from the start of the
                // same page rather than the next one.
                let hi_addr = if ptr & 0x00FF == 0x00FF {
                    ptr & 0xFF00
                } else {
                    ptr.wrapping_add(1)
                };
                let lo = self.read_bus(ptr);
                let hi = self.read_bus(hi_addr);
                self.addr_absolute = u16::from_le_bytes([lo, hi]);
                false
            }
            Mode::IndexedIndirect => {
                let zp = self.read_bus(self.pc).wrapping_add(self.x);
                self.pc = self.pc.wrapping_add(1);
                let lo = self.read_bus(zp as u16);
                let hi = self.read_bus(zp.wrapping_add(1) as u16);
                self.addr_absolute = u16::from_le_bytes([lo, hi]);
                false
            }
            Mode::IndirectIndexed => {
                let zp = self.read_bus(self.pc);
                self.pc = self.pc.wrapping_add(1);
                let lo = self.read_bus(zp as u16);
                let hi = self.read_bus(zp.wrapping_add(1) as u16);
                let base = u16::from_le_bytes([lo, hi]);
                let addr = base.wrapping_add(self.y as u16);
                self.addr_absolute = addr;
                (base & 0xFF00) != (addr & 0xFF00)
            }
            Mode::Relative => {
                let offset = self.read_bus(self.pc) as i8;
                self.pc = self.pc.wrapping_add(1);
                self.addr_relative = offset as i16;
                false
            }
        }
    }

    /// The operand value a handler should act on: `A` for Accumulator mode,
    /// otherwise a fresh bus read at `addr_absolute`.
    pub(crate) fn operand_value(&mut self, mode: Mode) -> u8 {
        match mode {
            Mode::Accumulator => self.fetched,
            _ => self.read_bus(self.addr_absolute),
        }
    }

    /// Where a read-modify-write handler's result goes: back into `A` for
    /// Accumulator mode, otherwise a bus write at `addr_absolute`.
    pub(crate) fn store_result(&mut self, mode: Mode, value: u8) {
        match mode {
            Mode::Accumulator => self.a = value,
            _ => self.write_bus(self.addr_absolute, value),
        }
    }

    pub(crate) fn update_zero_and_negative(&mut self, value: u8) {
        self.set_flag(StatusFlag::Zero, value == 0);
        self.set_flag(StatusFlag::Negative, value & 0x80 != 0);
    }

    pub(crate) fn get_flag(&self, flag: StatusFlag) -> bool {
        self.p & flag as u8 != 0
    }

    pub(crate) fn set_flag(&mut self, flag: StatusFlag, value: bool) {
        if value {
            self.p |= flag as u8;
        } else {
            self.p &= !(flag as u8);
        }
    }

    pub(crate) fn read_bus(&mut self, address: u16) -> u8 {
        self.bus.read(address)
    }

    pub(crate) fn write_bus(&mut self, address: u16, value: u8) {
        self.bus.write(address, value);
    }

    pub(crate) fn read_u16(&mut self, address: u16) -> u16 {
        let lo = self.read_bus(address);
        let hi = self.read_bus(address.wrapping_add(1));
        u16::from_le_bytes([lo, hi])
    }

    /// Stack accesses always land in page 1; pushing decrements `SP`,
    /// pulling pre-increments it, both modulo 256.
    pub(crate) fn push_u8(&mut self, value: u8) {
        self.write_bus(STACK_PAGE | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    pub(crate) fn pull_u8(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.read_bus(STACK_PAGE | self.sp as u16)
    }

    pub(crate) fn push_u16(&mut self, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.push_u8(hi);
        self.push_u8(lo);
    }

    pub(crate) fn pull_u16(&mut self) -> u16 {
        let lo = self.pull_u8();
        let hi = self.pull_u8();
        u16::from_le_bytes([lo, hi])
    }

    /// Formats the instruction at `addr` as `"<mnem> <operand>"` without
    /// perturbing CPU state beyond the bus reads that formatting implies —
    /// it never touches `PC` or any register.
    pub fn disassemble_at(&mut self, addr: u16) -> String {
        let opcode = self.read_bus(addr);
        match decode(opcode) {
            Some(info) => self.render_instruction(addr, info.instruction.mnemonic(), info.mode),
            None => format!("??? (${:02X})", opcode),
        }
    }

    fn render_instruction(&mut self, addr: u16, mnemonic: &str, mode: Mode) -> String {
        let operand_addr = addr.wrapping_add(1);
        let operand = match mode {
            Mode::Accumulator | Mode::Implied => String::new(),
            Mode::Immediate => format!("#${:02X}", self.read_bus(operand_addr)),
            Mode::ZeroPage => format!("${:02X}", self.read_bus(operand_addr)),
            Mode::ZeroPageX => format!("${:02X},X", self.read_bus(operand_addr)),
            Mode::ZeroPageY => format!("${:02X},Y", self.read_bus(operand_addr)),
            Mode::Absolute => format!("${:04X}", self.peek_u16(operand_addr)),
            Mode::AbsoluteX => format!("${:04X},X", self.peek_u16(operand_addr)),
            Mode::AbsoluteY => format!("${:04X},Y", self.peek_u16(operand_addr)),
            Mode::Indirect => format!("(${:04X})", self.peek_u16(operand_addr)),
            Mode::IndexedIndirect => format!("(${:02X},X)", self.read_bus(operand_addr)),
            Mode::IndirectIndexed => format!("(${:02X}),Y", self.read_bus(operand_addr)),
            Mode::Relative => {
                let offset = self.read_bus(operand_addr) as i8;
                let target = addr.wrapping_add(2).wrapping_add(offset as i16 as u16);
                format!("${:04X}", target)
            }
        };
        if operand.is_empty() {
            mnemonic.to_string()
        } else {
            format!("{} {}", mnemonic, operand)
        }
    }

    fn peek_u16(&mut self, address: u16) -> u16 {
        let lo = self.read_bus(address);
        let hi = self.read_bus(address.wrapping_add(1));
        u16::from_le_bytes([lo, hi])
    }

    /// `"A: XX X: XX Y: XX P: XX SP: XX PC: XXXX"` plus the last decoded
    /// instruction's disassembly. Re-renders that instruction from the bus
    /// on demand, same as `disassemble_at` — it does not perturb registers.
    pub fn format_state(&mut self) -> String {
        let last = self.disassemble_at(self.last_instruction_addr);
        format!(
            "A: {:02X} X: {:02X} Y: {:02X} P: {:02X} SP: {:02X} PC: {:04X} | {}",
            self.a, self.x, self.y, self.p, self.sp, self.pc, last
        )
    }
}
