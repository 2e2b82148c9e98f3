//! Illustrative host: a flat 64 KiB RAM bus, a clock loop, and a CLI to load
//! a program and run it. None of this is part of the core — it exists to
//! show one way to wire a [`mos6502::Cpu`] to a bus and a clock, the way a
//! real embedder would.

use clap::{Args, Parser, Subcommand};
use mos6502::{Bus, Cpu};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(author, version, about, long_about = None, disable_help_subcommand = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a program into RAM and single-step it to a BRK or decode fault.
    Run(RunArgs),
}

#[derive(Args)]
struct RunArgs {
    /// Path to a raw binary of 6502 machine code.
    #[arg(long, conflicts_with = "hex")]
    file: Option<PathBuf>,

    /// An inline program as a hex byte string, e.g. "A9 01 69 02 00".
    #[arg(long, conflicts_with = "file")]
    hex: Option<String>,

    /// Address to load the program at and to point the reset vector to.
    #[arg(long, value_parser = parse_hex_u16, default_value = "0x8000")]
    reset_vector: u16,

    /// Stop after this many completed instructions.
    #[arg(long, default_value_t = 64)]
    max_instructions: u64,
}

fn parse_hex_u16(s: &str) -> Result<u16, String> {
    let trimmed = s.trim_start_matches("0x").trim_start_matches("0X");
    u16::from_str_radix(trimmed, 16).map_err(|e| e.to_string())
}

fn parse_hex_bytes(s: &str) -> Result<Vec<u8>, String> {
    s.split_whitespace()
        .map(|byte| u8::from_str_radix(byte, 16).map_err(|e| e.to_string()))
        .collect()
}

/// A flat, unmapped 64 KiB address space. A real host would route `read`/
/// `write` to RAM, ROM banks, and MMIO registers; this one just backs
/// everything with a byte array.
struct RamBus {
    memory: [u8; 0x10000],
}

impl RamBus {
    fn new() -> Self {
        RamBus {
            memory: [0; 0x10000],
        }
    }

    fn load(&mut self, at: u16, program: &[u8]) {
        for (offset, byte) in program.iter().enumerate() {
            self.memory[at as usize + offset] = *byte;
        }
    }

    fn set_reset_vector(&mut self, addr: u16) {
        let [lo, hi] = addr.to_le_bytes();
        self.memory[0xFFFC] = lo;
        self.memory[0xFFFD] = hi;
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

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let Commands::Run(args) = cli.command;

    let program = match load_program(&args) {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    let mut bus = RamBus::new();
    bus.load(args.reset_vector, &program);
    bus.set_reset_vector(args.reset_vector);

    let mut cpu = Cpu::new(Box::new(bus));
    cpu.reset();

    let mut instructions_run = 0;
    loop {
        if let Err(fault) = cpu.tick() {
            warn!(%fault, "decode fault, halting");
            break;
        }
        if cpu.complete() {
            instructions_run += 1;
            let state = cpu.format_state();
            info!("{state}");
            if state.ends_with("| BRK") {
                info!("BRK reached, halting");
                break;
            }
            if instructions_run >= args.max_instructions {
                break;
            }
        }
    }
}

fn load_program(args: &RunArgs) -> Result<Vec<u8>, String> {
    match (&args.file, &args.hex) {
        (Some(path), None) => {
            std::fs::read(path).map_err(|e| format!("failed to read {}: {e}", path.display()))
        }
        (None, Some(hex)) => parse_hex_bytes(hex),
        _ => Err("exactly one of --file or --hex is required".to_string()),
    }
}
