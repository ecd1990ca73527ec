// famicore - cycle-accurate NES core
//
// A 6502 interpreter with exact per-instruction cycle accounting, the
// memory bus that arbitrates RAM, PPU registers and cartridge windows, an
// iNES cartridge/mapper layer, the 2C02 register interface, and a
// disassembler over the read-only bus path.

// Public modules
pub mod bus;
pub mod cartridge;
pub mod cpu;
pub mod debug;
pub mod emulator;
pub mod ppu;
pub mod ram;

// Re-export main types for convenience
pub use bus::Bus;
pub use cartridge::{Cartridge, INesError, INesHeader, Mirroring};
pub use cpu::Cpu;
pub use debug::{
    disassemble_instruction, disassemble_range, hexdump, CpuState, DisassembledInstruction,
    LogLevel, Logger, PpuState, TraceEntry,
};
pub use emulator::{ConfigError, Emulator, EmulatorConfig};
pub use ppu::Ppu;
pub use ram::Ram;
