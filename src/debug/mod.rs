// Debug module - disassembler, state snapshots and trace logging
//
// Everything here observes the machine through side-effect-free paths, so
// a debugger can inspect any address without perturbing emulation.

pub mod cpu;
pub mod disassembler;
pub mod logger;
pub mod ppu;

pub use cpu::{hexdump, CpuState};
pub use disassembler::{disassemble_instruction, disassemble_range, DisassembledInstruction};
pub use logger::{LogLevel, Logger, TraceEntry};
pub use ppu::{
    nametable_snapshot, palette_colours, palette_snapshot, pattern_table_snapshot, PpuState,
};
