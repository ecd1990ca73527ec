// Emulator module - the composition root
//
// Owns the CPU and the bus (which in turn owns the PPU and the cartridge
// handle) and turns master-clock ticks into the hardware interleave: the
// PPU steps on every tick, the CPU on every third, and the PPU's NMI latch
// drains into the CPU at instruction boundaries.

mod config;

pub use config::{ConfigError, DisassemblyConfig, EmulatorConfig, RunConfig, TraceConfig};

use crate::bus::Bus;
use crate::cartridge::{Cartridge, INesError};
use crate::cpu::Cpu;
use crate::debug::{self, CpuState, Logger, PpuState};
use std::collections::BTreeMap;
use std::path::Path;

/// A complete NES core: CPU, bus, PPU and cartridge in one unit
pub struct Emulator {
    cpu: Cpu,
    pub bus: Bus,
    config: EmulatorConfig,
    logger: Logger,
}

impl Emulator {
    /// Create an emulator with configuration from disk (or defaults)
    pub fn new() -> Self {
        Self::with_config(EmulatorConfig::load_or_default())
    }

    /// Create an emulator with explicit configuration
    pub fn with_config(config: EmulatorConfig) -> Self {
        let mut logger = Logger::new();
        logger.set_cpu_trace(config.trace.cpu_trace);
        logger.set_ppu_trace(config.trace.ppu_trace);
        logger.set_max_buffer_size(config.trace.buffer_size);
        if let Some(ref path) = config.trace.log_file {
            let _ = logger.open_log_file(path);
        }

        Emulator {
            cpu: Cpu::new(),
            bus: Bus::new(),
            config,
            logger,
        }
    }

    /// Load an iNES image from disk, mount it and reset
    pub fn load_rom<P: AsRef<Path>>(&mut self, path: P) -> Result<(), INesError> {
        let cartridge = Cartridge::from_ines_file(path)?;
        self.insert_cartridge(cartridge);
        Ok(())
    }

    /// Mount a cartridge and reset the machine
    pub fn insert_cartridge(&mut self, cartridge: Cartridge) {
        let header = *cartridge.header();
        self.bus.insert_cartridge(cartridge);
        self.logger.log_message(
            crate::debug::LogLevel::Info,
            format!(
                "Mounted cartridge: {}x16KB PRG, {}x8KB CHR, mapper {}, {:?} mirroring",
                header.prg_banks, header.chr_banks, header.mapper_id, header.mirroring
            ),
        );
        self.reset();
    }

    /// Press the reset button
    pub fn reset(&mut self) {
        self.bus.reset();
        self.cpu.reset(&mut self.bus);
    }

    /// Advance the machine by one master-clock tick
    ///
    /// The PPU runs every tick; the CPU every third. The NMI latch is
    /// polled at instruction boundaries only, so an interrupt never tears
    /// an instruction in half.
    pub fn clock(&mut self) {
        let tick = self.bus.system_clock();
        self.bus.tick_system();

        if tick % 3 == 0 {
            let was_boundary = self.cpu.complete();
            self.cpu.tick(&mut self.bus);

            if !was_boundary && self.cpu.complete() && self.logger.is_cpu_trace_enabled() {
                let state = CpuState::capture(&self.cpu);
                self.logger.log_cpu_state(&state);
            }
        }

        if self.cpu.complete() && self.bus.ppu.take_nmi() {
            self.cpu.nmi(&mut self.bus);
        }
    }

    /// Run to the end of the next instruction
    pub fn step_instruction(&mut self) {
        let executed = self.cpu.cycles;
        loop {
            self.clock();
            if self.cpu.complete() && self.cpu.cycles != executed {
                break;
            }
        }
    }

    /// Run until the PPU finishes the current frame
    pub fn run_frame(&mut self) {
        while !self.bus.ppu.frame_complete() {
            self.clock();
        }
        self.bus.ppu.clear_frame_complete();

        if self.logger.is_ppu_trace_enabled() {
            let state = PpuState::capture(&self.bus.ppu);
            self.logger.log_ppu_state(&state);
        }
    }

    /// Pull the maskable interrupt line
    pub fn irq(&mut self) {
        self.cpu.irq(&mut self.bus);
    }

    /// Disassemble `[start, stop]` over the read-only bus path
    pub fn disassemble(&self, start: u16, stop: u16) -> BTreeMap<u16, String> {
        debug::disassemble_range(&self.bus, start, stop)
    }

    /// Snapshot of the CPU registers
    pub fn cpu_state(&self) -> CpuState {
        CpuState::capture(&self.cpu)
    }

    /// Snapshot of the PPU timing and registers
    pub fn ppu_state(&self) -> PpuState {
        PpuState::capture(&self.bus.ppu)
    }

    /// True at CPU instruction boundaries
    pub fn instruction_complete(&self) -> bool {
        self.cpu.complete()
    }

    /// Program counter, for host run loops watching an address
    pub fn pc(&self) -> u16 {
        self.cpu.pc
    }

    pub fn config(&self) -> &EmulatorConfig {
        &self.config
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    pub fn logger_mut(&mut self) -> &mut Logger {
        &mut self.logger
    }
}

impl Default for Emulator {
    fn default() -> Self {
        Self::with_config(EmulatorConfig::default())
    }
}
