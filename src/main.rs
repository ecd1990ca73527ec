// famicore CLI - headless driver
//
// Loads an iNES image, reports the header, disassembles around the entry
// point, runs a bounded number of frames and dumps the machine state.
// Exists so the core can be exercised without any rendering front-end.

use famicore::debug::hexdump;
use famicore::{Emulator, EmulatorConfig, LogLevel};
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let Some(rom_path) = args.get(1) else {
        eprintln!("Usage: famicore <rom.nes> [frames]");
        return ExitCode::FAILURE;
    };

    let config = EmulatorConfig::load_or_default();
    let frames = args
        .get(2)
        .and_then(|arg| arg.parse::<u32>().ok())
        .unwrap_or(config.run.frames);
    let window = config.disassembly.window;

    let mut emulator = Emulator::with_config(config);
    emulator.logger_mut().set_log_level(LogLevel::Info);

    if let Err(err) = emulator.load_rom(rom_path) {
        eprintln!("Failed to load {}: {}", rom_path, err);
        return ExitCode::FAILURE;
    }

    report_cartridge(&emulator);
    report_disassembly(&emulator, window);

    println!("Running {} frame(s)...", frames);
    for _ in 0..frames {
        emulator.run_frame();
    }

    report_state(&emulator);
    ExitCode::SUCCESS
}

fn report_cartridge(emulator: &Emulator) {
    if let Some(header) = emulator.bus.cartridge_header() {
        println!(
            "PRG: {} x 16KB  CHR: {} x 8KB  Mapper: {}  Mirroring: {:?}",
            header.prg_banks, header.chr_banks, header.mapper_id, header.mirroring
        );
    }
    println!("Reset vector: ${:04X}", emulator.cpu_state().pc);
}

fn report_disassembly(emulator: &Emulator, window: u16) {
    let start = emulator.pc();
    let stop = start.saturating_add(window);

    println!("\nDisassembly around the entry point:");
    for line in emulator.disassemble(start, stop).values() {
        println!("  {}", line);
    }
}

fn report_state(emulator: &Emulator) {
    for entry in emulator.logger().last_entries(5) {
        println!("LOG  {}", entry);
    }
    println!("\nCPU  {}", emulator.cpu_state());
    println!("PPU  {}", emulator.ppu_state());
    println!("\nZero page:");
    print!("{}", hexdump(&emulator.bus, 0x0000, 4, 16));
}
