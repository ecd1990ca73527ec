// PPU module - 2C02 register interface and frame timing
//
// This is the CPU-visible contract of the picture processor: the 8 registers
// at $2000-$2007, the PPU address space behind PPUDATA (pattern tables,
// nametables, palette RAM), and the dot/scanline counters that produce the
// vblank window and the NMI signal. The pixel pipeline itself is a front-end
// concern and is not modelled here.
//
// ## Register Map
//
// | Address | Name       | Access | Description                    |
// |---------|------------|--------|--------------------------------|
// | $2000   | PPUCTRL    | Write  | NMI enable, increment mode     |
// | $2001   | PPUMASK    | Write  | Rendering mask bits            |
// | $2002   | PPUSTATUS  | Read   | Vblank/sprite flags            |
// | $2003   | OAMADDR    | Write  | OAM address port               |
// | $2004   | OAMDATA    | R/W    | OAM data port                  |
// | $2005   | PPUSCROLL  | Write×2| Scroll position                |
// | $2006   | PPUADDR    | Write×2| VRAM address                   |
// | $2007   | PPUDATA    | R/W    | VRAM data port (buffered read) |

mod constants;
mod memory;
mod registers;
#[cfg(test)]
mod tests;

pub use constants::PALETTE_COLOURS;

use crate::cartridge::{Cartridge, Mirroring};
use constants::*;
use std::cell::RefCell;
use std::rc::Rc;

/// The picture processing unit
///
/// Owns the VRAM the console wires directly to the PPU (two nametables and
/// palette RAM) plus an internal pattern-table fallback for the window the
/// cartridge normally supplies. Timing state is a dot counter in [0, 340]
/// and a scanline counter in [-1, 260].
pub struct Ppu {
    // ========================================
    // Registers ($2000-$2007)
    // ========================================
    /// $2000: PPUCTRL. Bit 7 enables the vblank NMI, bit 2 selects the
    /// VRAM increment (+1 across, +32 down).
    pub(crate) ppuctrl: u8,

    /// $2001: PPUMASK. Stored verbatim; rendering is out of scope.
    pub(crate) ppumask: u8,

    /// $2002: PPUSTATUS. Bit 7 vblank, bit 6 sprite 0, bit 5 overflow.
    pub(crate) ppustatus: u8,

    /// $2003: OAMADDR
    pub(crate) oam_addr: u8,

    // ========================================
    // Internal latches
    // ========================================
    /// Current VRAM address used by PPUDATA
    pub(crate) v: u16,

    /// Temporary VRAM address staged by PPUADDR/PPUSCROLL
    pub(crate) t: u16,

    /// Fine X scroll (3 bits)
    pub(crate) fine_x: u8,

    /// Shared first/second write toggle for PPUSCROLL and PPUADDR.
    /// Reading PPUSTATUS resets it.
    pub(crate) write_latch: bool,

    /// One-read-deep buffer for PPUDATA (palette reads bypass it)
    pub(crate) read_buffer: u8,

    // ========================================
    // PPU memory
    // ========================================
    /// Two 1KB nametables, addressed through the mirroring mode
    pub(crate) nametables: [u8; NAMETABLE_SIZE * 2],

    /// 32 bytes of palette RAM
    pub(crate) palette_ram: [u8; PALETTE_SIZE],

    /// Pattern-table storage used only when no cartridge claims $0000-$1FFF
    pub(crate) pattern_tables: [u8; PATTERN_SIZE],

    /// Object attribute memory behind OAMADDR/OAMDATA
    pub(crate) oam: [u8; 256],

    /// Nametable arrangement, taken from the cartridge at insertion
    pub(crate) mirroring: Mirroring,

    /// Mounted cartridge (CHR window), shared with the bus
    pub(crate) cart: Option<Rc<RefCell<Cartridge>>>,

    // ========================================
    // Timing
    // ========================================
    /// Current scanline: -1 pre-render, 0-239 visible, 241-260 vblank
    scanline: i16,

    /// Current dot within the scanline (0-340)
    cycle: u16,

    /// Frames completed since power-on
    frame: u64,

    /// Latched when scanline 260 ends; the host clears it
    frame_complete: bool,

    /// One-shot NMI latch raised at the top of vblank, drained by the bus
    nmi_pending: bool,
}

impl Ppu {
    /// Create a PPU in its power-on state
    pub fn new() -> Self {
        Ppu {
            ppuctrl: 0,
            ppumask: 0,
            ppustatus: 0,
            oam_addr: 0,
            v: 0,
            t: 0,
            fine_x: 0,
            write_latch: false,
            read_buffer: 0,
            nametables: [0; NAMETABLE_SIZE * 2],
            palette_ram: [0; PALETTE_SIZE],
            pattern_tables: [0; PATTERN_SIZE],
            oam: [0; 256],
            mirroring: Mirroring::Horizontal,
            cart: None,
            scanline: 0,
            cycle: 0,
            frame: 0,
            frame_complete: false,
            nmi_pending: false,
        }
    }

    /// Mount a cartridge on the PPU bus
    ///
    /// The CHR window and the mirroring mode come from the cartridge from
    /// this point on.
    pub fn connect_cartridge(&mut self, cart: Rc<RefCell<Cartridge>>) {
        self.mirroring = cart.borrow().mirroring();
        self.cart = Some(cart);
    }

    /// Reset registers, latches and counters
    ///
    /// VRAM contents survive a console reset, so nametables, palette RAM
    /// and OAM are left alone.
    pub fn reset(&mut self) {
        self.ppuctrl = 0;
        self.ppumask = 0;
        self.ppustatus = 0;
        self.oam_addr = 0;
        self.v = 0;
        self.t = 0;
        self.fine_x = 0;
        self.write_latch = false;
        self.read_buffer = 0;
        self.scanline = 0;
        self.cycle = 0;
        self.frame_complete = false;
        self.nmi_pending = false;
    }

    /// Advance the PPU by one dot
    ///
    /// Vblank rises at scanline 241 dot 1 (raising the NMI latch when
    /// PPUCTRL bit 7 is set) and falls on the pre-render line. The
    /// frame-complete latch sets when scanline 260 ends.
    pub fn tick(&mut self) {
        if self.scanline == VBLANK_SCANLINE && self.cycle == 1 {
            self.ppustatus |= 0x80;
            if self.ppuctrl & 0x80 != 0 {
                self.nmi_pending = true;
            }
        }

        if self.scanline == PRERENDER_SCANLINE && self.cycle == 1 {
            // Vblank, sprite 0 and overflow all clear here
            self.ppustatus &= 0x1F;
        }

        self.cycle += 1;
        if self.cycle >= CYCLES_PER_SCANLINE {
            self.cycle = 0;
            self.scanline += 1;
            if self.scanline > LAST_SCANLINE {
                self.scanline = PRERENDER_SCANLINE;
                self.frame_complete = true;
                self.frame += 1;
            }
        }
    }

    /// Drain the one-shot NMI latch
    pub fn take_nmi(&mut self) -> bool {
        let pending = self.nmi_pending;
        self.nmi_pending = false;
        pending
    }

    /// Current scanline in [-1, 260]
    pub fn scanline(&self) -> i16 {
        self.scanline
    }

    /// Current dot in [0, 340]
    pub fn cycle(&self) -> u16 {
        self.cycle
    }

    /// Frames completed since power-on
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// True once scanline 260 has ended; cleared by the host
    pub fn frame_complete(&self) -> bool {
        self.frame_complete
    }

    /// Clear the frame-complete latch
    pub fn clear_frame_complete(&mut self) {
        self.frame_complete = false;
    }

    /// Resolve a palette entry to an RGB colour
    ///
    /// `palette` selects one of the eight 4-colour palettes, `pixel` the
    /// entry within it. Entry 0 always resolves through the backdrop.
    pub fn colour_from_palette(&self, palette: u8, pixel: u8) -> (u8, u8, u8) {
        let addr = 0x3F00 + ((palette as u16) << 2) + (pixel as u16 & 0x03);
        let index = self.ppu_read(addr) & 0x3F;
        PALETTE_COLOURS[index as usize]
    }
}

impl Default for Ppu {
    fn default() -> Self {
        Self::new()
    }
}
