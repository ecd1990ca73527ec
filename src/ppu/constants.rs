// PPU constants

/// PPU register address mask for mirroring
///
/// The 8 registers at $2000-$2007 repeat throughout $2000-$3FFF.
pub(super) const PPU_REGISTER_MASK: u16 = 0x0007;

/// Size of one nametable in bytes (1KB)
pub(super) const NAMETABLE_SIZE: usize = 1024;

/// Size of palette RAM in bytes
pub(super) const PALETTE_SIZE: usize = 32;

/// Size of the internal pattern-table fallback (two 4KB tables)
///
/// Pattern memory lives on the cartridge; this storage only backs the
/// window when no mounted mapper claims the address.
pub(super) const PATTERN_SIZE: usize = 8192;

// ========================================
// PPU Timing Constants (NTSC)
// ========================================

/// Number of PPU dots per scanline (0-340)
pub(super) const CYCLES_PER_SCANLINE: u16 = 341;

/// Pre-render scanline, conventionally written as -1
pub(super) const PRERENDER_SCANLINE: i16 = -1;

/// Scanline on which the vblank flag rises (at dot 1)
pub(super) const VBLANK_SCANLINE: i16 = 241;

/// Last scanline of the frame; the frame-complete latch sets when it ends
pub(super) const LAST_SCANLINE: i16 = 260;

/// The 2C02 master palette as RGB triples
///
/// Index with the 6-bit colour values stored in palette RAM.
pub const PALETTE_COLOURS: [(u8, u8, u8); 64] = [
    (84, 84, 84),
    (0, 30, 116),
    (8, 16, 144),
    (48, 0, 136),
    (68, 0, 100),
    (92, 0, 48),
    (84, 4, 0),
    (60, 24, 0),
    (32, 42, 0),
    (8, 58, 0),
    (0, 64, 0),
    (0, 60, 0),
    (0, 50, 60),
    (0, 0, 0),
    (0, 0, 0),
    (0, 0, 0),
    (152, 150, 152),
    (8, 76, 196),
    (48, 50, 236),
    (92, 30, 228),
    (136, 20, 176),
    (160, 20, 100),
    (152, 34, 32),
    (120, 60, 0),
    (84, 90, 0),
    (40, 114, 0),
    (8, 124, 0),
    (0, 118, 40),
    (0, 102, 120),
    (0, 0, 0),
    (0, 0, 0),
    (0, 0, 0),
    (236, 238, 236),
    (76, 154, 236),
    (120, 124, 236),
    (176, 98, 236),
    (228, 84, 236),
    (236, 88, 180),
    (236, 106, 100),
    (212, 136, 32),
    (160, 170, 0),
    (116, 196, 0),
    (76, 208, 32),
    (56, 204, 108),
    (56, 180, 204),
    (60, 60, 60),
    (0, 0, 0),
    (0, 0, 0),
    (236, 238, 236),
    (168, 204, 236),
    (188, 188, 236),
    (212, 178, 236),
    (236, 174, 236),
    (236, 174, 212),
    (236, 180, 176),
    (228, 196, 144),
    (204, 210, 120),
    (180, 222, 120),
    (168, 226, 144),
    (152, 226, 180),
    (160, 214, 228),
    (160, 162, 160),
    (0, 0, 0),
    (0, 0, 0),
];
