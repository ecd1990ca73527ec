// Cartridge module - iNES image parsing and cartridge bus gating
//
// The cartridge owns the PRG and CHR vectors parsed from an iNES image and
// a mapper chosen by the header's mapper id. On the bus side it either
// claims an address (returning the mapped byte) or signals "not mine" so
// the bus can fall through to open bus.
//
// # iNES layout
//
// ```text
// 16-byte header: "NES\x1A", PRG banks (16KB), CHR banks (8KB),
//                 flags 6, flags 7, 8 reserved bytes
// [512-byte trainer, when flags 6 bit 2 is set]
// PRG-ROM: prg_banks * 16KB
// CHR-ROM: chr_banks * 8KB (absent when chr_banks == 0 -> 8KB CHR-RAM)
// ```

pub mod mappers;

use mappers::{create_mapper, Mapper, MapperError};
use std::fs;
use std::io;
use std::path::Path;

/// Size of one PRG-ROM bank in bytes (16KB)
const PRG_BANK_SIZE: usize = 16 * 1024;

/// Size of one CHR bank in bytes (8KB)
const CHR_BANK_SIZE: usize = 8 * 1024;

/// Size of the optional trainer blob
const TRAINER_SIZE: usize = 512;

/// Nametable mirroring arrangement
///
/// Fixed by solder pads on NROM boards; switchable on later mappers, which
/// is why the cartridge rather than the PPU is the source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mirroring {
    Horizontal,
    Vertical,
    OneScreenLo,
    OneScreenHi,
}

/// Errors reported while loading an iNES image
///
/// Construction time is the only place the cartridge can fail; a `Cartridge`
/// value is always a valid, mounted image.
#[derive(Debug)]
pub enum INesError {
    /// The file does not begin with the "NES\x1A" magic
    InvalidImage,
    /// The payload is shorter than the header-declared PRG/CHR sizes
    TruncatedImage,
    /// The header names a mapper this crate does not implement
    UnsupportedMapper(u8),
    /// Underlying I/O failure while reading the file
    Io(io::Error),
}

impl std::fmt::Display for INesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            INesError::InvalidImage => write!(f, "Invalid iNES image (bad magic)"),
            INesError::TruncatedImage => write!(f, "Truncated iNES image"),
            INesError::UnsupportedMapper(id) => write!(f, "Unsupported mapper {}", id),
            INesError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for INesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            INesError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for INesError {
    fn from(err: io::Error) -> Self {
        INesError::Io(err)
    }
}

impl From<MapperError> for INesError {
    fn from(err: MapperError) -> Self {
        match err {
            MapperError::UnsupportedMapper(id) => INesError::UnsupportedMapper(id),
        }
    }
}

/// Parsed 16-byte iNES header
#[derive(Debug, Clone, Copy)]
pub struct INesHeader {
    /// Number of 16KB PRG-ROM banks
    pub prg_banks: u8,
    /// Number of 8KB CHR-ROM banks (0 means the board carries CHR-RAM)
    pub chr_banks: u8,
    /// Mapper id assembled from the flags 6/7 nibbles
    pub mapper_id: u8,
    /// Nametable arrangement from flags 6 bit 0
    pub mirroring: Mirroring,
    /// Battery-backed PRG-RAM flag (flags 6 bit 1)
    pub has_battery: bool,
    /// 512-byte trainer present (flags 6 bit 2)
    pub has_trainer: bool,
}

impl INesHeader {
    /// Parse the first 16 bytes of an iNES image
    ///
    /// # Errors
    /// `INesError::InvalidImage` when the magic bytes are wrong or fewer
    /// than 16 bytes are available.
    pub fn parse(data: &[u8]) -> Result<Self, INesError> {
        if data.len() < 16 || &data[0..4] != b"NES\x1A" {
            return Err(INesError::InvalidImage);
        }

        let flags6 = data[6];
        let flags7 = data[7];

        Ok(INesHeader {
            prg_banks: data[4],
            chr_banks: data[5],
            mapper_id: (flags7 & 0xF0) | (flags6 >> 4),
            mirroring: if flags6 & 0x01 != 0 {
                Mirroring::Vertical
            } else {
                Mirroring::Horizontal
            },
            has_battery: flags6 & 0x02 != 0,
            has_trainer: flags6 & 0x04 != 0,
        })
    }
}

/// A mounted game cartridge
///
/// Owns the PRG/CHR vectors and the mapper. Shared between the bus (CPU
/// windows) and the PPU (CHR window and mirroring) behind `Rc<RefCell<..>>`.
pub struct Cartridge {
    header: INesHeader,
    prg_rom: Vec<u8>,
    chr_rom: Vec<u8>,
    /// Writes are accepted on the CHR window only for CHR-RAM boards
    chr_is_ram: bool,
    mapper: Box<dyn Mapper>,
}

impl Cartridge {
    /// Build a cartridge from a complete iNES image held in memory
    ///
    /// # Errors
    /// - `InvalidImage` on a bad magic
    /// - `TruncatedImage` when the PRG/CHR payload is short
    /// - `UnsupportedMapper` for mapper ids this crate does not implement
    pub fn from_ines_bytes(data: &[u8]) -> Result<Self, INesError> {
        let header = INesHeader::parse(data)?;

        let mut offset = 16;
        if header.has_trainer {
            offset += TRAINER_SIZE;
        }

        let prg_len = header.prg_banks as usize * PRG_BANK_SIZE;
        let chr_len = header.chr_banks as usize * CHR_BANK_SIZE;
        if data.len() < offset + prg_len + chr_len {
            return Err(INesError::TruncatedImage);
        }

        let prg_rom = data[offset..offset + prg_len].to_vec();
        offset += prg_len;

        let chr_is_ram = header.chr_banks == 0;
        let chr_rom = if chr_is_ram {
            vec![0; CHR_BANK_SIZE]
        } else {
            data[offset..offset + chr_len].to_vec()
        };

        let mapper = create_mapper(header.mapper_id, header.prg_banks, header.chr_banks)?;

        Ok(Cartridge {
            header,
            prg_rom,
            chr_rom,
            chr_is_ram,
            mapper,
        })
    }

    /// Load a cartridge from an iNES file on disk
    pub fn from_ines_file<P: AsRef<Path>>(path: P) -> Result<Self, INesError> {
        let data = fs::read(path)?;
        Self::from_ines_bytes(&data)
    }

    /// Header facts (bank counts, mapper id, flags)
    pub fn header(&self) -> &INesHeader {
        &self.header
    }

    /// Nametable arrangement the PPU should use
    pub fn mirroring(&self) -> Mirroring {
        self.header.mirroring
    }

    // ========================================
    // Bus gating
    // ========================================

    /// CPU-side read. `None` means the cartridge does not claim the address.
    pub fn cpu_read(&self, addr: u16) -> Option<u8> {
        self.mapper
            .cpu_map_read(addr)
            .and_then(|offset| self.prg_rom.get(offset).copied())
    }

    /// CPU-side write. Returns true when the cartridge claimed the address.
    ///
    /// NROM PRG is read-only, so a claimed write is swallowed; mappers with
    /// registers reinterpret the offset instead.
    pub fn cpu_write(&mut self, addr: u16, _data: u8) -> bool {
        self.mapper.cpu_map_write(addr).is_some()
    }

    /// PPU-side read from the CHR window
    pub fn ppu_read(&self, addr: u16) -> Option<u8> {
        self.mapper
            .ppu_map_read(addr)
            .and_then(|offset| self.chr_rom.get(offset).copied())
    }

    /// PPU-side write to the CHR window (CHR-RAM boards only)
    pub fn ppu_write(&mut self, addr: u16, data: u8) -> bool {
        match self.mapper.ppu_map_write(addr) {
            Some(offset) if self.chr_is_ram && offset < self.chr_rom.len() => {
                self.chr_rom[offset] = data;
                true
            }
            Some(_) => true,
            None => false,
        }
    }
}
