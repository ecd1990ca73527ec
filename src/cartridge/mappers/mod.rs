// Mappers module - Cartridge bank-translation logic
//
// A mapper turns an address seen on one of the cartridge windows into an
// offset into the PRG or CHR vectors owned by the cartridge. Mappers hold no
// ROM themselves; they are pure address math keyed by the iNES mapper id.

mod mapper0;

pub use mapper0::Mapper0;

/// Cartridge mapper interface
///
/// Each method translates a bus address into an offset into the respective
/// ROM vector, or returns `None` when the address does not belong to the
/// cartridge. The bus falls through to its other devices on `None`.
pub trait Mapper: std::fmt::Debug {
    /// Translate a CPU-side read address into a PRG offset
    fn cpu_map_read(&self, addr: u16) -> Option<usize>;

    /// Translate a CPU-side write address into a PRG offset
    fn cpu_map_write(&self, addr: u16) -> Option<usize>;

    /// Translate a PPU-side read address into a CHR offset
    fn ppu_map_read(&self, addr: u16) -> Option<usize>;

    /// Translate a PPU-side write address into a CHR offset
    ///
    /// Returns `None` for read-only CHR; mappers backing the window with
    /// RAM return the offset so the cartridge accepts the write.
    fn ppu_map_write(&self, addr: u16) -> Option<usize>;
}

/// Error type for mapper creation
#[derive(Debug)]
pub enum MapperError {
    /// The requested mapper number is not supported
    UnsupportedMapper(u8),
}

impl std::fmt::Display for MapperError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapperError::UnsupportedMapper(num) => {
                write!(f, "Mapper {} is not supported", num)
            }
        }
    }
}

impl std::error::Error for MapperError {}

/// Create a mapper instance from an iNES mapper id
///
/// The mapper id comes from the header nibbles in flags 6 and 7. Bank counts
/// are needed because several mappers mirror a single bank across a larger
/// window.
///
/// # Errors
/// Returns `MapperError::UnsupportedMapper` if the id is not implemented.
pub fn create_mapper(
    mapper_id: u8,
    prg_banks: u8,
    chr_banks: u8,
) -> Result<Box<dyn Mapper>, MapperError> {
    match mapper_id {
        0 => Ok(Box::new(Mapper0::new(prg_banks, chr_banks))),
        id => Err(MapperError::UnsupportedMapper(id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapper0_creation() {
        let mapper = create_mapper(0, 1, 1);
        assert!(mapper.is_ok(), "Mapper 0 should always be available");
    }

    #[test]
    fn test_unsupported_mapper() {
        let result = create_mapper(99, 1, 1);
        assert!(matches!(result, Err(MapperError::UnsupportedMapper(99))));
    }

    #[test]
    fn test_unsupported_mapper_message() {
        let err = create_mapper(4, 8, 8).unwrap_err();
        assert_eq!(err.to_string(), "Mapper 4 is not supported");
    }
}
