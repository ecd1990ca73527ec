// Configuration management
//
// Settings a headless core actually has: trace logging, the disassembly
// window the CLI prints, and how long a bounded run lasts. Persisted as
// TOML next to the executable.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Default configuration file name
const CONFIG_FILE: &str = "famicore.toml";

/// Errors from loading or saving the configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Underlying I/O failure
    Io(io::Error),
    /// The file exists but is not valid TOML for this schema
    Parse(toml::de::Error),
    /// Serialization failure on save
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "Config I/O error: {}", err),
            ConfigError::Parse(err) => write!(f, "Config parse error: {}", err),
            ConfigError::Serialize(err) => write!(f, "Config serialize error: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::Io(err)
    }
}

/// Emulator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmulatorConfig {
    /// Trace logging settings
    pub trace: TraceConfig,

    /// Disassembly listing settings
    pub disassembly: DisassemblyConfig,

    /// Bounded-run settings for the CLI driver
    pub run: RunConfig,
}

/// Trace logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceConfig {
    /// Record a CPU snapshot at every instruction boundary
    pub cpu_trace: bool,

    /// Record a PPU snapshot at every completed frame
    pub ppu_trace: bool,

    /// Mirror trace entries into this file when set
    pub log_file: Option<PathBuf>,

    /// In-memory trace ring size (0 = unbounded)
    pub buffer_size: usize,
}

/// Disassembly listing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisassemblyConfig {
    /// Bytes disassembled after the entry point
    pub window: u16,
}

/// Bounded-run settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Frames to run before the CLI driver stops
    pub frames: u32,
}

impl Default for EmulatorConfig {
    fn default() -> Self {
        EmulatorConfig {
            trace: TraceConfig {
                cpu_trace: false,
                ppu_trace: false,
                log_file: None,
                buffer_size: 10000,
            },
            disassembly: DisassemblyConfig { window: 64 },
            run: RunConfig { frames: 60 },
        }
    }
}

impl EmulatorConfig {
    /// Load from the default file, falling back to defaults when absent or
    /// unreadable
    pub fn load_or_default() -> Self {
        Self::load_from(CONFIG_FILE).unwrap_or_default()
    }

    /// Load from a specific path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(ConfigError::Parse)
    }

    /// Save to a specific path
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        fs::write(path, contents)?;
        Ok(())
    }
}
