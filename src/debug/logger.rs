// Logger - trace logging for CPU and PPU execution
//
// A bounded in-memory ring of trace entries plus an optional log file.
// File lines carry wall-clock timestamps; the in-memory buffer stays raw
// for debugger panels to format themselves.

use super::cpu::CpuState;
use super::ppu::PpuState;
use chrono::Local;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Log level, ordered so a single comparison gates each message
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// No logging
    None,
    /// Error messages only
    Error,
    /// Warnings and errors
    Warning,
    /// Info, warnings, and errors
    Info,
    /// Debug information
    Debug,
    /// Per-instruction trace logging
    Trace,
}

/// A single trace record
#[derive(Debug, Clone)]
pub enum TraceEntry {
    /// CPU register snapshot
    Cpu(CpuState),
    /// PPU timing snapshot
    Ppu(PpuState),
    /// Free-form message
    Message(String),
}

impl std::fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TraceEntry::Cpu(state) => write!(f, "CPU: {}", state),
            TraceEntry::Ppu(state) => write!(f, "PPU: {}", state),
            TraceEntry::Message(msg) => write!(f, "{}", msg),
        }
    }
}

/// Trace logger with a bounded buffer and optional file output
pub struct Logger {
    log_level: LogLevel,

    /// Gate for per-instruction CPU snapshots
    cpu_trace: bool,

    /// Gate for per-frame PPU snapshots
    ppu_trace: bool,

    trace_buffer: Vec<TraceEntry>,

    /// Oldest entries drop beyond this size (0 = unbounded)
    max_buffer_size: usize,

    output_file: Option<File>,
}

impl Logger {
    pub fn new() -> Self {
        Logger {
            log_level: LogLevel::None,
            cpu_trace: false,
            ppu_trace: false,
            trace_buffer: Vec::new(),
            max_buffer_size: 10000,
            output_file: None,
        }
    }

    pub fn set_log_level(&mut self, level: LogLevel) {
        self.log_level = level;
    }

    pub fn log_level(&self) -> LogLevel {
        self.log_level
    }

    pub fn set_cpu_trace(&mut self, enabled: bool) {
        self.cpu_trace = enabled;
    }

    pub fn set_ppu_trace(&mut self, enabled: bool) {
        self.ppu_trace = enabled;
    }

    /// CPU snapshots are recorded only at Trace level with the gate on
    pub fn is_cpu_trace_enabled(&self) -> bool {
        self.cpu_trace && self.log_level >= LogLevel::Trace
    }

    pub fn is_ppu_trace_enabled(&self) -> bool {
        self.ppu_trace && self.log_level >= LogLevel::Trace
    }

    /// Bound the in-memory buffer; 0 keeps everything
    pub fn set_max_buffer_size(&mut self, size: usize) {
        self.max_buffer_size = size;
        if size > 0 && self.trace_buffer.len() > size {
            self.trace_buffer.drain(0..self.trace_buffer.len() - size);
        }
    }

    /// Start mirroring entries into a log file
    pub fn open_log_file<P: AsRef<Path>>(&mut self, path: P) -> std::io::Result<()> {
        self.output_file = Some(File::create(path)?);
        Ok(())
    }

    pub fn close_log_file(&mut self) {
        self.output_file = None;
    }

    pub fn log_cpu_state(&mut self, state: &CpuState) {
        if !self.is_cpu_trace_enabled() {
            return;
        }
        self.add_entry(TraceEntry::Cpu(state.clone()));
    }

    pub fn log_ppu_state(&mut self, state: &PpuState) {
        if !self.is_ppu_trace_enabled() {
            return;
        }
        self.add_entry(TraceEntry::Ppu(state.clone()));
    }

    pub fn log_message(&mut self, level: LogLevel, message: String) {
        if level > self.log_level {
            return;
        }
        self.add_entry(TraceEntry::Message(message));
    }

    fn add_entry(&mut self, entry: TraceEntry) {
        if let Some(ref mut file) = self.output_file {
            let timestamp = Local::now().format("%H:%M:%S%.3f");
            let _ = writeln!(file, "[{}] {}", timestamp, entry);
        }

        self.trace_buffer.push(entry);
        if self.max_buffer_size > 0 && self.trace_buffer.len() > self.max_buffer_size {
            self.trace_buffer.remove(0);
        }
    }

    pub fn trace_buffer(&self) -> &[TraceEntry] {
        &self.trace_buffer
    }

    pub fn clear_buffer(&mut self) {
        self.trace_buffer.clear();
    }

    /// The newest `count` entries
    pub fn last_entries(&self, count: usize) -> &[TraceEntry] {
        let start = self.trace_buffer.len().saturating_sub(count);
        &self.trace_buffer[start..]
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
