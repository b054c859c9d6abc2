//! Configuration system for the pipeline simulator.
//!
//! This module defines all configuration structures used to parameterize
//! the simulator. It provides:
//! 1. **Defaults:** Baseline machine constants (queue capacity, cycle watchdog, file names).
//! 2. **Structures:** Hierarchical config for general, I/O and pipeline settings.
//! 3. **Loading:** JSON parsing via `serde_json`, with every field optional.
//!
//! Configuration is supplied as JSON through `--config` on the command line, or
//! use `Config::default()` to reproduce the fixed machine.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::common::error::SimError;

/// Default configuration constants for the simulator.
///
/// These values define the baseline machine when not explicitly overridden
/// in a JSON configuration file.
mod defaults {
    pub use crate::common::constants::{
        DEFAULT_DATA_MEMORY_FILE, DEFAULT_INSTRUCTION_FILE, DEFAULT_MAX_CYCLES,
        DEFAULT_OUTPUT_FILE, DEFAULT_REGISTER_FILE, INSTRUCTION_QUEUE_CAPACITY,
    };
}

/// Top-level simulator configuration.
///
/// # Examples
///
/// ```
/// use mipsim_core::config::Config;
///
/// let json = r#"{
///     "general": {
///         "max_cycles": 500
///     },
///     "pipeline": {
///         "queue_capacity": 4,
///         "stall_on_busy_destination": false
///     }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.general.max_cycles, 500);
/// assert!(!config.general.trace_stages);
/// assert_eq!(config.pipeline.queue_capacity, 4);
/// assert_eq!(config.io.output.to_str(), Some("simulation.txt"));
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Input and output file locations
    #[serde(default)]
    pub io: IoConfig,
    /// Pipeline sizing and hazard policy
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

impl Config {
    /// Parses a configuration from a JSON document.
    ///
    /// Missing sections and fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Returns
    ///
    /// [`SimError::SourceUnavailable`] if the file cannot be read, or
    /// [`SimError::Config`] if it is not a valid configuration.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SimError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Enable per-stage trace logging
    #[serde(default)]
    pub trace_stages: bool,

    /// Abort the run if the pipeline has not drained after this many cycles
    #[serde(default = "GeneralConfig::default_max_cycles")]
    pub max_cycles: u64,
}

impl GeneralConfig {
    /// Returns the default cycle watchdog.
    fn default_max_cycles() -> u64 {
        defaults::DEFAULT_MAX_CYCLES
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_stages: false,
            max_cycles: defaults::DEFAULT_MAX_CYCLES,
        }
    }
}

/// Input and output file locations.
///
/// The defaults are the traditional file names in the working directory.
#[derive(Debug, Clone, Deserialize)]
pub struct IoConfig {
    /// Program file, one `<OPCODE,Rd,Rs,Rt>` per line
    #[serde(default = "IoConfig::default_instructions")]
    pub instructions: PathBuf,

    /// Initial register values, one `<Rn,value>` per line
    #[serde(default = "IoConfig::default_registers")]
    pub registers: PathBuf,

    /// Initial data memory, one `<addr,value>` per line
    #[serde(default = "IoConfig::default_data_memory")]
    pub data_memory: PathBuf,

    /// Per-cycle dump destination
    #[serde(default = "IoConfig::default_output")]
    pub output: PathBuf,
}

impl IoConfig {
    /// Returns the default program file.
    fn default_instructions() -> PathBuf {
        PathBuf::from(defaults::DEFAULT_INSTRUCTION_FILE)
    }

    /// Returns the default register file.
    fn default_registers() -> PathBuf {
        PathBuf::from(defaults::DEFAULT_REGISTER_FILE)
    }

    /// Returns the default data memory file.
    fn default_data_memory() -> PathBuf {
        PathBuf::from(defaults::DEFAULT_DATA_MEMORY_FILE)
    }

    /// Returns the default output file.
    fn default_output() -> PathBuf {
        PathBuf::from(defaults::DEFAULT_OUTPUT_FILE)
    }
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            instructions: Self::default_instructions(),
            registers: Self::default_registers(),
            data_memory: Self::default_data_memory(),
            output: Self::default_output(),
        }
    }
}

/// Pipeline sizing and hazard policy.
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    /// Maximum number of instructions held in the instruction queue
    #[serde(default = "PipelineConfig::default_queue_capacity")]
    pub queue_capacity: usize,

    /// Stall decode when the destination register already has a write in flight
    #[serde(default = "PipelineConfig::default_stall_on_busy_destination")]
    pub stall_on_busy_destination: bool,
}

impl PipelineConfig {
    /// Returns the default instruction queue capacity.
    fn default_queue_capacity() -> usize {
        defaults::INSTRUCTION_QUEUE_CAPACITY
    }

    /// Destination checking is on so each register has at most one pending writer.
    fn default_stall_on_busy_destination() -> bool {
        true
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            queue_capacity: defaults::INSTRUCTION_QUEUE_CAPACITY,
            stall_on_busy_destination: true,
        }
    }
}
