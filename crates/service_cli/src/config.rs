//! CLI configuration loading
//!
//! Values are layered, lowest precedence first:
//!
//! 1. Built-in defaults (the constants in `shortrate_core::defaults`)
//! 2. TOML file (`shortrate.toml` unless `--config` says otherwise)
//! 3. `SHORTRATE_*` environment variables
//! 4. Command-line flags, applied by the command itself
//!
//! ```toml
//! [model]
//! long_term_mean = 0.05
//! reversion_speed = 0.1
//! volatility = 0.04
//! amplitude = 0.02
//! frequency = 0.2856
//! initial_rate = 0.02
//!
//! [simulation]
//! num_paths = 1000
//! num_steps = 5000
//! time_step_size = 0.01
//! seed = 42
//! stream_policy = "shared"
//!
//! [output]
//! dir = "./output"
//! format = "svg"
//!
//! [general]
//! log_level = "info"
//! ```

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use shortrate_core::defaults;
use shortrate_core::types::SimulationParameters;
use shortrate_report::{OutputFormat, StreamPolicy};

use crate::{CliError, Result};

/// Accepted `general.log_level` values.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// CLI configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Model coefficients
    #[serde(default)]
    pub model: ModelConfig,

    /// Grid, ensemble and generator settings
    #[serde(default)]
    pub simulation: SimulationConfig,

    /// Artefact settings
    #[serde(default)]
    pub output: OutputConfig,

    /// General settings
    #[serde(default)]
    pub general: GeneralConfig,
}

/// Model coefficients
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModelConfig {
    /// Long-term mean the rate reverts to
    pub long_term_mean: f64,
    /// Mean-reversion speed
    pub reversion_speed: f64,
    /// Diffusion coefficient
    pub volatility: f64,
    /// Harmonic forcing amplitude
    pub amplitude: f64,
    /// Harmonic forcing angular frequency
    pub frequency: f64,
    /// Rate at time zero
    pub initial_rate: f64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            long_term_mean: defaults::LONG_TERM_MEAN,
            reversion_speed: defaults::REVERSION_SPEED,
            volatility: defaults::VOLATILITY,
            amplitude: defaults::AMPLITUDE,
            frequency: defaults::FREQUENCY,
            initial_rate: defaults::INITIAL_RATE,
        }
    }
}

/// Grid, ensemble and generator settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Number of paths
    pub num_paths: usize,
    /// Number of time steps
    pub num_steps: usize,
    /// Step size
    pub time_step_size: f64,
    /// Generator seed
    pub seed: u64,
    /// Whether model runs share one random stream (`shared`) or are seeded
    /// separately (`independent`)
    pub stream_policy: StreamPolicy,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            num_paths: defaults::NUM_PATHS,
            num_steps: defaults::NUM_STEPS,
            time_step_size: defaults::TIME_STEP_SIZE,
            seed: defaults::SEED,
            stream_policy: StreamPolicy::default(),
        }
    }
}

/// Artefact settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Output directory
    pub dir: PathBuf,
    /// Output format (`svg` or `csv`)
    pub format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("./output"),
            format: OutputFormat::default(),
        }
    }
}

/// General CLI settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneralConfig {
    /// Log level
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    ///
    /// A missing file yields the defaults; a file that exists but does not
    /// parse is an error.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
            .map_err(|e| CliError::config(format!("{}: {}", path.display(), e)))
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CliError::config(format!("Failed to parse: {}", e)))
    }

    /// Apply `SHORTRATE_*` environment variable overrides
    pub fn with_env_override(self) -> Result<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`, keyed by environment variable name
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(seed) = parse_var(&lookup, "SHORTRATE_SEED")? {
            self.simulation.seed = seed;
        }

        if let Some(num_paths) = parse_var(&lookup, "SHORTRATE_NUM_PATHS")? {
            self.simulation.num_paths = num_paths;
        }

        if let Some(num_steps) = parse_var(&lookup, "SHORTRATE_NUM_STEPS")? {
            self.simulation.num_steps = num_steps;
        }

        if let Some(format) = parse_var(&lookup, "SHORTRATE_OUTPUT_FORMAT")? {
            self.output.format = format;
        }

        if let Some(dir) = lookup("SHORTRATE_OUTPUT_DIR") {
            self.output.dir = PathBuf::from(dir);
        }

        if let Some(log_level) = lookup("SHORTRATE_LOG_LEVEL") {
            self.general.log_level = log_level;
        }

        Ok(self)
    }

    /// Validate the configuration
    ///
    /// Collects every problem rather than stopping at the first one.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        if !LOG_LEVELS.contains(&self.general.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.general.log_level, LOG_LEVELS
            ));
        }

        if self.output.dir.as_os_str().is_empty() {
            errors.push("output.dir cannot be empty".to_string());
        }

        if let Err(e) = self.to_parameters() {
            errors.push(e.to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(CliError::config(errors.join("; ")))
        }
    }

    /// Simulation parameters described by this configuration
    pub fn to_parameters(&self) -> Result<SimulationParameters> {
        let params = SimulationParameters::builder()
            .long_term_mean(self.model.long_term_mean)
            .reversion_speed(self.model.reversion_speed)
            .volatility(self.model.volatility)
            .amplitude(self.model.amplitude)
            .frequency(self.model.frequency)
            .initial_rate(self.model.initial_rate)
            .num_paths(self.simulation.num_paths)
            .num_steps(self.simulation.num_steps)
            .time_step_size(self.simulation.time_step_size)
            .build()?;
        Ok(params)
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw.trim().parse().map(Some).map_err(|e| {
            CliError::InvalidArgument(format!("{}='{}': {}", key, raw, e))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config_matches_defaults() {
        let config = CliConfig::default();
        let params = config.to_parameters().unwrap();
        assert_eq!(params, SimulationParameters::default());
        assert_eq!(config.simulation.seed, 42);
        assert_eq!(config.output.format, OutputFormat::Svg);
        assert_eq!(config.simulation.stream_policy, StreamPolicy::Shared);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig::from_file(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shortrate.toml");
        std::fs::write(
            &path,
            "[simulation]\nnum_paths = 250\nstream_policy = \"independent\"\n\n[output]\nformat = \"csv\"\n",
        )
        .unwrap();

        let config = CliConfig::from_file(&path).unwrap();
        assert_eq!(config.simulation.num_paths, 250);
        assert_eq!(config.simulation.num_steps, defaults::NUM_STEPS);
        assert_eq!(config.model, ModelConfig::default());
        assert_eq!(config.output.format, OutputFormat::Csv);
        assert_eq!(config.simulation.stream_policy, StreamPolicy::Independent);
    }

    #[test]
    fn test_unknown_enum_values_fail_to_parse() {
        let err = CliConfig::from_toml_str("[output]\nformat = \"png\"\n").unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
        assert!(err.to_string().contains("png"));

        let err = CliConfig::from_toml_str("[simulation]\nstream_policy = \"split\"\n").unwrap_err();
        assert!(matches!(err, CliError::Config(_)));

        // Variant names are lowercase only
        assert!(CliConfig::from_toml_str("[output]\nformat = \"SVG\"\n").is_err());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shortrate.toml");
        std::fs::write(&path, "[simulation\nnum_paths = ").unwrap();
        assert!(matches!(
            CliConfig::from_file(&path),
            Err(CliError::Config(_))
        ));

        assert!(CliConfig::from_toml_str("[simulation]\nnum_pahts = 3\n").is_err());
    }

    #[test]
    fn test_env_overrides() {
        let config = CliConfig::default()
            .with_overrides(lookup(&[
                ("SHORTRATE_SEED", "7"),
                ("SHORTRATE_NUM_PATHS", " 12 "),
                ("SHORTRATE_NUM_STEPS", "34"),
                ("SHORTRATE_OUTPUT_DIR", "/tmp/charts"),
                ("SHORTRATE_OUTPUT_FORMAT", "CSV"),
                ("SHORTRATE_LOG_LEVEL", "debug"),
            ]))
            .unwrap();

        assert_eq!(config.simulation.seed, 7);
        assert_eq!(config.simulation.num_paths, 12);
        assert_eq!(config.simulation.num_steps, 34);
        assert_eq!(config.output.dir, PathBuf::from("/tmp/charts"));
        assert_eq!(config.output.format, OutputFormat::Csv);
        assert_eq!(config.general.log_level, "debug");
    }

    #[test]
    fn test_unparseable_env_override() {
        let err = CliConfig::default()
            .with_overrides(lookup(&[("SHORTRATE_NUM_PATHS", "many")]))
            .unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument(_)));
        assert!(err.to_string().contains("SHORTRATE_NUM_PATHS"));
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let mut config = CliConfig::default();
        config.general.log_level = "loud".to_string();
        config.output.dir = PathBuf::new();
        config.simulation.num_paths = 0;

        let msg = config.validate().unwrap_err().to_string();
        assert!(msg.contains("log_level"));
        assert!(msg.contains("output.dir"));
        assert!(msg.contains("num_paths"));
    }

    #[test]
    fn test_validate_valid_log_levels() {
        for level in &["trace", "debug", "info", "warn", "error", "INFO"] {
            let mut config = CliConfig::default();
            config.general.log_level = level.to_string();
            assert!(config.validate().is_ok(), "Log level '{}' should be valid", level);
        }
    }
}
