use config::{Config as ConfigLoader, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

use super::error::Error;

pub const DEFAULT_LAYOUT_SIZES: [i64; 4] = [100, 10_000, 100_000, 200_000];
pub const DEFAULT_LAYOUT_ITERATIONS: i64 = 10_000;
pub const DEFAULT_FALSE_SHARING_SIZE: i64 = 200_000;
pub const DEFAULT_FALSE_SHARING_ITERATIONS: i64 = 5_000;
pub const DEFAULT_TIE_TOLERANCE: f64 = 0.02;

#[derive(Debug, Deserialize, Clone)]
pub struct LayoutConfig {
    pub sizes: Vec<usize>,
    pub iterations: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FalseSharingConfig {
    pub size: usize,
    pub iterations: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReportConfig {
    /// Relative difference under which two totals are reported as a tie.
    pub tie_tolerance: f64,
    /// When set, every comparison is also written to this CSV file.
    #[serde(default)]
    pub csv_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub layout: LayoutConfig,
    pub false_sharing: FalseSharingConfig,
    pub report: ReportConfig,
}

impl Config {
    fn validate(self) -> Result<Self, Error> {
        if self.layout.iterations == 0 {
            return Err(Error::ConfigLoadError(
                "layout.iterations must be at least 1".to_string(),
            ));
        }
        if self.false_sharing.iterations == 0 {
            return Err(Error::ConfigLoadError(
                "false_sharing.iterations must be at least 1".to_string(),
            ));
        }
        if !(0.0..1.0).contains(&self.report.tie_tolerance) {
            return Err(Error::ConfigLoadError(format!(
                "report.tie_tolerance must be in [0, 1), got {}",
                self.report.tie_tolerance
            )));
        }
        Ok(self)
    }
}

/// Loads configuration from `crates/executor/Config.toml` (relative to the
/// working directory) and environment variables.
pub fn load_config() -> Result<Config, Error> {
    let base_path = env::current_dir().map_err(|e| {
        Error::ConfigLoadError(format!("Failed to determine current directory: {}", e))
    })?;

    let config_file_path: PathBuf = base_path
        .join("crates")
        .join("executor")
        .join("Config.toml");

    load_config_from(&config_file_path)
}

/// Layers built-in defaults, the optional file at `path`, then `EXECUTOR_*`
/// environment variables (`__` separates sections, e.g.
/// `EXECUTOR_LAYOUT__ITERATIONS=100`, `EXECUTOR_LAYOUT__SIZES=100,1000`).
pub fn load_config_from(path: &Path) -> Result<Config, Error> {
    let s = ConfigLoader::builder()
        .set_default("layout.sizes", DEFAULT_LAYOUT_SIZES.to_vec())
        .and_then(|b| b.set_default("layout.iterations", DEFAULT_LAYOUT_ITERATIONS))
        .and_then(|b| b.set_default("false_sharing.size", DEFAULT_FALSE_SHARING_SIZE))
        .and_then(|b| {
            b.set_default(
                "false_sharing.iterations",
                DEFAULT_FALSE_SHARING_ITERATIONS,
            )
        })
        .and_then(|b| b.set_default("report.tie_tolerance", DEFAULT_TIE_TOLERANCE))
        .map_err(|e| Error::ConfigLoadError(e.to_string()))?
        .add_source(File::from(path).required(false))
        .add_source(
            Environment::with_prefix("EXECUTOR")
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("layout.sizes")
                .try_parsing(true),
        )
        .build()
        .map_err(|e| Error::ConfigLoadError(e.to_string()))?;

    let app_config: Config = s
        .try_deserialize()
        .map_err(|e| Error::ConfigLoadError(format!("Failed to deserialize config: {}", e)))?;

    app_config.validate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile};

    fn toml_file(content: &str) -> NamedTempFile {
        let mut temp_file = Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("Failed to create temp file");
        temp_file
            .write_all(content.as_bytes())
            .expect("Failed to write config content");
        temp_file
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = load_config_from(Path::new("does_not_exist/Config.toml"))
            .expect("defaults should load");

        assert_eq!(config.layout.sizes, vec![100, 10_000, 100_000, 200_000]);
        assert_eq!(config.layout.iterations, 10_000);
        assert_eq!(config.false_sharing.size, 200_000);
        assert_eq!(config.false_sharing.iterations, 5_000);
        assert_eq!(config.report.tie_tolerance, 0.02);
        assert!(config.report.csv_path.is_none());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let file = toml_file(
            "\
[layout]
sizes = [5, 50]
iterations = 3

[false_sharing]
iterations = 2

[report]
csv_path = \"out.csv\"
",
        );

        let config = load_config_from(file.path()).expect("config should load");

        assert_eq!(config.layout.sizes, vec![5, 50]);
        assert_eq!(config.layout.iterations, 3);
        assert_eq!(config.false_sharing.iterations, 2);
        // untouched keys keep their defaults
        assert_eq!(config.false_sharing.size, 200_000);
        assert_eq!(config.report.csv_path, Some(PathBuf::from("out.csv")));
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let file = toml_file("[false_sharing]\niterations = 0\n");

        let result = load_config_from(file.path());
        assert!(
            matches!(result, Err(Error::ConfigLoadError(ref msg)) if msg.contains("false_sharing.iterations")),
            "Expected ConfigLoadError, got: {:?}",
            result
        );
    }

    #[test]
    fn test_out_of_range_tolerance_rejected() {
        let file = toml_file("[report]\ntie_tolerance = 1.5\n");

        assert!(matches!(
            load_config_from(file.path()),
            Err(Error::ConfigLoadError(_))
        ));
    }

    #[test]
    fn test_malformed_file_is_reported() {
        let file = toml_file("[layout\nsizes = ");

        assert!(matches!(
            load_config_from(file.path()),
            Err(Error::ConfigLoadError(_))
        ));
    }
}
