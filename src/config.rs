use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;

/// Configuration for the binary array sort demo
#[derive(Debug, Clone, Default, Deserialize, Parser)]
#[serde(deny_unknown_fields)]
#[command(name = "binsort")]
#[command(about = "Sort a binary array in place by counting and rewriting")]
pub struct Config {
    /// Comma-separated integers to sort instead of the built-in sample
    #[arg(long, value_name = "LIST", allow_hyphen_values = true)]
    pub values: Option<String>,

    /// File of whitespace- or comma-separated integers to sort
    #[arg(long, value_name = "FILE")]
    pub input: Option<String>,

    /// TOML file holding these same settings (cannot be combined with them)
    #[arg(long, value_name = "FILE")]
    #[serde(skip)]
    pub config: Option<String>,

    /// Do not print the "Length:" line
    #[arg(long, default_value_t = false)]
    #[serde(default)]
    pub quiet: bool,
}

impl Config {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.values.is_some() && self.input.is_some() {
            anyhow::bail!("--values and --input are mutually exclusive");
        }

        if self.config.is_some() && (self.values.is_some() || self.input.is_some() || self.quiet) {
            anyhow::bail!("--config cannot be combined with --values, --input or --quiet");
        }

        Ok(())
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        Ok(config)
    }

    /// Resolve the effective configuration, loading the `--config` file if given.
    pub fn resolve(self) -> Result<Self> {
        self.validate()?;
        let config = match &self.config {
            Some(path) => Self::from_file(path)?,
            None => self,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.values = Some("1,0".to_string());
        assert!(config.validate().is_ok());

        config.input = Some("data.txt".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_args() {
        let config = Config::parse_from(["binsort", "--values", "-1,2", "--quiet"]);
        assert_eq!(config.values.as_deref(), Some("-1,2"));
        assert!(config.quiet);
        assert!(config.input.is_none());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "values = \"5,-3,0,2\"").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.values.as_deref(), Some("5,-3,0,2"));
        assert!(!config.quiet);
        assert!(config.config.is_none());
    }

    #[test]
    fn test_from_file_missing_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");

        let err = Config::from_file(&path).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("reading config file"));
        assert!(message.contains(&path.display().to_string()));
    }

    #[test]
    fn test_from_file_rejects_unknown_key() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "values = \"2,0\"").unwrap();
        writeln!(file, "quite = true").unwrap();

        let err = Config::from_file(file.path()).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("parsing config file"));
        assert!(message.contains("quite"));
    }

    #[test]
    fn test_resolve_rejects_flags_with_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "values = \"2,0\"").unwrap();
        let path = file.path().display().to_string();

        let quiet = Config::parse_from(["binsort", "--config", path.as_str(), "--quiet"]);
        assert!(quiet.resolve().is_err());

        let values = Config::parse_from(["binsort", "--config", path.as_str(), "--values", "1"]);
        assert!(values.resolve().is_err());

        let plain = Config::parse_from(["binsort", "--config", path.as_str()]);
        let resolved = plain.resolve().unwrap();
        assert_eq!(resolved.values.as_deref(), Some("2,0"));
    }

    #[test]
    fn test_resolve_rejects_conflicting_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "values = \"1\"").unwrap();
        writeln!(file, "input = \"data.txt\"").unwrap();

        let config = Config {
            config: Some(file.path().display().to_string()),
            ..Config::default()
        };
        assert!(config.resolve().is_err());
    }
}
