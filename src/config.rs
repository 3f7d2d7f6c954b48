use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use tracing::warn;

use crate::graph::builder::{GraphParams, DEFAULT_MIN_FREQ, DEFAULT_MIN_STRENGTH};
use crate::phonetics::cmudict::CmuDict;

/// File name of the pronunciation dictionary in the data directory.
const DICT_FILE: &str = "cmudict.dict";

/// Where the pronunciation dictionary comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum DictSource {
    /// The platform data directory. A missing file there is not fatal.
    Default(PathBuf),
    /// Named by `RHYMEGRAPH_DICT` or `--dict`. Must be readable.
    Explicit(PathBuf),
}

impl DictSource {
    pub fn path(&self) -> &Path {
        match self {
            DictSource::Default(path) | DictSource::Explicit(path) => path,
        }
    }
}

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy, before this runs.
/// Command-line flags are applied on top with the `with_*` methods.
#[derive(Debug, Clone)]
pub struct Config {
    pub dict: DictSource,
    pub params: GraphParams,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every variable is optional. A value that is set but does not parse
    /// is an error naming the variable.
    pub fn load() -> Result<Self> {
        let dict = match env::var("RHYMEGRAPH_DICT") {
            Ok(path) if !path.is_empty() => DictSource::Explicit(PathBuf::from(path)),
            _ => DictSource::Default(default_dict_path()),
        };

        let params = GraphParams {
            window: parse_var::<usize>("RHYMEGRAPH_WINDOW")?,
            min_strength: parse_var::<f64>("RHYMEGRAPH_MIN_STRENGTH")?
                .unwrap_or(DEFAULT_MIN_STRENGTH),
            min_freq: parse_var::<usize>("RHYMEGRAPH_MIN_FREQ")?.unwrap_or(DEFAULT_MIN_FREQ),
        };

        Ok(Self { dict, params })
    }

    /// Override the dictionary path (`--dict`).
    pub fn with_dict(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.dict = DictSource::Explicit(path);
        }
        self
    }

    /// Override thresholds given on the command line.
    pub fn with_overrides(
        mut self,
        min_strength: Option<f64>,
        min_freq: Option<usize>,
        window: Option<usize>,
    ) -> Self {
        if let Some(min_strength) = min_strength {
            self.params.min_strength = min_strength;
        }
        if let Some(min_freq) = min_freq {
            self.params.min_freq = min_freq;
        }
        if window.is_some() {
            self.params.window = window;
        }
        self
    }

    /// Check the thresholds before a build.
    pub fn validate(&self) -> Result<()> {
        let min_strength = self.params.min_strength;
        if !(0.0..=1.0).contains(&min_strength) {
            anyhow::bail!("min strength must be between 0 and 1, got {min_strength}");
        }
        if self.params.window == Some(0) {
            anyhow::bail!("window must be at least 1 line");
        }
        Ok(())
    }

    /// Load the configured dictionary.
    ///
    /// A missing file at the default location only warns: the run continues
    /// with an empty dictionary and every word resolves from its spelling.
    pub fn load_dictionary(&self) -> Result<CmuDict> {
        match &self.dict {
            DictSource::Explicit(path) => CmuDict::load(path),
            DictSource::Default(path) if !path.exists() => {
                warn!(
                    path = %path.display(),
                    "Pronunciation dictionary not found; rhyme keys will fall back to spelling. \
                     Set RHYMEGRAPH_DICT or pass --dict to use one."
                );
                Ok(CmuDict::empty())
            }
            DictSource::Default(path) => CmuDict::load(path),
        }
    }
}

/// Returns the default dictionary location.
/// Uses the platform data directory: ~/.local/share/rhymegraph/ on Linux.
pub fn default_dict_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("rhymegraph")
        .join(DICT_FILE)
}

/// Parse an optional environment variable. Unset or empty is `None`.
fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("Invalid value for {name}: {raw:?}")),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(dict: DictSource) -> Config {
        Config {
            dict,
            params: GraphParams::default(),
        }
    }

    #[test]
    fn test_overrides_apply_only_when_given() {
        let cfg = config(DictSource::Default(PathBuf::from("x")))
            .with_overrides(Some(0.8), None, Some(4));
        assert_eq!(cfg.params.min_strength, 0.8);
        assert_eq!(cfg.params.min_freq, DEFAULT_MIN_FREQ);
        assert_eq!(cfg.params.window, Some(4));
    }

    #[test]
    fn test_with_dict_makes_path_explicit() {
        let cfg = config(DictSource::Default(PathBuf::from("x")))
            .with_dict(Some(PathBuf::from("/tmp/my.dict")));
        assert_eq!(cfg.dict, DictSource::Explicit(PathBuf::from("/tmp/my.dict")));
        let cfg = cfg.with_dict(None);
        assert_eq!(cfg.dict.path(), Path::new("/tmp/my.dict"));
    }

    #[test]
    fn test_validate() {
        let mut cfg = config(DictSource::Default(PathBuf::from("x")));
        assert!(cfg.validate().is_ok());
        cfg.params.min_strength = 1.5;
        assert!(cfg.validate().is_err());
        cfg.params.min_strength = 0.6;
        cfg.params.window = Some(0);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_missing_default_dictionary_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(DictSource::Default(dir.path().join("absent.dict")));
        let dict = cfg.load_dictionary().unwrap();
        assert!(dict.is_empty());
    }

    #[test]
    fn test_missing_explicit_dictionary_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(DictSource::Explicit(dir.path().join("absent.dict")));
        assert!(cfg.load_dictionary().is_err());
    }

    #[test]
    fn test_default_dict_path_file_name() {
        let path = default_dict_path();
        assert!(path.ends_with("rhymegraph/cmudict.dict"));
    }
}
