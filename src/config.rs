use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::GeneratorErrorRepr;

/// Parameters shared by every strategy for the whole run.
///
/// Any field missing from a YAML config keeps its default.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Exclusive upper bound on the length of each random punctuation or letter pad.
    pub padding_width: usize,
    /// Lower bound on the target length of padded passwords.
    pub min_length: usize,
    /// Upper bound on the target length of padded passwords.
    pub max_length: usize,
    /// Fewest words in a passphrase.
    pub min_words: usize,
    /// Exclusive upper bound on the number of words in a passphrase.
    pub max_words: usize,
    /// Seeds used when no seed files are supplied.
    pub default_seeds: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> GeneratorConfig {
        GeneratorConfig {
            padding_width: 3,
            min_length: 12,
            max_length: 32,
            min_words: 3,
            max_words: 5,
            default_seeds: DEFAULT_SEEDS.iter().map(|s| (*s).to_owned()).collect(),
        }
    }
}

impl GeneratorConfig {
    /// Read and validate a YAML configuration file.
    pub fn load(path: &Path) -> Result<GeneratorConfig, crate::GeneratorError> {
        let contents = fs::read_to_string(path).map_err(|source| GeneratorErrorRepr::ConfigRead {
            path: path.to_owned(),
            source,
        })?;
        log::debug!("loaded configuration from {}", path.display());
        GeneratorConfig::from_yaml_str(&contents)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<GeneratorConfig, crate::GeneratorError> {
        let config: GeneratorConfig =
            serde_yaml::from_str(yaml).map_err(GeneratorErrorRepr::ConfigParse)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the bounds the strategies rely on: non-empty random ranges and a usable default
    /// seed list.
    pub fn validate(&self) -> Result<(), crate::GeneratorError> {
        let invalid = |msg: String| -> Result<(), crate::GeneratorError> {
            Err(GeneratorErrorRepr::InvalidConfig(msg).into())
        };
        if self.padding_width == 0 {
            return invalid("padding_width must be at least 1".to_owned());
        }
        if self.min_length > self.max_length {
            return invalid(format!(
                "min_length ({}) is greater than max_length ({})",
                self.min_length, self.max_length
            ));
        }
        if self.min_words == 0 {
            return invalid("min_words must be at least 1".to_owned());
        }
        if self.min_words >= self.max_words {
            return invalid(format!(
                "min_words ({}) must be less than max_words ({})",
                self.min_words, self.max_words
            ));
        }
        if self.default_seeds.is_empty() {
            return Err(GeneratorErrorRepr::EmptySeedList.into());
        }
        if let Some(index) = self.default_seeds.iter().position(|s| s.trim().is_empty()) {
            return invalid(format!("default_seeds entry {index} is blank"));
        }
        Ok(())
    }
}

static DEFAULT_SEEDS: &[&str] = &[
    "My grace is sufficient for you, for my power is made perfect in weakness.",
    "A generous man will prosper; he who refreshes others will himself be refreshed.",
    "password",
    "random",
    "tough nut",
    "cracker",
    "correct horse battery staple",
    "2 Corinthians 8-9",
];
