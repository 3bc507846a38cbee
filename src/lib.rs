//! Generate "tough nut" passwords and passphrases by padding, obfuscating and permuting common
//! words, and estimate the bit entropy of each result.
//!
//! A [`Generator`] combines a [`GeneratorConfig`] with a [`SeedList`] and draws all of its
//! randomness from an injected [`RandomSource`], so a seeded `rand` generator gives reproducible
//! batches.

use std::io;
use std::path::PathBuf;

mod config;
pub mod entropy;
mod generator;
pub mod password_generation;
pub mod random;
mod report;
mod seeds;

pub use config::GeneratorConfig;
pub use generator::{group_size, Candidate, Generator, Strategy};
pub use random::RandomSource;
pub use report::{sort_by_entropy, write_report};
pub use seeds::SeedList;

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct GeneratorError(GeneratorErrorRepr);

impl GeneratorError {
    /// True if the error came from an empty seed list, whether loaded or configured.
    pub fn is_empty_seed_list(&self) -> bool {
        matches!(self.0, GeneratorErrorRepr::EmptySeedList)
    }
}

impl From<GeneratorErrorRepr> for GeneratorError {
    fn from(err: GeneratorErrorRepr) -> GeneratorError {
        GeneratorError(err)
    }
}

#[derive(Debug, thiserror::Error)]
enum GeneratorErrorRepr {
    #[error("failed to read seed file {}: {source}", .path.display())]
    SeedFileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("seed list must be non-empty")]
    EmptySeedList,
    #[error("seed list entry {0} is blank")]
    BlankSeed(usize),
    #[error("invalid generator configuration: {0}")]
    InvalidConfig(String),
    #[error("failed to read configuration file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[source] serde_yaml::Error),
    #[error("failed to write report: {0}")]
    Output(#[source] io::Error),
}

/// A generated password. Its `Debug` output is opaque, so candidates can be logged or asserted on
/// without spilling the password itself.
#[derive(Clone, Eq, PartialEq)]
pub struct Secret(String);

opaque_debug::implement!(Secret);

impl Secret {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters, not bytes.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl From<String> for Secret {
    fn from(s: String) -> Secret {
        Secret(s)
    }
}
