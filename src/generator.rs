use std::fmt;

use crate::password_generation as strategies;
use crate::random::RandomSource;
use crate::{entropy, GeneratorConfig, GeneratorError, SeedList, Secret};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// A seed entry, unmodified.
    Plain,
    /// A seed entry followed by random digits.
    SuffixPadded,
    /// Obfuscated words with punctuation and letter padding.
    Obfuscated,
    /// Several distinct seed entries joined with spaces.
    Passphrase,
}

impl Strategy {
    /// Every strategy, in the order a batch runs them.
    pub const ALL: [Strategy; 4] = [
        Strategy::Plain,
        Strategy::SuffixPadded,
        Strategy::Obfuscated,
        Strategy::Passphrase,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Plain => "plain",
            Strategy::SuffixPadded => "suffix-padded",
            Strategy::Obfuscated => "obfuscated",
            Strategy::Passphrase => "passphrase",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A generated password and its estimated entropy in bits.
#[derive(Clone, Debug)]
pub struct Candidate {
    pub password: Secret,
    pub entropy: f64,
    pub strategy: Strategy,
}

/// How many candidates each strategy contributes to a batch of `count`.
///
/// The remainder of the division is dropped, and a count of zero or less yields empty groups.
pub fn group_size(count: i64) -> usize {
    let per_strategy = count.max(0) as u64 / Strategy::ALL.len() as u64;
    usize::try_from(per_strategy).unwrap_or(usize::MAX)
}

/// Candidates reserved per strategy up front. Larger batches grow as they are generated.
const MAX_PREALLOCATED: usize = 1024;

fn batch_capacity(per_strategy: usize) -> usize {
    per_strategy.min(MAX_PREALLOCATED) * Strategy::ALL.len()
}

pub struct Generator {
    config: GeneratorConfig,
    seeds: SeedList,
}

impl Generator {
    pub fn new(config: GeneratorConfig, seeds: SeedList) -> Result<Generator, GeneratorError> {
        config.validate()?;
        Ok(Generator { config, seeds })
    }

    /// Generate and score one candidate.
    pub fn generate<R>(&self, rng: &mut R, strategy: Strategy) -> Candidate
    where
        R: RandomSource + ?Sized,
    {
        let (password, entropy) = match strategy {
            Strategy::Plain => {
                let password = strategies::plain(rng, &self.seeds);
                let bits = entropy::estimate(&password);
                (password, bits)
            }
            Strategy::SuffixPadded => {
                let password = strategies::suffix_padded(rng, &self.seeds, &self.config);
                let bits = entropy::estimate(&password);
                (password, bits)
            }
            Strategy::Obfuscated => {
                let password = strategies::obfuscated(rng, &self.seeds, &self.config);
                let bits = entropy::estimate(&password);
                (password, bits)
            }
            Strategy::Passphrase => {
                let (password, words) = strategies::passphrase(rng, &self.seeds, &self.config);
                (password, entropy::passphrase(self.seeds.len(), words))
            }
        };
        Candidate {
            password: Secret::from(password),
            entropy,
            strategy,
        }
    }

    /// Generate `count` candidates split evenly across every strategy, in [`Strategy::ALL`]
    /// order. See [`group_size`] for how the count is divided.
    pub fn generate_batch<R>(&self, rng: &mut R, count: i64) -> Vec<Candidate>
    where
        R: RandomSource + ?Sized,
    {
        let per_strategy = group_size(count);
        if per_strategy == 0 {
            log::warn!(
                "requested {count} passwords, fewer than one per strategy; nothing to generate"
            );
            return Vec::new();
        }
        log::debug!(
            "generating {per_strategy} passwords for each of {} strategies from {} seeds",
            Strategy::ALL.len(),
            self.seeds.len()
        );

        let mut candidates = Vec::with_capacity(batch_capacity(per_strategy));
        for strategy in Strategy::ALL {
            for _ in 0..per_strategy {
                let candidate = self.generate(rng, strategy);
                log::trace!(
                    "{strategy}: {} characters, {:.2} bits",
                    candidate.password.char_len(),
                    candidate.entropy
                );
                candidates.push(candidate);
            }
        }
        candidates
    }
}
