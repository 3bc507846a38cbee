//! The four password generation strategies, and the character-level transforms they are built
//! from.
//!
//! Each strategy is a plain function of the seed list, the configuration and the draws it takes
//! from the [`RandomSource`]. Given the same source state, it returns the same string.

use crate::random::RandomSource;
use crate::{GeneratorConfig, SeedList};

pub static DIGITS: &str = "0123456789";
pub static LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub static PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;
pub static PUNCTUATION_AND_DIGITS: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~0123456789"##;

/// Look-alike substitutions. Each alphabet holds case variants, digits and symbols that resemble
/// the letter.
static LEET_TABLE: &[(char, &str)] = &[
    ('a', "Aa@2"),
    ('e', "Ee3"),
    ('g', "Gg69"),
    ('i', "Ii1!"),
    ('o', "Oo0"),
    ('s', "Ss$45"),
    ('t', "Tt7"),
];

/// Sample `len` characters uniformly from an ASCII `alphabet`.
pub fn random_run<R>(rng: &mut R, alphabet: &str, len: usize) -> String
where
    R: RandomSource + ?Sized,
{
    debug_assert!(alphabet.is_ascii() && !alphabet.is_empty());
    let alphabet = alphabet.as_bytes();
    (0..len)
        .map(|_| char::from(alphabet[rng.index_below(alphabet.len())]))
        .collect()
}

/// Flip a coin per character to upper- or lower-case it.
pub fn camel<R>(rng: &mut R, word: &str) -> String
where
    R: RandomSource + ?Sized,
{
    let mut out = String::with_capacity(word.len());
    for ch in word.chars() {
        push_camel(rng, ch, &mut out);
    }
    out
}

/// Replace every letter in [`LEET_TABLE`] with a random look-alike. Other characters are
/// camel-cased.
pub fn obfuscate<R>(rng: &mut R, word: &str) -> String
where
    R: RandomSource + ?Sized,
{
    let mut out = String::with_capacity(word.len());
    for ch in word.chars() {
        match leet_alphabet(ch) {
            Some(substitutes) => {
                let substitutes = substitutes.as_bytes();
                out.push(char::from(substitutes[rng.index_below(substitutes.len())]));
            }
            None => push_camel(rng, ch, &mut out),
        }
    }
    out
}

fn push_camel<R>(rng: &mut R, ch: char, out: &mut String)
where
    R: RandomSource + ?Sized,
{
    if rng.coin() {
        out.extend(ch.to_lowercase());
    } else {
        out.extend(ch.to_uppercase());
    }
}

fn leet_alphabet(ch: char) -> Option<&'static str> {
    let lower = ch.to_ascii_lowercase();
    LEET_TABLE
        .iter()
        .find(|(letter, _)| *letter == lower)
        .map(|(_, substitutes)| *substitutes)
}

/// Emit a seed entry unmodified.
pub fn plain<R>(rng: &mut R, seeds: &SeedList) -> String
where
    R: RandomSource + ?Sized,
{
    seeds.pick(rng).to_owned()
}

/// Emit a seed entry, followed by `min_length..=max_length` random digits if the entry is
/// shorter than `max_length`.
pub fn suffix_padded<R>(rng: &mut R, seeds: &SeedList, config: &GeneratorConfig) -> String
where
    R: RandomSource + ?Sized,
{
    let mut password = seeds.pick(rng).to_owned();
    if password.chars().count() < config.max_length {
        let len = rng.between_inclusive(config.min_length, config.max_length);
        password.push_str(&random_run(rng, DIGITS, len));
    }
    password
}

/// Obfuscate a seed entry word by word, pad it, and top it up to a random target length.
///
/// Every word gets a random punctuation prefix and is then either camel-cased or obfuscated as
/// a whole. A random run of letters follows the last word. If the result is still shorter than
/// a target drawn from `min_length..=max_length`, punctuation and digits fill the gap exactly.
pub fn obfuscated<R>(rng: &mut R, seeds: &SeedList, config: &GeneratorConfig) -> String
where
    R: RandomSource + ?Sized,
{
    let seed = seeds.pick(rng);
    let target = rng.between_inclusive(config.min_length, config.max_length);

    let mut password = String::new();
    for word in seed.split_whitespace() {
        let prefix_len = rng.index_below(config.padding_width);
        password.push_str(&random_run(rng, PUNCTUATION, prefix_len));
        let transformed = if rng.coin() {
            obfuscate(rng, word)
        } else {
            camel(rng, word)
        };
        password.push_str(&transformed);
    }
    let suffix_len = rng.index_below(config.padding_width);
    password.push_str(&random_run(rng, LETTERS, suffix_len));

    let len = password.chars().count();
    if len < target {
        password.push_str(&random_run(rng, PUNCTUATION_AND_DIGITS, target - len));
    }
    password
}

/// An xkcd-style passphrase: `min_words..max_words` distinct seed entries joined with spaces.
///
/// Returns the passphrase and the number of words actually used. That number is lower than the
/// drawn count only when the seed list is shorter.
pub fn passphrase<R>(rng: &mut R, seeds: &SeedList, config: &GeneratorConfig) -> (String, usize)
where
    R: RandomSource + ?Sized,
{
    let mut words: Vec<&str> = seeds.iter().collect();
    rng.shuffle(&mut words);
    let wanted = rng.between_inclusive(config.min_words, config.max_words - 1);
    let taken = wanted.min(words.len());
    let phrase = words[..taken]
        .iter()
        .map(|word| word.trim())
        .collect::<Vec<_>>()
        .join(" ");
    (phrase, taken)
}
