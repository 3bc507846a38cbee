//! Entropy estimates for generated passwords.
//!
//! These are rough upper bounds on guessing difficulty. They do not measure how much randomness
//! went into generating the password.

/// One case of ASCII letters.
pub const SINGLE_CASE_LETTERS: usize = 26;
/// Both cases of ASCII letters.
pub const LETTERS: usize = 52;
/// Letters and digits.
pub const ALPHANUMERIC: usize = 62;
/// Letters, digits and the 32 ASCII punctuation characters.
pub const PRINTABLE: usize = 94;

/// The size of the smallest character class that covers every character of `password`.
pub fn alphabet_size(password: &str) -> usize {
    if password.is_empty() {
        return PRINTABLE;
    }
    if password.chars().all(char::is_alphabetic) {
        let has_upper = password.chars().any(char::is_uppercase);
        let has_lower = password.chars().any(char::is_lowercase);
        // Uncased scripts count as mixed case, not as a single case.
        if has_upper != has_lower {
            SINGLE_CASE_LETTERS
        } else {
            LETTERS
        }
    } else if password.chars().all(char::is_alphanumeric) {
        ALPHANUMERIC
    } else {
        PRINTABLE
    }
}

/// `length × log2(alphabet)`, treating every position as an independent uniform draw from the
/// inferred character class.
pub fn estimate(password: &str) -> f64 {
    let length = password.chars().count() as f64;
    length * (alphabet_size(password) as f64).log2()
}

/// `log2(L × (L-1) × … × (L-m+1))`: the number of ordered selections of `words` distinct entries
/// from a list of `list_len`.
///
/// Summed in log space so long word lists don't overflow. `words` is capped at `list_len`.
pub fn passphrase(list_len: usize, words: usize) -> f64 {
    (0..words.min(list_len))
        .map(|taken| ((list_len - taken) as f64).log2())
        .sum()
}
