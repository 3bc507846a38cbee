use std::fmt::{self, Display};
use std::io::Write;

use unicode_width::UnicodeWidthStr;

use crate::{Candidate, GeneratorError, GeneratorErrorRepr};

/// Stable ascending sort on entropy. Ties keep their generation order.
pub fn sort_by_entropy(candidates: &mut [Candidate]) {
    candidates.sort_by(|a, b| a.entropy.total_cmp(&b.entropy));
}

/// Sort `candidates` by entropy and write one aligned line per candidate: the password padded to
/// the widest one, its length in characters, and its entropy to two decimal places.
pub fn write_report(
    candidates: &mut [Candidate],
    mut output: impl Write,
) -> Result<(), GeneratorError> {
    sort_by_entropy(candidates);
    let column_width = candidates
        .iter()
        .map(|c| c.password.as_str().width())
        .max()
        .unwrap_or(0);

    for candidate in candidates.iter() {
        writeln!(
            &mut output,
            "{} {:>4} {:>8.2}",
            Padded(candidate.password.as_str(), column_width),
            candidate.password.char_len(),
            candidate.entropy
        )
        .map_err(GeneratorErrorRepr::Output)?;
    }
    Ok(())
}

struct Padded<'a>(&'a str, usize);

impl Display for Padded<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let padding = self.1.saturating_sub(self.0.width());
        write!(f, "{}", self.0)?;
        for _ in 0..padding {
            write!(f, " ")?;
        }
        Ok(())
    }
}
