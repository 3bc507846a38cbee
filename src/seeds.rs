use std::fs;
use std::path::Path;

use crate::random::RandomSource;
use crate::{GeneratorConfig, GeneratorError, GeneratorErrorRepr};

/// The words and phrases every strategy draws from. Never empty, and no entry is blank.
///
/// Entries are opaque: a phrase like `"tough nut"` stays one entry with its internal space.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedList(Vec<String>);

impl SeedList {
    pub fn new(entries: Vec<String>) -> Result<SeedList, GeneratorError> {
        if entries.is_empty() {
            return Err(GeneratorErrorRepr::EmptySeedList.into());
        }
        if let Some(index) = entries.iter().position(|e| e.trim().is_empty()) {
            return Err(GeneratorErrorRepr::BlankSeed(index).into());
        }
        Ok(SeedList(entries))
    }

    /// Load the seed list from word-list files, or fall back to the configured default seeds
    /// if `paths` is empty.
    ///
    /// Every file is split on whitespace, and the tokens of all files are concatenated in file
    /// order. Any unreadable file aborts the load.
    pub fn load<P: AsRef<Path>>(
        paths: &[P],
        config: &GeneratorConfig,
    ) -> Result<SeedList, GeneratorError> {
        if paths.is_empty() {
            log::debug!(
                "no seed files given; using {} default seeds",
                config.default_seeds.len()
            );
            return SeedList::new(config.default_seeds.clone());
        }

        let mut entries = Vec::new();
        for path in paths {
            let path = path.as_ref();
            let contents =
                fs::read_to_string(path).map_err(|source| GeneratorErrorRepr::SeedFileRead {
                    path: path.to_owned(),
                    source,
                })?;
            let before = entries.len();
            entries.extend(contents.split_whitespace().map(str::to_owned));
            log::debug!(
                "read {} seed words from {}",
                entries.len() - before,
                path.display()
            );
        }
        SeedList::new(entries)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// A uniformly chosen entry.
    pub fn pick<R: RandomSource + ?Sized>(&self, rng: &mut R) -> &str {
        // Non-empty, so the index is always in range.
        &self.0[rng.index_below(self.0.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Write;

    #[test]
    fn defaults_when_no_files() {
        let config = GeneratorConfig::default();
        let seeds = SeedList::load::<&Path>(&[], &config).unwrap();
        assert_eq!(seeds.as_slice(), config.default_seeds.as_slice());
    }

    #[test]
    fn files_are_tokenized_and_concatenated() {
        let mut first = tempfile::NamedTempFile::new().unwrap();
        writeln!(first, "correct horse\n  battery\tstaple").unwrap();
        let mut second = tempfile::NamedTempFile::new().unwrap();
        writeln!(second, "tough nut").unwrap();

        let seeds =
            SeedList::load(&[first.path(), second.path()], &GeneratorConfig::default()).unwrap();
        assert_eq!(
            seeds.iter().collect::<Vec<_>>(),
            ["correct", "horse", "battery", "staple", "tough", "nut"]
        );
    }

    #[test]
    fn missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        let err = SeedList::load(&[&missing], &GeneratorConfig::default()).unwrap_err();
        match err.0 {
            GeneratorErrorRepr::SeedFileRead { ref path, .. } => assert_eq!(path, &missing),
            ref other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn blank_file_is_empty_seed_list() {
        let mut blank = tempfile::NamedTempFile::new().unwrap();
        writeln!(blank, "   \n\t\n").unwrap();
        let err = SeedList::load(&[blank.path()], &GeneratorConfig::default()).unwrap_err();
        assert!(err.is_empty_seed_list());
        assert_eq!(err.to_string(), "seed list must be non-empty");
    }

    #[test]
    fn blank_entries_rejected() {
        for blank in ["", "  ", "\t\n"] {
            let err = SeedList::new(vec!["nut".to_owned(), blank.to_owned()]).unwrap_err();
            assert!(matches!(err.0, GeneratorErrorRepr::BlankSeed(1)), "{err}");
        }
    }

    #[test]
    fn pick_returns_an_entry() {
        let seeds = SeedList::new(vec!["a b".to_owned(), "c".to_owned()]).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let picked = seeds.pick(&mut rng);
            assert!(seeds.iter().any(|s| s == picked));
        }
    }
}
