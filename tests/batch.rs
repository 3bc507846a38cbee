use std::io::Write;

use rand::rngs::StdRng;
use rand::SeedableRng;
use toughnut::{write_report, Generator, GeneratorConfig, SeedList, Strategy};

fn seed_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn report_for(generator: &Generator, rng_seed: u64, count: i64) -> String {
    let mut candidates = generator.generate_batch(&mut StdRng::seed_from_u64(rng_seed), count);
    let mut out = Vec::new();
    write_report(&mut candidates, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn four_from_two_words() {
    let words = seed_file("password\nrandom\n");
    let config = GeneratorConfig::default();
    let seeds = SeedList::load(&[words.path()], &config).unwrap();
    let generator = Generator::new(config, seeds).unwrap();

    let candidates = generator.generate_batch(&mut StdRng::seed_from_u64(11), 4);
    let strategies: Vec<Strategy> = candidates.iter().map(|c| c.strategy).collect();
    assert_eq!(strategies, Strategy::ALL);

    let report = report_for(&generator, 11, 4);
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines.len(), 4);

    // Lines share one width and the entropy column ascends.
    let mut previous = f64::NEG_INFINITY;
    let mut line_widths = Vec::new();
    for line in &lines {
        let entropy: f64 = line.split_whitespace().last().unwrap().parse().unwrap();
        assert!(entropy >= previous, "{report}");
        previous = entropy;
        line_widths.push(line.chars().count());
    }
    assert!(line_widths.windows(2).all(|w| w[0] == w[1]), "{report}");
}

#[test]
fn reproducible_with_same_seed() {
    let generator = Generator::new(
        GeneratorConfig::default(),
        SeedList::new(GeneratorConfig::default().default_seeds).unwrap(),
    )
    .unwrap();
    assert_eq!(report_for(&generator, 2024, 20), report_for(&generator, 2024, 20));
}

#[test]
fn remainder_is_dropped() {
    let generator = Generator::new(
        GeneratorConfig::default(),
        SeedList::new(GeneratorConfig::default().default_seeds).unwrap(),
    )
    .unwrap();
    assert_eq!(report_for(&generator, 1, 10).lines().count(), 8);
    assert_eq!(report_for(&generator, 1, 3).lines().count(), 0);
    assert_eq!(report_for(&generator, 1, -5).lines().count(), 0);
}

#[test]
fn missing_seed_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("words.txt");
    let err = SeedList::load(&[&missing], &GeneratorConfig::default()).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("failed to read seed file"), "{message}");
    assert!(message.contains("words.txt"), "{message}");
    assert!(!err.is_empty_seed_list());
}

#[test]
fn empty_seed_file_is_an_error() {
    let empty = seed_file("");
    let err = SeedList::load(&[empty.path()], &GeneratorConfig::default()).unwrap_err();
    assert!(err.is_empty_seed_list());
}

#[test]
fn config_file_overrides_lengths() {
    let config_file = seed_file("min_length: 20\nmax_length: 20\ndefault_seeds: [nut]\n");
    let config = GeneratorConfig::load(config_file.path()).unwrap();
    let seeds = SeedList::load::<&std::path::Path>(&[], &config).unwrap();
    let generator = Generator::new(config, seeds).unwrap();

    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..50 {
        let candidate = generator.generate(&mut rng, Strategy::Obfuscated);
        assert_eq!(candidate.password.char_len(), 20);
        let padded = generator.generate(&mut rng, Strategy::SuffixPadded);
        assert_eq!(padded.password.char_len(), 23);
        assert!(padded.password.as_str().starts_with("nut"));
    }
}

#[test]
fn bad_config_file_rejected() {
    let config_file = seed_file("min_length: 40\nmax_length: 20\n");
    let err = GeneratorConfig::load(config_file.path()).unwrap_err();
    assert!(err.to_string().contains("invalid generator configuration"), "{err}");
}
