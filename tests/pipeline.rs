use markov_writer::{Config, ConfigError, NGramModel, RandomSource, SENTINEL, WriterError};

/// Always takes the last candidate
struct Last;

impl RandomSource for Last {
    fn pick(&mut self, bound: usize) -> usize {
        bound - 1
    }
}

const CORPUS: &str = "I am not a number I am a free man \
                      I am not a number I am a free man";

#[test]
fn run_respects_word_count() {
    let config = Config::new(64, 2, 12).unwrap();
    let text = markov_writer::run(CORPUS.split_whitespace(), &config).unwrap();

    assert!(!text.is_empty());
    assert!(text.len() <= 12);
    assert_eq!(text[0], "I");
    assert_eq!(text[1], "am");
}

#[test]
fn run_is_seeded() {
    let config = Config::new(64, 1, 30).unwrap().with_seed(1234);
    let a = markov_writer::run(CORPUS.split_whitespace(), &config).unwrap();
    let b = markov_writer::run(CORPUS.split_whitespace(), &config).unwrap();
    assert_eq!(a, b);
}

#[test]
fn every_generated_pair_was_observed() {
    let model = NGramModel::build(CORPUS.split_whitespace(), 1, 64).unwrap();
    let text = model.generate(50, &mut Last).unwrap();

    let mut prev = SENTINEL;
    for word in &text {
        let seen = model.suffixes(&[prev]).unwrap();
        assert!(seen.contains(word), "{prev:?} never followed by {word:?}");
        prev = word.as_str();
    }
}

#[test]
fn table_too_small() {
    let config = Config::new(3, 1, 10).unwrap();
    let err = markov_writer::run(CORPUS.split_whitespace(), &config).unwrap_err();
    assert!(matches!(err, WriterError::Table(_)));
    assert!(err.to_string().contains("capacity: 3"));
}

#[test]
fn config_rejected_before_build() {
    assert_eq!(Config::from_args(["8", "0", "5"]), Err(ConfigError::InvalidPrefixLength));
    assert_eq!(Config::from_args(["8", "1", "0"]), Err(ConfigError::InvalidWordCount));
}
