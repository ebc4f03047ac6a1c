//! Markov-chain text generation over a fixed-capacity prefix table.
//!
//! A corpus of words is folded into an [`NGramModel`]: every window of
//! `prefix_len` consecutive words becomes a key of a
//! [`collections::HashTable`], and the word that followed the window is
//! appended to the key's suffix list. Generation walks the table from the
//! all-sentinel prefix, picking suffixes through a [`RandomSource`].

pub mod config;
pub mod error;
pub mod model;
pub mod rng;

pub use config::{Config, DEFAULT_SEED};
pub use error::{ConfigError, WriterError};
pub use model::{NGramModel, SENTINEL, SEPARATOR};
pub use rng::RandomSource;

/// Builds a model from `words` and generates `config.word_count` words
/// with the config's seeded generator.
pub fn run<I, S>(words: I, config: &Config) -> Result<Vec<String>, WriterError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let model = NGramModel::from_config(words, config)?;
    let mut rng = config.rng();
    model.generate(config.word_count, &mut rng)
}
