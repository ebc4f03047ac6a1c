use std::collections::VecDeque;

use collections::HashTable;
use log::{debug, trace};

use crate::{
    config::Config,
    error::{ConfigError, WriterError},
    rng::RandomSource,
};

/// Placeholder filling the prefix window before any real word was seen
pub const SENTINEL: &str = "@";

/// Joins the words of a prefix into a table key
pub const SEPARATOR: &str = " ";

/// Prefix to suffix-list model of a word corpus.
///
/// Keys are `prefix_len` words joined with [`SEPARATOR`]; each key maps to
/// the words that followed it in the corpus, in corpus order and with
/// repetitions, so frequent successors are picked more often.
#[derive(Debug, Clone)]
pub struct NGramModel {
    prefix_len: usize,
    table: HashTable,
}

/// The last `n` words seen, oldest first
#[derive(Debug)]
struct Window {
    words: VecDeque<String>,
}

impl Window {
    fn new(n: usize) -> Self {
        Self {
            words: (0..n).map(|_| SENTINEL.to_owned()).collect(),
        }
    }

    fn key(&self) -> String {
        join(self.words.iter().map(String::as_str))
    }

    /// Drops the oldest word and appends `word`
    fn slide(&mut self, word: &str) {
        self.words.pop_front();
        self.words.push_back(word.to_owned());
    }
}

fn join<'a>(words: impl Iterator<Item = &'a str>) -> String {
    let mut key = String::new();
    for (i, w) in words.enumerate() {
        if i > 0 {
            key.push_str(SEPARATOR);
        }
        key.push_str(w);
    }
    key
}

impl NGramModel {
    /// Folds `words` into a table of `capacity` slots using prefixes of
    /// `prefix_len` words.
    ///
    /// # Errors
    ///
    /// - [`ConfigError`] if `prefix_len` or `capacity` is zero, checked
    ///   before the table is allocated
    /// - [`collections::TableError::CapacityExhausted`] if the corpus has
    ///   more distinct prefixes than the table has slots
    pub fn build<I, S>(words: I, prefix_len: usize, capacity: usize) -> Result<Self, WriterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if prefix_len < 1 {
            return Err(ConfigError::InvalidPrefixLength.into());
        }
        if capacity < 1 {
            return Err(ConfigError::InvalidCapacity.into());
        }

        let mut table = HashTable::new_with_slots(capacity)?;
        let mut window = Window::new(prefix_len);
        let mut seen = 0usize;

        for word in words {
            let word = word.as_ref();
            let key = window.key();
            trace!(target: "ingest", "{key:?} -> {word:?}");
            table.insert_or_append(&key, word)?;
            window.slide(word);
            seen += 1;
        }

        debug!(
            target: "ingest",
            "ingested {seen} words into {} prefixes, load factor {:.2}",
            table.used(),
            table.load_factor_f32()
        );

        Ok(Self { prefix_len, table })
    }

    /// Shorthand for `Self::build(words, config.prefix_len, config.capacity)`
    pub fn from_config<I, S>(words: I, config: &Config) -> Result<Self, WriterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::build(words, config.prefix_len, config.capacity)
    }

    pub fn prefix_len(&self) -> usize {
        self.prefix_len
    }

    pub fn table(&self) -> &HashTable {
        &self.table
    }

    /// Suffixes recorded after `prefix`, `None` if it was never seen
    pub fn suffixes(&self, prefix: &[&str]) -> Option<&[String]> {
        if prefix.len() != self.prefix_len {
            return None;
        }
        self.table.get(&join(prefix.iter().copied()))
    }

    /// Walks the model from the all-sentinel prefix for up to `count` words.
    ///
    /// Stops early at a prefix that has no recorded suffix. `rng` is only
    /// consulted when a prefix has more than one suffix. Every call starts
    /// over from the sentinel prefix.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidWordCount`] if `count` is zero
    pub fn generate<R>(&self, count: usize, rng: &mut R) -> Result<Vec<String>, WriterError>
    where
        R: RandomSource + ?Sized,
    {
        if count < 1 {
            return Err(ConfigError::InvalidWordCount.into());
        }

        let mut out = Vec::with_capacity(count);
        let mut window = Window::new(self.prefix_len);

        while out.len() < count {
            let key = window.key();
            let Some(suffixes) = self.table.get(&key) else {
                trace!(target: "generate", "dead end at {key:?}");
                break;
            };

            let word = match suffixes {
                [only] => only,
                _ => {
                    let i = rng.pick(suffixes.len());
                    debug_assert!(i < suffixes.len(), "pick {i} out of 0..{}", suffixes.len());
                    &suffixes[i]
                }
            };
            trace!(target: "generate", "{key:?} -> {word:?}");

            window.slide(word);
            out.push(word.clone());
        }

        debug!(target: "generate", "generated {} of {count} words", out.len());
        Ok(out)
    }
}
