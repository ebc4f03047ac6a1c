use rand::{SeedableRng, rngs::StdRng};

use crate::error::ConfigError;

/// Seed used when none is given
pub const DEFAULT_SEED: u64 = 8;

/// Validated generation parameters.
///
/// Every field is at least one once a `Config` exists, so a model can be
/// built from it without further checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Number of slots in the prefix table
    pub capacity: usize,
    /// Words per prefix
    pub prefix_len: usize,
    /// Upper bound on the generated text, in words
    pub word_count: usize,
    pub seed: u64,
}

impl Config {
    pub fn new(capacity: usize, prefix_len: usize, word_count: usize) -> Result<Self, ConfigError> {
        if capacity < 1 {
            return Err(ConfigError::InvalidCapacity);
        }
        if prefix_len < 1 {
            return Err(ConfigError::InvalidPrefixLength);
        }
        if word_count < 1 {
            return Err(ConfigError::InvalidWordCount);
        }

        Ok(Self {
            capacity,
            prefix_len,
            word_count,
            seed: DEFAULT_SEED,
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Reads `capacity prefix_len word_count [seed]` from a list of arguments
    ///
    /// # Note
    ///
    /// Negative sizes are accepted by the parser and then rejected by
    /// [`Config::new`] like zero is. The seed must be a non-negative integer.
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut args = args.into_iter();
        let mut next_int = |name: &'static str| -> Result<Option<i64>, ConfigError> {
            match args.next() {
                None => Ok(None),
                Some(s) => s
                    .as_ref()
                    .trim()
                    .parse::<i64>()
                    .map(Some)
                    .map_err(|_| ConfigError::NotAnInteger {
                        name,
                        value: s.as_ref().to_owned(),
                    }),
            }
        };

        let mut required = |name: &'static str| -> Result<usize, ConfigError> {
            let v = next_int(name)?.ok_or(ConfigError::MissingArgument(name))?;
            Ok(usize::try_from(v).unwrap_or(0))
        };

        let capacity = required("capacity")?;
        let prefix_len = required("prefix_len")?;
        let word_count = required("word_count")?;
        let config = Self::new(capacity, prefix_len, word_count)?;

        match args.next() {
            Some(s) => s
                .as_ref()
                .trim()
                .parse::<u64>()
                .map(|seed| config.with_seed(seed))
                .map_err(|_| ConfigError::NotAnInteger {
                    name: "seed",
                    value: s.as_ref().to_owned(),
                }),
            None => Ok(config),
        }
    }

    /// A generator seeded from `self.seed`; equal configs yield equal streams
    pub fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed)
    }
}

#[cfg(test)]
mod test {
    use super::{Config, DEFAULT_SEED};
    use crate::error::ConfigError;

    #[test]
    fn new() {
        let c = Config::new(100, 2, 50).unwrap();
        assert_eq!(c.capacity, 100);
        assert_eq!(c.prefix_len, 2);
        assert_eq!(c.word_count, 50);
        assert_eq!(c.seed, DEFAULT_SEED);
        assert_eq!(c.with_seed(3).seed, 3);
    }

    #[test]
    fn rejects_zeroes() {
        assert_eq!(Config::new(0, 1, 1), Err(ConfigError::InvalidCapacity));
        assert_eq!(Config::new(1, 0, 1), Err(ConfigError::InvalidPrefixLength));
        assert_eq!(Config::new(1, 1, 0), Err(ConfigError::InvalidWordCount));
    }

    #[test]
    fn from_args() {
        let c = Config::from_args(["10", "2", "30"]).unwrap();
        assert_eq!(c, Config::new(10, 2, 30).unwrap());

        let c = Config::from_args(["10", " 2 ", "30", "99"]).unwrap();
        assert_eq!(c.prefix_len, 2);
        assert_eq!(c.seed, 99);
    }

    #[test]
    fn from_args_errors() {
        assert_eq!(
            Config::from_args(["10", "2"]),
            Err(ConfigError::MissingArgument("word_count"))
        );
        assert_eq!(
            Config::from_args(["10", "-1", "5"]),
            Err(ConfigError::InvalidPrefixLength)
        );
        assert_eq!(
            Config::from_args(["10", "1", "0"]),
            Err(ConfigError::InvalidWordCount)
        );
        assert_eq!(
            Config::from_args(["ten", "1", "1"]),
            Err(ConfigError::NotAnInteger {
                name: "capacity",
                value: "ten".into()
            })
        );
        assert_eq!(
            Config::from_args(["10", "1", "1", "-5"]),
            Err(ConfigError::NotAnInteger {
                name: "seed",
                value: "-5".into()
            })
        );
    }
}
