use std::io::{self, Read};

use log::{info, trace};
use markov_writer::{Config, WriterError};

/// Usage: `writer <capacity> <prefix_len> <word_count> [seed] < corpus.txt`
fn main() -> Result<(), WriterError> {
    env_logger::builder().init();

    let config = Config::from_args(std::env::args().skip(1))?;
    trace!("Config: {:#?}", config);

    let mut corpus = String::new();
    io::stdin().read_to_string(&mut corpus)?;

    let text = markov_writer::run(corpus.split_whitespace(), &config)?;
    info!("generated {} of {} words", text.len(), config.word_count);

    println!("{}", text.join(" "));
    Ok(())
}
