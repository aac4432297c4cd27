use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Error, Result};
use crate::language::Language;

/// Builds the target text for a single test
#[derive(Debug, Clone)]
pub struct PromptGenerator {
    number_of_words: usize,
}

impl PromptGenerator {
    pub fn new(number_of_words: usize) -> Self {
        Self { number_of_words }
    }

    pub fn generate(&self, language: &Language) -> Result<String> {
        self.generate_with(language, &mut rand::thread_rng())
    }

    pub fn generate_with<R: Rng + ?Sized>(
        &self,
        language: &Language,
        rng: &mut R,
    ) -> Result<String> {
        sample_prompt(&language.words, self.number_of_words, rng)
    }
}

/// Shuffle the word source and join the first `count` words with single spaces
pub fn sample_prompt<R: Rng + ?Sized>(
    words: &[String],
    count: usize,
    rng: &mut R,
) -> Result<String> {
    if words.len() < count {
        return Err(Error::InsufficientWords {
            requested: count,
            available: words.len(),
        });
    }

    let mut shuffled: Vec<&str> = words.iter().map(String::as_str).collect();
    shuffled.shuffle(rng);

    Ok(shuffled[..count].join(" "))
}
