//! Speed and accuracy figures for a finished test.
//!
//! A "word" is five characters, as is standard for typing tests.

const CHARS_PER_WORD: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub wpm: f64,
    pub raw_wpm: f64,
    pub accuracy: f64,
    pub correct: usize,
    pub incorrect: usize,
}

impl Stats {
    pub fn compute(chars_typed: usize, mistakes: usize, secs: u64) -> Self {
        Self {
            wpm: wpm(chars_typed, mistakes, secs),
            raw_wpm: raw_wpm(chars_typed, secs),
            accuracy: accuracy(chars_typed, mistakes),
            correct: chars_typed.saturating_sub(mistakes),
            incorrect: mistakes,
        }
    }
}

fn per_minute(chars: usize, secs: u64) -> f64 {
    if secs == 0 {
        return 0.0;
    }

    (chars as f64 / CHARS_PER_WORD) * (60.0 / secs as f64)
}

/// Words per minute counting only characters that matched when typed
pub fn wpm(chars_typed: usize, mistakes: usize, secs: u64) -> f64 {
    per_minute(chars_typed.saturating_sub(mistakes), secs)
}

/// Words per minute counting every typed character
pub fn raw_wpm(chars_typed: usize, secs: u64) -> f64 {
    per_minute(chars_typed, secs)
}

/// Percentage of typed characters that matched the prompt when typed
pub fn accuracy(chars_typed: usize, mistakes: usize) -> f64 {
    if chars_typed == 0 {
        return 0.0;
    }

    (1.0 - (mistakes as f64 / chars_typed as f64)) * 100.0
}
