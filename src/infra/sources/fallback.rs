//! Local content used when a remote source fails, plus the purely local
//! sources (programming quotes and fun facts).

use rand::Rng;

pub const WEATHER_REJECTED: &str = "🌤️  Weather: Unable to fetch (check your API key)";
pub const WEATHER_CONNECTION_ERROR: &str = "🌤️  Weather: Connection error";
pub const FORECAST_REJECTED: &str = "Forecast unavailable";
pub const FORECAST_CONNECTION_ERROR: &str = "Forecast connection error";

pub const OFFLINE_QUOTES: [&str; 3] = [
    "Be yourself; everyone else is already taken. - Oscar Wilde",
    "The only way to do great work is to love what you do. - Steve Jobs",
    "Life is what happens to you while you're busy making other plans. - John Lennon",
];

pub const PROGRAMMING_QUOTES: [&str; 3] = [
    "Code is like humor. When you have to explain it, it's bad. - Cory House",
    "Programs must be written for people to read. - Harold Abelson",
    "Any fool can write code that a computer can understand. Good programmers write code that humans can understand. - Martin Fowler",
];

pub const FUN_FACTS: [&str; 5] = [
    "Honey never spoils! Archaeologists have found pots of honey in ancient Egyptian tombs that are over 3,000 years old.",
    "A group of flamingos is called a 'flamboyance'.",
    "Octopuses have three hearts and blue blood!",
    "Bananas are berries, but strawberries aren't.",
    "Wombat poop is cube-shaped.",
];

pub const OFFLINE_JOKES: [&str; 3] = [
    "Why do Java developers wear glasses? Because they don't see sharp.",
    "Why did the programmer quit his job? Because he didn't get arrays.",
    "Why do programmers prefer dark mode? Because light attracts bugs.",
];

/// Source of randomness for choosing among fixed texts.
pub trait FallbackPicker: Send + Sync {
    /// An index in `0..len`. Never called with `len == 0`.
    fn pick(&self, len: usize) -> usize;
}

/// Uniform pick from the thread-local RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPicker;

impl FallbackPicker for RandomPicker {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Always the same index (wrapped to the set size)
#[derive(Debug, Default, Clone, Copy)]
pub struct FixedPicker(pub usize);

impl FallbackPicker for FixedPicker {
    fn pick(&self, len: usize) -> usize {
        self.0 % len
    }
}

fn choose<'a>(picker: &dyn FallbackPicker, items: &[&'a str]) -> &'a str {
    match items.len() {
        0 => "",
        len => items[picker.pick(len).min(len - 1)],
    }
}

pub fn offline_quote(picker: &dyn FallbackPicker) -> String {
    format!("💭 Quote: {}", choose(picker, &OFFLINE_QUOTES))
}

pub fn programming_quote(picker: &dyn FallbackPicker) -> String {
    format!("💻 Code Quote: {}", choose(picker, &PROGRAMMING_QUOTES))
}

pub fn fun_fact(picker: &dyn FallbackPicker) -> String {
    format!("🤔 Fun Fact: {}", choose(picker, &FUN_FACTS))
}

pub fn offline_joke(picker: &dyn FallbackPicker) -> String {
    format!("😂 Joke: {}", choose(picker, &OFFLINE_JOKES))
}
