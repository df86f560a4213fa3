use crate::error::Error;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref WORD_RE: Regex = Regex::new(r"(?u)\p{L}[\p{L}\p{N}_']*").expect("valid regex");
}

/// How raw document text becomes terms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tokenizer {
    /// Lowercase and split on whitespace. Punctuation stays attached, so "dog." and "dog" differ.
    #[default]
    Whitespace,
    /// NFKC normalize, lowercase, keep letter-led word runs only.
    Words,
}

impl Tokenizer {
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        match self {
            Tokenizer::Whitespace => tokenize(text),
            Tokenizer::Words => tokenize_words(text),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tokenizer::Whitespace => "whitespace",
            Tokenizer::Words => "words",
        }
    }
}

impl FromStr for Tokenizer {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "whitespace" => Ok(Tokenizer::Whitespace),
            "words" => Ok(Tokenizer::Words),
            other => Err(Error::UnknownTokenizer(other.to_string())),
        }
    }
}

impl fmt::Display for Tokenizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lowercase `text` and split it on whitespace.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase().split_whitespace().map(str::to_string).collect()
}

fn tokenize_words(text: &str) -> Vec<String> {
    let normalized = text.nfkc().collect::<String>().to_lowercase();
    WORD_RE.find_iter(&normalized).map(|m| m.as_str().to_string()).collect()
}
