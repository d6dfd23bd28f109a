//! Locale-aware role comparison at base strength.
//!
//! Case differences never matter. Accents only matter where the locale treats
//! the accented letter as a letter of its own (Turkish `ç`, `ğ`, `ı`, `ö`,
//! `ş`, `ü`).

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

const TURKISH_ALPHABET: &str = "abcçdefgğhıijklmnoöpqrsştuüvwxyz";
const LATIN_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

// Weight bands: whitespace < punctuation < digits < alphabet letters < other scripts.
const SPACE_WEIGHT: u32 = 0x0001;
const PUNCT_BASE: u32 = 0x0100;
const PUNCT_OTHER: u32 = 0x07FF;
const DIGIT_BASE: u32 = 0x0800;
const LETTER_BASE: u32 = 0x1000;
const OTHER_BASE: u32 = 0x0010_0000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollationLocale {
    Turkish,
    Root,
}

impl CollationLocale {
    /// `tr`, `tr-TR`, `tr_TR` (any case) select Turkish, everything else root.
    pub fn parse(locale: &str) -> Self {
        let language = locale
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        if language == "tr" {
            Self::Turkish
        } else {
            Self::Root
        }
    }

    fn alphabet(self) -> &'static str {
        match self {
            Self::Turkish => TURKISH_ALPHABET,
            Self::Root => LATIN_ALPHABET,
        }
    }
}

/// Compares role labels the way the chart orders employees within a level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleCollator {
    locale: CollationLocale,
}

impl Default for RoleCollator {
    fn default() -> Self {
        Self::new("tr")
    }
}

impl RoleCollator {
    pub fn new(locale: &str) -> Self {
        Self {
            locale: CollationLocale::parse(locale),
        }
    }

    pub fn locale(&self) -> CollationLocale {
        self.locale
    }

    /// Missing roles compare as the empty string, i.e. before every label.
    pub fn compare(&self, a: Option<&str>, b: Option<&str>) -> Ordering {
        self.sort_key(a.unwrap_or_default())
            .cmp(&self.sort_key(b.unwrap_or_default()))
    }

    /// Primary weights of `s`. Equal keys mean the labels tie.
    pub fn sort_key(&self, s: &str) -> Vec<u32> {
        let alphabet = self.locale.alphabet();
        let mut key = Vec::with_capacity(s.len());
        for c in s.nfc() {
            for folded in self.fold(c) {
                if let Some(weight) = self.letter_weight(alphabet, folded) {
                    key.push(weight);
                    continue;
                }
                // Not a letter of the alphabet: fall back to the base character
                for base in folded.to_string().nfd().filter(|b| !is_combining_mark(*b)) {
                    key.extend(self.fallback_weight(alphabet, base));
                }
            }
        }
        key
    }

    fn fold(&self, c: char) -> Vec<char> {
        match (self.locale, c) {
            (CollationLocale::Turkish, 'I') => vec!['ı'],
            (CollationLocale::Turkish, 'İ') => vec!['i'],
            _ => c.to_lowercase().collect(),
        }
    }

    fn letter_weight(&self, alphabet: &str, c: char) -> Option<u32> {
        alphabet
            .chars()
            .position(|a| a == c)
            .map(|pos| LETTER_BASE + pos as u32)
    }

    /// Weight of a character outside the alphabet; control characters carry none.
    fn fallback_weight(&self, alphabet: &str, c: char) -> Option<u32> {
        let lower = c.to_lowercase().next().unwrap_or(c);
        if let Some(weight) = self.letter_weight(alphabet, lower) {
            return Some(weight);
        }
        if let Some(digit) = lower.to_digit(10) {
            return Some(DIGIT_BASE + digit);
        }
        if lower.is_control() {
            return None;
        }
        if lower.is_whitespace() {
            return Some(SPACE_WEIGHT);
        }
        if lower.is_alphanumeric() {
            return Some(OTHER_BASE + lower as u32);
        }
        Some(punctuation_weight(lower))
    }
}

/// Typographic variants weigh the same as their ASCII counterpart; other
/// symbols share one weight at the top of the punctuation band.
fn punctuation_weight(c: char) -> u32 {
    let ascii = match c {
        '\u{2010}'..='\u{2015}' | '\u{2212}' | '\u{FE63}' | '\u{FF0D}' => '-',
        '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{2032}' => '\'',
        '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{2033}' => '"',
        '\u{2024}' | '\u{FF0E}' | '\u{3002}' => '.',
        '\u{FF0C}' | '\u{3001}' => ',',
        _ => c,
    };
    if ascii.is_ascii() {
        PUNCT_BASE + ascii as u32
    } else {
        PUNCT_OTHER
    }
}
