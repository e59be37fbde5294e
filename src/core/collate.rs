// src/core/collate.rs
// Locale-aware-ish ordering for names and titles: accents and case are folded
// for the primary comparison, the raw text breaks ties so the order stays total.

use std::cmp::Ordering;

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Primary collation key: NFD, combining marks dropped, lowercased.
pub fn fold(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

pub fn compare(a: &str, b: &str) -> Ordering {
    fold(a).cmp(&fold(b)).then_with(|| a.cmp(b))
}
