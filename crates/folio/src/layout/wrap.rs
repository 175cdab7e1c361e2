//! Greedy word wrapping for box items.

use textwrap::{core::Fragment, wrap_algorithms::wrap_first_fit};

/// A word measured in characters, followed by a single space.
#[derive(Debug)]
struct Word<'a> {
    text: &'a str,
    chars: usize,
}

impl<'a> Word<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            chars: text.chars().count(),
        }
    }
}

impl Fragment for Word<'_> {
    fn width(&self) -> f64 {
        self.chars as f64
    }

    fn whitespace_width(&self) -> f64 {
        1.0
    }

    fn penalty_width(&self) -> f64 {
        0.0
    }
}

/// Wraps `text` at spaces so no line is longer than `max_chars` characters.
///
/// Words are never split: a single word longer than the budget sits alone
/// on its own line. Runs of whitespace collapse to one space. Text without
/// any word is returned unchanged.
///
/// ```
/// # use folio::layout::wrap_text;
/// assert_eq!(
///     wrap_text("Satellite imagery and weather feeds", 20),
///     vec!["Satellite imagery", "and weather feeds"],
/// );
/// ```
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let words: Vec<Word<'_>> = text.split_whitespace().map(Word::new).collect();
    if words.is_empty() {
        return vec![text.to_string()];
    }

    wrap_first_fit(&words, &[max_chars.max(1) as f64])
        .into_iter()
        .map(|line| {
            line.iter()
                .map(|word| word.text)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}
