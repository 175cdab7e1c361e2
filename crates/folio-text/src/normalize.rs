//! Quarto to MDX cleanup.
//!
//! A [`Normalizer`] is an ordered list of [`Rule`]s, each a global
//! pattern substitution. Order matters: later rules see the output of earlier
//! ones (for example the lone em-dash rule only matches after `---` has been
//! rewritten).

use std::sync::LazyLock;

use log::debug;
use regex::{NoExpand, Regex};

use crate::error::{Result, TextError};

#[derive(Debug, Clone)]
enum Matcher {
    Pattern(Regex),
    Literal(String),
}

/// One ordered substitution.
#[derive(Debug, Clone)]
pub struct Rule {
    matcher: Matcher,
    replacement: String,
}

impl Rule {
    /// Compiles a rule. The replacement is inserted literally; `$` has no
    /// special meaning.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|source| TextError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self {
            matcher: Matcher::Pattern(pattern),
            replacement: replacement.to_string(),
        })
    }

    /// A rule matching `literal` verbatim.
    pub fn literal(literal: &str, replacement: &str) -> Self {
        Self {
            matcher: Matcher::Literal(literal.to_string()),
            replacement: replacement.to_string(),
        }
    }

    pub fn apply(&self, text: &str) -> String {
        match &self.matcher {
            Matcher::Pattern(pattern) => pattern
                .replace_all(text, NoExpand(&self.replacement))
                .into_owned(),
            Matcher::Literal(literal) => text.replace(literal.as_str(), &self.replacement),
        }
    }
}

/// Ordered list of substitutions applied to document text.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    rules: Vec<Rule>,
}

#[allow(clippy::expect_used)] // Static rule set that is guaranteed to compile
static QUARTO: LazyLock<Normalizer> = LazyLock::new(|| {
    let rules = [
        // Executable code cells do not run outside Quarto
        (r"(?s)```\{?python.*?\n.*?```", ""),
        // Attribute blocks trailing a line, e.g. `{.unnumbered}` or `{#sec-intro}`
        (r"(?m)\s*\{[^}]*\}\s*$", ""),
        (r"\{#fig-[^}]+\}", ""),
        (r"@fig-[\w-]+", "Figure"),
        (r"@tbl-[\w-]+", "Table"),
        (r"@eq-[\w-]+", "Equation"),
        (r"\[@[\w-]+\]", ""),
    ]
    .into_iter()
    .map(|(pattern, replacement)| Rule::new(pattern, replacement).expect("valid regex"));

    let mut normalizer = Normalizer::new();
    for rule in rules {
        normalizer.push(rule);
    }
    normalizer.push(Rule::literal("---", "\u{2014}"));
    normalizer.push(Rule::literal("--", "\u{2013}"));
    normalizer.push(Rule::new(r"(?m)^\s*\u{2014}\s*$", "").expect("valid regex"));
    normalizer.push(Rule::new(r"\n{3,}", "\n\n").expect("valid regex"));
    normalizer
});

impl Normalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The rule set that turns Quarto source into MDX-friendly Markdown.
    ///
    /// Strips python code cells, trailing attribute blocks and figure
    /// anchors, rewrites `@fig-`, `@tbl-` and `@eq-` references to plain
    /// words, drops `[@key]` citations, converts `---`/`--` to em/en dashes,
    /// removes lines holding only an em dash and collapses runs of blank
    /// lines. Math is left untouched.
    pub fn quarto() -> &'static Self {
        &QUARTO
    }

    /// Appends a rule; it runs after all existing rules.
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Applies every rule in order and trims the result.
    pub fn normalize(&self, text: &str) -> String {
        let cleaned = self
            .rules
            .iter()
            .fold(text.to_string(), |acc, rule| rule.apply(&acc));
        debug!(rules = self.rules.len(), input_len = text.len(), output_len = cleaned.len(); "Normalized text");
        cleaned.trim().to_string()
    }
}

/// Normalizes `text` with [`Normalizer::quarto`].
///
/// ```
/// use folio_text::normalize::normalize;
///
/// assert_eq!(
///     normalize("See @fig-map and [@nfpa2023] --- done."),
///     "See Figure and  \u{2014} done."
/// );
/// ```
pub fn normalize(text: &str) -> String {
    Normalizer::quarto().normalize(text)
}
