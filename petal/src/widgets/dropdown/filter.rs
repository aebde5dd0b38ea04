//! Option filtering for searchable dropdowns.

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

use crate::value::OptionRecord;

/// Decides which options the dropdown body shows for a search query.
///
/// Filtering only hides rows. Selection stays identifier based, so selected
/// options that are filtered out remain selected and keep showing in the
/// summary.
pub trait OptionFilter: Send + Sync {
    /// Indices into `options` to show, in ascending order.
    fn retain(&self, query: &str, options: &[OptionRecord]) -> Vec<usize>;
}

impl<F> OptionFilter for F
where
    F: Fn(&str, &OptionRecord) -> bool + Send + Sync,
{
    fn retain(&self, query: &str, options: &[OptionRecord]) -> Vec<usize> {
        options
            .iter()
            .enumerate()
            .filter(|(_, option)| self(query, option))
            .map(|(i, _)| i)
            .collect()
    }
}

/// Result of a fuzzy filter operation.
#[derive(Debug, Clone)]
pub struct FilterMatch {
    /// Index of the matched item in the original list.
    pub index: usize,
    /// Match score (higher is better).
    pub score: u32,
}

/// Fuzzy filter using nucleo-matcher.
///
/// Returns matches sorted by score (highest first).
/// Empty query returns all items with score 0.
pub fn fuzzy_filter(query: &str, labels: &[&str]) -> Vec<FilterMatch> {
    if query.is_empty() {
        return (0..labels.len())
            .map(|index| FilterMatch { index, score: 0 })
            .collect();
    }

    let mut matcher = Matcher::new(Config::DEFAULT);
    let pattern = Pattern::new(
        query,
        CaseMatching::Ignore,
        Normalization::Smart,
        AtomKind::Fuzzy,
    );

    let mut matches: Vec<FilterMatch> = labels
        .iter()
        .enumerate()
        .filter_map(|(index, label)| {
            let mut buf = Vec::new();
            let haystack = Utf32Str::new(label, &mut buf);
            pattern
                .score(haystack, &mut matcher)
                .map(|score| FilterMatch { index, score })
        })
        .collect();

    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches
}

/// Fuzzy match against option names, keeping the given option order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FuzzyFilter;

impl OptionFilter for FuzzyFilter {
    /// Rank is dropped: the body lists retained rows in option order.
    fn retain(&self, query: &str, options: &[OptionRecord]) -> Vec<usize> {
        let labels: Vec<&str> = options.iter().map(OptionRecord::name).collect();
        let mut indices: Vec<usize> = fuzzy_filter(query.trim(), &labels)
            .into_iter()
            .map(|m| m.index)
            .collect();
        indices.sort_unstable();
        indices
    }
}
