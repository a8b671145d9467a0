//! Recursive whole-phrase search over the school dataset
//!
//! The engine precomputes one lowercase text entry per school (name, city,
//! state) at construction time and never looks at the dataset again. A
//! phrase query is split into words and resolved by recursive narrowing:
//! each word filters the surviving candidates by substring match, words
//! that match nothing are dropped, and results narrowed below the cap are
//! backfilled from the last useful candidate pool.

use crate::app::models::School;
use crate::constants::MAX_SEARCH_RESULTS;
use tracing::debug;

/// Phrase search engine over an immutable text cache
///
/// The cache is a snapshot: changes to the dataset after construction are
/// not reflected. Build a new engine to pick them up.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    terms: Vec<String>,
}

impl SearchEngine {
    /// Build the text cache from a slice of school records, in record order
    pub fn new(schools: &[School]) -> Self {
        Self {
            terms: schools.iter().map(School::search_text).collect(),
        }
    }

    /// Build an engine over pre-normalized text entries
    pub fn from_terms(terms: Vec<String>) -> Self {
        Self { terms }
    }

    /// The cached searchable entries, in record order
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Resolve a free-text phrase into up to 3 matching cache entries
    ///
    /// The query is lowercased and split on single spaces. Matching is
    /// best-effort: a word with no matches is dropped rather than zeroing
    /// the result, and a query where no word matches anything falls back
    /// to the first entries of the cache. Never fails; returns between 0
    /// and 3 entries.
    pub fn phrase(&self, query: &str) -> Vec<String> {
        let normalized = query.to_lowercase();
        let words: Vec<&str> = normalized.split(' ').collect();
        debug!("Resolving phrase {:?} as words {:?}", query, words);

        let candidates: Vec<&str> = self.terms.iter().map(String::as_str).collect();
        Self::match_words(&words, &candidates)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Narrow the candidate set one word at a time
    ///
    /// Iterative so query length cannot exhaust the stack; the pools a
    /// narrowing step passed through are kept for the backfill unwind.
    ///
    /// Invariant: whenever `words` is nonempty, the return value holds at
    /// most `MAX_SEARCH_RESULTS` entries, all drawn from `candidates`.
    fn match_words<'a>(words: &[&str], candidates: &[&'a str]) -> Vec<&'a str> {
        let mut words = words;
        let mut current: Vec<&str> = candidates.to_vec();
        let mut pools: Vec<Vec<&str>> = Vec::new();

        let mut results = loop {
            let Some((word, rest)) = words.split_first() else {
                break current;
            };

            let filtered: Vec<&str> = current
                .iter()
                .copied()
                .filter(|term| term.contains(word))
                .collect();

            if filtered.is_empty() {
                if !rest.is_empty() {
                    // A word matching nothing is dropped, not fatal
                    words = rest;
                    continue;
                }
                // Total miss on the final word: static fallback in cache order
                break current.into_iter().take(MAX_SEARCH_RESULTS).collect();
            }

            if rest.is_empty() {
                break filtered.into_iter().take(MAX_SEARCH_RESULTS).collect();
            }

            if filtered.len() <= MAX_SEARCH_RESULTS {
                break filtered;
            }

            pools.push(filtered.clone());
            current = filtered;
            words = rest;
        };

        // Deeper narrowing may over-restrict; top the result back up from
        // the pools it passed through, innermost first, stopping cleanly
        // when a pool runs out.
        while let Some(mut pool) = pools.pop() {
            while results.len() < MAX_SEARCH_RESULTS {
                let Some(candidate) = pool.pop() else {
                    break;
                };
                if !results.contains(&candidate) {
                    results.push(candidate);
                }
            }
        }

        results
    }
}
