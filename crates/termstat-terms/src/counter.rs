use crate::filter::TermFilter;
use crate::ranker;
use crate::tokenizer::split_identifier;
use std::collections::HashMap;
use termstat_core::{AnalyzerConfig, TermReport};

/// Accumulates term frequencies across any number of identifiers.
///
/// Counts only ever grow. The counter borrows its configuration, so stop
/// words cannot change while counting is under way.
#[derive(Debug, Clone)]
pub struct TermCounter<'a> {
    filter: TermFilter<'a>,
    terms: HashMap<String, u64>,
}

impl<'a> TermCounter<'a> {
    pub fn new(config: &'a AnalyzerConfig) -> Self {
        Self {
            filter: TermFilter::new(config),
            terms: HashMap::new(),
        }
    }

    pub fn config(&self) -> &'a AnalyzerConfig {
        self.filter.config()
    }

    /// Count one sub-word if the filter accepts it. Returns whether it was
    /// counted; rejected words are dropped silently.
    pub fn add(&mut self, word: &str) -> bool {
        match self.filter.accept(word) {
            Some(term) => {
                *self.terms.entry(term).or_insert(0) += 1;
                true
            }
            None => false,
        }
    }

    /// Split an identifier into sub-words and count each accepted one.
    /// Returns the number of terms counted.
    pub fn process_identifier(&mut self, ident: &str) -> usize {
        split_identifier(ident)
            .into_iter()
            .filter(|word| self.add(word))
            .count()
    }

    /// Fold another counter's totals into this one.
    pub fn merge(&mut self, other: TermCounter<'_>) {
        if self.terms.is_empty() {
            self.terms = other.terms;
            return;
        }
        for (term, count) in other.terms {
            *self.terms.entry(term).or_insert(0) += count;
        }
    }

    pub fn get(&self, term: &str) -> u64 {
        self.terms.get(term).copied().unwrap_or(0)
    }

    pub fn distinct_terms(&self) -> usize {
        self.terms.len()
    }

    pub fn total_occurrences(&self) -> u64 {
        self.terms.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms in unspecified order. Use [`TermCounter::report`] for output.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.terms.iter().map(|(term, count)| (term.as_str(), *count))
    }

    /// Rank the counted terms and keep the top `limit`.
    pub fn report(&self, limit: usize) -> TermReport {
        TermReport {
            terms: ranker::rank(self, limit),
            distinct_terms: self.distinct_terms(),
            total_occurrences: self.total_occurrences(),
        }
    }

    /// Report truncated to the configured `max_terms`.
    pub fn default_report(&self) -> TermReport {
        self.report(self.config().max_terms())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand::rngs::StdRng;

    #[test]
    fn add_counts_accepted_words() {
        let config = AnalyzerConfig::default();
        let mut counter = TermCounter::new(&config);
        assert!(counter.add("Request"));
        assert!(counter.add("request"));
        assert!(!counter.add("ctx"));
        assert!(!counter.add("ab"));
        assert_eq!(counter.get("request"), 2);
        assert_eq!(counter.distinct_terms(), 1);
    }

    #[test]
    fn process_identifier_splits_and_counts() {
        let config = AnalyzerConfig::default();
        let mut counter = TermCounter::new(&config);
        assert_eq!(counter.process_identifier("maxRetryCount"), 3);
        assert_eq!(counter.get("max"), 1);
        assert_eq!(counter.get("retry"), 1);
        assert_eq!(counter.get("count"), 1);
    }

    #[test]
    fn repeated_word_in_one_identifier_counts_twice() {
        let config = AnalyzerConfig::default();
        let mut counter = TermCounter::new(&config);
        counter.process_identifier("retryRetry");
        assert_eq!(counter.get("retry"), 2);
    }

    #[test]
    fn single_letters_contribute_nothing() {
        let config = AnalyzerConfig::default();
        let mut counter = TermCounter::new(&config);
        assert_eq!(counter.process_identifier("a_b_c"), 0);
        assert!(counter.is_empty());
    }

    #[test]
    fn stop_words_inside_identifiers_dropped() {
        let config = AnalyzerConfig::default();
        let mut counter = TermCounter::new(&config);
        assert_eq!(counter.process_identifier("ctxRequestTimeout"), 2);
        assert_eq!(counter.get("ctx"), 0);
        assert_eq!(counter.total_occurrences(), 2);
    }

    #[test]
    fn order_of_identifiers_does_not_matter() {
        let config = AnalyzerConfig::default();
        let idents = ["maxRetryCount", "retryPolicy", "HTTPServerAddr", "server_addr"];

        let mut forward = TermCounter::new(&config);
        idents.iter().for_each(|i| {
            forward.process_identifier(i);
        });

        let mut backward = TermCounter::new(&config);
        idents.iter().rev().for_each(|i| {
            backward.process_identifier(i);
        });

        assert_eq!(forward.terms, backward.terms);
    }

    #[test]
    fn merge_is_commutative_and_associative() {
        let config = AnalyzerConfig::default();
        let counter_for = |idents: &[&str]| {
            let mut c = TermCounter::new(&config);
            for ident in idents {
                c.process_identifier(ident);
            }
            c
        };
        let a = &["userAccount", "accountBalance"];
        let b = &["balanceSheet"];
        let c = &["sheetMetal", "userProfile"];

        let mut ab_c = counter_for(a);
        ab_c.merge(counter_for(b));
        ab_c.merge(counter_for(c));

        let mut bc = counter_for(c);
        bc.merge(counter_for(b));
        let mut a_bc = counter_for(a);
        a_bc.merge(bc);

        let mut all = counter_for(&[]);
        for ident in a.iter().chain(b).chain(c) {
            all.process_identifier(ident);
        }

        assert_eq!(ab_c.terms, a_bc.terms);
        assert_eq!(ab_c.terms, all.terms);
        assert_eq!(all.get("account"), 2);
        assert_eq!(all.get("balance"), 2);
    }

    #[test]
    fn merge_into_empty_counter() {
        let config = AnalyzerConfig::default();
        let mut empty = TermCounter::new(&config);
        let mut other = TermCounter::new(&config);
        other.add("widget");
        empty.merge(other);
        assert_eq!(empty.get("widget"), 1);
    }

    #[test]
    fn every_stored_count_is_positive() {
        let config = AnalyzerConfig::default();
        let mut counter = TermCounter::new(&config);
        for ident in ["fooBar", "BAZ_qux", "_", "", "9000", "x1y2"] {
            counter.process_identifier(ident);
        }
        assert!(counter.iter().all(|(_, count)| count >= 1));
    }

    #[test]
    fn random_input_never_panics() {
        let config = AnalyzerConfig::default();
        let mut counter = TermCounter::new(&config);
        let mut rng = StdRng::seed_from_u64(0x7e57);
        let alphabet: Vec<char> = "aZ_09éÉßİ$ \u{0}\u{200d}🦀-.".chars().collect();

        for _ in 0..5_000 {
            let len = rng.gen_range(0..24);
            let ident: String = (0..len)
                .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
                .collect();
            counter.process_identifier(&ident);
        }

        for _ in 0..1_000 {
            let bytes: Vec<u8> = (0..rng.gen_range(0..32)).map(|_| rng.r#gen()).collect();
            counter.process_identifier(&String::from_utf8_lossy(&bytes));
        }

        assert!(counter.iter().all(|(term, count)| count >= 1 && !term.is_empty()));
    }

    #[test]
    fn default_report_uses_configured_limit() {
        let config = AnalyzerConfig::default().with_max_terms(2);
        let mut counter = TermCounter::new(&config);
        for word in ["alpha", "bravo", "charlie"] {
            counter.add(word);
        }
        let report = counter.default_report();
        assert_eq!(report.len(), 2);
        assert_eq!(report.distinct_terms, 3);
        assert_eq!(report.total_occurrences, 3);
    }
}
