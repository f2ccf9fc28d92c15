use crate::counter::TermCounter;
use std::cmp::Ordering;
use termstat_core::RankedTerm;

/// Rank every counted term and keep the first `limit`.
///
/// Order is count descending, then word ascending by byte value, so the
/// output never depends on the counter's hash-map iteration order.
pub fn rank(counter: &TermCounter<'_>, limit: usize) -> Vec<RankedTerm> {
    let mut terms: Vec<RankedTerm> = counter
        .iter()
        .map(|(word, count)| RankedTerm::new(word, count))
        .collect();

    if limit < terms.len() {
        // Only the first `limit` positions need to be in order.
        terms.select_nth_unstable_by(limit, compare);
        terms.truncate(limit);
    }
    terms.sort_unstable_by(compare);
    terms
}

/// Total order used for reports.
pub fn compare(a: &RankedTerm, b: &RankedTerm) -> Ordering {
    b.count
        .cmp(&a.count)
        .then_with(|| a.word.as_bytes().cmp(b.word.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use termstat_core::AnalyzerConfig;

    fn counter_with<'a>(config: &'a AnalyzerConfig, counts: &[(&str, u64)]) -> TermCounter<'a> {
        let mut counter = TermCounter::new(config);
        for (word, count) in counts {
            for _ in 0..*count {
                assert!(counter.add(word), "{word} should be accepted");
            }
        }
        counter
    }

    #[test]
    fn ties_break_alphabetically() {
        let config = AnalyzerConfig::default();
        let counter = counter_with(&config, &[("zebra", 2), ("apple", 2), ("mango", 1)]);
        assert_eq!(
            rank(&counter, 3),
            vec![
                RankedTerm::new("apple", 2),
                RankedTerm::new("zebra", 2),
                RankedTerm::new("mango", 1),
            ]
        );
    }

    #[test]
    fn limit_larger_than_terms_returns_all() {
        let config = AnalyzerConfig::default();
        let counter = counter_with(&config, &[("alpha", 1), ("bravo", 3)]);
        let ranked = rank(&counter, 50);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0], RankedTerm::new("bravo", 3));
    }

    #[test]
    fn zero_limit_returns_nothing() {
        let config = AnalyzerConfig::default();
        let counter = counter_with(&config, &[("alpha", 1)]);
        assert!(rank(&counter, 0).is_empty());
    }

    #[test]
    fn empty_counter() {
        let config = AnalyzerConfig::default();
        let counter = TermCounter::new(&config);
        assert!(rank(&counter, 10).is_empty());
    }

    #[test]
    fn truncates_to_highest_ranked() {
        let config = AnalyzerConfig::default();
        let mut counter = TermCounter::new(&config);
        // 200 distinct terms: "term000" appears once, "term199" 200 times
        for i in 0..200u64 {
            let word = format!("term{i:03}");
            for _ in 0..=i {
                counter.add(&word);
            }
        }
        // a tie at the cut-off, resolved by word order
        counter.add("aaaa");
        for _ in 0..150 {
            counter.add("aaaa");
        }

        let ranked = rank(&counter, 50);
        assert_eq!(ranked.len(), 50);
        assert_eq!(ranked[0], RankedTerm::new("term199", 200));

        let mut full = rank(&counter, usize::MAX);
        full.truncate(50);
        assert_eq!(ranked, full);
        assert!(ranked.contains(&RankedTerm::new("aaaa", 151)));
        assert!(ranked.windows(2).all(|w| compare(&w[0], &w[1]) == Ordering::Less));
    }

    #[test]
    fn ranking_is_repeatable() {
        let config = AnalyzerConfig::default();
        let counter = counter_with(
            &config,
            &[("delta", 4), ("alpha", 4), ("charlie", 4), ("bravo", 4), ("echo", 1)],
        );
        let first = rank(&counter, 4);
        let second = rank(&counter, 4);
        assert_eq!(first, second);
        let words: Vec<&str> = first.iter().map(|t| t.word.as_str()).collect();
        assert_eq!(words, vec!["alpha", "bravo", "charlie", "delta"]);
    }

    #[test]
    fn byte_order_tie_break() {
        let config = AnalyzerConfig::default();
        // 'z' (0x7a) sorts before 'é' (0xc3 0xa9)
        let counter = counter_with(&config, &[("éclair", 1), ("zest", 1)]);
        let words: Vec<String> = rank(&counter, 2).into_iter().map(|t| t.word).collect();
        assert_eq!(words, vec!["zest", "éclair"]);
    }
}
