use std::collections::HashMap;

use tabstat_model::{CategoricalSummary, ValueCount};

/// Distinct values with their frequencies, in first-occurrence order.
pub fn value_frequencies<'a>(values: &[&'a str]) -> Vec<(&'a str, usize)> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut frequencies: Vec<(&str, usize)> = Vec::new();
    for &value in values {
        match positions.get(value) {
            Some(&idx) => frequencies[idx].1 += 1,
            None => {
                positions.insert(value, frequencies.len());
                frequencies.push((value, 1));
            }
        }
    }
    frequencies
}

/// Summarize non-missing categorical values given in input order.
///
/// Ties in frequency are broken by first occurrence, both for `top` and for
/// the `top_k` value counts.
pub fn summarize_categorical(values: &[&str], missing: usize, top_k: usize) -> CategoricalSummary {
    let mut frequencies = value_frequencies(values);
    let unique = frequencies.len();
    // Stable sort keeps first-occurrence order among equal frequencies.
    frequencies.sort_by(|a, b| b.1.cmp(&a.1));
    let (top, freq) = match frequencies.first() {
        Some(&(value, freq)) => (Some(value.to_string()), freq),
        None => (None, 0),
    };
    let value_counts = frequencies
        .iter()
        .take(top_k)
        .map(|&(value, count)| ValueCount {
            value: value.to_string(),
            count,
        })
        .collect();

    CategoricalSummary {
        count: values.len(),
        missing,
        unique,
        top,
        freq,
        value_counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn most_common_value() {
        let summary = summarize_categorical(&["x", "y", "x", "x"], 0, 5);
        assert_eq!(summary.count, 4);
        assert_eq!(summary.unique, 2);
        assert_eq!(summary.top.as_deref(), Some("x"));
        assert_eq!(summary.freq, 3);
        assert_eq!(summary.value_counts.len(), 2);
        assert_eq!(summary.value_counts[1].value, "y");
    }

    #[test]
    fn ties_go_to_first_seen() {
        let summary = summarize_categorical(&["b", "a", "a", "b", "c"], 0, 2);
        assert_eq!(summary.top.as_deref(), Some("b"));
        assert_eq!(summary.freq, 2);
        let values: Vec<&str> = summary
            .value_counts
            .iter()
            .map(|entry| entry.value.as_str())
            .collect();
        assert_eq!(values, vec!["b", "a"]);
    }

    #[test]
    fn empty_input_has_no_top() {
        let summary = summarize_categorical(&[], 2, 5);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.missing, 2);
        assert_eq!(summary.unique, 0);
        assert!(summary.top.is_none());
        assert_eq!(summary.freq, 0);
        assert!(summary.value_counts.is_empty());
    }

    #[test]
    fn values_compare_exactly() {
        let summary = summarize_categorical(&["Yes", "yes", "Yes "], 0, 5);
        assert_eq!(summary.unique, 3);
    }
}
