use petal::prelude::*;
use petal::widgets::dropdown::{fuzzy_filter, FuzzyFilter, OptionFilter};

#[test]
fn test_empty_query_returns_all() {
    let matches = fuzzy_filter("", &["apple", "banana"]);
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].index, 0);
    assert_eq!(matches[1].index, 1);
}

#[test]
fn test_fuzzy_matching() {
    let matches = fuzzy_filter("ap", &["apple", "banana", "apricot"]);
    let indices: Vec<usize> = matches.iter().map(|m| m.index).collect();
    assert_eq!(indices.len(), 2);
    assert!(indices.contains(&0));
    assert!(indices.contains(&2));
}

#[test]
fn test_no_matches() {
    assert!(fuzzy_filter("xyz", &["apple", "banana"]).is_empty());
}

#[test]
fn test_case_insensitive() {
    let matches = fuzzy_filter("apple", &["Apple", "BANANA"]);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].index, 0);
}

#[test]
fn test_fuzzy_filter_keeps_option_order() {
    let options = vec![
        OptionRecord::new("1", "Grapefruit"),
        OptionRecord::new("2", "Banana"),
        OptionRecord::new("3", "Grape"),
    ];

    // "Grape" scores higher than "Grapefruit" but rows stay in list order
    assert_eq!(FuzzyFilter.retain("grape", &options), vec![0, 2]);
    assert_eq!(FuzzyFilter.retain("  ", &options), vec![0, 1, 2]);
}

#[test]
fn test_closure_filter() {
    let options = vec![
        OptionRecord::new("1", "Apple").with_attribute("color", "red"),
        OptionRecord::new("2", "Banana").with_attribute("color", "yellow"),
        OptionRecord::new("3", "Cherry").with_attribute("color", "red"),
    ];
    let by_color = |query: &str, option: &OptionRecord| {
        option.get("color").and_then(|c| c.as_str()) == Some(query)
    };

    assert_eq!(by_color.retain("red", &options), vec![0, 2]);
}
