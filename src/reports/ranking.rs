//! Shared grouping helpers for the ranking reports

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Sort `(key, value)` pairs by value descending, ties by key ascending
pub(crate) fn rank_descending<K: Ord, V: Ord>(totals: impl IntoIterator<Item = (K, V)>) -> Vec<(K, V)> {
    let mut ranked: Vec<(K, V)> = totals.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked
}

/// Count distinct `member`s per `key`, skipping rows whose key is empty
pub(crate) fn distinct_per_key<'a, T, M>(
    items: &'a [T],
    key: impl Fn(&'a T) -> &'a str,
    member: impl Fn(&'a T) -> &'a M,
) -> Vec<(String, usize)>
where
    M: Eq + Hash + 'a,
{
    let mut groups: HashMap<&str, HashSet<&M>> = HashMap::new();
    for item in items {
        let k = key(item);
        if k.is_empty() {
            continue;
        }
        groups.entry(k).or_default().insert(member(item));
    }

    rank_descending(
        groups
            .into_iter()
            .map(|(k, members)| (k.to_string(), members.len())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_descending_breaks_ties_by_key() {
        let ranked = rank_descending(vec![("b", 2), ("a", 2), ("c", 5)]);
        assert_eq!(ranked, vec![("c", 5), ("a", 2), ("b", 2)]);
    }

    #[test]
    fn test_distinct_per_key_skips_empty_keys() {
        let items = vec![("x", 1), ("x", 1), ("x", 2), ("", 3), ("y", 4)];
        let counts = distinct_per_key(&items, |i| i.0, |i| &i.1);
        assert_eq!(counts, vec![("x".to_string(), 2), ("y".to_string(), 1)]);
    }
}
