//! Mode selection.

use std::hash::Hash;

use rustc_hash::FxHashMap;

use super::value::Value;

/// Most frequent item; ties go to the one seen first. `None` when empty.
pub fn most_frequent<I>(items: I) -> Option<I::Item>
where
    I: IntoIterator,
    I::Item: Eq + Hash,
{
    let mut counts: FxHashMap<I::Item, (usize, usize)> = FxHashMap::default();
    for (position, item) in items.into_iter().enumerate() {
        counts.entry(item).or_insert((0, position)).0 += 1;
    }
    counts
        .into_iter()
        .max_by(|(_, (ca, pa)), (_, (cb, pb))| ca.cmp(cb).then(pb.cmp(pa)))
        .map(|(item, _)| item)
}

/// Every composite value belonging to the most common kind(s).
///
/// Strings and numbers are ignored. When several kinds tie, all of them are
/// returned, kinds in first-appearance order and values in input order
/// within a kind.
pub fn most_frequent_objects(values: &[Value]) -> Vec<&Value> {
    let mut slots: FxHashMap<&str, usize> = FxHashMap::default();
    let mut groups: Vec<Vec<&Value>> = Vec::new();

    for value in values.iter().filter(|v| v.is_composite()) {
        let slot = *slots.entry(value.kind_name()).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(value);
    }

    let max = groups.iter().map(Vec::len).max().unwrap_or(0);
    groups
        .into_iter()
        .filter(|g| g.len() == max)
        .flatten()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode() {
        assert_eq!(most_frequent(vec![3, 1, 3, 2, 1, 3]), Some(3));
        assert_eq!(most_frequent(Vec::<i32>::new()), None);
    }

    #[test]
    fn test_mode_tie_goes_to_first_seen() {
        assert_eq!(most_frequent(["b", "a", "a", "b", "c"]), Some("b"));
    }

    #[test]
    fn test_most_frequent_objects() {
        let values = vec![
            Value::object("Order"),
            Value::from("text"),
            Value::List(vec![]),
            Value::object("Order"),
            Value::from(5),
            Value::object("Customer"),
        ];
        let top = most_frequent_objects(&values);
        assert_eq!(top, vec![&values[0], &values[3]]);
    }

    #[test]
    fn test_most_frequent_objects_ties() {
        let values = vec![
            Value::List(vec![1.into()]),
            Value::object("Order"),
            Value::List(vec![]),
            Value::object("Order"),
        ];
        let top = most_frequent_objects(&values);
        assert_eq!(top, vec![&values[0], &values[2], &values[1], &values[3]]);
    }

    #[test]
    fn test_no_composites() {
        let values = vec![Value::from(1), Value::from("x")];
        assert!(most_frequent_objects(&values).is_empty());
    }
}
