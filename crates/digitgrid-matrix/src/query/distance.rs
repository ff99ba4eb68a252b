//! Hamming distance over characters.

/// Number of positions at which `a` and `b` differ, or `None` when their
/// character counts differ.
pub fn hamming_distance(a: &str, b: &str) -> Option<usize> {
    if a.chars().count() != b.chars().count() {
        return None;
    }
    Some(a.chars().zip(b.chars()).filter(|(l, r)| l != r).count())
}

/// Keep the strings exactly `distance` away from `target`, in order.
pub fn within_distance<I, S>(items: I, target: &str, distance: usize) -> Vec<S>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .filter(|s| hamming_distance(s.as_ref(), target) == Some(distance))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        assert_eq!(hamming_distance("karolin", "kathrin"), Some(3));
        assert_eq!(hamming_distance("", ""), Some(0));
        assert_eq!(hamming_distance("abc", "ab"), None);
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        assert_eq!(hamming_distance("héllo", "hello"), Some(1));
    }

    #[test]
    fn test_within_distance() {
        let words = ["cat", "car", "cot", "dog", "cats"];
        assert_eq!(within_distance(words, "cat", 1), vec!["car", "cot"]);
        assert_eq!(within_distance(words, "cat", 0), vec!["cat"]);
    }
}
