//! Grouping inner sequences by element-count parity.

/// Keep inner sequences with an even number of elements.
pub fn even_length<I, S, T>(seqs: I) -> Vec<S>
where
    I: IntoIterator<Item = S>,
    S: AsRef<[T]>,
{
    seqs.into_iter()
        .filter(|s| s.as_ref().len() % 2 == 0)
        .collect()
}

/// Split inner sequences into `(even, odd)` by element count, order kept.
pub fn partition_by_parity<I, S, T>(seqs: I) -> (Vec<S>, Vec<S>)
where
    I: IntoIterator<Item = S>,
    S: AsRef<[T]>,
{
    seqs.into_iter().partition(|s| s.as_ref().len() % 2 == 0)
}
