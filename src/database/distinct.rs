use std::collections::HashSet;
use std::hash::Hash;

/// Collapse join fan-out: keep the first row seen for each key, preserving order.
///
/// Queries that join through `assignment` can return the same (student, subject)
/// pair once per matching assignment row. The collapse happens here rather than
/// through `SELECT DISTINCT` so it does not depend on which columns a query projects.
pub fn distinct_by<T, K, F>(rows: Vec<T>, key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::with_capacity(rows.len());
    rows.into_iter().filter(|row| seen.insert(key(row))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_occurrence_in_order() {
        let rows = vec![(1, 10, "a"), (2, 10, "b"), (1, 10, "dup"), (1, 11, "c")];
        let out = distinct_by(rows, |r| (r.0, r.1));
        assert_eq!(out, vec![(1, 10, "a"), (2, 10, "b"), (1, 11, "c")]);
    }

    #[test]
    fn empty_input_is_empty_output() {
        let out: Vec<(i32, i32)> = distinct_by(Vec::new(), |r| *r);
        assert!(out.is_empty());
    }
}
