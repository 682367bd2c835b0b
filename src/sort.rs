use std::cmp::Ordering;

/// Sorts `v` in place in non-descending order by adjacent exchanges.
///
/// Equal elements never swap, so the sort is stable. Every pass runs to
/// completion, which makes the best case quadratic too.
pub fn sort<T>(v: &mut [T])
where
    T: PartialOrd,
{
    sort_by(v, |a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
}

/// Like [`sort`], swapping a pair only when `compare` returns [`Ordering::Greater`].
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let n = v.len();
    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            if compare(&v[j], &v[j + 1]) == Ordering::Greater {
                v.swap(j, j + 1);
            }
        }
    }
}
