//! Highlight range utilities.

/// Pair a flat alternating sequence of boundary offsets into closed-open
/// `[start, end)` ranges.
///
/// The match primitive reports boundaries as `[s1, e1, s2, e2, ...]`; a
/// trailing unpaired offset is dropped.
pub fn pair_boundaries(boundaries: &[usize]) -> Vec<(usize, usize)> {
    boundaries
        .chunks_exact(2)
        .map(|pair| (pair[0], pair[1]))
        .collect()
}

/// Merge overlapping or touching intervals into a minimal sorted set.
///
/// Used before flattening so the emitted ranges are non-overlapping and
/// strictly increasing even when query terms hit overlapping substrings.
pub fn merge_intervals(mut intervals: Vec<(usize, usize)>) -> Vec<(usize, usize)> {
    intervals.sort_unstable();

    let mut merged: Vec<(usize, usize)> = Vec::with_capacity(intervals.len());
    for (start, end) in intervals {
        match merged.last_mut() {
            Some(last) if start <= last.1 => last.1 = last.1.max(end),
            _ => merged.push((start, end)),
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_boundaries() {
        assert_eq!(pair_boundaries(&[0, 3]), vec![(0, 3)]);
        assert_eq!(pair_boundaries(&[0, 3, 8, 11]), vec![(0, 3), (8, 11)]);
        assert_eq!(pair_boundaries(&[]), Vec::<(usize, usize)>::new());
    }

    #[test]
    fn test_pair_boundaries_drops_trailing_odd_offset() {
        assert_eq!(pair_boundaries(&[0, 3, 8]), vec![(0, 3)]);
    }

    #[test]
    fn test_merge_disjoint_intervals() {
        assert_eq!(
            merge_intervals(vec![(8, 11), (0, 3)]),
            vec![(0, 3), (8, 11)]
        );
    }

    #[test]
    fn test_merge_overlapping_intervals() {
        assert_eq!(merge_intervals(vec![(0, 5), (3, 8)]), vec![(0, 8)]);
        assert_eq!(merge_intervals(vec![(0, 5), (0, 5)]), vec![(0, 5)]);
    }

    #[test]
    fn test_merge_touching_intervals() {
        assert_eq!(merge_intervals(vec![(0, 3), (3, 6)]), vec![(0, 6)]);
    }

    #[test]
    fn test_merge_contained_intervals() {
        assert_eq!(merge_intervals(vec![(0, 10), (2, 4)]), vec![(0, 10)]);
    }
}
