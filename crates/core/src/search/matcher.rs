//! Fuzzy name matching with highlight ranges.
//!
//! Pure function of (names, query): no state survives between calls, so it
//! can run from any thread and is re-evaluated on every keystroke.

use serde::Serialize;

use super::ranges::{merge_intervals, pair_boundaries};

/// One ranked name with its highlight ranges.
///
/// `index` points into the input slice. `ranges` are non-overlapping,
/// strictly increasing closed-open character-offset spans into the name;
/// empty for names that did not match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameMatch {
    /// Position of the name in the input slice.
    pub index: usize,
    /// Matched substrings as `[start, end)` character offsets.
    pub ranges: Vec<(usize, usize)>,
}

/// Rank names against a free-text query.
///
/// A name matches when the whole query occurs in it as one phrase, or
/// failing that, when every query term occurs somewhere in it
/// (case-insensitive). Matching names come first, ordered by earliest
/// match position, then by tightness of the overall matched span, ties
/// keeping input order. Non-matching names follow in their original
/// relative order with empty ranges. An empty or whitespace query matches
/// everything and changes nothing: input order, no highlights.
pub fn rank(names: &[&str], query: &str) -> Vec<NameMatch> {
    let phrase: Vec<char> = query.trim().chars().map(lowercase_char).collect();
    let terms: Vec<Vec<char>> = query
        .split_whitespace()
        .map(|term| term.chars().map(lowercase_char).collect())
        .collect();

    if terms.is_empty() {
        return names
            .iter()
            .enumerate()
            .map(|(index, _)| NameMatch {
                index,
                ranges: Vec::new(),
            })
            .collect();
    }

    let mut matched: Vec<(usize, usize, NameMatch)> = Vec::new();
    let mut unmatched: Vec<NameMatch> = Vec::new();

    for (index, name) in names.iter().enumerate() {
        let haystack: Vec<char> = name.chars().map(lowercase_char).collect();

        // A contiguous phrase hit highlights as one span; scattered terms
        // are the fallback.
        let found = find_chars(&haystack, &phrase)
            .map(|start| vec![(start, start + phrase.len())])
            .or_else(|| match_terms(&haystack, &terms));

        match found {
            Some(intervals) => {
                let merged = merge_intervals(intervals);
                let boundaries: Vec<usize> =
                    merged.iter().flat_map(|&(start, end)| [start, end]).collect();
                let ranges = pair_boundaries(&boundaries);

                let first_start = ranges.first().map(|r| r.0).unwrap_or(0);
                let span = ranges.last().map(|r| r.1).unwrap_or(0) - first_start;

                matched.push((first_start, span, NameMatch { index, ranges }));
            }
            None => unmatched.push(NameMatch {
                index,
                ranges: Vec::new(),
            }),
        }
    }

    // Stable sort keeps input order for equally-scored names.
    matched.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.cmp(&b.1)));

    matched
        .into_iter()
        .map(|(_, _, m)| m)
        .chain(unmatched)
        .collect()
}

/// Find every term in the haystack, returning one interval per term.
/// Returns `None` as soon as any term is absent.
fn match_terms(haystack: &[char], terms: &[Vec<char>]) -> Option<Vec<(usize, usize)>> {
    terms
        .iter()
        .map(|term| {
            find_chars(haystack, term).map(|start| (start, start + term.len()))
        })
        .collect()
}

/// First occurrence of `needle` in `haystack`, by character offset.
fn find_chars(haystack: &[char], needle: &[char]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

/// Char-for-char lowercasing so highlight offsets stay aligned with the
/// original name (full Unicode lowercasing can change the length).
fn lowercase_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}
